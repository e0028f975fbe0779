use crate::interface_adapters::handlers::{
    login, logout, process_payment, save_payment_method, verify_token,
};
use crate::interface_adapters::middleware::require_session;
use crate::interface_adapters::state::AppState;
use axum::{middleware::from_fn_with_state, routing::post, Router};
use tower_http::{cors::CorsLayer, trace::TraceLayer};

pub fn app(state: AppState) -> Router {
    // Every route in this group resolves the bearer token before its handler runs.
    let protected = Router::new()
        .route("/verify-token", post(verify_token))
        .route("/logout", post(logout))
        .route("/process-payment", post(process_payment))
        .route("/save-payment-method", post(save_payment_method))
        .route_layer(from_fn_with_state(state.clone(), require_session));

    Router::new()
        .route("/login", post(login))
        .merge(protected)
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
        .with_state(state)
}
