use axum::{
    extract::{Request, State},
    http::{header::AUTHORIZATION, StatusCode},
    middleware::Next,
    response::Response,
    Json,
};

use crate::interface_adapters::handlers::map_auth_error;
use crate::interface_adapters::protocol::ErrorResponse;
use crate::interface_adapters::state::AppState;
use crate::use_cases::verify_token::VerifyTokenUseCase;

// Identity resolved from the bearer token, attached to the request for handlers.
#[derive(Clone, Debug)]
pub struct AuthenticatedUser {
    pub token: String,
    pub user_id: String,
    pub username: String,
}

// Route layer gating every protected endpoint on a live session.
pub async fn require_session(
    State(state): State<AppState>,
    mut request: Request,
    next: Next,
) -> Result<Response, (StatusCode, Json<ErrorResponse>)> {
    // A header that is not valid UTF-8 is treated the same as a missing one.
    let authorization = request
        .headers()
        .get(AUTHORIZATION)
        .and_then(|value| value.to_str().ok())
        .map(str::to_owned);

    let use_case = VerifyTokenUseCase {
        store: state.sessions.clone(),
    };
    let verified = use_case
        .execute(authorization.as_deref())
        .await
        .map_err(map_auth_error)?;

    request.extensions_mut().insert(AuthenticatedUser {
        token: verified.token,
        user_id: verified.user_id,
        username: verified.username,
    });

    Ok(next.run(request).await)
}
