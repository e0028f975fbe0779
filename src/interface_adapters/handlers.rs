use crate::domain::errors::{AuthError, PaymentError};
use crate::interface_adapters::middleware::AuthenticatedUser;
use crate::interface_adapters::protocol::{
    ErrorResponse, LoginRequest, LoginResponse, ProcessPaymentRequest, ProcessPaymentResponse,
    SavePaymentMethodRequest, SuccessResponse, VerifyTokenResponse,
};
use crate::interface_adapters::state::{AppState, SystemClock};
use crate::use_cases::login::LoginUseCase;
use crate::use_cases::logout::LogoutUseCase;
use crate::use_cases::process_payment::ProcessPaymentUseCase;
use crate::use_cases::save_payment_method::SavePaymentMethodUseCase;
use axum::{
    extract::{rejection::JsonRejection, State},
    http::StatusCode,
    Extension, Json,
};
use tracing::{debug, error, warn};

type ApiError = (StatusCode, Json<ErrorResponse>);

// Handler for issuing a session token.
pub async fn login(
    State(state): State<AppState>,
    payload: Result<Json<LoginRequest>, JsonRejection>,
) -> Result<Json<LoginResponse>, ApiError> {
    // An unreadable body carries no usable username either.
    let payload = match payload {
        Ok(Json(payload)) => payload,
        Err(rejection) => {
            debug!(error = %rejection, "login body rejected");
            LoginRequest::default()
        }
    };

    let use_case = LoginUseCase {
        store: state.sessions.clone(),
    };

    let result = use_case.execute(payload).await.map_err(map_auth_error)?;

    Ok(Json(LoginResponse {
        token: result.token,
        username: result.username,
    }))
}

// Handler confirming the bearer token; the middleware has already resolved it.
pub async fn verify_token(
    Extension(user): Extension<AuthenticatedUser>,
) -> Json<VerifyTokenResponse> {
    debug!(user_id = %user.user_id, "verified token");

    Json(VerifyTokenResponse {
        success: true,
        user_id: user.user_id,
    })
}

// Handler for revoking the caller's session token.
pub async fn logout(
    State(state): State<AppState>,
    Extension(user): Extension<AuthenticatedUser>,
) -> Result<Json<SuccessResponse>, ApiError> {
    let use_case = LogoutUseCase {
        store: state.sessions.clone(),
    };

    use_case.execute(&user.token).await.map_err(map_auth_error)?;

    debug!(user_id = %user.user_id, username = %user.username, "logged out");

    Ok(Json(SuccessResponse { success: true }))
}

// Handler for mock card processing.
pub async fn process_payment(
    State(state): State<AppState>,
    Extension(user): Extension<AuthenticatedUser>,
    payload: Result<Json<ProcessPaymentRequest>, JsonRejection>,
) -> Result<Json<ProcessPaymentResponse>, ApiError> {
    let Json(payload) = payload.map_err(|rejection| {
        map_body_rejection(rejection, PaymentErrorContext::ProcessPayment)
    })?;

    let use_case = ProcessPaymentUseCase {
        clock: SystemClock,
        store: state.payments.clone(),
    };

    let result = use_case
        .execute(&user.user_id, payload)
        .await
        .map_err(|err| map_payment_error(err, PaymentErrorContext::ProcessPayment))?;

    debug!(user_id = %user.user_id, payment_id = %result.payment_id, "payment succeeded");

    Ok(Json(ProcessPaymentResponse {
        payment_id: result.payment_id,
    }))
}

// Handler for saving a hashed card for later reuse.
pub async fn save_payment_method(
    State(state): State<AppState>,
    Extension(user): Extension<AuthenticatedUser>,
    payload: Result<Json<SavePaymentMethodRequest>, JsonRejection>,
) -> Result<Json<SuccessResponse>, ApiError> {
    let Json(payload) = payload.map_err(|rejection| {
        map_body_rejection(rejection, PaymentErrorContext::SavePaymentMethod)
    })?;

    let use_case = SavePaymentMethodUseCase {
        store: state.payment_methods.clone(),
    };

    use_case
        .execute(&user.user_id, payload)
        .await
        .map_err(|err| map_payment_error(err, PaymentErrorContext::SavePaymentMethod))?;

    debug!(user_id = %user.user_id, "saved payment method");

    Ok(Json(SuccessResponse { success: true }))
}

// Helper to build a JSON error response.
fn error_response(status: StatusCode, message: &str) -> ApiError {
    (
        status,
        Json(ErrorResponse {
            error: message.to_string(),
        }),
    )
}

pub(crate) fn map_auth_error(err: AuthError) -> ApiError {
    match err {
        AuthError::InvalidUsername => error_response(StatusCode::BAD_REQUEST, "Username required"),
        AuthError::MissingToken => {
            error_response(StatusCode::UNAUTHORIZED, "Unauthorized: No token provided")
        }
        AuthError::InvalidToken => {
            error_response(StatusCode::UNAUTHORIZED, "Invalid or expired token")
        }
        AuthError::StorageFailure(detail) => {
            error!(%detail, "session store failure");
            error_response(StatusCode::INTERNAL_SERVER_ERROR, "Internal server error")
        }
    }
}

// Maps payment errors to HTTP responses by endpoint context.
#[derive(Clone, Copy)]
enum PaymentErrorContext {
    ProcessPayment,
    SavePaymentMethod,
}

fn internal_error(context: PaymentErrorContext) -> ApiError {
    let message = match context {
        PaymentErrorContext::ProcessPayment => "Failed to process payment",
        PaymentErrorContext::SavePaymentMethod => "Failed to save payment method",
    };
    error_response(StatusCode::INTERNAL_SERVER_ERROR, message)
}

// Unparseable JSON is a client error; JSON of the wrong shape, or no JSON
// content type at all, takes the same path as any other processing failure.
fn map_body_rejection(rejection: JsonRejection, context: PaymentErrorContext) -> ApiError {
    match rejection {
        JsonRejection::JsonSyntaxError(err) => {
            debug!(error = %err, "payment body is not valid json");
            error_response(StatusCode::BAD_REQUEST, "Invalid JSON body")
        }
        other => {
            warn!(error = %other, "payment body rejected");
            internal_error(context)
        }
    }
}

fn map_payment_error(err: PaymentError, context: PaymentErrorContext) -> ApiError {
    match err {
        PaymentError::InvalidCardNumber => {
            error_response(StatusCode::BAD_REQUEST, "Invalid card number")
        }
        PaymentError::InvalidExpiry => {
            error_response(StatusCode::BAD_REQUEST, "Invalid expiry date")
        }
        PaymentError::InvalidCvv => error_response(StatusCode::BAD_REQUEST, "Invalid CVV"),
        PaymentError::InvalidCardholderName => {
            error_response(StatusCode::BAD_REQUEST, "Invalid cardholder name")
        }
        PaymentError::InvalidAmount => error_response(StatusCode::BAD_REQUEST, "Invalid amount"),
        PaymentError::MalformedPayload(field) => {
            warn!(field, "payment payload missing required field");
            internal_error(context)
        }
        PaymentError::StorageFailure(detail) => {
            error!(%detail, "payment store failure");
            internal_error(context)
        }
    }
}
