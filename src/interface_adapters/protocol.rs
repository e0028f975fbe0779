use serde::{Deserialize, Serialize};
use serde_json::Value;

// Request payload for login.
#[derive(Debug, Default, Deserialize)]
pub struct LoginRequest {
    pub username: Option<String>,
}

// Response payload for login.
#[derive(Debug, Serialize)]
pub struct LoginResponse {
    pub token: String,
    pub username: String,
}

// Response payload for token verification.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct VerifyTokenResponse {
    pub success: bool,
    pub user_id: String,
}

// Plain acknowledgement used by logout and save-payment-method.
#[derive(Debug, Serialize)]
pub struct SuccessResponse {
    pub success: bool,
}

// Request payload for mock card processing. Every field is optional on the
// wire so that missing values surface as domain errors, not extractor errors.
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProcessPaymentRequest {
    pub card_number: Option<String>,
    pub card_name: Option<String>,
    pub expiry: Option<String>,
    pub cvv: Option<String>,
    pub amount: Option<f64>,
    pub currency: Option<String>,
    pub ride_id: Option<Value>,
}

// Response payload for mock card processing.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ProcessPaymentResponse {
    pub payment_id: String,
}

// Request payload for saving a card fingerprint.
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SavePaymentMethodRequest {
    pub card_number: Option<String>,
    pub card_name: Option<String>,
    pub expiry: Option<String>,
    pub ride_id: Option<Value>,
}

// Simple error envelope for JSON responses.
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub error: String,
}
