use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value;

// Authenticated user record stored per bearer token.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Session {
    pub user_id: String,
    pub username: String,
}

// Settlement status of a mock payment. Only success is ever produced.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PaymentStatus {
    Succeeded,
}

// Payment written once per accepted process-payment call.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct PaymentRecord {
    pub user_id: String,
    pub ride_id: Option<Value>,
    pub amount: f64,
    pub currency: Option<String>,
    pub status: PaymentStatus,
    pub created: DateTime<Utc>,
}

// Saved card keyed by its fingerprint; the raw number never lands here.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct PaymentMethod {
    pub hashed_card_number: String,
    pub card_name: Option<String>,
    pub expiry: Option<String>,
    pub ride_id: Option<Value>,
}
