// Domain-level errors for session workflows.
#[derive(Debug)]
pub enum AuthError {
    InvalidUsername,
    MissingToken,
    InvalidToken,
    // Adapter-reported detail, logged server-side only.
    StorageFailure(String),
}

// Domain-level errors for payment workflows.
#[derive(Debug)]
pub enum PaymentError {
    InvalidCardNumber,
    InvalidExpiry,
    InvalidCvv,
    InvalidCardholderName,
    InvalidAmount,
    // Payload lacked a field the workflow cannot run without.
    MalformedPayload(&'static str),
    StorageFailure(String),
}
