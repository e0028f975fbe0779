use std::env;

// Runtime/server settings. The service has no other configuration surface.

pub const DEFAULT_HTTP_PORT: u16 = 3000;

pub fn http_port() -> u16 {
    env::var("PAYMENT_SERVER_PORT")
        .ok()
        .and_then(|value| value.parse().ok())
        .unwrap_or(DEFAULT_HTTP_PORT)
}
