pub mod login;
pub mod logout;
pub mod payment_validation;
pub mod process_payment;
pub mod save_payment_method;
pub mod verify_token;

#[cfg(test)]
pub(crate) mod test_support;
