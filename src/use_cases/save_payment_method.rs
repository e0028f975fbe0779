use sha2::{Digest, Sha256};

use crate::domain::entities::PaymentMethod;
use crate::domain::errors::PaymentError;
use crate::domain::ports::PaymentMethodStore;
use crate::interface_adapters::protocol::SavePaymentMethodRequest;

// Save-payment-method use case with injected dependencies.
//
// Card details are stored as given: the card validator is not applied here.
pub struct SavePaymentMethodUseCase<M> {
    pub store: M,
}

impl<M> SavePaymentMethodUseCase<M>
where
    M: PaymentMethodStore,
{
    pub async fn execute(
        &self,
        user_id: &str,
        payload: SavePaymentMethodRequest,
    ) -> Result<(), PaymentError> {
        let card_number = payload
            .card_number
            .ok_or(PaymentError::MalformedPayload("cardNumber"))?;

        let method = PaymentMethod {
            hashed_card_number: card_fingerprint(&card_number),
            card_name: payload.card_name,
            expiry: payload.expiry,
            ride_id: payload.ride_id,
        };

        self.store
            .append(user_id, method)
            .await
            .map_err(PaymentError::StorageFailure)
    }
}

/// Lowercase hex SHA-256 of the raw card number.
pub fn card_fingerprint(card_number: &str) -> String {
    hex::encode(Sha256::digest(card_number.as_bytes()))
}
