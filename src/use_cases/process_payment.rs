use uuid::Uuid;

use crate::domain::entities::{PaymentRecord, PaymentStatus};
use crate::domain::errors::PaymentError;
use crate::domain::ports::{Clock, PaymentStore};
use crate::interface_adapters::protocol::ProcessPaymentRequest;
use crate::use_cases::payment_validation::{validate_card, CardDetails};

// Response returned by the process-payment use case.
pub struct ProcessPaymentResponse {
    pub payment_id: String,
}

// Mock card processing use case with injected dependencies.
pub struct ProcessPaymentUseCase<C, P> {
    pub clock: C,
    pub store: P,
}

impl<C, P> ProcessPaymentUseCase<C, P>
where
    C: Clock,
    P: PaymentStore,
{
    pub async fn execute(
        &self,
        user_id: &str,
        payload: ProcessPaymentRequest,
    ) -> Result<ProcessPaymentResponse, PaymentError> {
        let now = self.clock.now();

        validate_card(
            CardDetails {
                card_number: payload.card_number.as_deref(),
                card_name: payload.card_name.as_deref(),
                expiry: payload.expiry.as_deref(),
                cvv: payload.cvv.as_deref(),
                amount: payload.amount,
            },
            now,
        )?;

        let amount = payload.amount.ok_or(PaymentError::InvalidAmount)?;
        let payment_id = Uuid::new_v4().to_string();

        // No network is contacted: a card that passes validation always settles.
        let record = PaymentRecord {
            user_id: user_id.to_string(),
            ride_id: payload.ride_id,
            amount,
            currency: payload.currency,
            status: PaymentStatus::Succeeded,
            created: now,
        };

        self.store
            .insert(payment_id.clone(), record)
            .await
            .map_err(PaymentError::StorageFailure)?;

        Ok(ProcessPaymentResponse { payment_id })
    }
}
