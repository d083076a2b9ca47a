use async_trait::async_trait;
use uuid::Uuid;

use crate::modules::access::Subject;
use crate::modules::payments::application::domain::{Payment, PaymentStatus};
use crate::modules::payments::application::ports::outgoing::PaymentRepository;
use crate::shared::error::CoreError;

/// An interface for manual payment settlement by staff (reconciling a
/// checkout against the provider dashboard). The transition is guarded:
/// a payment already past the expected state conflicts instead of being
/// overwritten.
#[async_trait]
pub trait ISettlePaymentUseCase: Send + Sync {
    async fn execute(
        &self,
        subject: &Subject,
        payment_id: Uuid,
        target: PaymentStatus,
    ) -> Result<Payment, CoreError>;
}

pub struct SettlePaymentUseCase<P>
where
    P: PaymentRepository,
{
    payment_repository: P,
}

impl<P> SettlePaymentUseCase<P>
where
    P: PaymentRepository,
{
    pub fn new(payment_repository: P) -> Self {
        Self { payment_repository }
    }
}

#[async_trait]
impl<P> ISettlePaymentUseCase for SettlePaymentUseCase<P>
where
    P: PaymentRepository + Send + Sync,
{
    async fn execute(
        &self,
        subject: &Subject,
        payment_id: Uuid,
        target: PaymentStatus,
    ) -> Result<Payment, CoreError> {
        if !subject.is_staff {
            return Err(CoreError::permission_denied(
                "Only staff can settle payments",
            ));
        }

        let Some(from) = target.required_predecessor() else {
            return Err(CoreError::validation(
                "A payment cannot be moved back to its initial state",
            ));
        };

        self.payment_repository
            .advance_status(payment_id, from, target)
            .await
            .map_err(CoreError::from)
    }
}
