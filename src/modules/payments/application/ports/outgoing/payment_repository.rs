use async_trait::async_trait;
use rust_decimal::Decimal;
use uuid::Uuid;

use crate::modules::payments::application::domain::{Payment, PaymentMethod, PaymentStatus};
use crate::shared::error::CoreError;

#[derive(Debug, Clone, PartialEq)]
pub enum PaymentRepositoryError {
    NotFound,
    /// Guarded update matched no row: the payment is not in the expected
    /// state (or a session reference was already written).
    StateConflict,
    DatabaseError(String),
}

impl From<PaymentRepositoryError> for CoreError {
    fn from(e: PaymentRepositoryError) -> Self {
        match e {
            PaymentRepositoryError::NotFound => CoreError::NotFound("Payment"),
            PaymentRepositoryError::StateConflict => {
                CoreError::conflict("Payment is not in the expected state")
            }
            PaymentRepositoryError::DatabaseError(msg) => CoreError::Repository(msg),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PaymentOrdering {
    #[default]
    PaidAtDesc,
    PaidAtAsc,
    AmountDesc,
    AmountAsc,
}

#[derive(Debug, Clone, Default)]
pub struct PaymentFilter {
    /// Non-staff listings are pinned to the requesting user.
    pub user_id: Option<Uuid>,
    pub course_id: Option<Uuid>,
    pub lesson_id: Option<Uuid>,
    pub method: Option<PaymentMethod>,
    pub ordering: PaymentOrdering,
}

#[async_trait]
pub trait PaymentRepository: Send + Sync {
    /// Insert the pending row for a gateway checkout. Session fields start
    /// empty and are attached exactly once later.
    async fn create_pending_checkout(
        &self,
        user_id: Uuid,
        course_id: Uuid,
        amount: Decimal,
    ) -> Result<Payment, PaymentRepositoryError>;

    /// Write the provider session reference, guarded on the row still being
    /// `pending` with no session attached. A second write is a conflict.
    async fn attach_checkout_session(
        &self,
        payment_id: Uuid,
        session_id: &str,
        checkout_url: &str,
    ) -> Result<Payment, PaymentRepositoryError>;

    /// Guarded state transition: applied only while the row is still in
    /// `from`. Zero rows touched means the state moved underneath us.
    async fn advance_status(
        &self,
        payment_id: Uuid,
        from: PaymentStatus,
        to: PaymentStatus,
    ) -> Result<Payment, PaymentRepositoryError>;

    async fn list(&self, filter: PaymentFilter) -> Result<Vec<Payment>, PaymentRepositoryError>;
}
