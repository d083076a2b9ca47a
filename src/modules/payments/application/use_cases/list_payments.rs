use async_trait::async_trait;

use crate::modules::access::Subject;
use crate::modules::payments::application::domain::{Payment, PaymentMethod};
use crate::modules::payments::application::ports::outgoing::payment_repository::{
    PaymentFilter, PaymentOrdering, PaymentRepository,
};
use crate::shared::error::CoreError;

#[derive(Debug, Clone, Default)]
pub struct PaymentQuery {
    pub course_id: Option<uuid::Uuid>,
    pub lesson_id: Option<uuid::Uuid>,
    pub method: Option<PaymentMethod>,
    pub ordering: PaymentOrdering,
}

/// An interface for payment listing. Staff browse every payment; everyone
/// else sees their own.
#[async_trait]
pub trait IListPaymentsUseCase: Send + Sync {
    async fn execute(
        &self,
        subject: &Subject,
        query: PaymentQuery,
    ) -> Result<Vec<Payment>, CoreError>;
}

pub struct ListPaymentsUseCase<P>
where
    P: PaymentRepository,
{
    payment_repository: P,
}

impl<P> ListPaymentsUseCase<P>
where
    P: PaymentRepository,
{
    pub fn new(payment_repository: P) -> Self {
        Self { payment_repository }
    }
}

#[async_trait]
impl<P> IListPaymentsUseCase for ListPaymentsUseCase<P>
where
    P: PaymentRepository + Send + Sync,
{
    async fn execute(
        &self,
        subject: &Subject,
        query: PaymentQuery,
    ) -> Result<Vec<Payment>, CoreError> {
        let filter = PaymentFilter {
            user_id: if subject.is_staff {
                None
            } else {
                Some(subject.id)
            },
            course_id: query.course_id,
            lesson_id: query.lesson_id,
            method: query.method,
            ordering: query.ordering,
        };

        self.payment_repository
            .list(filter)
            .await
            .map_err(CoreError::from)
    }
}
