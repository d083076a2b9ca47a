use async_trait::async_trait;
use rust_decimal::Decimal;
use std::sync::Arc;
use uuid::Uuid;

use crate::modules::catalog::application::ports::outgoing::course_repository::CourseRepository;
use crate::modules::payments::application::domain::Payment;
use crate::modules::payments::application::ports::outgoing::{
    CheckoutGateway, CheckoutGatewayError, PaymentRepository,
};
use crate::shared::error::CoreError;

#[derive(Debug, Clone)]
pub struct CheckoutInput {
    pub course_id: Option<Uuid>,
    pub amount: Decimal,
}

/// An interface for checkout initiation: record the pending payment, open
/// a provider session, persist the session reference once.
#[async_trait]
pub trait IInitiateCheckoutUseCase: Send + Sync {
    async fn execute(&self, user_id: Uuid, input: CheckoutInput) -> Result<Payment, CoreError>;
}

pub struct InitiateCheckoutUseCase<P, C>
where
    P: PaymentRepository,
    C: CourseRepository,
{
    payment_repository: P,
    course_repository: C,
    gateway: Arc<dyn CheckoutGateway>,
    currency: String,
    return_url: String,
}

impl<P, C> InitiateCheckoutUseCase<P, C>
where
    P: PaymentRepository,
    C: CourseRepository,
{
    pub fn new(
        payment_repository: P,
        course_repository: C,
        gateway: Arc<dyn CheckoutGateway>,
        currency: String,
        return_url: String,
    ) -> Self {
        Self {
            payment_repository,
            course_repository,
            gateway,
            currency,
            return_url,
        }
    }
}

#[async_trait]
impl<P, C> IInitiateCheckoutUseCase for InitiateCheckoutUseCase<P, C>
where
    P: PaymentRepository + Send + Sync,
    C: CourseRepository + Send + Sync,
{
    async fn execute(&self, user_id: Uuid, input: CheckoutInput) -> Result<Payment, CoreError> {
        // Input is rejected before anything leaves the process.
        let Some(course_id) = input.course_id else {
            return Err(CoreError::validation("A course is required for checkout"));
        };
        if input.amount <= Decimal::ZERO {
            return Err(CoreError::validation("Amount must be greater than zero"));
        }

        let course = self
            .course_repository
            .find_by_id(course_id)
            .await
            .map_err(|e| e.into_core("Course"))?
            .ok_or(CoreError::NotFound("Course"))?;

        let payment = self
            .payment_repository
            .create_pending_checkout(user_id, course_id, input.amount)
            .await
            .map_err(CoreError::from)?;

        // Gateway failure leaves the pending row without a session; the
        // client re-initiates and gets a fresh record and session.
        let price_ref = self
            .gateway
            .register_priced_item(&course.name, input.amount, &self.currency)
            .await
            .map_err(map_gateway_error)?;

        let (session_id, checkout_url) = self
            .gateway
            .open_checkout_session(&price_ref, &self.return_url, &self.return_url)
            .await
            .map_err(map_gateway_error)?;

        let enriched = self
            .payment_repository
            .attach_checkout_session(payment.id, &session_id, &checkout_url)
            .await
            .map_err(CoreError::from)?;

        Ok(enriched)
    }
}

fn map_gateway_error(e: CheckoutGatewayError) -> CoreError {
    match e {
        CheckoutGatewayError::InvalidAmount => {
            CoreError::validation("Amount does not convert to a whole number of cents")
        }
        CheckoutGatewayError::Upstream(msg) => CoreError::Upstream(msg),
    }
}
