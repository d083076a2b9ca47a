use async_trait::async_trait;
use uuid::Uuid;

use crate::modules::catalog::application::ports::outgoing::subscription_store::{
    SubscriptionStore, ToggleOutcome,
};
use crate::shared::error::CoreError;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ToggleResult {
    pub course_id: Uuid,
    pub is_subscribed: bool,
}

/// An interface for the subscription toggle. One call flips the state;
/// two calls in a row land back where they started.
#[async_trait]
pub trait IToggleSubscriptionUseCase: Send + Sync {
    async fn execute(&self, user_id: Uuid, course_id: Uuid) -> Result<ToggleResult, CoreError>;
}

pub struct ToggleSubscriptionUseCase<S>
where
    S: SubscriptionStore,
{
    subscription_store: S,
}

impl<S> ToggleSubscriptionUseCase<S>
where
    S: SubscriptionStore,
{
    pub fn new(subscription_store: S) -> Self {
        Self { subscription_store }
    }
}

#[async_trait]
impl<S> IToggleSubscriptionUseCase for ToggleSubscriptionUseCase<S>
where
    S: SubscriptionStore + Send + Sync,
{
    async fn execute(&self, user_id: Uuid, course_id: Uuid) -> Result<ToggleResult, CoreError> {
        let outcome = self.subscription_store.toggle(user_id, course_id).await?;

        Ok(ToggleResult {
            course_id,
            is_subscribed: outcome == ToggleOutcome::Created,
        })
    }
}
