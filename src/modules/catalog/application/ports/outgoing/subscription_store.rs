use async_trait::async_trait;
use uuid::Uuid;

use crate::shared::error::CoreError;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToggleOutcome {
    Created,
    Removed,
}

#[derive(Debug, Clone, PartialEq)]
pub enum SubscriptionStoreError {
    CourseNotFound,
    DatabaseError(String),
}

impl From<SubscriptionStoreError> for CoreError {
    fn from(e: SubscriptionStoreError) -> Self {
        match e {
            SubscriptionStoreError::CourseNotFound => CoreError::NotFound("Course"),
            SubscriptionStoreError::DatabaseError(msg) => CoreError::Repository(msg),
        }
    }
}

/// Subscription state is row existence, nothing else. Implementations must
/// make `toggle` atomic against concurrent calls for the same
/// (user, course) pair.
#[async_trait]
pub trait SubscriptionStore: Send + Sync {
    async fn toggle(
        &self,
        user_id: Uuid,
        course_id: Uuid,
    ) -> Result<ToggleOutcome, SubscriptionStoreError>;

    async fn is_subscribed(
        &self,
        user_id: Uuid,
        course_id: Uuid,
    ) -> Result<bool, SubscriptionStoreError>;
}
