use async_trait::async_trait;
use uuid::Uuid;

use crate::modules::access::{self, Subject};
use crate::modules::auth::application::ports::outgoing::UserRepository;
use crate::shared::error::CoreError;

/// An interface for account deactivation. Accounts are switched off, not
/// deleted; payment history keeps pointing at them.
#[async_trait]
pub trait IDeactivateUserUseCase: Send + Sync {
    async fn execute(&self, subject: &Subject, target_user_id: Uuid) -> Result<(), CoreError>;
}

pub struct DeactivateUserUseCase<R>
where
    R: UserRepository,
{
    user_repository: R,
}

impl<R> DeactivateUserUseCase<R>
where
    R: UserRepository,
{
    pub fn new(user_repository: R) -> Self {
        Self { user_repository }
    }
}

#[async_trait]
impl<R> IDeactivateUserUseCase for DeactivateUserUseCase<R>
where
    R: UserRepository + Send + Sync,
{
    async fn execute(&self, subject: &Subject, target_user_id: Uuid) -> Result<(), CoreError> {
        access::policy::authorize_profile(subject, target_user_id)?;

        self.user_repository.deactivate(target_user_id).await?;
        Ok(())
    }
}
