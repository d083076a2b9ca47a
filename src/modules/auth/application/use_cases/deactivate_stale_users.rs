use async_trait::async_trait;
use chrono::Duration;

use crate::modules::auth::application::ports::outgoing::UserRepository;
use crate::shared::error::CoreError;

/// Accounts idle longer than this are switched off by the scheduled sweep.
pub const DEFAULT_STALE_AFTER_DAYS: i64 = 30;

/// An interface for the inactivity sweep. Runs on a schedule; a repeat run
/// finds nothing left to touch.
#[async_trait]
pub trait IDeactivateStaleUsersUseCase: Send + Sync {
    async fn execute(&self, cutoff: Option<Duration>) -> Result<u64, CoreError>;
}

pub struct DeactivateStaleUsersUseCase<R>
where
    R: UserRepository,
{
    user_repository: R,
}

impl<R> DeactivateStaleUsersUseCase<R>
where
    R: UserRepository,
{
    pub fn new(user_repository: R) -> Self {
        Self { user_repository }
    }
}

#[async_trait]
impl<R> IDeactivateStaleUsersUseCase for DeactivateStaleUsersUseCase<R>
where
    R: UserRepository + Send + Sync,
{
    async fn execute(&self, cutoff: Option<Duration>) -> Result<u64, CoreError> {
        let cutoff = cutoff.unwrap_or_else(|| Duration::days(DEFAULT_STALE_AFTER_DAYS));

        let affected = self.user_repository.deactivate_stale(cutoff).await?;

        if affected > 0 {
            tracing::info!(affected, "deactivated stale accounts");
        }

        Ok(affected)
    }
}
