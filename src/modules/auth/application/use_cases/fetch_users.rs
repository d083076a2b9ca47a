use async_trait::async_trait;
use uuid::Uuid;

use crate::modules::access::{self, Subject};
use crate::modules::auth::application::domain::UserProfile;
use crate::modules::auth::application::ports::outgoing::UserRepository;
use crate::shared::error::CoreError;

/// An interface for user listing and lookup
#[async_trait]
pub trait IFetchUsersUseCase: Send + Sync {
    async fn list(&self, subject: &Subject) -> Result<Vec<UserProfile>, CoreError>;

    async fn get(&self, subject: &Subject, user_id: Uuid) -> Result<UserProfile, CoreError>;
}

pub struct FetchUsersUseCase<R>
where
    R: UserRepository,
{
    user_repository: R,
}

impl<R> FetchUsersUseCase<R>
where
    R: UserRepository,
{
    pub fn new(user_repository: R) -> Self {
        Self { user_repository }
    }
}

#[async_trait]
impl<R> IFetchUsersUseCase for FetchUsersUseCase<R>
where
    R: UserRepository + Send + Sync,
{
    async fn list(&self, subject: &Subject) -> Result<Vec<UserProfile>, CoreError> {
        // Staff browse the directory; everyone else gets a list of one.
        if subject.is_staff {
            let users = self.user_repository.list_all().await?;
            return Ok(users.into_iter().map(Into::into).collect());
        }

        let me = self
            .user_repository
            .find_by_id(subject.id)
            .await?
            .ok_or(CoreError::NotFound("User"))?;

        Ok(vec![me.into()])
    }

    async fn get(&self, subject: &Subject, user_id: Uuid) -> Result<UserProfile, CoreError> {
        access::policy::authorize_profile(subject, user_id)?;

        let user = self
            .user_repository
            .find_by_id(user_id)
            .await?
            .ok_or(CoreError::NotFound("User"))?;

        Ok(user.into())
    }
}
