use async_trait::async_trait;
use uuid::Uuid;

use crate::modules::access::{self, Subject};
use crate::modules::auth::application::domain::UserProfile;
use crate::modules::auth::application::ports::outgoing::{
    user_repository::UpdateProfileData, UserRepository,
};
use crate::shared::error::CoreError;

/// An interface for profile updates
#[async_trait]
pub trait IUpdateUserUseCase: Send + Sync {
    async fn execute(
        &self,
        subject: &Subject,
        target_user_id: Uuid,
        data: UpdateProfileData,
    ) -> Result<UserProfile, CoreError>;
}

pub struct UpdateUserUseCase<R>
where
    R: UserRepository,
{
    user_repository: R,
}

impl<R> UpdateUserUseCase<R>
where
    R: UserRepository,
{
    pub fn new(user_repository: R) -> Self {
        Self { user_repository }
    }
}

#[async_trait]
impl<R> IUpdateUserUseCase for UpdateUserUseCase<R>
where
    R: UserRepository + Send + Sync,
{
    async fn execute(
        &self,
        subject: &Subject,
        target_user_id: Uuid,
        data: UpdateProfileData,
    ) -> Result<UserProfile, CoreError> {
        access::policy::authorize_profile(subject, target_user_id)?;

        let updated = self
            .user_repository
            .update_profile(target_user_id, data)
            .await?;

        Ok(updated.into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::modules::auth::application::domain::User;
    use crate::modules::auth::application::ports::outgoing::user_repository::{
        CreateUserData, UserRepositoryError,
    };
    use chrono::{DateTime, Duration, Utc};

    struct MockUserRepository;

    #[async_trait]
    impl UserRepository for MockUserRepository {
        async fn create_user(&self, _: CreateUserData) -> Result<User, UserRepositoryError> {
            unimplemented!()
        }

        async fn find_by_id(&self, _: Uuid) -> Result<Option<User>, UserRepositoryError> {
            unimplemented!()
        }

        async fn find_by_email(&self, _: &str) -> Result<Option<User>, UserRepositoryError> {
            unimplemented!()
        }

        async fn list_all(&self) -> Result<Vec<User>, UserRepositoryError> {
            unimplemented!()
        }

        async fn update_profile(
            &self,
            user_id: Uuid,
            data: UpdateProfileData,
        ) -> Result<User, UserRepositoryError> {
            Ok(User {
                id: user_id,
                email: "user@example.com".to_string(),
                password_hash: "hash".to_string(),
                first_name: data.first_name.unwrap_or_else(|| "Old".to_string()),
                last_name: data.last_name.unwrap_or_else(|| "Name".to_string()),
                phone: data.phone,
                city: data.city,
                is_staff: false,
                is_moderator: false,
                is_active: true,
                last_login: None,
                created_at: Utc::now(),
                updated_at: Utc::now(),
            })
        }

        async fn set_last_login(
            &self,
            _: Uuid,
            _: DateTime<Utc>,
        ) -> Result<(), UserRepositoryError> {
            unimplemented!()
        }

        async fn deactivate(&self, _: Uuid) -> Result<(), UserRepositoryError> {
            unimplemented!()
        }

        async fn deactivate_stale(&self, _: Duration) -> Result<u64, UserRepositoryError> {
            unimplemented!()
        }
    }

    #[tokio::test]
    async fn test_user_updates_own_profile() {
        let use_case = UpdateUserUseCase::new(MockUserRepository);
        let me = Subject {
            id: Uuid::new_v4(),
            is_staff: false,
            is_moderator: false,
        };

        let profile = use_case
            .execute(
                &me,
                me.id,
                UpdateProfileData {
                    first_name: Some("Updated".to_string()),
                    ..Default::default()
                },
            )
            .await
            .expect("self-update should be allowed");

        assert_eq!(profile.first_name, "Updated");
    }

    #[tokio::test]
    async fn test_staff_updates_any_profile() {
        let use_case = UpdateUserUseCase::new(MockUserRepository);
        let staff = Subject {
            id: Uuid::new_v4(),
            is_staff: true,
            is_moderator: false,
        };

        let result = use_case
            .execute(&staff, Uuid::new_v4(), UpdateProfileData::default())
            .await;
        assert!(result.is_ok());
    }

    #[tokio::test]
    async fn test_regular_cannot_update_other_profile() {
        let use_case = UpdateUserUseCase::new(MockUserRepository);
        let me = Subject {
            id: Uuid::new_v4(),
            is_staff: false,
            is_moderator: false,
        };

        let result = use_case
            .execute(&me, Uuid::new_v4(), UpdateProfileData::default())
            .await;
        assert!(matches!(result, Err(CoreError::PermissionDenied(_))));
    }
}
