use async_trait::async_trait;
use email_address::EmailAddress;
use std::sync::Arc;

use crate::modules::auth::application::domain::UserProfile;
use crate::modules::auth::application::ports::outgoing::{
    user_repository::{CreateUserData, UserRepository, UserRepositoryError},
    PasswordHasher,
};

const MIN_PASSWORD_LENGTH: usize = 8;

#[derive(Debug, Clone)]
pub enum RegisterUserError {
    InvalidEmail,
    WeakPassword,
    EmailAlreadyExists,
    HashingFailed(String),
    RepositoryError(String),
}

#[derive(Debug, Clone)]
pub struct RegisterUserData {
    pub email: String,
    pub password: String,
    pub first_name: String,
    pub last_name: String,
    pub phone: Option<String>,
    pub city: Option<String>,
}

/// An interface for the registration use case
#[async_trait]
pub trait IRegisterUserUseCase: Send + Sync {
    async fn execute(&self, data: RegisterUserData) -> Result<UserProfile, RegisterUserError>;
}

pub struct RegisterUserUseCase<R>
where
    R: UserRepository,
{
    user_repository: R,
    password_hasher: Arc<dyn PasswordHasher>,
}

impl<R> RegisterUserUseCase<R>
where
    R: UserRepository,
{
    pub fn new(user_repository: R, password_hasher: Arc<dyn PasswordHasher>) -> Self {
        Self {
            user_repository,
            password_hasher,
        }
    }
}

#[async_trait]
impl<R> IRegisterUserUseCase for RegisterUserUseCase<R>
where
    R: UserRepository + Send + Sync,
{
    async fn execute(&self, data: RegisterUserData) -> Result<UserProfile, RegisterUserError> {
        let email = data.email.trim().to_lowercase();
        if !EmailAddress::is_valid(&email) {
            return Err(RegisterUserError::InvalidEmail);
        }

        if data.password.len() < MIN_PASSWORD_LENGTH {
            return Err(RegisterUserError::WeakPassword);
        }

        let password_hash = self
            .password_hasher
            .hash_password(&data.password)
            .await
            .map_err(|e| RegisterUserError::HashingFailed(format!("{e:?}")))?;

        let user = self
            .user_repository
            .create_user(CreateUserData {
                email,
                password_hash,
                first_name: data.first_name,
                last_name: data.last_name,
                phone: data.phone,
                city: data.city,
            })
            .await
            .map_err(|e| match e {
                UserRepositoryError::EmailAlreadyExists => RegisterUserError::EmailAlreadyExists,
                other => RegisterUserError::RepositoryError(format!("{other:?}")),
            })?;

        Ok(user.into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::modules::auth::application::domain::User;
    use crate::modules::auth::application::ports::outgoing::password_hasher::HashError;
    use chrono::Utc;
    use uuid::Uuid;

    // -----------------------------
    // Mock UserRepository
    // -----------------------------

    #[derive(Default)]
    struct MockUserRepository {
        pub email_taken: bool,
    }

    #[async_trait]
    impl UserRepository for MockUserRepository {
        async fn create_user(&self, data: CreateUserData) -> Result<User, UserRepositoryError> {
            if self.email_taken {
                return Err(UserRepositoryError::EmailAlreadyExists);
            }
            Ok(User {
                id: Uuid::new_v4(),
                email: data.email,
                password_hash: data.password_hash,
                first_name: data.first_name,
                last_name: data.last_name,
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
            _: Uuid,
            _: crate::modules::auth::application::ports::outgoing::user_repository::UpdateProfileData,
        ) -> Result<User, UserRepositoryError> {
            unimplemented!()
        }

        async fn set_last_login(
            &self,
            _: Uuid,
            _: chrono::DateTime<Utc>,
        ) -> Result<(), UserRepositoryError> {
            unimplemented!()
        }

        async fn deactivate(&self, _: Uuid) -> Result<(), UserRepositoryError> {
            unimplemented!()
        }

        async fn deactivate_stale(
            &self,
            _: chrono::Duration,
        ) -> Result<u64, UserRepositoryError> {
            unimplemented!()
        }
    }

    struct StubHasher;

    #[async_trait]
    impl PasswordHasher for StubHasher {
        async fn hash_password(&self, password: &str) -> Result<String, HashError> {
            Ok(format!("hashed:{password}"))
        }

        async fn verify_password(&self, _: &str, _: &str) -> Result<bool, HashError> {
            Ok(true)
        }
    }

    fn request(email: &str, password: &str) -> RegisterUserData {
        RegisterUserData {
            email: email.to_string(),
            password: password.to_string(),
            first_name: "Alice".to_string(),
            last_name: "Smith".to_string(),
            phone: None,
            city: Some("Berlin".to_string()),
        }
    }

    #[tokio::test]
    async fn test_register_success_lowercases_email() {
        let use_case =
            RegisterUserUseCase::new(MockUserRepository::default(), Arc::new(StubHasher));

        let profile = use_case
            .execute(request("Alice@Example.COM", "long-enough-pw"))
            .await
            .expect("registration should succeed");

        assert_eq!(profile.email, "alice@example.com");
        assert!(profile.is_active);
    }

    #[tokio::test]
    async fn test_register_rejects_invalid_email() {
        let use_case =
            RegisterUserUseCase::new(MockUserRepository::default(), Arc::new(StubHasher));

        let result = use_case.execute(request("not-an-email", "long-enough-pw")).await;
        assert!(matches!(result, Err(RegisterUserError::InvalidEmail)));
    }

    #[tokio::test]
    async fn test_register_rejects_short_password() {
        let use_case =
            RegisterUserUseCase::new(MockUserRepository::default(), Arc::new(StubHasher));

        let result = use_case.execute(request("alice@example.com", "short")).await;
        assert!(matches!(result, Err(RegisterUserError::WeakPassword)));
    }

    #[tokio::test]
    async fn test_register_duplicate_email() {
        let use_case = RegisterUserUseCase::new(
            MockUserRepository { email_taken: true },
            Arc::new(StubHasher),
        );

        let result = use_case
            .execute(request("alice@example.com", "long-enough-pw"))
            .await;
        assert!(matches!(result, Err(RegisterUserError::EmailAlreadyExists)));
    }
}
