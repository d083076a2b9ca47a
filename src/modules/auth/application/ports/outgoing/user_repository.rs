use async_trait::async_trait;
use chrono::{DateTime, Duration, Utc};
use uuid::Uuid;

use crate::modules::auth::application::domain::User;
use crate::shared::error::CoreError;

#[derive(Debug, Clone, PartialEq)]
pub enum UserRepositoryError {
    EmailAlreadyExists,
    UserNotFound,
    DatabaseError(String),
}

impl From<UserRepositoryError> for CoreError {
    fn from(e: UserRepositoryError) -> Self {
        match e {
            UserRepositoryError::UserNotFound => CoreError::NotFound("User"),
            UserRepositoryError::EmailAlreadyExists => {
                CoreError::conflict("Email already registered")
            }
            UserRepositoryError::DatabaseError(msg) => CoreError::Repository(msg),
        }
    }
}

#[derive(Debug, Clone)]
pub struct CreateUserData {
    pub email: String,
    pub password_hash: String,
    pub first_name: String,
    pub last_name: String,
    pub phone: Option<String>,
    pub city: Option<String>,
}

/// Profile fields a user (or staff) may change. `None` leaves the field
/// untouched; email and roles are not editable through this path.
#[derive(Debug, Clone, Default)]
pub struct UpdateProfileData {
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub phone: Option<String>,
    pub city: Option<String>,
}

#[async_trait]
pub trait UserRepository: Send + Sync {
    async fn create_user(&self, data: CreateUserData) -> Result<User, UserRepositoryError>;

    async fn find_by_id(&self, user_id: Uuid) -> Result<Option<User>, UserRepositoryError>;

    async fn find_by_email(&self, email: &str) -> Result<Option<User>, UserRepositoryError>;

    async fn list_all(&self) -> Result<Vec<User>, UserRepositoryError>;

    async fn update_profile(
        &self,
        user_id: Uuid,
        data: UpdateProfileData,
    ) -> Result<User, UserRepositoryError>;

    async fn set_last_login(
        &self,
        user_id: Uuid,
        at: DateTime<Utc>,
    ) -> Result<(), UserRepositoryError>;

    /// Accounts are never hard-deleted; this flips `is_active` off.
    async fn deactivate(&self, user_id: Uuid) -> Result<(), UserRepositoryError>;

    /// One bulk update deactivating every active account whose last login
    /// is older than `cutoff` or that never logged in. Returns the number
    /// of rows touched; a repeat run touches zero.
    async fn deactivate_stale(&self, cutoff: Duration) -> Result<u64, UserRepositoryError>;
}
