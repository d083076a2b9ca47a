use async_trait::async_trait;
use chrono::Utc;
use serde::Serialize;
use std::sync::Arc;
use utoipa::ToSchema;

use crate::modules::auth::application::domain::UserProfile;
use crate::modules::auth::application::ports::outgoing::{
    PasswordHasher, TokenProvider, UserRepository,
};

#[derive(Debug, Clone)]
pub enum LoginError {
    InvalidCredentials,
    AccountInactive,
    VerificationFailed(String),
    TokenGenerationFailed(String),
    QueryError(String),
}

impl std::fmt::Display for LoginError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            LoginError::InvalidCredentials => write!(f, "Invalid email or password"),
            LoginError::AccountInactive => write!(f, "Account is deactivated"),
            LoginError::VerificationFailed(msg) => {
                write!(f, "Password verification failed: {}", msg)
            }
            LoginError::TokenGenerationFailed(msg) => {
                write!(f, "Token generation failed: {}", msg)
            }
            LoginError::QueryError(msg) => write!(f, "Query error: {}", msg),
        }
    }
}

impl std::error::Error for LoginError {}

#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct LoginResponse {
    pub access_token: String,
    pub refresh_token: String,
    pub user: UserProfile,
}

/// An interface for the login use case
#[async_trait]
pub trait ILoginUserUseCase: Send + Sync {
    async fn execute(&self, email: &str, password: &str) -> Result<LoginResponse, LoginError>;
}

pub struct LoginUserUseCase<R>
where
    R: UserRepository,
{
    user_repository: R,
    password_hasher: Arc<dyn PasswordHasher>,
    token_provider: Arc<dyn TokenProvider>,
}

impl<R> LoginUserUseCase<R>
where
    R: UserRepository,
{
    pub fn new(
        user_repository: R,
        password_hasher: Arc<dyn PasswordHasher>,
        token_provider: Arc<dyn TokenProvider>,
    ) -> Self {
        Self {
            user_repository,
            password_hasher,
            token_provider,
        }
    }
}

#[async_trait]
impl<R> ILoginUserUseCase for LoginUserUseCase<R>
where
    R: UserRepository + Send + Sync,
{
    async fn execute(&self, email: &str, password: &str) -> Result<LoginResponse, LoginError> {
        let email = email.trim().to_lowercase();

        let user = self
            .user_repository
            .find_by_email(&email)
            .await
            .map_err(|e| LoginError::QueryError(format!("{e:?}")))?
            // Unknown email and wrong password are indistinguishable on
            // purpose.
            .ok_or(LoginError::InvalidCredentials)?;

        if !user.is_active {
            return Err(LoginError::AccountInactive);
        }

        let password_matches = self
            .password_hasher
            .verify_password(password, &user.password_hash)
            .await
            .map_err(|e| LoginError::VerificationFailed(format!("{e:?}")))?;

        if !password_matches {
            return Err(LoginError::InvalidCredentials);
        }

        let subject = user.subject();
        let access_token = self
            .token_provider
            .issue_access_token(&subject)
            .map_err(|e| LoginError::TokenGenerationFailed(format!("{e:?}")))?;
        let refresh_token = self
            .token_provider
            .issue_refresh_token(&subject)
            .map_err(|e| LoginError::TokenGenerationFailed(format!("{e:?}")))?;

        // The inactivity reaper keys off this stamp.
        self.user_repository
            .set_last_login(user.id, Utc::now())
            .await
            .map_err(|e| LoginError::QueryError(format!("{e:?}")))?;

        Ok(LoginResponse {
            access_token,
            refresh_token,
            user: user.into(),
        })
    }
}
