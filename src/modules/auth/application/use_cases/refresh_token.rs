use async_trait::async_trait;
use std::sync::Arc;

use crate::modules::auth::application::ports::outgoing::{TokenError, TokenProvider};

#[derive(Debug, Clone)]
pub enum RefreshTokenError {
    InvalidToken,
    GenerationFailed(String),
}

/// An interface for the token refresh use case
#[async_trait]
pub trait IRefreshTokenUseCase: Send + Sync {
    async fn execute(&self, refresh_token: &str) -> Result<String, RefreshTokenError>;
}

pub struct RefreshTokenUseCase {
    token_provider: Arc<dyn TokenProvider>,
}

impl RefreshTokenUseCase {
    pub fn new(token_provider: Arc<dyn TokenProvider>) -> Self {
        Self { token_provider }
    }
}

#[async_trait]
impl IRefreshTokenUseCase for RefreshTokenUseCase {
    async fn execute(&self, refresh_token: &str) -> Result<String, RefreshTokenError> {
        self.token_provider
            .refresh_access_token(refresh_token)
            .map_err(|e| match e {
                TokenError::GenerationFailed(msg) => RefreshTokenError::GenerationFailed(msg),
                _ => RefreshTokenError::InvalidToken,
            })
    }
}
