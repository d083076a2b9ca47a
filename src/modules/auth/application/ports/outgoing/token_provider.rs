use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::modules::access::Subject;

#[derive(Debug, Clone, PartialEq)]
pub enum TokenError {
    InvalidToken,
    TokenExpired,
    WrongTokenType,
    GenerationFailed(String),
}

/// Claims carried by both token types. Role flags are snapshotted at issue
/// time; a role change takes effect at the next login.
#[derive(Debug, PartialEq, Serialize, Deserialize)]
pub struct TokenClaims {
    pub sub: Uuid,
    pub exp: i64,
    pub token_type: String,
    pub is_staff: bool,
    pub is_moderator: bool,
}

impl TokenClaims {
    pub fn subject(&self) -> Subject {
        Subject {
            id: self.sub,
            is_staff: self.is_staff,
            is_moderator: self.is_moderator,
        }
    }
}

pub trait TokenProvider: Send + Sync {
    fn issue_access_token(&self, subject: &Subject) -> Result<String, TokenError>;

    fn issue_refresh_token(&self, subject: &Subject) -> Result<String, TokenError>;

    fn verify_token(&self, token: &str) -> Result<TokenClaims, TokenError>;

    /// Exchange a valid refresh token for a fresh access token.
    fn refresh_access_token(&self, refresh_token: &str) -> Result<String, TokenError>;
}
