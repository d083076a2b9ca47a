use async_trait::async_trait;

#[derive(Debug, Clone, PartialEq)]
pub enum HashError {
    HashFailed,
    VerifyFailed,
    TaskFailed,
}

/// Password hashing runs off the async executor; implementations are
/// expected to use `spawn_blocking` or equivalent.
#[async_trait]
pub trait PasswordHasher: Send + Sync {
    async fn hash_password(&self, password: &str) -> Result<String, HashError>;

    async fn verify_password(&self, password: &str, hash: &str) -> Result<bool, HashError>;
}
