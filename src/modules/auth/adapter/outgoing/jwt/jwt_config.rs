#[derive(Debug, Clone)]
pub struct JwtConfig {
    pub secret_key: String,
    pub issuer: String,
    pub access_token_expiry: i64,
    pub refresh_token_expiry: i64,
}

impl JwtConfig {
    pub fn from_env() -> Self {
        Self {
            secret_key: std::env::var("JWT_SECRET_KEY").expect("JWT_SECRET_KEY not set"),
            issuer: std::env::var("JWT_ISSUER").unwrap_or_else(|_| "lms-backend".to_string()),
            access_token_expiry: std::env::var("JWT_ACCESS_EXPIRY_SECONDS")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(900), // 15 minutes
            refresh_token_expiry: std::env::var("JWT_REFRESH_EXPIRY_SECONDS")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(7 * 24 * 3600), // 7 days
        }
    }
}
