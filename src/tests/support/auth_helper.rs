use actix_web::web;
use std::sync::Arc;
use uuid::Uuid;

use crate::modules::access::Subject;
use crate::modules::auth::adapter::outgoing::jwt::{JwtConfig, JwtTokenService};
use crate::modules::auth::application::ports::outgoing::token_provider::TokenProvider;

fn test_jwt_service() -> JwtTokenService {
    JwtTokenService::new(JwtConfig {
        secret_key: "test-secret".to_string(),
        issuer: "lms-backend".to_string(),
        access_token_expiry: 3600,
        refresh_token_expiry: 86400,
    })
}

/// `app_data` payload the `AuthenticatedUser` extractor resolves against.
pub fn test_token_provider() -> web::Data<Arc<dyn TokenProvider + Send + Sync>> {
    let provider: Arc<dyn TokenProvider + Send + Sync> = Arc::new(test_jwt_service());
    web::Data::new(provider)
}

/// Authorization header for a user with the given role flags. Must be
/// paired with `test_token_provider()` (same signing secret).
pub fn bearer_for(
    user_id: Uuid,
    is_staff: bool,
    is_moderator: bool,
) -> (&'static str, String) {
    let token = test_jwt_service()
        .issue_access_token(&Subject {
            id: user_id,
            is_staff,
            is_moderator,
        })
        .expect("failed to issue test token");

    ("Authorization", format!("Bearer {token}"))
}
