use chrono::{Duration, Utc};
use jsonwebtoken::{decode, encode, Algorithm, DecodingKey, EncodingKey, Header, Validation};

use crate::modules::access::Subject;
use crate::modules::auth::application::ports::outgoing::token_provider::{
    TokenClaims, TokenError, TokenProvider,
};

use super::jwt_config::JwtConfig;

#[derive(Clone)]
pub struct JwtTokenService {
    config: JwtConfig,
    encoding_key: EncodingKey,
    decoding_key: DecodingKey,
}

impl JwtTokenService {
    pub fn new(config: JwtConfig) -> Self {
        let encoding_key = EncodingKey::from_secret(config.secret_key.as_bytes());
        let decoding_key = DecodingKey::from_secret(config.secret_key.as_bytes());

        Self {
            config,
            encoding_key,
            decoding_key,
        }
    }

    fn issue(&self, subject: &Subject, token_type: &str, ttl: i64) -> Result<String, TokenError> {
        let expiration = Utc::now() + Duration::seconds(ttl);
        let claims = TokenClaims {
            sub: subject.id,
            exp: expiration.timestamp(),
            token_type: token_type.to_string(),
            is_staff: subject.is_staff,
            is_moderator: subject.is_moderator,
        };

        encode(&Header::new(Algorithm::HS256), &claims, &self.encoding_key)
            .map_err(|e| TokenError::GenerationFailed(e.to_string()))
    }
}

impl TokenProvider for JwtTokenService {
    fn issue_access_token(&self, subject: &Subject) -> Result<String, TokenError> {
        self.issue(subject, "access", self.config.access_token_expiry)
    }

    fn issue_refresh_token(&self, subject: &Subject) -> Result<String, TokenError> {
        self.issue(subject, "refresh", self.config.refresh_token_expiry)
    }

    fn verify_token(&self, token: &str) -> Result<TokenClaims, TokenError> {
        let mut validation = Validation::new(Algorithm::HS256);
        validation.validate_exp = false; // enforced manually below

        let decoded = decode::<TokenClaims>(token, &self.decoding_key, &validation)
            .map_err(|_| TokenError::InvalidToken)?;

        if decoded.claims.exp < Utc::now().timestamp() {
            return Err(TokenError::TokenExpired);
        }

        Ok(decoded.claims)
    }

    fn refresh_access_token(&self, refresh_token: &str) -> Result<String, TokenError> {
        let claims = self.verify_token(refresh_token)?;

        if claims.token_type != "refresh" {
            return Err(TokenError::WrongTokenType);
        }

        self.issue_access_token(&claims.subject())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use uuid::Uuid;

    fn test_service(access_expiry: i64) -> JwtTokenService {
        JwtTokenService::new(JwtConfig {
            secret_key: "test-secret".to_string(),
            issuer: "lms-backend".to_string(),
            access_token_expiry: access_expiry,
            refresh_token_expiry: 86400,
        })
    }

    fn moderator_subject() -> Subject {
        Subject {
            id: Uuid::new_v4(),
            is_staff: false,
            is_moderator: true,
        }
    }

    #[test]
    fn test_roundtrip_preserves_role_claims() {
        let service = test_service(3600);
        let subject = moderator_subject();

        let token = service
            .issue_access_token(&subject)
            .expect("token should be generated");

        let claims = service.verify_token(&token).expect("token should be valid");
        assert_eq!(claims.sub, subject.id);
        assert_eq!(claims.token_type, "access");
        assert!(claims.is_moderator);
        assert!(!claims.is_staff);
        assert_eq!(claims.subject(), subject);
    }

    #[test]
    fn test_garbage_token_rejected() {
        let service = test_service(3600);
        assert_eq!(
            service.verify_token("not.a.jwt"),
            Err(TokenError::InvalidToken)
        );
    }

    #[test]
    fn test_expired_token_rejected() {
        let service = test_service(-60); // already expired at issue time
        let token = service
            .issue_access_token(&moderator_subject())
            .expect("token should be generated");

        assert_eq!(service.verify_token(&token), Err(TokenError::TokenExpired));
    }

    #[test]
    fn test_access_token_cannot_refresh() {
        let service = test_service(3600);
        let access = service
            .issue_access_token(&moderator_subject())
            .expect("token should be generated");

        assert_eq!(
            service.refresh_access_token(&access),
            Err(TokenError::WrongTokenType)
        );
    }

    #[test]
    fn test_refresh_produces_valid_access_token() {
        let service = test_service(3600);
        let subject = moderator_subject();
        let refresh = service
            .issue_refresh_token(&subject)
            .expect("token should be generated");

        let access = service
            .refresh_access_token(&refresh)
            .expect("refresh should succeed");
        let claims = service.verify_token(&access).expect("new token valid");
        assert_eq!(claims.token_type, "access");
        assert_eq!(claims.sub, subject.id);
    }
}
