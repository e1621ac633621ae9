//! Token issuing and verification

use chrono::{Duration, Utc};
use jsonwebtoken::errors::ErrorKind;

use crate::{
    config::AuthConfig,
    error::{AppError, AppResult},
    models::auth::{TokenClaims, TokenResponse},
};

const SUBJECT: &str = "demo_user";

#[derive(Clone)]
pub struct AuthService {
    config: AuthConfig,
}

impl AuthService {
    pub fn new(config: AuthConfig) -> Self {
        Self { config }
    }

    /// Check the shared password and issue a bearer token
    pub fn login(&self, password: &str) -> AppResult<TokenResponse> {
        if password != self.config.login_password {
            return Err(AppError::Authentication("Invalid password".to_string()));
        }

        let now = Utc::now();
        let claims = TokenClaims {
            sub: SUBJECT.to_string(),
            authenticated: true,
            iat: now.timestamp(),
            exp: (now + Duration::minutes(self.config.jwt_expiration_minutes)).timestamp(),
        };

        let access_token = claims
            .create_token(&self.config.jwt_secret)
            .map_err(|e| AppError::Internal(format!("Failed to create token: {}", e)))?;

        tracing::debug!(sub = SUBJECT, "Issued access token");

        Ok(TokenResponse {
            access_token,
            token_type: "bearer".to_string(),
        })
    }

    /// Decode a bearer token, rejecting bad signatures and expired tokens
    pub fn verify(&self, token: &str) -> AppResult<TokenClaims> {
        TokenClaims::from_token(token, &self.config.jwt_secret).map_err(|e| match e.kind() {
            ErrorKind::ExpiredSignature => AppError::Authentication("Token has expired".to_string()),
            _ => AppError::Authentication("Invalid token".to_string()),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn service() -> AuthService {
        AuthService::new(AuthConfig {
            jwt_secret: "test-secret".to_string(),
            jwt_expiration_minutes: 60,
            login_password: "password".to_string(),
        })
    }

    #[test]
    fn test_login_issues_verifiable_token() {
        let auth = service();
        let response = auth.login("password").unwrap();
        assert_eq!(response.token_type, "bearer");

        let claims = auth.verify(&response.access_token).unwrap();
        assert_eq!(claims.sub, "demo_user");
        assert!(claims.authenticated);
        assert_eq!(claims.exp - claims.iat, 3600);
    }

    #[test]
    fn test_wrong_password_is_rejected() {
        let result = service().login("letmein");
        assert!(matches!(result, Err(AppError::Authentication(msg)) if msg == "Invalid password"));
    }

    #[test]
    fn test_expired_token_is_rejected() {
        let issued = Utc::now() - Duration::hours(3);
        let claims = TokenClaims {
            sub: SUBJECT.to_string(),
            authenticated: true,
            iat: issued.timestamp(),
            exp: (issued + Duration::hours(1)).timestamp(),
        };
        let token = claims.create_token("test-secret").unwrap();

        let result = service().verify(&token);
        assert!(matches!(result, Err(AppError::Authentication(msg)) if msg == "Token has expired"));
    }

    #[test]
    fn test_foreign_signature_is_rejected() {
        let other = AuthService::new(AuthConfig {
            jwt_secret: "another-secret".to_string(),
            ..AuthConfig::default()
        });
        let token = other.login("password").unwrap().access_token;

        let result = service().verify(&token);
        assert!(matches!(result, Err(AppError::Authentication(msg)) if msg == "Invalid token"));
    }
}
