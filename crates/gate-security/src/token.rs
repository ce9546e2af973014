//! Session token handling

use chrono::{Duration, Utc};
use jsonwebtoken::{decode, encode, errors::ErrorKind, DecodingKey, EncodingKey, Header, Validation};
use serde::{Deserialize, Serialize};
use thiserror::Error;
use uuid::Uuid;

#[derive(Error, Debug)]
pub enum TokenError {
    #[error("Token creation failed: {0}")]
    CreationError(String),
    #[error("Token validation failed: {0}")]
    ValidationError(String),
    #[error("Token expired")]
    TokenExpired,
}

/// Claims carried by a provider-issued session token.
#[derive(Debug, Serialize, Deserialize)]
pub struct SessionClaims {
    pub sub: String,
    pub iat: i64,
    pub exp: i64,
    #[serde(default)]
    pub roles: Vec<String>,
    #[serde(default = "default_subscription")]
    pub subscription: String,
}

fn default_subscription() -> String {
    "none".to_string()
}

pub struct SessionTokenService {
    secret: String,
    session_ttl: i64,
}

impl SessionTokenService {
    pub fn new(secret: String, session_ttl: i64) -> Self {
        Self { secret, session_ttl }
    }

    /// Mint a session token. Production tokens come from the provider; this
    /// exists for tests and local tooling.
    pub fn issue(
        &self,
        user_id: &Uuid,
        roles: &[&str],
        subscription: &str,
    ) -> Result<String, TokenError> {
        let now = Utc::now();
        let claims = SessionClaims {
            sub: user_id.to_string(),
            iat: now.timestamp(),
            exp: (now + Duration::seconds(self.session_ttl)).timestamp(),
            roles: roles.iter().map(|r| r.to_string()).collect(),
            subscription: subscription.to_string(),
        };
        encode(
            &Header::default(),
            &claims,
            &EncodingKey::from_secret(self.secret.as_bytes()),
        )
        .map_err(|e| TokenError::CreationError(e.to_string()))
    }

    pub fn verify(&self, token: &str) -> Result<SessionClaims, TokenError> {
        decode::<SessionClaims>(
            token,
            &DecodingKey::from_secret(self.secret.as_bytes()),
            &Validation::default(),
        )
        .map(|data| data.claims)
        .map_err(|e| match e.kind() {
            ErrorKind::ExpiredSignature => TokenError::TokenExpired,
            _ => TokenError::ValidationError(e.to_string()),
        })
    }
}
