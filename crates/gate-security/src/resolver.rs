//! Token-backed session resolver

use async_trait::async_trait;
use tracing::{debug, warn};
use uuid::Uuid;

use gate_core::domain::{Session, SubscriptionStatus};
use gate_core::error::ResolveError;
use gate_core::resolvers::SessionResolver;

use crate::token::{SessionTokenService, TokenError};

/// Resolves sessions by verifying provider-signed tokens locally, with no
/// network round-trip. A token that fails verification is an anonymous
/// request, not a fault.
pub struct TokenSessionResolver {
    tokens: SessionTokenService,
}

impl TokenSessionResolver {
    pub fn new(tokens: SessionTokenService) -> Self {
        Self { tokens }
    }
}

#[async_trait]
impl SessionResolver for TokenSessionResolver {
    async fn resolve(&self, token: &str) -> Result<Option<Session>, ResolveError> {
        // 1. Verify signature and expiry
        let claims = match self.tokens.verify(token) {
            Ok(claims) => claims,
            Err(TokenError::TokenExpired) => {
                debug!("Session token expired");
                return Ok(None);
            }
            Err(e) => {
                warn!("Rejected session token: {}", e);
                return Ok(None);
            }
        };

        // 2. Subject must be a user id
        let user_id = match Uuid::parse_str(&claims.sub) {
            Ok(id) => id,
            Err(_) => {
                warn!("Session token subject is not a user id");
                return Ok(None);
            }
        };

        // 3. Map claims onto the session model; unknown values narrow access
        let roles = Session::roles_from_tags(claims.roles.iter().map(String::as_str));
        let subscription = SubscriptionStatus::from_str(&claims.subscription)
            .unwrap_or(SubscriptionStatus::None);

        Ok(Some(Session::new(user_id, roles, subscription)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use gate_core::domain::Role;

    fn resolver(secret: &str) -> TokenSessionResolver {
        TokenSessionResolver::new(SessionTokenService::new(secret.into(), 3600))
    }

    #[tokio::test]
    async fn test_valid_token_resolves() {
        let tokens = SessionTokenService::new("secret".into(), 3600);
        let user_id = Uuid::new_v4();
        let token = tokens.issue(&user_id, &["admin", "member"], "active").unwrap();

        let session = resolver("secret").resolve(&token).await.unwrap().unwrap();
        assert_eq!(session.user_id, user_id);
        assert!(session.has_role(Role::Admin));
        assert!(session.subscription_active());
    }

    #[tokio::test]
    async fn test_tampered_token_is_anonymous() {
        let tokens = SessionTokenService::new("other-secret".into(), 3600);
        let token = tokens.issue(&Uuid::new_v4(), &["admin"], "active").unwrap();

        let resolved = resolver("secret").resolve(&token).await.unwrap();
        assert!(resolved.is_none());
    }

    #[tokio::test]
    async fn test_expired_token_is_anonymous() {
        let tokens = SessionTokenService::new("secret".into(), -3600);
        let token = tokens.issue(&Uuid::new_v4(), &[], "none").unwrap();

        let resolved = resolver("secret").resolve(&token).await.unwrap();
        assert!(resolved.is_none());
    }

    #[tokio::test]
    async fn test_unknown_subscription_value_narrows_to_none() {
        let tokens = SessionTokenService::new("secret".into(), 3600);
        let token = tokens.issue(&Uuid::new_v4(), &["member"], "trialing").unwrap();

        let session = resolver("secret").resolve(&token).await.unwrap().unwrap();
        assert_eq!(session.subscription, SubscriptionStatus::None);
    }
}
