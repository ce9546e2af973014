//! Remote session verification against the identity provider

use std::time::Duration;

use anyhow::Result;
use async_trait::async_trait;
use reqwest::StatusCode;
use serde::Deserialize;
use tracing::{debug, warn};
use uuid::Uuid;

use gate_core::domain::{Session, SubscriptionStatus};
use gate_core::error::ResolveError;
use gate_core::resolvers::SessionResolver;

/// Verify-endpoint response envelope.
#[derive(Debug, Deserialize)]
struct VerifyResponse {
    active: bool,
    user_id: Option<Uuid>,
    #[serde(default)]
    roles: Vec<String>,
    #[serde(default = "default_subscription")]
    subscription_status: String,
}

fn default_subscription() -> String {
    "none".to_string()
}

/// Resolves sessions by asking the provider's verify endpoint. One POST per
/// request; the token travels as a bearer credential.
pub struct HttpSessionResolver {
    client: reqwest::Client,
    verify_url: String,
}

impl HttpSessionResolver {
    pub fn new(base_url: &str, verify_path: &str, timeout_seconds: u64) -> Result<Self> {
        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(timeout_seconds))
            .connect_timeout(Duration::from_secs(timeout_seconds))
            .build()?;

        Ok(Self {
            client,
            verify_url: format!("{}{}", base_url.trim_end_matches('/'), verify_path),
        })
    }
}

#[async_trait]
impl SessionResolver for HttpSessionResolver {
    async fn resolve(&self, token: &str) -> Result<Option<Session>, ResolveError> {
        // 1. One round-trip to the provider
        let response = self
            .client
            .post(&self.verify_url)
            .bearer_auth(token)
            .send()
            .await
            .map_err(|e| {
                if e.is_timeout() {
                    ResolveError::Timeout
                } else {
                    ResolveError::ProviderUnreachable(e.to_string())
                }
            })?;

        // 2. A provider that answers "no such session" is not a fault
        match response.status() {
            StatusCode::OK => {}
            StatusCode::UNAUTHORIZED | StatusCode::NOT_FOUND => {
                debug!("Provider reports no live session for token");
                return Ok(None);
            }
            status => {
                return Err(ResolveError::ProviderUnreachable(format!(
                    "verify endpoint returned {}",
                    status
                )));
            }
        }

        // 3. Decode and map the envelope
        let body: VerifyResponse = response
            .json()
            .await
            .map_err(|e| ResolveError::MalformedResponse(e.to_string()))?;

        if !body.active {
            debug!("Provider reports inactive session");
            return Ok(None);
        }

        let Some(user_id) = body.user_id else {
            return Err(ResolveError::MalformedResponse(
                "active session without user_id".to_string(),
            ));
        };

        let roles = Session::roles_from_tags(body.roles.iter().map(String::as_str));
        let subscription = SubscriptionStatus::from_str(&body.subscription_status)
            .unwrap_or_else(|| {
                warn!(
                    "Unknown subscription status from provider: {}",
                    body.subscription_status
                );
                SubscriptionStatus::None
            });

        Ok(Some(Session::new(user_id, roles, subscription)))
    }
}
