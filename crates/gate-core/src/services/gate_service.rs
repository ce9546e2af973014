// ============================================================================
// Gate Core - Gate Service
// File: crates/gate-core/src/services/gate_service.rs
// ============================================================================
//! Request-scoped access gate: session resolution plus policy evaluation

use std::sync::Arc;

use tracing::warn;

use crate::domain::{GateDecision, RoutePolicy, Session};
use crate::resolvers::SessionResolver;

/// Evaluates access gates for one request at a time. Holds no per-request
/// state; concurrent requests share it behind an `Arc` without locking.
pub struct GateService {
    resolver: Arc<dyn SessionResolver>,
    policy: RoutePolicy,
}

impl GateService {
    pub fn new(resolver: Arc<dyn SessionResolver>, policy: RoutePolicy) -> Self {
        Self { resolver, policy }
    }

    pub fn policy(&self) -> &RoutePolicy {
        &self.policy
    }

    /// Resolve the viewer's session, fail-closed. A missing token skips the
    /// provider call entirely; a provider fault is logged and treated as an
    /// anonymous request, never as access.
    pub async fn current_session(&self, token: Option<&str>) -> Option<Session> {
        // 1. No credential, no provider round-trip
        let token = token?;

        // 2. Ask the provider; errors collapse to "no session"
        match self.resolver.resolve(token).await {
            Ok(session) => session,
            Err(e) => {
                warn!("Session resolution failed, treating as anonymous: {}", e);
                None
            }
        }
    }

    pub async fn require_unauth(&self, token: Option<&str>) -> GateDecision {
        let session = self.current_session(token).await;
        self.policy.require_unauth(session.as_ref())
    }

    pub async fn require_auth(&self, token: Option<&str>) -> GateDecision {
        let session = self.current_session(token).await;
        self.policy.require_auth(session.as_ref())
    }

    pub async fn require_admin(&self, token: Option<&str>) -> GateDecision {
        let session = self.current_session(token).await;
        self.policy.require_admin(session.as_ref())
    }

    pub async fn require_subscription(&self, token: Option<&str>) -> GateDecision {
        let session = self.current_session(token).await;
        self.policy.require_subscription(session.as_ref())
    }
}
