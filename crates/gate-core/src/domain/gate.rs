// ============================================================================
// Gate Core - Gate Policy
// File: crates/gate-core/src/domain/gate.rs
// Description: Pure access decisions over an optional session
// ============================================================================

use serde::{Deserialize, Serialize};

use gate_shared::constants;

use crate::domain::session::{Role, Session};

/// Outcome of evaluating a gate against a session. A denial always names the
/// path the viewer must be sent to; an allow never does.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum GateDecision {
    Allow,
    Deny { target: String },
}

impl GateDecision {
    fn deny(target: &str) -> Self {
        GateDecision::Deny {
            target: target.to_string(),
        }
    }

    pub fn is_allow(&self) -> bool {
        matches!(self, GateDecision::Allow)
    }
}

/// Redirect targets for denied requests. Paths are configuration, not
/// structure; defaults come from the shared constants.
#[derive(Debug, Clone)]
pub struct RoutePolicy {
    pub home: String,
    pub login: String,
    pub unauthorized: String,
    pub subscribe: String,
}

impl Default for RoutePolicy {
    fn default() -> Self {
        Self {
            home: constants::HOME_PATH.to_string(),
            login: constants::LOGIN_PATH.to_string(),
            unauthorized: constants::UNAUTHORIZED_PATH.to_string(),
            subscribe: constants::SUBSCRIBE_PATH.to_string(),
        }
    }
}

impl RoutePolicy {
    /// Gate for pages only anonymous viewers should see (login,
    /// reset-password). A viewer with a session is sent home.
    pub fn require_unauth(&self, session: Option<&Session>) -> GateDecision {
        match session {
            Some(_) => GateDecision::deny(&self.home),
            None => GateDecision::Allow,
        }
    }

    pub fn require_auth(&self, session: Option<&Session>) -> GateDecision {
        match session {
            Some(_) => GateDecision::Allow,
            None => GateDecision::deny(&self.login),
        }
    }

    /// Identity is checked before role: an anonymous viewer goes to login,
    /// never to the unauthorized page.
    pub fn require_admin(&self, session: Option<&Session>) -> GateDecision {
        match session {
            None => GateDecision::deny(&self.login),
            Some(s) if s.has_role(Role::Admin) => GateDecision::Allow,
            Some(_) => GateDecision::deny(&self.unauthorized),
        }
    }

    /// Identity is checked before entitlement, same ordering as
    /// `require_admin`.
    pub fn require_subscription(&self, session: Option<&Session>) -> GateDecision {
        match session {
            None => GateDecision::deny(&self.login),
            Some(s) if s.subscription_active() => GateDecision::Allow,
            Some(_) => GateDecision::deny(&self.subscribe),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::session::SubscriptionStatus;
    use std::collections::HashSet;
    use uuid::Uuid;

    fn session_with(roles: &[Role], subscription: SubscriptionStatus) -> Session {
        Session::new(
            Uuid::new_v4(),
            roles.iter().copied().collect::<HashSet<_>>(),
            subscription,
        )
    }

    fn deny_target(decision: GateDecision) -> String {
        match decision {
            GateDecision::Deny { target } => target,
            GateDecision::Allow => panic!("expected a denial"),
        }
    }

    #[test]
    fn test_require_unauth_allows_anonymous() {
        let policy = RoutePolicy::default();
        assert!(policy.require_unauth(None).is_allow());
    }

    #[test]
    fn test_require_unauth_sends_authenticated_home() {
        let policy = RoutePolicy::default();
        let session = session_with(&[Role::Member], SubscriptionStatus::None);
        assert_eq!(deny_target(policy.require_unauth(Some(&session))), "/home");
    }

    #[test]
    fn test_require_auth() {
        let policy = RoutePolicy::default();
        let session = session_with(&[], SubscriptionStatus::None);
        assert!(policy.require_auth(Some(&session)).is_allow());
        assert_eq!(deny_target(policy.require_auth(None)), "/login");
    }

    #[test]
    fn test_require_admin_anonymous_goes_to_login() {
        // Auth before role: never the unauthorized page for anonymous viewers
        let policy = RoutePolicy::default();
        assert_eq!(deny_target(policy.require_admin(None)), "/login");
    }

    #[test]
    fn test_require_admin_non_admin_is_unauthorized() {
        let policy = RoutePolicy::default();
        let session = session_with(&[Role::Member, Role::Moderator], SubscriptionStatus::Active);
        assert_eq!(
            deny_target(policy.require_admin(Some(&session))),
            "/unauthorized"
        );
    }

    #[test]
    fn test_require_admin_allows_admin() {
        let policy = RoutePolicy::default();
        let session = session_with(&[Role::Admin], SubscriptionStatus::None);
        assert!(policy.require_admin(Some(&session)).is_allow());
    }

    #[test]
    fn test_require_subscription() {
        let policy = RoutePolicy::default();

        let active = session_with(&[Role::Member], SubscriptionStatus::Active);
        assert!(policy.require_subscription(Some(&active)).is_allow());

        let expired = session_with(&[Role::Member], SubscriptionStatus::Expired);
        assert_eq!(
            deny_target(policy.require_subscription(Some(&expired))),
            "/subscribe"
        );

        let none = session_with(&[Role::Member], SubscriptionStatus::None);
        assert_eq!(
            deny_target(policy.require_subscription(Some(&none))),
            "/subscribe"
        );

        assert_eq!(deny_target(policy.require_subscription(None)), "/login");
    }

    #[test]
    fn test_configured_targets_flow_through() {
        let policy = RoutePolicy {
            home: "/dashboard".into(),
            login: "/signin".into(),
            unauthorized: "/denied".into(),
            subscribe: "/upgrade".into(),
        };
        assert_eq!(deny_target(policy.require_admin(None)), "/signin");
        let session = session_with(&[], SubscriptionStatus::None);
        assert_eq!(deny_target(policy.require_unauth(Some(&session))), "/dashboard");
    }
}
