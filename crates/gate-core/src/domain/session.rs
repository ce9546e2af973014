// ============================================================================
// Gate Core - Session Entity
// File: crates/gate-core/src/domain/session.rs
// Description: Resolved identity and entitlement state for one request
// ============================================================================

use std::collections::HashSet;

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Role tag enumeration
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    Admin,
    Moderator,
    Member,
}

impl Role {
    pub fn as_str(&self) -> &'static str {
        match self {
            Role::Admin => "admin",
            Role::Moderator => "moderator",
            Role::Member => "member",
        }
    }

    pub fn from_str(s: &str) -> Option<Self> {
        match s {
            "admin" => Some(Role::Admin),
            "moderator" => Some(Role::Moderator),
            "member" => Some(Role::Member),
            _ => None,
        }
    }
}

/// Subscription entitlement enumeration
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SubscriptionStatus {
    None,
    Active,
    Expired,
}

impl SubscriptionStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            SubscriptionStatus::None => "none",
            SubscriptionStatus::Active => "active",
            SubscriptionStatus::Expired => "expired",
        }
    }

    pub fn from_str(s: &str) -> Option<Self> {
        match s {
            "none" => Some(SubscriptionStatus::None),
            "active" => Some(SubscriptionStatus::Active),
            "expired" => Some(SubscriptionStatus::Expired),
            _ => None,
        }
    }
}

impl Default for SubscriptionStatus {
    fn default() -> Self {
        SubscriptionStatus::None
    }
}

/// Session entity. Created by the external identity provider on login and
/// read-only here; an anonymous request simply has no Session.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Session {
    pub user_id: Uuid,
    pub roles: HashSet<Role>,
    pub subscription: SubscriptionStatus,
}

impl Session {
    pub fn new(user_id: Uuid, roles: HashSet<Role>, subscription: SubscriptionStatus) -> Self {
        Self {
            user_id,
            roles,
            subscription,
        }
    }

    pub fn has_role(&self, role: Role) -> bool {
        self.roles.contains(&role)
    }

    pub fn is_admin(&self) -> bool {
        self.has_role(Role::Admin)
    }

    pub fn subscription_active(&self) -> bool {
        self.subscription == SubscriptionStatus::Active
    }

    /// Map provider role tags onto known roles. Unknown tags are dropped;
    /// unrecognized input must never widen access.
    pub fn roles_from_tags<'a, I: IntoIterator<Item = &'a str>>(tags: I) -> HashSet<Role> {
        tags.into_iter()
            .filter_map(|tag| {
                let role = Role::from_str(tag);
                if role.is_none() {
                    tracing::debug!("Ignoring unknown role tag: {}", tag);
                }
                role
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn member_session() -> Session {
        Session::new(
            Uuid::new_v4(),
            HashSet::from([Role::Member]),
            SubscriptionStatus::None,
        )
    }

    #[test]
    fn test_role_round_trip() {
        for role in [Role::Admin, Role::Moderator, Role::Member] {
            assert_eq!(Role::from_str(role.as_str()), Some(role));
        }
        assert_eq!(Role::from_str("superuser"), None);
    }

    #[test]
    fn test_has_role() {
        let session = member_session();
        assert!(session.has_role(Role::Member));
        assert!(!session.is_admin());
    }

    #[test]
    fn test_subscription_active() {
        let mut session = member_session();
        assert!(!session.subscription_active());

        session.subscription = SubscriptionStatus::Active;
        assert!(session.subscription_active());

        session.subscription = SubscriptionStatus::Expired;
        assert!(!session.subscription_active());
    }

    #[test]
    fn test_unknown_role_tags_dropped() {
        let roles = Session::roles_from_tags(["admin", "billing-ops", "member"]);
        assert_eq!(roles, HashSet::from([Role::Admin, Role::Member]));
    }
}
