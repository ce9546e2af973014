//! Application-wide constants

/// Landing page for viewers that already hold a session.
pub const HOME_PATH: &str = "/home";
/// Login page, target for anonymous viewers hitting protected pages.
pub const LOGIN_PATH: &str = "/login";
/// Shown to authenticated viewers lacking the required role.
pub const UNAUTHORIZED_PATH: &str = "/unauthorized";
/// Upsell page for viewers without an active subscription.
pub const SUBSCRIBE_PATH: &str = "/subscribe";

pub const SESSION_COOKIE: &str = "portal_session";
pub const DEFAULT_PROVIDER_TIMEOUT_SECS: u64 = 3;
pub const DEFAULT_SESSION_TTL_SECS: i64 = 86400;
