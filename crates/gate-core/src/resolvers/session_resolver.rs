//! Session resolver trait (port)

use async_trait::async_trait;

use crate::domain::Session;
use crate::error::ResolveError;

/// Port to the external identity provider. `Ok(None)` means the call
/// succeeded and the token carries no live session (unknown, expired, or
/// revoked); errors are provider faults and are normalized by the gate
/// service, never surfaced to a viewer.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait SessionResolver: Send + Sync {
    async fn resolve(&self, token: &str) -> Result<Option<Session>, ResolveError>;
}
