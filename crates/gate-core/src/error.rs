//! Resolution errors

use thiserror::Error;

/// Failures surfaced by a session resolver. The gate service never lets
/// these reach a viewer: every variant collapses to "no session".
#[derive(Error, Debug)]
pub enum ResolveError {
    #[error("Provider unreachable: {0}")]
    ProviderUnreachable(String),

    #[error("Provider request timed out")]
    Timeout,

    #[error("Invalid session token: {0}")]
    InvalidToken(String),

    #[error("Malformed provider response: {0}")]
    MalformedResponse(String),
}
