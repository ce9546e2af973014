//! # Gate Core
//!
//! Domain entities, gate policy, resolver port, and the request-scoped
//! gate service for the portal access gate.

pub mod domain;
pub mod services;
pub mod resolvers;
pub mod error;

// Re-export domain entities
pub use domain::*;
pub use error::ResolveError;
