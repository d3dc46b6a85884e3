//! DNS Provider implementations

/// Shared utilities used by provider implementations.
pub mod common;

mod ovh;

pub use ovh::{OvhProvider, OvhProviderBuilder};
