//! # ovh-dns-provider
//!
//! A signed client for the [OVHcloud](https://www.ovhcloud.com/) DNS zone API:
//! zones, records, zone refresh, BIND export, and consumer key provisioning.
//!
//! ## Feature Flags
//!
//! ### TLS Backend
//!
//! - **`native-tls`** *(default)*: Use the platform's native TLS implementation.
//! - **`rustls`**: Use rustls. Recommended for cross-compilation and static builds.
//!
//! ## Usage
//!
//! ```rust,no_run
//! use ovh_dns_provider::{DnsProvider, OvhProvider, RecordFilter, load_credentials};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     // 1. Read ~/.ovh.conf (and friends) plus OVH_* overrides
//!     let provider = OvhProvider::new(load_credentials()?)?;
//!
//!     // 2. List zones
//!     for zone in provider.list_zones().await? {
//!         println!("{zone}");
//!     }
//!
//!     // 3. List A records of one zone
//!     let filter = RecordFilter::by_type(Some("A".to_string()));
//!     for id in provider.list_record_ids("example.com", &filter).await? {
//!         let record = provider.get_record("example.com", id).await?;
//!         println!("{} {} -> {}", record.id, record.field_type, record.target);
//!     }
//!
//!     Ok(())
//! }
//! ```
//!
//! ## Changing Records
//!
//! OVH stages record changes until the zone is refreshed:
//!
//! ```rust,no_run
//! # use ovh_dns_provider::*;
//! # async fn example(provider: &dyn DnsProvider) -> Result<()> {
//! let request = CreateRecordRequest::new("A", "www", "1.2.3.4", 0);
//! let record = provider.create_record("example.com", &request).await?;
//! provider.refresh_zone("example.com").await?;
//! # Ok(())
//! # }
//! ```
//!
//! ## Error Handling
//!
//! All provider operations return [`Result<T, ProviderError>`](ProviderError):
//!
//! - [`ProviderError::InvalidCredentials`]: bad keys, signature or consumer key
//! - [`ProviderError::PermissionDenied`]: consumer key lacks the route
//! - [`ProviderError::DomainNotFound`] / [`ProviderError::RecordNotFound`]
//! - [`ProviderError::NetworkError`]: network connectivity issue
//!
//! Nothing is retried.

mod credentials;
mod error;
mod http_client;
mod providers;
mod traits;
mod types;
mod utils;

// Re-export error types
pub use error::{ProviderError, Result};

// Re-export credentials file handling
pub use credentials::{
    CredentialError, ENV_APPLICATION_KEY, ENV_APPLICATION_SECRET, ENV_CONSUMER_KEY, ENV_ENDPOINT,
    IniSections, USER_CONFIG_FILE, config_search_paths, default_config_path, load_credentials,
    read_sections, resolve_credentials, write_credentials,
};

// Re-export traits
pub use traits::{ConsumerKeyIssuer, DnsProvider};

// Re-export types
pub use types::{
    AccessRule, ConsumerKeyGrant, CreateRecordRequest, CredentialRequest, Credentials, Endpoint,
    READ_WRITE_METHODS, Record, RecordFilter, RecordUpdate, UnknownEndpoint,
};

// Re-export utils module
pub use utils::log_sanitizer;

// Re-export concrete provider
pub use providers::{OvhProvider, OvhProviderBuilder};
