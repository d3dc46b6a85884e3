//! OVHcloud DNS Provider

mod error;
mod http;
mod provider;
mod sign;
/// OVH API-specific request/response types.
pub(crate) mod types;

use reqwest::Client;
use tokio::sync::OnceCell;

use crate::error::Result;
use crate::providers::common::create_http_client;
use crate::types::{Credentials, Endpoint};

/// Identifier used in errors and logs.
pub(crate) const OVH_PROVIDER: &str = "ovh";

/// OVHcloud DNS provider implementation.
///
/// Requests are signed with the application secret and consumer key
/// (`X-Ovh-Signature`, SHA-1 scheme). The clock offset to the API is fetched
/// once from `/auth/time` on the first signed request.
///
/// # Construction
///
/// ```rust,no_run
/// use ovh_dns_provider::{Endpoint, OvhProvider};
///
/// # fn main() -> ovh_dns_provider::Result<()> {
/// let provider = OvhProvider::builder(
///     Endpoint::OvhEu,
///     "your-application-key",
///     "your-application-secret",
/// )
/// .consumer_key("your-consumer-key")
/// .build()?;
/// # Ok(())
/// # }
/// ```
pub struct OvhProvider {
    pub(crate) client: Client,
    pub(crate) base_url: String,
    pub(crate) application_key: String,
    pub(crate) application_secret: String,
    pub(crate) consumer_key: Option<String>,
    pub(crate) time_delta: OnceCell<i64>,
}

/// Builder for [`OvhProvider`].
pub struct OvhProviderBuilder {
    base_url: String,
    application_key: String,
    application_secret: String,
    consumer_key: Option<String>,
}

impl OvhProviderBuilder {
    fn new(endpoint: Endpoint, application_key: String, application_secret: String) -> Self {
        Self {
            base_url: endpoint.base_url().to_string(),
            application_key,
            application_secret,
            consumer_key: None,
        }
    }

    /// Set the consumer key. Without one only unauthenticated calls succeed.
    pub fn consumer_key(mut self, consumer_key: impl Into<String>) -> Self {
        self.consumer_key = Some(consumer_key.into());
        self
    }

    /// Override the API root (e.g. a local mock server).
    pub fn base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into().trim_end_matches('/').to_string();
        self
    }

    /// Build the [`OvhProvider`] instance.
    pub fn build(self) -> Result<OvhProvider> {
        Ok(OvhProvider {
            client: create_http_client(OVH_PROVIDER)?,
            base_url: self.base_url,
            application_key: self.application_key,
            application_secret: self.application_secret,
            consumer_key: self.consumer_key,
            time_delta: OnceCell::new(),
        })
    }
}

impl OvhProvider {
    /// Creates a fully authenticated provider from stored credentials.
    pub fn new(credentials: Credentials) -> Result<Self> {
        Self::builder(
            credentials.endpoint,
            credentials.application_key,
            credentials.application_secret,
        )
        .consumer_key(credentials.consumer_key)
        .build()
    }

    /// Returns a builder for customizing the provider configuration.
    pub fn builder(
        endpoint: Endpoint,
        application_key: impl Into<String>,
        application_secret: impl Into<String>,
    ) -> OvhProviderBuilder {
        OvhProviderBuilder::new(endpoint, application_key.into(), application_secret.into())
    }
}
