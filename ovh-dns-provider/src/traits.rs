use async_trait::async_trait;

use crate::error::{ProviderError, Result};
use crate::types::{
    ConsumerKeyGrant, CreateRecordRequest, CredentialRequest, Record, RecordFilter, RecordUpdate,
};

/// Raw API error (internal use)
#[derive(Debug, Clone)]
pub(crate) struct RawApiError {
    /// HTTP status of the failed response
    pub status: Option<u16>,
    /// Provider error code (`errorCode` for OVH)
    pub code: Option<String>,
    /// Original error message
    pub message: String,
}

impl RawApiError {
    pub fn with_status(status: u16, message: impl Into<String>) -> Self {
        Self {
            status: Some(status),
            code: None,
            message: message.into(),
        }
    }

    pub fn code(mut self, code: Option<String>) -> Self {
        self.code = code;
        self
    }
}

/// Extra information used while mapping an error (internal use)
#[derive(Debug, Clone, Default)]
pub(crate) struct ErrorContext {
    /// Record subdomain (for `RecordExists`)
    pub record_name: Option<String>,
    /// Record ID (for `RecordNotFound`)
    pub record_id: Option<String>,
    /// Zone name (for `DomainNotFound`)
    pub domain: Option<String>,
}

impl ErrorContext {
    pub fn zone(zone: &str) -> Self {
        Self {
            domain: Some(zone.to_string()),
            ..Self::default()
        }
    }

    pub fn record(zone: &str, record_id: u64) -> Self {
        Self {
            record_id: Some(record_id.to_string()),
            domain: Some(zone.to_string()),
            ..Self::default()
        }
    }
}

/// Maps raw API errors to [`ProviderError`] (internal use)
pub(crate) trait ProviderErrorMapper {
    /// Provider identifier
    fn provider_name(&self) -> &'static str;

    /// Map a raw API error to the unified error type
    fn map_error(&self, raw: RawApiError, context: ErrorContext) -> ProviderError;

    /// Shortcut: unknown error (fallback)
    fn unknown_error(&self, raw: RawApiError) -> ProviderError {
        ProviderError::Unknown {
            provider: self.provider_name().to_string(),
            raw_code: raw.code.or_else(|| raw.status.map(|s| s.to_string())),
            raw_message: raw.message,
        }
    }
}

/// DNS zone operations against a remote account.
///
/// Every method issues the request(s) and waits for the answer; nothing is cached.
#[async_trait]
pub trait DnsProvider: Send + Sync {
    /// Provider identifier
    fn id(&self) -> &'static str;

    /// Names of all zones on the account.
    async fn list_zones(&self) -> Result<Vec<String>>;

    /// IDs of the records matching `filter`, in API order.
    async fn list_record_ids(&self, zone: &str, filter: &RecordFilter) -> Result<Vec<u64>>;

    /// Full record details.
    async fn get_record(&self, zone: &str, record_id: u64) -> Result<Record>;

    /// Create a record. The zone must be refreshed for it to be served.
    async fn create_record(&self, zone: &str, req: &CreateRecordRequest) -> Result<Record>;

    /// Apply a partial update. The zone must be refreshed for it to be served.
    async fn update_record(&self, zone: &str, record_id: u64, update: &RecordUpdate)
    -> Result<()>;

    /// Delete a record. The zone must be refreshed for it to be served.
    async fn delete_record(&self, zone: &str, record_id: u64) -> Result<()>;

    /// Publish pending changes.
    async fn refresh_zone(&self, zone: &str) -> Result<()>;

    /// Zone file in BIND format.
    async fn export_zone(&self, zone: &str) -> Result<String>;
}

/// Requests a new consumer key for an application.
///
/// Only the application key is needed; the request is not signed.
#[async_trait]
pub trait ConsumerKeyIssuer: Send + Sync {
    async fn request_consumer_key(&self, req: &CredentialRequest) -> Result<ConsumerKeyGrant>;
}
