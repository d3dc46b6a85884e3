use std::io::Cursor;
use std::sync::Arc;

use async_trait::async_trait;
use ovh_dns_provider::{
    ConsumerKeyGrant, ConsumerKeyIssuer, CreateRecordRequest, CredentialRequest, DnsProvider,
    Endpoint, ProviderError, Record, RecordFilter, RecordUpdate,
};
use tokio::sync::Mutex;

use crate::console::Console;

pub const ZONE: &str = "example.com";

/// ID given to every record the mock creates.
pub const NEXT_ID: u64 = 1000;

/// Console fed with `input`, capturing uncolored output.
pub fn test_console(input: &str) -> Console<Cursor<Vec<u8>>, Vec<u8>> {
    colored::control::set_override(false);
    Console::new(Cursor::new(input.as_bytes().to_vec()), Vec::new())
}

pub fn mock_record(id: u64, field_type: &str, sub_domain: Option<&str>, ttl: Option<u32>) -> Record {
    Record {
        id,
        field_type: field_type.to_string(),
        sub_domain: sub_domain.map(str::to_string),
        target: format!("10.0.0.{id}"),
        ttl,
        zone: Some(ZONE.to_string()),
    }
}

fn rejected() -> ProviderError {
    ProviderError::InvalidCredentials {
        provider: "mock".to_string(),
        raw_message: Some("This credential does not exist".to_string()),
    }
}

// ============ DNS provider ============

/// One recorded provider call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Call {
    ListZones,
    ListRecordIds(RecordFilter),
    GetRecord(u64),
    Create(CreateRecordRequest),
    Update(u64, RecordUpdate),
    Delete(u64),
    Refresh,
    Export,
}

/// In-memory provider that records every call.
#[derive(Default)]
pub struct MockDnsProvider {
    zones: Vec<String>,
    records: Vec<Record>,
    export: String,
    fail: bool,
    calls: Mutex<Vec<Call>>,
}

impl MockDnsProvider {
    pub fn with_zones(zones: &[&str]) -> Self {
        Self {
            zones: zones.iter().map(|z| (*z).to_string()).collect(),
            ..Default::default()
        }
    }

    /// Every call fails with rejected credentials.
    pub fn failing() -> Self {
        Self {
            fail: true,
            ..Default::default()
        }
    }

    pub fn with_record(mut self, record: Record) -> Self {
        self.records.push(record);
        self
    }

    pub fn with_export(mut self, text: &str) -> Self {
        self.export = text.to_string();
        self
    }

    pub async fn calls(&self) -> Vec<Call> {
        self.calls.lock().await.clone()
    }

    async fn record(&self, call: Call) -> ovh_dns_provider::Result<()> {
        self.calls.lock().await.push(call);
        if self.fail { Err(rejected()) } else { Ok(()) }
    }
}

#[async_trait]
impl DnsProvider for MockDnsProvider {
    fn id(&self) -> &'static str {
        "mock"
    }

    async fn list_zones(&self) -> ovh_dns_provider::Result<Vec<String>> {
        self.record(Call::ListZones).await?;
        Ok(self.zones.clone())
    }

    async fn list_record_ids(
        &self,
        _zone: &str,
        filter: &RecordFilter,
    ) -> ovh_dns_provider::Result<Vec<u64>> {
        self.record(Call::ListRecordIds(filter.clone())).await?;
        Ok(self
            .records
            .iter()
            .filter(|r| filter.field_type.as_ref().is_none_or(|t| *t == r.field_type))
            .filter(|r| {
                filter
                    .sub_domain
                    .as_ref()
                    .is_none_or(|s| r.sub_domain.as_ref() == Some(s))
            })
            .map(|r| r.id)
            .collect())
    }

    async fn get_record(&self, zone: &str, record_id: u64) -> ovh_dns_provider::Result<Record> {
        self.record(Call::GetRecord(record_id)).await?;
        self.records
            .iter()
            .find(|r| r.id == record_id)
            .cloned()
            .ok_or_else(|| ProviderError::RecordNotFound {
                provider: "mock".to_string(),
                record_id: format!("{zone}/{record_id}"),
                raw_message: None,
            })
    }

    async fn create_record(
        &self,
        zone: &str,
        req: &CreateRecordRequest,
    ) -> ovh_dns_provider::Result<Record> {
        self.record(Call::Create(req.clone())).await?;
        Ok(Record {
            id: NEXT_ID,
            field_type: req.field_type.clone(),
            sub_domain: Some(req.sub_domain.clone()),
            target: req.target.clone(),
            ttl: req.ttl,
            zone: Some(zone.to_string()),
        })
    }

    async fn update_record(
        &self,
        _zone: &str,
        record_id: u64,
        update: &RecordUpdate,
    ) -> ovh_dns_provider::Result<()> {
        self.record(Call::Update(record_id, update.clone())).await
    }

    async fn delete_record(&self, _zone: &str, record_id: u64) -> ovh_dns_provider::Result<()> {
        self.record(Call::Delete(record_id)).await
    }

    async fn refresh_zone(&self, _zone: &str) -> ovh_dns_provider::Result<()> {
        self.record(Call::Refresh).await
    }

    async fn export_zone(&self, _zone: &str) -> ovh_dns_provider::Result<String> {
        self.record(Call::Export).await?;
        Ok(self.export.clone())
    }
}

// ============ Consumer key issuer ============

pub struct MockIssuer {
    grant: Option<ConsumerKeyGrant>,
    requests: Arc<Mutex<Vec<CredentialRequest>>>,
}

impl MockIssuer {
    /// Grants `ck-<endpoint>` for any request.
    pub fn granting(endpoint: Endpoint) -> Self {
        Self {
            grant: Some(ConsumerKeyGrant {
                validation_url: "https://eu.api.ovh.com/auth/?credentialToken=tok".to_string(),
                consumer_key: format!("ck-{}", endpoint.name()),
                state: Some("pendingValidation".to_string()),
            }),
            requests: Arc::default(),
        }
    }

    /// Rejects the application credentials.
    pub fn rejecting() -> Self {
        Self {
            grant: None,
            requests: Arc::default(),
        }
    }

    /// Requests received so far, shared with the issuer.
    pub fn requests(&self) -> Arc<Mutex<Vec<CredentialRequest>>> {
        Arc::clone(&self.requests)
    }
}

#[async_trait]
impl ConsumerKeyIssuer for MockIssuer {
    async fn request_consumer_key(
        &self,
        req: &CredentialRequest,
    ) -> ovh_dns_provider::Result<ConsumerKeyGrant> {
        self.requests.lock().await.push(req.clone());
        self.grant.clone().ok_or_else(rejected)
    }
}
