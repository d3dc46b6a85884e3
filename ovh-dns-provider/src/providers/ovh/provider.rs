//! OVH `DnsProvider` trait implementation

use async_trait::async_trait;
use reqwest::Method;
use serde::de::IgnoredAny;
use serde_json::json;

use crate::error::Result;
use crate::providers::common::{encode_segment, query_string};
use crate::traits::{ConsumerKeyIssuer, DnsProvider, ErrorContext};
use crate::types::{
    ConsumerKeyGrant, CreateRecordRequest, CredentialRequest, Record, RecordFilter, RecordUpdate,
};

use super::{OVH_PROVIDER, OvhProvider};

fn zone_path(zone: &str) -> String {
    format!("/domain/zone/{}", encode_segment(zone))
}

fn record_path(zone: &str, record_id: u64) -> String {
    format!("{}/record/{record_id}", zone_path(zone))
}

#[async_trait]
impl DnsProvider for OvhProvider {
    fn id(&self) -> &'static str {
        OVH_PROVIDER
    }

    async fn list_zones(&self) -> Result<Vec<String>> {
        self.get("/domain/zone", ErrorContext::default()).await
    }

    async fn list_record_ids(&self, zone: &str, filter: &RecordFilter) -> Result<Vec<u64>> {
        let query = query_string(&[
            ("fieldType", filter.field_type.as_deref()),
            ("subDomain", filter.sub_domain.as_deref()),
        ]);
        self.get(
            &format!("{}/record{query}", zone_path(zone)),
            ErrorContext::zone(zone),
        )
        .await
    }

    async fn get_record(&self, zone: &str, record_id: u64) -> Result<Record> {
        self.get(
            &record_path(zone, record_id),
            ErrorContext::record(zone, record_id),
        )
        .await
    }

    async fn create_record(&self, zone: &str, req: &CreateRecordRequest) -> Result<Record> {
        let ctx = ErrorContext {
            record_name: Some(req.sub_domain.clone()),
            domain: Some(zone.to_string()),
            ..ErrorContext::default()
        };
        self.post(&format!("{}/record", zone_path(zone)), req, ctx)
            .await
    }

    async fn update_record(
        &self,
        zone: &str,
        record_id: u64,
        update: &RecordUpdate,
    ) -> Result<()> {
        let _: IgnoredAny = self
            .put(
                &record_path(zone, record_id),
                update,
                ErrorContext::record(zone, record_id),
            )
            .await?;
        Ok(())
    }

    async fn delete_record(&self, zone: &str, record_id: u64) -> Result<()> {
        let _: IgnoredAny = self
            .delete(
                &record_path(zone, record_id),
                ErrorContext::record(zone, record_id),
            )
            .await?;
        Ok(())
    }

    async fn refresh_zone(&self, zone: &str) -> Result<()> {
        let _: IgnoredAny = self
            .post(
                &format!("{}/refresh", zone_path(zone)),
                &json!({}),
                ErrorContext::zone(zone),
            )
            .await?;
        Ok(())
    }

    async fn export_zone(&self, zone: &str) -> Result<String> {
        self.get(
            &format!("{}/export", zone_path(zone)),
            ErrorContext::zone(zone),
        )
        .await
    }
}

#[async_trait]
impl ConsumerKeyIssuer for OvhProvider {
    async fn request_consumer_key(&self, req: &CredentialRequest) -> Result<ConsumerKeyGrant> {
        self.call_unauthenticated(
            Method::POST,
            "/auth/credential",
            Some(req),
            ErrorContext::default(),
        )
        .await
    }
}
