//! Shared helpers for live API tests

#![allow(dead_code)]

use std::env;
use std::sync::Arc;

use ovh_dns_provider::{
    CreateRecordRequest, Credentials, DnsProvider, Endpoint, OvhProvider, Record, RecordFilter,
};

/// Skip the test when a required environment variable is missing.
#[macro_export]
macro_rules! skip_if_no_credentials {
    ($($var:expr),+) => {
        $(
            if std::env::var($var).is_err() {
                eprintln!("Skipping test: missing environment variable {}", $var);
                return;
            }
        )+
    };
}

/// Assert that a `Result` is `Ok` and unwrap it (fails the test otherwise).
#[macro_export]
macro_rules! require_ok {
    ($expr:expr $(,)?) => {{
        let res = $expr;
        assert!(res.is_ok(), "expected Ok(..), got {res:?}");
        let Ok(val) = res else {
            return;
        };
        val
    }};
    ($expr:expr, $($msg:tt)+) => {{
        let res = $expr;
        assert!(
            res.is_ok(),
            "{}: {res:?}",
            format_args!($($msg)+)
        );
        let Ok(val) = res else {
            return;
        };
        val
    }};
}

/// Environment variables every live test needs.
pub const LIVE_VARS: [&str; 4] = [
    "OVH_APPLICATION_KEY",
    "OVH_APPLICATION_SECRET",
    "OVH_CONSUMER_KEY",
    "TEST_ZONE",
];

/// Unique subdomain for a test record.
pub fn generate_test_subdomain() -> String {
    let uuid = uuid::Uuid::new_v4();
    format!("_test-{}", &uuid.to_string()[..8])
}

/// Provider and zone under test.
pub struct TestContext {
    pub provider: Arc<dyn DnsProvider>,
    pub zone: String,
}

impl TestContext {
    /// Build from `OVH_*` variables and `TEST_ZONE`. `OVH_ENDPOINT` defaults to `ovh-eu`.
    pub fn from_env() -> Option<Self> {
        let endpoint = env::var("OVH_ENDPOINT")
            .ok()
            .and_then(|e| e.parse::<Endpoint>().ok())
            .unwrap_or(Endpoint::OvhEu);
        let credentials = Credentials {
            endpoint,
            application_key: env::var("OVH_APPLICATION_KEY").ok()?,
            application_secret: env::var("OVH_APPLICATION_SECRET").ok()?,
            consumer_key: env::var("OVH_CONSUMER_KEY").ok()?,
        };
        let zone = env::var("TEST_ZONE").ok()?;
        let provider = OvhProvider::new(credentials).ok()?;

        Some(Self {
            provider: Arc::new(provider),
            zone,
        })
    }

    /// Create a TXT test record and refresh the zone.
    pub async fn create_test_record(&self) -> Option<Record> {
        let request =
            CreateRecordRequest::new("TXT", generate_test_subdomain(), "integration-test", 600);
        let record = self
            .provider
            .create_record(&self.zone, &request)
            .await
            .ok()?;
        let _ = self.provider.refresh_zone(&self.zone).await;
        Some(record)
    }

    /// Delete one record, ignoring failures.
    pub async fn cleanup_record(&self, record_id: u64) {
        let _ = self.provider.delete_record(&self.zone, record_id).await;
        let _ = self.provider.refresh_zone(&self.zone).await;
    }

    /// Delete every leftover `_test-*` TXT record.
    pub async fn cleanup_all_test_records(&self) {
        let filter = RecordFilter::by_type(Some("TXT".to_string()));
        let Ok(ids) = self.provider.list_record_ids(&self.zone, &filter).await else {
            return;
        };
        for id in ids {
            if let Ok(record) = self.provider.get_record(&self.zone, id).await
                && record
                    .sub_domain
                    .as_deref()
                    .is_some_and(|s| s.starts_with("_test-"))
            {
                let _ = self.provider.delete_record(&self.zone, id).await;
            }
        }
        let _ = self.provider.refresh_zone(&self.zone).await;
    }
}
