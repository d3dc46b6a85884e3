use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

// ============ Endpoint ============

/// OVHcloud API region.
///
/// Every endpoint speaks the same v1.0 API; only the base URL differs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Endpoint {
    /// OVHcloud Europe.
    OvhEu,
    /// OVHcloud Canada.
    OvhCa,
    /// OVHcloud US.
    OvhUs,
    /// Kimsufi Europe.
    KimsufiEu,
    /// Kimsufi Canada.
    KimsufiCa,
    /// So you Start Europe.
    SoyoustartEu,
    /// So you Start Canada.
    SoyoustartCa,
}

impl Endpoint {
    /// Every endpoint accepted in a configuration file.
    pub const ALL: [Self; 7] = [
        Self::OvhEu,
        Self::OvhCa,
        Self::OvhUs,
        Self::KimsufiEu,
        Self::KimsufiCa,
        Self::SoyoustartEu,
        Self::SoyoustartCa,
    ];

    /// Endpoints offered by the interactive setup.
    pub const SETUP_CHOICES: [Self; 5] = [
        Self::OvhEu,
        Self::OvhCa,
        Self::OvhUs,
        Self::KimsufiEu,
        Self::SoyoustartEu,
    ];

    /// Configuration name, e.g. `ovh-eu`.
    pub const fn name(self) -> &'static str {
        match self {
            Self::OvhEu => "ovh-eu",
            Self::OvhCa => "ovh-ca",
            Self::OvhUs => "ovh-us",
            Self::KimsufiEu => "kimsufi-eu",
            Self::KimsufiCa => "kimsufi-ca",
            Self::SoyoustartEu => "soyoustart-eu",
            Self::SoyoustartCa => "soyoustart-ca",
        }
    }

    /// API root, without a trailing slash.
    pub const fn base_url(self) -> &'static str {
        match self {
            Self::OvhEu => "https://eu.api.ovh.com/1.0",
            Self::OvhCa => "https://ca.api.ovh.com/1.0",
            Self::OvhUs => "https://api.us.ovhcloud.com/1.0",
            Self::KimsufiEu => "https://eu.api.kimsufi.com/1.0",
            Self::KimsufiCa => "https://ca.api.kimsufi.com/1.0",
            Self::SoyoustartEu => "https://eu.api.soyoustart.com/1.0",
            Self::SoyoustartCa => "https://ca.api.soyoustart.com/1.0",
        }
    }
}

impl fmt::Display for Endpoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Returned when a string names no known endpoint.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnknownEndpoint(pub String);

impl fmt::Display for UnknownEndpoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Unknown endpoint '{}'", self.0)
    }
}

impl std::error::Error for UnknownEndpoint {}

impl FromStr for Endpoint {
    type Err = UnknownEndpoint;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim();
        Self::ALL
            .into_iter()
            .find(|e| e.name().eq_ignore_ascii_case(wanted))
            .ok_or_else(|| UnknownEndpoint(wanted.to_string()))
    }
}

// ============ Credentials ============

/// Everything needed to sign requests against one account.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Credentials {
    pub endpoint: Endpoint,
    pub application_key: String,
    pub application_secret: String,
    pub consumer_key: String,
}

// ============ Records ============

/// A DNS record as returned by `GET /domain/zone/{zone}/record/{id}`.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Record {
    pub id: u64,
    pub field_type: String,
    #[serde(default)]
    pub sub_domain: Option<String>,
    pub target: String,
    #[serde(default)]
    pub ttl: Option<u32>,
    #[serde(default)]
    pub zone: Option<String>,
}

/// Body of `POST /domain/zone/{zone}/record`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateRecordRequest {
    pub field_type: String,
    pub sub_domain: String,
    pub target: String,
    /// `None` lets the zone default apply.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ttl: Option<u32>,
}

impl CreateRecordRequest {
    /// A TTL of `0` means "zone default" and is left out of the payload.
    pub fn new(
        field_type: impl Into<String>,
        sub_domain: impl Into<String>,
        target: impl Into<String>,
        ttl: u32,
    ) -> Self {
        Self {
            field_type: field_type.into(),
            sub_domain: sub_domain.into(),
            target: target.into(),
            ttl: (ttl != 0).then_some(ttl),
        }
    }
}

/// Partial update for `PUT /domain/zone/{zone}/record/{id}`. Unset fields are not sent.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RecordUpdate {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub target: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ttl: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sub_domain: Option<String>,
}

impl RecordUpdate {
    pub fn is_empty(&self) -> bool {
        self.target.is_none() && self.ttl.is_none() && self.sub_domain.is_none()
    }
}

/// Query filters for `GET /domain/zone/{zone}/record`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RecordFilter {
    pub field_type: Option<String>,
    pub sub_domain: Option<String>,
}

impl RecordFilter {
    pub fn by_type(field_type: Option<String>) -> Self {
        Self {
            field_type,
            sub_domain: None,
        }
    }
}

// ============ Consumer key provisioning ============

/// One route granted to a consumer key.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AccessRule {
    pub method: String,
    pub path: String,
}

/// HTTP methods covered by a read-write grant.
pub const READ_WRITE_METHODS: [&str; 4] = ["GET", "POST", "PUT", "DELETE"];

/// Body of `POST /auth/credential`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CredentialRequest {
    pub access_rules: Vec<AccessRule>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub redirection: Option<String>,
}

impl CredentialRequest {
    /// Read-write access on `path` and everything below it.
    pub fn recursive_read_write(path: &str) -> Self {
        let path = path.trim_end_matches('/');
        let access_rules = [path.to_string(), format!("{path}/*")]
            .iter()
            .flat_map(|p| {
                READ_WRITE_METHODS.iter().map(move |m| AccessRule {
                    method: (*m).to_string(),
                    path: p.clone(),
                })
            })
            .collect();

        Self {
            access_rules,
            redirection: None,
        }
    }
}

/// Response of `POST /auth/credential`.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ConsumerKeyGrant {
    pub validation_url: String,
    pub consumer_key: String,
    #[serde(default)]
    pub state: Option<String>,
}
