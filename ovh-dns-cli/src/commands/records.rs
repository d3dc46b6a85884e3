//! Zone and record commands.
//!
//! Every mutation is followed by a zone refresh before success is reported.

use std::io::{BufRead, Write};

use colored::Colorize;
use ovh_dns_provider::{CreateRecordRequest, DnsProvider, RecordFilter, RecordUpdate};

use crate::console::Console;
use crate::error::{CliError, CliResult};
use crate::output::{records_table, zones_table};

pub async fn zones<R: BufRead, W: Write>(
    provider: &dyn DnsProvider,
    console: &mut Console<R, W>,
) -> CliResult<()> {
    let zones = provider.list_zones().await?;
    tracing::debug!("{} zones on the account", zones.len());

    console.heading("DNS Zones")?;
    console.table(&zones_table(&zones))?;
    Ok(())
}

/// Fetch every matching record one by one, in ID order.
pub async fn list<R: BufRead, W: Write>(
    provider: &dyn DnsProvider,
    console: &mut Console<R, W>,
    zone: &str,
    record_type: Option<String>,
) -> CliResult<()> {
    let mut ids = provider
        .list_record_ids(zone, &RecordFilter::by_type(record_type))
        .await?;
    ids.sort_unstable();

    let mut records = Vec::with_capacity(ids.len());
    for id in ids {
        records.push(provider.get_record(zone, id).await?);
    }

    console.heading(format!("Records for {zone}"))?;
    console.table(&records_table(&records))?;
    Ok(())
}

pub async fn add<R: BufRead, W: Write>(
    provider: &dyn DnsProvider,
    console: &mut Console<R, W>,
    zone: &str,
    request: &CreateRecordRequest,
) -> CliResult<()> {
    let record = provider.create_record(zone, request).await?;
    provider.refresh_zone(zone).await?;

    console.success(format!(
        "Created record #{}: {} {}.{zone} → {}",
        record.id, request.field_type, request.sub_domain, request.target
    ))?;
    Ok(())
}

pub async fn edit<R: BufRead, W: Write>(
    provider: &dyn DnsProvider,
    console: &mut Console<R, W>,
    zone: &str,
    record_id: u64,
    update: &RecordUpdate,
) -> CliResult<()> {
    if update.is_empty() {
        console.warning("Nothing to update. Use --target, --ttl, or --subdomain.")?;
        return Ok(());
    }

    provider.update_record(zone, record_id, update).await?;
    provider.refresh_zone(zone).await?;

    console.success(format!("Updated record #{record_id}"))?;
    Ok(())
}

/// What `rm` should delete.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RemoveTarget {
    Id(u64),
    Subdomain {
        sub_domain: String,
        field_type: Option<String>,
    },
}

impl RemoveTarget {
    /// An explicit ID wins over a subdomain. An empty subdomain or an ID of 0 counts as
    /// not given: an empty subdomain would match every record at the zone apex.
    pub fn from_args(
        sub_domain: Option<String>,
        record_id: Option<u64>,
        field_type: Option<String>,
    ) -> CliResult<Self> {
        let sub_domain = sub_domain.filter(|s| !s.trim().is_empty());
        let record_id = record_id.filter(|id| *id != 0);
        match (record_id, sub_domain) {
            (Some(id), _) => Ok(Self::Id(id)),
            (None, Some(sub_domain)) => Ok(Self::Subdomain {
                sub_domain,
                field_type,
            }),
            (None, None) => Err(CliError::Usage("Provide a subdomain or --id".to_string())),
        }
    }
}

pub async fn rm<R: BufRead, W: Write>(
    provider: &dyn DnsProvider,
    console: &mut Console<R, W>,
    zone: &str,
    target: RemoveTarget,
    skip_confirm: bool,
) -> CliResult<()> {
    if !skip_confirm && !console.confirm("Are you sure?")? {
        return Err(CliError::Aborted);
    }

    match target {
        RemoveTarget::Id(id) => {
            provider.delete_record(zone, id).await?;
            provider.refresh_zone(zone).await?;
            console.success(format!("Deleted record #{id}"))?;
        }
        RemoveTarget::Subdomain {
            sub_domain,
            field_type,
        } => {
            let filter = RecordFilter {
                field_type,
                sub_domain: Some(sub_domain.clone()),
            };
            let ids = provider.list_record_ids(zone, &filter).await?;
            if ids.is_empty() {
                console.warning(format!("No records found for {sub_domain}.{zone}"))?;
                return Ok(());
            }

            for id in &ids {
                provider.delete_record(zone, *id).await?;
                console.line(format!("  Deleted #{}", id.to_string().dimmed()))?;
            }
            provider.refresh_zone(zone).await?;
            console.success(format!("Deleted {} record(s)", ids.len()))?;
        }
    }
    Ok(())
}

pub async fn export<R: BufRead, W: Write>(
    provider: &dyn DnsProvider,
    console: &mut Console<R, W>,
    zone: &str,
) -> CliResult<()> {
    let text = provider.export_zone(zone).await?;
    console.line(text)?;
    Ok(())
}
