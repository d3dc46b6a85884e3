//! Command handlers

mod records;
mod setup;

use std::io::{BufRead, Write};

use ovh_dns_provider::{
    CreateRecordRequest, DnsProvider, OvhProvider, RecordUpdate, default_config_path,
    load_credentials,
};

use crate::args::Commands;
use crate::console::Console;
use crate::error::{CliError, CliResult};

use records::RemoveTarget;

/// Signed client built from the configured credentials.
fn connect() -> CliResult<OvhProvider> {
    let credentials = load_credentials()?;
    tracing::debug!(endpoint = %credentials.endpoint, "Loaded credentials");
    Ok(OvhProvider::new(credentials)?)
}

/// Run one command to completion.
pub async fn execute<R: BufRead, W: Write>(
    command: Commands,
    console: &mut Console<R, W>,
) -> CliResult<()> {
    // Arguments are checked before credentials are loaded.
    let Some(command) = Resolved::resolve(command)? else {
        let path = default_config_path().ok_or(CliError::NoHomeDir)?;
        return setup::run(console, &path, |endpoint, key, secret| {
            OvhProvider::builder(endpoint, key, secret).build()
        })
        .await;
    };

    let provider = connect()?;
    dispatch(&provider, console, command).await
}

/// A command that talks to the DNS API, with its arguments checked.
#[derive(Debug)]
enum Resolved {
    Zones,
    List {
        zone: String,
        record_type: Option<String>,
    },
    Add {
        zone: String,
        request: CreateRecordRequest,
    },
    Edit {
        zone: String,
        record_id: u64,
        update: RecordUpdate,
    },
    Rm {
        zone: String,
        target: RemoveTarget,
        yes: bool,
    },
    Export {
        zone: String,
    },
}

impl Resolved {
    /// `None` for `setup`, which needs no credentials.
    fn resolve(command: Commands) -> CliResult<Option<Self>> {
        Ok(Some(match command {
            Commands::Zones => Self::Zones,
            Commands::List { zone, record_type } => Self::List { zone, record_type },
            Commands::Add {
                zone,
                subdomain,
                target,
                record_type,
                ttl,
            } => Self::Add {
                zone,
                request: CreateRecordRequest::new(record_type, subdomain, target, ttl),
            },
            Commands::Edit {
                zone,
                record_id,
                target,
                ttl,
                subdomain,
            } => Self::Edit {
                zone,
                record_id,
                update: RecordUpdate {
                    target,
                    ttl,
                    sub_domain: subdomain,
                },
            },
            Commands::Rm {
                zone,
                subdomain,
                record_id,
                record_type,
                yes,
            } => Self::Rm {
                zone,
                target: RemoveTarget::from_args(subdomain, record_id, record_type)?,
                yes,
            },
            Commands::Export { zone } => Self::Export { zone },
            Commands::Setup => return Ok(None),
        }))
    }
}

async fn dispatch<R: BufRead, W: Write>(
    provider: &dyn DnsProvider,
    console: &mut Console<R, W>,
    command: Resolved,
) -> CliResult<()> {
    tracing::debug!(provider = provider.id(), ?command, "Dispatching");
    match command {
        Resolved::Zones => records::zones(provider, console).await,
        Resolved::List { zone, record_type } => {
            records::list(provider, console, &zone, record_type).await
        }
        Resolved::Add { zone, request } => records::add(provider, console, &zone, &request).await,
        Resolved::Edit {
            zone,
            record_id,
            update,
        } => records::edit(provider, console, &zone, record_id, &update).await,
        Resolved::Rm { zone, target, yes } => {
            records::rm(provider, console, &zone, target, yes).await
        }
        Resolved::Export { zone } => records::export(provider, console, &zone).await,
    }
}
