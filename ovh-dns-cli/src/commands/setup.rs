//! Interactive credential provisioning.
//!
//! Asks for the application credentials, requests a consumer key scoped to the DNS zone
//! routes, waits for the user to validate it in a browser and writes the config file.
//! Nothing is written unless every step succeeds.

use std::io::{BufRead, Write};
use std::path::Path;

use colored::Colorize;
use ovh_dns_provider::{ConsumerKeyIssuer, CredentialRequest, Credentials, Endpoint};

use crate::console::Console;
use crate::error::{CliError, CliResult};

const CREATE_APP_URL: &str = "https://eu.api.ovh.com/createApp/";

/// Routes the consumer key is granted on.
const DNS_ZONE_PATH: &str = "/domain/zone";

pub async fn run<R, W, I, F>(
    console: &mut Console<R, W>,
    config_path: &Path,
    issuer_for: F,
) -> CliResult<()>
where
    R: BufRead,
    W: Write,
    I: ConsumerKeyIssuer,
    F: FnOnce(Endpoint, &str, &str) -> ovh_dns_provider::Result<I>,
{
    console.heading("OVH DNS CLI Setup")?;
    console.line("")?;
    console.line(format!("1. Go to {CREATE_APP_URL}"))?;
    console.line("2. Create an application and note your Application Key & Secret.")?;
    console.line("")?;

    let choices: Vec<&str> = Endpoint::SETUP_CHOICES.iter().map(|e| e.name()).collect();
    let endpoint = Endpoint::SETUP_CHOICES[console.choose("Endpoint", &choices, 0)?];
    let application_key = console.prompt("Application Key", None)?;
    let application_secret = console.prompt("Application Secret", None)?;

    console.line("")?;
    console.heading("Requesting consumer key...")?;
    let issuer = issuer_for(endpoint, &application_key, &application_secret)?;
    let grant = issuer
        .request_consumer_key(&CredentialRequest::recursive_read_write(DNS_ZONE_PATH))
        .await?;
    tracing::debug!(state = ?grant.state, "Consumer key requested");

    console.line("")?;
    console.line(format!(
        "3. Validate the token here: {}",
        grant.validation_url.underline()
    ))?;
    console.pause("Press Enter after validating in your browser...")?;

    let credentials = Credentials {
        endpoint,
        application_key,
        application_secret,
        consumer_key: grant.consumer_key,
    };
    ovh_dns_provider::write_credentials(config_path, &credentials).map_err(|source| {
        CliError::Io {
            path: config_path.to_path_buf(),
            source,
        }
    })?;
    tracing::info!("Wrote {}", config_path.display());

    console.line("")?;
    console.success(format!("Config saved to {}", config_path.display()))?;
    console.line(format!("You can now use {} to test.", "ovh-dns zones".bold()))?;
    Ok(())
}
