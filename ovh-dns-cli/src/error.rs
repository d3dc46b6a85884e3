//! CLI error types

use std::io::{self, Write};
use std::path::PathBuf;

use colored::Colorize;
use ovh_dns_provider::{CredentialError, ProviderError};
use thiserror::Error;

/// Errors that end a command with exit status 1.
#[derive(Error, Debug)]
pub enum CliError {
    #[error("{0}")]
    Config(#[from] CredentialError),

    #[error("{0}")]
    Provider(#[from] ProviderError),

    /// Bad combination of arguments that clap cannot express.
    #[error("{0}")]
    Usage(String),

    /// Confirmation declined.
    #[error("Aborted!")]
    Aborted,

    #[error("Failed to write {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("Terminal I/O failed: {0}")]
    Console(#[from] io::Error),

    #[error("Cannot determine the home directory")]
    NoHomeDir,
}

pub type CliResult<T> = std::result::Result<T, CliError>;

impl CliError {
    /// Missing or rejected credentials.
    pub fn is_auth_error(&self) -> bool {
        match self {
            Self::Config(_) => true,
            Self::Provider(e) => e.is_auth_failure(),
            _ => false,
        }
    }

    /// Print the error the way the user should see it.
    pub fn report(&self, out: &mut impl Write) -> io::Result<()> {
        if self.is_auth_error() {
            writeln!(out, "{} {self}", "Auth error:".red())?;
            return writeln!(out, "Run {} to configure credentials.", "ovh-dns setup".bold());
        }
        match self {
            Self::Aborted => writeln!(out, "{self}"),
            Self::Usage(msg) => writeln!(out, "{}", msg.red()),
            _ => writeln!(out, "{} {self}", "Error:".red()),
        }
    }
}
