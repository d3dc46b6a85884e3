//! CLI argument definitions using clap

use clap::{ArgAction, Parser, Subcommand};

/// CLI to manage OVH DNS records.
#[derive(Parser, Debug)]
#[command(name = "ovh-dns")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Increase log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = ArgAction::Count, global = true)]
    pub verbose: u8,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug, PartialEq, Eq)]
pub enum Commands {
    /// List all DNS zones on the account
    Zones,

    /// List DNS records for a zone
    List {
        zone: String,

        /// Filter by record type (A, AAAA, CNAME, MX, TXT...)
        #[arg(short = 't', long = "type", value_name = "TYPE")]
        record_type: Option<String>,
    },

    /// Add a DNS record
    Add {
        zone: String,
        subdomain: String,
        target: String,

        /// Record type
        #[arg(short = 't', long = "type", value_name = "TYPE", default_value = "A")]
        record_type: String,

        /// TTL in seconds (0 = zone default)
        #[arg(long, default_value_t = 0)]
        ttl: u32,
    },

    /// Edit an existing DNS record by ID
    Edit {
        zone: String,
        record_id: u64,

        /// New target value
        #[arg(long)]
        target: Option<String>,

        /// New TTL
        #[arg(long)]
        ttl: Option<u32>,

        /// New subdomain
        #[arg(long)]
        subdomain: Option<String>,
    },

    /// Remove DNS record(s) by subdomain or by ID
    Rm {
        zone: String,
        subdomain: Option<String>,

        /// Delete by record ID (takes precedence over SUBDOMAIN)
        #[arg(long = "id", value_name = "ID")]
        record_id: Option<u64>,

        /// Filter by type when deleting by subdomain
        #[arg(short = 't', long = "type", value_name = "TYPE")]
        record_type: Option<String>,

        /// Do not ask for confirmation
        #[arg(short, long)]
        yes: bool,
    },

    /// Export zone as BIND-style text
    Export { zone: String },

    /// Interactive setup for OVH API credentials
    Setup,
}
