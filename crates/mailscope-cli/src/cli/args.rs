//! Command-line argument definitions using clap.

use clap::{Parser, ValueEnum};
use std::path::PathBuf;

use crate::output::OutputFormat;

/// Investigate an email address and write the findings to a report
///
/// Resolves the domain, looks up its MX and SPF records, geolocates its
/// address, verifies the mailbox, looks up the owner and queries WHOIS.
/// When no address is given it is read from standard input.
#[derive(Parser, Debug)]
#[command(name = "mailscope")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Email address to investigate
    pub email: Option<String>,

    /// Report file (default: email_data_viewer.html)
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Report format
    #[arg(short, long, value_enum)]
    pub format: Option<OutputFormat>,

    /// Hunter.io API key for email verification
    #[arg(long, env = "HUNTER_API_KEY", hide_env_values = true)]
    pub hunter_key: Option<String>,

    /// Clearbit API key for owner enrichment
    #[arg(long, env = "CLEARBIT_API_KEY", hide_env_values = true)]
    pub clearbit_key: Option<String>,

    /// HTTP request timeout in seconds
    #[arg(long)]
    pub timeout: Option<u64>,

    /// Lookup families to leave out of the report
    #[arg(long, value_enum, value_delimiter = ',')]
    pub skip: Vec<Source>,

    /// Configuration file (default: platform config directory)
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Increase verbosity
    #[arg(short, long)]
    pub verbose: bool,

    /// Disable colored output
    #[arg(long)]
    pub no_color: bool,
}

/// A family of lookups
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum Source {
    /// IP, MX and SPF lookups
    Dns,
    /// Geolocation, verification and enrichment services
    Web,
    /// Domain registration lookup
    Whois,
}
