//! CLI argument parsing and the investigation flow.

pub mod args;
mod investigate;

use anyhow::Result;
use args::Cli;
use clap::Parser;
use mailscope::EmailAddress;
use tokio::io::{AsyncBufReadExt, AsyncWriteExt, BufReader};

use crate::config::{Config, Settings};

/// Message printed when the input is not an email address
pub const INVALID_EMAIL: &str = "Invalid email ID.";

/// Run the CLI application.
pub async fn run() -> Result<()> {
    let cli = Cli::parse();

    if cli.no_color {
        colored::control::set_override(false);
    }
    crate::logging::init(cli.verbose);

    let config = match &cli.config {
        Some(path) => Config::load_from(path)?,
        None => Config::load()?,
    };

    let input = match &cli.email {
        Some(email) => email.clone(),
        None => prompt_email().await?,
    };

    let Some(email) = EmailAddress::parse(&input) else {
        println!("{INVALID_EMAIL}");
        return Ok(());
    };

    let settings = Settings::resolve(&cli, config);
    investigate::execute(&email, &settings, &cli.skip).await
}

/// Ask for an address on standard input
async fn prompt_email() -> Result<String> {
    let mut stdout = tokio::io::stdout();
    stdout.write_all(b"Enter the email ID: ").await?;
    stdout.flush().await?;

    let mut line = String::new();
    BufReader::new(tokio::io::stdin())
        .read_line(&mut line)
        .await?;

    Ok(line)
}
