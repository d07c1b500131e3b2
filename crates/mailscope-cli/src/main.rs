//! mailscope - investigate an email address
//!
//! Looks the address up across DNS, WHOIS and third-party services and writes
//! the results to an HTML report.

use anyhow::Result;

#[tokio::main]
async fn main() -> Result<()> {
    mailscope_cli::run().await
}
