//! Build the lookup sources, investigate and write the report.

use anyhow::Result;
use colored::Colorize;
use mailscope::recon::dns::DnsResolver;
use mailscope::recon::whois::WhoisClient;
use mailscope::{EmailAddress, Investigator, MailscopeClient};
use tracing::{debug, warn};

use super::args::Source;
use crate::config::Settings;
use crate::output::write_report;

/// Investigate `email` with every source not in `skip`.
pub async fn execute(email: &EmailAddress, settings: &Settings, skip: &[Source]) -> Result<()> {
    let investigator = build_investigator(settings, skip)?;
    let report = investigator.investigate(email).await;

    let content = settings.format.render(&report)?;
    write_report(&settings.output, &content)?;

    println!(
        "{} file '{}' has been created.",
        settings.format.label(),
        settings.output.display()
    );

    let failures = report.failure_count();
    if failures > 0 {
        println!(
            "{}",
            format!("{failures} of 7 lookups failed; see the report for details.").yellow()
        );
    } else {
        println!("{}", "All lookups succeeded.".green());
    }

    Ok(())
}

fn build_investigator(settings: &Settings, skip: &[Source]) -> Result<Investigator> {
    let mut investigator = Investigator::new();

    if skip.contains(&Source::Dns) {
        debug!("DNS lookups skipped");
    } else {
        match DnsResolver::new() {
            Ok(resolver) => investigator = investigator.with_dns(resolver),
            Err(e) => warn!(error = %e, "DNS resolver unavailable"),
        }
    }

    if skip.contains(&Source::Web) {
        debug!("web lookups skipped");
    } else {
        let client = MailscopeClient::builder()
            .endpoints(settings.endpoints.clone())
            .credentials(settings.credentials.clone())
            .timeout(settings.timeout)
            .build()?;
        investigator = investigator.with_web(client);
    }

    if skip.contains(&Source::Whois) {
        debug!("WHOIS lookups skipped");
    } else {
        match WhoisClient::new() {
            Ok(whois) => investigator = investigator.with_whois(whois.with_timeout(settings.timeout)),
            Err(e) => warn!(error = %e, "WHOIS client unavailable"),
        }
    }

    Ok(investigator)
}
