//! Email investigation by combining data from multiple sources.

use mailscope_core::{
    EmailAddress, JsonMap, Lookups, LookupOutcome, MailscopeError, MxRecord, Report, WhoisRecord,
};
use std::net::IpAddr;
use tracing::{debug, info, warn};

use crate::error::{ReconError, ReconResult};
use crate::sources::{DnsLookup, WebLookup, WhoisLookup};

/// SPF outcome when the domain publishes TXT records but none is SPF
pub const NO_SPF_RECORD: &str = "No SPF record found";

/// Builder for email investigations with multiple data sources.
///
/// Sources that are not configured produce a failure outcome in the report
/// instead of a lookup.
#[derive(Default)]
pub struct Investigator {
    dns: Option<Box<dyn DnsLookup>>,
    web: Option<Box<dyn WebLookup>>,
    whois: Option<Box<dyn WhoisLookup>>,
}

impl Investigator {
    /// Create an investigator without any source
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Add DNS lookups (IP, MX, SPF)
    #[must_use]
    pub fn with_dns(mut self, dns: impl DnsLookup + 'static) -> Self {
        self.dns = Some(Box::new(dns));
        self
    }

    /// Add web service lookups (geolocation, verification, enrichment)
    #[must_use]
    pub fn with_web(mut self, web: impl WebLookup + 'static) -> Self {
        self.web = Some(Box::new(web));
        self
    }

    /// Add WHOIS lookups
    #[must_use]
    pub fn with_whois(mut self, whois: impl WhoisLookup + 'static) -> Self {
        self.whois = Some(Box::new(whois));
        self
    }

    /// Parse `input` and investigate it.
    ///
    /// Malformed input is rejected before any source is consulted.
    pub async fn investigate_input(&self, input: &str) -> ReconResult<Report> {
        let email = EmailAddress::parse(input)
            .ok_or_else(|| ReconError::InvalidEmail(input.trim().to_string()))?;
        Ok(self.investigate(&email).await)
    }

    /// Run every lookup for `email` and assemble the report.
    ///
    /// Lookups run concurrently; geolocation waits for the IP resolution it
    /// depends on. Individual failures never abort the investigation.
    pub async fn investigate(&self, email: &EmailAddress) -> Report {
        let domain = email.domain();
        info!(email = %email, domain, "starting investigation");

        let address = async {
            let ip_address = self.ip_address(domain).await;
            let geolocation = self.geolocation(domain, &ip_address).await;
            (ip_address, geolocation)
        };

        let ((ip_address, geolocation), mx_records, spf_record, verification, owner, whois) = tokio::join!(
            address,
            self.mx_records(domain),
            self.spf_record(domain),
            self.verification(email.as_str()),
            self.owner(email.as_str()),
            self.whois(domain),
        );

        let report = Report::new(
            email.clone(),
            Lookups {
                ip_address,
                mx_records,
                spf_record,
                geolocation,
                verification,
                owner,
                whois,
            },
        );

        info!(
            email = %email,
            failures = report.failure_count(),
            "investigation complete"
        );
        report
    }

    async fn ip_address(&self, domain: &str) -> LookupOutcome<IpAddr> {
        let Some(dns) = &self.dns else {
            return not_configured("DNS");
        };
        debug!(domain, "resolving address");
        logged(
            "ip",
            LookupOutcome::from_result(dns.lookup_ip(domain).await, |e| e.to_string()),
        )
    }

    async fn mx_records(&self, domain: &str) -> LookupOutcome<Vec<MxRecord>> {
        let Some(dns) = &self.dns else {
            return not_configured("DNS");
        };
        debug!(domain, "looking up MX records");
        logged("mx", mx_outcome(dns.lookup_mx(domain).await))
    }

    async fn spf_record(&self, domain: &str) -> LookupOutcome<String> {
        let Some(dns) = &self.dns else {
            return not_configured("DNS");
        };
        debug!(domain, "looking up SPF record");
        logged("spf", spf_outcome(dns.lookup_txt(domain).await))
    }

    async fn geolocation(
        &self,
        domain: &str,
        ip_address: &LookupOutcome<IpAddr>,
    ) -> LookupOutcome<JsonMap> {
        let Some(web) = &self.web else {
            return not_configured("Geolocation");
        };
        let Some(ip) = ip_address.value() else {
            return LookupOutcome::failure(format!("No IP address resolved for {domain}"));
        };
        debug!(%ip, "geolocating address");
        logged("geolocation", geolocation_outcome(web.geolocate(*ip).await))
    }

    async fn verification(&self, email: &str) -> LookupOutcome<JsonMap> {
        let Some(web) = &self.web else {
            return not_configured("Email verification");
        };
        debug!(email, "verifying address");
        logged("verification", verification_outcome(web.verify_email(email).await))
    }

    async fn owner(&self, email: &str) -> LookupOutcome<JsonMap> {
        let Some(web) = &self.web else {
            return not_configured("Enrichment");
        };
        debug!(email, "looking up owner");
        logged("owner", owner_outcome(web.find_owner(email).await))
    }

    async fn whois(&self, domain: &str) -> LookupOutcome<WhoisRecord> {
        let Some(whois) = &self.whois else {
            return not_configured("WHOIS");
        };
        debug!(domain, "querying WHOIS");
        logged("whois", whois_outcome(domain, whois.whois(domain).await))
    }
}

/// MX records sorted by preference; an empty answer counts as a failure
pub fn mx_outcome(result: ReconResult<Vec<MxRecord>>) -> LookupOutcome<Vec<MxRecord>> {
    match result {
        Ok(records) if records.is_empty() => LookupOutcome::failure("Error: no MX records found"),
        Ok(mut records) => {
            mailscope_core::sort_mx_records(&mut records);
            LookupOutcome::success(records)
        }
        Err(e) => LookupOutcome::failure(format!("Error: {e}")),
    }
}

/// The first TXT record mentioning `v=spf1`, or [`NO_SPF_RECORD`]
pub fn spf_outcome(result: ReconResult<Vec<String>>) -> LookupOutcome<String> {
    match result {
        Ok(records) => LookupOutcome::success(
            records
                .into_iter()
                .find(|txt| txt.contains("v=spf1"))
                .unwrap_or_else(|| NO_SPF_RECORD.to_string()),
        ),
        Err(e) => LookupOutcome::failure(format!("Error: {e}")),
    }
}

/// Geolocation response, failures carry the HTTP status when there is one
pub fn geolocation_outcome(result: mailscope_core::Result<JsonMap>) -> LookupOutcome<JsonMap> {
    LookupOutcome::from_result(result, |e| describe_http(&e, |code| format!("HTTP {code}")))
}

/// Verification response, failures carry the HTTP status when there is one
pub fn verification_outcome(result: mailscope_core::Result<JsonMap>) -> LookupOutcome<JsonMap> {
    LookupOutcome::from_result(result, |e| describe_http(&e, |code| format!("HTTP {code}")))
}

/// Enrichment response. Connection failures are reported like any other
/// failure and do not abort the investigation.
pub fn owner_outcome(result: mailscope_core::Result<JsonMap>) -> LookupOutcome<JsonMap> {
    LookupOutcome::from_result(result, |e| {
        describe_http(&e, |code| format!("Unable to fetch owner info: {code}"))
    })
}

/// WHOIS registration details; a response without any recognised field
/// (e.g. `No match for "EXAMPLE.TEST".`) counts as a failure
pub fn whois_outcome(
    domain: &str,
    result: ReconResult<WhoisRecord>,
) -> LookupOutcome<WhoisRecord> {
    match result {
        Ok(record) if record.fields().is_empty() => {
            LookupOutcome::failure(format!("No WHOIS record for {domain}"))
        }
        Ok(record) => LookupOutcome::success(record),
        Err(e) => LookupOutcome::failure(e.to_string()),
    }
}

fn describe_http(err: &MailscopeError, with_status: impl FnOnce(u16) -> String) -> String {
    err.status_code().map_or_else(|| err.to_string(), with_status)
}

fn not_configured<T>(source: &str) -> LookupOutcome<T> {
    LookupOutcome::failure(format!("{source} lookups not configured"))
}

fn logged<T>(lookup: &'static str, outcome: LookupOutcome<T>) -> LookupOutcome<T> {
    if let Some(reason) = outcome.reason() {
        warn!(lookup, reason, "lookup failed");
    }
    outcome
}
