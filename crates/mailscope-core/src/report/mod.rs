//! The aggregated investigation report.

mod html;

use serde::{Deserialize, Serialize};
use std::net::IpAddr;

use crate::types::{EmailAddress, JsonMap, LookupOutcome, MxRecord, WhoisRecord};

pub use html::{capitalize, escape_html, render_html, DEFAULT_REPORT_FILE};

/// Outcome of every lookup performed for one email address
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Lookups {
    /// Forward resolution of the domain
    pub ip_address: LookupOutcome<IpAddr>,
    /// MX records of the domain
    pub mx_records: LookupOutcome<Vec<MxRecord>>,
    /// SPF record text, or the "not found" marker
    pub spf_record: LookupOutcome<String>,
    /// Geolocation of the resolved IP address
    pub geolocation: LookupOutcome<JsonMap>,
    /// Email verification service response
    pub verification: LookupOutcome<JsonMap>,
    /// Person/company enrichment service response
    pub owner: LookupOutcome<JsonMap>,
    /// Domain registration details
    pub whois: LookupOutcome<WhoisRecord>,
}

/// Everything known about one email address
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Report {
    /// The investigated address
    pub email: EmailAddress,
    /// Domain part of the address
    pub domain: String,
    /// Lookup outcomes
    #[serde(flatten)]
    pub lookups: Lookups,
}

impl Report {
    /// Assemble a report for `email`
    #[must_use]
    pub fn new(email: EmailAddress, lookups: Lookups) -> Self {
        let domain = email.domain().to_string();
        Self {
            email,
            domain,
            lookups,
        }
    }

    /// Number of lookups that failed
    #[must_use]
    pub fn failure_count(&self) -> usize {
        let l = &self.lookups;
        [
            l.ip_address.is_success(),
            l.mx_records.is_success(),
            l.spf_record.is_success(),
            l.geolocation.is_success(),
            l.verification.is_success(),
            l.owner.is_success(),
            l.whois.is_success(),
        ]
        .iter()
        .filter(|ok| !**ok)
        .count()
    }
}
