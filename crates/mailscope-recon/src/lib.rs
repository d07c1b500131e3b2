//! DNS, WHOIS and lookup aggregation for mailscope.
//!
//! The [`Investigator`] fans out every lookup for one email address and
//! collects the outcomes into a [`Report`](mailscope_core::Report).

#![doc(html_root_url = "https://docs.rs/mailscope-recon/0.1.0")]

mod error;

pub mod dns;
pub mod investigation;
pub mod sources;

#[cfg(feature = "whois")]
pub mod whois;

pub use error::{ReconError, ReconResult};
pub use investigation::{Investigator, NO_SPF_RECORD};
pub use sources::{DnsLookup, WebLookup, WhoisLookup};
