//! Lookup sources consulted by the [`Investigator`](crate::Investigator).
//!
//! Each trait covers one family of lookups so tests can substitute fakes.

use async_trait::async_trait;
use mailscope_client::MailscopeClient;
use mailscope_core::{JsonMap, MxRecord, WhoisRecord};
use std::net::IpAddr;

use crate::dns::DnsResolver;
use crate::error::ReconResult;

/// Domain name lookups
#[async_trait]
pub trait DnsLookup: Send + Sync {
    /// Forward-resolve a domain to one address
    async fn lookup_ip(&self, domain: &str) -> ReconResult<IpAddr>;

    /// MX records of a domain
    async fn lookup_mx(&self, domain: &str) -> ReconResult<Vec<MxRecord>>;

    /// TXT records of a domain, one string per record
    async fn lookup_txt(&self, domain: &str) -> ReconResult<Vec<String>>;
}

/// Web service lookups
#[async_trait]
pub trait WebLookup: Send + Sync {
    /// Geolocation of an IP address
    async fn geolocate(&self, ip: IpAddr) -> mailscope_core::Result<JsonMap>;

    /// Deliverability check of an email address
    async fn verify_email(&self, email: &str) -> mailscope_core::Result<JsonMap>;

    /// Person/company behind an email address
    async fn find_owner(&self, email: &str) -> mailscope_core::Result<JsonMap>;
}

/// Domain registration lookups
#[async_trait]
pub trait WhoisLookup: Send + Sync {
    /// Registration details of a domain
    async fn whois(&self, domain: &str) -> ReconResult<WhoisRecord>;
}

#[async_trait]
impl DnsLookup for DnsResolver {
    async fn lookup_ip(&self, domain: &str) -> ReconResult<IpAddr> {
        self.lookup(domain).await
    }

    async fn lookup_mx(&self, domain: &str) -> ReconResult<Vec<MxRecord>> {
        Self::lookup_mx(self, domain).await
    }

    async fn lookup_txt(&self, domain: &str) -> ReconResult<Vec<String>> {
        Self::lookup_txt(self, domain).await
    }
}

#[async_trait]
impl WebLookup for MailscopeClient {
    async fn geolocate(&self, ip: IpAddr) -> mailscope_core::Result<JsonMap> {
        self.geolocation().lookup(ip).await
    }

    async fn verify_email(&self, email: &str) -> mailscope_core::Result<JsonMap> {
        self.verification().verify(email).await
    }

    async fn find_owner(&self, email: &str) -> mailscope_core::Result<JsonMap> {
        self.enrichment().find(email).await
    }
}

#[cfg(feature = "whois")]
#[async_trait]
impl WhoisLookup for crate::whois::WhoisClient {
    async fn whois(&self, domain: &str) -> ReconResult<WhoisRecord> {
        self.lookup_domain(domain).await
    }
}
