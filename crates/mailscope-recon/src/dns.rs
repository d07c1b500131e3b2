//! DNS resolution integration.

use crate::error::{ReconError, ReconResult};
use hickory_resolver::TokioResolver;
use mailscope_core::{sort_mx_records, MxRecord};
use std::net::IpAddr;
use tracing::debug;

/// DNS resolver backed by the system configuration
pub struct DnsResolver {
    resolver: TokioResolver,
}

impl DnsResolver {
    /// Create a resolver from the system configuration (`/etc/resolv.conf`
    /// or the platform equivalent)
    pub fn new() -> ReconResult<Self> {
        let resolver = TokioResolver::builder_tokio()
            .map_err(|e| ReconError::Dns(format!("failed to create resolver: {e}")))?
            .build();
        Ok(Self { resolver })
    }

    /// Resolve a host name through the operating system resolver.
    ///
    /// Returns the first IPv4 address when there is one, otherwise the first
    /// address of any family.
    pub async fn lookup(&self, hostname: &str) -> ReconResult<IpAddr> {
        resolve_host(hostname).await
    }

    /// Lookup MX records for a domain, sorted by preference
    pub async fn lookup_mx(&self, domain: &str) -> ReconResult<Vec<MxRecord>> {
        let response = self
            .resolver
            .mx_lookup(domain)
            .await
            .map_err(|e| ReconError::Dns(e.to_string()))?;

        let mut records: Vec<MxRecord> = response
            .iter()
            .map(|mx| MxRecord::new(mx.preference(), mx.exchange().to_string()))
            .collect();
        sort_mx_records(&mut records);

        debug!(domain, count = records.len(), "MX lookup complete");
        Ok(records)
    }

    /// Lookup TXT records for a domain.
    ///
    /// The character-strings of each record are concatenated, so every
    /// returned string is one complete record.
    pub async fn lookup_txt(&self, domain: &str) -> ReconResult<Vec<String>> {
        let response = self
            .resolver
            .txt_lookup(domain)
            .await
            .map_err(|e| ReconError::Dns(e.to_string()))?;

        let records: Vec<String> = response
            .iter()
            .map(|txt| join_character_strings(txt.txt_data()))
            .collect();

        debug!(domain, count = records.len(), "TXT lookup complete");
        Ok(records)
    }
}

async fn resolve_host(hostname: &str) -> ReconResult<IpAddr> {
    use tokio::net::lookup_host;

    // Use port 0 for lookup
    let addr_str = format!("{hostname}:0");
    let addrs: Vec<IpAddr> = lookup_host(&addr_str)
        .await
        .map_err(|e| ReconError::Dns(e.to_string()))?
        .map(|a| a.ip())
        .collect();

    debug!(hostname, count = addrs.len(), "resolved host");

    addrs
        .iter()
        .find(|ip| ip.is_ipv4())
        .or_else(|| addrs.first())
        .copied()
        .ok_or_else(|| ReconError::Dns(format!("no addresses found for {hostname}")))
}

fn join_character_strings(parts: &[Box<[u8]>]) -> String {
    parts
        .iter()
        .map(|data| String::from_utf8_lossy(data))
        .collect::<Vec<_>>()
        .join("")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn joins_split_txt_record() {
        let parts: Vec<Box<[u8]>> = vec![
            b"v=spf1 include:_spf.example.com ".to_vec().into_boxed_slice(),
            b"~all".to_vec().into_boxed_slice(),
        ];
        assert_eq!(
            join_character_strings(&parts),
            "v=spf1 include:_spf.example.com ~all"
        );
    }

    #[tokio::test]
    async fn resolves_ip_literal() {
        let ip = resolve_host("127.0.0.1").await.unwrap();
        assert_eq!(ip, "127.0.0.1".parse::<IpAddr>().unwrap());
    }
}
