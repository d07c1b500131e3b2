//! WHOIS lookup integration using whois-rust.

use crate::error::{ReconError, ReconResult};
use mailscope_core::WhoisRecord;
use std::sync::Arc;
use std::time::Duration;
use tracing::debug;
use whois_rust::{WhoIs, WhoIsLookupOptions};

/// Registry servers by TLD
const SERVERS: &str = include_str!("whois_servers.json");

/// WHOIS client
#[derive(Clone)]
pub struct WhoisClient {
    whois: Arc<WhoIs>,
    timeout: Option<Duration>,
}

impl WhoisClient {
    /// Create a new WHOIS client using the bundled server list
    pub fn new() -> ReconResult<Self> {
        Self::from_server_list(SERVERS)
    }

    /// Create a client from a JSON server list
    pub fn from_server_list(servers: &str) -> ReconResult<Self> {
        let whois = WhoIs::from_string(servers).map_err(|e| ReconError::Whois(e.to_string()))?;
        Ok(Self {
            whois: Arc::new(whois),
            timeout: None,
        })
    }

    /// Override the per-server connection timeout
    #[must_use]
    pub const fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    /// Lookup WHOIS information for a domain.
    ///
    /// The query itself is blocking and runs on the blocking thread pool.
    pub async fn lookup_domain(&self, domain: &str) -> ReconResult<WhoisRecord> {
        let mut options =
            WhoIsLookupOptions::from_string(domain).map_err(|e| ReconError::Whois(e.to_string()))?;
        if self.timeout.is_some() {
            options.timeout = self.timeout;
        }

        let whois = Arc::clone(&self.whois);
        let raw = tokio::task::spawn_blocking(move || whois.lookup(options))
            .await
            .map_err(|e| ReconError::Whois(format!("lookup task failed: {e}")))?
            .map_err(|e| ReconError::Whois(e.to_string()))?;

        debug!(domain, bytes = raw.len(), "WHOIS response received");
        Ok(WhoisRecord::parse(&raw))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bundled_server_list_loads() {
        assert!(WhoisClient::new().is_ok());
    }

    #[test]
    fn server_list_is_valid_json() {
        let servers: serde_json::Value = serde_json::from_str(SERVERS).unwrap();
        assert!(servers.get("com").is_some());
        assert!(servers.get("_").is_some());
    }

    #[test]
    fn rejects_malformed_server_list() {
        assert!(WhoisClient::from_server_list("not json").is_err());
    }
}
