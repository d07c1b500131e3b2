use serde::{Deserialize, Serialize};
use std::fmt;

/// A mail exchanger for a domain
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct MxRecord {
    /// Preference value, lower is preferred
    pub preference: u16,

    /// Mail server host name, without the trailing root dot
    pub exchange: String,
}

impl MxRecord {
    /// Create a record, normalizing the exchange name
    #[must_use]
    pub fn new(preference: u16, exchange: impl Into<String>) -> Self {
        let exchange = exchange.into();
        let exchange = exchange.strip_suffix('.').unwrap_or(&exchange).to_string();
        Self {
            preference,
            exchange,
        }
    }
}

/// Sort records by preference, then by exchange name
pub fn sort_mx_records(records: &mut [MxRecord]) {
    records.sort();
}

impl fmt::Display for MxRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.preference, self.exchange)
    }
}
