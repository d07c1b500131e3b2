//! Client configuration types.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Default IP geolocation service
pub const DEFAULT_GEOLOCATION_URL: &str = "https://ipinfo.io";

/// Default email verification service
pub const DEFAULT_VERIFICATION_URL: &str = "https://api.hunter.io";

/// Default person/company enrichment service
pub const DEFAULT_ENRICHMENT_URL: &str = "https://person.clearbit.com";

/// Base URLs of the services the client talks to
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Endpoints {
    /// IP geolocation service
    #[serde(default = "default_geolocation")]
    pub geolocation: String,

    /// Email verification service
    #[serde(default = "default_verification")]
    pub verification: String,

    /// Person/company enrichment service
    #[serde(default = "default_enrichment")]
    pub enrichment: String,
}

impl Default for Endpoints {
    fn default() -> Self {
        Self {
            geolocation: default_geolocation(),
            verification: default_verification(),
            enrichment: default_enrichment(),
        }
    }
}

impl Endpoints {
    /// Point every service at the same base URL (useful for testing)
    #[must_use]
    pub fn all(base: &str) -> Self {
        Self {
            geolocation: base.to_string(),
            verification: base.to_string(),
            enrichment: base.to_string(),
        }
    }
}

fn default_geolocation() -> String {
    DEFAULT_GEOLOCATION_URL.to_string()
}

fn default_verification() -> String {
    DEFAULT_VERIFICATION_URL.to_string()
}

fn default_enrichment() -> String {
    DEFAULT_ENRICHMENT_URL.to_string()
}

/// API keys for the authenticated services.
///
/// Set once at startup and read-only afterwards.
#[derive(Clone, Default, PartialEq, Eq)]
pub struct Credentials {
    /// Email verification (Hunter.io) API key
    pub hunter_api_key: Option<String>,

    /// Enrichment (Clearbit) API key
    pub clearbit_api_key: Option<String>,
}

impl Credentials {
    /// Create empty credentials
    #[must_use]
    pub const fn new() -> Self {
        Self {
            hunter_api_key: None,
            clearbit_api_key: None,
        }
    }

    /// Set the Hunter.io key
    #[must_use]
    pub fn hunter(mut self, key: impl Into<String>) -> Self {
        self.hunter_api_key = Some(key.into()).filter(|k: &String| !k.is_empty());
        self
    }

    /// Set the Clearbit key
    #[must_use]
    pub fn clearbit(mut self, key: impl Into<String>) -> Self {
        self.clearbit_api_key = Some(key.into()).filter(|k: &String| !k.is_empty());
        self
    }
}

// Keys never show up in logs
impl fmt::Debug for Credentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fn mask(key: Option<&String>) -> &'static str {
            if key.is_some() {
                "<set>"
            } else {
                "<unset>"
            }
        }

        f.debug_struct("Credentials")
            .field("hunter_api_key", &mask(self.hunter_api_key.as_ref()))
            .field("clearbit_api_key", &mask(self.clearbit_api_key.as_ref()))
            .finish()
    }
}
