//! Investigate an email address across DNS, WHOIS and third-party services.
//!
//! # Quick Start
//!
//! ```rust,ignore
//! use mailscope::{Credentials, Investigator, MailscopeClient};
//! use mailscope::recon::dns::DnsResolver;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let client = MailscopeClient::builder()
//!         .credentials(Credentials::new().hunter("hunter-key").clearbit("clearbit-key"))
//!         .build()?;
//!
//!     let investigator = Investigator::new()
//!         .with_dns(DnsResolver::new()?)
//!         .with_web(client);
//!
//!     let report = investigator.investigate_input("user@example.com").await?;
//!     std::fs::write("report.html", mailscope::render_html(&report))?;
//!     Ok(())
//! }
//! ```
//!
//! # Features
//!
//! - `default` - rustls and WHOIS
//! - `rustls` - Use rustls for TLS (recommended)
//! - `native-tls` - Use system native TLS
//! - `whois` - Enable WHOIS lookups

#![doc(html_root_url = "https://docs.rs/mailscope/0.1.0")]

// Re-export core types
pub use mailscope_core::*;

// Re-export client
pub use mailscope_client::{
    Credentials, Endpoints, MailscopeClient, MailscopeClientBuilder, DEFAULT_ENRICHMENT_URL,
    DEFAULT_GEOLOCATION_URL, DEFAULT_VERIFICATION_URL,
};

// Re-export recon
pub use mailscope_recon as recon;
pub use mailscope_recon::Investigator;

// Re-export runtime for convenience
pub use serde_json;
pub use tokio;
