use thiserror::Error;

/// Result type alias for reconnaissance operations
pub type ReconResult<T> = std::result::Result<T, ReconError>;

/// Errors from DNS and WHOIS lookups
#[derive(Error, Debug)]
pub enum ReconError {
    /// WHOIS lookup error
    #[error("WHOIS error: {0}")]
    Whois(String),

    /// DNS resolution error
    #[error("DNS error: {0}")]
    Dns(String),

    /// Input rejected before any lookup ran
    #[error("invalid email address: {0}")]
    InvalidEmail(String),
}
