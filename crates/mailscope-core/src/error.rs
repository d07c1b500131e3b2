use thiserror::Error;

/// Result type alias for mailscope operations
pub type Result<T> = std::result::Result<T, MailscopeError>;

/// Errors that can occur while investigating an email address
#[derive(Error, Debug)]
pub enum MailscopeError {
    /// Input is not a usable email address
    #[error("invalid email address: {0}")]
    InvalidEmail(String),

    /// No API key configured for a third-party service
    #[error("{service} API key not configured")]
    MissingApiKey {
        /// Human readable service name
        service: &'static str,
    },

    /// Authentication failed - invalid API key
    #[error("authentication failed: invalid API key")]
    Unauthorized,

    /// Resource not found
    #[error("resource not found: {resource}")]
    NotFound {
        /// Description of the resource that wasn't found
        resource: String,
    },

    /// Remote service returned an error response
    #[error("API error ({code}): {message}")]
    Api {
        /// HTTP status code
        code: u16,
        /// Error message from the service
        message: String,
    },

    /// HTTP request failed
    #[error("HTTP request failed: {0}")]
    Http(String),

    /// JSON parsing/serialization error
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Response body was valid JSON but not an object
    #[error("unexpected response shape: {0}")]
    UnexpectedResponse(String),

    /// Configuration error
    #[error("configuration error: {0}")]
    Config(String),
}

impl MailscopeError {
    /// Returns the HTTP status code if the error came from a service response
    #[must_use]
    pub const fn status_code(&self) -> Option<u16> {
        match self {
            Self::Unauthorized => Some(401),
            Self::NotFound { .. } => Some(404),
            Self::Api { code, .. } => Some(*code),
            _ => None,
        }
    }
}
