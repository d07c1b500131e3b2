use serde::{Deserialize, Serialize};
use std::fmt;

use crate::{MailscopeError, Result};

/// An email address together with the domain that follows its first `@`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct EmailAddress {
    address: String,
    at: usize,
}

impl EmailAddress {
    /// Parse an address, returning `None` when no domain can be extracted.
    ///
    /// Surrounding whitespace is ignored. The domain is everything after the
    /// first `@`; an address without `@`, or ending in `@`, has no domain.
    #[must_use]
    pub fn parse(input: &str) -> Option<Self> {
        let address = input.trim();
        let at = address.find('@')?;
        if at + 1 == address.len() {
            return None;
        }

        Some(Self {
            address: address.to_string(),
            at,
        })
    }

    /// The full address as entered
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.address
    }

    /// The part before the first `@`
    #[must_use]
    pub fn local_part(&self) -> &str {
        &self.address[..self.at]
    }

    /// The part after the first `@`
    #[must_use]
    pub fn domain(&self) -> &str {
        &self.address[self.at + 1..]
    }
}

impl fmt::Display for EmailAddress {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.address)
    }
}

impl std::str::FromStr for EmailAddress {
    type Err = MailscopeError;

    fn from_str(s: &str) -> Result<Self> {
        Self::parse(s).ok_or_else(|| MailscopeError::InvalidEmail(s.to_string()))
    }
}

impl TryFrom<String> for EmailAddress {
    type Error = MailscopeError;

    fn try_from(value: String) -> Result<Self> {
        value.parse()
    }
}

impl From<EmailAddress> for String {
    fn from(email: EmailAddress) -> Self {
        email.address
    }
}
