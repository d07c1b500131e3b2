use serde::{Deserialize, Serialize};

/// Result of a single lookup.
///
/// Every lookup either produces a value or a human readable reason it did
/// not. Failures are data, not errors: they end up in the report next to the
/// successful lookups.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "status", rename_all = "lowercase")]
pub enum LookupOutcome<T> {
    /// The lookup produced a value
    Success {
        /// The looked-up value
        value: T,
    },
    /// The lookup failed
    Failure {
        /// Why the lookup failed
        reason: String,
    },
}

impl<T> LookupOutcome<T> {
    /// Wrap a successful value
    pub const fn success(value: T) -> Self {
        Self::Success { value }
    }

    /// Wrap a failure reason
    pub fn failure(reason: impl Into<String>) -> Self {
        Self::Failure {
            reason: reason.into(),
        }
    }

    /// Convert a `Result`, describing the error with `describe`.
    pub fn from_result<E>(result: Result<T, E>, describe: impl FnOnce(E) -> String) -> Self {
        match result {
            Ok(value) => Self::success(value),
            Err(err) => Self::failure(describe(err)),
        }
    }

    /// Returns true for a successful lookup
    #[must_use]
    pub const fn is_success(&self) -> bool {
        matches!(self, Self::Success { .. })
    }

    /// The successful value, if any
    #[must_use]
    pub const fn value(&self) -> Option<&T> {
        match self {
            Self::Success { value } => Some(value),
            Self::Failure { .. } => None,
        }
    }

    /// The failure reason, if any
    #[must_use]
    pub fn reason(&self) -> Option<&str> {
        match self {
            Self::Success { .. } => None,
            Self::Failure { reason } => Some(reason),
        }
    }
}
