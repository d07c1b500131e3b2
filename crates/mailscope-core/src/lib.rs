//! Core types and errors for mailscope.
//!
//! This crate provides the foundational types shared by the mailscope crates:
//!
//! - **Types**: [`EmailAddress`], [`LookupOutcome`], [`MxRecord`], [`WhoisRecord`]
//! - **Report**: the aggregated [`Report`] and its HTML renderer
//! - **Errors**: library-wide error handling with [`MailscopeError`]
//!
//! # Example
//!
//! ```rust
//! use mailscope_core::EmailAddress;
//!
//! let email = EmailAddress::parse("user@example.com").unwrap();
//! assert_eq!(email.domain(), "example.com");
//! ```

#![doc(html_root_url = "https://docs.rs/mailscope-core/0.1.0")]

mod error;
pub mod report;
pub mod types;

pub use error::{MailscopeError, Result};
pub use report::{render_html, Lookups, Report, DEFAULT_REPORT_FILE};
pub use types::*;
