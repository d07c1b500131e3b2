//! HTTP client for the web services mailscope queries.
//!
//! This crate provides [`MailscopeClient`] with one API handle per service:
//! IP geolocation, email verification and person/company enrichment.

#![doc(html_root_url = "https://docs.rs/mailscope-client/0.1.0")]

mod client;
mod config;
pub mod api;

pub use client::{MailscopeClient, MailscopeClientBuilder};
pub use config::*;
pub use mailscope_core::{MailscopeError, Result};
