//! # mailscope-cli
//!
//! Command-line interface for investigating an email address.
//!
//! ## Features
//!
//! - **Lookups**: IP, MX, SPF, geolocation, email verification, owner enrichment, WHOIS
//! - **Reports**: standalone HTML document or JSON
//! - **Configuration**: TOML file, environment variables and flags

pub mod cli;
pub mod config;
pub mod logging;
pub mod output;

pub use cli::run;
