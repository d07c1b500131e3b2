//! Report output in the supported formats.

use anyhow::{Context as _, Result};
use clap::ValueEnum;
use mailscope::{render_html, Report, DEFAULT_REPORT_FILE};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Available report formats.
#[derive(Debug, Clone, Copy, Default, ValueEnum, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Standalone HTML document
    #[default]
    Html,
    /// Pretty-printed JSON
    Json,
}

impl OutputFormat {
    /// Report file used when none is configured
    #[must_use]
    pub fn default_path(self) -> PathBuf {
        match self {
            Self::Html => PathBuf::from(DEFAULT_REPORT_FILE),
            Self::Json => Path::new(DEFAULT_REPORT_FILE).with_extension("json"),
        }
    }

    /// Label used in status messages
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Html => "HTML",
            Self::Json => "JSON",
        }
    }

    /// Render a report in this format
    pub fn render(self, report: &Report) -> Result<String> {
        match self {
            Self::Html => Ok(render_html(report)),
            Self::Json => {
                let mut json = serde_json::to_string_pretty(report)?;
                json.push('\n');
                Ok(json)
            }
        }
    }
}

/// Write a rendered report, replacing any previous one.
pub fn write_report(path: &Path, content: &str) -> Result<()> {
    std::fs::write(path, content)
        .with_context(|| format!("failed to write report to '{}'", path.display()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use mailscope::{EmailAddress, LookupOutcome, Lookups};

    fn report() -> Report {
        Report::new(
            EmailAddress::parse("user@example.com").unwrap(),
            Lookups {
                ip_address: LookupOutcome::failure("DNS lookups not configured"),
                mx_records: LookupOutcome::failure("DNS lookups not configured"),
                spf_record: LookupOutcome::failure("DNS lookups not configured"),
                geolocation: LookupOutcome::failure("No IP address resolved for example.com"),
                verification: LookupOutcome::failure("HTTP 422"),
                owner: LookupOutcome::failure("Clearbit API key not configured"),
                whois: LookupOutcome::failure("WHOIS lookups not configured"),
            },
        )
    }

    #[test]
    fn default_paths() {
        assert_eq!(
            OutputFormat::Html.default_path(),
            PathBuf::from("email_data_viewer.html")
        );
        assert_eq!(
            OutputFormat::Json.default_path(),
            PathBuf::from("email_data_viewer.json")
        );
    }

    #[test]
    fn json_round_trips_report() {
        let report = report();
        let json = OutputFormat::Json.render(&report).unwrap();
        let back: Report = serde_json::from_str(&json).unwrap();
        assert_eq!(back, report);
        assert!(json.contains("\"domain\": \"example.com\""));
    }

    #[test]
    fn write_report_overwrites() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("report.html");
        write_report(&path, "first").unwrap();
        write_report(&path, "second").unwrap();
        assert_eq!(std::fs::read_to_string(&path).unwrap(), "second");
    }
}
