//! HTML rendering of a [`Report`].

use serde_json::Value;
use std::fmt::Write;

use super::Report;
use crate::types::{JsonMap, LookupOutcome};

/// File name the report is written to unless configured otherwise
pub const DEFAULT_REPORT_FILE: &str = "email_data_viewer.html";

const NO_DATA: &str = "No data available";

const HEAD: &str = r#"<!DOCTYPE html>
<html lang="en">
<head>
    <meta charset="UTF-8">
    <meta name="viewport" content="width=device-width, initial-scale=1.0">
    <title>Email Data Viewer</title>
    <style>
        body {
            font-family: Arial, sans-serif;
            display: flex;
            justify-content: center;
            align-items: center;
            flex-direction: column;
            padding: 20px;
            margin: 0;
            background-color: #f9f9f9;
        }
        h1 {
            text-align: center;
            margin-bottom: 20px;
        }
        table {
            width: 100%;
            max-width: 800px;
            border-collapse: collapse;
            margin-bottom: 20px;
            background-color: white;
            box-shadow: 0 0 10px rgba(0, 0, 0, 0.1);
        }
        th, td {
            border: 1px solid #ddd;
            padding: 12px;
            text-align: left;
        }
        th {
            background-color: #f2f2f2;
        }
        .container {
            width: 100%;
            max-width: 800px;
            margin: 0 auto;
        }
    </style>
</head>
"#;

const FIELD_HEADER: &str = "<tr><th>Field</th><th>Details</th></tr>";

/// Render a report as a standalone HTML document.
///
/// All dynamic text is escaped. The output depends only on the report, so
/// rendering the same report twice yields identical bytes.
#[must_use]
pub fn render_html(report: &Report) -> String {
    let lookups = &report.lookups;
    let mut out = String::with_capacity(8 * 1024);

    out.push_str(HEAD);
    out.push_str("<body>\n<div class=\"container\">\n<h1>Email Data Viewer</h1>\n");

    let ip = lookups
        .ip_address
        .value()
        .map_or_else(|| "N/A".to_string(), ToString::to_string);
    out.push_str("<table>\n");
    out.push_str(FIELD_HEADER);
    out.push('\n');
    row(&mut out, "Email", report.email.as_str());
    row(&mut out, "Domain", &report.domain);
    row(&mut out, "IP Address", &ip);
    out.push_str("</table>\n");

    section(&mut out, "MX Records");
    out.push_str("<tr><th>Priority</th><th>Mail Server</th></tr>\n");
    match &lookups.mx_records {
        LookupOutcome::Success { value } => {
            for mx in value {
                row(&mut out, &mx.preference.to_string(), &mx.exchange);
            }
        }
        LookupOutcome::Failure { reason } => error_row(&mut out, reason),
    }
    out.push_str("</table>\n");

    out.push_str("<h2>SPF Record</h2>\n");
    let spf = match &lookups.spf_record {
        LookupOutcome::Success { value } => value,
        LookupOutcome::Failure { reason } => reason,
    };
    let _ = writeln!(out, "<p>{}</p>", escape_html(spf));

    section(&mut out, "Geolocation Details");
    out.push_str(FIELD_HEADER);
    out.push('\n');
    match &lookups.geolocation {
        LookupOutcome::Success { value } => map_rows(&mut out, value),
        LookupOutcome::Failure { reason } => error_row(&mut out, reason),
    }
    out.push_str("</table>\n");

    section(&mut out, "Email Validation (Hunter.io)");
    out.push_str(FIELD_HEADER);
    out.push('\n');
    match &lookups.verification {
        LookupOutcome::Success { value } => nested_rows(&mut out, value, "data", true),
        LookupOutcome::Failure { reason } => error_row(&mut out, reason),
    }
    out.push_str("</table>\n");

    section(&mut out, "Owner Information (Clearbit)");
    match &lookups.owner {
        LookupOutcome::Success { value } => {
            nested_rows(&mut out, value, "person", true);
            nested_rows(&mut out, value, "company", false);
        }
        LookupOutcome::Failure { reason } => error_row(&mut out, reason),
    }
    out.push_str("</table>\n");

    section(&mut out, "WHOIS Info");
    match &lookups.whois {
        LookupOutcome::Success { value } => {
            let fields = value.fields();
            if fields.is_empty() {
                error_row(&mut out, NO_DATA);
            }
            for (name, text) in fields {
                row(&mut out, &capitalize(name), &text);
            }
        }
        LookupOutcome::Failure { reason } => error_row(&mut out, reason),
    }
    out.push_str("</table>\n");

    out.push_str("</div>\n</body>\n</html>\n");
    out
}

fn section(out: &mut String, title: &str) {
    let _ = write!(out, "<h2>{title}</h2>\n<table>\n");
}

fn row(out: &mut String, label: &str, value: &str) {
    let _ = writeln!(
        out,
        "<tr><td>{}</td><td>{}</td></tr>",
        escape_html(label),
        escape_html(value)
    );
}

fn error_row(out: &mut String, message: &str) {
    let _ = writeln!(out, "<tr><td colspan='2'>{}</td></tr>", escape_html(message));
}

fn map_rows(out: &mut String, map: &JsonMap) {
    for (key, value) in map {
        row(out, &capitalize(key), &value_text(value));
    }
}

/// Rows for the object under `key`. When it is missing and `required` is
/// set, an error row carries the response's `error` field instead.
fn nested_rows(out: &mut String, map: &JsonMap, key: &str, required: bool) {
    match map.get(key) {
        Some(Value::Object(inner)) => map_rows(out, inner),
        _ if required => {
            let message = map.get("error").map_or_else(|| NO_DATA.to_string(), value_text);
            error_row(out, &message);
        }
        _ => {}
    }
}

fn value_text(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        Value::Null => "N/A".to_string(),
        other => other.to_string(),
    }
}

/// Upper-case the first character and lower-case the rest
#[must_use]
pub fn capitalize(key: &str) -> String {
    let mut chars = key.chars();
    chars.next().map_or_else(String::new, |first| {
        first.to_uppercase().chain(chars.flat_map(char::to_lowercase)).collect()
    })
}

/// Escape text for inclusion in HTML element content or attribute values
#[must_use]
pub fn escape_html(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#x27;"),
            c => escaped.push(c),
        }
    }
    escaped
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::report::Lookups;
    use crate::types::{EmailAddress, MxRecord, WhoisRecord};
    use serde_json::json;

    fn object(value: Value) -> JsonMap {
        match value {
            Value::Object(map) => map,
            _ => panic!("expected a JSON object"),
        }
    }

    fn sample_report() -> Report {
        let lookups = Lookups {
            ip_address: LookupOutcome::success("93.184.216.34".parse().unwrap()),
            mx_records: LookupOutcome::success(vec![MxRecord::new(10, "mail.example.com")]),
            spf_record: LookupOutcome::success("v=spf1 include:_spf.example.com ~all".into()),
            geolocation: LookupOutcome::success(object(json!({"country": "US"}))),
            verification: LookupOutcome::success(object(json!({"data": {"status": "valid"}}))),
            owner: LookupOutcome::failure("Unable to fetch owner info: 404"),
            whois: LookupOutcome::success(WhoisRecord {
                registrar: Some("Example Registrar".into()),
                ..WhoisRecord::default()
            }),
        };
        Report::new(EmailAddress::parse("user@example.com").unwrap(), lookups)
    }

    #[test]
    fn end_to_end_scenario() {
        let html = render_html(&sample_report());

        assert!(html.contains("<tr><td>Email</td><td>user@example.com</td></tr>"));
        assert!(html.contains("<tr><td>Domain</td><td>example.com</td></tr>"));
        assert!(html.contains("<tr><td>IP Address</td><td>93.184.216.34</td></tr>"));
        assert!(html.contains("<tr><td>10</td><td>mail.example.com</td></tr>"));
        assert!(html.contains("<p>v=spf1 include:_spf.example.com ~all</p>"));
        assert!(html.contains("<tr><td>Country</td><td>US</td></tr>"));
        assert!(html.contains("<tr><td>Status</td><td>valid</td></tr>"));
        assert!(html.contains("<tr><td colspan='2'>Unable to fetch owner info: 404</td></tr>"));
        assert!(html.contains("<tr><td>Registrar</td><td>Example Registrar</td></tr>"));
    }

    #[test]
    fn sections_appear_in_order() {
        let html = render_html(&sample_report());
        let positions: Vec<usize> = [
            "MX Records",
            "SPF Record",
            "Geolocation Details",
            "Email Validation (Hunter.io)",
            "Owner Information (Clearbit)",
            "WHOIS Info",
        ]
        .iter()
        .map(|title| html.find(&format!("<h2>{title}</h2>")).unwrap())
        .collect();
        assert!(positions.windows(2).all(|w| w[0] < w[1]));
    }

    #[test]
    fn rendering_is_deterministic() {
        let report = sample_report();
        assert_eq!(render_html(&report), render_html(&report.clone()));
    }

    #[test]
    fn geolocation_keys_are_capitalized() {
        let mut report = sample_report();
        report.lookups.geolocation = LookupOutcome::success(object(json!({"city": "X"})));
        let html = render_html(&report);
        assert!(html.contains("<tr><td>City</td><td>X</td></tr>"));
    }

    #[test]
    fn verification_failure_is_merged_row() {
        let mut report = sample_report();
        report.lookups.verification = LookupOutcome::failure("HTTP 422");
        let html = render_html(&report);
        assert!(html.contains("<tr><td colspan='2'>HTTP 422</td></tr>"));
    }

    #[test]
    fn verification_without_data_falls_back() {
        let mut report = sample_report();
        report.lookups.verification = LookupOutcome::success(object(json!({"meta": {}})));
        let html = render_html(&report);
        assert!(html.contains("<tr><td colspan='2'>No data available</td></tr>"));
    }

    #[test]
    fn owner_renders_person_and_company() {
        let mut report = sample_report();
        report.lookups.owner = LookupOutcome::success(object(json!({
            "person": {"name": "Jane"},
            "company": {"sector": "Technology"}
        })));
        let html = render_html(&report);
        let person = html.find("<tr><td>Name</td><td>Jane</td></tr>").unwrap();
        let company = html.find("<tr><td>Sector</td><td>Technology</td></tr>").unwrap();
        assert!(person < company);
    }

    #[test]
    fn owner_without_person_shows_error_field() {
        let mut report = sample_report();
        report.lookups.owner = LookupOutcome::success(object(json!({"error": "queued"})));
        let html = render_html(&report);
        assert!(html.contains("<tr><td colspan='2'>queued</td></tr>"));
    }

    #[test]
    fn mx_failure_and_missing_ip() {
        let mut report = sample_report();
        report.lookups.ip_address = LookupOutcome::failure("unknown host");
        report.lookups.mx_records = LookupOutcome::failure("Error: no MX records found");
        let html = render_html(&report);
        assert!(html.contains("<tr><td>IP Address</td><td>N/A</td></tr>"));
        assert!(html.contains("<tr><td colspan='2'>Error: no MX records found</td></tr>"));
    }

    #[test]
    fn dynamic_text_is_escaped() {
        let mut report = sample_report();
        report.lookups.geolocation =
            LookupOutcome::success(object(json!({"org": "<script>alert('x')</script>"})));
        let html = render_html(&report);
        assert!(!html.contains("<script>"));
        assert!(html.contains("&lt;script&gt;alert(&#x27;x&#x27;)&lt;/script&gt;"));
    }

    #[test]
    fn non_string_values_render_as_json() {
        let mut report = sample_report();
        report.lookups.verification = LookupOutcome::success(object(json!({
            "data": {"score": 91, "disposable": false, "webmail": null}
        })));
        let html = render_html(&report);
        assert!(html.contains("<tr><td>Score</td><td>91</td></tr>"));
        assert!(html.contains("<tr><td>Disposable</td><td>false</td></tr>"));
        assert!(html.contains("<tr><td>Webmail</td><td>N/A</td></tr>"));
    }

    #[test]
    fn capitalize_matches_label_style() {
        assert_eq!(capitalize("city"), "City");
        assert_eq!(capitalize("creation_date"), "Creation_date");
        assert_eq!(capitalize("LOC"), "Loc");
        assert_eq!(capitalize(""), "");
    }
}
