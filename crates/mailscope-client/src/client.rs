//! Main HTTP client implementation.

use crate::api::{EnrichmentApi, GeolocationApi, VerificationApi};
use crate::config::{Credentials, Endpoints};
use mailscope_core::{JsonMap, MailscopeError, Result};
use reqwest::Client as HttpClient;
use serde_json::Value;
use std::sync::Arc;
use std::time::Duration;
use tracing::{debug, warn};

/// Default request timeout
const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);

/// User-Agent header sent with every request
const USER_AGENT: &str = concat!("mailscope/", env!("CARGO_PKG_VERSION"));

/// Client for the web services queried during an investigation
#[derive(Clone)]
pub struct MailscopeClient {
    inner: Arc<ClientInner>,
}

struct ClientInner {
    http: HttpClient,
    endpoints: Endpoints,
    credentials: Credentials,
}

impl MailscopeClient {
    /// Create a builder for custom configuration
    #[must_use]
    pub fn builder() -> MailscopeClientBuilder {
        MailscopeClientBuilder::new()
    }

    /// Access the IP geolocation service
    #[must_use]
    pub fn geolocation(&self) -> GeolocationApi<'_> {
        GeolocationApi::new(self)
    }

    /// Access the email verification service
    #[must_use]
    pub fn verification(&self) -> VerificationApi<'_> {
        VerificationApi::new(self)
    }

    /// Access the person/company enrichment service
    #[must_use]
    pub fn enrichment(&self) -> EnrichmentApi<'_> {
        EnrichmentApi::new(self)
    }

    pub(crate) fn endpoints(&self) -> &Endpoints {
        &self.inner.endpoints
    }

    pub(crate) fn credentials(&self) -> &Credentials {
        &self.inner.credentials
    }

    /// Perform a GET request returning a JSON object
    pub(crate) async fn get_json(
        &self,
        base: &str,
        path: &str,
        params: &[(&str, &str)],
        bearer: Option<&str>,
    ) -> Result<JsonMap> {
        let url = build_url(base, path, params);
        debug!(url = %redact(&url), "GET request");

        let mut request = self.inner.http.get(&url);
        if let Some(token) = bearer {
            request = request.bearer_auth(token);
        }

        let response = request
            .send()
            .await
            .map_err(|e| MailscopeError::Http(e.without_url().to_string()))?;

        self.handle_response(response).await
    }

    /// Handle a response that should carry a JSON object
    async fn handle_response(&self, response: reqwest::Response) -> Result<JsonMap> {
        let status = response.status();

        if status.is_success() {
            let body = response
                .text()
                .await
                .map_err(|e| MailscopeError::Http(e.without_url().to_string()))?;
            match serde_json::from_str(&body)? {
                Value::Object(map) => Ok(map),
                other => Err(MailscopeError::UnexpectedResponse(format!(
                    "expected a JSON object, got {other}"
                ))),
            }
        } else {
            self.handle_error(status.as_u16(), response).await
        }
    }

    /// Convert an error response to a `MailscopeError`
    async fn handle_error<T>(&self, status: u16, response: reqwest::Response) -> Result<T> {
        let body = response.text().await.unwrap_or_default();

        // Services differ in how they report errors; take the first message found
        let message = serde_json::from_str::<Value>(&body)
            .ok()
            .and_then(|v| error_message(&v))
            .unwrap_or(body);

        match status {
            401 => Err(MailscopeError::Unauthorized),
            404 => Err(MailscopeError::NotFound { resource: message }),
            429 => {
                warn!("rate limited by remote service");
                Err(MailscopeError::Api {
                    code: status,
                    message,
                })
            }
            _ => Err(MailscopeError::Api {
                code: status,
                message,
            }),
        }
    }
}

/// Builder for configuring a [`MailscopeClient`]
pub struct MailscopeClientBuilder {
    endpoints: Endpoints,
    credentials: Credentials,
    timeout: Duration,
}

impl Default for MailscopeClientBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl MailscopeClientBuilder {
    /// Create a new builder with default endpoints and no credentials
    #[must_use]
    pub fn new() -> Self {
        Self {
            endpoints: Endpoints::default(),
            credentials: Credentials::new(),
            timeout: DEFAULT_TIMEOUT,
        }
    }

    /// Set all service base URLs
    #[must_use]
    pub fn endpoints(mut self, endpoints: Endpoints) -> Self {
        self.endpoints = endpoints;
        self
    }

    /// Set the API keys
    #[must_use]
    pub fn credentials(mut self, credentials: Credentials) -> Self {
        self.credentials = credentials;
        self
    }

    /// Set the request timeout
    #[must_use]
    pub const fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Build the client
    pub fn build(self) -> Result<MailscopeClient> {
        let http = HttpClient::builder()
            .timeout(self.timeout)
            .user_agent(USER_AGENT)
            .gzip(true)
            .build()
            .map_err(|e| MailscopeError::Config(format!("failed to build HTTP client: {e}")))?;

        Ok(MailscopeClient {
            inner: Arc::new(ClientInner {
                http,
                endpoints: self.endpoints,
                credentials: self.credentials,
            }),
        })
    }
}

/// Join a base URL, a path and encoded query parameters
fn build_url(base: &str, path: &str, params: &[(&str, &str)]) -> String {
    let mut url = format!("{}{}", base.trim_end_matches('/'), path);

    for (i, (key, value)) in params.iter().enumerate() {
        url.push(if i == 0 { '?' } else { '&' });
        url.push_str(key);
        url.push('=');
        url.extend(url::form_urlencoded::byte_serialize(value.as_bytes()));
    }

    url
}

/// Hide credential query parameters
fn redact(url: &str) -> String {
    url.split_once("api_key=").map_or_else(
        || url.to_string(),
        |(head, tail)| {
            let rest = tail.find('&').map_or("", |i| &tail[i..]);
            format!("{head}api_key=***{rest}")
        },
    )
}

fn error_message(body: &Value) -> Option<String> {
    let error = body.get("error").or_else(|| body.get("errors"))?;
    match error {
        Value::String(s) => Some(s.clone()),
        Value::Array(items) => items.first().and_then(error_message_of),
        Value::Object(_) => error_message_of(error),
        _ => None,
    }
}

fn error_message_of(value: &Value) -> Option<String> {
    ["message", "details", "title"]
        .iter()
        .find_map(|key| value.get(key).and_then(Value::as_str))
        .map(String::from)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn build_url_encodes_params() {
        let url = build_url(
            "https://api.example.com/",
            "/v2/find",
            &[("email", "a+b@example.com"), ("api_key", "k")],
        );
        assert_eq!(
            url,
            "https://api.example.com/v2/find?email=a%2Bb%40example.com&api_key=k"
        );
    }

    #[test]
    fn build_url_without_params() {
        assert_eq!(
            build_url("https://ipinfo.io", "/8.8.8.8/json", &[]),
            "https://ipinfo.io/8.8.8.8/json"
        );
    }

    #[test]
    fn redact_hides_api_key() {
        assert_eq!(
            redact("https://x/v2?email=a&api_key=secret&x=1"),
            "https://x/v2?email=a&api_key=***&x=1"
        );
        assert_eq!(redact("https://x/v2?api_key=secret"), "https://x/v2?api_key=***");
        assert_eq!(redact("https://x/"), "https://x/");
    }

    #[test]
    fn error_messages_from_common_shapes() {
        assert_eq!(
            error_message(&json!({"error": "bad token"})).as_deref(),
            Some("bad token")
        );
        assert_eq!(
            error_message(&json!({"errors": [{"id": "x", "details": "invalid email"}]}))
                .as_deref(),
            Some("invalid email")
        );
        assert_eq!(
            error_message(&json!({"error": {"type": "t", "message": "not found"}})).as_deref(),
            Some("not found")
        );
        assert_eq!(error_message(&json!({"ok": true})), None);
    }

    #[test]
    fn builder_defaults() {
        let client = MailscopeClient::builder().build().unwrap();
        assert_eq!(client.endpoints(), &Endpoints::default());
        assert!(client.credentials().hunter_api_key.is_none());
    }
}
