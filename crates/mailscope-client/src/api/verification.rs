//! Email verification endpoints.

use crate::MailscopeClient;
use mailscope_core::{JsonMap, MailscopeError, Result};

/// Email verification service (Hunter.io compatible)
pub struct VerificationApi<'a> {
    client: &'a MailscopeClient,
}

impl<'a> VerificationApi<'a> {
    pub(crate) fn new(client: &'a MailscopeClient) -> Self {
        Self { client }
    }

    /// Check whether an email address is deliverable
    ///
    /// Fails with [`MailscopeError::MissingApiKey`] without issuing a
    /// request when no Hunter.io key is configured.
    pub async fn verify(&self, email: &str) -> Result<JsonMap> {
        let key = self
            .client
            .credentials()
            .hunter_api_key
            .as_deref()
            .ok_or(MailscopeError::MissingApiKey { service: "Hunter.io" })?;

        let base = &self.client.endpoints().verification;
        self.client
            .get_json(
                base,
                "/v2/email-verifier",
                &[("email", email), ("api_key", key)],
                None,
            )
            .await
    }
}

#[cfg(test)]
mod tests {
    use crate::{Credentials, Endpoints, MailscopeClient, MailscopeError};
    use serde_json::json;
    use wiremock::matchers::{method, path, query_param};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    fn client_for(server: &MockServer, credentials: Credentials) -> MailscopeClient {
        MailscopeClient::builder()
            .endpoints(Endpoints::all(&server.uri()))
            .credentials(credentials)
            .build()
            .unwrap()
    }

    #[tokio::test]
    async fn sends_email_and_key() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/v2/email-verifier"))
            .and(query_param("email", "user@example.com"))
            .and(query_param("api_key", "hunter-key"))
            .respond_with(
                ResponseTemplate::new(200).set_body_json(json!({"data": {"status": "valid"}})),
            )
            .expect(1)
            .mount(&server)
            .await;

        let client = client_for(&server, Credentials::new().hunter("hunter-key"));
        let body = client.verification().verify("user@example.com").await.unwrap();
        assert_eq!(body["data"]["status"], json!("valid"));
    }

    #[tokio::test]
    async fn unprocessable_keeps_status() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .respond_with(ResponseTemplate::new(422).set_body_json(json!({
                "errors": [{"id": "wrong_params", "code": 422, "details": "invalid email"}]
            })))
            .mount(&server)
            .await;

        let client = client_for(&server, Credentials::new().hunter("hunter-key"));
        let err = client.verification().verify("nope@").await.unwrap_err();
        assert_eq!(err.status_code(), Some(422));
    }

    #[tokio::test]
    async fn missing_key_skips_request() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .respond_with(ResponseTemplate::new(200))
            .expect(0)
            .mount(&server)
            .await;

        let client = client_for(&server, Credentials::new());
        let err = client.verification().verify("user@example.com").await.unwrap_err();
        assert!(matches!(err, MailscopeError::MissingApiKey { .. }));
    }
}
