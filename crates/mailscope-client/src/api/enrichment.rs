//! Person/company enrichment endpoints.

use crate::MailscopeClient;
use mailscope_core::{JsonMap, MailscopeError, Result};

/// Person/company enrichment service (Clearbit compatible)
pub struct EnrichmentApi<'a> {
    client: &'a MailscopeClient,
}

impl<'a> EnrichmentApi<'a> {
    pub(crate) fn new(client: &'a MailscopeClient) -> Self {
        Self { client }
    }

    /// Find the person and company behind an email address
    ///
    /// The response carries `person` and `company` objects when known.
    pub async fn find(&self, email: &str) -> Result<JsonMap> {
        let key = self
            .client
            .credentials()
            .clearbit_api_key
            .as_deref()
            .ok_or(MailscopeError::MissingApiKey { service: "Clearbit" })?;

        let base = &self.client.endpoints().enrichment;
        self.client
            .get_json(base, "/v2/combined/find", &[("email", email)], Some(key))
            .await
    }
}
