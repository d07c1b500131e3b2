//! IP geolocation endpoints.

use crate::MailscopeClient;
use mailscope_core::{JsonMap, Result};
use std::net::IpAddr;

/// IP geolocation service (ipinfo.io compatible)
pub struct GeolocationApi<'a> {
    client: &'a MailscopeClient,
}

impl<'a> GeolocationApi<'a> {
    pub(crate) fn new(client: &'a MailscopeClient) -> Self {
        Self { client }
    }

    /// Get location details for an IP address
    ///
    /// # Example
    ///
    /// ```rust,ignore
    /// let geo = client.geolocation().lookup("8.8.8.8".parse()?).await?;
    /// println!("City: {:?}", geo.get("city"));
    /// ```
    pub async fn lookup(&self, ip: IpAddr) -> Result<JsonMap> {
        let base = &self.client.endpoints().geolocation;
        self.client
            .get_json(base, &format!("/{ip}/json"), &[], None)
            .await
    }
}
