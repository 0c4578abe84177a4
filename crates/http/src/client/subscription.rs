//! Subscription API client methods

use super::{ApiClient, ClientError};
use cachorro_core::Subscription;
use reqwest::Method;

impl ApiClient {
    /// Current user's subscription. Requires a bearer token.
    pub async fn subscription(&self) -> Result<Subscription, ClientError> {
        let request = self.request(Method::GET, "/api/subscription/");
        self.execute(request).await
    }
}
