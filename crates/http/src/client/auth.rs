//! Authentication API client methods

use super::{ApiClient, ClientError};
use cachorro_core::{Credentials, TokenPair};
use reqwest::Method;

impl ApiClient {
    /// Exchange credentials for an access/refresh pair
    pub async fn obtain_token(&self, credentials: &Credentials) -> Result<TokenPair, ClientError> {
        let request = self
            .request(Method::POST, "/api/auth/token/")
            .json(credentials);
        self.execute(request).await
    }
}
