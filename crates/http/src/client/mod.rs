//! Portal API client

pub mod auth;
pub mod error;
pub mod interceptor;
pub mod subscription;

use error::ClientError;
use interceptor::{RequestDescriptor, RequestInterceptor};
use reqwest::{Client, ClientBuilder};
use std::rc::Rc;
#[cfg(not(target_arch = "wasm32"))]
use std::time::Duration;

const USER_AGENT: &str = concat!("cachorro-client/", env!("CARGO_PKG_VERSION"));

/// Single configured dispatcher for every portal API call.
///
/// Errors are surfaced to the caller as-is: no retries, no token refresh.
#[derive(Clone)]
pub struct ApiClient {
    client: Client,
    base_url: String,
    interceptors: Vec<Rc<dyn RequestInterceptor>>,
}

impl ApiClient {
    /// Create a client without interceptors
    pub fn new(base_url: impl Into<String>) -> Result<Self, ClientError> {
        Self::builder().base_url(base_url).build()
    }

    /// Create a new client builder
    pub fn builder() -> ApiClientBuilder {
        ApiClientBuilder::default()
    }

    /// Get the base URL
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Run the interceptor pipeline for a request without sending it
    pub fn prepare(&self, method: reqwest::Method, path: &str) -> RequestDescriptor {
        self.interceptors
            .iter()
            .fold(RequestDescriptor::new(method, path), |request, interceptor| {
                interceptor.intercept(request)
            })
    }

    /// Create a request builder with every interceptor applied
    pub fn request(&self, method: reqwest::Method, path: &str) -> reqwest::RequestBuilder {
        let prepared = self.prepare(method, path);
        let url = format!("{}{}", self.base_url, prepared.path);

        self.client
            .request(prepared.method, url)
            .headers(prepared.headers)
    }

    /// Execute a request and handle common errors
    pub async fn execute<T: serde::de::DeserializeOwned>(
        &self,
        request: reqwest::RequestBuilder,
    ) -> Result<T, ClientError> {
        let response = request.send().await?;
        let status = response.status();

        if status.is_success() {
            Ok(response.json().await?)
        } else {
            let message = response.text().await.unwrap_or_else(|_| status.to_string());
            tracing::debug!(status = status.as_u16(), "API call returned an error status");
            Err(ClientError::from_status(status, message))
        }
    }
}

impl std::fmt::Debug for ApiClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ApiClient")
            .field("base_url", &self.base_url)
            .field("interceptors", &self.interceptors.len())
            .finish_non_exhaustive()
    }
}

/// Builder for [`ApiClient`]
#[derive(Default)]
pub struct ApiClientBuilder {
    base_url: Option<String>,
    interceptors: Vec<Rc<dyn RequestInterceptor>>,
    #[cfg(not(target_arch = "wasm32"))]
    timeout: Option<Duration>,
    user_agent: Option<String>,
}

impl ApiClientBuilder {
    /// Set the base URL
    pub fn base_url(mut self, url: impl Into<String>) -> Self {
        self.base_url = Some(url.into());
        self
    }

    /// Append an interceptor; interceptors run in the order they were added
    pub fn interceptor(mut self, interceptor: impl RequestInterceptor + 'static) -> Self {
        self.interceptors.push(Rc::new(interceptor));
        self
    }

    /// Set the request timeout. Browsers give no control over it, so this is
    /// only available on native targets.
    #[cfg(not(target_arch = "wasm32"))]
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    /// Set the user agent
    pub fn user_agent(mut self, agent: impl Into<String>) -> Self {
        self.user_agent = Some(agent.into());
        self
    }

    /// Build the client
    pub fn build(self) -> Result<ApiClient, ClientError> {
        let base_url = self
            .base_url
            .ok_or_else(|| ClientError::Configuration("base_url is required".into()))?;

        // Ensure base_url ends without a trailing slash
        let base_url = base_url.trim_end_matches('/').to_string();
        if base_url.is_empty() {
            return Err(ClientError::Configuration("base_url is empty".into()));
        }

        let mut client_builder = ClientBuilder::new();

        #[cfg(not(target_arch = "wasm32"))]
        if let Some(timeout) = self.timeout {
            client_builder = client_builder.timeout(timeout);
        }

        client_builder =
            client_builder.user_agent(self.user_agent.unwrap_or_else(|| USER_AGENT.to_string()));

        let client = client_builder.build()?;

        Ok(ApiClient {
            client,
            base_url,
            interceptors: self.interceptors,
        })
    }
}
