//! HTTP client for the Cachorro Loko portal API
//!
//! One [`ApiClient`] is configured per app with a fixed base URL and a
//! pipeline of [`RequestInterceptor`]s. The [`BearerAuth`] interceptor injects
//! the stored access token into every request.

pub mod client;

pub use client::error::ClientError;
pub use client::interceptor::{BearerAuth, RequestDescriptor, RequestInterceptor};
pub use client::{ApiClient, ApiClientBuilder};
