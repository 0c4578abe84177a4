//! Request interceptors
//!
//! An interceptor receives the outgoing request as a transport-independent
//! [`RequestDescriptor`] and returns it, possibly augmented. The client runs
//! every registered interceptor, in order, before each request.

use cachorro_core::TokenStore;
use reqwest::Method;
use reqwest::header::{AUTHORIZATION, HeaderMap, HeaderValue};

/// Outgoing request before it reaches the transport
#[derive(Debug, Clone)]
pub struct RequestDescriptor {
    pub method: Method,
    pub path: String,
    pub headers: HeaderMap,
}

impl RequestDescriptor {
    pub fn new(method: Method, path: impl Into<String>) -> Self {
        Self {
            method,
            path: path.into(),
            headers: HeaderMap::new(),
        }
    }
}

/// Mutation hook applied to every outgoing request
pub trait RequestInterceptor {
    fn intercept(&self, request: RequestDescriptor) -> RequestDescriptor;
}

impl<F> RequestInterceptor for F
where
    F: Fn(RequestDescriptor) -> RequestDescriptor,
{
    fn intercept(&self, request: RequestDescriptor) -> RequestDescriptor {
        self(request)
    }
}

/// Attaches `Authorization: Bearer <access token>` when the store holds one.
///
/// The token is read at request time, so a login or logout is picked up by
/// the very next request. Without a token the request goes out unchanged.
#[derive(Debug, Clone)]
pub struct BearerAuth {
    store: TokenStore,
}

impl BearerAuth {
    pub fn new(store: TokenStore) -> Self {
        Self { store }
    }
}

impl RequestInterceptor for BearerAuth {
    fn intercept(&self, mut request: RequestDescriptor) -> RequestDescriptor {
        let Some(token) = self.store.access_token() else {
            return request;
        };

        match HeaderValue::from_str(&format!("Bearer {token}")) {
            Ok(mut value) => {
                value.set_sensitive(true);
                request.headers.insert(AUTHORIZATION, value);
            }
            Err(err) => {
                tracing::warn!(error = %err, path = %request.path, "Stored access token is not a valid header value, sending request without it");
            }
        }

        request
    }
}
