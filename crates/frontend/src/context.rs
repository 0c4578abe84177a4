//! Services shared by every page

use crate::config::AppConfig;
use crate::storage::BrowserStorage;
use cachorro_core::TokenStore;
use cachorro_http::{ApiClient, BearerAuth, ClientError};
use std::rc::Rc;
use yew::prelude::*;

struct Services {
    client: ApiClient,
    store: TokenStore,
}

/// The configured API client and the token store it reads from.
///
/// Provided once at the root so pages never touch storage directly.
#[derive(Clone)]
pub struct AppContext {
    inner: Rc<Services>,
}

impl AppContext {
    pub fn new(client: ApiClient, store: TokenStore) -> Self {
        Self {
            inner: Rc::new(Services { client, store }),
        }
    }

    /// Context for the browser: `localStorage` tokens and the configured API
    pub fn browser() -> Result<Self, ClientError> {
        let store = TokenStore::new(Rc::new(BrowserStorage::new()));
        let client = ApiClient::builder()
            .base_url(AppConfig::API_BASE_URL)
            .interceptor(BearerAuth::new(store.clone()))
            .build()?;

        Ok(Self::new(client, store))
    }

    pub fn client(&self) -> &ApiClient {
        &self.inner.client
    }

    pub fn store(&self) -> &TokenStore {
        &self.inner.store
    }
}

impl PartialEq for AppContext {
    fn eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.inner, &other.inner)
    }
}

/// Hook to use the app context
#[hook]
pub fn use_app_context() -> AppContext {
    use_context::<AppContext>()
        .expect("AppContext not found. Make sure to wrap your component with the App root")
}
