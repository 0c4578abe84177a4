//! Shared fixtures for the flow tests

#![allow(dead_code)]

use cachorro_core::tests::RecordingNavigator;
use cachorro_core::{MemoryStorage, SessionGuard, StorageBackend, TokenPair, TokenStore};
use cachorro_http::{ApiClient, BearerAuth};
use std::rc::Rc;
use std::time::Duration;

pub struct Harness {
    pub client: ApiClient,
    pub store: TokenStore,
    pub backend: Rc<MemoryStorage>,
    pub navigator: Rc<RecordingNavigator>,
}

impl Harness {
    pub fn new(base_url: &str) -> Self {
        let backend = Rc::new(MemoryStorage::new());
        let store = TokenStore::new(backend.clone());
        let client = ApiClient::builder()
            .base_url(base_url)
            .interceptor(BearerAuth::new(store.clone()))
            .timeout(Duration::from_millis(200))
            .build()
            .unwrap();

        Self {
            client,
            store,
            backend,
            navigator: Rc::new(RecordingNavigator::default()),
        }
    }

    /// Harness whose store already holds a session plus an unrelated key
    pub fn logged_in(base_url: &str) -> Self {
        let harness = Self::new(base_url);
        harness
            .store
            .set(&TokenPair::new("access-1", "refresh-1"))
            .unwrap();
        harness.backend.set_item("theme", "dark").unwrap();
        harness
    }

    pub fn guard(&self) -> SessionGuard {
        SessionGuard::new(self.store.clone(), self.navigator.clone())
    }
}

/// Base URL of a local port nothing listens on
pub fn unreachable_uri() -> String {
    let listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
    let port = listener.local_addr().unwrap().port();
    drop(listener);
    format!("http://127.0.0.1:{port}")
}
