//! Token store: the single owner of the persisted session tokens
//!
//! The store is an injectable handle over a [`StorageBackend`]. Flows receive
//! it by value (it is a cheap `Rc` clone) instead of reaching for global
//! storage. Access is single-threaded; a multi-threaded host would need to
//! swap the `Rc`/`RefCell` pair for `Arc`/`Mutex`.

use crate::error::StorageResult;
use crate::types::TokenPair;
use std::cell::RefCell;
use std::collections::HashMap;
use std::rc::Rc;

/// Storage key of the access token
pub const ACCESS_TOKEN_KEY: &str = "access_token";

/// Storage key of the refresh token
pub const REFRESH_TOKEN_KEY: &str = "refresh_token";

/// Key/value storage persisted on the client (e.g. `window.localStorage`)
pub trait StorageBackend {
    fn get_item(&self, key: &str) -> Option<String>;

    fn set_item(&self, key: &str, value: &str) -> StorageResult<()>;

    fn remove_item(&self, key: &str);

    /// Remove every entry, not only the ones this crate wrote
    fn clear(&self);
}

/// In-memory backend used outside the browser and in tests
#[derive(Debug, Default)]
pub struct MemoryStorage {
    items: RefCell<HashMap<String, String>>,
}

impl MemoryStorage {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.items.borrow().len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.borrow().is_empty()
    }
}

impl StorageBackend for MemoryStorage {
    fn get_item(&self, key: &str) -> Option<String> {
        self.items.borrow().get(key).cloned()
    }

    fn set_item(&self, key: &str, value: &str) -> StorageResult<()> {
        self.items
            .borrow_mut()
            .insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn remove_item(&self, key: &str) {
        self.items.borrow_mut().remove(key);
    }

    fn clear(&self) {
        self.items.borrow_mut().clear();
    }
}

/// Which of the two session tokens to read
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TokenKind {
    Access,
    Refresh,
}

impl TokenKind {
    pub const fn key(self) -> &'static str {
        match self {
            Self::Access => ACCESS_TOKEN_KEY,
            Self::Refresh => REFRESH_TOKEN_KEY,
        }
    }
}

/// Session service holding the access/refresh pair.
///
/// Either both tokens are stored or neither is. Tokens are never inspected
/// for expiry; the server is the only judge of validity.
#[derive(Clone)]
pub struct TokenStore {
    backend: Rc<dyn StorageBackend>,
}

impl TokenStore {
    pub fn new(backend: Rc<dyn StorageBackend>) -> Self {
        Self { backend }
    }

    /// Store backed by a fresh [`MemoryStorage`]
    pub fn in_memory() -> Self {
        Self::new(Rc::new(MemoryStorage::new()))
    }

    /// Persist both tokens.
    ///
    /// A failed second write removes both keys, including a refresh token
    /// left over from an earlier session, so a half-written pair is never
    /// observable.
    pub fn set(&self, tokens: &TokenPair) -> StorageResult<()> {
        self.backend.set_item(ACCESS_TOKEN_KEY, &tokens.access)?;

        if let Err(err) = self.backend.set_item(REFRESH_TOKEN_KEY, &tokens.refresh) {
            tracing::warn!(error = %err, "Rolling back partially written session tokens");
            self.backend.remove_item(ACCESS_TOKEN_KEY);
            self.backend.remove_item(REFRESH_TOKEN_KEY);
            return Err(err);
        }

        tracing::debug!("Stored session tokens");
        Ok(())
    }

    pub fn get(&self, kind: TokenKind) -> Option<String> {
        self.backend.get_item(kind.key())
    }

    pub fn access_token(&self) -> Option<String> {
        self.get(TokenKind::Access)
    }

    pub fn refresh_token(&self) -> Option<String> {
        self.get(TokenKind::Refresh)
    }

    /// Whether an access token is present (not whether it is still valid)
    pub fn has_session(&self) -> bool {
        self.access_token().is_some()
    }

    /// Wipe all client-persisted state
    pub fn clear(&self) {
        self.backend.clear();
        tracing::debug!("Cleared client storage");
    }
}

impl std::fmt::Debug for TokenStore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TokenStore")
            .field("has_session", &self.has_session())
            .finish()
    }
}
