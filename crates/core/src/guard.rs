//! Session guard: any failure of an authenticated call ends the session
//!
//! Expired tokens, network errors and server errors all take the same path:
//! client storage is wiped and the user goes back to the login view.

use crate::navigation::{Navigator, Route};
use crate::session::TokenStore;
use std::fmt::Display;
use std::rc::Rc;

#[derive(Clone)]
pub struct SessionGuard {
    store: TokenStore,
    navigator: Rc<dyn Navigator>,
}

impl SessionGuard {
    pub fn new(store: TokenStore, navigator: Rc<dyn Navigator>) -> Self {
        Self { store, navigator }
    }

    pub fn store(&self) -> &TokenStore {
        &self.store
    }

    pub fn navigator(&self) -> &Rc<dyn Navigator> {
        &self.navigator
    }

    /// Treat `cause` as an invalid session: log it, wipe storage, go to login
    pub fn invalidate(&self, cause: &dyn Display) {
        tracing::error!(error = %cause, "Authenticated request failed, ending session");
        self.end_session();
    }

    /// User-initiated logout. Same effect as [`Self::invalidate`].
    pub fn logout(&self) {
        tracing::info!("User logged out");
        self.end_session();
    }

    /// Pass a success through, or invalidate the session on any error
    pub fn check<T, E: Display>(&self, result: Result<T, E>) -> Option<T> {
        match result {
            Ok(value) => Some(value),
            Err(err) => {
                self.invalidate(&err);
                None
            }
        }
    }

    fn end_session(&self) {
        self.store.clear();
        self.navigator.navigate(Route::Login);
    }
}
