//! Fakes for exercising flows without a browser

use crate::error::{StorageError, StorageResult};
use crate::navigation::{Navigator, Route};
use crate::session::{MemoryStorage, StorageBackend};
use std::cell::RefCell;

/// Navigator that remembers every route it was asked to show
#[derive(Debug, Default)]
pub struct RecordingNavigator {
    routes: RefCell<Vec<Route>>,
}

impl RecordingNavigator {
    pub fn routes(&self) -> Vec<Route> {
        self.routes.borrow().clone()
    }

    pub fn last(&self) -> Option<Route> {
        self.routes.borrow().last().copied()
    }
}

impl Navigator for RecordingNavigator {
    fn navigate(&self, route: Route) {
        self.routes.borrow_mut().push(route);
    }
}

/// Backend that reads fine but rejects every write
#[derive(Debug, Default)]
pub struct FailingStorage {
    inner: MemoryStorage,
}

impl StorageBackend for FailingStorage {
    fn get_item(&self, key: &str) -> Option<String> {
        self.inner.get_item(key)
    }

    fn set_item(&self, key: &str, _value: &str) -> StorageResult<()> {
        Err(StorageError::write(key, "storage is read-only"))
    }

    fn remove_item(&self, key: &str) {
        self.inner.remove_item(key);
    }

    fn clear(&self) {
        self.inner.clear();
    }
}
