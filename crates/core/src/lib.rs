//! Cachorro Loko portal core: session model, token store and navigation seams

pub mod error;
pub mod guard;
pub mod navigation;
pub mod session;
pub mod types;

#[cfg(any(test, feature = "tests"))]
pub mod tests;

pub use error::{StorageError, StorageResult};
pub use guard::SessionGuard;
pub use navigation::{Navigator, Route};
pub use session::{MemoryStorage, StorageBackend, TokenKind, TokenStore};
pub use types::{Credentials, Subscription, SubscriptionStatus, TokenPair};
