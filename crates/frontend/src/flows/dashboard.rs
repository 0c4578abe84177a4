//! Dashboard: `Loading -> {NoSubscription, HasSubscription, Redirected}`

use crate::display::SubscriptionView;
use cachorro_core::SessionGuard;
use cachorro_http::ApiClient;
use std::cell::Cell;
use std::rc::Rc;

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum DashboardState {
    #[default]
    Loading,
    NoSubscription,
    HasSubscription(SubscriptionView),
    /// Session ended; the navigator already moved to login
    Redirected,
}

impl DashboardState {
    pub const fn is_loading(&self) -> bool {
        matches!(self, Self::Loading)
    }
}

/// Identifies one mount of the dashboard.
///
/// A response is applied only while its ticket is still current.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MountTicket(u64);

#[derive(Clone)]
pub struct DashboardFlow {
    client: ApiClient,
    guard: SessionGuard,
    generation: Rc<Cell<u64>>,
}

impl DashboardFlow {
    pub fn new(client: ApiClient, guard: SessionGuard) -> Self {
        Self {
            client,
            guard,
            generation: Rc::new(Cell::new(0)),
        }
    }

    /// Start a mount. Supersedes any earlier ticket.
    pub fn mount(&self) -> MountTicket {
        let next = self.generation.get() + 1;
        self.generation.set(next);
        MountTicket(next)
    }

    /// Invalidate the current ticket so a late response is dropped
    pub fn unmount(&self) {
        self.generation.set(self.generation.get() + 1);
    }

    pub fn is_current(&self, ticket: MountTicket) -> bool {
        self.generation.get() == ticket.0
    }

    /// Fetch the subscription for this mount.
    ///
    /// Returns `None` when the ticket went stale while the request was in
    /// flight; the response is then ignored entirely, failures included.
    /// Any failure of a current request ends the session.
    pub async fn load(&self, ticket: MountTicket) -> Option<DashboardState> {
        let result = self.client.subscription().await;

        if !self.is_current(ticket) {
            tracing::debug!(ok = result.is_ok(), "Dropping subscription response for a stale mount");
            return None;
        }

        let state = match self.guard.check(result) {
            Some(subscription) if subscription.is_none() => DashboardState::NoSubscription,
            Some(subscription) => {
                DashboardState::HasSubscription(SubscriptionView::new(&subscription))
            }
            None => DashboardState::Redirected,
        };
        Some(state)
    }

    /// Clear the session and go to login
    pub fn logout(&self) -> DashboardState {
        self.unmount();
        self.guard.logout();
        DashboardState::Redirected
    }
}
