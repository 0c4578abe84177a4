//! Logical routes and the navigation seam used by the flows

use std::fmt;

/// Views the portal can show
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Route {
    Login,
    Dashboard,
}

impl Route {
    pub const fn path(self) -> &'static str {
        match self {
            Self::Login => "/login",
            Self::Dashboard => "/dashboard",
        }
    }

    /// Resolve a location path. Anything unknown falls through to login.
    ///
    /// Router-independent model of the route table; the browser router must
    /// agree with it.
    pub fn resolve(path: &str) -> Self {
        match path.trim_end_matches('/') {
            "/dashboard" => Self::Dashboard,
            _ => Self::Login,
        }
    }
}

impl fmt::Display for Route {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.path())
    }
}

/// Moves the user to another view.
///
/// The browser app backs this with the router's history; tests record the
/// requested routes.
pub trait Navigator {
    fn navigate(&self, route: Route);
}
