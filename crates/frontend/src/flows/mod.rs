//! Page flows, independent of the rendering layer
//!
//! Each flow owns the side effects of one page (API calls, token store
//! writes, navigation) and reports the state the page should render.

pub mod dashboard;
pub mod login;

pub use dashboard::{DashboardFlow, DashboardState, MountTicket};
pub use login::{LOGIN_ERROR_MESSAGE, LoginFlow, LoginState};
