//! Cachorro Loko subscription portal
//!
//! Two routed pages (login, dashboard) on top of the portal API client. The
//! page flows in [`flows`] hold all behaviour and are usable without a
//! browser; the Yew components only render their state.

pub mod app;
pub mod components;
pub mod config;
pub mod context;
pub mod display;
pub mod flows;
pub mod logging;
pub mod pages;
pub mod router;
pub mod storage;

pub use app::App;
pub use config::AppConfig;
pub use context::{AppContext, use_app_context};
pub use flows::{DashboardFlow, DashboardState, LoginFlow, LoginState};
