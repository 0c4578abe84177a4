//! Frontend configuration
//!
//! Everything is fixed at build time; there is no runtime configuration
//! surface in the browser.

/// Application configuration
pub struct AppConfig;

impl AppConfig {
    /// Portal API base URL. Override with `CACHORRO_API_BASE_URL` at build time.
    pub const API_BASE_URL: &'static str = match option_env!("CACHORRO_API_BASE_URL") {
        Some(url) => url,
        None => "https://nxgnr11c1a.execute-api.sa-east-1.amazonaws.com/dev",
    };

    /// Default `tracing` level for the workspace crates
    pub const LOG_LEVEL: tracing::Level = tracing::Level::DEBUG;

    /// Crates whose events reach the browser console
    pub const LOG_TARGETS: [&'static str; 3] =
        ["cachorro_frontend", "cachorro_http", "cachorro_core"];
}
