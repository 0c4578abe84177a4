//! Browser console logging

use crate::config::AppConfig;
use tracing_subscriber::filter::Targets;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_web::MakeWebConsoleWriter;

/// Route `tracing` events to the browser console.
///
/// Safe to call more than once; later calls are ignored.
pub fn init_logging() {
    let filter = AppConfig::LOG_TARGETS
        .iter()
        .fold(Targets::new(), |targets, target| {
            targets.with_target(*target, AppConfig::LOG_LEVEL)
        });

    // No timestamps: std::time is unavailable in the browser
    let fmt_layer = tracing_subscriber::fmt::layer()
        .with_ansi(false)
        .without_time()
        .with_writer(MakeWebConsoleWriter::new());

    if tracing_subscriber::registry()
        .with(fmt_layer)
        .with(filter)
        .try_init()
        .is_err()
    {
        tracing::debug!("Logging already initialised");
    }
}
