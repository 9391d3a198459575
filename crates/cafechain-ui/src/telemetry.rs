//! Browser console logging.
//!
//! `tracing` events are formatted by `tracing-subscriber` and written to the
//! devtools console. The level is read once from storage at startup.

use crate::core::config::{DEFAULT_LOG_LEVEL, parse_log_level};
use std::sync::Once;
use tracing_subscriber::prelude::*;
use tracing_web::MakeWebConsoleWriter;

static INIT: Once = Once::new();

/// Install the global subscriber. Later calls are ignored.
pub(crate) fn init_logging(stored_level: Option<&str>) {
    let level = stored_level
        .and_then(parse_log_level)
        .unwrap_or(DEFAULT_LOG_LEVEL);
    INIT.call_once(|| {
        let fmt_layer = tracing_subscriber::fmt::layer()
            .with_ansi(false)
            .without_time()
            .with_writer(MakeWebConsoleWriter::new());
        if tracing_subscriber::registry()
            .with(level)
            .with(fmt_layer)
            .try_init()
            .is_err()
        {
            gloo::console::warn!("a tracing subscriber was already installed");
        }
    });
    tracing::debug!(%level, "logging initialised");
}
