//! Tracing setup for hosts embedding the flow layout.
//!
//! The layout crates only emit events; nothing is printed until a subscriber
//! is installed. Hosts without their own subscriber can call
//! [`install_tracing`] once at start-up.

use std::str::FromStr;
use std::sync::{Once, OnceLock};

use tracing::level_filters::LevelFilter;
use tracing_subscriber::prelude::*;
use tracing_subscriber::{EnvFilter, Registry, fmt, reload};

const DEFAULT_LOG_LEVEL: LevelFilter = LevelFilter::INFO;

// ============================================================================
// Global State
// ============================================================================

static TRACING_INSTALLED: Once = Once::new();
static FILTER_HANDLE: OnceLock<reload::Handle<EnvFilter, Registry>> = OnceLock::new();

/// Install a formatting subscriber (idempotent).
///
/// Events are filtered by `RUST_LOG` when it is set, and at `info`
/// otherwise. [`set_log_level`] replaces the filter afterwards.
pub fn install_tracing() {
    TRACING_INSTALLED.call_once(|| {
        let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
        let (filter, handle) = reload::Layer::new(filter);

        let result = tracing_subscriber::registry()
            .with(filter)
            .with(fmt::layer().with_target(true))
            .try_init();

        match result {
            Ok(()) => {
                let _ = FILTER_HANDLE.set(handle);
            }
            Err(err) => eprintln!("zilliax tracing failed to initialize: {err}"),
        }
    });
}

/// Update the global log level.
///
/// Unknown level names fall back to `info`. Has no effect before
/// [`install_tracing`] has run.
pub fn set_log_level(level: &str) {
    let parsed = parse_level(level);
    if let Some(handle) = FILTER_HANDLE.get()
        && let Err(err) = handle.reload(EnvFilter::new(parsed.to_string()))
    {
        eprintln!("zilliax could not change log level: {err}");
    }
}

fn parse_level(level: &str) -> LevelFilter {
    LevelFilter::from_str(level.trim()).unwrap_or(DEFAULT_LOG_LEVEL)
}
