//! Log subscriber setup.
//!
//! The library only emits `tracing` events (`debug` for registration lifecycle and scope
//! changes, `trace` for per-key decisions). Applications that already install a
//! subscriber need nothing from this module.

use tracing_subscriber::EnvFilter;

use crate::config::EnvConfig;

const DEFAULT_FILTER: &str = "keyboard_shortcuts=debug";

/// Installs a global fmt subscriber when `config.debug` is set.
///
/// Returns `true` if this call installed the subscriber; `false` when debug logging is off
/// or another subscriber is already installed.
pub fn init(config: &EnvConfig) -> bool {
    if !config.debug {
        return false;
    }

    let filter = config
        .log_filter
        .as_deref()
        .and_then(|directives| EnvFilter::try_new(directives).ok())
        .unwrap_or_else(|| EnvFilter::new(DEFAULT_FILTER));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(true)
        .try_init()
        .is_ok()
}
