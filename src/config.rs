//! Environment configuration.

use std::env;
use std::time::Duration;

use thiserror::Error;

use crate::core::options::{SequenceOptions, DEFAULT_SEQUENCE_TIMEOUT};
use crate::core::scope::ScopeRegistry;

pub const ENV_DEBUG: &str = "KEYBOARD_SHORTCUTS_DEBUG";
pub const ENV_LOG: &str = "KEYBOARD_SHORTCUTS_LOG";
pub const ENV_SEQUENCE_TIMEOUT_MS: &str = "KEYBOARD_SHORTCUTS_SEQUENCE_TIMEOUT_MS";
pub const ENV_SCOPES: &str = "KEYBOARD_SHORTCUTS_SCOPES";

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("{key} must be a whole number of milliseconds, got {value:?}")]
    InvalidMillis { key: &'static str, value: String },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EnvConfig {
    /// Install a log subscriber from [`crate::logging::init`].
    pub debug: bool,
    /// `tracing-subscriber` filter directives used when `debug` is set.
    pub log_filter: Option<String>,
    pub sequence_timeout: Duration,
    /// Scopes to enable at startup; `None` keeps the default table.
    pub scopes: Option<Vec<String>>,
}

impl Default for EnvConfig {
    fn default() -> Self {
        Self {
            debug: false,
            log_filter: None,
            sequence_timeout: DEFAULT_SEQUENCE_TIMEOUT,
            scopes: None,
        }
    }
}

impl EnvConfig {
    /// Reads the environment, falling back to defaults for malformed values.
    pub fn from_env() -> Self {
        match Self::try_from_env() {
            Ok(config) => config,
            Err(err) => {
                tracing::warn!(error = %err, "ignoring malformed shortcut configuration");
                Self {
                    debug: env_flag(ENV_DEBUG),
                    log_filter: env_string_opt(ENV_LOG),
                    scopes: env_list_opt(ENV_SCOPES),
                    ..Self::default()
                }
            }
        }
    }

    pub fn try_from_env() -> Result<Self, ConfigError> {
        let sequence_timeout = match env_string_opt(ENV_SEQUENCE_TIMEOUT_MS) {
            Some(value) => {
                let millis = value
                    .trim()
                    .parse::<u64>()
                    .map_err(|_| ConfigError::InvalidMillis {
                        key: ENV_SEQUENCE_TIMEOUT_MS,
                        value: value.clone(),
                    })?;
                Duration::from_millis(millis)
            }
            None => DEFAULT_SEQUENCE_TIMEOUT,
        };

        Ok(Self {
            debug: env_flag(ENV_DEBUG),
            log_filter: env_string_opt(ENV_LOG),
            sequence_timeout,
            scopes: env_list_opt(ENV_SCOPES),
        })
    }

    /// Sequence options carrying the configured timeout.
    pub fn sequence_options(&self) -> SequenceOptions {
        SequenceOptions {
            timeout: self.sequence_timeout,
            ..SequenceOptions::default()
        }
    }

    /// Enables the configured startup scopes on `registry`, if any were given.
    pub fn apply_scopes(&self, registry: &ScopeRegistry) {
        if let Some(scopes) = &self.scopes {
            registry.provide_scopes(scopes.iter().cloned());
        }
    }
}

fn env_flag(key: &str) -> bool {
    env::var(key).map(|value| value == "1").unwrap_or(false)
}

fn env_string_opt(key: &str) -> Option<String> {
    env::var(key).ok().and_then(|value| {
        if value.trim().is_empty() {
            None
        } else {
            Some(value)
        }
    })
}

fn env_list_opt(key: &str) -> Option<Vec<String>> {
    env_string_opt(key).map(|value| {
        value
            .split(',')
            .map(str::trim)
            .filter(|item| !item.is_empty())
            .map(str::to_string)
            .collect()
    })
}
