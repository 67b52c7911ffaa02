//! Keyboard shortcut engine.
//!
//! Register key combinations (`ctrl+a`, all keys held together) or sequences
//! (`g>g`, keys pressed one after another) on an event target and get a callback when
//! they are observed. Named scopes switch groups of shortcuts on and off at runtime.
//!
//! # Public API Overview
//! - [`register_combination`] / [`register_sequence`] return a [`Registration`]; dropping
//!   it or calling [`Registration::unregister`] detaches the shortcut.
//! - Feed key events through a [`KeyTarget`] (the per-thread default is [`window`]) or
//!   implement [`EventTarget`] for a host of your own.
//! - Scope switches live in a [`ScopeRegistry`]; the free functions ([`enable_scope`],
//!   [`toggle_scope`], ...) act on the process-wide one.
//! - The pure building blocks ([`normalize_key`], [`parse_shortcuts`],
//!   [`match_combination`], [`SequenceState`]) work without any target.
//!
//! # Known limitation
//! Shortcut strings have no escaping, so a key named like the separator (`+` in
//! combinations, `>` in sequences) cannot be expressed with that separator. Pick another
//! separator through [`ShortcutOptions::separator`].

pub mod config;
pub mod logging;

pub mod core;
pub mod platform;
pub mod runtime;

/// Key name normalization.
pub use crate::core::key::{is_modifier_key, normalize_key, MODIFIER_KEYS};

/// Shortcut string parsing.
pub use crate::core::parse::{
    parse_shortcuts, ParsedShortcuts, ShortcutSpec, COMBINATION_SEPARATOR, SEQUENCE_SEPARATOR,
};

/// Key events and targets.
pub use crate::core::event::{Element, EventKind, KeyEvent};
pub use crate::core::target::{EventTarget, Listener, ListenerId};
pub use crate::platform::{window, KeyTarget};

/// Registration options and per-event decisions.
pub use crate::core::gate::{is_enabled, should_prevent_default};
pub use crate::core::options::{
    CombinationOptions, EventPredicate, SequenceOptions, ShortcutOptions, Toggle,
    DEFAULT_SEQUENCE_TIMEOUT,
};

/// Matchers and their per-registration state.
pub use crate::core::combination::{match_combination, CombinationState};
pub use crate::core::sequence::{stringify_sequence, SequencePatterns, SequenceState, SequenceStep};

/// Scope registry and the process-wide scope functions.
pub use crate::core::scope::{
    disable_all_scopes, disable_scope, enable_all_scopes, enable_scope, get_active_scopes,
    get_scopes, global_scopes, is_in_scope, provide_scopes, set_scopes, toggle_scope,
    ScopeRegistry, ScopeStoreError, ScopeTable, WILDCARD_SCOPE,
};

/// Engines.
pub use crate::runtime::{register_combination, register_sequence, Registration};

/// Environment configuration.
pub use crate::config::{ConfigError, EnvConfig};
