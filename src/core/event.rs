//! Key events delivered to shortcut listeners.

use std::cell::Cell;
use std::collections::HashMap;
use std::time::Instant;

/// Which listener list an event is dispatched to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EventKind {
    KeyDown,
    KeyUp,
}

/// The element that had focus when a key event fired.
///
/// Tag names are compared case-insensitively by the gate; attributes are kept
/// verbatim.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Element {
    pub tag_name: String,
    pub attributes: HashMap<String, String>,
}

impl Element {
    pub fn new(tag_name: impl Into<String>) -> Self {
        Self {
            tag_name: tag_name.into(),
            attributes: HashMap::new(),
        }
    }

    pub fn with_attribute(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.attributes.insert(name.into(), value.into());
        self
    }

    pub fn attribute(&self, name: &str) -> Option<&str> {
        self.attributes.get(name).map(String::as_str)
    }
}

/// A keyboard event.
///
/// Notes:
/// - `key` is the layout-dependent `KeyboardEvent.key` value (`"a"`, `"Control"`, `" "`).
/// - `code` is the physical `KeyboardEvent.code` value (`"KeyA"`, `"ControlLeft"`); the
///   engines match on `key` and keep `code` for handlers.
/// - `target` is `None` when the event did not originate from an element.
#[derive(Debug, Clone)]
pub struct KeyEvent {
    pub kind: EventKind,
    pub key: String,
    pub code: String,
    pub target: Option<Element>,
    pub time_stamp: Instant,
    default_prevented: Cell<bool>,
}

impl KeyEvent {
    pub fn new(kind: EventKind, key: impl Into<String>) -> Self {
        Self {
            kind,
            key: key.into(),
            code: String::new(),
            target: None,
            time_stamp: Instant::now(),
            default_prevented: Cell::new(false),
        }
    }

    pub fn key_down(key: impl Into<String>) -> Self {
        Self::new(EventKind::KeyDown, key)
    }

    pub fn key_up(key: impl Into<String>) -> Self {
        Self::new(EventKind::KeyUp, key)
    }

    pub fn with_code(mut self, code: impl Into<String>) -> Self {
        self.code = code.into();
        self
    }

    pub fn with_target(mut self, target: Element) -> Self {
        self.target = Some(target);
        self
    }

    pub fn at(mut self, time_stamp: Instant) -> Self {
        self.time_stamp = time_stamp;
        self
    }

    /// Suppresses the host's default action for this event.
    pub fn prevent_default(&self) {
        self.default_prevented.set(true);
    }

    pub fn default_prevented(&self) -> bool {
        self.default_prevented.get()
    }
}
