//! Per-registration options.

use std::fmt;
use std::rc::Rc;
use std::time::Duration;

use crate::core::event::KeyEvent;
use crate::core::scope::ScopeRegistry;
use crate::core::target::EventTarget;

/// Default maximum gap between two keys of a sequence.
pub const DEFAULT_SEQUENCE_TIMEOUT: Duration = Duration::from_millis(1000);

pub type EventPredicate = Rc<dyn Fn(&KeyEvent) -> bool>;

/// A flag that is either fixed or decided per event.
#[derive(Clone)]
pub enum Toggle {
    Value(bool),
    When(EventPredicate),
}

impl Toggle {
    pub fn when<F>(predicate: F) -> Self
    where
        F: Fn(&KeyEvent) -> bool + 'static,
    {
        Toggle::When(Rc::new(predicate))
    }

    pub fn evaluate(&self, event: &KeyEvent) -> bool {
        match self {
            Toggle::Value(value) => *value,
            Toggle::When(predicate) => predicate(event),
        }
    }
}

impl From<bool> for Toggle {
    fn from(value: bool) -> Self {
        Toggle::Value(value)
    }
}

impl fmt::Debug for Toggle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Toggle::Value(value) => f.debug_tuple("Value").field(value).finish(),
            Toggle::When(_) => f.write_str("When(<predicate>)"),
        }
    }
}

/// Options shared by combinations and sequences.
///
/// Fields left at their defaults mean:
/// - `separator`: `"+"` for combinations, `">"` for sequences (an empty string also falls
///   back to the default).
/// - `target`: the thread's [`window`](crate::platform::window) target.
/// - `prevent_default`, `enabled`: `true`.
/// - `scope`: none, so the registration is always in scope.
/// - `scopes`: the process-wide registry from [`global_scopes`](crate::core::scope::global_scopes).
#[derive(Clone, Default)]
pub struct ShortcutOptions {
    pub separator: Option<String>,
    pub target: Option<Rc<dyn EventTarget>>,
    pub prevent_default: Option<Toggle>,
    pub enabled: Option<Toggle>,
    pub disabled_on_tags: Vec<String>,
    pub disabled_on_form_tags: bool,
    pub disabled_on_content_editable: bool,
    pub scope: Option<String>,
    pub scopes: Option<ScopeRegistry>,
}

impl ShortcutOptions {
    pub fn separator_or<'a>(&'a self, default: &'a str) -> &'a str {
        match self.separator.as_deref() {
            Some(separator) if !separator.is_empty() => separator,
            _ => default,
        }
    }
}

impl fmt::Debug for ShortcutOptions {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ShortcutOptions")
            .field("separator", &self.separator)
            .field("target", &self.target.as_ref().map(|_| "<target>"))
            .field("prevent_default", &self.prevent_default)
            .field("enabled", &self.enabled)
            .field("disabled_on_tags", &self.disabled_on_tags)
            .field("disabled_on_form_tags", &self.disabled_on_form_tags)
            .field("disabled_on_content_editable", &self.disabled_on_content_editable)
            .field("scope", &self.scope)
            .field("scopes", &self.scopes.is_some())
            .finish()
    }
}

/// Combinations take no options beyond the shared ones.
pub type CombinationOptions = ShortcutOptions;

#[derive(Debug, Clone)]
pub struct SequenceOptions {
    pub base: ShortcutOptions,
    /// Maximum gap between two accepted keys; a longer gap restarts the sequence.
    pub timeout: Duration,
    /// Drop modifier keys instead of recording them, so `h`, `Shift`, `i` matches `h>i`.
    /// Recorded keys are normalized in this mode; otherwise `event.key` is kept as is.
    pub ignore_modifiers: bool,
}

impl Default for SequenceOptions {
    fn default() -> Self {
        Self {
            base: ShortcutOptions::default(),
            timeout: DEFAULT_SEQUENCE_TIMEOUT,
            ignore_modifiers: false,
        }
    }
}

impl From<ShortcutOptions> for SequenceOptions {
    fn from(base: ShortcutOptions) -> Self {
        Self {
            base,
            ..Self::default()
        }
    }
}
