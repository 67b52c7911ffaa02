//! Shortcut string parsing.

use crate::core::key::normalize_key;

/// Default separator between the keys of a combination (`ctrl+a`).
pub const COMBINATION_SEPARATOR: &str = "+";
/// Default separator between the keys of a sequence (`g>g`).
pub const SEQUENCE_SEPARATOR: &str = ">";

/// One or more shortcut strings accepted by a single registration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ShortcutSpec {
    Single(String),
    Multiple(Vec<String>),
}

impl ShortcutSpec {
    pub fn into_vec(self) -> Vec<String> {
        match self {
            ShortcutSpec::Single(spec) => vec![spec],
            ShortcutSpec::Multiple(specs) => specs,
        }
    }
}

impl From<&str> for ShortcutSpec {
    fn from(value: &str) -> Self {
        ShortcutSpec::Single(value.to_string())
    }
}

impl From<String> for ShortcutSpec {
    fn from(value: String) -> Self {
        ShortcutSpec::Single(value)
    }
}

impl From<Vec<&str>> for ShortcutSpec {
    fn from(value: Vec<&str>) -> Self {
        ShortcutSpec::Multiple(value.into_iter().map(|item| item.to_string()).collect())
    }
}

impl From<Vec<String>> for ShortcutSpec {
    fn from(value: Vec<String>) -> Self {
        ShortcutSpec::Multiple(value)
    }
}

impl<const N: usize> From<[&str; N]> for ShortcutSpec {
    fn from(value: [&str; N]) -> Self {
        ShortcutSpec::Multiple(value.iter().map(|item| item.to_string()).collect())
    }
}

/// Parsed shortcuts.
///
/// `patterns[i]` holds the normalized keys of `specs[i]`, so a match on a
/// pattern index can be reported back with the spec string the caller wrote.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ParsedShortcuts {
    pub specs: Vec<String>,
    pub patterns: Vec<Vec<String>>,
}

impl ParsedShortcuts {
    pub fn is_empty(&self) -> bool {
        self.specs.is_empty()
    }

    pub fn spec(&self, index: usize) -> Option<&str> {
        self.specs.get(index).map(String::as_str)
    }
}

/// Splits every spec on `separator` and normalizes each key.
///
/// There is no escaping: a key whose name contains the separator (e.g. `+`
/// with the default combination separator) cannot be expressed, and such a
/// spec silently produces a pattern that never matches the intended key.
pub fn parse_shortcuts(specs: impl Into<ShortcutSpec>, separator: &str) -> ParsedShortcuts {
    let specs = specs.into().into_vec();
    let patterns = specs
        .iter()
        .map(|spec| split_spec(spec, separator))
        .collect();
    ParsedShortcuts { specs, patterns }
}

fn split_spec(spec: &str, separator: &str) -> Vec<String> {
    if separator.is_empty() {
        // One key per character; `str::split("")` would add empty edge tokens.
        return spec
            .chars()
            .map(|ch| normalize_key(ch.encode_utf8(&mut [0; 4])))
            .collect();
    }
    spec.split(separator).map(normalize_key).collect()
}
