//! Chord matching over the set of held keys.

use std::collections::HashSet;

/// Returns the index of the first pattern whose keys are all held.
///
/// Held keys beyond a pattern's own are ignored, so patterns are tried in
/// registration order and the first full match wins.
pub fn match_combination(active_keys: &HashSet<String>, patterns: &[Vec<String>]) -> Option<usize> {
    patterns
        .iter()
        .position(|pattern| pattern.iter().all(|key| active_keys.contains(key)))
}

/// Keys currently held on one registration's target.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CombinationState {
    active: HashSet<String>,
}

impl CombinationState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Records a key as held; returns `false` if it already was (key repeat).
    pub fn press(&mut self, key: impl Into<String>) -> bool {
        self.active.insert(key.into())
    }

    pub fn release(&mut self, key: &str) -> bool {
        self.active.remove(key)
    }

    pub fn clear(&mut self) {
        self.active.clear();
    }

    pub fn is_idle(&self) -> bool {
        self.active.is_empty()
    }

    pub fn active_keys(&self) -> &HashSet<String> {
        &self.active
    }

    pub fn matches(&self, patterns: &[Vec<String>]) -> Option<usize> {
        match_combination(&self.active, patterns)
    }
}
