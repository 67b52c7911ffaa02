//! Ordered key sequence matching with a rolling timeout.
//!
//! A sequence history restarts in three situations:
//! - the gap since the previous accepted key exceeds the timeout,
//! - the newest key leaves no candidate pattern that starts with the history,
//! - a candidate pattern was matched exactly.
//!
//! The prefix check runs before the exact-match check, so a stray key drops the
//! history immediately instead of waiting for the timeout, while several
//! candidates that share a prefix stay viable together.

use std::collections::HashMap;
use std::time::{Duration, Instant};

const SEQUENCE_PREFIX: &str = "seq__";
const SEQUENCE_INFIX: &str = "__";

/// Canonical string form of an ordered key list.
pub fn stringify_sequence<S: AsRef<str>>(sequence: &[S]) -> String {
    let mut out = String::from(SEQUENCE_PREFIX);
    for (index, key) in sequence.iter().enumerate() {
        if index > 0 {
            out.push_str(SEQUENCE_INFIX);
        }
        out.push_str(key.as_ref());
    }
    out
}

/// Candidate patterns indexed for exact lookup by their canonical form.
#[derive(Debug, Clone, Default)]
pub struct SequencePatterns {
    patterns: Vec<Vec<String>>,
    exact: HashMap<String, usize>,
}

impl SequencePatterns {
    pub fn new(patterns: Vec<Vec<String>>) -> Self {
        let mut exact = HashMap::new();
        for (index, pattern) in patterns.iter().enumerate() {
            // Duplicate patterns report the first registration.
            exact.entry(stringify_sequence(pattern)).or_insert(index);
        }
        Self { patterns, exact }
    }

    pub fn is_viable_prefix(&self, history: &[String]) -> bool {
        self.patterns.iter().any(|pattern| pattern.starts_with(history))
    }

    pub fn exact_match(&self, history: &[String]) -> Option<usize> {
        if history.is_empty() {
            return None;
        }
        self.exact.get(&stringify_sequence(history)).copied()
    }

    pub fn len(&self) -> usize {
        self.patterns.len()
    }

    pub fn is_empty(&self) -> bool {
        self.patterns.is_empty()
    }
}

/// Outcome of feeding one key into a [`SequenceState`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SequenceStep {
    /// The history is still a prefix of some candidate.
    Pending,
    /// The key left no viable candidate; the history was cleared.
    Reset,
    /// The history equalled the candidate at this index; the history was cleared.
    Matched(usize),
}

/// Recently pressed keys of one registration.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SequenceState {
    history: Vec<String>,
    last_key_at: Option<Instant>,
}

impl SequenceState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Stamps an accepted key event, clearing the history first when the gap
    /// since the previous stamp exceeds `timeout`. Returns whether it expired.
    pub fn stamp(&mut self, now: Instant, timeout: Duration) -> bool {
        let expired = self
            .last_key_at
            .is_some_and(|last| now.saturating_duration_since(last) > timeout);
        if expired {
            self.history.clear();
        }
        self.last_key_at = Some(now);
        expired
    }

    /// Appends a key and runs the prefix-then-exact match.
    pub fn push(&mut self, key: impl Into<String>, patterns: &SequencePatterns) -> SequenceStep {
        self.history.push(key.into());

        if !patterns.is_viable_prefix(&self.history) {
            self.history.clear();
            return SequenceStep::Reset;
        }

        match patterns.exact_match(&self.history) {
            Some(index) => {
                self.history.clear();
                SequenceStep::Matched(index)
            }
            None => SequenceStep::Pending,
        }
    }

    pub fn clear(&mut self) {
        self.history.clear();
        self.last_key_at = None;
    }

    pub fn history(&self) -> &[String] {
        &self.history
    }

    pub fn is_idle(&self) -> bool {
        self.history.is_empty()
    }
}
