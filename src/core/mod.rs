//! Matching core: key names, shortcut parsing, gating, scopes and matchers.

pub mod combination;
pub mod event;
pub mod gate;
pub mod key;
pub mod options;
pub mod parse;
pub mod scope;
pub mod sequence;
pub mod target;
