//! Event target implementations.

pub mod key_target;

pub use key_target::{window, KeyTarget};
