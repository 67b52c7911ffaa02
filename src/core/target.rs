//! Event target interface.

use std::rc::Rc;

use crate::core::event::{EventKind, KeyEvent};

/// Callback installed on an [`EventTarget`].
pub type Listener = Rc<dyn Fn(&KeyEvent)>;

/// Identifies one installed listener on the target that issued it.
#[repr(transparent)]
#[derive(Clone, Copy, Debug, Eq, Hash, Ord, PartialEq, PartialOrd)]
pub struct ListenerId(u64);

impl ListenerId {
    pub fn new(raw: u64) -> Self {
        Self(raw)
    }

    pub fn raw(self) -> u64 {
        self.0
    }
}

/// Anything that can deliver key events to listeners.
///
/// Contract:
/// - `add_listener` installs `listener` for events of `kind` and returns an id unique for
///   this target.
/// - `remove_listener` uninstalls synchronously: once it returns, the listener is never
///   called again, even by a dispatch that is already in progress. Returns `false` if the
///   id was unknown.
pub trait EventTarget {
    fn add_listener(&self, kind: EventKind, listener: Listener) -> ListenerId;

    fn remove_listener(&self, id: ListenerId) -> bool;
}
