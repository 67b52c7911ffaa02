//! In-process event target.

use std::cell::RefCell;
use std::rc::Rc;

use crate::core::event::{EventKind, KeyEvent};
use crate::core::target::{EventTarget, Listener, ListenerId};

struct ListenerEntry {
    id: ListenerId,
    kind: EventKind,
    listener: Listener,
}

#[derive(Default)]
struct TargetState {
    entries: Vec<ListenerEntry>,
    next_id: u64,
}

/// Listener list that a host feeds with key events via [`KeyTarget::dispatch`].
///
/// Clones share the same listener list. Listeners run in installation order.
#[derive(Clone, Default)]
pub struct KeyTarget {
    state: Rc<RefCell<TargetState>>,
}

impl KeyTarget {
    pub fn new() -> Self {
        Self::default()
    }

    /// Delivers `event` to every listener installed for `event.kind`.
    ///
    /// Listeners may add or remove listeners while the dispatch runs: the listener list is
    /// snapshotted up front, and a listener removed mid-dispatch is skipped.
    ///
    /// Returns `false` if a listener prevented the default action.
    pub fn dispatch(&self, event: &KeyEvent) -> bool {
        let snapshot: Vec<(ListenerId, Listener)> = self
            .state
            .borrow()
            .entries
            .iter()
            .filter(|entry| entry.kind == event.kind)
            .map(|entry| (entry.id, Rc::clone(&entry.listener)))
            .collect();

        for (id, listener) in snapshot {
            if self.is_installed(id) {
                listener(event);
            }
        }

        !event.default_prevented()
    }

    pub fn listener_count(&self, kind: EventKind) -> usize {
        self.state
            .borrow()
            .entries
            .iter()
            .filter(|entry| entry.kind == kind)
            .count()
    }

    pub fn same_target(&self, other: &KeyTarget) -> bool {
        Rc::ptr_eq(&self.state, &other.state)
    }

    fn is_installed(&self, id: ListenerId) -> bool {
        self.state.borrow().entries.iter().any(|entry| entry.id == id)
    }
}

impl EventTarget for KeyTarget {
    fn add_listener(&self, kind: EventKind, listener: Listener) -> ListenerId {
        let mut state = self.state.borrow_mut();
        let id = ListenerId::new(state.next_id);
        state.next_id = state.next_id.wrapping_add(1);
        state.entries.push(ListenerEntry { id, kind, listener });
        id
    }

    fn remove_listener(&self, id: ListenerId) -> bool {
        let mut state = self.state.borrow_mut();
        match state.entries.iter().position(|entry| entry.id == id) {
            Some(index) => {
                state.entries.remove(index);
                true
            }
            None => false,
        }
    }
}

thread_local! {
    static WINDOW: KeyTarget = KeyTarget::new();
}

/// The default target for registrations without an explicit one.
///
/// One per thread; every call on a thread returns a handle to the same listener list.
pub fn window() -> KeyTarget {
    WINDOW.with(KeyTarget::clone)
}
