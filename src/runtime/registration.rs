//! Registration handles.

use std::cell::RefCell;
use std::fmt;
use std::rc::Rc;

use crate::core::event::EventKind;
use crate::core::target::{EventTarget, Listener, ListenerId};

struct Attached {
    target: Rc<dyn EventTarget>,
    listeners: Vec<ListenerId>,
    on_teardown: Box<dyn FnOnce()>,
}

/// Keeps a shortcut registration alive.
///
/// Teardown removes the listeners from the target, clears the engine's key state and
/// releases the target. It runs exactly once: on the first [`unregister`](Self::unregister)
/// or when the handle is dropped, whichever comes first.
#[must_use = "dropping a Registration unregisters the shortcut"]
pub struct Registration {
    label: String,
    attached: RefCell<Option<Attached>>,
}

impl Registration {
    pub(crate) fn attach(
        label: String,
        target: Rc<dyn EventTarget>,
        listeners: Vec<(EventKind, Listener)>,
        on_teardown: Box<dyn FnOnce()>,
    ) -> Self {
        let listeners = listeners
            .into_iter()
            .map(|(kind, listener)| target.add_listener(kind, listener))
            .collect();
        tracing::debug!(shortcut = %label, "registered shortcut");
        Self {
            label,
            attached: RefCell::new(Some(Attached {
                target,
                listeners,
                on_teardown,
            })),
        }
    }

    /// Idempotent; safe to call from inside the shortcut's own handler.
    pub fn unregister(&self) {
        let Some(attached) = self.attached.borrow_mut().take() else {
            return;
        };
        for id in attached.listeners {
            attached.target.remove_listener(id);
        }
        (attached.on_teardown)();
        tracing::debug!(shortcut = %self.label, "unregistered shortcut");
    }

    pub fn is_active(&self) -> bool {
        self.attached.borrow().is_some()
    }

    /// The registered spec strings, joined with `", "`.
    pub fn label(&self) -> &str {
        &self.label
    }
}

impl Drop for Registration {
    fn drop(&mut self) {
        self.unregister();
    }
}

impl fmt::Debug for Registration {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Registration")
            .field("label", &self.label)
            .field("active", &self.is_active())
            .finish()
    }
}
