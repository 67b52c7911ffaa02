//! Handler invocation shared by the engines.

use std::cell::RefCell;

use crate::core::event::KeyEvent;
use crate::core::gate::should_prevent_default;
use crate::core::options::ShortcutOptions;

pub(crate) struct ShortcutHandler {
    callback: RefCell<Box<dyn FnMut(&KeyEvent, &str)>>,
}

impl ShortcutHandler {
    pub(crate) fn new<H>(handler: H) -> Self
    where
        H: FnMut(&KeyEvent, &str) + 'static,
    {
        Self {
            callback: RefCell::new(Box::new(handler)),
        }
    }

    /// Applies the prevent-default decision, then calls the handler with the matched spec.
    pub(crate) fn fire(&self, event: &KeyEvent, spec: &str, options: &ShortcutOptions) {
        if should_prevent_default(event, options) {
            event.prevent_default();
        }

        match self.callback.try_borrow_mut() {
            Ok(mut callback) => {
                tracing::trace!(shortcut = spec, key = %event.key, "shortcut matched");
                (*callback)(event, spec);
            }
            Err(_) => {
                // The handler dispatched a key event into its own registration.
                tracing::warn!(shortcut = spec, "skipping re-entrant shortcut handler");
            }
        }
    }
}
