//! Sequence engine.

use std::cell::RefCell;
use std::rc::Rc;

use crate::core::event::{EventKind, KeyEvent};
use crate::core::gate::is_enabled;
use crate::core::key::{is_modifier_key, normalize_key};
use crate::core::options::SequenceOptions;
use crate::core::parse::{parse_shortcuts, ParsedShortcuts, ShortcutSpec, SEQUENCE_SEPARATOR};
use crate::core::sequence::{SequencePatterns, SequenceState, SequenceStep};
use crate::core::target::{EventTarget, Listener};
use crate::platform::window;
use crate::runtime::handler::ShortcutHandler;
use crate::runtime::registration::Registration;

struct SequenceEngine {
    shortcuts: ParsedShortcuts,
    patterns: SequencePatterns,
    options: SequenceOptions,
    state: RefCell<SequenceState>,
    handler: ShortcutHandler,
}

impl SequenceEngine {
    fn on_key_down(&self, event: &KeyEvent) {
        if !is_enabled(event, &self.options.base) {
            tracing::trace!(key = %event.key, "sequence key ignored by gate");
            return;
        }

        let step = {
            let mut state = self.state.borrow_mut();
            if state.stamp(event.time_stamp, self.options.timeout) {
                tracing::trace!("sequence timed out");
            }

            // Raw keys are recorded unless modifiers are filtered, which needs the normalized name.
            let key = if self.options.ignore_modifiers {
                let key = normalize_key(&event.key);
                if is_modifier_key(&key) {
                    return;
                }
                key
            } else {
                event.key.clone()
            };
            state.push(key, &self.patterns)
        };

        match step {
            SequenceStep::Matched(index) => {
                if let Some(spec) = self.shortcuts.spec(index) {
                    self.handler.fire(event, spec, &self.options.base);
                }
            }
            SequenceStep::Reset => tracing::trace!(key = %event.key, "sequence reset"),
            SequenceStep::Pending => {}
        }
    }
}

/// Calls `handler` when the keys of one of `sequences` are pressed in order.
///
/// Consecutive keys must arrive within `options.timeout` of each other (measured on the
/// events' `time_stamp`). Only keydown events are observed. Keys are compared as raw
/// `event.key` values unless `options.ignore_modifiers` is set, in which case they are
/// normalized first, so `Escape` only matches `esc>esc` in that mode.
pub fn register_sequence<H>(
    sequences: impl Into<ShortcutSpec>,
    handler: H,
    options: SequenceOptions,
) -> Registration
where
    H: FnMut(&KeyEvent, &str) + 'static,
{
    let shortcuts = parse_shortcuts(sequences, options.base.separator_or(SEQUENCE_SEPARATOR));
    let label = shortcuts.specs.join(", ");
    let target: Rc<dyn EventTarget> = match &options.base.target {
        Some(target) => Rc::clone(target),
        None => Rc::new(window()),
    };

    let engine = Rc::new(SequenceEngine {
        patterns: SequencePatterns::new(shortcuts.patterns.clone()),
        shortcuts,
        options,
        state: RefCell::new(SequenceState::new()),
        handler: ShortcutHandler::new(handler),
    });

    let down_engine = Rc::clone(&engine);
    let on_key_down: Listener = Rc::new(move |event: &KeyEvent| down_engine.on_key_down(event));

    Registration::attach(
        label,
        target,
        vec![(EventKind::KeyDown, on_key_down)],
        Box::new(move || engine.state.borrow_mut().clear()),
    )
}
