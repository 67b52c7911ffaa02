//! Combination (chord) engine.

use std::cell::RefCell;
use std::rc::Rc;

use crate::core::combination::CombinationState;
use crate::core::event::{EventKind, KeyEvent};
use crate::core::gate::is_enabled;
use crate::core::key::normalize_key;
use crate::core::options::CombinationOptions;
use crate::core::parse::{parse_shortcuts, ParsedShortcuts, ShortcutSpec, COMBINATION_SEPARATOR};
use crate::core::target::{EventTarget, Listener};
use crate::platform::window;
use crate::runtime::handler::ShortcutHandler;
use crate::runtime::registration::Registration;

struct CombinationEngine {
    shortcuts: ParsedShortcuts,
    options: CombinationOptions,
    state: RefCell<CombinationState>,
    handler: ShortcutHandler,
}

impl CombinationEngine {
    fn on_key_down(&self, event: &KeyEvent) {
        if !is_enabled(event, &self.options) {
            tracing::trace!(key = %event.key, "combination key ignored by gate");
            return;
        }

        let matched = {
            let mut state = self.state.borrow_mut();
            state.press(normalize_key(&event.key));
            state.matches(&self.shortcuts.patterns)
        };

        // Held keys stay recorded after a match; only keyup releases them.
        if let Some(spec) = matched.and_then(|index| self.shortcuts.spec(index)) {
            self.handler.fire(event, spec, &self.options);
        }
    }

    fn on_key_up(&self, event: &KeyEvent) {
        // Never gated, or a key released while disabled would stay held.
        self.state.borrow_mut().release(&normalize_key(&event.key));
    }
}

/// Calls `handler` whenever every key of one of `combinations` is held.
///
/// The handler receives the event and the spec string that matched, as written. While the
/// keys stay held, each further accepted keydown (including key repeat) matches again.
///
/// ```ignore
/// let options = CombinationOptions::default();
/// let registration = register_combination(["ctrl+s", "meta+s"], |_, spec| save(spec), options);
/// ```
pub fn register_combination<H>(
    combinations: impl Into<ShortcutSpec>,
    handler: H,
    options: CombinationOptions,
) -> Registration
where
    H: FnMut(&KeyEvent, &str) + 'static,
{
    let shortcuts = parse_shortcuts(combinations, options.separator_or(COMBINATION_SEPARATOR));
    let label = shortcuts.specs.join(", ");
    let target: Rc<dyn EventTarget> = match &options.target {
        Some(target) => Rc::clone(target),
        None => Rc::new(window()),
    };

    let engine = Rc::new(CombinationEngine {
        shortcuts,
        options,
        state: RefCell::new(CombinationState::new()),
        handler: ShortcutHandler::new(handler),
    });

    let down_engine = Rc::clone(&engine);
    let on_key_down: Listener = Rc::new(move |event: &KeyEvent| down_engine.on_key_down(event));
    let up_engine = Rc::clone(&engine);
    let on_key_up: Listener = Rc::new(move |event: &KeyEvent| up_engine.on_key_up(event));

    Registration::attach(
        label,
        target,
        vec![
            (EventKind::KeyDown, on_key_down),
            (EventKind::KeyUp, on_key_up),
        ],
        Box::new(move || engine.state.borrow_mut().clear()),
    )
}

#[cfg(test)]
mod tests {
    use super::register_combination;
    use crate::core::event::KeyEvent;
    use crate::core::options::CombinationOptions;
    use crate::core::scope::ScopeRegistry;
    use crate::platform::KeyTarget;
    use std::cell::RefCell;
    use std::rc::Rc;

    fn options_on(target: &KeyTarget) -> CombinationOptions {
        CombinationOptions {
            target: Some(Rc::new(target.clone())),
            scopes: Some(ScopeRegistry::new()),
            ..CombinationOptions::default()
        }
    }

    #[test]
    fn keyup_after_teardown_is_not_observed() {
        let target = KeyTarget::new();
        let matches = Rc::new(RefCell::new(Vec::new()));
        let matches_in = Rc::clone(&matches);
        let registration = register_combination(
            "ctrl+a",
            move |_, spec| matches_in.borrow_mut().push(spec.to_string()),
            options_on(&target),
        );

        target.dispatch(&KeyEvent::key_down("Control"));
        registration.unregister();
        target.dispatch(&KeyEvent::key_down("a"));
        assert!(matches.borrow().is_empty());
        assert_eq!(registration.label(), "ctrl+a");
    }
}
