use std::cell::{Cell, RefCell};
use std::rc::Rc;

use keyboard_shortcuts::{
    register_combination, window, CombinationOptions, Element, EventKind, KeyEvent, KeyTarget,
    Registration, ScopeRegistry, ScopeTable, Toggle,
};

#[derive(Default)]
struct Recorder {
    calls: RefCell<Vec<String>>,
}

impl Recorder {
    fn handler(self: &Rc<Self>) -> impl FnMut(&KeyEvent, &str) + 'static {
        let recorder = Rc::clone(self);
        move |_event: &KeyEvent, spec: &str| recorder.calls.borrow_mut().push(spec.to_string())
    }

    fn calls(&self) -> Vec<String> {
        self.calls.borrow().clone()
    }
}

fn options_on(target: &KeyTarget) -> CombinationOptions {
    CombinationOptions {
        target: Some(Rc::new(target.clone())),
        scopes: Some(ScopeRegistry::new()),
        ..CombinationOptions::default()
    }
}

fn down(target: &KeyTarget, key: &str) -> bool {
    target.dispatch(&KeyEvent::key_down(key))
}

fn up(target: &KeyTarget, key: &str) -> bool {
    target.dispatch(&KeyEvent::key_up(key))
}

#[test]
fn calls_handler_on_correct_combination() {
    let target = KeyTarget::new();
    let recorder = Rc::new(Recorder::default());
    let _registration = register_combination("ctrl+a", recorder.handler(), options_on(&target));

    assert!(down(&target, "Control"));
    assert!(!down(&target, "a"), "matched keydown must be default-prevented");
    assert_eq!(recorder.calls(), vec!["ctrl+a".to_string()]);
}

#[test]
fn released_keys_do_not_combine() {
    let target = KeyTarget::new();
    let recorder = Rc::new(Recorder::default());
    let _registration = register_combination("ctrl+a", recorder.handler(), options_on(&target));

    down(&target, "Control");
    up(&target, "Control");
    down(&target, "a");
    up(&target, "a");
    assert!(recorder.calls().is_empty());
}

#[test]
fn unrelated_keys_do_not_match() {
    let target = KeyTarget::new();
    let recorder = Rc::new(Recorder::default());
    let _registration = register_combination("ctrl+a", recorder.handler(), options_on(&target));

    down(&target, "x");
    down(&target, "y");
    assert!(recorder.calls().is_empty());
}

#[test]
fn matches_multiple_combinations() {
    let target = KeyTarget::new();
    let recorder = Rc::new(Recorder::default());
    let _registration = register_combination(
        vec!["ctrl+a", "ctrl+b"],
        recorder.handler(),
        options_on(&target),
    );

    down(&target, "Control");
    down(&target, "a");
    up(&target, "a");
    down(&target, "b");
    assert_eq!(recorder.calls(), vec!["ctrl+a".to_string(), "ctrl+b".to_string()]);
}

#[test]
fn refires_on_every_accepted_keydown_while_held() {
    let target = KeyTarget::new();
    let recorder = Rc::new(Recorder::default());
    let _registration = register_combination("ctrl+a", recorder.handler(), options_on(&target));

    down(&target, "Control");
    down(&target, "a");
    down(&target, "a");
    down(&target, "Shift");
    assert_eq!(recorder.calls().len(), 3);

    up(&target, "a");
    down(&target, "Shift");
    assert_eq!(recorder.calls().len(), 3);
}

#[test]
fn modifier_code_aliases_and_case_are_normalized() {
    let target = KeyTarget::new();
    let recorder = Rc::new(Recorder::default());
    let _registration =
        register_combination("Control+Shift+K", recorder.handler(), options_on(&target));

    down(&target, "ControlLeft");
    down(&target, "Shift");
    down(&target, "K");
    assert_eq!(recorder.calls(), vec!["Control+Shift+K".to_string()]);
}

#[test]
fn disabled_registration_ignores_keydown() {
    let target = KeyTarget::new();
    let recorder = Rc::new(Recorder::default());
    let options = CombinationOptions {
        enabled: Some(Toggle::Value(false)),
        ..options_on(&target)
    };
    let _registration = register_combination("ctrl+b", recorder.handler(), options);

    assert!(down(&target, "Control"));
    assert!(down(&target, "b"));
    assert!(recorder.calls().is_empty());
}

#[test]
fn keyup_is_never_gated() {
    let target = KeyTarget::new();
    let recorder = Rc::new(Recorder::default());
    let enabled = Rc::new(Cell::new(true));
    let enabled_in = Rc::clone(&enabled);
    let options = CombinationOptions {
        enabled: Some(Toggle::when(move |_| enabled_in.get())),
        ..options_on(&target)
    };
    let _registration = register_combination("ctrl+a", recorder.handler(), options);

    down(&target, "a");
    enabled.set(false);
    up(&target, "a");
    enabled.set(true);
    down(&target, "Control");
    assert!(recorder.calls().is_empty(), "released key must not stay held");
}

#[test]
fn form_tags_are_excluded_when_requested() {
    let target = KeyTarget::new();
    let recorder = Rc::new(Recorder::default());
    let options = CombinationOptions {
        disabled_on_form_tags: true,
        ..options_on(&target)
    };
    let _registration = register_combination("ctrl+s", recorder.handler(), options);

    let input = Element::new("INPUT");
    target.dispatch(&KeyEvent::key_down("Control").with_target(input.clone()));
    target.dispatch(&KeyEvent::key_down("s").with_target(input));
    assert!(recorder.calls().is_empty());

    let body = Element::new("body");
    target.dispatch(&KeyEvent::key_down("Control").with_target(body.clone()));
    target.dispatch(&KeyEvent::key_down("s").with_target(body));
    assert_eq!(recorder.calls(), vec!["ctrl+s".to_string()]);
}

#[test]
fn prevent_default_can_be_disabled() {
    let target = KeyTarget::new();
    let recorder = Rc::new(Recorder::default());
    let options = CombinationOptions {
        prevent_default: Some(Toggle::Value(false)),
        ..options_on(&target)
    };
    let _registration = register_combination("ctrl+a", recorder.handler(), options);

    down(&target, "Control");
    assert!(down(&target, "a"));
    assert_eq!(recorder.calls().len(), 1);
}

#[test]
fn scope_gates_the_registration() {
    let target = KeyTarget::new();
    let recorder = Rc::new(Recorder::default());
    let scopes = ScopeRegistry::with_scopes(ScopeTable::new());
    let options = CombinationOptions {
        scope: Some("editor".to_string()),
        scopes: Some(scopes.clone()),
        ..options_on(&target)
    };
    let _registration = register_combination("ctrl+a", recorder.handler(), options);

    down(&target, "Control");
    down(&target, "a");
    assert!(recorder.calls().is_empty());

    scopes.enable_scope("editor");
    down(&target, "Control");
    down(&target, "a");
    assert_eq!(recorder.calls().len(), 1);

    scopes.toggle_scope("editor");
    down(&target, "a");
    assert_eq!(recorder.calls().len(), 1);
}

#[test]
fn custom_separator() {
    let target = KeyTarget::new();
    let recorder = Rc::new(Recorder::default());
    let options = CombinationOptions {
        separator: Some("-".to_string()),
        ..options_on(&target)
    };
    let _registration = register_combination("shift-+", recorder.handler(), options);

    down(&target, "Shift");
    down(&target, "+");
    assert_eq!(recorder.calls(), vec!["shift-+".to_string()]);
}

#[test]
fn defaults_to_window_target() {
    let recorder = Rc::new(Recorder::default());
    let options = CombinationOptions {
        scopes: Some(ScopeRegistry::new()),
        ..CombinationOptions::default()
    };
    let registration = register_combination("alt+w", recorder.handler(), options);
    assert_eq!(window().listener_count(EventKind::KeyDown), 1);
    assert_eq!(window().listener_count(EventKind::KeyUp), 1);

    down(&window(), "Alt");
    down(&window(), "w");
    assert_eq!(recorder.calls(), vec!["alt+w".to_string()]);

    drop(registration);
    assert_eq!(window().listener_count(EventKind::KeyDown), 0);
    assert_eq!(window().listener_count(EventKind::KeyUp), 0);
}

#[test]
fn teardown_clears_held_keys() {
    let target = KeyTarget::new();
    let recorder = Rc::new(Recorder::default());
    let registration = register_combination("ctrl+a", recorder.handler(), options_on(&target));

    down(&target, "Control");
    registration.unregister();
    registration.unregister();
    assert!(!registration.is_active());
    assert_eq!(target.listener_count(EventKind::KeyDown), 0);
    assert_eq!(target.listener_count(EventKind::KeyUp), 0);

    let _again = register_combination("ctrl+a", recorder.handler(), options_on(&target));
    down(&target, "a");
    assert!(recorder.calls().is_empty());
}

#[test]
fn handler_may_unregister_itself() {
    let target = KeyTarget::new();
    let slot: Rc<RefCell<Option<Registration>>> = Rc::new(RefCell::new(None));
    let calls = Rc::new(Cell::new(0));

    let slot_in = Rc::clone(&slot);
    let calls_in = Rc::clone(&calls);
    let registration = register_combination(
        "ctrl+q",
        move |_, _| {
            calls_in.set(calls_in.get() + 1);
            if let Some(registration) = slot_in.borrow().as_ref() {
                registration.unregister();
            }
        },
        options_on(&target),
    );
    *slot.borrow_mut() = Some(registration);

    down(&target, "Control");
    down(&target, "q");
    down(&target, "q");
    assert_eq!(calls.get(), 1);
    assert_eq!(target.listener_count(EventKind::KeyDown), 0);
    assert!(slot.borrow().as_ref().is_some_and(|registration| !registration.is_active()));
}

#[test]
fn registrations_are_independent() {
    let target = KeyTarget::new();
    let first = Rc::new(Recorder::default());
    let second = Rc::new(Recorder::default());
    let _a = register_combination("ctrl+a", first.handler(), options_on(&target));
    let b = register_combination("ctrl", second.handler(), options_on(&target));

    down(&target, "Control");
    assert!(first.calls().is_empty());
    assert_eq!(second.calls(), vec!["ctrl".to_string()]);

    drop(b);
    down(&target, "a");
    assert_eq!(first.calls(), vec!["ctrl+a".to_string()]);
    assert_eq!(second.calls().len(), 1);
}
