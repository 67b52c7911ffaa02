//! Per-event enablement and default-action decisions.

use crate::core::event::KeyEvent;
use crate::core::options::{ShortcutOptions, Toggle};
use crate::core::scope;

const FORM_TAGS: [&str; 3] = ["input", "textarea", "select"];

/// Decides whether a key event may be recorded by a registration.
///
/// Order of checks:
/// 1. The registration's scope must be in scope.
/// 2. An `enabled` predicate is authoritative; tag and content-editable checks are skipped.
/// 3. Events from a disabled tag, or from a `contenteditable="true"` element when
///    `disabled_on_content_editable` is set, are rejected.
/// 4. Otherwise the `enabled` value, defaulting to `true`.
pub fn is_enabled(event: &KeyEvent, options: &ShortcutOptions) -> bool {
    let scope = options.scope.as_deref();
    let in_scope = match &options.scopes {
        Some(registry) => registry.is_in_scope(scope),
        None => scope::is_in_scope(scope),
    };
    if !in_scope {
        return false;
    }

    if let Some(Toggle::When(predicate)) = &options.enabled {
        return predicate(event);
    }

    if let Some(element) = &event.target {
        let tag_name = element.tag_name.to_lowercase();
        let form_tags: &[&str] = if options.disabled_on_form_tags {
            &FORM_TAGS
        } else {
            &[]
        };
        let disabled_tag = options
            .disabled_on_tags
            .iter()
            .map(String::as_str)
            .chain(form_tags.iter().copied())
            .any(|tag| tag.to_lowercase() == tag_name);
        if disabled_tag {
            return false;
        }

        if options.disabled_on_content_editable
            && element.attribute("contenteditable") == Some("true")
        {
            return false;
        }
    }

    options
        .enabled
        .as_ref()
        .map_or(true, |toggle| toggle.evaluate(event))
}

/// Decides whether a matched event's default action is suppressed; defaults to `true`.
pub fn should_prevent_default(event: &KeyEvent, options: &ShortcutOptions) -> bool {
    options
        .prevent_default
        .as_ref()
        .map_or(true, |toggle| toggle.evaluate(event))
}
