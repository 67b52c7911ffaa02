//! Key name normalization.
//!
//! Browser `KeyboardEvent.key` and `KeyboardEvent.code` values, as well as the
//! tokens written in shortcut strings, are mapped onto one lowercase vocabulary
//! so that `"Control"`, `"ControlLeft"` and `"ctrl"` all compare equal.

/// Normalized names of the modifier keys.
pub const MODIFIER_KEYS: [&str; 4] = ["ctrl", "alt", "meta", "shift"];

fn alias(raw: &str) -> Option<&'static str> {
    let mapped = match raw {
        " " => "space",
        "esc" => "escape",
        "return" => "enter",
        "left" => "arrowleft",
        "right" => "arrowright",
        "up" => "arrowup",
        "down" => "arrowdown",
        "Shift" | "ShiftLeft" | "ShiftRight" => "shift",
        "AltLeft" | "AltRight" => "alt",
        "MetaLeft" | "MetaRight" | "OSLeft" | "OSRight" => "meta",
        "Control" | "ControlLeft" | "ControlRight" => "ctrl",
        _ => return None,
    };
    Some(mapped)
}

/// Maps a raw key identifier to its canonical lowercase name.
///
/// Alias lookup is exact, so `"Esc"` is not an alias and normalizes to `"esc"`.
pub fn normalize_key(raw: &str) -> String {
    match alias(raw) {
        Some(mapped) => mapped.to_string(),
        None => raw.to_lowercase(),
    }
}

/// Returns whether a normalized key name is one of [`MODIFIER_KEYS`].
pub fn is_modifier_key(key: &str) -> bool {
    MODIFIER_KEYS.contains(&key)
}
