// Host-side tests for the keyboard shortcut mapping.
// The main crate is wasm-only, so we include the pure-Rust module directly.

#![allow(dead_code)]
mod shortcuts {
    include!("../src/core/shortcuts.rs");
}

use shortcuts::*;

#[test]
fn bindings_are_case_insensitive() {
    assert_eq!(shortcut_for_key("h"), Some(Shortcut::Home));
    assert_eq!(shortcut_for_key("H"), Some(Shortcut::Home));
    assert_eq!(shortcut_for_key("r"), Some(Shortcut::Retry));
    assert_eq!(shortcut_for_key("R"), Some(Shortcut::Retry));
    assert_eq!(shortcut_for_key("m"), Some(Shortcut::ToggleSound));
    assert_eq!(shortcut_for_key("M"), Some(Shortcut::ToggleSound));
}

#[test]
fn other_keys_are_ignored() {
    assert_eq!(shortcut_for_key("a"), None);
    assert_eq!(shortcut_for_key("x"), None);
    assert_eq!(shortcut_for_key(" "), None);
    assert_eq!(shortcut_for_key("Enter"), None);
    assert_eq!(shortcut_for_key("Escape"), None);
    assert_eq!(shortcut_for_key("ArrowUp"), None);
}
