// Single-key, case-insensitive page shortcuts.

#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum Shortcut {
    Home,
    Retry,
    ToggleSound,
}

pub fn shortcut_for_key(key: &str) -> Option<Shortcut> {
    match key.to_ascii_lowercase().as_str() {
        "h" => Some(Shortcut::Home),
        "r" => Some(Shortcut::Retry),
        "m" => Some(Shortcut::ToggleSound),
        _ => None,
    }
}
