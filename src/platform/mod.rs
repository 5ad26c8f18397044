//! Platform abstraction layer
//!
//! Input devices reduce to a single "jump" signal; this module decides which
//! raw browser events count as one.

/// Raw input reported by the front-end
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RawInput<'a> {
    /// Keyboard event: `code` and `key` as reported by the browser
    Key { code: &'a str, key: &'a str },
    Click,
    Touch,
}

/// Whether a key press should make the actor jump
pub fn is_jump_key(code: &str, key: &str) -> bool {
    matches!(code, "Space" | "ArrowUp") || matches!(key, " " | "ArrowUp")
}

/// Whether a key press toggles sound
pub fn is_mute_key(key: &str) -> bool {
    matches!(key, "m" | "M")
}

/// Whether a raw input is a jump signal
pub fn is_jump(input: RawInput<'_>) -> bool {
    match input {
        RawInput::Key { code, key } => is_jump_key(code, key),
        RawInput::Click | RawInput::Touch => true,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_jump_keys() {
        assert!(is_jump_key("Space", " "));
        assert!(is_jump_key("ArrowUp", "ArrowUp"));
        assert!(is_jump_key("", " "));
        assert!(!is_jump_key("KeyA", "a"));
        assert!(!is_jump_key("Escape", "Escape"));
    }

    #[test]
    fn test_mute_key() {
        assert!(is_mute_key("m"));
        assert!(is_mute_key("M"));
        assert!(!is_mute_key(" "));
        assert!(!is_jump_key("KeyM", "m"));
    }

    #[test]
    fn test_pointer_inputs_jump() {
        assert!(is_jump(RawInput::Click));
        assert!(is_jump(RawInput::Touch));
        assert!(!is_jump(RawInput::Key {
            code: "Enter",
            key: "Enter"
        }));
    }
}
