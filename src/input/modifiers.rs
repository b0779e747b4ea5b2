//! Keyboard modifier summary.

use super::events::Key;

/// Which modifier keys are held this frame, either hand.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Modifiers {
    /// Shift key pressed
    pub shift: bool,
    /// Ctrl key pressed
    pub ctrl: bool,
    /// Alt key pressed
    pub alt: bool,
}

impl Modifiers {
    /// Creates a new Modifiers instance with all keys released.
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds the summary from a per-key "is down" query.
    pub fn from_held(is_down: impl Fn(Key) -> bool) -> Self {
        Self {
            shift: is_down(Key::Shift) || is_down(Key::ShiftRight),
            ctrl: is_down(Key::Control) || is_down(Key::ControlRight),
            alt: is_down(Key::Alt) || is_down(Key::AltRight),
        }
    }

    /// Check if any modifier is pressed.
    pub fn any(&self) -> bool {
        self.shift || self.ctrl || self.alt
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn right_hand_keys_count() {
        let mods = Modifiers::from_held(|key| key == Key::ControlRight);
        assert!(mods.ctrl);
        assert!(!mods.shift);
        assert!(!mods.alt);
        assert!(mods.any());
    }

    #[test]
    fn nothing_held() {
        let mods = Modifiers::from_held(|_| false);
        assert_eq!(mods, Modifiers::new());
        assert!(!mods.any());
    }
}
