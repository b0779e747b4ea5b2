//! Platform-neutral identifiers for keyboard keys, mouse buttons and cursor modes.

use crate::error::InputError;
use std::fmt;
use std::str::FromStr;

/// Abstract key identifier.
///
/// Values are stable across backends. The discriminants follow the Win32
/// virtual-key numbering so that [`Key::from_vk`] and [`Key::vk`] are plain
/// lookups; backends translate them through a
/// [`KeyMapTable`](super::keymap::KeyMapTable).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[repr(u8)]
pub enum Key {
    // Mouse pseudo-keys. Never present in a key table, so they always read as up;
    // query mouse buttons through `MouseButton` instead.
    MouseLeft = 0x01,
    MouseRight = 0x02,
    MouseMiddle = 0x04,

    Backspace = 0x08,
    Tab = 0x09,
    Enter = 0x0D,
    Shift = 0x10,
    Control = 0x11,
    Alt = 0x12,
    CapsLock = 0x14,
    Escape = 0x1B,
    Space = 0x20,
    PageUp = 0x21,
    PageDown = 0x22,
    End = 0x23,
    Home = 0x24,
    Left = 0x25,
    Up = 0x26,
    Right = 0x27,
    Down = 0x28,
    Insert = 0x2D,
    Delete = 0x2E,

    Num0 = 0x30,
    Num1 = 0x31,
    Num2 = 0x32,
    Num3 = 0x33,
    Num4 = 0x34,
    Num5 = 0x35,
    Num6 = 0x36,
    Num7 = 0x37,
    Num8 = 0x38,
    Num9 = 0x39,

    A = 0x41,
    B = 0x42,
    C = 0x43,
    D = 0x44,
    E = 0x45,
    F = 0x46,
    G = 0x47,
    H = 0x48,
    I = 0x49,
    J = 0x4A,
    K = 0x4B,
    L = 0x4C,
    M = 0x4D,
    N = 0x4E,
    O = 0x4F,
    P = 0x50,
    Q = 0x51,
    R = 0x52,
    S = 0x53,
    T = 0x54,
    U = 0x55,
    V = 0x56,
    W = 0x57,
    X = 0x58,
    Y = 0x59,
    Z = 0x5A,

    F1 = 0x70,
    F2 = 0x71,
    F3 = 0x72,
    F4 = 0x73,
    F5 = 0x74,
    F6 = 0x75,
    F7 = 0x76,
    F8 = 0x77,
    F9 = 0x78,
    F10 = 0x79,
    F11 = 0x7A,
    F12 = 0x7B,

    // VK_RSHIFT / VK_RCONTROL / VK_RMENU
    ShiftRight = 0xA1,
    ControlRight = 0xA3,
    AltRight = 0xA5,
}

/// Number of slots needed to index every [`Key`] by [`Key::index`].
pub const KEY_SLOTS: usize = 256;

impl Key {
    /// Every abstract key, in discriminant order.
    pub const ALL: [Key; 73] = [
        Key::MouseLeft,
        Key::MouseRight,
        Key::MouseMiddle,
        Key::Backspace,
        Key::Tab,
        Key::Enter,
        Key::Shift,
        Key::Control,
        Key::Alt,
        Key::CapsLock,
        Key::Escape,
        Key::Space,
        Key::PageUp,
        Key::PageDown,
        Key::End,
        Key::Home,
        Key::Left,
        Key::Up,
        Key::Right,
        Key::Down,
        Key::Insert,
        Key::Delete,
        Key::Num0,
        Key::Num1,
        Key::Num2,
        Key::Num3,
        Key::Num4,
        Key::Num5,
        Key::Num6,
        Key::Num7,
        Key::Num8,
        Key::Num9,
        Key::A,
        Key::B,
        Key::C,
        Key::D,
        Key::E,
        Key::F,
        Key::G,
        Key::H,
        Key::I,
        Key::J,
        Key::K,
        Key::L,
        Key::M,
        Key::N,
        Key::O,
        Key::P,
        Key::Q,
        Key::R,
        Key::S,
        Key::T,
        Key::U,
        Key::V,
        Key::W,
        Key::X,
        Key::Y,
        Key::Z,
        Key::F1,
        Key::F2,
        Key::F3,
        Key::F4,
        Key::F5,
        Key::F6,
        Key::F7,
        Key::F8,
        Key::F9,
        Key::F10,
        Key::F11,
        Key::F12,
        Key::ShiftRight,
        Key::ControlRight,
        Key::AltRight,
    ];

    /// Slot used by the edge trackers. Always below [`KEY_SLOTS`].
    pub fn index(self) -> usize {
        self as u8 as usize
    }

    /// Win32 virtual-key code for this key.
    pub fn vk(self) -> i32 {
        self as u8 as i32
    }

    /// Converts a Win32 virtual-key code. Generic and left-hand modifier
    /// codes collapse onto the left-hand keys.
    pub fn from_vk(vk: i32) -> Option<Key> {
        match vk {
            0xA0 => Some(Key::Shift),   // VK_LSHIFT
            0xA2 => Some(Key::Control), // VK_LCONTROL
            0xA4 => Some(Key::Alt),     // VK_LMENU
            _ => Key::ALL.iter().copied().find(|key| key.vk() == vk),
        }
    }

    /// Canonical name, as accepted by [`Key::from_str`].
    pub fn name(self) -> &'static str {
        match self {
            Key::MouseLeft => "MouseLeft",
            Key::MouseRight => "MouseRight",
            Key::MouseMiddle => "MouseMiddle",
            Key::Backspace => "Backspace",
            Key::Tab => "Tab",
            Key::Enter => "Enter",
            Key::Shift => "Shift",
            Key::Control => "Control",
            Key::Alt => "Alt",
            Key::CapsLock => "CapsLock",
            Key::Escape => "Escape",
            Key::Space => "Space",
            Key::PageUp => "PageUp",
            Key::PageDown => "PageDown",
            Key::End => "End",
            Key::Home => "Home",
            Key::Left => "Left",
            Key::Up => "Up",
            Key::Right => "Right",
            Key::Down => "Down",
            Key::Insert => "Insert",
            Key::Delete => "Delete",
            Key::Num0 => "0",
            Key::Num1 => "1",
            Key::Num2 => "2",
            Key::Num3 => "3",
            Key::Num4 => "4",
            Key::Num5 => "5",
            Key::Num6 => "6",
            Key::Num7 => "7",
            Key::Num8 => "8",
            Key::Num9 => "9",
            Key::A => "A",
            Key::B => "B",
            Key::C => "C",
            Key::D => "D",
            Key::E => "E",
            Key::F => "F",
            Key::G => "G",
            Key::H => "H",
            Key::I => "I",
            Key::J => "J",
            Key::K => "K",
            Key::L => "L",
            Key::M => "M",
            Key::N => "N",
            Key::O => "O",
            Key::P => "P",
            Key::Q => "Q",
            Key::R => "R",
            Key::S => "S",
            Key::T => "T",
            Key::U => "U",
            Key::V => "V",
            Key::W => "W",
            Key::X => "X",
            Key::Y => "Y",
            Key::Z => "Z",
            Key::F1 => "F1",
            Key::F2 => "F2",
            Key::F3 => "F3",
            Key::F4 => "F4",
            Key::F5 => "F5",
            Key::F6 => "F6",
            Key::F7 => "F7",
            Key::F8 => "F8",
            Key::F9 => "F9",
            Key::F10 => "F10",
            Key::F11 => "F11",
            Key::F12 => "F12",
            Key::ShiftRight => "ShiftRight",
            Key::ControlRight => "ControlRight",
            Key::AltRight => "AltRight",
        }
    }
}

impl fmt::Display for Key {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Key {
    type Err = InputError;

    /// Case-insensitive. Accepts the canonical names plus a few common
    /// spellings ("Ctrl", "Esc", "Return", "Num7").
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        let lower = trimmed.to_ascii_lowercase();

        let alias = match lower.as_str() {
            "ctrl" | "lctrl" | "controlleft" => Some(Key::Control),
            "rctrl" | "ctrlright" => Some(Key::ControlRight),
            "lshift" | "shiftleft" => Some(Key::Shift),
            "rshift" => Some(Key::ShiftRight),
            "lalt" | "altleft" => Some(Key::Alt),
            "ralt" | "altgr" => Some(Key::AltRight),
            "esc" => Some(Key::Escape),
            "return" => Some(Key::Enter),
            "del" => Some(Key::Delete),
            "ins" => Some(Key::Insert),
            "pgup" => Some(Key::PageUp),
            "pgdn" | "pgdown" => Some(Key::PageDown),
            _ => None,
        };
        if let Some(key) = alias {
            return Ok(key);
        }

        let digits = lower.strip_prefix("num").unwrap_or(&lower);
        Key::ALL
            .iter()
            .copied()
            .find(|key| key.name().eq_ignore_ascii_case(trimmed) || key.name() == digits)
            .ok_or_else(|| InputError::UnknownKey(trimmed.to_string()))
    }
}

/// Mouse button identification.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MouseButton {
    /// Primary button
    Left,
    /// Secondary button
    Right,
    /// Wheel button
    Middle,
    /// First side button (usually "back")
    Button4,
    /// Second side button (usually "forward")
    Button5,
}

/// Number of tracked mouse buttons.
pub const BUTTON_SLOTS: usize = 5;

impl MouseButton {
    pub const ALL: [MouseButton; BUTTON_SLOTS] = [
        MouseButton::Left,
        MouseButton::Right,
        MouseButton::Middle,
        MouseButton::Button4,
        MouseButton::Button5,
    ];

    pub fn index(self) -> usize {
        match self {
            MouseButton::Left => 0,
            MouseButton::Right => 1,
            MouseButton::Middle => 2,
            MouseButton::Button4 => 3,
            MouseButton::Button5 => 4,
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            MouseButton::Left => "Left",
            MouseButton::Right => "Right",
            MouseButton::Middle => "Middle",
            MouseButton::Button4 => "Button4",
            MouseButton::Button5 => "Button5",
        }
    }
}

impl fmt::Display for MouseButton {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for MouseButton {
    type Err = InputError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        match trimmed.to_ascii_lowercase().as_str() {
            "left" | "primary" => Ok(MouseButton::Left),
            "right" | "secondary" => Ok(MouseButton::Right),
            "middle" | "wheel" => Ok(MouseButton::Middle),
            "button4" | "back" => Ok(MouseButton::Button4),
            "button5" | "forward" => Ok(MouseButton::Button5),
            _ => Err(InputError::UnknownButton(trimmed.to_string())),
        }
    }
}

/// Cursor presentation requested from the backend.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CursorMode {
    /// Cursor shown and free to leave the window
    Visible,
    /// Cursor hidden and locked to the window (relative motion)
    Hidden,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn vk_roundtrip_for_every_key() {
        for key in Key::ALL {
            assert_eq!(Key::from_vk(key.vk()), Some(key));
        }
    }

    #[test]
    fn left_modifier_vk_codes_collapse() {
        assert_eq!(Key::from_vk(0xA0), Some(Key::Shift));
        assert_eq!(Key::from_vk(0xA1), Some(Key::ShiftRight));
        assert_eq!(Key::from_vk(0xA2), Some(Key::Control));
        assert_eq!(Key::from_vk(0xA4), Some(Key::Alt));
        assert_eq!(Key::from_vk(0xFF), None);
    }

    #[test]
    fn index_fits_slots() {
        assert!(Key::ALL.iter().all(|key| key.index() < KEY_SLOTS));
    }

    #[test]
    fn parse_names_and_aliases() {
        assert_eq!("w".parse::<Key>().unwrap(), Key::W);
        assert_eq!("F10".parse::<Key>().unwrap(), Key::F10);
        assert_eq!("Ctrl".parse::<Key>().unwrap(), Key::Control);
        assert_eq!(" esc ".parse::<Key>().unwrap(), Key::Escape);
        assert_eq!("7".parse::<Key>().unwrap(), Key::Num7);
        assert_eq!("Num7".parse::<Key>().unwrap(), Key::Num7);
        assert_eq!("shiftright".parse::<Key>().unwrap(), Key::ShiftRight);
    }

    #[test]
    fn parse_unknown_key_fails() {
        let err = "Hyper".parse::<Key>().unwrap_err();
        assert!(matches!(err, InputError::UnknownKey(name) if name == "Hyper"));
    }

    #[test]
    fn parse_buttons() {
        assert_eq!("left".parse::<MouseButton>().unwrap(), MouseButton::Left);
        assert_eq!("Back".parse::<MouseButton>().unwrap(), MouseButton::Button4);
        assert!("Button9".parse::<MouseButton>().is_err());
    }

    #[test]
    fn display_uses_canonical_names() {
        assert_eq!(Key::PageDown.to_string(), "PageDown");
        assert_eq!(MouseButton::Button5.to_string(), "Button5");
    }
}
