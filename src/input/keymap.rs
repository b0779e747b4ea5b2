//! Abstract-to-native key translation.
//!
//! A backend publishes a curated list of [`KeyMapEntry`] values. The facade
//! turns it into a [`KeyMapTable`] once, at initialize time, and only reads it
//! afterwards. Keys the backend cannot express are simply missing from the
//! list and therefore always read as "not down".

use super::events::{KEY_SLOTS, Key};
use log::warn;

/// Backend-specific key identifier (a GLFW key code, a keysym, ...).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NativeKey(pub i32);

/// One abstract key and the native key that represents it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct KeyMapEntry {
    pub key: Key,
    pub native: NativeKey,
}

const fn entry(key: Key, native: i32) -> KeyMapEntry {
    KeyMapEntry {
        key,
        native: NativeKey(native),
    }
}

/// Curated table for GLFW key codes (`GLFW_KEY_*`).
pub const GLFW_KEYS: &[KeyMapEntry] = &[
    entry(Key::Num0, 48),
    entry(Key::Num1, 49),
    entry(Key::Num2, 50),
    entry(Key::Num3, 51),
    entry(Key::Num4, 52),
    entry(Key::Num5, 53),
    entry(Key::Num6, 54),
    entry(Key::Num7, 55),
    entry(Key::Num8, 56),
    entry(Key::Num9, 57),
    entry(Key::A, 65),
    entry(Key::B, 66),
    entry(Key::C, 67),
    entry(Key::D, 68),
    entry(Key::E, 69),
    entry(Key::F, 70),
    entry(Key::G, 71),
    entry(Key::H, 72),
    entry(Key::I, 73),
    entry(Key::J, 74),
    entry(Key::K, 75),
    entry(Key::L, 76),
    entry(Key::M, 77),
    entry(Key::N, 78),
    entry(Key::O, 79),
    entry(Key::P, 80),
    entry(Key::Q, 81),
    entry(Key::R, 82),
    entry(Key::S, 83),
    entry(Key::T, 84),
    entry(Key::U, 85),
    entry(Key::V, 86),
    entry(Key::W, 87),
    entry(Key::X, 88),
    entry(Key::Y, 89),
    entry(Key::Z, 90),
    entry(Key::Space, 32),
    entry(Key::Escape, 256),
    entry(Key::Enter, 257),
    entry(Key::Tab, 258),
    entry(Key::Backspace, 259),
    entry(Key::Insert, 260),
    entry(Key::Delete, 261),
    entry(Key::Right, 262),
    entry(Key::Left, 263),
    entry(Key::Down, 264),
    entry(Key::Up, 265),
    entry(Key::PageUp, 266),
    entry(Key::PageDown, 267),
    entry(Key::Home, 268),
    entry(Key::End, 269),
    entry(Key::CapsLock, 280),
    entry(Key::F1, 290),
    entry(Key::F2, 291),
    entry(Key::F3, 292),
    entry(Key::F4, 293),
    entry(Key::F5, 294),
    entry(Key::F6, 295),
    entry(Key::F7, 296),
    entry(Key::F8, 297),
    entry(Key::F9, 298),
    entry(Key::F10, 299),
    entry(Key::F11, 300),
    entry(Key::F12, 301),
    entry(Key::Shift, 340),
    entry(Key::Control, 341),
    entry(Key::Alt, 342),
    entry(Key::ShiftRight, 344),
    entry(Key::ControlRight, 345),
    entry(Key::AltRight, 346),
];

/// Immutable abstract/native lookup, indexed both ways.
#[derive(Debug, Clone)]
pub struct KeyMapTable {
    native_for: [Option<NativeKey>; KEY_SLOTS],
    entries: Vec<KeyMapEntry>,
}

impl Default for KeyMapTable {
    fn default() -> Self {
        Self {
            native_for: [None; KEY_SLOTS],
            entries: Vec::new(),
        }
    }
}

impl KeyMapTable {
    /// Builds the table from a curated entry list.
    ///
    /// The first entry wins when an abstract key or a native key appears
    /// twice; later duplicates are dropped with a warning so that no native
    /// key ever answers for two abstract keys.
    pub fn build(source: &[KeyMapEntry]) -> Self {
        let mut table = Self::default();

        for candidate in source {
            if table.native_for[candidate.key.index()].is_some() {
                warn!("Duplicate key map entry for {}, ignoring", candidate.key);
                continue;
            }
            if let Some(owner) = table.key_for(candidate.native) {
                warn!(
                    "Native key {} already mapped to {}, ignoring {}",
                    candidate.native.0, owner, candidate.key
                );
                continue;
            }

            table.native_for[candidate.key.index()] = Some(candidate.native);
            table.entries.push(*candidate);
        }

        table
    }

    /// Native key for `key`, or `None` when the backend has no equivalent.
    pub fn native(&self, key: Key) -> Option<NativeKey> {
        self.native_for.get(key.index()).copied().flatten()
    }

    /// Reverse lookup.
    pub fn key_for(&self, native: NativeKey) -> Option<Key> {
        self.entries
            .iter()
            .find(|entry| entry.native == native)
            .map(|entry| entry.key)
    }

    pub fn contains(&self, key: Key) -> bool {
        self.native(key).is_some()
    }

    /// Mapped entries in table order.
    pub fn entries(&self) -> &[KeyMapEntry] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
