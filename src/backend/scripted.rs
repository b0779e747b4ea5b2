//! In-memory backend driven by code instead of a window system.
//!
//! Used by the replay tool and by tests: the caller sets which keys and
//! buttons are held, moves the cursor and fires character/scroll callbacks,
//! then lets the facade poll it exactly as it would poll a real window.

use super::{BackendStatus, WindowBackend};
use crate::input::{
    BUTTON_SLOTS, CursorMode, GLFW_KEYS, InputSink, Key, KeyMapEntry, MouseButton, NativeKey,
};
use log::debug;
use std::cell::Cell;
use std::collections::BTreeSet;

#[derive(Debug)]
pub struct ScriptedBackend {
    status: BackendStatus,
    table: &'static [KeyMapEntry],
    held_keys: BTreeSet<NativeKey>,
    held_buttons: [bool; BUTTON_SLOTS],
    cursor: (f64, f64),
    cursor_mode: CursorMode,
    clipboard: Option<String>,
    sink: Option<InputSink>,
    polls: Cell<usize>,
}

impl Default for ScriptedBackend {
    fn default() -> Self {
        Self::new()
    }
}

impl ScriptedBackend {
    /// A ready backend using the GLFW key table.
    pub fn new() -> Self {
        Self::with_key_table(GLFW_KEYS)
    }

    pub fn with_key_table(table: &'static [KeyMapEntry]) -> Self {
        Self {
            status: BackendStatus::Ready,
            table,
            held_keys: BTreeSet::new(),
            held_buttons: [false; BUTTON_SLOTS],
            cursor: (0.0, 0.0),
            cursor_mode: CursorMode::Visible,
            clipboard: None,
            sink: None,
            polls: Cell::new(0),
        }
    }

    pub fn set_status(&mut self, status: BackendStatus) {
        debug!("Scripted backend status -> {:?}", status);
        self.status = status;
    }

    fn native_for(&self, key: Key) -> Option<NativeKey> {
        self.table
            .iter()
            .find(|entry| entry.key == key)
            .map(|entry| entry.native)
    }

    /// Holds `key`. Returns false when the key has no native equivalent.
    pub fn press_key(&mut self, key: Key) -> bool {
        match self.native_for(key) {
            Some(native) => {
                self.held_keys.insert(native);
                true
            }
            None => false,
        }
    }

    pub fn release_key(&mut self, key: Key) {
        if let Some(native) = self.native_for(key) {
            self.held_keys.remove(&native);
        }
    }

    pub fn press_native(&mut self, key: NativeKey) {
        self.held_keys.insert(key);
    }

    pub fn release_native(&mut self, key: NativeKey) {
        self.held_keys.remove(&key);
    }

    pub fn release_all_keys(&mut self) {
        self.held_keys.clear();
    }

    pub fn press_button(&mut self, button: MouseButton) {
        self.held_buttons[button.index()] = true;
    }

    pub fn release_button(&mut self, button: MouseButton) {
        self.held_buttons[button.index()] = false;
    }

    pub fn release_all_buttons(&mut self) {
        self.held_buttons = [false; BUTTON_SLOTS];
    }

    /// Moves the cursor without going through the facade.
    pub fn move_cursor(&mut self, x: f64, y: f64) {
        self.cursor = (x, y);
    }

    /// Fires one character callback per `char` of `text`.
    pub fn type_text(&self, text: &str) {
        for ch in text.chars() {
            self.type_codepoint(ch as u32);
        }
    }

    /// Fires a character callback with an arbitrary (possibly invalid) value.
    pub fn type_codepoint(&self, codepoint: u32) {
        if let Some(sink) = &self.sink {
            sink.on_character(codepoint);
        }
    }

    /// Fires a scroll callback.
    pub fn scroll(&self, delta_y: f64) {
        if let Some(sink) = &self.sink {
            sink.on_scroll(delta_y);
        }
    }

    pub fn cursor_mode(&self) -> CursorMode {
        self.cursor_mode
    }

    pub fn has_callbacks(&self) -> bool {
        self.sink.is_some()
    }

    /// The registered callback handle, as a real window system would keep it.
    pub fn callback_sink(&self) -> Option<InputSink> {
        self.sink.clone()
    }

    /// Number of key/button/cursor polls served so far.
    pub fn polls(&self) -> usize {
        self.polls.get()
    }

    fn count_poll(&self) {
        self.polls.set(self.polls.get() + 1);
    }
}

impl WindowBackend for ScriptedBackend {
    fn name(&self) -> &'static str {
        "scripted"
    }

    fn status(&self) -> BackendStatus {
        self.status
    }

    fn key_table(&self) -> &'static [KeyMapEntry] {
        self.table
    }

    fn is_key_down(&self, key: NativeKey) -> bool {
        self.count_poll();
        self.held_keys.contains(&key)
    }

    fn is_button_down(&self, button: MouseButton) -> bool {
        self.count_poll();
        self.held_buttons[button.index()]
    }

    fn cursor_position(&self) -> (f64, f64) {
        self.count_poll();
        self.cursor
    }

    fn set_cursor_position(&mut self, x: f64, y: f64) {
        self.cursor = (x, y);
    }

    fn clipboard_text(&self) -> Option<String> {
        self.clipboard.clone()
    }

    fn set_clipboard_text(&mut self, text: &str) {
        self.clipboard = Some(text.to_string());
    }

    fn set_cursor_mode(&mut self, mode: CursorMode) {
        self.cursor_mode = mode;
    }

    fn register_callbacks(&mut self, sink: InputSink) {
        self.sink = Some(sink);
    }

    fn clear_callbacks(&mut self) {
        self.sink = None;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn press_and_release_through_table() {
        let mut backend = ScriptedBackend::new();
        assert!(backend.press_key(Key::A));
        assert!(backend.is_key_down(NativeKey(65)));

        backend.release_key(Key::A);
        assert!(!backend.is_key_down(NativeKey(65)));
    }

    #[test]
    fn unmapped_key_cannot_be_pressed() {
        let mut backend = ScriptedBackend::new();
        assert!(!backend.press_key(Key::MouseLeft));
    }

    #[test]
    fn callbacks_without_sink_are_dropped() {
        let backend = ScriptedBackend::new();
        assert!(!backend.has_callbacks());
        backend.scroll(1.0);
        backend.type_text("ignored");
    }

    #[test]
    fn polls_are_counted() {
        let backend = ScriptedBackend::new();
        backend.is_key_down(NativeKey(1));
        backend.is_button_down(MouseButton::Left);
        backend.cursor_position();
        assert_eq!(backend.polls(), 3);
    }
}
