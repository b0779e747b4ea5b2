//! Backend for builds without a window system.

use super::{BackendStatus, WindowBackend};
use crate::input::{CursorMode, InputSink, KeyMapEntry, MouseButton, NativeKey};

/// Backend that never has a window.
///
/// Every poll reports "nothing happening" and every command is ignored, so a
/// facade running on top of it answers all queries with their idle defaults.
#[derive(Debug, Clone, Copy, Default)]
pub struct NullBackend;

impl WindowBackend for NullBackend {
    fn name(&self) -> &'static str {
        "null"
    }

    fn status(&self) -> BackendStatus {
        BackendStatus::NotReady
    }

    fn key_table(&self) -> &'static [KeyMapEntry] {
        &[]
    }

    fn is_key_down(&self, _key: NativeKey) -> bool {
        false
    }

    fn is_button_down(&self, _button: MouseButton) -> bool {
        false
    }

    fn cursor_position(&self) -> (f64, f64) {
        (0.0, 0.0)
    }

    fn set_cursor_position(&mut self, _x: f64, _y: f64) {}

    fn clipboard_text(&self) -> Option<String> {
        None
    }

    fn set_clipboard_text(&mut self, _text: &str) {}

    fn set_cursor_mode(&mut self, _mode: CursorMode) {}

    fn register_callbacks(&mut self, _sink: InputSink) {}

    fn clear_callbacks(&mut self) {}
}
