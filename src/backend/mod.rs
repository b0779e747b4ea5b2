//! Windowing backend contract.
//!
//! The input facade never talks to a platform API directly. Everything it
//! needs from the window system goes through [`WindowBackend`]: raw "is this
//! control held" polling, the cursor, the clipboard, cursor visibility and
//! registration of the two asynchronous callbacks (characters and scroll).
//!
//! The facade holds a backend *handle*. It never creates or destroys the
//! underlying window, and must cope with the window not existing yet (or
//! anymore), which is what [`BackendStatus::NotReady`] reports.

pub mod null;
pub mod scripted;

pub use null::NullBackend;
pub use scripted::ScriptedBackend;

use crate::input::{CursorMode, InputSink, KeyMapEntry, MouseButton, NativeKey};

/// Whether the backend can currently be polled.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BackendStatus {
    /// Window exists; polling and callbacks are live
    Ready,
    /// Window not created yet or already destroyed; try again next frame
    NotReady,
    /// The window system itself cannot be reached
    Unreachable,
}

/// Raw input primitives supplied by a window system.
///
/// Polling methods are only called while [`status`](Self::status) reports
/// [`BackendStatus::Ready`].
pub trait WindowBackend {
    /// Human-readable backend name for logs and diagnostics.
    fn name(&self) -> &'static str;

    fn status(&self) -> BackendStatus;

    /// Curated abstract-to-native key table for this backend.
    fn key_table(&self) -> &'static [KeyMapEntry];

    /// Whether the native key is held right now.
    fn is_key_down(&self, key: NativeKey) -> bool;

    /// Whether the mouse button is held right now.
    fn is_button_down(&self, button: MouseButton) -> bool;

    /// Cursor position in window coordinates.
    fn cursor_position(&self) -> (f64, f64);

    fn set_cursor_position(&mut self, x: f64, y: f64);

    /// Clipboard contents, `None` when empty or not text.
    fn clipboard_text(&self) -> Option<String>;

    fn set_clipboard_text(&mut self, text: &str);

    fn set_cursor_mode(&mut self, mode: CursorMode);

    /// Installs the character and scroll callbacks, replacing earlier ones.
    fn register_callbacks(&mut self, sink: InputSink);

    /// Removes any installed callbacks. Must be safe to call repeatedly.
    fn clear_callbacks(&mut self);
}
