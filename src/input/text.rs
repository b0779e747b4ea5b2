//! Text entered through the backend's character notifications.

use log::warn;

/// Per-frame UTF-8 text buffer fed by codepoint notifications.
#[derive(Debug, Clone, Default)]
pub struct TextCapture {
    enabled: bool,
    buffer: String,
}

impl TextCapture {
    pub fn new(enabled: bool) -> Self {
        Self {
            enabled,
            buffer: String::new(),
        }
    }

    /// Toggles buffering. Text already collected is kept either way.
    pub fn set_enabled(&mut self, enabled: bool) {
        self.enabled = enabled;
    }

    pub fn is_enabled(&self) -> bool {
        self.enabled
    }

    /// Appends one codepoint as UTF-8 when capture is enabled.
    ///
    /// Values that are not Unicode scalar values (above `0x10FFFF`, or UTF-16
    /// surrogates) are dropped.
    pub fn on_codepoint(&mut self, codepoint: u32) {
        if !self.enabled {
            return;
        }
        match char::from_u32(codepoint) {
            Some(ch) => self.buffer.push(ch),
            None => warn!("Dropping invalid codepoint U+{codepoint:X}"),
        }
    }

    /// Text collected so far, not yet drained.
    pub fn pending(&self) -> &str {
        &self.buffer
    }

    /// Hands out the collected text and empties the buffer.
    pub fn drain_and_clear(&mut self) -> String {
        std::mem::take(&mut self.buffer)
    }

    pub fn clear(&mut self) {
        self.buffer.clear();
    }
}
