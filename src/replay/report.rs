//! Per-frame snapshots of the facade, as printed by `frameinput replay`.

use crate::backend::WindowBackend;
use crate::input::{InputFacade, Key, MouseButton};
use serde::Serialize;
use std::fmt;

/// What the facade reported after one update.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FrameReport {
    /// Zero-based update number within the script
    pub index: u64,
    /// Whether the update actually polled a window
    pub polled: bool,
    pub pressed: Vec<String>,
    pub held: Vec<String>,
    pub released: Vec<String>,
    pub buttons: Vec<String>,
    pub position: (i32, i32),
    pub delta: (i32, i32),
    pub wheel: f32,
    pub text: String,
    pub cursor_visible: bool,
}

impl FrameReport {
    /// Captures the facade's current view.
    pub fn capture<B: WindowBackend>(index: u64, polled: bool, input: &InputFacade<B>) -> Self {
        let names = |keys: Vec<Key>| {
            keys.into_iter()
                .map(|key| key.name().to_string())
                .collect::<Vec<_>>()
        };

        Self {
            index,
            polled,
            pressed: names(input.pressed_keys()),
            held: names(input.held_keys()),
            released: names(input.released_keys()),
            buttons: input
                .held_buttons()
                .into_iter()
                .map(MouseButton::name)
                .map(str::to_string)
                .collect(),
            position: input.mouse_position(),
            delta: input.mouse_delta(),
            wheel: input.wheel_delta(),
            text: input.frame_text().to_string(),
            cursor_visible: input.is_cursor_visible(),
        }
    }

    /// Nothing changed and nothing is held.
    pub fn is_idle(&self) -> bool {
        self.pressed.is_empty()
            && self.held.is_empty()
            && self.released.is_empty()
            && self.buttons.is_empty()
            && self.delta == (0, 0)
            && self.wheel == 0.0
            && self.text.is_empty()
    }
}

impl fmt::Display for FrameReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "frame {:>4}:", self.index)?;
        if !self.polled {
            write!(f, " (skipped)")?;
        }
        if !self.pressed.is_empty() {
            write!(f, " pressed [{}]", self.pressed.join(", "))?;
        }
        if !self.held.is_empty() {
            write!(f, " held [{}]", self.held.join(", "))?;
        }
        if !self.released.is_empty() {
            write!(f, " released [{}]", self.released.join(", "))?;
        }
        if !self.buttons.is_empty() {
            write!(f, " buttons [{}]", self.buttons.join(", "))?;
        }
        write!(
            f,
            " pos ({}, {}) delta ({}, {})",
            self.position.0, self.position.1, self.delta.0, self.delta.1
        )?;
        if self.wheel != 0.0 {
            write!(f, " wheel {}", self.wheel)?;
        }
        if !self.text.is_empty() {
            write!(f, " text {:?}", self.text)?;
        }
        if !self.cursor_visible {
            write!(f, " cursor hidden")?;
        }
        Ok(())
    }
}
