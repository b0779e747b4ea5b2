//! Configuration type definitions.

use super::enums::OutputFormat;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Input tracker settings.
///
/// Applied when an [`InputFacade`](crate::input::InputFacade) is created.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct InputConfig {
    /// Start with text capture enabled (otherwise call `enable_text_input`)
    #[serde(default)]
    pub text_input_on_start: bool,

    /// Multiplier applied to every scroll notification (valid range: 0.1 - 10.0)
    #[serde(default = "default_wheel_scale")]
    pub wheel_scale: f32,

    /// Flip the sign of scroll notifications
    #[serde(default)]
    pub invert_wheel: bool,

    /// Hide and lock the cursor as soon as the window is available
    #[serde(default)]
    pub hide_cursor_on_start: bool,
}

impl Default for InputConfig {
    fn default() -> Self {
        Self {
            text_input_on_start: false,
            wheel_scale: default_wheel_scale(),
            invert_wheel: false,
            hide_cursor_on_start: false,
        }
    }
}

impl InputConfig {
    /// Scale with the inversion folded in.
    pub fn effective_wheel_scale(&self) -> f32 {
        if self.invert_wheel {
            -self.wheel_scale
        } else {
            self.wheel_scale
        }
    }
}

/// Replay tool settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct ReplayConfig {
    /// Report format when `--json` is not given (text, json)
    #[serde(default)]
    pub output: OutputFormat,

    /// Print frames where nothing changed
    #[serde(default = "default_show_idle_frames")]
    pub show_idle_frames: bool,
}

impl Default for ReplayConfig {
    fn default() -> Self {
        Self {
            output: OutputFormat::default(),
            show_idle_frames: default_show_idle_frames(),
        }
    }
}

fn default_wheel_scale() -> f32 {
    1.0
}

fn default_show_idle_frames() -> bool {
    true
}
