//! Replay script format.
//!
//! A script is a TOML file with one `[[frame]]` table per update:
//!
//! ```toml
//! [input]
//! text_input_on_start = true
//!
//! [[frame]]
//! keys = ["Ctrl", "S"]
//! cursor = [120.0, 80.0]
//!
//! [[frame]]
//! repeat = 3
//! keys = ["Ctrl"]
//! scroll = [1.0, 0.5]
//! text = "hi"
//! ```
//!
//! `keys` and `buttons` list everything held during the frame; anything not
//! listed is up. The cursor stays where the last frame put it. Scroll and
//! text events fire once, before the first repetition of their frame.

use crate::config::InputConfig;
use crate::error::InputError;
use crate::input::{Key, MouseButton};
use log::warn;
use serde::Deserialize;
use std::fs;
use std::path::Path;

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct RawScript {
    #[serde(default)]
    input: Option<InputConfig>,
    #[serde(default, rename = "frame")]
    frames: Vec<RawFrame>,
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct RawFrame {
    #[serde(default = "default_repeat")]
    repeat: u32,
    #[serde(default)]
    window: Option<WindowState>,
    #[serde(default)]
    keys: Vec<String>,
    #[serde(default)]
    buttons: Vec<String>,
    #[serde(default)]
    cursor: Option<[f64; 2]>,
    #[serde(default)]
    scroll: Vec<f64>,
    #[serde(default)]
    text: Option<String>,
    #[serde(default)]
    codepoints: Vec<u32>,
    #[serde(default)]
    warp: Option<[i32; 2]>,
    #[serde(default)]
    text_input: Option<bool>,
    #[serde(default)]
    cursor_visible: Option<bool>,
    #[serde(default)]
    clipboard: Option<String>,
}

/// Upper bound for `repeat` on a single frame.
pub const MAX_REPEAT: u32 = 100_000;

fn default_repeat() -> u32 {
    1
}

/// Whether the scripted window is usable during a frame.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum WindowState {
    Ready,
    NotReady,
}

/// One scripted frame with key and button names resolved.
#[derive(Debug, Clone, PartialEq)]
pub struct ScriptFrame {
    /// Number of consecutive updates this frame describes (1 - `MAX_REPEAT`)
    pub repeat: u32,
    /// Window availability from this frame on; `None` keeps the previous one
    pub window: Option<WindowState>,
    pub keys: Vec<Key>,
    pub buttons: Vec<MouseButton>,
    pub cursor: Option<(f64, f64)>,
    pub scroll: Vec<f64>,
    /// Characters typed before the update
    pub text: String,
    /// Raw character callbacks, including values that are not valid `char`s
    pub codepoints: Vec<u32>,
    pub warp: Option<(i32, i32)>,
    pub text_input: Option<bool>,
    pub cursor_visible: Option<bool>,
    pub clipboard: Option<String>,
}

/// A parsed replay script.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct ReplayScript {
    /// Tracker settings overriding the user configuration
    pub input: Option<InputConfig>,
    pub frames: Vec<ScriptFrame>,
}

impl ReplayScript {
    /// Reads and parses a script file.
    pub fn load(path: &Path) -> Result<Self, InputError> {
        let source = fs::read_to_string(path)?;
        Self::parse(&source, path)
    }

    /// Parses script text; `origin` is only used in error messages.
    pub fn parse(source: &str, origin: &Path) -> Result<Self, InputError> {
        let raw: RawScript = toml::from_str(source).map_err(|source| InputError::Script {
            path: origin.to_path_buf(),
            source,
        })?;

        let frames = raw
            .frames
            .into_iter()
            .map(ScriptFrame::resolve)
            .collect::<Result<Vec<_>, _>>()?;

        Ok(Self {
            input: raw.input,
            frames,
        })
    }

    /// Total number of updates the script performs.
    pub fn update_count(&self) -> u64 {
        self.frames.iter().map(|frame| u64::from(frame.repeat)).sum()
    }
}

impl ScriptFrame {
    fn resolve(raw: RawFrame) -> Result<Self, InputError> {
        let keys = raw
            .keys
            .iter()
            .map(|name| name.parse::<Key>())
            .collect::<Result<Vec<_>, _>>()?;
        let buttons = raw
            .buttons
            .iter()
            .map(|name| name.parse::<MouseButton>())
            .collect::<Result<Vec<_>, _>>()?;

        if raw.repeat > MAX_REPEAT {
            warn!(
                "Invalid repeat {}, clamping to 1-{} range",
                raw.repeat, MAX_REPEAT
            );
        }

        Ok(Self {
            repeat: raw.repeat.clamp(1, MAX_REPEAT),
            window: raw.window,
            keys,
            buttons,
            cursor: raw.cursor.map(|[x, y]| (x, y)),
            scroll: raw.scroll,
            text: raw.text.unwrap_or_default(),
            codepoints: raw.codepoints,
            warp: raw.warp.map(|[x, y]| (x, y)),
            text_input: raw.text_input,
            cursor_visible: raw.cursor_visible,
            clipboard: raw.clipboard,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    fn parse(source: &str) -> Result<ReplayScript, InputError> {
        ReplayScript::parse(source, &PathBuf::from("test.toml"))
    }

    #[test]
    fn parses_frames_and_resolves_names() {
        let script = parse(
            r#"
            [[frame]]
            keys = ["ctrl", "s"]
            buttons = ["left"]
            cursor = [1.5, 2.0]

            [[frame]]
            repeat = 4
            scroll = [1.0, -0.5]
            text = "hé"
            warp = [10, 20]
            "#,
        )
        .unwrap();

        assert_eq!(script.frames.len(), 2);
        assert_eq!(script.frames[0].keys, vec![Key::Control, Key::S]);
        assert_eq!(script.frames[0].buttons, vec![MouseButton::Left]);
        assert_eq!(script.frames[0].cursor, Some((1.5, 2.0)));
        assert_eq!(script.frames[0].repeat, 1);
        assert_eq!(script.frames[1].repeat, 4);
        assert_eq!(script.frames[1].text, "hé");
        assert_eq!(script.frames[1].warp, Some((10, 20)));
        assert_eq!(script.update_count(), 5);
    }

    #[test]
    fn input_section_overrides_config() {
        let script = parse("[input]\nwheel_scale = 3.0\n").unwrap();
        assert!(script.frames.is_empty());
        assert_eq!(script.input.map(|input| input.wheel_scale), Some(3.0));
    }

    #[test]
    fn zero_repeat_counts_as_one() {
        let script = parse("[[frame]]\nrepeat = 0\n").unwrap();
        assert_eq!(script.frames[0].repeat, 1);
    }

    #[test]
    fn huge_repeat_is_clamped() {
        let script = parse("[[frame]]\nrepeat = 4294967295\n").unwrap();
        assert_eq!(script.frames[0].repeat, MAX_REPEAT);
        assert_eq!(script.update_count(), u64::from(MAX_REPEAT));
    }

    #[test]
    fn window_state_is_kebab_case() {
        let script = parse("[[frame]]\nwindow = \"not-ready\"\n").unwrap();
        assert_eq!(script.frames[0].window, Some(WindowState::NotReady));
    }

    #[test]
    fn unknown_key_is_reported() {
        let err = parse("[[frame]]\nkeys = [\"Hyper\"]\n").unwrap_err();
        assert!(matches!(err, InputError::UnknownKey(name) if name == "Hyper"));
    }

    #[test]
    fn unknown_button_is_reported() {
        let err = parse("[[frame]]\nbuttons = [\"Button9\"]\n").unwrap_err();
        assert!(matches!(err, InputError::UnknownButton(_)));
    }

    #[test]
    fn bad_toml_names_the_file() {
        let err = parse("[[frame]\n").unwrap_err();
        assert!(matches!(err, InputError::Script { .. }));
        assert!(err.to_string().contains("test.toml"));
    }

    #[test]
    fn unknown_fields_are_rejected() {
        let err = parse("[[frame]]\nkeyz = [\"A\"]\n").unwrap_err();
        assert!(matches!(err, InputError::Script { .. }));
    }
}
