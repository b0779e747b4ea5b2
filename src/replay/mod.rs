//! Deterministic replay of scripted input through the facade.
//!
//! Each scripted frame is applied to a [`ScriptedBackend`] in the order a
//! real frame loop would see it: facade commands issued by the game, then
//! the new hardware state, then callbacks pumped by the window system, then
//! [`InputFacade::update`]. A [`FrameReport`] is captured after every update.

pub mod report;
pub mod script;

pub use report::FrameReport;
pub use script::{MAX_REPEAT, ReplayScript, ScriptFrame, WindowState};

use crate::backend::BackendStatus;
use crate::backend::scripted::ScriptedBackend;
use crate::config::{Config, InputConfig};
use crate::error::InputError;
use crate::input::InputFacade;
use log::{debug, info, warn};

/// Runs a script and returns one report per update.
///
/// The script's `[input]` section, when present, replaces `config`.
pub fn run(script: &ReplayScript, config: &InputConfig) -> Result<Vec<FrameReport>, InputError> {
    let input_config = match &script.input {
        Some(overrides) => {
            let mut merged = Config {
                input: overrides.clone(),
                ..Config::default()
            };
            merged.validate_and_clamp();
            merged.input
        }
        None => config.clone(),
    };

    let mut input = InputFacade::new(ScriptedBackend::new(), input_config);
    input.initialize()?;

    let mut reports = Vec::new();
    let mut index = 0u64;

    for frame in &script.frames {
        apply_commands(&mut input, frame);
        apply_hardware(&mut input, frame);
        fire_callbacks(&input, frame);

        for _ in 0..frame.repeat {
            let before = input.frame_count();
            input.update();
            let polled = input.frame_count() != before;
            reports.push(FrameReport::capture(index, polled, &input));
            index += 1;
        }
    }

    info!("Replayed {} updates", index);
    input.shutdown();
    Ok(reports)
}

fn apply_commands(input: &mut InputFacade<ScriptedBackend>, frame: &ScriptFrame) {
    if let Some(window) = frame.window {
        let status = match window {
            WindowState::Ready => BackendStatus::Ready,
            WindowState::NotReady => BackendStatus::NotReady,
        };
        input.backend_mut().set_status(status);
    }

    match frame.text_input {
        Some(true) => input.enable_text_input(),
        Some(false) => input.disable_text_input(),
        None => {}
    }

    match frame.cursor_visible {
        Some(true) => input.show_cursor(),
        Some(false) => input.hide_cursor(),
        None => {}
    }

    if let Some(text) = &frame.clipboard {
        input.set_clipboard_text(text);
    }

    if let Some((x, y)) = frame.warp {
        input.warp_cursor(x, y);
    }
}

fn apply_hardware(input: &mut InputFacade<ScriptedBackend>, frame: &ScriptFrame) {
    let backend = input.backend_mut();

    backend.release_all_keys();
    for key in &frame.keys {
        if !backend.press_key(*key) {
            warn!("Key {} has no native equivalent, ignoring", key);
        }
    }

    backend.release_all_buttons();
    for button in &frame.buttons {
        backend.press_button(*button);
    }

    if let Some((x, y)) = frame.cursor {
        backend.move_cursor(x, y);
    }
}

fn fire_callbacks(input: &InputFacade<ScriptedBackend>, frame: &ScriptFrame) {
    let backend = input.backend();
    if !frame.text.is_empty() || !frame.scroll.is_empty() {
        debug!(
            "Firing {} chars and {} scroll events",
            frame.text.chars().count(),
            frame.scroll.len()
        );
    }

    backend.type_text(&frame.text);
    for codepoint in &frame.codepoints {
        backend.type_codepoint(*codepoint);
    }
    for delta in &frame.scroll {
        backend.scroll(*delta);
    }
}
