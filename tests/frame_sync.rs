use frameinput::backend::null::NullBackend;
use frameinput::backend::scripted::ScriptedBackend;
use frameinput::config::InputConfig;
use frameinput::input::{CursorMode, EdgeState, InputFacade, Key, MouseButton};

fn running() -> InputFacade<ScriptedBackend> {
    let mut input = InputFacade::with_defaults(ScriptedBackend::new());
    input.initialize().unwrap();
    input
}

#[test]
fn edge_states_follow_consecutive_samples() {
    let mut input = running();
    let samples = [false, true, true, true, false, false, true, false];
    let expected = [
        EdgeState::Released,
        EdgeState::Pressed,
        EdgeState::Held,
        EdgeState::Held,
        EdgeState::Released,
        EdgeState::Released,
        EdgeState::Pressed,
        EdgeState::Released,
    ];

    for (down, want) in samples.into_iter().zip(expected) {
        if down {
            input.backend_mut().press_key(Key::F5);
        } else {
            input.backend_mut().release_key(Key::F5);
        }
        input.update();
        assert_eq!(input.key_state(Key::F5), want);
    }
}

#[test]
fn every_mapped_key_can_be_tracked() {
    let mut input = running();
    let mapped: Vec<Key> = Key::ALL
        .into_iter()
        .filter(|key| input.is_key_mapped(*key))
        .collect();
    assert!(!mapped.is_empty());
    assert!(!mapped.contains(&Key::MouseMiddle));

    for key in &mapped {
        input.backend_mut().press_key(*key);
    }
    input.update();
    for key in &mapped {
        assert!(input.is_key_pressed(*key), "{key} not pressed");
    }
    assert_eq!(input.held_keys().len(), mapped.len());
}

#[test]
fn queries_are_stable_within_a_frame() {
    let mut input = running();
    input.backend_mut().press_key(Key::Enter);
    input.backend_mut().move_cursor(5.0, 5.0);
    input.update();

    input.backend_mut().release_key(Key::Enter);
    input.backend_mut().move_cursor(80.0, 90.0);

    assert!(input.is_key_pressed(Key::Enter));
    assert_eq!(input.mouse_position(), (5, 5));
}

#[test]
fn motion_wheel_and_text_belong_to_one_frame() {
    let config = InputConfig {
        text_input_on_start: true,
        ..InputConfig::default()
    };
    let mut input = InputFacade::new(ScriptedBackend::new(), config);
    input.initialize().unwrap();
    input.update();

    input.backend_mut().move_cursor(-7.0, 3.0);
    input.backend().scroll(-1.0);
    input.backend().type_text("ab");
    input.update();
    assert_eq!(input.mouse_delta(), (-7, 3));
    assert_eq!(input.wheel_delta(), -1.0);
    assert_eq!(input.frame_text(), "ab");

    input.update();
    assert_eq!(input.mouse_delta(), (0, 0));
    assert_eq!(input.wheel_delta(), 0.0);
    assert_eq!(input.frame_text(), "");
}

#[test]
fn buttons_and_keys_are_independent() {
    let mut input = running();
    input.backend_mut().press_button(MouseButton::Middle);
    input.backend_mut().press_button(MouseButton::Button5);
    input.update();

    assert!(input.is_button_pressed(MouseButton::Middle));
    assert!(input.is_button_pressed(MouseButton::Button5));
    assert!(!input.is_key_down(Key::MouseMiddle));
    assert!(input.held_keys().is_empty());
}

#[test]
fn null_backend_answers_with_defaults() {
    let mut input = InputFacade::with_defaults(NullBackend);
    input.initialize().unwrap();
    input.enable_text_input();
    input.hide_cursor();
    input.set_clipboard_text("ignored");
    input.warp_cursor(3, 3);
    input.update();

    assert!(input.is_initialized());
    assert!(!input.is_attached());
    assert_eq!(input.frame_count(), 0);
    assert!(input.is_key_up(Key::A));
    assert_eq!(input.mouse_position(), (0, 0));
    assert_eq!(input.wheel_delta(), 0.0);
    assert_eq!(input.frame_text(), "");
    assert_eq!(input.clipboard_text(), "");
    assert!(input.is_cursor_visible());
    assert!(input.keymap().is_empty());

    input.shutdown();
    assert!(!input.is_initialized());
}

#[test]
fn cursor_mode_reaches_backend() {
    let mut input = running();
    input.hide_cursor();
    assert_eq!(input.backend().cursor_mode(), CursorMode::Hidden);
    input.show_cursor();
    assert_eq!(input.backend().cursor_mode(), CursorMode::Visible);
}

#[test]
fn dropping_the_facade_leaves_backend_sink_inert() {
    let mut input = running();
    input.enable_text_input();
    let sink = input.backend().callback_sink().unwrap();
    drop(input);

    assert!(!sink.is_attached());
    sink.on_character('q' as u32);
    sink.on_scroll(1.0);
}
