//! Frame-synchronized input facade.

use super::edge::{EdgeState, EdgeStateTracker};
use super::events::{BUTTON_SLOTS, CursorMode, KEY_SLOTS, Key, MouseButton};
use super::keymap::KeyMapTable;
use super::modifiers::Modifiers;
use super::pointer::PointerTracker;
use super::sink::{InputSink, PendingInput};
use crate::backend::{BackendStatus, WindowBackend};
use crate::config::InputConfig;
use crate::error::InputError;
use log::{debug, info, warn};
use std::cell::RefCell;
use std::rc::Rc;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Lifecycle {
    Uninitialized,
    Running,
    ShutDown,
}

/// Public query surface over keyboard, mouse, text and clipboard state.
///
/// The owning loop calls [`update`](Self::update) once per frame. Every other
/// query reads the state captured by the most recent update and does not
/// touch the backend; clipboard and cursor commands are the exceptions and
/// pass straight through.
///
/// # Update order
/// 1. Text typed since the previous update becomes this frame's text.
/// 2. Key, button and pointer trackers snapshot the previous frame, and the
///    scroll collected since the previous update becomes the wheel delta.
/// 3. Every mapped key and every mouse button is polled.
/// 4. The cursor position is polled.
///
/// When the backend is not ready the whole update is skipped and the previous
/// state is kept as is. Callbacks are dropped at that point and registered
/// again with whichever window shows up next.
pub struct InputFacade<B: WindowBackend> {
    backend: B,
    config: InputConfig,
    lifecycle: Lifecycle,
    keymap: KeyMapTable,
    keys: EdgeStateTracker<KEY_SLOTS>,
    buttons: EdgeStateTracker<BUTTON_SLOTS>,
    pointer: PointerTracker,
    pending: Rc<RefCell<PendingInput>>,
    frame_text: String,
    attached: bool,
    has_attached: bool,
    cursor_visible: bool,
    frames: u64,
}

impl<B: WindowBackend> InputFacade<B> {
    /// Creates an uninitialized facade over a backend handle.
    pub fn new(backend: B, config: InputConfig) -> Self {
        let pending =
            PendingInput::new(config.text_input_on_start, config.effective_wheel_scale());
        Self {
            backend,
            config,
            lifecycle: Lifecycle::Uninitialized,
            keymap: KeyMapTable::default(),
            keys: EdgeStateTracker::new(),
            buttons: EdgeStateTracker::new(),
            pointer: PointerTracker::new(),
            pending: Rc::new(RefCell::new(pending)),
            frame_text: String::new(),
            attached: false,
            has_attached: false,
            cursor_visible: true,
            frames: 0,
        }
    }

    pub fn with_defaults(backend: B) -> Self {
        Self::new(backend, InputConfig::default())
    }

    /// Builds the key table and resets every tracker.
    ///
    /// Calling it again while running, or after [`shutdown`](Self::shutdown),
    /// changes nothing. Fails only when the window system is unreachable.
    pub fn initialize(&mut self) -> Result<(), InputError> {
        match self.lifecycle {
            Lifecycle::Running => {
                debug!("Input already initialized, ignoring");
                return Ok(());
            }
            Lifecycle::ShutDown => {
                warn!("Input initialize after shutdown ignored");
                return Ok(());
            }
            Lifecycle::Uninitialized => {}
        }

        if self.backend.status() == BackendStatus::Unreachable {
            return Err(InputError::BackendUnreachable {
                backend: self.backend.name(),
            });
        }

        self.keymap = KeyMapTable::build(self.backend.key_table());
        self.clear_state();
        self.lifecycle = Lifecycle::Running;

        info!(
            "Input initialized on '{}' backend ({} mapped keys)",
            self.backend.name(),
            self.keymap.len()
        );

        self.try_attach();
        Ok(())
    }

    /// Unregisters the backend callbacks and stops polling.
    ///
    /// Safe to call at any time and any number of times.
    pub fn shutdown(&mut self) {
        self.detach();

        // Fresh shared state: sinks still held by the backend go dead.
        self.pending = Rc::new(RefCell::new(PendingInput::new(
            self.config.text_input_on_start,
            self.config.effective_wheel_scale(),
        )));
        self.frame_text.clear();

        if self.lifecycle == Lifecycle::Running {
            info!("Input shut down after {} frames", self.frames);
            self.lifecycle = Lifecycle::ShutDown;
        }
    }

    pub fn is_initialized(&self) -> bool {
        self.lifecycle == Lifecycle::Running
    }

    /// Whether callbacks are registered with a live window.
    pub fn is_attached(&self) -> bool {
        self.attached
    }

    fn backend_ready(&self) -> bool {
        self.backend.status() == BackendStatus::Ready
    }

    /// Registers callbacks whenever a window is seen without them: the first
    /// one after initialize, or a new one after the previous was destroyed.
    fn try_attach(&mut self) -> bool {
        if self.attached {
            return true;
        }
        if !self.backend_ready() {
            return false;
        }

        self.backend.register_callbacks(InputSink::new(&self.pending));
        let (x, y) = self.backend.cursor_position();
        self.pointer.warp_to(x, y);
        self.attached = true;

        if self.has_attached {
            info!("Input re-attached to new '{}' window", self.backend.name());
            let mode = if self.cursor_visible {
                CursorMode::Visible
            } else {
                CursorMode::Hidden
            };
            self.apply_cursor_mode(mode);
        } else {
            info!("Input attached to '{}' window", self.backend.name());
            self.has_attached = true;
            if self.config.hide_cursor_on_start {
                self.hide_cursor();
            }
        }
        true
    }

    /// Drops the callbacks of a window that is gone or being shut down.
    fn detach(&mut self) {
        if self.attached {
            self.backend.clear_callbacks();
            self.attached = false;
            debug!("Input detached from '{}' window", self.backend.name());
        }
    }

    /// Advances one frame. See the type-level docs for the order of steps.
    pub fn update(&mut self) {
        if self.lifecycle != Lifecycle::Running {
            return;
        }
        if !self.backend_ready() {
            self.detach();
            return;
        }
        if !self.try_attach() {
            return;
        }

        {
            let mut pending = self.pending.borrow_mut();
            self.frame_text = pending.text.drain_and_clear();
            self.keys.begin_frame();
            self.buttons.begin_frame();
            self.pointer.begin_frame(&mut pending.scroll);
        }

        for entry in self.keymap.entries() {
            let down = self.backend.is_key_down(entry.native);
            self.keys.ingest(entry.key.index(), down);
        }

        for button in MouseButton::ALL {
            let down = self.backend.is_button_down(button);
            self.buttons.ingest(button.index(), down);
        }

        let (x, y) = self.backend.cursor_position();
        self.pointer.set_position(x, y);

        self.frames += 1;

        if log::log_enabled!(log::Level::Debug) {
            let pressed = self.pressed_keys();
            let released = self.released_keys();
            if !pressed.is_empty() || !released.is_empty() {
                debug!(
                    "Frame {}: pressed {:?}, released {:?}",
                    self.frames, pressed, released
                );
            }
        }
    }

    /// Number of updates that actually polled the backend.
    pub fn frame_count(&self) -> u64 {
        self.frames
    }

    /// Drops all per-control state and pending callback input, keeping the
    /// callbacks registered and the cursor where it is.
    pub fn reset(&mut self) {
        let position = self.pointer.precise_position();
        self.clear_state();
        self.pointer.warp_to(position.0, position.1);
    }

    fn clear_state(&mut self) {
        self.keys.reset();
        self.buttons.reset();
        self.pointer = PointerTracker::new();
        self.frame_text.clear();

        let mut pending = self.pending.borrow_mut();
        pending.scroll.take();
        pending.text.clear();
    }

    // ==================== KEYBOARD ====================

    pub fn is_key_down(&self, key: Key) -> bool {
        self.keys.is_down(key.index())
    }

    pub fn is_key_up(&self, key: Key) -> bool {
        !self.is_key_down(key)
    }

    /// Went down on this frame.
    pub fn is_key_pressed(&self, key: Key) -> bool {
        self.keys.is_pressed(key.index())
    }

    /// Went up on this frame.
    pub fn is_key_released(&self, key: Key) -> bool {
        self.keys.is_released(key.index())
    }

    pub fn key_state(&self, key: Key) -> EdgeState {
        self.keys.state(key.index())
    }

    /// Whether the backend has a native equivalent for `key`.
    pub fn is_key_mapped(&self, key: Key) -> bool {
        self.keymap.contains(key)
    }

    pub fn modifiers(&self) -> Modifiers {
        Modifiers::from_held(|key| self.is_key_down(key))
    }

    /// Mapped keys currently down, in table order.
    pub fn held_keys(&self) -> Vec<Key> {
        self.mapped_keys_where(|key| self.is_key_down(key))
    }

    pub fn pressed_keys(&self) -> Vec<Key> {
        self.mapped_keys_where(|key| self.is_key_pressed(key))
    }

    pub fn released_keys(&self) -> Vec<Key> {
        self.mapped_keys_where(|key| self.is_key_released(key))
    }

    fn mapped_keys_where(&self, keep: impl Fn(Key) -> bool) -> Vec<Key> {
        self.keymap
            .entries()
            .iter()
            .map(|entry| entry.key)
            .filter(|key| keep(*key))
            .collect()
    }

    pub fn keymap(&self) -> &KeyMapTable {
        &self.keymap
    }

    // ==================== MOUSE ====================

    pub fn is_button_down(&self, button: MouseButton) -> bool {
        self.buttons.is_down(button.index())
    }

    pub fn is_button_up(&self, button: MouseButton) -> bool {
        !self.is_button_down(button)
    }

    pub fn is_button_pressed(&self, button: MouseButton) -> bool {
        self.buttons.is_pressed(button.index())
    }

    pub fn is_button_released(&self, button: MouseButton) -> bool {
        self.buttons.is_released(button.index())
    }

    pub fn button_state(&self, button: MouseButton) -> EdgeState {
        self.buttons.state(button.index())
    }

    pub fn held_buttons(&self) -> Vec<MouseButton> {
        MouseButton::ALL
            .into_iter()
            .filter(|button| self.is_button_down(*button))
            .collect()
    }

    pub fn mouse_position(&self) -> (i32, i32) {
        self.pointer.position()
    }

    /// Cursor motion between the two latest updates, truncated to whole pixels.
    pub fn mouse_delta(&self) -> (i32, i32) {
        self.pointer.delta()
    }

    /// Scroll collected between the two latest updates.
    pub fn wheel_delta(&self) -> f32 {
        self.pointer.wheel_delta()
    }

    /// Teleports the cursor without producing motion on the next update.
    pub fn warp_cursor(&mut self, x: i32, y: i32) {
        if !self.attached || !self.backend_ready() {
            return;
        }
        let (x, y) = (f64::from(x), f64::from(y));
        self.backend.set_cursor_position(x, y);
        self.pointer.warp_to(x, y);
    }

    // ==================== CURSOR ====================

    pub fn show_cursor(&mut self) {
        self.apply_cursor_mode(CursorMode::Visible);
    }

    /// Hides and locks the cursor to the window.
    pub fn hide_cursor(&mut self) {
        self.apply_cursor_mode(CursorMode::Hidden);
    }

    fn apply_cursor_mode(&mut self, mode: CursorMode) {
        if !self.backend_ready() {
            return;
        }
        self.backend.set_cursor_mode(mode);
        self.cursor_visible = mode == CursorMode::Visible;
    }

    /// Last visibility successfully applied to the backend.
    pub fn is_cursor_visible(&self) -> bool {
        self.cursor_visible
    }

    // ==================== CLIPBOARD ====================

    /// Current clipboard text, empty when there is none or no window.
    pub fn clipboard_text(&self) -> String {
        if !self.backend_ready() {
            return String::new();
        }
        self.backend.clipboard_text().unwrap_or_default()
    }

    pub fn set_clipboard_text(&mut self, text: &str) {
        if self.backend_ready() {
            self.backend.set_clipboard_text(text);
        }
    }

    // ==================== TEXT ====================

    pub fn enable_text_input(&mut self) {
        self.pending.borrow_mut().text.set_enabled(true);
    }

    /// Stops collecting text. Text already typed is still delivered.
    pub fn disable_text_input(&mut self) {
        self.pending.borrow_mut().text.set_enabled(false);
    }

    pub fn is_text_input_enabled(&self) -> bool {
        self.pending.borrow().text.is_enabled()
    }

    /// Text typed between the two latest updates.
    pub fn frame_text(&self) -> &str {
        &self.frame_text
    }

    // ==================== BACKEND ====================

    pub fn backend(&self) -> &B {
        &self.backend
    }

    pub fn backend_mut(&mut self) -> &mut B {
        &mut self.backend
    }

    pub fn config(&self) -> &InputConfig {
        &self.config
    }
}
