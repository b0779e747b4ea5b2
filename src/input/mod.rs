//! Frame-synchronized keyboard, mouse and text input.
//!
//! Backends report raw key, button and cursor samples plus asynchronous
//! character and scroll callbacks. [`InputFacade`] turns those into a stable
//! per-frame view with edge detection (pressed / held / released), pointer
//! and wheel deltas and the text typed during the frame.

pub mod edge;
pub mod events;
pub mod facade;
pub mod keymap;
pub mod modifiers;
pub mod pointer;
pub mod sink;
pub mod text;

// Re-export commonly used types at module level
pub use edge::{EdgeState, EdgeStateTracker};
pub use events::{BUTTON_SLOTS, CursorMode, KEY_SLOTS, Key, MouseButton};
pub use facade::InputFacade;
pub use keymap::{GLFW_KEYS, KeyMapEntry, KeyMapTable, NativeKey};
pub use modifiers::Modifiers;
pub use pointer::{PointerTracker, ScrollAccumulator};
pub use sink::{InputSink, PendingInput};
pub use text::TextCapture;
