//! Callback handle handed to the windowing backend.
//!
//! Backends deliver character and scroll notifications whenever they pump
//! their event queue, which happens between two facade updates on the same
//! thread. Those notifications land in [`PendingInput`], shared through an
//! `Rc<RefCell<_>>` that the facade owns. The backend only ever holds a weak
//! [`InputSink`], so a notification that arrives after shutdown (or after
//! the facade is dropped) is discarded instead of reaching stale state.
//!
//! `Rc` keeps the whole arrangement `!Send`; a multi-threaded backend would
//! need a queue or lock here instead.

use super::pointer::ScrollAccumulator;
use super::text::TextCapture;
use log::warn;
use std::cell::RefCell;
use std::rc::{Rc, Weak};

/// Input produced by backend callbacks and not yet consumed by an update.
#[derive(Debug, Clone)]
pub struct PendingInput {
    pub scroll: ScrollAccumulator,
    pub text: TextCapture,
    /// Multiplier applied to every scroll notification (negative inverts)
    pub wheel_scale: f32,
}

impl PendingInput {
    pub fn new(text_enabled: bool, wheel_scale: f32) -> Self {
        Self {
            scroll: ScrollAccumulator::default(),
            text: TextCapture::new(text_enabled),
            wheel_scale,
        }
    }

    pub fn on_scroll(&mut self, delta_y: f64) {
        self.scroll.add(delta_y as f32 * self.wheel_scale);
    }

    pub fn on_character(&mut self, codepoint: u32) {
        self.text.on_codepoint(codepoint);
    }
}

impl Default for PendingInput {
    fn default() -> Self {
        Self::new(false, 1.0)
    }
}

/// Weak, cloneable handle used by backends to report callbacks.
#[derive(Debug, Clone, Default)]
pub struct InputSink {
    target: Weak<RefCell<PendingInput>>,
}

impl InputSink {
    pub(crate) fn new(target: &Rc<RefCell<PendingInput>>) -> Self {
        Self {
            target: Rc::downgrade(target),
        }
    }

    /// A sink wired to nothing; every notification is dropped.
    pub fn detached() -> Self {
        Self::default()
    }

    /// Whether the owning tracker is still alive.
    pub fn is_attached(&self) -> bool {
        self.target.strong_count() > 0
    }

    /// Character-input notification (one Unicode codepoint).
    pub fn on_character(&self, codepoint: u32) {
        self.with_pending(|pending| pending.on_character(codepoint));
    }

    /// Vertical scroll notification, in backend units.
    pub fn on_scroll(&self, delta_y: f64) {
        self.with_pending(|pending| pending.on_scroll(delta_y));
    }

    fn with_pending(&self, apply: impl FnOnce(&mut PendingInput)) {
        let Some(target) = self.target.upgrade() else {
            return;
        };
        // A callback re-entering while the facade holds the borrow would be a
        // backend bug; drop the event rather than take the frame loop down.
        match target.try_borrow_mut() {
            Ok(mut pending) => apply(&mut pending),
            Err(_) => warn!("Input callback arrived while tracker was busy, dropping it"),
        };
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sink_feeds_shared_pending_state() {
        let shared = Rc::new(RefCell::new(PendingInput::new(true, 1.0)));
        let sink = InputSink::new(&shared);

        sink.on_scroll(1.0);
        sink.on_scroll(0.5);
        sink.on_character('a' as u32);

        let pending = shared.borrow();
        assert_eq!(pending.scroll.pending(), 1.5);
        assert_eq!(pending.text.pending(), "a");
    }

    #[test]
    fn wheel_scale_applies_per_notification() {
        let shared = Rc::new(RefCell::new(PendingInput::new(false, -2.0)));
        let sink = InputSink::new(&shared);

        sink.on_scroll(1.0);
        sink.on_scroll(0.25);
        assert_eq!(shared.borrow().scroll.pending(), -2.5);
    }

    #[test]
    fn dropped_target_makes_sink_inert() {
        let shared = Rc::new(RefCell::new(PendingInput::default()));
        let sink = InputSink::new(&shared);
        assert!(sink.is_attached());

        drop(shared);
        assert!(!sink.is_attached());
        sink.on_scroll(3.0);
        sink.on_character('z' as u32);
    }

    #[test]
    fn busy_target_drops_event() {
        let shared = Rc::new(RefCell::new(PendingInput::new(true, 1.0)));
        let sink = InputSink::new(&shared);

        {
            let _guard = shared.borrow_mut();
            sink.on_character('q' as u32);
        }
        assert!(shared.borrow().text.pending().is_empty());
    }

    #[test]
    fn detached_sink_is_inert() {
        let sink = InputSink::detached();
        assert!(!sink.is_attached());
        sink.on_scroll(1.0);
    }
}
