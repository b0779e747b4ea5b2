//! Double-buffered press/hold/release tracking.

/// Per-frame classification of a control.
///
/// `Released` covers both "never pressed" and "let go this frame"; the
/// tracker keeps the previous sample so callers can still ask for the
/// latter through [`EdgeStateTracker::is_released`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum EdgeState {
    #[default]
    Released,
    /// Went down on this exact frame
    Pressed,
    /// Down this frame and the one before
    Held,
}

impl EdgeState {
    /// Derives the state from two consecutive samples.
    pub fn from_samples(previous: bool, current: bool) -> Self {
        match (previous, current) {
            (false, true) => EdgeState::Pressed,
            (true, true) => EdgeState::Held,
            _ => EdgeState::Released,
        }
    }

    pub fn is_down(self) -> bool {
        matches!(self, EdgeState::Pressed | EdgeState::Held)
    }
}

/// Edge tracker for a closed set of `N` controls addressed by index.
///
/// Call [`begin_frame`](Self::begin_frame) exactly once per frame, then
/// [`ingest`](Self::ingest) every control's fresh sample. Indices outside
/// `0..N` are ignored on write and read as up.
#[derive(Debug, Clone)]
pub struct EdgeStateTracker<const N: usize> {
    previous: [bool; N],
    current: [bool; N],
    states: [EdgeState; N],
}

impl<const N: usize> Default for EdgeStateTracker<N> {
    fn default() -> Self {
        Self {
            previous: [false; N],
            current: [false; N],
            states: [EdgeState::Released; N],
        }
    }
}

impl<const N: usize> EdgeStateTracker<N> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Snapshots this frame's samples as the previous frame.
    pub fn begin_frame(&mut self) {
        self.previous = self.current;
    }

    /// Records the sample for `index` and derives its edge state.
    pub fn ingest(&mut self, index: usize, down: bool) {
        let Some(current) = self.current.get_mut(index) else {
            return;
        };
        *current = down;
        self.states[index] = EdgeState::from_samples(self.previous[index], down);
    }

    pub fn state(&self, index: usize) -> EdgeState {
        self.states.get(index).copied().unwrap_or_default()
    }

    pub fn is_down(&self, index: usize) -> bool {
        self.current.get(index).copied().unwrap_or(false)
    }

    pub fn is_pressed(&self, index: usize) -> bool {
        self.state(index) == EdgeState::Pressed
    }

    /// True only on the frame the control went from down to up.
    pub fn is_released(&self, index: usize) -> bool {
        self.state(index) == EdgeState::Released
            && self.previous.get(index).copied().unwrap_or(false)
    }

    /// Indices currently down, ascending.
    pub fn held_indices(&self) -> impl Iterator<Item = usize> + '_ {
        self.current
            .iter()
            .enumerate()
            .filter(|(_, down)| **down)
            .map(|(index, _)| index)
    }

    /// Back to the idle state for every control.
    pub fn reset(&mut self) {
        *self = Self::default();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn frame<const N: usize>(tracker: &mut EdgeStateTracker<N>, index: usize, down: bool) {
        tracker.begin_frame();
        tracker.ingest(index, down);
    }

    #[test]
    fn derive_table() {
        assert_eq!(EdgeState::from_samples(false, false), EdgeState::Released);
        assert_eq!(EdgeState::from_samples(false, true), EdgeState::Pressed);
        assert_eq!(EdgeState::from_samples(true, true), EdgeState::Held);
        assert_eq!(EdgeState::from_samples(true, false), EdgeState::Released);
    }

    #[test]
    fn press_hold_release_sequence() {
        let mut tracker = EdgeStateTracker::<4>::new();

        frame(&mut tracker, 2, true);
        assert!(tracker.is_pressed(2));
        assert!(tracker.is_down(2));
        assert!(!tracker.is_released(2));

        frame(&mut tracker, 2, true);
        assert_eq!(tracker.state(2), EdgeState::Held);
        assert!(!tracker.is_pressed(2));
        assert!(tracker.is_down(2));

        frame(&mut tracker, 2, false);
        assert!(!tracker.is_down(2));
        assert!(tracker.is_released(2));

        frame(&mut tracker, 2, false);
        assert!(!tracker.is_released(2));
        assert_eq!(tracker.state(2), EdgeState::Released);
    }

    #[test]
    fn idle_control_never_presses() {
        let mut tracker = EdgeStateTracker::<2>::new();
        for _ in 0..2 {
            frame(&mut tracker, 0, false);
            assert!(!tracker.is_pressed(0));
            assert!(!tracker.is_down(0));
            assert!(!tracker.is_released(0));
        }
    }

    #[test]
    fn missing_begin_frame_looks_like_a_fresh_press() {
        // Ingesting twice without a snapshot keeps previous at false.
        let mut tracker = EdgeStateTracker::<1>::new();
        tracker.begin_frame();
        tracker.ingest(0, true);
        tracker.ingest(0, true);
        assert!(tracker.is_pressed(0));
    }

    #[test]
    fn out_of_range_is_clamped() {
        let mut tracker = EdgeStateTracker::<3>::new();
        tracker.begin_frame();
        tracker.ingest(7, true);
        assert!(!tracker.is_down(7));
        assert!(!tracker.is_pressed(7));
        assert!(!tracker.is_released(7));
        assert_eq!(tracker.state(7), EdgeState::Released);
        assert_eq!(tracker.held_indices().count(), 0);
    }

    #[test]
    fn held_indices_and_reset() {
        let mut tracker = EdgeStateTracker::<5>::new();
        tracker.begin_frame();
        tracker.ingest(1, true);
        tracker.ingest(4, true);
        assert_eq!(tracker.held_indices().collect::<Vec<_>>(), vec![1, 4]);

        tracker.reset();
        assert_eq!(tracker.held_indices().count(), 0);
        assert_eq!(tracker.state(1), EdgeState::Released);
    }
}
