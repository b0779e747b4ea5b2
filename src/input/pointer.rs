//! Cursor position, per-frame motion and wheel aggregation.

/// Scroll notifications collected between two updates.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct ScrollAccumulator {
    pending: f32,
}

impl ScrollAccumulator {
    pub fn add(&mut self, delta: f32) {
        if delta.is_finite() {
            self.pending += delta;
        }
    }

    pub fn pending(&self) -> f32 {
        self.pending
    }

    /// Returns the accumulated delta and starts over from zero.
    pub fn take(&mut self) -> f32 {
        std::mem::take(&mut self.pending)
    }
}

/// Current and previous cursor samples plus the wheel delta of the frame.
///
/// Positions are kept in backend precision and truncated toward zero only at
/// the query boundary, so sub-pixel motion between two frames is not carried
/// over into the next delta.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct PointerTracker {
    current: (f64, f64),
    previous: (f64, f64),
    wheel_delta: f32,
}

impl PointerTracker {
    pub fn new() -> Self {
        Self::default()
    }

    /// Starts a frame: the current sample becomes the previous one and the
    /// scroll collected since the last frame becomes this frame's wheel delta.
    pub fn begin_frame(&mut self, scroll: &mut ScrollAccumulator) {
        self.previous = self.current;
        self.wheel_delta = scroll.take();
    }

    /// Stores a freshly polled backend position. Leaves `previous` alone.
    pub fn set_position(&mut self, x: f64, y: f64) {
        self.current = (x, y);
    }

    /// Moves both samples to a warped position so the teleport itself never
    /// shows up as motion.
    pub fn warp_to(&mut self, x: f64, y: f64) {
        self.current = (x, y);
        self.previous = (x, y);
    }

    pub fn position(&self) -> (i32, i32) {
        (self.current.0 as i32, self.current.1 as i32)
    }

    pub fn precise_position(&self) -> (f64, f64) {
        self.current
    }

    pub fn delta(&self) -> (i32, i32) {
        (
            (self.current.0 - self.previous.0) as i32,
            (self.current.1 - self.previous.1) as i32,
        )
    }

    pub fn wheel_delta(&self) -> f32 {
        self.wheel_delta
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn same_position_twice_gives_zero_delta() {
        let mut pointer = PointerTracker::new();
        let mut scroll = ScrollAccumulator::default();

        pointer.begin_frame(&mut scroll);
        pointer.set_position(40.0, 25.0);
        pointer.begin_frame(&mut scroll);
        pointer.set_position(40.0, 25.0);

        assert_eq!(pointer.delta(), (0, 0));
        assert_eq!(pointer.position(), (40, 25));
    }

    #[test]
    fn delta_spans_one_frame() {
        let mut pointer = PointerTracker::new();
        let mut scroll = ScrollAccumulator::default();

        pointer.begin_frame(&mut scroll);
        pointer.set_position(10.0, 10.0);
        pointer.begin_frame(&mut scroll);
        pointer.set_position(15.0, 7.0);
        assert_eq!(pointer.delta(), (5, -3));

        pointer.begin_frame(&mut scroll);
        pointer.set_position(15.0, 7.0);
        assert_eq!(pointer.delta(), (0, 0));
    }

    #[test]
    fn sub_pixel_motion_truncates() {
        let mut pointer = PointerTracker::new();
        let mut scroll = ScrollAccumulator::default();

        pointer.set_position(1.0, 1.0);
        pointer.begin_frame(&mut scroll);
        pointer.set_position(1.9, 0.2);
        assert_eq!(pointer.delta(), (0, 0));
        assert_eq!(pointer.precise_position(), (1.9, 0.2));
    }

    #[test]
    fn warp_does_not_report_a_jump() {
        let mut pointer = PointerTracker::new();
        let mut scroll = ScrollAccumulator::default();

        pointer.set_position(3.0, 4.0);
        pointer.warp_to(100.0, 100.0);
        assert_eq!(pointer.delta(), (0, 0));

        pointer.begin_frame(&mut scroll);
        pointer.set_position(100.0, 100.0);
        assert_eq!(pointer.delta(), (0, 0));
        assert_eq!(pointer.position(), (100, 100));
    }

    #[test]
    fn wheel_delta_lags_one_frame() {
        let mut pointer = PointerTracker::new();
        let mut scroll = ScrollAccumulator::default();

        scroll.add(1.0);
        scroll.add(0.5);
        assert_eq!(pointer.wheel_delta(), 0.0);

        pointer.begin_frame(&mut scroll);
        assert_eq!(pointer.wheel_delta(), 1.5);
        assert_eq!(scroll.pending(), 0.0);

        pointer.begin_frame(&mut scroll);
        assert_eq!(pointer.wheel_delta(), 0.0);
    }

    #[test]
    fn non_finite_scroll_is_ignored() {
        let mut scroll = ScrollAccumulator::default();
        scroll.add(f32::NAN);
        scroll.add(f32::INFINITY);
        scroll.add(-2.0);
        assert_eq!(scroll.take(), -2.0);
        assert_eq!(scroll.take(), 0.0);
    }
}
