//! Slide index state machine for the project-detail image gallery.
//!
//! Kept free of DOM concerns so the transition rules are testable natively:
//! the components layer derives the track transform and the active indicator
//! purely from [`SliderState::current`].

/// Minimum horizontal displacement (px) for a touch to count as a swipe.
pub const SWIPE_THRESHOLD_PX: f64 = 50.0;

/// Navigation command resolved from a swipe gesture.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SwipeDirection {
    /// Swipe left: advance to the next slide.
    Next,
    /// Swipe right: go back to the previous slide.
    Prev,
}

/// Current position within an ordered sequence of slides.
///
/// `current` is always in `[0, total)` once slides exist; every transition
/// wraps instead of saturating.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SliderState {
    current: usize,
    total: usize,
}

impl SliderState {
    /// Create a slider over `total` slides, starting at index 0.
    pub fn new(total: usize) -> Self {
        Self { current: 0, total }
    }

    pub fn current(&self) -> usize {
        self.current
    }

    pub fn total(&self) -> usize {
        self.total
    }

    /// Advance one slide, wrapping at the end.
    pub fn next(&mut self) {
        if self.total == 0 {
            return;
        }
        self.current = (self.current + 1) % self.total;
    }

    /// Go back one slide, wrapping at the start.
    pub fn prev(&mut self) {
        if self.total == 0 {
            return;
        }
        self.current = (self.current + self.total - 1) % self.total;
    }

    /// Jump to a specific slide.
    ///
    /// Out-of-range indices are clamped to the last slide rather than
    /// stored unchecked.
    pub fn go_to(&mut self, index: usize) {
        if self.total == 0 {
            return;
        }
        self.current = index.min(self.total - 1);
    }

    /// Apply a resolved swipe gesture.
    pub fn swipe(&mut self, direction: SwipeDirection) {
        match direction {
            SwipeDirection::Next => self.next(),
            SwipeDirection::Prev => self.prev(),
        }
    }

    /// Horizontal track offset for the current slide, in percent.
    pub fn offset_percent(&self) -> f64 {
        (self.current * 100) as f64
    }
}

/// Resolve a horizontal touch displacement into a navigation command.
///
/// A displacement at or below [`SWIPE_THRESHOLD_PX`] is treated as a tap
/// and produces no transition.
pub fn resolve_swipe(start_x: f64, end_x: f64) -> Option<SwipeDirection> {
    let diff = start_x - end_x;
    if diff.abs() <= SWIPE_THRESHOLD_PX {
        return None;
    }
    if diff > 0.0 {
        Some(SwipeDirection::Next)
    } else {
        Some(SwipeDirection::Prev)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn next_wraps_at_the_end() {
        let mut slider = SliderState::new(4);
        let mut seen = Vec::new();
        for _ in 0..4 {
            slider.next();
            seen.push(slider.current());
        }
        assert_eq!(seen, vec![1, 2, 3, 0]);
    }

    #[test]
    fn prev_wraps_at_the_start() {
        let mut slider = SliderState::new(4);
        slider.prev();
        assert_eq!(slider.current(), 3);
    }

    #[test]
    fn go_to_clamps_out_of_range_indices() {
        let mut slider = SliderState::new(3);
        slider.go_to(1);
        assert_eq!(slider.current(), 1);
        slider.go_to(99);
        assert_eq!(slider.current(), 2);
    }

    #[test]
    fn empty_gallery_never_transitions() {
        let mut slider = SliderState::new(0);
        slider.next();
        slider.prev();
        slider.go_to(5);
        assert_eq!(slider.current(), 0);
    }

    #[test]
    fn offset_is_a_pure_function_of_the_index() {
        let mut slider = SliderState::new(5);
        assert_eq!(slider.offset_percent(), 0.0);
        slider.go_to(3);
        assert_eq!(slider.offset_percent(), 300.0);
    }

    #[test]
    fn swipe_left_past_threshold_advances() {
        assert_eq!(resolve_swipe(200.0, 100.0), Some(SwipeDirection::Next));
    }

    #[test]
    fn swipe_right_past_threshold_goes_back() {
        assert_eq!(resolve_swipe(100.0, 200.0), Some(SwipeDirection::Prev));
    }

    #[test]
    fn displacement_below_threshold_is_a_tap() {
        assert_eq!(resolve_swipe(100.0, 120.0), None);
        assert_eq!(resolve_swipe(100.0, 100.0), None);
        // Exactly at the threshold still counts as a tap.
        assert_eq!(resolve_swipe(150.0, 100.0), None);
    }

    #[test]
    fn swipe_commands_drive_the_state_machine() {
        let mut slider = SliderState::new(2);
        slider.swipe(SwipeDirection::Next);
        assert_eq!(slider.current(), 1);
        slider.swipe(SwipeDirection::Prev);
        assert_eq!(slider.current(), 0);
    }
}
