//! Touch Gestures
//!
//! Turns touch-start / touch-end pairs into navigation commands:
//! horizontal swipes move focus, a double tap activates.

use crate::keyboard_nav::NavCommand;

/// Touch position in host client coordinates
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct TouchPoint {
    pub x: f64,
    pub y: f64,
}

impl TouchPoint {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

/// Recognized gesture, before it becomes a command
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Gesture {
    SwipeLeft,
    SwipeRight,
    Tap,
    DoubleTap,
}

impl Gesture {
    pub fn command(&self) -> Option<NavCommand> {
        match self {
            Self::SwipeLeft => Some(NavCommand::Next),
            Self::SwipeRight => Some(NavCommand::Previous),
            Self::DoubleTap => Some(NavCommand::Activate),
            Self::Tap => None,
        }
    }
}

/// Gesture state: where the current touch began and when the last tap ended
#[derive(Debug, Clone)]
pub struct GestureTranslator {
    swipe_threshold: f64,
    double_tap_window_ms: u64,
    /// Consumed by the matching touch-end
    touch_start: Option<TouchPoint>,
    last_tap_ms: Option<u64>,
}

impl GestureTranslator {
    pub fn new(swipe_threshold: f64, double_tap_window_ms: u64) -> Self {
        Self {
            swipe_threshold,
            double_tap_window_ms,
            touch_start: None,
            last_tap_ms: None,
        }
    }

    pub fn touch_start(&mut self, point: TouchPoint) {
        self.touch_start = Some(point);
    }

    /// Classify a completed touch; `timestamp_ms` must not decrease between calls.
    /// A touch-end without its own touch-start has no travel and counts as a tap.
    pub fn touch_end(&mut self, point: TouchPoint, timestamp_ms: u64) -> Gesture {
        let start = self.touch_start.take().unwrap_or(point);
        let dx = point.x - start.x;
        let dy = point.y - start.y;

        if dx.abs() > dy.abs() && dx.abs() > self.swipe_threshold {
            return if dx < 0.0 { Gesture::SwipeLeft } else { Gesture::SwipeRight };
        }

        let is_double = self.last_tap_ms
            .map(|last| timestamp_ms.saturating_sub(last))
            .is_some_and(|gap| gap > 0 && gap < self.double_tap_window_ms);

        if is_double {
            self.last_tap_ms = None;
            Gesture::DoubleTap
        } else {
            self.last_tap_ms = Some(timestamp_ms);
            Gesture::Tap
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn swipe(translator: &mut GestureTranslator, dx: f64, dy: f64, at: u64) -> Gesture {
        translator.touch_start(TouchPoint::new(100.0, 100.0));
        translator.touch_end(TouchPoint::new(100.0 + dx, 100.0 + dy), at)
    }

    #[test]
    fn test_swipe_directions() {
        let mut t = GestureTranslator::new(30.0, 300);
        assert_eq!(swipe(&mut t, -40.0, 0.0, 1000).command(), Some(NavCommand::Next));
        assert_eq!(swipe(&mut t, 40.0, 0.0, 2000).command(), Some(NavCommand::Previous));
        assert_eq!(swipe(&mut t, 10.0, 0.0, 3000).command(), None);
    }

    #[test]
    fn test_vertical_motion_is_not_a_swipe() {
        let mut t = GestureTranslator::new(30.0, 300);
        assert_eq!(swipe(&mut t, -40.0, 60.0, 1000), Gesture::Tap);
        assert_eq!(swipe(&mut t, 30.0, 0.0, 5000), Gesture::Tap);
    }

    #[test]
    fn test_double_tap_window() {
        let mut t = GestureTranslator::new(30.0, 300);
        assert_eq!(swipe(&mut t, 0.0, 0.0, 1000), Gesture::Tap);
        assert_eq!(swipe(&mut t, 0.0, 0.0, 1150), Gesture::DoubleTap);
        // Consumed: a third tap starts over
        assert_eq!(swipe(&mut t, 0.0, 0.0, 1200), Gesture::Tap);

        let mut t = GestureTranslator::new(30.0, 300);
        assert_eq!(swipe(&mut t, 0.0, 0.0, 1000), Gesture::Tap);
        assert_eq!(swipe(&mut t, 0.0, 0.0, 1500), Gesture::Tap);
        assert_eq!(swipe(&mut t, 0.0, 0.0, 1500), Gesture::Tap);
    }

    #[test]
    fn test_double_tap_window_is_exclusive() {
        let mut t = GestureTranslator::new(30.0, 300);
        assert_eq!(swipe(&mut t, 0.0, 0.0, 1000), Gesture::Tap);
        assert_eq!(swipe(&mut t, 0.0, 0.0, 1300), Gesture::Tap);
        assert_eq!(swipe(&mut t, 0.0, 0.0, 1599), Gesture::DoubleTap);
    }

    #[test]
    fn test_touch_start_is_consumed() {
        let mut t = GestureTranslator::new(30.0, 300);
        t.touch_start(TouchPoint::new(200.0, 300.0));
        assert_eq!(t.touch_end(TouchPoint::new(100.0, 300.0), 2000), Gesture::SwipeLeft);
        // No new start: no travel, so no second swipe
        assert_eq!(t.touch_end(TouchPoint::new(100.0, 300.0), 2100), Gesture::Tap);
        assert_eq!(t.touch_end(TouchPoint::new(90.0, 300.0), 2200), Gesture::DoubleTap);
    }

    #[test]
    fn test_swipe_does_not_record_tap() {
        let mut t = GestureTranslator::new(30.0, 300);
        assert_eq!(swipe(&mut t, 0.0, 0.0, 1000), Gesture::Tap);
        assert_eq!(swipe(&mut t, -50.0, 0.0, 1050), Gesture::SwipeLeft);
        assert_eq!(swipe(&mut t, 0.0, 0.0, 1100), Gesture::DoubleTap);
    }

    #[test]
    fn test_first_tap_near_epoch_is_single() {
        let mut t = GestureTranslator::new(30.0, 300);
        assert_eq!(swipe(&mut t, 0.0, 0.0, 100), Gesture::Tap);
    }
}
