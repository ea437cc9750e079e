use super::state::Direction;

/// Horizontal drag tracking. A drag longer than the threshold becomes a switch:
/// dragging left moves to the next variant, dragging right to the previous one.
#[derive(Debug, Clone, Copy)]
pub struct SwipeTracker {
    threshold: f64,
    start_x: Option<f64>,
}

impl SwipeTracker {
    pub fn new(threshold: f64) -> Self {
        Self {
            threshold,
            start_x: None,
        }
    }

    pub fn begin(&mut self, x: f64) {
        self.start_x = Some(x);
    }

    pub fn cancel(&mut self) {
        self.start_x = None;
    }

    /// Finish the drag at `x`
    pub fn end(&mut self, x: f64) -> Option<Direction> {
        let start = self.start_x.take()?;
        classify(start, x, self.threshold)
    }
}

/// Direction for a drag from `start_x` to `end_x`, if it passes the threshold
pub fn classify(start_x: f64, end_x: f64, threshold: f64) -> Option<Direction> {
    let delta = start_x - end_x;
    if delta.abs() <= threshold {
        None
    } else if delta > 0.0 {
        Some(Direction::Next)
    } else {
        Some(Direction::Previous)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_short_drag_ignored() {
        assert_eq!(classify(100.0, 60.0, 50.0), None);
        assert_eq!(classify(100.0, 150.0, 50.0), None);
    }

    #[test]
    fn test_drag_direction() {
        assert_eq!(classify(200.0, 100.0, 50.0), Some(Direction::Next));
        assert_eq!(classify(100.0, 200.0, 50.0), Some(Direction::Previous));
    }

    #[test]
    fn test_end_without_begin() {
        let mut tracker = SwipeTracker::new(50.0);
        assert_eq!(tracker.end(10.0), None);
        tracker.begin(300.0);
        assert_eq!(tracker.end(10.0), Some(Direction::Next));
        assert_eq!(tracker.end(10.0), None);
    }

    #[test]
    fn test_cancelled_drag_never_switches() {
        let mut tracker = SwipeTracker::new(50.0);
        tracker.begin(300.0);
        tracker.cancel();
        assert_eq!(tracker.end(0.0), None);
    }
}
