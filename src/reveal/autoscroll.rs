/// Shortest tour, one frame at 60 Hz.
pub const MIN_DURATION_MS: f64 = 16.0;

/// A scroll animation from the current position to the bottom of the page.
///
/// Time is supplied by the caller (the frame timestamp), so the plan itself
/// holds no browser state.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct AutoScroll {
    start_y: f64,
    scroll_height: f64,
    start_time: f64,
    duration: f64,
}

/// Result of advancing the animation by one frame.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ScrollFrame {
    pub target_y: f64,
    pub done: bool,
}

impl AutoScroll {
    /// Plans a scroll whose duration is proportional to the remaining
    /// distance. Returns `None` when there is nothing to scroll.
    pub fn start(start_y: f64, scroll_height: f64, now: f64, speed_px_per_sec: f64) -> Option<Self> {
        if !scroll_height.is_finite() || scroll_height <= 0.0 {
            return None;
        }
        let start_y = if start_y.is_finite() { start_y.clamp(0.0, scroll_height) } else { 0.0 };
        let remaining = scroll_height - start_y;
        if remaining <= 0.0 || !speed_px_per_sec.is_finite() || speed_px_per_sec <= 0.0 {
            return None;
        }
        let duration = (remaining / speed_px_per_sec * 1000.0).max(MIN_DURATION_MS);
        Some(Self {
            start_y,
            scroll_height,
            start_time: now,
            duration,
        })
    }

    pub fn duration(&self) -> f64 {
        self.duration
    }

    pub fn progress_at(&self, now: f64) -> f64 {
        let elapsed = (now - self.start_time).max(0.0);
        (elapsed / self.duration).min(1.0)
    }

    /// Position for a given progress, clamped so it never passes the bottom.
    pub fn position_for(&self, progress: f64) -> f64 {
        let progress = progress.clamp(0.0, 1.0);
        (self.start_y + (self.scroll_height - self.start_y) * progress).min(self.scroll_height)
    }

    pub fn frame(&self, now: f64) -> ScrollFrame {
        let progress = self.progress_at(now);
        ScrollFrame {
            target_y: self.position_for(progress),
            done: progress >= 1.0,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn never_overshoots() {
        let plan = AutoScroll::start(0.0, 1000.0, 0.0, 500.0).expect("scrollable");
        for progress in [0.0, 0.5, 1.0, 1.2] {
            assert!(plan.position_for(progress) <= 1000.0);
        }
        assert_eq!(plan.position_for(0.5), 500.0);
        assert_eq!(plan.position_for(1.2), 1000.0);
    }

    #[test]
    fn duration_follows_distance() {
        let far = AutoScroll::start(0.0, 2000.0, 0.0, 500.0).expect("scrollable");
        let near = AutoScroll::start(1500.0, 2000.0, 0.0, 500.0).expect("scrollable");
        assert_eq!(far.duration(), 4000.0);
        assert_eq!(near.duration(), 1000.0);
    }

    #[test]
    fn frames_advance_and_finish() {
        let plan = AutoScroll::start(200.0, 1200.0, 100.0, 1000.0).expect("scrollable");
        let first = plan.frame(100.0);
        assert_eq!(first.target_y, 200.0);
        assert!(!first.done);
        let middle = plan.frame(600.0);
        assert_eq!(middle.target_y, 700.0);
        let last = plan.frame(5000.0);
        assert_eq!(last.target_y, 1200.0);
        assert!(last.done);
    }

    #[test]
    fn positions_are_monotonic() {
        let plan = AutoScroll::start(0.0, 1000.0, 0.0, 250.0).expect("scrollable");
        let mut last = -1.0;
        for t in (0..60).map(|i| i as f64 * 100.0) {
            let y = plan.frame(t).target_y;
            assert!(y >= last);
            last = y;
        }
    }

    #[test]
    fn unscrollable_page_is_a_no_op() {
        assert_eq!(AutoScroll::start(0.0, 0.0, 0.0, 500.0), None);
        assert_eq!(AutoScroll::start(0.0, -20.0, 0.0, 500.0), None);
        assert_eq!(AutoScroll::start(1000.0, 1000.0, 0.0, 500.0), None);
        assert_eq!(AutoScroll::start(0.0, 1000.0, 0.0, 0.0), None);
    }
}
