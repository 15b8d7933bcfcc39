//! Slide rotation and continuous marquee scrolling

use std::time::Duration;

/// Active slide of a fixed-length slider
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct SlideCycle {
    len: usize,
    active: usize,
}

impl SlideCycle {
    pub fn new(len: usize) -> Self {
        Self { len, active: 0 }
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    pub fn active(&self) -> usize {
        self.active
    }

    pub fn is_active(&self, index: usize) -> bool {
        self.len > 0 && self.active == index
    }

    pub fn advance(&mut self) {
        if self.len > 0 {
            self.active = (self.active + 1) % self.len;
        }
    }

    pub fn retreat(&mut self) {
        if self.len > 0 {
            self.active = (self.active + self.len - 1) % self.len;
        }
    }

    /// Out-of-range indices are ignored
    pub fn select(&mut self, index: usize) {
        if index < self.len {
            self.active = index;
        }
    }
}

/// Whether a slider's timer may advance
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Autoplay {
    /// Pointer is over the slider
    pub paused: bool,
    /// User asked the OS for reduced motion
    pub reduced_motion: bool,
}

impl Autoplay {
    pub fn should_run(&self) -> bool {
        !self.paused && !self.reduced_motion
    }
}

/// Elapsed time toward the next automatic slide change
///
/// The timer is polled in short steps so a pause restarts the wait: after
/// resuming, the next change comes a full interval later.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AutoplayTimer {
    interval: Duration,
    elapsed: Duration,
}

impl AutoplayTimer {
    /// Step between two `tick` calls
    pub const POLL: Duration = Duration::from_millis(100);

    pub fn new(interval: Duration) -> Self {
        Self {
            interval,
            elapsed: Duration::ZERO,
        }
    }

    pub fn elapsed(&self) -> Duration {
        self.elapsed
    }

    pub fn reset(&mut self) {
        self.elapsed = Duration::ZERO;
    }

    /// Adds `dt` while `autoplay` runs; returns true when the slide should advance
    pub fn tick(&mut self, dt: Duration, autoplay: Autoplay) -> bool {
        if !autoplay.should_run() {
            self.reset();
            return false;
        }
        self.elapsed += dt;
        if self.elapsed >= self.interval {
            self.reset();
            true
        } else {
            false
        }
    }
}

/// Horizontal offset of an endlessly scrolling strip whose items are rendered twice
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Marquee {
    offset: f64,
    speed: f64,
    period: f64,
}

impl Marquee {
    /// `speed` is in pixels per frame
    pub fn new(speed: f64) -> Self {
        Self {
            offset: 0.0,
            speed: speed.max(0.0),
            period: 0.0,
        }
    }

    /// Sets the wrap point from the full (duplicated) track width
    pub fn set_track_width(&mut self, width: f64) {
        self.period = if width.is_finite() { (width / 2.0).max(0.0) } else { 0.0 };
        if self.offset >= self.period {
            self.offset = 0.0;
        }
    }

    pub fn offset(&self) -> f64 {
        self.offset
    }

    pub fn period(&self) -> f64 {
        self.period
    }

    /// Advances one frame and returns the new offset
    pub fn tick(&mut self) -> f64 {
        self.offset += self.speed;
        if self.offset >= self.period {
            self.offset = 0.0;
        }
        self.offset
    }

    pub fn transform(&self) -> String {
        format!("translateX(-{}px)", self.offset)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const RUNNING: Autoplay = Autoplay {
        paused: false,
        reduced_motion: false,
    };
    const PAUSED: Autoplay = Autoplay {
        paused: true,
        reduced_motion: false,
    };

    fn ticks_until_fire(timer: &mut AutoplayTimer, autoplay: Autoplay, limit: usize) -> Option<usize> {
        (1..=limit).find(|_| timer.tick(AutoplayTimer::POLL, autoplay))
    }

    #[test]
    fn test_timer_fires_after_interval() {
        let mut timer = AutoplayTimer::new(Duration::from_millis(500));
        assert_eq!(ticks_until_fire(&mut timer, RUNNING, 20), Some(5));
        assert_eq!(timer.elapsed(), Duration::ZERO);
        assert_eq!(ticks_until_fire(&mut timer, RUNNING, 20), Some(5));
    }

    #[test]
    fn test_resume_after_pause_waits_full_interval() {
        let mut timer = AutoplayTimer::new(Duration::from_millis(500));
        for _ in 0..4 {
            assert!(!timer.tick(AutoplayTimer::POLL, RUNNING));
        }
        // hover just before the change would have fired
        assert!(!timer.tick(AutoplayTimer::POLL, PAUSED));
        assert_eq!(timer.elapsed(), Duration::ZERO);
        assert_eq!(ticks_until_fire(&mut timer, RUNNING, 20), Some(5));
    }

    #[test]
    fn test_timer_never_fires_with_reduced_motion() {
        let mut timer = AutoplayTimer::new(Duration::from_millis(200));
        let still = Autoplay {
            paused: false,
            reduced_motion: true,
        };
        assert_eq!(ticks_until_fire(&mut timer, still, 50), None);
    }

    #[test]
    fn test_advance_wraps() {
        let mut cycle = SlideCycle::new(3);
        cycle.advance();
        cycle.advance();
        assert_eq!(cycle.active(), 2);
        cycle.advance();
        assert_eq!(cycle.active(), 0);
        cycle.retreat();
        assert_eq!(cycle.active(), 2);
    }

    #[test]
    fn test_select_ignores_out_of_range() {
        let mut cycle = SlideCycle::new(4);
        cycle.select(2);
        assert_eq!(cycle.active(), 2);
        cycle.select(4);
        assert_eq!(cycle.active(), 2);
        assert!(cycle.is_active(2));
    }

    #[test]
    fn test_empty_cycle_stays_at_zero() {
        let mut cycle = SlideCycle::new(0);
        cycle.advance();
        cycle.retreat();
        cycle.select(0);
        assert_eq!(cycle.active(), 0);
        assert!(!cycle.is_active(0));
    }

    #[test]
    fn test_active_index_in_bounds() {
        for len in 1..8 {
            let mut cycle = SlideCycle::new(len);
            for step in 0..50 {
                if step % 3 == 0 {
                    cycle.retreat();
                } else {
                    cycle.advance();
                }
                cycle.select(step % (len + 2));
                assert!(cycle.active() < len);
            }
        }
    }

    #[test]
    fn test_autoplay_defers_to_hover_and_reduced_motion() {
        assert!(Autoplay::default().should_run());
        assert!(!Autoplay { paused: true, reduced_motion: false }.should_run());
        assert!(!Autoplay { paused: false, reduced_motion: true }.should_run());
    }

    #[test]
    fn test_marquee_wraps_at_half_track() {
        let mut marquee = Marquee::new(1.5);
        marquee.set_track_width(12.0);
        assert_eq!(marquee.period(), 6.0);
        assert_eq!(marquee.tick(), 1.5);
        marquee.tick();
        marquee.tick();
        assert_eq!(marquee.offset(), 4.5);
        assert_eq!(marquee.tick(), 0.0);
        assert_eq!(marquee.transform(), "translateX(-0px)");
    }

    #[test]
    fn test_marquee_without_width_stays_put() {
        let mut marquee = Marquee::new(1.5);
        assert_eq!(marquee.tick(), 0.0);
        marquee.set_track_width(f64::NAN);
        assert_eq!(marquee.tick(), 0.0);
    }
}
