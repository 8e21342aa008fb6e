//! Smoothed scroll position source.
//!
//! Raw wheel input moves a target; `tick` advances the published position
//! toward that target with frame-rate-independent exponential decay. The
//! source is an owned value with exactly one writer (the frame loop);
//! sections read the published position through the registry, never the
//! raw DOM scroll offset.

use crate::config::motion;

/// Virtual scroll position, eased toward its raw target each frame.
#[derive(Debug, Clone)]
pub struct ScrollSource {
    current: f64,
    target: f64,
    max: f64,
    /// Exponential decay rate per second.
    rate: f64,
    last_tick_ms: Option<f64>,
}

impl ScrollSource {
    pub fn new() -> Self {
        Self::with_rate(motion::SMOOTH_RATE)
    }

    pub fn with_rate(rate: f64) -> Self {
        Self {
            current: 0.0,
            target: 0.0,
            max: 0.0,
            rate,
            last_tick_ms: None,
        }
    }

    /// Update the scrollable extent. Both target and position are clamped
    /// into the new bounds, so shrinking content cannot strand the view.
    pub fn set_bounds(&mut self, max: f64) {
        self.max = max.max(0.0);
        self.target = self.target.clamp(0.0, self.max);
        self.current = self.current.clamp(0.0, self.max);
    }

    /// Apply a raw wheel delta to the target.
    pub fn add_delta(&mut self, dy: f64) {
        if dy.is_finite() {
            self.target = (self.target + dy * motion::WHEEL_MULTIPLIER).clamp(0.0, self.max);
        }
    }

    /// Adopt an externally observed position (scrollbar drag, anchor jump)
    /// without interpolation.
    pub fn jump(&mut self, pos: f64) {
        let pos = pos.clamp(0.0, self.max);
        self.current = pos;
        self.target = pos;
    }

    /// Advance the eased position toward the target and return it.
    ///
    /// The first call after construction only records the timestamp, so a
    /// long setup pause cannot produce a huge initial step. The position
    /// approaches the target monotonically and never overshoots; once the
    /// remaining distance drops under a small epsilon it snaps to the
    /// target exactly.
    pub fn tick(&mut self, now_ms: f64) -> f64 {
        let dt = match self.last_tick_ms {
            Some(last) => ((now_ms - last) / 1000.0).clamp(0.0, 0.1),
            None => {
                self.last_tick_ms = Some(now_ms);
                return self.current;
            }
        };
        self.last_tick_ms = Some(now_ms);

        let remaining = self.target - self.current;
        if remaining.abs() <= motion::SETTLE_EPSILON {
            self.current = self.target;
        } else {
            let step = 1.0 - (-self.rate * dt).exp();
            self.current += remaining * step;
        }
        self.current
    }

    pub fn position(&self) -> f64 {
        self.current
    }

    pub fn target(&self) -> f64 {
        self.target
    }

    pub fn is_settled(&self) -> bool {
        self.current == self.target
    }

    /// Forget the last tick timestamp. Called when the frame loop resumes
    /// after being paused so the next tick does not integrate the gap.
    pub fn resume(&mut self) {
        self.last_tick_ms = None;
    }
}

impl Default for ScrollSource {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const FRAME_MS: f64 = 1000.0 / 60.0;

    fn run_frames(src: &mut ScrollSource, frames: usize) -> Vec<f64> {
        let mut out = Vec::with_capacity(frames);
        for i in 0..=frames {
            out.push(src.tick(FRAME_MS * i as f64));
        }
        out
    }

    #[test]
    fn converges_within_sixty_frames() {
        let mut src = ScrollSource::new();
        src.set_bounds(10_000.0);
        src.add_delta(500.0);

        let positions = run_frames(&mut src, 60);
        let last = *positions.last().unwrap();
        assert!(
            (500.0 - last).abs() < 1.0,
            "expected within 1 unit of 500 after 60 frames, got {last}"
        );
    }

    #[test]
    fn approach_is_monotonic_without_overshoot() {
        let mut src = ScrollSource::new();
        src.set_bounds(10_000.0);
        src.add_delta(500.0);

        let positions = run_frames(&mut src, 120);
        for pair in positions.windows(2) {
            assert!(pair[1] >= pair[0], "position regressed: {pair:?}");
            assert!(pair[1] <= 500.0 + 1e-9, "overshot target: {}", pair[1]);
        }
    }

    #[test]
    fn settles_exactly_on_target() {
        let mut src = ScrollSource::new();
        src.set_bounds(10_000.0);
        src.add_delta(500.0);
        run_frames(&mut src, 600);
        assert!(src.is_settled());
        assert_eq!(src.position(), 500.0);
    }

    #[test]
    fn first_tick_only_records_time() {
        let mut src = ScrollSource::new();
        src.set_bounds(1_000.0);
        src.add_delta(300.0);
        // A large first timestamp must not integrate the whole gap.
        assert_eq!(src.tick(5_000.0), 0.0);
        assert!(src.tick(5_000.0 + FRAME_MS) > 0.0);
    }

    #[test]
    fn target_clamps_to_bounds() {
        let mut src = ScrollSource::new();
        src.set_bounds(400.0);
        src.add_delta(10_000.0);
        assert_eq!(src.target(), 400.0);
        src.add_delta(-99_999.0);
        assert_eq!(src.target(), 0.0);
    }

    #[test]
    fn shrinking_bounds_pulls_position_back() {
        let mut src = ScrollSource::new();
        src.set_bounds(5_000.0);
        src.jump(4_000.0);
        src.set_bounds(1_000.0);
        assert_eq!(src.position(), 1_000.0);
        assert_eq!(src.target(), 1_000.0);
    }

    #[test]
    fn jump_skips_interpolation() {
        let mut src = ScrollSource::new();
        src.set_bounds(5_000.0);
        src.jump(1_234.0);
        assert_eq!(src.position(), 1_234.0);
        assert!(src.is_settled());
    }

    #[test]
    fn resume_drops_the_gap() {
        let mut src = ScrollSource::new();
        src.set_bounds(5_000.0);
        src.add_delta(500.0);
        src.tick(0.0);
        src.tick(FRAME_MS);
        let before = src.position();
        src.resume();
        // Next tick after a long pause must not advance.
        assert_eq!(src.tick(60_000.0), before);
    }
}
