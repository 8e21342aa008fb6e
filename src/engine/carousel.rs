//! Slide progression for the media carousels.
//!
//! Pure state machine: the component layer feeds it timestamps (from the
//! autoplay pulse or from click handlers) and renders whatever
//! [`Carousel::active`] says. Exactly one slide is active at a time;
//! navigation wraps at both ends.

use serde::{Deserialize, Serialize};

/// Direction of the most recent transition, used by the display layer to
/// pick the enter/exit treatment.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Direction {
    Forward,
    Backward,
}

/// Autoplay cadence. `quiet_ms` is the window after a manual navigation
/// during which the automatic pulse must stay silent.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Autoplay {
    pub interval_ms: f64,
    pub quiet_ms: f64,
}

#[derive(Debug, Clone)]
pub struct Carousel {
    len: usize,
    active: usize,
    direction: Direction,
    autoplay: Option<Autoplay>,
    last_transition_ms: f64,
    quiet_until_ms: f64,
}

impl Carousel {
    /// A carousel needs at least one slide; `None` signals a configuration
    /// error the caller should surface instead of rendering.
    pub fn new(len: usize, autoplay: Option<Autoplay>) -> Option<Self> {
        if len == 0 {
            return None;
        }
        Some(Self {
            len,
            active: 0,
            direction: Direction::Forward,
            autoplay,
            last_transition_ms: 0.0,
            quiet_until_ms: 0.0,
        })
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn active(&self) -> usize {
        self.active
    }

    pub fn direction(&self) -> Direction {
        self.direction
    }

    /// Manual "next": wraps from the last slide to the first and opens the
    /// autoplay quiet window.
    pub fn next_manual(&mut self, now_ms: f64) -> usize {
        self.manual(now_ms, Direction::Forward)
    }

    /// Manual "previous": wraps from the first slide to the last.
    pub fn prev_manual(&mut self, now_ms: f64) -> usize {
        self.manual(now_ms, Direction::Backward)
    }

    fn manual(&mut self, now_ms: f64, direction: Direction) -> usize {
        self.step(direction);
        self.last_transition_ms = now_ms;
        if let Some(autoplay) = self.autoplay {
            self.quiet_until_ms = now_ms + autoplay.quiet_ms;
        }
        self.active
    }

    /// Autoplay pulse. Advances only when autoplay is configured, the
    /// interval since the last transition has elapsed, and the quiet
    /// window from the last manual navigation has fully passed. Returns
    /// the new index when a transition happened.
    pub fn poll(&mut self, now_ms: f64) -> Option<usize> {
        let autoplay = self.autoplay?;
        if now_ms < self.quiet_until_ms {
            return None;
        }
        if now_ms - self.last_transition_ms < autoplay.interval_ms {
            return None;
        }
        self.step(Direction::Forward);
        self.last_transition_ms = now_ms;
        Some(self.active)
    }

    fn step(&mut self, direction: Direction) {
        self.direction = direction;
        self.active = match direction {
            Direction::Forward => (self.active + 1) % self.len,
            Direction::Backward => (self.active + self.len - 1) % self.len,
        };
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const AUTOPLAY: Autoplay = Autoplay {
        interval_ms: 5_000.0,
        quiet_ms: 5_000.0,
    };

    #[test]
    fn zero_slides_is_a_configuration_error() {
        assert!(Carousel::new(0, None).is_none());
    }

    #[test]
    fn next_wraps_to_first() {
        let mut c = Carousel::new(4, None).unwrap();
        for expected in [1, 2, 3, 0] {
            assert_eq!(c.next_manual(0.0), expected);
        }
        assert_eq!(c.direction(), Direction::Forward);
    }

    #[test]
    fn prev_wraps_to_last() {
        let mut c = Carousel::new(4, None).unwrap();
        assert_eq!(c.prev_manual(0.0), 3);
        assert_eq!(c.prev_manual(0.0), 2);
        assert_eq!(c.direction(), Direction::Backward);
    }

    #[test]
    fn autoplay_advances_after_interval() {
        let mut c = Carousel::new(3, Some(AUTOPLAY)).unwrap();
        assert_eq!(c.poll(1_000.0), None);
        assert_eq!(c.poll(5_000.0), Some(1));
        // Interval restarts from the transition it just made.
        assert_eq!(c.poll(6_000.0), None);
        assert_eq!(c.poll(10_000.0), Some(2));
    }

    #[test]
    fn manual_navigation_opens_a_quiet_window() {
        let mut c = Carousel::new(3, Some(AUTOPLAY)).unwrap();
        c.next_manual(4_900.0);
        // Would have fired at 5s; the manual transition at 4.9s holds it
        // until the quiet window closes at 9.9s.
        assert_eq!(c.poll(5_000.0), None);
        assert_eq!(c.poll(9_800.0), None);
        assert_eq!(c.poll(9_900.0), Some(2));
    }

    #[test]
    fn manual_resets_the_autoplay_interval() {
        let mut c = Carousel::new(3, Some(AUTOPLAY)).unwrap();
        assert_eq!(c.poll(5_000.0), Some(1));
        c.prev_manual(6_000.0);
        // Quiet until 11s, and the interval restarts from 6s.
        assert_eq!(c.poll(10_500.0), None);
        assert_eq!(c.poll(11_000.0), Some(1));
    }

    #[test]
    fn poll_without_autoplay_never_advances() {
        let mut c = Carousel::new(3, None).unwrap();
        assert_eq!(c.poll(1e9), None);
        assert_eq!(c.active(), 0);
    }

    #[test]
    fn exactly_one_active_slide() {
        let mut c = Carousel::new(5, Some(AUTOPLAY)).unwrap();
        for step in 0..20 {
            let now = step as f64 * 7_000.0;
            c.poll(now);
            assert!(c.active() < c.len());
        }
    }
}
