//! Easing curves for scrubbed animation bindings.
//!
//! An easing maps linear binding progress (0.0 to 1.0) to a shaped output
//! value. Scrubbed bindings are driven by scroll position, so the same
//! input always produces the same output; nothing here depends on time.

use serde::{Deserialize, Serialize};

/// Easing curve applied to a tween's progress.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Easing {
    /// No shaping. The default for scrubbed tweens, where the scroll
    /// interpolator already smooths the input.
    Linear,

    /// Polynomial acceleration from rest: `t^(n+1)`.
    PowerIn { n: u8 },

    /// Polynomial deceleration into the end value: `1 - (1-t)^(n+1)`.
    PowerOut { n: u8 },

    /// Polynomial ease on both ends.
    PowerInOut { n: u8 },

    /// Exponential deceleration, `1 - 2^(-10t)` normalized so the curve
    /// hits exactly 1.0 at t = 1.
    ExpoOut,
}

impl Default for Easing {
    fn default() -> Self {
        Self::Linear
    }
}

impl Easing {
    /// Evaluate the curve at `t`. Input is clamped to `[0, 1]`; output is
    /// exact at both endpoints and non-decreasing in between.
    pub fn evaluate(&self, t: f64) -> f64 {
        let t = t.clamp(0.0, 1.0);
        match self {
            Self::Linear => t,
            Self::PowerIn { n } => t.powi(i32::from(*n) + 1),
            Self::PowerOut { n } => 1.0 - (1.0 - t).powi(i32::from(*n) + 1),
            Self::PowerInOut { n } => {
                let p = i32::from(*n) + 1;
                if t < 0.5 {
                    0.5 * (2.0 * t).powi(p)
                } else {
                    1.0 - 0.5 * (2.0 * (1.0 - t)).powi(p)
                }
            }
            Self::ExpoOut => {
                if t >= 1.0 {
                    1.0
                } else {
                    // 2^-10 leaves a residue of ~0.001 at t = 1; rescale so
                    // the endpoint lands exactly on 1.0.
                    (1.0 - 2f64.powf(-10.0 * t)) / (1.0 - 2f64.powf(-10.0))
                }
            }
        }
    }

    /// Interpolate between `from` and `to` at eased progress `t`.
    pub fn lerp(&self, from: f64, to: f64, t: f64) -> f64 {
        from + (to - from) * self.evaluate(t)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPSILON: f64 = 1e-6;

    fn approx_eq(a: f64, b: f64) -> bool {
        (a - b).abs() < EPSILON
    }

    #[test]
    fn linear_is_identity() {
        let e = Easing::Linear;
        for t in [0.0, 0.25, 0.5, 0.75, 1.0] {
            assert!(approx_eq(e.evaluate(t), t));
        }
    }

    #[test]
    fn endpoints_are_exact() {
        let curves = [
            Easing::Linear,
            Easing::PowerIn { n: 3 },
            Easing::PowerOut { n: 3 },
            Easing::PowerInOut { n: 2 },
            Easing::ExpoOut,
        ];
        for e in curves {
            assert!(approx_eq(e.evaluate(0.0), 0.0), "{e:?} at 0");
            assert!(approx_eq(e.evaluate(1.0), 1.0), "{e:?} at 1");
        }
    }

    #[test]
    fn input_is_clamped() {
        let e = Easing::PowerOut { n: 3 };
        assert!(approx_eq(e.evaluate(-2.0), 0.0));
        assert!(approx_eq(e.evaluate(7.5), 1.0));
    }

    #[test]
    fn power_out_decelerates() {
        let e = Easing::PowerOut { n: 3 };
        assert!(e.evaluate(0.25) > 0.25);
        assert!(e.evaluate(0.75) > 0.75);
    }

    #[test]
    fn power_in_accelerates() {
        let e = Easing::PowerIn { n: 3 };
        assert!(e.evaluate(0.25) < 0.25);
        assert!(e.evaluate(0.75) < 0.75);
    }

    #[test]
    fn curves_are_monotonic() {
        let curves = [
            Easing::PowerIn { n: 4 },
            Easing::PowerOut { n: 4 },
            Easing::PowerInOut { n: 3 },
            Easing::ExpoOut,
        ];
        for e in curves {
            let mut last = e.evaluate(0.0);
            for i in 1..=100 {
                let v = e.evaluate(f64::from(i) / 100.0);
                assert!(v >= last - EPSILON, "{e:?} decreased at step {i}");
                last = v;
            }
        }
    }

    #[test]
    fn lerp_spans_range() {
        let e = Easing::Linear;
        assert!(approx_eq(e.lerp(100.0, 200.0, 0.5), 150.0));
        assert!(approx_eq(e.lerp(200.0, 100.0, 1.0), 100.0));
    }

    #[test]
    fn serializes_tagged() {
        let json = serde_json::to_string(&Easing::PowerOut { n: 3 }).unwrap();
        assert_eq!(json, r#"{"type":"power_out","n":3}"#);
        let back: Easing = serde_json::from_str(&json).unwrap();
        assert_eq!(back, Easing::PowerOut { n: 3 });
    }
}
