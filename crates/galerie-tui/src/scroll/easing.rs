//! Easing curves and interpolation helpers for scroll animations.

use std::time::{Duration, Instant};

pub use galerie_core::EasingType;

/// Extension trait applying an easing curve to a progress value.
pub trait EasingTypeExt {
    /// Map a progress value in [0, 1] to an eased value in [0, 1].
    fn apply(&self, t: f64) -> f64;
}

impl EasingTypeExt for EasingType {
    #[inline]
    fn apply(&self, t: f64) -> f64 {
        let t = t.clamp(0.0, 1.0);
        match self {
            EasingType::None => {
                if t < 1.0 {
                    0.0
                } else {
                    1.0
                }
            }
            EasingType::Linear => t,
            EasingType::Cubic => cubic_ease_out(t),
            EasingType::Quintic => quintic_ease_out(t),
            EasingType::EaseOut => exponential_ease_out(t),
        }
    }
}

/// f(t) = 1 - (1-t)³
#[inline]
fn cubic_ease_out(t: f64) -> f64 {
    let inv = 1.0 - t;
    1.0 - inv * inv * inv
}

/// f(t) = 1 - (1-t)⁵
#[inline]
fn quintic_ease_out(t: f64) -> f64 {
    let inv = 1.0 - t;
    1.0 - inv * inv * inv * inv * inv
}

/// f(t) = 1 - 2^(-10t)
#[inline]
fn exponential_ease_out(t: f64) -> f64 {
    if t >= 1.0 {
        1.0
    } else {
        1.0 - 2.0_f64.powf(-10.0 * t)
    }
}

/// Symmetric ease used by the marquee slide-in.
#[inline]
pub fn smoothstep(t: f64) -> f64 {
    let t = t.clamp(0.0, 1.0);
    t * t * (3.0 - 2.0 * t)
}

/// Animation progress in [0, 1] from start time and duration.
#[inline]
pub fn progress(start: Instant, duration: Duration, now: Instant) -> f64 {
    if duration.is_zero() {
        return 1.0;
    }
    let elapsed = now.saturating_duration_since(start);
    (elapsed.as_secs_f64() / duration.as_secs_f64()).clamp(0.0, 1.0)
}

#[inline]
pub fn lerp(from: f64, to: f64, t: f64) -> f64 {
    from + (to - from) * t
}

/// Interpolation for row positions.
#[inline]
pub fn lerp_u16(from: u16, to: u16, t: f64) -> u16 {
    lerp(from as f64, to as f64, t).round() as u16
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_easing_boundaries() {
        for easing in [
            EasingType::None,
            EasingType::Linear,
            EasingType::Cubic,
            EasingType::Quintic,
            EasingType::EaseOut,
        ] {
            if easing != EasingType::None {
                assert!((easing.apply(0.0)).abs() < 0.001, "{easing:?} at t=0");
            }
            assert!((easing.apply(1.0) - 1.0).abs() < 0.001, "{easing:?} at t=1");
        }
    }

    #[test]
    fn test_easing_monotonic() {
        for easing in [
            EasingType::Linear,
            EasingType::Cubic,
            EasingType::Quintic,
            EasingType::EaseOut,
        ] {
            let mut prev = 0.0;
            for i in 0..=10 {
                let t = i as f64 / 10.0;
                let v = easing.apply(t);
                assert!(v >= prev, "{easing:?} not monotonic at t={t}");
                prev = v;
            }
        }
    }

    #[test]
    fn test_lerp_u16() {
        assert_eq!(lerp_u16(0, 100, 0.0), 0);
        assert_eq!(lerp_u16(0, 100, 0.5), 50);
        assert_eq!(lerp_u16(0, 100, 1.0), 100);
    }

    #[test]
    fn test_progress_zero_duration() {
        let start = Instant::now();
        assert!((progress(start, Duration::ZERO, start) - 1.0).abs() < 0.001);
    }

    #[test]
    fn test_progress_clamped() {
        let start = Instant::now();
        let now = start + Duration::from_millis(500);
        assert!((progress(start, Duration::from_millis(100), now) - 1.0).abs() < 0.001);
    }
}
