//! L4 Atomic Layer: Time helpers for scroll animations
//!
//! Every function takes `now` explicitly so animations can be stepped from a
//! virtual clock.

use std::time::{Duration, Instant};

/// Animation progress in [0.0, 1.0]
#[inline]
pub fn progress(start: Instant, duration: Duration, now: Instant) -> f64 {
    if duration.is_zero() {
        return 1.0;
    }
    let elapsed = now.saturating_duration_since(start);
    (elapsed.as_secs_f64() / duration.as_secs_f64()).clamp(0.0, 1.0)
}

#[inline]
pub fn is_complete(start: Instant, duration: Duration, now: Instant) -> bool {
    now.saturating_duration_since(start) >= duration
}

/// Interpolate between two row offsets
#[inline]
pub fn lerp_u16(from: u16, to: u16, t: f64) -> u16 {
    let value = from as f64 + (to as f64 - from as f64) * t;
    value.round().clamp(0.0, u16::MAX as f64) as u16
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lerp_u16() {
        assert_eq!(lerp_u16(0, 100, 0.0), 0);
        assert_eq!(lerp_u16(0, 100, 0.5), 50);
        assert_eq!(lerp_u16(100, 0, 0.25), 75);
    }

    #[test]
    fn test_progress() {
        let start = Instant::now();
        let duration = Duration::from_millis(200);
        assert_eq!(progress(start, Duration::ZERO, start), 1.0);
        assert!((progress(start, duration, start + Duration::from_millis(50)) - 0.25).abs() < 0.001);
        assert_eq!(progress(start, duration, start + Duration::from_secs(1)), 1.0);
        assert!(is_complete(start, duration, start + duration));
        assert!(!is_complete(start, duration, start));
    }
}
