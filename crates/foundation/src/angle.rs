//! Angle and cycle helpers.
//!
//! The wheel engine works in degrees on a [0, 360) circle; the calendar's
//! drift cycle lives on a 365.2425-day cycle. Both reduce to the same two
//! operations: normalization onto the cycle and shortest cyclic distance.

/// Degrees in one full turn of a wheel.
pub const FULL_TURN_DEG: f64 = 360.0;

/// Normalize an angle in degrees to [0, 360).
pub fn normalize_deg(angle: f64) -> f64 {
    let a = angle.rem_euclid(FULL_TURN_DEG);
    // rem_euclid can round up to the full period for tiny negative inputs.
    if a >= FULL_TURN_DEG { a - FULL_TURN_DEG } else { a }
}

/// Shortest distance between two positions on a cycle of length `period`.
///
/// `period` must be positive; the result is in [0, period / 2].
pub fn cyclic_distance(a: f64, b: f64, period: f64) -> f64 {
    let d = (a - b).rem_euclid(period);
    d.min(period - d)
}

#[cfg(test)]
mod tests {
    use super::{cyclic_distance, normalize_deg};

    fn assert_close(a: f64, b: f64) {
        assert!((a - b).abs() < 1e-9, "expected {a} ~= {b}");
    }

    #[test]
    fn normalize_wraps_both_directions() {
        assert_close(normalize_deg(370.0), 10.0);
        assert_close(normalize_deg(-30.0), 330.0);
        assert_close(normalize_deg(720.0), 0.0);
    }

    #[test]
    fn normalize_never_returns_full_turn() {
        // A tiny negative angle must not normalize to 360.0 itself.
        let a = normalize_deg(-1e-16);
        assert!((0.0..360.0).contains(&a), "got {a}");
    }

    #[test]
    fn cyclic_distance_takes_short_way_around() {
        assert_close(cyclic_distance(350.0, 10.0, 360.0), 20.0);
        assert_close(cyclic_distance(10.0, 350.0, 360.0), 20.0);
        assert_close(cyclic_distance(0.0, 180.0, 360.0), 180.0);
    }

    #[test]
    fn cyclic_distance_on_solar_year() {
        let year = 365.2425;
        assert_close(cyclic_distance(0.0, 359.0, year), 6.2425);
    }
}
