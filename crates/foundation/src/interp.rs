//! Linear interpolation helpers shared by the resampler and class breaks.

/// Linear interpolation between `a` and `b` at parameter `t`.
///
/// For `t` in [0, 1] the result stays between `a` and `b`.
pub fn lerp(a: f64, b: f64, t: f64) -> f64 {
    a + (b - a) * t
}

/// Inverse of [`lerp`]: the parameter at which `v` sits between `a` and `b`.
///
/// An empty interval (`a == b`) maps everything to 0.
pub fn inv_lerp(a: f64, b: f64, v: f64) -> f64 {
    if a == b { 0.0 } else { (v - a) / (b - a) }
}
