//! Deterministic float ordering.
//!
//! Values that reach the engines are `f64` and get sorted, deduplicated, and
//! compared as tie-breaks. `partial_cmp` is not total (NaN) and `-0.0`
//! compares equal to `0.0` while hashing/formatting differently, so every
//! ordered use of a float in this workspace goes through these helpers.

use core::cmp::Ordering;

/// Canonicalize a float for ordering.
///
/// Rules:
/// - `-0.0` becomes `0.0`
/// - every NaN collapses to one canonical NaN
pub fn canonical_f64(v: f64) -> f64 {
    if v == 0.0 {
        // Covers both +0.0 and -0.0.
        0.0
    } else if v.is_nan() {
        f64::NAN
    } else {
        v
    }
}

/// Total, deterministic ordering for floats.
///
/// Use this for any sort or ordered tie-break involving floats.
pub fn total_cmp_f64(a: f64, b: f64) -> Ordering {
    canonical_f64(a).total_cmp(&canonical_f64(b))
}
