//! Choropleth class breaks.
//!
//! Values are assumed validated upstream (the binner rejects non-finite
//! measurements), so classification concerns itself only with where the
//! break points go.

use serde::{Deserialize, Serialize};

use foundation::{lerp, total_cmp_f64};

use crate::DensityError;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ClassMethod {
    /// Breaks divide the value extent into equal-width slices.
    EqualInterval,
    /// Breaks fall at linearly interpolated quantiles, putting roughly the
    /// same number of values into each class.
    Quantile,
}

/// The `classes - 1` inner break points for `values`, ascending. A single
/// class needs no breaks and returns an empty vector.
pub fn class_breaks(
    values: &[f64],
    classes: usize,
    method: ClassMethod,
) -> Result<Vec<f64>, DensityError> {
    if classes == 0 {
        return Err(DensityError::InvalidClassCount { classes });
    }
    if values.is_empty() {
        return Err(DensityError::Empty);
    }
    let mut sorted = values.to_vec();
    sorted.sort_by(|a, b| total_cmp_f64(*a, *b));

    let breaks = match method {
        ClassMethod::EqualInterval => {
            let (min, max) = (sorted[0], sorted[sorted.len() - 1]);
            (1..classes)
                .map(|i| min + (max - min) * (i as f64 / classes as f64))
                .collect()
        }
        ClassMethod::Quantile => (1..classes)
            .map(|i| quantile(&sorted, i as f64 / classes as f64))
            .collect(),
    };
    Ok(breaks)
}

/// Linearly interpolated quantile of an ascending slice, `q` in `[0, 1]`.
fn quantile(sorted: &[f64], q: f64) -> f64 {
    let pos = q * (sorted.len() - 1) as f64;
    let lo = pos.floor() as usize;
    let hi = pos.ceil() as usize;
    lerp(sorted[lo], sorted[hi], pos - lo as f64)
}

/// Class index for `value` against ascending `breaks`: the number of breaks
/// at or below it. A value sitting exactly on a break belongs to the class
/// above.
pub fn class_of(breaks: &[f64], value: f64) -> usize {
    breaks.iter().take_while(|b| value >= **b).count()
}
