//! Per-series summary statistics for chart scales and captions.

use serde::{Deserialize, Serialize};

use foundation::ValueRange;

use crate::SeriesError;
use crate::resample::Sample;

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SeriesSummary {
    pub count: usize,
    pub min: f64,
    pub max: f64,
    pub mean: f64,
}

/// Count, value extent, and mean of a series. Order does not matter here;
/// only the resampler insists on sorted input.
pub fn summarize(samples: &[Sample]) -> Result<SeriesSummary, SeriesError> {
    let (first, rest) = samples.split_first().ok_or(SeriesError::Empty)?;
    let mut range = ValueRange::single(first.value);
    let mut sum = first.value;
    for sample in rest {
        range.extend(sample.value);
        sum += sample.value;
    }
    Ok(SeriesSummary {
        count: samples.len(),
        min: range.min,
        max: range.max,
        mean: sum / samples.len() as f64,
    })
}
