//! Linear resampling onto uniform time grids.
//!
//! Charts want a fixed number of evenly spaced points; source data arrives
//! at whatever times the record-keepers used. Resampling interpolates
//! linearly between neighbouring samples and never manufactures values
//! outside the range the data actually spans.

use serde::{Deserialize, Serialize};

use foundation::{inv_lerp, lerp};

use crate::SeriesError;

/// A raw observation: a time coordinate (decimal years in practice, but any
/// monotone axis works) and a value.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Sample {
    pub t: f64,
    pub value: f64,
}

impl Sample {
    pub fn new(t: f64, value: f64) -> Self {
        Sample { t, value }
    }
}

/// A point on the output grid. `is_interpolated` is false exactly when the
/// grid time coincided with a source sample, so the chart can mark measured
/// points differently from derived ones.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SeriesPoint {
    pub t: f64,
    pub value: f64,
    pub is_interpolated: bool,
}

/// Samples must arrive in ascending time order. Duplicate times collapse to
/// the last sample given, treating later entries as corrections.
fn validate(samples: &[Sample]) -> Result<Vec<Sample>, SeriesError> {
    if samples.is_empty() {
        return Err(SeriesError::Empty);
    }
    if samples[0].t.is_nan() {
        return Err(SeriesError::Unordered { index: 0 });
    }
    for (index, pair) in samples.windows(2).enumerate() {
        if !(pair[0].t <= pair[1].t) {
            return Err(SeriesError::Unordered { index: index + 1 });
        }
    }
    let mut deduped: Vec<Sample> = Vec::with_capacity(samples.len());
    for sample in samples {
        if let Some(last) = deduped.last_mut()
            && last.t == sample.t
        {
            *last = *sample;
        } else {
            deduped.push(*sample);
        }
    }
    Ok(deduped)
}

/// Value at grid time `t`, which must satisfy `samples[0].t <= t` and
/// `t <= samples[last].t`. `seg` is the walking segment cursor; grid times
/// must be fed in ascending order.
fn point_at(samples: &[Sample], seg: &mut usize, t: f64) -> SeriesPoint {
    while *seg + 1 < samples.len() && samples[*seg + 1].t <= t {
        *seg += 1;
    }
    let a = samples[*seg];
    if a.t == t {
        return SeriesPoint {
            t,
            value: a.value,
            is_interpolated: false,
        };
    }
    let b = samples[*seg + 1];
    SeriesPoint {
        t,
        value: lerp(a.value, b.value, inv_lerp(a.t, b.t, t)),
        is_interpolated: true,
    }
}

fn grid_time(start: f64, end: f64, i: usize, n: usize) -> f64 {
    // Endpoints reproduce the bounds bit-for-bit.
    if i == 0 {
        start
    } else if i == n - 1 {
        end
    } else {
        start + (end - start) * (i as f64 / (n - 1) as f64)
    }
}

/// Resample onto `n` evenly spaced points spanning the data's own time
/// range. `n == 0` yields an empty series; a series whose samples all share
/// one time collapses to that single real point.
pub fn resample(samples: &[Sample], n: usize) -> Result<Vec<SeriesPoint>, SeriesError> {
    let samples = validate(samples)?;
    if n == 0 {
        return Ok(Vec::new());
    }
    let (first, last) = (samples[0], samples[samples.len() - 1]);
    if samples.len() == 1 || n == 1 {
        return Ok(vec![SeriesPoint {
            t: first.t,
            value: first.value,
            is_interpolated: false,
        }]);
    }
    let mut seg = 0;
    let mut out = Vec::with_capacity(n);
    for i in 0..n {
        out.push(point_at(&samples, &mut seg, grid_time(first.t, last.t, i, n)));
    }
    Ok(out)
}

/// Resample onto `n` evenly spaced points spanning an explicit `[start,
/// end]` range. Grid times outside the data hold the nearest boundary value
/// and are flagged interpolated. A range with `start == end` has only one
/// distinct grid time and collapses to that single point.
pub fn resample_over(
    samples: &[Sample],
    start: f64,
    end: f64,
    n: usize,
) -> Result<Vec<SeriesPoint>, SeriesError> {
    if !(start <= end) {
        return Err(SeriesError::InvalidRange { start, end });
    }
    let samples = validate(samples)?;
    if n == 0 {
        return Ok(Vec::new());
    }
    let n = if start == end { 1 } else { n };
    let (first, last) = (samples[0], samples[samples.len() - 1]);
    let mut seg = 0;
    let mut out = Vec::with_capacity(n);
    for i in 0..n {
        let t = grid_time(start, end, i, n);
        let point = if t < first.t {
            SeriesPoint {
                t,
                value: first.value,
                is_interpolated: true,
            }
        } else if t > last.t {
            SeriesPoint {
                t,
                value: last.value,
                is_interpolated: true,
            }
        } else {
            point_at(&samples, &mut seg, t)
        };
        out.push(point);
    }
    Ok(out)
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn s(t: f64, value: f64) -> Sample {
        Sample::new(t, value)
    }

    #[test]
    fn empty_series_is_rejected() {
        assert_eq!(resample(&[], 5), Err(SeriesError::Empty));
    }

    #[test]
    fn unordered_series_is_rejected() {
        assert_eq!(
            resample(&[s(2.0, 1.0), s(1.0, 1.0)], 5),
            Err(SeriesError::Unordered { index: 1 })
        );
        assert_eq!(
            resample(&[s(0.0, 1.0), s(f64::NAN, 1.0), s(2.0, 1.0)], 5),
            Err(SeriesError::Unordered { index: 1 })
        );
    }

    #[test]
    fn zero_points_yields_an_empty_grid() {
        assert_eq!(resample(&[s(1.0, 2.0)], 0), Ok(Vec::new()));
    }

    #[test]
    fn matching_grid_reproduces_the_samples() {
        let data = [s(0.0, 10.0), s(1.0, 20.0), s(2.0, 30.0)];
        let out = resample(&data, 3).unwrap();
        let expected: Vec<SeriesPoint> = data
            .iter()
            .map(|p| SeriesPoint {
                t: p.t,
                value: p.value,
                is_interpolated: false,
            })
            .collect();
        assert_eq!(out, expected);
    }

    #[test]
    fn midpoints_interpolate_linearly() {
        let data = [s(0.0, 10.0), s(1.0, 20.0), s(2.0, 30.0)];
        let out = resample(&data, 5).unwrap();
        let times: Vec<f64> = out.iter().map(|p| p.t).collect();
        let values: Vec<f64> = out.iter().map(|p| p.value).collect();
        let real: Vec<bool> = out.iter().map(|p| !p.is_interpolated).collect();
        assert_eq!(times, vec![0.0, 0.5, 1.0, 1.5, 2.0]);
        assert_eq!(values, vec![10.0, 15.0, 20.0, 25.0, 30.0]);
        assert_eq!(real, vec![true, false, true, false, true]);
    }

    #[test]
    fn endpoints_are_bit_exact() {
        let data = [s(0.1, 1.0), s(0.7, 2.0), s(0.9, 3.0)];
        let out = resample(&data, 7).unwrap();
        assert_eq!(out[0].t.to_bits(), 0.1_f64.to_bits());
        assert_eq!(out[6].t.to_bits(), 0.9_f64.to_bits());
        assert!(!out[0].is_interpolated);
        assert!(!out[6].is_interpolated);
    }

    #[test]
    fn values_never_leave_the_data_range() {
        let data = [
            s(0.0, 5.0),
            s(0.3, -2.0),
            s(0.31, 40.0),
            s(2.0, 7.0),
            s(2.1, 6.9),
        ];
        let out = resample(&data, 101).unwrap();
        for p in &out {
            assert!((-2.0..=40.0).contains(&p.value), "{p:?}");
        }
    }

    #[test]
    fn duplicate_times_keep_the_last_value() {
        let data = [s(1.0, 10.0), s(1.0, 99.0), s(2.0, 20.0)];
        let out = resample(&data, 2).unwrap();
        assert_eq!(out[0].value, 99.0);
        assert_eq!(out[1].value, 20.0);
    }

    #[test]
    fn single_time_collapses_to_one_real_point() {
        let data = [s(5.0, 42.0), s(5.0, 43.0)];
        let out = resample(&data, 10).unwrap();
        assert_eq!(
            out,
            vec![SeriesPoint {
                t: 5.0,
                value: 43.0,
                is_interpolated: false,
            }]
        );
    }

    #[test]
    fn explicit_range_clamps_outside_the_data() {
        let data = [s(10.0, 100.0), s(30.0, 300.0)];
        let out = resample_over(&data, 0.0, 40.0, 5).unwrap();
        let values: Vec<f64> = out.iter().map(|p| p.value).collect();
        let interp: Vec<bool> = out.iter().map(|p| p.is_interpolated).collect();
        assert_eq!(values, vec![100.0, 100.0, 200.0, 300.0, 300.0]);
        assert_eq!(interp, vec![true, false, true, false, true]);
    }

    #[test]
    fn reversed_range_is_rejected() {
        assert_eq!(
            resample_over(&[s(0.0, 1.0)], 5.0, 2.0, 3),
            Err(SeriesError::InvalidRange { start: 5.0, end: 2.0 })
        );
    }

    #[test]
    fn degenerate_range_collapses_to_one_point() {
        let data = [s(0.0, 1.0), s(10.0, 2.0)];
        let out = resample_over(&data, 5.0, 5.0, 3).unwrap();
        assert_eq!(
            out,
            vec![SeriesPoint {
                t: 5.0,
                value: 1.5,
                is_interpolated: true,
            }]
        );
        let on_sample = resample_over(&data, 10.0, 10.0, 4).unwrap();
        assert_eq!(
            on_sample,
            vec![SeriesPoint {
                t: 10.0,
                value: 2.0,
                is_interpolated: false,
            }]
        );
    }

    #[test]
    fn one_point_grid_sits_at_the_range_start() {
        let data = [s(10.0, 100.0), s(30.0, 300.0)];
        let out = resample_over(&data, 20.0, 40.0, 1).unwrap();
        assert_eq!(out.len(), 1);
        assert_eq!(out[0].t, 20.0);
        assert_eq!(out[0].value, 200.0);
    }

    #[test]
    fn points_serialize_with_the_interpolation_flag() {
        let out = resample(&[s(0.0, 1.0), s(1.0, 2.0)], 3).unwrap();
        let json = serde_json::to_value(&out).unwrap();
        assert_eq!(json[1]["is_interpolated"], true);
        assert_eq!(json[1]["value"], 1.5);
    }
}
