//! Aggregation of per-region samples into density cells.
//!
//! Density is always recomputed from summed population over summed area.
//! Averaging the per-sample densities would weight a hamlet the same as a
//! metropolis, which is exactly the distortion a choropleth must avoid.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::DensityError;

/// One population observation for a named region.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RegionSample {
    pub region_id: String,
    pub population: f64,
    pub area_km2: f64,
}

/// An aggregated cell: every sample that mapped to `region_id`, with the
/// density derived from the sums.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DensityCell {
    pub region_id: String,
    pub density: f64,
    pub population: f64,
    pub area_km2: f64,
    pub sample_count: usize,
}

fn check(sample: &RegionSample, index: usize) -> Result<(), DensityError> {
    let pop_ok = sample.population.is_finite() && sample.population >= 0.0;
    let area_ok = sample.area_km2.is_finite() && sample.area_km2 > 0.0;
    if !pop_ok || !area_ok {
        return Err(DensityError::InvalidSample {
            index,
            region_id: sample.region_id.clone(),
        });
    }
    Ok(())
}

#[derive(Default)]
struct Acc {
    population: f64,
    area_km2: f64,
    sample_count: usize,
}

fn finish(cells: BTreeMap<String, Acc>) -> Vec<DensityCell> {
    cells
        .into_iter()
        .map(|(region_id, acc)| DensityCell {
            region_id,
            density: acc.population / acc.area_km2,
            population: acc.population,
            area_km2: acc.area_km2,
            sample_count: acc.sample_count,
        })
        .collect()
}

/// Aggregate samples by their own region id.
///
/// Ordering contract:
/// - cells come out in ascending `region_id` order.
/// - the cell `sample_count`s sum to the number of input samples.
pub fn bin_by_region(samples: &[RegionSample]) -> Result<Vec<DensityCell>, DensityError> {
    if samples.is_empty() {
        return Err(DensityError::Empty);
    }
    let mut cells: BTreeMap<String, Acc> = BTreeMap::new();
    for (index, sample) in samples.iter().enumerate() {
        check(sample, index)?;
        let acc = cells.entry(sample.region_id.clone()).or_default();
        acc.population += sample.population;
        acc.area_km2 += sample.area_km2;
        acc.sample_count += 1;
    }
    Ok(finish(cells))
}

/// Aggregate samples into coarser cells chosen by `resolver` (a grid id, a
/// province, an era bucket). A sample the resolver cannot place fails the
/// whole aggregation; partial maps mislead more than missing ones.
///
/// The same ordering contract as [`bin_by_region`] applies, keyed by the
/// resolved cell id.
pub fn bin_by_cells(
    samples: &[RegionSample],
    resolver: impl Fn(&RegionSample) -> Option<String>,
) -> Result<Vec<DensityCell>, DensityError> {
    if samples.is_empty() {
        return Err(DensityError::Empty);
    }
    let mut cells: BTreeMap<String, Acc> = BTreeMap::new();
    for (index, sample) in samples.iter().enumerate() {
        check(sample, index)?;
        let cell_id = resolver(sample).ok_or_else(|| DensityError::Unassignable {
            region_id: sample.region_id.clone(),
        })?;
        let acc = cells.entry(cell_id).or_default();
        acc.population += sample.population;
        acc.area_km2 += sample.area_km2;
        acc.sample_count += 1;
    }
    Ok(finish(cells))
}
