//! Population-density aggregation and choropleth classification.

pub mod bin;
pub mod classify;

pub use bin::{DensityCell, RegionSample, bin_by_cells, bin_by_region};
pub use classify::{ClassMethod, class_breaks, class_of};

/// Errors produced while aggregating or classifying density data.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DensityError {
    /// No samples to aggregate or no values to classify.
    Empty,
    /// A sample with a negative or non-finite population, or an area that
    /// is not a positive finite number.
    InvalidSample { index: usize, region_id: String },
    /// The cell resolver could not place this region.
    Unassignable { region_id: String },
    /// Classification needs at least one class.
    InvalidClassCount { classes: usize },
}

impl std::fmt::Display for DensityError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            DensityError::Empty => write!(f, "no density samples"),
            DensityError::InvalidSample { index, region_id } => {
                write!(f, "sample {index} for region {region_id:?} has an invalid measurement")
            }
            DensityError::Unassignable { region_id } => {
                write!(f, "region {region_id:?} does not resolve to a cell")
            }
            DensityError::InvalidClassCount { classes } => {
                write!(f, "cannot classify into {classes} classes")
            }
        }
    }
}

impl std::error::Error for DensityError {}
