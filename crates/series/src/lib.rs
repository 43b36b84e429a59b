//! Time-series preparation for charts: resampling onto uniform grids,
//! summary statistics, and a span index for timeline scrubbing.

pub mod resample;
pub mod span_index;
pub mod summary;

pub use resample::{Sample, SeriesPoint, resample, resample_over};
pub use span_index::{EventInterval, EventSpanIndex};
pub use summary::{SeriesSummary, summarize};

/// Errors produced while preparing a series.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum SeriesError {
    /// The series has no samples.
    Empty,
    /// Sample `index` is earlier than its predecessor (or has a NaN time).
    Unordered { index: usize },
    /// A requested range with `end` before `start`.
    InvalidRange { start: f64, end: f64 },
}

impl std::fmt::Display for SeriesError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SeriesError::Empty => write!(f, "series has no samples"),
            SeriesError::Unordered { index } => {
                write!(f, "sample {index} is out of order")
            }
            SeriesError::InvalidRange { start, end } => {
                write!(f, "range {start}..{end} is reversed or not finite")
            }
        }
    }
}

impl std::error::Error for SeriesError {}
