//! Raw dataset records and boundary validation.
//!
//! The content layer ships datasets as JSON rows. This crate owns the wire
//! shapes (`EventRecord`), validates them exactly once at the boundary, and
//! hands the engines immutable, well-formed values (`RawEvent`). Malformed
//! rows fail fast with a typed error instead of leaking into layout math.

pub mod event;
pub mod record;

pub use event::*;
pub use record::*;

/// Errors raised while validating raw dataset rows.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DatasetError {
    /// Row has no label (or only whitespace).
    EmptyLabel { index: usize },
    /// Row carries neither a date nor a start/end range.
    MissingWhen { label: String },
    /// Row carries both a date and a range.
    AmbiguousWhen { label: String },
    /// Row carries only one half of a start/end range.
    HalfRange { label: String },
    /// Range ends before it starts.
    ReversedRange { label: String },
    /// Magnitude is NaN or infinite.
    NonFiniteMagnitude { label: String },
}

impl std::fmt::Display for DatasetError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            DatasetError::EmptyLabel { index } => {
                write!(f, "record {index} has an empty label")
            }
            DatasetError::MissingWhen { label } => {
                write!(f, "record '{label}' has neither a date nor a range")
            }
            DatasetError::AmbiguousWhen { label } => {
                write!(f, "record '{label}' has both a date and a range")
            }
            DatasetError::HalfRange { label } => {
                write!(f, "record '{label}' has only one end of its range")
            }
            DatasetError::ReversedRange { label } => {
                write!(f, "record '{label}' has a range that ends before it starts")
            }
            DatasetError::NonFiniteMagnitude { label } => {
                write!(f, "record '{label}' has a non-finite magnitude")
            }
        }
    }
}

impl std::error::Error for DatasetError {}
