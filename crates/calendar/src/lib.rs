//! Hijri calendar engine: mean-tabular date conversion, lunar phase, and
//! seasonal drift.
//!
//! Everything in this crate is derived from a single civil epoch and a single
//! mean synodic month, so all outputs are deterministic functions of their
//! inputs. Day-level results follow the arithmetic mean calendar and can sit
//! a day or two away from locally observed new moons; that is inherent in the
//! model, not a bug to correct per-region.

use chrono::NaiveDate;

pub mod hijri;
pub mod moment;
pub mod month;
pub mod phase;
pub mod rotation;

pub use hijri::{
    HIJRI_EPOCH_DAYS_CE, HijriDate, MEAN_HIJRI_YEAR, MEAN_SYNODIC_MONTH, month_length,
    to_gregorian, to_hijri,
};
pub use moment::{CalendarMoment, month_grid};
pub use month::HijriMonth;
pub use phase::{PhaseName, illuminated_fraction, phase_fraction};
pub use rotation::{MEAN_SOLAR_YEAR, rotation_offset_days};

/// Errors produced by the calendar engines.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CalendarError {
    /// Gregorian date precedes the Hijri epoch; the calendar is not
    /// extrapolated backwards.
    OutOfRange { date: NaiveDate },
    /// Hijri year before 1 AH, or a conversion that left the representable
    /// Gregorian range.
    InvalidYear { year: i32 },
    /// Hijri month outside 1..=12.
    InvalidMonth { month: u32 },
    /// Hijri day outside the month (day 0, or past the 29/30-day end).
    InvalidDay { year: i32, month: u32, day: u32 },
}

impl std::fmt::Display for CalendarError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            CalendarError::OutOfRange { date } => {
                write!(f, "date {date} precedes the Hijri epoch (622-07-19)")
            }
            CalendarError::InvalidYear { year } => {
                write!(f, "Hijri year {year} is outside the supported range")
            }
            CalendarError::InvalidMonth { month } => {
                write!(f, "Hijri month {month} is not in 1..=12")
            }
            CalendarError::InvalidDay { year, month, day } => {
                write!(f, "day {day} does not exist in Hijri month {year}-{month:02}")
            }
        }
    }
}

impl std::error::Error for CalendarError {}
