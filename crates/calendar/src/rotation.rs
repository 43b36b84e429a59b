//! Seasonal drift of the Hijri year against the solar calendar.
//!
//! A Hijri year is ~10.9 days shorter than a mean solar year, so each new
//! year begins earlier in the seasons than the last and the cycle closes
//! after roughly 33 Hijri years. The offset here is measured in days of the
//! mean solar year, from actual whole-day month starts rather than the mean
//! year length, so it carries the same day-level granularity as the dates.

use crate::CalendarError;
use crate::hijri::MEAN_SYNODIC_MONTH;

/// Mean Gregorian solar year in days.
pub const MEAN_SOLAR_YEAR: f64 = 365.2425;

/// How many days earlier in the solar year `hijri_year` begins than year
/// 1 AH did, in `[0, MEAN_SOLAR_YEAR)`. Year 1 maps to exactly 0.
pub fn rotation_offset_days(hijri_year: i32) -> Result<f64, CalendarError> {
    if hijri_year < 1 {
        return Err(CalendarError::InvalidYear { year: hijri_year });
    }
    let months = (hijri_year as i64 - 1) * 12;
    let elapsed = (months as f64 * MEAN_SYNODIC_MONTH).floor();
    Ok((-elapsed).rem_euclid(MEAN_SOLAR_YEAR))
}
