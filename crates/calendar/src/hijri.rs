//! Mean-tabular Hijri date arithmetic.
//!
//! Month `m` (counted from the epoch, zero-based) begins
//! `floor(m * MEAN_SYNODIC_MONTH)` whole days after 1 Muharram 1 AH. Both
//! conversion directions read the same month-start table, so
//! `to_hijri(to_gregorian(h)) == h` and `to_gregorian(to_hijri(d)) == d`
//! hold exactly for every date at or after the epoch.

use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Serialize};

use crate::CalendarError;

/// Mean synodic month in days.
pub const MEAN_SYNODIC_MONTH: f64 = 29.53059;

/// Mean Hijri year in days (twelve mean months, ~354.367).
pub const MEAN_HIJRI_YEAR: f64 = 12.0 * MEAN_SYNODIC_MONTH;

/// Day number of 1 Muharram 1 AH counted from 0001-01-01 CE (day 1):
/// Friday 19 July 622 in the proleptic Gregorian calendar.
pub const HIJRI_EPOCH_DAYS_CE: i64 = 227_015;

/// A Hijri calendar date. Fields are plain numbers; validity (month in
/// 1..=12, day within the month) is checked by the conversions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
pub struct HijriDate {
    pub year: i32,
    pub month: u32,
    pub day: u32,
}

impl HijriDate {
    pub fn new(year: i32, month: u32, day: u32) -> Self {
        HijriDate { year, month, day }
    }
}

impl std::fmt::Display for HijriDate {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:04}-{:02}-{:02} AH", self.year, self.month, self.day)
    }
}

/// Whole days from the epoch to the start of zero-based month `m`.
fn month_start(m: i64) -> i64 {
    (m as f64 * MEAN_SYNODIC_MONTH).floor() as i64
}

/// Zero-based month containing `day_offset` days after the epoch.
fn month_index_for(day_offset: i64) -> i64 {
    let mut m = (day_offset as f64 / MEAN_SYNODIC_MONTH).floor() as i64;
    // The float estimate can land one month off right at a boundary.
    while month_start(m + 1) <= day_offset {
        m += 1;
    }
    while m > 0 && month_start(m) > day_offset {
        m -= 1;
    }
    m
}

fn months_since_epoch(year: i32, month: u32) -> Result<i64, CalendarError> {
    if year < 1 {
        return Err(CalendarError::InvalidYear { year });
    }
    if !(1..=12).contains(&month) {
        return Err(CalendarError::InvalidMonth { month });
    }
    Ok((year as i64 - 1) * 12 + (month as i64 - 1))
}

/// Length of a Hijri month in days (29 or 30).
pub fn month_length(year: i32, month: u32) -> Result<u32, CalendarError> {
    let m = months_since_epoch(year, month)?;
    Ok((month_start(m + 1) - month_start(m)) as u32)
}

/// Convert a Gregorian date to its Hijri equivalent.
///
/// Dates before the epoch are rejected rather than extrapolated.
pub fn to_hijri(date: NaiveDate) -> Result<HijriDate, CalendarError> {
    let offset = date.num_days_from_ce() as i64 - HIJRI_EPOCH_DAYS_CE;
    if offset < 0 {
        return Err(CalendarError::OutOfRange { date });
    }
    let m = month_index_for(offset);
    Ok(HijriDate {
        year: (m / 12) as i32 + 1,
        month: (m % 12) as u32 + 1,
        day: (offset - month_start(m)) as u32 + 1,
    })
}

/// Convert a Hijri date back to the Gregorian calendar.
pub fn to_gregorian(hijri: HijriDate) -> Result<NaiveDate, CalendarError> {
    let m = months_since_epoch(hijri.year, hijri.month)?;
    let len = (month_start(m + 1) - month_start(m)) as u32;
    if hijri.day < 1 || hijri.day > len {
        return Err(CalendarError::InvalidDay {
            year: hijri.year,
            month: hijri.month,
            day: hijri.day,
        });
    }
    let days_ce = HIJRI_EPOCH_DAYS_CE + month_start(m) + hijri.day as i64 - 1;
    let days_ce = i32::try_from(days_ce).map_err(|_| CalendarError::InvalidYear {
        year: hijri.year,
    })?;
    NaiveDate::from_num_days_from_ce_opt(days_ce)
        .ok_or(CalendarError::InvalidYear { year: hijri.year })
}
