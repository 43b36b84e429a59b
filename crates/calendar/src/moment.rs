//! Combined calendar view of a single day, and day grids for month pages.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::CalendarError;
use crate::hijri::{HijriDate, month_length, to_gregorian, to_hijri};
use crate::month::HijriMonth;
use crate::phase::{PhaseName, illuminated_fraction, phase_fraction};

/// One day seen through both calendars plus its mean lunar phase. This is
/// the payload shape the rendering layers consume, so it serializes with
/// ISO dates and plain numbers.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CalendarMoment {
    pub hijri: HijriDate,
    pub gregorian: NaiveDate,
    pub phase_fraction: f64,
}

impl CalendarMoment {
    /// The moment for a Gregorian date at or after the epoch.
    pub fn at(date: NaiveDate) -> Result<Self, CalendarError> {
        Ok(CalendarMoment {
            hijri: to_hijri(date)?,
            gregorian: date,
            phase_fraction: phase_fraction(date)?,
        })
    }

    pub fn month(&self) -> Result<HijriMonth, CalendarError> {
        HijriMonth::from_number(self.hijri.month)
    }

    pub fn phase_name(&self) -> PhaseName {
        PhaseName::from_fraction(self.phase_fraction)
    }

    pub fn illuminated(&self) -> f64 {
        illuminated_fraction(self.phase_fraction)
    }
}

/// Every day of a Hijri month, in order, with dual dates and phase.
pub fn month_grid(year: i32, month: u32) -> Result<Vec<CalendarMoment>, CalendarError> {
    let len = month_length(year, month)?;
    let mut grid = Vec::with_capacity(len as usize);
    for day in 1..=len {
        let hijri = HijriDate::new(year, month, day);
        let gregorian = to_gregorian(hijri)?;
        grid.push(CalendarMoment {
            hijri,
            gregorian,
            phase_fraction: phase_fraction(gregorian)?,
        });
    }
    Ok(grid)
}
