//! Mean lunar phase, anchored to the calendar epoch.
//!
//! Phase is the fractional position inside a mean synodic month whose day
//! zero is 1 Muharram 1 AH. It tracks the calendar's own lunation, not an
//! astronomical ephemeris, so month starts always sit at (or within a day
//! of) fraction zero.

use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Serialize};

use crate::CalendarError;
use crate::hijri::{HIJRI_EPOCH_DAYS_CE, MEAN_SYNODIC_MONTH};

/// Position within the mean lunation for `date`, in `[0, 1)`.
///
/// 0 is the mean new moon, 0.5 the mean full moon.
pub fn phase_fraction(date: NaiveDate) -> Result<f64, CalendarError> {
    let offset = date.num_days_from_ce() as i64 - HIJRI_EPOCH_DAYS_CE;
    if offset < 0 {
        return Err(CalendarError::OutOfRange { date });
    }
    Ok((offset as f64).rem_euclid(MEAN_SYNODIC_MONTH) / MEAN_SYNODIC_MONTH)
}

/// Fraction of the lunar disc lit at phase `fraction`: 0 at new, 1 at full.
pub fn illuminated_fraction(fraction: f64) -> f64 {
    (1.0 - (std::f64::consts::TAU * fraction).cos()) / 2.0
}

/// The eight conventional phase names.
///
/// Each name owns a 1/8-wide window of the lunation centred on its nominal
/// fraction, so `New` covers `[-1/16, 1/16)` around zero.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
pub enum PhaseName {
    New,
    WaxingCrescent,
    FirstQuarter,
    WaxingGibbous,
    Full,
    WaningGibbous,
    LastQuarter,
    WaningCrescent,
}

impl PhaseName {
    const ALL: [PhaseName; 8] = [
        PhaseName::New,
        PhaseName::WaxingCrescent,
        PhaseName::FirstQuarter,
        PhaseName::WaxingGibbous,
        PhaseName::Full,
        PhaseName::WaningGibbous,
        PhaseName::LastQuarter,
        PhaseName::WaningCrescent,
    ];

    pub fn from_fraction(fraction: f64) -> PhaseName {
        let shifted = (fraction.rem_euclid(1.0) + 1.0 / 16.0).rem_euclid(1.0);
        // rem_euclid can return the full period for values a hair below it.
        let idx = ((shifted * 8.0).floor() as usize).min(7);
        Self::ALL[idx]
    }

    pub fn label(self) -> &'static str {
        match self {
            PhaseName::New => "New Moon",
            PhaseName::WaxingCrescent => "Waxing Crescent",
            PhaseName::FirstQuarter => "First Quarter",
            PhaseName::WaxingGibbous => "Waxing Gibbous",
            PhaseName::Full => "Full Moon",
            PhaseName::WaningGibbous => "Waning Gibbous",
            PhaseName::LastQuarter => "Last Quarter",
            PhaseName::WaningCrescent => "Waning Crescent",
        }
    }
}

impl std::fmt::Display for PhaseName {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}
