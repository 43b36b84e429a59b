//! Validated event values handed to the engines.

use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Serialize};

/// When an event happened: a single day or an inclusive day range.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum EventWhen {
    At(NaiveDate),
    Between { start: NaiveDate, end: NaiveDate },
}

impl EventWhen {
    pub fn start(&self) -> NaiveDate {
        match self {
            EventWhen::At(d) => *d,
            EventWhen::Between { start, .. } => *start,
        }
    }

    pub fn end(&self) -> NaiveDate {
        match self {
            EventWhen::At(d) => *d,
            EventWhen::Between { end, .. } => *end,
        }
    }

    /// Whether `date` falls inside this event (endpoints inclusive).
    pub fn contains(&self, date: NaiveDate) -> bool {
        date >= self.start() && date <= self.end()
    }

    /// The event's extent as decimal years, for series/timeline axes.
    pub fn year_span(&self) -> (f64, f64) {
        (decimal_year(self.start()), decimal_year(self.end()))
    }
}

/// A validated dataset event. Immutable once built; owned by the page that
/// fetched the dataset.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RawEvent {
    pub label: String,
    pub when: EventWhen,
    pub magnitude: Option<f64>,
    pub category: Option<String>,
}

/// Position of a date within the timeline as a decimal year.
///
/// Jan 1 maps to the whole year exactly; the fraction advances by one day of
/// that year's length per day, so Dec 31 sits just below the next year.
pub fn decimal_year(date: NaiveDate) -> f64 {
    let days_in_year = if date.leap_year() { 366.0 } else { 365.0 };
    date.year() as f64 + (date.ordinal() as f64 - 1.0) / days_in_year
}
