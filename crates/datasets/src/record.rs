//! Wire-shape rows as the content layer serializes them.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::DatasetError;
use crate::event::{EventWhen, RawEvent};

/// One event row from a dataset JSON document.
///
/// Exactly one of `date` or the `start`/`end` pair must be present; the rest
/// of the fields are optional annotations. Validation happens in
/// [`EventRecord::validate`], never implicitly.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct EventRecord {
    pub label: String,
    #[serde(default)]
    pub date: Option<NaiveDate>,
    #[serde(default)]
    pub start: Option<NaiveDate>,
    #[serde(default)]
    pub end: Option<NaiveDate>,
    #[serde(default)]
    pub magnitude: Option<f64>,
    #[serde(default)]
    pub category: Option<String>,
}

impl EventRecord {
    /// Validate this row into a [`RawEvent`].
    ///
    /// `index` is the row's position in the dataset, used for error context
    /// when the row has no usable label.
    pub fn validate(&self, index: usize) -> Result<RawEvent, DatasetError> {
        let label = self.label.trim();
        if label.is_empty() {
            return Err(DatasetError::EmptyLabel { index });
        }
        let label = label.to_string();

        let when = match (self.date, self.start, self.end) {
            (Some(_), Some(_), _) | (Some(_), _, Some(_)) => {
                return Err(DatasetError::AmbiguousWhen { label });
            }
            (Some(date), None, None) => EventWhen::At(date),
            (None, Some(start), Some(end)) => {
                if end < start {
                    return Err(DatasetError::ReversedRange { label });
                }
                EventWhen::Between { start, end }
            }
            (None, Some(_), None) | (None, None, Some(_)) => {
                return Err(DatasetError::HalfRange { label });
            }
            (None, None, None) => return Err(DatasetError::MissingWhen { label }),
        };

        if let Some(m) = self.magnitude
            && !m.is_finite()
        {
            return Err(DatasetError::NonFiniteMagnitude { label });
        }

        Ok(RawEvent {
            label,
            when,
            magnitude: self.magnitude,
            category: self.category.clone(),
        })
    }
}

/// Validate a whole dataset, failing on the first malformed row.
pub fn validate_events(records: &[EventRecord]) -> Result<Vec<RawEvent>, DatasetError> {
    records
        .iter()
        .enumerate()
        .map(|(i, r)| r.validate(i))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::{EventRecord, validate_events};
    use crate::DatasetError;
    use crate::event::EventWhen;
    use chrono::NaiveDate;
    use pretty_assertions::assert_eq;

    fn d(y: i32, m: u32, day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, day).unwrap()
    }

    #[test]
    fn single_date_row_validates() {
        let rec = EventRecord {
            label: "Fall of Granada".to_string(),
            date: Some(d(1492, 1, 2)),
            ..Default::default()
        };
        let event = rec.validate(0).unwrap();
        assert_eq!(event.when, EventWhen::At(d(1492, 1, 2)));
        assert_eq!(event.magnitude, None);
    }

    #[test]
    fn range_row_validates() {
        let rec = EventRecord {
            label: "Abbasid Caliphate".to_string(),
            start: Some(d(750, 1, 26)),
            end: Some(d(1258, 2, 13)),
            magnitude: Some(1.0),
            category: Some("dynasty".to_string()),
            ..Default::default()
        };
        let event = rec.validate(3).unwrap();
        assert_eq!(
            event.when,
            EventWhen::Between {
                start: d(750, 1, 26),
                end: d(1258, 2, 13),
            }
        );
    }

    #[test]
    fn reversed_range_is_rejected() {
        let rec = EventRecord {
            label: "oops".to_string(),
            start: Some(d(900, 1, 1)),
            end: Some(d(800, 1, 1)),
            ..Default::default()
        };
        assert_eq!(
            rec.validate(0),
            Err(DatasetError::ReversedRange {
                label: "oops".to_string()
            })
        );
    }

    #[test]
    fn date_and_range_together_are_ambiguous() {
        let rec = EventRecord {
            label: "both".to_string(),
            date: Some(d(800, 1, 1)),
            start: Some(d(800, 1, 1)),
            end: Some(d(801, 1, 1)),
            ..Default::default()
        };
        assert!(matches!(
            rec.validate(0),
            Err(DatasetError::AmbiguousWhen { .. })
        ));
    }

    #[test]
    fn lone_start_is_half_a_range() {
        let rec = EventRecord {
            label: "half".to_string(),
            start: Some(d(800, 1, 1)),
            ..Default::default()
        };
        assert!(matches!(rec.validate(0), Err(DatasetError::HalfRange { .. })));
    }

    #[test]
    fn whitespace_label_is_empty() {
        let rec = EventRecord {
            label: "   ".to_string(),
            date: Some(d(800, 1, 1)),
            ..Default::default()
        };
        assert_eq!(rec.validate(7), Err(DatasetError::EmptyLabel { index: 7 }));
    }

    #[test]
    fn non_finite_magnitude_is_rejected() {
        let rec = EventRecord {
            label: "bad".to_string(),
            date: Some(d(800, 1, 1)),
            magnitude: Some(f64::NAN),
            ..Default::default()
        };
        assert!(matches!(
            rec.validate(0),
            Err(DatasetError::NonFiniteMagnitude { .. })
        ));
    }

    #[test]
    fn records_round_trip_through_json() {
        let json = r#"[
            {"label": "Battle of Talas", "date": "0751-07-01"},
            {"label": "Umayyad Caliphate", "start": "0661-01-01", "end": "0750-01-25", "category": "dynasty"}
        ]"#;
        let records: Vec<EventRecord> = serde_json::from_str(json).unwrap();
        let events = validate_events(&records).unwrap();
        assert_eq!(events.len(), 2);
        assert_eq!(events[0].label, "Battle of Talas");
        assert!(events[1].when.contains(d(700, 6, 1)));
    }

    #[test]
    fn first_bad_row_aborts_the_batch() {
        let records = vec![
            EventRecord {
                label: "good".to_string(),
                date: Some(d(800, 1, 1)),
                ..Default::default()
            },
            EventRecord {
                label: String::new(),
                date: Some(d(801, 1, 1)),
                ..Default::default()
            },
        ];
        assert_eq!(
            validate_events(&records),
            Err(DatasetError::EmptyLabel { index: 1 })
        );
    }
}
