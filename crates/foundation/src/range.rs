//! Inclusive value ranges for axis scaling and bounds checks.

/// Inclusive [min, max] over a set of values.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct ValueRange {
    pub min: f64,
    pub max: f64,
}

impl ValueRange {
    /// A range containing exactly one value.
    pub fn single(v: f64) -> Self {
        Self { min: v, max: v }
    }

    /// Grow the range to include `v`.
    pub fn extend(&mut self, v: f64) {
        self.min = self.min.min(v);
        self.max = self.max.max(v);
    }

    /// Range over a slice; `None` for an empty slice.
    pub fn from_values(values: &[f64]) -> Option<Self> {
        let mut iter = values.iter();
        let mut range = Self::single(*iter.next()?);
        for &v in iter {
            range.extend(v);
        }
        Some(range)
    }

    pub fn width(&self) -> f64 {
        self.max - self.min
    }

    pub fn contains(&self, v: f64) -> bool {
        v >= self.min && v <= self.max
    }
}
