//! Closed date intervals with an optionally unbounded upper end.
//!
//! Exclusive assignments cover `[from, to]` where `to` may be open-ended
//! ("until further notice"). The upper bound is a tagged union rather than
//! an `Option` so comparisons against the open end are explicit.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::error::CoreError;

/// Upper bound of a closed date interval.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum IntervalEnd {
    Bounded(NaiveDate),
    Unbounded,
}

impl IntervalEnd {
    /// True if this end lies on or after `date` (always true when unbounded).
    pub fn is_on_or_after(&self, date: NaiveDate) -> bool {
        match self {
            IntervalEnd::Bounded(end) => *end >= date,
            IntervalEnd::Unbounded => true,
        }
    }

    /// Convert back to the storage representation (`NULL` = unbounded).
    pub fn as_date(&self) -> Option<NaiveDate> {
        match self {
            IntervalEnd::Bounded(end) => Some(*end),
            IntervalEnd::Unbounded => None,
        }
    }
}

/// A closed date interval `[from, to]`, possibly open-ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DateInterval {
    pub from: NaiveDate,
    pub to: IntervalEnd,
}

impl DateInterval {
    /// Build an interval from its storage representation.
    ///
    /// Rejects `to < from` with `InvalidInterval`. A zero-length interval
    /// (`from == to`) is valid.
    pub fn new(from: NaiveDate, to: Option<NaiveDate>) -> Result<Self, CoreError> {
        if let Some(end) = to {
            if end < from {
                return Err(CoreError::InvalidInterval(format!(
                    "to_date {end} is before from_date {from}"
                )));
            }
        }
        Ok(Self {
            from,
            to: to.map_or(IntervalEnd::Unbounded, IntervalEnd::Bounded),
        })
    }

    /// Closed-interval intersection test.
    ///
    /// `A ∩ B ≠ ∅` iff `a1 <= (b2 or +∞)` and `b1 <= (a2 or +∞)`.
    pub fn overlaps(&self, other: &DateInterval) -> bool {
        other.to.is_on_or_after(self.from) && self.to.is_on_or_after(other.from)
    }
}
