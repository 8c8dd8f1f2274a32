//! # Temporal Spans
//!
//! The registry wire format speaks in calendar dates, so titles, contributor
//! positions, and organisation roles all carry a [`TemporalSpan`]: a start
//! date with an optional end date, where a missing end means "currently
//! active".
//!
//! "Now" is never read from a clock inside this crate. Activity checks take
//! the reference date as a parameter, which keeps the compatibility checker
//! a deterministic function of its inputs.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// A date interval with an optional open end.
///
/// Both bounds are inclusive: a span is active on its start date and, when
/// closed, on its end date.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct TemporalSpan {
    /// First day the span is in effect.
    pub start: NaiveDate,
    /// Last day the span is in effect; `None` means open-ended.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub end: Option<NaiveDate>,
}

impl TemporalSpan {
    /// A span with both bounds.
    pub fn closed(start: NaiveDate, end: NaiveDate) -> Self {
        Self {
            start,
            end: Some(end),
        }
    }

    /// An open-ended span.
    pub fn open(start: NaiveDate) -> Self {
        Self { start, end: None }
    }

    /// Whether the span is in effect on the given date.
    pub fn is_active_at(&self, date: NaiveDate) -> bool {
        self.start <= date && self.end.map_or(true, |end| end >= date)
    }

    /// Whether the span has no end date.
    pub fn is_open(&self) -> bool {
        self.end.is_none()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn day(n: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 1, 1).unwrap() + chrono::Days::new(n as u64)
    }

    #[test]
    fn closed_span_active_inside_bounds() {
        let span = TemporalSpan::closed(day(0), day(5));
        assert!(span.is_active_at(day(0)));
        assert!(span.is_active_at(day(3)));
        assert!(span.is_active_at(day(5)));
    }

    #[test]
    fn closed_span_inactive_outside_bounds() {
        let span = TemporalSpan::closed(day(1), day(5));
        assert!(!span.is_active_at(day(0)));
        assert!(!span.is_active_at(day(6)));
    }

    #[test]
    fn open_span_active_from_start_onwards() {
        let span = TemporalSpan::open(day(2));
        assert!(!span.is_active_at(day(1)));
        assert!(span.is_active_at(day(2)));
        assert!(span.is_active_at(day(400)));
    }

    #[test]
    fn serde_omits_open_end() {
        let json = serde_json::to_string(&TemporalSpan::open(day(0))).unwrap();
        assert_eq!(json, r#"{"start":"2024-01-01"}"#);
    }

    #[test]
    fn serde_roundtrip() {
        let span = TemporalSpan::closed(day(0), day(9));
        let json = serde_json::to_string(&span).unwrap();
        let parsed: TemporalSpan = serde_json::from_str(&json).unwrap();
        assert_eq!(span, parsed);
    }
}
