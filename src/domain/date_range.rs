use chrono::{Days, NaiveDate, NaiveDateTime, NaiveTime};
use serde::Serialize;

/// An inclusive range of calendar days used to restrict the order table.
///
/// An inverted range (start after end) is allowed and selects nothing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct DateRange {
    pub start: NaiveDate,
    pub end: NaiveDate,
}

impl DateRange {
    pub fn new(start: NaiveDate, end: NaiveDate) -> Self {
        Self { start, end }
    }

    /// Widens the range by `days` on both sides, saturating at the calendar limits.
    pub fn padded(self, days: u64) -> Self {
        let days = Days::new(days);
        Self {
            start: self.start.checked_sub_days(days).unwrap_or(NaiveDate::MIN),
            end: self.end.checked_add_days(days).unwrap_or(NaiveDate::MAX),
        }
    }

    pub fn is_inverted(&self) -> bool {
        self.start > self.end
    }

    /// First instant inside the range.
    pub fn lower_bound(&self) -> NaiveDateTime {
        self.start.and_time(NaiveTime::MIN)
    }

    /// First instant after the range, or `None` when the range ends on the last
    /// representable day.
    pub fn upper_bound_exclusive(&self) -> Option<NaiveDateTime> {
        self.end.succ_opt().map(|day| day.and_time(NaiveTime::MIN))
    }
}
