use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Serialize};

use crate::error::LayoutError;

/// Integer day instant on the proleptic Gregorian calendar.
/// Day 1 = 0001-01-01 (same origin as `chrono`'s `num_days_from_ce`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct DayIndex(i64);

impl DayIndex {
    /// Create a new day index.
    pub fn new(v: i64) -> Self {
        Self(v)
    }

    /// Raw day count.
    pub fn value(&self) -> i64 {
        self.0
    }

    /// Day index of a calendar date.
    pub fn from_date(date: NaiveDate) -> Self {
        Self(i64::from(date.num_days_from_ce()))
    }

    /// Convert back to a calendar date, `None` outside chrono's date range.
    pub fn to_date(&self) -> Option<NaiveDate> {
        i32::try_from(self.0)
            .ok()
            .and_then(NaiveDate::from_num_days_from_ce_opt)
    }

    /// The following day.
    pub fn succ(&self) -> Self {
        Self(self.0 + 1)
    }

    /// Signed number of days from `self` to `later`.
    pub fn days_until(&self, later: DayIndex) -> i64 {
        later.0 - self.0
    }
}

impl From<NaiveDate> for DayIndex {
    fn from(date: NaiveDate) -> Self {
        DayIndex::from_date(date)
    }
}

/// Number of days in `month` (1-12) of `year`, leap years included.
/// Returns 0 for a month outside 1-12.
pub fn days_in_month(year: i32, month: u32) -> u32 {
    (28..=31)
        .rev()
        .find(|&day| NaiveDate::from_ymd_opt(year, month, day).is_some())
        .unwrap_or(0)
}

/// Months elapsed since year 0, so consecutive calendar months differ by one.
pub fn month_ordinal(date: NaiveDate) -> i64 {
    i64::from(date.year()) * 12 + i64::from(date.month0())
}

/// Signed number of month boundaries between the months of `from` and `to`.
pub fn months_between(from: NaiveDate, to: NaiveDate) -> i64 {
    month_ordinal(to) - month_ordinal(from)
}

/// First and last day of `year`.
pub fn year_bounds(year: i32) -> Option<(NaiveDate, NaiveDate)> {
    Some((
        NaiveDate::from_ymd_opt(year, 1, 1)?,
        NaiveDate::from_ymd_opt(year, 12, 31)?,
    ))
}

/// Inclusive calendar-date range used as the horizontal extent of one panel.
///
/// Invariant: `start <= end`, enforced on construction and on deserialization.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "RawDateWindow")]
pub struct DateWindow {
    start: NaiveDate,
    end: NaiveDate,
}

#[derive(Deserialize)]
struct RawDateWindow {
    start: NaiveDate,
    end: NaiveDate,
}

impl TryFrom<RawDateWindow> for DateWindow {
    type Error = LayoutError;

    fn try_from(raw: RawDateWindow) -> Result<Self, Self::Error> {
        DateWindow::new(raw.start, raw.end)
    }
}

impl DateWindow {
    /// Create a window; `end` must not precede `start`.
    pub fn new(start: NaiveDate, end: NaiveDate) -> Result<Self, LayoutError> {
        if end < start {
            return Err(LayoutError::InvalidWindow { start, end });
        }
        Ok(Self { start, end })
    }

    /// First day of the window.
    pub fn start(&self) -> NaiveDate {
        self.start
    }

    /// Last day of the window (inclusive).
    pub fn end(&self) -> NaiveDate {
        self.end
    }

    /// Number of calendar days covered (end inclusive).
    pub fn span_days(&self) -> i64 {
        (self.end - self.start).num_days() + 1
    }

    /// Exclusive end of the window as a day instant.
    pub fn end_exclusive(&self) -> DayIndex {
        DayIndex::from_date(self.end).succ()
    }

    pub fn contains(&self, date: NaiveDate) -> bool {
        self.start <= date && date <= self.end
    }

    /// `true` when the inclusive range `[start, end]` lies entirely inside the window.
    pub fn covers(&self, start: NaiveDate, end: NaiveDate) -> bool {
        self.contains(start) && self.contains(end)
    }

    /// Number of calendar months touched by the window.
    pub fn month_count(&self) -> i64 {
        months_between(self.start, self.end) + 1
    }

    /// First day of every calendar month touched by the window, in order.
    pub fn month_starts(&self) -> Vec<NaiveDate> {
        let mut months = Vec::with_capacity(self.month_count().max(0) as usize);
        let mut cursor = NaiveDate::from_ymd_opt(self.start.year(), self.start.month(), 1);
        while let Some(first) = cursor {
            if first > self.end {
                break;
            }
            months.push(first);
            cursor = first.checked_add_months(chrono::Months::new(1));
        }
        months
    }

    /// `YYYY-MM` label for every month touched by the window.
    pub fn month_labels(&self) -> Vec<String> {
        self.month_starts()
            .into_iter()
            .map(|d| d.format("%Y-%m").to_string())
            .collect()
    }
}

#[cfg(test)]
#[path = "time_tests.rs"]
mod time_tests;
