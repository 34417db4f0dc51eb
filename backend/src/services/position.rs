//! Date → horizontal fraction mapping.
//!
//! Two scale models:
//!
//! - [`ScaleMode::Proportional`]: one continuous axis, every day has the same
//!   width. A February campaign in a January–June panel is `28/181` wide in a
//!   non-leap year.
//! - [`ScaleMode::Equal`]: every calendar month is one equal-width cell and a
//!   date sits at `(day - 1) / days_in_month` inside its cell, so a full month is
//!   always `1/N` wide whatever its day count.
//!
//! Fractions are clamped to `[0, 1]` and `left + width` never exceeds 1.

use chrono::{Datelike, NaiveDate};

use super::interval::Interval;
use crate::error::LayoutError;
use crate::models::{
    days_in_month, months_between, DateWindow, DayIndex, MonthTick, PositionResult, ScaleMode,
};

/// Offset of `date` from `origin` in month cells, including the intra-month part.
fn month_scale_offset(origin: NaiveDate, date: NaiveDate) -> f64 {
    months_between(origin, date) as f64 + intra_month(date) - intra_month(origin)
}

fn intra_month(date: NaiveDate) -> f64 {
    let dim = days_in_month(date.year(), date.month());
    if dim == 0 {
        return 0.0;
    }
    f64::from(date.day() - 1) / f64::from(dim)
}

/// Month-scale offset of the end of `date`, i.e. of the instant after its last moment.
fn day_end_offset(origin: NaiveDate, date: NaiveDate) -> f64 {
    let dim = days_in_month(date.year(), date.month());
    let day_width = if dim == 0 { 0.0 } else { 1.0 / f64::from(dim) };
    month_scale_offset(origin, date) + day_width
}

/// Fraction of the window at which the day boundary `instant` lies.
fn instant_fraction(instant: DayIndex, window: &DateWindow, mode: ScaleMode) -> f64 {
    let fraction = match mode {
        ScaleMode::Proportional => {
            let origin = DayIndex::from_date(window.start());
            origin.days_until(instant) as f64 / window.span_days() as f64
        }
        ScaleMode::Equal => {
            let total = day_end_offset(window.start(), window.end());
            if total <= 0.0 {
                return 0.0;
            }
            match instant.to_date() {
                Some(date) => month_scale_offset(window.start(), date) / total,
                // past chrono's date range: saturate on the side the instant lies
                None if instant >= window.end_exclusive() => 1.0,
                None => 0.0,
            }
        }
    };
    fraction.clamp(0.0, 1.0)
}

/// Place an interval inside a window.
pub fn map_position(interval: &Interval, window: &DateWindow, mode: ScaleMode) -> PositionResult {
    let left = instant_fraction(interval.start(), window, mode);
    let right = instant_fraction(interval.end_exclusive(), window, mode);
    PositionResult {
        owner_id: interval.owner_id().clone(),
        left_fraction: left,
        width_fraction: (right - left).max(0.0).min(1.0 - left),
    }
}

/// [`map_position`] over an inclusive `[range_start, range_end]` date range.
pub fn map_position_in_range(
    interval: &Interval,
    range_start: NaiveDate,
    range_end: NaiveDate,
    mode: ScaleMode,
) -> Result<PositionResult, LayoutError> {
    let window = DateWindow::new(range_start, range_end)?;
    Ok(map_position(interval, &window, mode))
}

/// Fraction at which the start of `date` lies, or `None` outside the window.
///
/// Used for single-day markers such as "today".
pub fn date_fraction(date: NaiveDate, window: &DateWindow, mode: ScaleMode) -> Option<f64> {
    if !window.contains(date) {
        return None;
    }
    Some(instant_fraction(DayIndex::from_date(date), window, mode))
}

/// One header cell per calendar month touched by the window.
///
/// Partial months at either edge are clipped to the window.
pub fn month_ticks(window: &DateWindow, mode: ScaleMode) -> Vec<MonthTick> {
    window
        .month_starts()
        .into_iter()
        .map(|first| {
            let last = NaiveDate::from_ymd_opt(
                first.year(),
                first.month(),
                days_in_month(first.year(), first.month()),
            )
            .unwrap_or(first);
            let start = DayIndex::from_date(first.max(window.start()));
            let end_exclusive = DayIndex::from_date(last.min(window.end())).succ();
            let left = instant_fraction(start, window, mode);
            let right = instant_fraction(end_exclusive, window, mode);
            MonthTick {
                label: first.format("%Y-%m").to_string(),
                left_fraction: left,
                width_fraction: (right - left).max(0.0),
            }
        })
        .collect()
}
