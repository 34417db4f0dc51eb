#![allow(dead_code)]

use std::collections::HashSet;
use std::sync::Mutex;

use chrono::NaiveDate;
use planner_timeline::models::ScheduledCampaign;
use planner_timeline::services::Interval;

static ENV_LOCK: Mutex<()> = Mutex::new(());

pub fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).expect("valid test date")
}

/// June 30 of `year`: H1 is January–June, H2 is July–December.
pub fn mid_year(year: i32) -> Option<NaiveDate> {
    Some(date(year, 6, 30))
}

pub fn campaign(id: &str, group: &str, start: NaiveDate, end: NaiveDate) -> ScheduledCampaign {
    ScheduledCampaign::new(id, group, start, end)
        .with_label(format!("Campaign {}", id))
        .with_status("scheduled")
}

/// Sweep-line maximum number of intervals active on the same day.
pub fn max_overlap(intervals: &[Interval]) -> usize {
    let mut events: Vec<(i64, i32)> = intervals
        .iter()
        .flat_map(|iv| [(iv.start().value(), 1), (iv.end_exclusive().value(), -1)])
        .collect();
    // ends sort before starts on the same instant, so touching intervals never count twice
    events.sort();
    let mut active = 0i32;
    let mut best = 0i32;
    for (_, delta) in events {
        active += delta;
        best = best.max(active);
    }
    best as usize
}

/// Runs `f` with environment variables temporarily modified.
///
/// This is panic-safe (restores variables on unwind) and also serializes access to
/// process-global env vars to avoid flaky tests when Rust runs tests in parallel.
///
/// `changes` is a list of `(key, value)` pairs:
/// - `Some(v)` sets the variable to `v`
/// - `None` removes the variable
pub fn with_scoped_env<F, R>(changes: &[(&str, Option<&str>)], f: F) -> R
where
    F: FnOnce() -> R,
{
    let _lock = ENV_LOCK.lock().unwrap_or_else(|poisoned| poisoned.into_inner());
    let _guard = ScopedEnv::new(changes);
    f()
}

struct ScopedEnv {
    snapshot: Vec<(String, Option<String>)>,
}

impl ScopedEnv {
    fn new(changes: &[(&str, Option<&str>)]) -> Self {
        let keys: HashSet<&str> = changes.iter().map(|(k, _)| *k).collect();
        let snapshot = keys
            .into_iter()
            .map(|k| (k.to_string(), std::env::var(k).ok()))
            .collect::<Vec<_>>();

        for (k, v) in changes {
            match v {
                Some(val) => std::env::set_var(k, val),
                None => std::env::remove_var(k),
            }
        }

        Self { snapshot }
    }
}

impl Drop for ScopedEnv {
    fn drop(&mut self) {
        for (k, v) in self.snapshot.drain(..) {
            match v {
                Some(val) => std::env::set_var(&k, val),
                None => std::env::remove_var(&k),
            }
        }
    }
}
