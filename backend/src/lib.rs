//! # Planner Timeline
//!
//! Campaign timeline layout engine for the business planning dashboard.
//!
//! Given the campaigns a practice has scheduled, the engine decides where each
//! one is drawn: which lane (row) it occupies and which horizontal slice of the
//! half-year panel it covers. The rendering layer turns those lanes and
//! fractions into pixels.
//!
//! ## Features
//!
//! - **Lane Assignment**: greedy interval partitioning with the minimum number of lanes
//! - **Position Mapping**: dates to `[0, 1]` fractions, month-equal or day-proportional
//! - **Half-Year Split**: campaigns crossing the mid-year boundary become two entries
//! - **Grouping**: independent panels per `(group, half)` bucket
//!
//! ## Architecture
//!
//! - [`models`]: input records, calendar helpers and output types
//! - [`services`]: the layout pipeline
//! - [`config`]: TOML/environment settings
//! - [`io`]: campaign JSON loading
//! - [`api`]: flat re-export of the public surface
//!
//! Every layout pass is a pure function of its input: no I/O, no shared state.
//!
//! ```
//! use chrono::NaiveDate;
//! use planner_timeline::api::{build_group_layout, GroupId, Half, ScaleMode, ScheduledCampaign};
//!
//! let d = |m, day| NaiveDate::from_ymd_opt(2025, m, day).unwrap();
//! let campaigns = vec![
//!     ScheduledCampaign::new("a", "practice-1", d(1, 1), d(1, 10)),
//!     ScheduledCampaign::new("b", "practice-1", d(1, 5), d(1, 20)),
//! ];
//! let layout = build_group_layout(&campaigns, Some(d(6, 30)), ScaleMode::Equal).unwrap();
//! let panel = layout.bucket(&GroupId::new("practice-1"), Half::H1).unwrap();
//! assert_eq!(panel.lane_count(), 2);
//! ```

pub mod api;
pub mod config;
pub mod error;
pub mod io;
pub mod models;
pub mod services;
