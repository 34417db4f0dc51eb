//! Timeline layout services.
//!
//! Leaves first: [`interval`] normalizes campaigns into half-open day ranges,
//! [`lanes`] partitions them into non-overlapping lanes, [`position`] maps dates
//! to horizontal fractions, [`splitter`] cuts campaigns at the half-year
//! boundary, and [`layout`] drives all of them per `(group, half)` bucket.

pub mod interval;
pub mod lanes;
pub mod layout;
pub mod position;
pub mod splitter;


pub use interval::{to_interval, Interval};
pub use lanes::{assign_lanes, collect_lanes, Lane};
pub use layout::{build_group_layout, build_layout};
pub use position::{date_fraction, map_position, map_position_in_range, month_ticks};
pub use splitter::{split_at_boundary, HalfYearBoundary};
