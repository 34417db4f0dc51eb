//! Public API surface for the layout engine.
//!
//! This file consolidates the types a rendering layer needs: the input record,
//! the layout entry points and the serializable output.

pub use crate::config::{LayoutConfig, TimelineSettings};
pub use crate::error::LayoutError;
pub use crate::models::{
    BucketKey, BucketLayout, CampaignId, ClippedCampaign, DateWindow, GroupId, Half,
    LaneAssignment, LayoutEntry, LayoutResult, MonthTick, PositionResult, ScaleMode,
    ScheduledCampaign,
};
pub use crate::services::{
    assign_lanes, build_group_layout, build_layout, map_position, split_at_boundary,
    to_interval, HalfYearBoundary, Interval,
};
