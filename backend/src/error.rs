//! Error types for layout operations.
//!
//! Every failure is fatal for the whole batch: the engine never returns a
//! partially laid-out timeline, and nothing is retried internally.

use chrono::NaiveDate;

use crate::models::CampaignId;

/// Error type for timeline layout operations.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum LayoutError {
    /// A campaign ends before it starts.
    #[error("Invalid range for campaign {campaign_id}: end {end} precedes start {start}")]
    InvalidRange {
        campaign_id: CampaignId,
        start: NaiveDate,
        end: NaiveDate,
    },

    /// An interval whose exclusive end does not lie after its start.
    #[error("Empty interval for campaign {campaign_id}: [{start}, {end_exclusive})")]
    EmptyInterval {
        campaign_id: CampaignId,
        start: i64,
        end_exclusive: i64,
    },

    /// No half-year boundary was supplied.
    #[error("Missing half-year boundary date")]
    MissingBoundary,

    /// The campaign does not lie inside the calendar year of the boundary.
    #[error(
        "Boundary {boundary} is outside the year of campaign {campaign_id} ({start} to {end})"
    )]
    BoundaryOutsideYear {
        campaign_id: CampaignId,
        boundary: NaiveDate,
        start: NaiveDate,
        end: NaiveDate,
    },

    /// The boundary leaves the second half of the year empty.
    #[error("Invalid half-year boundary {boundary}: second half would be empty")]
    InvalidBoundary { boundary: NaiveDate },

    /// Two input records share the same campaign id.
    #[error("Duplicate campaign id {campaign_id}")]
    DuplicateCampaign { campaign_id: CampaignId },

    /// A mapping window whose end precedes its start.
    #[error("Invalid window: end {end} precedes start {start}")]
    InvalidWindow { start: NaiveDate, end: NaiveDate },

    /// Configuration could not be read, parsed or validated.
    #[error("Configuration error: {0}")]
    Configuration(String),
}

impl LayoutError {
    /// Stable machine-readable error code.
    pub fn code(&self) -> &'static str {
        match self {
            LayoutError::InvalidRange { .. } => "INVALID_RANGE",
            LayoutError::EmptyInterval { .. } => "EMPTY_INTERVAL",
            LayoutError::MissingBoundary => "MISSING_BOUNDARY",
            LayoutError::BoundaryOutsideYear { .. } => "BOUNDARY_OUTSIDE_YEAR",
            LayoutError::InvalidBoundary { .. } => "INVALID_BOUNDARY",
            LayoutError::DuplicateCampaign { .. } => "DUPLICATE_CAMPAIGN",
            LayoutError::InvalidWindow { .. } => "INVALID_WINDOW",
            LayoutError::Configuration(_) => "CONFIGURATION_ERROR",
        }
    }

    /// Campaign the error refers to, if any.
    pub fn campaign_id(&self) -> Option<&CampaignId> {
        match self {
            LayoutError::InvalidRange { campaign_id, .. }
            | LayoutError::EmptyInterval { campaign_id, .. }
            | LayoutError::BoundaryOutsideYear { campaign_id, .. }
            | LayoutError::DuplicateCampaign { campaign_id } => Some(campaign_id),
            _ => None,
        }
    }
}
