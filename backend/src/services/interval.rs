//! Half-open day intervals derived from scheduled campaigns.
//!
//! Calendar ranges are inclusive; intervals are `[start, end_exclusive)` with
//! `end_exclusive = end_date + 1 day`. That conversion happens only here, so lane
//! assignment and position mapping agree on what "touching" means.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::error::LayoutError;
use crate::models::{CampaignId, ClippedCampaign, DayIndex, ScheduledCampaign};

/// Half-open time range `[start, end_exclusive)` in whole days.
///
/// Invariant: `start < end_exclusive`, enforced on construction and on
/// deserialization.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "RawInterval")]
pub struct Interval {
    owner_id: CampaignId,
    start: DayIndex,
    end_exclusive: DayIndex,
}

#[derive(Deserialize)]
struct RawInterval {
    owner_id: CampaignId,
    start: DayIndex,
    end_exclusive: DayIndex,
}

impl TryFrom<RawInterval> for Interval {
    type Error = LayoutError;

    fn try_from(raw: RawInterval) -> Result<Self, Self::Error> {
        Interval::new(raw.owner_id, raw.start, raw.end_exclusive)
    }
}

impl Interval {
    /// Build an interval from raw day instants.
    pub fn new(
        owner_id: CampaignId,
        start: DayIndex,
        end_exclusive: DayIndex,
    ) -> Result<Self, LayoutError> {
        if end_exclusive <= start {
            return Err(LayoutError::EmptyInterval {
                campaign_id: owner_id,
                start: start.value(),
                end_exclusive: end_exclusive.value(),
            });
        }
        Ok(Self {
            owner_id,
            start,
            end_exclusive,
        })
    }

    /// Build an interval from an inclusive date range.
    pub fn from_dates(
        owner_id: CampaignId,
        start_date: NaiveDate,
        end_date: NaiveDate,
    ) -> Result<Self, LayoutError> {
        if end_date < start_date {
            return Err(LayoutError::InvalidRange {
                campaign_id: owner_id,
                start: start_date,
                end: end_date,
            });
        }
        Ok(Self {
            owner_id,
            start: DayIndex::from_date(start_date),
            end_exclusive: DayIndex::from_date(end_date).succ(),
        })
    }

    pub fn owner_id(&self) -> &CampaignId {
        &self.owner_id
    }

    pub fn start(&self) -> DayIndex {
        self.start
    }

    pub fn end_exclusive(&self) -> DayIndex {
        self.end_exclusive
    }

    /// Length in days; at least 1.
    pub fn len_days(&self) -> i64 {
        self.start.days_until(self.end_exclusive)
    }

    /// `true` when the two intervals share at least one day.
    ///
    /// Intervals where one ends exactly where the other starts only touch.
    pub fn overlaps(&self, other: &Interval) -> bool {
        self.start < other.end_exclusive && other.start < self.end_exclusive
    }

    /// First covered calendar day, `None` outside chrono's date range.
    pub fn start_date(&self) -> Option<NaiveDate> {
        self.start.to_date()
    }

    /// Last covered calendar day (inclusive).
    pub fn end_date(&self) -> Option<NaiveDate> {
        DayIndex::new(self.end_exclusive.value() - 1).to_date()
    }
}

/// Check that a campaign's range is well-formed without building an interval.
pub fn validate_range(campaign: &ScheduledCampaign) -> Result<(), LayoutError> {
    if campaign.end_date < campaign.start_date {
        return Err(LayoutError::InvalidRange {
            campaign_id: campaign.id.clone(),
            start: campaign.start_date,
            end: campaign.end_date,
        });
    }
    Ok(())
}

/// Normalize a scheduled campaign into a half-open interval.
///
/// Fails with [`LayoutError::InvalidRange`] if the campaign ends before it starts;
/// dates are never swapped.
pub fn to_interval(campaign: &ScheduledCampaign) -> Result<Interval, LayoutError> {
    Interval::from_dates(campaign.id.clone(), campaign.start_date, campaign.end_date)
}

/// Interval for one clipped half of a campaign.
pub fn clipped_interval(clipped: &ClippedCampaign) -> Result<Interval, LayoutError> {
    Interval::from_dates(
        clipped.campaign_id.clone(),
        clipped.start_date,
        clipped.end_date,
    )
}
