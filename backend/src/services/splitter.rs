//! Mid-year boundary handling.
//!
//! The boundary date is the last day of H1; H2 starts the day after and runs to
//! December 31 of the same year. A campaign crossing it is cut into two clean
//! halves: no day counted twice, no gap.

use chrono::{Datelike, NaiveDate};

use super::interval::validate_range;
use crate::error::LayoutError;
use crate::models::{year_bounds, ClippedCampaign, DateWindow, Half, ScheduledCampaign};

/// Validated half-year boundary for one calendar year.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HalfYearBoundary {
    first_half: DateWindow,
    second_half: DateWindow,
}

impl HalfYearBoundary {
    /// `boundary` must leave at least one day in H2, so December 31 is rejected.
    pub fn new(boundary: NaiveDate) -> Result<Self, LayoutError> {
        let (year_start, year_end) =
            year_bounds(boundary.year()).ok_or(LayoutError::InvalidBoundary { boundary })?;
        if boundary >= year_end {
            return Err(LayoutError::InvalidBoundary { boundary });
        }
        let h2_start = boundary
            .succ_opt()
            .ok_or(LayoutError::InvalidBoundary { boundary })?;

        Ok(Self {
            first_half: DateWindow::new(year_start, boundary)?,
            second_half: DateWindow::new(h2_start, year_end)?,
        })
    }

    /// Last day of H1.
    pub fn date(&self) -> NaiveDate {
        self.first_half.end()
    }

    pub fn year(&self) -> i32 {
        self.first_half.end().year()
    }

    pub fn window(&self, half: Half) -> DateWindow {
        match half {
            Half::H1 => self.first_half,
            Half::H2 => self.second_half,
        }
    }

    pub fn half_of(&self, date: NaiveDate) -> Half {
        if date <= self.date() {
            Half::H1
        } else {
            Half::H2
        }
    }

    /// Reject campaigns that are not entirely inside the boundary's year.
    pub fn check_campaign(&self, campaign: &ScheduledCampaign) -> Result<(), LayoutError> {
        let in_year = campaign.start_date >= self.first_half.start()
            && campaign.end_date <= self.second_half.end();
        if !in_year {
            return Err(LayoutError::BoundaryOutsideYear {
                campaign_id: campaign.id.clone(),
                boundary: self.date(),
                start: campaign.start_date,
                end: campaign.end_date,
            });
        }
        Ok(())
    }

    /// Split a campaign into one entry per half it touches.
    ///
    /// The campaign must lie inside the boundary's year.
    pub fn split(&self, campaign: &ScheduledCampaign) -> Result<Vec<ClippedCampaign>, LayoutError> {
        validate_range(campaign)?;
        self.check_campaign(campaign)?;

        let start_half = self.half_of(campaign.start_date);
        let end_half = self.half_of(campaign.end_date);

        if start_half == end_half {
            return Ok(vec![clip(campaign, start_half, campaign.start_date, campaign.end_date, false)]);
        }

        Ok(vec![
            clip(campaign, Half::H1, campaign.start_date, self.first_half.end(), true),
            clip(campaign, Half::H2, self.second_half.start(), campaign.end_date, true),
        ])
    }
}

fn clip(
    campaign: &ScheduledCampaign,
    half: Half,
    start_date: NaiveDate,
    end_date: NaiveDate,
    split: bool,
) -> ClippedCampaign {
    ClippedCampaign {
        campaign_id: campaign.id.clone(),
        group_id: campaign.group_id.clone(),
        half,
        start_date,
        end_date,
        label: campaign.label.clone(),
        status_tag: campaign.status_tag.clone(),
        split,
    }
}

/// Split `campaign` at `boundary` (last day of H1).
///
/// Returns one entry when the campaign stays within a half and two when it
/// straddles the boundary. A campaign outside the boundary's year fails with
/// [`LayoutError::BoundaryOutsideYear`].
pub fn split_at_boundary(
    campaign: &ScheduledCampaign,
    boundary: NaiveDate,
) -> Result<Vec<ClippedCampaign>, LayoutError> {
    HalfYearBoundary::new(boundary)?.split(campaign)
}
