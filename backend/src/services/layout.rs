//! Grouping and assembly of the full timeline layout.
//!
//! One pass: validate every campaign, split at the half-year boundary, bucket
//! by `(group, half)`, then run lane assignment and position mapping per bucket
//! against that half's window. Buckets are independent panels; nothing is
//! normalized across them.

use std::collections::{BTreeMap, HashSet};

use chrono::NaiveDate;
use log::debug;

use super::interval::{clipped_interval, validate_range, Interval};
use super::lanes::assign_lanes;
use super::position::{map_position, month_ticks};
use super::splitter::HalfYearBoundary;
use crate::error::LayoutError;
use crate::models::{
    BucketKey, BucketLayout, ClippedCampaign, GroupId, LayoutEntry, LayoutResult,
    ScaleMode, ScheduledCampaign,
};

/// Lay out `campaigns` into per-group, per-half panels.
///
/// `group_key` picks the panel group for each campaign (usually the owning
/// practice). `boundary` is the last day of H1; `None` fails with
/// [`LayoutError::MissingBoundary`].
///
/// All records are validated before any layout work starts, and a single bad
/// record fails the whole batch. An empty input yields an empty result.
pub fn build_layout<F>(
    campaigns: &[ScheduledCampaign],
    group_key: F,
    boundary: Option<NaiveDate>,
    mode: ScaleMode,
) -> Result<LayoutResult, LayoutError>
where
    F: Fn(&ScheduledCampaign) -> GroupId,
{
    let boundary = HalfYearBoundary::new(boundary.ok_or(LayoutError::MissingBoundary)?)?;
    validate_campaigns(campaigns, &boundary)?;

    let mut buckets: BTreeMap<BucketKey, Vec<ClippedCampaign>> = BTreeMap::new();
    for campaign in campaigns {
        let group_id = group_key(campaign);
        for part in boundary.split(campaign)? {
            buckets
                .entry(BucketKey::new(group_id.clone(), part.half))
                .or_default()
                .push(part);
        }
    }

    let mut result = LayoutResult::default();
    for (key, members) in buckets {
        let bucket = layout_bucket(&key, &members, &boundary, mode)?;
        debug!(
            "Bucket {}/{}: {} entries in {} lanes",
            key.group_id,
            key.half,
            bucket.entries.len(),
            bucket.lane_count()
        );
        result.buckets.insert(key, bucket);
    }

    debug!(
        "Laid out {} campaigns into {} buckets (mode={}, boundary={})",
        campaigns.len(),
        result.len(),
        mode,
        boundary.date()
    );
    Ok(result)
}

/// [`build_layout`] grouped by each campaign's own `group_id`.
pub fn build_group_layout(
    campaigns: &[ScheduledCampaign],
    boundary: Option<NaiveDate>,
    mode: ScaleMode,
) -> Result<LayoutResult, LayoutError> {
    build_layout(campaigns, |c| c.group_id.clone(), boundary, mode)
}

fn validate_campaigns(
    campaigns: &[ScheduledCampaign],
    boundary: &HalfYearBoundary,
) -> Result<(), LayoutError> {
    let mut seen = HashSet::with_capacity(campaigns.len());
    for campaign in campaigns {
        validate_range(campaign)?;
        if !seen.insert(&campaign.id) {
            return Err(LayoutError::DuplicateCampaign {
                campaign_id: campaign.id.clone(),
            });
        }
        boundary.check_campaign(campaign)?;
    }
    Ok(())
}

fn layout_bucket(
    key: &BucketKey,
    members: &[ClippedCampaign],
    boundary: &HalfYearBoundary,
    mode: ScaleMode,
) -> Result<BucketLayout, LayoutError> {
    let window = boundary.window(key.half);
    let intervals = members
        .iter()
        .map(clipped_interval)
        .collect::<Result<Vec<Interval>, _>>()?;

    let lane_assignment = assign_lanes(&intervals);
    let positions: Vec<_> = intervals
        .iter()
        .map(|iv| map_position(iv, &window, mode))
        .collect();

    let entries = members
        .iter()
        .zip(&positions)
        .map(|(member, position)| LayoutEntry {
            campaign_id: member.campaign_id.clone(),
            label: member.label.clone(),
            status_tag: member.status_tag.clone(),
            start_date: member.start_date,
            end_date: member.end_date,
            split: member.split,
            lane: lane_assignment
                .lane_of(&member.campaign_id)
                .unwrap_or_default(),
            left_fraction: position.left_fraction,
            width_fraction: position.width_fraction,
        })
        .collect();

    Ok(BucketLayout {
        group_id: key.group_id.clone(),
        half: key.half,
        mode,
        window,
        lane_assignment,
        positions,
        entries,
        months: month_ticks(&window, mode),
    })
}
