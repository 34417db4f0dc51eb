use std::collections::BTreeMap;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize, Serializer};

use super::campaign::{CampaignId, GroupId, Half, ScaleMode};
use super::time::DateWindow;

/// Lane chosen for every interval of one bucket.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct LaneAssignment {
    pub lanes: BTreeMap<CampaignId, usize>,
    pub lane_count: usize,
}

impl LaneAssignment {
    /// Lane index (0-based) of a campaign, if it was laid out.
    pub fn lane_of(&self, id: &CampaignId) -> Option<usize> {
        self.lanes.get(id).copied()
    }

    pub fn is_empty(&self) -> bool {
        self.lanes.is_empty()
    }
}

/// Normalized horizontal placement of one interval inside a window.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PositionResult {
    pub owner_id: CampaignId,
    pub left_fraction: f64,
    pub width_fraction: f64,
}

impl PositionResult {
    pub fn right_fraction(&self) -> f64 {
        self.left_fraction + self.width_fraction
    }
}

/// Header cell for one calendar month of a window.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MonthTick {
    /// `YYYY-MM`
    pub label: String,
    pub left_fraction: f64,
    pub width_fraction: f64,
}

/// Render-ready row: campaign details joined with lane and position.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LayoutEntry {
    pub campaign_id: CampaignId,
    pub label: String,
    pub status_tag: String,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
    pub split: bool,
    pub lane: usize,
    pub left_fraction: f64,
    pub width_fraction: f64,
}

/// Bucket identity: one panel per group and half.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct BucketKey {
    pub group_id: GroupId,
    pub half: Half,
}

impl BucketKey {
    pub fn new(group_id: GroupId, half: Half) -> Self {
        Self { group_id, half }
    }
}

/// Layout of a single `(group, half)` panel.
///
/// Lane indices and fractions are local to this bucket.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BucketLayout {
    pub group_id: GroupId,
    pub half: Half,
    pub mode: ScaleMode,
    pub window: DateWindow,
    pub lane_assignment: LaneAssignment,
    pub positions: Vec<PositionResult>,
    pub entries: Vec<LayoutEntry>,
    pub months: Vec<MonthTick>,
}

impl BucketLayout {
    pub fn lane_count(&self) -> usize {
        self.lane_assignment.lane_count
    }

    pub fn position_of(&self, id: &CampaignId) -> Option<&PositionResult> {
        self.positions.iter().find(|p| &p.owner_id == id)
    }
}

/// Complete layout for one pass over the input campaigns.
///
/// Buckets with no campaigns are absent; callers treat a missing bucket as
/// "nothing to render". Serializes as an ordered list of buckets.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct LayoutResult {
    pub buckets: BTreeMap<BucketKey, BucketLayout>,
}

impl LayoutResult {
    pub fn is_empty(&self) -> bool {
        self.buckets.is_empty()
    }

    pub fn len(&self) -> usize {
        self.buckets.len()
    }

    pub fn bucket(&self, group_id: &GroupId, half: Half) -> Option<&BucketLayout> {
        self.buckets.get(&BucketKey::new(group_id.clone(), half))
    }

    /// Distinct groups present, in order.
    pub fn groups(&self) -> Vec<&GroupId> {
        let mut groups: Vec<&GroupId> = self.buckets.keys().map(|k| &k.group_id).collect();
        groups.dedup();
        groups
    }

    /// Number of laid-out entries; a split campaign counts once per half.
    pub fn entry_count(&self) -> usize {
        self.buckets.values().map(|b| b.entries.len()).sum()
    }

    /// Number of distinct campaigns across all buckets.
    pub fn campaign_count(&self) -> usize {
        let mut ids: Vec<&CampaignId> = self
            .buckets
            .values()
            .flat_map(|b| b.entries.iter().map(|e| &e.campaign_id))
            .collect();
        ids.sort();
        ids.dedup();
        ids.len()
    }

    pub fn max_lane_count(&self) -> usize {
        self.buckets
            .values()
            .map(BucketLayout::lane_count)
            .max()
            .unwrap_or(0)
    }
}

impl Serialize for LayoutResult {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_seq(self.buckets.values())
    }
}
