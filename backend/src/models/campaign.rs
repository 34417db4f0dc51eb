use std::fmt;
use std::str::FromStr;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::define_id_type;

define_id_type!(CampaignId);
define_id_type!(GroupId);

/// A campaign placed on the calendar by a practice.
///
/// Records are owned by the dashboard's data layer; the engine only reads them.
/// `start_date..=end_date` is inclusive on both ends.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScheduledCampaign {
    pub id: CampaignId,
    pub group_id: GroupId,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
    #[serde(default)]
    pub label: String,
    #[serde(default)]
    pub status_tag: String,
}

impl ScheduledCampaign {
    pub fn new(
        id: impl Into<CampaignId>,
        group_id: impl Into<GroupId>,
        start_date: NaiveDate,
        end_date: NaiveDate,
    ) -> Self {
        Self {
            id: id.into(),
            group_id: group_id.into(),
            start_date,
            end_date,
            label: String::new(),
            status_tag: String::new(),
        }
    }

    pub fn with_label(mut self, label: impl Into<String>) -> Self {
        self.label = label.into();
        self
    }

    pub fn with_status(mut self, status_tag: impl Into<String>) -> Self {
        self.status_tag = status_tag.into();
        self
    }

    /// Number of calendar days covered, or 0 for a reversed range.
    pub fn duration_days(&self) -> i64 {
        ((self.end_date - self.start_date).num_days() + 1).max(0)
    }
}

/// Half of the planning year.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Half {
    /// January 1 through the boundary date.
    H1,
    /// The day after the boundary through December 31.
    H2,
}

impl fmt::Display for Half {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Half::H1 => f.write_str("H1"),
            Half::H2 => f.write_str("H2"),
        }
    }
}

/// A campaign (or the part of one) that falls inside a single half.
///
/// Both halves of a split campaign keep the original id and descriptive fields.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClippedCampaign {
    pub campaign_id: CampaignId,
    pub group_id: GroupId,
    pub half: Half,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
    pub label: String,
    pub status_tag: String,
    /// `true` when this entry is one side of a campaign cut at the boundary.
    pub split: bool,
}

/// Horizontal scale model used by position mapping.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ScaleMode {
    /// Every month cell has the same width regardless of its day count.
    #[default]
    Equal,
    /// Every calendar day has the same width.
    Proportional,
}

impl FromStr for ScaleMode {
    type Err = String;

    /// Parse a scale mode ("equal", "proportional").
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "equal" => Ok(Self::Equal),
            "proportional" => Ok(Self::Proportional),
            _ => Err(format!("Unknown scale mode: {}", s)),
        }
    }
}

impl fmt::Display for ScaleMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ScaleMode::Equal => f.write_str("equal"),
            ScaleMode::Proportional => f.write_str("proportional"),
        }
    }
}
