// ============================================================================
// Campaign JSON Loading
// ============================================================================
//
// Campaign lists arrive either as a bare JSON array or wrapped in an object
// under a `campaigns` key (the shape the dashboard's export produces).

use std::fs;
use std::path::Path;

use anyhow::{Context, Result};

use crate::models::ScheduledCampaign;

#[derive(serde::Deserialize)]
struct CampaignsWrapper {
    campaigns: Vec<ScheduledCampaign>,
}

/// Parse scheduled campaigns from a JSON string.
///
/// Accepts `[ {...}, ... ]` or `{ "campaigns": [ {...}, ... ] }`. Date ranges are
/// not checked here; the layout pass validates them.
pub fn parse_campaigns_json(json: &str) -> Result<Vec<ScheduledCampaign>> {
    let value: serde_json::Value = serde_json::from_str(json).context("Invalid campaign JSON")?;

    let is_wrapper = value
        .as_object()
        .is_some_and(|obj| obj.contains_key("campaigns"));

    if value.is_array() {
        serde_json::from_value(value).context("Failed to deserialize campaign list")
    } else if is_wrapper {
        let wrapper: CampaignsWrapper =
            serde_json::from_value(value).context("Failed to deserialize 'campaigns' field")?;
        Ok(wrapper.campaigns)
    } else {
        anyhow::bail!("Expected a JSON array or an object with a 'campaigns' field")
    }
}

/// Read and parse a campaign JSON file.
pub fn load_campaigns_file<P: AsRef<Path>>(path: P) -> Result<Vec<ScheduledCampaign>> {
    let path = path.as_ref();
    let content = fs::read_to_string(path)
        .with_context(|| format!("Failed to read campaign file {}", path.display()))?;
    parse_campaigns_json(&content)
        .with_context(|| format!("Failed to parse campaign file {}", path.display()))
}
