use serde::{Deserialize, Serialize};
use validator::Validate;
use crate::models::domain::{CandidateProfile, PreferenceSet, WeightConfig};

/// Request to rank a candidate pool against a buyer's preferences
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct RankRequest {
    #[serde(default)]
    pub preferences: PreferenceSet,
    /// Falls back to the configured default weights when absent
    #[serde(default)]
    pub weights: Option<WeightConfig>,
    #[validate(length(max = 10000))]
    #[serde(default)]
    pub candidates: Vec<CandidateProfile>,
    #[validate(range(min = 1))]
    #[serde(default)]
    pub limit: Option<u16>,
    /// Attach a per-axis breakdown to every match
    #[serde(default)]
    pub explain: bool,
}
