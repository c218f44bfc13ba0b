use serde::{Deserialize, Serialize};
use crate::core::scoring::ScoreBreakdown;
use crate::models::domain::{CandidateProfile, MatchResult};

/// A single ranked entry
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RankedMatch {
    pub candidate: CandidateProfile,
    pub score: f64,
    pub percent: u8,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub breakdown: Option<ScoreBreakdown>,
}

impl From<MatchResult> for RankedMatch {
    fn from(result: MatchResult) -> Self {
        Self {
            percent: result.percent(),
            score: result.score,
            candidate: result.candidate,
            breakdown: None,
        }
    }
}

/// Response for the rank endpoint
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RankResponse {
    pub request_id: String,
    pub matches: Vec<RankedMatch>,
    pub total_candidates: usize,
}

/// Health check response
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthResponse {
    pub status: String,
    pub version: String,
    pub timestamp: chrono::DateTime<chrono::Utc>,
}

/// Error response
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ErrorResponse {
    pub error: String,
    pub message: String,
    pub status_code: u16,
}
