use std::collections::HashSet;

use rayon::prelude::*;
use tracing::instrument;

use crate::core::error::MatchError;
use crate::core::scoring::calculate_match_score;
use crate::models::{CandidateProfile, MatchResult, PreferenceSet, WeightConfig};

/// Pools at least this large are scored on the rayon thread pool
pub const DEFAULT_PARALLEL_THRESHOLD: usize = 512;

/// Main matching orchestrator
///
/// # Pipeline Stages
/// 1. Request validation (weights, limit, preferences, candidates)
/// 2. Scoring, fanned out across threads for large pools
/// 3. Stable sort by score, ties keep input order
/// 4. Truncation to the requested limit
#[derive(Debug, Clone)]
pub struct MatchingEngine {
    weights: WeightConfig,
    parallel_threshold: usize,
}

impl MatchingEngine {
    pub fn new(weights: WeightConfig) -> Self {
        Self {
            weights,
            parallel_threshold: DEFAULT_PARALLEL_THRESHOLD,
        }
    }

    pub fn with_default_weights() -> Self {
        Self::new(WeightConfig::default())
    }

    pub fn with_parallel_threshold(mut self, threshold: usize) -> Self {
        self.parallel_threshold = threshold;
        self
    }

    pub fn weights(&self) -> &WeightConfig {
        &self.weights
    }

    /// Rank candidates using the engine's own weights
    pub fn rank(
        &self,
        candidates: &[CandidateProfile],
        preferences: &PreferenceSet,
        limit: usize,
    ) -> Result<Vec<MatchResult>, MatchError> {
        self.rank_with(candidates, preferences, &self.weights, limit)
    }

    /// Rank candidates against a buyer's preferences
    ///
    /// # Arguments
    /// * `candidates` - The materialized candidate pool, never modified
    /// * `preferences` - What the buyer asked for
    /// * `weights` - Per-request axis weights
    /// * `limit` - Maximum number of matches to return, at least 1
    ///
    /// # Returns
    /// At most `limit` results, best first. An empty pool yields an empty list.
    #[instrument(name = "rank_candidates", skip_all, fields(candidates = candidates.len(), limit = limit))]
    pub fn rank_with(
        &self,
        candidates: &[CandidateProfile],
        preferences: &PreferenceSet,
        weights: &WeightConfig,
        limit: usize,
    ) -> Result<Vec<MatchResult>, MatchError> {
        validate_weights(weights)?;
        validate_limit(limit)?;
        validate_preferences(preferences)?;
        validate_candidates(candidates)?;

        if candidates.is_empty() {
            tracing::debug!("empty candidate pool");
            return Ok(Vec::new());
        }

        let score = |candidate: &CandidateProfile| MatchResult {
            candidate: candidate.clone(),
            score: calculate_match_score(candidate, preferences, weights),
        };

        // Indexed collect keeps input order on both paths
        let mut results: Vec<MatchResult> = if candidates.len() >= self.parallel_threshold {
            tracing::debug!(threshold = self.parallel_threshold, "scoring in parallel");
            candidates.par_iter().map(score).collect()
        } else {
            candidates.iter().map(score).collect()
        };

        // sort_by is stable: equal scores keep their input order
        results.sort_by(|a, b| b.score.total_cmp(&a.score));
        results.truncate(limit);

        tracing::debug!(
            returned = results.len(),
            top_score = ?results.first().map(|r| r.score),
            "ranking complete"
        );

        Ok(results)
    }
}

impl Default for MatchingEngine {
    fn default() -> Self {
        Self::with_default_weights()
    }
}

/// Rank candidates with default engine settings
pub fn rank(
    candidates: &[CandidateProfile],
    preferences: &PreferenceSet,
    weights: &WeightConfig,
    limit: usize,
) -> Result<Vec<MatchResult>, MatchError> {
    MatchingEngine::default().rank_with(candidates, preferences, weights, limit)
}

pub fn validate_weights(weights: &WeightConfig) -> Result<(), MatchError> {
    for (axis, value) in weights.axes() {
        if !value.is_finite() || value < 0.0 {
            return Err(MatchError::InvalidWeight { axis, value });
        }
    }
    Ok(())
}

fn validate_limit(limit: usize) -> Result<(), MatchError> {
    if limit == 0 {
        return Err(MatchError::InvalidLimit(limit));
    }
    Ok(())
}

fn validate_preferences(preferences: &PreferenceSet) -> Result<(), MatchError> {
    if let Some(range) = &preferences.desired_price_range {
        if !range.is_well_formed() {
            return Err(MatchError::InvalidPreferences(format!(
                "desired price range {}..{} is not a valid interval",
                range.min, range.max
            )));
        }
    }
    Ok(())
}

/// Fail closed: one bad profile rejects the whole pool
fn validate_candidates(candidates: &[CandidateProfile]) -> Result<(), MatchError> {
    let mut seen = HashSet::with_capacity(candidates.len());

    for candidate in candidates {
        let malformed = |reason: String| MatchError::MalformedCandidate {
            id: candidate.id.clone(),
            reason,
        };

        if candidate.id.trim().is_empty() {
            return Err(malformed("id is empty".to_string()));
        }
        if !seen.insert(candidate.id.as_str()) {
            return Err(malformed("duplicate id".to_string()));
        }
        if !candidate.rating.is_finite() {
            return Err(malformed(format!("rating {} is not a finite number", candidate.rating)));
        }
        if let Some(range) = &candidate.price_range {
            if !range.is_well_formed() {
                return Err(malformed(format!(
                    "price range {}..{} is not a valid interval",
                    range.min, range.max
                )));
            }
        }
    }

    Ok(())
}
