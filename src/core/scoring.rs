use serde::{Deserialize, Serialize};
use crate::models::{CandidateProfile, PreferenceSet, WeightConfig};
use crate::core::axes::{
    availability_score, expertise_score, language_bonus, location_score, price_overlap_bonus,
    rating_score, response_time_score,
};

/// Per-axis view of a single candidate's score.
///
/// `expertise` is `None` when the buyer named no brand, category or fuel type;
/// that axis then contributes to neither side of the ratio. `numerator` and
/// `denominator` are in units of [`WeightConfig::accumulation_scale`].
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ScoreBreakdown {
    pub expertise: Option<f64>,
    pub rating: f64,
    pub availability: f64,
    pub response_time: f64,
    pub location: f64,
    pub language_bonus: f64,
    pub price_bonus: f64,
    pub numerator: f64,
    pub denominator: f64,
}

impl ScoreBreakdown {
    /// Final score in `[0, 1]`.
    ///
    /// Bonuses can push the raw ratio past 1, so it is clamped. With no
    /// applicable weight at all the score is 0.
    pub fn score(&self) -> f64 {
        if self.denominator <= 0.0 {
            return 0.0;
        }
        let ratio = self.numerator / self.denominator.max(f64::EPSILON);
        if ratio.is_nan() {
            return 0.0;
        }
        ratio.min(1.0)
    }
}

/// Calculate a match score (0.0 - 1.0) for one candidate
///
/// Scoring formula, over the axes that apply:
/// score = (
///     sum(weight_axis * axis_score)   # expertise only when the buyer asked for it
///     + language_bonus                # +0.1, unweighted
///     + price_bonus                   # +0.1, unweighted
/// ) / sum(weight_axis)
pub fn calculate_match_score(
    candidate: &CandidateProfile,
    preferences: &PreferenceSet,
    weights: &WeightConfig,
) -> f64 {
    explain_match(candidate, preferences, weights).score()
}

/// Compute every axis of the score and the weighted totals
pub fn explain_match(
    candidate: &CandidateProfile,
    preferences: &PreferenceSet,
    weights: &WeightConfig,
) -> ScoreBreakdown {
    // Weights summing past f64::MAX would turn the ratio into inf/inf
    let scale = weights.accumulation_scale();
    let mut numerator = 0.0;
    let mut denominator = 0.0;

    let expertise = expertise_score(candidate, preferences);
    if let Some(axis) = expertise {
        numerator += weights.expertise / scale * axis;
        denominator += weights.expertise / scale;
    }

    let rating = rating_score(candidate.rating);
    let availability = availability_score(candidate.availability_state);
    let response_time = response_time_score(candidate.response_time());
    let location = location_score(
        &candidate.service_territory,
        preferences.desired_location.as_deref(),
    );

    for (weight, axis) in [
        (weights.rating, rating),
        (weights.availability, availability),
        (weights.response_time, response_time),
        (weights.location, location),
    ] {
        numerator += weight / scale * axis;
        denominator += weight / scale;
    }

    let language_bonus = language_bonus(candidate, preferences);
    let price_bonus = price_overlap_bonus(candidate, preferences);
    numerator += (language_bonus + price_bonus) / scale;

    ScoreBreakdown {
        expertise,
        rating,
        availability,
        response_time,
        location,
        language_bonus,
        price_bonus,
        numerator,
        denominator,
    }
}
