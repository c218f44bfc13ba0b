use crate::models::{AvailabilityState, CandidateProfile, PreferenceSet, ResponseTimeCategory};

/// Unweighted nudge added for a language or price-band match
pub const BONUS: f64 = 0.1;

/// Location score when the buyer named no location
pub const NEUTRAL_LOCATION: f64 = 0.5;

/// Fraction of the buyer's brand/category/fuel wishes the agent covers.
///
/// Returns `None` when the buyer expressed none of the three, in which case
/// the axis takes no part in the score.
#[inline]
pub fn expertise_score(candidate: &CandidateProfile, preferences: &PreferenceSet) -> Option<f64> {
    if !preferences.has_expertise_preference() {
        return None;
    }

    let checks = [
        (&preferences.desired_brand, &candidate.brand_expertise),
        (&preferences.desired_category, &candidate.vehicle_type_expertise),
        (&preferences.desired_fuel_type, &candidate.fuel_type_expertise),
    ];

    let mut possible = 0u32;
    let mut earned = 0u32;
    for (desired, expertise) in checks {
        if let Some(desired) = desired {
            possible += 1;
            if expertise.iter().any(|e| e == desired) {
                earned += 1;
            }
        }
    }

    Some(earned as f64 / possible as f64)
}

#[inline]
pub fn rating_score(rating: f64) -> f64 {
    (rating / 5.0).clamp(0.0, 1.0)
}

#[inline]
pub fn availability_score(state: AvailabilityState) -> f64 {
    match state {
        AvailabilityState::Online => 1.0,
        AvailabilityState::Busy => 0.6,
        AvailabilityState::Offline => 0.2,
    }
}

#[inline]
pub fn response_time_score(category: ResponseTimeCategory) -> f64 {
    match category {
        ResponseTimeCategory::Fast => 1.0,
        ResponseTimeCategory::Medium => 0.7,
        ResponseTimeCategory::Slow => 0.4,
    }
}

/// 1.0 when the agent's territory mentions the desired location, 0.0 when it
/// does not, and [`NEUTRAL_LOCATION`] when the buyer gave no location.
#[inline]
pub fn location_score(service_territory: &str, desired_location: Option<&str>) -> f64 {
    match desired_location {
        Some(location) if service_territory.contains(location) => 1.0,
        Some(_) => 0.0,
        None => NEUTRAL_LOCATION,
    }
}

#[inline]
pub fn language_bonus(candidate: &CandidateProfile, preferences: &PreferenceSet) -> f64 {
    match &preferences.desired_language {
        Some(language) if candidate.languages_spoken.contains(language) => BONUS,
        _ => 0.0,
    }
}

#[inline]
pub fn price_overlap_bonus(candidate: &CandidateProfile, preferences: &PreferenceSet) -> f64 {
    match (&preferences.desired_price_range, &candidate.price_range) {
        (Some(desired), Some(offered)) if desired.overlaps(offered) => BONUS,
        _ => 0.0,
    }
}
