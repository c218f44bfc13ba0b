//! Property-based tests for the matching engine
//!
//! These tests check the scoring invariants over randomly generated pools using proptest.

use agent_match::core::{calculate_match_score, rank};
use agent_match::models::{
    AvailabilityState, CandidateProfile, PreferenceSet, PriceRange, WeightConfig,
};
use proptest::prelude::*;

const BRANDS: &[&str] = &["BMW", "Mercedes", "Hyundai", "Kia", "Genesis"];
const CATEGORIES: &[&str] = &["SUV", "SEDAN", "TRUCK", "VAN"];
const FUELS: &[&str] = &["GASOLINE", "DIESEL", "HYBRID", "ELECTRIC"];
const CITIES: &[&str] = &["Seoul", "Busan", "Incheon", "Daegu"];
const LANGUAGES: &[&str] = &["Korean", "English", "Japanese"];
const RESPONSE_TIMES: &[&str] = &["responds in 5 minutes", "within 1 hour", "next business day"];

fn pick(options: &'static [&'static str]) -> impl Strategy<Value = String> {
    prop::sample::select(options).prop_map(str::to_string)
}

fn subset(options: &'static [&'static str]) -> impl Strategy<Value = Vec<String>> {
    prop::sample::subsequence(options, 0..=options.len())
        .prop_map(|v| v.into_iter().map(str::to_string).collect())
}

fn price_range() -> impl Strategy<Value = PriceRange> {
    (0.0_f64..100_000.0, 0.0_f64..50_000.0).prop_map(|(min, span)| PriceRange::new(min, min + span))
}

fn availability() -> impl Strategy<Value = AvailabilityState> {
    prop_oneof![
        Just(AvailabilityState::Online),
        Just(AvailabilityState::Busy),
        Just(AvailabilityState::Offline),
    ]
}

fn candidate() -> impl Strategy<Value = CandidateProfile> {
    (
        subset(BRANDS),
        subset(CATEGORIES),
        subset(FUELS),
        0.0_f64..=5.0,
        availability(),
        pick(RESPONSE_TIMES),
        pick(CITIES),
        subset(LANGUAGES),
        prop::option::of(price_range()),
    )
        .prop_map(
            |(brands, categories, fuels, rating, availability_state, response, city, languages, price_range)| {
                CandidateProfile {
                    id: String::new(),
                    name: None,
                    brand_expertise: brands,
                    vehicle_type_expertise: categories,
                    fuel_type_expertise: fuels,
                    rating,
                    availability_state,
                    response_time_category: response,
                    service_territory: city,
                    languages_spoken: languages,
                    price_range,
                }
            },
        )
}

/// Pool with unique ids assigned by position
fn pool(max: usize) -> impl Strategy<Value = Vec<CandidateProfile>> {
    prop::collection::vec(candidate(), 0..max).prop_map(|mut candidates| {
        for (i, c) in candidates.iter_mut().enumerate() {
            c.id = format!("agent-{}", i);
        }
        candidates
    })
}

fn preferences() -> impl Strategy<Value = PreferenceSet> {
    (
        prop::option::of(pick(BRANDS)),
        prop::option::of(pick(CATEGORIES)),
        prop::option::of(pick(FUELS)),
        prop::option::of(price_range()),
        prop::option::of(pick(CITIES)),
        prop::option::of(pick(LANGUAGES)),
    )
        .prop_map(|(brand, category, fuel, price, location, language)| PreferenceSet {
            desired_brand: brand,
            desired_category: category,
            desired_fuel_type: fuel,
            desired_price_range: price,
            desired_location: location,
            desired_language: language,
        })
}

fn weights() -> impl Strategy<Value = WeightConfig> {
    (0.0_f64..10.0, 0.0_f64..10.0, 0.0_f64..10.0, 0.0_f64..10.0, 0.0_f64..10.0).prop_map(
        |(expertise, rating, availability, response_time, location)| WeightConfig {
            expertise,
            rating,
            availability,
            response_time,
            location,
        },
    )
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(256))]

    /// Property: every score lies in [0, 1]
    #[test]
    fn prop_score_bounded(c in candidate(), p in preferences(), w in weights()) {
        let score = calculate_match_score(&c, &p, &w);
        prop_assert!((0.0..=1.0).contains(&score), "score out of range: {}", score);
    }

    /// Property: identical requests produce identical rankings
    #[test]
    fn prop_rank_deterministic(candidates in pool(40), p in preferences(), w in weights(), limit in 1_usize..50) {
        let first = rank(&candidates, &p, &w, limit).unwrap();
        let second = rank(&candidates, &p, &w, limit).unwrap();
        prop_assert_eq!(first, second);
    }

    /// Property: result length is min(limit, pool size) and scores are non-increasing
    #[test]
    fn prop_rank_truncates_and_sorts(candidates in pool(40), p in preferences(), w in weights(), limit in 1_usize..50) {
        let results = rank(&candidates, &p, &w, limit).unwrap();
        prop_assert_eq!(results.len(), limit.min(candidates.len()));
        for pair in results.windows(2) {
            prop_assert!(pair[0].score >= pair[1].score);
        }
    }

    /// Property: raising the rating never lowers the score while the rating weight is positive
    #[test]
    fn prop_rating_monotonic(
        c in candidate(),
        p in preferences(),
        w in weights(),
        rating_weight in 0.01_f64..10.0,
        bump in 0.0_f64..5.0,
    ) {
        let w = WeightConfig { rating: rating_weight, ..w };
        let mut better = c.clone();
        better.rating = (c.rating + bump).min(5.0);

        prop_assert!(calculate_match_score(&better, &p, &w) >= calculate_match_score(&c, &p, &w));
    }

    /// Property: with the rating weight at 0 the rating has no effect
    #[test]
    fn prop_zero_rating_weight_excludes_rating(c in candidate(), p in preferences(), w in weights(), rating in 0.0_f64..=5.0) {
        let w = WeightConfig { rating: 0.0, ..w };
        let mut other = c.clone();
        other.rating = rating;

        prop_assert_eq!(calculate_match_score(&c, &p, &w), calculate_match_score(&other, &p, &w));
    }

    /// Property: brand expertise is irrelevant when the buyer named no brand
    #[test]
    fn prop_unset_brand_is_neutral(c in candidate(), p in preferences(), w in weights(), brands in subset(BRANDS)) {
        let p = PreferenceSet { desired_brand: None, ..p };
        let mut other = c.clone();
        other.brand_expertise = brands;

        prop_assert_eq!(calculate_match_score(&c, &p, &w), calculate_match_score(&other, &p, &w));
    }

    /// Property: candidates with equal scores keep their input order
    #[test]
    fn prop_ties_keep_input_order(c in candidate(), copies in 2_usize..20, p in preferences(), w in weights()) {
        let candidates: Vec<CandidateProfile> = (0..copies)
            .map(|i| CandidateProfile { id: format!("copy-{}", i), ..c.clone() })
            .collect();

        let results = rank(&candidates, &p, &w, copies).unwrap();
        let ids: Vec<&str> = results.iter().map(|r| r.candidate.id.as_str()).collect();
        let expected: Vec<String> = (0..copies).map(|i| format!("copy-{}", i)).collect();
        prop_assert_eq!(ids, expected.iter().map(String::as_str).collect::<Vec<_>>());
    }
}
