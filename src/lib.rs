//! Agent Match - weighted multi-criteria matching for car sales agents
//!
//! This library ranks a pool of agent profiles against a buyer's preferences.
//! Each candidate gets a normalized score in `[0, 1]` computed over the axes the
//! buyer cares about, and the engine returns a stable, truncated shortlist.

pub mod config;
pub mod core;
pub mod models;
pub mod routes;

// Re-export commonly used types
pub use crate::core::{calculate_match_score, explain_match, rank, MatchError, MatchingEngine, ScoreBreakdown};
pub use models::{
    AvailabilityState, CandidateProfile, MatchResult, PreferenceSet, PriceRange,
    ResponseTimeCategory, WeightConfig,
};
