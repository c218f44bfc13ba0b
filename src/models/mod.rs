// Model exports
pub mod domain;
pub mod requests;
pub mod responses;

pub use domain::{
    AvailabilityState, CandidateProfile, MatchResult, PreferenceSet, PriceRange,
    ResponseTimeCategory, WeightConfig,
};
pub use requests::RankRequest;
pub use responses::{ErrorResponse, HealthResponse, RankResponse, RankedMatch};
