// Core algorithm exports
pub mod axes;
pub mod error;
pub mod matcher;
pub mod scoring;

pub use error::MatchError;
pub use matcher::{rank, MatchingEngine, DEFAULT_PARALLEL_THRESHOLD};
pub use scoring::{calculate_match_score, explain_match, ScoreBreakdown};
