use thiserror::Error;

/// Errors returned by the matching engine.
///
/// All of them indicate a badly built request and are raised before any
/// candidate is scored.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum MatchError {
    #[error("Invalid weight for {axis}: {value} (must be a finite, non-negative number)")]
    InvalidWeight { axis: &'static str, value: f64 },

    #[error("Invalid limit: {0} (must be at least 1)")]
    InvalidLimit(usize),

    #[error("Malformed candidate {id:?}: {reason}")]
    MalformedCandidate { id: String, reason: String },

    #[error("Invalid preferences: {0}")]
    InvalidPreferences(String),
}

impl MatchError {
    /// Short machine-readable code for API responses
    pub fn code(&self) -> &'static str {
        match self {
            MatchError::InvalidWeight { .. } => "invalid_weight",
            MatchError::InvalidLimit(_) => "invalid_limit",
            MatchError::MalformedCandidate { .. } => "malformed_candidate",
            MatchError::InvalidPreferences(_) => "invalid_preferences",
        }
    }
}
