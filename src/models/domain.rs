use serde::{Deserialize, Serialize};

/// Closed numeric interval, used for both buyer budgets and agent price bands
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PriceRange {
    pub min: f64,
    pub max: f64,
}

impl PriceRange {
    pub fn new(min: f64, max: f64) -> Self {
        Self { min, max }
    }

    /// Two ranges overlap when the shared segment has positive length.
    /// Ranges that only touch at an endpoint do not count.
    pub fn overlaps(&self, other: &PriceRange) -> bool {
        self.max.min(other.max) > self.min.max(other.min)
    }

    pub fn is_well_formed(&self) -> bool {
        self.min.is_finite() && self.max.is_finite() && self.min <= self.max
    }
}

/// Buyer's stated wants. Every field is optional; `None` means "no preference".
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PreferenceSet {
    #[serde(default)]
    pub desired_brand: Option<String>,
    #[serde(default)]
    pub desired_category: Option<String>,
    #[serde(default)]
    pub desired_fuel_type: Option<String>,
    #[serde(default)]
    pub desired_price_range: Option<PriceRange>,
    #[serde(default)]
    pub desired_location: Option<String>,
    #[serde(default)]
    pub desired_language: Option<String>,
}

impl PreferenceSet {
    /// Whether any of brand, category or fuel type was specified
    pub fn has_expertise_preference(&self) -> bool {
        self.desired_brand.is_some()
            || self.desired_category.is_some()
            || self.desired_fuel_type.is_some()
    }
}

/// Relative importance of each scoring axis.
///
/// Weights are non-negative and need not sum to 1; the score is normalized by
/// the sum of the weights of the axes that apply to a request.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WeightConfig {
    pub expertise: f64,
    pub rating: f64,
    pub availability: f64,
    pub response_time: f64,
    pub location: f64,
}

impl WeightConfig {
    /// Axis name and weight pairs, in scoring order
    pub fn axes(&self) -> [(&'static str, f64); 5] {
        [
            ("expertise", self.expertise),
            ("rating", self.rating),
            ("availability", self.availability),
            ("responseTime", self.response_time),
            ("location", self.location),
        ]
    }

    pub fn sum(&self) -> f64 {
        self.axes().iter().map(|(_, w)| w).sum()
    }

    /// Divisor applied to every weight before accumulating.
    ///
    /// 1.0 while the weights sum to a finite value; otherwise the largest
    /// weight, which brings the sum back into range without changing ratios.
    pub fn accumulation_scale(&self) -> f64 {
        if self.sum().is_finite() {
            return 1.0;
        }
        self.axes().iter().map(|(_, w)| *w).fold(0.0, f64::max)
    }
}

impl Default for WeightConfig {
    fn default() -> Self {
        Self {
            expertise: 0.30,
            rating: 0.25,
            availability: 0.20,
            response_time: 0.15,
            location: 0.10,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AvailabilityState {
    Online,
    Busy,
    Offline,
}

/// Three-bucket classification of an agent's free-text response time
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ResponseTimeCategory {
    Fast,
    Medium,
    Slow,
}

impl ResponseTimeCategory {
    /// "responds in 30 minutes" is fast, "within an hour" is medium, anything else is slow.
    pub fn classify(text: &str) -> Self {
        if text.contains("minutes") {
            ResponseTimeCategory::Fast
        } else if text.contains("hour") {
            ResponseTimeCategory::Medium
        } else {
            ResponseTimeCategory::Slow
        }
    }
}

/// A sales agent that can be ranked against a buyer's preferences
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CandidateProfile {
    pub id: String,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub brand_expertise: Vec<String>,
    #[serde(default)]
    pub vehicle_type_expertise: Vec<String>,
    #[serde(default)]
    pub fuel_type_expertise: Vec<String>,
    /// 0-5 star scale
    pub rating: f64,
    pub availability_state: AvailabilityState,
    pub response_time_category: String,
    pub service_territory: String,
    #[serde(default)]
    pub languages_spoken: Vec<String>,
    #[serde(default)]
    pub price_range: Option<PriceRange>,
}

impl CandidateProfile {
    pub fn response_time(&self) -> ResponseTimeCategory {
        ResponseTimeCategory::classify(&self.response_time_category)
    }
}

/// A candidate annotated with its match score
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MatchResult {
    pub candidate: CandidateProfile,
    /// 0.0 - 1.0
    pub score: f64,
}

impl MatchResult {
    /// Score as a whole percentage, for display
    pub fn percent(&self) -> u8 {
        (self.score * 100.0).round().clamp(0.0, 100.0) as u8
    }
}
