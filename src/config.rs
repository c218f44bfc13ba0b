use config::{Config, ConfigError, Environment, File};
use serde::Deserialize;
use std::path::Path;

use crate::core::{MatchingEngine, DEFAULT_PARALLEL_THRESHOLD};
use crate::models::WeightConfig;

/// Application configuration
#[derive(Debug, Clone, Deserialize)]
pub struct Settings {
    pub server: ServerSettings,
    #[serde(default)]
    pub matching: MatchingSettings,
    #[serde(default)]
    pub scoring: ScoringSettings,
    #[serde(default)]
    pub logging: LoggingSettings,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ServerSettings {
    pub host: String,
    pub port: u16,
    pub workers: Option<usize>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct MatchingSettings {
    #[serde(default = "default_limit")]
    pub default_limit: u16,
    #[serde(default = "default_max_limit")]
    pub max_limit: u16,
    #[serde(default = "default_parallel_threshold")]
    pub parallel_threshold: usize,
}

impl Default for MatchingSettings {
    fn default() -> Self {
        Self {
            default_limit: default_limit(),
            max_limit: default_max_limit(),
            parallel_threshold: default_parallel_threshold(),
        }
    }
}

impl MatchingSettings {
    /// Apply the configured default and cap to a requested limit
    pub fn effective_limit(&self, requested: Option<u16>) -> usize {
        requested.unwrap_or(self.default_limit).min(self.max_limit) as usize
    }
}

fn default_limit() -> u16 { 5 }
fn default_max_limit() -> u16 { 100 }
fn default_parallel_threshold() -> usize { DEFAULT_PARALLEL_THRESHOLD }

#[derive(Debug, Clone, Default, Deserialize)]
pub struct ScoringSettings {
    #[serde(default)]
    pub weights: WeightsConfig,
}

#[derive(Debug, Clone, Deserialize)]
pub struct WeightsConfig {
    #[serde(default = "default_expertise_weight")]
    pub expertise: f64,
    #[serde(default = "default_rating_weight")]
    pub rating: f64,
    #[serde(default = "default_availability_weight")]
    pub availability: f64,
    #[serde(default = "default_response_time_weight")]
    pub response_time: f64,
    #[serde(default = "default_location_weight")]
    pub location: f64,
}

impl Default for WeightsConfig {
    fn default() -> Self {
        Self {
            expertise: default_expertise_weight(),
            rating: default_rating_weight(),
            availability: default_availability_weight(),
            response_time: default_response_time_weight(),
            location: default_location_weight(),
        }
    }
}

impl From<&WeightsConfig> for WeightConfig {
    fn from(config: &WeightsConfig) -> Self {
        WeightConfig {
            expertise: config.expertise,
            rating: config.rating,
            availability: config.availability,
            response_time: config.response_time,
            location: config.location,
        }
    }
}

fn default_expertise_weight() -> f64 { 0.30 }
fn default_rating_weight() -> f64 { 0.25 }
fn default_availability_weight() -> f64 { 0.20 }
fn default_response_time_weight() -> f64 { 0.15 }
fn default_location_weight() -> f64 { 0.10 }

#[derive(Debug, Clone, Deserialize)]
pub struct LoggingSettings {
    #[serde(default = "default_log_level")]
    pub level: String,
    #[serde(default = "default_log_format")]
    pub format: String,
}

impl Default for LoggingSettings {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            format: default_log_format(),
        }
    }
}

fn default_log_level() -> String { "info".to_string() }
fn default_log_format() -> String { "json".to_string() }

impl Settings {
    /// Load configuration from file and environment variables
    ///
    /// Configuration is loaded in the following order (later overrides earlier):
    /// 1. Default values in the struct
    /// 2. Configuration file (config/default.toml)
    /// 3. Local overrides (config/local.toml)
    /// 4. Environment variables (prefixed with AGENT_MATCH_)
    pub fn load() -> Result<Self, ConfigError> {
        Config::builder()
            .add_source(File::with_name("config/default").required(false))
            .add_source(File::with_name("config/local").required(false))
            // e.g., AGENT_MATCH__SERVER__PORT -> server.port
            .add_source(env_source())
            .set_default("server.host", "0.0.0.0")?
            .set_default("server.port", 8080)?
            .build()?
            .try_deserialize()
    }

    /// Load configuration from a custom path
    pub fn load_from<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        Config::builder()
            .add_source(File::from(path.as_ref()))
            .add_source(env_source())
            .build()?
            .try_deserialize()
    }

    /// Build the engine described by the scoring and matching sections.
    ///
    /// Fails when a configured weight is negative or not finite, or when a
    /// configured limit is zero, so a bad deployment is caught at startup
    /// instead of on the first request.
    pub fn build_engine(&self) -> Result<MatchingEngine, crate::core::MatchError> {
        let weights = WeightConfig::from(&self.scoring.weights);
        crate::core::matcher::validate_weights(&weights)?;

        for limit in [self.matching.default_limit, self.matching.max_limit] {
            if limit == 0 {
                return Err(crate::core::MatchError::InvalidLimit(0));
            }
        }

        Ok(MatchingEngine::new(weights).with_parallel_threshold(self.matching.parallel_threshold))
    }
}

fn env_source() -> Environment {
    Environment::with_prefix("AGENT_MATCH")
        .prefix_separator("__")
        .separator("__")
        .try_parsing(true)
}
