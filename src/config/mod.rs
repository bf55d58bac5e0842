//! Configuration management.

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

use crate::executor::SearchLimits;

/// Application configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    /// API keys for external services
    #[serde(default)]
    pub api_keys: ApiKeys,

    /// Federated search limits
    #[serde(default)]
    pub search: SearchConfig,

    /// Generative backend settings
    #[serde(default)]
    pub synthesis: SynthesisConfig,
}

/// API keys for external services
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiKeys {
    /// Gemini API key (required for the synthesis path)
    #[serde(default)]
    pub gemini: Option<String>,

    /// Semantic Scholar API key (optional, for higher rate limits)
    #[serde(default)]
    pub semantic_scholar: Option<String>,
}

impl Default for ApiKeys {
    fn default() -> Self {
        Self {
            gemini: std::env::var("GEMINI_API_KEY").ok(),
            semantic_scholar: std::env::var("SEMANTIC_SCHOLAR_API_KEY").ok(),
        }
    }
}

/// Federated search limits
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SearchConfig {
    /// Literature results accumulated before the variant loop stops early
    #[serde(default = "default_accumulate_target")]
    pub accumulate_target: usize,

    /// Literature results kept after the recency sort
    #[serde(default = "default_primary_cap")]
    pub primary_cap: usize,

    /// Results requested per query variant
    #[serde(default = "default_variant_limit")]
    pub variant_limit: usize,

    /// Results requested from the paper graph
    #[serde(default = "default_graph_limit")]
    pub graph_limit: usize,
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            accumulate_target: default_accumulate_target(),
            primary_cap: default_primary_cap(),
            variant_limit: default_variant_limit(),
            graph_limit: default_graph_limit(),
        }
    }
}

impl From<&SearchConfig> for SearchLimits {
    fn from(config: &SearchConfig) -> Self {
        Self {
            accumulate_target: config.accumulate_target,
            primary_cap: config.primary_cap,
            variant_limit: config.variant_limit,
            graph_limit: config.graph_limit,
        }
    }
}

fn default_accumulate_target() -> usize {
    8
}

fn default_primary_cap() -> usize {
    6
}

fn default_variant_limit() -> usize {
    10
}

fn default_graph_limit() -> usize {
    5
}

/// Generative backend settings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SynthesisConfig {
    /// Gemini model identifier
    #[serde(default = "default_model")]
    pub model: String,
}

impl Default for SynthesisConfig {
    fn default() -> Self {
        Self {
            model: default_model(),
        }
    }
}

fn default_model() -> String {
    "gemini-1.5-flash".to_string()
}

/// Load configuration from a file, with environment overrides
pub fn load_config(path: &PathBuf) -> Result<Config, config::ConfigError> {
    let settings = config::Config::builder()
        .add_source(config::File::from(path.as_path()))
        .add_source(config::Environment::with_prefix("RESEARCH_HUB").separator("__"))
        .build()?;

    settings.try_deserialize()
}

/// Get the default configuration (from env vars or defaults)
pub fn get_config() -> Config {
    Config::default()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_search_limits() {
        let config = Config::default();
        assert_eq!(config.search.accumulate_target, 8);
        assert_eq!(config.search.primary_cap, 6);
        assert_eq!(config.search.variant_limit, 10);
        assert_eq!(config.search.graph_limit, 5);
    }

    #[test]
    fn test_search_config_converts_to_limits() {
        let mut search = SearchConfig::default();
        search.primary_cap = 3;
        let limits = SearchLimits::from(&search);
        assert_eq!(limits.primary_cap, 3);
        assert_eq!(limits.graph_limit, 5);
    }

    #[test]
    fn test_default_model() {
        assert_eq!(Config::default().synthesis.model, "gemini-1.5-flash");
    }
}
