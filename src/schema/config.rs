//! Process configuration for the discovery pipeline.

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

fn default_model() -> String {
    "llama3".to_string()
}

fn default_use_oracle() -> bool {
    true
}

fn default_oracle_url() -> String {
    "http://localhost:11434".to_string()
}

fn default_timeout_secs() -> u64 {
    60
}

fn default_history_path() -> PathBuf {
    PathBuf::from("database/results.json")
}

fn default_num_cycles() -> u32 {
    1
}

fn default_noise_scale() -> f64 {
    0.1
}

/// Top-level pipeline configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PipelineConfig {
    /// Oracle model identifier.
    #[serde(default = "default_model")]
    pub model: String,
    /// Whether to call the external oracle. When false, every candidate is
    /// scored by the random fallback without any network traffic.
    #[serde(default = "default_use_oracle")]
    pub use_oracle: bool,
    /// Base URL of the oracle's generate API.
    #[serde(default = "default_oracle_url")]
    pub oracle_url: String,
    /// Upper bound on one oracle call, in seconds.
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
    /// Location of the JSON history file.
    #[serde(default = "default_history_path")]
    pub history_path: PathBuf,
    /// Number of cycles to run.
    #[serde(default = "default_num_cycles")]
    pub num_cycles: u32,
    /// Perturbation scale relative to each parameter's range width.
    #[serde(default = "default_noise_scale")]
    pub noise_scale: f64,
    /// Number of advisor sentences woven into the scoring prompt
    /// (0 disables the advisor).
    #[serde(default)]
    pub advisor_hints: usize,
    /// Random seed for reproducible runs.
    #[serde(default)]
    pub random_seed: Option<u64>,
}

impl Default for PipelineConfig {
    fn default() -> Self {
        Self {
            model: default_model(),
            use_oracle: default_use_oracle(),
            oracle_url: default_oracle_url(),
            timeout_secs: default_timeout_secs(),
            history_path: default_history_path(),
            num_cycles: default_num_cycles(),
            noise_scale: default_noise_scale(),
            advisor_hints: 0,
            random_seed: None,
        }
    }
}

impl PipelineConfig {
    /// Validate configuration parameters.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.model.is_empty() {
            return Err(ConfigError::EmptyModel);
        }
        if self.oracle_url.is_empty() {
            return Err(ConfigError::EmptyOracleUrl);
        }
        if self.timeout_secs == 0 {
            return Err(ConfigError::InvalidTimeout);
        }
        if self.num_cycles == 0 {
            return Err(ConfigError::InvalidCycleCount);
        }
        if !self.noise_scale.is_finite() || self.noise_scale <= 0.0 {
            return Err(ConfigError::InvalidNoiseScale);
        }
        Ok(())
    }
}

/// Configuration validation errors.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Model identifier must be non-empty")]
    EmptyModel,
    #[error("Oracle URL must be non-empty")]
    EmptyOracleUrl,
    #[error("Oracle timeout must be non-zero")]
    InvalidTimeout,
    #[error("Cycle count must be non-zero")]
    InvalidCycleCount,
    #[error("Noise scale must be finite and positive")]
    InvalidNoiseScale,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_from_empty_object() {
        let config: PipelineConfig = serde_json::from_str("{}").unwrap();
        assert_eq!(config.model, "llama3");
        assert!(config.use_oracle);
        assert_eq!(config.oracle_url, "http://localhost:11434");
        assert_eq!(config.timeout_secs, 60);
        assert_eq!(config.history_path, PathBuf::from("database/results.json"));
        assert_eq!(config.num_cycles, 1);
        assert_eq!(config.noise_scale, 0.1);
        assert_eq!(config.advisor_hints, 0);
        assert_eq!(config.random_seed, None);
    }

    #[test]
    fn test_default_config_validates() {
        assert!(PipelineConfig::default().validate().is_ok());
    }

    #[test]
    fn test_validate_rejections() {
        let mut config = PipelineConfig::default();
        config.model.clear();
        assert!(matches!(config.validate(), Err(ConfigError::EmptyModel)));

        let mut config = PipelineConfig::default();
        config.timeout_secs = 0;
        assert!(matches!(config.validate(), Err(ConfigError::InvalidTimeout)));

        let mut config = PipelineConfig::default();
        config.num_cycles = 0;
        assert!(matches!(
            config.validate(),
            Err(ConfigError::InvalidCycleCount)
        ));

        let mut config = PipelineConfig::default();
        config.noise_scale = -0.1;
        assert!(matches!(
            config.validate(),
            Err(ConfigError::InvalidNoiseScale)
        ));

        let mut config = PipelineConfig::default();
        config.noise_scale = f64::NAN;
        assert!(matches!(
            config.validate(),
            Err(ConfigError::InvalidNoiseScale)
        ));
    }
}
