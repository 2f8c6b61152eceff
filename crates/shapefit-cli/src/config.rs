//! Application configuration.

use serde::{Deserialize, Serialize};
use shapefit_agents::AgentConfig;
use shapefit_body::{AnalysisConfig, BodyAnalyzer, ClassificationThresholds};

/// Complete application configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    /// Landmark quality reporting
    pub analysis: AnalysisConfig,

    /// Shape rule thresholds
    pub classification: ClassificationThresholds,

    /// Recommendation model settings
    pub agent: AgentConfig,
}

impl AppConfig {
    /// Load configuration from file, with `SHAPEFIT__*` environment overrides
    pub fn from_file(path: &str) -> Result<Self, config::ConfigError> {
        let settings = config::Config::builder()
            .add_source(config::File::with_name(path))
            .add_source(Self::environment())
            .build()?;

        settings.try_deserialize()
    }

    /// Load from environment variables
    pub fn from_env() -> Result<Self, config::ConfigError> {
        let settings = config::Config::builder()
            .add_source(Self::environment())
            .build()?;

        settings.try_deserialize()
    }

    fn environment() -> config::Environment {
        config::Environment::with_prefix("SHAPEFIT")
            .prefix_separator("__")
            .separator("__")
            .try_parsing(true)
    }

    pub fn analyzer(&self) -> BodyAnalyzer {
        BodyAnalyzer::new(self.analysis, self.classification)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    #[test]
    fn test_default_config() {
        let config = AppConfig::default();
        assert_eq!(config.analysis.min_confidence, 0.3);
        assert_eq!(config.classification.balanced_min, 0.9);
        assert_eq!(config.classification.inverted_shoulder_to_waist_max, 1.3);
        assert_eq!(config.agent.model, "gemini-2.0-flash");
    }

    #[test]
    fn test_from_file_partial_override() {
        let path = std::env::temp_dir().join(format!("shapefit-test-{}.toml", std::process::id()));
        fs::write(
            &path,
            "[classification]\nbalanced_max = 1.15\n\n[agent]\ntimeout_ms = 5000\n",
        )
        .unwrap();

        let config = AppConfig::from_file(path.to_str().unwrap()).unwrap();
        fs::remove_file(&path).ok();

        assert_eq!(config.classification.balanced_max, 1.15);
        assert_eq!(config.classification.balanced_min, 0.9);
        assert_eq!(config.agent.timeout_ms, 5000);
        assert_eq!(config.analysis.min_confidence, 0.3);
        assert_eq!(config.analyzer().classifier().thresholds().balanced_max, 1.15);
    }

    #[test]
    fn test_missing_file_is_error() {
        assert!(AppConfig::from_file("/nonexistent/shapefit.toml").is_err());
    }
}
