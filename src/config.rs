//! Configuration management for the career matcher

use crate::error::{CareerMatcherError, Result};
use crate::matching::engine::DEFAULT_TOP_N;
use crate::matching::weights::ScoringWeights;
use anyhow::Context;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Config {
    pub matching: MatchingConfig,
    pub output: OutputConfig,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MatchingConfig {
    pub top_n: usize,
    /// Clamp composite scores to [0, 1]; the growth bonus can otherwise push
    /// them slightly above 1.0.
    pub clamp_composite: bool,
    /// Catalog file to use instead of the built-in one.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub catalog_path: Option<PathBuf>,
    pub weights: ScoringWeights,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OutputConfig {
    pub format: OutputFormat,
    pub detailed: bool,
    pub color_output: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum OutputFormat {
    Console,
    Json,
    Markdown,
}

impl Default for MatchingConfig {
    fn default() -> Self {
        Self {
            top_n: DEFAULT_TOP_N,
            clamp_composite: false,
            catalog_path: None,
            weights: ScoringWeights::default(),
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            matching: MatchingConfig::default(),
            output: OutputConfig {
                format: OutputFormat::Console,
                detailed: false,
                color_output: true,
            },
        }
    }
}

impl Config {
    /// Load from the default location, writing defaults on first use.
    pub fn load() -> Result<Self> {
        Self::load_from(&Self::config_path())
    }

    pub fn load_from(config_path: &Path) -> Result<Self> {
        let config = Self::read_from(config_path)?;
        config.validate()?;
        Ok(config)
    }

    /// Parse the file without validating it, so `config set` can repair a
    /// file whose values no longer validate. Writes defaults if missing.
    pub fn read_from(config_path: &Path) -> Result<Self> {
        if config_path.exists() {
            let content = std::fs::read_to_string(config_path)?;
            toml::from_str(&content)
                .map_err(|e| CareerMatcherError::Configuration(format!("Failed to parse config: {}", e)))
        } else {
            let config = Self::default();
            config.save_to(config_path)?;
            Ok(config)
        }
    }

    /// Overwrite `config_path` with defaults without reading what is there.
    pub fn reset_at(config_path: &Path) -> Result<Self> {
        let config = Self::default();
        config.save_to(config_path)?;
        Ok(config)
    }

    pub fn save(&self) -> Result<()> {
        self.save_to(&Self::config_path())
    }

    pub fn save_to(&self, config_path: &Path) -> Result<()> {
        if let Some(parent) = config_path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let content = toml::to_string_pretty(self)
            .map_err(|e| CareerMatcherError::Configuration(format!("Failed to serialize config: {}", e)))?;

        std::fs::write(config_path, content)?;
        Ok(())
    }

    pub fn config_path() -> PathBuf {
        dirs::config_dir()
            .unwrap_or_else(|| dirs::home_dir().unwrap_or_else(|| PathBuf::from(".")))
            .join("career-matcher")
            .join("config.toml")
    }

    pub fn validate(&self) -> Result<()> {
        self.matching.weights.validate()?;
        if self.matching.top_n == 0 {
            return Err(CareerMatcherError::Configuration(
                "matching.top_n must be at least 1".to_string(),
            ));
        }
        Ok(())
    }

    /// Set a value by dotted key, e.g. `matching.top_n`. The result is
    /// validated before it is accepted.
    ///
    /// Weights must keep summing to 1.0, so `matching.weights` takes several
    /// `name=value` pairs at once (`"technical=0.30,growth=0.05"`). Weights
    /// not named keep their current value.
    pub fn set_value(&mut self, key: &str, value: &str) -> Result<()> {
        let mut updated = self.clone();

        match key {
            "matching.top_n" => {
                updated.matching.top_n = value
                    .parse()
                    .with_context(|| format!("{} expects a whole number, got '{}'", key, value))?;
            }
            "matching.clamp_composite" => {
                updated.matching.clamp_composite = parse_bool(key, value)?;
            }
            "matching.catalog_path" => {
                updated.matching.catalog_path = match value {
                    "" | "builtin" => None,
                    path => Some(PathBuf::from(path)),
                };
            }
            "output.format" => {
                updated.output.format = crate::cli::parse_output_format(value)
                    .map_err(CareerMatcherError::InvalidInput)?;
            }
            "output.detailed" => {
                updated.output.detailed = parse_bool(key, value)?;
            }
            "output.color_output" => {
                updated.output.color_output = parse_bool(key, value)?;
            }
            "matching.weights" => {
                let pairs: Vec<&str> = value.split(',').map(str::trim).filter(|p| !p.is_empty()).collect();
                if pairs.is_empty() {
                    return Err(CareerMatcherError::InvalidInput(format!(
                        "{} expects name=value pairs, e.g. \"technical=0.30,growth=0.05\"",
                        key
                    )));
                }
                for pair in pairs {
                    let (name, amount) = pair.split_once('=').ok_or_else(|| {
                        CareerMatcherError::InvalidInput(format!("{} expects name=value, got '{}'", key, pair))
                    })?;
                    set_weight(&mut updated.matching.weights, name.trim(), amount.trim())?;
                }
            }
            weight if weight.starts_with(WEIGHT_PREFIX) => {
                set_weight(&mut updated.matching.weights, &weight[WEIGHT_PREFIX.len()..], value)?;
            }
            _ => {
                return Err(CareerMatcherError::InvalidInput(format!(
                    "Unknown configuration key: {}",
                    key
                )))
            }
        }

        match updated.validate() {
            Err(CareerMatcherError::Configuration(reason)) if key.starts_with(WEIGHT_PREFIX) => {
                return Err(CareerMatcherError::Configuration(format!(
                    "{}; change several weights at once with matching.weights \"name=value,...\"",
                    reason
                )));
            }
            Err(e) => return Err(e),
            Ok(()) => {}
        }
        *self = updated;
        Ok(())
    }
}

const WEIGHT_PREFIX: &str = "matching.weights.";

fn set_weight(weights: &mut ScoringWeights, name: &str, value: &str) -> Result<()> {
    let parsed: f64 = value
        .parse()
        .with_context(|| format!("Weight '{}' expects a number, got '{}'", name, value))?;
    let slot = match name {
        "technical" => &mut weights.technical,
        "soft" => &mut weights.soft,
        "education" => &mut weights.education,
        "experience" => &mut weights.experience,
        "interest" => &mut weights.interest,
        "growth" => &mut weights.growth,
        other => {
            return Err(CareerMatcherError::InvalidInput(format!(
                "Unknown weight: {}",
                other
            )))
        }
    };
    *slot = parsed;
    Ok(())
}

fn parse_bool(key: &str, value: &str) -> Result<bool> {
    let parsed = value
        .parse::<bool>()
        .with_context(|| format!("{} expects true or false, got '{}'", key, value))?;
    Ok(parsed)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_is_valid() {
        let config = Config::default();
        assert!(config.validate().is_ok());
        assert_eq!(config.matching.top_n, 5);
        assert!(!config.matching.clamp_composite);
    }

    #[test]
    fn test_save_and_load_roundtrip() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join("config.toml");

        let mut config = Config::default();
        config.matching.top_n = 3;
        config.output.format = OutputFormat::Markdown;
        config.save_to(&path).unwrap();

        let loaded = Config::load_from(&path).unwrap();
        assert_eq!(loaded, config);
    }

    #[test]
    fn test_load_creates_default_when_missing() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");

        let loaded = Config::load_from(&path).unwrap();
        assert_eq!(loaded, Config::default());
        assert!(path.exists());
    }

    #[test]
    fn test_set_value() {
        let mut config = Config::default();
        config.set_value("matching.top_n", "3").unwrap();
        config.set_value("matching.clamp_composite", "true").unwrap();
        config.set_value("output.format", "json").unwrap();
        config.set_value("matching.catalog_path", "careers.toml").unwrap();

        assert_eq!(config.matching.top_n, 3);
        assert!(config.matching.clamp_composite);
        assert_eq!(config.output.format, OutputFormat::Json);
        assert_eq!(config.matching.catalog_path, Some(PathBuf::from("careers.toml")));
    }

    #[test]
    fn test_set_value_rejects_bad_input_and_keeps_state() {
        let mut config = Config::default();

        assert!(config.set_value("matching.top_n", "many").is_err());
        assert!(config.set_value("matching.top_n", "0").is_err());
        // a single weight change breaks the sum-to-one rule
        assert!(config.set_value("matching.weights.growth", "0.5").is_err());
        assert!(config.set_value("matching.weights.luck", "0.1").is_err());
        assert!(config.set_value("matching.weights", "technical=0.5").is_err());
        assert!(config.set_value("matching.weights", "technical").is_err());
        assert!(config.set_value("matching.weights", "technical=0.30,luck=0").is_err());
        assert!(config.set_value("matching.weights", "").is_err());
        assert!(config.set_value("nonsense", "1").is_err());

        assert_eq!(config, Config::default());
    }

    #[test]
    fn test_set_weights_together_and_reload() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");

        let mut config = Config::load_from(&path).unwrap();
        config
            .set_value("matching.weights", "technical=0.30, growth=0.05")
            .unwrap();
        config.save_to(&path).unwrap();

        let loaded = Config::load_from(&path).unwrap();
        let weights = loaded.matching.weights;
        assert_eq!(weights.technical, 0.30);
        assert_eq!(weights.growth, 0.05);
        assert_eq!(weights.soft, 0.15);
        assert_eq!(weights.education, 0.20);
        assert!((weights.sum() - 1.0).abs() < 1e-9);
    }

    #[test]
    fn test_single_weight_error_suggests_grouped_form() {
        let mut config = Config::default();
        let err = config.set_value("matching.weights.growth", "0.5").unwrap_err();
        assert!(err.to_string().contains("matching.weights \"name=value"));
    }

    #[test]
    fn test_invalid_file_can_be_read_repaired_and_reset() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");

        let mut broken = Config::default();
        broken.matching.weights.growth = 0.5;
        broken.save_to(&path).unwrap();

        assert!(Config::load_from(&path).is_err());

        let mut repaired = Config::read_from(&path).unwrap();
        repaired.set_value("matching.weights", "growth=0.10").unwrap();
        repaired.save_to(&path).unwrap();
        assert_eq!(Config::load_from(&path).unwrap(), Config::default());

        broken.save_to(&path).unwrap();
        assert_eq!(Config::reset_at(&path).unwrap(), Config::default());
        assert_eq!(Config::load_from(&path).unwrap(), Config::default());
    }

    #[test]
    fn test_reset_overwrites_unparseable_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(&path, "[matching\ntop_n = ").unwrap();

        assert!(Config::read_from(&path).is_err());
        Config::reset_at(&path).unwrap();
        assert_eq!(Config::load_from(&path).unwrap(), Config::default());
    }
}
