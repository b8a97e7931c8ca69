//! Configuration management for the career matcher

use crate::error::{CareerMatcherError, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub scoring: ScoringConfig,
    pub ranking: RankingConfig,
    pub taxonomy: TaxonomyConfig,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ScoringConfig {
    /// Weight of the required-skill overlap percentage
    pub skill_weight: f64,
    /// Weight of the keyword similarity percentage
    pub semantic_weight: f64,
    pub missing_skills_cap: usize,
    pub top_n: usize,
    pub skills_to_focus: usize,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RankingConfig {
    /// Percentage points added to careers the user declared interest in
    pub interest_boost: f64,
    pub max_probability: f64,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TaxonomyConfig {
    /// Replaces the built-in career tables when set
    pub path: Option<PathBuf>,
}

impl Default for ScoringConfig {
    fn default() -> Self {
        Self {
            skill_weight: 0.7,
            semantic_weight: 0.3,
            missing_skills_cap: 10,
            top_n: 3,
            skills_to_focus: 5,
        }
    }
}

impl Default for RankingConfig {
    fn default() -> Self {
        Self {
            interest_boost: 20.0,
            max_probability: 100.0,
        }
    }
}

impl ScoringConfig {
    /// Reject weights that would push probabilities out of range.
    pub fn validate(&self) -> Result<()> {
        for (name, weight) in [
            ("skill_weight", self.skill_weight),
            ("semantic_weight", self.semantic_weight),
        ] {
            if !weight.is_finite() || weight < 0.0 {
                return Err(CareerMatcherError::Configuration(format!(
                    "{} must be a finite non-negative number, got {}",
                    name, weight
                )));
            }
        }
        if self.skill_weight + self.semantic_weight > 1.0 + f64::EPSILON {
            return Err(CareerMatcherError::Configuration(format!(
                "scoring weights sum to {}, expected at most 1.0",
                self.skill_weight + self.semantic_weight
            )));
        }
        Ok(())
    }
}

impl RankingConfig {
    pub fn validate(&self) -> Result<()> {
        if !self.interest_boost.is_finite() || self.interest_boost < 0.0 {
            return Err(CareerMatcherError::Configuration(format!(
                "interest_boost must be a finite non-negative number, got {}",
                self.interest_boost
            )));
        }
        if !self.max_probability.is_finite() || self.max_probability <= 0.0 || self.max_probability > 100.0 {
            return Err(CareerMatcherError::Configuration(format!(
                "max_probability must be in (0, 100], got {}",
                self.max_probability
            )));
        }
        Ok(())
    }
}

impl Config {
    /// Load from the default location, falling back to defaults when absent.
    pub fn load() -> Result<Self> {
        let config_path = Self::config_path();

        if config_path.exists() {
            Self::load_from(&config_path)
        } else {
            Ok(Self::default())
        }
    }

    pub fn load_from(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        let config: Config = toml::from_str(&content)
            .map_err(|e| CareerMatcherError::Configuration(format!("Failed to parse config: {}", e)))?;
        config.validate()?;
        Ok(config)
    }

    pub fn save_to(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let content = toml::to_string_pretty(self)
            .map_err(|e| CareerMatcherError::Configuration(format!("Failed to serialize config: {}", e)))?;

        std::fs::write(path, content)?;
        Ok(())
    }

    pub fn validate(&self) -> Result<()> {
        self.scoring.validate()?;
        self.ranking.validate()
    }

    pub fn config_path() -> PathBuf {
        dirs::config_dir()
            .unwrap_or_else(|| dirs::home_dir().unwrap_or_else(|| PathBuf::from(".")))
            .join("career-matcher")
            .join("config.toml")
    }
}
