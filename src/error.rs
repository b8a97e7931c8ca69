//! Error handling for the career matcher

use thiserror::Error;

#[derive(Error, Debug)]
pub enum CareerMatcherError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Configuration error: {0}")]
    Configuration(String),

    #[error("Taxonomy error: {0}")]
    Taxonomy(String),

    #[error("Skill matching error: {0}")]
    SkillMatching(String),

    #[error("Similarity error: {0}")]
    Similarity(String),

    #[error("Scoring failed: {0}")]
    Scoring(String),

    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, CareerMatcherError>;

impl From<toml::de::Error> for CareerMatcherError {
    fn from(err: toml::de::Error) -> Self {
        CareerMatcherError::Configuration(err.to_string())
    }
}

impl From<aho_corasick::BuildError> for CareerMatcherError {
    fn from(err: aho_corasick::BuildError) -> Self {
        CareerMatcherError::SkillMatching(err.to_string())
    }
}
