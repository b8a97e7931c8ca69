//! Bounded skill list handed to study-plan generation

use crate::error::{CareerMatcherError, Result};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;

pub const MAX_FOCUS_SKILLS: usize = 7;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StudyFocus {
    pub target_career: String,
    pub skills: Vec<String>,
}

impl StudyFocus {
    pub fn new(target_career: &str, missing_skills: &[String]) -> Result<Self> {
        let target_career = target_career.trim();
        if target_career.is_empty() {
            return Err(CareerMatcherError::InvalidInput("target career must not be empty".to_string()));
        }

        let mut seen = HashSet::new();
        let skills: Vec<String> = missing_skills
            .iter()
            .map(|s| s.trim())
            .filter(|s| !s.is_empty() && seen.insert(s.to_lowercase()))
            .take(MAX_FOCUS_SKILLS)
            .map(str::to_string)
            .collect();

        if skills.is_empty() {
            return Err(CareerMatcherError::InvalidInput(format!(
                "no skills to study for {}",
                target_career
            )));
        }

        Ok(Self {
            target_career: target_career.to_string(),
            skills,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn owned(items: &[&str]) -> Vec<String> {
        items.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_normalises_and_caps() {
        let missing = owned(&["  Docker ", "docker", "", "AWS", "Kubernetes", "Terraform", "Linux", "Git", "Nginx", "Jenkins"]);
        let focus = StudyFocus::new(" DevOps Engineer ", &missing).unwrap();

        assert_eq!(focus.target_career, "DevOps Engineer");
        assert_eq!(focus.skills.len(), MAX_FOCUS_SKILLS);
        assert_eq!(focus.skills[0], "Docker");
        assert_eq!(focus.skills[1], "AWS");
    }

    #[test]
    fn test_rejects_empty_input() {
        assert!(matches!(
            StudyFocus::new("  ", &owned(&["SQL"])),
            Err(CareerMatcherError::InvalidInput(_))
        ));
        assert!(matches!(
            StudyFocus::new("Data Analyst", &owned(&[" ", ""])),
            Err(CareerMatcherError::InvalidInput(_))
        ));
    }
}
