//! Combined skill-overlap and keyword-similarity scoring per career

use super::round2;
use super::skill_extractor::ExtractedSkillSet;
use super::text_processor::TextProcessor;
use crate::config::ScoringConfig;
use crate::error::{CareerMatcherError, Result};
use crate::taxonomy::{CareerProfile, Taxonomy};
use log::{debug, info, warn};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CareerMatch {
    pub career: String,
    /// Weighted combination of the two percentages, 0-100
    pub probability: f64,
    pub skill_match_percentage: f64,
    pub semantic_match_percentage: f64,
    pub matched_skills: Vec<String>,
    /// Required skills not matched, taxonomy order, capped
    pub missing_skills: Vec<String>,
    pub total_required_skills: usize,
    pub matched_skills_count: usize,
    /// Set when the similarity metric failed and contributed 0
    #[serde(default)]
    pub semantic_fallback: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum MatchTier {
    Excellent,
    Good,
    Fair,
    NeedsDevelopment,
}

impl MatchTier {
    pub fn from_probability(probability: f64) -> Self {
        if probability >= 70.0 {
            MatchTier::Excellent
        } else if probability >= 50.0 {
            MatchTier::Good
        } else if probability >= 30.0 {
            MatchTier::Fair
        } else {
            MatchTier::NeedsDevelopment
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            MatchTier::Excellent => "Excellent",
            MatchTier::Good => "Good",
            MatchTier::Fair => "Fair",
            MatchTier::NeedsDevelopment => "Needs Development",
        }
    }
}

impl CareerMatch {
    pub fn tier(&self) -> MatchTier {
        MatchTier::from_probability(self.probability)
    }
}

pub struct CareerScorer<'a> {
    taxonomy: &'a Taxonomy,
    config: &'a ScoringConfig,
    text_processor: TextProcessor,
}

impl<'a> CareerScorer<'a> {
    pub fn new(taxonomy: &'a Taxonomy, config: &'a ScoringConfig) -> Self {
        Self {
            taxonomy,
            config,
            text_processor: TextProcessor::new(),
        }
    }

    /// Score every career in the taxonomy, best match first.
    ///
    /// Ties keep taxonomy order. An unusable configuration fails the whole
    /// batch; a similarity fault only zeroes that career's semantic share.
    pub fn score(&self, skills: &ExtractedSkillSet, resume_text: &str) -> Result<Vec<CareerMatch>> {
        self.config
            .validate()
            .map_err(|e| CareerMatcherError::Scoring(e.to_string()))?;

        let owned = skills.lowercase_set();
        let resume_lower = resume_text.to_lowercase();

        let mut matches: Vec<CareerMatch> = self
            .taxonomy
            .careers()
            .iter()
            .map(|career| self.score_career(career, &owned, &resume_lower))
            .collect();

        matches.sort_by(|a, b| b.probability.total_cmp(&a.probability));

        if let Some(best) = matches.first() {
            info!("Top career: {} ({}%)", best.career, best.probability);
        }
        Ok(matches)
    }

    fn score_career(&self, career: &CareerProfile, owned: &HashSet<String>, resume_lower: &str) -> CareerMatch {
        let (matched_skills, missing): (Vec<String>, Vec<String>) = career
            .skills
            .iter()
            .cloned()
            .partition(|skill| owned.contains(&skill.to_lowercase()));

        let total_required_skills = career.skills.len();
        let skill_match_percentage = skill_match_percentage(matched_skills.len(), total_required_skills);

        let keyword_text = career.keywords.join(" ").to_lowercase();
        let (semantic_match_percentage, semantic_fallback) =
            match self.text_processor.semantic_similarity(resume_lower, &keyword_text) {
                Ok(score) => (score, false),
                Err(e) => {
                    warn!("Semantic similarity unavailable for {}: {}", career.name, e);
                    (0.0, true)
                }
            };

        let probability = round2(
            self.config.skill_weight * skill_match_percentage
                + self.config.semantic_weight * semantic_match_percentage,
        )
        .clamp(0.0, 100.0);

        debug!(
            "{}: skills {}%, semantic {}%, combined {}%",
            career.name, skill_match_percentage, semantic_match_percentage, probability
        );

        CareerMatch {
            career: career.name.clone(),
            probability,
            skill_match_percentage,
            semantic_match_percentage,
            matched_skills_count: matched_skills.len(),
            matched_skills,
            missing_skills: missing.into_iter().take(self.config.missing_skills_cap).collect(),
            total_required_skills,
            semantic_fallback,
        }
    }
}

/// Share of required skills present, 0 when nothing is required.
pub fn skill_match_percentage(matched: usize, required: usize) -> f64 {
    if required == 0 {
        return 0.0;
    }
    round2(matched as f64 / required as f64 * 100.0)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn skills(names: &[&str]) -> ExtractedSkillSet {
        names.iter().map(|s| s.to_string()).collect()
    }

    fn small_taxonomy() -> Taxonomy {
        Taxonomy::from_parts(
            vec![
                CareerProfile::new("Analyst", &["SQL", "Excel", "Tableau"], &["analytics", "reporting"]),
                CareerProfile::new("Designer", &["Figma", "Sketch"], &["design", "interface"]),
                CareerProfile::new("Writer", &["Editing", "Research"], &["writing", "content"]),
            ],
            Vec::new(),
            Vec::new(),
        )
        .unwrap()
    }

    #[test]
    fn test_skill_match_percentage() {
        assert_eq!(skill_match_percentage(0, 0), 0.0);
        assert_eq!(skill_match_percentage(1, 3), 33.33);
        assert_eq!(skill_match_percentage(2, 3), 66.67);
        assert_eq!(skill_match_percentage(3, 3), 100.0);
    }

    #[test]
    fn test_scores_every_career_sorted() {
        let taxonomy = small_taxonomy();
        let config = ScoringConfig::default();
        let scorer = CareerScorer::new(&taxonomy, &config);

        let text = "sql and excel for analytics";
        let matches = scorer.score(&skills(&["SQL", "excel"]), text).unwrap();

        assert_eq!(matches.len(), 3);
        assert_eq!(matches[0].career, "Analyst");
        assert_eq!(matches[0].matched_skills, vec!["SQL", "Excel"]);
        assert_eq!(matches[0].missing_skills, vec!["Tableau"]);
        assert_eq!(matches[0].skill_match_percentage, 66.67);
        // Both zero-score careers keep taxonomy order
        assert_eq!(matches[1].career, "Designer");
        assert_eq!(matches[2].career, "Writer");
    }

    #[test]
    fn test_probability_combines_weighted_parts() {
        let taxonomy = Taxonomy::builtin();
        let config = ScoringConfig::default();
        let scorer = CareerScorer::new(&taxonomy, &config);

        let text = "Python developer building cloud infrastructure with Docker and AWS";
        let extracted = skills(&["Python", "Docker", "AWS"]);
        for m in scorer.score(&extracted, text).unwrap() {
            let expected = round2(0.7 * m.skill_match_percentage + 0.3 * m.semantic_match_percentage);
            assert_eq!(m.probability, expected);
            assert!(m.missing_skills.len() <= 10);
            assert!(m.missing_skills.iter().all(|s| !m.matched_skills.contains(s)));
        }
    }

    #[test]
    fn test_custom_weights() {
        let taxonomy = small_taxonomy();
        let config = ScoringConfig {
            skill_weight: 1.0,
            semantic_weight: 0.0,
            ..ScoringConfig::default()
        };
        let scorer = CareerScorer::new(&taxonomy, &config);

        let matches = scorer.score(&skills(&["Figma"]), "figma").unwrap();
        assert_eq!(matches[0].career, "Designer");
        assert_eq!(matches[0].probability, 50.0);
    }

    #[test]
    fn test_invalid_weights_fail_batch() {
        let taxonomy = small_taxonomy();
        let config = ScoringConfig {
            skill_weight: f64::NAN,
            ..ScoringConfig::default()
        };
        let scorer = CareerScorer::new(&taxonomy, &config);

        assert!(matches!(
            scorer.score(&skills(&[]), "text"),
            Err(CareerMatcherError::Scoring(_))
        ));
    }

    #[test]
    fn test_stop_word_only_resume_falls_back() {
        let taxonomy = small_taxonomy();
        let config = ScoringConfig::default();
        let scorer = CareerScorer::new(&taxonomy, &config);

        let matches = scorer.score(&skills(&[]), "").unwrap();
        assert!(matches.iter().all(|m| m.semantic_match_percentage == 0.0));
        assert!(matches.iter().all(|m| m.probability == 0.0));
    }

    #[test]
    fn test_missing_skills_capped() {
        let taxonomy = Taxonomy::builtin();
        let config = ScoringConfig::default();
        let scorer = CareerScorer::new(&taxonomy, &config);

        let matches = scorer.score(&skills(&[]), "").unwrap();
        let engineer = matches.iter().find(|m| m.career == "Software Engineer").unwrap();
        assert_eq!(engineer.missing_skills.len(), 10);
        assert_eq!(engineer.missing_skills[0], "Python");
        assert_eq!(engineer.total_required_skills, 31);
    }

    #[test]
    fn test_tiers() {
        assert_eq!(MatchTier::from_probability(70.0), MatchTier::Excellent);
        assert_eq!(MatchTier::from_probability(55.5), MatchTier::Good);
        assert_eq!(MatchTier::from_probability(30.0), MatchTier::Fair);
        assert_eq!(MatchTier::from_probability(29.99), MatchTier::NeedsDevelopment);
        assert_eq!(MatchTier::NeedsDevelopment.label(), "Needs Development");
    }
}
