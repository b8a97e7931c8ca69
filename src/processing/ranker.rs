//! Interest-boosted ranking of career matches

use super::career_scorer::CareerMatch;
use super::round2;
use super::stack::filter_career_skills;
use crate::config::{RankingConfig, ScoringConfig};
use crate::error::Result;
use crate::taxonomy::Taxonomy;
use log::{debug, warn};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RankedRecommendation {
    pub career: String,
    pub base_probability: f64,
    pub boosted_probability: f64,
    pub interested: bool,
    pub missing_skills: Vec<String>,
    pub matched_skills_count: usize,
    pub total_required_skills: usize,
}

pub struct PreferenceRanker<'a> {
    taxonomy: &'a Taxonomy,
    ranking: &'a RankingConfig,
    scoring: &'a ScoringConfig,
}

impl<'a> PreferenceRanker<'a> {
    pub fn new(taxonomy: &'a Taxonomy, ranking: &'a RankingConfig, scoring: &'a ScoringConfig) -> Self {
        Self {
            taxonomy,
            ranking,
            scoring,
        }
    }

    /// Boost declared interests and order by the boosted probability.
    ///
    /// Interested careers without a match get an entry of their own with a
    /// zero base. Ties keep match order, then taxonomy order for synthesised
    /// entries.
    pub fn rank(
        &self,
        matches: &[CareerMatch],
        interested: &HashSet<String>,
        active_stack: Option<&str>,
    ) -> Result<Vec<RankedRecommendation>> {
        self.ranking.validate()?;

        // Every match comes from the same resume, so their matched skills
        // together are the skills it owns.
        let owned: HashSet<String> = matches
            .iter()
            .flat_map(|m| m.matched_skills.iter().map(|s| s.to_lowercase()))
            .collect();

        let mut ranked: Vec<RankedRecommendation> = matches
            .iter()
            .map(|m| self.rank_match(m, interested.contains(&m.career), active_stack, &owned))
            .collect();

        let scored: HashSet<&str> = matches.iter().map(|m| m.career.as_str()).collect();
        for name in interested {
            if self.taxonomy.career(name).is_none() {
                warn!("Ignoring interest in unknown career {:?}", name);
            }
        }
        for profile in self.taxonomy.careers() {
            if interested.contains(&profile.name) && !scored.contains(profile.name.as_str()) {
                debug!("Synthesising recommendation for unscored career {}", profile.name);
                let missing_skills = match active_stack {
                    Some(stack) => filter_career_skills(self.taxonomy, &profile.name, stack),
                    None => profile.skills.clone(),
                };
                ranked.push(RankedRecommendation {
                    career: profile.name.clone(),
                    base_probability: 0.0,
                    boosted_probability: self.boost(0.0),
                    interested: true,
                    missing_skills,
                    matched_skills_count: 0,
                    total_required_skills: profile.skills.len(),
                });
            }
        }

        ranked.sort_by(|a, b| b.boosted_probability.total_cmp(&a.boosted_probability));
        Ok(ranked)
    }

    fn rank_match(
        &self,
        m: &CareerMatch,
        interested: bool,
        active_stack: Option<&str>,
        owned: &HashSet<String>,
    ) -> RankedRecommendation {
        // Overrides may name skills outside the career's own list, so the
        // filtered list is checked against everything the resume owns.
        let missing_skills = match active_stack {
            Some(stack) => filter_career_skills(self.taxonomy, &m.career, stack)
                .into_iter()
                .filter(|skill| !owned.contains(&skill.to_lowercase()))
                .take(self.scoring.missing_skills_cap)
                .collect(),
            None => m.missing_skills.clone(),
        };

        RankedRecommendation {
            career: m.career.clone(),
            base_probability: m.probability,
            boosted_probability: if interested { self.boost(m.probability) } else { m.probability },
            interested,
            missing_skills,
            matched_skills_count: m.matched_skills_count,
            total_required_skills: m.total_required_skills,
        }
    }

    fn boost(&self, probability: f64) -> f64 {
        round2((probability + self.ranking.interest_boost).min(self.ranking.max_probability))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::processing::career_scorer::CareerScorer;
    use crate::processing::skill_extractor::SkillExtractor;

    fn career_match(career: &str, probability: f64) -> CareerMatch {
        CareerMatch {
            career: career.to_string(),
            probability,
            skill_match_percentage: probability,
            semantic_match_percentage: 0.0,
            matched_skills: vec!["Python".to_string()],
            missing_skills: vec!["SQL".to_string()],
            total_required_skills: 2,
            matched_skills_count: 1,
            semantic_fallback: false,
        }
    }

    fn interests(names: &[&str]) -> HashSet<String> {
        names.iter().map(|s| s.to_string()).collect()
    }

    fn rank(matches: &[CareerMatch], interested: &HashSet<String>, stack: Option<&str>) -> Vec<RankedRecommendation> {
        let taxonomy = Taxonomy::builtin();
        let ranking = RankingConfig::default();
        let scoring = ScoringConfig::default();
        PreferenceRanker::new(&taxonomy, &ranking, &scoring)
            .rank(matches, interested, stack)
            .unwrap()
    }

    #[test]
    fn test_boost_is_capped() {
        let matches = vec![career_match("Software Engineer", 90.0), career_match("Data Scientist", 85.0)];
        let ranked = rank(&matches, &interests(&["Data Scientist"]), None);

        assert_eq!(ranked[0].career, "Data Scientist");
        assert_eq!(ranked[0].boosted_probability, 100.0);
        assert_eq!(ranked[0].base_probability, 85.0);
        assert!(ranked[0].interested);
        assert_eq!(ranked[1].boosted_probability, 90.0);
        assert!(!ranked[1].interested);
    }

    #[test]
    fn test_boost_reorders() {
        let matches = vec![career_match("Software Engineer", 40.0), career_match("Data Analyst", 30.0)];
        let ranked = rank(&matches, &interests(&["Data Analyst"]), None);

        assert_eq!(ranked[0].career, "Data Analyst");
        assert_eq!(ranked[0].boosted_probability, 50.0);
        assert_eq!(ranked[1].boosted_probability, 40.0);
    }

    #[test]
    fn test_no_interests_passes_through() {
        let matches = vec![career_match("Software Engineer", 40.0), career_match("Data Analyst", 30.0)];
        let ranked = rank(&matches, &HashSet::new(), None);

        assert_eq!(ranked.len(), 2);
        assert!(ranked.iter().all(|r| r.base_probability == r.boosted_probability));
        assert_eq!(ranked[0].missing_skills, vec!["SQL"]);
    }

    #[test]
    fn test_synthesised_entry_for_unscored_interest() {
        let taxonomy = Taxonomy::builtin();
        let ranked = rank(&[], &interests(&["Cloud Architect"]), None);

        assert_eq!(ranked.len(), 1);
        assert_eq!(ranked[0].base_probability, 0.0);
        assert_eq!(ranked[0].boosted_probability, 20.0);
        assert_eq!(ranked[0].missing_skills, taxonomy.career("Cloud Architect").unwrap().skills);
        assert_eq!(ranked[0].total_required_skills, 21);
    }

    #[test]
    fn test_unknown_interest_is_skipped() {
        let ranked = rank(&[], &interests(&["Astronaut"]), None);
        assert!(ranked.is_empty());
    }

    #[test]
    fn test_active_stack_filters_missing() {
        let mut m = career_match("Software Engineer", 50.0);
        m.matched_skills = vec!["Java".to_string(), "Git".to_string()];
        let ranked = rank(&[m], &HashSet::new(), Some("Java"));

        let missing = &ranked[0].missing_skills;
        assert!(missing.contains(&"Docker".to_string()));
        assert!(!missing.contains(&"Java".to_string()));
        assert!(!missing.contains(&"Git".to_string()));
        assert!(!missing.contains(&"Python".to_string()));
        assert!(missing.len() <= 10);
        assert_eq!(ranked[0].matched_skills_count, 1);
    }

    #[test]
    fn test_override_skills_owned_by_resume_not_missing() {
        let taxonomy = Taxonomy::builtin();
        let scoring = ScoringConfig::default();
        let text = "Python, Django, Flask, Git, Docker";
        let extractor = SkillExtractor::new(&taxonomy).unwrap();
        let skills = extractor.extract(text);
        let matches = CareerScorer::new(&taxonomy, &scoring).score(&skills, text).unwrap();

        let ranked = rank(&matches, &HashSet::new(), Some("Python"));
        let full_stack = ranked.iter().find(|r| r.career == "Full Stack Developer").unwrap();

        let owned = skills.lowercase_set();
        assert!(full_stack.missing_skills.iter().all(|s| !owned.contains(&s.to_lowercase())));
        assert_eq!(full_stack.missing_skills[0], "JavaScript");
    }

    #[test]
    fn test_custom_boost() {
        let taxonomy = Taxonomy::builtin();
        let ranking = RankingConfig {
            interest_boost: 5.0,
            ..RankingConfig::default()
        };
        let scoring = ScoringConfig::default();
        let ranked = PreferenceRanker::new(&taxonomy, &ranking, &scoring)
            .rank(&[career_match("Data Scientist", 10.0)], &interests(&["Data Scientist"]), None)
            .unwrap();
        assert_eq!(ranked[0].boosted_probability, 15.0);
    }
}
