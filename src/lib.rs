//! Career matcher library
//!
//! Extracts known skills from resume text, scores them against a taxonomy of
//! career profiles, detects technology stacks and ranks careers with
//! questionnaire interests. The free functions below run against the
//! built-in taxonomy and default configuration; [`AnalysisEngine`] takes a
//! custom one.

pub mod config;
pub mod error;
pub mod processing;
pub mod questionnaire;
pub mod taxonomy;

pub use config::Config;
pub use error::{CareerMatcherError, Result};
pub use processing::analyzer::{AnalysisEngine, AnalysisReport, AnalysisSummary, StageOutcome};
pub use processing::career_scorer::{CareerMatch, CareerScorer, MatchTier};
pub use processing::ranker::{PreferenceRanker, RankedRecommendation};
pub use processing::skill_extractor::{ExtractedSkillSet, SkillExtractor};
pub use processing::stack::StackDetection;
pub use processing::study_focus::StudyFocus;
pub use questionnaire::QuestionnaireAnswers;
pub use taxonomy::Taxonomy;

use config::{RankingConfig, ScoringConfig};
use once_cell::sync::Lazy;
use std::collections::HashSet;

static DEFAULT_EXTRACTOR: Lazy<Result<SkillExtractor>> =
    Lazy::new(|| SkillExtractor::new(&Taxonomy::builtin()));

/// Known skills occurring in `resume_text`.
pub fn extract_skills(resume_text: &str) -> Result<ExtractedSkillSet> {
    match &*DEFAULT_EXTRACTOR {
        Ok(extractor) => Ok(extractor.extract(resume_text)),
        Err(e) => Err(CareerMatcherError::SkillMatching(e.to_string())),
    }
}

/// One match per built-in career, best first.
pub fn score_careers(skills: &ExtractedSkillSet, resume_text: &str) -> Result<Vec<CareerMatch>> {
    let taxonomy = Taxonomy::builtin();
    let scoring = ScoringConfig::default();
    CareerScorer::new(&taxonomy, &scoring).score(skills, resume_text)
}

pub fn detect_stacks(skills: &ExtractedSkillSet) -> Vec<StackDetection> {
    processing::stack::detect_stacks(&Taxonomy::builtin(), skills)
}

pub fn filter_career_skills(career: &str, stack: &str) -> Vec<String> {
    processing::stack::filter_career_skills(&Taxonomy::builtin(), career, stack)
}

pub fn rank_with_preferences(
    matches: &[CareerMatch],
    interested_careers: &HashSet<String>,
    active_stack: Option<&str>,
) -> Result<Vec<RankedRecommendation>> {
    let taxonomy = Taxonomy::builtin();
    let ranking = RankingConfig::default();
    let scoring = ScoringConfig::default();
    PreferenceRanker::new(&taxonomy, &ranking, &scoring).rank(matches, interested_careers, active_stack)
}
