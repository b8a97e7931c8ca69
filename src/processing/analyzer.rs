//! Analysis engine running extraction, scoring and stack detection in sequence

use crate::config::Config;
use crate::error::Result;
use crate::processing::career_scorer::{CareerMatch, CareerScorer};
use crate::processing::ranker::{PreferenceRanker, RankedRecommendation};
use crate::processing::skill_extractor::{ExtractedSkillSet, SkillExtractor};
use crate::processing::stack::{detect_stacks, StackDetection};
use crate::processing::study_focus::StudyFocus;
use crate::questionnaire::QuestionnaireAnswers;
use crate::taxonomy::Taxonomy;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use std::time::Instant;

/// Result of one pipeline stage.
///
/// `Failed` means the stage produced nothing usable; a stage that degraded a
/// single metric still reports `Completed`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "status", content = "value", rename_all = "snake_case")]
pub enum StageOutcome<T> {
    Completed(T),
    Failed { stage: String, message: String },
}

impl<T> StageOutcome<T> {
    pub fn is_failed(&self) -> bool {
        matches!(self, StageOutcome::Failed { .. })
    }

    pub fn value(&self) -> Option<&T> {
        match self {
            StageOutcome::Completed(value) => Some(value),
            StageOutcome::Failed { .. } => None,
        }
    }

    pub fn error_message(&self) -> Option<&str> {
        match self {
            StageOutcome::Completed(_) => None,
            StageOutcome::Failed { message, .. } => Some(message),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnalysisReport {
    /// Extraction has no failure mode once the engine is built, so the
    /// skills are held directly rather than as a stage outcome.
    pub skills: ExtractedSkillSet,
    pub career_matches: StageOutcome<Vec<CareerMatch>>,
    pub top_careers: Vec<CareerMatch>,
    pub stacks: Vec<StackDetection>,
    /// Most confident detected stack
    pub active_stack: Option<String>,
    pub summary: AnalysisSummary,
    pub processing_time_ms: u64,
    pub generated_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AnalysisSummary {
    pub best_match: Option<String>,
    pub best_match_probability: f64,
    pub skills_to_focus: Vec<String>,
}

impl AnalysisReport {
    /// All career matches, empty when scoring failed
    pub fn matches(&self) -> &[CareerMatch] {
        self.career_matches.value().map(Vec::as_slice).unwrap_or(&[])
    }

    pub fn extracted_skills(&self) -> &ExtractedSkillSet {
        &self.skills
    }

    /// Study-plan input for the best match's missing skills
    pub fn study_focus(&self) -> Result<StudyFocus> {
        let career = self.summary.best_match.as_deref().unwrap_or_default();
        let best_missing = self
            .matches()
            .first()
            .map(|m| m.missing_skills.as_slice())
            .unwrap_or(&[]);
        StudyFocus::new(career, best_missing)
    }

    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}

/// Runs the career-matching pipeline against one taxonomy and configuration
pub struct AnalysisEngine {
    taxonomy: Arc<Taxonomy>,
    extractor: SkillExtractor,
    config: Config,
}

impl AnalysisEngine {
    pub fn new(taxonomy: Arc<Taxonomy>, config: Config) -> Result<Self> {
        config.validate()?;
        let extractor = SkillExtractor::new(&taxonomy)?;

        Ok(Self {
            taxonomy,
            extractor,
            config,
        })
    }

    /// Built-in taxonomy unless the configuration names a taxonomy file
    pub fn from_config(config: &Config) -> Result<Self> {
        let taxonomy = match &config.taxonomy.path {
            Some(path) => {
                log::info!("Loading taxonomy from {}", path.display());
                Arc::new(Taxonomy::from_file(path)?)
            }
            None => Taxonomy::builtin(),
        };
        Self::new(taxonomy, config.clone())
    }

    pub fn taxonomy(&self) -> &Taxonomy {
        &self.taxonomy
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    pub fn analyze(&self, resume_text: &str) -> AnalysisReport {
        let start_time = Instant::now();

        // 1. Skill extraction
        let extracted = self.extractor.extract(resume_text);
        log::info!("Extracted {} skills from resume", extracted.count);
        if extracted.is_empty() {
            log::warn!("No recognizable skills found in resume");
        }

        // 2. Career scoring
        let scorer = CareerScorer::new(&self.taxonomy, &self.config.scoring);
        let career_matches = match scorer.score(&extracted, resume_text) {
            Ok(matches) => StageOutcome::Completed(matches),
            Err(e) => {
                log::error!("Career scoring failed: {}", e);
                StageOutcome::Failed {
                    stage: "career_scoring".to_string(),
                    message: e.to_string(),
                }
            }
        };

        // 3. Stack detection
        let stacks = detect_stacks(&self.taxonomy, &extracted);
        let active_stack = stacks.first().map(|d| d.stack.clone());
        if let Some(stack) = &active_stack {
            log::info!("Active stack: {}", stack);
        }

        let matches = career_matches.value().map(Vec::as_slice).unwrap_or(&[]);
        let top_careers: Vec<CareerMatch> = matches.iter().take(self.config.scoring.top_n).cloned().collect();
        let summary = match matches.first() {
            Some(best) => AnalysisSummary {
                best_match: Some(best.career.clone()),
                best_match_probability: best.probability,
                skills_to_focus: best
                    .missing_skills
                    .iter()
                    .take(self.config.scoring.skills_to_focus)
                    .cloned()
                    .collect(),
            },
            None => AnalysisSummary::default(),
        };

        AnalysisReport {
            skills: extracted,
            career_matches,
            top_careers,
            stacks,
            active_stack,
            summary,
            processing_time_ms: start_time.elapsed().as_millis() as u64,
            generated_at: Utc::now(),
        }
    }

    /// Rank the report's matches against questionnaire interests.
    ///
    /// An explicit `stack` takes precedence over the detected one.
    pub fn recommend(
        &self,
        report: &AnalysisReport,
        answers: &QuestionnaireAnswers,
        stack: Option<&str>,
    ) -> Result<Vec<RankedRecommendation>> {
        let interested = answers.interested_careers();
        let stack = stack.or(report.active_stack.as_deref());
        log::debug!(
            "Ranking {} matches with {} declared interests (stack: {:?})",
            report.matches().len(),
            interested.len(),
            stack
        );

        PreferenceRanker::new(&self.taxonomy, &self.config.ranking, &self.config.scoring).rank(
            report.matches(),
            &interested,
            stack,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::CareerMatcherError;

    const RESUME: &str = "Backend developer. Python, Django and PostgreSQL services on AWS, \
                          deployed with Docker and Kubernetes. Git, CI/CD, REST API design.";

    fn engine() -> AnalysisEngine {
        AnalysisEngine::new(Taxonomy::builtin(), Config::default()).unwrap()
    }

    #[test]
    fn test_analyze_resume() {
        let report = engine().analyze(RESUME);

        let skills = report.extracted_skills();
        assert!(skills.contains("Django"));
        assert!(skills.contains("Kubernetes"));

        assert_eq!(report.matches().len(), 12);
        assert_eq!(report.top_careers.len(), 3);
        assert_eq!(report.summary.best_match.as_deref(), Some(report.matches()[0].career.as_str()));
        assert!(report.summary.skills_to_focus.len() <= 5);
        assert_eq!(report.active_stack.as_deref(), Some("Python"));
    }

    #[test]
    fn test_analyze_empty_resume() {
        let report = engine().analyze("");

        assert!(report.extracted_skills().is_empty());
        assert!(report.matches().iter().all(|m| m.skill_match_percentage == 0.0));
        assert!(report.stacks.is_empty());
        assert!(report.active_stack.is_none());
    }

    #[test]
    fn test_invalid_config_rejected() {
        let mut config = Config::default();
        config.scoring.skill_weight = -1.0;
        assert!(matches!(
            AnalysisEngine::new(Taxonomy::builtin(), config),
            Err(CareerMatcherError::Configuration(_))
        ));
    }

    #[test]
    fn test_recommend_uses_questionnaire() {
        let engine = engine();
        let report = engine.analyze(RESUME);
        let answers = QuestionnaireAnswers::with_roles(["ux_ui_designer"]);

        let ranked = engine.recommend(&report, &answers, None).unwrap();
        let designer = ranked.iter().find(|r| r.career == "UI/UX Designer").unwrap();
        assert!(designer.interested);
        assert!((designer.boosted_probability - (designer.base_probability + 20.0).min(100.0)).abs() < 0.01);
        assert_eq!(ranked.len(), 12);
    }

    #[test]
    fn test_report_json() {
        let report = engine().analyze(RESUME);
        let json = report.to_json().unwrap();
        assert!(json.contains("\"status\": \"completed\""));

        let parsed: AnalysisReport = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed.summary.best_match, report.summary.best_match);
        assert_eq!(parsed.matches().len(), 12);
    }

    #[test]
    fn test_study_focus_from_report() {
        let report = engine().analyze(RESUME);
        let focus = report.study_focus().unwrap();
        assert_eq!(Some(focus.target_career.as_str()), report.summary.best_match.as_deref());
        assert!(!focus.skills.is_empty());
    }

    #[test]
    fn test_failed_stage_accessors() {
        let outcome: StageOutcome<Vec<CareerMatch>> = StageOutcome::Failed {
            stage: "career_scoring".to_string(),
            message: "boom".to_string(),
        };
        assert!(outcome.is_failed());
        assert!(outcome.value().is_none());
        assert_eq!(outcome.error_message(), Some("boom"));
    }
}
