//! Technology stack detection and stack-aware skill filtering

use super::round2;
use super::skill_extractor::ExtractedSkillSet;
use crate::taxonomy::Taxonomy;
use log::debug;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StackDetection {
    pub stack: String,
    /// Stack technologies present in the skill set, stack order
    pub matched: Vec<String>,
    /// matched / technologies in the stack, 0-1
    pub confidence: f64,
}

/// Stacks sharing at least one technology with `skills`, most confident first.
pub fn detect_stacks(taxonomy: &Taxonomy, skills: &ExtractedSkillSet) -> Vec<StackDetection> {
    let owned = skills.lowercase_set();

    let mut detections: Vec<StackDetection> = taxonomy
        .stacks()
        .iter()
        .filter(|stack| !stack.technologies.is_empty())
        .filter_map(|stack| {
            let matched: Vec<String> = stack
                .technologies
                .iter()
                .filter(|tech| owned.contains(&tech.to_lowercase()))
                .cloned()
                .collect();
            if matched.is_empty() {
                return None;
            }
            let confidence = round2(matched.len() as f64 / stack.technologies.len() as f64);
            Some(StackDetection {
                stack: stack.name.clone(),
                matched,
                confidence,
            })
        })
        .collect();

    detections.sort_by(|a, b| b.confidence.total_cmp(&a.confidence));
    debug!("Detected {} stacks", detections.len());
    detections
}

/// Narrow a career's skills to those relevant under `stack`.
///
/// An override for the pair is returned verbatim. Otherwise universal skills
/// are kept along with the stack's own technologies, and technologies of
/// other stacks are dropped. Unknown careers yield an empty list.
pub fn filter_career_skills(taxonomy: &Taxonomy, career: &str, stack: &str) -> Vec<String> {
    if let Some(skills) = taxonomy.override_for(career, stack) {
        return skills.to_vec();
    }

    let Some(profile) = taxonomy.career(career) else {
        debug!("No career named {:?}; nothing to filter", career);
        return Vec::new();
    };

    let selected: Vec<String> = taxonomy
        .stack(stack)
        .map(|s| s.technologies.iter().map(|t| t.to_lowercase()).collect())
        .unwrap_or_default();

    profile
        .skills
        .iter()
        .filter(|skill| {
            !taxonomy.is_stack_specific(skill) || selected.contains(&skill.to_lowercase())
        })
        .cloned()
        .collect()
}
