//! Taxonomy skill extraction from free-text resumes

use crate::error::Result;
use crate::taxonomy::Taxonomy;
use aho_corasick::{AhoCorasick, MatchKind};
use log::debug;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;

/// Skills found in one resume, spelled as the taxonomy spells them
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ExtractedSkillSet {
    pub skills: Vec<String>,
    pub count: usize,
}

impl ExtractedSkillSet {
    pub fn new(skills: Vec<String>) -> Self {
        let count = skills.len();
        Self { skills, count }
    }

    pub fn is_empty(&self) -> bool {
        self.skills.is_empty()
    }

    pub fn contains(&self, skill: &str) -> bool {
        let skill = skill.to_lowercase();
        self.skills.iter().any(|s| s.to_lowercase() == skill)
    }

    /// Lowercased view used for case-insensitive set operations
    pub fn lowercase_set(&self) -> HashSet<String> {
        self.skills.iter().map(|s| s.to_lowercase()).collect()
    }
}

impl FromIterator<String> for ExtractedSkillSet {
    fn from_iter<I: IntoIterator<Item = String>>(iter: I) -> Self {
        let mut seen = HashSet::new();
        let skills = iter
            .into_iter()
            .filter(|s| seen.insert(s.to_lowercase()))
            .collect();
        Self::new(skills)
    }
}

/// Whole-token, case-insensitive matcher over every skill in a taxonomy
pub struct SkillExtractor {
    matcher: AhoCorasick,
    skill_database: Vec<String>,
}

impl SkillExtractor {
    pub fn new(taxonomy: &Taxonomy) -> Result<Self> {
        Self::with_skills(taxonomy.universal_skills())
    }

    pub fn with_skills(skill_database: Vec<String>) -> Result<Self> {
        // Patterns and haystack are both lowercased, so case folding is
        // Unicode-aware. Overlapping search needs the standard match
        // semantics so that "React" is still reported inside "React Native".
        let patterns: Vec<String> = skill_database.iter().map(|s| s.to_lowercase()).collect();
        let matcher = AhoCorasick::builder()
            .match_kind(MatchKind::Standard)
            .build(&patterns)?;

        Ok(Self {
            matcher,
            skill_database,
        })
    }

    /// Return the skills occurring at least once in `text`, in taxonomy order.
    pub fn extract(&self, text: &str) -> ExtractedSkillSet {
        let lowered = text.to_lowercase();
        let bytes = lowered.as_bytes();
        let mut found = vec![false; self.skill_database.len()];

        for mat in self.matcher.find_overlapping_iter(&lowered) {
            let id = mat.pattern().as_usize();
            if found[id] {
                continue;
            }
            if has_token_boundaries(bytes, mat.start(), mat.end()) {
                found[id] = true;
            }
        }

        let skills: Vec<String> = self
            .skill_database
            .iter()
            .zip(found)
            .filter_map(|(skill, hit)| hit.then(|| skill.clone()))
            .collect();

        debug!("Matched {} of {} known skills", skills.len(), self.skill_database.len());
        ExtractedSkillSet::new(skills)
    }

    pub fn skill_count(&self) -> usize {
        self.skill_database.len()
    }
}

/// A neighbouring ASCII letter disqualifies the match; digits, punctuation
/// and non-ASCII characters do not.
fn has_token_boundaries(bytes: &[u8], start: usize, end: usize) -> bool {
    let before = start.checked_sub(1).map(|i| bytes[i]);
    let after = bytes.get(end).copied();

    !before.map_or(false, |b| b.is_ascii_alphabetic())
        && !after.map_or(false, |b| b.is_ascii_alphabetic())
}
