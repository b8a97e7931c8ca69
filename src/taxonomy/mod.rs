//! Career profiles, technology stacks and per-stack overrides
//!
//! A [`Taxonomy`] is immutable once built. The built-in tables are
//! materialised once per process; a custom taxonomy can be loaded from TOML
//! during startup and shared read-only afterwards.

mod data;

pub(crate) use data::ROLE_IDENTIFIERS;

use crate::error::{CareerMatcherError, Result};
use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};
use std::collections::{HashMap, HashSet};
use std::path::Path;
use std::sync::Arc;

static BUILTIN: Lazy<Arc<Taxonomy>> = Lazy::new(|| {
    let careers = data::CAREERS
        .iter()
        .map(|entry| CareerProfile::new(entry.name, entry.skills, entry.keywords))
        .collect();
    let stacks = data::STACKS
        .iter()
        .map(|(name, techs)| TechStack::new(name, techs))
        .collect();
    let overrides = data::OVERRIDES
        .iter()
        .map(|(career, stack, skills)| StackOverride::new(career, stack, skills))
        .collect();

    Arc::new(Taxonomy::from_parts(careers, stacks, overrides).expect("Invalid built-in taxonomy"))
});

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CareerProfile {
    pub name: String,
    pub skills: Vec<String>,
    #[serde(default)]
    pub keywords: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TechStack {
    pub name: String,
    pub technologies: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StackOverride {
    pub career: String,
    pub stack: String,
    pub skills: Vec<String>,
}

/// On-disk layout accepted by [`Taxonomy::from_toml_str`]
#[derive(Debug, Deserialize)]
struct TaxonomyFile {
    careers: Vec<CareerProfile>,
    #[serde(default)]
    stacks: Vec<TechStack>,
    #[serde(default)]
    overrides: Vec<StackOverride>,
}

#[derive(Debug, Clone)]
pub struct Taxonomy {
    careers: Vec<CareerProfile>,
    stacks: Vec<TechStack>,
    overrides: HashMap<(String, String), Vec<String>>,
    stack_specific: HashSet<String>,
}

impl CareerProfile {
    pub fn new(name: &str, skills: &[&str], keywords: &[&str]) -> Self {
        Self {
            name: name.to_string(),
            skills: skills.iter().map(|s| s.to_string()).collect(),
            keywords: keywords.iter().map(|s| s.to_string()).collect(),
        }
    }
}

impl TechStack {
    pub fn new(name: &str, technologies: &[&str]) -> Self {
        Self {
            name: name.to_string(),
            technologies: technologies.iter().map(|s| s.to_string()).collect(),
        }
    }
}

impl StackOverride {
    pub fn new(career: &str, stack: &str, skills: &[&str]) -> Self {
        Self {
            career: career.to_string(),
            stack: stack.to_string(),
            skills: skills.iter().map(|s| s.to_string()).collect(),
        }
    }
}

impl Taxonomy {
    /// Shared handle to the built-in tables
    pub fn builtin() -> Arc<Taxonomy> {
        Arc::clone(&BUILTIN)
    }

    /// Validate and freeze a taxonomy.
    pub fn from_parts(
        careers: Vec<CareerProfile>,
        stacks: Vec<TechStack>,
        overrides: Vec<StackOverride>,
    ) -> Result<Self> {
        if careers.is_empty() {
            return Err(CareerMatcherError::Taxonomy("at least one career profile is required".to_string()));
        }

        let mut career_names = HashSet::new();
        let careers: Vec<CareerProfile> = careers
            .into_iter()
            .map(|mut career| {
                let name = career.name.trim().to_string();
                if name.is_empty() {
                    return Err(CareerMatcherError::Taxonomy("career name must not be empty".to_string()));
                }
                if !career_names.insert(name.clone()) {
                    return Err(CareerMatcherError::Taxonomy(format!("duplicate career: {}", name)));
                }
                career.name = name;
                career.skills = dedup_case_insensitive(career.skills);
                Ok(career)
            })
            .collect::<Result<_>>()?;

        let mut stack_names = HashSet::new();
        let stacks: Vec<TechStack> = stacks
            .into_iter()
            .map(|mut stack| {
                let name = stack.name.trim().to_string();
                if name.is_empty() {
                    return Err(CareerMatcherError::Taxonomy("stack name must not be empty".to_string()));
                }
                if !stack_names.insert(name.clone()) {
                    return Err(CareerMatcherError::Taxonomy(format!("duplicate stack: {}", name)));
                }
                stack.name = name;
                stack.technologies = dedup_case_insensitive(stack.technologies);
                Ok(stack)
            })
            .collect::<Result<_>>()?;

        let mut override_map = HashMap::new();
        for entry in overrides {
            if !career_names.contains(&entry.career) {
                return Err(CareerMatcherError::Taxonomy(format!(
                    "override references unknown career: {}",
                    entry.career
                )));
            }
            if !stack_names.contains(&entry.stack) {
                return Err(CareerMatcherError::Taxonomy(format!(
                    "override references unknown stack: {}",
                    entry.stack
                )));
            }
            let key = (entry.career, entry.stack);
            if override_map.contains_key(&key) {
                return Err(CareerMatcherError::Taxonomy(format!(
                    "duplicate override for {} / {}",
                    key.0, key.1
                )));
            }
            override_map.insert(key, dedup_case_insensitive(entry.skills));
        }

        let stack_specific = stacks
            .iter()
            .flat_map(|stack| stack.technologies.iter().map(|t| t.to_lowercase()))
            .collect();

        Ok(Self {
            careers,
            stacks,
            overrides: override_map,
            stack_specific,
        })
    }

    pub fn from_toml_str(content: &str) -> Result<Self> {
        let file: TaxonomyFile = toml::from_str(content)
            .map_err(|e| CareerMatcherError::Taxonomy(format!("Failed to parse taxonomy: {}", e)))?;
        Self::from_parts(file.careers, file.stacks, file.overrides)
    }

    pub fn from_file(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        Self::from_toml_str(&content)
    }

    /// Career profiles in declaration order
    pub fn careers(&self) -> &[CareerProfile] {
        &self.careers
    }

    /// Stacks in declaration order
    pub fn stacks(&self) -> &[TechStack] {
        &self.stacks
    }

    pub fn career(&self, name: &str) -> Option<&CareerProfile> {
        self.careers.iter().find(|c| c.name == name)
    }

    pub fn stack(&self, name: &str) -> Option<&TechStack> {
        self.stacks.iter().find(|s| s.name == name)
    }

    pub fn override_for(&self, career: &str, stack: &str) -> Option<&[String]> {
        self.overrides
            .get(&(career.to_string(), stack.to_string()))
            .map(Vec::as_slice)
    }

    /// Whether a skill is tied to some stack rather than universal
    pub fn is_stack_specific(&self, skill: &str) -> bool {
        self.stack_specific.contains(&skill.to_lowercase())
    }

    /// Every skill named by any career, deduplicated, first-seen order
    pub fn universal_skills(&self) -> Vec<String> {
        dedup_case_insensitive(
            self.careers
                .iter()
                .flat_map(|c| c.skills.iter().cloned())
                .collect(),
        )
    }
}

fn dedup_case_insensitive(items: Vec<String>) -> Vec<String> {
    let mut seen = HashSet::new();
    items
        .into_iter()
        .map(|s| s.trim().to_string())
        .filter(|s| !s.is_empty() && seen.insert(s.to_lowercase()))
        .collect()
}
