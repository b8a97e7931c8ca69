//! Onboarding questionnaire answers and their mapping onto careers

use crate::taxonomy::ROLE_IDENTIFIERS;
use log::debug;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;

/// Identifiers picked during onboarding. Each question allows several answers.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct QuestionnaireAnswers {
    pub target_role: Vec<String>,
    pub primary_goal: Vec<String>,
    pub learning_preference: Vec<String>,
    pub time_commitment: Vec<String>,
}

impl QuestionnaireAnswers {
    pub fn with_roles<I, S>(roles: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            target_role: roles.into_iter().map(Into::into).collect(),
            ..Self::default()
        }
    }

    /// Career names selected through `target_role`.
    ///
    /// "undecided" and unrecognised identifiers select nothing.
    pub fn interested_careers(&self) -> HashSet<String> {
        self.target_role
            .iter()
            .filter_map(|role| {
                let career = career_for_role(role);
                if career.is_none() {
                    debug!("Role identifier {:?} maps to no career", role);
                }
                career
            })
            .map(str::to_string)
            .collect()
    }
}

/// Taxonomy career name for an onboarding role identifier
pub fn career_for_role(identifier: &str) -> Option<&'static str> {
    let identifier = identifier.trim();
    ROLE_IDENTIFIERS
        .iter()
        .find(|(id, _)| id.eq_ignore_ascii_case(identifier))
        .map(|(_, career)| *career)
}
