use std::collections::BTreeMap;
use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use crate::models::role::Role;

/// Matched skill keywords per role, iterated in role declaration order.
pub type SkillMatches = BTreeMap<Role, Vec<String>>;

/// Coarse experience signals pulled out of resume text by pattern matching.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ExperienceSignals {
    pub years: u32,
    /// Accumulated across patterns, not deduplicated.
    pub companies: Vec<String>,
    /// Accumulated across patterns, not deduplicated.
    pub education: Vec<String>,
    pub certifications: Vec<String>,
}

/// Result of one successful resume parse. Immutable once built.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ResumeProfile {
    pub source: PathBuf,
    pub skills: SkillMatches,
    pub experience: ExperienceSignals,
    pub suggested_role: Role,
    pub parsed_successfully: bool,
}

impl ResumeProfile {
    /// Skills matched for a given role, empty when none.
    pub fn skills_for(&self, role: Role) -> &[String] {
        self.skills.get(&role).map(Vec::as_slice).unwrap_or(&[])
    }
}
