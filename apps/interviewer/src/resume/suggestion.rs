//! Role suggestion: keyword count plus a capped experience bonus.

use crate::models::{ExperienceSignals, Role, SkillMatches};

/// Experience contributes at most this many points to any role.
pub const MAX_EXPERIENCE_BONUS: u32 = 5;

/// score(role) = |matched keywords| + min(years, 5).
pub fn score_roles(skills: &SkillMatches, experience: &ExperienceSignals) -> Vec<(Role, u32)> {
    let bonus = experience.years.min(MAX_EXPERIENCE_BONUS);
    Role::ALL
        .into_iter()
        .map(|role| {
            let matched = skills.get(&role).map(Vec::len).unwrap_or(0) as u32;
            (role, matched + bonus)
        })
        .collect()
}

/// Picks the highest-scoring role. Ties go to the first-declared role; when
/// every score is zero the default role is returned.
pub fn suggest_role(skills: &SkillMatches, experience: &ExperienceSignals) -> Role {
    let mut best: Option<(Role, u32)> = None;
    for (role, score) in score_roles(skills, experience) {
        match best {
            Some((_, best_score)) if score <= best_score => {}
            _ => best = Some((role, score)),
        }
    }

    match best {
        Some((role, score)) if score > 0 => role,
        _ => Role::DEFAULT,
    }
}
