//! Interpreting candidate replies: role choice and yes/no answers.
//! All matching is lowercase substring containment.

use crate::models::Role;

const AFFIRMATIVE: &[&str] = &["yes", "yeah"];
const CONFIRMATION: &[&str] = &["yes", "yeah", "sure"];

/// First role (in declaration order) whose ordinal digit, spoken id
/// ("backend engineer") or display name appears in `reply`.
pub fn match_role(reply: &str) -> Option<Role> {
    let reply = reply.to_lowercase();
    Role::ALL.into_iter().find(|role| {
        reply.contains(&role.ordinal().to_string())
            || reply.contains(&role.spoken_id())
            || reply.contains(&role.display_name().to_lowercase())
    })
}

/// "yes" / "yeah" anywhere in the reply.
pub fn is_affirmative(reply: &str) -> bool {
    contains_any(reply, AFFIRMATIVE)
}

/// Like [`is_affirmative`] but also accepts "sure".
pub fn is_confirmation(reply: &str) -> bool {
    contains_any(reply, CONFIRMATION)
}

fn contains_any(reply: &str, tokens: &[&str]) -> bool {
    let reply = reply.to_lowercase();
    tokens.iter().any(|t| reply.contains(t))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_match_by_ordinal() {
        assert_eq!(match_role("2"), Some(Role::BackendEngineer));
        assert_eq!(match_role("number 7 please"), Some(Role::AiEngineer));
    }

    #[test]
    fn test_match_by_name() {
        assert_eq!(match_role("Data Analyst"), Some(Role::DataAnalyst));
        assert_eq!(match_role("I'd like the frontend engineer one"), Some(Role::FrontendEngineer));
        assert_eq!(match_role("ui/ux designer"), Some(Role::UiUxDesigner));
        assert_eq!(match_role("UI UX designer"), Some(Role::UiUxDesigner));
        assert_eq!(match_role("software development engineer"), Some(Role::Sde));
        assert_eq!(match_role("sde"), Some(Role::Sde));
    }

    #[test]
    fn test_first_declared_role_wins() {
        // Mentions both; cloud engineer is declared first.
        assert_eq!(
            match_role("backend engineer or cloud engineer"),
            Some(Role::CloudEngineer)
        );
    }

    #[test]
    fn test_no_match() {
        assert_eq!(match_role("astronaut"), None);
        assert_eq!(match_role(""), None);
    }

    #[test]
    fn test_affirmative_and_confirmation() {
        assert!(is_affirmative("Yes, I do"));
        assert!(is_affirmative("yeah"));
        assert!(!is_affirmative("sure"));
        assert!(is_confirmation("Sure, let's do it"));
        assert!(!is_confirmation("no thanks"));
    }
}
