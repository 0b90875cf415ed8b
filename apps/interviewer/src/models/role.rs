use std::fmt;

use serde::{Deserialize, Serialize};

/// A job track the interviewer can run. Declaration order is significant:
/// it is the order roles are spoken in, the 1-based ordinal the candidate
/// can answer with, and the tie-break order for resume role suggestion.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Role {
    CloudEngineer,
    BackendEngineer,
    FrontendEngineer,
    UiUxDesigner,
    Sde,
    DataAnalyst,
    AiEngineer,
}

impl Role {
    /// Every role, in declaration order.
    pub const ALL: [Role; 7] = [
        Role::CloudEngineer,
        Role::BackendEngineer,
        Role::FrontendEngineer,
        Role::UiUxDesigner,
        Role::Sde,
        Role::DataAnalyst,
        Role::AiEngineer,
    ];

    /// Role used whenever an identifier is unknown or a selection fails.
    pub const DEFAULT: Role = Role::Sde;

    pub fn id(self) -> &'static str {
        match self {
            Role::CloudEngineer => "cloud_engineer",
            Role::BackendEngineer => "backend_engineer",
            Role::FrontendEngineer => "frontend_engineer",
            Role::UiUxDesigner => "ui_ux_designer",
            Role::Sde => "sde",
            Role::DataAnalyst => "data_analyst",
            Role::AiEngineer => "ai_engineer",
        }
    }

    pub fn display_name(self) -> &'static str {
        match self {
            Role::CloudEngineer => "Cloud Engineer",
            Role::BackendEngineer => "Backend Engineer",
            Role::FrontendEngineer => "Frontend Engineer",
            Role::UiUxDesigner => "UI/UX Designer",
            Role::Sde => "Software Development Engineer",
            Role::DataAnalyst => "Data Analyst",
            Role::AiEngineer => "AI Engineer",
        }
    }

    /// The id with underscores as spaces, e.g. "cloud engineer".
    pub fn spoken_id(self) -> String {
        self.id().replace('_', " ")
    }

    /// Resolves a role identifier (case-insensitive). Unknown ids fall back to
    /// [`Role::DEFAULT`].
    #[allow(dead_code)]
    pub fn from_id(id: &str) -> Role {
        let id = id.trim().to_lowercase();
        Role::ALL
            .into_iter()
            .find(|role| role.id() == id)
            .unwrap_or(Role::DEFAULT)
    }

    /// 1-based position in [`Role::ALL`].
    pub fn ordinal(self) -> usize {
        Role::ALL
            .iter()
            .position(|r| *r == self)
            .map(|i| i + 1)
            .unwrap_or(0)
    }
}

impl Default for Role {
    fn default() -> Self {
        Role::DEFAULT
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.id())
    }
}
