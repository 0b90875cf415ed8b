pub mod resume;
pub mod role;
pub mod session;

pub use resume::{ExperienceSignals, ResumeProfile, SkillMatches};
pub use role::Role;
pub use session::{QuestionRecord, Session, SessionEvaluation, PLACEHOLDER_NAME};
