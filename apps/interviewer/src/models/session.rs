use chrono::{DateTime, Local};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::models::resume::ResumeProfile;
use crate::models::role::Role;

/// Display name used when the candidate's name could not be captured.
pub const PLACEHOLDER_NAME: &str = "Candidate";

/// One asked question with its accepted answer and generated feedback.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct QuestionRecord {
    pub question: String,
    pub answer: String,
    pub feedback: String,
    /// 1-based position of the question in the interview.
    pub question_number: usize,
}

/// Aggregated evaluation of a whole transcript.
///
/// `error` is set whenever the result is partial (empty transcript or a
/// failed generation call); the remaining fields are still well-formed.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SessionEvaluation {
    pub total_questions: usize,
    pub average_answer_length: f64,
    pub overall_feedback: String,
    pub per_question_feedback: Vec<String>,
    pub error: Option<String>,
}

/// A single interview run. Mutated only by the dialogue driver.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Session {
    pub id: Uuid,
    pub candidate_name: String,
    pub role: Role,
    pub records: Vec<QuestionRecord>,
    pub resume: Option<ResumeProfile>,
    pub evaluation: Option<SessionEvaluation>,
    pub started_at: DateTime<Local>,
}

impl Session {
    pub fn new() -> Self {
        Self {
            id: Uuid::new_v4(),
            candidate_name: PLACEHOLDER_NAME.to_string(),
            role: Role::DEFAULT,
            records: Vec::new(),
            resume: None,
            evaluation: None,
            started_at: Local::now(),
        }
    }

    pub fn has_candidate_name(&self) -> bool {
        self.candidate_name != PLACEHOLDER_NAME
    }

    /// Appends a record for the question at `question_number`.
    pub fn record_answer(
        &mut self,
        question_number: usize,
        question: &str,
        answer: &str,
        feedback: String,
    ) {
        self.records.push(QuestionRecord {
            question: question.to_string(),
            answer: answer.to_string(),
            feedback,
            question_number,
        });
    }
}

impl Default for Session {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_session_uses_placeholder_and_default_role() {
        let session = Session::new();
        assert_eq!(session.candidate_name, PLACEHOLDER_NAME);
        assert!(!session.has_candidate_name());
        assert_eq!(session.role, Role::Sde);
        assert!(session.records.is_empty());
        assert!(session.evaluation.is_none());
    }

    #[test]
    fn test_record_answer_appends_in_order() {
        let mut session = Session::new();
        session.record_answer(1, "Q1", "A1", "F1".to_string());
        session.record_answer(3, "Q3", "A3", "F3".to_string());
        assert_eq!(session.records.len(), 2);
        assert_eq!(session.records[1].question_number, 3);
        assert_eq!(session.records[0].feedback, "F1");
    }
}
