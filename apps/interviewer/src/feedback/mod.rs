//! Feedback Generator: per-answer feedback and whole-session evaluation.
//!
//! Neither operation ever fails past this boundary: generation errors are
//! logged and replaced by fixed fallback text.

pub mod prompts;

use std::sync::Arc;

use tracing::warn;

use crate::feedback::prompts::{
    ANSWER_FEEDBACK_PROMPT, ANSWER_ONLY_FEEDBACK_PROMPT, SESSION_FEEDBACK_PROMPT,
};
use crate::llm_client::prompts::{interviewer_persona, CONVERSATIONAL_TONE};
use crate::llm_client::TextGenerator;
use crate::models::{QuestionRecord, SessionEvaluation};

/// Feedback longer than this many characters is truncated.
pub const MAX_FEEDBACK_CHARS: usize = 500;
const TRUNCATED_FEEDBACK_CHARS: usize = MAX_FEEDBACK_CHARS - 3;
/// Characters of each answer included in the session transcript prompt.
const TRANSCRIPT_ANSWER_CHARS: usize = 100;

pub const FALLBACK_FEEDBACK: &str = "Your response shows good understanding of the topic. \
    Consider adding more specific examples from your experience to make it even stronger. \
    That would help demonstrate your practical knowledge.";

pub const FALLBACK_OVERALL_FEEDBACK: &str = "I really enjoyed our conversation today! \
    You showed good potential and I'm confident you'll continue to improve with practice. \
    Your communication skills are developing well.";

pub const NO_INTERVIEW_DATA: &str = "No interview data provided";

#[derive(Clone)]
pub struct FeedbackGenerator {
    generator: Arc<dyn TextGenerator>,
    persona: String,
}

impl FeedbackGenerator {
    pub fn new(generator: Arc<dyn TextGenerator>, interviewer_name: &str) -> Self {
        Self {
            generator,
            persona: interviewer_persona(interviewer_name),
        }
    }

    /// Short spoken feedback for one answer; [`FALLBACK_FEEDBACK`] on any failure.
    pub async fn feedback_for(&self, answer: &str, question: Option<&str>) -> String {
        let prompt = match question {
            Some(question) => ANSWER_FEEDBACK_PROMPT
                .replace("{question}", question)
                .replace("{answer}", answer)
                .replace("{tone}", CONVERSATIONAL_TONE),
            None => ANSWER_ONLY_FEEDBACK_PROMPT
                .replace("{answer}", answer)
                .replace("{tone}", CONVERSATIONAL_TONE),
        };

        match self.generator.generate(&self.persona, &prompt).await {
            Ok(text) if !text.trim().is_empty() => truncate_feedback(text.trim()),
            Ok(_) => {
                warn!("Answer feedback was empty, using fallback");
                FALLBACK_FEEDBACK.to_string()
            }
            Err(e) => {
                warn!("Answer feedback generation failed, using fallback: {e}");
                FALLBACK_FEEDBACK.to_string()
            }
        }
    }

    /// Aggregates a transcript into one evaluation. An empty transcript and a
    /// failed generation call both produce a partial result with
    /// [`FALLBACK_OVERALL_FEEDBACK`] and `error` set.
    pub async fn summarize(&self, records: &[QuestionRecord]) -> SessionEvaluation {
        let total_questions = records.len();
        if total_questions == 0 {
            return SessionEvaluation {
                total_questions: 0,
                average_answer_length: 0.0,
                overall_feedback: FALLBACK_OVERALL_FEEDBACK.to_string(),
                per_question_feedback: Vec::new(),
                error: Some(NO_INTERVIEW_DATA.to_string()),
            };
        }

        let average_answer_length = average_answer_length(records);
        let per_question_feedback = records.iter().map(|r| r.feedback.clone()).collect();

        let prompt = SESSION_FEEDBACK_PROMPT
            .replace("{total_questions}", &total_questions.to_string())
            .replace("{average_length}", &format!("{average_answer_length:.0}"))
            .replace("{transcript}", &transcript_lines(records));

        match self.generator.generate(&self.persona, &prompt).await {
            Ok(text) if !text.trim().is_empty() => SessionEvaluation {
                total_questions,
                average_answer_length,
                overall_feedback: text.trim().to_string(),
                per_question_feedback,
                error: None,
            },
            result => {
                let reason = match result {
                    Err(e) => e.to_string(),
                    Ok(_) => "empty overall feedback".to_string(),
                };
                warn!("Session evaluation failed, using fallback: {reason}");
                SessionEvaluation {
                    total_questions,
                    average_answer_length,
                    overall_feedback: FALLBACK_OVERALL_FEEDBACK.to_string(),
                    per_question_feedback,
                    error: Some(format!("Failed to evaluate interview session: {reason}")),
                }
            }
        }
    }
}

/// Caps feedback at [`MAX_FEEDBACK_CHARS`] characters: longer text keeps its
/// first 497 characters followed by "...".
pub fn truncate_feedback(text: &str) -> String {
    if text.chars().count() > MAX_FEEDBACK_CHARS {
        let mut truncated: String = text.chars().take(TRUNCATED_FEEDBACK_CHARS).collect();
        truncated.push_str("...");
        truncated
    } else {
        text.to_string()
    }
}

fn average_answer_length(records: &[QuestionRecord]) -> f64 {
    if records.is_empty() {
        return 0.0;
    }
    let total: usize = records.iter().map(|r| r.answer.chars().count()).sum();
    total as f64 / records.len() as f64
}

fn transcript_lines(records: &[QuestionRecord]) -> String {
    records
        .iter()
        .map(|r| {
            let excerpt: String = r.answer.chars().take(TRANSCRIPT_ANSWER_CHARS).collect();
            format!("Q: {} | A: {}...", r.question, excerpt)
        })
        .collect::<Vec<_>>()
        .join("\n")
}
