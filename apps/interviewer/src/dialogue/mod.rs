//! Dialogue Driver: runs one interview session end to end.
//!
//! Flow: GREET → NAME_CAPTURE → MOOD_CHECK → ROLE_SELECT → RESUME_OFFER →
//!       [RESUME_PARSE → ROLE_CONFIRM] → QUESTION_LOOP → SUMMARY → REPORT → END.
//!
//! Stages only move forward. No listen, speak, parse, generation or report
//! failure stops the session; each degrades to a fixed default and the
//! dialogue continues.

pub mod matching;
pub mod script;
pub mod turns;

use std::path::{Path, PathBuf};

use chrono::Local;
use tracing::{info, info_span, warn, Instrument};

use crate::dialogue::matching::{is_affirmative, is_confirmation, match_role};
use crate::dialogue::turns::{listen_once, listen_with_retry, say};
use crate::models::{Role, Session};
use crate::questions::{available_roles, questions_for};
use crate::report::write_report;
use crate::resume::{find_resume_pdf, ResumeError};
use crate::speech::{Heard, ListenParams, VoiceIo};
use crate::state::AppState;

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum Stage {
    Start,
    Greet,
    NameCapture,
    MoodCheck,
    RoleSelect,
    ResumeOffer,
    ResumeParse,
    RoleConfirm,
    QuestionLoop,
    Summary,
    Report,
    End,
}

pub struct InterviewDriver<'a> {
    state: &'a AppState,
    stages: Vec<Stage>,
    report_path: Option<PathBuf>,
}

impl<'a> InterviewDriver<'a> {
    pub fn new(state: &'a AppState) -> Self {
        Self {
            state,
            stages: Vec::new(),
            report_path: None,
        }
    }

    /// Stages visited so far, in order.
    pub fn stages(&self) -> &[Stage] {
        &self.stages
    }

    /// Where the report was written, if writing succeeded.
    pub fn report_path(&self) -> Option<&Path> {
        self.report_path.as_deref()
    }

    /// Runs the whole interview against `session`.
    pub async fn run(&mut self, session: &mut Session) {
        let span = info_span!("session", id = %session.id);
        self.run_stages(session).instrument(span).await
    }

    async fn run_stages(&mut self, session: &mut Session) {
        self.enter(Stage::Start);
        self.greet().await;
        self.capture_name(session).await;
        self.check_mood().await;
        self.say(script::PROCEED_TO_PREPARATION).await;
        self.select_role(session).await;
        self.offer_resume(session).await;
        self.question_loop(session).await;
        self.summarize(session).await;
        self.write_report(session).await;
        self.close().await;
        self.enter(Stage::End);
    }

    fn enter(&mut self, stage: Stage) {
        debug_assert!(
            self.stages.last().map_or(true, |last| *last < stage),
            "stage {stage:?} after {:?}",
            self.stages.last()
        );
        info!("Entering stage {stage:?}");
        self.stages.push(stage);
    }

    fn voice(&self) -> &dyn VoiceIo {
        self.state.voice.as_ref()
    }

    async fn say(&self, text: &str) {
        say(self.voice(), text).await
    }

    // ── GREET / NAME_CAPTURE / MOOD_CHECK ──────────────────────────────────

    async fn greet(&mut self) {
        self.enter(Stage::Greet);
        self.say(&script::greeting(&self.state.config.interviewer_name))
            .await;
    }

    async fn capture_name(&mut self, session: &mut Session) {
        self.enter(Stage::NameCapture);
        self.say(script::ASK_NAME).await;

        match listen_once(self.voice(), ListenParams::SHORT).await {
            Heard::Speech(name) => {
                info!("Candidate name captured");
                self.say(&script::welcome_named(&name)).await;
                session.candidate_name = name;
            }
            Heard::Silence(reason) => {
                warn!("Name not captured ({reason:?}); using placeholder");
                self.say(script::WELCOME_ANONYMOUS).await;
            }
        }
    }

    async fn check_mood(&mut self) {
        self.enter(Stage::MoodCheck);
        self.say(script::ASK_MOOD).await;

        let ack = match listen_once(self.voice(), ListenParams::SHORT).await {
            Heard::Speech(_) => script::MOOD_POSITIVE,
            Heard::Silence(_) => script::MOOD_NEUTRAL,
        };
        self.say(ack).await;
    }

    // ── ROLE_SELECT ────────────────────────────────────────────────────────

    async fn select_role(&mut self, session: &mut Session) {
        self.enter(Stage::RoleSelect);

        let addressee = if session.has_candidate_name() {
            session.candidate_name.clone()
        } else {
            "there".to_string()
        };
        self.say(&script::role_intro(&addressee)).await;
        for (i, role) in available_roles().iter().enumerate() {
            self.say(&script::role_option(i + 1, *role)).await;
        }
        self.say(script::ASK_ROLE).await;

        let chosen = listen_once(self.voice(), ListenParams::SHORT)
            .await
            .text()
            .and_then(match_role);

        match chosen {
            Some(role) => {
                info!("Role selected: {role}");
                session.role = role;
                self.say(&script::role_selected(role)).await;
            }
            None => {
                warn!("No role matched; defaulting to {}", Role::DEFAULT);
                session.role = Role::DEFAULT;
                self.say(&script::role_defaulted(Role::DEFAULT)).await;
            }
        }
    }

    // ── RESUME_OFFER / RESUME_PARSE / ROLE_CONFIRM ─────────────────────────

    async fn offer_resume(&mut self, session: &mut Session) {
        self.enter(Stage::ResumeOffer);
        self.say(script::OFFER_RESUME).await;

        let reply = listen_with_retry(self.voice(), ListenParams::ANSWER, "resume offer").await;
        if !reply.text().is_some_and(is_affirmative) {
            self.say(script::RESUME_DECLINED).await;
            self.say(script::PROCEED_TO_INTERVIEW).await;
            return;
        }

        match find_resume_pdf(&self.state.config.resume_dir) {
            Some(path) => {
                let file_name = path
                    .file_name()
                    .map(|n| n.to_string_lossy().into_owned())
                    .unwrap_or_else(|| path.display().to_string());
                self.say(&script::resume_found(&file_name)).await;

                self.enter(Stage::ResumeParse);
                let parsed = self.state.resumes.read(&path).await;
                match parsed {
                    Ok(profile) => {
                        let suggested = profile.suggested_role;
                        session.resume = Some(profile);
                        self.confirm_role(session, suggested).await;
                    }
                    Err(e) => {
                        warn!("Resume parsing failed: {e}");
                        let line = match e {
                            ResumeError::Extraction(_) => script::RESUME_UNREADABLE,
                            ResumeError::NotFound(_) => script::RESUME_ISSUE,
                        };
                        self.say(line).await;
                    }
                }
            }
            None => {
                info!(
                    "No PDF found in {}",
                    self.state.config.resume_dir.display()
                );
                self.say(script::RESUME_MISSING).await;
            }
        }

        self.say(script::PROCEED_TO_INTERVIEW).await;
    }

    async fn confirm_role(&mut self, session: &mut Session, suggested: Role) {
        self.enter(Stage::RoleConfirm);
        self.say(&script::suggest_role(suggested)).await;

        let reply =
            listen_with_retry(self.voice(), ListenParams::ANSWER, "resume role suggestion").await;
        if reply.text().is_some_and(is_confirmation) {
            info!("Role changed to resume suggestion {suggested}");
            session.role = suggested;
            self.say(&script::suggestion_accepted(suggested)).await;
        } else {
            self.say(script::SUGGESTION_DECLINED).await;
        }
    }

    // ── QUESTION_LOOP ──────────────────────────────────────────────────────

    async fn question_loop(&mut self, session: &mut Session) {
        self.enter(Stage::QuestionLoop);

        let questions = questions_for(session.role, self.state.config.num_questions);
        let total = questions.len();
        self.say(&script::question_count(total, session.role)).await;
        self.say(script::BEGIN_INTERVIEW).await;

        for (i, question) in questions.into_iter().enumerate() {
            let number = i + 1;
            self.say(script::question_transition(number, total)).await;
            self.say(question).await;
            self.say(script::INVITE_ANSWER).await;

            let context = format!("question {number}");
            let answer = match listen_with_retry(self.voice(), ListenParams::ANSWER, &context).await
            {
                Heard::Speech(answer) => Some((answer, script::BEFORE_FEEDBACK)),
                Heard::Silence(_) => {
                    // One more full round of attempts before giving up on this question.
                    self.say(script::ANSWER_MISSED).await;
                    let context = format!("question {number} retry");
                    match listen_with_retry(self.voice(), ListenParams::ANSWER, &context).await {
                        Heard::Speech(answer) => Some((answer, script::BEFORE_FEEDBACK_RETRY)),
                        Heard::Silence(_) => None,
                    }
                }
            };

            match answer {
                Some((answer, lead_in)) => {
                    self.say(lead_in).await;
                    let feedback = self
                        .state
                        .feedback
                        .feedback_for(&answer, Some(question))
                        .await;
                    self.say(&feedback).await;
                    session.record_answer(number, question, &answer, feedback);
                    if number < total {
                        self.say(script::CONTINUE_INTERVIEW).await;
                    }
                }
                None => {
                    warn!("Question {number} left unanswered");
                    self.say(script::SKIP_QUESTION).await;
                }
            }
        }

        info!("Question loop finished: {}/{} answered", session.records.len(), total);
    }

    // ── SUMMARY / REPORT / END ─────────────────────────────────────────────

    async fn summarize(&mut self, session: &mut Session) {
        self.enter(Stage::Summary);
        self.say(script::INTERVIEW_COMPLETE).await;
        let evaluation = self.state.feedback.summarize(&session.records).await;
        session.evaluation = Some(evaluation);
    }

    async fn write_report(&mut self, session: &Session) {
        self.enter(Stage::Report);
        match write_report(&self.state.config.report_dir, session, Local::now()).await {
            Ok(path) => {
                self.report_path = Some(path);
                self.say(script::REPORT_SAVED).await;
            }
            Err(e) => {
                warn!("Report could not be written: {e}");
                self.say(script::REPORT_FAILED).await;
            }
        }
    }

    async fn close(&mut self) {
        self.say(script::INVITE_QUESTIONS).await;
        let reply = listen_with_retry(self.voice(), ListenParams::ANSWER, "final questions").await;
        let closing = match reply {
            Heard::Speech(_) => script::CLOSING_AFTER_QUESTIONS,
            Heard::Silence(_) => script::CLOSING,
        };
        self.say(closing).await;
    }
}

#[cfg(test)]
mod tests {
    use std::path::Path;
    use std::sync::Arc;

    use super::*;
    use crate::config::Config;
    use crate::feedback::{FALLBACK_FEEDBACK, FALLBACK_OVERALL_FEEDBACK};
    use crate::models::PLACEHOLDER_NAME;
    use crate::speech::NoSignal;
    use crate::test_support::{ScriptedVoice, StubGenerator, TextResumeReader};

    fn state_with(
        voice: Arc<ScriptedVoice>,
        generator: StubGenerator,
        resume_dir: &Path,
        report_dir: &Path,
    ) -> AppState {
        let config = Config {
            resume_dir: resume_dir.to_path_buf(),
            report_dir: report_dir.to_path_buf(),
            ..Config::default()
        };
        AppState::new(config, voice, Arc::new(generator))
    }

    #[tokio::test]
    async fn test_all_timeouts_still_reach_report() {
        let resume_dir = tempfile::tempdir().unwrap();
        let report_dir = tempfile::tempdir().unwrap();
        let voice = Arc::new(ScriptedVoice::new(vec![]));
        let state = state_with(
            voice.clone(),
            StubGenerator::replying("unused"),
            resume_dir.path(),
            report_dir.path(),
        );

        let mut session = Session::new();
        let mut driver = InterviewDriver::new(&state);
        driver.run(&mut session).await;

        assert!(driver.stages().contains(&Stage::Report));
        assert_eq!(driver.stages().last(), Some(&Stage::End));
        assert!(!driver.stages().contains(&Stage::ResumeParse));
        assert_eq!(session.candidate_name, PLACEHOLDER_NAME);
        assert_eq!(session.role, Role::Sde);
        assert!(session.records.is_empty());

        let eval = session.evaluation.as_ref().unwrap();
        assert_eq!(eval.total_questions, 0);
        assert_eq!(eval.overall_feedback, FALLBACK_OVERALL_FEEDBACK);

        let report = driver.report_path().unwrap();
        assert!(report.exists());
        // name, mood, role: 1 each; resume offer: 3; six questions: 3 + 3 each; closing: 3.
        assert_eq!(voice.listen_count(), 3 + 3 + 6 * 6 + 3);
        assert_eq!(voice.listens()[0], ListenParams::SHORT);
        assert_eq!(voice.listens()[3], ListenParams::ANSWER);
        assert!(voice.said(script::CLOSING));
    }

    #[tokio::test]
    async fn test_full_session_records_every_answer() {
        let resume_dir = tempfile::tempdir().unwrap();
        let report_dir = tempfile::tempdir().unwrap();
        let voice = Arc::new(ScriptedVoice::answering(&[
            "Alice",
            "I'm great, thanks",
            "number 2",
            "no",
            "Answer one",
            "Answer two",
            "Answer three",
            "Answer four",
            "Answer five",
            "Answer six",
            "What are the next steps?",
        ]));
        let state = state_with(
            voice.clone(),
            StubGenerator::replying("Clear and specific."),
            resume_dir.path(),
            report_dir.path(),
        );

        let mut session = Session::new();
        let mut driver = InterviewDriver::new(&state);
        driver.run(&mut session).await;

        assert_eq!(session.candidate_name, "Alice");
        assert_eq!(session.role, Role::BackendEngineer);
        assert_eq!(session.records.len(), 6);
        assert_eq!(session.records[0].answer, "Answer one");
        assert_eq!(session.records[5].question_number, 6);
        assert!(session.records.iter().all(|r| r.feedback == "Clear and specific."));
        assert_eq!(
            session.records[0].question,
            questions_for(Role::BackendEngineer, 6)[0]
        );

        assert!(voice.said(&script::welcome_named("Alice")));
        assert!(voice.said(script::MOOD_POSITIVE));
        assert!(voice.said(&script::role_selected(Role::BackendEngineer)));
        assert!(voice.said(script::RESUME_DECLINED));
        assert!(voice.said(script::FINAL_QUESTION));
        assert!(voice.said(script::CLOSING_AFTER_QUESTIONS));

        let eval = session.evaluation.unwrap();
        assert_eq!(eval.total_questions, 6);
        assert!(eval.error.is_none());

        let report_path = driver.report_path().unwrap();
        let file_name = report_path.file_name().unwrap().to_string_lossy();
        assert!(file_name.starts_with("interview_report_Alice_"));
        let body = std::fs::read_to_string(report_path).unwrap();
        assert!(body.contains("Answer six"));
    }

    #[tokio::test]
    async fn test_unanswered_question_gets_second_round_then_moves_on() {
        let resume_dir = tempfile::tempdir().unwrap();
        let report_dir = tempfile::tempdir().unwrap();
        let mut replies = vec![
            ScriptedVoice::speech("Bob"),
            ScriptedVoice::speech("fine"),
            ScriptedVoice::speech("sde"),
            ScriptedVoice::speech("no"),
        ];
        // Question 1: first round fails, second round answers on its last attempt.
        replies.extend((0..5).map(|_| ScriptedVoice::silence(NoSignal::Timeout)));
        replies.push(ScriptedVoice::speech("Late answer"));
        // Question 2: both rounds fail.
        replies.extend((0..6).map(|_| ScriptedVoice::failure()));
        replies.push(ScriptedVoice::speech("Third answer"));

        let voice = Arc::new(ScriptedVoice::new(replies));
        let state = state_with(
            voice.clone(),
            StubGenerator::failing(),
            resume_dir.path(),
            report_dir.path(),
        );
        let config = Config {
            num_questions: 3,
            ..state.config.clone()
        };
        let state = AppState { config, ..state };

        let mut session = Session::new();
        InterviewDriver::new(&state).run(&mut session).await;

        let numbers: Vec<_> = session.records.iter().map(|r| r.question_number).collect();
        assert_eq!(numbers, vec![1, 3]);
        assert_eq!(session.records[0].answer, "Late answer");
        assert_eq!(session.records[0].feedback, FALLBACK_FEEDBACK);
        assert!(voice.said(script::ANSWER_MISSED));
        assert!(voice.said(script::BEFORE_FEEDBACK_RETRY));
        assert!(voice.said(script::SKIP_QUESTION));

        let eval = session.evaluation.unwrap();
        assert_eq!(eval.total_questions, 2);
        assert_eq!(eval.overall_feedback, FALLBACK_OVERALL_FEEDBACK);
    }

    #[tokio::test]
    async fn test_unreadable_resume_keeps_selected_role() {
        let resume_dir = tempfile::tempdir().unwrap();
        let report_dir = tempfile::tempdir().unwrap();
        std::fs::write(resume_dir.path().join("resume.pdf"), b"not really a pdf").unwrap();

        let voice = Arc::new(ScriptedVoice::answering(&["Cara", "ok", "data analyst", "yes"]));
        let state = state_with(
            voice.clone(),
            StubGenerator::replying("Nice."),
            resume_dir.path(),
            report_dir.path(),
        );

        let mut session = Session::new();
        let mut driver = InterviewDriver::new(&state);
        driver.run(&mut session).await;

        assert!(driver.stages().contains(&Stage::ResumeParse));
        assert!(!driver.stages().contains(&Stage::RoleConfirm));
        assert_eq!(session.role, Role::DataAnalyst);
        assert!(session.resume.is_none());
        assert!(voice.said(&script::resume_found("resume.pdf")));
        assert!(voice.said(script::RESUME_UNREADABLE));
        assert_eq!(driver.stages().last(), Some(&Stage::End));
    }

    const AI_RESUME: &str =
        "Deep learning with TensorFlow, PyTorch and Keras; neural networks and computer vision.";

    fn state_reading_resume(voice: Arc<ScriptedVoice>, resume_dir: &Path, report_dir: &Path) -> AppState {
        std::fs::write(resume_dir.join("cv.pdf"), b"%PDF-1.4").unwrap();
        state_with(voice, StubGenerator::replying("Nice."), resume_dir, report_dir)
            .with_resume_reader(Arc::new(TextResumeReader::new(AI_RESUME)))
    }

    #[tokio::test]
    async fn test_confirmed_resume_suggestion_replaces_role() {
        let resume_dir = tempfile::tempdir().unwrap();
        let report_dir = tempfile::tempdir().unwrap();
        let voice = Arc::new(ScriptedVoice::answering(&[
            "Fay",
            "good",
            "data analyst",
            "yes",
            "sure",
            "Answer one",
        ]));
        let state = state_reading_resume(voice.clone(), resume_dir.path(), report_dir.path());

        let mut session = Session::new();
        let mut driver = InterviewDriver::new(&state);
        driver.run(&mut session).await;

        let stages = driver.stages();
        let parse = stages.iter().position(|s| *s == Stage::ResumeParse).unwrap();
        assert_eq!(stages[parse + 1], Stage::RoleConfirm);
        assert_eq!(stages[parse + 2], Stage::QuestionLoop);

        let resume = session.resume.as_ref().unwrap();
        assert_eq!(resume.suggested_role, Role::AiEngineer);
        assert_eq!(session.role, Role::AiEngineer);
        assert!(voice.said(&script::suggest_role(Role::AiEngineer)));
        assert!(voice.said(&script::suggestion_accepted(Role::AiEngineer)));
        assert!(!voice.said(script::SUGGESTION_DECLINED));

        assert_eq!(session.records[0].answer, "Answer one");
        assert_eq!(session.records[0].question, questions_for(Role::AiEngineer, 6)[0]);
    }

    #[tokio::test]
    async fn test_declined_resume_suggestion_keeps_role() {
        let resume_dir = tempfile::tempdir().unwrap();
        let report_dir = tempfile::tempdir().unwrap();
        let voice = Arc::new(ScriptedVoice::answering(&[
            "Gus",
            "good",
            "data analyst",
            "yeah",
            "no thanks",
        ]));
        let state = state_reading_resume(voice.clone(), resume_dir.path(), report_dir.path());

        let mut session = Session::new();
        let mut driver = InterviewDriver::new(&state);
        driver.run(&mut session).await;

        assert!(driver.stages().contains(&Stage::RoleConfirm));
        assert!(session.resume.is_some());
        assert_eq!(session.role, Role::DataAnalyst);
        assert!(voice.said(&script::suggest_role(Role::AiEngineer)));
        assert!(voice.said(script::SUGGESTION_DECLINED));

        let body = std::fs::read_to_string(driver.report_path().unwrap()).unwrap();
        assert!(body.contains("**Suggested role:** AI Engineer"));
        assert!(body.contains("**Role:** Data Analyst"));
    }

    #[tokio::test]
    async fn test_resume_requested_but_no_pdf_present() {
        let resume_dir = tempfile::tempdir().unwrap();
        let report_dir = tempfile::tempdir().unwrap();
        let voice = Arc::new(ScriptedVoice::answering(&["Dan", "ok", "1", "yeah"]));
        let state = state_with(
            voice.clone(),
            StubGenerator::replying("Nice."),
            resume_dir.path(),
            report_dir.path(),
        );

        let mut session = Session::new();
        InterviewDriver::new(&state).run(&mut session).await;

        assert_eq!(session.role, Role::CloudEngineer);
        assert!(voice.said(script::RESUME_MISSING));
    }

    #[tokio::test]
    async fn test_report_failure_does_not_block_closing() {
        let resume_dir = tempfile::tempdir().unwrap();
        let report_dir = tempfile::tempdir().unwrap();
        let missing = report_dir.path().join("gone");
        let voice = Arc::new(ScriptedVoice::new(vec![]));
        let state = state_with(
            voice.clone(),
            StubGenerator::replying("Nice."),
            resume_dir.path(),
            &missing,
        );

        let mut session = Session::new();
        let mut driver = InterviewDriver::new(&state);
        driver.run(&mut session).await;

        assert!(driver.report_path().is_none());
        assert!(voice.said(script::REPORT_FAILED));
        assert!(voice.said(script::CLOSING));
        assert_eq!(driver.stages().last(), Some(&Stage::End));
    }

    #[tokio::test]
    async fn test_speech_output_failure_is_not_fatal() {
        let resume_dir = tempfile::tempdir().unwrap();
        let report_dir = tempfile::tempdir().unwrap();
        let voice = Arc::new(ScriptedVoice::answering(&["Eve"]).failing_speech());
        let state = state_with(
            voice.clone(),
            StubGenerator::replying("Nice."),
            resume_dir.path(),
            report_dir.path(),
        );

        let mut session = Session::new();
        let mut driver = InterviewDriver::new(&state);
        driver.run(&mut session).await;

        assert_eq!(session.candidate_name, "Eve");
        assert_eq!(driver.stages().last(), Some(&Stage::End));
    }
}
