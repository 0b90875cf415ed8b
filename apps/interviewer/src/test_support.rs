//! Scripted stand-ins for the speech and text-generation boundaries.

use std::collections::VecDeque;
use std::path::Path;
use std::sync::Mutex;

use async_trait::async_trait;

use crate::llm_client::{LlmError, TextGenerator};
use crate::models::ResumeProfile;
use crate::resume::{parse_resume_text, ResumeError, ResumeReader};
use crate::speech::{Heard, ListenParams, NoSignal, SpeechError, VoiceIo};

pub enum Reply {
    Heard(Heard),
    Fail,
}

/// Replays a fixed list of listen outcomes, then times out forever.
/// Records everything spoken.
pub struct ScriptedVoice {
    replies: Mutex<VecDeque<Reply>>,
    spoken: Mutex<Vec<String>>,
    listens: Mutex<Vec<ListenParams>>,
    fail_speech: bool,
}

impl ScriptedVoice {
    pub fn new(replies: Vec<Reply>) -> Self {
        Self {
            replies: Mutex::new(replies.into()),
            spoken: Mutex::new(Vec::new()),
            listens: Mutex::new(Vec::new()),
            fail_speech: false,
        }
    }

    /// Every reply is speech, in order.
    pub fn answering(replies: &[&str]) -> Self {
        Self::new(replies.iter().map(|r| Self::speech(r)).collect())
    }

    pub fn failing_speech(mut self) -> Self {
        self.fail_speech = true;
        self
    }

    pub fn speech(text: &str) -> Reply {
        Reply::Heard(Heard::Speech(text.to_string()))
    }

    pub fn silence(reason: NoSignal) -> Reply {
        Reply::Heard(Heard::Silence(reason))
    }

    pub fn failure() -> Reply {
        Reply::Fail
    }

    pub fn spoken(&self) -> Vec<String> {
        self.spoken.lock().unwrap().clone()
    }

    pub fn said(&self, line: &str) -> bool {
        self.spoken.lock().unwrap().iter().any(|s| s == line)
    }

    pub fn listen_count(&self) -> usize {
        self.listens.lock().unwrap().len()
    }

    pub fn listens(&self) -> Vec<ListenParams> {
        self.listens.lock().unwrap().clone()
    }
}

#[async_trait]
impl VoiceIo for ScriptedVoice {
    async fn speak(&self, text: &str) -> Result<(), SpeechError> {
        if self.fail_speech {
            return Err(SpeechError::Service("speaker unplugged".to_string()));
        }
        self.spoken.lock().unwrap().push(text.to_string());
        Ok(())
    }

    async fn listen(&self, params: ListenParams) -> Result<Heard, SpeechError> {
        self.listens.lock().unwrap().push(params);
        match self.replies.lock().unwrap().pop_front() {
            Some(Reply::Heard(heard)) => Ok(heard),
            Some(Reply::Fail) => Err(SpeechError::Service("microphone error".to_string())),
            None => Ok(Heard::Silence(NoSignal::Timeout)),
        }
    }
}

/// Returns a fixed reply (or a fixed failure) and records every
/// `(system, prompt)` pair it receives.
pub struct StubGenerator {
    reply: Option<String>,
    prompts: Mutex<Vec<(String, String)>>,
}

impl StubGenerator {
    pub fn replying(reply: &str) -> Self {
        Self {
            reply: Some(reply.to_string()),
            prompts: Mutex::new(Vec::new()),
        }
    }

    pub fn failing() -> Self {
        Self {
            reply: None,
            prompts: Mutex::new(Vec::new()),
        }
    }

    pub fn prompts(&self) -> Vec<(String, String)> {
        self.prompts.lock().unwrap().clone()
    }
}

#[async_trait]
impl TextGenerator for StubGenerator {
    async fn generate(&self, system: &str, prompt: &str) -> Result<String, LlmError> {
        self.prompts
            .lock()
            .unwrap()
            .push((system.to_string(), prompt.to_string()));
        self.reply.clone().ok_or(LlmError::Api {
            status: 503,
            message: "connection refused".to_string(),
        })
    }
}

/// Treats every discovered resume file as if its text layer were `text`.
pub struct TextResumeReader {
    text: String,
}

impl TextResumeReader {
    pub fn new(text: &str) -> Self {
        Self {
            text: text.to_string(),
        }
    }
}

#[async_trait]
impl ResumeReader for TextResumeReader {
    async fn read(&self, path: &Path) -> Result<ResumeProfile, ResumeError> {
        parse_resume_text(path, &self.text)
    }
}
