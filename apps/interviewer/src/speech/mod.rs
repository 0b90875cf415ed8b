//! Audio boundaries: speaking to and hearing from the candidate.
//!
//! "Nothing usable was heard" is a normal outcome, modelled as
//! [`Heard::Silence`] with a [`NoSignal`] reason rather than an error.
//! `SpeechError` is reserved for the device or service itself failing.

pub mod console;

use std::time::Duration;

use async_trait::async_trait;
use thiserror::Error;

pub use console::ConsoleVoice;

#[derive(Debug, Error)]
pub enum SpeechError {
    #[error("Cannot speak empty text")]
    EmptyText,

    #[error("Audio device error: {0}")]
    Device(#[from] std::io::Error),

    #[error("Speech service error: {0}")]
    Service(String),
}

/// Why a listen produced no usable text.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NoSignal {
    /// Nothing was said before the timeout.
    Timeout,
    /// Something was said but could not be understood.
    Unrecognized,
    /// The recognizer or the microphone failed.
    ServiceError,
    /// Every retry was used up without a usable reply.
    NoResponse,
}

impl NoSignal {
    /// The diagnostic sentinel phrase for this outcome.
    pub fn sentinel(self) -> &'static str {
        match self {
            NoSignal::Timeout => "Sorry, I didn't hear anything. Please try again.",
            NoSignal::Unrecognized => "Sorry, I didn't catch that. Could you please repeat?",
            NoSignal::ServiceError => {
                "Sorry, there was an error with speech recognition. Please try again."
            }
            NoSignal::NoResponse => "No response",
        }
    }
}

/// Lowercased prefixes that mark transcribed text as a sentinel rather than speech.
const SENTINEL_PREFIXES: &[&str] = &[
    "sorry, i didn't catch that",
    "sorry, i didn't hear anything",
    "sorry, there was an error",
];

/// True when `text` carries no usable reply: blank, one of the sentinel
/// phrases (case-insensitive prefix), or exactly "no response".
pub fn is_no_signal(text: &str) -> bool {
    let lower = text.trim().to_lowercase();
    lower.is_empty()
        || lower == "no response"
        || SENTINEL_PREFIXES.iter().any(|p| lower.starts_with(p))
}

/// The outcome of one listen.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Heard {
    Speech(String),
    Silence(NoSignal),
}

impl Heard {
    /// Normalizes recognizer output: blank or sentinel-looking text becomes
    /// [`Heard::Silence`].
    pub fn from_text(text: &str) -> Heard {
        if is_no_signal(text) {
            Heard::Silence(NoSignal::Unrecognized)
        } else {
            Heard::Speech(text.trim().to_string())
        }
    }

    pub fn text(&self) -> Option<&str> {
        match self {
            Heard::Speech(text) => Some(text),
            Heard::Silence(_) => None,
        }
    }

    /// Spoken text, or the sentinel phrase for silence.
    pub fn as_str(&self) -> &str {
        match self {
            Heard::Speech(text) => text,
            Heard::Silence(reason) => reason.sentinel(),
        }
    }
}

/// Per-call listen limits.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ListenParams {
    /// How long to wait for speech to start.
    pub timeout: Duration,
    /// Longest single phrase accepted once speech has started.
    pub phrase_limit: Duration,
}

impl ListenParams {
    pub const fn secs(timeout: u64, phrase_limit: u64) -> Self {
        Self {
            timeout: Duration::from_secs(timeout),
            phrase_limit: Duration::from_secs(phrase_limit),
        }
    }

    /// Short exchanges: name, mood, role choice.
    pub const SHORT: ListenParams = ListenParams::secs(10, 10);
    /// Interview answers and confirmations.
    pub const ANSWER: ListenParams = ListenParams::secs(15, 20);
}

/// Audio input and output, owned exclusively by one session.
#[async_trait]
pub trait VoiceIo: Send + Sync {
    /// Speaks `text`, returning once playback (and its trailing pause) is done.
    async fn speak(&self, text: &str) -> Result<(), SpeechError>;

    /// Listens for one phrase.
    async fn listen(&self, params: ListenParams) -> Result<Heard, SpeechError>;
}
