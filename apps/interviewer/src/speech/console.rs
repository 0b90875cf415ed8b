//! Console voice: prints what the interviewer says (optionally piping it
//! through a text-to-speech program such as `say` or `espeak`) and reads
//! the candidate's replies as lines of text.

use std::io::Write;
use std::time::Duration;

use async_trait::async_trait;
use tokio::io::{AsyncBufRead, AsyncBufReadExt, BufReader, Lines, Stdin};
use tokio::process::Command;
use tokio::sync::Mutex;
use tracing::debug;

use crate::speech::{Heard, ListenParams, NoSignal, SpeechError, VoiceIo};

/// Pause after each utterance so turns don't run together.
pub const TRAILING_PAUSE: Duration = Duration::from_millis(500);

pub struct ConsoleVoice<R> {
    speaker: String,
    tts_command: Option<String>,
    pause: Duration,
    input: Mutex<Lines<R>>,
}

impl ConsoleVoice<BufReader<Stdin>> {
    /// Reads replies from standard input.
    pub fn stdin(speaker: &str, tts_command: Option<String>) -> Self {
        Self::with_input(speaker, tts_command, BufReader::new(tokio::io::stdin()))
    }
}

impl<R: AsyncBufRead + Unpin + Send> ConsoleVoice<R> {
    pub fn with_input(speaker: &str, tts_command: Option<String>, input: R) -> Self {
        Self {
            speaker: speaker.to_string(),
            tts_command,
            pause: TRAILING_PAUSE,
            input: Mutex::new(input.lines()),
        }
    }

    #[allow(dead_code)]
    pub fn with_pause(mut self, pause: Duration) -> Self {
        self.pause = pause;
        self
    }

    async fn run_tts(&self, command: &str, text: &str) -> Result<(), SpeechError> {
        let status = Command::new(command).arg(text).status().await?;
        if !status.success() {
            return Err(SpeechError::Service(format!("{command} exited with {status}")));
        }
        Ok(())
    }
}

#[async_trait]
impl<R: AsyncBufRead + Unpin + Send> VoiceIo for ConsoleVoice<R> {
    async fn speak(&self, text: &str) -> Result<(), SpeechError> {
        if text.trim().is_empty() {
            return Err(SpeechError::EmptyText);
        }

        println!("{}: {}", self.speaker, text);

        if let Some(command) = &self.tts_command {
            self.run_tts(command, text).await?;
        }

        tokio::time::sleep(self.pause).await;
        Ok(())
    }

    async fn listen(&self, params: ListenParams) -> Result<Heard, SpeechError> {
        print!("> ");
        std::io::stdout().flush()?;

        // Typed input has no phrase duration; only the start timeout applies.
        debug!(
            "Listening: timeout={:?}, phrase_limit={:?}",
            params.timeout, params.phrase_limit
        );

        let mut input = self.input.lock().await;
        match tokio::time::timeout(params.timeout, input.next_line()).await {
            Err(_) => {
                println!();
                Ok(Heard::Silence(NoSignal::Timeout))
            }
            Ok(Ok(Some(line))) => Ok(Heard::from_text(&line)),
            Ok(Ok(None)) => Ok(Heard::Silence(NoSignal::ServiceError)),
            Ok(Err(e)) => Err(SpeechError::Device(e)),
        }
    }
}
