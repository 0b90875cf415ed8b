use std::sync::Arc;

use tracing::info;

use crate::config::Config;
use crate::errors::AppError;
use crate::feedback::FeedbackGenerator;
use crate::llm_client::{LlmClient, TextGenerator};
use crate::resume::{PdfResumeReader, ResumeReader};
use crate::speech::{ConsoleVoice, VoiceIo};

/// Collaborators injected into the dialogue driver.
#[derive(Clone)]
pub struct AppState {
    pub config: Config,
    /// Pluggable audio boundary. Default: console text with optional TTS command.
    pub voice: Arc<dyn VoiceIo>,
    pub feedback: FeedbackGenerator,
    pub resumes: Arc<dyn ResumeReader>,
}

impl AppState {
    pub fn new(config: Config, voice: Arc<dyn VoiceIo>, generator: Arc<dyn TextGenerator>) -> Self {
        let feedback = FeedbackGenerator::new(generator, &config.interviewer_name);
        Self {
            config,
            voice,
            feedback,
            resumes: Arc::new(PdfResumeReader),
        }
    }

    #[allow(dead_code)]
    pub fn with_resume_reader(mut self, reader: Arc<dyn ResumeReader>) -> Self {
        self.resumes = reader;
        self
    }

    /// Production wiring: Ollama client plus console voice. Creates the
    /// report directory if it is missing.
    pub fn build(config: Config) -> Result<Self, AppError> {
        std::fs::create_dir_all(&config.report_dir)?;

        let llm = LlmClient::new(&config.ollama_host, config.model.clone(), config.llm_timeout)?;
        info!(
            "LLM client initialized (host: {}, model: {})",
            config.ollama_host,
            llm.model()
        );

        let voice = ConsoleVoice::stdin(&config.interviewer_name, config.tts_command.clone());
        match &config.tts_command {
            Some(cmd) => info!("Speech output via '{cmd}'"),
            None => info!("Speech output via console only"),
        }

        Ok(Self::new(config, Arc::new(voice), Arc::new(llm)))
    }
}
