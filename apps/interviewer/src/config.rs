use std::path::PathBuf;
use std::str::FromStr;
use std::time::Duration;

use anyhow::{Context, Result};

/// Application configuration loaded from environment variables.
/// Every variable is optional; malformed numbers fail startup.
#[derive(Debug, Clone)]
pub struct Config {
    pub ollama_host: String,
    pub model: String,
    pub llm_timeout: Duration,
    pub interviewer_name: String,
    pub num_questions: usize,
    pub resume_dir: PathBuf,
    pub report_dir: PathBuf,
    pub tts_command: Option<String>,
    pub rust_log: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            ollama_host: "http://localhost:11434".to_string(),
            model: "llama2".to_string(),
            llm_timeout: Duration::from_secs(120),
            interviewer_name: "Gwen".to_string(),
            num_questions: 6,
            resume_dir: PathBuf::from("."),
            report_dir: PathBuf::from("."),
            tts_command: None,
            rust_log: "info".to_string(),
        }
    }
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok(); // load .env if present; ignore if missing
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Builds the config from any key → value source, falling back to defaults.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self> {
        let defaults = Config::default();
        let var = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());

        Ok(Config {
            ollama_host: var("OLLAMA_HOST").unwrap_or(defaults.ollama_host),
            model: var("INTERVIEW_MODEL").unwrap_or(defaults.model),
            llm_timeout: parse_var(var("LLM_TIMEOUT_SECS"), "LLM_TIMEOUT_SECS")?
                .map(Duration::from_secs)
                .unwrap_or(defaults.llm_timeout),
            interviewer_name: var("INTERVIEWER_NAME").unwrap_or(defaults.interviewer_name),
            num_questions: parse_var(var("NUM_QUESTIONS"), "NUM_QUESTIONS")?
                .unwrap_or(defaults.num_questions),
            resume_dir: var("RESUME_DIR")
                .map(PathBuf::from)
                .unwrap_or(defaults.resume_dir),
            report_dir: var("REPORT_DIR")
                .map(PathBuf::from)
                .unwrap_or(defaults.report_dir),
            tts_command: var("TTS_COMMAND"),
            rust_log: var("RUST_LOG").unwrap_or(defaults.rust_log),
        })
    }
}

fn parse_var<T>(raw: Option<String>, key: &str) -> Result<Option<T>>
where
    T: FromStr,
    T::Err: std::error::Error + Send + Sync + 'static,
{
    raw.map(|v| {
        v.trim()
            .parse::<T>()
            .with_context(|| format!("{key} must be a non-negative integer, got '{v}'"))
    })
    .transpose()
}
