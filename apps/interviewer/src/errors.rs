use thiserror::Error;

use crate::llm_client::LlmError;

/// Startup-level error type. Only failures to build the session's
/// collaborators surface here; everything after that degrades in place.
#[derive(Debug, Error)]
pub enum AppError {
    #[error("LLM client error: {0}")]
    Llm(#[from] LlmError),

    #[error("Filesystem error: {0}")]
    Io(#[from] std::io::Error),
}
