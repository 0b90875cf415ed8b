mod config;
mod dialogue;
mod errors;
mod feedback;
mod llm_client;
mod models;
mod questions;
mod report;
mod resume;
mod speech;
mod state;

#[cfg(test)]
mod test_support;

use anyhow::Result;
use tracing::{info, warn};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::config::Config;
use crate::dialogue::InterviewDriver;
use crate::models::Session;
use crate::state::AppState;

#[tokio::main]
async fn main() -> Result<()> {
    // Load configuration first (fails only on malformed numeric values)
    let config = Config::from_env()?;

    // Initialize structured logging
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| {
            EnvFilter::new(format!("{}={}", env!("CARGO_PKG_NAME"), &config.rust_log))
        }))
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Starting interviewer v{}", env!("CARGO_PKG_VERSION"));

    let state = AppState::build(config)?;

    let mut session = Session::new();
    let mut driver = InterviewDriver::new(&state);
    driver.run(&mut session).await;

    match driver.report_path() {
        Some(path) => info!(
            "Session {} finished: {} answers, report at {}",
            session.id,
            session.records.len(),
            path.display()
        ),
        None => warn!(
            "Session {} finished: {} answers, no report written",
            session.id,
            session.records.len()
        ),
    }

    Ok(())
}
