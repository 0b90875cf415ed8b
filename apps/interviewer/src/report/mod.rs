//! Session report: one Markdown file per interview, named
//! `interview_report_<name>_<YYYYMMDD_HHMMSS>.md`.

use std::fmt::Write as _;
use std::path::{Path, PathBuf};

use chrono::{DateTime, Local};
use thiserror::Error;
use tracing::info;

use crate::models::{Session, PLACEHOLDER_NAME};

#[derive(Debug, Error)]
pub enum ReportError {
    #[error("Failed to write report {path}: {source}")]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// File name for a report. The candidate name is reduced to ASCII
/// alphanumerics, `-` and `_` so spoken names are safe on any filesystem.
pub fn report_file_name(candidate_name: &str, at: DateTime<Local>) -> String {
    let cleaned: String = candidate_name
        .trim()
        .chars()
        .map(|c| if c.is_ascii_alphanumeric() || c == '-' { c } else { '_' })
        .collect();
    let cleaned = cleaned.trim_matches('_');
    let name = if cleaned.is_empty() { PLACEHOLDER_NAME } else { cleaned };
    format!("interview_report_{}_{}.md", name, at.format("%Y%m%d_%H%M%S"))
}

/// Renders the full report body.
pub fn render_report(session: &Session, at: DateTime<Local>) -> String {
    let mut out = String::new();

    // Writing to a String cannot fail.
    let _ = writeln!(out, "# Interview Report\n");
    let _ = writeln!(out, "- **Candidate:** {}", session.candidate_name);
    let _ = writeln!(out, "- **Role:** {}", session.role.display_name());
    let _ = writeln!(out, "- **Date:** {}", at.format("%B %d, %Y"));
    let _ = writeln!(out, "- **Session:** {}", session.id);

    if let Some(resume) = &session.resume {
        let _ = writeln!(out, "\n## Resume Summary\n");
        let _ = writeln!(
            out,
            "- **Suggested role:** {}",
            resume.suggested_role.display_name()
        );
        let _ = writeln!(out, "- **Years of experience:** {}", resume.experience.years);
        let skills = resume.skills_for(session.role);
        if !skills.is_empty() {
            let _ = writeln!(out, "- **Matched skills:** {}", skills.join(", "));
        }
        if !resume.experience.companies.is_empty() {
            let _ = writeln!(out, "- **Companies:** {}", resume.experience.companies.join(", "));
        }
        for line in &resume.experience.education {
            let _ = writeln!(out, "- **Education:** {line}");
        }
    }

    let _ = writeln!(out, "\n## Transcript\n");
    if session.records.is_empty() {
        let _ = writeln!(out, "_No questions were answered._");
    }
    for record in &session.records {
        let _ = writeln!(out, "### Question {}\n", record.question_number);
        let _ = writeln!(out, "**Q:** {}\n", record.question);
        let _ = writeln!(out, "**A:** {}\n", record.answer);
        let _ = writeln!(out, "**Feedback:** {}\n", record.feedback);
    }

    let _ = writeln!(out, "## Evaluation\n");
    match &session.evaluation {
        Some(eval) => {
            let _ = writeln!(out, "- **Questions answered:** {}", eval.total_questions);
            let _ = writeln!(
                out,
                "- **Average answer length:** {:.0} characters",
                eval.average_answer_length
            );
            let _ = writeln!(out, "\n{}", eval.overall_feedback);
        }
        None => {
            let _ = writeln!(out, "_No evaluation available._");
        }
    }

    out
}

/// Writes the report into `dir` and returns its path.
pub async fn write_report(
    dir: &Path,
    session: &Session,
    at: DateTime<Local>,
) -> Result<PathBuf, ReportError> {
    let path = dir.join(report_file_name(&session.candidate_name, at));
    let body = render_report(session, at);

    tokio::fs::write(&path, body)
        .await
        .map_err(|source| ReportError::Write {
            path: path.clone(),
            source,
        })?;

    info!("Report written to {}", path.display());
    Ok(path)
}
