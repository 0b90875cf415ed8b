//! Resume Signal Extractor: PDF text → per-role skills, experience signals,
//! and a suggested role.
//!
//! Text extraction is CPU-bound and runs inside `spawn_blocking`; a panic in
//! the PDF library is reported as an extraction failure.

pub mod experience;
pub mod skills;
pub mod suggestion;

use std::path::{Path, PathBuf};

use async_trait::async_trait;
use thiserror::Error;
use tracing::{debug, info};

use crate::models::ResumeProfile;

pub use experience::extract_experience;
pub use skills::extract_skills;
pub use suggestion::suggest_role;

#[derive(Debug, Error)]
pub enum ResumeError {
    #[error("Resume file not found: {0}")]
    NotFound(PathBuf),

    #[error("Could not extract text from resume: {0}")]
    Extraction(String),
}

/// Turns a discovered resume file into a profile.
#[async_trait]
pub trait ResumeReader: Send + Sync {
    async fn read(&self, path: &Path) -> Result<ResumeProfile, ResumeError>;
}

/// Reads the PDF text layer with [`parse_resume`].
pub struct PdfResumeReader;

#[async_trait]
impl ResumeReader for PdfResumeReader {
    async fn read(&self, path: &Path) -> Result<ResumeProfile, ResumeError> {
        parse_resume(path).await
    }
}

/// Parses the resume at `path` into a [`ResumeProfile`].
pub async fn parse_resume(path: &Path) -> Result<ResumeProfile, ResumeError> {
    if !path.exists() {
        return Err(ResumeError::NotFound(path.to_path_buf()));
    }

    let owned = path.to_path_buf();
    let text = tokio::task::spawn_blocking(move || pdf_extract::extract_text(&owned))
        .await
        .map_err(|e| ResumeError::Extraction(format!("extractor aborted: {e}")))?
        .map_err(|e| ResumeError::Extraction(e.to_string()))?;

    debug!("Extracted {} characters from {}", text.len(), path.display());
    parse_resume_text(path, &text)
}

/// Builds a profile from already-extracted resume text. Blank text counts
/// as an extraction failure (e.g. image-only PDFs).
pub fn parse_resume_text(source: &Path, text: &str) -> Result<ResumeProfile, ResumeError> {
    if text.trim().is_empty() {
        return Err(ResumeError::Extraction(
            "no text layer found (scanned or image-only PDF?)".to_string(),
        ));
    }

    let skills = extract_skills(text);
    let experience = extract_experience(text);
    let suggested_role = suggest_role(&skills, &experience);

    info!(
        "Parsed resume {}: suggested role {}, {} years experience",
        source.display(),
        suggested_role,
        experience.years
    );

    Ok(ResumeProfile {
        source: source.to_path_buf(),
        skills,
        experience,
        suggested_role,
        parsed_successfully: true,
    })
}

/// Returns the lexicographically first `*.pdf` (case-insensitive extension)
/// regular file in `dir`, or `None` when there is none or `dir` is unreadable.
pub fn find_resume_pdf(dir: &Path) -> Option<PathBuf> {
    let entries = std::fs::read_dir(dir).ok()?;
    let mut pdfs: Vec<PathBuf> = entries
        .filter_map(|entry| entry.ok().map(|e| e.path()))
        .filter(|path| path.is_file())
        .filter(|path| {
            path.extension()
                .and_then(|ext| ext.to_str())
                .map(|ext| ext.eq_ignore_ascii_case("pdf"))
                .unwrap_or(false)
        })
        .collect();
    pdfs.sort();
    pdfs.into_iter().next()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Role;

    #[tokio::test]
    async fn test_missing_file_is_not_found() {
        let result = parse_resume(Path::new("/definitely/not/here/resume.pdf")).await;
        assert!(matches!(result, Err(ResumeError::NotFound(_))));
    }

    #[tokio::test]
    async fn test_garbage_pdf_is_extraction_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("resume.pdf");
        std::fs::write(&path, b"this is not a pdf").unwrap();

        let result = parse_resume(&path).await;
        assert!(matches!(result, Err(ResumeError::Extraction(_))));
    }

    #[tokio::test]
    async fn test_pdf_reader_reports_missing_file() {
        let reader: &dyn ResumeReader = &PdfResumeReader;
        let result = reader.read(Path::new("/definitely/not/here/cv.pdf")).await;
        assert!(matches!(result, Err(ResumeError::NotFound(_))));
    }

    #[test]
    fn test_blank_text_is_extraction_error() {
        let result = parse_resume_text(Path::new("scan.pdf"), "  \n\t ");
        assert!(matches!(result, Err(ResumeError::Extraction(_))));
    }

    #[test]
    fn test_profile_from_text() {
        let text = "Senior engineer, 4 years experience with AWS, Kubernetes, Terraform and Ansible.";
        let profile = parse_resume_text(Path::new("cv.pdf"), text).unwrap();
        assert!(profile.parsed_successfully);
        assert_eq!(profile.experience.years, 4);
        assert_eq!(profile.suggested_role, Role::CloudEngineer);
        assert_eq!(profile.skills_for(Role::CloudEngineer).len(), 4);
    }

    #[test]
    fn test_find_resume_pdf_picks_first_sorted() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join("notes.txt"), b"x").unwrap();
        std::fs::write(dir.path().join("zeta.PDF"), b"x").unwrap();
        std::fs::write(dir.path().join("alpha.pdf"), b"x").unwrap();
        std::fs::create_dir(dir.path().join("aaa.pdf")).unwrap();

        let found = find_resume_pdf(dir.path()).unwrap();
        assert_eq!(found.file_name().unwrap(), "alpha.pdf");
    }

    #[test]
    fn test_find_resume_pdf_none_when_absent() {
        let dir = tempfile::tempdir().unwrap();
        assert!(find_resume_pdf(dir.path()).is_none());
        assert!(find_resume_pdf(Path::new("/no/such/dir")).is_none());
    }
}
