// Skill Extractor: PDF bytes -> plaintext -> vocabulary matches -> skill summary.
// The summary string is the only thing handed to the job aggregator.

pub mod handlers;
pub mod matcher;
pub mod pdf;

use bytes::Bytes;
use thiserror::Error;
use tracing::{debug, info};

use crate::extraction::matcher::SkillMatcher;

/// Returned in place of a skill list when no vocabulary term is present.
pub const NO_SKILLS_FOUND: &str = "No skills found";

/// Separator between skills in a summary. The aggregator splits on it verbatim.
pub const SKILL_DELIMITER: &str = ", ";

#[derive(Debug, Error)]
pub enum ExtractionError {
    #[error("could not open document as PDF: {0}")]
    InvalidDocument(String),
}

/// Extracts the text of an uploaded resume and returns its skill summary,
/// e.g. `"Python, SQL"` or [`NO_SKILLS_FOUND`].
///
/// Text extraction is CPU-bound, so it runs on the blocking pool.
pub async fn extract(document: Bytes) -> Result<String, ExtractionError> {
    let text = tokio::task::spawn_blocking(move || pdf::extract_text(&document))
        .await
        .map_err(|e| ExtractionError::InvalidDocument(format!("extraction aborted: {e}")))??;
    debug!("Extracted {} characters of text", text.len());

    let skills = SkillMatcher::global().find_skills(&text);
    info!("Matched {} skill(s) from vocabulary", skills.len());

    Ok(summarize(&skills))
}

/// Joins matched skills with [`SKILL_DELIMITER`], or yields the sentinel.
pub fn summarize(skills: &[&str]) -> String {
    if skills.is_empty() {
        NO_SKILLS_FOUND.to_string()
    } else {
        skills.join(SKILL_DELIMITER)
    }
}
