use axum::{
    extract::Multipart,
    response::{Html, Redirect},
};
use bytes::Bytes;
use tracing::info;
use url::form_urlencoded;

use crate::errors::AppError;
use crate::extraction::extract;

/// Name of the multipart field carrying the resume.
pub const RESUME_FIELD: &str = "resume";

const UPLOAD_FORM: &str = r#"<!DOCTYPE html>
<html lang="en">
<head><meta charset="UTF-8"><title>jobmatch</title></head>
<body>
  <h1>Find jobs for your resume</h1>
  <form method="post" action="/" enctype="multipart/form-data">
    <input type="file" name="resume" accept=".pdf,application/pdf" required>
    <button type="submit">Upload</button>
  </form>
</body>
</html>
"#;

/// GET /
pub async fn handle_upload_form() -> Html<&'static str> {
    Html(UPLOAD_FORM)
}

/// POST /
///
/// Accepts a multipart upload, extracts the skill summary and redirects to
/// `/jobs?skills=...`. Only the filename suffix is checked here; the bytes
/// are validated by the extractor itself.
pub async fn handle_upload(mut multipart: Multipart) -> Result<Redirect, AppError> {
    let mut resume: Option<(String, Bytes)> = None;

    while let Some(field) = multipart.next_field().await? {
        if field.name() != Some(RESUME_FIELD) {
            continue;
        }
        let file_name = field.file_name().unwrap_or_default().to_string();
        let bytes = field.bytes().await?;
        resume = Some((file_name, bytes));
        break;
    }

    let (file_name, bytes) = resume
        .ok_or_else(|| AppError::Validation(format!("missing '{RESUME_FIELD}' file field")))?;

    if !file_name.ends_with(".pdf") {
        return Err(AppError::Validation(format!(
            "'{file_name}' is not a .pdf file"
        )));
    }

    info!("Received resume '{}' ({} bytes)", file_name, bytes.len());
    let skills = extract(bytes).await?;
    info!("Extracted skills: {skills}");

    Ok(Redirect::to(&jobs_location(&skills)))
}

/// Builds the results URL for a skill summary.
pub fn jobs_location(skills: &str) -> String {
    let encoded: String = form_urlencoded::byte_serialize(skills.as_bytes()).collect();
    format!("/jobs?skills={encoded}")
}
