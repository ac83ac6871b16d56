//! Thin wrapper over `pdf-extract`.

use std::panic::{self, AssertUnwindSafe};

use crate::extraction::ExtractionError;

/// Returns the text of every page, concatenated in document order.
///
/// `pdf-extract` can panic on malformed content streams; a panic is treated
/// the same as a document that fails to open.
pub fn extract_text(bytes: &[u8]) -> Result<String, ExtractionError> {
    panic::catch_unwind(AssertUnwindSafe(|| pdf_extract::extract_text_from_mem(bytes)))
        .map_err(|_| ExtractionError::InvalidDocument("PDF parser panicked".to_string()))?
        .map_err(|e| ExtractionError::InvalidDocument(e.to_string()))
}
