//! PDF text extraction for uploaded resumes.
//!
//! Pages are extracted in order and joined by a blank line; pages with no
//! text layer are skipped. An all-image PDF yields a fixed sentinel string
//! rather than an empty string, so callers always hold a non-empty marker.

use thiserror::Error;

/// Returned in place of extracted text when no page yields any.
pub const NO_TEXT_SENTINEL: &str = "Could not extract text (may be image-based PDF)";

#[derive(Debug, Error)]
pub enum ExtractError {
    #[error("unreadable PDF: {0}")]
    Pdf(#[from] pdf_extract::OutputError),
}

/// Extracts plain text from a PDF byte stream.
///
/// Read-only and deterministic: the same bytes always produce the same text.
/// A malformed or unreadable document is an `Err`; an image-only document is
/// `Ok(NO_TEXT_SENTINEL)`.
pub fn extract_text(bytes: &[u8]) -> Result<String, ExtractError> {
    let pages = pdf_extract::extract_text_from_mem_by_pages(bytes)?;
    Ok(join_pages(&pages))
}

/// True when `text` is something an analysis can actually run against.
pub fn is_usable(text: &str) -> bool {
    !text.trim().is_empty() && text != NO_TEXT_SENTINEL
}

fn join_pages(pages: &[String]) -> String {
    let parts: Vec<&str> = pages
        .iter()
        .map(|p| p.trim())
        .filter(|p| !p.is_empty())
        .collect();

    if parts.is_empty() {
        NO_TEXT_SENTINEL.to_string()
    } else {
        parts.join("\n\n")
    }
}
