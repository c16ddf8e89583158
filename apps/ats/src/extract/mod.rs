//! Text Extractor: turns an uploaded resume blob into plain text.
//!
//! Dispatch is an exhaustive match over [`ResumeFormat`]; anything outside the closed
//! set is rejected with `UnsupportedFileType` before the blob is touched.

use bytes::Bytes;
use tracing::debug;

use crate::errors::AppError;

pub mod docx;
pub mod pdf;

pub const PDF_MIME: &str = "application/pdf";
pub const DOCX_MIME: &str =
    "application/vnd.openxmlformats-officedocument.wordprocessingml.document";

/// A resume file as received from the form.
#[derive(Debug, Clone)]
pub struct ResumeUpload {
    pub file_name: String,
    pub content_type: String,
    pub data: Bytes,
}

/// Resume formats the extractor understands.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ResumeFormat {
    Pdf,
    Docx,
}

impl ResumeFormat {
    /// Resolves a declared MIME type. Parameters and ASCII case are ignored.
    pub fn from_mime(mime: &str) -> Result<Self, AppError> {
        let essence = mime.split(';').next().unwrap_or("").trim();
        if essence.eq_ignore_ascii_case(PDF_MIME) {
            Ok(ResumeFormat::Pdf)
        } else if essence.eq_ignore_ascii_case(DOCX_MIME) {
            Ok(ResumeFormat::Docx)
        } else {
            Err(AppError::UnsupportedFileType(mime.to_string()))
        }
    }
}

/// Extracts the raw text of `data`, interpreted according to `mime_type`.
pub fn extract(data: &[u8], mime_type: &str) -> Result<String, AppError> {
    let format = ResumeFormat::from_mime(mime_type)?;
    if data.is_empty() {
        return Err(AppError::ExtractionFailed("the uploaded file is empty".to_string()));
    }

    let text = match format {
        ResumeFormat::Pdf => pdf::extract_text(data)?,
        ResumeFormat::Docx => docx::extract_text(data)?,
    };

    debug!("Extracted {} chars from {:?} resume", text.len(), format);
    Ok(text)
}

impl ResumeUpload {
    pub fn extract_text(&self) -> Result<String, AppError> {
        extract(&self.data, &self.content_type)
    }
}
