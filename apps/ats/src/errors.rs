use axum::{
    http::StatusCode,
    response::{Html, IntoResponse, Response},
};
use thiserror::Error;

use crate::llm_client::LlmError;
use crate::routes::pages::FormPage;

pub const MISSING_RESUME_MESSAGE: &str = "Please upload a resume file to proceed.";

/// Application-level error type.
/// Every variant is local to one submission and ends up as a banner on the form page.
#[derive(Debug, Error)]
pub enum AppError {
    #[error("No resume file was uploaded")]
    MissingResume,

    #[error("Upload exceeds the {0}-byte limit")]
    UploadTooLarge(usize),

    #[error("Unsupported file type: {0}")]
    UnsupportedFileType(String),

    #[error("Text extraction failed: {0}")]
    ExtractionFailed(String),

    #[error("Generation failed: {0}")]
    GenerationFailed(String),

    #[error("Malformed LLM response: {0}")]
    MalformedResponse(String),

    #[error("Invalid match score: {0:?}")]
    InvalidMatchScore(String),

    #[error("Validation error: {0}")]
    Validation(String),

    #[error("Template error: {0}")]
    Template(#[from] askama::Error),

    #[error("Internal server error: {0}")]
    Internal(#[from] anyhow::Error),
}

impl From<LlmError> for AppError {
    fn from(err: LlmError) -> Self {
        AppError::GenerationFailed(err.to_string())
    }
}

impl AppError {
    pub fn status_code(&self) -> StatusCode {
        match self {
            AppError::MissingResume
            | AppError::UnsupportedFileType(_)
            | AppError::Validation(_) => StatusCode::BAD_REQUEST,
            AppError::UploadTooLarge(_) => StatusCode::PAYLOAD_TOO_LARGE,
            AppError::ExtractionFailed(_) => StatusCode::UNPROCESSABLE_ENTITY,
            AppError::GenerationFailed(_)
            | AppError::MalformedResponse(_)
            | AppError::InvalidMatchScore(_) => StatusCode::BAD_GATEWAY,
            AppError::Template(_) | AppError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// The message shown in the form's error banner.
    pub fn user_message(&self) -> String {
        match self {
            AppError::MissingResume => MISSING_RESUME_MESSAGE.to_string(),
            AppError::UploadTooLarge(limit) => format!(
                "The uploaded file is too large. The limit is {limit} bytes."
            ),
            AppError::UnsupportedFileType(mime) => format!(
                "Unsupported file type '{mime}'. Please upload a PDF or DOCX file."
            ),
            AppError::ExtractionFailed(reason) => {
                format!("Could not read text from the uploaded resume: {reason}")
            }
            AppError::GenerationFailed(reason) => {
                format!("The AI service could not evaluate this resume: {reason}")
            }
            AppError::MalformedResponse(_) => {
                "The AI service returned a response that is not valid JSON. Please submit again."
                    .to_string()
            }
            AppError::InvalidMatchScore(value) => format!(
                "The AI service returned a match score that is not a number: '{value}'."
            ),
            AppError::Validation(msg) => msg.clone(),
            AppError::Template(_) | AppError::Internal(_) => {
                "An internal server error occurred".to_string()
            }
        }
    }

    /// Logs the failure at a level matching its class.
    fn log(&self) {
        match self {
            AppError::GenerationFailed(msg) => tracing::error!("LLM error: {msg}"),
            AppError::MalformedResponse(msg) => tracing::error!("Malformed LLM response: {msg}"),
            AppError::Template(e) => tracing::error!("Template error: {e}"),
            AppError::Internal(e) => tracing::error!("Internal error: {e:?}"),
            other => tracing::info!("Submission rejected: {other}"),
        }
    }

    /// Logs the failure and renders the form page with its banner.
    /// The job description is echoed back into the form.
    pub fn into_page(self, job_description: &str) -> Response {
        self.log();
        let status = self.status_code();

        match FormPage::failed(job_description, &self).render_html() {
            Ok(page) => (status, page).into_response(),
            // The error page itself could not be rendered; fall back to plain text.
            Err(e) => {
                tracing::error!("Template error while rendering error page: {e}");
                (status, Html(self.user_message())).into_response()
            }
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        self.into_page("")
    }
}
