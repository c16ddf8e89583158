//! Axum route handler for form submissions.

use axum::{
    extract::{multipart::MultipartError, Multipart, State},
    http::StatusCode,
    response::{IntoResponse, Response},
};
use tracing::{info_span, Instrument};
use uuid::Uuid;

use crate::errors::AppError;
use crate::evaluation::{evaluate_submission, Submission};
use crate::extract::ResumeUpload;
use crate::routes::pages::FormPage;
use crate::state::AppState;

const JOB_DESCRIPTION_FIELD: &str = "job_description";
const RESUME_FIELD: &str = "resume";

/// POST /evaluate
///
/// Runs one submission and re-renders the form with results or an error banner.
/// Submissions are serialized: the next one starts only after this one finishes.
pub async fn handle_evaluate(State(state): State<AppState>, multipart: Multipart) -> Response {
    let mut job_description = String::new();
    let resume = match read_form(multipart, state.config.max_upload_bytes, &mut job_description)
        .await
    {
        Ok(resume) => resume,
        Err(err) => return err.into_page(&job_description),
    };
    let submission = Submission {
        job_description,
        resume,
    };
    let span = info_span!("submission", id = %Uuid::new_v4());

    let outcome = async {
        let _guard = state.submission_lock.lock().await;
        evaluate_submission(state.generator.as_ref(), &submission).await
    }
    .instrument(span)
    .await;

    let page = outcome.and_then(|evaluation| {
        FormPage::done(&submission.job_description, &evaluation).render_html()
    });
    match page {
        Ok(page) => page.into_response(),
        Err(err) => err.into_page(&submission.job_description),
    }
}

/// Reads the form fields. The job description is written as soon as its part is read,
/// so it survives a later failure on the resume part.
///
/// A file part with no name and no bytes is what browsers send when nothing was
/// picked, so it counts as no upload.
async fn read_form(
    mut multipart: Multipart,
    body_limit: usize,
    job_description: &mut String,
) -> Result<Option<ResumeUpload>, AppError> {
    let mut resume = None;

    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|e| form_error(e, body_limit, "Invalid form submission"))?
    {
        match field.name().unwrap_or("") {
            JOB_DESCRIPTION_FIELD => {
                *job_description = field
                    .text()
                    .await
                    .map_err(|e| form_error(e, body_limit, "Invalid job description"))?;
            }
            RESUME_FIELD => {
                let file_name = field.file_name().unwrap_or("").to_string();
                let content_type = field.content_type().unwrap_or("").to_string();
                let data = field
                    .bytes()
                    .await
                    .map_err(|e| form_error(e, body_limit, "Invalid resume upload"))?;

                if file_name.is_empty() && data.is_empty() {
                    continue;
                }
                resume = Some(ResumeUpload {
                    file_name,
                    content_type,
                    data,
                });
            }
            _ => {}
        }
    }

    Ok(resume)
}

fn form_error(err: MultipartError, body_limit: usize, context: &str) -> AppError {
    if err.status() == StatusCode::PAYLOAD_TOO_LARGE {
        AppError::UploadTooLarge(body_limit)
    } else {
        AppError::Validation(format!("{context}: {}", err.body_text()))
    }
}
