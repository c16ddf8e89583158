// ATS evaluation pipeline.
// Extract → prompt → generate → parse → score → recommend, once per submission.
// All LLM calls go through the TextGenerator handed in by the caller.

pub mod parser;
pub mod prompts;
pub mod recommendation;

use tracing::info;

use crate::errors::AppError;
use crate::extract::ResumeUpload;
use crate::llm_client::TextGenerator;

use self::parser::{parse, parse_match_score, EvaluationResult};
use self::prompts::build_prompt;
use self::recommendation::Recommendation;

/// One form submission. `resume` is `None` when no file was picked.
#[derive(Debug, Clone)]
pub struct Submission {
    pub job_description: String,
    pub resume: Option<ResumeUpload>,
}

/// Everything the results panel shows.
#[derive(Debug, Clone)]
pub struct Evaluation {
    pub result: EvaluationResult,
    pub recommendation: Recommendation,
}

/// Runs the full pipeline for one submission.
/// A missing resume is rejected before any extraction or generation happens.
pub async fn evaluate_submission(
    generator: &dyn TextGenerator,
    submission: &Submission,
) -> Result<Evaluation, AppError> {
    let upload = submission.resume.clone().ok_or(AppError::MissingResume)?;
    info!(
        "Evaluating resume '{}' ({}, {} bytes)",
        upload.file_name,
        upload.content_type,
        upload.data.len()
    );

    let resume_text = tokio::task::spawn_blocking(move || upload.extract_text())
        .await
        .map_err(|e| AppError::Internal(e.into()))??;

    let prompt = build_prompt(&resume_text, &submission.job_description);
    let raw = generator.generate(&prompt).await?;

    let result = parse(&raw)?;
    let match_score = parse_match_score(&result.job_description_match)?;
    let recommendation = Recommendation::from_score(match_score);
    info!("Match score {match_score} → {recommendation:?}");

    Ok(Evaluation {
        result,
        recommendation,
    })
}
