//! Result Parser: strict JSON-object parse, then a lenient merge onto "N/A" defaults.

use serde_json::{Map, Value};

use crate::errors::AppError;
use crate::evaluation::prompts::{
    FIELD_CANDIDATE_SUMMARY, FIELD_EXPERIENCE, FIELD_MATCH, FIELD_MISSING_KEYWORDS,
};

/// Shown for any field the model left out.
pub const PLACEHOLDER: &str = "N/A";

/// The four fields rendered on the results panel.
#[derive(Debug, Clone, PartialEq)]
pub struct EvaluationResult {
    pub job_description_match: String,
    pub missing_keywords: String,
    pub candidate_summary: String,
    pub experience: String,
}

impl Default for EvaluationResult {
    fn default() -> Self {
        Self {
            job_description_match: PLACEHOLDER.to_string(),
            missing_keywords: PLACEHOLDER.to_string(),
            candidate_summary: PLACEHOLDER.to_string(),
            experience: PLACEHOLDER.to_string(),
        }
    }
}

/// The model's object as sent: every key optional, values of any JSON type.
struct RawEvaluation<'a> {
    job_description_match: Option<&'a Value>,
    missing_keywords: Option<&'a Value>,
    candidate_summary: Option<&'a Value>,
    experience: Option<&'a Value>,
}

impl<'a> RawEvaluation<'a> {
    fn from_object(object: &'a Map<String, Value>) -> Self {
        Self {
            job_description_match: object.get(FIELD_MATCH),
            missing_keywords: object.get(FIELD_MISSING_KEYWORDS),
            candidate_summary: object.get(FIELD_CANDIDATE_SUMMARY),
            experience: object.get(FIELD_EXPERIENCE),
        }
    }
}

impl EvaluationResult {
    /// Overwrites each default with the corresponding present, non-null value.
    fn merge(mut self, raw: RawEvaluation<'_>) -> Self {
        let fields = [
            (&mut self.job_description_match, raw.job_description_match),
            (&mut self.missing_keywords, raw.missing_keywords),
            (&mut self.candidate_summary, raw.candidate_summary),
            (&mut self.experience, raw.experience),
        ];
        for (slot, value) in fields {
            if let Some(rendered) = value.and_then(render_value) {
                *slot = rendered;
            }
        }
        self
    }
}

/// Parses the model's reply. The reply must be exactly one JSON object.
pub fn parse(raw_text: &str) -> Result<EvaluationResult, AppError> {
    let value: Value = serde_json::from_str(raw_text)
        .map_err(|e| AppError::MalformedResponse(format!("{e}; response was {raw_text:?}")))?;

    let Some(object) = value.as_object() else {
        return Err(AppError::MalformedResponse(format!(
            "expected a JSON object, got {raw_text:?}"
        )));
    };

    Ok(EvaluationResult::default().merge(RawEvaluation::from_object(object)))
}

fn render_value(value: &Value) -> Option<String> {
    match value {
        Value::Null => None,
        Value::String(s) => Some(s.clone()),
        Value::Array(items) => Some(
            items
                .iter()
                .filter_map(render_value)
                .collect::<Vec<_>>()
                .join(", "),
        ),
        other => Some(other.to_string()),
    }
}

/// Converts a "72%"-style field into a number. No bounds are applied.
pub fn parse_match_score(field: &str) -> Result<f64, AppError> {
    let stripped = field.trim().replace('%', "");
    stripped
        .trim()
        .parse::<f64>()
        .ok()
        .filter(|score| score.is_finite())
        .ok_or_else(|| AppError::InvalidMatchScore(field.to_string()))
}
