use askama::Template;
use axum::response::Html;

use crate::errors::AppError;
use crate::evaluation::Evaluation;

/// The single page of the app: the form, plus either a results panel or an error banner.
#[derive(Template)]
#[template(path = "index.html")]
pub struct FormPage<'a> {
    pub job_description: &'a str,
    pub evaluation: Option<&'a Evaluation>,
    pub error: Option<String>,
}

impl<'a> FormPage<'a> {
    pub fn idle() -> Self {
        Self {
            job_description: "",
            evaluation: None,
            error: None,
        }
    }

    pub fn done(job_description: &'a str, evaluation: &'a Evaluation) -> Self {
        Self {
            job_description,
            evaluation: Some(evaluation),
            error: None,
        }
    }

    pub fn failed(job_description: &'a str, err: &AppError) -> Self {
        Self {
            job_description,
            evaluation: None,
            error: Some(err.user_message()),
        }
    }

    pub fn render_html(&self) -> Result<Html<String>, AppError> {
        Ok(Html(self.render()?))
    }
}

/// GET /
pub async fn handle_index() -> Result<Html<String>, AppError> {
    FormPage::idle().render_html()
}
