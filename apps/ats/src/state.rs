use std::sync::Arc;

use tokio::sync::Mutex;

use crate::config::Config;
use crate::llm_client::TextGenerator;

/// Shared application state injected into all route handlers via Axum extractors.
#[derive(Clone)]
pub struct AppState {
    /// Gemini in production, a fake in tests.
    pub generator: Arc<dyn TextGenerator>,
    pub config: Config,
    /// Held for the whole pipeline so submissions never overlap.
    pub submission_lock: Arc<Mutex<()>>,
}

impl AppState {
    pub fn new(config: Config, generator: Arc<dyn TextGenerator>) -> Self {
        Self {
            generator,
            config,
            submission_lock: Arc::new(Mutex::new(())),
        }
    }
}
