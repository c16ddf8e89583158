//! LLM Client: the single point of entry for Gemini API calls.
//!
//! Handlers never talk to the API directly; they hold an `Arc<dyn TextGenerator>`
//! so tests can substitute a fake generator.
//!
//! Model: gemini-pro (hardcoded, like the sampling parameters below)

use async_trait::async_trait;
use reqwest::Client;
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::debug;

/// The model used for every evaluation.
pub const MODEL: &str = "gemini-pro";

#[derive(Debug, Error)]
pub enum LlmError {
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("API error (status {status}): {message}")]
    Api { status: u16, message: String },

    #[error("JSON parse error: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("Response blocked by safety filters ({reason})")]
    Blocked { reason: String },

    #[error("LLM returned empty content")]
    EmptyContent,
}

/// Anything that can turn a prompt into raw model text.
#[async_trait]
pub trait TextGenerator: Send + Sync {
    async fn generate(&self, prompt: &str) -> Result<String, LlmError>;
}

// ────────────────────────────────────────────────────────────────────────────
// Static configuration
// ────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GenerationConfig {
    pub temperature: f32,
    pub top_p: f32,
    pub top_k: u32,
    pub max_output_tokens: u32,
}

impl Default for GenerationConfig {
    fn default() -> Self {
        Self {
            temperature: 0.4,
            top_p: 1.0,
            top_k: 32,
            max_output_tokens: 4096,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum HarmCategory {
    HarmCategoryHarassment,
    HarmCategoryHateSpeech,
    HarmCategorySexuallyExplicit,
    HarmCategoryDangerousContent,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum BlockThreshold {
    BlockMediumAndAbove,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SafetySetting {
    pub category: HarmCategory,
    pub threshold: BlockThreshold,
}

/// Harassment, hate speech, sexually explicit and dangerous content, each blocked
/// at medium severity and above.
pub fn default_safety_settings() -> Vec<SafetySetting> {
    [
        HarmCategory::HarmCategoryHarassment,
        HarmCategory::HarmCategoryHateSpeech,
        HarmCategory::HarmCategorySexuallyExplicit,
        HarmCategory::HarmCategoryDangerousContent,
    ]
    .into_iter()
    .map(|category| SafetySetting {
        category,
        threshold: BlockThreshold::BlockMediumAndAbove,
    })
    .collect()
}

/// Immutable client configuration, built once at startup.
#[derive(Debug, Clone)]
pub struct GeminiConfig {
    pub api_key: String,
    pub api_base: String,
    pub model: String,
    pub generation: GenerationConfig,
    pub safety_settings: Vec<SafetySetting>,
}

impl GeminiConfig {
    pub fn new(api_key: String, api_base: String) -> Self {
        Self {
            api_key,
            api_base,
            model: MODEL.to_string(),
            generation: GenerationConfig::default(),
            safety_settings: default_safety_settings(),
        }
    }

    fn endpoint(&self) -> String {
        format!(
            "{}/v1beta/models/{}:generateContent",
            self.api_base.trim_end_matches('/'),
            self.model
        )
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Wire types
// ────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct GenerateContentRequest<'a> {
    contents: Vec<RequestContent<'a>>,
    generation_config: &'a GenerationConfig,
    safety_settings: &'a [SafetySetting],
}

#[derive(Debug, Serialize)]
struct RequestContent<'a> {
    role: &'a str,
    parts: Vec<RequestPart<'a>>,
}

#[derive(Debug, Serialize)]
struct RequestPart<'a> {
    text: &'a str,
}

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GenerateContentResponse {
    #[serde(default)]
    pub candidates: Vec<Candidate>,
    pub prompt_feedback: Option<PromptFeedback>,
    pub usage_metadata: Option<UsageMetadata>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Candidate {
    pub content: Option<CandidateContent>,
    pub finish_reason: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct CandidateContent {
    #[serde(default)]
    pub parts: Vec<ResponsePart>,
}

#[derive(Debug, Deserialize)]
pub struct ResponsePart {
    pub text: Option<String>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PromptFeedback {
    pub block_reason: Option<String>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UsageMetadata {
    #[serde(default)]
    pub prompt_token_count: u32,
    #[serde(default)]
    pub candidates_token_count: u32,
}

impl GenerateContentResponse {
    /// Concatenated text parts of the first candidate.
    /// A blocked prompt or a safety stop with no text becomes `LlmError::Blocked`.
    pub fn into_text(self) -> Result<String, LlmError> {
        if let Some(reason) = self.prompt_feedback.and_then(|f| f.block_reason) {
            return Err(LlmError::Blocked { reason });
        }

        let candidate = self
            .candidates
            .into_iter()
            .next()
            .ok_or(LlmError::EmptyContent)?;

        let text: String = candidate
            .content
            .map(|c| c.parts.into_iter().filter_map(|p| p.text).collect())
            .unwrap_or_default();

        if !text.is_empty() {
            return Ok(text);
        }

        match candidate.finish_reason.as_deref() {
            Some(reason @ ("SAFETY" | "BLOCKLIST" | "PROHIBITED_CONTENT" | "RECITATION")) => {
                Err(LlmError::Blocked {
                    reason: reason.to_string(),
                })
            }
            _ => Err(LlmError::EmptyContent),
        }
    }
}

#[derive(Debug, Deserialize)]
struct GoogleError {
    error: GoogleErrorBody,
}

#[derive(Debug, Deserialize)]
struct GoogleErrorBody {
    message: String,
}

// ────────────────────────────────────────────────────────────────────────────
// Client
// ────────────────────────────────────────────────────────────────────────────

/// Gemini `generateContent` client. One request per call: no retry, no streaming,
/// and no timeout beyond the transport's own.
#[derive(Clone)]
pub struct GeminiClient {
    client: Client,
    config: GeminiConfig,
}

impl GeminiClient {
    pub fn new(config: GeminiConfig) -> Self {
        Self {
            client: Client::new(),
            config,
        }
    }

    pub fn model(&self) -> &str {
        &self.config.model
    }

    fn request_body<'a>(&'a self, prompt: &'a str) -> GenerateContentRequest<'a> {
        GenerateContentRequest {
            contents: vec![RequestContent {
                role: "user",
                parts: vec![RequestPart { text: prompt }],
            }],
            generation_config: &self.config.generation,
            safety_settings: &self.config.safety_settings,
        }
    }

    /// Makes the raw call, returning the full decoded response.
    pub async fn call(&self, prompt: &str) -> Result<GenerateContentResponse, LlmError> {
        let response = self
            .client
            .post(self.config.endpoint())
            .header("x-goog-api-key", &self.config.api_key)
            .json(&self.request_body(prompt))
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            let message = serde_json::from_str::<GoogleError>(&body)
                .map(|e| e.error.message)
                .unwrap_or(body);
            return Err(LlmError::Api {
                status: status.as_u16(),
                message,
            });
        }

        let body = response.text().await?;
        let parsed: GenerateContentResponse = serde_json::from_str(&body)?;

        if let Some(usage) = &parsed.usage_metadata {
            debug!(
                "LLM call succeeded: prompt_tokens={}, output_tokens={}",
                usage.prompt_token_count, usage.candidates_token_count
            );
        }

        Ok(parsed)
    }
}

#[async_trait]
impl TextGenerator for GeminiClient {
    async fn generate(&self, prompt: &str) -> Result<String, LlmError> {
        self.call(prompt).await?.into_text()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn client() -> GeminiClient {
        GeminiClient::new(GeminiConfig::new(
            "test-key".to_string(),
            "https://example.invalid/".to_string(),
        ))
    }

    #[test]
    fn test_endpoint_joins_base_and_model() {
        assert_eq!(
            client().config.endpoint(),
            "https://example.invalid/v1beta/models/gemini-pro:generateContent"
        );
    }

    #[test]
    fn test_request_body_carries_fixed_sampling_and_safety() {
        let client = client();
        let body = serde_json::to_value(client.request_body("hello")).unwrap();

        assert_eq!(body["contents"][0]["role"], "user");
        assert_eq!(body["contents"][0]["parts"][0]["text"], "hello");

        let generation = &body["generationConfig"];
        assert!((generation["temperature"].as_f64().unwrap() - 0.4).abs() < 1e-6);
        assert_eq!(generation["topP"], 1.0);
        assert_eq!(generation["topK"], 32);
        assert_eq!(generation["maxOutputTokens"], 4096);

        assert_eq!(
            body["safetySettings"],
            json!([
                {"category": "HARM_CATEGORY_HARASSMENT", "threshold": "BLOCK_MEDIUM_AND_ABOVE"},
                {"category": "HARM_CATEGORY_HATE_SPEECH", "threshold": "BLOCK_MEDIUM_AND_ABOVE"},
                {"category": "HARM_CATEGORY_SEXUALLY_EXPLICIT", "threshold": "BLOCK_MEDIUM_AND_ABOVE"},
                {"category": "HARM_CATEGORY_DANGEROUS_CONTENT", "threshold": "BLOCK_MEDIUM_AND_ABOVE"},
            ])
        );
    }

    #[test]
    fn test_response_text_concatenates_parts() {
        let response: GenerateContentResponse = serde_json::from_value(json!({
            "candidates": [{
                "content": {"role": "model", "parts": [{"text": "{\"a\":"}, {"text": "1}"}]},
                "finishReason": "STOP"
            }],
            "usageMetadata": {"promptTokenCount": 10, "candidatesTokenCount": 4}
        }))
        .unwrap();

        assert_eq!(response.into_text().unwrap(), "{\"a\":1}");
    }

    #[test]
    fn test_blocked_prompt_is_reported() {
        let response: GenerateContentResponse = serde_json::from_value(json!({
            "promptFeedback": {"blockReason": "SAFETY"}
        }))
        .unwrap();

        match response.into_text() {
            Err(LlmError::Blocked { reason }) => assert_eq!(reason, "SAFETY"),
            other => panic!("expected Blocked, got {other:?}"),
        }
    }

    #[test]
    fn test_safety_stop_without_text_is_blocked() {
        let response: GenerateContentResponse = serde_json::from_value(json!({
            "candidates": [{"finishReason": "SAFETY"}]
        }))
        .unwrap();

        assert!(matches!(
            response.into_text(),
            Err(LlmError::Blocked { .. })
        ));
    }

    #[test]
    fn test_no_candidates_is_empty_content() {
        let response: GenerateContentResponse = serde_json::from_value(json!({})).unwrap();
        assert!(matches!(response.into_text(), Err(LlmError::EmptyContent)));
    }

    #[test]
    fn test_text_is_returned_unmodified() {
        let raw = "  ```json\n{\"Experience\":\"5 years\"}\n```  ";
        let response: GenerateContentResponse = serde_json::from_value(json!({
            "candidates": [{"content": {"parts": [{"text": raw}]}}]
        }))
        .unwrap();

        assert_eq!(response.into_text().unwrap(), raw);
    }

    /// A request as seen by the local Gemini stand-in.
    #[derive(Debug, Clone)]
    struct SeenRequest {
        path: String,
        api_key: Option<String>,
        body: serde_json::Value,
    }

    #[derive(Clone)]
    struct StubServer {
        status: axum::http::StatusCode,
        reply: serde_json::Value,
        seen: std::sync::Arc<std::sync::Mutex<Vec<SeenRequest>>>,
    }

    async fn stub_handler(
        axum::extract::State(stub): axum::extract::State<StubServer>,
        uri: axum::http::Uri,
        headers: axum::http::HeaderMap,
        axum::Json(body): axum::Json<serde_json::Value>,
    ) -> (axum::http::StatusCode, axum::Json<serde_json::Value>) {
        stub.seen.lock().unwrap().push(SeenRequest {
            path: uri.path().to_string(),
            api_key: headers
                .get("x-goog-api-key")
                .and_then(|v| v.to_str().ok())
                .map(str::to_string),
            body,
        });
        (stub.status, axum::Json(stub.reply.clone()))
    }

    /// Serves `reply` with `status` on an ephemeral local port and returns the base URL.
    async fn start_stub(
        status: axum::http::StatusCode,
        reply: serde_json::Value,
    ) -> (String, StubServer) {
        let stub = StubServer {
            status,
            reply,
            seen: Default::default(),
        };
        let app = axum::Router::new()
            .fallback(stub_handler)
            .with_state(stub.clone());
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        tokio::spawn(async move {
            axum::serve(listener, app).await.unwrap();
        });
        (format!("http://{addr}"), stub)
    }

    fn client_for(api_base: String, api_key: &str) -> GeminiClient {
        GeminiClient::new(GeminiConfig::new(api_key.to_string(), api_base))
    }

    #[tokio::test]
    async fn test_generate_posts_prompt_with_api_key() {
        let (base, stub) = start_stub(
            axum::http::StatusCode::OK,
            json!({
                "candidates": [{
                    "content": {"role": "model", "parts": [{"text": "{\"Experience\":\"5 years\"}"}]},
                    "finishReason": "STOP"
                }],
                "usageMetadata": {"promptTokenCount": 12, "candidatesTokenCount": 6}
            }),
        )
        .await;

        let text = client_for(base, "secret-key")
            .generate("evaluate this")
            .await
            .unwrap();
        assert_eq!(text, "{\"Experience\":\"5 years\"}");

        let seen = stub.seen.lock().unwrap().clone();
        assert_eq!(seen.len(), 1);
        assert_eq!(seen[0].path, "/v1beta/models/gemini-pro:generateContent");
        assert_eq!(seen[0].api_key.as_deref(), Some("secret-key"));
        assert_eq!(seen[0].body["contents"][0]["parts"][0]["text"], "evaluate this");
        assert_eq!(seen[0].body["generationConfig"]["topK"], 32);
        assert_eq!(seen[0].body["safetySettings"].as_array().unwrap().len(), 4);
    }

    #[tokio::test]
    async fn test_error_envelope_becomes_api_error() {
        let (base, stub) = start_stub(
            axum::http::StatusCode::FORBIDDEN,
            json!({
                "error": {"code": 403, "message": "API key not valid", "status": "PERMISSION_DENIED"}
            }),
        )
        .await;

        match client_for(base, "bad-key").generate("evaluate this").await {
            Err(LlmError::Api { status, message }) => {
                assert_eq!(status, 403);
                assert_eq!(message, "API key not valid");
            }
            other => panic!("expected Api error, got {other:?}"),
        }
        assert_eq!(stub.seen.lock().unwrap().len(), 1);
    }

    #[tokio::test]
    async fn test_non_envelope_error_body_is_kept_verbatim() {
        let (base, _stub) = start_stub(
            axum::http::StatusCode::SERVICE_UNAVAILABLE,
            json!("upstream overloaded"),
        )
        .await;

        match client_for(base, "test-key").generate("evaluate this").await {
            Err(LlmError::Api { status, message }) => {
                assert_eq!(status, 503);
                assert_eq!(message, "\"upstream overloaded\"");
            }
            other => panic!("expected Api error, got {other:?}"),
        }
    }

    #[tokio::test]
    async fn test_unreachable_server_is_http_error() {
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        drop(listener);

        let result = client_for(format!("http://{addr}"), "test-key")
            .generate("evaluate this")
            .await;
        assert!(matches!(result, Err(LlmError::Http(_))), "got {result:?}");
    }
}
