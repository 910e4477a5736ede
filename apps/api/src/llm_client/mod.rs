/// LLM Client — the single point of entry for all generation-model calls.
///
/// ARCHITECTURAL RULE: No other module may call the Gemini API directly.
/// Handlers depend on the `GenerationModel` trait; `GeminiClient` is the only
/// production implementation.
///
/// One attempt per call. Deadlines are enforced by the caller, which drops the
/// returned future on expiry.
use std::sync::OnceLock;
use std::time::Duration;

use async_trait::async_trait;
use reqwest::{Client, StatusCode};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use thiserror::Error;
use tracing::debug;

pub mod prompts;

const CONNECT_TIMEOUT: Duration = Duration::from_secs(5);

/// Process-wide HTTP handle, built on first use and never torn down.
static SHARED_HTTP: OnceLock<Client> = OnceLock::new();

#[derive(Debug, Error)]
pub enum LlmError {
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("API error (status {status}): {message}")]
    Api { status: u16, message: String },

    #[error("Model overloaded or rate limited (status {status}): {message}")]
    Overloaded { status: u16, message: String },

    #[error("LLM returned empty content")]
    EmptyContent,
}

/// Everything the model needs for one structured generation.
#[derive(Debug, Clone)]
pub struct GenerationRequest {
    pub model: String,
    pub prompt: String,
    pub system: Option<String>,
    /// Structured-output schema the model must honor.
    pub schema: Value,
}

/// The external generation capability, treated as an opaque text generator.
#[async_trait]
pub trait GenerationModel: Send + Sync {
    /// Returns the raw text payload produced for `request`.
    async fn generate(&self, api_key: &str, request: &GenerationRequest)
        -> Result<String, LlmError>;
}

// ────────────────────────────────────────────────────────────────────────────
// Gemini wire types
// ────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct GeminiRequest<'a> {
    contents: Vec<GeminiContent<'a>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    system_instruction: Option<GeminiContent<'a>>,
    generation_config: GenerationConfig<'a>,
}

#[derive(Debug, Serialize)]
struct GeminiContent<'a> {
    #[serde(skip_serializing_if = "Option::is_none")]
    role: Option<&'a str>,
    parts: Vec<GeminiPart<'a>>,
}

#[derive(Debug, Serialize)]
struct GeminiPart<'a> {
    text: &'a str,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct GenerationConfig<'a> {
    response_mime_type: &'a str,
    response_schema: &'a Value,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GeminiResponse {
    #[serde(default)]
    pub candidates: Vec<Candidate>,
    pub usage_metadata: Option<UsageMetadata>,
}

#[derive(Debug, Deserialize)]
pub struct Candidate {
    pub content: Option<CandidateContent>,
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
pub struct UsageMetadata {
    #[serde(default)]
    pub prompt_token_count: u32,
    #[serde(default)]
    pub candidates_token_count: u32,
}

impl GeminiResponse {
    /// Concatenates the text parts of the first candidate.
    pub fn text(&self) -> Option<String> {
        let parts = &self.candidates.first()?.content.as_ref()?.parts;
        let text: String = parts.iter().filter_map(|p| p.text.as_deref()).collect();
        Some(text)
    }
}

#[derive(Debug, Deserialize)]
struct GeminiError {
    error: GeminiErrorBody,
}

#[derive(Debug, Deserialize)]
struct GeminiErrorBody {
    message: String,
    #[serde(default)]
    status: String,
}

// ────────────────────────────────────────────────────────────────────────────
// Client
// ────────────────────────────────────────────────────────────────────────────

/// Gemini `generateContent` client with structured JSON output.
#[derive(Clone)]
pub struct GeminiClient {
    client: Client,
    api_base: String,
}

impl GeminiClient {
    /// Builds a client on top of the process-wide HTTP handle.
    pub fn shared(api_base: impl Into<String>) -> Result<Self, LlmError> {
        Ok(Self {
            client: shared_http()?,
            api_base: api_base.into().trim_end_matches('/').to_string(),
        })
    }

    fn endpoint(&self, model: &str) -> String {
        format!("{}/models/{}:generateContent", self.api_base, model)
    }
}

fn shared_http() -> Result<Client, LlmError> {
    if let Some(client) = SHARED_HTTP.get() {
        return Ok(client.clone());
    }
    let client = Client::builder().connect_timeout(CONNECT_TIMEOUT).build()?;
    Ok(SHARED_HTTP.get_or_init(|| client).clone())
}

#[async_trait]
impl GenerationModel for GeminiClient {
    async fn generate(
        &self,
        api_key: &str,
        request: &GenerationRequest,
    ) -> Result<String, LlmError> {
        let body = GeminiRequest {
            contents: vec![GeminiContent {
                role: Some("user"),
                parts: vec![GeminiPart {
                    text: &request.prompt,
                }],
            }],
            system_instruction: request.system.as_deref().map(|text| GeminiContent {
                role: None,
                parts: vec![GeminiPart { text }],
            }),
            generation_config: GenerationConfig {
                response_mime_type: "application/json",
                response_schema: &request.schema,
            },
        };

        let response = self
            .client
            .post(self.endpoint(&request.model))
            .header("x-goog-api-key", api_key)
            .json(&body)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(classify_failure(status, &body));
        }

        let gemini: GeminiResponse = response.json().await?;
        if let Some(usage) = &gemini.usage_metadata {
            debug!(
                "Model call succeeded: prompt_tokens={}, output_tokens={}",
                usage.prompt_token_count, usage.candidates_token_count
            );
        }

        gemini.text().ok_or(LlmError::EmptyContent)
    }
}

/// Maps a non-success provider response to an `LlmError`.
/// Rate limiting and capacity errors are reported as `Overloaded`.
fn classify_failure(status: StatusCode, body: &str) -> LlmError {
    let parsed = serde_json::from_str::<GeminiError>(body).ok();
    let provider_status = parsed.as_ref().map(|e| e.error.status.as_str()).unwrap_or("");
    let overloaded = status == StatusCode::TOO_MANY_REQUESTS
        || status == StatusCode::SERVICE_UNAVAILABLE
        || matches!(provider_status, "RESOURCE_EXHAUSTED" | "UNAVAILABLE");

    let message = parsed
        .map(|e| e.error.message)
        .unwrap_or_else(|| body.to_string());

    if overloaded {
        LlmError::Overloaded {
            status: status.as_u16(),
            message,
        }
    } else {
        LlmError::Api {
            status: status.as_u16(),
            message,
        }
    }
}

/// Strips ```json ... ``` or ``` ... ``` code fences from LLM output.
pub fn strip_json_fences(text: &str) -> &str {
    let text = text.trim();
    if let Some(stripped) = text.strip_prefix("```json") {
        stripped
            .trim_start()
            .strip_suffix("```")
            .map(|s| s.trim())
            .unwrap_or(stripped.trim_start())
    } else if let Some(stripped) = text.strip_prefix("```") {
        stripped
            .trim_start()
            .strip_suffix("```")
            .map(|s| s.trim())
            .unwrap_or(stripped.trim_start())
    } else {
        text
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_strip_json_fences_with_json_tag() {
        let input = "```json\n[{\"careerName\": \"Nurse\"}]\n```";
        assert_eq!(strip_json_fences(input), "[{\"careerName\": \"Nurse\"}]");
    }

    #[test]
    fn test_strip_json_fences_without_tag() {
        let input = "```\n{\"roadmap\": []}\n```";
        assert_eq!(strip_json_fences(input), "{\"roadmap\": []}");
    }

    #[test]
    fn test_strip_json_fences_no_fences() {
        assert_eq!(strip_json_fences("  [1, 2]  "), "[1, 2]");
    }

    #[test]
    fn test_classify_rate_limit_as_overloaded() {
        let body = r#"{"error": {"code": 429, "message": "Quota exceeded", "status": "RESOURCE_EXHAUSTED"}}"#;
        match classify_failure(StatusCode::TOO_MANY_REQUESTS, body) {
            LlmError::Overloaded { status, message } => {
                assert_eq!(status, 429);
                assert_eq!(message, "Quota exceeded");
            }
            other => panic!("expected Overloaded, got {other:?}"),
        }
    }

    #[test]
    fn test_classify_unavailable_status_as_overloaded() {
        let body = r#"{"error": {"code": 500, "message": "The model is overloaded.", "status": "UNAVAILABLE"}}"#;
        assert!(matches!(
            classify_failure(StatusCode::INTERNAL_SERVER_ERROR, body),
            LlmError::Overloaded { .. }
        ));
    }

    #[test]
    fn test_classify_bad_request_as_api_error() {
        let body = r#"{"error": {"code": 400, "message": "API key not valid", "status": "INVALID_ARGUMENT"}}"#;
        match classify_failure(StatusCode::BAD_REQUEST, body) {
            LlmError::Api { status, message } => {
                assert_eq!(status, 400);
                assert_eq!(message, "API key not valid");
            }
            other => panic!("expected Api, got {other:?}"),
        }
    }

    #[test]
    fn test_classify_unparsable_body_keeps_raw_text() {
        match classify_failure(StatusCode::BAD_GATEWAY, "upstream exploded") {
            LlmError::Api { message, .. } => assert_eq!(message, "upstream exploded"),
            other => panic!("expected Api, got {other:?}"),
        }
    }

    #[test]
    fn test_response_text_joins_parts() {
        let json = r#"{
            "candidates": [{"content": {"parts": [{"text": "[{\"a\":"}, {"text": "1}]"}]}}],
            "usageMetadata": {"promptTokenCount": 10, "candidatesTokenCount": 4}
        }"#;
        let response: GeminiResponse = serde_json::from_str(json).unwrap();
        assert_eq!(response.text().as_deref(), Some("[{\"a\":1}]"));
    }

    #[test]
    fn test_response_without_candidates_has_no_text() {
        let response: GeminiResponse = serde_json::from_str(r#"{"candidates": []}"#).unwrap();
        assert!(response.text().is_none());
    }

    #[test]
    fn test_request_serializes_structured_output_config() {
        let schema = serde_json::json!({"type": "ARRAY"});
        let body = GeminiRequest {
            contents: vec![GeminiContent {
                role: Some("user"),
                parts: vec![GeminiPart { text: "hello" }],
            }],
            system_instruction: Some(GeminiContent {
                role: None,
                parts: vec![GeminiPart { text: "be terse" }],
            }),
            generation_config: GenerationConfig {
                response_mime_type: "application/json",
                response_schema: &schema,
            },
        };
        let value = serde_json::to_value(&body).unwrap();
        assert_eq!(value["generationConfig"]["responseMimeType"], "application/json");
        assert_eq!(value["generationConfig"]["responseSchema"]["type"], "ARRAY");
        assert_eq!(value["systemInstruction"]["parts"][0]["text"], "be terse");
        assert!(value["systemInstruction"].get("role").is_none());
        assert_eq!(value["contents"][0]["role"], "user");
    }

    #[test]
    fn test_endpoint_trims_trailing_slash() {
        let client = GeminiClient::shared("http://localhost:9999/v1beta/").unwrap();
        assert_eq!(
            client.endpoint("gemini-2.5-flash"),
            "http://localhost:9999/v1beta/models/gemini-2.5-flash:generateContent"
        );
    }
}
