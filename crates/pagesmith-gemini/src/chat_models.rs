//! `ChatGemini` chat model implementation

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use tracing::debug;

use pagesmith::error::{Error, Result};
use pagesmith::language_models::{ChatModel, ChatResult, TokenUsage};
use pagesmith::messages::Message;

use crate::{GEMINI_API_KEY_ENV, GEMINI_DEFAULT_API_BASE};

/// Chat model backed by Google's Generative Language API.
///
/// One `generateContent` request per call. No retries, no streaming,
/// no timeout beyond the HTTP client's defaults.
#[derive(Debug, Clone)]
pub struct ChatGemini {
    client: reqwest::Client,
    api_key: String,
    api_base: String,
    model: String,
    temperature: Option<f32>,
}

impl Default for ChatGemini {
    fn default() -> Self {
        Self::new()
    }
}

impl ChatGemini {
    /// Create a client with the API key from `GEMINI_API_KEY`.
    ///
    /// An unset variable leaves the key empty; calls then fail with the
    /// provider's authentication error at invocation time.
    #[must_use]
    pub fn new() -> Self {
        Self {
            client: reqwest::Client::new(),
            api_key: std::env::var(GEMINI_API_KEY_ENV).unwrap_or_default(),
            api_base: GEMINI_DEFAULT_API_BASE.to_string(),
            model: "gemini-1.5-pro".to_string(),
            temperature: None,
        }
    }

    /// Set the API key explicitly.
    #[must_use]
    pub fn with_api_key(mut self, api_key: impl Into<String>) -> Self {
        self.api_key = api_key.into();
        self
    }

    /// Point the client at a different API base URL.
    #[must_use]
    pub fn with_api_base(mut self, api_base: impl Into<String>) -> Self {
        self.api_base = api_base.into();
        self
    }

    /// Set the model identifier (e.g. `gemini-1.5-pro`).
    #[must_use]
    pub fn with_model(mut self, model: impl Into<String>) -> Self {
        self.model = model.into();
        self
    }

    /// Set the sampling temperature.
    #[must_use]
    pub fn with_temperature(mut self, temperature: f32) -> Self {
        self.temperature = Some(temperature);
        self
    }

    fn build_request(&self, messages: &[Message]) -> GenerateContentRequest {
        // The API takes a single systemInstruction; multiple system
        // messages are joined in order.
        let system_texts: Vec<&str> = messages
            .iter()
            .filter_map(|m| match m {
                Message::System { content } => Some(content.as_str()),
                _ => None,
            })
            .collect();
        let system_instruction = if system_texts.is_empty() {
            None
        } else {
            Some(Content {
                role: None,
                parts: vec![Part {
                    text: system_texts.join("\n\n"),
                }],
            })
        };

        let contents = messages
            .iter()
            .filter_map(|m| match m {
                Message::Human { content } => Some(Content::with_role("user", content)),
                Message::AI { content } => Some(Content::with_role("model", content)),
                Message::System { .. } => None,
            })
            .collect();

        GenerateContentRequest {
            system_instruction,
            contents,
            generation_config: self.temperature.map(|temperature| GenerationConfig {
                temperature: Some(temperature),
            }),
        }
    }
}

#[async_trait]
impl ChatModel for ChatGemini {
    async fn generate(&self, messages: &[Message]) -> Result<ChatResult> {
        let url = format!("{}/models/{}:generateContent", self.api_base, self.model);
        let request = self.build_request(messages);

        debug!(model = %self.model, contents = request.contents.len(), "sending generateContent request");

        let response = self
            .client
            .post(&url)
            .header("x-goog-api-key", &self.api_key)
            .json(&request)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            let message = parse_api_error(&body).unwrap_or(body);
            let message = format!("Gemini API error (HTTP {}): {}", status.as_u16(), message);

            return Err(match status.as_u16() {
                401 | 403 => Error::authentication(message),
                429 => Error::rate_limit(message),
                _ => Error::api(message),
            });
        }

        let parsed: GenerateContentResponse = response
            .json()
            .await
            .map_err(|e| Error::api_format(format!("failed to deserialize response: {e}")))?;

        let content = parsed
            .candidates
            .first()
            .and_then(|c| c.content.as_ref())
            .map(|c| {
                c.parts
                    .iter()
                    .map(|p| p.text.as_str())
                    .collect::<Vec<_>>()
                    .concat()
            })
            .ok_or_else(|| Error::api_format("response contained no candidates"))?;

        let mut result = ChatResult::new(content);
        if let Some(usage) = parsed.usage_metadata {
            result = result.with_usage(TokenUsage {
                input_tokens: usage.prompt_token_count,
                output_tokens: usage.candidates_token_count,
            });
        }
        Ok(result)
    }

    fn model_name(&self) -> &str {
        &self.model
    }
}

/// Extract the provider's error message from an error body, if present.
fn parse_api_error(body: &str) -> Option<String> {
    let parsed: ApiErrorBody = serde_json::from_str(body).ok()?;
    Some(parsed.error.message)
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct GenerateContentRequest {
    #[serde(skip_serializing_if = "Option::is_none")]
    system_instruction: Option<Content>,
    contents: Vec<Content>,
    #[serde(skip_serializing_if = "Option::is_none")]
    generation_config: Option<GenerationConfig>,
}

#[derive(Debug, Serialize, Deserialize)]
struct Content {
    #[serde(skip_serializing_if = "Option::is_none")]
    role: Option<String>,
    #[serde(default)]
    parts: Vec<Part>,
}

impl Content {
    fn with_role(role: &str, text: &str) -> Self {
        Self {
            role: Some(role.to_string()),
            parts: vec![Part {
                text: text.to_string(),
            }],
        }
    }
}

#[derive(Debug, Serialize, Deserialize)]
struct Part {
    text: String,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct GenerationConfig {
    #[serde(skip_serializing_if = "Option::is_none")]
    temperature: Option<f32>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct GenerateContentResponse {
    #[serde(default)]
    candidates: Vec<Candidate>,
    usage_metadata: Option<UsageMetadata>,
}

#[derive(Debug, Deserialize)]
struct Candidate {
    content: Option<Content>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct UsageMetadata {
    #[serde(default)]
    prompt_token_count: u32,
    #[serde(default)]
    candidates_token_count: u32,
}

#[derive(Debug, Deserialize)]
struct ApiErrorBody {
    error: ApiErrorDetail,
}

#[derive(Debug, Deserialize)]
struct ApiErrorDetail {
    message: String,
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_builder_defaults() {
        let model = ChatGemini::new().with_api_key("k");
        assert_eq!(model.model_name(), "gemini-1.5-pro");
        assert_eq!(model.api_base, GEMINI_DEFAULT_API_BASE);
        assert!(model.temperature.is_none());
    }

    #[test]
    fn test_builder_overrides() {
        let model = ChatGemini::new()
            .with_api_key("k")
            .with_model("gemini-2.0-flash")
            .with_temperature(0.2)
            .with_api_base("http://localhost:9999");
        assert_eq!(model.model_name(), "gemini-2.0-flash");
        assert_eq!(model.api_base, "http://localhost:9999");
        assert_eq!(model.temperature, Some(0.2));
    }

    #[test]
    fn test_build_request_splits_system_and_contents() {
        let model = ChatGemini::new().with_api_key("k").with_temperature(0.2);
        let messages = vec![
            Message::system("You are a developer."),
            Message::human("a red button"),
            Message::ai("<html></html>"),
        ];

        let request = model.build_request(&messages);

        let system = request.system_instruction.unwrap();
        assert_eq!(system.parts[0].text, "You are a developer.");
        assert_eq!(request.contents.len(), 2);
        assert_eq!(request.contents[0].role.as_deref(), Some("user"));
        assert_eq!(request.contents[0].parts[0].text, "a red button");
        assert_eq!(request.contents[1].role.as_deref(), Some("model"));

        let config = request.generation_config.unwrap();
        assert_eq!(config.temperature, Some(0.2));
    }

    #[test]
    fn test_build_request_without_system_or_temperature() {
        let model = ChatGemini::new().with_api_key("k");
        let request = model.build_request(&[Message::human("hi")]);
        assert!(request.system_instruction.is_none());
        assert!(request.generation_config.is_none());
    }

    #[test]
    fn test_request_serializes_camel_case() {
        let model = ChatGemini::new().with_api_key("k").with_temperature(0.5);
        let request = model.build_request(&[Message::system("s"), Message::human("h")]);
        let json = serde_json::to_value(&request).unwrap();

        assert!(json.get("systemInstruction").is_some());
        assert!(json.get("generationConfig").is_some());
        assert_eq!(json["contents"][0]["role"], "user");
        assert_eq!(json["contents"][0]["parts"][0]["text"], "h");
    }

    #[test]
    fn test_response_deserializes() {
        let body = r#"{
            "candidates": [
                {"content": {"role": "model", "parts": [{"text": "<html>"}, {"text": "</html>"}]}}
            ],
            "usageMetadata": {"promptTokenCount": 7, "candidatesTokenCount": 21}
        }"#;
        let parsed: GenerateContentResponse = serde_json::from_str(body).unwrap();
        assert_eq!(parsed.candidates.len(), 1);
        let usage = parsed.usage_metadata.unwrap();
        assert_eq!(usage.prompt_token_count, 7);
        assert_eq!(usage.candidates_token_count, 21);
    }

    #[test]
    fn test_parse_api_error() {
        let body = r#"{"error": {"code": 429, "message": "quota exhausted", "status": "RESOURCE_EXHAUSTED"}}"#;
        assert_eq!(parse_api_error(body).as_deref(), Some("quota exhausted"));
        assert!(parse_api_error("not json").is_none());
    }
}
