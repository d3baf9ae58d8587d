//! Async client for the interpretation service
//!
//! Model-agnostic HTTP client supporting both Anthropic and
//! OpenAI-compatible APIs. The service is asked for a single JSON object
//! matching `CastInterpretation`; anything it wraps around that object is
//! stripped before parsing. The engines stay correct without it - a failed
//! call loses commentary, never the cast.

use crate::core::error::{OracleError, Result};
use crate::reading::types::{CastInterpretation, CastReadingRequest};
use reqwest::Client;
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};

const MAX_TOKENS: u32 = 4096;

/// API format type
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ApiFormat {
    Anthropic,
    OpenAI,
}

impl ApiFormat {
    /// Anthropic hosts its own endpoint; everything else speaks the
    /// OpenAI-compatible chat format.
    fn from_url(url: &str) -> Self {
        if url.contains("anthropic.com") {
            ApiFormat::Anthropic
        } else {
            ApiFormat::OpenAI
        }
    }
}

/// Async client for interpretation requests
pub struct ReadingClient {
    client: Client,
    api_key: String,
    api_url: String,
    model: String,
    api_format: ApiFormat,
}

impl ReadingClient {
    /// Create a client with explicit configuration
    pub fn new(api_key: String, api_url: String, model: String) -> Self {
        let api_format = ApiFormat::from_url(&api_url);
        Self {
            client: Client::new(),
            api_key,
            api_url,
            model,
            api_format,
        }
    }

    /// Create a client from environment variables
    ///
    /// Required: READING_API_KEY
    /// Optional: READING_API_URL (defaults to Anthropic API)
    /// Optional: READING_MODEL (defaults to claude-3-haiku-20240307)
    pub fn from_env() -> Result<Self> {
        let api_key = std::env::var("READING_API_KEY")
            .map_err(|_| OracleError::Reading("READING_API_KEY not set".into()))?;
        let api_url = std::env::var("READING_API_URL")
            .unwrap_or_else(|_| "https://api.anthropic.com/v1/messages".into());
        let model =
            std::env::var("READING_MODEL").unwrap_or_else(|_| "claude-3-haiku-20240307".into());

        Ok(Self::new(api_key, api_url, model))
    }

    /// Ask the service to interpret a finished cast.
    pub async fn interpret_cast(&self, request: &CastReadingRequest) -> Result<CastInterpretation> {
        let user_prompt = format!(
            "CAST:\n{}\n\nProduce the interpretation as JSON:",
            serde_json::to_string_pretty(request)?
        );

        let response = match self.api_format {
            ApiFormat::Anthropic => self.complete_anthropic(&user_prompt).await?,
            ApiFormat::OpenAI => self.complete_openai(&user_prompt).await?,
        };
        let json_str = extract_json(&response)?;

        serde_json::from_str(json_str).map_err(|e| {
            OracleError::Reading(format!(
                "Failed to parse interpretation: {} - Response: {}",
                e, response
            ))
        })
    }

    async fn complete_anthropic(&self, user: &str) -> Result<String> {
        let body = AnthropicRequest {
            model: &self.model,
            max_tokens: MAX_TOKENS,
            system: INTERPRET_SYSTEM_PROMPT,
            messages: vec![Message { role: "user", content: user }],
        };
        let request = self
            .client
            .post(&self.api_url)
            .header("x-api-key", &self.api_key)
            .header("anthropic-version", "2023-06-01")
            .json(&body);

        let reply: AnthropicResponse = self.send(request).await?;
        reply
            .content
            .into_iter()
            .next()
            .map(|block| block.text)
            .ok_or_else(|| OracleError::Reading("Empty response".into()))
    }

    async fn complete_openai(&self, user: &str) -> Result<String> {
        let body = OpenAIRequest {
            model: &self.model,
            max_tokens: MAX_TOKENS,
            messages: vec![
                Message { role: "system", content: INTERPRET_SYSTEM_PROMPT },
                Message { role: "user", content: user },
            ],
        };
        let request = self
            .client
            .post(&self.api_url)
            .header("Authorization", format!("Bearer {}", self.api_key))
            .json(&body);

        let reply: OpenAIResponse = self.send(request).await?;
        reply
            .choices
            .into_iter()
            .next()
            .map(|choice| choice.message.content)
            .ok_or_else(|| OracleError::Reading("Empty response".into()))
    }

    /// POST the prepared request and decode the service's JSON reply,
    /// mapping transport and HTTP failures into the reading error.
    async fn send<T: DeserializeOwned>(&self, request: reqwest::RequestBuilder) -> Result<T> {
        let response = request
            .header("content-type", "application/json")
            .send()
            .await
            .map_err(|e| OracleError::Reading(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(OracleError::Reading(format!(
                "API error ({}): {}",
                status, body
            )));
        }

        response
            .json()
            .await
            .map_err(|e| OracleError::Reading(e.to_string()))
    }
}

/// Extract the JSON object from a service response (handles surrounding text)
fn extract_json(response: &str) -> Result<&str> {
    let start = response
        .find('{')
        .ok_or_else(|| OracleError::Reading("No JSON found in response".into()))?;
    let end = response
        .rfind('}')
        .ok_or_else(|| OracleError::Reading("No closing brace found in response".into()))?;
    Ok(&response[start..=end])
}

/// System prompt for cast interpretation
const INTERPRET_SYSTEM_PROMPT: &str = r#"You are interpreting an I-Ching cast for a seeker.
You receive the cast identities and the seeker's question as JSON, with a
"language" field naming the language to answer in.

Respond with ONLY one JSON object, no other text, with these fields:
- "overall": the reading as it bears on the question
- "judgment_commentary": commentary on the primary hexagram's judgment
- "image_commentary": commentary on the primary hexagram's image
- "changing_line_commentaries": an array with one
  {"line_number": <1-based number>, "commentary": "..."} entry per entry in
  the request's "changing_lines" (empty array if there are none)
- "transformed_commentary": commentary on the transformed hexagram, only
  when the request names one; otherwise omit the field"#;

// Anthropic API format
#[derive(Serialize)]
struct AnthropicRequest<'a> {
    model: &'a str,
    max_tokens: u32,
    system: &'a str,
    messages: Vec<Message<'a>>,
}

#[derive(Deserialize)]
struct AnthropicResponse {
    content: Vec<ContentBlock>,
}

#[derive(Deserialize)]
struct ContentBlock {
    text: String,
}

// OpenAI-compatible API format
#[derive(Serialize)]
struct OpenAIRequest<'a> {
    model: &'a str,
    max_tokens: u32,
    messages: Vec<Message<'a>>,
}

#[derive(Deserialize)]
struct OpenAIResponse {
    choices: Vec<Choice>,
}

#[derive(Deserialize)]
struct Choice {
    message: ChoiceMessage,
}

#[derive(Deserialize)]
struct ChoiceMessage {
    content: String,
}

// Shared
#[derive(Serialize)]
struct Message<'a> {
    role: &'a str,
    content: &'a str,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_client_creation() {
        let client = ReadingClient::new(
            "test-key".into(),
            "https://reading.example.net/v1/chat/completions".into(),
            "test-model".into(),
        );
        assert_eq!(client.api_key, "test-key");
        assert_eq!(client.model, "test-model");
        assert_eq!(client.api_format, ApiFormat::OpenAI);
    }

    #[test]
    fn test_detects_anthropic_format() {
        assert_eq!(
            ApiFormat::from_url("https://api.anthropic.com/v1/messages"),
            ApiFormat::Anthropic
        );
        assert_eq!(
            ApiFormat::from_url("https://api.deepseek.com/chat/completions"),
            ApiFormat::OpenAI
        );
    }

    #[test]
    fn test_extract_json_strips_surrounding_text() {
        let wrapped = "Here is the reading:\n```json\n{\"overall\": \"ok\"}\n```\nDone.";
        assert_eq!(extract_json(wrapped).unwrap(), "{\"overall\": \"ok\"}");
    }

    #[test]
    fn test_extract_json_rejects_plain_text() {
        assert!(extract_json("no json here").is_err());
    }
}
