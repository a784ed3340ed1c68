//! Groq Provider - Implementation of CompletionProvider for Groq's
//! OpenAI-compatible API.
//!
//! Sends non-streaming chat completions with the sampling parameters fixed
//! by [`CompletionConfig`]. Requests are single-shot: a failure propagates
//! immediately with no retry, so a multi-call operation that fails midway
//! loses its earlier results.
//!
//! # Configuration
//!
//! ```ignore
//! let provider = GroqProvider::new(api_key, CompletionConfig::default());
//! ```

use async_trait::async_trait;
use reqwest::{Client, Response};
use secrecy::{ExposeSecret, Secret};
use serde::{Deserialize, Serialize};

use crate::config::CompletionConfig;
use crate::ports::{CompletionError, CompletionProvider, CompletionRequest, MessageRole};

/// Groq API provider implementation.
pub struct GroqProvider {
    api_key: Secret<String>,
    config: CompletionConfig,
    client: Client,
}

impl GroqProvider {
    /// Creates a new provider with the given API key and sampling config.
    pub fn new(api_key: impl Into<String>, config: CompletionConfig) -> Self {
        let client = Client::builder()
            .timeout(config.timeout())
            .build()
            .expect("Failed to create HTTP client");

        Self {
            api_key: Secret::new(api_key.into()),
            config,
            client,
        }
    }

    /// Builds the chat completions endpoint URL.
    fn completions_url(&self) -> String {
        format!("{}/chat/completions", self.config.base_url)
    }

    /// Converts our request to the OpenAI-compatible wire format.
    fn to_wire_request(&self, request: &CompletionRequest) -> WireRequest {
        let messages = request
            .messages
            .iter()
            .map(|msg| WireMessage {
                role: match msg.role {
                    MessageRole::System => "system",
                    MessageRole::User => "user",
                    MessageRole::Assistant => "assistant",
                }
                .to_string(),
                content: msg.content.clone(),
            })
            .collect();

        WireRequest {
            model: self.config.model.clone(),
            messages,
            temperature: self.config.temperature,
            max_tokens: self.config.max_output_tokens,
            top_p: self.config.top_p,
            stream: false,
        }
    }

    /// Sends a request and maps transport failures.
    async fn send_request(&self, request: &CompletionRequest) -> Result<Response, CompletionError> {
        let wire_request = self.to_wire_request(request);

        self.client
            .post(self.completions_url())
            .header(
                "Authorization",
                format!("Bearer {}", self.api_key.expose_secret()),
            )
            .header("Content-Type", "application/json")
            .json(&wire_request)
            .send()
            .await
            .map_err(|e| {
                if e.is_timeout() {
                    CompletionError::network(format!(
                        "request timed out after {}s",
                        self.config.timeout_secs
                    ))
                } else if e.is_connect() {
                    CompletionError::network(format!("Connection failed: {}", e))
                } else {
                    CompletionError::network(e.to_string())
                }
            })
    }

    /// Parses the API response status and handles errors.
    async fn handle_response_status(
        &self,
        response: Response,
    ) -> Result<Response, CompletionError> {
        let status = response.status();

        if status.is_success() {
            return Ok(response);
        }

        let error_body = response.text().await.unwrap_or_default();

        match status.as_u16() {
            401 => Err(CompletionError::AuthenticationFailed),
            429 => Err(CompletionError::RateLimited(error_body)),
            400..=499 => Err(CompletionError::InvalidRequest(error_body)),
            _ => Err(CompletionError::unavailable(format!(
                "Server error {}: {}",
                status, error_body
            ))),
        }
    }

    /// Extracts the generated text from a successful response.
    async fn parse_response(&self, response: Response) -> Result<String, CompletionError> {
        let response = self.handle_response_status(response).await?;

        let wire_response: WireResponse = response
            .json()
            .await
            .map_err(|e| CompletionError::parse(format!("Failed to parse response: {}", e)))?;

        let choice = wire_response
            .choices
            .into_iter()
            .next()
            .ok_or_else(|| CompletionError::parse("No choices in response"))?;

        Ok(choice.message.content)
    }
}

#[async_trait]
impl CompletionProvider for GroqProvider {
    async fn complete(&self, request: CompletionRequest) -> Result<String, CompletionError> {
        let response = self.send_request(&request).await?;
        self.parse_response(response).await
    }
}

// ----- OpenAI-compatible wire types -----

#[derive(Debug, Serialize)]
struct WireRequest {
    model: String,
    messages: Vec<WireMessage>,
    temperature: f32,
    max_tokens: u32,
    top_p: f32,
    stream: bool,
}

#[derive(Debug, Serialize, Deserialize)]
struct WireMessage {
    role: String,
    content: String,
}

#[derive(Debug, Deserialize)]
struct WireResponse {
    choices: Vec<WireChoice>,
}

#[derive(Debug, Deserialize)]
struct WireChoice {
    message: WireMessage,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ports::Message;

    fn provider() -> GroqProvider {
        GroqProvider::new("gsk_test", CompletionConfig::default())
    }

    #[test]
    fn completions_url_appends_endpoint() {
        assert_eq!(
            provider().completions_url(),
            "https://api.groq.com/openai/v1/chat/completions"
        );
    }

    #[test]
    fn wire_request_carries_fixed_sampling_parameters() {
        let request = CompletionRequest {
            messages: vec![Message::system("Be helpful"), Message::user("Hello")],
        };

        let wire = provider().to_wire_request(&request);
        assert_eq!(wire.model, "llama3-70b-8192");
        assert_eq!(wire.temperature, 0.2);
        assert_eq!(wire.max_tokens, 100);
        assert_eq!(wire.top_p, 1.0);
        assert!(!wire.stream);
        assert_eq!(wire.messages.len(), 2);
        assert_eq!(wire.messages[0].role, "system");
        assert_eq!(wire.messages[1].role, "user");
    }

    #[test]
    fn wire_request_serializes_expected_shape() {
        let request = CompletionRequest {
            messages: vec![Message::user("hi")],
        };
        let wire = provider().to_wire_request(&request);

        let json = serde_json::to_value(&wire).unwrap();
        assert_eq!(json["model"], "llama3-70b-8192");
        assert_eq!(json["stream"], false);
        assert_eq!(json["messages"][0]["role"], "user");
        assert_eq!(json["messages"][0]["content"], "hi");
    }

    #[test]
    fn wire_response_parses_first_choice() {
        let body = r#"{
            "choices": [
                {"message": {"role": "assistant", "content": "Hello there"}}
            ]
        }"#;
        let parsed: WireResponse = serde_json::from_str(body).unwrap();
        assert_eq!(parsed.choices[0].message.content, "Hello there");
    }
}
