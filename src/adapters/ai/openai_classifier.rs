//! OpenAI Classifier - Classifier implementation over the chat completions API.
//!
//! Sends the rendered prompt as a single user message and unwraps the
//! chat-completions envelope down to the reply content string. The content
//! itself stays untrusted text; interpreting it is the domain's job.
//!
//! # Configuration
//!
//! ```ignore
//! let config = OpenAiClassifierConfig::new(api_key)
//!     .with_model("gpt-3.5-turbo")
//!     .with_timeout(Duration::from_secs(30));
//!
//! let classifier = OpenAiClassifier::new(config);
//! ```

use async_trait::async_trait;
use reqwest::{Client, Response};
use secrecy::{ExposeSecret, Secret};
use serde::{Deserialize, Serialize};
use std::time::Duration;

use crate::domain::triage::ClassificationRequest;
use crate::ports::{Classifier, ClassifierError};

/// Configuration for the OpenAI classifier.
#[derive(Debug, Clone)]
pub struct OpenAiClassifierConfig {
    /// API key for authentication.
    api_key: Secret<String>,
    /// Model to use.
    pub model: String,
    /// Base URL for the API (default: https://api.openai.com/v1).
    pub base_url: String,
    /// Request timeout.
    pub timeout: Duration,
    /// Sampling temperature. Low by default: classification wants
    /// stable, structured output rather than variety.
    pub temperature: f32,
    /// Maximum tokens in the reply.
    pub max_tokens: u32,
}

impl OpenAiClassifierConfig {
    /// Creates a new configuration with the given API key.
    pub fn new(api_key: impl Into<String>) -> Self {
        Self {
            api_key: Secret::new(api_key.into()),
            model: "gpt-3.5-turbo".to_string(),
            base_url: "https://api.openai.com/v1".to_string(),
            timeout: Duration::from_secs(30),
            temperature: 0.2,
            max_tokens: 200,
        }
    }

    /// Sets the model to use.
    pub fn with_model(mut self, model: impl Into<String>) -> Self {
        self.model = model.into();
        self
    }

    /// Sets the base URL.
    pub fn with_base_url(mut self, url: impl Into<String>) -> Self {
        self.base_url = url.into();
        self
    }

    /// Sets the request timeout.
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Exposes the API key (for making requests).
    fn api_key(&self) -> &str {
        self.api_key.expose_secret()
    }
}

/// Classifier backed by an OpenAI-compatible chat completions endpoint.
pub struct OpenAiClassifier {
    config: OpenAiClassifierConfig,
    client: Client,
}

impl OpenAiClassifier {
    /// Creates a new classifier with the given configuration.
    pub fn new(config: OpenAiClassifierConfig) -> Result<Self, ClassifierError> {
        let client = Client::builder()
            .timeout(config.timeout)
            .build()
            .map_err(|e| ClassifierError::network(e.to_string()))?;

        Ok(Self { config, client })
    }

    /// Builds the chat completions endpoint URL.
    fn completions_url(&self) -> String {
        format!("{}/chat/completions", self.config.base_url)
    }

    fn to_wire_request(&self, request: &ClassificationRequest) -> WireRequest {
        WireRequest {
            model: self.config.model.clone(),
            messages: vec![WireMessage {
                role: "user".to_string(),
                content: request.prompt.clone(),
            }],
            temperature: self.config.temperature,
            max_tokens: self.config.max_tokens,
        }
    }

    /// Maps an error response status to a `ClassifierError`.
    async fn handle_response_status(&self, response: Response) -> Result<Response, ClassifierError> {
        let status = response.status();

        if status.is_success() {
            return Ok(response);
        }

        let error_body = response.text().await.unwrap_or_default();

        match status.as_u16() {
            401 => Err(ClassifierError::AuthenticationFailed),
            500..=599 => Err(ClassifierError::unavailable(format!(
                "server error {}: {}",
                status, error_body
            ))),
            _ => Err(ClassifierError::network(format!(
                "unexpected status {}: {}",
                status, error_body
            ))),
        }
    }
}

#[async_trait]
impl Classifier for OpenAiClassifier {
    async fn classify(&self, request: &ClassificationRequest) -> Result<String, ClassifierError> {
        let wire_request = self.to_wire_request(request);

        let response = self
            .client
            .post(self.completions_url())
            .header("Authorization", format!("Bearer {}", self.config.api_key()))
            .header("Content-Type", "application/json")
            .json(&wire_request)
            .send()
            .await
            .map_err(|e| {
                if e.is_timeout() {
                    ClassifierError::Timeout {
                        timeout_secs: self.config.timeout.as_secs() as u32,
                    }
                } else if e.is_connect() {
                    ClassifierError::network(format!("connection failed: {}", e))
                } else {
                    ClassifierError::network(e.to_string())
                }
            })?;

        let response = self.handle_response_status(response).await?;

        let envelope: WireResponse = response
            .json()
            .await
            .map_err(|e| ClassifierError::invalid_reply(e.to_string()))?;

        let content = envelope
            .choices
            .into_iter()
            .next()
            .map(|choice| choice.message.content)
            .ok_or_else(|| ClassifierError::invalid_reply("reply contained no choices"))?;

        tracing::debug!(chars = content.len(), "classifier replied");
        Ok(content)
    }
}

#[derive(Debug, Serialize)]
struct WireRequest {
    model: String,
    messages: Vec<WireMessage>,
    temperature: f32,
    max_tokens: u32,
}

#[derive(Debug, Serialize)]
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
    message: WireReplyMessage,
}

#[derive(Debug, Deserialize)]
struct WireReplyMessage {
    content: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn config_defaults_match_classifier_tuning() {
        let config = OpenAiClassifierConfig::new("sk-test");
        assert_eq!(config.model, "gpt-3.5-turbo");
        assert_eq!(config.temperature, 0.2);
        assert_eq!(config.max_tokens, 200);
        assert_eq!(config.timeout, Duration::from_secs(30));
    }

    #[test]
    fn config_builder_overrides() {
        let config = OpenAiClassifierConfig::new("sk-test")
            .with_model("gpt-4-turbo")
            .with_base_url("http://localhost:8089/v1")
            .with_timeout(Duration::from_secs(5));

        assert_eq!(config.model, "gpt-4-turbo");
        assert_eq!(config.base_url, "http://localhost:8089/v1");
        assert_eq!(config.timeout, Duration::from_secs(5));
    }

    #[test]
    fn completions_url_appends_path() {
        let classifier =
            OpenAiClassifier::new(OpenAiClassifierConfig::new("sk-test")).unwrap();
        assert_eq!(
            classifier.completions_url(),
            "https://api.openai.com/v1/chat/completions"
        );
    }

    #[test]
    fn wire_request_wraps_prompt_as_user_message() {
        let classifier =
            OpenAiClassifier::new(OpenAiClassifierConfig::new("sk-test")).unwrap();
        let request = ClassificationRequest {
            prompt: "User: my head hurts".to_string(),
        };

        let wire = classifier.to_wire_request(&request);
        assert_eq!(wire.messages.len(), 1);
        assert_eq!(wire.messages[0].role, "user");
        assert_eq!(wire.messages[0].content, "User: my head hurts");
    }

    #[test]
    fn wire_response_decodes_envelope() {
        let json = r#"{"choices":[{"message":{"role":"assistant","content":"{\"message\":\"hi\"}"}}]}"#;
        let envelope: WireResponse = serde_json::from_str(json).unwrap();
        assert_eq!(envelope.choices[0].message.content, "{\"message\":\"hi\"}");
    }
}
