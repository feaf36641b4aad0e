//! Text-generation provider seam.
//!
//! The loop engine only sees the [`TextGeneration`] trait; tests can
//! provide a mock implementation. The real implementation speaks the
//! OpenAI-compatible chat-completions protocol and deliberately hands
//! back the rawest message-shaped JSON value it can find — shape
//! policy belongs to `debate_core::extract`, not to the transport.

use async_trait::async_trait;
#[cfg(test)]
use mockall::automock;
use serde_json::{json, Value};
use thiserror::Error;

/// How much of an error response body to keep in the error message.
const ERROR_BODY_EXCERPT: usize = 300;

/// Faults reported by a provider call.
#[derive(Debug, Error)]
pub enum GenerationError {
    /// Connection, timeout, or body-decode failure from the HTTP layer.
    #[error("request failed: {0}")]
    Transport(#[from] reqwest::Error),
    /// The provider answered with a non-success status.
    #[error("provider returned HTTP {status}: {body}")]
    Status { status: u16, body: String },
    /// The success response body was not valid JSON.
    #[error("malformed provider payload: {0}")]
    MalformedPayload(String),
}

/// The external text-generation capability: prompt string in, raw
/// message-shaped JSON value out.
#[cfg_attr(test, automock)]
#[async_trait]
pub trait TextGeneration: Send + Sync {
    async fn generate(&self, prompt: &str) -> Result<Value, GenerationError>;
}

/// OpenAI-compatible chat-completions client for a single agent.
///
/// Each agent holds its own client instance, so agents never share
/// model-side conversational context — the textual transcript in the
/// prompt is the only coupling between them.
pub struct ChatCompletionsClient {
    http: reqwest::Client,
    base_url: String,
    api_key: String,
    model: String,
    temperature: f64,
}

impl ChatCompletionsClient {
    pub fn new(
        http: reqwest::Client,
        base_url: impl Into<String>,
        api_key: impl Into<String>,
        model: impl Into<String>,
        temperature: f64,
    ) -> Self {
        Self {
            http,
            base_url: base_url.into(),
            api_key: api_key.into(),
            model: model.into(),
            temperature,
        }
    }
}

#[async_trait]
impl TextGeneration for ChatCompletionsClient {
    async fn generate(&self, prompt: &str) -> Result<Value, GenerationError> {
        let url = format!(
            "{}/chat/completions",
            self.base_url.trim_end_matches('/')
        );
        let response = self
            .http
            .post(&url)
            .bearer_auth(&self.api_key)
            .json(&json!({
                "model": self.model,
                "messages": [{"role": "user", "content": prompt}],
                "temperature": self.temperature,
            }))
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let body = error_excerpt(response.text().await.unwrap_or_default());
            return Err(GenerationError::Status {
                status: status.as_u16(),
                body,
            });
        }

        let text = response.text().await?;
        let body: Value = serde_json::from_str(&text)
            .map_err(|e| GenerationError::MalformedPayload(e.to_string()))?;
        Ok(message_value(body))
    }
}

/// Trim an error body to the excerpt length without splitting a
/// UTF-8 character. Error bodies are free-form provider text and may
/// be multibyte anywhere, including at the cut point.
fn error_excerpt(mut body: String) -> String {
    let mut cut = ERROR_BODY_EXCERPT.min(body.len());
    while !body.is_char_boundary(cut) {
        cut -= 1;
    }
    body.truncate(cut);
    body
}

/// Pluck the most message-shaped value out of a completion payload.
///
/// Providers disagree about where the assistant message lives:
/// `choices[0].message` (chat endpoints), `choices[0].text` (legacy
/// completions), or something else entirely. Whatever comes out here
/// still goes through `extract_content`, so an unexpected layout
/// degrades to the per-turn placeholder rather than an error.
fn message_value(mut body: Value) -> Value {
    let Some(choices) = body.get_mut("choices") else {
        return body;
    };
    let Some(first) = choices.get_mut(0) else {
        return choices.take();
    };
    if let Some(message) = first.get_mut("message") {
        return message.take();
    }
    if let Some(text) = first.get("text").and_then(Value::as_str) {
        return Value::String(text.to_string());
    }
    choices.take()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_excerpt_respects_char_boundaries() {
        // 1-byte 'a' followed by 150 3-byte '€' puts byte index 300
        // inside a character.
        let body: String = std::iter::once('a')
            .chain(std::iter::repeat('€').take(150))
            .collect();
        assert!(!body.is_char_boundary(ERROR_BODY_EXCERPT));

        let excerpt = error_excerpt(body);
        assert!(excerpt.len() <= ERROR_BODY_EXCERPT);
        assert!(excerpt.ends_with('€'));
    }

    #[test]
    fn test_error_excerpt_leaves_short_bodies_alone() {
        assert_eq!(error_excerpt("bad gateway".into()), "bad gateway");
    }

    #[test]
    fn test_error_excerpt_cuts_ascii_exactly() {
        let excerpt = error_excerpt("x".repeat(400));
        assert_eq!(excerpt.len(), ERROR_BODY_EXCERPT);
    }

    #[test]
    fn test_generation_error_display() {
        let err = GenerationError::Status {
            status: 503,
            body: "unavailable".into(),
        };
        assert!(err.to_string().contains("503"));
        assert!(err.to_string().contains("unavailable"));

        let err = GenerationError::MalformedPayload("expected value at line 1".into());
        assert!(err.to_string().contains("malformed provider payload"));
    }

    #[test]
    fn test_message_value_chat_shape() {
        let body = json!({
            "choices": [{"message": {"role": "assistant", "content": "hello"}}]
        });
        let value = message_value(body);
        assert_eq!(value["content"], "hello");
    }

    #[test]
    fn test_message_value_legacy_text_shape() {
        let body = json!({"choices": [{"text": "hello"}]});
        assert_eq!(message_value(body), json!("hello"));
    }

    #[test]
    fn test_message_value_empty_choices_passes_array_through() {
        let body = json!({"choices": []});
        assert_eq!(message_value(body), json!([]));
    }

    #[test]
    fn test_message_value_no_choices_passes_body_through() {
        let body = json!({"content": "direct"});
        assert_eq!(message_value(body), json!({"content": "direct"}));
    }

    #[test]
    fn test_message_value_unrecognized_choice_passes_choices_through() {
        let body = json!({"choices": [{"finish_reason": "stop"}]});
        assert_eq!(message_value(body), json!([{"finish_reason": "stop"}]));
    }
}
