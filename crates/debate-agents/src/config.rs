//! Provider endpoint configuration.
//!
//! Credentials and endpoint settings are read once at process start
//! from the environment; they are not part of the loop's contract.

use std::sync::Arc;

use crate::generation::{ChatCompletionsClient, TextGeneration};

/// Default sampling temperature, matching the original application.
pub const DEFAULT_TEMPERATURE: f64 = 0.7;

/// Settings for the OpenAI-compatible text-generation endpoint.
#[derive(Debug, Clone)]
pub struct ProviderConfig {
    /// Base URL up to (not including) `/chat/completions`.
    pub base_url: String,
    /// Bearer token. May be empty for local, keyless endpoints.
    pub api_key: String,
    /// Model name sent with every request.
    pub model: String,
    /// Sampling temperature.
    pub temperature: f64,
}

impl Default for ProviderConfig {
    fn default() -> Self {
        Self {
            base_url: std::env::var("DEBATE_BASE_URL")
                .unwrap_or_else(|_| "https://api.openai.com/v1".into()),
            api_key: std::env::var("DEBATE_API_KEY")
                .or_else(|_| std::env::var("OPENAI_API_KEY"))
                .unwrap_or_default(),
            model: std::env::var("DEBATE_MODEL").unwrap_or_else(|_| "gpt-4".into()),
            temperature: DEFAULT_TEMPERATURE,
        }
    }
}

/// Build one generation client per agent.
///
/// Agents get independent clients (sharing one HTTP connection pool)
/// so no model-side state is ever shared between them.
pub fn build_generators(
    config: &ProviderConfig,
    agent_count: usize,
) -> Vec<Arc<dyn TextGeneration>> {
    let http = reqwest::Client::new();
    (0..agent_count)
        .map(|_| {
            Arc::new(ChatCompletionsClient::new(
                http.clone(),
                &config.base_url,
                &config.api_key,
                &config.model,
                config.temperature,
            )) as Arc<dyn TextGeneration>
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_build_generators_one_per_agent() {
        let config = ProviderConfig {
            base_url: "http://localhost:8080/v1".into(),
            api_key: String::new(),
            model: "test-model".into(),
            temperature: DEFAULT_TEMPERATURE,
        };
        assert_eq!(build_generators(&config, 3).len(), 3);
        assert!(build_generators(&config, 0).is_empty());
    }
}
