//! One-shot chat completions against the configured provider.
//!
//! The advisor never streams and never runs a tool loop; each operation is
//! a single prompt/response round trip through rig-core.

use async_trait::async_trait;
use reqwest::Client as HttpClient;
use rig::{
    client::{CompletionClient, Nothing},
    completion::Prompt,
    providers::{anthropic, ollama, openai},
};

use crate::error::AiError;

/// Provider selection and credentials for the advisor.
#[derive(Debug, Clone)]
pub struct AdvisorConfig {
    /// Provider id: `openai` (default), `anthropic` or `ollama`.
    pub provider_id: String,
    pub model: String,
    pub api_key: Option<String>,
    /// Base URL override for local providers.
    pub provider_url: Option<String>,
}

impl Default for AdvisorConfig {
    fn default() -> Self {
        Self {
            provider_id: "openai".to_string(),
            model: "gpt-4o".to_string(),
            api_key: None,
            provider_url: None,
        }
    }
}

/// Seam between the advisor and the model provider, so tests can script
/// replies without network access.
#[async_trait]
pub trait CompletionBackend: Send + Sync {
    async fn complete(&self, preamble: &str, prompt: &str) -> Result<String, AiError>;
}

/// rig-core backed implementation.
pub struct RigCompletionBackend {
    config: AdvisorConfig,
}

impl RigCompletionBackend {
    pub fn new(config: AdvisorConfig) -> Self {
        Self { config }
    }

    fn api_key(&self) -> Result<&str, AiError> {
        self.config
            .api_key
            .as_deref()
            .filter(|key| !key.is_empty())
            .ok_or_else(|| AiError::MissingApiKey(self.config.provider_id.clone()))
    }
}

#[async_trait]
impl CompletionBackend for RigCompletionBackend {
    async fn complete(&self, preamble: &str, prompt: &str) -> Result<String, AiError> {
        let model_id = &self.config.model;

        match self.config.provider_id.as_str() {
            "anthropic" => {
                let client: anthropic::Client<HttpClient> =
                    anthropic::Client::new(self.api_key()?)
                        .map_err(|e| AiError::Provider(e.to_string()))?;
                client
                    .agent(model_id)
                    .preamble(preamble)
                    .build()
                    .prompt(prompt)
                    .await
                    .map_err(|e| AiError::Provider(e.to_string()))
            }
            "ollama" => {
                let mut builder = ollama::Client::<HttpClient>::builder().api_key(Nothing);
                if let Some(url) = &self.config.provider_url {
                    builder = builder.base_url(url);
                }
                let client = builder
                    .build()
                    .map_err(|e| AiError::Provider(e.to_string()))?;
                client
                    .agent(model_id)
                    .preamble(preamble)
                    .build()
                    .prompt(prompt)
                    .await
                    .map_err(|e| AiError::Provider(e.to_string()))
            }
            _ => {
                // Default to OpenAI-compatible
                let client: openai::Client<HttpClient> = openai::Client::new(self.api_key()?)
                    .map_err(|e| AiError::Provider(e.to_string()))?;
                client
                    .agent(model_id)
                    .preamble(preamble)
                    .build()
                    .prompt(prompt)
                    .await
                    .map_err(|e| AiError::Provider(e.to_string()))
            }
        }
    }
}

/// Pull the JSON object out of a model reply, tolerating markdown fences
/// and prose around it.
pub fn extract_json(text: &str) -> &str {
    let trimmed = text.trim();

    if let Some(rest) = trimmed.strip_prefix("```json").or_else(|| trimmed.strip_prefix("```")) {
        if let Some(end) = rest.rfind("```") {
            return rest[..end].trim();
        }
        return rest.trim();
    }

    // Fall back to the outermost brace pair.
    if let (Some(start), Some(end)) = (trimmed.find('{'), trimmed.rfind('}')) {
        if start < end {
            return trimmed[start..=end].trim();
        }
    }
    trimmed
}

// ============================================================================
// Fake backend for testing
// ============================================================================

/// A scripted backend for tests: pops replies in order, errors when empty.
pub struct FakeCompletionBackend {
    replies: std::sync::Mutex<std::collections::VecDeque<Result<String, String>>>,
    pub prompts: std::sync::Mutex<Vec<String>>,
}

impl FakeCompletionBackend {
    pub fn with_replies(replies: Vec<Result<String, String>>) -> Self {
        Self {
            replies: std::sync::Mutex::new(replies.into_iter().collect()),
            prompts: std::sync::Mutex::new(Vec::new()),
        }
    }

    pub fn with_reply(reply: &str) -> Self {
        Self::with_replies(vec![Ok(reply.to_string())])
    }

    pub fn failing(message: &str) -> Self {
        Self::with_replies(vec![Err(message.to_string())])
    }
}

#[async_trait]
impl CompletionBackend for FakeCompletionBackend {
    async fn complete(&self, _preamble: &str, prompt: &str) -> Result<String, AiError> {
        self.prompts.lock().unwrap().push(prompt.to_string());
        match self.replies.lock().unwrap().pop_front() {
            Some(Ok(reply)) => Ok(reply),
            Some(Err(message)) => Err(AiError::Provider(message)),
            None => Err(AiError::Internal("no scripted reply left".to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn extract_json_passes_bare_objects_through() {
        assert_eq!(extract_json(r#"{"a": 1}"#), r#"{"a": 1}"#);
    }

    #[test]
    fn extract_json_strips_code_fences() {
        let fenced = "```json\n{\"a\": 1}\n```";
        assert_eq!(extract_json(fenced), "{\"a\": 1}");

        let bare_fence = "```\n{\"a\": 1}\n```";
        assert_eq!(extract_json(bare_fence), "{\"a\": 1}");
    }

    #[test]
    fn extract_json_skips_surrounding_prose() {
        let chatty = "Sure! Here you go:\n{\"a\": 1}\nLet me know if that helps.";
        assert_eq!(extract_json(chatty), "{\"a\": 1}");
    }

    #[test]
    fn missing_api_key_is_reported_before_any_call() {
        let backend = RigCompletionBackend::new(AdvisorConfig::default());
        assert!(matches!(backend.api_key(), Err(AiError::MissingApiKey(_))));
    }
}
