//! AI provider configuration

use serde::Deserialize;

/// AI provider configuration
#[derive(Debug, Clone, Deserialize)]
pub struct AiConfig {
    /// API key for the completion API.
    ///
    /// Not checked at load time on purpose: a missing key surfaces as a
    /// request failure, which the feature handlers turn into fallbacks.
    pub api_key: Option<String>,

    /// Model identifier
    #[serde(default = "default_model")]
    pub model: String,

    /// Base URL for the completion API
    #[serde(default = "default_base_url")]
    pub base_url: String,
}

impl AiConfig {
    /// Check if an API key is present and non-empty
    pub fn has_api_key(&self) -> bool {
        self.api_key.as_ref().is_some_and(|k| !k.is_empty())
    }
}

impl Default for AiConfig {
    fn default() -> Self {
        Self {
            api_key: None,
            model: default_model(),
            base_url: default_base_url(),
        }
    }
}

fn default_model() -> String {
    "gpt-4".to_string()
}

fn default_base_url() -> String {
    "https://api.openai.com/v1".to_string()
}
