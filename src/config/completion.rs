//! Completion API configuration
//!
//! Sampling parameters live here rather than at the call site so they can
//! be varied without code changes. Defaults match the production values:
//! `llama3-70b-8192`, temperature 0.2, 100 output tokens, top_p 1.0.

use serde::Deserialize;
use std::time::Duration;

use super::error::ValidationError;

/// Completion provider configuration (model and sampling parameters)
#[derive(Debug, Clone, Deserialize)]
pub struct CompletionConfig {
    /// Model identifier sent with every request
    #[serde(default = "default_model")]
    pub model: String,

    /// Sampling temperature
    #[serde(default = "default_temperature")]
    pub temperature: f32,

    /// Maximum tokens to generate per completion
    #[serde(default = "default_max_output_tokens")]
    pub max_output_tokens: u32,

    /// Nucleus sampling mass
    #[serde(default = "default_top_p")]
    pub top_p: f32,

    /// Base URL of the OpenAI-compatible API
    #[serde(default = "default_base_url")]
    pub base_url: String,

    /// Request timeout in seconds
    #[serde(default = "default_timeout")]
    pub timeout_secs: u64,
}

impl CompletionConfig {
    /// Get timeout as Duration
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }

    /// Validate completion configuration
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.model.is_empty() {
            return Err(ValidationError::MissingRequired("COMPLETION__MODEL"));
        }
        if !(0.0..=2.0).contains(&self.temperature) {
            return Err(ValidationError::InvalidTemperature);
        }
        if !(self.top_p > 0.0 && self.top_p <= 1.0) {
            return Err(ValidationError::InvalidTopP);
        }
        if self.max_output_tokens == 0 {
            return Err(ValidationError::InvalidMaxTokens);
        }
        if !self.base_url.starts_with("http") {
            return Err(ValidationError::InvalidBaseUrl);
        }
        Ok(())
    }
}

impl Default for CompletionConfig {
    fn default() -> Self {
        Self {
            model: default_model(),
            temperature: default_temperature(),
            max_output_tokens: default_max_output_tokens(),
            top_p: default_top_p(),
            base_url: default_base_url(),
            timeout_secs: default_timeout(),
        }
    }
}

fn default_model() -> String {
    "llama3-70b-8192".to_string()
}

fn default_temperature() -> f32 {
    0.2
}

fn default_max_output_tokens() -> u32 {
    100
}

fn default_top_p() -> f32 {
    1.0
}

fn default_base_url() -> String {
    "https://api.groq.com/openai/v1".to_string()
}

fn default_timeout() -> u64 {
    60
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_completion_config_defaults() {
        let config = CompletionConfig::default();
        assert_eq!(config.model, "llama3-70b-8192");
        assert_eq!(config.temperature, 0.2);
        assert_eq!(config.max_output_tokens, 100);
        assert_eq!(config.top_p, 1.0);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_timeout_duration() {
        let config = CompletionConfig {
            timeout_secs: 30,
            ..Default::default()
        };
        assert_eq!(config.timeout(), Duration::from_secs(30));
    }

    #[test]
    fn test_validation_rejects_bad_temperature() {
        let config = CompletionConfig {
            temperature: 3.0,
            ..Default::default()
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_validation_rejects_bad_top_p() {
        let config = CompletionConfig {
            top_p: 0.0,
            ..Default::default()
        };
        assert!(config.validate().is_err());

        let config = CompletionConfig {
            top_p: 1.5,
            ..Default::default()
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_validation_rejects_zero_max_tokens() {
        let config = CompletionConfig {
            max_output_tokens: 0,
            ..Default::default()
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_validation_rejects_bad_base_url() {
        let config = CompletionConfig {
            base_url: "ftp://example.com".to_string(),
            ..Default::default()
        };
        assert!(config.validate().is_err());
    }
}
