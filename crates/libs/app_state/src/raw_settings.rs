use crate::DEFAULT_AUTO_APPLY_CONFIDENCE;
use serde::Deserialize;

#[derive(Debug, Deserialize, Clone)]
pub struct RawSettings {
    pub logging: LoggingSettings,
    pub classifier: RawClassifierSettings,
    #[serde(default)]
    pub secrets: SecretSettings,
}

/// Logging configuration.
#[derive(Debug, Deserialize, Clone)]
pub struct LoggingSettings {
    /// Default `EnvFilter` directive when `RUST_LOG` is not set.
    pub level: String,
}

/// Remote vision-model classification.
#[derive(Debug, Deserialize, Clone)]
pub struct RawClassifierSettings {
    /// When false every classification goes straight to the local heuristics.
    pub enabled: bool,
    /// Base url of an OpenAI-compatible chat completions server.
    pub base_url: String,
    pub model: String,
    pub temperature: f32,
    pub max_tokens: u32,
    /// Request timeout in seconds, 0 disables it.
    pub timeout_secs: u64,
    /// Local predictions at or below this confidence are shown but not auto-applied.
    #[serde(default = "default_auto_apply_confidence")]
    pub auto_apply_confidence: f32,
}

const fn default_auto_apply_confidence() -> f32 {
    DEFAULT_AUTO_APPLY_CONFIDENCE
}

#[derive(Debug, Deserialize, Clone, Default)]
pub struct SecretSettings {
    #[serde(default)]
    pub api_key: String,
}
