use crate::{LoggingSettings, RawSettings};
use std::time::Duration;

/// Confidence a local category guess must exceed before it is pre-selected.
pub const DEFAULT_AUTO_APPLY_CONFIDENCE: f32 = 0.6;

#[derive(Debug, Clone)]
pub struct AppSettings {
    pub logging: LoggingSettings,
    pub classifier: ClassifierSettings,
}

#[derive(Debug, Clone)]
pub struct ClassifierSettings {
    pub enabled: bool,
    pub base_url: String,
    pub model: String,
    pub api_key: Option<String>,
    pub temperature: f32,
    pub max_tokens: u32,
    pub timeout: Option<Duration>,
    pub auto_apply_confidence: f32,
}

impl From<RawSettings> for AppSettings {
    fn from(raw: RawSettings) -> Self {
        let classifier = raw.classifier;
        let api_key = Some(raw.secrets.api_key).filter(|key| !key.trim().is_empty());
        let timeout = (classifier.timeout_secs > 0)
            .then(|| Duration::from_secs(classifier.timeout_secs));

        Self {
            logging: raw.logging,
            classifier: ClassifierSettings {
                enabled: classifier.enabled,
                base_url: classifier.base_url,
                model: classifier.model,
                api_key,
                temperature: classifier.temperature,
                max_tokens: classifier.max_tokens,
                timeout,
                auto_apply_confidence: classifier.auto_apply_confidence.clamp(0.0, 1.0),
            },
        }
    }
}
