use crate::{RemoteClassifier, RemoteError, VisionClassifier, analyze_local, decode_image};
use app_state::ClassifierSettings;
use common_types::{Category, GarmentDescriptor};
use language_model::ChatResult;
use serde::Serialize;
use std::sync::Arc;
use tracing::{info, warn};

/// Result of one classification, telling apart where the descriptor came from.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "source", rename_all = "lowercase")]
pub enum ClassificationOutcome {
    /// The remote model produced a valid descriptor.
    Remote { descriptor: GarmentDescriptor },
    /// The remote path failed and the local heuristics answered instead.
    Fallback {
        descriptor: GarmentDescriptor,
        reason: String,
    },
    /// The image could not be decoded, so there is nothing to describe.
    Failed { reason: String },
}

impl ClassificationOutcome {
    #[must_use]
    pub const fn descriptor(&self) -> Option<&GarmentDescriptor> {
        match self {
            Self::Remote { descriptor } | Self::Fallback { descriptor, .. } => Some(descriptor),
            Self::Failed { .. } => None,
        }
    }

    #[must_use]
    pub fn into_descriptor(self) -> Option<GarmentDescriptor> {
        match self {
            Self::Remote { descriptor } | Self::Fallback { descriptor, .. } => Some(descriptor),
            Self::Failed { .. } => None,
        }
    }

    #[must_use]
    pub const fn is_degraded(&self) -> bool {
        !matches!(self, Self::Remote { .. })
    }

    /// Category a form may pre-select without asking. Remote categories are
    /// trusted, local guesses only above `threshold`.
    #[must_use]
    pub fn auto_apply_category(&self, threshold: f32) -> Option<Category> {
        match self {
            Self::Remote { descriptor } => Some(descriptor.category),
            Self::Fallback { descriptor, .. } if descriptor.confidence > threshold => {
                Some(descriptor.category)
            }
            Self::Fallback { .. } | Self::Failed { .. } => None,
        }
    }
}

/// Runs the remote classifier first and falls back to the local heuristics.
///
/// Holds no per-call state, so one instance can be shared between tasks.
#[derive(Clone, Default)]
pub struct ClassificationOrchestrator {
    remote: Option<Arc<dyn RemoteClassifier>>,
}

impl ClassificationOrchestrator {
    #[must_use]
    pub fn new(remote: Arc<dyn RemoteClassifier>) -> Self {
        Self {
            remote: Some(remote),
        }
    }

    /// Local heuristics only.
    #[must_use]
    pub fn offline() -> Self {
        Self { remote: None }
    }

    pub fn from_settings(settings: &ClassifierSettings) -> ChatResult<Self> {
        if !settings.enabled {
            return Ok(Self::offline());
        }
        let classifier = VisionClassifier::from_settings(settings)?;
        Ok(Self::new(Arc::new(classifier)))
    }

    #[must_use]
    pub const fn has_remote(&self) -> bool {
        self.remote.is_some()
    }

    /// Classify an encoded image. Never fails loudly: remote problems degrade
    /// to the local path, and only an undecodable image yields `Failed`.
    pub async fn classify(&self, image: &[u8]) -> ClassificationOutcome {
        let remote_error = match self.classify_remote(image).await {
            Ok(descriptor) => {
                info!(color = %descriptor.color, category = %descriptor.category, "Remote classification succeeded");
                return ClassificationOutcome::Remote { descriptor };
            }
            Err(e) => e,
        };

        let reason = remote_error.to_string();
        if matches!(remote_error, RemoteError::Disabled) {
            info!("Remote classification disabled, using local analysis");
        } else {
            warn!("Remote classification failed: {reason}. Falling back to local analysis.");
        }

        match decode_image(image) {
            Ok(pixels) => ClassificationOutcome::Fallback {
                descriptor: analyze_local(&pixels),
                reason,
            },
            Err(e) => {
                warn!("Local analysis failed too: {e}");
                ClassificationOutcome::Failed {
                    reason: e.to_string(),
                }
            }
        }
    }

    async fn classify_remote(&self, image: &[u8]) -> Result<GarmentDescriptor, RemoteError> {
        let Some(remote) = &self.remote else {
            return Err(RemoteError::Disabled);
        };
        remote.classify(image).await
    }
}
