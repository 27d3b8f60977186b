#![deny(clippy::unwrap_used)]
#![allow(
    clippy::cast_precision_loss,
    clippy::cast_possible_truncation,
    clippy::cast_sign_loss,
    clippy::missing_errors_doc,
    clippy::missing_panics_doc
)]

mod category;
mod color_analyzer;
mod error;
mod local;
mod matching;
mod orchestrator;
mod outfit;
mod remote;
mod season;

pub use category::predict_category;
pub use color_analyzer::*;
pub use error::*;
pub use local::{analyze_local, decode_image, pixels_from_raw};
pub use matching::{check_color_conflict, conflicting_colors, matching_suggestion};
pub use orchestrator::{ClassificationOrchestrator, ClassificationOutcome};
pub use outfit::{GeneratedOutfit, check_outfit, generate_random_outfit};
pub use remote::{CLASSIFY_PROMPT, RemoteClassifier, VisionClassifier, parse_remote_response, strip_code_fences};
pub use season::{occasions, suggest_occasions, suggest_season};
