use language_model::ChatError;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum AnalysisError {
    #[error("Failed to decode image: {0}")]
    ImageDecode(#[from] image::ImageError),
    #[error("Pixel buffer of {len} bytes does not fit a {width}x{height} RGBA image")]
    BufferSize { width: u32, height: u32, len: usize },
    #[error("Image has no pixels")]
    EmptyImage,
}

/// Reasons the remote classification path did not produce a descriptor.
#[derive(Error, Debug)]
pub enum RemoteError {
    #[error("remote classification disabled")]
    Disabled,
    #[error("transport failed: {0}")]
    Transport(#[from] ChatError),
    #[error("answer is not a garment JSON object: {0}")]
    Json(#[from] serde_json::Error),
    #[error("answer failed validation: {0}")]
    Invalid(String),
}
