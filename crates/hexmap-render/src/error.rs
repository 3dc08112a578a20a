use thiserror::Error;

#[derive(Error, Debug)]
pub enum RenderError {
    #[error("JPEG quality must be between 1 and 100, got {0}")]
    InvalidQuality(u8),

    #[error("invalid render config: {0}")]
    InvalidConfig(String),

    #[error("image encoding failed: {0}")]
    Image(#[from] image::ImageError),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("metadata serialization failed: {0}")]
    Json(#[from] serde_json::Error),
}
