//! Rendering error types.

/// Errors that can occur while rendering or encoding an artifact.
#[derive(Debug, thiserror::Error)]
pub enum RenderError {
    #[error("Failed to load font '{path}': {message}")]
    FontLoad { path: String, message: String },

    #[error("Invalid colour '{0}', expected #RRGGBB or #RGB")]
    InvalidColor(String),

    #[error("Failed to encode PNG: {0}")]
    Encode(#[from] image::ImageError),
}
