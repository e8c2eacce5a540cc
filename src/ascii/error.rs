//! Error types for image loading and sampling.

use std::path::PathBuf;

/// Errors that can occur while loading or sampling a raster image.
#[derive(Debug, thiserror::Error)]
pub enum SampleError {
    /// The upload could not be decoded as an image.
    #[error("Could not decode image: {0}. Please re-upload a JPG, PNG or WEBP file.")]
    ImageDecode(#[from] image::ImageError),

    /// The image has zero width or height.
    #[error("Image has invalid dimensions {width}x{height}. Please re-upload a non-empty image.")]
    InvalidDimension { width: u32, height: u32 },

    /// Pixel buffer length does not match the stated dimensions.
    #[error("Pixel buffer holds {actual} bytes, expected {expected}")]
    BufferSize { expected: usize, actual: usize },

    /// The upload could not be read from disk.
    #[error("Failed to read image '{}': {source}", path.display())]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },
}

impl SampleError {
    /// Whether the user should be asked to upload a different file.
    pub fn needs_reupload(&self) -> bool {
        matches!(
            self,
            SampleError::ImageDecode(_) | SampleError::InvalidDimension { .. }
        )
    }
}
