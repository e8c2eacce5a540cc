//! Crate-level error type for the command-line front end.
//!
//! Library functions return their own narrow errors; this aggregates them.

use crate::ascii::SampleError;
use crate::config::ConfigError;
use crate::design::DesignError;
use crate::layout::LayoutError;
use crate::palette::PaletteError;
use crate::render::RenderError;

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error(transparent)]
    Sample(#[from] SampleError),

    #[error(transparent)]
    Layout(#[from] LayoutError),

    #[error(transparent)]
    Palette(#[from] PaletteError),

    #[error(transparent)]
    Render(#[from] RenderError),

    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error("Failed to write '{path}': {source}")]
    Write {
        path: String,
        source: std::io::Error,
    },

    #[error("Failed to serialize: {0}")]
    Serialize(#[from] toml::ser::Error),
}

impl From<DesignError> for Error {
    fn from(e: DesignError) -> Self {
        match e {
            DesignError::Layout(e) => Error::Layout(e),
            DesignError::Render(e) => Error::Render(e),
        }
    }
}

impl Error {
    /// Blank content: show a placeholder, not an error.
    pub fn is_empty_content(&self) -> bool {
        matches!(self, Error::Layout(LayoutError::EmptyContent))
    }

    /// The upload itself is unusable and must be replaced.
    pub fn needs_reupload(&self) -> bool {
        match self {
            Error::Sample(e) => e.needs_reupload(),
            _ => false,
        }
    }
}

pub type Result<T> = std::result::Result<T, Error>;
