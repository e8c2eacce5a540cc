//! Layout error types.

/// Errors that can occur while solving a layout.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum LayoutError {
    /// Nothing visible to lay out. Callers skip rendering and show a
    /// placeholder instead of an empty canvas.
    #[error("Nothing to lay out: content is empty after trimming")]
    EmptyContent,

    /// Glyph advance or line height ratio is zero, negative or not finite.
    #[error("Font metrics must be finite and greater than zero")]
    InvalidMetrics,
}
