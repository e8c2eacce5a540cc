//! Print-layout solver.
//!
//! Maps artwork or typed text onto a fixed [`PrintCanvas`]:
//!
//! - **Trim** blank margins from artwork
//! - **Fit** the largest font size that fits both canvas dimensions
//! - **Scale** by the user's [`ScaleSelector`] (midpoint = 100%)
//! - **Place** rows: artwork centred and top-anchored, text wrapped,
//!   aligned and vertically centred
//!
//! Everything here is a pure function of its inputs.

mod canvas;
mod error;
mod metrics;
mod scale;
mod solver;
mod wrap;

pub use canvas::{PrintCanvas, Rect, PRINT_HEIGHT, PRINT_WIDTH, REFERENCE_CANVAS_WIDTH};
pub use error::LayoutError;
pub use metrics::{FontMetrics, ASCENT_RATIO};
pub use scale::{ScaleSelector, SCALE_MAX, SCALE_MIDPOINT, SCALE_MIN};
pub use solver::{
    solve_artwork, solve_layout, solve_text, LayoutContent, LayoutResult, PlacedLine, SizingMode,
    TextAlign, FIT_STEP, MIN_ARTWORK_FONT_SIZE, MIN_TEXT_FONT_SIZE, PROBE_FONT_SIZE, TEXT_PADDING,
};
pub use wrap::{fit_text_size, wrap_text, FitSearch, WIDTH_EPSILON};
