//! Presentation backends for a solved layout.
//!
//! Both backends read positions straight from [`LayoutResult`](crate::layout::LayoutResult)
//! and never re-measure text, so they agree with the solver and with each other.
//! A [`Viewport`] rescales the canvas uniformly for on-screen display.

mod color;
mod error;
pub mod mockup;
mod raster;
mod svg;
mod viewport;

pub use color::{Colors, Rgb};
pub use error::RenderError;
pub use mockup::{compose_on_mockup, MockupRegion};
pub use raster::{
    encode_png, render_raster, BlockGlyphs, FontGlyphs, GlyphBitmap, GlyphSource, RasterOptions,
    COVERAGE_THRESHOLD, DOUBLE_STRIKE_OFFSET,
};
pub use svg::{escape_xml, render_svg, SvgDocument, SvgOptions};
pub use viewport::{ViewTransform, Viewport};
