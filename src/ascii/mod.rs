//! Image sampler: converts uploaded images to ASCII artwork.
//!
//! The pipeline:
//!
//! 1. **Decode** - bytes to an RGBA [`RasterImage`]
//! 2. **Downsample** - area-average onto a bounded sample grid
//! 3. **Row stride** - keep every other row for roughly square cells
//! 4. **Mapping** - mean RGB brightness to a heaviest-first palette glyph
//!
//! The result is an [`AsciiArtwork`], which also knows how to trim its own
//! blank margins before layout.

mod artwork;
mod dimensions;
mod downsample;
mod error;
mod grayscale;
mod mapping;
mod raster;
mod sampler;

pub use artwork::{AsciiArtwork, TrimBounds};
pub use dimensions::{emitted_rows, sample_grid, DEFAULT_MAX_SAMPLE_WIDTH, DEFAULT_ROW_STRIDE};
pub use downsample::{downsample, CellColor};
pub use error::SampleError;
pub use grayscale::brightness;
pub use mapping::{glyph_index, map_to_char};
pub use raster::{load_image, RasterImage, DEFAULT_MAX_SOURCE_DIMENSION};
pub use sampler::{sample, sample_encoded, SampleSettings};
