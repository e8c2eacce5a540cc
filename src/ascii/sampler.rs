//! Image to ASCII sampling.

use crate::palette::Palette;

use super::artwork::AsciiArtwork;
use super::dimensions::{sample_grid, DEFAULT_MAX_SAMPLE_WIDTH, DEFAULT_ROW_STRIDE};
use super::downsample::downsample;
use super::error::SampleError;
use super::grayscale::brightness;
use super::mapping::map_to_char;
use super::raster::RasterImage;

/// Tunables for one sampling call.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SampleSettings {
    /// Upper bound on character columns.
    pub max_sample_width: u32,
    /// Emit every `row_stride`-th resampled row.
    pub row_stride: u32,
}

impl Default for SampleSettings {
    fn default() -> Self {
        Self {
            max_sample_width: DEFAULT_MAX_SAMPLE_WIDTH,
            row_stride: DEFAULT_ROW_STRIDE,
        }
    }
}

impl SampleSettings {
    pub fn with_max_width(max_sample_width: u32) -> Self {
        Self {
            max_sample_width,
            ..Self::default()
        }
    }
}

/// Convert an image into ASCII artwork.
///
/// 1. Resample to at most `max_sample_width` columns, keeping aspect ratio
/// 2. Keep every `row_stride`-th row to compensate for tall glyphs
/// 3. Map each cell's mean RGB brightness onto the palette, dark to heavy
///
/// Identical inputs always produce identical output.
pub fn sample(
    image: &RasterImage,
    palette: &Palette,
    settings: &SampleSettings,
) -> Result<AsciiArtwork, SampleError> {
    let (width, height) = (image.width(), image.height());
    if width == 0 || height == 0 {
        return Err(SampleError::InvalidDimension { width, height });
    }

    let max_width = settings.max_sample_width.max(1);
    let stride = settings.row_stride.max(1) as usize;
    let (grid_w, grid_h) = sample_grid(width, height, max_width);
    let cells = downsample(image, grid_w, grid_h);
    let ramp = palette.chars();

    let rows: Vec<String> = cells
        .chunks(grid_w as usize)
        .step_by(stride)
        .map(|row| {
            row.iter()
                .map(|c| map_to_char(brightness(c.r, c.g, c.b), ramp))
                .collect()
        })
        .collect();

    log::debug!(
        "Sampled {}x{} image to {}x{} grid, {} rows with '{}' palette",
        width,
        height,
        grid_w,
        grid_h,
        rows.len(),
        palette.name()
    );

    Ok(AsciiArtwork::from_rows(rows))
}

/// Decode an encoded upload and sample it in one step.
pub fn sample_encoded(
    bytes: &[u8],
    palette: &Palette,
    settings: &SampleSettings,
) -> Result<AsciiArtwork, SampleError> {
    let image = RasterImage::decode(bytes)?;
    sample(&image, palette, settings)
}
