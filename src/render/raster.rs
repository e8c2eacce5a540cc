//! Raster backend: RGBA pixel buffers and PNG encoding.
//!
//! Glyphs come from a [`GlyphSource`]. Coverage is thresholded rather than
//! blended so exported artifacts carry exactly two colours, and every glyph
//! is stamped twice half a reference unit apart to thicken strokes.

use std::collections::HashMap;
use std::io::Cursor;
use std::path::Path;

use image::{ImageFormat, Rgba, RgbaImage};

use crate::layout::{LayoutResult, Rect};
use crate::overlay::OverlayLayout;

use super::color::{Colors, Rgb};
use super::error::RenderError;
use super::viewport::{ViewTransform, Viewport};

/// Coverage at or above this value paints a pixel.
pub const COVERAGE_THRESHOLD: u8 = 128;

/// Horizontal offset of the second glyph stamp, in reference units.
pub const DOUBLE_STRIKE_OFFSET: f32 = 0.5;

/// A rasterized glyph, positioned relative to the pen on the baseline.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct GlyphBitmap {
    pub width: usize,
    pub height: usize,
    /// Pixels from the pen to the bitmap's left edge.
    pub left: i32,
    /// Pixels from the baseline to the bitmap's top edge (negative is up).
    pub top: i32,
    /// Row-major coverage, `width * height` bytes.
    pub coverage: Vec<u8>,
}

impl GlyphBitmap {
    pub fn is_empty(&self) -> bool {
        self.width == 0 || self.height == 0
    }
}

/// Anything that can turn a character into a coverage bitmap.
pub trait GlyphSource {
    fn rasterize(&self, ch: char, px: f32) -> GlyphBitmap;
}

/// Font-free glyphs: every visible character is a solid cell-sized block.
///
/// Keeps rendering usable without a font file and makes pixel output
/// predictable in tests.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BlockGlyphs {
    pub advance_ratio: f32,
}

impl Default for BlockGlyphs {
    fn default() -> Self {
        Self { advance_ratio: 0.6 }
    }
}

impl GlyphSource for BlockGlyphs {
    fn rasterize(&self, ch: char, px: f32) -> GlyphBitmap {
        if ch.is_whitespace() {
            return GlyphBitmap::default();
        }
        let width = (px * self.advance_ratio).round().max(1.0) as usize;
        let height = (px * 0.7).round().max(1.0) as usize;
        GlyphBitmap {
            width,
            height,
            left: 0,
            top: -(height as i32),
            coverage: vec![255; width * height],
        }
    }
}

/// Glyphs rasterized from a TrueType/OpenType font.
pub struct FontGlyphs {
    font: fontdue::Font,
}

impl FontGlyphs {
    pub fn from_bytes(bytes: &[u8], label: &str) -> Result<Self, RenderError> {
        let font = fontdue::Font::from_bytes(bytes, fontdue::FontSettings::default()).map_err(
            |message| RenderError::FontLoad {
                path: label.to_string(),
                message: message.to_string(),
            },
        )?;
        Ok(Self { font })
    }

    pub fn load(path: &Path) -> Result<Self, RenderError> {
        let bytes = std::fs::read(path).map_err(|e| RenderError::FontLoad {
            path: path.display().to_string(),
            message: e.to_string(),
        })?;
        log::debug!("Loaded font {} ({} bytes)", path.display(), bytes.len());
        Self::from_bytes(&bytes, &path.display().to_string())
    }
}

impl GlyphSource for FontGlyphs {
    fn rasterize(&self, ch: char, px: f32) -> GlyphBitmap {
        let (metrics, coverage) = self.font.rasterize(ch, px);
        GlyphBitmap {
            width: metrics.width,
            height: metrics.height,
            left: metrics.xmin,
            top: -(metrics.height as i32 + metrics.ymin),
            coverage,
        }
    }
}

/// Options for one raster render.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RasterOptions {
    /// Paint the canvas background; otherwise it stays fully transparent.
    pub include_background: bool,
    /// Output size; the canvas's own pixel size when `None`.
    pub viewport: Option<Viewport>,
}

impl Default for RasterOptions {
    fn default() -> Self {
        Self {
            include_background: true,
            viewport: None,
        }
    }
}

type GlyphCache = HashMap<(char, u32), GlyphBitmap>;

struct Painter<'a> {
    image: RgbaImage,
    transform: ViewTransform,
    glyphs: &'a dyn GlyphSource,
    cache: GlyphCache,
    strike_offset: f32,
}

impl Painter<'_> {
    fn fill_rect(&mut self, rect: &Rect, color: Rgb) {
        let t = self.transform;
        let x0 = t.x(rect.x).round().max(0.0) as u32;
        let y0 = t.y(rect.y).round().max(0.0) as u32;
        let x1 = (t.x(rect.right()).round().max(0.0) as u32).min(self.image.width());
        let y1 = (t.y(rect.bottom()).round().max(0.0) as u32).min(self.image.height());
        let pixel = color.to_rgba();
        for y in y0..y1 {
            for x in x0..x1 {
                self.image.put_pixel(x, y, pixel);
            }
        }
    }

    fn text(&mut self, layout: &LayoutResult, color: Rgb) {
        let t = self.transform;
        let px = t.extent(layout.font_size);
        if px < 1.0 {
            return;
        }
        let advance = t.extent(layout.char_width);
        let pixel = color.to_rgba();
        for line in &layout.lines {
            let baseline = t.y(line.baseline);
            let mut pen = t.x(line.x);
            for ch in line.text.chars() {
                if !ch.is_whitespace() {
                    self.stamp(ch, px, pen, baseline, pixel);
                    if self.strike_offset >= 0.5 {
                        self.stamp(ch, px, pen + self.strike_offset, baseline, pixel);
                    }
                }
                pen += advance;
            }
        }
    }

    fn stamp(&mut self, ch: char, px: f32, pen: f32, baseline: f32, pixel: Rgba<u8>) {
        let glyphs = self.glyphs;
        let glyph = self
            .cache
            .entry((ch, px.to_bits()))
            .or_insert_with(|| glyphs.rasterize(ch, px));
        if glyph.is_empty() {
            return;
        }
        let origin_x = pen.round() as i64 + glyph.left as i64;
        let origin_y = baseline.round() as i64 + glyph.top as i64;
        let (w, h) = (self.image.width() as i64, self.image.height() as i64);
        for gy in 0..glyph.height {
            let y = origin_y + gy as i64;
            if y < 0 || y >= h {
                continue;
            }
            for gx in 0..glyph.width {
                let x = origin_x + gx as i64;
                if x < 0 || x >= w {
                    continue;
                }
                if glyph.coverage[gy * glyph.width + gx] >= COVERAGE_THRESHOLD {
                    self.image.put_pixel(x as u32, y as u32, pixel);
                }
            }
        }
    }
}

fn painter<'a>(
    layout: &LayoutResult,
    colors: &Colors,
    options: &RasterOptions,
    glyphs: &'a dyn GlyphSource,
) -> Painter<'a> {
    let (transform, (width, height)) = match options.viewport {
        Some(viewport) => (
            ViewTransform::fit(&layout.canvas, &viewport),
            viewport.pixel_size(),
        ),
        None => (ViewTransform::IDENTITY, layout.canvas.pixel_size()),
    };
    let fill = if options.include_background {
        colors.background.to_rgba()
    } else {
        Rgba([0, 0, 0, 0])
    };
    Painter {
        image: RgbaImage::from_pixel(width, height, fill),
        transform,
        glyphs,
        cache: GlyphCache::new(),
        strike_offset: transform.extent(DOUBLE_STRIKE_OFFSET * layout.canvas.unit_scale()),
    }
}

/// Render a layout, plus an optional overlay, to an RGBA image.
pub fn render_raster(
    layout: &LayoutResult,
    overlay: Option<&OverlayLayout>,
    colors: &Colors,
    options: &RasterOptions,
    glyphs: &dyn GlyphSource,
) -> RgbaImage {
    let mut painter = painter(layout, colors, options, glyphs);
    painter.text(layout, colors.foreground);
    if let Some(overlay) = overlay {
        if let Some(fill) = &overlay.fill {
            painter.fill_rect(fill, colors.background);
        }
        painter.text(&overlay.text, colors.foreground);
    }
    log::debug!(
        "Rasterized {} rows into {}x{} ({} cached glyphs)",
        layout.row_count(),
        painter.image.width(),
        painter.image.height(),
        painter.cache.len()
    );
    painter.image
}

/// Encode an image as PNG bytes.
pub fn encode_png(image: &RgbaImage) -> Result<Vec<u8>, RenderError> {
    let mut bytes = Vec::new();
    image.write_to(&mut Cursor::new(&mut bytes), ImageFormat::Png)?;
    Ok(bytes)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ascii::AsciiArtwork;
    use crate::layout::{solve_artwork, FontMetrics, PrintCanvas, ScaleSelector, SizingMode};

    fn layout_for(text: &str, width: f32) -> LayoutResult {
        solve_artwork(
            &AsciiArtwork::from_text(text),
            ScaleSelector::midpoint(),
            &PrintCanvas::with_width(width),
            SizingMode::FitToCanvas,
            &FontMetrics::ARTWORK,
        )
        .unwrap()
    }

    fn count(image: &RgbaImage, color: Rgb) -> usize {
        let target = color.to_rgba();
        image.pixels().filter(|p| **p == target).count()
    }

    #[test]
    fn test_block_glyph_geometry() {
        let glyph = BlockGlyphs::default().rasterize('@', 10.0);
        assert_eq!((glyph.width, glyph.height), (6, 7));
        assert_eq!(glyph.top, -7);
        assert!(BlockGlyphs::default().rasterize(' ', 10.0).is_empty());
    }

    #[test]
    fn test_only_two_colours() {
        let layout = layout_for("@ @\n @ ", 200.0);
        let image = render_raster(
            &layout,
            None,
            &Colors::default(),
            &RasterOptions::default(),
            &BlockGlyphs::default(),
        );
        let ink = count(&image, Rgb::WHITE);
        let paper = count(&image, Rgb::BLACK);
        assert!(ink > 0);
        assert_eq!(ink + paper, (image.width() * image.height()) as usize);
    }

    #[test]
    fn test_transparent_background() {
        let layout = layout_for("@", 100.0);
        let image = render_raster(
            &layout,
            None,
            &Colors::default(),
            &RasterOptions {
                include_background: false,
                viewport: None,
            },
            &BlockGlyphs::default(),
        );
        assert_eq!(image.get_pixel(0, image.height() - 1)[3], 0);
        assert!(image.pixels().any(|p| p[3] == 255));
    }

    #[test]
    fn test_viewport_sets_output_size() {
        let layout = layout_for("@@", 4606.0);
        let image = render_raster(
            &layout,
            None,
            &Colors::default(),
            &RasterOptions {
                include_background: true,
                viewport: Some(Viewport::new(230.0, 289.0)),
            },
            &BlockGlyphs::default(),
        );
        assert_eq!(image.dimensions(), (230, 289));
        assert!(count(&image, Rgb::WHITE) > 0);
    }

    #[test]
    fn test_encode_png_signature() {
        let layout = layout_for("#", 50.0);
        let image = render_raster(
            &layout,
            None,
            &Colors::default(),
            &RasterOptions::default(),
            &BlockGlyphs::default(),
        );
        let bytes = encode_png(&image).unwrap();
        assert_eq!(&bytes[..8], b"\x89PNG\r\n\x1a\n");
        let decoded = image::load_from_memory(&bytes).unwrap().to_rgba8();
        assert_eq!(decoded, image);
    }

    #[test]
    fn test_font_load_error() {
        let err = FontGlyphs::from_bytes(b"not a font", "inline").err().unwrap();
        assert!(matches!(err, RenderError::FontLoad { .. }));
    }
}
