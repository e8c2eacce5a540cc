//! Print-layout solver shared by preview and export.
//!
//! One function computes font size and placement for every canvas. Preview
//! and export call it with the same inputs and differ only in canvas size, so
//! the two are identical up to a uniform scale factor.

use crate::ascii::{AsciiArtwork, TrimBounds};

use super::canvas::PrintCanvas;
use super::error::LayoutError;
use super::metrics::FontMetrics;
use super::scale::ScaleSelector;
use super::wrap::{fit_text_size, wrap_text, FitSearch, WIDTH_EPSILON};

/// Font size used to measure content before fitting.
pub const PROBE_FONT_SIZE: f32 = 100.0;

/// Smallest artwork font size, in reference units.
pub const MIN_ARTWORK_FONT_SIZE: f32 = 4.0;

/// Smallest typed-text font size, in reference units.
pub const MIN_TEXT_FONT_SIZE: f32 = 10.0;

/// Horizontal padding on each side of typed text, in reference units.
pub const TEXT_PADDING: f32 = 40.0;

/// Share of canvas height a fitted text block may fill.
pub const TEXT_FIT_HEIGHT_RATIO: f32 = 0.9;

/// Largest font size tried when fitting text, as a share of canvas height.
pub const TEXT_FIT_MAX_RATIO: f32 = 0.8;

/// Decrement of the text fit search, in reference units.
pub const FIT_STEP: f32 = 2.0;

/// Horizontal alignment of typed text lines.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Hash)]
pub enum TextAlign {
    #[default]
    Left,
    Center,
    Right,
}

impl TextAlign {
    pub fn name(&self) -> &'static str {
        match self {
            TextAlign::Left => "left",
            TextAlign::Center => "center",
            TextAlign::Right => "right",
        }
    }

    /// Left edge of a line `line_width` wide inside `[left, right]`.
    pub fn line_x(&self, left: f32, right: f32, line_width: f32) -> f32 {
        match self {
            TextAlign::Left => left,
            TextAlign::Center => left + (right - left - line_width) / 2.0,
            TextAlign::Right => right - line_width,
        }
    }
}

/// How the final font size is chosen.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SizingMode {
    /// Use the fit font size, ignoring the selector.
    #[default]
    FitToCanvas,
    /// Multiply the fit font size by the selector ratio.
    ExplicitScale,
}

/// What to lay out.
#[derive(Debug, Clone, Copy)]
pub enum LayoutContent<'a> {
    Artwork(&'a AsciiArtwork),
    Text { text: &'a str, align: TextAlign },
}

/// One positioned row of content.
#[derive(Debug, Clone, PartialEq)]
pub struct PlacedLine {
    pub text: String,
    /// Left edge of the first glyph.
    pub x: f32,
    /// Top of the line box.
    pub y: f32,
    /// Baseline for glyph drawing.
    pub baseline: f32,
    /// Measured width of `text`.
    pub width: f32,
}

/// Resolved placement of content on a canvas.
///
/// Renderers draw from this and never re-derive sizes or offsets.
#[derive(Debug, Clone, PartialEq)]
pub struct LayoutResult {
    pub canvas: PrintCanvas,
    /// Size the content exactly fits at.
    pub fit_font_size: f32,
    /// Size after the scale selector and floor.
    pub font_size: f32,
    pub char_width: f32,
    pub line_height: f32,
    pub content_width: f32,
    pub content_height: f32,
    pub lines: Vec<PlacedLine>,
    /// Rows/columns kept from the source artwork, when trimming applied.
    pub trim: Option<TrimBounds>,
    /// True when content extends past the canvas.
    pub clipped: bool,
}

impl LayoutResult {
    /// Number of glyph rows laid out.
    pub fn row_count(&self) -> usize {
        self.lines.len()
    }
}

/// Solve the layout of artwork or typed text on `canvas`.
pub fn solve_layout(
    content: LayoutContent<'_>,
    scale: ScaleSelector,
    canvas: &PrintCanvas,
    mode: SizingMode,
    metrics: &FontMetrics,
) -> Result<LayoutResult, LayoutError> {
    match content {
        LayoutContent::Artwork(artwork) => solve_artwork(artwork, scale, canvas, mode, metrics),
        LayoutContent::Text { text, align } => {
            solve_text(text, align, scale, canvas, mode, metrics)
        }
    }
}

/// Lay out ASCII artwork: trim, fit, scale, centre horizontally, anchor top.
pub fn solve_artwork(
    artwork: &AsciiArtwork,
    scale: ScaleSelector,
    canvas: &PrintCanvas,
    mode: SizingMode,
    metrics: &FontMetrics,
) -> Result<LayoutResult, LayoutError> {
    if !metrics.is_valid() {
        return Err(LayoutError::InvalidMetrics);
    }
    let (trimmed, bounds) = artwork.trim();
    if trimmed.row_count() == 0 {
        return Err(LayoutError::EmptyContent);
    }

    let probe_width = metrics.measure(trimmed.longest_row(), PROBE_FONT_SIZE);
    let probe_height = metrics.block_height(trimmed.row_count(), PROBE_FONT_SIZE);
    let width_scale = canvas.width / probe_width;
    let height_scale = canvas.height / probe_height;
    let fit_font_size = PROBE_FONT_SIZE * width_scale.min(height_scale);

    let font_size = resolve_size(
        fit_font_size,
        scale,
        mode,
        MIN_ARTWORK_FONT_SIZE * canvas.unit_scale(),
    );

    let char_width = metrics.char_width(font_size);
    let line_height = metrics.line_height(font_size);
    let baseline_offset = metrics.baseline_offset(font_size);
    let content_width = metrics.measure(trimmed.longest_row(), font_size);
    let content_height = metrics.block_height(trimmed.row_count(), font_size);

    // The block is centred as a whole so columns stay aligned across rows.
    let x = (canvas.width - content_width) / 2.0;

    let lines = trimmed
        .rows()
        .iter()
        .enumerate()
        .map(|(i, row)| {
            let y = i as f32 * line_height;
            PlacedLine {
                text: row.clone(),
                x,
                y,
                baseline: y + baseline_offset,
                width: metrics.measure(row, font_size),
            }
        })
        .collect();

    let clipped = content_width > canvas.width + WIDTH_EPSILON
        || content_height > canvas.height + WIDTH_EPSILON;

    log::debug!(
        "Artwork layout: {}x{} glyphs, fit {:.2}, font {:.2}, clipped {}",
        bounds.columns,
        bounds.rows,
        fit_font_size,
        font_size,
        clipped
    );

    Ok(LayoutResult {
        canvas: *canvas,
        fit_font_size,
        font_size,
        char_width,
        line_height,
        content_width,
        content_height,
        lines,
        trim: Some(bounds),
        clipped,
    })
}

/// Lay out typed text: fit, scale, wrap, centre vertically, align lines.
pub fn solve_text(
    text: &str,
    align: TextAlign,
    scale: ScaleSelector,
    canvas: &PrintCanvas,
    mode: SizingMode,
    metrics: &FontMetrics,
) -> Result<LayoutResult, LayoutError> {
    if !metrics.is_valid() {
        return Err(LayoutError::InvalidMetrics);
    }
    if text.trim().is_empty() {
        return Err(LayoutError::EmptyContent);
    }

    let unit = canvas.unit_scale();
    let padding = TEXT_PADDING * unit;
    let available_width = (canvas.width - padding * 2.0).max(0.0);

    // Search in reference units so the result scales exactly with the canvas.
    let search = FitSearch {
        max_size: canvas.height * TEXT_FIT_MAX_RATIO / unit,
        min_size: MIN_TEXT_FONT_SIZE,
        step: FIT_STEP,
    };
    let fit_font_size = fit_text_size(
        text,
        available_width / unit,
        canvas.height * TEXT_FIT_HEIGHT_RATIO / unit,
        metrics,
        &search,
    ) * unit;

    let font_size = resolve_size(fit_font_size, scale, mode, MIN_TEXT_FONT_SIZE * unit);

    let wrapped = wrap_text(text, font_size, available_width, metrics);
    let line_height = metrics.line_height(font_size);
    let baseline_offset = metrics.baseline_offset(font_size);
    let content_height = metrics.block_height(wrapped.len(), font_size);
    let start_y = (canvas.height - content_height) / 2.0;

    let mut content_width = 0.0f32;
    let lines: Vec<PlacedLine> = wrapped
        .into_iter()
        .enumerate()
        .map(|(i, line)| {
            let width = metrics.measure(&line, font_size);
            content_width = content_width.max(width);
            let y = start_y + i as f32 * line_height;
            PlacedLine {
                x: align.line_x(padding, canvas.width - padding, width),
                y,
                baseline: y + baseline_offset,
                width,
                text: line,
            }
        })
        .collect();

    let clipped = content_width > available_width + WIDTH_EPSILON
        || content_height > canvas.height + WIDTH_EPSILON;

    log::debug!(
        "Text layout: {} lines, fit {:.2}, font {:.2}, clipped {}",
        lines.len(),
        fit_font_size,
        font_size,
        clipped
    );

    Ok(LayoutResult {
        canvas: *canvas,
        fit_font_size,
        font_size,
        char_width: metrics.char_width(font_size),
        line_height,
        content_width,
        content_height,
        lines,
        trim: None,
        clipped,
    })
}

fn resolve_size(fit: f32, scale: ScaleSelector, mode: SizingMode, floor: f32) -> f32 {
    let size = match mode {
        SizingMode::FitToCanvas => fit,
        SizingMode::ExplicitScale => fit * scale.ratio(),
    };
    size.max(floor)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::layout::REFERENCE_CANVAS_WIDTH;

    fn grid(cols: usize, rows: usize) -> AsciiArtwork {
        AsciiArtwork::from_rows(vec!["@".repeat(cols); rows])
    }

    #[test]
    fn test_wide_artwork_fits_width() {
        let canvas = PrintCanvas::export();
        let layout = solve_artwork(
            &grid(100, 10),
            ScaleSelector::midpoint(),
            &canvas,
            SizingMode::FitToCanvas,
            &FontMetrics::ARTWORK,
        )
        .unwrap();
        assert!((layout.content_width - canvas.width).abs() < 0.5);
        assert!(layout.content_height < canvas.height);
        assert!(!layout.clipped);
        assert!(layout.lines[0].x.abs() < 0.5);
    }

    #[test]
    fn test_artwork_is_top_anchored_and_centred() {
        let canvas = PrintCanvas::export();
        let layout = solve_artwork(
            &grid(10, 10),
            ScaleSelector::new(2.5),
            &canvas,
            SizingMode::ExplicitScale,
            &FontMetrics::ARTWORK,
        )
        .unwrap();
        assert_eq!(layout.lines[0].y, 0.0);
        let left = layout.lines[0].x;
        let right = canvas.width - (left + layout.content_width);
        assert!((left - right).abs() < 0.01);
    }

    #[test]
    fn test_fit_mode_ignores_selector() {
        let canvas = PrintCanvas::export();
        let layout = solve_artwork(
            &grid(10, 10),
            ScaleSelector::new(9.0),
            &canvas,
            SizingMode::FitToCanvas,
            &FontMetrics::ARTWORK,
        )
        .unwrap();
        assert_eq!(layout.font_size, layout.fit_font_size);
    }

    #[test]
    fn test_large_selector_clips() {
        let layout = solve_artwork(
            &grid(40, 20),
            ScaleSelector::new(8.0),
            &PrintCanvas::export(),
            SizingMode::ExplicitScale,
            &FontMetrics::ARTWORK,
        )
        .unwrap();
        assert!(layout.clipped);
        assert!(layout.lines[0].x < 0.0);
    }

    #[test]
    fn test_floor_applies() {
        let canvas = PrintCanvas::with_width(REFERENCE_CANVAS_WIDTH);
        let layout = solve_artwork(
            &grid(400, 1),
            ScaleSelector::new(0.1),
            &canvas,
            SizingMode::ExplicitScale,
            &FontMetrics::ARTWORK,
        )
        .unwrap();
        assert_eq!(layout.font_size, MIN_ARTWORK_FONT_SIZE);
    }

    #[test]
    fn test_blank_artwork_is_empty_content() {
        let art = AsciiArtwork::from_text("   \n   ");
        let err = solve_artwork(
            &art,
            ScaleSelector::midpoint(),
            &PrintCanvas::export(),
            SizingMode::FitToCanvas,
            &FontMetrics::ARTWORK,
        )
        .unwrap_err();
        assert_eq!(err, LayoutError::EmptyContent);
    }

    #[test]
    fn test_blank_text_is_empty_content() {
        let err = solve_text(
            "  \n ",
            TextAlign::Left,
            ScaleSelector::midpoint(),
            &PrintCanvas::export(),
            SizingMode::FitToCanvas,
            &FontMetrics::TEXT,
        )
        .unwrap_err();
        assert_eq!(err, LayoutError::EmptyContent);
    }

    #[test]
    fn test_text_lines_respect_padding() {
        let canvas = PrintCanvas::with_width(460.0);
        let layout = solve_text(
            "HELLO WORLD THIS IS A SHIRT",
            TextAlign::Right,
            ScaleSelector::midpoint(),
            &canvas,
            SizingMode::FitToCanvas,
            &FontMetrics::TEXT,
        )
        .unwrap();
        for line in &layout.lines {
            assert!(line.x >= TEXT_PADDING - 0.01);
            assert!((line.x + line.width - (460.0 - TEXT_PADDING)).abs() < 0.01);
        }
        assert!(!layout.clipped);
    }

    #[test]
    fn test_text_is_vertically_centred() {
        let canvas = PrintCanvas::with_width(460.0);
        let layout = solve_text(
            "HI",
            TextAlign::Center,
            ScaleSelector::midpoint(),
            &canvas,
            SizingMode::FitToCanvas,
            &FontMetrics::TEXT,
        )
        .unwrap();
        let top = layout.lines[0].y;
        let bottom = canvas.height - (top + layout.content_height);
        assert!((top - bottom).abs() < 0.01);
    }

    #[test]
    fn test_align_line_x() {
        assert_eq!(TextAlign::Left.line_x(10.0, 110.0, 20.0), 10.0);
        assert_eq!(TextAlign::Center.line_x(10.0, 110.0, 20.0), 50.0);
        assert_eq!(TextAlign::Right.line_x(10.0, 110.0, 20.0), 90.0);
    }

    #[test]
    fn test_zero_ratios_are_rejected() {
        let canvas = PrintCanvas::export();
        let metrics = FontMetrics::new(0.0, 0.0);
        let err = solve_artwork(
            &grid(2, 1),
            ScaleSelector::midpoint(),
            &canvas,
            SizingMode::ExplicitScale,
            &metrics,
        )
        .unwrap_err();
        assert_eq!(err, LayoutError::InvalidMetrics);

        let err = solve_text(
            "hello",
            TextAlign::Center,
            ScaleSelector::midpoint(),
            &canvas,
            SizingMode::FitToCanvas,
            &FontMetrics::new(0.6, -1.5),
        )
        .unwrap_err();
        assert_eq!(err, LayoutError::InvalidMetrics);
    }
}
