//! Text-overlay compositor.
//!
//! Lays out a free-typed caption inside a horizontal band of the canvas,
//! independently of the artwork underneath. The overlay has its own font
//! size search and produces its own layout; the artwork layout is never
//! consulted or changed.

mod band;

pub use band::{Band, BAND_HEIGHT_RATIO};

use crate::layout::{
    fit_text_size, wrap_text, FitSearch, FontMetrics, LayoutError, LayoutResult, PlacedLine,
    PrintCanvas, Rect, TextAlign, WIDTH_EPSILON,
};

/// Vertical padding inside the band, in reference units.
pub const OVERLAY_VERTICAL_PADDING: f32 = 8.0;

/// Horizontal padding inside the band, in reference units.
pub const OVERLAY_HORIZONTAL_PADDING: f32 = 12.0;

/// Smallest fitted overlay font size, in reference units.
pub const OVERLAY_MIN_FONT_SIZE: f32 = 8.0;

/// Decrement of the fit-to-box search, in reference units.
pub const OVERLAY_FIT_STEP: f32 = 2.0;

/// Font size per explicit size step, in reference units.
pub const OVERLAY_SIZE_UNIT: f32 = 4.0;

/// Extra fill beyond the band edges so no seam shows, in reference units.
pub const OVERLAY_BLEED: f32 = 2.0;

/// Band fill behind the overlay text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Hash)]
pub enum OverlayBackground {
    #[default]
    Solid,
    Transparent,
}

/// How the overlay font size is chosen.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub enum OverlaySizing {
    /// Fixed size step; font size is `step * OVERLAY_SIZE_UNIT` reference units.
    Explicit(f32),
    /// Largest size whose wrapped text fits the band.
    #[default]
    FitToBox,
}

/// Secondary caption drawn above the artwork.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct TextOverlay {
    pub text: String,
    pub band: Band,
    pub align: TextAlign,
    pub background: OverlayBackground,
    pub sizing: OverlaySizing,
}

/// Solved overlay: band geometry plus its own text layout.
#[derive(Debug, Clone, PartialEq)]
pub struct OverlayLayout {
    /// Nominal band rectangle.
    pub band: Rect,
    /// Area painted before text, `None` when the background is transparent.
    pub fill: Option<Rect>,
    pub text: LayoutResult,
}

/// Lay out an overlay caption on `canvas`.
pub fn composite_overlay(
    overlay: &TextOverlay,
    canvas: &PrintCanvas,
    metrics: &FontMetrics,
) -> Result<OverlayLayout, LayoutError> {
    if !metrics.is_valid() {
        return Err(LayoutError::InvalidMetrics);
    }
    if overlay.text.trim().is_empty() {
        return Err(LayoutError::EmptyContent);
    }

    let unit = canvas.unit_scale();
    let band = overlay.band.calculate_rect(canvas);
    let h_pad = OVERLAY_HORIZONTAL_PADDING * unit;
    let v_pad = OVERLAY_VERTICAL_PADDING * unit;
    let box_width = (band.width - h_pad * 2.0).max(0.0);
    let box_height = (band.height - v_pad * 2.0).max(0.0);

    let fit_font_size = fit_text_size(
        &overlay.text,
        box_width / unit,
        box_height / unit,
        metrics,
        &FitSearch {
            max_size: box_height / unit,
            min_size: OVERLAY_MIN_FONT_SIZE,
            step: OVERLAY_FIT_STEP,
        },
    ) * unit;

    let font_size = match overlay.sizing {
        OverlaySizing::FitToBox => fit_font_size,
        OverlaySizing::Explicit(step) => step.max(1.0) * OVERLAY_SIZE_UNIT * unit,
    };

    let wrapped = wrap_text(&overlay.text, font_size, box_width, metrics);
    let line_height = metrics.line_height(font_size);
    let baseline_offset = metrics.baseline_offset(font_size);
    let content_height = metrics.block_height(wrapped.len(), font_size);
    let start_y = band.y + (band.height - content_height) / 2.0;

    let mut content_width = 0.0f32;
    let lines: Vec<PlacedLine> = wrapped
        .into_iter()
        .enumerate()
        .map(|(i, line)| {
            let width = metrics.measure(&line, font_size);
            content_width = content_width.max(width);
            let y = start_y + i as f32 * line_height;
            PlacedLine {
                x: overlay.align.line_x(band.x + h_pad, band.right() - h_pad, width),
                y,
                baseline: y + baseline_offset,
                width,
                text: line,
            }
        })
        .collect();

    let clipped = content_width > box_width + WIDTH_EPSILON
        || content_height > box_height + WIDTH_EPSILON;

    let fill = match overlay.background {
        OverlayBackground::Solid => Some(band.inflate(OVERLAY_BLEED * unit)),
        OverlayBackground::Transparent => None,
    };

    log::debug!(
        "Overlay layout: {} band, {} lines, font {:.2}, clipped {}",
        overlay.band.name(),
        lines.len(),
        font_size,
        clipped
    );

    Ok(OverlayLayout {
        band,
        fill,
        text: LayoutResult {
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
        },
    })
}
