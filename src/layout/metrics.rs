//! Monospace font metrics.
//!
//! Layout never asks a real font for measurements. Every glyph advances by
//! `advance_ratio * font_size`, which keeps the solver deterministic and lets
//! both renderers agree with it exactly.

/// Fraction of the line box above the baseline, for a glyph box one em tall.
pub const ASCENT_RATIO: f32 = 0.8;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FontMetrics {
    /// Glyph advance as a fraction of font size.
    pub advance_ratio: f32,
    /// Line pitch as a fraction of font size.
    pub line_height_ratio: f32,
}

impl FontMetrics {
    /// Metrics for ASCII artwork rows.
    pub const ARTWORK: FontMetrics = FontMetrics {
        advance_ratio: 0.6,
        line_height_ratio: 1.2,
    };

    /// Metrics for typed text and overlays.
    pub const TEXT: FontMetrics = FontMetrics {
        advance_ratio: 0.6,
        line_height_ratio: 1.5,
    };

    pub fn new(advance_ratio: f32, line_height_ratio: f32) -> Self {
        Self {
            advance_ratio,
            line_height_ratio,
        }
    }

    /// Both ratios are finite and greater than zero.
    pub fn is_valid(&self) -> bool {
        [self.advance_ratio, self.line_height_ratio]
            .iter()
            .all(|r| r.is_finite() && *r > 0.0)
    }

    pub fn char_width(&self, font_size: f32) -> f32 {
        font_size * self.advance_ratio
    }

    pub fn line_height(&self, font_size: f32) -> f32 {
        font_size * self.line_height_ratio
    }

    /// Rendered width of `text` at `font_size`.
    pub fn measure(&self, text: &str, font_size: f32) -> f32 {
        text.chars().count() as f32 * self.char_width(font_size)
    }

    /// Height of `lines` stacked rows at `font_size`.
    pub fn block_height(&self, lines: usize, font_size: f32) -> f32 {
        lines as f32 * self.line_height(font_size)
    }

    /// Baseline offset from the top of a line box.
    ///
    /// The em box is centred in the line box and the baseline sits at
    /// [`ASCENT_RATIO`] of the em.
    pub fn baseline_offset(&self, font_size: f32) -> f32 {
        (self.line_height(font_size) - font_size) / 2.0 + font_size * ASCENT_RATIO
    }
}

impl Default for FontMetrics {
    fn default() -> Self {
        Self::ARTWORK
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builtin_metrics_are_valid() {
        assert!(FontMetrics::ARTWORK.is_valid());
        assert!(FontMetrics::TEXT.is_valid());
    }

    #[test]
    fn test_degenerate_ratios_are_invalid() {
        assert!(!FontMetrics::new(0.0, 1.2).is_valid());
        assert!(!FontMetrics::new(0.6, -1.0).is_valid());
        assert!(!FontMetrics::new(f32::NAN, 1.2).is_valid());
        assert!(!FontMetrics::new(0.6, f32::INFINITY).is_valid());
    }

    #[test]
    fn test_measure_counts_chars() {
        let m = FontMetrics::ARTWORK;
        assert!((m.measure("abcd", 10.0) - 24.0).abs() < 1e-4);
        assert!((m.measure("████", 10.0) - 24.0).abs() < 1e-4);
    }

    #[test]
    fn test_block_height() {
        assert!((FontMetrics::ARTWORK.block_height(20, 10.0) - 240.0).abs() < 1e-3);
        assert!((FontMetrics::TEXT.block_height(2, 10.0) - 30.0).abs() < 1e-3);
    }

    #[test]
    fn test_baseline_inside_line_box() {
        let m = FontMetrics::ARTWORK;
        let offset = m.baseline_offset(100.0);
        assert!((offset - 90.0).abs() < 1e-3);
        assert!(offset < m.line_height(100.0));
    }
}
