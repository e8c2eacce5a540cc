//! Unit tests for the print-layout solver and text overlay.
//!
//! These tests verify:
//! - Fit sizing against the print canvas
//! - Scale selector linearity and the minimum-size floor
//! - Word wrap content preservation and idempotence
//! - Trimming and empty-content handling
//! - Preview/export parity

use typetee::ascii::AsciiArtwork;
use typetee::layout::*;
use typetee::overlay::{composite_overlay, Band, OverlayBackground, OverlaySizing, TextOverlay};

fn block(columns: usize, rows: usize) -> AsciiArtwork {
    AsciiArtwork::from_rows(vec!["@".repeat(columns); rows])
}

fn paragraph(len: usize) -> String {
    const WORDS: [&str; 12] = [
        "ascii", "shirts", "print", "monospace", "layout", "glyph", "canvas", "ink", "cotton",
        "preview", "export", "scale",
    ];
    let mut text = String::new();
    for word in WORDS.iter().cycle() {
        if text.len() + word.len() + 1 > len {
            break;
        }
        if !text.is_empty() {
            text.push(' ');
        }
        text.push_str(word);
    }
    text
}

// ==================== Fit Tests ====================

#[test]
fn test_40x20_artwork_fits_print_canvas() {
    let canvas = PrintCanvas::export();
    let layout = solve_artwork(
        &block(40, 20),
        ScaleSelector::midpoint(),
        &canvas,
        SizingMode::ExplicitScale,
        &FontMetrics::ARTWORK,
    )
    .unwrap();
    let width = 40.0 * layout.font_size * 0.6;
    let height = 20.0 * layout.font_size * 1.2;
    assert!(width <= canvas.width * 1.0001);
    assert!(height <= canvas.height * 1.0001);
    let width_gap = (canvas.width - width) / canvas.width;
    let height_gap = (canvas.height - height) / canvas.height;
    assert!(width_gap.min(height_gap) < 0.01);
    assert!(!layout.clipped);
}

#[test]
fn test_artwork_is_centred_and_top_anchored() {
    let canvas = PrintCanvas::export();
    let layout = solve_artwork(
        &block(10, 30),
        ScaleSelector::midpoint(),
        &canvas,
        SizingMode::FitToCanvas,
        &FontMetrics::ARTWORK,
    )
    .unwrap();
    let first = &layout.lines[0];
    assert_eq!(first.y, 0.0);
    let right_margin = canvas.width - (first.x + first.width);
    assert!((first.x - right_margin).abs() < 1e-2);
    // Rows share one left edge.
    assert!(layout.lines.iter().all(|l| l.x == first.x));
}

// ==================== Scale Tests ====================

#[test]
fn test_scale_is_linear_in_selector() {
    let canvas = PrintCanvas::export();
    let art = block(12, 6);
    let size_at = |v: f32| {
        solve_artwork(
            &art,
            ScaleSelector::new(v),
            &canvas,
            SizingMode::ExplicitScale,
            &FontMetrics::ARTWORK,
        )
        .unwrap()
        .font_size
    };
    let base = size_at(SCALE_MIDPOINT);
    assert!((size_at(2.5) / base - 0.5).abs() < 1e-4);
    assert!((size_at(10.0) / base - 2.0).abs() < 1e-4);
}

#[test]
fn test_oversized_scale_reports_clipping() {
    let layout = solve_artwork(
        &block(12, 6),
        ScaleSelector::new(SCALE_MAX),
        &PrintCanvas::export(),
        SizingMode::ExplicitScale,
        &FontMetrics::ARTWORK,
    )
    .unwrap();
    assert!(layout.clipped);
}

#[test]
fn test_tiny_scale_hits_floor() {
    let canvas = PrintCanvas::export();
    let layout = solve_artwork(
        &block(120, 60),
        ScaleSelector::new(SCALE_MIN),
        &canvas,
        SizingMode::ExplicitScale,
        &FontMetrics::ARTWORK,
    )
    .unwrap();
    assert_eq!(layout.font_size, MIN_ARTWORK_FONT_SIZE * canvas.unit_scale());
}

// ==================== Wrap Tests ====================

#[test]
fn test_300_char_paragraph_round_trips() {
    let text = paragraph(300);
    assert!(text.len() > 280 && !text.contains('-'));
    let metrics = FontMetrics::TEXT;
    let lines = wrap_text(&text, 14.0, 460.0, &metrics);
    assert!(lines.len() > 1);
    for line in &lines {
        assert!(metrics.measure(line, 14.0) <= 460.0 + WIDTH_EPSILON, "{:?}", line);
    }
    let strip = |s: &str| s.chars().filter(|c| !c.is_whitespace() && *c != '-').collect::<String>();
    assert_eq!(strip(&lines.join(" ")), strip(&text));
}

#[test]
fn test_wrap_is_idempotent() {
    let text = format!("{} {}", paragraph(200), "x".repeat(90));
    let metrics = FontMetrics::TEXT;
    let lines = wrap_text(&text, 14.0, 460.0, &metrics);
    let again = wrap_text(&lines.join("\n"), 14.0, 460.0, &metrics);
    assert_eq!(again, lines);
}

#[test]
fn test_long_word_is_hyphenated() {
    let metrics = FontMetrics::new(1.0, 1.0);
    let lines = wrap_text("abcdefghij", 1.0, 4.0, &metrics);
    assert_eq!(lines, vec!["abc-", "def-", "ghij"]);
}

// ==================== Trim & Empty Tests ====================

#[test]
fn test_blank_artwork_is_empty_content() {
    let art = AsciiArtwork::from_rows(vec!["     ".to_string(), "   ".to_string()]);
    let err = solve_layout(
        LayoutContent::Artwork(&art),
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
        " \n\t ",
        TextAlign::Center,
        ScaleSelector::midpoint(),
        &PrintCanvas::export(),
        SizingMode::ExplicitScale,
        &FontMetrics::TEXT,
    )
    .unwrap_err();
    assert_eq!(err, LayoutError::EmptyContent);
}

#[test]
fn test_trim_is_idempotent() {
    let art = AsciiArtwork::from_text("      \n  @#  \n   %  \n      ");
    let (once, bounds) = art.trim();
    let (twice, again) = once.trim();
    assert_eq!(once, twice);
    assert_eq!((bounds.top, bounds.left, bounds.rows, bounds.columns), (1, 2, 2, 2));
    assert_eq!((again.top, again.left), (0, 0));
}

#[test]
fn test_margins_do_not_change_layout() {
    let canvas = PrintCanvas::export();
    let solve = |art: &AsciiArtwork| {
        solve_artwork(
            art,
            ScaleSelector::midpoint(),
            &canvas,
            SizingMode::FitToCanvas,
            &FontMetrics::ARTWORK,
        )
        .unwrap()
    };
    let bare = solve(&AsciiArtwork::from_text("@#\n#@"));
    let padded = solve(&AsciiArtwork::from_text("      \n  @#  \n  #@  \n      "));
    assert_eq!(bare.font_size, padded.font_size);
    assert_eq!(bare.lines, padded.lines);
}

// ==================== Text Layout Tests ====================

#[test]
fn test_text_lines_respect_alignment_and_padding() {
    let canvas = PrintCanvas::export();
    let padding = TEXT_PADDING * canvas.unit_scale();
    for align in [TextAlign::Left, TextAlign::Center, TextAlign::Right] {
        let layout = solve_text(
            "HELLO WORLD THIS WRAPS ACROSS LINES",
            align,
            ScaleSelector::midpoint(),
            &canvas,
            SizingMode::ExplicitScale,
            &FontMetrics::TEXT,
        )
        .unwrap();
        for line in &layout.lines {
            assert!(line.x >= padding - 1e-2);
            assert!(line.x + line.width <= canvas.width - padding + 1e-2);
        }
        let top = layout.lines[0].y;
        let bottom = canvas.height - (top + layout.content_height);
        assert!((top - bottom).abs() < 1e-1, "vertically centred");
    }
}

// ==================== Parity Tests ====================

#[test]
fn test_preview_matches_export_proportionally() {
    let preview = PrintCanvas::preview(460.0, 579.0);
    let export = PrintCanvas::export();
    let ratio = export.width / preview.width;
    for content in [
        LayoutContent::Artwork(&block(33, 17)),
        LayoutContent::Text {
            text: "the quick brown fox jumps over the lazy dog",
            align: TextAlign::Right,
        },
    ] {
        let small = solve_layout(content, ScaleSelector::new(3.0), &preview, SizingMode::ExplicitScale, &FontMetrics::TEXT).unwrap();
        let large = solve_layout(content, ScaleSelector::new(3.0), &export, SizingMode::ExplicitScale, &FontMetrics::TEXT).unwrap();
        assert!(((small.font_size * ratio) / large.font_size - 1.0).abs() < 1e-3);
        assert_eq!(small.row_count(), large.row_count());
        for (a, b) in small.lines.iter().zip(&large.lines) {
            assert_eq!(a.text, b.text);
            assert!((a.x * ratio - b.x).abs() < 0.5);
        }
    }
}

#[test]
fn test_overlay_sits_in_its_band() {
    let canvas = PrintCanvas::export();
    let overlay = TextOverlay {
        text: "LIMITED EDITION".to_string(),
        band: Band::Top,
        align: TextAlign::Center,
        background: OverlayBackground::Solid,
        sizing: OverlaySizing::FitToBox,
    };
    let layout = composite_overlay(&overlay, &canvas, &FontMetrics::TEXT).unwrap();
    assert_eq!(layout.band, Band::Top.calculate_rect(&canvas));
    assert!(layout.fill.is_some());
    for line in &layout.text.lines {
        assert!(line.y >= layout.band.y - 1e-2);
        assert!(line.y + layout.text.line_height <= layout.band.bottom() + 1e-2);
    }
}
