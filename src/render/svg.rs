//! Vector backend: standalone SVG documents.
//!
//! The document's `viewBox` is the print canvas, so the same layout can be
//! shown at any size by changing only the outer `width`/`height`.

use crate::layout::{LayoutResult, PrintCanvas};
use crate::overlay::OverlayLayout;

use super::color::{Colors, Rgb};
use super::viewport::Viewport;

/// Options for one SVG document.
#[derive(Debug, Clone, PartialEq)]
pub struct SvgOptions {
    /// Paint the canvas background. Off for artifacts laid over a mockup.
    pub include_background: bool,
    /// CSS font-family list for glyph rows.
    pub font_family: String,
    /// Outer document size; the canvas size when `None`.
    pub viewport: Option<Viewport>,
}

impl Default for SvgOptions {
    fn default() -> Self {
        Self {
            include_background: true,
            font_family: "monospace".to_string(),
            viewport: None,
        }
    }
}

/// Incrementally built SVG document over a print canvas.
pub struct SvgDocument {
    canvas: PrintCanvas,
    body: String,
    viewport: Option<Viewport>,
}

impl SvgDocument {
    pub fn new(canvas: PrintCanvas, viewport: Option<Viewport>) -> Self {
        Self {
            canvas,
            body: String::new(),
            viewport,
        }
    }

    /// Fill the whole canvas.
    pub fn background(&mut self, color: Rgb) -> &mut Self {
        self.body.push_str(&format!(
            r#"<rect x="0" y="0" width="{}" height="{}" fill="{}"/>"#,
            num(self.canvas.width),
            num(self.canvas.height),
            color
        ));
        self
    }

    /// One `<text>` element per laid-out row, in a single group.
    pub fn text_layer(&mut self, layout: &LayoutResult, color: Rgb, font_family: &str) -> &mut Self {
        self.body.push_str(&format!(
            r#"<g font-family="{}" font-size="{}" fill="{}" xml:space="preserve">"#,
            escape_xml(font_family),
            num(layout.font_size),
            color
        ));
        for line in layout.lines.iter().filter(|l| !l.text.is_empty()) {
            self.body.push_str(&format!(
                r#"<text x="{}" y="{}" textLength="{}" lengthAdjust="spacing">{}</text>"#,
                num(line.x),
                num(line.baseline),
                num(line.width),
                escape_xml(&line.text)
            ));
        }
        self.body.push_str("</g>");
        self
    }

    /// Overlay band fill (if any) followed by its text.
    pub fn overlay_layer(
        &mut self,
        overlay: &OverlayLayout,
        colors: &Colors,
        font_family: &str,
    ) -> &mut Self {
        if let Some(fill) = overlay.fill {
            self.body.push_str(&format!(
                r#"<rect x="{}" y="{}" width="{}" height="{}" fill="{}"/>"#,
                num(fill.x),
                num(fill.y),
                num(fill.width),
                num(fill.height),
                colors.background
            ));
        }
        self.text_layer(&overlay.text, colors.foreground, font_family)
    }

    /// Serialize as a standalone document.
    pub fn finish(&self) -> String {
        let (width, height) = match self.viewport {
            Some(v) => (v.width, v.height),
            None => (self.canvas.width, self.canvas.height),
        };
        let mut out = String::with_capacity(self.body.len() + 256);
        out.push_str(r#"<?xml version="1.0" encoding="UTF-8"?>"#);
        out.push('\n');
        out.push_str(&format!(
            r#"<svg xmlns="http://www.w3.org/2000/svg" width="{}" height="{}" viewBox="0 0 {} {}" preserveAspectRatio="xMidYMid meet">"#,
            num(width),
            num(height),
            num(self.canvas.width),
            num(self.canvas.height)
        ));
        out.push_str(&self.body);
        out.push_str("</svg>\n");
        out
    }
}

/// Render a layout, plus an optional overlay, to an SVG document.
pub fn render_svg(
    layout: &LayoutResult,
    overlay: Option<&OverlayLayout>,
    colors: &Colors,
    options: &SvgOptions,
) -> String {
    let mut doc = SvgDocument::new(layout.canvas, options.viewport);
    if options.include_background {
        doc.background(colors.background);
    }
    doc.text_layer(layout, colors.foreground, &options.font_family);
    if let Some(overlay) = overlay {
        doc.overlay_layer(overlay, colors, &options.font_family);
    }
    doc.finish()
}

/// Escape the five XML-reserved characters.
pub fn escape_xml(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for c in s.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&apos;"),
            _ => out.push(c),
        }
    }
    out
}

/// Format a coordinate with at most two decimals and no trailing zeros.
fn num(v: f32) -> String {
    let s = format!("{:.2}", v);
    let s = s.trim_end_matches('0').trim_end_matches('.');
    if s == "-0" {
        "0".to_string()
    } else {
        s.to_string()
    }
}
