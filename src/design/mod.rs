//! Explicit design configuration and the pipeline entry points.
//!
//! A [`Design`] carries every choice that affects output. Each pipeline call
//! takes one by reference and holds no state of its own, so preview and
//! export are the same computation on different canvases.

mod options;
mod order;

pub use options::{DesignMode, Placement, ShirtColor, ShirtSize, TextFont};
pub use order::{artifact_digest, OrderMetadata};

use image::RgbaImage;

use crate::ascii::AsciiArtwork;
use crate::layout::{
    solve_layout, FontMetrics, LayoutContent, LayoutError, LayoutResult, PrintCanvas,
    ScaleSelector, SizingMode, TextAlign,
};
use crate::overlay::{composite_overlay, OverlayLayout, TextOverlay};
use crate::palette::Palette;
use crate::render::{
    compose_on_mockup, encode_png, render_raster, render_svg, BlockGlyphs, Colors, GlyphSource,
    RasterOptions, RenderError, SvgOptions, Viewport,
};

/// Errors from laying out or rendering a design.
#[derive(Debug, thiserror::Error)]
pub enum DesignError {
    #[error(transparent)]
    Layout(#[from] LayoutError),

    #[error(transparent)]
    Render(#[from] RenderError),
}

impl DesignError {
    /// Nothing to draw yet; callers show a placeholder instead of failing.
    pub fn is_empty_content(&self) -> bool {
        matches!(self, DesignError::Layout(LayoutError::EmptyContent))
    }
}

/// Glyph proportions used by the solver, adjustable per rendering font.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LayoutTunables {
    pub artwork: FontMetrics,
    pub text_line_height_ratio: f32,
}

impl Default for LayoutTunables {
    fn default() -> Self {
        Self {
            artwork: FontMetrics::ARTWORK,
            text_line_height_ratio: FontMetrics::TEXT.line_height_ratio,
        }
    }
}

/// Everything that determines one design's output.
#[derive(Debug, Clone, PartialEq)]
pub struct Design {
    pub mode: DesignMode,
    pub shirt_color: ShirtColor,
    pub placement: Placement,
    pub size: ShirtSize,
    pub text: String,
    pub font: TextFont,
    pub align: TextAlign,
    pub artwork: AsciiArtwork,
    /// Palette the artwork was sampled with; supplies its display font.
    pub palette: Palette,
    pub scale: ScaleSelector,
    pub sizing: SizingMode,
    pub overlay: Option<TextOverlay>,
    pub tunables: LayoutTunables,
}

impl Default for Design {
    fn default() -> Self {
        Self {
            mode: DesignMode::default(),
            shirt_color: ShirtColor::default(),
            placement: Placement::default(),
            size: ShirtSize::default(),
            text: String::new(),
            font: TextFont::default(),
            align: TextAlign::default(),
            artwork: AsciiArtwork::default(),
            palette: Palette::default(),
            scale: ScaleSelector::midpoint(),
            sizing: SizingMode::ExplicitScale,
            overlay: None,
            tunables: LayoutTunables::default(),
        }
    }
}

impl Design {
    pub fn text(text: impl Into<String>) -> Self {
        Self {
            mode: DesignMode::Text,
            text: text.into(),
            ..Self::default()
        }
    }

    pub fn ascii(artwork: AsciiArtwork, palette: Palette) -> Self {
        Self {
            mode: DesignMode::Ascii,
            artwork,
            palette,
            ..Self::default()
        }
    }

    pub fn content(&self) -> LayoutContent<'_> {
        match self.mode {
            DesignMode::Ascii => LayoutContent::Artwork(&self.artwork),
            DesignMode::Text => LayoutContent::Text {
                text: &self.text,
                align: self.align,
            },
        }
    }

    pub fn metrics(&self) -> FontMetrics {
        match self.mode {
            DesignMode::Ascii => self.tunables.artwork,
            DesignMode::Text => self.font.metrics(self.tunables.text_line_height_ratio),
        }
    }

    /// Overlay text shares the content's glyph width with text line spacing.
    pub fn overlay_metrics(&self) -> FontMetrics {
        FontMetrics::new(
            self.metrics().advance_ratio,
            self.tunables.text_line_height_ratio,
        )
    }

    pub fn font_family(&self) -> &'static str {
        match self.mode {
            DesignMode::Ascii => self.palette.font_family(),
            DesignMode::Text => self.font.family(),
        }
    }

    pub fn colors(&self) -> Colors {
        self.shirt_color.colors()
    }

    /// Font-free glyphs matching this design's advance.
    pub fn block_glyphs(&self) -> BlockGlyphs {
        BlockGlyphs {
            advance_ratio: self.metrics().advance_ratio,
        }
    }

    /// Lay out content and overlay on `canvas`.
    ///
    /// A blank overlay is dropped; blank content is `EmptyContent`.
    pub fn solve(&self, canvas: &PrintCanvas) -> Result<DesignLayout, LayoutError> {
        let content = solve_layout(
            self.content(),
            self.scale,
            canvas,
            self.sizing,
            &self.metrics(),
        )?;
        let overlay = match &self.overlay {
            Some(overlay) if !overlay.text.trim().is_empty() => {
                Some(composite_overlay(overlay, canvas, &self.overlay_metrics())?)
            }
            _ => None,
        };
        log::debug!(
            "Solved {} design on {}x{} canvas: font {:.2}, {} rows, overlay {}",
            self.mode.name(),
            canvas.width,
            canvas.height,
            content.font_size,
            content.row_count(),
            overlay.is_some()
        );
        Ok(DesignLayout { content, overlay })
    }
}

/// Solved content plus optional overlay.
#[derive(Debug, Clone, PartialEq)]
pub struct DesignLayout {
    pub content: LayoutResult,
    pub overlay: Option<OverlayLayout>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Hash)]
pub enum ArtifactFormat {
    #[default]
    Svg,
    Png,
}

impl ArtifactFormat {
    pub fn extension(&self) -> &'static str {
        match self {
            ArtifactFormat::Svg => "svg",
            ArtifactFormat::Png => "png",
        }
    }
}

/// Where a render is headed.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum RenderTarget {
    /// On-screen proxy, bounded by a maximum size, drawn on the shirt colour.
    Preview { max_width: f32, max_height: f32 },
    /// Full print resolution with a transparent background.
    Export,
}

impl RenderTarget {
    pub fn canvas(&self) -> PrintCanvas {
        match *self {
            RenderTarget::Preview {
                max_width,
                max_height,
            } => PrintCanvas::preview(max_width, max_height),
            RenderTarget::Export => PrintCanvas::export(),
        }
    }

    pub fn include_background(&self) -> bool {
        matches!(self, RenderTarget::Preview { .. })
    }
}

/// A rendered design.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Artifact {
    Svg(String),
    Png(Vec<u8>),
}

impl Artifact {
    pub fn format(&self) -> ArtifactFormat {
        match self {
            Artifact::Svg(_) => ArtifactFormat::Svg,
            Artifact::Png(_) => ArtifactFormat::Png,
        }
    }

    pub fn as_bytes(&self) -> &[u8] {
        match self {
            Artifact::Svg(markup) => markup.as_bytes(),
            Artifact::Png(bytes) => bytes,
        }
    }
}

/// Render a design for `target`.
///
/// `viewport` rescales the output without changing the layout.
pub fn render(
    design: &Design,
    target: RenderTarget,
    format: ArtifactFormat,
    viewport: Option<Viewport>,
    glyphs: &dyn GlyphSource,
) -> Result<Artifact, DesignError> {
    let layout = design.solve(&target.canvas())?;
    let colors = design.colors();
    let include_background = target.include_background();

    let artifact = match format {
        ArtifactFormat::Svg => Artifact::Svg(render_svg(
            &layout.content,
            layout.overlay.as_ref(),
            &colors,
            &SvgOptions {
                include_background,
                font_family: design.font_family().to_string(),
                viewport,
            },
        )),
        ArtifactFormat::Png => {
            let image = render_raster(
                &layout.content,
                layout.overlay.as_ref(),
                &colors,
                &RasterOptions {
                    include_background,
                    viewport,
                },
                glyphs,
            );
            Artifact::Png(encode_png(&image)?)
        }
    };
    Ok(artifact)
}

/// Print-ready artifact and the order fields describing it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Export {
    pub artifact: Artifact,
    pub metadata: OrderMetadata,
}

/// Render the full-resolution print artifact and its order metadata.
pub fn export(
    design: &Design,
    format: ArtifactFormat,
    glyphs: &dyn GlyphSource,
) -> Result<Export, DesignError> {
    let target = RenderTarget::Export;
    let artifact = render(design, target, format, None, glyphs)?;
    let (width, height) = target.canvas().pixel_size();
    let metadata = OrderMetadata {
        shirt_color: design.shirt_color,
        size: design.size,
        mode: design.mode,
        placement: design.placement,
        artifact_sha256: artifact_digest(artifact.as_bytes()),
        width,
        height,
    };
    log::info!(
        "Exported {}x{} {} artifact ({} bytes)",
        width,
        height,
        format.extension(),
        artifact.as_bytes().len()
    );
    Ok(Export { artifact, metadata })
}

/// Draw a preview of the design onto a shirt mockup photo.
pub fn preview_on_mockup(
    design: &Design,
    mockup: &RgbaImage,
    glyphs: &dyn GlyphSource,
) -> Result<RgbaImage, DesignError> {
    let region = design.placement.mockup_region();
    let (_, _, width, height) = region.pixels(mockup.width(), mockup.height());
    let layout = design.solve(&PrintCanvas::preview(width as f32, height as f32))?;
    let rendered = render_raster(
        &layout.content,
        layout.overlay.as_ref(),
        &design.colors(),
        &RasterOptions {
            include_background: false,
            viewport: None,
        },
        glyphs,
    );
    Ok(compose_on_mockup(
        mockup,
        &rendered,
        region,
        design.shirt_color == ShirtColor::Black,
    ))
}
