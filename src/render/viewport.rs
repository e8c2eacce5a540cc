//! Uniform canvas-to-viewport scaling.

use crate::layout::PrintCanvas;

/// On-screen target size for a rendered canvas.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Viewport {
    pub width: f32,
    pub height: f32,
}

impl Viewport {
    pub fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }

    /// Whole-pixel size for raster output.
    pub fn pixel_size(&self) -> (u32, u32) {
        (
            self.width.round().max(1.0) as u32,
            self.height.round().max(1.0) as u32,
        )
    }
}

/// Maps canvas units to viewport units.
///
/// The canvas is scaled uniformly to fit inside the viewport and centred on
/// the free axis, like SVG's `xMidYMid meet`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ViewTransform {
    pub scale: f32,
    pub offset_x: f32,
    pub offset_y: f32,
}

impl ViewTransform {
    pub const IDENTITY: ViewTransform = ViewTransform {
        scale: 1.0,
        offset_x: 0.0,
        offset_y: 0.0,
    };

    pub fn fit(canvas: &PrintCanvas, viewport: &Viewport) -> Self {
        let scale = (viewport.width / canvas.width).min(viewport.height / canvas.height);
        Self {
            scale,
            offset_x: (viewport.width - canvas.width * scale) / 2.0,
            offset_y: (viewport.height - canvas.height * scale) / 2.0,
        }
    }

    #[inline]
    pub fn x(&self, x: f32) -> f32 {
        x * self.scale + self.offset_x
    }

    #[inline]
    pub fn y(&self, y: f32) -> f32 {
        y * self.scale + self.offset_y
    }

    #[inline]
    pub fn extent(&self, length: f32) -> f32 {
        length * self.scale
    }
}
