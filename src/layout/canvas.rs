//! Print canvas geometry.

/// Print area width at 300 DPI, in canvas units.
pub const PRINT_WIDTH: f32 = 4606.0;

/// Print area height at 300 DPI, in canvas units.
pub const PRINT_HEIGHT: f32 = 5787.0;

/// Canvas width that layout constants are expressed against.
///
/// Paddings, floors and search steps are defined on a canvas this wide and
/// scaled to the actual canvas, which keeps preview and export identical up
/// to a uniform factor.
pub const REFERENCE_CANVAS_WIDTH: f32 = 460.0;

/// Axis-aligned rectangle in canvas units.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Rect {
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
}

impl Rect {
    pub fn new(x: f32, y: f32, width: f32, height: f32) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    pub fn right(&self) -> f32 {
        self.x + self.width
    }

    pub fn bottom(&self) -> f32 {
        self.y + self.height
    }

    /// Grow the rectangle by `margin` on every side.
    pub fn inflate(&self, margin: f32) -> Self {
        Self {
            x: self.x - margin,
            y: self.y - margin,
            width: self.width + margin * 2.0,
            height: self.height + margin * 2.0,
        }
    }
}

/// Fixed target region a design is laid out in.
///
/// Preview and export canvases share the print aspect ratio and differ only
/// in absolute size.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PrintCanvas {
    pub width: f32,
    pub height: f32,
}

impl Default for PrintCanvas {
    fn default() -> Self {
        Self::export()
    }
}

impl PrintCanvas {
    /// Full-resolution print canvas.
    pub fn export() -> Self {
        Self {
            width: PRINT_WIDTH,
            height: PRINT_HEIGHT,
        }
    }

    /// Print-ratio canvas `width` units wide.
    pub fn with_width(width: f32) -> Self {
        Self {
            width,
            height: width / Self::aspect_ratio(),
        }
    }

    /// Largest print-ratio canvas that fits inside `max_width x max_height`.
    pub fn preview(max_width: f32, max_height: f32) -> Self {
        let by_width = Self::with_width(max_width);
        if by_width.height <= max_height {
            by_width
        } else {
            Self {
                width: max_height * Self::aspect_ratio(),
                height: max_height,
            }
        }
    }

    /// Width over height of the print area.
    pub fn aspect_ratio() -> f32 {
        PRINT_WIDTH / PRINT_HEIGHT
    }

    /// Multiplier from reference units to this canvas's units.
    pub fn unit_scale(&self) -> f32 {
        self.width / REFERENCE_CANVAS_WIDTH
    }

    pub fn rect(&self) -> Rect {
        Rect::new(0.0, 0.0, self.width, self.height)
    }

    /// Whole-pixel size for raster output.
    pub fn pixel_size(&self) -> (u32, u32) {
        (
            self.width.round().max(1.0) as u32,
            self.height.round().max(1.0) as u32,
        )
    }
}
