//! Shirt mockup composition.

use image::imageops::{self, FilterType};
use image::RgbaImage;

/// Print region on a mockup, as fractions of the mockup size.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MockupRegion {
    pub left: f32,
    pub top: f32,
    pub width: f32,
    pub height: f32,
}

impl MockupRegion {
    pub const FRONT: MockupRegion = MockupRegion {
        left: 0.275,
        top: 0.20,
        width: 0.45,
        height: 0.55,
    };

    pub const BACK: MockupRegion = MockupRegion {
        left: 0.275,
        top: 0.18,
        width: 0.45,
        height: 0.55,
    };

    /// Region in mockup pixels as `(x, y, width, height)`.
    pub fn pixels(&self, mockup_width: u32, mockup_height: u32) -> (u32, u32, u32, u32) {
        let (mw, mh) = (mockup_width as f32, mockup_height as f32);
        (
            (mw * self.left).round() as u32,
            (mh * self.top).round() as u32,
            (mw * self.width).round().max(1.0) as u32,
            (mh * self.height).round().max(1.0) as u32,
        )
    }
}

/// Draw `design` onto a copy of `mockup` inside `region`.
///
/// The design is scaled uniformly with nearest-neighbour sampling to fit the
/// region, centred horizontally and anchored to the region's top edge, then
/// alpha-blended. `invert_mockup` inverts the shirt photo first (black shirts
/// reuse the white mockup).
pub fn compose_on_mockup(
    mockup: &RgbaImage,
    design: &RgbaImage,
    region: MockupRegion,
    invert_mockup: bool,
) -> RgbaImage {
    let mut shirt = mockup.clone();
    if invert_mockup {
        imageops::invert(&mut shirt);
    }
    if design.width() == 0 || design.height() == 0 {
        return shirt;
    }

    let (rx, ry, rw, rh) = region.pixels(shirt.width(), shirt.height());
    let scale = (rw as f32 / design.width() as f32).min(rh as f32 / design.height() as f32);
    let dw = (design.width() as f32 * scale).round().max(1.0) as u32;
    let dh = (design.height() as f32 * scale).round().max(1.0) as u32;
    let scaled = imageops::resize(design, dw, dh, FilterType::Nearest);

    let x = rx as i64 + (rw as i64 - dw as i64) / 2;
    imageops::overlay(&mut shirt, &scaled, x, ry as i64);
    log::debug!("Composed {}x{} design at ({}, {}) on mockup", dw, dh, x, ry);
    shirt
}
