//! Vertical bands an overlay can occupy.

use crate::layout::{PrintCanvas, Rect};

/// Share of canvas height covered by an overlay band.
pub const BAND_HEIGHT_RATIO: f32 = 0.2;

/// Where the overlay band sits on the canvas.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Hash)]
pub enum Band {
    /// Band starts at the canvas top.
    Top,
    /// Band is vertically centred.
    Middle,
    /// Band ends at the canvas bottom.
    #[default]
    Bottom,
}

impl Band {
    /// Calculate the band rectangle on a canvas.
    ///
    /// The band spans the full canvas width; its height is a fixed share of
    /// the canvas height.
    pub fn calculate_rect(&self, canvas: &PrintCanvas) -> Rect {
        let height = canvas.height * BAND_HEIGHT_RATIO;
        let y = match self {
            Band::Top => 0.0,
            Band::Middle => (canvas.height - height) / 2.0,
            Band::Bottom => canvas.height - height,
        };
        Rect::new(0.0, y, canvas.width, height)
    }

    pub fn name(&self) -> &'static str {
        match self {
            Band::Top => "top",
            Band::Middle => "middle",
            Band::Bottom => "bottom",
        }
    }
}
