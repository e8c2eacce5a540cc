//! User-facing scale selector.

/// Lowest selectable scale.
pub const SCALE_MIN: f32 = 0.1;

/// Highest selectable scale.
pub const SCALE_MAX: f32 = 10.0;

/// The selector value meaning exactly 100% of the fit font size.
pub const SCALE_MIDPOINT: f32 = 5.0;

/// Multiplier applied to the fit font size, `value / 5.0`.
///
/// Below the midpoint the design shrinks and gains margin; above it the
/// design grows past the canvas and is clipped.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd)]
pub struct ScaleSelector(f32);

impl Default for ScaleSelector {
    fn default() -> Self {
        Self::midpoint()
    }
}

impl ScaleSelector {
    /// Clamp `value` into the selectable range. NaN selects the midpoint.
    pub fn new(value: f32) -> Self {
        if value.is_nan() {
            log::warn!("Scale selector is NaN, using {}", SCALE_MIDPOINT);
            return Self::midpoint();
        }
        let clamped = value.clamp(SCALE_MIN, SCALE_MAX);
        if clamped != value {
            log::warn!(
                "Scale selector {} outside {}..={}, clamped to {}",
                value,
                SCALE_MIN,
                SCALE_MAX,
                clamped
            );
        }
        Self(clamped)
    }

    pub fn midpoint() -> Self {
        Self(SCALE_MIDPOINT)
    }

    pub fn value(&self) -> f32 {
        self.0
    }

    /// Fraction of the fit font size this selector asks for.
    pub fn ratio(&self) -> f32 {
        self.0 / SCALE_MIDPOINT
    }
}
