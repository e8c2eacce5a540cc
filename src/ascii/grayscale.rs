//! Cell brightness.

/// Brightness of an RGB sample as the unweighted mean of its channels.
///
/// Alpha is ignored. Result is on the 0-255 scale.
#[inline]
pub fn brightness(r: u8, g: u8, b: u8) -> f32 {
    (r as f32 + g as f32 + b as f32) / 3.0
}
