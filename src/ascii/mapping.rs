//! Brightness to glyph mapping.

/// Map a brightness value (0-255) to an index into a heaviest-first ramp.
///
/// Brightness is quantised linearly onto the ramp, so black picks the
/// heaviest glyph at index 0 and white picks the lightest glyph at the end.
#[inline]
pub fn glyph_index(brightness: f32, levels: usize) -> usize {
    if levels <= 1 {
        return 0;
    }
    let last = levels - 1;
    let b = brightness.clamp(0.0, 255.0);
    let index = ((b / 255.0) * last as f32).floor() as usize;
    index.min(last)
}

/// Map a brightness value to a glyph of the ramp.
///
/// An empty ramp yields a space.
#[inline]
pub fn map_to_char(brightness: f32, ramp: &[char]) -> char {
    if ramp.is_empty() {
        return ' ';
    }
    ramp[glyph_index(brightness, ramp.len())]
}
