//! Sample grid dimensions.

/// Default bound on the number of character columns.
pub const DEFAULT_MAX_SAMPLE_WIDTH: u32 = 120;

/// Default vertical stride between emitted sample rows.
///
/// Glyphs are roughly twice as tall as they are wide, so emitting every
/// other resampled row gives approximately square visual cells. Tune this
/// together with the layout's advance and line-height ratios.
pub const DEFAULT_ROW_STRIDE: u32 = 2;

/// Calculate the resample grid for an image.
///
/// The grid is at most `max_sample_width` columns wide and never wider than
/// the image itself. Height follows the image aspect ratio, rounded down,
/// and is kept at one row minimum so very wide images still sample.
///
/// # Returns
/// `(sample_width, sample_height)`, or `(0, 0)` for degenerate input.
pub fn sample_grid(img_width: u32, img_height: u32, max_sample_width: u32) -> (u32, u32) {
    if img_width == 0 || img_height == 0 || max_sample_width == 0 {
        return (0, 0);
    }

    let sample_width = max_sample_width.min(img_width);
    let sample_height = (sample_width as u64 * img_height as u64 / img_width as u64) as u32;

    (sample_width, sample_height.max(1))
}

/// Number of rows emitted when every `stride`-th row of a grid is kept.
pub fn emitted_rows(sample_height: u32, stride: u32) -> u32 {
    let stride = stride.max(1);
    sample_height.div_ceil(stride)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_small_image_is_not_upsampled() {
        assert_eq!(sample_grid(40, 30, 120), (40, 30));
    }

    #[test]
    fn test_large_image_is_capped() {
        // 640x480 -> 120 wide, 120 * 480 / 640 = 90 tall
        assert_eq!(sample_grid(640, 480, 120), (120, 90));
    }

    #[test]
    fn test_height_rounds_down() {
        // 120 * 100 / 333 = 36.03
        assert_eq!(sample_grid(333, 100, 120), (120, 36));
    }

    #[test]
    fn test_very_wide_image_keeps_one_row() {
        assert_eq!(sample_grid(1000, 1, 120), (120, 1));
    }

    #[test]
    fn test_degenerate_input() {
        assert_eq!(sample_grid(0, 10, 120), (0, 0));
        assert_eq!(sample_grid(10, 10, 0), (0, 0));
    }

    #[test]
    fn test_emitted_rows() {
        assert_eq!(emitted_rows(90, 2), 45);
        assert_eq!(emitted_rows(5, 2), 3);
        assert_eq!(emitted_rows(1, 2), 1);
        assert_eq!(emitted_rows(7, 0), 7);
    }
}
