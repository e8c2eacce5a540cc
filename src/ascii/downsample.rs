//! Area-average resampling from source pixels to the sample grid.

use super::raster::RasterImage;

/// Average colour of one sample cell.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CellColor {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

/// Resample an image to a `grid_width x grid_height` grid of cell colours.
///
/// Each cell's colour is the average of every source pixel that falls in
/// its area. The grid must not be larger than the image in either
/// direction, so every cell covers at least one pixel.
///
/// # Returns
/// Row-major cell colours, `grid_width * grid_height` long. Empty for a
/// degenerate grid.
pub fn downsample(image: &RasterImage, grid_width: u32, grid_height: u32) -> Vec<CellColor> {
    let img_width = image.width();
    let img_height = image.height();

    if grid_width == 0 || grid_height == 0 {
        return Vec::new();
    }

    let cell_w = img_width as f64 / grid_width as f64;
    let cell_h = img_height as f64 / grid_height as f64;

    let mut result = Vec::with_capacity(grid_width as usize * grid_height as usize);

    for cy in 0..grid_height {
        let start_y = (cy as f64 * cell_h) as u32;
        let end_y = (((cy + 1) as f64 * cell_h) as u32).clamp(start_y + 1, img_height);

        for cx in 0..grid_width {
            let start_x = (cx as f64 * cell_w) as u32;
            let end_x = (((cx + 1) as f64 * cell_w) as u32).clamp(start_x + 1, img_width);

            let mut sum_r = 0u64;
            let mut sum_g = 0u64;
            let mut sum_b = 0u64;
            let mut count = 0u64;

            for py in start_y..end_y {
                for px in start_x..end_x {
                    let [r, g, b, _] = image.pixel(px, py);
                    sum_r += r as u64;
                    sum_g += g as u64;
                    sum_b += b as u64;
                    count += 1;
                }
            }

            result.push(if count > 0 {
                CellColor {
                    r: (sum_r / count) as u8,
                    g: (sum_g / count) as u8,
                    b: (sum_b / count) as u8,
                }
            } else {
                CellColor::default()
            });
        }
    }

    result
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_identity_grid_copies_pixels() {
        let img = RasterImage::from_rgb(2, 1, &[10, 20, 30, 40, 50, 60]).unwrap();
        let cells = downsample(&img, 2, 1);
        assert_eq!(
            cells,
            vec![
                CellColor { r: 10, g: 20, b: 30 },
                CellColor { r: 40, g: 50, b: 60 }
            ]
        );
    }

    #[test]
    fn test_cells_average_their_area() {
        // Left half black, right half white, 4x2 -> 2x1
        let mut data = Vec::new();
        for _y in 0..2 {
            data.extend_from_slice(&[0, 0, 0, 0, 0, 0, 255, 255, 255, 255, 255, 255]);
        }
        let img = RasterImage::from_rgb(4, 2, &data).unwrap();
        let cells = downsample(&img, 2, 1);
        assert_eq!(cells[0], CellColor { r: 0, g: 0, b: 0 });
        assert_eq!(cells[1], CellColor { r: 255, g: 255, b: 255 });
    }

    #[test]
    fn test_uneven_division_covers_every_cell() {
        let img = RasterImage::solid(7, 5, [100, 100, 100]).unwrap();
        let cells = downsample(&img, 3, 2);
        assert_eq!(cells.len(), 6);
        assert!(cells.iter().all(|c| *c == CellColor { r: 100, g: 100, b: 100 }));
    }

    #[test]
    fn test_empty_grid() {
        let img = RasterImage::solid(4, 4, [0, 0, 0]).unwrap();
        assert!(downsample(&img, 0, 4).is_empty());
    }
}
