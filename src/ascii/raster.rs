//! Decoded source images.

use std::path::Path;

use image::{imageops::FilterType, DynamicImage, RgbaImage};

use super::error::SampleError;

/// Default cap on the longest side of an uploaded image before sampling.
///
/// Only bounds memory; sampling output never depends on it for images that
/// are already smaller.
pub const DEFAULT_MAX_SOURCE_DIMENSION: u32 = 2048;

/// An immutable RGBA raster with positive width and height.
#[derive(Debug, Clone, PartialEq)]
pub struct RasterImage {
    pixels: RgbaImage,
}

impl RasterImage {
    /// Wrap an RGBA8 buffer (4 bytes per pixel, row-major).
    pub fn from_rgba(width: u32, height: u32, data: Vec<u8>) -> Result<Self, SampleError> {
        check_dimensions(width, height)?;
        let expected = width as usize * height as usize * 4;
        let actual = data.len();
        let pixels =
            RgbaImage::from_raw(width, height, data).ok_or(SampleError::BufferSize { expected, actual })?;
        Ok(Self { pixels })
    }

    /// Wrap an RGB8 buffer (3 bytes per pixel, row-major). Alpha is set opaque.
    pub fn from_rgb(width: u32, height: u32, data: &[u8]) -> Result<Self, SampleError> {
        check_dimensions(width, height)?;
        let expected = width as usize * height as usize * 3;
        if data.len() != expected {
            return Err(SampleError::BufferSize {
                expected,
                actual: data.len(),
            });
        }
        let mut rgba = Vec::with_capacity(width as usize * height as usize * 4);
        for rgb in data.chunks_exact(3) {
            rgba.extend_from_slice(&[rgb[0], rgb[1], rgb[2], 255]);
        }
        Self::from_rgba(width, height, rgba)
    }

    /// Build a single-colour image. Handy for previews and tests.
    pub fn solid(width: u32, height: u32, rgb: [u8; 3]) -> Result<Self, SampleError> {
        check_dimensions(width, height)?;
        let pixels = RgbaImage::from_pixel(width, height, image::Rgba([rgb[0], rgb[1], rgb[2], 255]));
        Ok(Self { pixels })
    }

    /// Decode an encoded upload (PNG, JPEG, WEBP, GIF, BMP).
    pub fn decode(bytes: &[u8]) -> Result<Self, SampleError> {
        let decoded = image::load_from_memory(bytes)?;
        Self::from_dynamic(decoded)
    }

    pub fn from_dynamic(image: DynamicImage) -> Result<Self, SampleError> {
        check_dimensions(image.width(), image.height())?;
        Ok(Self {
            pixels: image.to_rgba8(),
        })
    }

    pub fn width(&self) -> u32 {
        self.pixels.width()
    }

    pub fn height(&self) -> u32 {
        self.pixels.height()
    }

    /// RGBA sample at (x, y). Caller keeps coordinates in bounds.
    #[inline]
    pub fn pixel(&self, x: u32, y: u32) -> [u8; 4] {
        self.pixels.get_pixel(x, y).0
    }

    pub fn as_rgba(&self) -> &RgbaImage {
        &self.pixels
    }

    /// Shrink the image so its longest side is at most `max_dimension`.
    ///
    /// Images already within the cap are returned unchanged.
    pub fn downscale_to_fit(&self, max_dimension: u32) -> Self {
        let (width, height) = (self.width(), self.height());
        let longest = width.max(height);
        if max_dimension == 0 || longest <= max_dimension {
            return self.clone();
        }

        let scale = max_dimension as f64 / longest as f64;
        let new_width = ((width as f64 * scale).round() as u32).max(1);
        let new_height = ((height as f64 * scale).round() as u32).max(1);
        log::debug!(
            "Downscaling source image {}x{} -> {}x{}",
            width,
            height,
            new_width,
            new_height
        );

        Self {
            pixels: image::imageops::resize(&self.pixels, new_width, new_height, FilterType::Triangle),
        }
    }
}

fn check_dimensions(width: u32, height: u32) -> Result<(), SampleError> {
    if width == 0 || height == 0 {
        return Err(SampleError::InvalidDimension { width, height });
    }
    Ok(())
}

/// Read and decode an uploaded image file.
pub async fn load_image(path: &Path) -> Result<RasterImage, SampleError> {
    let bytes = tokio::fs::read(path).await.map_err(|source| SampleError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    log::debug!("Read {} bytes from {}", bytes.len(), path.display());
    RasterImage::decode(&bytes)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_zero_width_is_rejected() {
        let err = RasterImage::from_rgba(0, 4, vec![]).unwrap_err();
        assert!(matches!(
            err,
            SampleError::InvalidDimension { width: 0, height: 4 }
        ));
        assert!(err.needs_reupload());
    }

    #[test]
    fn test_short_buffer_is_rejected() {
        let err = RasterImage::from_rgba(2, 2, vec![0; 15]).unwrap_err();
        assert!(matches!(
            err,
            SampleError::BufferSize {
                expected: 16,
                actual: 15
            }
        ));
    }

    #[test]
    fn test_from_rgb_sets_opaque_alpha() {
        let img = RasterImage::from_rgb(1, 1, &[10, 20, 30]).unwrap();
        assert_eq!(img.pixel(0, 0), [10, 20, 30, 255]);
    }

    #[test]
    fn test_garbage_bytes_fail_to_decode() {
        let err = RasterImage::decode(b"definitely not an image").unwrap_err();
        assert!(matches!(err, SampleError::ImageDecode(_)));
    }

    #[test]
    fn test_downscale_keeps_aspect() {
        let img = RasterImage::solid(400, 200, [0, 0, 0]).unwrap();
        let small = img.downscale_to_fit(100);
        assert_eq!((small.width(), small.height()), (100, 50));
        let same = img.downscale_to_fit(1000);
        assert_eq!((same.width(), same.height()), (400, 200));
    }

    #[tokio::test]
    async fn test_load_missing_file_is_io_error() {
        let err = load_image(Path::new("/nonexistent/upload.png")).await.unwrap_err();
        assert!(matches!(err, SampleError::Io { .. }));
        assert!(!err.needs_reupload());
    }
}
