//! The [`Raster`] pixel grid and the [`RasterSource`] sampling handle.

use crate::error::RasterError;

/// A read-only raster handle as seen by mesh generation.
///
/// Exposes dimensions and a red-channel byte accessor. The supertrait `Sync`
/// lets generation workers share one raster across row bands without locking
/// (the data is never written during generation).
pub trait RasterSource: Sync {
    /// Width in pixels. Valid rasters are at least one pixel wide.
    fn width(&self) -> u32;
    /// Height in pixels. Valid rasters are at least one pixel tall.
    fn height(&self) -> u32;
    /// Red byte at pixel `(x, y)`, with `(0, 0)` the first pixel of the
    /// first row. Callers must pass in-bounds coordinates.
    fn red(&self, x: u32, y: u32) -> u8;
}

/// An owned, immutable grid of RGB byte triplets, row-major.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Raster {
    width: u32,
    height: u32,
    data: Vec<u8>,
}

impl Raster {
    /// Build a raster from tightly packed RGB8 bytes.
    ///
    /// `data` must hold exactly `width * height * 3` bytes, and both
    /// dimensions must be at least 1.
    pub fn from_rgb8(width: u32, height: u32, data: Vec<u8>) -> Result<Self, RasterError> {
        if width == 0 || height == 0 {
            return Err(RasterError::EmptyDimensions { width, height });
        }
        let expected = width as usize * height as usize * 3;
        if data.len() != expected {
            return Err(RasterError::DataLength {
                expected,
                actual: data.len(),
            });
        }
        Ok(Self {
            width,
            height,
            data,
        })
    }

    /// Width in pixels.
    pub fn width(&self) -> u32 {
        self.width
    }

    /// Height in pixels.
    pub fn height(&self) -> u32 {
        self.height
    }

    /// RGB triplet at pixel `(x, y)`.
    ///
    /// # Panics
    ///
    /// Panics if `(x, y)` is out of bounds.
    pub fn rgb(&self, x: u32, y: u32) -> [u8; 3] {
        assert!(
            x < self.width && y < self.height,
            "pixel ({x}, {y}) out of bounds for {}x{} raster",
            self.width,
            self.height
        );
        let i = (y as usize * self.width as usize + x as usize) * 3;
        [self.data[i], self.data[i + 1], self.data[i + 2]]
    }

    /// Return a copy with rows in reverse order (top row becomes bottom).
    ///
    /// Decoded images usually have row 0 at the top, while the sphere
    /// parametrization walks `v` from the south pole up; flipping once after
    /// decode puts the two in agreement.
    pub fn flip_vertical(&self) -> Raster {
        let row_bytes = self.width as usize * 3;
        let mut data = Vec::with_capacity(self.data.len());
        for row in self.data.chunks_exact(row_bytes).rev() {
            data.extend_from_slice(row);
        }
        Raster {
            width: self.width,
            height: self.height,
            data,
        }
    }

    /// Return a copy with each row's pixels in reverse order.
    pub fn mirror_horizontal(&self) -> Raster {
        let row_bytes = self.width as usize * 3;
        let mut data = Vec::with_capacity(self.data.len());
        for row in self.data.chunks_exact(row_bytes) {
            for pixel in row.chunks_exact(3).rev() {
                data.extend_from_slice(pixel);
            }
        }
        Raster {
            width: self.width,
            height: self.height,
            data,
        }
    }
}

impl RasterSource for Raster {
    fn width(&self) -> u32 {
        self.width
    }

    fn height(&self) -> u32 {
        self.height
    }

    fn red(&self, x: u32, y: u32) -> u8 {
        self.data[(y as usize * self.width as usize + x as usize) * 3]
    }
}

#[cfg(feature = "image")]
impl TryFrom<&image::RgbImage> for Raster {
    type Error = RasterError;

    /// Convert an already-decoded `image::RgbImage` into a [`Raster`].
    fn try_from(img: &image::RgbImage) -> Result<Self, RasterError> {
        Raster::from_rgb8(img.width(), img.height(), img.as_raw().clone())
    }
}

/// Sample the red channel at a normalized UV coordinate.
///
/// Uses the nearest-pixel rule `x = floor((w - 1) * u)`,
/// `y = floor((h - 1) * v)`. Coordinates are clamped into bounds, so values
/// slightly outside `[0, 1]` from floating-point edge effects read the
/// border pixel rather than failing.
pub fn sample_red(source: &dyn RasterSource, u: f64, v: f64) -> u8 {
    let w = source.width();
    let h = source.height();
    let x = (((w - 1) as f64 * u).floor() as i64).clamp(0, (w - 1) as i64) as u32;
    let y = (((h - 1) as f64 * v).floor() as i64).clamp(0, (h - 1) as i64) as u32;
    source.red(x, y)
}

#[cfg(test)]
mod tests {
    use super::*;

    /// 2x2 raster with distinct red values per pixel:
    /// row 0: 10, 20 — row 1: 30, 40.
    fn quad() -> Raster {
        let data = vec![
            10, 0, 0, 20, 0, 0, //
            30, 0, 0, 40, 0, 0,
        ];
        Raster::from_rgb8(2, 2, data).unwrap()
    }

    #[test]
    fn test_construction_rejects_zero_dimensions() {
        let err = Raster::from_rgb8(0, 4, vec![]).unwrap_err();
        assert!(matches!(
            err,
            RasterError::EmptyDimensions {
                width: 0,
                height: 4
            }
        ));
        let err = Raster::from_rgb8(4, 0, vec![]).unwrap_err();
        assert!(matches!(err, RasterError::EmptyDimensions { .. }));
    }

    #[test]
    fn test_construction_rejects_short_buffer() {
        let err = Raster::from_rgb8(2, 2, vec![0; 11]).unwrap_err();
        assert!(matches!(
            err,
            RasterError::DataLength {
                expected: 12,
                actual: 11
            }
        ));
    }

    #[test]
    fn test_red_reads_row_major() {
        let r = quad();
        assert_eq!(r.red(0, 0), 10);
        assert_eq!(r.red(1, 0), 20);
        assert_eq!(r.red(0, 1), 30);
        assert_eq!(r.red(1, 1), 40);
    }

    #[test]
    fn test_rgb_returns_full_triplet() {
        let r = Raster::from_rgb8(1, 1, vec![7, 8, 9]).unwrap();
        assert_eq!(r.rgb(0, 0), [7, 8, 9]);
    }

    #[test]
    fn test_sample_uses_floor_not_round() {
        let r = quad();
        // (w - 1) * u = 0.51 for u just past the midpoint still floors to 0.
        assert_eq!(sample_red(&r, 0.51, 0.0), 10);
        assert_eq!(sample_red(&r, 1.0, 0.0), 20);
    }

    #[test]
    fn test_sample_clamps_out_of_range_uv() {
        let r = quad();
        assert_eq!(sample_red(&r, -0.25, 0.0), 10);
        assert_eq!(sample_red(&r, 1.25, 0.0), 20);
        assert_eq!(sample_red(&r, 0.0, 1.0 + 1e-9), 30);
    }

    #[test]
    fn test_sample_single_pixel_raster() {
        let r = Raster::from_rgb8(1, 1, vec![128, 0, 0]).unwrap();
        assert_eq!(sample_red(&r, 0.0, 0.0), 128);
        assert_eq!(sample_red(&r, 1.0, 1.0), 128);
    }

    #[test]
    fn test_flip_vertical_reverses_rows() {
        let flipped = quad().flip_vertical();
        assert_eq!(flipped.red(0, 0), 30);
        assert_eq!(flipped.red(1, 0), 40);
        assert_eq!(flipped.red(0, 1), 10);
    }

    #[test]
    fn test_mirror_horizontal_reverses_pixels_within_rows() {
        let mirrored = quad().mirror_horizontal();
        assert_eq!(mirrored.red(0, 0), 20);
        assert_eq!(mirrored.red(1, 0), 10);
        assert_eq!(mirrored.red(0, 1), 40);
    }

    #[test]
    fn test_flip_then_mirror_is_180_rotation() {
        let rotated = quad().flip_vertical().mirror_horizontal();
        assert_eq!(rotated.red(0, 0), 40);
        assert_eq!(rotated.red(1, 1), 10);
    }
}
