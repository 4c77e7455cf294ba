//! Raster error types.

/// Errors that can occur when constructing a raster from decoded bytes.
#[derive(Debug, thiserror::Error)]
pub enum RasterError {
    /// A raster must be at least one pixel in each dimension.
    #[error("raster dimensions must be at least 1x1, got {width}x{height}")]
    EmptyDimensions {
        /// Requested width in pixels.
        width: u32,
        /// Requested height in pixels.
        height: u32,
    },

    /// The byte buffer does not match `width * height * 3`.
    #[error("raster data length mismatch: expected {expected} bytes, got {actual}")]
    DataLength {
        /// Expected byte count for the given dimensions.
        expected: usize,
        /// Actual byte count supplied.
        actual: usize,
    },
}
