//! Globe generation error types.

use std::fmt;

/// Which raster input an error refers to.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RasterKind {
    /// Drives outward displacement.
    Elevation,
    /// Drives inward displacement via the inverted red channel.
    Bathymetry,
}

impl fmt::Display for RasterKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RasterKind::Elevation => f.write_str("elevation"),
            RasterKind::Bathymetry => f.write_str("bathymetry"),
        }
    }
}

/// Errors that can occur when generating a globe mesh.
///
/// Generation is atomic: any of these is returned before output buffers are
/// allocated, so a caller never sees a partial mesh.
#[derive(Debug, thiserror::Error)]
pub enum GlobeError {
    /// A descriptor field is outside its valid range.
    #[error("{name} must be {requirement}, got {value}")]
    InvalidParameter {
        /// The offending field.
        name: &'static str,
        /// Human-readable constraint, e.g. "at least 2".
        requirement: &'static str,
        /// The rejected value.
        value: f64,
    },

    /// A raster handle reported a degenerate size.
    #[error("{kind} raster must be at least 1x1, got {width}x{height}")]
    InvalidRaster {
        /// Which raster input failed.
        kind: RasterKind,
        /// Reported width in pixels.
        width: u32,
        /// Reported height in pixels.
        height: u32,
    },
}
