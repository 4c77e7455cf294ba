//! Decoded raster data for globe displacement.
//!
//! A [`Raster`] is an immutable, fully decoded RGB pixel grid. Displacement
//! only ever reads the red channel, so the generation-facing handle is the
//! narrow [`RasterSource`] trait. Decoding image files is the caller's
//! responsibility; this crate starts from raw bytes.

mod error;
mod raster;

pub use error::RasterError;
pub use raster::{Raster, RasterSource, sample_red};
