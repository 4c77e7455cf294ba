//! Globe mesh generation: parametric sphere sampling, raster-driven surface
//! displacement, and grid-to-triangle-list tessellation.
//!
//! The pipeline is a pure CPU computation: a [`SphereGrid`] maps (ring,
//! sector) indices to unit-sphere directions and UVs, a [`ReliefSampler`]
//! displaces each direction outward by an elevation raster and inward by a
//! bathymetry raster, and [`tessellate_grid`] turns the grid topology into a
//! triangle list with the fixed winding the renderer's back-face culling
//! expects. [`generate`] assembles the result into an immutable
//! [`GlobeMesh`] whose buffers the external renderer uploads as-is.

pub mod descriptor;
pub mod error;
pub mod generate;
pub mod grid;
pub mod mesh;
pub mod relief;
pub mod tessellate;
pub mod vertex_format;

pub use descriptor::GlobeDescriptor;
pub use error::{GlobeError, RasterKind};
pub use generate::{generate, generate_parallel};
pub use grid::SphereGrid;
pub use mesh::GlobeMesh;
pub use relief::{BATHYMETRY_SCALE, ELEVATION_SCALE, ReliefSampler};
pub use tessellate::tessellate_grid;
pub use vertex_format::{
    NORMAL_LAYOUT, POSITION_LAYOUT, TEXCOORD_LAYOUT, globe_vertex_buffer_layouts,
};
