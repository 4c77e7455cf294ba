//! Generation parameters for a globe mesh.

use crate::error::GlobeError;

/// Immutable description of the mesh to generate.
///
/// `rings` counts horizontal rows of vertices from pole to pole, `sectors`
/// counts columns around the sphere. The grid is `rings * sectors` vertices
/// with ring as the slow-varying index.
#[derive(Clone, Debug, PartialEq)]
pub struct GlobeDescriptor {
    /// Sphere radius in world units. Must be positive and finite.
    pub radius: f64,
    /// Number of horizontal rings, at least 2 (the two poles).
    pub rings: u32,
    /// Number of vertical sectors, at least 2.
    pub sectors: u32,
    /// Emit a normal buffer.
    pub include_normals: bool,
    /// Emit a texture-coordinate buffer.
    pub include_uvs: bool,
    /// Optional label carried through to the mesh, for render-side
    /// diagnostics.
    pub label: Option<String>,
}

impl Default for GlobeDescriptor {
    fn default() -> Self {
        Self {
            radius: 1.0,
            rings: 16,
            sectors: 32,
            include_normals: true,
            include_uvs: true,
            label: None,
        }
    }
}

impl GlobeDescriptor {
    /// Check every field against its valid range.
    ///
    /// Runs before any step-size computation or allocation, so a degenerate
    /// grid can never divide by zero and an oversized one can never produce
    /// indices that do not fit in `u32`.
    pub fn validate(&self) -> Result<(), GlobeError> {
        if self.rings < 2 {
            return Err(GlobeError::InvalidParameter {
                name: "rings",
                requirement: "at least 2",
                value: self.rings as f64,
            });
        }
        if self.sectors < 2 {
            return Err(GlobeError::InvalidParameter {
                name: "sectors",
                requirement: "at least 2",
                value: self.sectors as f64,
            });
        }
        if !(self.radius > 0.0 && self.radius.is_finite()) {
            return Err(GlobeError::InvalidParameter {
                name: "radius",
                requirement: "positive and finite",
                value: self.radius,
            });
        }
        let vertices = self.rings as u64 * self.sectors as u64;
        if vertices > u32::MAX as u64 {
            return Err(GlobeError::InvalidParameter {
                name: "rings * sectors",
                requirement: "addressable by u32 indices",
                value: vertices as f64,
            });
        }
        Ok(())
    }

    /// Number of vertices the mesh will contain: `rings * sectors`.
    pub fn vertex_count(&self) -> usize {
        self.rings as usize * self.sectors as usize
    }

    /// Number of indices the mesh will contain:
    /// `(rings - 1) * (sectors - 1) * 6`.
    pub fn index_count(&self) -> usize {
        (self.rings as usize - 1) * (self.sectors as usize - 1) * 6
    }
}
