//! The assembled, immutable globe mesh.

/// CPU-side mesh buffers ready for GPU upload by the external renderer.
///
/// Positions are always present; normals and texture coordinates follow the
/// descriptor's `include_*` flags. All buffers are tightly packed and
/// parallel: entry `i` of each describes vertex `i`, row-major over
/// (ring, sector). Indices form a triangle list.
#[derive(Clone, Debug, PartialEq)]
pub struct GlobeMesh {
    /// World-space vertex positions.
    pub positions: Vec<[f32; 3]>,
    /// Per-vertex normals, when requested. These are the displaced,
    /// un-renormalized surface vectors (see
    /// [`ReliefSampler::displace`](crate::ReliefSampler::displace)).
    pub normals: Option<Vec<[f32; 3]>>,
    /// Per-vertex texture coordinates, when requested.
    pub uvs: Option<Vec<[f32; 2]>>,
    /// Triangle-list indices into the vertex buffers.
    pub indices: Vec<u32>,
    /// Optional label from the descriptor.
    pub label: Option<String>,
}

impl GlobeMesh {
    /// Number of vertices.
    pub fn vertex_count(&self) -> usize {
        self.positions.len()
    }

    /// Number of indices.
    pub fn index_count(&self) -> usize {
        self.indices.len()
    }

    /// Number of triangles.
    pub fn triangle_count(&self) -> usize {
        self.indices.len() / 3
    }

    /// Position buffer as bytes for GPU upload.
    pub fn position_bytes(&self) -> &[u8] {
        bytemuck::cast_slice(&self.positions)
    }

    /// Normal buffer as bytes, if normals were generated.
    pub fn normal_bytes(&self) -> Option<&[u8]> {
        self.normals.as_deref().map(bytemuck::cast_slice)
    }

    /// Texture-coordinate buffer as bytes, if UVs were generated.
    pub fn uv_bytes(&self) -> Option<&[u8]> {
        self.uvs.as_deref().map(bytemuck::cast_slice)
    }

    /// Index buffer as bytes for GPU upload (u32 indices).
    pub fn index_bytes(&self) -> &[u8] {
        bytemuck::cast_slice(&self.indices)
    }
}
