//! Canonical `wgpu::VertexBufferLayout`s for globe mesh rendering.
//!
//! The mesh keeps each attribute in its own tightly packed buffer, so the
//! renderer binds three vertex buffers and draws the index buffer as a
//! triangle list with back-face culling.
//!
//! | Slot | Location | Format    | Contents            |
//! |------|----------|-----------|---------------------|
//! | 0    | 0        | Float32x3 | position            |
//! | 1    | 1        | Float32x3 | normal              |
//! | 2    | 2        | Float32x2 | texture coordinate 0|

use std::mem;

use wgpu::{VertexAttribute, VertexBufferLayout, VertexFormat, VertexStepMode};

/// Attribute for the position buffer (shader location 0).
pub const POSITION_ATTRIBUTES: [VertexAttribute; 1] = [VertexAttribute {
    format: VertexFormat::Float32x3,
    offset: 0,
    shader_location: 0,
}];

/// Attribute for the normal buffer (shader location 1).
pub const NORMAL_ATTRIBUTES: [VertexAttribute; 1] = [VertexAttribute {
    format: VertexFormat::Float32x3,
    offset: 0,
    shader_location: 1,
}];

/// Attribute for the texture-coordinate buffer (shader location 2).
pub const TEXCOORD_ATTRIBUTES: [VertexAttribute; 1] = [VertexAttribute {
    format: VertexFormat::Float32x2,
    offset: 0,
    shader_location: 2,
}];

/// Layout of the position buffer.
pub const POSITION_LAYOUT: VertexBufferLayout<'static> = VertexBufferLayout {
    array_stride: mem::size_of::<[f32; 3]>() as u64,
    step_mode: VertexStepMode::Vertex,
    attributes: &POSITION_ATTRIBUTES,
};

/// Layout of the normal buffer.
pub const NORMAL_LAYOUT: VertexBufferLayout<'static> = VertexBufferLayout {
    array_stride: mem::size_of::<[f32; 3]>() as u64,
    step_mode: VertexStepMode::Vertex,
    attributes: &NORMAL_ATTRIBUTES,
};

/// Layout of the texture-coordinate buffer.
pub const TEXCOORD_LAYOUT: VertexBufferLayout<'static> = VertexBufferLayout {
    array_stride: mem::size_of::<[f32; 2]>() as u64,
    step_mode: VertexStepMode::Vertex,
    attributes: &TEXCOORD_ATTRIBUTES,
};

/// All three layouts in slot order, for pipelines that bind every
/// attribute.
pub fn globe_vertex_buffer_layouts() -> [VertexBufferLayout<'static>; 3] {
    [POSITION_LAYOUT, NORMAL_LAYOUT, TEXCOORD_LAYOUT]
}

// ---------------------------------------------------------------------------
// Compile-time validation
// ---------------------------------------------------------------------------

/// Strides must match the mesh's buffer element types.
const _: () = assert!(POSITION_LAYOUT.array_stride == 12);
const _: () = assert!(NORMAL_LAYOUT.array_stride == 12);
const _: () = assert!(TEXCOORD_LAYOUT.array_stride == 8);

/// Single-attribute buffers start at offset 0.
const _: () = assert!(POSITION_ATTRIBUTES[0].offset == 0);
const _: () = assert!(NORMAL_ATTRIBUTES[0].offset == 0);
const _: () = assert!(TEXCOORD_ATTRIBUTES[0].offset == 0);
