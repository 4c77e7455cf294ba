//! Mesh generation entry points.

use std::time::Instant;

use terrella_raster::RasterSource;

use crate::descriptor::GlobeDescriptor;
use crate::error::{GlobeError, RasterKind};
use crate::grid::SphereGrid;
use crate::mesh::GlobeMesh;
use crate::relief::ReliefSampler;
use crate::tessellate::tessellate_grid;

/// Generate a globe mesh on the calling thread.
///
/// Validates the descriptor and both raster handles before allocating
/// anything, then fills the vertex buffers row-major over (ring, sector) and
/// attaches the tessellated index list. The computation is pure and
/// deterministic: identical inputs produce byte-identical buffers.
pub fn generate(
    descriptor: &GlobeDescriptor,
    elevation: Option<&dyn RasterSource>,
    bathymetry: Option<&dyn RasterSource>,
) -> Result<GlobeMesh, GlobeError> {
    let (grid, sampler) = prepare(descriptor, elevation, bathymetry)?;
    let started = Instant::now();

    let mut buffers = VertexBuffers::allocate(descriptor);
    fill_rows(
        &grid,
        &sampler,
        0,
        &mut buffers.positions,
        buffers.normals.as_deref_mut(),
        buffers.uvs.as_deref_mut(),
    );

    let mesh = buffers.into_mesh(descriptor);
    tracing::debug!(
        rings = descriptor.rings,
        sectors = descriptor.sectors,
        vertices = mesh.vertex_count(),
        elapsed_ms = started.elapsed().as_millis() as u64,
        "generated globe mesh"
    );
    Ok(mesh)
}

/// Generate a globe mesh using scoped worker threads.
///
/// Same contract and byte-identical output as [`generate`]: the grid is
/// split into contiguous ring bands and each worker fills its own disjoint
/// slice of the output buffers, so no locking is involved. `workers = 0`
/// picks a default from the available CPU count.
pub fn generate_parallel(
    descriptor: &GlobeDescriptor,
    elevation: Option<&dyn RasterSource>,
    bathymetry: Option<&dyn RasterSource>,
    workers: usize,
) -> Result<GlobeMesh, GlobeError> {
    let (grid, sampler) = prepare(descriptor, elevation, bathymetry)?;
    let workers = effective_workers(workers, descriptor.rings);
    if workers <= 1 {
        return generate(descriptor, elevation, bathymetry);
    }
    let started = Instant::now();

    let mut buffers = VertexBuffers::allocate(descriptor);
    let sectors = descriptor.sectors as usize;
    let rows_per_band = descriptor.rings.div_ceil(workers as u32);

    std::thread::scope(|scope| {
        let grid = &grid;
        let sampler = &sampler;
        let mut positions_rest = buffers.positions.as_mut_slice();
        let mut normals_rest = buffers.normals.as_deref_mut();
        let mut uvs_rest = buffers.uvs.as_deref_mut();

        let mut ring = 0;
        while ring < descriptor.rings {
            let rows = rows_per_band.min(descriptor.rings - ring);
            let band_len = rows as usize * sectors;

            let (position_band, rest) =
                std::mem::take(&mut positions_rest).split_at_mut(band_len);
            positions_rest = rest;
            let normal_band = split_band(&mut normals_rest, band_len);
            let uv_band = split_band(&mut uvs_rest, band_len);

            let first_ring = ring;
            scope.spawn(move || {
                fill_rows(grid, sampler, first_ring, position_band, normal_band, uv_band);
            });
            ring += rows;
        }
    });

    let mesh = buffers.into_mesh(descriptor);
    tracing::debug!(
        rings = descriptor.rings,
        sectors = descriptor.sectors,
        vertices = mesh.vertex_count(),
        workers,
        elapsed_ms = started.elapsed().as_millis() as u64,
        "generated globe mesh in parallel"
    );
    Ok(mesh)
}

/// Shared validation front end for both entry points.
fn prepare<'a>(
    descriptor: &GlobeDescriptor,
    elevation: Option<&'a dyn RasterSource>,
    bathymetry: Option<&'a dyn RasterSource>,
) -> Result<(SphereGrid, ReliefSampler<'a>), GlobeError> {
    descriptor.validate()?;
    validate_raster(RasterKind::Elevation, elevation)?;
    validate_raster(RasterKind::Bathymetry, bathymetry)?;
    let grid = SphereGrid::new(descriptor.rings, descriptor.sectors)?;
    let sampler = ReliefSampler::new(descriptor.radius, elevation, bathymetry);
    Ok((grid, sampler))
}

/// A `Raster` cannot be constructed degenerate, but the trait admits foreign
/// implementations; reject a zero-sized handle before touching its pixels.
fn validate_raster(kind: RasterKind, source: Option<&dyn RasterSource>) -> Result<(), GlobeError> {
    if let Some(source) = source {
        let (width, height) = (source.width(), source.height());
        if width < 1 || height < 1 {
            return Err(GlobeError::InvalidRaster {
                kind,
                width,
                height,
            });
        }
    }
    Ok(())
}

fn effective_workers(requested: usize, rings: u32) -> usize {
    let workers = if requested == 0 {
        // Leave headroom for the main and render threads.
        let cpus = num_cpus::get().max(2);
        (cpus - 2).max(1)
    } else {
        requested
    };
    workers.min(rings as usize)
}

/// Output buffers for one generation call, allocated up front so row bands
/// can be handed out as disjoint slices.
struct VertexBuffers {
    positions: Vec<[f32; 3]>,
    normals: Option<Vec<[f32; 3]>>,
    uvs: Option<Vec<[f32; 2]>>,
}

impl VertexBuffers {
    fn allocate(descriptor: &GlobeDescriptor) -> Self {
        let n = descriptor.vertex_count();
        Self {
            positions: vec![[0.0; 3]; n],
            normals: descriptor.include_normals.then(|| vec![[0.0; 3]; n]),
            uvs: descriptor.include_uvs.then(|| vec![[0.0; 2]; n]),
        }
    }

    fn into_mesh(self, descriptor: &GlobeDescriptor) -> GlobeMesh {
        GlobeMesh {
            positions: self.positions,
            normals: self.normals,
            uvs: self.uvs,
            indices: tessellate_grid(descriptor.rings, descriptor.sectors),
            label: descriptor.label.clone(),
        }
    }
}

/// Split the leading `len` entries off an optional buffer slice.
fn split_band<'a, T>(rest: &mut Option<&'a mut [T]>, len: usize) -> Option<&'a mut [T]> {
    rest.take().map(|slice| {
        let (band, tail) = slice.split_at_mut(len);
        *rest = Some(tail);
        band
    })
}

/// Fill a contiguous band of vertex rows starting at `first_ring`.
///
/// Each output slice covers exactly the band's `rows * sectors` vertices;
/// this is the unit of work both the sequential and parallel paths share, so
/// their outputs are identical by construction.
fn fill_rows(
    grid: &SphereGrid,
    sampler: &ReliefSampler<'_>,
    first_ring: u32,
    positions: &mut [[f32; 3]],
    mut normals: Option<&mut [[f32; 3]]>,
    mut uvs: Option<&mut [[f32; 2]]>,
) {
    let sectors = grid.sectors() as usize;
    for (row_idx, row) in positions.chunks_exact_mut(sectors).enumerate() {
        let ring = first_ring + row_idx as u32;
        for (sector_idx, out) in row.iter_mut().enumerate() {
            let sector = sector_idx as u32;
            let (u, v) = grid.uv(ring, sector);
            let dir = grid.direction(ring, sector);
            let (position, surface) = sampler.displace(dir, u, v);

            *out = position.as_vec3().to_array();
            let i = row_idx * sectors + sector_idx;
            if let Some(normals) = normals.as_deref_mut() {
                normals[i] = surface.as_vec3().to_array();
            }
            if let Some(uvs) = uvs.as_deref_mut() {
                uvs[i] = [u as f32, v as f32];
            }
        }
    }
}
