//! The (ring, sector) grid parametrization of the unit sphere.

use std::f64::consts::{FRAC_PI_2, PI, TAU};

use glam::DVec3;

use crate::error::GlobeError;

/// Maps integer grid indices to unit-sphere directions and UV coordinates.
///
/// Rows run from the south pole (`ring = 0`, `v = 0`) to the north pole
/// (`ring = rings - 1`, `v = 1`); columns wrap once around in longitude.
/// Both pole rings collapse: `sin(pi * v)` vanishes there, so the x and z
/// components are zero for every sector.
#[derive(Clone, Copy, Debug)]
pub struct SphereGrid {
    rings: u32,
    sectors: u32,
    ring_step: f64,
    sector_step: f64,
}

impl SphereGrid {
    /// Create a grid, validating both counts before computing step sizes.
    pub fn new(rings: u32, sectors: u32) -> Result<Self, GlobeError> {
        if rings < 2 {
            return Err(GlobeError::InvalidParameter {
                name: "rings",
                requirement: "at least 2",
                value: rings as f64,
            });
        }
        if sectors < 2 {
            return Err(GlobeError::InvalidParameter {
                name: "sectors",
                requirement: "at least 2",
                value: sectors as f64,
            });
        }
        Ok(Self {
            rings,
            sectors,
            ring_step: 1.0 / (rings - 1) as f64,
            sector_step: 1.0 / (sectors - 1) as f64,
        })
    }

    /// Number of rings.
    pub fn rings(&self) -> u32 {
        self.rings
    }

    /// Number of sectors.
    pub fn sectors(&self) -> u32 {
        self.sectors
    }

    /// Normalized texture coordinate `(u, v)` for a grid vertex, each
    /// component in `[0, 1]` and monotonic in its index.
    pub fn uv(&self, ring: u32, sector: u32) -> (f64, f64) {
        (sector as f64 * self.sector_step, ring as f64 * self.ring_step)
    }

    /// Unit-sphere direction for a grid vertex.
    ///
    /// `y` runs from -1 at the south pole to 1 at the north pole; `x` and
    /// `z` sweep the latitude circle whose radius is `sin(pi * v)`.
    pub fn direction(&self, ring: u32, sector: u32) -> DVec3 {
        let (u, v) = self.uv(ring, sector);
        let latitude = PI * v;
        let y = (-FRAC_PI_2 + latitude).sin();
        let x = (TAU * u).cos() * latitude.sin();
        let z = (TAU * u).sin() * latitude.sin();
        DVec3::new(x, y, z)
    }
}
