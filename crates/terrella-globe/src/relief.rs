//! Raster-driven surface displacement.

use glam::DVec3;
use terrella_raster::{RasterSource, sample_red};

/// Outward displacement, in sphere radii, for a full-intensity elevation
/// sample.
pub const ELEVATION_SCALE: f64 = 0.05;

/// Inward displacement, in sphere radii, for a fully inverted bathymetry
/// sample. Bathymetry encodes depth as darkness: the red channel is
/// inverted before use, so black pixels sink the surface the most.
pub const BATHYMETRY_SCALE: f64 = 0.1;

/// Displaces unit-sphere directions by optional elevation and bathymetry
/// rasters, then scales into world units.
///
/// Both rasters are sampled at the vertex UV with the nearest-pixel rule;
/// either may be absent, in which case its step is skipped and an
/// undisplaced vertex lands exactly on the sphere of the given radius.
pub struct ReliefSampler<'a> {
    radius: f64,
    elevation: Option<&'a dyn RasterSource>,
    bathymetry: Option<&'a dyn RasterSource>,
}

impl<'a> ReliefSampler<'a> {
    /// Create a sampler for the given radius and raster handles.
    pub fn new(
        radius: f64,
        elevation: Option<&'a dyn RasterSource>,
        bathymetry: Option<&'a dyn RasterSource>,
    ) -> Self {
        Self {
            radius,
            elevation,
            bathymetry,
        }
    }

    /// Displace one vertex.
    ///
    /// `dir` is the unit direction from the grid parametrization and stays
    /// fixed through both steps: elevation pushes along it, bathymetry pulls
    /// against it, each proportional to its sampled intensity. Returns the
    /// radius-scaled position together with the unscaled surface vector.
    ///
    /// The surface vector is what the renderer binds as the normal. It is
    /// deliberately not renormalized and not recomputed from the displaced
    /// neighborhood, matching the established visual output; it is only an
    /// approximation of the true surface normal wherever displacement
    /// occurred.
    pub fn displace(&self, dir: DVec3, u: f64, v: f64) -> (DVec3, DVec3) {
        let mut p = dir;
        if let Some(elevation) = self.elevation {
            let c = sample_red(elevation, u, v);
            if c > 0 {
                p += dir * (ELEVATION_SCALE * c as f64 / 255.0);
            }
        }
        if let Some(bathymetry) = self.bathymetry {
            let c = 255 - sample_red(bathymetry, u, v);
            if c > 0 {
                p -= dir * (BATHYMETRY_SCALE * c as f64 / 255.0);
            }
        }
        (p * self.radius, p)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use terrella_raster::Raster;

    fn uniform(red: u8) -> Raster {
        Raster::from_rgb8(4, 4, [red, 0, 0].repeat(16)).unwrap()
    }

    fn unit_dir() -> DVec3 {
        DVec3::new(1.0, 0.0, 0.0)
    }

    #[test]
    fn test_no_rasters_is_pure_sphere() {
        let sampler = ReliefSampler::new(2.5, None, None);
        let (pos, surface) = sampler.displace(unit_dir(), 0.3, 0.7);
        assert_eq!(surface, unit_dir());
        assert_eq!(pos, unit_dir() * 2.5);
    }

    #[test]
    fn test_elevation_pushes_outward() {
        let elev = uniform(128);
        let sampler = ReliefSampler::new(1.0, Some(&elev), None);
        let (pos, surface) = sampler.displace(unit_dir(), 0.5, 0.5);
        let expected = 1.0 + ELEVATION_SCALE * 128.0 / 255.0;
        assert!((pos.length() - expected).abs() < 1e-12);
        assert_eq!(surface, pos);
    }

    #[test]
    fn test_zero_elevation_sample_is_skipped() {
        let elev = uniform(0);
        let sampler = ReliefSampler::new(1.0, Some(&elev), None);
        let (pos, _) = sampler.displace(unit_dir(), 0.5, 0.5);
        assert_eq!(pos, unit_dir());
    }

    #[test]
    fn test_black_bathymetry_pulls_inward_fully() {
        // Red 0 inverts to 255: the deepest possible drop.
        let bath = uniform(0);
        let sampler = ReliefSampler::new(1.0, None, Some(&bath));
        let (pos, _) = sampler.displace(unit_dir(), 0.5, 0.5);
        assert!((pos.length() - (1.0 - BATHYMETRY_SCALE)).abs() < 1e-12);
    }

    #[test]
    fn test_white_bathymetry_is_skipped() {
        let bath = uniform(255);
        let sampler = ReliefSampler::new(1.0, None, Some(&bath));
        let (pos, _) = sampler.displace(unit_dir(), 0.5, 0.5);
        assert_eq!(pos, unit_dir());
    }

    #[test]
    fn test_elevation_then_bathymetry_compose_additively() {
        let elev = uniform(255);
        let bath = uniform(0);
        let sampler = ReliefSampler::new(1.0, Some(&elev), Some(&bath));
        let (pos, _) = sampler.displace(unit_dir(), 0.5, 0.5);
        // +0.05 from elevation, then -0.1 from bathymetry along the same
        // original direction.
        let expected = 1.0 + ELEVATION_SCALE - BATHYMETRY_SCALE;
        assert!((pos.length() - expected).abs() < 1e-12);
    }

    #[test]
    fn test_radius_scales_displaced_position() {
        let elev = uniform(255);
        let sampler = ReliefSampler::new(10.0, Some(&elev), None);
        let (pos, surface) = sampler.displace(unit_dir(), 0.5, 0.5);
        assert!((pos.length() - 10.0 * (1.0 + ELEVATION_SCALE)).abs() < 1e-9);
        // The surface vector is left in unit-sphere space.
        assert!((surface.length() - (1.0 + ELEVATION_SCALE)).abs() < 1e-12);
    }
}
