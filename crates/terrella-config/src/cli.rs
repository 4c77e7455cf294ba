//! Command-line argument parsing.

use std::path::PathBuf;

use clap::Parser;

use crate::Config;

/// Terrella command-line arguments.
///
/// CLI values override settings loaded from `config.ron`.
#[derive(Parser, Debug)]
#[command(name = "terrella", about = "Displaced-globe renderer")]
pub struct CliArgs {
    /// Sphere radius in world units.
    #[arg(long)]
    pub radius: Option<f64>,

    /// Number of horizontal rings.
    #[arg(long)]
    pub rings: Option<u32>,

    /// Number of vertical sectors.
    #[arg(long)]
    pub sectors: Option<u32>,

    /// Path to the elevation image.
    #[arg(long)]
    pub elevation: Option<String>,

    /// Path to the bathymetry image.
    #[arg(long)]
    pub bathymetry: Option<String>,

    /// Capture duration in seconds.
    #[arg(long)]
    pub duration: Option<f64>,

    /// Capture frame rate.
    #[arg(long)]
    pub fps: Option<u32>,

    /// Log level (error, warn, info, debug, trace).
    #[arg(long)]
    pub log_level: Option<String>,

    /// Path to config directory (overrides default location).
    #[arg(long)]
    pub config: Option<PathBuf>,
}

impl Config {
    /// Apply CLI overrides to a loaded config.
    pub fn apply_cli_overrides(&mut self, args: &CliArgs) {
        if let Some(radius) = args.radius {
            self.globe.radius = radius;
        }
        if let Some(rings) = args.rings {
            self.globe.rings = rings;
        }
        if let Some(sectors) = args.sectors {
            self.globe.sectors = sectors;
        }
        if let Some(ref path) = args.elevation {
            self.relief.elevation_path = path.clone();
        }
        if let Some(ref path) = args.bathymetry {
            self.relief.bathymetry_path = path.clone();
        }
        if let Some(duration) = args.duration {
            self.capture.duration_seconds = duration;
        }
        if let Some(fps) = args.fps {
            self.capture.fps = fps;
        }
        if let Some(ref level) = args.log_level {
            self.debug.log_level = level.clone();
        }
    }
}
