//! Configuration for the Terrella globe renderer.
//!
//! Runtime-configurable settings that persist to disk as RON files, with
//! CLI overrides via clap and hot-reload detection. The globe, relief and
//! capture sections feed the mesh generator and capture session; window and
//! raster-path settings are consumed by the external windowing and
//! image-loading collaborators.

mod cli;
mod config;
mod error;

pub use cli::CliArgs;
pub use config::{
    CaptureConfig, Config, DebugConfig, GlobeConfig, ReliefConfig, WindowConfig, default_config_dir,
};
pub use error::ConfigError;
