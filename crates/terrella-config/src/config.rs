//! Configuration structs with sensible defaults and RON persistence.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::ConfigError;

/// Top-level configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct Config {
    /// Globe mesh settings.
    pub globe: GlobeConfig,
    /// Relief raster settings.
    pub relief: ReliefConfig,
    /// Frame capture settings.
    pub capture: CaptureConfig,
    /// Window settings.
    pub window: WindowConfig,
    /// Debug/development settings.
    pub debug: DebugConfig,
}

/// Globe mesh generation settings.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct GlobeConfig {
    /// Sphere radius in world units.
    pub radius: f64,
    /// Number of horizontal rings.
    pub rings: u32,
    /// Number of vertical sectors.
    pub sectors: u32,
    /// Generate a normal buffer.
    pub normals: bool,
    /// Generate a texture-coordinate buffer.
    pub uvs: bool,
}

/// Relief raster settings, consumed by the external image loader.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct ReliefConfig {
    /// Path to the elevation image (outward displacement).
    pub elevation_path: String,
    /// Path to the bathymetry image (inward displacement).
    pub bathymetry_path: String,
    /// Flip decoded rasters vertically before use.
    pub flip_vertical: bool,
    /// Mirror decoded rasters horizontally before use.
    pub mirror_horizontal: bool,
}

/// Frame capture settings.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct CaptureConfig {
    /// How long to record before finalizing, in seconds.
    pub duration_seconds: f64,
    /// Frame rate the capture is encoded at.
    pub fps: u32,
    /// Output path handed to the encoding collaborator.
    pub output_path: String,
}

/// Window configuration, consumed by the external windowing collaborator.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct WindowConfig {
    /// Window width in logical pixels.
    pub width: u32,
    /// Window height in logical pixels.
    pub height: u32,
    /// Window title.
    pub title: String,
}

/// Debug/development configuration.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct DebugConfig {
    /// Log level override (e.g., "debug", "info", "warn").
    pub log_level: String,
}

// --- Default implementations ---

impl Default for GlobeConfig {
    fn default() -> Self {
        Self {
            radius: 1.0,
            rings: 400,
            sectors: 400,
            normals: true,
            uvs: true,
        }
    }
}

impl Default for ReliefConfig {
    fn default() -> Self {
        Self {
            elevation_path: "elevation.png".to_string(),
            bathymetry_path: "bath.png".to_string(),
            flip_vertical: true,
            mirror_horizontal: true,
        }
    }
}

impl Default for CaptureConfig {
    fn default() -> Self {
        Self {
            duration_seconds: 20.0,
            fps: 60,
            output_path: "output.mp4".to_string(),
        }
    }
}

impl Default for WindowConfig {
    fn default() -> Self {
        Self {
            width: 900,
            height: 1600,
            title: "Terrella".to_string(),
        }
    }
}

impl Default for DebugConfig {
    fn default() -> Self {
        Self {
            log_level: "info".to_string(),
        }
    }
}

/// The platform config directory for Terrella, if one can be determined.
pub fn default_config_dir() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| dir.join("terrella"))
}

// --- Load / Save / Reload ---

impl Config {
    /// Load config from the given directory, or create a default config file.
    pub fn load_or_create(config_dir: &Path) -> Result<Self, ConfigError> {
        let config_path = config_dir.join("config.ron");

        if config_path.exists() {
            let contents = std::fs::read_to_string(&config_path).map_err(ConfigError::ReadError)?;
            let config: Config = ron::from_str(&contents).map_err(ConfigError::ParseError)?;
            log::info!("Loaded config from {}", config_path.display());
            Ok(config)
        } else {
            let config = Config::default();
            config.save(config_dir)?;
            log::info!("Created default config at {}", config_path.display());
            Ok(config)
        }
    }

    /// Save config to the given directory as `config.ron`.
    pub fn save(&self, config_dir: &Path) -> Result<(), ConfigError> {
        std::fs::create_dir_all(config_dir).map_err(ConfigError::WriteError)?;

        let config_path = config_dir.join("config.ron");
        let pretty = ron::ser::PrettyConfig::new()
            .depth_limit(3)
            .separate_tuple_members(true)
            .enumerate_arrays(false);

        let serialized =
            ron::ser::to_string_pretty(self, pretty).map_err(ConfigError::SerializeError)?;

        std::fs::write(&config_path, serialized).map_err(ConfigError::WriteError)?;
        Ok(())
    }

    /// Hot-reload: returns `Some(new_config)` if the file changed, `None` otherwise.
    pub fn reload(&self, config_dir: &Path) -> Result<Option<Self>, ConfigError> {
        let config_path = config_dir.join("config.ron");
        let contents = std::fs::read_to_string(&config_path).map_err(ConfigError::ReadError)?;
        let new_config: Config = ron::from_str(&contents).map_err(ConfigError::ParseError)?;

        if &new_config != self {
            log::info!("Config reloaded with changes");
            Ok(Some(new_config))
        } else {
            Ok(None)
        }
    }
}
