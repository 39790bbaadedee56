//! TOML-backed application configuration.
//!
//! Settings are stored in `config.toml` under the `.fieldscope` root. Every
//! field carries a serde default so configs written by older builds keep
//! parsing.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::app_dirs;

/// Default filename used to store the app configuration.
pub const CONFIG_FILE_NAME: &str = "config.toml";

/// Errors that can occur while loading or saving the configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// Failed to resolve the application directory.
    #[error(transparent)]
    AppDir(#[from] app_dirs::AppDirError),
    /// Failed to read the configuration file.
    #[error("Failed to read {path}: {source}")]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },
    /// The configuration file is not valid TOML.
    #[error("Failed to parse {path}: {source}")]
    Parse {
        path: PathBuf,
        source: toml::de::Error,
    },
    /// Failed to serialize the configuration.
    #[error("Failed to serialize configuration: {0}")]
    Serialize(#[from] toml::ser::Error),
    /// Failed to write the configuration file.
    #[error("Failed to write {path}: {source}")]
    Write {
        path: PathBuf,
        source: std::io::Error,
    },
}

/// Top-level application settings.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AppConfig {
    #[serde(default)]
    pub canvas: CanvasSettings,
    #[serde(default)]
    pub field: FieldSettings,
    #[serde(default)]
    pub dataset: DatasetSettings,
    #[serde(default)]
    pub model: ModelSettings,
}

/// Size of the square drawing canvas.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CanvasSettings {
    /// Canvas edge length in pixels.
    #[serde(default = "default_canvas_size")]
    pub size: usize,
}

/// Decision-field sampling parameters.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FieldSettings {
    /// Sampling grid edge length in cells.
    #[serde(default = "default_grid_resolution")]
    pub resolution: usize,
    /// Margin in data units added around the base dataset's bounding box.
    #[serde(default = "default_bounds_margin")]
    pub margin: f64,
    /// Gaussian blur sigma in grid cells applied to the color field.
    #[serde(default = "default_blur_sigma")]
    pub blur_sigma: f32,
}

/// Synthetic base dataset parameters.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DatasetSettings {
    /// Total number of base points, split evenly between the two classes.
    #[serde(default = "default_dataset_samples")]
    pub samples: usize,
    /// Standard deviation of each cluster in data units.
    #[serde(default = "default_cluster_std")]
    pub cluster_std: f64,
    /// Seed for the dataset generator.
    #[serde(default = "default_dataset_seed")]
    pub seed: u64,
}

/// Classifier selection preferences.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ModelSettings {
    /// Name of the classifier active at session start.
    #[serde(default = "default_classifier")]
    pub default_classifier: String,
}

fn default_canvas_size() -> usize {
    600
}

fn default_grid_resolution() -> usize {
    100
}

fn default_bounds_margin() -> f64 {
    1.0
}

fn default_blur_sigma() -> f32 {
    1.0
}

fn default_dataset_samples() -> usize {
    200
}

fn default_cluster_std() -> f64 {
    1.5
}

fn default_dataset_seed() -> u64 {
    42
}

fn default_classifier() -> String {
    crate::playground::STUMPS_NAME.to_string()
}

impl Default for CanvasSettings {
    fn default() -> Self {
        Self {
            size: default_canvas_size(),
        }
    }
}

impl Default for FieldSettings {
    fn default() -> Self {
        Self {
            resolution: default_grid_resolution(),
            margin: default_bounds_margin(),
            blur_sigma: default_blur_sigma(),
        }
    }
}

impl Default for DatasetSettings {
    fn default() -> Self {
        Self {
            samples: default_dataset_samples(),
            cluster_std: default_cluster_std(),
            seed: default_dataset_seed(),
        }
    }
}

impl Default for ModelSettings {
    fn default() -> Self {
        Self {
            default_classifier: default_classifier(),
        }
    }
}

/// Resolve the configuration file path, ensuring the parent directory exists.
pub fn config_path() -> Result<PathBuf, ConfigError> {
    Ok(app_dirs::app_root_dir()?.join(CONFIG_FILE_NAME))
}

/// Load configuration from disk, returning defaults if the file is missing.
pub fn load_or_default() -> Result<AppConfig, ConfigError> {
    load_from_path(&config_path()?)
}

/// Load configuration from a specific path, returning defaults if missing.
pub fn load_from_path(path: &Path) -> Result<AppConfig, ConfigError> {
    if !path.exists() {
        return Ok(AppConfig::default());
    }
    let text = std::fs::read_to_string(path).map_err(|source| ConfigError::Read {
        path: path.to_path_buf(),
        source,
    })?;
    toml::from_str(&text).map_err(|source| ConfigError::Parse {
        path: path.to_path_buf(),
        source,
    })
}

/// Persist configuration to a specific path, creating parent directories as needed.
pub fn save_to_path(config: &AppConfig, path: &Path) -> Result<(), ConfigError> {
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent).map_err(|source| ConfigError::Write {
            path: parent.to_path_buf(),
            source,
        })?;
    }
    let text = toml::to_string_pretty(config)?;
    std::fs::write(path, text).map_err(|source| ConfigError::Write {
        path: path.to_path_buf(),
        source,
    })
}
