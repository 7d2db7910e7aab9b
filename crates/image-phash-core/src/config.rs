use std::path::{Path, PathBuf};

use image::imageops::FilterType;
use log::LevelFilter;
use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

/// Resampling filter used when shrinking an image to the 32x32 hash input
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum ResizeFilter {
    /// Nearest neighbour
    Nearest,

    /// Linear (triangle) filter
    Triangle,

    /// Cubic (Catmull-Rom) filter
    CatmullRom,

    /// Gaussian filter
    Gaussian,

    /// Lanczos with window 3
    #[default]
    Lanczos3,
}

impl From<ResizeFilter> for FilterType {
    fn from(filter: ResizeFilter) -> Self {
        match filter {
            ResizeFilter::Nearest => FilterType::Nearest,
            ResizeFilter::Triangle => FilterType::Triangle,
            ResizeFilter::CatmullRom => FilterType::CatmullRom,
            ResizeFilter::Gaussian => FilterType::Gaussian,
            ResizeFilter::Lanczos3 => FilterType::Lanczos3,
        }
    }
}

/// Log level for the application
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum LogLevel {
    Error,
    Warn,
    #[default]
    Info,
    Debug,
    Trace,
}

impl From<LogLevel> for LevelFilter {
    fn from(level: LogLevel) -> Self {
        match level {
            LogLevel::Error => LevelFilter::Error,
            LogLevel::Warn => LevelFilter::Warn,
            LogLevel::Info => LevelFilter::Info,
            LogLevel::Debug => LevelFilter::Debug,
            LogLevel::Trace => LevelFilter::Trace,
        }
    }
}

/// Configuration for perceptual hashing
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Filter used by the default preprocessor when resizing to 32x32
    pub resize_filter: ResizeFilter,

    /// Log level
    pub log_level: LogLevel,

    /// Directory for rotating log files (stderr logging when unset)
    pub log_dir: Option<PathBuf>,
}

impl Config {
    /// Load configuration from a file
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let file = std::fs::File::open(path.as_ref())
            .map_err(|e| Error::Configuration(format!("Failed to open config file: {}", e)))?;

        let config: Config = serde_json::from_reader(file)
            .map_err(|e| Error::Configuration(format!("Failed to parse config file: {}", e)))?;

        Ok(config)
    }

    /// Save configuration to a file
    pub fn save_to_file<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        let file = std::fs::File::create(path.as_ref())
            .map_err(|e| Error::Configuration(format!("Failed to create config file: {}", e)))?;

        serde_json::to_writer_pretty(file, self)
            .map_err(|e| Error::Configuration(format!("Failed to write config file: {}", e)))?;

        Ok(())
    }

    /// Validate the configuration
    pub fn validate(&self) -> Result<()> {
        if let Some(dir) = &self.log_dir {
            if dir.as_os_str().is_empty() {
                return Err(Error::Configuration(
                    "Log directory must not be empty".to_string(),
                ));
            }

            if dir.is_file() {
                return Err(Error::Configuration(format!(
                    "Log directory {} is an existing file",
                    dir.display()
                )));
            }
        }

        Ok(())
    }
}
