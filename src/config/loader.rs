use std::path::Path;

use tracing::debug;

use crate::error::{ChordChartError, Result};

use super::ChartConfig;

/// Serialization format of a chart configuration file.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConfigFormat {
    Toml,
    Json,
}

impl ConfigFormat {
    /// Pick the format from the file extension; anything but `.json` is TOML.
    #[must_use]
    pub fn from_path(path: &Path) -> Self {
        match path.extension().and_then(|e| e.to_str()) {
            Some(ext) if ext.eq_ignore_ascii_case("json") => Self::Json,
            _ => Self::Toml,
        }
    }

    /// Parse configuration text in this format.
    ///
    /// # Errors
    /// Returns an error if the content is not valid TOML/JSON for a chart.
    pub fn parse(self, content: &str) -> Result<ChartConfig> {
        match self {
            Self::Toml => Ok(toml::from_str(content)?),
            Self::Json => Ok(serde_json::from_str(content)?),
        }
    }
}

/// Trait for filesystem operations (for testability).
pub trait FileSystem {
    /// Read file contents as a string.
    ///
    /// # Errors
    /// Returns an error if the file cannot be read.
    fn read_to_string(&self, path: &Path) -> std::io::Result<String>;
}

/// Real filesystem implementation.
#[derive(Debug, Default, Clone, Copy)]
pub struct RealFileSystem;

impl FileSystem for RealFileSystem {
    fn read_to_string(&self, path: &Path) -> std::io::Result<String> {
        std::fs::read_to_string(path)
    }
}

/// Loads chart configurations from TOML or JSON files.
#[derive(Debug, Default)]
pub struct ChartConfigLoader<F: FileSystem = RealFileSystem> {
    fs: F,
}

impl ChartConfigLoader<RealFileSystem> {
    #[must_use]
    pub const fn new() -> Self {
        Self { fs: RealFileSystem }
    }
}

impl<F: FileSystem> ChartConfigLoader<F> {
    pub const fn with_fs(fs: F) -> Self {
        Self { fs }
    }

    /// Load a configuration from `path`. The result is parsed but not validated.
    ///
    /// # Errors
    /// Returns an error if the file cannot be read or parsed.
    pub fn load(&self, path: &Path) -> Result<ChartConfig> {
        let content = self
            .fs
            .read_to_string(path)
            .map_err(|source| ChordChartError::FileRead {
                path: path.to_path_buf(),
                source,
            })?;
        let format = ConfigFormat::from_path(path);
        debug!(path = %path.display(), ?format, "loading chart configuration");
        format.parse(&content)
    }
}

/// Load a chart configuration from disk.
///
/// # Errors
/// Returns an error if the file cannot be read or parsed.
pub fn load_chart_config(path: &Path) -> Result<ChartConfig> {
    ChartConfigLoader::new().load(path)
}

#[cfg(test)]
#[path = "loader_tests.rs"]
mod tests;
