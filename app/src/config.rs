//! File configuration for the heightmap CLI.

use anyhow::{Context, Result};
use heightmap::{HeightmapConfig, Shading};
use serde::Deserialize;
use std::path::{Path, PathBuf};

/// Root of a heightmap TOML file. Every table is optional.
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct FileConfig {
    /// Generation parameters.
    pub heightmap: HeightmapConfig,
    /// Where and how the image is written.
    pub output: OutputConfig,
}

/// Image output settings.
#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct OutputConfig {
    /// Target image path, format taken from the extension.
    pub path: PathBuf,
    /// Pixel shading.
    pub shading: Shading,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            path: PathBuf::from("heightmap.png"),
            shading: Shading::Grayscale,
        }
    }
}

impl FileConfig {
    /// Load configuration from a TOML file.
    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config: {}", path.display()))?;
        Self::parse(&content).with_context(|| format!("Failed to parse config: {}", path.display()))
    }

    /// Parse configuration from TOML text.
    pub fn parse(content: &str) -> Result<Self> {
        Ok(toml::from_str(content)?)
    }

    /// Load `path` if given, defaults otherwise.
    pub fn load_or_default(path: Option<&Path>) -> Result<Self> {
        match path {
            Some(path) => Self::load(path),
            None => Ok(Self::default()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_file_uses_defaults() {
        let config = FileConfig::parse("").unwrap();
        assert_eq!(config.heightmap, HeightmapConfig::default());
        assert_eq!(config.output.path, PathBuf::from("heightmap.png"));
        assert_eq!(config.output.shading, Shading::Grayscale);
    }

    #[test]
    fn partial_tables_merge_with_defaults() {
        let config = FileConfig::parse(
            r#"
            [heightmap]
            size = 129
            seed = 2025

            [output]
            shading = "terrain"
            "#,
        )
        .unwrap();
        assert_eq!(config.heightmap.size, 129);
        assert_eq!(config.heightmap.seed, Some(2025));
        assert_eq!(config.heightmap.roughness, 16.0);
        assert_eq!(config.output.shading, Shading::Terrain);
    }

    #[test]
    fn unknown_shading_is_an_error() {
        assert!(FileConfig::parse("[output]\nshading = \"sepia\"").is_err());
    }
}
