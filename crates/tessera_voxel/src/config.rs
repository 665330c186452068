//! # Voxelization Run Configuration
//!
//! Loaded once at startup from an optional TOML file. Every key is optional:
//!
//! ```toml
//! resolution = 16
//! source_edge = 10.0
//! source_name = "volumetric_mesh"
//! output = "volumetric_model_with_voxels.json"
//! format = "json"
//! threads = 4
//! ```

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::{VoxelError, VoxelResult};

/// Default cells per axis.
pub const DEFAULT_RESOLUTION: i64 = 8;
/// Default source cube edge length.
pub const DEFAULT_SOURCE_EDGE: f32 = 10.0;
/// Default source object name.
pub const DEFAULT_SOURCE_NAME: &str = "volumetric_mesh";
/// Default output path.
pub const DEFAULT_OUTPUT: &str = "volumetric_model_with_voxels.json";

/// Settings for one voxelization run.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct VoxelizeConfig {
    /// Cells per axis. Validated when the run starts, not when parsed.
    pub resolution: i64,
    /// Edge length of the centered source cube.
    pub source_edge: f32,
    /// Object name of the source cube.
    pub source_name: String,
    /// Where the model is written.
    pub output: PathBuf,
    /// Writer format name.
    pub format: String,
    /// Worker threads for cube synthesis.
    pub threads: usize,
}

impl Default for VoxelizeConfig {
    fn default() -> Self {
        Self {
            resolution: DEFAULT_RESOLUTION,
            source_edge: DEFAULT_SOURCE_EDGE,
            source_name: DEFAULT_SOURCE_NAME.to_string(),
            output: PathBuf::from(DEFAULT_OUTPUT),
            format: "json".to_string(),
            threads: 1,
        }
    }
}

impl VoxelizeConfig {
    /// Parses a config from TOML text.
    ///
    /// # Errors
    ///
    /// Returns [`VoxelError::ConfigParse`] on malformed TOML or unknown keys.
    pub fn from_toml_str(text: &str) -> VoxelResult<Self> {
        Ok(toml::from_str(text)?)
    }

    /// Reads and parses a config file.
    ///
    /// # Errors
    ///
    /// Returns [`VoxelError::ConfigRead`] if the file cannot be read, or
    /// [`VoxelError::ConfigParse`] if it does not parse.
    pub fn load(path: impl AsRef<Path>) -> VoxelResult<Self> {
        let path = path.as_ref();
        let text = std::fs::read_to_string(path).map_err(|source| VoxelError::ConfigRead {
            path: path.display().to_string(),
            source,
        })?;
        let config = Self::from_toml_str(&text)?;
        tracing::debug!("Loaded voxelize config from {}", path.display());
        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = VoxelizeConfig::default();
        assert_eq!(config.resolution, 8);
        assert_eq!(config.source_edge, 10.0);
        assert_eq!(config.source_name, "volumetric_mesh");
        assert_eq!(config.output, PathBuf::from("volumetric_model_with_voxels.json"));
        assert_eq!(config.format, "json");
        assert_eq!(config.threads, 1);
    }

    #[test]
    fn test_empty_file_is_default() {
        assert_eq!(VoxelizeConfig::from_toml_str("").unwrap(), VoxelizeConfig::default());
    }

    #[test]
    fn test_partial_override() {
        let config = VoxelizeConfig::from_toml_str("resolution = 3\nthreads = 2\n").unwrap();
        assert_eq!(config.resolution, 3);
        assert_eq!(config.threads, 2);
        assert_eq!(config.source_name, DEFAULT_SOURCE_NAME);
    }

    #[test]
    fn test_unknown_key_rejected() {
        let err = VoxelizeConfig::from_toml_str("resolutoin = 3").unwrap_err();
        assert!(matches!(err, VoxelError::ConfigParse(_)));
    }

    #[test]
    fn test_negative_resolution_parses() {
        // Range checking belongs to the voxelizer.
        let config = VoxelizeConfig::from_toml_str("resolution = -2").unwrap();
        assert_eq!(config.resolution, -2);
    }

    #[test]
    fn test_missing_file() {
        let err = VoxelizeConfig::load("/nonexistent/tessera/voxelize.toml").unwrap_err();
        assert!(matches!(err, VoxelError::ConfigRead { .. }));
    }
}
