//! # Voxelizer Error Types
//!
//! Input validation failures are reported before any output is produced.

use tessera_mesh::ModelError;
use thiserror::Error;

/// Errors that can occur while voxelizing.
#[derive(Error, Debug)]
pub enum VoxelError {
    /// The source mesh has no vertices to bound.
    #[error("mesh has no vertices")]
    EmptyMesh,

    /// Grid resolution must be at least 1.
    #[error("invalid resolution {resolution}: must be between 1 and {max}", max = u32::MAX)]
    InvalidResolution {
        /// The rejected value.
        resolution: i64,
    },

    /// The output sink refused an object.
    #[error("model sink failed: {0}")]
    Model(#[from] ModelError),

    /// Config file could not be read.
    #[error("cannot read config {path}: {source}")]
    ConfigRead {
        /// Config path.
        path: String,
        /// Underlying I/O error.
        source: std::io::Error,
    },

    /// Config file is not valid TOML for this schema.
    #[error("invalid configuration: {0}")]
    ConfigParse(#[from] toml::de::Error),
}

/// Result type for voxelizer operations.
pub type VoxelResult<T> = Result<T, VoxelError>;
