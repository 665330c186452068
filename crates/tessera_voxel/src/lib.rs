//! # TESSERA Voxel
//!
//! Regular-grid voxelization of a mesh's bounding box.
//!
//! The box is cut into N cells along each axis and every cell becomes its
//! own 8-vertex, 12-triangle cube object, flat colored by its grid position.
//! The source surface is only used for its bounds.
//!
//! ## Example
//!
//! ```rust,ignore
//! use tessera_mesh::{primitives, Model};
//! use tessera_voxel::voxelize;
//!
//! let source = primitives::centered_cube("volumetric_mesh", 10.0)?;
//! let mut model = Model::new();
//! let count = voxelize(&source, 8, &mut model)?;
//! assert_eq!(count, 512);
//! ```

#![deny(missing_docs)]
#![deny(unsafe_code)]
#![deny(clippy::all)]
#![warn(clippy::pedantic)]
#![deny(clippy::perf)]

pub mod color;
pub mod config;
pub mod error;
pub mod grid;
pub mod voxelizer;

pub use color::voxel_color;
pub use config::VoxelizeConfig;
pub use error::{VoxelError, VoxelResult};
pub use grid::{GridIndex, Resolution, VoxelGrid};
pub use voxelizer::{bounding_box, cubes, plan, voxelize, voxelize_parallel, VoxelCube};
