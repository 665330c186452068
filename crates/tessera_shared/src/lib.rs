//! # TESSERA Shared
//!
//! Value types used by every other crate in the workspace.
//!
//! ## CRITICAL RULE
//!
//! This crate must NEVER depend on:
//! - mesh containers or models
//! - file formats or I/O
//!
//! If you need a mesh type, put it in `tessera_mesh`.

#![deny(missing_docs)]
#![deny(unsafe_code)]

pub mod bounds;
pub mod color;
pub mod math;

pub use bounds::BoundingBox;
pub use color::Rgba;
pub use math::{Point3, Transform};
