//! # TESSERA Mesh
//!
//! Mesh objects, the model container, and the seams through which geometry
//! enters and leaves the workspace.
//!
//! ## Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │                      MODEL PIPELINE                         │
//! ├─────────────────────────────────────────────────────────────┤
//! │  VertexSource → generator → ModelSink (Model) → ModelWriter │
//! │                                  ↓                          │
//! │                          analysis (MeshInfo)                │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Example
//!
//! ```rust,ignore
//! use tessera_mesh::{primitives, Session, Transform};
//!
//! let session = Session::new();
//! let mut model = session.create_model();
//! let id = model.add_mesh(primitives::box_mesh("Box", Point3::ZERO, size)?)?;
//! model.add_build_item(id, Transform::IDENTITY)?;
//! session.query_writer("json")?.write_to_file(&model, Path::new("cube.json"))?;
//! ```

#![deny(missing_docs)]
#![deny(unsafe_code)]
#![deny(clippy::all)]
#![warn(clippy::pedantic)]
#![deny(clippy::perf)]

pub mod analysis;
pub mod error;
pub mod mesh;
pub mod model;
pub mod primitives;
pub mod session;
pub mod sink;
pub mod source;
pub mod writer;

pub use analysis::MeshInfo;
pub use error::{ModelError, ModelResult};
pub use mesh::{MeshObject, Triangle};
pub use model::{BuildItem, ColorId, Model, ObjectId, ObjectSummary};
pub use primitives::{CubeGeometry, CUBE_TRIANGLES};
pub use session::{LibraryVersion, Session};
pub use sink::ModelSink;
pub use source::VertexSource;
pub use writer::{JsonModelReader, JsonModelWriter, ModelFormat, ModelReader, ModelWriter};

pub use tessera_shared::{BoundingBox, Point3, Rgba, Transform};
