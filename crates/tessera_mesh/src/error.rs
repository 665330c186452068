//! # Model Error Types
//!
//! All errors that can occur while building, reading or writing a model.

use thiserror::Error;

/// Errors that can occur in the model layer.
#[derive(Error, Debug)]
pub enum ModelError {
    /// Object id does not exist in this model.
    #[error("object not found: {0}")]
    UnknownObject(u32),

    /// Color id does not exist in the color table.
    #[error("color not found: {0}")]
    UnknownColor(u32),

    /// Triangle references a vertex the mesh does not have.
    #[error("vertex index out of range: {index} (mesh has {vertex_count} vertices)")]
    VertexOutOfRange {
        /// The offending index.
        index: u32,
        /// Vertices in the mesh.
        vertex_count: usize,
    },

    /// Triangle index is past the end of the triangle list.
    #[error("triangle index out of range: {index} (mesh has {triangle_count} triangles)")]
    TriangleOutOfRange {
        /// The offending index.
        index: u32,
        /// Triangles in the mesh.
        triangle_count: usize,
    },

    /// Triangle uses the same vertex more than once.
    #[error("degenerate triangle: {0:?}")]
    DegenerateTriangle([u32; 3]),

    /// An index space is full; ids are 32-bit.
    #[error("too many {kind}: at most {max} fit in a model", max = u64::from(u32::MAX) + 1)]
    CapacityExceeded {
        /// What ran out ("objects", "colors", "vertices", "triangles").
        kind: &'static str,
    },

    /// No writer or reader registered for this format name.
    #[error("unsupported model format: {0}")]
    UnsupportedFormat(String),

    /// Underlying I/O failure.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Model dump could not be encoded or decoded.
    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

/// Result type for model operations.
pub type ModelResult<T> = Result<T, ModelError>;
