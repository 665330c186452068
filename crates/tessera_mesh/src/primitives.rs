//! Procedural primitives - "Data as Geometry"
//!
//! Every box-shaped object in the workspace comes from [`cube`]: one corner
//! ordering and one outward winding, whatever the size or position.
//!
//! ```text
//!        7 ──────── 6          z
//!       ╱│         ╱│          │  y
//!      4 ──────── 5 │          │ ╱
//!      │ 3 ───────│─ 2         │╱
//!      │╱         │╱           └──── x
//!      0 ──────── 1
//! ```

use tessera_shared::Point3;

use crate::error::ModelResult;
use crate::mesh::MeshObject;

/// Corner signs (−1 or +1 per axis); 0–3 bottom ring, 4–7 top ring.
const CUBE_CORNERS: [[f32; 3]; 8] = [
    [-1.0, -1.0, -1.0],
    [1.0, -1.0, -1.0],
    [1.0, 1.0, -1.0],
    [-1.0, 1.0, -1.0],
    [-1.0, -1.0, 1.0],
    [1.0, -1.0, 1.0],
    [1.0, 1.0, 1.0],
    [-1.0, 1.0, 1.0],
];

/// Triangle template, counter-clockwise seen from outside.
pub const CUBE_TRIANGLES: [[u32; 3]; 12] = [
    // Bottom (−z)
    [0, 2, 1],
    [0, 3, 2],
    // Top (+z)
    [4, 5, 6],
    [4, 6, 7],
    // Front (−y)
    [0, 1, 5],
    [0, 5, 4],
    // Back (+y)
    [2, 3, 7],
    [2, 7, 6],
    // Left (−x)
    [0, 4, 7],
    [0, 7, 3],
    // Right (+x)
    [1, 2, 6],
    [1, 6, 5],
];

/// Geometry of one axis-aligned cube, not yet attached to any model.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CubeGeometry {
    /// Corner positions.
    pub vertices: [Point3; 8],
    /// Triangles ([`CUBE_TRIANGLES`]).
    pub triangles: [[u32; 3]; 12],
}

impl CubeGeometry {
    /// Copies the geometry into a named mesh object.
    ///
    /// # Errors
    ///
    /// Returns an error only if a collapsed cube produces an invalid
    /// triangle, which the template never does.
    pub fn into_mesh(self, name: impl Into<String>) -> ModelResult<MeshObject> {
        MeshObject::from_geometry(name, &self.vertices, &self.triangles)
    }
}

/// Cube centered at `center` reaching `half_extents` along each axis.
///
/// Zero half extents are allowed; the cube then collapses onto a plane,
/// line or point but keeps its topology.
#[must_use]
pub fn cube(center: Point3, half_extents: Point3) -> CubeGeometry {
    let vertices = CUBE_CORNERS.map(|signs| center + Point3::from_array(signs).scale(half_extents));
    CubeGeometry {
        vertices,
        triangles: CUBE_TRIANGLES,
    }
}

/// Box with one corner at `origin` and the given size.
///
/// # Errors
///
/// See [`CubeGeometry::into_mesh`].
pub fn box_mesh(name: impl Into<String>, origin: Point3, size: Point3) -> ModelResult<MeshObject> {
    let half = size * 0.5;
    cube(origin + half, half).into_mesh(name)
}

/// Cube of edge length `edge` centered on the origin.
///
/// # Errors
///
/// See [`CubeGeometry::into_mesh`].
pub fn centered_cube(name: impl Into<String>, edge: f32) -> ModelResult<MeshObject> {
    cube(Point3::ZERO, Point3::splat(edge * 0.5)).into_mesh(name)
}
