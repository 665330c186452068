//! Triangle mesh objects.
//!
//! A [`MeshObject`] owns its vertex and triangle arrays. Triangles index into
//! the vertex array and may carry a color from the owning model's color
//! table.

use serde::{Deserialize, Serialize};
use tessera_shared::{BoundingBox, Point3};

use crate::error::{ModelError, ModelResult};
use crate::model::ColorId;

/// One triangle: three vertex indices plus an optional color.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Triangle {
    /// Vertex indices, counter-clockwise seen from outside.
    pub indices: [u32; 3],
    /// Color table entry, if one was assigned.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub color: Option<ColorId>,
}

impl Triangle {
    /// Uncolored triangle.
    #[inline]
    #[must_use]
    pub const fn new(indices: [u32; 3]) -> Self {
        Self { indices, color: None }
    }

    /// True if two corners share a vertex.
    #[inline]
    #[must_use]
    pub const fn is_degenerate(&self) -> bool {
        let [a, b, c] = self.indices;
        a == b || b == c || a == c
    }
}

/// Named triangle mesh.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct MeshObject {
    /// Object name.
    pub name: String,
    vertices: Vec<Point3>,
    triangles: Vec<Triangle>,
}

impl MeshObject {
    /// Creates an empty mesh.
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            vertices: Vec::new(),
            triangles: Vec::new(),
        }
    }

    /// Creates an empty mesh with room for the given geometry.
    #[must_use]
    pub fn with_capacity(name: impl Into<String>, vertices: usize, triangles: usize) -> Self {
        Self {
            name: name.into(),
            vertices: Vec::with_capacity(vertices),
            triangles: Vec::with_capacity(triangles),
        }
    }

    /// Builds a mesh from raw arrays, validating every triangle.
    ///
    /// # Errors
    ///
    /// Returns an error if a triangle is degenerate or out of range.
    pub fn from_geometry(
        name: impl Into<String>,
        vertices: &[Point3],
        triangles: &[[u32; 3]],
    ) -> ModelResult<Self> {
        check_capacity(vertices.len(), "vertices")?;
        let mut mesh = Self::with_capacity(name, vertices.len(), triangles.len());
        mesh.vertices.extend_from_slice(vertices);
        for &indices in triangles {
            mesh.add_triangle(indices)?;
        }
        Ok(mesh)
    }

    /// Appends a vertex and returns its index.
    ///
    /// # Errors
    ///
    /// Returns [`ModelError::CapacityExceeded`] once 2³² vertices exist.
    pub fn add_vertex(&mut self, position: Point3) -> ModelResult<u32> {
        let index = next_index(self.vertices.len(), "vertices")?;
        self.vertices.push(position);
        Ok(index)
    }

    /// Appends a triangle and returns its index.
    ///
    /// # Errors
    ///
    /// Returns an error if a corner repeats or references a missing vertex.
    pub fn add_triangle(&mut self, indices: [u32; 3]) -> ModelResult<u32> {
        let triangle = Triangle::new(indices);
        self.check_triangle(&triangle)?;
        let index = next_index(self.triangles.len(), "triangles")?;
        self.triangles.push(triangle);
        Ok(index)
    }

    /// Sets the color of one triangle.
    ///
    /// # Errors
    ///
    /// Returns an error if the triangle does not exist.
    pub fn set_triangle_color(&mut self, triangle: u32, color: ColorId) -> ModelResult<()> {
        let triangle_count = self.triangles.len();
        let slot = self
            .triangles
            .get_mut(triangle as usize)
            .ok_or(ModelError::TriangleOutOfRange { index: triangle, triangle_count })?;
        slot.color = Some(color);
        Ok(())
    }

    /// Validates one triangle against this mesh's vertex array.
    ///
    /// # Errors
    ///
    /// Returns an error if a corner repeats or references a missing vertex.
    pub fn check_triangle(&self, triangle: &Triangle) -> ModelResult<()> {
        if triangle.is_degenerate() {
            return Err(ModelError::DegenerateTriangle(triangle.indices));
        }
        let vertex_count = self.vertices.len();
        for &index in &triangle.indices {
            if index as usize >= vertex_count {
                return Err(ModelError::VertexOutOfRange { index, vertex_count });
            }
        }
        Ok(())
    }

    /// Validates every triangle (used after deserializing).
    ///
    /// # Errors
    ///
    /// Returns the first invalid triangle's error.
    pub fn validate(&self) -> ModelResult<()> {
        self.triangles.iter().try_for_each(|t| self.check_triangle(t))
    }

    /// Number of vertices.
    #[inline]
    #[must_use]
    pub fn vertex_count(&self) -> usize {
        self.vertices.len()
    }

    /// Number of triangles.
    #[inline]
    #[must_use]
    pub fn triangle_count(&self) -> usize {
        self.triangles.len()
    }

    /// True if the mesh has no vertices.
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.vertices.is_empty()
    }

    /// Vertex array.
    #[inline]
    #[must_use]
    pub fn vertices(&self) -> &[Point3] {
        &self.vertices
    }

    /// Triangle array.
    #[inline]
    #[must_use]
    pub fn triangles(&self) -> &[Triangle] {
        &self.triangles
    }

    /// Corner positions of triangle `index`.
    #[must_use]
    pub fn triangle_positions(&self, index: usize) -> Option<[Point3; 3]> {
        let [a, b, c] = self.triangles.get(index)?.indices;
        Some([
            *self.vertices.get(a as usize)?,
            *self.vertices.get(b as usize)?,
            *self.vertices.get(c as usize)?,
        ])
    }

    /// Bounding box of all vertices, `None` if the mesh is empty.
    #[must_use]
    pub fn bounds(&self) -> Option<BoundingBox> {
        BoundingBox::from_points(self.vertices.iter().copied())
    }
}

/// Ids and indices are `u32`, so a list holds at most 2³² entries.
const MAX_ENTRIES: u64 = 1 << 32;

/// Index the next entry of a list of length `len` would get.
pub(crate) fn next_index(len: usize, kind: &'static str) -> ModelResult<u32> {
    u32::try_from(len).map_err(|_| ModelError::CapacityExceeded { kind })
}

/// Checks that a list of length `len` is fully addressable.
pub(crate) fn check_capacity(len: usize, kind: &'static str) -> ModelResult<()> {
    match u64::try_from(len) {
        Ok(n) if n <= MAX_ENTRIES => Ok(()),
        _ => Err(ModelError::CapacityExceeded { kind }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tetrahedron() -> MeshObject {
        MeshObject::from_geometry(
            "tetra",
            &[
                Point3::new(0.0, 0.0, 0.0),
                Point3::new(1.0, 0.0, 0.0),
                Point3::new(0.0, 1.0, 0.0),
                Point3::new(0.0, 0.0, 1.0),
            ],
            &[[0, 2, 1], [0, 1, 3], [1, 2, 3], [0, 3, 2]],
        )
        .unwrap()
    }

    #[test]
    fn test_indices_are_sequential() {
        let mut mesh = MeshObject::new("m");
        assert_eq!(mesh.add_vertex(Point3::ZERO).unwrap(), 0);
        assert_eq!(mesh.add_vertex(Point3::splat(1.0)).unwrap(), 1);
        assert_eq!(mesh.add_vertex(Point3::new(1.0, 0.0, 0.0)).unwrap(), 2);
        assert_eq!(mesh.add_triangle([0, 1, 2]).unwrap(), 0);
        assert_eq!(mesh.vertex_count(), 3);
        assert_eq!(mesh.triangle_count(), 1);
    }

    #[test]
    fn test_index_space_limits() {
        assert_eq!(next_index(0, "vertices").unwrap(), 0);
        assert_eq!(next_index(u32::MAX as usize, "vertices").unwrap(), u32::MAX);
        assert!(check_capacity(u32::MAX as usize, "objects").is_ok());
    }

    #[test]
    #[cfg(target_pointer_width = "64")]
    fn test_index_space_overflow_is_an_error() {
        let full = u32::MAX as usize + 1;
        assert!(check_capacity(full, "colors").is_ok());
        assert!(matches!(
            next_index(full, "objects"),
            Err(ModelError::CapacityExceeded { kind: "objects" })
        ));
        assert!(matches!(
            check_capacity(full + 1, "colors"),
            Err(ModelError::CapacityExceeded { kind: "colors" })
        ));
    }

    #[test]
    fn test_rejects_out_of_range_vertex() {
        let mut mesh = MeshObject::new("m");
        mesh.add_vertex(Point3::ZERO).unwrap();
        mesh.add_vertex(Point3::splat(1.0)).unwrap();
        let err = mesh.add_triangle([0, 1, 2]).unwrap_err();
        assert!(matches!(err, ModelError::VertexOutOfRange { index: 2, vertex_count: 2 }));
        assert_eq!(mesh.triangle_count(), 0);
    }

    #[test]
    fn test_rejects_degenerate_triangle() {
        let mut mesh = tetrahedron();
        let err = mesh.add_triangle([1, 1, 2]).unwrap_err();
        assert!(matches!(err, ModelError::DegenerateTriangle([1, 1, 2])));
    }

    #[test]
    fn test_triangle_color() {
        let mut mesh = tetrahedron();
        mesh.set_triangle_color(2, ColorId(7)).unwrap();
        assert_eq!(mesh.triangles()[2].color, Some(ColorId(7)));
        assert_eq!(mesh.triangles()[0].color, None);
        assert!(mesh.set_triangle_color(4, ColorId(0)).is_err());
    }

    #[test]
    fn test_bounds_and_positions() {
        let mesh = tetrahedron();
        let bounds = mesh.bounds().unwrap();
        assert_eq!(bounds.min, Point3::ZERO);
        assert_eq!(bounds.max, Point3::splat(1.0));

        let [a, b, c] = mesh.triangle_positions(0).unwrap();
        assert_eq!(a, Point3::ZERO);
        assert_eq!(b, Point3::new(0.0, 1.0, 0.0));
        assert_eq!(c, Point3::new(1.0, 0.0, 0.0));
        assert!(mesh.triangle_positions(9).is_none());
        assert!(MeshObject::new("empty").bounds().is_none());
    }
}
