//! Input seam: read-only access to a mesh's vertices.

use tessera_shared::Point3;

use crate::mesh::MeshObject;

/// Read-only vertex provider.
pub trait VertexSource {
    /// Number of vertices.
    fn vertex_count(&self) -> usize;

    /// Position of vertex `index`; `index < vertex_count()`.
    fn vertex(&self, index: usize) -> Point3;

    /// Iterates all vertices in index order.
    fn iter_vertices(&self) -> VertexIter<'_, Self> {
        VertexIter { source: self, next: 0 }
    }
}

/// Iterator over a [`VertexSource`].
pub struct VertexIter<'a, S: ?Sized> {
    source: &'a S,
    next: usize,
}

impl<S: VertexSource + ?Sized> Iterator for VertexIter<'_, S> {
    type Item = Point3;

    fn next(&mut self) -> Option<Point3> {
        if self.next < self.source.vertex_count() {
            let v = self.source.vertex(self.next);
            self.next += 1;
            Some(v)
        } else {
            None
        }
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let left = self.source.vertex_count().saturating_sub(self.next);
        (left, Some(left))
    }
}

impl<S: VertexSource + ?Sized> ExactSizeIterator for VertexIter<'_, S> {}

impl VertexSource for MeshObject {
    fn vertex_count(&self) -> usize {
        MeshObject::vertex_count(self)
    }

    fn vertex(&self, index: usize) -> Point3 {
        self.vertices()[index]
    }
}

impl VertexSource for [Point3] {
    fn vertex_count(&self) -> usize {
        self.len()
    }

    fn vertex(&self, index: usize) -> Point3 {
        self[index]
    }
}

impl VertexSource for Vec<Point3> {
    fn vertex_count(&self) -> usize {
        self.len()
    }

    fn vertex(&self, index: usize) -> Point3 {
        self[index]
    }
}

impl<S: VertexSource + ?Sized> VertexSource for &S {
    fn vertex_count(&self) -> usize {
        (**self).vertex_count()
    }

    fn vertex(&self, index: usize) -> Point3 {
        (**self).vertex(index)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_iter_vertices() {
        let points = vec![Point3::ZERO, Point3::splat(1.0), Point3::splat(2.0)];
        let iter = points.iter_vertices();
        assert_eq!(iter.len(), 3);
        assert_eq!(iter.collect::<Vec<_>>(), points);
    }

    #[test]
    fn test_mesh_source() {
        let mut mesh = MeshObject::new("m");
        mesh.add_vertex(Point3::new(1.0, 2.0, 3.0)).unwrap();
        assert_eq!(VertexSource::vertex_count(&mesh), 1);
        assert_eq!(mesh.vertex(0), Point3::new(1.0, 2.0, 3.0));
    }

    #[test]
    fn test_empty_slice() {
        let points: &[Point3] = &[];
        assert_eq!(points.vertex_count(), 0);
        assert_eq!(points.iter_vertices().count(), 0);
    }
}
