//! Mesh statistics: volume, center of mass, watertightness.
//!
//! Volumes come from the divergence theorem: each triangle contributes the
//! signed volume of the tetrahedron it spans with the origin. A closed mesh
//! wound counter-clockwise from outside has positive total volume.
//! Accumulation is done in `f64`.

use std::collections::HashMap;

use tessera_shared::{BoundingBox, Point3};

use crate::mesh::MeshObject;

/// Six times the signed volume of the tetrahedron (origin, a, b, c).
///
/// Kept undivided so sums over exactly representable inputs stay exact.
#[inline]
fn tetra_det(a: Point3, b: Point3, c: Point3) -> f64 {
    let [ax, ay, az] = a.to_array().map(f64::from);
    let [bx, by, bz] = b.to_array().map(f64::from);
    let [cx, cy, cz] = c.to_array().map(f64::from);
    ax * (by * cz - bz * cy) - ay * (bx * cz - bz * cx) + az * (bx * cy - by * cx)
}

/// Signed volume enclosed by raw triangle arrays.
///
/// Triangles referencing missing vertices are skipped.
#[must_use]
pub fn signed_volume_of(vertices: &[Point3], triangles: &[[u32; 3]]) -> f64 {
    triangles
        .iter()
        .filter_map(|&[a, b, c]| {
            Some(tetra_det(
                *vertices.get(a as usize)?,
                *vertices.get(b as usize)?,
                *vertices.get(c as usize)?,
            ))
        })
        .sum::<f64>()
        / 6.0
}

/// Signed volume of a mesh object.
#[must_use]
pub fn signed_volume(mesh: &MeshObject) -> f64 {
    (0..mesh.triangle_count())
        .filter_map(|i| mesh.triangle_positions(i))
        .map(|[a, b, c]| tetra_det(a, b, c))
        .sum::<f64>()
        / 6.0
}

/// Volume-weighted centroid.
///
/// Falls back to the plain vertex average when the enclosed volume is zero.
/// Returns `None` for an empty mesh.
#[must_use]
pub fn center_of_mass(mesh: &MeshObject) -> Option<Point3> {
    if mesh.is_empty() {
        return None;
    }

    // Both sums carry the same factor of 6, which cancels in the division.
    let mut volume = 0.0f64;
    let mut moment = [0.0f64; 3];
    for [a, b, c] in (0..mesh.triangle_count()).filter_map(|i| mesh.triangle_positions(i)) {
        let v = tetra_det(a, b, c);
        volume += v;
        // Tetra centroid is (0 + a + b + c) / 4.
        for (axis, m) in moment.iter_mut().enumerate() {
            *m += v * f64::from(a.axis(axis) + b.axis(axis) + c.axis(axis)) / 4.0;
        }
    }

    if volume.abs() > f64::EPSILON {
        #[allow(clippy::cast_possible_truncation)]
        let center = moment.map(|m| (m / volume) as f32);
        Some(Point3::from_array(center))
    } else {
        let sum = mesh.vertices().iter().fold(Point3::ZERO, |acc, &v| acc + v);
        Some(sum / mesh.vertex_count() as f32)
    }
}

/// True if every directed edge is matched by exactly one reverse edge.
///
/// This is the closed, consistently oriented 2-manifold condition that
/// model validators check. An empty mesh is not watertight.
#[must_use]
pub fn is_watertight(mesh: &MeshObject) -> bool {
    if mesh.triangle_count() == 0 {
        return false;
    }

    let mut edges: HashMap<(u32, u32), u32> = HashMap::with_capacity(mesh.triangle_count() * 3);
    for triangle in mesh.triangles() {
        let [a, b, c] = triangle.indices;
        for edge in [(a, b), (b, c), (c, a)] {
            *edges.entry(edge).or_insert(0) += 1;
        }
    }

    edges
        .iter()
        .all(|(&(a, b), &count)| count == 1 && edges.get(&(b, a)) == Some(&1))
}

/// Everything `tessera inspect` reports for one object.
#[derive(Debug, Clone, PartialEq)]
pub struct MeshInfo {
    /// Vertex count.
    pub vertex_count: usize,
    /// Triangle count.
    pub triangle_count: usize,
    /// Bounds, `None` for an empty mesh.
    pub bounds: Option<BoundingBox>,
    /// Signed enclosed volume.
    pub volume: f64,
    /// Center of mass, `None` for an empty mesh.
    pub center_of_mass: Option<Point3>,
    /// Closed and consistently oriented.
    pub watertight: bool,
}

impl MeshInfo {
    /// Analyzes a mesh.
    #[must_use]
    pub fn of(mesh: &MeshObject) -> Self {
        Self {
            vertex_count: mesh.vertex_count(),
            triangle_count: mesh.triangle_count(),
            bounds: mesh.bounds(),
            volume: signed_volume(mesh),
            center_of_mass: center_of_mass(mesh),
            watertight: is_watertight(mesh),
        }
    }
}
