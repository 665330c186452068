//! Output seam: anything that can receive generated geometry.

use tessera_shared::{Point3, Rgba};

use crate::error::ModelResult;
use crate::model::{ColorId, ObjectId};

/// Receiver of generated mesh objects.
///
/// Generators only ever append; they never read back or mutate what they
/// emitted. [`Model`](crate::model::Model) is the in-memory implementation.
pub trait ModelSink {
    /// Creates a new, empty mesh object.
    ///
    /// # Errors
    ///
    /// Fails if no more objects can be addressed.
    fn create_object(&mut self, name: &str) -> ModelResult<ObjectId>;

    /// Appends a vertex to an object and returns its index.
    ///
    /// # Errors
    ///
    /// Fails if the object does not exist.
    fn append_vertex(&mut self, object: ObjectId, position: Point3) -> ModelResult<u32>;

    /// Appends a triangle to an object and returns its index.
    ///
    /// # Errors
    ///
    /// Fails if the object does not exist or the indices are invalid.
    fn append_triangle(&mut self, object: ObjectId, indices: [u32; 3]) -> ModelResult<u32>;

    /// Creates a color table entry.
    ///
    /// # Errors
    ///
    /// Fails if the color table is full.
    fn create_color(&mut self, color: Rgba) -> ModelResult<ColorId>;

    /// Assigns a color table entry to one triangle.
    ///
    /// # Errors
    ///
    /// Fails if the object, triangle or color does not exist.
    fn assign_triangle_color(
        &mut self,
        object: ObjectId,
        triangle: u32,
        color: ColorId,
    ) -> ModelResult<()>;

    /// Emits a whole object whose triangles all share one color.
    ///
    /// # Errors
    ///
    /// Propagates the first failing sink call.
    fn emit_flat_colored(
        &mut self,
        name: &str,
        vertices: &[Point3],
        triangles: &[[u32; 3]],
        color: Rgba,
    ) -> ModelResult<ObjectId> {
        let object = self.create_object(name)?;
        for &v in vertices {
            self.append_vertex(object, v)?;
        }
        let color = self.create_color(color)?;
        for &indices in triangles {
            let triangle = self.append_triangle(object, indices)?;
            self.assign_triangle_color(object, triangle, color)?;
        }
        Ok(object)
    }
}
