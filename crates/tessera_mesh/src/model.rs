//! The model container.
//!
//! A [`Model`] is created once per run, filled by generators through the
//! [`ModelSink`] seam, and handed to a [`ModelWriter`](crate::writer::ModelWriter).
//! Nothing in it is shared between runs.

use serde::{Deserialize, Serialize};
use tessera_shared::{BoundingBox, Point3, Rgba, Transform};

use crate::error::{ModelError, ModelResult};
use crate::mesh::{check_capacity, next_index, MeshObject};
use crate::sink::ModelSink;

/// Index of a mesh object inside its model.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ObjectId(pub u32);

/// Index of an entry in a model's color table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ColorId(pub u32);

/// An object placed in the build volume.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BuildItem {
    /// Object to build.
    pub object: ObjectId,
    /// Placement.
    pub transform: Transform,
}

/// One line of object information.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ObjectSummary {
    /// Object id.
    pub id: ObjectId,
    /// Object name.
    pub name: String,
    /// Vertex count.
    pub vertex_count: usize,
    /// Triangle count.
    pub triangle_count: usize,
}

/// Mesh objects, their shared color table, and build items.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Model {
    objects: Vec<MeshObject>,
    colors: Vec<Rgba>,
    build_items: Vec<BuildItem>,
}

impl Model {
    /// Creates an empty model.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds an already built mesh and returns its id.
    ///
    /// # Errors
    ///
    /// Returns [`ModelError::CapacityExceeded`] once 2³² objects exist.
    pub fn add_mesh(&mut self, mesh: MeshObject) -> ModelResult<ObjectId> {
        let id = ObjectId(next_index(self.objects.len(), "objects")?);
        self.objects.push(mesh);
        Ok(id)
    }

    /// Adds a build item.
    ///
    /// # Errors
    ///
    /// Returns an error if the object does not exist.
    pub fn add_build_item(&mut self, object: ObjectId, transform: Transform) -> ModelResult<()> {
        self.object(object)?;
        self.build_items.push(BuildItem { object, transform });
        Ok(())
    }

    /// Looks up an object.
    ///
    /// # Errors
    ///
    /// Returns an error if the id is unknown.
    pub fn object(&self, id: ObjectId) -> ModelResult<&MeshObject> {
        self.objects.get(id.0 as usize).ok_or(ModelError::UnknownObject(id.0))
    }

    fn object_mut(&mut self, id: ObjectId) -> ModelResult<&mut MeshObject> {
        self.objects.get_mut(id.0 as usize).ok_or(ModelError::UnknownObject(id.0))
    }

    /// First object with the given name.
    #[must_use]
    pub fn object_by_name(&self, name: &str) -> Option<(ObjectId, &MeshObject)> {
        self.objects
            .iter()
            .enumerate()
            .find(|(_, o)| o.name == name)
            .map(|(i, o)| (ObjectId(i as u32), o))
    }

    /// Looks up a color table entry.
    ///
    /// # Errors
    ///
    /// Returns an error if the id is unknown.
    pub fn color(&self, id: ColorId) -> ModelResult<Rgba> {
        self.colors.get(id.0 as usize).copied().ok_or(ModelError::UnknownColor(id.0))
    }

    /// All objects in insertion order.
    #[must_use]
    pub fn objects(&self) -> &[MeshObject] {
        &self.objects
    }

    /// The color table.
    #[must_use]
    pub fn colors(&self) -> &[Rgba] {
        &self.colors
    }

    /// Build items in insertion order.
    #[must_use]
    pub fn build_items(&self) -> &[BuildItem] {
        &self.build_items
    }

    /// Bounds of a build item's object after its transform is applied.
    ///
    /// # Errors
    ///
    /// Returns an error if the item references an unknown object.
    pub fn placed_bounds(&self, item: &BuildItem) -> ModelResult<Option<BoundingBox>> {
        let object = self.object(item.object)?;
        if item.transform.is_identity() {
            return Ok(object.bounds());
        }
        Ok(BoundingBox::from_points(object.vertices().iter().map(|&v| item.transform.apply(v))))
    }

    /// Number of objects.
    #[must_use]
    pub fn object_count(&self) -> usize {
        self.objects.len()
    }

    /// Vertices across all objects.
    #[must_use]
    pub fn total_vertex_count(&self) -> usize {
        self.objects.iter().map(MeshObject::vertex_count).sum()
    }

    /// Triangles across all objects.
    #[must_use]
    pub fn total_triangle_count(&self) -> usize {
        self.objects.iter().map(MeshObject::triangle_count).sum()
    }

    /// Id, name and sizes of every object.
    #[must_use]
    pub fn object_summaries(&self) -> Vec<ObjectSummary> {
        self.objects
            .iter()
            .enumerate()
            .map(|(i, o)| ObjectSummary {
                id: ObjectId(i as u32),
                name: o.name.clone(),
                vertex_count: o.vertex_count(),
                triangle_count: o.triangle_count(),
            })
            .collect()
    }

    /// Checks every cross reference (triangles, colors, build items).
    ///
    /// # Errors
    ///
    /// Returns the first broken reference.
    pub fn validate(&self) -> ModelResult<()> {
        check_capacity(self.objects.len(), "objects")?;
        check_capacity(self.colors.len(), "colors")?;
        for object in &self.objects {
            object.validate()?;
            for triangle in object.triangles() {
                if let Some(color) = triangle.color {
                    self.color(color)?;
                }
            }
        }
        for item in &self.build_items {
            self.object(item.object)?;
        }
        Ok(())
    }
}

impl ModelSink for Model {
    fn create_object(&mut self, name: &str) -> ModelResult<ObjectId> {
        self.add_mesh(MeshObject::new(name))
    }

    fn append_vertex(&mut self, object: ObjectId, position: Point3) -> ModelResult<u32> {
        self.object_mut(object)?.add_vertex(position)
    }

    fn append_triangle(&mut self, object: ObjectId, indices: [u32; 3]) -> ModelResult<u32> {
        self.object_mut(object)?.add_triangle(indices)
    }

    fn create_color(&mut self, color: Rgba) -> ModelResult<ColorId> {
        let id = ColorId(next_index(self.colors.len(), "colors")?);
        self.colors.push(color);
        Ok(id)
    }

    fn assign_triangle_color(
        &mut self,
        object: ObjectId,
        triangle: u32,
        color: ColorId,
    ) -> ModelResult<()> {
        self.color(color)?;
        self.object_mut(object)?.set_triangle_color(triangle, color)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn triangle_model() -> (Model, ObjectId) {
        let mut model = Model::new();
        let id = model.create_object("tri").unwrap();
        for p in [Point3::ZERO, Point3::new(1.0, 0.0, 0.0), Point3::new(0.0, 1.0, 0.0)] {
            model.append_vertex(id, p).unwrap();
        }
        model.append_triangle(id, [0, 1, 2]).unwrap();
        (model, id)
    }

    #[test]
    fn test_sink_builds_object() {
        let (model, id) = triangle_model();
        assert_eq!(id, ObjectId(0));
        let object = model.object(id).unwrap();
        assert_eq!(object.name, "tri");
        assert_eq!(object.vertex_count(), 3);
        assert_eq!(object.triangle_count(), 1);
        assert!(model.validate().is_ok());
    }

    #[test]
    fn test_unknown_ids() {
        let (mut model, id) = triangle_model();
        assert!(matches!(
            model.append_vertex(ObjectId(5), Point3::ZERO),
            Err(ModelError::UnknownObject(5))
        ));
        assert!(matches!(
            model.assign_triangle_color(id, 0, ColorId(3)),
            Err(ModelError::UnknownColor(3))
        ));
        assert!(model.add_build_item(ObjectId(1), Transform::IDENTITY).is_err());
    }

    #[test]
    fn test_color_assignment() {
        let (mut model, id) = triangle_model();
        let red = model.create_color(Rgba::opaque(255, 0, 0)).unwrap();
        model.assign_triangle_color(id, 0, red).unwrap();

        let triangle = model.object(id).unwrap().triangles()[0];
        assert_eq!(model.color(triangle.color.unwrap()).unwrap(), Rgba::opaque(255, 0, 0));
    }

    #[test]
    fn test_summaries_and_totals() {
        let (mut model, _) = triangle_model();
        model.add_mesh(MeshObject::new("empty")).unwrap();

        let summaries = model.object_summaries();
        assert_eq!(summaries.len(), 2);
        assert_eq!(summaries[1].name, "empty");
        assert_eq!(summaries[1].id, ObjectId(1));
        assert_eq!(model.total_vertex_count(), 3);
        assert_eq!(model.total_triangle_count(), 1);
        assert_eq!(model.object_by_name("empty").map(|(id, _)| id), Some(ObjectId(1)));
    }

    #[test]
    fn test_build_items() {
        let (mut model, id) = triangle_model();
        model.add_build_item(id, Transform::IDENTITY).unwrap();
        assert_eq!(model.build_items().len(), 1);
        assert!(model.build_items()[0].transform.is_identity());
    }

    #[test]
    fn test_placed_bounds_follow_transform() {
        let (mut model, id) = triangle_model();
        let shifted = Transform { translation: [10.0, 0.0, -2.0], ..Transform::IDENTITY };
        model.add_build_item(id, Transform::IDENTITY).unwrap();
        model.add_build_item(id, shifted).unwrap();

        let [fixed, moved] = [0, 1].map(|i| {
            model.placed_bounds(&model.build_items()[i]).unwrap().unwrap()
        });
        assert_eq!(moved.min, fixed.min + Point3::new(10.0, 0.0, -2.0));
        assert_eq!(moved.max, fixed.max + Point3::new(10.0, 0.0, -2.0));

        let dangling = BuildItem { object: ObjectId(9), transform: shifted };
        assert!(matches!(model.placed_bounds(&dangling), Err(ModelError::UnknownObject(9))));
    }
}
