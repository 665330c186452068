//! Bounding-box voxelizer.
//!
//! Fills the bounding box of a source mesh with N³ colored cubes, one mesh
//! object per cell. Every cell is filled: there is no occupancy test against
//! the source surface, so a sphere voxelizes to a full cube of cells.
//!
//! ## Pipeline
//!
//! ```text
//! VertexSource → bounding_box → VoxelGrid → cell_cube + voxel_color → ModelSink
//!                    ↓               ↓
//!               EmptyMesh    InvalidResolution      (before any output)
//! ```

use std::collections::HashMap;
use std::thread;

use tessera_mesh::primitives::CubeGeometry;
use tessera_mesh::{ModelSink, ObjectId, VertexSource};
use tessera_shared::{BoundingBox, Point3, Rgba};

use crate::color::voxel_color;
use crate::error::{VoxelError, VoxelResult};
use crate::grid::{GridIndex, Resolution, VoxelGrid};

/// Exact bounds of a vertex source.
///
/// # Errors
///
/// Returns [`VoxelError::EmptyMesh`] if the source has no vertices.
pub fn bounding_box<S: VertexSource + ?Sized>(source: &S) -> VoxelResult<BoundingBox> {
    BoundingBox::from_points(source.iter_vertices()).ok_or(VoxelError::EmptyMesh)
}

/// Validates the inputs and lays out the grid, emitting nothing.
///
/// The mesh is checked before the resolution.
///
/// # Errors
///
/// Returns [`VoxelError::EmptyMesh`] or [`VoxelError::InvalidResolution`].
pub fn plan<S: VertexSource + ?Sized>(source: &S, resolution: i64) -> VoxelResult<VoxelGrid> {
    let bounds = bounding_box(source)?;
    let resolution = Resolution::new(resolution)?;
    Ok(VoxelGrid::new(bounds, resolution))
}

/// One generated voxel, ready to be emitted.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct VoxelCube {
    /// Cell coordinates.
    pub index: GridIndex,
    /// Cell center.
    pub center: Point3,
    /// Cube geometry.
    pub geometry: CubeGeometry,
    /// Flat color for all 12 triangles.
    pub color: Rgba,
}

impl VoxelCube {
    /// Builds the voxel for one cell.
    #[must_use]
    pub fn at(grid: &VoxelGrid, index: GridIndex) -> Self {
        Self {
            index,
            center: grid.cell_center(index),
            geometry: grid.cell_cube(index),
            color: voxel_color(index, grid.resolution()),
        }
    }

    /// Object name, `voxel_{x}_{y}_{z}`.
    #[must_use]
    pub fn name(&self) -> String {
        format!("voxel_{}_{}_{}", self.index.x, self.index.y, self.index.z)
    }

    /// Emits this voxel as a new object.
    ///
    /// # Errors
    ///
    /// Propagates sink failures.
    pub fn emit<K: ModelSink + ?Sized>(&self, sink: &mut K) -> VoxelResult<ObjectId> {
        let id = sink.emit_flat_colored(
            &self.name(),
            &self.geometry.vertices,
            &self.geometry.triangles,
            self.color,
        )?;
        Ok(id)
    }
}

/// All voxels of a grid in x, y, z order.
pub fn cubes(grid: &VoxelGrid) -> impl Iterator<Item = VoxelCube> + '_ {
    grid.indices().map(move |index| VoxelCube::at(grid, index))
}

fn log_plan(grid: &VoxelGrid) {
    let n = grid.resolution().get();
    let c = grid.cell_size();
    tracing::info!("Creating {n}x{n}x{n} voxel grid");
    tracing::info!("Voxel size: {:.3} x {:.3} x {:.3}", c.x, c.y, c.z);
    let bounds = grid.bounds();
    if bounds.min.has_nan() || bounds.max.has_nan() {
        tracing::warn!("Source bounds contain NaN; voxel positions will be NaN");
    } else if bounds.is_degenerate() {
        tracing::warn!("Bounding box is flat on at least one axis; voxels will collapse onto it");
    }
}

/// Emits every voxel of an already validated grid, sequentially.
fn emit_grid<K: ModelSink + ?Sized>(grid: &VoxelGrid, sink: &mut K) -> VoxelResult<usize> {
    log_plan(grid);

    let mut count = 0usize;
    for cube in cubes(grid) {
        cube.emit(sink)?;
        count += 1;
    }

    tracing::info!("Created {count} volumetric cubes");
    Ok(count)
}

/// Fills the source's bounding box with `resolution`³ colored cubes.
///
/// Returns the number of voxels emitted, always N³.
///
/// # Errors
///
/// [`VoxelError::EmptyMesh`] and [`VoxelError::InvalidResolution`] are
/// returned before anything reaches the sink. A sink failure stops the run
/// and is returned as [`VoxelError::Model`].
pub fn voxelize<S, K>(source: &S, resolution: i64, sink: &mut K) -> VoxelResult<usize>
where
    S: VertexSource + ?Sized,
    K: ModelSink + ?Sized,
{
    let grid = plan(source, resolution)?;
    emit_grid(&grid, sink)
}

/// [`voxelize`] with cube synthesis spread over `threads` workers.
///
/// Workers build whole x-slabs and send them to the calling thread, which
/// emits them in ascending x. The resulting model is identical to the
/// sequential one. `threads` is clamped to `1..=N`.
///
/// # Errors
///
/// Same as [`voxelize`].
pub fn voxelize_parallel<S, K>(
    source: &S,
    resolution: i64,
    sink: &mut K,
    threads: usize,
) -> VoxelResult<usize>
where
    S: VertexSource + ?Sized,
    K: ModelSink + ?Sized,
{
    let grid = plan(source, resolution)?;
    let n = grid.resolution().get();
    let threads = u32::try_from(threads).unwrap_or(u32::MAX).clamp(1, n);
    if threads == 1 {
        return emit_grid(&grid, sink);
    }
    log_plan(&grid);
    tracing::debug!("Synthesizing {n} slabs on {threads} threads");

    let count = thread::scope(|scope| -> VoxelResult<usize> {
        let (tx, rx) = crossbeam_channel::bounded::<(u32, Vec<VoxelCube>)>(threads as usize);
        let grid = &grid;

        for worker in 0..threads {
            let tx = tx.clone();
            scope.spawn(move || {
                for x in (worker..n).step_by(threads as usize) {
                    let slab: Vec<VoxelCube> =
                        grid.slab(x).map(|index| VoxelCube::at(grid, index)).collect();
                    // Collector gone: it hit a sink error.
                    if tx.send((x, slab)).is_err() {
                        break;
                    }
                }
            });
        }
        drop(tx);

        let mut pending: HashMap<u32, Vec<VoxelCube>> = HashMap::new();
        let mut next = 0u32;
        let mut count = 0usize;
        for (x, slab) in rx {
            pending.insert(x, slab);
            while let Some(ready) = pending.remove(&next) {
                for cube in &ready {
                    cube.emit(sink)?;
                }
                count += ready.len();
                next += 1;
            }
        }
        Ok(count)
    })?;

    tracing::info!("Created {count} volumetric cubes");
    Ok(count)
}
