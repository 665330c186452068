//! Regular grid over a bounding box.
//!
//! The grid always has the same number of cells, N, along every axis, so a
//! non-cubic box gets non-cubic cells. An axis with zero extent gets zero
//! cell size; that is valid output, not an error.

use std::num::NonZeroU32;

use tessera_mesh::primitives::{self, CubeGeometry};
use tessera_shared::{BoundingBox, Point3};

use crate::error::{VoxelError, VoxelResult};

/// Cells per axis (N ≥ 1).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Resolution(NonZeroU32);

impl Resolution {
    /// Validates a requested resolution.
    ///
    /// # Errors
    ///
    /// Returns [`VoxelError::InvalidResolution`] for `n <= 0` or values that
    /// do not fit in a `u32`.
    pub fn new(n: i64) -> VoxelResult<Self> {
        u32::try_from(n)
            .ok()
            .and_then(NonZeroU32::new)
            .map(Self)
            .ok_or(VoxelError::InvalidResolution { resolution: n })
    }

    /// Cells per axis.
    #[inline]
    #[must_use]
    pub const fn get(self) -> u32 {
        self.0.get()
    }

    /// Total cells (N³). Exact for every N up to `u32::MAX`.
    #[inline]
    #[must_use]
    pub const fn cell_count(self) -> u128 {
        let n = self.0.get() as u128;
        n * n * n
    }
}

impl TryFrom<i64> for Resolution {
    type Error = VoxelError;

    fn try_from(n: i64) -> VoxelResult<Self> {
        Self::new(n)
    }
}

/// Integer cell coordinates, each in `[0, N)`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct GridIndex {
    /// X cell.
    pub x: u32,
    /// Y cell.
    pub y: u32,
    /// Z cell.
    pub z: u32,
}

impl GridIndex {
    /// Creates an index.
    #[inline]
    #[must_use]
    pub const fn new(x: u32, y: u32, z: u32) -> Self {
        Self { x, y, z }
    }
}

/// N×N×N partition of a bounding box.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct VoxelGrid {
    bounds: BoundingBox,
    resolution: Resolution,
    cell_size: Point3,
}

impl VoxelGrid {
    /// Partitions `bounds` into `resolution`³ cells.
    #[must_use]
    pub fn new(bounds: BoundingBox, resolution: Resolution) -> Self {
        let n = resolution.get() as f32;
        Self {
            bounds,
            resolution,
            cell_size: bounds.extent() / n,
        }
    }

    /// The partitioned box.
    #[inline]
    #[must_use]
    pub const fn bounds(&self) -> BoundingBox {
        self.bounds
    }

    /// Cells per axis.
    #[inline]
    #[must_use]
    pub const fn resolution(&self) -> Resolution {
        self.resolution
    }

    /// Cell size per axis (extent / N).
    #[inline]
    #[must_use]
    pub const fn cell_size(&self) -> Point3 {
        self.cell_size
    }

    /// Half the cell size per axis.
    #[inline]
    #[must_use]
    pub fn half_cell(&self) -> Point3 {
        self.cell_size * 0.5
    }

    /// Total cells (N³).
    #[inline]
    #[must_use]
    pub const fn cell_count(&self) -> u128 {
        self.resolution.cell_count()
    }

    /// Center of a cell: `min + (i + ½) · cell`.
    #[must_use]
    pub fn cell_center(&self, index: GridIndex) -> Point3 {
        let min = self.bounds.min;
        let c = self.cell_size;
        Point3::new(
            min.x + index.x as f32 * c.x + c.x * 0.5,
            min.y + index.y as f32 * c.y + c.y * 0.5,
            min.z + index.z as f32 * c.z + c.z * 0.5,
        )
    }

    /// Cube filling a cell.
    #[must_use]
    pub fn cell_cube(&self, index: GridIndex) -> CubeGeometry {
        primitives::cube(self.cell_center(index), self.half_cell())
    }

    /// All indices, x outermost and z innermost.
    pub fn indices(&self) -> impl Iterator<Item = GridIndex> {
        let n = self.resolution.get();
        (0..n).flat_map(move |x| Self::slab_indices(n, x))
    }

    /// Indices of the x = `x` slab, y outer and z inner.
    pub fn slab(&self, x: u32) -> impl Iterator<Item = GridIndex> {
        Self::slab_indices(self.resolution.get(), x)
    }

    fn slab_indices(n: u32, x: u32) -> impl Iterator<Item = GridIndex> {
        (0..n).flat_map(move |y| (0..n).map(move |z| GridIndex::new(x, y, z)))
    }
}
