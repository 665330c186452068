//! Mathematical value types.
//!
//! These are the canonical representations stored in models and dumps.

use bytemuck::{Pod, Zeroable};
use serde::{Deserialize, Serialize};

/// 3D point - vertex position, cell center, or half extents
#[repr(C)]
#[derive(Clone, Copy, Debug, Default, PartialEq, Pod, Zeroable, Serialize, Deserialize)]
pub struct Point3 {
    /// X component
    pub x: f32,
    /// Y component
    pub y: f32,
    /// Z component
    pub z: f32,
}

impl Point3 {
    /// Creates a new point
    #[must_use]
    pub const fn new(x: f32, y: f32, z: f32) -> Self {
        Self { x, y, z }
    }

    /// Origin
    pub const ZERO: Self = Self::new(0.0, 0.0, 0.0);

    /// Same value on all three axes
    #[must_use]
    pub const fn splat(v: f32) -> Self {
        Self::new(v, v, v)
    }

    /// Converts to array
    #[must_use]
    pub const fn to_array(self) -> [f32; 3] {
        [self.x, self.y, self.z]
    }

    /// Creates from array
    #[must_use]
    pub const fn from_array(arr: [f32; 3]) -> Self {
        Self::new(arr[0], arr[1], arr[2])
    }

    /// Component along `axis` (0 = x, 1 = y, 2 = z)
    ///
    /// # Panics
    ///
    /// Panics if `axis > 2`.
    #[must_use]
    pub const fn axis(self, axis: usize) -> f32 {
        match axis {
            0 => self.x,
            1 => self.y,
            2 => self.z,
            _ => panic!("axis out of range"),
        }
    }

    /// Component-wise product
    #[must_use]
    pub fn scale(self, other: Self) -> Self {
        self.zip_with(other, |a, b| a * b)
    }

    /// Combines two points component-wise
    #[must_use]
    pub fn zip_with(self, other: Self, f: impl Fn(f32, f32) -> f32) -> Self {
        Self::new(f(self.x, other.x), f(self.y, other.y), f(self.z, other.z))
    }

    /// True if any component is NaN
    #[must_use]
    pub fn has_nan(self) -> bool {
        self.x.is_nan() || self.y.is_nan() || self.z.is_nan()
    }
}

impl std::ops::Add for Point3 {
    type Output = Self;
    fn add(self, rhs: Self) -> Self {
        Self::new(self.x + rhs.x, self.y + rhs.y, self.z + rhs.z)
    }
}

impl std::ops::Sub for Point3 {
    type Output = Self;
    fn sub(self, rhs: Self) -> Self {
        Self::new(self.x - rhs.x, self.y - rhs.y, self.z - rhs.z)
    }
}

impl std::ops::Mul<f32> for Point3 {
    type Output = Self;
    fn mul(self, rhs: f32) -> Self {
        Self::new(self.x * rhs, self.y * rhs, self.z * rhs)
    }
}

impl std::ops::Div<f32> for Point3 {
    type Output = Self;
    fn div(self, rhs: f32) -> Self {
        Self::new(self.x / rhs, self.y / rhs, self.z / rhs)
    }
}

impl From<[f32; 3]> for Point3 {
    fn from(arr: [f32; 3]) -> Self {
        Self::from_array(arr)
    }
}

/// Affine transform - 3x3 linear part (column-major) plus translation.
///
/// Used by build items to place an object in the build volume.
#[repr(C)]
#[derive(Clone, Copy, Debug, PartialEq, Pod, Zeroable, Serialize, Deserialize)]
pub struct Transform {
    /// Columns of the linear part
    pub columns: [[f32; 3]; 3],
    /// Translation
    pub translation: [f32; 3],
}

impl Transform {
    /// Identity transform
    pub const IDENTITY: Self = Self {
        columns: [[1.0, 0.0, 0.0], [0.0, 1.0, 0.0], [0.0, 0.0, 1.0]],
        translation: [0.0, 0.0, 0.0],
    };

    /// Transforms a point
    #[must_use]
    pub fn apply(&self, p: Point3) -> Point3 {
        let [c0, c1, c2] = self.columns;
        let t = self.translation;
        Point3::new(
            c0[0] * p.x + c1[0] * p.y + c2[0] * p.z + t[0],
            c0[1] * p.x + c1[1] * p.y + c2[1] * p.z + t[1],
            c0[2] * p.x + c1[2] * p.y + c2[2] * p.z + t[2],
        )
    }

    /// True for the identity transform
    #[must_use]
    pub fn is_identity(&self) -> bool {
        *self == Self::IDENTITY
    }
}

impl Default for Transform {
    fn default() -> Self {
        Self::IDENTITY
    }
}
