//! Axis-aligned bounding boxes.

use serde::{Deserialize, Serialize};

use crate::math::Point3;

/// Axis-aligned bounding box.
///
/// Invariant: `min[i] <= max[i]` on every axis unless a coordinate is NaN,
/// in which case the NaN is carried into the box instead of being dropped.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct BoundingBox {
    /// Minimum corner.
    pub min: Point3,
    /// Maximum corner.
    pub max: Point3,
}

/// `f32::min` ignores NaN operands; bounds must not.
#[inline]
fn min_propagating(a: f32, b: f32) -> f32 {
    if a.is_nan() || b.is_nan() {
        f32::NAN
    } else {
        a.min(b)
    }
}

#[inline]
fn max_propagating(a: f32, b: f32) -> f32 {
    if a.is_nan() || b.is_nan() {
        f32::NAN
    } else {
        a.max(b)
    }
}

impl BoundingBox {
    /// Creates a box from its corners.
    #[inline]
    #[must_use]
    pub const fn new(min: Point3, max: Point3) -> Self {
        Self { min, max }
    }

    /// Zero-extent box around a single point.
    #[inline]
    #[must_use]
    pub const fn from_point(p: Point3) -> Self {
        Self { min: p, max: p }
    }

    /// Smallest box covering every point, in one pass.
    ///
    /// Returns `None` for an empty sequence.
    #[must_use]
    pub fn from_points<I>(points: I) -> Option<Self>
    where
        I: IntoIterator<Item = Point3>,
    {
        let mut iter = points.into_iter();
        let first = iter.next()?;
        Some(iter.fold(Self::from_point(first), Self::including))
    }

    /// Returns this box grown to cover `p`.
    #[must_use]
    pub fn including(self, p: Point3) -> Self {
        Self {
            min: self.min.zip_with(p, min_propagating),
            max: self.max.zip_with(p, max_propagating),
        }
    }

    /// Size along each axis.
    #[inline]
    #[must_use]
    pub fn extent(&self) -> Point3 {
        self.max - self.min
    }

    /// True if the box has zero extent along at least one axis.
    #[must_use]
    pub fn is_degenerate(&self) -> bool {
        let e = self.extent();
        e.x == 0.0 || e.y == 0.0 || e.z == 0.0
    }

}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_points_covers_all() {
        let points = [
            Point3::new(1.0, -2.0, 3.0),
            Point3::new(-4.0, 5.0, 0.5),
            Point3::new(2.0, 0.0, -7.0),
        ];
        let bounds = BoundingBox::from_points(points).unwrap();

        assert_eq!(bounds.min, Point3::new(-4.0, -2.0, -7.0));
        assert_eq!(bounds.max, Point3::new(2.0, 5.0, 3.0));
        for p in points {
            assert!(bounds.min.x <= p.x && p.x <= bounds.max.x);
            assert!(bounds.min.y <= p.y && p.y <= bounds.max.y);
            assert!(bounds.min.z <= p.z && p.z <= bounds.max.z);
        }
    }

    #[test]
    fn test_empty_has_no_bounds() {
        assert!(BoundingBox::from_points(std::iter::empty()).is_none());
    }

    #[test]
    fn test_single_point_is_degenerate() {
        let p = Point3::new(1.0, 2.0, 3.0);
        let bounds = BoundingBox::from_points([p]).unwrap();
        assert_eq!(bounds.extent(), Point3::ZERO);
        assert!(bounds.is_degenerate());
    }

    #[test]
    fn test_nan_propagates() {
        let bounds = BoundingBox::from_points([
            Point3::new(0.0, 0.0, 0.0),
            Point3::new(f32::NAN, 1.0, 1.0),
            Point3::new(2.0, 2.0, 2.0),
        ])
        .unwrap();
        assert!(bounds.min.x.is_nan());
        assert!(bounds.max.x.is_nan());
        assert_eq!(bounds.max.y, 2.0);
    }

    #[test]
    fn test_extent() {
        let bounds = BoundingBox::new(Point3::splat(-1.0), Point3::new(8.0, 4.0, 2.0));
        assert_eq!(bounds.extent(), Point3::new(9.0, 5.0, 3.0));
        assert!(!bounds.is_degenerate());
    }
}
