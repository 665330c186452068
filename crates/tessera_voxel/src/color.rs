//! Per-voxel colors.
//!
//! Each channel encodes one grid axis: R = round(255·x/N), G = round(255·y/N),
//! B = round(255·z/N), A = 255. The color depends on nothing but the index
//! and the resolution, so the same cell is always the same color.

use tessera_shared::Rgba;

use crate::grid::{GridIndex, Resolution};

#[inline]
#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
fn channel(i: u32, n: u32) -> u8 {
    let v = (255.0 * f64::from(i) / f64::from(n)).round();
    // i < n keeps v within 0..=255; the clamp only guards out-of-grid indices.
    v.clamp(0.0, 255.0) as u8
}

/// Color of the voxel at `index` in an N-cell grid.
#[must_use]
pub fn voxel_color(index: GridIndex, resolution: Resolution) -> Rgba {
    let n = resolution.get();
    Rgba::opaque(channel(index.x, n), channel(index.y, n), channel(index.z, n))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn res(n: i64) -> Resolution {
        Resolution::new(n).unwrap()
    }

    #[test]
    fn test_reference_colors() {
        assert_eq!(voxel_color(GridIndex::new(0, 0, 0), res(4)), Rgba::new(0, 0, 0, 255));
        // round(255 * 3 / 4) = round(191.25) = 191
        assert_eq!(voxel_color(GridIndex::new(3, 3, 3), res(4)), Rgba::new(191, 191, 191, 255));
        // round(255 * 1 / 2) = round(127.5) = 128
        assert_eq!(voxel_color(GridIndex::new(1, 0, 0), res(2)).r, 128);
    }

    #[test]
    fn test_pure_function() {
        let index = GridIndex::new(2, 5, 7);
        assert_eq!(voxel_color(index, res(8)), voxel_color(index, res(8)));
    }

    #[test]
    fn test_x_only_moves_red() {
        let base = voxel_color(GridIndex::new(0, 3, 5), res(8));
        let mut previous = base.r;
        for x in 1..8 {
            let c = voxel_color(GridIndex::new(x, 3, 5), res(8));
            assert_eq!((c.g, c.b, c.a), (base.g, base.b, base.a));
            assert!(c.r > previous);
            previous = c.r;
        }
    }

    #[test]
    fn test_single_cell_grid_is_black() {
        assert_eq!(voxel_color(GridIndex::new(0, 0, 0), res(1)), Rgba::BLACK);
    }

    #[test]
    fn test_last_cell_of_large_grid() {
        let n = 1000;
        let c = voxel_color(GridIndex::new(n - 1, n - 1, n - 1), res(i64::from(n)));
        assert_eq!(c.r, 255); // round(254.745)
        assert!(c.is_opaque());
    }
}
