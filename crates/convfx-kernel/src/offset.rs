//! Kernel index to texture-space offset mapping.
//!
//! Offsets use the OpenGL texture coordinate convention: x grows to the
//! right, y grows upwards. Matrix rows grow downwards in their textual
//! layout, so the row component is negated.

use glam::Vec2;

/// Returns the center cell `(column, row)` of a `width` x `height` kernel.
///
/// Even dimensions round the center towards the first column/row.
#[inline]
pub fn center(width: usize, height: usize) -> (usize, usize) {
    (width.saturating_sub(1) / 2, height.saturating_sub(1) / 2)
}

/// Returns the sampling offset, in texel steps, of coefficient `index`.
///
/// `index` is a row-major position in a kernel of the given dimensions.
/// The result holds whole numbers; callers scale it by the texel step.
///
/// # Panics
///
/// Panics if `width` is zero.
///
/// # Example
///
/// ```rust
/// use convfx_kernel::offset;
///
/// // top-left of a 3x3 kernel: one texel left, one texel up
/// let o = offset(0, 3, 3);
/// assert_eq!((o.x, o.y), (-1.0, 1.0));
/// ```
pub fn offset(index: usize, width: usize, height: usize) -> Vec2 {
    assert!(width > 0, "kernel width must be non-zero");

    let (cx, cy) = center(width, height);
    let col = (index % width) as i64;
    let row = (index / width) as i64;

    let x = col - cx as i64;
    let y = -(row - cy as i64);

    Vec2::new(x as f32, y as f32)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_offset_center() {
        assert_eq!(offset(4, 3, 3), Vec2::ZERO);
        assert_eq!(offset(12, 5, 5), Vec2::ZERO);
    }

    #[test]
    fn test_offset_corners() {
        assert_eq!(offset(0, 3, 3), Vec2::new(-1.0, 1.0));
        assert_eq!(offset(2, 3, 3), Vec2::new(1.0, 1.0));
        assert_eq!(offset(6, 3, 3), Vec2::new(-1.0, -1.0));
        assert_eq!(offset(8, 3, 3), Vec2::new(1.0, -1.0));
    }

    #[test]
    fn test_offset_full_3x3_row_major() {
        let expected = [
            (-1.0, 1.0), (0.0, 1.0), (1.0, 1.0),
            (-1.0, 0.0), (0.0, 0.0), (1.0, 0.0),
            (-1.0, -1.0), (0.0, -1.0), (1.0, -1.0),
        ];
        for (i, (x, y)) in expected.into_iter().enumerate() {
            assert_eq!(offset(i, 3, 3), Vec2::new(x, y), "index {i}");
        }
    }

    #[test]
    fn test_offset_even_dimensions() {
        // 2x2: center is cell (0, 0)
        assert_eq!(center(2, 2), (0, 0));
        assert_eq!(offset(0, 2, 2), Vec2::ZERO);
        assert_eq!(offset(1, 2, 2), Vec2::new(1.0, 0.0));
        assert_eq!(offset(3, 2, 2), Vec2::new(1.0, -1.0));

        // 4x1: center column 1
        assert_eq!(offset(0, 4, 1), Vec2::new(-1.0, 0.0));
        assert_eq!(offset(3, 4, 1), Vec2::new(2.0, 0.0));
    }

    #[test]
    fn test_offset_single_column() {
        assert_eq!(offset(0, 1, 3), Vec2::new(0.0, 1.0));
        assert_eq!(offset(2, 1, 3), Vec2::new(0.0, -1.0));
    }

    #[test]
    #[should_panic(expected = "kernel width must be non-zero")]
    fn test_offset_zero_width_panics() {
        offset(0, 0, 3);
    }

    #[test]
    fn test_offset_single_element() {
        assert_eq!(offset(0, 1, 1), Vec2::ZERO);
    }
}
