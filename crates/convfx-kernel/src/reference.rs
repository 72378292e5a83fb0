//! CPU reference convolution.
//!
//! Applies a [`Kernel`] the same way the generated fragment shader does,
//! which makes it usable as an oracle when checking shader output.
//!
//! Pixel rows are in texture order: row 0 sits at texture coordinate
//! y = 0, as it does after a plain GL texture upload. A tap with offset
//! `(ox, oy)` therefore reads pixel `(x + ox, y + oy)`. Reads outside the
//! image clamp to the nearest edge pixel.

use crate::{Kernel, KernelError, KernelResult};
use tracing::trace;

/// Applies `kernel` as a stencil to interleaved `f32` pixel data.
///
/// # Example
///
/// ```rust
/// use convfx_kernel::{convolve, Kernel};
///
/// let src = vec![0.5f32; 8 * 8 * 3];
/// let result = convolve(&src, 8, 8, 3, &Kernel::box_blur(3)).unwrap();
/// assert_eq!(result.len(), 8 * 8 * 3);
/// ```
pub fn convolve(
    src: &[f32],
    width: usize,
    height: usize,
    channels: usize,
    kernel: &Kernel,
) -> KernelResult<Vec<f32>> {
    trace!(width, height, channels, kernel_w = kernel.width, kernel_h = kernel.height, "convolve");

    if !kernel.is_consistent() {
        return Err(KernelError::SizeMismatch {
            width: kernel.width,
            height: kernel.height,
            len: kernel.len(),
        });
    }
    if kernel.is_empty() {
        return Err(KernelError::Empty);
    }

    let expected = width * height * channels;
    if src.len() != expected || expected == 0 {
        return Err(KernelError::InvalidDimensions(format!(
            "expected {} samples, got {}",
            expected,
            src.len()
        )));
    }

    let taps: Vec<(isize, isize, f32)> = kernel
        .taps()
        .map(|t| (t.offset.x as isize, t.offset.y as isize, t.weight))
        .collect();

    let mut dst = vec![0.0f32; expected];
    let mut sums = vec![0.0f32; channels];

    for y in 0..height {
        for x in 0..width {
            sums.iter_mut().for_each(|s| *s = 0.0);

            for &(ox, oy, w) in &taps {
                let sx = (x as isize + ox).clamp(0, width as isize - 1) as usize;
                let sy = (y as isize + oy).clamp(0, height as isize - 1) as usize;
                let src_idx = (sy * width + sx) * channels;

                for (c, sum) in sums.iter_mut().enumerate() {
                    *sum += src[src_idx + c] * w;
                }
            }

            let dst_idx = (y * width + x) * channels;
            dst[dst_idx..dst_idx + channels].copy_from_slice(&sums);
        }
    }

    Ok(dst)
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    fn ramp(width: usize, height: usize) -> Vec<f32> {
        (0..width * height).map(|i| i as f32).collect()
    }

    #[test]
    fn test_convolve_identity() {
        let src = ramp(4, 3);
        let dst = convolve(&src, 4, 3, 1, &Kernel::identity()).unwrap();
        assert_eq!(dst, src);
    }

    #[test]
    fn test_convolve_box_on_constant() {
        let src = vec![0.5f32; 6 * 6 * 4];
        let dst = convolve(&src, 6, 6, 4, &Kernel::box_blur(3)).unwrap();
        for v in dst {
            assert_relative_eq!(v, 0.5, epsilon = 1e-6);
        }
    }

    #[test]
    fn test_convolve_top_row_reads_up() {
        // Single weight in matrix row 0 samples one texture row up (y + 1).
        let k: Kernel = "0,1,0;0,0,0;0,0,0".parse().unwrap();
        let src = ramp(3, 3);
        let dst = convolve(&src, 3, 3, 1, &k).unwrap();
        // pixel (1, 0) reads (1, 1)
        assert_eq!(dst[1], src[4]);
        // top texture row clamps to itself
        assert_eq!(dst[7], src[7]);
    }

    #[test]
    fn test_convolve_left_column_reads_left() {
        let k: Kernel = "0,0,0;1,0,0;0,0,0".parse().unwrap();
        let src = ramp(3, 1);
        let dst = convolve(&src, 3, 1, 1, &k).unwrap();
        assert_eq!(dst, vec![0.0, 0.0, 1.0]);
    }

    #[test]
    fn test_convolve_rejects_bad_input() {
        let src = vec![0.0f32; 10];
        assert!(matches!(
            convolve(&src, 4, 4, 1, &Kernel::identity()),
            Err(KernelError::InvalidDimensions(_))
        ));

        let bad = Kernel { weights: vec![1.0; 2], width: 3, height: 3 };
        assert!(matches!(
            convolve(&vec![0.0; 16], 4, 4, 1, &bad),
            Err(KernelError::SizeMismatch { .. })
        ));
    }
}
