//! The [`Kernel`] type and stock kernels.
//!
//! # Stock kernels
//!
//! Available by name through [`Kernel::preset`] (see [`PRESET_NAMES`]):
//! `identity`, `box`, `gaussian`, `sharpen`, `edge` and `emboss`.
//!
//! # Example
//!
//! ```rust
//! use convfx_kernel::Kernel;
//!
//! let mut k: Kernel = "1,2,1;2,4,2;1,2,1".parse().unwrap();
//! k.normalize();
//! assert_eq!(k.weights[4], 0.25);
//! assert_eq!(k.to_string(), "0.0625,0.125,0.0625;0.125,0.25,0.125;0.0625,0.125,0.0625");
//! ```

use std::fmt;
use std::str::FromStr;

use glam::Vec2;

use crate::{KernelError, KernelResult};

/// Convolution kernel: row-major weights plus dimensions.
///
/// Fields are public; [`Kernel::is_consistent`] reports whether
/// `width * height` matches the weight count.
#[derive(Debug, Clone, PartialEq)]
pub struct Kernel {
    /// Kernel weights, row-major.
    pub weights: Vec<f32>,
    /// Elements per row.
    pub width: usize,
    /// Number of rows.
    pub height: usize,
}

/// A single kernel coefficient with its sampling offset.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Tap {
    /// Row-major index.
    pub index: usize,
    /// Coefficient value.
    pub weight: f32,
    /// Offset in texel steps, y up.
    pub offset: Vec2,
}

/// Names accepted by [`Kernel::preset`].
pub const PRESET_NAMES: &[&str] = &["identity", "box", "gaussian", "sharpen", "edge", "emboss"];

impl Kernel {
    /// Creates a kernel from row-major weights.
    pub fn new(weights: Vec<f32>, width: usize, height: usize) -> KernelResult<Self> {
        if width == 0 || height == 0 {
            return Err(KernelError::Empty);
        }
        if width.checked_mul(height) != Some(weights.len()) {
            return Err(KernelError::SizeMismatch {
                width,
                height,
                len: weights.len(),
            });
        }
        Ok(Self { weights, width, height })
    }

    /// Parses the `a,b,c;d,e,f` matrix notation.
    ///
    /// See [`crate::parse_matrix`].
    pub fn parse(text: &str) -> KernelResult<Self> {
        crate::parse_matrix(text)
    }

    /// Whether the declared dimensions match the weight count.
    #[inline]
    pub fn is_consistent(&self) -> bool {
        self.width.checked_mul(self.height) == Some(self.weights.len())
    }

    /// Number of coefficients.
    #[inline]
    pub fn len(&self) -> usize {
        self.weights.len()
    }

    /// True if the kernel holds no coefficients.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.weights.is_empty()
    }

    /// Sum of all weights.
    pub fn sum(&self) -> f32 {
        self.weights.iter().sum()
    }

    /// Center cell `(column, row)`.
    #[inline]
    pub fn center(&self) -> (usize, usize) {
        crate::offset::center(self.width, self.height)
    }

    /// Rescales the weights in place; see [`crate::normalize`].
    pub fn normalize(&mut self) {
        crate::normalize(&mut self.weights);
    }

    /// Returns a normalized copy.
    pub fn normalized(&self) -> Self {
        let mut k = self.clone();
        k.normalize();
        k
    }

    /// Texel-step offset of coefficient `index`; see [`crate::offset()`].
    #[inline]
    pub fn offset(&self, index: usize) -> Vec2 {
        crate::offset(index, self.width, self.height)
    }

    /// Iterates coefficients in row-major order together with their offsets.
    pub fn taps(&self) -> impl Iterator<Item = Tap> + '_ {
        self.weights.iter().enumerate().map(|(index, &weight)| Tap {
            index,
            weight,
            offset: self.offset(index),
        })
    }

    /// Looks up a stock kernel by name, using default parameters.
    pub fn preset(name: &str) -> Option<Self> {
        let k = match name.trim().to_ascii_lowercase().as_str() {
            "identity" => Self::identity(),
            "box" | "box_blur" | "blur" => Self::box_blur(3),
            "gaussian" => Self::gaussian(5, 1.0),
            "sharpen" => Self::sharpen(1.0),
            "edge" | "edge_detect" | "laplacian" => Self::edge_detect(),
            "emboss" => Self::emboss(),
            _ => return None,
        };
        Some(k)
    }

    /// 3x3 pass-through kernel.
    pub fn identity() -> Self {
        Self::grid3([0.0, 0.0, 0.0, 0.0, 1.0, 0.0, 0.0, 0.0, 0.0])
    }

    /// Uniform average over a square window.
    ///
    /// `size` is rounded up to an odd number so the window has a center tap.
    pub fn box_blur(size: usize) -> Self {
        let side = odd_side(size);
        let taps = side * side;
        Self {
            weights: vec![1.0 / taps as f32; taps],
            width: side,
            height: side,
        }
    }

    /// Square Gaussian window, rescaled to sum to one.
    ///
    /// `sigma` is in texels; `size` is rounded up to an odd side length.
    pub fn gaussian(size: usize, sigma: f32) -> Self {
        let side = odd_side(size);
        let two_sigma_sq = 2.0 * sigma * sigma;

        let mut k = Self {
            weights: vec![0.0; side * side],
            width: side,
            height: side,
        };
        for i in 0..k.weights.len() {
            let r2 = k.offset(i).length_squared();
            k.weights[i] = (-r2 / two_sigma_sq).exp();
        }
        k.normalize();
        k
    }

    /// Cross-shaped sharpen: the center is boosted by `4 * amount` and each
    /// edge neighbour pulled down by `amount`, so the weights still sum to one.
    pub fn sharpen(amount: f32) -> Self {
        let a = -amount;
        Self::grid3([0.0, a, 0.0, a, 1.0 + 4.0 * amount, a, 0.0, a, 0.0])
    }

    /// 4-neighbour Laplacian. Its weights cancel out, which exercises the
    /// zero-sum path of [`crate::normalize`].
    pub fn edge_detect() -> Self {
        Self::grid3([0.0, -1.0, 0.0, -1.0, 4.0, -1.0, 0.0, -1.0, 0.0])
    }

    /// Diagonal relief, lit from the bottom right.
    pub fn emboss() -> Self {
        Self::grid3([-2.0, -1.0, 0.0, -1.0, 1.0, 1.0, 0.0, 1.0, 2.0])
    }

    fn grid3(weights: [f32; 9]) -> Self {
        Self {
            weights: weights.to_vec(),
            width: 3,
            height: 3,
        }
    }
}

/// Smallest odd side length not below `size`, and at least one.
fn odd_side(size: usize) -> usize {
    size.max(1) | 1
}

impl FromStr for Kernel {
    type Err = KernelError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        crate::parse_matrix(s)
    }
}

/// Writes the matrix notation accepted by [`Kernel::parse`].
impl fmt::Display for Kernel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, w) in self.weights.iter().enumerate() {
            if i > 0 {
                let sep = if self.width > 0 && i % self.width == 0 { ';' } else { ',' };
                write!(f, "{sep}")?;
            }
            write!(f, "{w}")?;
        }
        Ok(())
    }
}
