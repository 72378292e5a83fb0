//! # convfx-kernel
//!
//! Convolution kernels for procedurally generated image-filter shaders.
//!
//! This crate covers everything that happens before shader text is
//! produced:
//!
//! - [`parse_matrix`] - `a,b,c;d,e,f` strings to a row-major [`Kernel`]
//! - [`normalize`] - sum-to-one rescaling with a zero-sum fallback
//! - [`offset()`] - coefficient index to texel offset (y up)
//! - [`convolve`] - CPU reference implementation of the same stencil
//!
//! # Example
//!
//! ```rust
//! use convfx_kernel::Kernel;
//!
//! let mut k = Kernel::parse("0,-1,0;-1,4,-1;0,-1,0").unwrap();
//! k.normalize();
//! assert_eq!(k.weights[4], 1.0);
//!
//! let o = k.offset(1);
//! assert_eq!((o.x, o.y), (0.0, 1.0));
//! ```
//!
//! # Dependencies
//!
//! - [`glam`] - [`glam::Vec2`] offsets
//! - [`thiserror`] - Error types
//! - [`tracing`] - Diagnostics
//!
//! # Used By
//!
//! - `convfx-shader` - Shader synthesis
//! - `convfx-cli` - Command-line front end

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]

mod error;
mod kernel;
pub mod normalize;
pub mod offset;
pub mod parse;
pub mod reference;

pub use error::{KernelError, KernelResult};
pub use kernel::{Kernel, Tap, PRESET_NAMES};
pub use normalize::{normalize, normalization_divisor, ZERO_SUM_EPSILON};
pub use offset::offset;
pub use parse::parse_matrix;
pub use reference::convolve;

pub use glam::Vec2;
