//! # convfx-shader
//!
//! Procedural fragment shaders for 2D image convolution.
//!
//! Given a [`Kernel`](convfx_kernel::Kernel), this crate emits shader source
//! that samples a texture once per coefficient, offset by whole texel
//! steps, and sums the weighted samples.
//!
//! - [`ShaderSource`] - template text with declaration insertion and token replacement
//! - [`ConvolutionProgram`] - declarations and sampling terms before rendering
//! - [`synthesize`] / [`ShaderSynthesizer`] - template plus kernel to source
//! - [`EffectOptions`] / [`build_effect`] - option handling and the full pipeline
//! - [`templates`] - bundled GLSL and WGSL templates
//!
//! # Example
//!
//! ```rust
//! use convfx_kernel::Kernel;
//! use convfx_shader::ShaderSynthesizer;
//!
//! let mut kernel = Kernel::parse("1,2,1;2,4,2;1,2,1").unwrap();
//! kernel.normalize();
//!
//! let source = ShaderSynthesizer::default().synthesize(&kernel).unwrap();
//! assert!(source.contains("const float Filter4 = 0.250000;"));
//! ```
//!
//! # Dependencies
//!
//! - `convfx-kernel` - Kernel parsing and offsets
//! - [`serde`], [`serde_yaml`] - Option files
//! - [`thiserror`] - Error types
//! - [`tracing`] - Diagnostics

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]

mod error;
pub mod effect;
pub mod language;
pub mod source;
pub mod synth;
pub mod templates;

pub use effect::{build_effect, EffectOptions};
pub use error::{EffectError, EffectResult, ShaderError, ShaderResult};
pub use language::ShaderLanguage;
pub use source::ShaderSource;
pub use synth::{synthesize, ConvolutionProgram, ShaderSynthesizer, SynthesisConfig, TextureSteps};
