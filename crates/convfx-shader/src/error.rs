//! Error types for shader synthesis and effect setup.

use std::path::PathBuf;

use convfx_kernel::KernelError;
use thiserror::Error;

use crate::ShaderLanguage;

/// Result type for shader operations.
pub type ShaderResult<T> = Result<T, ShaderError>;

/// Result type for the full effect pipeline.
pub type EffectResult<T> = Result<T, EffectError>;

/// Errors raised while turning a kernel into shader source.
#[derive(Debug, Error)]
pub enum ShaderError {
    /// Kernel dimensions disagree with its coefficient count.
    #[error("convolution filter size {len} doesn't match supplied dimensions {width}x{height}")]
    SizeMismatch {
        /// Declared width.
        width: usize,
        /// Declared height.
        height: usize,
        /// Number of coefficients.
        len: usize,
    },

    /// Kernel has no coefficients.
    #[error("convolution filter is empty")]
    EmptyKernel,

    /// Template and synthesis config target different languages.
    #[error("shader template is {template} but synthesis targets {target}")]
    LanguageMismatch {
        /// Language of the template.
        template: ShaderLanguage,
        /// Language requested by the synthesis config.
        target: ShaderLanguage,
    },

    /// Template lacks the token to substitute.
    #[error("shader template has no {token:?} placeholder")]
    MissingPlaceholder {
        /// The token that was searched for.
        token: String,
    },

    /// Template file could not be read.
    #[error("failed to read shader template {path}: {source}")]
    Template {
        /// Template path.
        path: PathBuf,
        /// Underlying I/O error.
        #[source]
        source: std::io::Error,
    },
}

/// Errors raised by the parse, normalize, synthesize pipeline and its options.
#[derive(Debug, Error)]
pub enum EffectError {
    /// Matrix option failed to parse.
    #[error("invalid matrix: {0}")]
    Kernel(#[from] KernelError),

    /// Synthesis failed.
    #[error(transparent)]
    Shader(#[from] ShaderError),

    /// Option name is not registered.
    #[error("unknown option: {0}")]
    UnknownOption(String),

    /// Option value is not acceptable.
    #[error("invalid value {value:?} for option {key}")]
    InvalidOption {
        /// Option name.
        key: String,
        /// Rejected value.
        value: String,
    },

    /// I/O error reading an options file.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// YAML parsing error.
    #[error("YAML parse error: {0}")]
    Yaml(#[from] serde_yaml::Error),
}
