//! Convolution shader synthesis.
//!
//! Synthesis happens in two steps. [`ConvolutionProgram::build`] turns a
//! kernel into a list of constant declarations and a list of sampling
//! terms. [`synthesize`] then writes those into a copy of a template:
//! texel-step and coefficient constants after the preamble, the
//! accumulation statement in place of the placeholder token.
//!
//! # Example
//!
//! ```rust
//! use convfx_kernel::Kernel;
//! use convfx_shader::{synthesize, ShaderSource, SynthesisConfig};
//!
//! let config = SynthesisConfig::default();
//! let template = ShaderSource::builtin(config.language);
//! let src = synthesize(&Kernel::identity(), &template, &config).unwrap();
//! assert!(src.contains("const float Filter4 = 1.000000;"));
//! ```

use convfx_kernel::Kernel;
use serde::{Deserialize, Serialize};
use tracing::{error, trace};

use crate::templates::CONVOLUTION_PLACEHOLDER;
use crate::{ShaderError, ShaderLanguage, ShaderResult, ShaderSource};

/// Name of the horizontal texel step constant.
pub const STEP_X_NAME: &str = "TextureStepX";

/// Name of the vertical texel step constant.
pub const STEP_Y_NAME: &str = "TextureStepY";

/// Prefix of per-coefficient constant names (`Filter0`, `Filter1`, ...).
pub const FILTER_PREFIX: &str = "Filter";

/// Texture-coordinate distance of one source pixel on each axis.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TextureSteps {
    /// Horizontal step, `1 / width`.
    pub x: f32,
    /// Vertical step, `1 / height`.
    pub y: f32,
}

impl TextureSteps {
    /// Reference resolution width.
    pub const REFERENCE_WIDTH: u32 = 800;
    /// Reference resolution height.
    pub const REFERENCE_HEIGHT: u32 = 600;

    /// Steps for a texture of `width` x `height` pixels.
    ///
    /// Zero dimensions are treated as one pixel.
    pub fn from_resolution(width: u32, height: u32) -> Self {
        Self {
            x: 1.0 / width.max(1) as f32,
            y: 1.0 / height.max(1) as f32,
        }
    }
}

impl Default for TextureSteps {
    fn default() -> Self {
        Self::from_resolution(Self::REFERENCE_WIDTH, Self::REFERENCE_HEIGHT)
    }
}

/// Parameters threaded into synthesis.
#[derive(Debug, Clone, PartialEq)]
pub struct SynthesisConfig {
    /// Texel step constants.
    pub steps: TextureSteps,
    /// Syntax of generated code.
    pub language: ShaderLanguage,
    /// Token replaced by the accumulation statement.
    pub placeholder: String,
    /// Variable assigned by the accumulation statement.
    pub output_var: String,
}

impl Default for SynthesisConfig {
    fn default() -> Self {
        Self {
            steps: TextureSteps::default(),
            language: ShaderLanguage::default(),
            placeholder: CONVOLUTION_PLACEHOLDER.to_string(),
            output_var: "result".to_string(),
        }
    }
}

impl SynthesisConfig {
    /// Default config for `language`.
    pub fn for_language(language: ShaderLanguage) -> Self {
        Self { language, ..Self::default() }
    }

    /// Replaces the texel steps.
    pub fn with_steps(mut self, steps: TextureSteps) -> Self {
        self.steps = steps;
        self
    }
}

/// Intermediate form of a convolution shader body.
#[derive(Debug, Clone, PartialEq)]
pub struct ConvolutionProgram {
    /// One constant declaration per coefficient, row-major.
    pub declarations: Vec<String>,
    /// One sampling term per coefficient, row-major.
    pub terms: Vec<String>,
    output_var: String,
}

impl ConvolutionProgram {
    /// Builds declarations and terms for `kernel`.
    ///
    /// Fails when `width * height` differs from the coefficient count, or
    /// when the kernel is empty.
    pub fn build(kernel: &Kernel, config: &SynthesisConfig) -> ShaderResult<Self> {
        if !kernel.is_consistent() {
            error!(
                width = kernel.width,
                height = kernel.height,
                len = kernel.len(),
                "Convolution filter size doesn't match supplied dimensions"
            );
            return Err(ShaderError::SizeMismatch {
                width: kernel.width,
                height: kernel.height,
                len: kernel.len(),
            });
        }
        if kernel.is_empty() {
            error!("Convolution filter is empty");
            return Err(ShaderError::EmptyKernel);
        }

        let lang = config.language;
        let mut declarations = Vec::with_capacity(kernel.len());
        let mut terms = Vec::with_capacity(kernel.len());

        for tap in kernel.taps() {
            let name = format!("{FILTER_PREFIX}{}", tap.index);
            declarations.push(lang.const_decl(&name, tap.weight));
            terms.push(lang.sample_term(tap.offset.x, tap.offset.y, STEP_X_NAME, STEP_Y_NAME, &name));
        }

        Ok(Self {
            declarations,
            terms,
            output_var: config.output_var.clone(),
        })
    }

    /// The accumulation statement, one term per line.
    pub fn expression(&self) -> String {
        format!("{} = {};\n", self.output_var, self.terms.join(" +\n"))
    }

    /// Declarations joined into a block, each line newline-terminated.
    pub fn declaration_block(&self) -> String {
        let mut block = self.declarations.join("\n");
        block.push('\n');
        block
    }
}

/// Generates convolution shader source for `kernel` from `template`.
///
/// The template is not modified; a copy receives the generated code.
pub fn synthesize(
    kernel: &Kernel,
    template: &ShaderSource,
    config: &SynthesisConfig,
) -> ShaderResult<String> {
    trace!(
        width = kernel.width,
        height = kernel.height,
        language = %config.language,
        "synthesize"
    );

    if template.language() != config.language {
        error!(
            template = %template.language(),
            target = %config.language,
            "Shader template language doesn't match synthesis target"
        );
        return Err(ShaderError::LanguageMismatch {
            template: template.language(),
            target: config.language,
        });
    }

    let program = ConvolutionProgram::build(kernel, config)?;

    let mut source = template.clone();
    source.add_const(STEP_X_NAME, config.steps.x);
    source.add_const(STEP_Y_NAME, config.steps.y);
    source.add(&program.declaration_block());

    if let Err(e) = source.replace(&config.placeholder, &program.expression()) {
        error!(token = %config.placeholder, "Shader template is missing the convolution placeholder");
        return Err(e);
    }

    Ok(source.into_string())
}

/// Template and configuration bundled for repeated synthesis.
#[derive(Debug, Clone)]
pub struct ShaderSynthesizer {
    template: ShaderSource,
    config: SynthesisConfig,
}

impl ShaderSynthesizer {
    /// Creates a synthesizer from an explicit template.
    pub fn new(template: ShaderSource, config: SynthesisConfig) -> Self {
        Self { template, config }
    }

    /// Uses the bundled template for `config.language`.
    pub fn builtin(config: SynthesisConfig) -> Self {
        let template = ShaderSource::builtin(config.language);
        Self { template, config }
    }

    /// Synthesis parameters.
    pub fn config(&self) -> &SynthesisConfig {
        &self.config
    }

    /// The unmodified template.
    pub fn template(&self) -> &ShaderSource {
        &self.template
    }

    /// Generates shader source for `kernel`.
    pub fn synthesize(&self, kernel: &Kernel) -> ShaderResult<String> {
        synthesize(kernel, &self.template, &self.config)
    }
}

impl Default for ShaderSynthesizer {
    fn default() -> Self {
        Self::builtin(SynthesisConfig::default())
    }
}
