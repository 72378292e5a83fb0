//! Target shading languages.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::templates;

/// Decimal places for coefficient and step constants.
pub const CONST_PRECISION: usize = 6;

/// Decimal places for texel offset multipliers.
pub const OFFSET_PRECISION: usize = 1;

/// Shading language of a template and of the code generated into it.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ShaderLanguage {
    /// GLSL / GLSL ES fragment shader (`texture2D`, `varying`).
    #[default]
    Glsl,
    /// WGSL module with `vs_main`/`fs_main` entry points.
    Wgsl,
}

impl ShaderLanguage {
    /// All supported languages.
    pub const ALL: [ShaderLanguage; 2] = [ShaderLanguage::Glsl, ShaderLanguage::Wgsl];

    /// Short lowercase name.
    pub fn name(self) -> &'static str {
        match self {
            Self::Glsl => "glsl",
            Self::Wgsl => "wgsl",
        }
    }

    /// The bundled convolution template.
    pub fn convolution_template(self) -> &'static str {
        match self {
            Self::Glsl => templates::GLSL_CONVOLUTION,
            Self::Wgsl => templates::WGSL_CONVOLUTION,
        }
    }

    /// A module-scope float constant declaration, without trailing newline.
    pub fn const_decl(self, name: &str, value: f32) -> String {
        match self {
            Self::Glsl => format!("const float {name} = {value:.p$};", p = CONST_PRECISION),
            Self::Wgsl => format!("const {name}: f32 = {value:.p$};", p = CONST_PRECISION),
        }
    }

    /// A texture fetch offset by `(x * step_x, y * step_y)`, scaled by `weight`.
    pub fn sample_term(self, x: f32, y: f32, step_x: &str, step_y: &str, weight: &str) -> String {
        match self {
            Self::Glsl => format!(
                "texture2D(Texture0, TextureCoord + vec2({x:.p$} * {step_x}, \
                 {y:.p$} * {step_y})) * {weight}",
                p = OFFSET_PRECISION
            ),
            Self::Wgsl => format!(
                "textureSample(texture0, sampler0, tex_coord + vec2<f32>({x:.p$} * {step_x}, \
                 {y:.p$} * {step_y})) * {weight}",
                p = OFFSET_PRECISION
            ),
        }
    }
}

impl fmt::Display for ShaderLanguage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for ShaderLanguage {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "glsl" | "gles" | "frag" => Ok(Self::Glsl),
            "wgsl" => Ok(Self::Wgsl),
            other => Err(format!("unknown shading language: {other} (expected glsl or wgsl)")),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_const_decl() {
        assert_eq!(
            ShaderLanguage::Glsl.const_decl("Filter0", 0.125),
            "const float Filter0 = 0.125000;"
        );
        assert_eq!(
            ShaderLanguage::Wgsl.const_decl("Filter0", -1.0),
            "const Filter0: f32 = -1.000000;"
        );
    }

    #[test]
    fn test_sample_term_glsl() {
        let t = ShaderLanguage::Glsl.sample_term(-1.0, 1.0, "TextureStepX", "TextureStepY", "Filter0");
        assert_eq!(
            t,
            "texture2D(Texture0, TextureCoord + vec2(-1.0 * TextureStepX, 1.0 * TextureStepY)) * Filter0"
        );
    }

    #[test]
    fn test_sample_term_wgsl() {
        let t = ShaderLanguage::Wgsl.sample_term(0.0, -2.0, "SX", "SY", "Filter3");
        assert_eq!(
            t,
            "textureSample(texture0, sampler0, tex_coord + vec2<f32>(0.0 * SX, -2.0 * SY)) * Filter3"
        );
    }

    #[test]
    fn test_parse_language() {
        assert_eq!("GLSL".parse::<ShaderLanguage>(), Ok(ShaderLanguage::Glsl));
        assert_eq!("wgsl".parse::<ShaderLanguage>(), Ok(ShaderLanguage::Wgsl));
        assert!("hlsl".parse::<ShaderLanguage>().is_err());
        for lang in ShaderLanguage::ALL {
            assert_eq!(lang.to_string().parse::<ShaderLanguage>(), Ok(lang));
        }
    }
}
