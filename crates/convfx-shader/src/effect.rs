//! Effect options and the parse, normalize, synthesize pipeline.
//!
//! Options come from a scene descriptor string, a YAML file, or are set
//! one by one. Values use the same textual form in all cases:
//!
//! ```text
//! effect2d:matrix=1,1,1;1,1,1;1,1,1:normalize=true
//! ```
//!
//! ```yaml
//! matrix: "0,-1,0;-1,4,-1;0,-1,0"
//! normalize: false
//! ```

use std::path::Path;

use convfx_kernel::Kernel;
use serde::{Deserialize, Serialize};
use tracing::{debug, error};

use crate::{EffectError, EffectResult, ShaderSource, SynthesisConfig};

/// Default `matrix` option: the 3x3 identity kernel.
pub const DEFAULT_MATRIX: &str = "0,0,0;0,1,0;0,0,0";

/// Scene name accepted at the head of a descriptor.
pub const SCENE_NAME: &str = "effect2d";

/// Registered option names with their descriptions.
pub const OPTIONS: &[(&str, &str)] = &[
    ("matrix", "The convolution matrix to use [format: \"a,b,c;d,e,f...\"]"),
    ("normalize", "Whether to normalize the supplied convolution matrix [true,false]"),
];

/// Options controlling the convolution effect.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EffectOptions {
    /// Kernel in `a,b,c;d,e,f` notation.
    pub matrix: String,
    /// Whether to normalize the kernel before synthesis.
    pub normalize: bool,
}

impl Default for EffectOptions {
    fn default() -> Self {
        Self {
            matrix: DEFAULT_MATRIX.to_string(),
            normalize: true,
        }
    }
}

impl EffectOptions {
    /// Sets a single option from its textual value.
    pub fn set(&mut self, key: &str, value: &str) -> EffectResult<()> {
        match key.trim() {
            "matrix" => self.matrix = value.to_string(),
            "normalize" => {
                self.normalize = match value.trim() {
                    "true" => true,
                    "false" => false,
                    _ => {
                        return Err(EffectError::InvalidOption {
                            key: key.to_string(),
                            value: value.to_string(),
                        });
                    }
                }
            }
            other => return Err(EffectError::UnknownOption(other.to_string())),
        }
        Ok(())
    }

    /// Textual value of an option, as [`set`](Self::set) accepts it.
    pub fn get(&self, key: &str) -> Option<String> {
        match key.trim() {
            "matrix" => Some(self.matrix.clone()),
            "normalize" => Some(self.normalize.to_string()),
            _ => None,
        }
    }

    /// Parses `[effect2d:]key=value[:key=value...]`, starting from defaults.
    pub fn parse_scene(descriptor: &str) -> EffectResult<Self> {
        let mut options = Self::default();
        options.apply_scene(descriptor)?;
        Ok(options)
    }

    /// Applies the `key=value` pairs of a scene descriptor on top of `self`.
    pub fn apply_scene(&mut self, descriptor: &str) -> EffectResult<()> {
        for (i, part) in descriptor.split(':').enumerate() {
            let part = part.trim();
            if part.is_empty() {
                continue;
            }
            match part.split_once('=') {
                Some((key, value)) => self.set(key, value)?,
                None if i == 0 => debug!(scene = part, "scene descriptor"),
                None => {
                    return Err(EffectError::InvalidOption {
                        key: part.to_string(),
                        value: String::new(),
                    });
                }
            }
        }
        Ok(())
    }

    /// Parses options from YAML; missing fields keep their defaults.
    pub fn from_yaml_str(yaml: &str) -> EffectResult<Self> {
        Ok(serde_yaml::from_str(yaml)?)
    }

    /// Loads options from a YAML file.
    pub fn from_file(path: impl AsRef<Path>) -> EffectResult<Self> {
        let content = std::fs::read_to_string(path)?;
        Self::from_yaml_str(&content)
    }

    /// Parses the matrix and normalizes it if requested.
    pub fn kernel(&self) -> EffectResult<Kernel> {
        let mut kernel = Kernel::parse(&self.matrix)?;
        if self.normalize {
            kernel.normalize();
        }
        Ok(kernel)
    }
}

/// Runs parse, optional normalize and synthesize; the first failure wins.
///
/// # Example
///
/// ```rust
/// use convfx_shader::{build_effect, EffectOptions, ShaderSource, SynthesisConfig};
///
/// let options = EffectOptions::parse_scene("effect2d:matrix=1,1;1,1").unwrap();
/// let config = SynthesisConfig::default();
/// let src = build_effect(&options, &ShaderSource::builtin(config.language), &config).unwrap();
/// assert!(src.contains("const float Filter3 = 0.250000;"));
/// ```
pub fn build_effect(
    options: &EffectOptions,
    template: &ShaderSource,
    config: &SynthesisConfig,
) -> EffectResult<String> {
    let kernel = options.kernel().inspect_err(|e| {
        error!(matrix = %options.matrix, "Failed to set up convolution kernel: {e}");
    })?;
    Ok(crate::synthesize(&kernel, template, config)?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use convfx_kernel::KernelError;

    #[test]
    fn test_defaults() {
        let o = EffectOptions::default();
        assert_eq!(o.matrix, "0,0,0;0,1,0;0,0,0");
        assert!(o.normalize);
        assert_eq!(o.kernel().unwrap(), Kernel::identity());
    }

    #[test]
    fn test_set_and_get() {
        let mut o = EffectOptions::default();
        o.set("normalize", "false").unwrap();
        o.set("matrix", "1,2;3,4").unwrap();
        assert_eq!(o.get("normalize").as_deref(), Some("false"));
        assert_eq!(o.get("matrix").as_deref(), Some("1,2;3,4"));
        assert_eq!(o.get("speed"), None);

        for (name, _) in OPTIONS {
            assert!(o.get(name).is_some(), "option {name} not readable");
        }
    }

    #[test]
    fn test_set_rejects_bad_input() {
        let mut o = EffectOptions::default();
        assert!(matches!(
            o.set("normalize", "yes"),
            Err(EffectError::InvalidOption { .. })
        ));
        assert!(matches!(o.set("speed", "1"), Err(EffectError::UnknownOption(k)) if k == "speed"));
        assert_eq!(o, EffectOptions::default());
    }

    #[test]
    fn test_parse_scene() {
        let o = EffectOptions::parse_scene("effect2d:matrix=1,1,1;1,-8,1;1,1,1:normalize=false").unwrap();
        assert_eq!(o.matrix, "1,1,1;1,-8,1;1,1,1");
        assert!(!o.normalize);

        let o = EffectOptions::parse_scene("normalize=false").unwrap();
        assert_eq!(o.matrix, DEFAULT_MATRIX);
        assert!(!o.normalize);

        assert!(EffectOptions::parse_scene("effect2d:bogus").is_err());
    }

    #[test]
    fn test_yaml() {
        let o = EffectOptions::from_yaml_str("matrix: \"1,2;3,4\"\n").unwrap();
        assert_eq!(o.matrix, "1,2;3,4");
        assert!(o.normalize);

        assert!(matches!(
            EffectOptions::from_yaml_str("normalize: [1"),
            Err(EffectError::Yaml(_))
        ));
    }

    #[test]
    fn test_kernel_normalization_flag() {
        let mut o = EffectOptions { matrix: "1,1;1,1".into(), normalize: false };
        assert_eq!(o.kernel().unwrap().weights, vec![1.0; 4]);
        o.normalize = true;
        assert_eq!(o.kernel().unwrap().weights, vec![0.25; 4]);
    }

    #[test]
    fn test_build_effect_parse_failure() {
        let o = EffectOptions { matrix: "1,2;3".into(), normalize: true };
        let config = SynthesisConfig::default();
        let err = build_effect(&o, &ShaderSource::builtin(config.language), &config).unwrap_err();
        assert!(matches!(
            err,
            EffectError::Kernel(KernelError::DimensionMismatch { row: 1, found: 1, expected: 2 })
        ));
    }
}
