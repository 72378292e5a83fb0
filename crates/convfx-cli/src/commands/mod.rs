//! CLI command implementations

pub mod generate;
pub mod inspect;
pub mod options;
pub mod presets;

use anyhow::{Context, Result, anyhow};
use convfx_kernel::Kernel;
use convfx_shader::EffectOptions;

use crate::KernelArgs;

/// Builds effect options from all sources given on the command line.
pub fn resolve_options(args: &KernelArgs) -> Result<EffectOptions> {
    let mut options = match &args.config {
        Some(path) => EffectOptions::from_file(path)
            .with_context(|| format!("Failed to load options: {}", path.display()))?,
        None => EffectOptions::default(),
    };

    if let Some(scene) = &args.scene {
        options
            .apply_scene(scene)
            .with_context(|| format!("Invalid scene descriptor: {scene}"))?;
    }

    if let Some(name) = &args.preset {
        let kernel = Kernel::preset(name).ok_or_else(|| {
            anyhow!(
                "Unknown preset '{}' (available: {})",
                name,
                convfx_kernel::PRESET_NAMES.join(", ")
            )
        })?;
        options.matrix = kernel.to_string();
    }

    if let Some(matrix) = &args.matrix {
        options.set("matrix", matrix)?;
    }

    if let Some(normalize) = &args.normalize {
        options.set("normalize", normalize)?;
    }

    Ok(options)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    fn args() -> KernelArgs {
        KernelArgs {
            matrix: None,
            preset: None,
            normalize: None,
            config: None,
            scene: None,
        }
    }

    #[test]
    fn test_defaults() {
        assert_eq!(resolve_options(&args()).unwrap(), EffectOptions::default());
    }

    #[test]
    fn test_precedence() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "matrix: \"1,1;1,1\"\nnormalize: false").unwrap();

        let mut a = args();
        a.config = Some(file.path().to_path_buf());
        let o = resolve_options(&a).unwrap();
        assert_eq!(o.matrix, "1,1;1,1");
        assert!(!o.normalize);

        a.scene = Some("effect2d:matrix=2,2;2,2".into());
        assert_eq!(resolve_options(&a).unwrap().matrix, "2,2;2,2");

        a.matrix = Some("3".into());
        a.normalize = Some("true".into());
        let o = resolve_options(&a).unwrap();
        assert_eq!(o.matrix, "3");
        assert!(o.normalize);
    }

    #[test]
    fn test_preset() {
        let mut a = args();
        a.preset = Some("edge".into());
        assert_eq!(resolve_options(&a).unwrap().matrix, "0,-1,0;-1,4,-1;0,-1,0");

        a.preset = Some("unknown".into());
        assert!(resolve_options(&a).is_err());
    }

    #[test]
    fn test_invalid_normalize() {
        let mut a = args();
        a.normalize = Some("maybe".into());
        assert!(resolve_options(&a).is_err());
    }
}
