//! Generate command

use crate::GenerateArgs;
use anyhow::{Context, Result};
use convfx_shader::{build_effect, ShaderSource, SynthesisConfig, TextureSteps};
use tracing::info;

pub fn run(args: GenerateArgs) -> Result<()> {
    let options = super::resolve_options(&args.kernel)?;

    let config = SynthesisConfig {
        steps: TextureSteps::from_resolution(args.texture_width, args.texture_height),
        language: args.lang,
        placeholder: args.placeholder.clone(),
        ..SynthesisConfig::default()
    };

    let template = match &args.template {
        Some(path) => ShaderSource::from_file(path, args.lang)?,
        None => ShaderSource::builtin(args.lang),
    };

    info!(
        lang = %args.lang,
        matrix = %options.matrix,
        normalize = options.normalize,
        "Generating convolution shader"
    );

    let source = build_effect(&options, &template, &config)
        .context("Failed to generate convolution shader")?;

    match &args.output {
        Some(path) => {
            std::fs::write(path, &source)
                .with_context(|| format!("Failed to write: {}", path.display()))?;
            info!(path = %path.display(), bytes = source.len(), "Wrote shader");
        }
        None => print!("{source}"),
    }

    Ok(())
}
