//! Options command

use anyhow::Result;
use convfx_shader::effect::{EffectOptions, OPTIONS};

pub fn run() -> Result<()> {
    print!("{}", format_options(&EffectOptions::default()));
    Ok(())
}

/// Lists registered options with the values held by `options`.
fn format_options(options: &EffectOptions) -> String {
    let mut out = String::new();
    for (name, description) in OPTIONS {
        let value = options.get(name).unwrap_or_default();
        out.push_str(&format!("{name:<10} [default: {value}]\n"));
        out.push_str(&format!("{:<10} {description}\n", ""));
    }
    out
}
