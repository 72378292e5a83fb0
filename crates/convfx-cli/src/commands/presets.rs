//! Presets command

use anyhow::Result;
use convfx_kernel::{Kernel, PRESET_NAMES};

pub fn run(verbose: bool) -> Result<()> {
    for name in PRESET_NAMES {
        let Some(kernel) = Kernel::preset(name) else {
            continue;
        };
        if verbose {
            println!("{:<10} {}x{}  sum={:<8.4} {}", name, kernel.width, kernel.height, kernel.sum(), kernel);
        } else {
            println!("{:<10} {}", name, kernel);
        }
    }
    Ok(())
}

