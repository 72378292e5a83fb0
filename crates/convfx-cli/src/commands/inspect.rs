//! Inspect command

use crate::InspectArgs;
use anyhow::{Context, Result};
use convfx_kernel::{normalization_divisor, Kernel};

pub fn run(args: InspectArgs, verbose: bool) -> Result<()> {
    let options = super::resolve_options(&args.kernel)?;
    let raw = Kernel::parse(&options.matrix)
        .with_context(|| format!("Invalid matrix: {}", options.matrix))?;

    println!("Kernel: {}x{} ({} taps)", raw.width, raw.height, raw.len());
    println!("Sum:    {}", raw.sum());

    let kernel = if options.normalize {
        match normalization_divisor(&raw.weights) {
            Some(d) => println!("Normalized by {d}"),
            None => println!("Normalization skipped (zero divisor)"),
        }
        raw.normalized()
    } else {
        raw
    };

    let (cx, cy) = kernel.center();
    if verbose {
        println!("Center: column {cx}, row {cy}");
    }

    println!();
    print!("{}", format_rows(&kernel));
    println!();
    println!("{:>5}  {:>12}  {:>6}  {:>6}", "tap", "weight", "dx", "dy");
    for tap in kernel.taps() {
        println!(
            "{:>5}  {:>12.6}  {:>6.1}  {:>6.1}",
            tap.index, tap.weight, tap.offset.x, tap.offset.y
        );
    }

    Ok(())
}

/// Formats weights as an aligned grid, one matrix row per line.
fn format_rows(kernel: &Kernel) -> String {
    let mut out = String::new();
    for row in kernel.weights.chunks(kernel.width.max(1)) {
        let cells: Vec<String> = row.iter().map(|w| format!("{w:>10.6}")).collect();
        out.push_str(&cells.join(" "));
        out.push('\n');
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_rows() {
        let k = Kernel::parse("1,-1;0.5,2").unwrap();
        assert_eq!(
            format_rows(&k),
            "  1.000000  -1.000000\n  0.500000   2.000000\n"
        );
    }
}
