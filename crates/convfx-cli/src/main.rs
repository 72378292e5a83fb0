//! convfx - convolution shader generator
//!
//! Turns a kernel matrix into fragment shader source.

use anyhow::Result;
use clap::{Args, Parser, Subcommand};
use convfx_shader::ShaderLanguage;
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

mod commands;

#[derive(Parser)]
#[command(name = "convfx")]
#[command(author, version, about = "Generate 2D convolution fragment shaders")]
#[command(long_about = "
Generates fragment shader source implementing 2D image convolution
from a kernel matrix. Rows are separated by ';', elements by ','.

Examples:
  convfx generate                                   # identity kernel, GLSL
  convfx generate -m '1,2,1;2,4,2;1,2,1' -o blur.frag
  convfx generate -p edge --normalize false
  convfx generate --scene 'effect2d:matrix=0,-1,0;-1,4,-1;0,-1,0'
  convfx generate -p gaussian --lang wgsl -o blur.wgsl
  convfx inspect -m '1,-1;1,-1'                     # weights and offsets
  convfx presets
  convfx options
")]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Verbose output
    #[arg(short, long, global = true)]
    verbose: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Generate shader source
    #[command(visible_alias = "g")]
    Generate(GenerateArgs),

    /// Show the parsed kernel, its sum and per-tap offsets
    #[command(visible_alias = "i")]
    Inspect(InspectArgs),

    /// List stock kernels
    Presets,

    /// List effect options with their defaults
    Options,
}

/// Where the effect options come from. Later sources override earlier ones:
/// defaults, `--config`, `--scene`, `--preset`/`--matrix`, `--normalize`.
#[derive(Args)]
struct KernelArgs {
    /// Convolution matrix, e.g. "0,0,0;0,1,0;0,0,0"
    #[arg(short, long, conflicts_with = "preset")]
    matrix: Option<String>,

    /// Stock kernel: identity, box, gaussian, sharpen, edge, emboss
    #[arg(short, long)]
    preset: Option<String>,

    /// Normalize the matrix: true or false
    #[arg(short, long)]
    normalize: Option<String>,

    /// YAML file with `matrix` and `normalize` keys
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Scene descriptor, e.g. "effect2d:matrix=1,1;1,1:normalize=true"
    #[arg(short, long)]
    scene: Option<String>,
}

#[derive(Args)]
struct GenerateArgs {
    #[command(flatten)]
    kernel: KernelArgs,

    /// Output file (stdout if omitted)
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Shading language: glsl, wgsl
    #[arg(short, long, default_value = "glsl")]
    lang: ShaderLanguage,

    /// Template file with a placeholder token (bundled template if omitted)
    #[arg(short, long)]
    template: Option<PathBuf>,

    /// Placeholder token replaced by the accumulation statement
    #[arg(long, default_value = "$CONVOLUTION$")]
    placeholder: String,

    /// Texture width in pixels, for the horizontal texel step
    #[arg(long, default_value = "800")]
    texture_width: u32,

    /// Texture height in pixels, for the vertical texel step
    #[arg(long, default_value = "600")]
    texture_height: u32,
}

#[derive(Args)]
struct InspectArgs {
    #[command(flatten)]
    kernel: KernelArgs,
}

fn init_logging(verbose: bool) {
    let default = if verbose { "debug" } else { "warn" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    match cli.command {
        Commands::Generate(args) => commands::generate::run(args),
        Commands::Inspect(args) => commands::inspect::run(args, cli.verbose),
        Commands::Presets => commands::presets::run(cli.verbose),
        Commands::Options => commands::options::run(),
    }
}
