//! lutbake - LUT inspection and grid baking
//!
//! Reads .cube and .spi1d files, prints their tables, evaluates single
//! samples and bakes dense 3D sample grids.

use anyhow::{Context, Result};
use clap::{Args, Parser, Subcommand, ValueEnum};
use lutbake_bake::CurveMode;
use std::path::{Path, PathBuf};
use tracing_subscriber::EnvFilter;

mod commands;

#[derive(Parser)]
#[command(name = "lutbake")]
#[command(author, version, about = "LUT inspection and 3D grid baking")]
#[command(long_about = "
Parses .cube (1D/3D) and .spi1d LUTs, optionally wraps the lookups in
ARRI LogC conversions, and bakes the result into a dense RGB grid.

Examples:
  lutbake info look.cube                       # Show tables and domains
  lutbake sample look.cube 0.18 0.18 0.18      # Evaluate one sample
  lutbake bake look.cube -o look.bin           # Bake at the source size
  lutbake bake log.cube -o out.bin -r 64 --log-to-lin-pre
  lutbake bake film.spi1d -o ramp.bin --curve --format rgba16
  lutbake bake look.cube -o out.bin --config settings.yaml
")]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Verbose output (-v debug, -vv trace)
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    verbose: u8,

    /// Number of threads (0 = auto)
    #[arg(short = 'j', long, global = true, default_value = "0")]
    threads: usize,

    /// Write logs to this file instead of stderr
    #[arg(long, global = true)]
    log_file: Option<PathBuf>,
}

#[derive(Subcommand)]
enum Commands {
    /// Display LUT information
    #[command(visible_alias = "i")]
    Info(InfoArgs),

    /// Bake a LUT into a raw sample grid
    #[command(visible_alias = "b")]
    Bake(BakeArgs),

    /// Evaluate a single RGB sample
    #[command(visible_alias = "s")]
    Sample(SampleArgs),
}

#[derive(Args)]
struct InfoArgs {
    /// Input LUT file(s)
    #[arg(required = true)]
    input: Vec<PathBuf>,

    /// Print every table entry
    #[arg(short, long)]
    all: bool,
}

/// Pipeline options shared by `bake` and `sample`.
#[derive(Args)]
struct PipelineArgs {
    /// Linear to LogC before the lookups
    #[arg(long)]
    lin_to_log_pre: bool,

    /// LogC to linear before the lookups
    #[arg(long)]
    log_to_lin_pre: bool,

    /// Linear to LogC after the lookups
    #[arg(long)]
    lin_to_log_post: bool,

    /// LogC to linear after the lookups
    #[arg(long)]
    log_to_lin_post: bool,

    /// 1D table application: packed, per-channel, nearest
    #[arg(long)]
    curve_mode: Option<CurveMode>,

    /// Use the approximate LogC curves
    #[arg(long)]
    approx_logc: bool,

    /// YAML settings file; command-line options override it
    #[arg(long)]
    config: Option<PathBuf>,
}

#[derive(Args)]
struct BakeArgs {
    /// Input LUT file
    input: PathBuf,

    /// Output file (raw little-endian samples)
    #[arg(short, long)]
    output: PathBuf,

    /// Grid resolution (default: source 3D size, else 33)
    #[arg(short, long)]
    resolution: Option<u32>,

    /// Sample layout
    #[arg(short, long, value_enum, default_value = "rgba16")]
    format: SampleFormat,

    /// Bake the gray ramp instead of the full cube
    #[arg(long)]
    curve: bool,

    /// Generate on one thread
    #[arg(long)]
    serial: bool,

    #[command(flatten)]
    pipeline: PipelineArgs,
}

#[derive(Args)]
#[command(allow_negative_numbers = true)]
struct SampleArgs {
    /// Input LUT file
    input: PathBuf,

    /// Red
    r: f32,

    /// Green
    g: f32,

    /// Blue
    b: f32,

    #[command(flatten)]
    pipeline: PipelineArgs,
}

/// Raw output layouts.
#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
enum SampleFormat {
    /// 3 x f32 per sample
    Rgb32,
    /// 4 x f32 per sample, alpha 1
    Rgba32,
    /// 4 x f16 per sample, alpha 1
    Rgba16,
}

/// Installs the tracing subscriber. RUST_LOG overrides the -v level.
fn init_logging(
    verbose: u8,
    log_file: Option<&PathBuf>,
) -> Result<Option<tracing_appender::non_blocking::WorkerGuard>> {
    let level = match verbose {
        0 => "warn",
        1 => "debug",
        _ => "trace",
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));

    match log_file {
        Some(path) => {
            let dir = path.parent().filter(|p| !p.as_os_str().is_empty());
            let name = path
                .file_name()
                .with_context(|| format!("Invalid log file: {}", path.display()))?;
            let appender = tracing_appender::rolling::never(dir.unwrap_or(Path::new(".")), name);
            let (writer, guard) = tracing_appender::non_blocking(appender);
            tracing_subscriber::fmt()
                .with_env_filter(filter)
                .with_writer(writer)
                .with_ansi(false)
                .init();
            Ok(Some(guard))
        }
        None => {
            tracing_subscriber::fmt()
                .with_env_filter(filter)
                .with_writer(std::io::stderr)
                .init();
            Ok(None)
        }
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    let _guard = init_logging(cli.verbose, cli.log_file.as_ref())?;

    // Configure thread pool
    if cli.threads > 0 {
        rayon::ThreadPoolBuilder::new()
            .num_threads(cli.threads)
            .build_global()
            .context("Failed to configure thread pool")?;
    }

    match cli.command {
        Commands::Info(args) => commands::info::run(args, cli.verbose),
        Commands::Bake(args) => commands::bake::run(args, cli.verbose),
        Commands::Sample(args) => commands::sample::run(args, cli.verbose),
    }
}
