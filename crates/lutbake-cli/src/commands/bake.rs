//! Grid bake command.
//!
//! Writes the baked samples as a headerless little-endian buffer, `z`
//! slowest and red fastest, in the layout picked with `--format`.

use crate::{BakeArgs, SampleFormat};
use anyhow::{Context, Result};
use lutbake_bake::{bake, bake_curve, resolve_size, rgba_f16, rgba_f32};
#[allow(unused_imports)]
use tracing::{debug, info, trace};

/// Runs the bake command.
pub fn run(args: BakeArgs, verbose: u8) -> Result<()> {
    let parsed = super::load_lut(&args.input)?;

    let mut config = super::build_config(&args.pipeline)?;
    if let Some(resolution) = args.resolution {
        config.override_resolution = resolution;
    }
    if args.serial {
        config.parallel = false;
    }
    let size = resolve_size(&parsed, &config);

    if verbose > 0 {
        let shape = if args.curve {
            format!("{} samples", size)
        } else {
            format!("{0}x{0}x{0}", size)
        };
        println!("Baking {} ({}) -> {}", args.input.display(), shape, args.output.display());
    }

    let samples = if args.curve {
        bake_curve(&parsed, &config)
    } else {
        bake(&parsed, &config).map(|grid| grid.data)
    }
    .with_context(|| format!("Failed to bake: {}", args.input.display()))?;

    let bytes = encode(&samples, args.format);
    std::fs::write(&args.output, &bytes)
        .with_context(|| format!("Failed to save: {}", args.output.display()))?;
    debug!(samples = samples.len(), bytes = bytes.len(), format = ?args.format, "wrote samples");

    if verbose > 0 {
        println!("Wrote {} ({})", args.output.display(), super::format_size(bytes.len() as u64));
    }

    Ok(())
}

/// Serializes samples little-endian.
fn encode(samples: &[[f32; 3]], format: SampleFormat) -> Vec<u8> {
    match format {
        SampleFormat::Rgb32 => samples.as_flattened().iter().flat_map(|v| v.to_le_bytes()).collect(),
        SampleFormat::Rgba32 => rgba_f32(samples).iter().flat_map(|v| v.to_le_bytes()).collect(),
        SampleFormat::Rgba16 => rgba_f16(samples).iter().flat_map(|v| v.to_le_bytes()).collect(),
    }
}
