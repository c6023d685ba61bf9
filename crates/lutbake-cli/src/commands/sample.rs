//! Single sample evaluation.

use crate::SampleArgs;
use anyhow::{Context, Result};
use lutbake_bake::SamplePipeline;

/// Runs the sample command, printing `r g b` of the pipeline output.
pub fn run(args: SampleArgs, verbose: u8) -> Result<()> {
    let parsed = super::load_lut(&args.input)?;
    let config = super::build_config(&args.pipeline)?;
    let pipeline = SamplePipeline::from_parsed(&parsed, &config)
        .with_context(|| format!("Invalid LUT: {}", args.input.display()))?;

    let input = [args.r, args.g, args.b];
    let out = pipeline.evaluate(input)?;

    if verbose > 0 {
        println!(
            "{:.6} {:.6} {:.6} -> {:.6} {:.6} {:.6}",
            input[0], input[1], input[2], out[0], out[1], out[2]
        );
    } else {
        println!("{:.6} {:.6} {:.6}", out[0], out[1], out[2]);
    }
    Ok(())
}
