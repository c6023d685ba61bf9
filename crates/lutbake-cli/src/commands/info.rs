//! LUT info command.
//!
//! Prints the title, format, table sizes and domains of each file.

use crate::InfoArgs;
use anyhow::{Context, Result};
use lutbake_lut::{Lut1D, Lut3D, ParsedLut};
use std::fs;
use std::path::Path;

/// Runs the info command.
pub fn run(args: InfoArgs, verbose: u8) -> Result<()> {
    for path in &args.input {
        let file_size = fs::metadata(path)
            .with_context(|| format!("Failed to read: {}", path.display()))?
            .len();
        let parsed = super::load_lut(path)?;

        print!("{}", describe(path, &parsed, file_size, verbose > 0 || args.all));
        if args.all {
            print_entries(&parsed);
        }

        if args.input.len() > 1 {
            println!();
        }
    }

    Ok(())
}

/// Builds the human-readable summary.
fn describe(path: &Path, parsed: &ParsedLut, file_size: u64, detailed: bool) -> String {
    let mut out = format!("{}\n", path.display());
    out += &format!("  Format:     {}\n", parsed.format.extension());
    if !parsed.title.is_empty() {
        out += &format!("  Title:      {}\n", parsed.title);
    }
    out += &format!("  File size:  {}\n", super::format_size(file_size));

    match &parsed.lut1d {
        Some(lut) => out += &describe_1d(lut, detailed),
        None => out += "  1D table:   none\n",
    }
    match &parsed.lut3d {
        Some(lut) => out += &describe_3d(lut, detailed),
        None => out += "  3D table:   none\n",
    }
    out
}

fn describe_1d(lut: &Lut1D, detailed: bool) -> String {
    let mut out = format!(
        "  1D table:   {} entries, domain [{}, {}]\n",
        lut.size(),
        lut.domain_min,
        lut.domain_max
    );
    if detailed {
        out += &format!("    Mono:     {}\n", lut.is_mono());
        if let (Some(first), Some(last)) = (lut.values.first(), lut.values.last()) {
            out += &format!("    First:    {:?}\n    Last:     {:?}\n", first, last);
        }
    }
    out
}

fn describe_3d(lut: &Lut3D, detailed: bool) -> String {
    let (min, max) = lut.domain();
    let mut out = format!(
        "  3D table:   {0}x{0}x{0} ({1} entries)\n",
        lut.size,
        lut.entry_count()
    );
    out += &format!("    Domain:   {:?} .. {:?}\n", min, max);
    if detailed {
        let source = if lut.uses_domain_min_max {
            "DOMAIN_MIN/DOMAIN_MAX"
        } else {
            "LUT_3D_INPUT_RANGE"
        };
        out += &format!("    From:     {}\n", source);
    }
    out
}

fn print_entries(parsed: &ParsedLut) {
    if let Some(lut) = &parsed.lut1d {
        println!("  1D entries:");
        for (i, v) in lut.values.iter().enumerate() {
            println!("    {:6}  {:.6} {:.6} {:.6}", i, v[0], v[1], v[2]);
        }
    }
    if let Some(lut) = &parsed.lut3d {
        println!("  3D entries (r fastest):");
        for (i, v) in lut.values.iter().enumerate() {
            println!("    {:6}  {:.6} {:.6} {:.6}", i, v[0], v[1], v[2]);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use lutbake_lut::{LutFormat, cube};

    #[test]
    fn summary_lists_tables() {
        let parsed = cube::parse_str(
            "TITLE \"Warm\"\nLUT_1D_SIZE 2\nLUT_3D_SIZE 2\n0 0 0\n1 1 1\n\
             0 0 0\n1 0 0\n0 1 0\n1 1 0\n0 0 1\n1 0 1\n0 1 1\n1 1 1\n",
        )
        .unwrap();
        let text = describe(Path::new("warm.cube"), &parsed, 200, false);
        assert!(text.contains("Format:     cube"));
        assert!(text.contains("Title:      Warm"));
        assert!(text.contains("1D table:   2 entries"));
        assert!(text.contains("3D table:   2x2x2 (8 entries)"));
    }

    #[test]
    fn summary_without_tables() {
        let parsed = ParsedLut {
            title: String::new(),
            lut1d: None,
            lut3d: None,
            format: LutFormat::Cube,
        };
        let text = describe(Path::new("empty.cube"), &parsed, 0, true);
        assert!(text.contains("1D table:   none"));
        assert!(text.contains("3D table:   none"));
        assert!(!text.contains("Title"));
    }

    #[test]
    fn missing_file_names_path() {
        let dir = tempfile::tempdir().unwrap();
        let missing = dir.path().join("gone.cube");
        let args = InfoArgs {
            input: vec![missing],
            all: false,
        };
        let err = run(args, 0).unwrap_err();
        let msg = format!("{err:#}");
        assert!(msg.starts_with("Failed to read:"));
        assert!(msg.contains("gone.cube"));
    }
}
