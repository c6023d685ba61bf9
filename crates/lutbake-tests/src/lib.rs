//! Integration tests for the lutbake crates.
//!
//! These tests write LUT files to a temporary directory and drive them
//! through parsing, evaluation and baking the way a host would.

use std::path::{Path, PathBuf};

/// Writes `text` to `dir/name` and returns the path.
pub fn write_fixture(dir: &Path, name: &str, text: &str) -> std::io::Result<PathBuf> {
    let path = dir.join(name);
    std::fs::write(&path, text)?;
    Ok(path)
}

/// `.cube` text for a 1D table sampling `f` at `size` points over [0, 1].
pub fn cube_1d_text(size: usize, f: impl Fn(f32) -> f32) -> String {
    let mut text = format!("TITLE \"generated\"\nLUT_1D_SIZE {}\n", size);
    for i in 0..size {
        let v = f(i as f32 / (size - 1) as f32);
        text += &format!("{:.8} {:.8} {:.8}\n", v, v, v);
    }
    text
}

/// `.cube` text for a 3D table of `f` applied to the identity lattice,
/// red fastest.
pub fn cube_3d_text(size: usize, f: impl Fn([f32; 3]) -> [f32; 3]) -> String {
    let mut text = format!("LUT_3D_SIZE {}\n", size);
    let n = (size - 1) as f32;
    for b in 0..size {
        for g in 0..size {
            for r in 0..size {
                let v = f([r as f32 / n, g as f32 / n, b as f32 / n]);
                text += &format!("{:.8} {:.8} {:.8}\n", v[0], v[1], v[2]);
            }
        }
    }
    text
}
