//! CLI command implementations

pub mod bake;
pub mod info;
pub mod sample;

use crate::PipelineArgs;
use anyhow::{Context, Result};
use lutbake_bake::{BakeConfig, ConversionFlags};
use lutbake_lut::ParsedLut;
use lutbake_transfer::LogCMode;
use std::path::Path;

/// Load and parse a LUT file
pub fn load_lut(path: &Path) -> Result<ParsedLut> {
    ParsedLut::read(path).with_context(|| format!("Failed to load: {}", path.display()))
}

/// Builds the bake config: the `--config` file if given, then the
/// command-line switches on top.
pub fn build_config(args: &PipelineArgs) -> Result<BakeConfig> {
    let mut config = match &args.config {
        Some(path) => BakeConfig::from_file(path)
            .with_context(|| format!("Failed to load config: {}", path.display()))?,
        None => BakeConfig::default(),
    };

    let cli_flags = ConversionFlags {
        linear_to_log_pre: args.lin_to_log_pre,
        log_to_linear_pre: args.log_to_lin_pre,
        linear_to_log_post: args.lin_to_log_post,
        log_to_linear_post: args.log_to_lin_post,
    };
    config.flags = merge_flags(config.flags, cli_flags);

    if let Some(mode) = args.curve_mode {
        config.curve_mode = Some(mode);
    }
    if args.approx_logc {
        config.logc_mode = LogCMode::Approximate;
    }
    Ok(config)
}

fn merge_flags(a: ConversionFlags, b: ConversionFlags) -> ConversionFlags {
    ConversionFlags {
        linear_to_log_pre: a.linear_to_log_pre || b.linear_to_log_pre,
        log_to_linear_pre: a.log_to_linear_pre || b.log_to_linear_pre,
        linear_to_log_post: a.linear_to_log_post || b.linear_to_log_post,
        log_to_linear_post: a.log_to_linear_post || b.log_to_linear_post,
    }
}

/// Format file size for display
pub fn format_size(bytes: u64) -> String {
    const KB: u64 = 1024;
    const MB: u64 = KB * 1024;

    if bytes >= MB {
        format!("{:.2} MB", bytes as f64 / MB as f64)
    } else if bytes >= KB {
        format!("{:.2} KB", bytes as f64 / KB as f64)
    } else {
        format!("{} B", bytes)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use lutbake_bake::CurveMode;
    use std::io::Write;

    fn pipeline_args() -> PipelineArgs {
        PipelineArgs {
            lin_to_log_pre: false,
            log_to_lin_pre: false,
            lin_to_log_post: false,
            log_to_lin_post: false,
            curve_mode: None,
            approx_logc: false,
            config: None,
        }
    }

    #[test]
    fn config_from_switches() {
        let args = PipelineArgs {
            log_to_lin_pre: true,
            curve_mode: Some(CurveMode::PerChannel),
            approx_logc: true,
            ..pipeline_args()
        };
        let config = build_config(&args).unwrap();
        assert_eq!(config.flags, ConversionFlags::logc_input());
        assert_eq!(config.curve_mode, Some(CurveMode::PerChannel));
        assert_eq!(config.logc_mode, LogCMode::Approximate);
    }

    #[test]
    fn switches_add_to_config_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "linear_to_log_post: true\noverride_resolution: 9").unwrap();
        let args = PipelineArgs {
            log_to_lin_pre: true,
            config: Some(file.path().to_path_buf()),
            ..pipeline_args()
        };
        let config = build_config(&args).unwrap();
        assert!(config.flags.log_to_linear_pre && config.flags.linear_to_log_post);
        assert_eq!(config.override_resolution, 9);
    }

    #[test]
    fn missing_config_file() {
        let args = PipelineArgs {
            config: Some("/nonexistent/settings.yaml".into()),
            ..pipeline_args()
        };
        let err = build_config(&args).unwrap_err();
        assert!(err.to_string().contains("Failed to load config"));
    }

    #[test]
    fn sizes() {
        assert_eq!(format_size(512), "512 B");
        assert_eq!(format_size(2048), "2.00 KB");
        assert_eq!(format_size(3 * 1024 * 1024), "3.00 MB");
    }
}
