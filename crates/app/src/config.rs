//! Effective configuration: saved file (or defaults) plus command-line overrides

use anyhow::{Context, Result};
use tracing::info;
use zmark_config::LogoConfig;

use crate::cli::Cli;

/// Build the config to render from the CLI.
///
/// Validation is left to the render plan so every error is reported the
/// same way.
pub fn effective_config(cli: &Cli) -> Result<LogoConfig> {
    let mut config = match &cli.config {
        Some(path) => {
            let config = LogoConfig::load(path)
                .with_context(|| format!("Failed to load config {}", path.display()))?;
            info!("Loaded config from {}", path.display());
            config
        }
        None => LogoConfig::default(),
    };

    apply_overrides(&mut config, cli);
    Ok(config)
}

fn apply_overrides(config: &mut LogoConfig, cli: &Cli) {
    if let Some(width) = cli.width {
        config.width = width;
    }
    if let Some(height) = cli.height {
        config.height = height;
    }
    if cli.round {
        config.use_round_shape = true;
    }
    if cli.no_round {
        config.use_round_shape = false;
    }
    if let Some(ratio) = cli.logo_ratio {
        config.logo_size_ratio = ratio;
    }
    if let Some(ratio) = cli.circle_ratio {
        config.circle_size_ratio = ratio;
    }
    if let Some(thickness) = cli.thickness {
        config.outline_thickness = thickness;
    }

    let colors = &cli.colors;
    for (value, slot) in [
        (colors.background, &mut config.background_color),
        (colors.outside_body, &mut config.outside_line_body_color),
        (colors.outside_outline, &mut config.outside_line_outline_color),
        (colors.inside_body, &mut config.inside_line_body_color),
        (colors.inside_outline, &mut config.inside_line_outline_color),
        (colors.single_body, &mut config.single_line_body_color),
        (colors.single_outline, &mut config.single_line_outline_color),
        (colors.circle_body, &mut config.circle_body_color),
        (colors.circle_outline, &mut config.circle_outline_color),
    ] {
        if let Some(color) = value {
            *slot = color;
        }
    }
}
