//! zmark - render the glyph logo to an image file

use std::io::stderr;

use anyhow::{Context, Result};
use clap::Parser;
use tracing::info;
use tracing_subscriber::{fmt, prelude::*, registry, EnvFilter};
use zmark_config::{identifier, ColorCatalog};
use zmark_raster::RenderPlan;

mod cli;
mod config;
mod output;

use cli::Cli;

fn main() -> Result<()> {
    let cli = Cli::parse();

    // RUST_LOG wins; otherwise our crates at info (debug with --verbose)
    let level = if cli.verbose { "debug" } else { "info" };
    let default_directives = format!("zmark={level},zmark_raster={level},zmark_config={level}");
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_directives));
    registry()
        .with(filter)
        .with(fmt::layer().with_writer(stderr))
        .init();

    let config = config::effective_config(&cli)?;
    let name = identifier(&config, &ColorCatalog::standard());
    info!("Rendering {}", name);

    let plan = RenderPlan::from_config(&config).context("Invalid logo configuration")?;
    let canvas = plan.render().context("Render failed")?;

    let format = output::resolve_format(cli.format.as_deref(), cli.output.as_deref())?;
    let path = output::resolve_output_path(cli.output.as_deref(), &cli.out_dir, &name, format);
    output::save_canvas(canvas, &path, format)?;
    info!("Wrote {}", path.display());

    if let Some(config_path) = &cli.save_config {
        config
            .save(config_path)
            .with_context(|| format!("Failed to save config {}", config_path.display()))?;
        info!("Saved config to {}", config_path.display());
    }

    Ok(())
}
