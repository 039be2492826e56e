//! Command-line arguments

use std::path::PathBuf;

use clap::Parser;
use zmark_config::{Color, ColorCatalog};

/// Render the zmark glyph to an image file
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Load base parameters from a saved JSON config
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Canvas width in pixels
    #[arg(long)]
    pub width: Option<u32>,

    /// Canvas height in pixels
    #[arg(long)]
    pub height: Option<u32>,

    /// Draw the circular backdrop
    #[arg(long, default_value_t = false, conflicts_with = "no_round")]
    pub round: bool,

    /// Skip the circular backdrop, even if the loaded config enables it
    #[arg(long, default_value_t = false)]
    pub no_round: bool,

    /// Glyph size as a fraction of the smaller canvas dimension
    #[arg(long)]
    pub logo_ratio: Option<f64>,

    /// Backdrop diameter as a fraction of the smaller canvas dimension
    #[arg(long)]
    pub circle_ratio: Option<f64>,

    /// Outline thickness in pixels
    #[arg(long)]
    pub thickness: Option<f64>,

    #[command(flatten)]
    pub colors: ColorArgs,

    /// Output image path (default: <identifier>.<format> in --out-dir)
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Directory for the default output path
    #[arg(long, default_value = ".")]
    pub out_dir: PathBuf,

    /// Image format (png, jpeg, bmp, tiff, webp); inferred from --output if omitted
    #[arg(short, long)]
    pub format: Option<String>,

    /// Write the effective configuration to this JSON file
    #[arg(long)]
    pub save_config: Option<PathBuf>,

    /// Verbose output - shows more detailed logs
    #[arg(short, long, default_value_t = false)]
    pub verbose: bool,
}

/// Color overrides. Each accepts a palette name (e.g. `z_red`) or `r,g,b[,a]`.
#[derive(clap::Args, Debug, Default)]
pub struct ColorArgs {
    #[arg(long, value_parser = parse_color_arg)]
    pub background: Option<Color>,
    #[arg(long, value_parser = parse_color_arg)]
    pub outside_body: Option<Color>,
    #[arg(long, value_parser = parse_color_arg)]
    pub outside_outline: Option<Color>,
    #[arg(long, value_parser = parse_color_arg)]
    pub inside_body: Option<Color>,
    #[arg(long, value_parser = parse_color_arg)]
    pub inside_outline: Option<Color>,
    #[arg(long, value_parser = parse_color_arg)]
    pub single_body: Option<Color>,
    #[arg(long, value_parser = parse_color_arg)]
    pub single_outline: Option<Color>,
    #[arg(long, value_parser = parse_color_arg)]
    pub circle_body: Option<Color>,
    #[arg(long, value_parser = parse_color_arg)]
    pub circle_outline: Option<Color>,
}

/// Palette name first, then channel list
pub fn parse_color_arg(value: &str) -> Result<Color, String> {
    if let Some(color) = ColorCatalog::standard().color_named(value.trim()) {
        return Ok(color);
    }
    value
        .parse::<Color>()
        .map_err(|e| format!("not a palette name or color ({e})"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use zmark_config::{DARK, Z_RED};

    #[test]
    fn test_parse_color_arg() {
        assert_eq!(parse_color_arg("z_red"), Ok(Z_RED));
        assert_eq!(parse_color_arg("DARK"), Ok(DARK));
        assert_eq!(parse_color_arg("1,2,3"), Ok(Color::rgb(1, 2, 3)));
        assert_eq!(parse_color_arg("1,2,3,4"), Ok(Color::rgba(1, 2, 3, 4)));
        assert!(parse_color_arg("mauve").is_err());
    }

    #[test]
    fn test_cli_parses_overrides() {
        let cli = Cli::try_parse_from([
            "zmark",
            "--width",
            "640",
            "--round",
            "--thickness",
            "1.5",
            "--background",
            "white",
            "--single-body",
            "0,255,0",
            "-o",
            "out/logo.png",
        ])
        .unwrap();

        assert_eq!(cli.width, Some(640));
        assert_eq!(cli.height, None);
        assert!(cli.round);
        assert_eq!(cli.thickness, Some(1.5));
        assert_eq!(cli.colors.background, Some(Color::rgb(255, 255, 255)));
        assert_eq!(cli.colors.single_body, Some(Color::rgb(0, 255, 0)));
        assert_eq!(cli.output, Some(PathBuf::from("out/logo.png")));
        assert!(!cli.verbose);
    }

    #[test]
    fn test_round_flags_conflict() {
        let cli = Cli::try_parse_from(["zmark", "--no-round"]).unwrap();
        assert!(cli.no_round);
        assert!(!cli.round);
        assert!(Cli::try_parse_from(["zmark", "--round", "--no-round"]).is_err());
    }

    #[test]
    fn test_cli_rejects_bad_color() {
        assert!(Cli::try_parse_from(["zmark", "--background", "1,2"]).is_err());
    }

    #[test]
    fn test_cli_command_is_valid() {
        use clap::CommandFactory;
        Cli::command().debug_assert();
    }
}
