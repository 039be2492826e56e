//! Descriptive identifiers built from a configuration

use crate::logo::LogoConfig;
use crate::palette::ColorCatalog;

/// Prefix of every generated identifier
pub const IDENTIFIER_PREFIX: &str = "z_logo";

/// Build a file-name-friendly identifier from every parameter.
///
/// Numeric parameters are written as-is, colors by their catalog name.
/// Order: size, ratios, thickness, then background, circle, outside,
/// inside and single-line colors (body before outline).
pub fn identifier(config: &LogoConfig, catalog: &ColorCatalog) -> String {
    let numbers = [
        config.width.to_string(),
        config.height.to_string(),
        config.logo_size_ratio.to_string(),
        config.circle_size_ratio.to_string(),
        config.outline_thickness.to_string(),
    ];

    let colors = [
        config.background_color,
        config.circle_body_color,
        config.circle_outline_color,
        config.outside_line_body_color,
        config.outside_line_outline_color,
        config.inside_line_body_color,
        config.inside_line_outline_color,
        config.single_line_body_color,
        config.single_line_outline_color,
    ];

    let mut parts = vec![IDENTIFIER_PREFIX.to_string()];
    parts.extend(numbers);
    parts.extend(colors.iter().map(|c| catalog.name_of(*c).to_string()));
    parts.join("_")
}
