//! Named palette colors and the color-name catalog used for file naming

use std::collections::HashMap;

use crate::color::Color;

pub const BLACK: Color = Color::rgb(0, 0, 0);
pub const WHITE: Color = Color::rgb(255, 255, 255);
pub const LIGHT: Color = Color::rgb(236, 236, 236);
pub const DARK: Color = Color::rgb(38, 38, 38);
pub const GRAY: Color = Color::rgb(128, 128, 128);
pub const Z_RED: Color = Color::rgb(230, 32, 41);
pub const TRANSPARENT: Color = Color::rgba(0, 0, 0, 0);

/// Name returned for colors that are not in the catalog
pub const UNKNOWN_COLOR_NAME: &str = "UNKNOWN";

/// Maps RGBA colors to human-readable names.
///
/// Lookups are exact on all four channels. The catalog is a plain value so
/// callers can pass their own or extend the standard one.
#[derive(Debug, Clone, Default)]
pub struct ColorCatalog {
    names: HashMap<Color, String>,
}

impl ColorCatalog {
    /// Create an empty catalog
    pub fn new() -> Self {
        Self::default()
    }

    /// The built-in palette
    pub fn standard() -> Self {
        let mut catalog = Self::new();
        for (color, name) in [
            (BLACK, "BLACK"),
            (WHITE, "WHITE"),
            (LIGHT, "LIGHT"),
            (DARK, "DARK"),
            (GRAY, "GRAY"),
            (Z_RED, "Z_RED"),
            (TRANSPARENT, "TRANSPARENT"),
        ] {
            catalog.insert(color, name);
        }
        catalog
    }

    /// Add or replace the name of a color
    pub fn insert(&mut self, color: Color, name: impl Into<String>) {
        self.names.insert(color, name.into());
    }

    /// Name of a color, or [`UNKNOWN_COLOR_NAME`] if absent
    pub fn name_of(&self, color: Color) -> &str {
        self.names
            .get(&color)
            .map(String::as_str)
            .unwrap_or(UNKNOWN_COLOR_NAME)
    }

    /// Reverse lookup by name (case-insensitive)
    pub fn color_named(&self, name: &str) -> Option<Color> {
        self.names
            .iter()
            .find(|(_, n)| n.eq_ignore_ascii_case(name))
            .map(|(color, _)| *color)
    }

    pub fn len(&self) -> usize {
        self.names.len()
    }

    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_standard_names() {
        let catalog = ColorCatalog::standard();
        assert_eq!(catalog.name_of(BLACK), "BLACK");
        assert_eq!(catalog.name_of(Z_RED), "Z_RED");
        assert_eq!(catalog.len(), 7);
    }

    #[test]
    fn test_unknown_color_maps_to_sentinel() {
        let catalog = ColorCatalog::standard();
        assert_eq!(catalog.name_of(Color::rgb(1, 2, 3)), UNKNOWN_COLOR_NAME);
        // Alpha participates in the lookup
        assert_eq!(catalog.name_of(Color::rgba(0, 0, 0, 254)), UNKNOWN_COLOR_NAME);
    }

    #[test]
    fn test_reverse_lookup() {
        let catalog = ColorCatalog::standard();
        assert_eq!(catalog.color_named("dark"), Some(DARK));
        assert_eq!(catalog.color_named("Z_Red"), Some(Z_RED));
        assert_eq!(catalog.color_named("teal"), None);
    }

    #[test]
    fn test_custom_entry() {
        let mut catalog = ColorCatalog::new();
        assert!(catalog.is_empty());
        catalog.insert(Color::rgb(0, 128, 128), "TEAL");
        assert_eq!(catalog.name_of(Color::rgb(0, 128, 128)), "TEAL");
        assert_eq!(catalog.name_of(BLACK), UNKNOWN_COLOR_NAME);
    }
}
