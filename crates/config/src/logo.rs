//! Flat logo configuration record and its JSON persistence

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::color::Color;
use crate::error::ConfigError;
use crate::palette::{BLACK, DARK, LIGHT, Z_RED};

/// Default canvas width in pixels
pub const DEFAULT_WIDTH: u32 = 3840;

/// Default canvas height in pixels
pub const DEFAULT_HEIGHT: u32 = 2160;

pub const DEFAULT_LOGO_SIZE_RATIO: f64 = 0.5;
pub const DEFAULT_CIRCLE_SIZE_RATIO: f64 = 0.6;
pub const DEFAULT_OUTLINE_THICKNESS: f64 = 2.0;

/// Largest accepted width or height. Keeps `width * height * 4` well inside
/// `usize` and rejects accidental multi-gigabyte canvases.
pub const MAX_DIMENSION: u32 = 16384;

/// Every parameter of a logo render.
///
/// Field names are the keys of the saved JSON file. Keys missing from a
/// loaded file take their default values.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LogoConfig {
    /// Canvas width in pixels
    pub width: u32,
    /// Canvas height in pixels
    pub height: u32,
    /// Draw the circular backdrop behind the glyph
    pub use_round_shape: bool,
    /// Glyph side as a fraction of the smaller canvas dimension
    pub logo_size_ratio: f64,
    /// Backdrop diameter as a fraction of the smaller canvas dimension
    pub circle_size_ratio: f64,
    /// Outline band width in pixels, shared by strokes and backdrop
    pub outline_thickness: f64,
    pub background_color: Color,
    pub outside_line_body_color: Color,
    pub outside_line_outline_color: Color,
    pub inside_line_body_color: Color,
    pub inside_line_outline_color: Color,
    pub single_line_body_color: Color,
    pub single_line_outline_color: Color,
    pub circle_body_color: Color,
    pub circle_outline_color: Color,
}

impl Default for LogoConfig {
    fn default() -> Self {
        Self {
            width: DEFAULT_WIDTH,
            height: DEFAULT_HEIGHT,
            use_round_shape: false,
            logo_size_ratio: DEFAULT_LOGO_SIZE_RATIO,
            circle_size_ratio: DEFAULT_CIRCLE_SIZE_RATIO,
            outline_thickness: DEFAULT_OUTLINE_THICKNESS,
            background_color: BLACK,
            outside_line_body_color: LIGHT,
            outside_line_outline_color: LIGHT,
            inside_line_body_color: LIGHT,
            inside_line_outline_color: LIGHT,
            single_line_body_color: Z_RED,
            single_line_outline_color: Z_RED,
            circle_body_color: DARK,
            circle_outline_color: DARK,
        }
    }
}

impl LogoConfig {
    /// Create a config with the given canvas size and default everything else
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            width,
            height,
            ..Default::default()
        }
    }

    /// Smaller of the two canvas dimensions
    #[inline]
    pub fn min_dimension(&self) -> u32 {
        self.width.min(self.height)
    }

    /// Check the scalar parameters.
    ///
    /// Geometry-dependent limits (outline thicker than a stroke, glyph
    /// region rounding down to nothing) depend on the rasterizer's scale and
    /// are checked when a render is planned.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.width == 0 || self.height == 0 {
            return Err(ConfigError::InvalidDimension {
                width: self.width,
                height: self.height,
            });
        }
        if self.width > MAX_DIMENSION || self.height > MAX_DIMENSION {
            return Err(ConfigError::DimensionTooLarge {
                width: self.width,
                height: self.height,
                max: MAX_DIMENSION,
            });
        }

        validate_ratio("logo_size_ratio", self.logo_size_ratio)?;
        validate_ratio("circle_size_ratio", self.circle_size_ratio)?;

        if !self.outline_thickness.is_finite() || self.outline_thickness < 0.0 {
            return Err(ConfigError::InvalidThickness(self.outline_thickness));
        }

        Ok(())
    }

    /// Serialize to pretty-printed JSON
    pub fn to_json_string(&self) -> Result<String, ConfigError> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Parse from JSON; missing keys take defaults
    pub fn from_json_str(json: &str) -> Result<Self, ConfigError> {
        Ok(serde_json::from_str(json)?)
    }

    /// Write the config to a JSON file, replacing any existing file
    pub fn save(&self, path: impl AsRef<Path>) -> Result<(), ConfigError> {
        let path = path.as_ref();
        let json = self.to_json_string()?;
        fs::write(path, json)?;
        debug!("LogoConfig::save: wrote {}", path.display());
        Ok(())
    }

    /// Read a config from a JSON file
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let json = fs::read_to_string(path)?;
        let config = Self::from_json_str(&json)?;
        debug!("LogoConfig::load: read {}", path.display());
        Ok(config)
    }
}

fn validate_ratio(name: &'static str, value: f64) -> Result<(), ConfigError> {
    // NaN fails both comparisons
    if value > 0.0 && value <= 1.0 {
        Ok(())
    } else {
        Err(ConfigError::InvalidRatio { name, value })
    }
}
