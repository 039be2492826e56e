use thiserror::Error;
use zmark_config::ConfigError;

use crate::region::Rect;

#[derive(Debug, Error)]
pub enum RenderError {
    #[error("Invalid configuration: {0}")]
    Config(#[from] ConfigError),
    #[error("Glyph region is empty: {width}x{height} canvas at logo_size_ratio {ratio}")]
    EmptyGlyph { width: u32, height: u32, ratio: f64 },
    #[error("Glyph size must be at least one pixel")]
    ZeroGlyphSize,
    #[error("Outline thickness {thickness} exceeds the stroke half-width {half_width:.3}")]
    OutlineTooThick { thickness: f64, half_width: f64 },
    #[error("Outline thickness {thickness} exceeds the backdrop radius {radius}")]
    BackdropOutlineTooThick { thickness: f64, radius: u32 },
    #[error("Region {rect:?} does not fit in a {width}x{height} canvas")]
    RegionOutOfBounds { rect: Rect, width: u32, height: u32 },
}
