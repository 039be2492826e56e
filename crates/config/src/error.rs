use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Invalid dimensions: {width}x{height} (both must be at least 1)")]
    InvalidDimension { width: u32, height: u32 },
    #[error("Dimensions {width}x{height} exceed the maximum of {max} per axis")]
    DimensionTooLarge { width: u32, height: u32, max: u32 },
    #[error("Invalid {name}: {value} (must be in (0, 1])")]
    InvalidRatio { name: &'static str, value: f64 },
    #[error("Invalid outline thickness: {0} (must be finite and non-negative)")]
    InvalidThickness(f64),
    #[error("Config I/O failed: {0}")]
    Io(#[from] std::io::Error),
    #[error("Config parse failed: {0}")]
    Parse(#[from] serde_json::Error),
}
