//! Shared configuration for zmark
//!
//! This crate provides the parameter record for a logo render and the
//! helpers around it:
//! - [`color::Color`] - RGBA8 value type
//! - [`palette`] - named colors and the [`palette::ColorCatalog`]
//! - [`logo::LogoConfig`] - flat configuration with defaults, validation and
//!   JSON persistence
//! - [`naming`] - descriptive identifiers for output file names

pub mod color;
pub mod error;
pub mod logo;
pub mod naming;
pub mod palette;

pub use color::*;
pub use error::*;
pub use logo::*;
pub use naming::*;
pub use palette::*;
