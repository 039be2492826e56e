//! zmark rasterizer - distance-field glyph rendering
//!
//! This crate turns a [`zmark_config::LogoConfig`] into an RGBA canvas:
//! - [`segment::Segment`] - exact point-to-segment squared distance
//! - [`glyph`] - the five-stroke glyph and its priority-ordered rasterizer
//! - [`backdrop`] - optional circular backdrop
//! - [`surface::Canvas`] - row-major RGBA8 canvas
//! - [`region`] - rectangles and bounded mutable views into the canvas
//! - [`compositor`] - render planning and composition
//!
//! Encoding the canvas to an image file is left to the caller;
//! [`surface::Canvas::as_bytes`] yields the row-major, top-left-origin
//! RGBA buffer image encoders expect.

pub mod backdrop;
pub mod compositor;
pub mod constants;
pub mod error;
pub mod glyph;
pub mod region;
pub mod segment;
pub mod surface;

pub use backdrop::*;
pub use compositor::*;
pub use constants::*;
pub use error::*;
pub use glyph::*;
pub use region::*;
pub use segment::*;
pub use surface::*;
