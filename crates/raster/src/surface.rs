//! CPU canvas - row-major RGBA8 storage

use tracing::debug;
use zmark_config::Color;

use crate::error::RenderError;
use crate::region::{Rect, RegionMut};

/// An RGBA8 canvas.
/// Pixels are stored row-major with the origin at the top-left.
#[derive(Debug, Clone, PartialEq)]
pub struct Canvas {
    /// Canvas dimensions
    pub width: u32,
    pub height: u32,
    pixels: Vec<Color>,
}

impl Canvas {
    /// Create a canvas filled with a solid color
    pub fn new(width: u32, height: u32, fill: Color) -> Self {
        let pixel_count = (width as usize) * (height as usize);
        debug!("Canvas::new: {}x{} ({} pixels)", width, height, pixel_count);
        Self {
            width,
            height,
            pixels: vec![fill; pixel_count],
        }
    }

    /// Get a pixel at the given coordinates
    /// Returns None if coordinates are out of bounds
    #[inline]
    pub fn get_pixel(&self, x: u32, y: u32) -> Option<Color> {
        if x >= self.width || y >= self.height {
            return None;
        }
        Some(self.pixels[self.index(x, y)])
    }

    /// Set a pixel at the given coordinates
    /// Does nothing if coordinates are out of bounds
    #[inline]
    pub fn set_pixel(&mut self, x: u32, y: u32, color: Color) {
        if x >= self.width || y >= self.height {
            return;
        }
        let index = self.index(x, y);
        self.pixels[index] = color;
    }

    #[inline]
    fn index(&self, x: u32, y: u32) -> usize {
        (y as usize) * (self.width as usize) + (x as usize)
    }

    /// Mutable view of a rectangle of the canvas.
    ///
    /// Writes through the view stay inside `rect`.
    pub fn region_mut(&mut self, rect: Rect) -> Result<RegionMut<'_>, RenderError> {
        if !rect.fits_within(self.width, self.height) {
            return Err(RenderError::RegionOutOfBounds {
                rect,
                width: self.width,
                height: self.height,
            });
        }
        let stride = self.width as usize;
        Ok(RegionMut::new(&mut self.pixels, stride, rect))
    }

    /// Raw RGBA bytes, row-major, top-left origin
    pub fn as_bytes(&self) -> &[u8] {
        bytemuck::cast_slice(&self.pixels)
    }

    /// Consume the canvas into an owned RGBA byte buffer
    pub fn into_raw(self) -> Vec<u8> {
        self.as_bytes().to_vec()
    }

    /// Get the total number of pixels
    #[inline]
    pub fn pixel_count(&self) -> usize {
        self.pixels.len()
    }

    #[inline]
    pub fn pixels(&self) -> &[Color] {
        &self.pixels
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_canvas() {
        let canvas = Canvas::new(100, 50, Color::rgb(1, 2, 3));
        assert_eq!(canvas.width, 100);
        assert_eq!(canvas.height, 50);
        assert_eq!(canvas.pixel_count(), 5000);
        assert!(canvas.pixels().iter().all(|p| *p == Color::rgb(1, 2, 3)));
    }

    #[test]
    fn test_get_set_pixel() {
        let mut canvas = Canvas::new(10, 10, Color::default());
        let red = Color::rgb(255, 0, 0);

        canvas.set_pixel(5, 3, red);
        assert_eq!(canvas.get_pixel(5, 3), Some(red));
        assert_eq!(canvas.get_pixel(3, 5), Some(Color::default()));

        // Out of bounds should return None
        assert_eq!(canvas.get_pixel(10, 0), None);
        canvas.set_pixel(100, 100, red);
    }

    #[test]
    fn test_as_bytes_is_row_major() {
        let mut canvas = Canvas::new(3, 2, Color::rgba(0, 0, 0, 0));
        canvas.set_pixel(1, 0, Color::rgba(1, 2, 3, 4));
        canvas.set_pixel(0, 1, Color::rgba(5, 6, 7, 8));

        let bytes = canvas.as_bytes();
        // 6 pixels * 4 channels
        assert_eq!(bytes.len(), 24);
        assert_eq!(&bytes[4..8], &[1, 2, 3, 4]);
        assert_eq!(&bytes[12..16], &[5, 6, 7, 8]);
        assert_eq!(canvas.into_raw().len(), 24);
    }

    #[test]
    fn test_region_out_of_bounds() {
        let mut canvas = Canvas::new(10, 10, Color::default());
        let result = canvas.region_mut(Rect::new(5, 5, 6, 2));
        assert!(matches!(result, Err(RenderError::RegionOutOfBounds { .. })));
        assert!(canvas.region_mut(Rect::new(5, 5, 5, 5)).is_ok());
    }
}
