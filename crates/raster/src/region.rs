//! Rectangles and mutable region views into a canvas

use zmark_config::Color;

/// Pixel rectangle (x, y, width, height), top-left origin
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Rect {
    pub x: u32,
    pub y: u32,
    pub width: u32,
    pub height: u32,
}

impl Rect {
    pub fn new(x: u32, y: u32, width: u32, height: u32) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    /// Square of side `side` centered in an `outer_width` x `outer_height`
    /// area. The start rounds down when the leftover is odd.
    pub fn centered_square(outer_width: u32, outer_height: u32, side: u32) -> Self {
        Self {
            x: outer_width.saturating_sub(side) / 2,
            y: outer_height.saturating_sub(side) / 2,
            width: side,
            height: side,
        }
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.width == 0 || self.height == 0
    }

    /// True if the rectangle lies entirely inside a `width` x `height` area
    pub fn fits_within(&self, width: u32, height: u32) -> bool {
        let x_end = self.x as u64 + self.width as u64;
        let y_end = self.y as u64 + self.height as u64;
        x_end <= width as u64 && y_end <= height as u64
    }

    /// True if canvas pixel (x, y) is inside the rectangle
    #[inline]
    pub fn contains(&self, x: u32, y: u32) -> bool {
        x >= self.x && y >= self.y && x - self.x < self.width && y - self.y < self.height
    }
}

/// Mutable view of a rectangle inside a row-major pixel buffer.
///
/// Coordinates passed to the view are local to the rectangle. Writes outside
/// the rectangle are ignored, so a rasterizer given a view can never touch
/// pixels that belong to someone else.
pub struct RegionMut<'a> {
    pixels: &'a mut [Color],
    stride: usize,
    rect: Rect,
}

impl<'a> RegionMut<'a> {
    /// `pixels` is the full buffer with `stride` pixels per row. The caller
    /// guarantees `rect` fits within it.
    pub(crate) fn new(pixels: &'a mut [Color], stride: usize, rect: Rect) -> Self {
        debug_assert!(rect.is_empty() || {
            let last_row = (rect.y + rect.height - 1) as usize;
            last_row * stride + (rect.x + rect.width) as usize <= pixels.len()
        });
        Self {
            pixels,
            stride,
            rect,
        }
    }

    #[inline]
    pub fn width(&self) -> u32 {
        self.rect.width
    }

    #[inline]
    pub fn height(&self) -> u32 {
        self.rect.height
    }

    #[inline]
    fn index(&self, x: u32, y: u32) -> Option<usize> {
        if x >= self.rect.width || y >= self.rect.height {
            return None;
        }
        Some((self.rect.y + y) as usize * self.stride + (self.rect.x + x) as usize)
    }

    /// Pixel at local coordinates, None if outside the region
    #[inline]
    pub fn get(&self, x: u32, y: u32) -> Option<Color> {
        self.index(x, y).map(|i| self.pixels[i])
    }

    /// Set the pixel at local coordinates; ignored if outside the region
    #[inline]
    pub fn set(&mut self, x: u32, y: u32, color: Color) {
        if let Some(i) = self.index(x, y) {
            self.pixels[i] = color;
        }
    }
}
