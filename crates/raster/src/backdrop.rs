//! Circular backdrop rasterizer (body disk + outline ring)

use tracing::debug;
use zmark_config::{Color, LogoConfig};

use crate::error::RenderError;
use crate::region::RegionMut;

/// A filled circle with an outline ring, drawn into a square of side
/// `2 * radius` whose center pixel is `(radius, radius)`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BackdropSpec {
    radius: u32,
    outline_thickness: f64,
    pub body_color: Color,
    pub outline_color: Color,
}

impl BackdropSpec {
    /// The outline may be as thick as the radius (a pure ring), never
    /// thicker.
    pub fn new(
        radius: u32,
        outline_thickness: f64,
        body_color: Color,
        outline_color: Color,
    ) -> Result<Self, RenderError> {
        if !(outline_thickness >= 0.0 && outline_thickness <= radius as f64) {
            return Err(RenderError::BackdropOutlineTooThick {
                thickness: outline_thickness,
                radius,
            });
        }
        Ok(Self {
            radius,
            outline_thickness,
            body_color,
            outline_color,
        })
    }

    /// Backdrop for a config: radius is half of `circle_size_ratio` of the
    /// smaller canvas dimension, rounded down.
    pub fn from_config(config: &LogoConfig) -> Result<Self, RenderError> {
        Self::new(
            circle_radius(config),
            config.outline_thickness,
            config.circle_body_color,
            config.circle_outline_color,
        )
    }

    #[inline]
    pub fn radius(&self) -> u32 {
        self.radius
    }

    /// Side of the square region the backdrop occupies
    #[inline]
    pub fn side(&self) -> u32 {
        self.radius * 2
    }

    /// Color for a pixel at local offset (dx, dy) from the center, or None
    /// if the pixel lies outside the circle
    #[inline]
    pub fn classify(&self, dx: f64, dy: f64) -> Option<Color> {
        let r2 = dx * dx + dy * dy;
        let radius = self.radius as f64;
        let body_radius = radius - self.outline_thickness;
        if r2 <= body_radius * body_radius {
            Some(self.body_color)
        } else if r2 <= radius * radius {
            Some(self.outline_color)
        } else {
            None
        }
    }

    /// Draw into `region`. Pixels outside the circle keep their color.
    pub fn rasterize(&self, region: &mut RegionMut<'_>) {
        let side = self.side().min(region.width()).min(region.height());
        let center = self.radius as f64;
        let mut painted = 0usize;

        for x in 0..side {
            for y in 0..side {
                let dx = x as f64 - center;
                let dy = y as f64 - center;
                if let Some(color) = self.classify(dx, dy) {
                    region.set(x, y, color);
                    painted += 1;
                }
            }
        }

        debug!(
            "BackdropSpec::rasterize: radius={}, thickness={:.2} -> {} pixels painted",
            self.radius, self.outline_thickness, painted
        );
    }
}

/// Backdrop radius in pixels for a config
pub fn circle_radius(config: &LogoConfig) -> u32 {
    (config.min_dimension() as f64 * config.circle_size_ratio / 2.0).floor() as u32
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::region::Rect;
    use crate::surface::Canvas;

    const BACKGROUND: Color = Color::rgb(10, 20, 30);
    const BODY: Color = Color::rgb(255, 255, 255);
    const OUTLINE: Color = Color::rgb(0, 0, 0);

    fn render_backdrop(spec: &BackdropSpec, canvas_side: u32) -> (Canvas, Rect) {
        let mut canvas = Canvas::new(canvas_side, canvas_side, BACKGROUND);
        let rect = Rect::centered_square(canvas_side, canvas_side, spec.side());
        let mut region = canvas.region_mut(rect).unwrap();
        spec.rasterize(&mut region);
        (canvas, rect)
    }

    #[test]
    fn test_body_outline_and_passthrough() {
        let spec = BackdropSpec::new(10, 2.0, BODY, OUTLINE).unwrap();
        let (canvas, rect) = render_backdrop(&spec, 40);
        let cx = rect.x + 10;
        let cy = rect.y + 10;

        assert_eq!(canvas.get_pixel(cx, cy), Some(BODY));
        // 9 px from center: beyond the 8 px body, inside the 10 px radius
        assert_eq!(canvas.get_pixel(cx + 9, cy), Some(OUTLINE));
        assert_eq!(canvas.get_pixel(cx, cy - 9), Some(OUTLINE));
        // 11 px from center: background passes through
        assert_eq!(canvas.get_pixel(cx + 11, cy), Some(BACKGROUND));
        assert_eq!(canvas.get_pixel(cx, cy - 11), Some(BACKGROUND));
        // Region corner is outside the circle
        assert_eq!(canvas.get_pixel(rect.x, rect.y), Some(BACKGROUND));
    }

    #[test]
    fn test_band_edges_are_inclusive() {
        let spec = BackdropSpec::new(10, 2.0, BODY, OUTLINE).unwrap();
        assert_eq!(spec.classify(8.0, 0.0), Some(BODY));
        assert_eq!(spec.classify(10.0, 0.0), Some(OUTLINE));
        assert_eq!(spec.classify(6.0, 8.0), Some(OUTLINE));
        assert_eq!(spec.classify(10.0, 1.0), None);
    }

    #[test]
    fn test_zero_thickness_has_no_outline() {
        let spec = BackdropSpec::new(5, 0.0, BODY, OUTLINE).unwrap();
        assert_eq!(spec.classify(5.0, 0.0), Some(BODY));
        assert_eq!(spec.classify(3.0, 4.0), Some(BODY));
    }

    #[test]
    fn test_ring_only() {
        let spec = BackdropSpec::new(4, 4.0, BODY, OUTLINE).unwrap();
        assert_eq!(spec.classify(0.0, 0.0), Some(BODY));
        assert_eq!(spec.classify(1.0, 0.0), Some(OUTLINE));
    }

    #[test]
    fn test_rejects_outline_thicker_than_radius() {
        assert!(matches!(
            BackdropSpec::new(3, 3.5, BODY, OUTLINE),
            Err(RenderError::BackdropOutlineTooThick { radius: 3, .. })
        ));
        assert!(BackdropSpec::new(3, -1.0, BODY, OUTLINE).is_err());
    }

    #[test]
    fn test_radius_from_config() {
        let config = LogoConfig {
            width: 3840,
            height: 2160,
            circle_size_ratio: 0.6,
            ..Default::default()
        };
        assert_eq!(circle_radius(&config), 648);

        let config = LogoConfig {
            width: 65,
            height: 99,
            circle_size_ratio: 1.0,
            ..Default::default()
        };
        assert_eq!(circle_radius(&config), 32);
    }

    #[test]
    fn test_painted_pixels_stay_in_region() {
        let spec = BackdropSpec::new(6, 1.0, BODY, OUTLINE).unwrap();
        let (canvas, rect) = render_backdrop(&spec, 30);
        for y in 0..30 {
            for x in 0..30 {
                if !rect.contains(x, y) {
                    assert_eq!(canvas.get_pixel(x, y), Some(BACKGROUND), "({x}, {y})");
                }
            }
        }
    }
}
