//! Point-to-segment distance field

use glam::DVec2;
use zmark_config::Color;

/// A finite stroke segment in the glyph's local frame.
///
/// The direction `(A, B)`, squared length `D` and projection offset
/// `C = -x1*A - y1*B` are computed once so each distance query is a dot
/// product and a clamp.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Segment {
    start: DVec2,
    end: DVec2,
    /// `(A, B) = end - start`
    direction: DVec2,
    /// `D = A² + B²`
    length_sq: f64,
    /// `C = -start · direction`
    offset: f64,
    pub body_color: Color,
    pub outline_color: Color,
}

impl Segment {
    pub fn new(start: DVec2, end: DVec2, body_color: Color, outline_color: Color) -> Self {
        let direction = end - start;
        Self {
            start,
            end,
            direction,
            length_sq: direction.length_squared(),
            offset: -start.dot(direction),
            body_color,
            outline_color,
        }
    }

    #[inline]
    pub fn start(&self) -> DVec2 {
        self.start
    }

    #[inline]
    pub fn end(&self) -> DVec2 {
        self.end
    }

    /// Scalar projection of `point` onto the segment's line.
    /// 0 at `start`, 1 at `end`.
    #[inline]
    pub fn projection(&self, point: DVec2) -> f64 {
        (point.dot(self.direction) + self.offset) / self.length_sq
    }

    /// Exact squared Euclidean distance from `point` to the segment,
    /// clamped to the endpoints.
    #[inline]
    pub fn distance_squared(&self, point: DVec2) -> f64 {
        // Zero-length segment degenerates to a point
        if self.length_sq <= 0.0 {
            return point.distance_squared(self.start);
        }

        let r = self.projection(point);
        if r <= 0.0 {
            point.distance_squared(self.start)
        } else if r >= 1.0 {
            point.distance_squared(self.end)
        } else {
            point.distance_squared(self.start + r * self.direction)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPS: f64 = 1e-12;

    fn segment(x1: f64, y1: f64, x2: f64, y2: f64) -> Segment {
        Segment::new(
            DVec2::new(x1, y1),
            DVec2::new(x2, y2),
            Color::rgb(255, 255, 255),
            Color::rgb(0, 0, 0),
        )
    }

    #[test]
    fn test_endpoints_are_on_segment() {
        let seg = segment(-3.0, 0.0, 0.0, 3.0);
        assert!(seg.distance_squared(seg.start()).abs() < EPS);
        assert!(seg.distance_squared(seg.end()).abs() < EPS);
    }

    #[test]
    fn test_perpendicular_offset_from_midpoint() {
        let seg = segment(-3.0, 0.0, 0.0, 3.0);
        let midpoint = (seg.start() + seg.end()) / 2.0;
        // Unit normal of the (1, 1) direction
        let normal = DVec2::new(1.0, -1.0).normalize();

        for eps in [1e-3, 0.1, 0.25, 1.7] {
            let d2 = seg.distance_squared(midpoint + normal * eps);
            assert!((d2 - eps * eps).abs() < 1e-9, "eps={eps} d2={d2}");
        }
    }

    #[test]
    fn test_projection_range() {
        let seg = segment(0.0, 0.0, 4.0, 0.0);
        assert!((seg.projection(DVec2::new(0.0, 5.0))).abs() < EPS);
        assert!((seg.projection(DVec2::new(4.0, -1.0)) - 1.0).abs() < EPS);
        assert!((seg.projection(DVec2::new(1.0, 2.0)) - 0.25).abs() < EPS);
    }

    #[test]
    fn test_clamps_before_start() {
        let seg = segment(0.0, 0.0, 4.0, 0.0);
        // Projection r < 0: the infinite line would give 1.0, the segment gives 5.0
        let point = DVec2::new(-2.0, 1.0);
        assert!(seg.projection(point) < 0.0);
        assert!((seg.distance_squared(point) - 5.0).abs() < EPS);
    }

    #[test]
    fn test_clamps_past_end() {
        let seg = segment(0.0, 0.0, 4.0, 0.0);
        let point = DVec2::new(7.0, -4.0);
        assert!(seg.projection(point) > 1.0);
        assert!((seg.distance_squared(point) - 25.0).abs() < EPS);
    }

    #[test]
    fn test_direction_is_irrelevant() {
        let forward = segment(3.0, 0.0, -3.0, 0.0);
        let backward = segment(-3.0, 0.0, 3.0, 0.0);
        for point in [
            DVec2::new(0.5, 0.2),
            DVec2::new(-4.0, 1.0),
            DVec2::new(3.5, -0.5),
        ] {
            let a = forward.distance_squared(point);
            let b = backward.distance_squared(point);
            assert!((a - b).abs() < EPS);
        }
    }

    #[test]
    fn test_zero_length_segment() {
        let seg = segment(1.0, 1.0, 1.0, 1.0);
        assert!((seg.distance_squared(DVec2::new(4.0, 5.0)) - 25.0).abs() < EPS);
    }
}
