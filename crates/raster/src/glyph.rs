//! Glyph rasterizer
//!
//! The glyph is five stroke segments in a local frame centered on the glyph:
//! two outside diagonals, two inside diagonals and a bar along the x axis.
//! Each pixel of the glyph's square region is classified against the
//! segments in that order and takes the color of the first one that claims
//! it, so earlier strokes win wherever strokes overlap.
//!
//! Local coordinates are converted to pixels by `unit`, chosen so the whole
//! glyph (span plus stroke half-widths) exactly fills the region. Proportions
//! are therefore independent of the rendered size.

use glam::DVec2;
use tracing::{debug, trace};
use zmark_config::{Color, LogoConfig};

use crate::constants::{
    CULL_MARGIN, GLYPH_LOCAL_EXTENT, INNER_HALF_SPAN, OUTER_HALF_SPAN, PROGRESS_TRACE_INTERVAL,
    STANDARD_DISTANCE, STROKE_COUNT,
};
use crate::error::RenderError;
use crate::region::RegionMut;
use crate::segment::Segment;

/// Which family a stroke belongs to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StrokeKind {
    Outside,
    Inside,
    Single,
}

/// Which band of a stroke claimed a pixel
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Band {
    Body,
    Outline,
}

/// Body and outline colors for each stroke family
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GlyphColors {
    pub outside_body: Color,
    pub outside_outline: Color,
    pub inside_body: Color,
    pub inside_outline: Color,
    pub single_body: Color,
    pub single_outline: Color,
}

impl GlyphColors {
    pub fn from_config(config: &LogoConfig) -> Self {
        Self {
            outside_body: config.outside_line_body_color,
            outside_outline: config.outside_line_outline_color,
            inside_body: config.inside_line_body_color,
            inside_outline: config.inside_line_outline_color,
            single_body: config.single_line_body_color,
            single_outline: config.single_line_outline_color,
        }
    }

    fn for_kind(&self, kind: StrokeKind) -> (Color, Color) {
        match kind {
            StrokeKind::Outside => (self.outside_body, self.outside_outline),
            StrokeKind::Inside => (self.inside_body, self.inside_outline),
            StrokeKind::Single => (self.single_body, self.single_outline),
        }
    }
}

/// A pixel claimed by a stroke
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StrokeHit {
    /// Position of the stroke in priority order
    pub index: usize,
    pub kind: StrokeKind,
    pub band: Band,
    pub color: Color,
}

/// The five strokes of the glyph in priority order.
///
/// The order is load-bearing: outside strokes, then inside strokes, then the
/// bar. Classification stops at the first stroke that claims a pixel.
#[derive(Debug, Clone, PartialEq)]
pub struct GlyphSpec {
    strokes: [(StrokeKind, Segment); STROKE_COUNT],
}

impl GlyphSpec {
    pub fn new(colors: GlyphColors) -> Self {
        let o = OUTER_HALF_SPAN;
        let i = INNER_HALF_SPAN;
        let stroke = |kind, a: (f64, f64), b: (f64, f64)| {
            let (body, outline) = colors.for_kind(kind);
            (
                kind,
                Segment::new(DVec2::new(a.0, a.1), DVec2::new(b.0, b.1), body, outline),
            )
        };

        Self {
            strokes: [
                stroke(StrokeKind::Outside, (-o, 0.0), (0.0, o)),
                stroke(StrokeKind::Outside, (o, 0.0), (0.0, -o)),
                stroke(StrokeKind::Inside, (-i, 0.0), (0.0, i)),
                stroke(StrokeKind::Inside, (i, 0.0), (0.0, -i)),
                stroke(StrokeKind::Single, (o, 0.0), (-o, 0.0)),
            ],
        }
    }

    pub fn from_config(config: &LogoConfig) -> Self {
        Self::new(GlyphColors::from_config(config))
    }

    /// Strokes in priority order
    pub fn strokes(&self) -> &[(StrokeKind, Segment); STROKE_COUNT] {
        &self.strokes
    }

    /// First stroke claiming the local point `point`.
    ///
    /// `unit_sq` converts local squared distances to pixels²; the thresholds
    /// are squared pixel radii of the body and outline bands.
    #[inline]
    pub fn classify(
        &self,
        point: DVec2,
        unit_sq: f64,
        thresholds: &Thresholds,
    ) -> Option<StrokeHit> {
        for (index, (kind, segment)) in self.strokes.iter().enumerate() {
            let d2 = segment.distance_squared(point) * unit_sq;
            if d2 <= thresholds.body_sq {
                return Some(StrokeHit {
                    index,
                    kind: *kind,
                    band: Band::Body,
                    color: segment.body_color,
                });
            } else if d2 <= thresholds.outline_sq {
                return Some(StrokeHit {
                    index,
                    kind: *kind,
                    band: Band::Outline,
                    color: segment.outline_color,
                });
            }
        }
        None
    }
}

/// Squared pixel radii of the body and outline bands
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Thresholds {
    pub body_sq: f64,
    pub outline_sq: f64,
}

/// Whether the rasterizer skips pixels that are provably outside every
/// stroke. Output is identical either way.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CullMode {
    #[default]
    Enabled,
    Disabled,
}

/// True if the local point is farther than a stroke half-width from every
/// segment.
///
/// Every segment point has `x <= 0 || y <= 0`, `x >= 0 || y >= 0` and
/// `-3 <= x - y <= 3`, so points past those limits by more than a
/// half-width (measured along the axis or across the diagonal) cannot be
/// claimed.
#[inline]
pub fn is_culled(point: DVec2) -> bool {
    let axis_limit = STANDARD_DISTANCE + CULL_MARGIN;
    let diagonal_limit =
        OUTER_HALF_SPAN + std::f64::consts::SQRT_2 * STANDARD_DISTANCE + CULL_MARGIN;
    let diagonal = point.x - point.y;

    (point.x > axis_limit && point.y > axis_limit)
        || (point.x < -axis_limit && point.y < -axis_limit)
        || diagonal > diagonal_limit
        || diagonal < -diagonal_limit
}

/// Rasterizer for a glyph of a given pixel size and outline thickness
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GlyphRasterizer {
    size: u32,
    unit: f64,
    outline_thickness: f64,
    cull: CullMode,
}

impl GlyphRasterizer {
    /// `size` is the side of the square glyph region in pixels.
    ///
    /// The outline may be as thick as the stroke half-width (strokes become
    /// pure outline), never thicker.
    pub fn new(size: u32, outline_thickness: f64) -> Result<Self, RenderError> {
        if size == 0 {
            return Err(RenderError::ZeroGlyphSize);
        }

        let unit = size as f64 / GLYPH_LOCAL_EXTENT;
        let half_width = STANDARD_DISTANCE * unit;
        if !(outline_thickness >= 0.0 && outline_thickness <= half_width) {
            return Err(RenderError::OutlineTooThick {
                thickness: outline_thickness,
                half_width,
            });
        }

        Ok(Self {
            size,
            unit,
            outline_thickness,
            cull: CullMode::default(),
        })
    }

    pub fn with_cull(mut self, cull: CullMode) -> Self {
        self.cull = cull;
        self
    }

    #[inline]
    pub fn size(&self) -> u32 {
        self.size
    }

    /// Pixels per local unit
    #[inline]
    pub fn unit(&self) -> f64 {
        self.unit
    }

    /// Stroke half-width in pixels (outer edge of the outline band)
    #[inline]
    pub fn half_width(&self) -> f64 {
        STANDARD_DISTANCE * self.unit
    }

    pub fn thresholds(&self) -> Thresholds {
        let outline = self.half_width();
        let body = outline - self.outline_thickness;
        Thresholds {
            body_sq: body * body,
            outline_sq: outline * outline,
        }
    }

    /// Local-frame point for pixel indices (x, y) of the glyph region
    #[inline]
    pub fn local_point(&self, x: u32, y: u32) -> DVec2 {
        let half = self.size as f64 / 2.0;
        DVec2::new((x as f64 - half) / self.unit, (y as f64 - half) / self.unit)
    }

    /// Classify every pixel of the glyph region.
    pub fn rasterize(&self, spec: &GlyphSpec) -> GlyphMask {
        let size = self.size;
        let thresholds = self.thresholds();
        let unit_sq = self.unit * self.unit;
        let mut mask = GlyphMask::new(size);
        let mut culled = 0usize;

        for x in 0..size {
            for y in 0..size {
                let point = self.local_point(x, y);
                if self.cull == CullMode::Enabled && is_culled(point) {
                    culled += 1;
                    continue;
                }
                if let Some(hit) = spec.classify(point, unit_sq, &thresholds) {
                    mask.set(x, y, hit.color);
                }
            }
            if x % PROGRESS_TRACE_INTERVAL == 0 {
                trace!("GlyphRasterizer::rasterize: column {}/{}", x, size);
            }
        }

        debug!(
            "GlyphRasterizer::rasterize: size={}, unit={:.3}, thickness={:.2}, culled {} of {} pixels, claimed {}",
            size,
            self.unit,
            self.outline_thickness,
            culled,
            (size as usize) * (size as usize),
            mask.claimed_count()
        );

        mask
    }
}

/// Glyph pixels claimed by a stroke.
///
/// Stored in the rasterizer's working layout: column-major, so cell (x, y)
/// sits at `x * size + y`. [`GlyphMask::stamp`] maps it into the row-major
/// canvas. Unclaimed cells are None.
#[derive(Debug, Clone, PartialEq)]
pub struct GlyphMask {
    size: u32,
    cells: Vec<Option<Color>>,
}

impl GlyphMask {
    fn new(size: u32) -> Self {
        Self {
            size,
            cells: vec![None; (size as usize) * (size as usize)],
        }
    }

    #[inline]
    pub fn size(&self) -> u32 {
        self.size
    }

    #[inline]
    fn set(&mut self, x: u32, y: u32, color: Color) {
        let index = x as usize * self.size as usize + y as usize;
        self.cells[index] = Some(color);
    }

    /// Color claimed at pixel indices (x, y), None if unclaimed or out of range
    #[inline]
    pub fn get(&self, x: u32, y: u32) -> Option<Color> {
        if x >= self.size || y >= self.size {
            return None;
        }
        self.cells[x as usize * self.size as usize + y as usize]
    }

    pub fn claimed_count(&self) -> usize {
        self.cells.iter().filter(|c| c.is_some()).count()
    }

    /// Count of cells claimed with exactly `color`
    pub fn count_color(&self, color: Color) -> usize {
        self.cells.iter().filter(|c| **c == Some(color)).count()
    }

    /// Write claimed cells into `region`; unclaimed cells leave the region's
    /// existing pixels untouched.
    ///
    /// Cell (x, y) lands on region column `size - 1 - y`, row `x`: local x
    /// runs down the region and local y runs right to left, so the bar is
    /// vertical.
    pub fn stamp(&self, region: &mut RegionMut<'_>) {
        let size = self.size as usize;
        for (x, cells) in self.cells.chunks_exact(size.max(1)).enumerate() {
            for (y, cell) in cells.iter().enumerate() {
                if let Some(color) = cell {
                    region.set((size - 1 - y) as u32, x as u32, *color);
                }
            }
        }
    }
}
