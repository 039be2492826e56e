/// Half-width of a glyph stroke in local units.
///
/// Fixed by the glyph topology: diagonals sit this far from the axis so that
/// adjacent strokes meet without gaps. Not a tunable.
pub const STANDARD_DISTANCE: f64 = std::f64::consts::SQRT_2 / 4.0;

/// Distance from the glyph center to the ends of the outside strokes and bar.
pub const OUTER_HALF_SPAN: f64 = 3.0;

/// Distance from the glyph center to the ends of the inside strokes.
pub const INNER_HALF_SPAN: f64 = 1.0;

/// Glyph side length in local units (stroke span plus a half-width each side).
pub const GLYPH_LOCAL_EXTENT: f64 = 2.0 * OUTER_HALF_SPAN + 2.0 * STANDARD_DISTANCE;

/// Slack, in local units, applied to the cull tests so a culled pixel is
/// strictly farther than a stroke half-width from every segment.
pub const CULL_MARGIN: f64 = 1e-9;

/// Number of strokes in a glyph.
pub const STROKE_COUNT: usize = 5;

/// Rasterizer progress is traced once per this many columns.
pub const PROGRESS_TRACE_INTERVAL: u32 = 256;
