//! Compositor - assembles background, backdrop and glyph into one canvas
//!
//! A [`RenderPlan`] is derived from a [`LogoConfig`] before any pixel work:
//! it validates the config, places the centered backdrop and glyph regions
//! and precomputes the glyph scale. Rendering the plan then:
//! 1. Allocates the canvas filled with the background color
//! 2. Draws the backdrop (if enabled) into its centered square
//! 3. Rasterizes the glyph and stamps it on top, mapping the rasterizer's
//!    column-major working layout into canvas rows (bar vertical)
//!
//! Unclaimed glyph pixels keep whatever the canvas already held.

use tracing::{debug, info, warn};
use zmark_config::{Color, LogoConfig};

use crate::backdrop::{circle_radius, BackdropSpec};
use crate::error::RenderError;
use crate::glyph::{CullMode, GlyphRasterizer, GlyphSpec};
use crate::region::Rect;
use crate::surface::Canvas;

/// Everything needed to render, derived and validated up front
#[derive(Debug, Clone, PartialEq)]
pub struct RenderPlan {
    width: u32,
    height: u32,
    background: Color,
    backdrop: Option<(Rect, BackdropSpec)>,
    glyph_rect: Rect,
    glyph: GlyphRasterizer,
    spec: GlyphSpec,
}

impl RenderPlan {
    /// Validate `config` and lay out the render.
    pub fn from_config(config: &LogoConfig) -> Result<Self, RenderError> {
        config.validate()?;

        let min_dimension = config.min_dimension();

        let backdrop = if config.use_round_shape {
            let radius = circle_radius(config);
            if radius == 0 {
                warn!(
                    "RenderPlan: backdrop radius rounds to 0 for {}x{} at circle_size_ratio {}, skipping",
                    config.width, config.height, config.circle_size_ratio
                );
                None
            } else {
                let spec = BackdropSpec::from_config(config)?;
                let rect = Rect::centered_square(config.width, config.height, spec.side());
                Some((rect, spec))
            }
        } else {
            None
        };

        let glyph_size = (min_dimension as f64 * config.logo_size_ratio).floor() as u32;
        if glyph_size == 0 {
            return Err(RenderError::EmptyGlyph {
                width: config.width,
                height: config.height,
                ratio: config.logo_size_ratio,
            });
        }
        let glyph = GlyphRasterizer::new(glyph_size, config.outline_thickness)?;
        let glyph_rect = Rect::centered_square(config.width, config.height, glyph_size);

        debug!(
            "RenderPlan: canvas {}x{}, glyph {:?} unit={:.3}, backdrop {:?}",
            config.width,
            config.height,
            glyph_rect,
            glyph.unit(),
            backdrop.map(|(rect, spec)| (rect, spec.radius()))
        );

        Ok(Self {
            width: config.width,
            height: config.height,
            background: config.background_color,
            backdrop,
            glyph_rect,
            glyph,
            spec: GlyphSpec::from_config(config),
        })
    }

    /// Choose whether the glyph rasterizer culls far pixels
    pub fn with_cull(mut self, cull: CullMode) -> Self {
        self.glyph = self.glyph.with_cull(cull);
        self
    }

    #[inline]
    pub fn width(&self) -> u32 {
        self.width
    }

    #[inline]
    pub fn height(&self) -> u32 {
        self.height
    }

    /// Square region the glyph occupies
    #[inline]
    pub fn glyph_rect(&self) -> Rect {
        self.glyph_rect
    }

    #[inline]
    pub fn glyph(&self) -> &GlyphRasterizer {
        &self.glyph
    }

    /// Backdrop region and spec, if a backdrop is drawn
    #[inline]
    pub fn backdrop(&self) -> Option<(Rect, BackdropSpec)> {
        self.backdrop
    }

    /// Render the canvas.
    pub fn render(&self) -> Result<Canvas, RenderError> {
        let mut canvas = Canvas::new(self.width, self.height, self.background);

        if let Some((rect, spec)) = &self.backdrop {
            let mut region = canvas.region_mut(*rect)?;
            spec.rasterize(&mut region);
        }

        let mask = self.glyph.rasterize(&self.spec);
        let mut region = canvas.region_mut(self.glyph_rect)?;
        mask.stamp(&mut region);

        info!(
            "Rendered {}x{} canvas (glyph {} px{})",
            self.width,
            self.height,
            self.glyph.size(),
            if self.backdrop.is_some() {
                ", with backdrop"
            } else {
                ""
            }
        );

        Ok(canvas)
    }
}

/// Validate `config` and render it in one call
pub fn render(config: &LogoConfig) -> Result<Canvas, RenderError> {
    RenderPlan::from_config(config)?.render()
}
