//! Drawing passes that make up the book icon.
//!
//! Each pass implements [`LayerEffect`] and paints onto the shared
//! [`RenderContext`]. A [`LayerPipeline`] runs the passes in a fixed order,
//! so later passes cover earlier ones:
//!
//! ```text
//! Canvas (transparent or white)
//!     │
//!     ▼
//! ┌──────────┐
//! │ Gradient │ ◄── full-height column per x
//! └────┬─────┘
//!      ▼
//! ┌──────────┐
//! │  Panel   │ ◄── rounded square, composited source-over
//! └────┬─────┘
//!      ▼
//! ┌──────────┐
//! │  Pages   │ ◄── left and right trapezoids
//! └────┬─────┘
//!      ▼
//! ┌──────────┐
//! │ Divider  │ ◄── spine between the pages
//! └──────────┘
//! ```

pub mod book;
pub mod gradient;
pub mod panel;

pub use book::{DividerLayer, PageLayer, PageSide};
pub use gradient::GradientLayer;
pub use panel::PanelLayer;

use crate::geometry::BookGeometry;
use crate::raster::Canvas;
use crate::style::IconStyle;

// ============================================================================
// Render Context
// ============================================================================

/// State handed from pass to pass while one icon is drawn.
pub struct RenderContext {
    /// The canvas being drawn into.
    pub canvas: Canvas,

    /// Shape layout for the canvas size.
    pub geometry: BookGeometry,
}

impl RenderContext {
    pub fn new(canvas: Canvas, geometry: BookGeometry) -> Self {
        Self { canvas, geometry }
    }
}

// ============================================================================
// Layer Trait
// ============================================================================

/// A single drawing pass.
pub trait LayerEffect {
    /// Short name used in log output.
    fn name(&self) -> &'static str;

    /// Paints this pass onto the context's canvas.
    fn transform(&self, ctx: &mut RenderContext);
}

// ============================================================================
// Layer Pipeline
// ============================================================================

/// The ordered passes for one [`IconStyle`].
pub struct LayerPipeline {
    pub gradient: GradientLayer,
    pub panel: PanelLayer,
    pub left_page: PageLayer,
    pub right_page: PageLayer,
    pub divider: DividerLayer,
}

impl LayerPipeline {
    /// Builds the passes for the given style.
    pub fn for_style(style: &IconStyle) -> Self {
        Self {
            gradient: GradientLayer::default(),
            panel: PanelLayer::new(style.background_fill),
            left_page: PageLayer::new(PageSide::Left),
            right_page: PageLayer::new(PageSide::Right),
            divider: DividerLayer::default(),
        }
    }

    /// Passes in drawing order.
    pub fn layers(&self) -> [&dyn LayerEffect; 5] {
        [
            &self.gradient,
            &self.panel,
            &self.left_page,
            &self.right_page,
            &self.divider,
        ]
    }

    /// Runs every pass over the context.
    pub fn render(&self, ctx: &mut RenderContext) {
        for layer in self.layers() {
            log::trace!("drawing {} at {}px", layer.name(), ctx.geometry.size);
            layer.transform(ctx);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pipeline_order() {
        let pipeline = LayerPipeline::for_style(&IconStyle::default());
        let names: Vec<_> = pipeline.layers().iter().map(|l| l.name()).collect();
        assert_eq!(
            names,
            ["gradient", "panel", "left page", "right page", "divider"]
        );
    }

    #[test]
    fn panel_takes_style_fill() {
        let style = IconStyle::opaque();
        let pipeline = LayerPipeline::for_style(&style);
        assert_eq!(pipeline.panel.fill, style.background_fill);
    }
}
