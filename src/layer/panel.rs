//! Rounded panel behind the book.

use palette::Srgba;

use super::{LayerEffect, RenderContext};

/// Rounded square at 15% padding, composited over the gradient.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PanelLayer {
    pub fill: Srgba<u8>,
}

impl PanelLayer {
    pub fn new(fill: Srgba<u8>) -> Self {
        Self { fill }
    }
}

impl LayerEffect for PanelLayer {
    fn name(&self) -> &'static str {
        "panel"
    }

    fn transform(&self, ctx: &mut RenderContext) {
        let rect = ctx.geometry.panel();
        ctx.canvas
            .fill_rounded_rect(rect, ctx.geometry.corner_radius, self.fill);
    }
}
