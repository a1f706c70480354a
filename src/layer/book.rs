//! The open book: two pages and the spine between them.

use palette::{Srgb, WithAlpha};

use super::{LayerEffect, RenderContext};
use crate::style::{DIVIDER, GRADIENT_END, GRADIENT_START};

// ============================================================================
// Pages
// ============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PageSide {
    Left,
    Right,
}

/// One page of the book, drawn as an opaque trapezoid.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PageLayer {
    pub side: PageSide,
    pub color: Srgb<u8>,
}

impl PageLayer {
    /// Left pages take the gradient start color, right pages the end color.
    pub fn new(side: PageSide) -> Self {
        let color = match side {
            PageSide::Left => GRADIENT_START,
            PageSide::Right => GRADIENT_END,
        };
        Self { side, color }
    }
}

impl LayerEffect for PageLayer {
    fn name(&self) -> &'static str {
        match self.side {
            PageSide::Left => "left page",
            PageSide::Right => "right page",
        }
    }

    fn transform(&self, ctx: &mut RenderContext) {
        let outline = match self.side {
            PageSide::Left => ctx.geometry.left_page,
            PageSide::Right => ctx.geometry.right_page,
        };
        ctx.canvas.fill_polygon(&outline, self.color.with_alpha(255u8));
    }
}

// ============================================================================
// Divider
// ============================================================================

/// Vertical spine at the horizontal center.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DividerLayer {
    pub color: Srgb<u8>,
}

impl Default for DividerLayer {
    fn default() -> Self {
        Self { color: DIVIDER }
    }
}

impl LayerEffect for DividerLayer {
    fn name(&self) -> &'static str {
        "divider"
    }

    fn transform(&self, ctx: &mut RenderContext) {
        let bounds = ctx.geometry.divider.bounds();
        ctx.canvas.fill_rect(bounds, self.color.with_alpha(255u8));
    }
}
