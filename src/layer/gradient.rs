//! Horizontal background gradient.

use palette::{Srgb, Srgba, WithAlpha};

use super::{LayerEffect, RenderContext};
use crate::icon::RectPx;
use crate::style::{self, GRADIENT_END, GRADIENT_START};

/// Fills every column with a color interpolated from `start` (left) to `end`.
///
/// Column `i` of an `n`-pixel canvas uses `t = i / n`, so the last column
/// stops one step short of `end`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GradientLayer {
    pub start: Srgb<u8>,
    pub end: Srgb<u8>,
}

impl Default for GradientLayer {
    fn default() -> Self {
        Self {
            start: GRADIENT_START,
            end: GRADIENT_END,
        }
    }
}

impl GradientLayer {
    /// The opaque color of column `column` on a canvas `size` pixels wide.
    pub fn column_color(&self, column: u32, size: u32) -> Srgba<u8> {
        let t = column as f32 / size as f32;
        style::lerp(self.start, self.end, t).with_alpha(255u8)
    }
}

impl LayerEffect for GradientLayer {
    fn name(&self) -> &'static str {
        "gradient"
    }

    fn transform(&self, ctx: &mut RenderContext) {
        let size = ctx.geometry.size;
        for column in 0..size {
            let color = self.column_color(column, size);
            ctx.canvas.fill_rect(RectPx::new(column, 0, 1, size), color);
        }
    }
}
