//! Shape layout derived from the icon size.
//!
//! All coordinates are whole pixels obtained as `floor(ratio * size)`.

use crate::icon::RectPx;

const PADDING_RATIO: f64 = 0.15;
const INNER_RATIO: f64 = 0.7;
const CORNER_RATIO: f64 = 0.075;
const DIVIDER_WIDTH_RATIO: f64 = 0.02;

/// Left page outline as (x, y) fractions of the icon size.
const LEFT_PAGE: [(f64, f64); 4] = [(0.30, 0.35), (0.30, 0.75), (0.48, 0.70), (0.48, 0.30)];

/// Right page outline as (x, y) fractions of the icon size.
const RIGHT_PAGE: [(f64, f64); 4] = [(0.52, 0.30), (0.52, 0.70), (0.70, 0.75), (0.70, 0.35)];

/// Divider endpoints as (x, y) fractions of the icon size.
const DIVIDER: [(f64, f64); 2] = [(0.50, 0.30), (0.50, 0.70)];

fn scale(size: u32, ratio: f64) -> u32 {
    (size as f64 * ratio).floor() as u32
}

/// A point in pixel coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PointPx {
    pub x: u32,
    pub y: u32,
}

impl PointPx {
    pub fn new(x: u32, y: u32) -> Self {
        Self { x, y }
    }

    fn scaled(size: u32, (fx, fy): (f64, f64)) -> Self {
        Self::new(scale(size, fx), scale(size, fy))
    }
}

/// A vertical stroke from `top` to `bottom`, both rows included.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct VerticalLine {
    pub top: PointPx,
    pub bottom: PointPx,
    pub width: u32,
}

impl VerticalLine {
    /// The pixels covered by the stroke, centered on the line's column.
    pub fn bounds(&self) -> RectPx {
        let left = self.top.x.saturating_sub(self.width / 2);
        RectPx::new(left, self.top.y, self.width, self.bottom.y - self.top.y + 1)
    }
}

/// Every shape of the book icon laid out for one size.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BookGeometry {
    pub size: u32,
    pub padding: u32,
    pub inner: u32,
    pub corner_radius: u32,
    pub left_page: [PointPx; 4],
    pub right_page: [PointPx; 4],
    pub divider: VerticalLine,
}

impl BookGeometry {
    pub fn new(size: u32) -> Self {
        let [top, bottom] = DIVIDER.map(|p| PointPx::scaled(size, p));

        Self {
            size,
            padding: scale(size, PADDING_RATIO),
            inner: scale(size, INNER_RATIO),
            corner_radius: scale(size, CORNER_RATIO),
            left_page: LEFT_PAGE.map(|p| PointPx::scaled(size, p)),
            right_page: RIGHT_PAGE.map(|p| PointPx::scaled(size, p)),
            divider: VerticalLine {
                top,
                bottom,
                width: scale(size, DIVIDER_WIDTH_RATIO).max(1),
            },
        }
    }

    /// The panel square, spanning `padding..=padding + inner` on both axes.
    pub fn panel(&self) -> RectPx {
        RectPx::new(self.padding, self.padding, self.inner + 1, self.inner + 1)
    }
}
