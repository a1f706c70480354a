//! Aliased drawing primitives on top of tiny-skia.
//!
//! Shapes are filled without anti-aliasing so edges land on whole pixels.
//! Colors are composited source-over, which is what lets a translucent fill
//! tint whatever was drawn beneath it.

use image::{Rgba, RgbaImage};
use palette::Srgba;
use resvg::tiny_skia::{
    Color, FillRule, LineJoin, Paint, PathBuilder, Pixmap, Rect, Stroke, Transform,
};

use crate::geometry::PointPx;
use crate::icon::RectPx;

/// Cubic Bézier handle length for a quarter circle of radius 1.
const ARC_KAPPA: f32 = 0.552_284_8;

// ============================================================================
// Canvas
// ============================================================================

/// A square drawing surface owned by a single render call.
pub struct Canvas {
    pixmap: Pixmap,
}

impl Canvas {
    /// Allocates a `size x size` canvas cleared to `background`.
    ///
    /// Returns `None` if the size is zero or too large to allocate.
    pub fn new(size: u32, background: Srgba<u8>) -> Option<Self> {
        let mut pixmap = Pixmap::new(size, size)?;
        pixmap.fill(Color::from_rgba8(
            background.color.red,
            background.color.green,
            background.color.blue,
            background.alpha,
        ));
        Some(Self { pixmap })
    }

    /// Fills an axis-aligned rectangle.
    pub fn fill_rect(&mut self, rect: RectPx, color: Srgba<u8>) {
        let Some(rect) = to_skia_rect(rect) else {
            return;
        };
        self.pixmap
            .fill_rect(rect, &solid_paint(color), Transform::identity(), None);
    }

    /// Fills a rectangle whose corners are quarter circles of `radius`.
    ///
    /// The radius is clamped to half the shorter side.
    pub fn fill_rounded_rect(&mut self, rect: RectPx, radius: u32, color: Srgba<u8>) {
        let r = radius.min(rect.width / 2).min(rect.height / 2) as f32;
        if r == 0.0 {
            self.fill_rect(rect, color);
            return;
        }

        let (l, t) = (rect.x as f32, rect.y as f32);
        let (rt, b) = (rect.right() as f32, rect.bottom() as f32);
        let k = r * ARC_KAPPA;

        let mut pb = PathBuilder::new();
        pb.move_to(l + r, t);
        pb.line_to(rt - r, t);
        pb.cubic_to(rt - r + k, t, rt, t + r - k, rt, t + r);
        pb.line_to(rt, b - r);
        pb.cubic_to(rt, b - r + k, rt - r + k, b, rt - r, b);
        pb.line_to(l + r, b);
        pb.cubic_to(l + r - k, b, l, b - r + k, l, b - r);
        pb.line_to(l, t + r);
        pb.cubic_to(l, t + r - k, l + r - k, t, l + r, t);
        pb.close();

        if let Some(path) = pb.finish() {
            self.pixmap.fill_path(
                &path,
                &solid_paint(color),
                FillRule::Winding,
                Transform::identity(),
                None,
            );
        }
    }

    /// Fills a closed polygon through the pixels at `points`, boundary
    /// pixels included.
    ///
    /// The outline runs through pixel centers. The interior is filled and the
    /// outline is traced with a 1px stroke, so every vertex pixel and every
    /// pixel the edges pass through is painted.
    ///
    /// Outlines with fewer than three points draw nothing.
    pub fn fill_polygon(&mut self, points: &[PointPx], color: Srgba<u8>) {
        let [first, rest @ ..] = points else {
            return;
        };
        if rest.len() < 2 {
            return;
        }

        let center = |p: &PointPx| (p.x as f32 + 0.5, p.y as f32 + 0.5);
        let mut pb = PathBuilder::new();
        let (x, y) = center(first);
        pb.move_to(x, y);
        for p in rest {
            let (x, y) = center(p);
            pb.line_to(x, y);
        }
        pb.close();

        let Some(path) = pb.finish() else {
            return;
        };
        let paint = solid_paint(color);
        self.pixmap
            .fill_path(&path, &paint, FillRule::Winding, Transform::identity(), None);

        let outline = Stroke {
            width: 1.0,
            line_join: LineJoin::Round,
            ..Stroke::default()
        };
        self.pixmap
            .stroke_path(&path, &paint, &outline, Transform::identity(), None);
    }

    /// Converts the canvas into a straight-alpha RGBA image.
    pub fn into_rgba_image(self) -> RgbaImage {
        pixmap_to_rgba_image(&self.pixmap)
    }
}

// ============================================================================
// Helpers
// ============================================================================

fn solid_paint(color: Srgba<u8>) -> Paint<'static> {
    let mut paint = Paint::default();
    paint.set_color_rgba8(
        color.color.red,
        color.color.green,
        color.color.blue,
        color.alpha,
    );
    paint.anti_alias = false;
    paint
}

fn to_skia_rect(rect: RectPx) -> Option<Rect> {
    Rect::from_xywh(
        rect.x as f32,
        rect.y as f32,
        rect.width as f32,
        rect.height as f32,
    )
}

/// Converts a tiny-skia pixmap to an `image::RgbaImage`.
fn pixmap_to_rgba_image(pixmap: &Pixmap) -> RgbaImage {
    let mut img = RgbaImage::new(pixmap.width(), pixmap.height());

    // Both buffers are row-major with the same dimensions.
    for (dst, src) in img.pixels_mut().zip(pixmap.pixels()) {
        let (r, g, b, a) = unpremultiply(src.red(), src.green(), src.blue(), src.alpha());
        *dst = Rgba([r, g, b, a]);
    }

    img
}

/// Unpremultiplies a premultiplied alpha pixel.
fn unpremultiply(r: u8, g: u8, b: u8, a: u8) -> (u8, u8, u8, u8) {
    match a {
        0 => (0, 0, 0, 0),
        255 => (r, g, b, a),
        _ => {
            let a_f = a as f32 / 255.0;
            (
                (r as f32 / a_f).round().min(255.0) as u8,
                (g as f32 / a_f).round().min(255.0) as u8,
                (b as f32 / a_f).round().min(255.0) as u8,
                a,
            )
        }
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    fn red() -> Srgba<u8> {
        Srgba::new(255, 0, 0, 255)
    }

    fn blue() -> Srgba<u8> {
        Srgba::new(0, 0, 255, 255)
    }

    fn opaque_canvas(size: u32) -> Canvas {
        Canvas::new(size, Srgba::new(255, 255, 255, 255)).unwrap()
    }

    #[test]
    fn zero_size_is_rejected() {
        assert!(Canvas::new(0, red()).is_none());
    }

    #[test]
    fn new_canvas_is_cleared() {
        let img = Canvas::new(4, Srgba::new(0, 0, 0, 0)).unwrap().into_rgba_image();
        assert!(img.pixels().all(|p| p.0 == [0, 0, 0, 0]));
    }

    #[test]
    fn fill_rect_covers_exact_pixels() {
        let mut canvas = opaque_canvas(10);
        canvas.fill_rect(RectPx::new(2, 3, 4, 5), red());
        let img = canvas.into_rgba_image();

        assert_eq!(img.get_pixel(2, 3).0, [255, 0, 0, 255]);
        assert_eq!(img.get_pixel(5, 7).0, [255, 0, 0, 255]);
        assert_eq!(img.get_pixel(6, 7).0, [255, 255, 255, 255]);
        assert_eq!(img.get_pixel(5, 8).0, [255, 255, 255, 255]);
        assert_eq!(img.get_pixel(1, 3).0, [255, 255, 255, 255]);
    }

    #[test]
    fn empty_rect_draws_nothing() {
        let mut canvas = opaque_canvas(4);
        canvas.fill_rect(RectPx::new(1, 1, 0, 2), red());
        let img = canvas.into_rgba_image();
        assert!(img.pixels().all(|p| p.0 == [255, 255, 255, 255]));
    }

    #[test]
    fn rounded_rect_cuts_corners() {
        let mut canvas = opaque_canvas(40);
        canvas.fill_rounded_rect(RectPx::new(0, 0, 40, 40), 10, blue());
        let img = canvas.into_rgba_image();

        assert_eq!(img.get_pixel(0, 0).0, [255, 255, 255, 255]);
        assert_eq!(img.get_pixel(39, 39).0, [255, 255, 255, 255]);
        assert_eq!(img.get_pixel(20, 0).0, [0, 0, 255, 255]);
        assert_eq!(img.get_pixel(0, 20).0, [0, 0, 255, 255]);
        assert_eq!(img.get_pixel(20, 20).0, [0, 0, 255, 255]);
    }

    #[test]
    fn translucent_fill_blends_over_opaque() {
        let mut canvas = Canvas::new(4, red()).unwrap();
        canvas.fill_rect(RectPx::from_size(4, 4), Srgba::new(0, 0, 255, 128));
        let px = *canvas.into_rgba_image().get_pixel(1, 1);

        assert_eq!(px[3], 255);
        assert!(px[0] > 100 && px[0] < 155, "red channel {}", px[0]);
        assert!(px[2] > 100 && px[2] < 155, "blue channel {}", px[2]);
    }

    #[test]
    fn polygon_fills_interior() {
        let mut canvas = opaque_canvas(20);
        let square = [
            PointPx::new(5, 5),
            PointPx::new(5, 15),
            PointPx::new(15, 15),
            PointPx::new(15, 5),
        ];
        canvas.fill_polygon(&square, red());
        let img = canvas.into_rgba_image();

        assert_eq!(img.get_pixel(10, 10).0, [255, 0, 0, 255]);
        assert_eq!(img.get_pixel(2, 10).0, [255, 255, 255, 255]);
        assert_eq!(img.get_pixel(17, 17).0, [255, 255, 255, 255]);
    }

    #[test]
    fn polygon_includes_boundary_pixels() {
        let mut canvas = opaque_canvas(20);
        let square = [
            PointPx::new(5, 5),
            PointPx::new(5, 15),
            PointPx::new(15, 15),
            PointPx::new(15, 5),
        ];
        canvas.fill_polygon(&square, red());
        let img = canvas.into_rgba_image();

        for (x, y) in [(5, 5), (5, 15), (15, 15), (15, 5), (5, 10), (15, 10), (10, 5), (10, 15)] {
            assert_eq!(img.get_pixel(x, y).0, [255, 0, 0, 255], "({x}, {y})");
        }
        for (x, y) in [(4, 10), (16, 10), (10, 4), (10, 16)] {
            assert_eq!(img.get_pixel(x, y).0, [255, 255, 255, 255], "({x}, {y})");
        }
    }

    #[test]
    fn degenerate_polygon_draws_nothing() {
        let mut canvas = opaque_canvas(4);
        canvas.fill_polygon(&[PointPx::new(1, 1), PointPx::new(2, 2)], red());
        canvas.fill_polygon(&[], red());
        let img = canvas.into_rgba_image();
        assert!(img.pixels().all(|p| p.0 == [255, 255, 255, 255]));
    }

    #[test]
    fn unpremultiply_restores_straight_alpha() {
        assert_eq!(unpremultiply(0, 0, 0, 0), (0, 0, 0, 0));
        assert_eq!(unpremultiply(10, 20, 30, 255), (10, 20, 30, 255));
        assert_eq!(unpremultiply(50, 0, 100, 128), (100, 0, 199, 128));
    }
}
