//! Book icon renderer.

use crate::error::{IconError, Result};
use crate::geometry::BookGeometry;
use crate::icon::{IconImage, IconSet};
use crate::layer::{LayerPipeline, RenderContext};
use crate::raster::Canvas;
use crate::style::IconStyle;

/// Renders the book icon at arbitrary sizes for one [`IconStyle`].
///
/// Rendering is deterministic: the same size and style always produce the
/// same pixels.
///
/// # Example
///
/// ```
/// use book_icon::{IconRenderer, IconStyle};
///
/// let renderer = IconRenderer::new(IconStyle::opaque());
/// let icon = renderer.render(48).unwrap();
/// assert_eq!(icon.size(), 48);
/// ```
pub struct IconRenderer {
    style: IconStyle,
    pipeline: LayerPipeline,
}

impl IconRenderer {
    pub fn new(style: IconStyle) -> Self {
        Self {
            pipeline: LayerPipeline::for_style(&style),
            style,
        }
    }

    pub fn style(&self) -> &IconStyle {
        &self.style
    }

    /// Renders a single `size x size` icon.
    ///
    /// Fails with [`IconError::InvalidArgument`] for non-positive sizes or
    /// sizes too large to allocate.
    pub fn render(&self, size: i64) -> Result<IconImage> {
        let size = validate_size(size)?;
        let canvas = Canvas::new(size, self.style.color_mode.canvas_fill())
            .ok_or_else(|| IconError::invalid_size(size as i64, "canvas cannot be allocated"))?;

        let geometry = BookGeometry::new(size);
        let content_bounds = geometry.panel();

        let mut ctx = RenderContext::new(canvas, geometry);
        self.pipeline.render(&mut ctx);

        log::debug!("rendered {size}x{size} icon ({:?})", self.style.color_mode);
        Ok(IconImage::new(ctx.canvas.into_rgba_image(), content_bounds))
    }

    /// Renders every size in order.
    ///
    /// All sizes are validated before anything is drawn.
    pub fn render_all(&self, sizes: &[i64]) -> Result<IconSet> {
        for &size in sizes {
            validate_size(size)?;
        }
        let images = sizes
            .iter()
            .map(|&size| self.render(size))
            .collect::<Result<Vec<_>>>()?;
        Ok(IconSet::from_images(images))
    }
}

impl Default for IconRenderer {
    fn default() -> Self {
        Self::new(IconStyle::default())
    }
}

/// Renders the icon at `size` with the default (translucent) style.
pub fn render_icon(size: i64) -> Result<IconImage> {
    IconRenderer::default().render(size)
}

/// Checks that `size` is a positive pixel count.
pub fn validate_size(size: i64) -> Result<u32> {
    if size <= 0 {
        return Err(IconError::invalid_size(size, "size must be positive"));
    }
    u32::try_from(size).map_err(|_| IconError::invalid_size(size, "size exceeds u32 range"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::style::ColorMode;

    #[test]
    fn render_matches_requested_size() {
        for size in [1, 2, 16, 48, 128] {
            let icon = render_icon(size).unwrap();
            assert_eq!(icon.size(), size as u32);
            assert!(icon.dimensions().is_square());
        }
    }

    #[test]
    fn non_positive_sizes_are_rejected() {
        for size in [0, -5, i64::MIN] {
            assert!(matches!(
                render_icon(size),
                Err(IconError::InvalidArgument { size: s, .. }) if s == size
            ));
        }
    }

    #[test]
    fn huge_sizes_are_rejected() {
        assert!(matches!(
            render_icon(i64::from(u32::MAX) + 1),
            Err(IconError::InvalidArgument { .. })
        ));
        assert!(matches!(
            render_icon(i64::from(u32::MAX)),
            Err(IconError::InvalidArgument { .. })
        ));
    }

    #[test]
    fn content_bounds_is_panel() {
        let icon = render_icon(48).unwrap();
        assert_eq!(icon.content_bounds, BookGeometry::new(48).panel());
    }

    #[test]
    fn render_all_validates_first() {
        let renderer = IconRenderer::default();
        assert!(renderer.render_all(&[16, 0, 48]).is_err());

        let set = renderer.render_all(&[16, 48, 128]).unwrap();
        assert_eq!(set.len(), 3);
        assert!(set.find_by_size(128).is_some());
    }

    #[test]
    fn renderer_keeps_style() {
        let renderer = IconRenderer::new(IconStyle::opaque());
        assert_eq!(renderer.style().color_mode, ColorMode::Opaque);
    }
}
