//! book-icon: procedural book icon generator
//!
//! Draws a small open-book icon (a purple gradient, a rounded panel, two
//! pages and a spine) at any pixel size and writes it as PNG.
//!
//! # Example
//!
//! ```
//! use book_icon::{render_icon, IconRenderer, IconStyle};
//!
//! // Translucent preset
//! let icon = render_icon(16).unwrap();
//! assert_eq!(icon.data.get_pixel(0, 0).0, [102, 126, 234, 255]);
//!
//! // Opaque preset, encoded as an RGB PNG
//! let renderer = IconRenderer::new(IconStyle::opaque());
//! let icon = renderer.render(48).unwrap();
//! let png = book_icon::encode_png(&icon, renderer.style().color_mode).unwrap();
//! assert!(!png.is_empty());
//! ```
//!
//! # Batch output
//!
//! [`generate_icons`] renders a [`BatchConfig`] into a directory. The
//! default configuration writes `icons/icon16.png`, `icons/icon48.png` and
//! `icons/icon128.png`.

mod error;
mod export;
mod geometry;
mod icon;
mod layer;
mod raster;
mod renderer;
mod style;

pub use error::{IconError, Result};
pub use export::{
    encode_png, generate_icons, generate_icons_with, write_icon, BatchConfig, WrittenIcon,
    DEFAULT_OUTPUT_DIR, DEFAULT_SIZES,
};
pub use geometry::{BookGeometry, PointPx, VerticalLine};
pub use icon::{IconImage, IconSet, RectPx, SizePx};
pub use layer::{
    DividerLayer, GradientLayer, LayerEffect, LayerPipeline, PageLayer, PageSide, PanelLayer,
    RenderContext,
};
pub use raster::Canvas;
pub use renderer::{render_icon, validate_size, IconRenderer};
pub use style::{
    ColorMode, IconStyle, StyleProfile, DIVIDER, GRADIENT_END, GRADIENT_START, OPAQUE_PANEL,
    TRANSLUCENT_PANEL, TRANSLUCENT_PANEL_ALPHA,
};
