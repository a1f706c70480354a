//! PNG encoding and batch output.

use std::fs::{self, File};
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};

use image::codecs::png::PngEncoder;
use image::{DynamicImage, ExtendedColorType, ImageEncoder};

use crate::error::{IconError, Result};
use crate::icon::IconImage;
use crate::renderer::IconRenderer;
use crate::style::{ColorMode, IconStyle};

/// Sizes written by a default batch run.
pub const DEFAULT_SIZES: [i64; 3] = [16, 48, 128];

/// Directory a default batch run writes into.
pub const DEFAULT_OUTPUT_DIR: &str = "icons";

// ============================================================================
// BatchConfig
// ============================================================================

/// What a batch run renders and where it writes.
#[derive(Debug, Clone, PartialEq)]
pub struct BatchConfig {
    pub output_dir: PathBuf,
    pub sizes: Vec<i64>,
    pub style: IconStyle,
}

impl Default for BatchConfig {
    fn default() -> Self {
        Self {
            output_dir: PathBuf::from(DEFAULT_OUTPUT_DIR),
            sizes: DEFAULT_SIZES.to_vec(),
            style: IconStyle::default(),
        }
    }
}

impl BatchConfig {
    /// Same sizes and style, different output directory.
    pub fn with_output_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.output_dir = dir.into();
        self
    }

    pub fn with_style(mut self, style: IconStyle) -> Self {
        self.style = style;
        self
    }

    pub fn with_sizes(mut self, sizes: impl Into<Vec<i64>>) -> Self {
        self.sizes = sizes.into();
        self
    }
}

/// A file produced by [`write_icon`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WrittenIcon {
    pub path: PathBuf,
    pub size: u32,
    /// Encoded PNG length in bytes.
    pub bytes: usize,
}

impl WrittenIcon {
    /// File name component of [`path`](Self::path).
    pub fn file_name(&self) -> String {
        self.path
            .file_name()
            .map(|name| name.to_string_lossy().into_owned())
            .unwrap_or_default()
    }
}

// ============================================================================
// Encoding
// ============================================================================

/// Encodes an icon as PNG.
///
/// `Transparent` mode keeps the alpha channel; `Opaque` mode drops it and
/// writes an RGB image.
pub fn encode_png(icon: &IconImage, mode: ColorMode) -> Result<Vec<u8>> {
    let (width, height) = (icon.data.width(), icon.data.height());
    let mut buf = Vec::new();
    let encoder = PngEncoder::new(&mut buf);

    let result = match mode {
        ColorMode::Transparent => {
            encoder.write_image(icon.data.as_raw(), width, height, ExtendedColorType::Rgba8)
        }
        ColorMode::Opaque => {
            let rgb = DynamicImage::ImageRgba8(icon.data.clone()).into_rgb8();
            encoder.write_image(rgb.as_raw(), width, height, ExtendedColorType::Rgb8)
        }
    };

    result.map_err(|source| IconError::EncodingFailure {
        size: width,
        source,
    })?;
    Ok(buf)
}

/// Encodes `icon` and writes it to `dir/icon{size}.png`, replacing any
/// existing file.
///
/// Encoding happens before the file is opened, so an encoder failure leaves
/// the directory untouched.
pub fn write_icon(dir: &Path, icon: &IconImage, mode: ColorMode) -> Result<WrittenIcon> {
    let png = encode_png(icon, mode)?;
    let path = dir.join(icon.file_name());

    let file = File::create(&path).map_err(|e| IconError::directory(&path, e))?;
    let mut writer = BufWriter::new(file);
    writer
        .write_all(&png)
        .and_then(|()| writer.flush())
        .map_err(|e| IconError::directory(&path, e))?;

    log::debug!("wrote {} ({} bytes)", path.display(), png.len());
    Ok(WrittenIcon {
        path,
        size: icon.size(),
        bytes: png.len(),
    })
}

// ============================================================================
// Batch
// ============================================================================

/// Renders and writes every size in `config`, in order.
///
/// Every size is rendered before the directory is created or any file is
/// written, so an invalid size leaves the file system untouched. Writing
/// stops at the first failure; files already written stay in place.
pub fn generate_icons(config: &BatchConfig) -> Result<Vec<WrittenIcon>> {
    generate_icons_with(config, |_| {})
}

/// Like [`generate_icons`], calling `on_written` as soon as each file lands.
pub fn generate_icons_with<F>(config: &BatchConfig, mut on_written: F) -> Result<Vec<WrittenIcon>>
where
    F: FnMut(&WrittenIcon),
{
    let icons = IconRenderer::new(config.style).render_all(&config.sizes)?;

    fs::create_dir_all(&config.output_dir)
        .map_err(|e| IconError::directory(&config.output_dir, e))?;

    let mut written = Vec::with_capacity(icons.len());
    for icon in &icons {
        let file = write_icon(&config.output_dir, icon, config.style.color_mode)?;
        on_written(&file);
        written.push(file);
    }

    log::info!(
        "generated {} icons in {}",
        written.len(),
        config.output_dir.display()
    );
    Ok(written)
}
