//! Colors and style presets.
//!
//! The icon is always drawn with the same palette; an [`IconStyle`] only
//! selects the canvas mode and the tint of the rounded panel. Two presets
//! cover the supported looks:
//!
//! - [`IconStyle::translucent`]: transparent canvas, white panel at alpha 240
//! - [`IconStyle::opaque`]: white canvas, opaque light gray panel, RGB output
//!
//! A [`StyleProfile`] is the JSON-friendly form of a style:
//!
//! ```
//! use book_icon::{IconStyle, StyleProfile};
//!
//! let profile = StyleProfile::from(&IconStyle::opaque());
//! let json = profile.to_json().unwrap();
//! assert!(json.contains("\"#f5f5fa\""));
//!
//! let style = IconStyle::try_from(StyleProfile::from_json(&json).unwrap()).unwrap();
//! assert_eq!(style, IconStyle::opaque());
//! ```

use palette::{Srgb, Srgba};
use serde::{Deserialize, Serialize};

use crate::error::IconError;

// ============================================================================
// Palette
// ============================================================================

/// Left edge of the background gradient, also the left page color.
pub const GRADIENT_START: Srgb<u8> = Srgb::new(102, 126, 234);

/// Right edge of the background gradient, also the right page color.
pub const GRADIENT_END: Srgb<u8> = Srgb::new(118, 75, 162);

/// Color of the spine between the two pages.
pub const DIVIDER: Srgb<u8> = Srgb::new(85, 85, 85);

/// Panel fill of the translucent preset (drawn at [`TRANSLUCENT_PANEL_ALPHA`]).
pub const TRANSLUCENT_PANEL: Srgb<u8> = Srgb::new(255, 255, 255);

pub const TRANSLUCENT_PANEL_ALPHA: u8 = 240;

/// Panel fill of the opaque preset.
pub const OPAQUE_PANEL: Srgb<u8> = Srgb::new(245, 245, 250);

/// Linearly interpolates between two colors in 8-bit sRGB space.
///
/// Each channel is `round(start + (end - start) * t)`.
pub fn lerp(start: Srgb<u8>, end: Srgb<u8>, t: f32) -> Srgb<u8> {
    let channel = |a: u8, b: u8| -> u8 {
        let value = a as f32 + (b as f32 - a as f32) * t;
        value.round().clamp(0.0, 255.0) as u8
    };
    Srgb::new(
        channel(start.red, end.red),
        channel(start.green, end.green),
        channel(start.blue, end.blue),
    )
}

/// Formats a color as `#rrggbb`.
pub fn to_hex(color: Srgb<u8>) -> String {
    format!("#{:02x}{:02x}{:02x}", color.red, color.green, color.blue)
}

// ============================================================================
// IconStyle
// ============================================================================

/// How the canvas starts out and how the result is encoded.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ColorMode {
    /// Transparent canvas, RGBA output.
    #[default]
    Transparent,
    /// White canvas, RGB output.
    Opaque,
}

impl ColorMode {
    /// The color the canvas is cleared to before drawing.
    pub fn canvas_fill(self) -> Srgba<u8> {
        match self {
            Self::Transparent => Srgba::new(0, 0, 0, 0),
            Self::Opaque => Srgba::new(255, 255, 255, 255),
        }
    }
}

/// Rendering style for the icon.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct IconStyle {
    pub color_mode: ColorMode,

    /// Fill of the rounded panel behind the book, composited over the gradient.
    pub background_fill: Srgba<u8>,
}

impl IconStyle {
    /// Transparent canvas with a slightly see-through white panel.
    pub fn translucent() -> Self {
        Self {
            color_mode: ColorMode::Transparent,
            background_fill: Srgba::new(
                TRANSLUCENT_PANEL.red,
                TRANSLUCENT_PANEL.green,
                TRANSLUCENT_PANEL.blue,
                TRANSLUCENT_PANEL_ALPHA,
            ),
        }
    }

    /// White canvas with an opaque light gray panel.
    pub fn opaque() -> Self {
        Self {
            color_mode: ColorMode::Opaque,
            background_fill: Srgba::new(OPAQUE_PANEL.red, OPAQUE_PANEL.green, OPAQUE_PANEL.blue, 255),
        }
    }
}

impl Default for IconStyle {
    fn default() -> Self {
        Self::translucent()
    }
}

// ============================================================================
// StyleProfile
// ============================================================================

/// Serializable form of an [`IconStyle`].
///
/// # JSON Format
///
/// ```json
/// {
///   "colorMode": "transparent",
///   "backgroundFill": "#ffffff",
///   "backgroundAlpha": 240
/// }
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StyleProfile {
    #[serde(default)]
    pub color_mode: ColorMode,

    /// Panel color as `#rrggbb` (or `#rgb`).
    pub background_fill: String,

    #[serde(default = "default_alpha")]
    pub background_alpha: u8,
}

fn default_alpha() -> u8 {
    255
}

impl StyleProfile {
    /// Serializes the profile to a JSON string.
    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string(self)
    }

    /// Serializes the profile to a pretty-printed JSON string.
    pub fn to_json_pretty(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }

    /// Deserializes a profile from a JSON string.
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }
}

impl From<&IconStyle> for StyleProfile {
    fn from(style: &IconStyle) -> Self {
        Self {
            color_mode: style.color_mode,
            background_fill: to_hex(style.background_fill.color),
            background_alpha: style.background_fill.alpha,
        }
    }
}

impl TryFrom<StyleProfile> for IconStyle {
    type Error = IconError;

    fn try_from(profile: StyleProfile) -> Result<Self, Self::Error> {
        let fill: Srgb<u8> = profile.background_fill.parse().map_err(|e| {
            IconError::InvalidStyle(format!(
                "background fill {:?} is not a hex color: {}",
                profile.background_fill, e
            ))
        })?;

        Ok(Self {
            color_mode: profile.color_mode,
            background_fill: Srgba::new(fill.red, fill.green, fill.blue, profile.background_alpha),
        })
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lerp_endpoints() {
        assert_eq!(lerp(GRADIENT_START, GRADIENT_END, 0.0), GRADIENT_START);
        assert_eq!(lerp(GRADIENT_START, GRADIENT_END, 1.0), GRADIENT_END);
    }

    #[test]
    fn lerp_rounds_to_nearest() {
        // 102 + 16 * 0.5 = 110, 126 - 51 * 0.5 = 100.5, 234 - 72 * 0.5 = 198
        let mid = lerp(GRADIENT_START, GRADIENT_END, 0.5);
        assert_eq!((mid.red, mid.green, mid.blue), (110, 101, 198));
    }

    #[test]
    fn presets_differ_in_panel() {
        let translucent = IconStyle::translucent();
        let opaque = IconStyle::opaque();

        assert_eq!(translucent.color_mode, ColorMode::Transparent);
        assert_eq!(translucent.background_fill.alpha, 240);
        assert_eq!(opaque.color_mode, ColorMode::Opaque);
        assert_eq!(opaque.background_fill.color, OPAQUE_PANEL);
        assert_eq!(opaque.background_fill.alpha, 255);
        assert_eq!(IconStyle::default(), translucent);
    }

    #[test]
    fn canvas_fill_per_mode() {
        assert_eq!(ColorMode::Transparent.canvas_fill().alpha, 0);
        assert_eq!(ColorMode::Opaque.canvas_fill(), Srgba::new(255, 255, 255, 255));
    }

    #[test]
    fn profile_json_format() {
        let json = StyleProfile::from(&IconStyle::translucent())
            .to_json_pretty()
            .unwrap();

        assert!(json.contains("\"colorMode\": \"transparent\""));
        assert!(json.contains("\"backgroundFill\": \"#ffffff\""));
        assert!(json.contains("\"backgroundAlpha\": 240"));
    }

    #[test]
    fn profile_defaults_mode_and_alpha() {
        let profile = StyleProfile::from_json(r##"{"backgroundFill":"#abc"}"##).unwrap();
        let style = IconStyle::try_from(profile).unwrap();

        assert_eq!(style.color_mode, ColorMode::Transparent);
        assert_eq!(style.background_fill, Srgba::new(0xaa, 0xbb, 0xcc, 255));
    }

    #[test]
    fn profile_rejects_bad_hex() {
        let profile = StyleProfile {
            color_mode: ColorMode::Opaque,
            background_fill: "not-a-color".into(),
            background_alpha: 255,
        };
        assert!(matches!(
            IconStyle::try_from(profile),
            Err(IconError::InvalidStyle(_))
        ));
    }

    #[test]
    fn profile_rejects_unknown_mode() {
        let json = r##"{"colorMode":"sepia","backgroundFill":"#ffffff"}"##;
        assert!(StyleProfile::from_json(json).is_err());
    }
}
