//! Color helpers and the fixed icon palette.

use std::str::FromStr;

use image::Rgba;
use palette::Srgb;

use crate::error::{Error, Result};

/// Graphite stroke color shared by every pictogram.
pub const ICON_INK: &str = "#6A707A";

/// Fill of the circular backdrop.
pub const PLATE_FILL: &str = "#F3F4F7";

/// Outline of the circular backdrop.
pub const PLATE_OUTLINE: &str = "#E0E4EA";

/// Parses a `#RRGGBB` hex string and attaches an alpha channel.
///
/// The leading `#` is optional. Shorthand `#RGB` is accepted as well.
pub fn rgba(hex: &str, alpha: u8) -> Result<Rgba<u8>> {
    let rgb = Srgb::<u8>::from_str(hex).map_err(|e| Error::InvalidColor {
        value: hex.to_string(),
        reason: e.to_string(),
    })?;
    Ok(Rgba([rgb.red, rgb.green, rgb.blue, alpha]))
}

/// The three colors used to paint an icon.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Palette {
    /// Stroke color of the line art.
    pub ink: Rgba<u8>,
    /// Fill of the plate.
    pub plate_fill: Rgba<u8>,
    /// Outline of the plate.
    pub plate_outline: Rgba<u8>,
}

impl Palette {
    /// Resolves the built-in icon colors, all fully opaque.
    pub fn standard() -> Result<Self> {
        Ok(Self {
            ink: rgba(ICON_INK, 255)?,
            plate_fill: rgba(PLATE_FILL, 255)?,
            plate_outline: rgba(PLATE_OUTLINE, 255)?,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_hex_with_alpha() {
        assert_eq!(rgba("#6A707A", 255).unwrap(), Rgba([0x6a, 0x70, 0x7a, 255]));
        assert_eq!(rgba("F3F4F7", 128).unwrap(), Rgba([0xf3, 0xf4, 0xf7, 128]));
    }

    #[test]
    fn rejects_garbage() {
        let err = rgba("#zz0000", 255).unwrap_err();
        assert!(matches!(err, Error::InvalidColor { .. }));
        assert!(err.to_string().contains("#zz0000"));
    }

    #[test]
    fn standard_palette_resolves() {
        let palette = Palette::standard().unwrap();
        assert_eq!(palette.ink, Rgba([106, 112, 122, 255]));
        assert_eq!(palette.plate_fill, Rgba([243, 244, 247, 255]));
        assert_eq!(palette.plate_outline, Rgba([224, 228, 234, 255]));
    }
}
