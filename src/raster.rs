//! Matrix rasterization.
//!
//! This module turns text into a colored square raster: the external
//! symbol encoder produces the module matrix, and [`rasterize`] maps it to
//! foreground/background pixels at the requested size.

use image::{Rgba, RgbaImage};
use qrcode::{Color, EcLevel, QrCode};

use crate::error::EncodingError;

/// Quiet zone width in modules, per the QR standard.
const QUIET_ZONE: u32 = 4;

/// Foreground/background colors for a rendered symbol.
///
/// Defaults to opaque black on opaque white.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ColorPair {
    pub foreground: Rgba<u8>,
    pub background: Rgba<u8>,
}

impl Default for ColorPair {
    fn default() -> Self {
        ColorPair {
            foreground: Rgba([0, 0, 0, 255]),
            background: Rgba([255, 255, 255, 255]),
        }
    }
}

/// Encodes `text` as a QR symbol and renders it as a square RGBA image.
///
/// The output side is `size` pixels, unless the module matrix plus its
/// quiet zone does not fit, in which case the output grows to one pixel
/// per module. Modules are drawn as integer-scaled blocks with the
/// leftover padding split evenly, so every pixel is exactly
/// `colors.foreground` or `colors.background` and the image is fully
/// opaque.
///
/// # Errors
///
/// Returns an [`EncodingError`] when the text cannot be encoded at the
/// given error correction level, e.g. it exceeds the symbol capacity.
///
/// # Example
///
/// ```rust
/// use logoqr::raster::{rasterize, ColorPair};
/// use qrcode::EcLevel;
///
/// let img = rasterize("Hello, World!", 512, ColorPair::default(), EcLevel::H).unwrap();
/// assert_eq!(img.dimensions(), (512, 512));
/// ```
pub fn rasterize(
    text: &str,
    size: u32,
    colors: ColorPair,
    ec_level: EcLevel,
) -> Result<RgbaImage, EncodingError> {
    let code = QrCode::with_error_correction_level(text, ec_level)?;
    let modules = code.width() as u32;
    let total = modules + 2 * QUIET_ZONE;

    let out_size = size.max(total);
    let scale = out_size / total;
    // Padding covers the quiet zone plus the rounding leftover, the same
    // on every side since the raster is square.
    let pad = (out_size - modules * scale) / 2;

    let mut img = RgbaImage::from_pixel(out_size, out_size, colors.background);
    for my in 0..modules {
        for mx in 0..modules {
            if code[(mx as usize, my as usize)] != Color::Dark {
                continue;
            }
            let x0 = pad + mx * scale;
            let y0 = pad + my * scale;
            for y in y0..y0 + scale {
                for x in x0..x0 + scale {
                    img.put_pixel(x, y, colors.foreground);
                }
            }
        }
    }
    Ok(img)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rasterize_fills_requested_size_with_two_colors() {
        let colors = ColorPair::default();
        let img = rasterize("Hello, Custom QR!", 512, colors, EcLevel::H).unwrap();
        assert_eq!(img.dimensions(), (512, 512));
        for pixel in img.pixels() {
            assert!(
                *pixel == colors.foreground || *pixel == colors.background,
                "unexpected pixel value {:?}",
                pixel
            );
        }
    }

    #[test]
    fn rasterize_contains_both_colors() {
        let colors = ColorPair {
            foreground: Rgba([0, 0, 128, 255]),
            background: Rgba([255, 240, 220, 255]),
        };
        let img = rasterize("logoqr", 256, colors, EcLevel::H).unwrap();
        assert!(img.pixels().any(|p| *p == colors.foreground));
        assert!(img.pixels().any(|p| *p == colors.background));
    }

    #[test]
    fn rasterize_grows_when_size_too_small_for_matrix() {
        // A version-1 symbol is 21 modules; with the quiet zone the raster
        // can never be smaller than 29x29.
        let img = rasterize("HI", 1, ColorPair::default(), EcLevel::L).unwrap();
        let (w, h) = img.dimensions();
        assert_eq!(w, h);
        assert!(w >= 29);
    }

    #[test]
    fn rasterize_rejects_oversized_text() {
        // Level H at version 40 caps out near 1273 bytes.
        let text = "x".repeat(8000);
        assert!(rasterize(&text, 512, ColorPair::default(), EcLevel::H).is_err());
    }

    #[test]
    fn quiet_zone_is_background() {
        let colors = ColorPair::default();
        let img = rasterize("quiet", 512, colors, EcLevel::H).unwrap();
        // Corner pixels sit in the quiet zone or centering padding.
        let (w, h) = img.dimensions();
        for &(x, y) in &[(0, 0), (w - 1, 0), (0, h - 1), (w - 1, h - 1)] {
            assert_eq!(*img.get_pixel(x, y), colors.background);
        }
    }
}
