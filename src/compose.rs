//! Image composition primitives.
//!
//! Three pure operations over owned RGBA buffers: an aspect-preserving
//! bounding-box resize, a rounded-corner clip with an anti-aliased edge,
//! and a centered alpha-over composite. Each returns a new image; inputs
//! are never mutated.

use image::imageops::{self, FilterType};
use image::RgbaImage;

use crate::error::InvalidImageError;

/// Scales `image` to fit within a `max_dimension` square, preserving its
/// aspect ratio.
///
/// The longer side becomes `max_dimension` and the shorter side is scaled
/// proportionally, rounded to the nearest pixel (at least 1). Scaling is
/// bilinear, not nearest-neighbor, to keep logo edges smooth.
///
/// # Errors
///
/// Returns [`InvalidImageError::ZeroArea`] when the source has no pixels
/// and [`InvalidImageError::ZeroTarget`] when `max_dimension` is zero.
pub fn resize_to_fit(
    image: &RgbaImage,
    max_dimension: u32,
) -> Result<RgbaImage, InvalidImageError> {
    let (width, height) = image.dimensions();
    if width == 0 || height == 0 {
        return Err(InvalidImageError::ZeroArea { width, height });
    }
    if max_dimension == 0 {
        return Err(InvalidImageError::ZeroTarget);
    }

    let ratio = width as f64 / height as f64;
    let (new_width, new_height) = if ratio > 1.0 {
        // Wider than tall.
        let h = (max_dimension as f64 / ratio).round() as u32;
        (max_dimension, h.max(1))
    } else {
        // Taller than wide, or square.
        let w = (max_dimension as f64 * ratio).round() as u32;
        (w.max(1), max_dimension)
    };

    Ok(imageops::resize(
        image,
        new_width,
        new_height,
        FilterType::Triangle,
    ))
}

/// Returns a copy of `image` clipped to a rounded rectangle spanning the
/// full image bounds.
///
/// Pixels outside the mask become fully transparent; pixels inside keep
/// their source value. The boundary is anti-aliased: edge pixels scale
/// their alpha by the mask coverage at the pixel center. `radius` clamps
/// to `[0, min(width, height) / 2]`; a radius of 0 returns the input
/// unchanged.
pub fn round_corners(image: &RgbaImage, radius: u32) -> RgbaImage {
    let (width, height) = image.dimensions();
    let radius = radius.min(width.min(height) / 2);
    if radius == 0 || width == 0 || height == 0 {
        return image.clone();
    }

    let r = radius as f32;
    let half_w = width as f32 / 2.0;
    let half_h = height as f32 / 2.0;

    let mut out = image.clone();
    for (x, y, pixel) in out.enumerate_pixels_mut() {
        // Signed distance from the pixel center to the rounded-rect edge:
        // negative inside, positive outside.
        let dx = (x as f32 + 0.5 - half_w).abs() - (half_w - r);
        let dy = (y as f32 + 0.5 - half_h).abs() - (half_h - r);
        let outside = (dx.max(0.0).powi(2) + dy.max(0.0).powi(2)).sqrt();
        let inside = dx.max(dy).min(0.0);
        let dist = outside + inside - r;

        // Coverage ramps over one pixel centered on the boundary.
        let coverage = (0.5 - dist).clamp(0.0, 1.0);
        if coverage < 1.0 {
            pixel.0[3] = (pixel.0[3] as f32 * coverage).round() as u8;
        }
    }
    out
}

/// Alpha-composites `overlay` centered over `base`, producing a new image
/// with `base`'s dimensions.
///
/// The offset is `((base_w - overlay_w) / 2, (base_h - overlay_h) / 2)`
/// with integer (floor) division, so an odd size difference leans one
/// pixel toward the top-left. Blending is the standard "over" operation:
/// transparent overlay regions preserve the base, opaque regions replace
/// it, and partial alpha blends linearly.
///
/// # Errors
///
/// Returns [`InvalidImageError::OverlayExceedsBase`] when the overlay is
/// wider or taller than the base.
pub fn overlay_centered(
    base: &RgbaImage,
    overlay: &RgbaImage,
) -> Result<RgbaImage, InvalidImageError> {
    let (base_w, base_h) = base.dimensions();
    let (over_w, over_h) = overlay.dimensions();
    if over_w > base_w || over_h > base_h {
        return Err(InvalidImageError::OverlayExceedsBase {
            base_width: base_w,
            base_height: base_h,
            overlay_width: over_w,
            overlay_height: over_h,
        });
    }

    let left = (base_w - over_w) / 2;
    let top = (base_h - over_h) / 2;

    let mut out = base.clone();
    for (ox, oy, src) in overlay.enumerate_pixels() {
        let sa = src.0[3] as f32 / 255.0;
        if sa <= 0.0 {
            continue;
        }
        let dst = out.get_pixel_mut(left + ox, top + oy);
        let ba = dst.0[3] as f32 / 255.0;
        let out_a = sa + ba * (1.0 - sa);
        for c in 0..3 {
            let blended = src.0[c] as f32 * sa + dst.0[c] as f32 * ba * (1.0 - sa);
            dst.0[c] = (blended / out_a).round() as u8;
        }
        // An opaque base must stay exactly opaque, so the alpha is
        // computed directly instead of accumulating rounding error.
        dst.0[3] = (out_a * 255.0).round() as u8;
    }
    Ok(out)
}
