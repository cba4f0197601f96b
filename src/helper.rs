use crate::compose::{overlay_centered, resize_to_fit, round_corners};
use crate::error::{PipelineError, StorageError};
use crate::raster::{rasterize, ColorPair};
use crate::storage::Storage;

use image::codecs::png::PngEncoder;
use image::{ExtendedColorType, ImageEncoder, RgbaImage};
use qrcode::EcLevel;
use std::time::{SystemTime, UNIX_EPOCH};

/// Default output side length in pixels.
pub const DEFAULT_SIZE: u32 = 512;

/// Default fraction of the QR side the logo may occupy.
pub const DEFAULT_LOGO_RATIO: f32 = 0.30;

/// Divisor applied to the scaled logo width to pick the corner radius.
/// Integer division, so the radius truncates.
const CORNER_RADIUS_DIVISOR: u32 = 15;

/// Builds a QR code with a rounded logo overlaid at its center.
///
/// The pipeline runs four stages in order: rasterize the symbol at error
/// correction level H (the occluded center needs the extra redundancy),
/// scale the logo to fit within `logo_ratio` of the QR side, round the
/// logo's corners with radius `scaled_width / 15`, then alpha-composite
/// it centered over the symbol. The first failing stage aborts the whole
/// pipeline; no partial image is ever returned.
///
/// # Arguments
///
/// * `text` - The content to encode into the QR Code.
/// * `logo` - A decoded logo image; decoding is the caller's concern.
/// * `size` - Optional. Output side length in pixels. Defaults to 512.
/// * `colors` - Optional. Foreground/background pair. Defaults to black on white.
/// * `logo_ratio` - Optional. Fraction of the QR side the logo may span,
///   clamped to (0, 1]. Defaults to 0.30.
///
/// # Errors
///
/// Returns a [`PipelineError`] naming the failing stage: encoding when
/// the text exceeds symbol capacity, logo resize when the logo has zero
/// area, composite when the scaled logo somehow exceeds the base.
///
/// # Example
///
/// ```rust
/// use image::{Rgba, RgbaImage};
/// use logoqr::helper::build_logo_qr;
///
/// let logo = RgbaImage::from_pixel(64, 64, Rgba([30, 30, 200, 255]));
/// let qr = build_logo_qr("Hello, Custom QR!", &logo, None, None, None).unwrap();
/// assert_eq!(qr.dimensions(), (512, 512));
/// ```
pub fn build_logo_qr(
    text: &str,
    logo: &RgbaImage,
    size: Option<u32>,
    colors: Option<ColorPair>,
    logo_ratio: Option<f32>,
) -> Result<RgbaImage, PipelineError> {
    let size = size.unwrap_or(DEFAULT_SIZE);
    let colors = colors.unwrap_or_default();
    let ratio = logo_ratio
        .unwrap_or(DEFAULT_LOGO_RATIO)
        .clamp(f32::EPSILON, 1.0);

    let qr = rasterize(text, size, colors, EcLevel::H)?;

    // The raster may be larger than requested when the matrix does not
    // fit; size the logo against what was actually produced.
    let max_logo = ((qr.width() as f32 * ratio) as u32).max(1);
    let scaled = resize_to_fit(logo, max_logo).map_err(PipelineError::LogoResize)?;
    let rounded = round_corners(&scaled, scaled.width() / CORNER_RADIUS_DIVISOR);

    overlay_centered(&qr, &rounded).map_err(PipelineError::Composite)
}

/// Encodes `image` as PNG bytes.
pub fn encode_png(image: &RgbaImage) -> Result<Vec<u8>, image::ImageError> {
    let mut bytes = Vec::new();
    let encoder = PngEncoder::new(&mut bytes);
    encoder.write_image(
        image.as_raw(),
        image.width(),
        image.height(),
        ExtendedColorType::Rgba8,
    )?;
    Ok(bytes)
}

/// Builds a logo QR code and writes it as a PNG through the given storage.
///
/// The file name defaults to a millisecond timestamp when not provided.
/// Returns the location reported by the storage backend.
///
/// # Example
///
/// ```no_run
/// use image::{Rgba, RgbaImage};
/// use logoqr::helper::build_and_save;
/// use logoqr::storage::DirStorage;
///
/// let logo = RgbaImage::from_pixel(64, 64, Rgba([30, 30, 200, 255]));
/// let storage = DirStorage::new("generated");
/// let path = build_and_save("Hello, Custom QR!", &logo, Some("hello"), &storage).unwrap();
/// println!("saved to {}", path.display());
/// ```
pub fn build_and_save<S: Storage>(
    text: &str,
    logo: &RgbaImage,
    filename: Option<&str>,
    storage: &S,
) -> Result<S::Location, StorageError> {
    let image = build_logo_qr(text, logo, None, None, None)?;
    save_png(&image, filename, storage)
}

/// Writes an already-built image as a PNG through the given storage.
pub fn save_png<S: Storage>(
    image: &RgbaImage,
    filename: Option<&str>,
    storage: &S,
) -> Result<S::Location, StorageError> {
    let filename = match filename {
        Some(name) => name.to_string(),
        None => {
            let since_the_epoch = SystemTime::now()
                .duration_since(UNIX_EPOCH)
                .unwrap_or_default();
            format!("{}", since_the_epoch.as_millis())
        }
    };

    let bytes = encode_png(image)?;
    let handle = storage.allocate(&filename, "image/png")?;
    let location = storage.write(handle, &bytes)?;
    Ok(location)
}
