//! Failure taxonomy for the composition pipeline.
//!
//! Every stage returns an explicit `Result`; the orchestrator in
//! [`crate::helper`] stops at the first failure and wraps it in a
//! [`PipelineError`] variant naming the stage that failed. No stage ever
//! signals failure with a bare `None`.

use thiserror::Error;

/// The symbol encoder rejected the input, typically because the text is
/// too long for the requested error correction level.
#[derive(Debug, Error)]
#[error("QR symbol encoding failed: {0}")]
pub struct EncodingError(#[from] pub qrcode::types::QrError);

/// Malformed or degenerate image input.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum InvalidImageError {
    /// A source image has no pixels.
    #[error("image has zero area ({width}x{height})")]
    ZeroArea { width: u32, height: u32 },

    /// A resize was asked to fit a zero-sized bounding box.
    #[error("resize target dimension is zero")]
    ZeroTarget,

    /// The overlay does not fit inside the base image.
    #[error(
        "overlay {overlay_width}x{overlay_height} exceeds base {base_width}x{base_height}"
    )]
    OverlayExceedsBase {
        base_width: u32,
        base_height: u32,
        overlay_width: u32,
        overlay_height: u32,
    },
}

/// A pipeline stage failed. The variant identifies the stage so callers
/// can report which step went wrong without parsing messages.
#[derive(Debug, Error)]
pub enum PipelineError {
    /// The rasterize stage could not encode the text.
    #[error("rasterize stage: {0}")]
    Encoding(#[from] EncodingError),

    /// The logo resize stage received a degenerate image.
    #[error("logo resize stage: {0}")]
    LogoResize(#[source] InvalidImageError),

    /// The composite stage received an overlay that does not fit.
    #[error("composite stage: {0}")]
    Composite(#[source] InvalidImageError),
}

/// A failure while persisting a composed image: the pipeline itself,
/// PNG encoding, or the storage backend's I/O.
#[derive(Debug, Error)]
pub enum StorageError {
    #[error(transparent)]
    Pipeline(#[from] PipelineError),

    #[error("PNG encoding failed: {0}")]
    Png(#[from] image::ImageError),

    #[error("storage I/O failed: {0}")]
    Io(#[from] std::io::Error),
}
