//! # logoqr
//!
//! A Rust library for generating QR codes with a rounded logo overlaid
//! at the center.
//!
//! `logoqr` renders custom-colored QR symbols and composes a logo on top
//! of them through a four-stage pipeline: rasterize the symbol at error
//! correction level H, scale the logo to fit a fraction of the code,
//! clip its corners to an anti-aliased rounded rectangle, and
//! alpha-composite it at the center. Symbol encoding is delegated to the
//! [`qrcode`] crate; every image stage is a pure function over owned
//! RGBA buffers from the [`image`] crate.
//!
//! ## Features
//!
//! - Custom foreground/background symbol colors.
//! - Aspect-preserving logo scaling with smooth interpolation.
//! - Anti-aliased rounded-corner logo clipping.
//! - Centered alpha-over compositing.
//! - Typed errors per stage; no silent `None` on failure.
//! - Pluggable storage for saving composed codes as PNG.
//!
//! ## Installation
//!
//! Add to your `Cargo.toml`:
//!
//! ```toml
//! [dependencies]
//! logoqr = "0.1" # Replace with the latest version
//! ```
//!
//! ## Example
//!
//! Build a logo QR code and save it:
//!
//! ```no_run
//! use image::{Rgba, RgbaImage};
//! use logoqr::helper::build_and_save;
//! use logoqr::storage::DirStorage;
//!
//! fn main() {
//!     let logo = RgbaImage::from_pixel(64, 64, Rgba([30, 30, 200, 255]));
//!     let storage = DirStorage::new("generated");
//!     let path = build_and_save("Hello, Custom QR!", &logo, Some("hello"), &storage)
//!         .expect("failed to build or save the QR code");
//!     println!("saved to {}", path.display());
//! }
//! ```
//!
//! Build an in-memory image only:
//!
//! ```rust
//! use image::{Rgba, RgbaImage};
//! use logoqr::helper::build_logo_qr;
//!
//! fn main() {
//!     let logo = RgbaImage::from_pixel(64, 64, Rgba([30, 30, 200, 255]));
//!     let img = build_logo_qr("Hello, World!", &logo, None, None, None)
//!         .expect("failed to build the QR code");
//!     assert_eq!(img.dimensions(), (512, 512));
//! }
//! ```
//!
//! ## Modules
//!
//! - [`raster`]: symbol rasterization with custom colors.
//! - [`compose`]: resize, rounded-corner clip, and composite primitives.
//! - [`helper`]: the end-to-end pipeline and save helpers.
//! - [`storage`]: the storage capability and a filesystem backend.
//! - [`error`]: the failure taxonomy.

pub mod compose;
pub mod error;
pub mod helper;
pub mod raster;
pub mod storage;

pub use error::{EncodingError, InvalidImageError, PipelineError, StorageError};
pub use helper::{build_and_save, build_logo_qr};
pub use raster::ColorPair;
