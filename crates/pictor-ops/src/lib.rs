//! # pictor-ops
//!
//! Per-pixel colorimetric transforms for 8-bit raster images.
//!
//! Every operation reads a source [`pictor_core::Image`] and returns a brand
//! new image; inputs are never mutated. All transforms are pure, synchronous,
//! and O(width x height), which makes them trivially safe to run concurrently
//! on independent (or even the same) input images.
//!
//! # Modules
//!
//! - [`adjust`] - Brightness and contrast adjustment
//! - [`palette`] - Grayscale conversion and black/white thresholding
//! - [`crop`] - Rectangular region extraction
//!
//! # Example
//!
//! ```rust
//! use pictor_core::{Rect, RgbImage};
//! use pictor_ops::{adjust, crop, palette};
//!
//! let img = RgbImage::filled(64, 64, [100, 150, 200]);
//!
//! let brighter = adjust::brightness_and_contrast(&img, 40, 10);
//! let gray = palette::to_grayscale(&brighter);
//! let thumb = crop::crop(&gray, Some(Rect::new(0, 0, 32, 32)))?;
//! assert_eq!(thumb.dimensions(), (32, 32));
//! # Ok::<(), pictor_ops::OpsError>(())
//! ```

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]

mod apply;
mod error;

pub mod adjust;
pub mod crop;
pub mod palette;

pub use adjust::{brightness_and_contrast, contrast, BrightnessContrast};
pub use crop::crop;
pub use error::{OpsError, OpsResult};
pub use palette::{reduce, to_black_white, to_grayscale, ColorPalette, GrayWeights};
