//! Palette reduction: grayscale conversion and black/white thresholding.
//!
//! Grayscale computes a weighted luma per pixel and writes it to all three
//! channels. Black/white runs a full grayscale pass first and then thresholds
//! the result, so both public operations share exactly one luma computation
//! instead of duplicating it.
//!
//! # Threshold semantics
//!
//! A pixel turns white when its gray value is at least `255 - threshold`:
//! threshold 255 makes every pixel white, threshold 0 keeps only gray == 255
//! white. The threshold is deliberately not clamped; values outside [0, 255]
//! saturate to an all-white or all-black output, and callers rely on that
//! edge behavior.
//!
//! # Example
//!
//! ```rust
//! use pictor_core::RgbImage;
//! use pictor_ops::palette::{to_grayscale, to_black_white};
//!
//! let red = RgbImage::filled(2, 2, [255, 0, 0]);
//! let gray = to_grayscale(&red);
//! assert_eq!(gray.pixel(0, 0), [76, 76, 76]);
//!
//! let bw = to_black_white(&red, 200);
//! assert_eq!(bw.pixel(0, 0), [255, 255, 255]); // 76 >= 255 - 200
//! ```

use crate::apply::map_rgb;
use pictor_core::Image;
use tracing::trace;

/// Default red weight for the gray value of a color (Rec. 601 luma).
pub const GRAY_WEIGHT_R: f64 = 0.299;

/// Default green weight for the gray value of a color.
pub const GRAY_WEIGHT_G: f64 = 0.587;

/// Default blue weight for the gray value of a color.
pub const GRAY_WEIGHT_B: f64 = 0.114;

/// Channel weights for computing the gray value of a color.
///
/// The defaults are the standard luma weights and sum to 1.0. Custom weights
/// are accepted as-is: it is the caller's responsibility to keep the weighted
/// sum inside [0, 255]. Sums outside that range saturate at the extremes
/// rather than wrap.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GrayWeights {
    /// Red channel weight.
    pub r: f64,
    /// Green channel weight.
    pub g: f64,
    /// Blue channel weight.
    pub b: f64,
}

impl Default for GrayWeights {
    fn default() -> Self {
        Self {
            r: GRAY_WEIGHT_R,
            g: GRAY_WEIGHT_G,
            b: GRAY_WEIGHT_B,
        }
    }
}

impl GrayWeights {
    /// Creates custom gray weights.
    pub const fn new(r: f64, g: f64, b: f64) -> Self {
        Self { r, g, b }
    }

    /// Computes the rounded gray value of an RGB pixel.
    ///
    /// The float-to-byte conversion saturates, so weight sums above 1.0
    /// clip at 255 and negative weights clip at 0.
    #[inline]
    pub fn luma(&self, rgb: [u8; 3]) -> u8 {
        let sum = self.r * rgb[0] as f64 + self.g * rgb[1] as f64 + self.b * rgb[2] as f64;
        sum.round() as u8
    }
}

/// Target palette for [`reduce`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ColorPalette {
    /// Full color, no reduction.
    #[default]
    Color,
    /// Grayscale palette.
    Grayscale,
    /// Black and white palette.
    BlackWhite,
}

/// Converts an image to grayscale using the default luma weights.
pub fn to_grayscale<const N: usize>(image: &Image<N>) -> Image<N> {
    to_grayscale_weighted(image, GrayWeights::default())
}

/// Converts an image to grayscale with custom channel weights.
///
/// Every output pixel holds the same gray value in R, G, and B.
pub fn to_grayscale_weighted<const N: usize>(image: &Image<N>, weights: GrayWeights) -> Image<N> {
    let (width, height) = image.dimensions();
    trace!(width, height, ?weights, "to_grayscale");
    map_rgb(image, |rgb| {
        let gray = weights.luma(rgb);
        [gray, gray, gray]
    })
}

/// Converts an image to black and white using the default luma weights.
pub fn to_black_white<const N: usize>(image: &Image<N>, threshold: i32) -> Image<N> {
    to_black_white_weighted(image, threshold, GrayWeights::default())
}

/// Converts an image to black and white with custom channel weights.
///
/// Runs the grayscale pass first, then maps every gray value at or above
/// `255 - threshold` to pure white and everything below to pure black.
pub fn to_black_white_weighted<const N: usize>(
    image: &Image<N>,
    threshold: i32,
    weights: GrayWeights,
) -> Image<N> {
    let (width, height) = image.dimensions();
    trace!(width, height, threshold, "to_black_white");
    let gray = to_grayscale_weighted(image, weights);
    let cutoff = 255 - threshold;
    map_rgb(&gray, |rgb| {
        // All three channels are equal after the grayscale pass
        let v = if rgb[0] as i32 >= cutoff { 255 } else { 0 };
        [v, v, v]
    })
}

/// Reduces an image to the given palette with default weights.
///
/// `threshold` is only used for [`ColorPalette::BlackWhite`];
/// [`ColorPalette::Color`] returns a copy of the input.
pub fn reduce<const N: usize>(image: &Image<N>, palette: ColorPalette, threshold: i32) -> Image<N> {
    match palette {
        ColorPalette::Color => image.clone(),
        ColorPalette::Grayscale => to_grayscale(image),
        ColorPalette::BlackWhite => to_black_white(image, threshold),
    }
}
