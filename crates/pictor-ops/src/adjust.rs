//! Brightness and contrast adjustment.
//!
//! Both adjustments map every channel of every pixel independently through a
//! two-stage function: an additive brightness shift, then a multiplicative
//! contrast scale around mid-gray. Recentering on 0.5 before scaling makes
//! the contrast pivot symmetric around mid-gray, matching the usual
//! brightness/contrast UI convention.
//!
//! Per channel, in order:
//!
//! 1. `v1 = clamp(channel + brightness, 0, 255)`
//! 2. `u = v1 / 255`
//! 3. `u2 = (u - 0.5) * factor + 0.5` where `factor = ((100 + c) / 100)^2`
//! 4. `v2 = clamp(round(u2 * 255), 0, 255)`
//!
//! The double clamp keeps overflow from compounding across the two stages.
//!
//! # Parameter ranges
//!
//! Brightness is clamped to [-255, 255] and contrast to [-100, 100]. The
//! combined entry point applies the same [-100, 100] contrast clamp as the
//! contrast-only entry point; the wider brightness range does not extend to
//! contrast. This asymmetry is kept for behavior parity with existing
//! consumers.
//!
//! # Example
//!
//! ```rust
//! use pictor_core::RgbImage;
//! use pictor_ops::adjust::{brightness_and_contrast, contrast};
//!
//! let img = RgbImage::filled(2, 1, [100, 100, 100]);
//!
//! // Zero parameters are an identity
//! assert_eq!(brightness_and_contrast(&img, 0, 0), img);
//!
//! // Full positive contrast pushes mid-tones toward the extremes
//! let hard = contrast(&img, 100.0);
//! assert_eq!(hard.pixel(0, 0), [18, 18, 18]);
//! ```

use crate::apply::map_rgb;
use pictor_core::Image;
use tracing::trace;

/// Minimum accepted brightness shift.
pub const BRIGHTNESS_MIN: i32 = -255;

/// Maximum accepted brightness shift.
pub const BRIGHTNESS_MAX: i32 = 255;

/// Minimum accepted contrast value.
pub const CONTRAST_MIN: f64 = -100.0;

/// Maximum accepted contrast value.
pub const CONTRAST_MAX: f64 = 100.0;

/// Parameters for a combined brightness/contrast adjustment.
///
/// Construction clamps both parameters into their accepted ranges, so an
/// instance always holds normalized values and application never fails.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BrightnessContrast {
    /// Additive channel shift in [-255, 255] (0 = no change).
    pub brightness: i32,
    /// Contrast in [-100, 100] (0 = no change).
    pub contrast: f64,
}

impl Default for BrightnessContrast {
    fn default() -> Self {
        Self {
            brightness: 0,
            contrast: 0.0,
        }
    }
}

impl BrightnessContrast {
    /// Creates an adjustment, clamping both parameters into range.
    pub fn new(brightness: i32, contrast: f64) -> Self {
        Self {
            brightness: brightness.clamp(BRIGHTNESS_MIN, BRIGHTNESS_MAX),
            contrast: contrast.clamp(CONTRAST_MIN, CONTRAST_MAX),
        }
    }

    /// Creates an identity adjustment (no change).
    pub fn identity() -> Self {
        Self::default()
    }

    /// Checks if this adjustment is an identity (no-op).
    pub fn is_identity(&self) -> bool {
        self.brightness == 0 && self.contrast == 0.0
    }

    /// Returns the derived contrast factor `((100 + c) / 100)^2`.
    ///
    /// Ranges from 0.0 (contrast -100, everything collapses to mid-gray)
    /// through 1.0 (identity) to 4.0 (contrast 100).
    #[inline]
    pub fn contrast_factor(&self) -> f64 {
        let ratio = (100.0 + self.contrast) / 100.0;
        ratio * ratio
    }

    /// Applies the two-stage mapping to a single channel value.
    #[inline]
    pub fn apply_channel(&self, value: u8) -> u8 {
        let factor = self.contrast_factor();
        let shifted = (value as i32 + self.brightness).clamp(0, 255);
        let unit = shifted as f64 / 255.0;
        let scaled = (unit - 0.5) * factor + 0.5;
        (scaled * 255.0).round().clamp(0.0, 255.0) as u8
    }

    /// Applies the mapping to an RGB pixel, each channel independently.
    #[inline]
    pub fn apply(&self, rgb: [u8; 3]) -> [u8; 3] {
        [
            self.apply_channel(rgb[0]),
            self.apply_channel(rgb[1]),
            self.apply_channel(rgb[2]),
        ]
    }
}

/// Adjusts brightness and contrast at once, returning a new image.
///
/// `brightness` is clamped to [-255, 255] and `contrast` to [-100, 100].
/// Always succeeds; zero parameters return an exact copy.
pub fn brightness_and_contrast<const N: usize>(
    image: &Image<N>,
    brightness: i32,
    contrast: i32,
) -> Image<N> {
    let (width, height) = image.dimensions();
    trace!(width, height, brightness, contrast, "brightness_and_contrast");
    let bc = BrightnessContrast::new(brightness, contrast as f64);
    map_rgb(image, |rgb| bc.apply(rgb))
}

/// Adjusts contrast only, returning a new image.
///
/// `contrast` is clamped to [-100, 100]. Equivalent to
/// [`brightness_and_contrast`] with a zero brightness shift, but accepts a
/// fractional contrast value.
pub fn contrast<const N: usize>(image: &Image<N>, contrast: f64) -> Image<N> {
    let (width, height) = image.dimensions();
    trace!(width, height, contrast, "contrast");
    let bc = BrightnessContrast::new(0, contrast);
    map_rgb(image, |rgb| bc.apply(rgb))
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use pictor_core::{RgbImage, RgbaImage};

    #[test]
    fn test_parameter_clamping() {
        let bc = BrightnessContrast::new(400, 250.0);
        assert_eq!(bc.brightness, 255);
        assert_eq!(bc.contrast, 100.0);

        let bc = BrightnessContrast::new(-400, -250.0);
        assert_eq!(bc.brightness, -255);
        assert_eq!(bc.contrast, -100.0);
    }

    #[test]
    fn test_contrast_factor() {
        assert_relative_eq!(BrightnessContrast::new(0, 0.0).contrast_factor(), 1.0);
        assert_relative_eq!(BrightnessContrast::new(0, 100.0).contrast_factor(), 4.0);
        assert_relative_eq!(BrightnessContrast::new(0, -100.0).contrast_factor(), 0.0);
        assert_relative_eq!(BrightnessContrast::new(0, -50.0).contrast_factor(), 0.25);
    }

    #[test]
    fn test_identity() {
        let bc = BrightnessContrast::identity();
        assert!(bc.is_identity());
        for v in [0u8, 1, 100, 127, 128, 200, 254, 255] {
            assert_eq!(bc.apply_channel(v), v);
        }
    }

    #[test]
    fn test_brightness_only() {
        let bc = BrightnessContrast::new(50, 0.0);
        assert_eq!(bc.apply_channel(100), 150);
        assert_eq!(bc.apply_channel(250), 255); // clamped after the shift

        let bc = BrightnessContrast::new(-50, 0.0);
        assert_eq!(bc.apply_channel(100), 50);
        assert_eq!(bc.apply_channel(20), 0);
    }

    #[test]
    fn test_full_contrast_reference_values() {
        // factor 4: 100 -> round(((100/255 - 0.5) * 4 + 0.5) * 255) = 18
        let bc = BrightnessContrast::new(0, 100.0);
        assert_eq!(bc.apply_channel(100), 18);
        assert_eq!(bc.apply_channel(200), 255); // overshoots, clamped
        assert_eq!(bc.apply_channel(0), 0);
        assert_eq!(bc.apply_channel(255), 255);
    }

    #[test]
    fn test_negative_contrast_collapses_to_midgray() {
        // factor 0: everything maps to round(0.5 * 255) = 128
        let bc = BrightnessContrast::new(0, -100.0);
        for v in [0u8, 50, 128, 200, 255] {
            assert_eq!(bc.apply_channel(v), 128);
        }
    }

    #[test]
    fn test_brightness_and_contrast_image_identity() {
        let img = RgbImage::filled(3, 2, [100, 150, 200]);
        assert_eq!(brightness_and_contrast(&img, 0, 0), img);
        assert_eq!(contrast(&img, 0.0), img);
    }

    #[test]
    fn test_contrast_image_reference_scenario() {
        let mut img: RgbImage = pictor_core::Image::new(2, 1);
        img.set_pixel(0, 0, [100, 100, 100]);
        img.set_pixel(1, 0, [200, 200, 200]);

        let out = contrast(&img, 100.0);
        assert_eq!(out.pixel(0, 0), [18, 18, 18]);
        assert_eq!(out.pixel(1, 0), [255, 255, 255]);
        // source untouched
        assert_eq!(img.pixel(0, 0), [100, 100, 100]);
    }

    #[test]
    fn test_out_of_range_parameters_behave_as_extremes() {
        let img = RgbImage::filled(2, 2, [60, 120, 180]);
        assert_eq!(
            brightness_and_contrast(&img, 1000, 0),
            brightness_and_contrast(&img, 255, 0)
        );
        assert_eq!(contrast(&img, 500.0), contrast(&img, 100.0));
    }

    #[test]
    fn test_alpha_passthrough() {
        let img = RgbaImage::filled(2, 2, [100, 100, 100, 42]);
        let out = brightness_and_contrast(&img, 50, 20);
        assert_eq!(out.pixel(0, 0)[3], 42);
    }

    #[test]
    fn test_channels_are_independent() {
        let img = RgbImage::filled(1, 1, [10, 128, 240]);
        let bc = BrightnessContrast::new(30, 50.0);
        let out = brightness_and_contrast(&img, 30, 50);
        assert_eq!(
            out.pixel(0, 0),
            [
                bc.apply_channel(10),
                bc.apply_channel(128),
                bc.apply_channel(240)
            ]
        );
    }
}
