//! Error types for image transforms.

use pictor_core::Rect;
use thiserror::Error;

/// Error type for image transforms.
///
/// The pixel transforms (brightness/contrast, palette reduction) are total
/// and never fail; only crop geometry can be invalid.
#[derive(Error, Debug)]
pub enum OpsError {
    /// Crop region is empty or extends beyond the image bounds.
    #[error("crop region ({x}, {y}, {width}x{height}) invalid for image {image_width}x{image_height}")]
    InvalidRegion {
        /// Region X origin
        x: u32,
        /// Region Y origin
        y: u32,
        /// Region width
        width: u32,
        /// Region height
        height: u32,
        /// Image width
        image_width: u32,
        /// Image height
        image_height: u32,
    },
}

impl OpsError {
    /// Creates an [`OpsError::InvalidRegion`] from a rectangle and the
    /// bounds it failed against.
    #[inline]
    pub fn invalid_region(rect: Rect, image_width: u32, image_height: u32) -> Self {
        Self::InvalidRegion {
            x: rect.x,
            y: rect.y,
            width: rect.width,
            height: rect.height,
            image_width,
            image_height,
        }
    }
}

/// Result type for image transforms.
pub type OpsResult<T> = Result<T, OpsError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_region_message() {
        let err = OpsError::invalid_region(Rect::new(10, 20, 100, 100), 64, 64);
        let msg = err.to_string();
        assert!(msg.contains("(10, 20, 100x100)"));
        assert!(msg.contains("64x64"));
    }
}
