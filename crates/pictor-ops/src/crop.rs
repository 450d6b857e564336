//! Rectangular crop.
//!
//! Extracts a sub-region of an image into a new buffer. The region is
//! validated up front: either the whole crop succeeds, or nothing is written
//! and the caller keeps the original image. Failures are reported as an
//! explicit [`OpsError::InvalidRegion`] value rather than raised, so a
//! caller can fall back to the uncropped image without unwinding.
//!
//! # Example
//!
//! ```rust
//! use pictor_core::{Rect, RgbImage};
//! use pictor_ops::crop::crop;
//!
//! let img = RgbImage::filled(100, 100, [50, 60, 70]);
//!
//! // No region: identity
//! let same = crop(&img, None).unwrap();
//! assert_eq!(same, img);
//!
//! // Valid region: new image of the region's size
//! let cut = crop(&img, Some(Rect::new(10, 10, 20, 30))).unwrap();
//! assert_eq!(cut.dimensions(), (20, 30));
//!
//! // Out of bounds: error, original untouched
//! assert!(crop(&img, Some(Rect::new(90, 90, 20, 20))).is_err());
//! ```

use crate::{OpsError, OpsResult};
use pictor_core::{Image, Rect};
use tracing::trace;

/// Crops an image to the given region.
///
/// - `None` returns a copy of the original image (cheap, shares the buffer).
/// - A region fully inside the image bounds yields a new image of the
///   region's dimensions holding exactly those pixels, all channels copied.
///
/// # Errors
///
/// Returns [`OpsError::InvalidRegion`] if the region is empty or extends
/// beyond the image bounds. The input is never modified, so on error the
/// caller still holds the original image.
pub fn crop<const N: usize>(image: &Image<N>, region: Option<Rect>) -> OpsResult<Image<N>> {
    let Some(rect) = region else {
        return Ok(image.clone());
    };

    let (width, height) = image.dimensions();
    trace!(width, height, %rect, "crop");

    if rect.is_empty() || !image.bounds().contains_rect(&rect) {
        return Err(OpsError::invalid_region(rect, width, height));
    }

    let mut out = Image::new(rect.width, rect.height);
    for y in 0..rect.height {
        let src_row = image.row(rect.y + y);
        let start = rect.x as usize * N;
        let end = start + rect.width as usize * N;
        out.row_mut(y).copy_from_slice(&src_row[start..end]);
    }
    Ok(out)
}
