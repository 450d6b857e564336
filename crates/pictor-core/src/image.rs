//! Owned 8-bit image buffer.
//!
//! [`Image`] is the pixel container every transform operates on. Pixels are
//! stored row-major, top-to-bottom, channels interleaved:
//!
//! ```text
//! Memory: [R G B R G B R G B ...]  <- Row 0
//!         [R G B R G B R G B ...]  <- Row 1
//! ```
//!
//! For RGBA images alpha is interleaved: `[R G B A R G B A ...]`.
//!
//! The channel count is a const generic so that three- and four-channel
//! buffers share one implementation; [`RgbImage`] and [`RgbaImage`] are the
//! aliases callers normally use. Transforms read channels 0..3 as R, G, B
//! and copy any further channels through untouched.
//!
//! # Memory Management
//!
//! The pixel buffer is stored in an [`Arc<Vec<u8>>`]:
//! - `clone()` is zero-copy (shares the underlying data)
//! - mutation goes through [`Arc::make_mut`] (copy-on-write)
//!
//! Transforms never mutate their input; they allocate a fresh output buffer
//! and write into it while reading only from the source, so a caller can
//! keep the original around at no cost.
//!
//! # Usage
//!
//! ```rust
//! use pictor_core::RgbImage;
//!
//! let mut img = RgbImage::filled(64, 64, [128, 128, 128]);
//! img.set_pixel(10, 10, [255, 0, 0]);
//! assert_eq!(img.pixel(10, 10), [255, 0, 0]);
//! ```

use crate::{Error, Rect, Result};
use std::sync::Arc;

/// An RGB image (3 channels per pixel).
pub type RgbImage = Image<3>;

/// An RGBA image (4 channels per pixel). The alpha channel is never
/// processed by the transforms, only copied through.
pub type RgbaImage = Image<4>;

/// Owned image buffer of `u8` channel values with `N` channels per pixel.
///
/// # Example
///
/// ```rust
/// use pictor_core::{Image, RgbImage};
///
/// let img: RgbImage = Image::new(640, 480);
/// assert_eq!(img.dimensions(), (640, 480));
/// assert_eq!(img.channels(), 3);
/// ```
#[derive(Clone)]
pub struct Image<const N: usize> {
    /// Pixel data buffer (Arc for cheap cloning)
    data: Arc<Vec<u8>>,
    /// Image width in pixels
    width: u32,
    /// Image height in pixels
    height: u32,
}

impl<const N: usize> Image<N> {
    /// Creates a new image filled with zeros (black, and transparent if
    /// an alpha channel is present).
    pub fn new(width: u32, height: u32) -> Self {
        let len = width as usize * height as usize * N;
        Self {
            data: Arc::new(vec![0u8; len]),
            width,
            height,
        }
    }

    /// Creates an image from existing pixel data.
    ///
    /// `data` must hold exactly `width * height * N` bytes in row-major
    /// interleaved order.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidDimensions`] if the data length doesn't match.
    pub fn from_data(width: u32, height: u32, data: Vec<u8>) -> Result<Self> {
        let expected = width as usize * height as usize * N;
        if data.len() != expected {
            return Err(Error::invalid_dimensions(
                width,
                height,
                format!("expected {} bytes, got {}", expected, data.len()),
            ));
        }
        Ok(Self {
            data: Arc::new(data),
            width,
            height,
        })
    }

    /// Creates an image filled with a specific pixel value.
    ///
    /// # Example
    ///
    /// ```rust
    /// use pictor_core::RgbImage;
    ///
    /// let white = RgbImage::filled(10, 10, [255, 255, 255]);
    /// assert_eq!(white.pixel(5, 5), [255, 255, 255]);
    /// ```
    pub fn filled(width: u32, height: u32, pixel: [u8; N]) -> Self {
        let count = width as usize * height as usize;
        let mut data = Vec::with_capacity(count * N);
        for _ in 0..count {
            data.extend_from_slice(&pixel);
        }
        Self {
            data: Arc::new(data),
            width,
            height,
        }
    }

    /// Returns the image width in pixels.
    #[inline]
    pub fn width(&self) -> u32 {
        self.width
    }

    /// Returns the image height in pixels.
    #[inline]
    pub fn height(&self) -> u32 {
        self.height
    }

    /// Returns the image dimensions as (width, height).
    #[inline]
    pub fn dimensions(&self) -> (u32, u32) {
        (self.width, self.height)
    }

    /// Returns the number of channels per pixel.
    #[inline]
    pub const fn channels(&self) -> usize {
        N
    }

    /// Returns the total number of pixels.
    #[inline]
    pub fn pixel_count(&self) -> usize {
        self.width as usize * self.height as usize
    }

    /// Returns a rectangle covering the entire image.
    #[inline]
    pub fn bounds(&self) -> Rect {
        Rect::from_size(self.width, self.height)
    }

    /// Returns `true` if the image has zero area.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.width == 0 || self.height == 0
    }

    /// Returns a reference to the raw pixel data.
    #[inline]
    pub fn data(&self) -> &[u8] {
        &self.data
    }

    /// Returns a mutable reference to the pixel data.
    ///
    /// If the data is shared (Arc refcount > 1), this clones the buffer
    /// first to ensure exclusive access (copy-on-write).
    #[inline]
    pub fn data_mut(&mut self) -> &mut [u8] {
        Arc::make_mut(&mut self.data).as_mut_slice()
    }

    /// Returns the buffer offset for pixel at (x, y).
    #[inline]
    fn pixel_offset(&self, x: u32, y: u32) -> usize {
        (y as usize * self.width as usize + x as usize) * N
    }

    /// Returns the pixel at (x, y).
    ///
    /// # Panics
    ///
    /// Panics if (x, y) is out of bounds.
    #[inline]
    pub fn pixel(&self, x: u32, y: u32) -> [u8; N] {
        debug_assert!(x < self.width && y < self.height, "pixel out of bounds");
        let offset = self.pixel_offset(x, y);
        let mut result = [0u8; N];
        result.copy_from_slice(&self.data[offset..offset + N]);
        result
    }

    /// Returns the pixel at (x, y), or `None` if out of bounds.
    #[inline]
    pub fn get_pixel(&self, x: u32, y: u32) -> Option<[u8; N]> {
        if x < self.width && y < self.height {
            Some(self.pixel(x, y))
        } else {
            None
        }
    }

    /// Returns the pixel at (x, y), or [`Error::OutOfBounds`].
    #[inline]
    pub fn try_pixel(&self, x: u32, y: u32) -> Result<[u8; N]> {
        self.get_pixel(x, y)
            .ok_or_else(|| Error::out_of_bounds(x, y, self.width, self.height))
    }

    /// Sets the pixel at (x, y).
    ///
    /// # Panics
    ///
    /// Panics if (x, y) is out of bounds.
    #[inline]
    pub fn set_pixel(&mut self, x: u32, y: u32, pixel: [u8; N]) {
        debug_assert!(x < self.width && y < self.height, "pixel out of bounds");
        let offset = self.pixel_offset(x, y);
        let data = Arc::make_mut(&mut self.data);
        data[offset..offset + N].copy_from_slice(&pixel);
    }

    /// Fills the entire image with a pixel value.
    pub fn fill(&mut self, pixel: [u8; N]) {
        let data = Arc::make_mut(&mut self.data);
        for chunk in data.chunks_exact_mut(N) {
            chunk.copy_from_slice(&pixel);
        }
    }

    /// Returns a row of pixels as a slice.
    ///
    /// # Panics
    ///
    /// Panics if y >= height.
    #[inline]
    pub fn row(&self, y: u32) -> &[u8] {
        debug_assert!(y < self.height, "row out of bounds");
        let start = y as usize * self.width as usize * N;
        let end = start + self.width as usize * N;
        &self.data[start..end]
    }

    /// Returns a mutable row of pixels.
    ///
    /// # Panics
    ///
    /// Panics if y >= height.
    #[inline]
    pub fn row_mut(&mut self, y: u32) -> &mut [u8] {
        debug_assert!(y < self.height, "row out of bounds");
        let start = y as usize * self.width as usize * N;
        let end = start + self.width as usize * N;
        &mut self.data_mut()[start..end]
    }

    /// Iterates over all pixels with their coordinates.
    ///
    /// Row by row, left to right, top to bottom.
    pub fn pixels(&self) -> impl Iterator<Item = (u32, u32, [u8; N])> + '_ {
        (0..self.height).flat_map(move |y| (0..self.width).map(move |x| (x, y, self.pixel(x, y))))
    }

    /// Applies a function to each pixel in place.
    pub fn map_pixels<F>(&mut self, f: F)
    where
        F: Fn([u8; N]) -> [u8; N],
    {
        let data = Arc::make_mut(&mut self.data);
        for chunk in data.chunks_exact_mut(N) {
            let mut pixel = [0u8; N];
            pixel.copy_from_slice(chunk);
            chunk.copy_from_slice(&f(pixel));
        }
    }
}

impl<const N: usize> PartialEq for Image<N> {
    fn eq(&self, other: &Self) -> bool {
        self.width == other.width && self.height == other.height && *self.data == *other.data
    }
}

impl<const N: usize> Eq for Image<N> {}

impl<const N: usize> std::fmt::Debug for Image<N> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Image")
            .field("width", &self.width)
            .field("height", &self.height)
            .field("channels", &N)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_image_new() {
        let img: RgbImage = Image::new(100, 50);
        assert_eq!(img.width(), 100);
        assert_eq!(img.height(), 50);
        assert_eq!(img.channels(), 3);
        assert_eq!(img.pixel_count(), 5000);
        assert_eq!(img.data().len(), 15000);
    }

    #[test]
    fn test_image_filled() {
        let img = RgbImage::filled(10, 10, [1, 2, 3]);
        assert_eq!(img.pixel(0, 0), [1, 2, 3]);
        assert_eq!(img.pixel(9, 9), [1, 2, 3]);
    }

    #[test]
    fn test_image_set_get_pixel() {
        let mut img: RgbaImage = Image::new(10, 10);
        img.set_pixel(5, 5, [255, 0, 0, 255]);
        assert_eq!(img.pixel(5, 5), [255, 0, 0, 255]);
        assert_eq!(img.pixel(0, 0), [0, 0, 0, 0]);
        assert_eq!(img.get_pixel(10, 10), None);
    }

    #[test]
    fn test_image_try_pixel() {
        let img = RgbImage::filled(4, 4, [9, 9, 9]);
        assert_eq!(img.try_pixel(3, 3).unwrap(), [9, 9, 9]);
        assert!(img.try_pixel(4, 0).unwrap_err().is_bounds_error());
    }

    #[test]
    fn test_image_from_data() {
        let data = vec![7u8; 10 * 10 * 3];
        let img: RgbImage = Image::from_data(10, 10, data).unwrap();
        assert_eq!(img.pixel(5, 5), [7, 7, 7]);
    }

    #[test]
    fn test_image_from_data_wrong_size() {
        let data = vec![0u8; 10];
        let result: Result<RgbImage> = Image::from_data(10, 10, data);
        assert!(result.is_err());
    }

    #[test]
    fn test_image_row() {
        let img = RgbImage::filled(10, 10, [1, 2, 3]);
        let row = img.row(5);
        assert_eq!(row.len(), 30);
        assert_eq!(&row[0..3], &[1, 2, 3]);
    }

    #[test]
    fn test_image_map_pixels() {
        let mut img = RgbImage::filled(10, 10, [10, 20, 30]);
        img.map_pixels(|px| [px[0] * 2, px[1] * 2, px[2] * 2]);
        assert_eq!(img.pixel(0, 0), [20, 40, 60]);
    }

    #[test]
    fn test_image_clone_cow() {
        let img1 = RgbImage::filled(10, 10, [255, 0, 0]);
        let mut img2 = img1.clone();

        // Mutating the clone triggers copy-on-write
        img2.set_pixel(0, 0, [0, 255, 0]);

        assert_eq!(img1.pixel(0, 0), [255, 0, 0]);
        assert_eq!(img2.pixel(0, 0), [0, 255, 0]);
    }

    #[test]
    fn test_image_eq() {
        let a = RgbImage::filled(4, 4, [1, 2, 3]);
        let b = RgbImage::filled(4, 4, [1, 2, 3]);
        let c = RgbImage::filled(4, 4, [1, 2, 4]);
        assert_eq!(a, b);
        assert_ne!(a, c);
    }

    #[test]
    fn test_image_empty() {
        let img: RgbImage = Image::new(0, 10);
        assert!(img.is_empty());
        assert_eq!(img.pixel_count(), 0);
    }
}
