//! Shared per-pixel iteration for the transforms.
//!
//! Every transform in this crate has the same shape: read each source pixel,
//! map its RGB channels through a pure function, write the result into a
//! fresh output buffer of identical dimensions. This module holds that loop
//! so the brightness/contrast and palette operations share one iteration
//! pattern.

use pictor_core::Image;

/// Maps the RGB channels of every pixel through `f` into a new image.
///
/// Channels beyond the first three (alpha, for [`pictor_core::RgbaImage`])
/// are copied through unmodified. The source is never mutated.
///
/// Images with fewer than three channels are not meaningful inputs for any
/// transform in this crate.
pub(crate) fn map_rgb<const N: usize, F>(src: &Image<N>, f: F) -> Image<N>
where
    F: Fn([u8; 3]) -> [u8; 3],
{
    debug_assert!(N >= 3, "transforms require at least RGB channels");
    let mut out = Image::new(src.width(), src.height());
    let out_data = out.data_mut();
    for (src_px, out_px) in src.data().chunks_exact(N).zip(out_data.chunks_exact_mut(N)) {
        let [r, g, b] = f([src_px[0], src_px[1], src_px[2]]);
        out_px[0] = r;
        out_px[1] = g;
        out_px[2] = b;
        if N > 3 {
            out_px[3..].copy_from_slice(&src_px[3..]);
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use pictor_core::{RgbImage, RgbaImage};

    #[test]
    fn test_map_rgb_identity() {
        let img = RgbImage::filled(4, 4, [10, 20, 30]);
        let out = map_rgb(&img, |px| px);
        assert_eq!(out, img);
    }

    #[test]
    fn test_map_rgb_preserves_alpha() {
        let img = RgbaImage::filled(4, 4, [10, 20, 30, 77]);
        let out = map_rgb(&img, |_| [0, 0, 0]);
        assert_eq!(out.pixel(0, 0), [0, 0, 0, 77]);
    }

    #[test]
    fn test_map_rgb_empty_image() {
        let img: RgbImage = pictor_core::Image::new(0, 0);
        let out = map_rgb(&img, |px| px);
        assert!(out.is_empty());
    }
}
