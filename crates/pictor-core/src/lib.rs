//! # pictor-core
//!
//! Core types for 8-bit raster image processing.
//!
//! This crate provides the foundational types used by the pictor transforms:
//!
//! - [`Image`] - Owned 8-bit pixel buffer with copy-on-write cloning
//! - [`RgbImage`], [`RgbaImage`] - Channel-count aliases
//! - [`Rect`] - Crop regions and bounds checks
//! - [`Error`], [`Result`] - Buffer-layer error handling
//!
//! ## Design
//!
//! Images are immutable from a transform's point of view: every operation in
//! `pictor-ops` reads a source [`Image`] and allocates a fresh output buffer.
//! Cloning is cheap (`Arc`-backed), so "return the original unchanged" costs
//! nothing.
//!
//! Decoding, encoding, and any device/scanning concerns live outside this
//! workspace; callers hand in already-decoded pixels via
//! [`Image::from_data`].

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]

pub mod error;
pub mod image;
pub mod rect;

pub use error::{Error, Result};
pub use image::{Image, RgbImage, RgbaImage};
pub use rect::Rect;
