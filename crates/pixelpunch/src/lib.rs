//! Pixel-art aware quad-to-rectangle image resampling.
//!
//! This crate bundles the pixelpunch crates:
//!
//! - [`image`]: RGBA buffers, colors and palettes
//! - [`imgproc`]: quad mappings, samplers and the transform dispatcher

#[doc(inline)]
pub use pixelpunch_image as image;

#[doc(inline)]
pub use pixelpunch_imgproc as imgproc;
