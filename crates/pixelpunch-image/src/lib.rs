#![deny(missing_docs)]
//! RGBA image buffers and color types for pixelpunch

/// image representation for raster transforms.
pub mod image;

/// 8-bit RGBA color type.
pub mod color;

/// RGBA image with an alpha-presence flag.
pub mod rgba;

/// ordered color palettes.
pub mod palette;

/// Error types for the image module.
pub mod error;

pub use crate::color::Rgba8;
pub use crate::error::ImageError;
pub use crate::image::{Image, ImageSize};
pub use crate::palette::Palette;
pub use crate::rgba::RgbaImage;
