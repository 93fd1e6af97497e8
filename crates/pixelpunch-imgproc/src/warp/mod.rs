//! Quad to rectangle image transforms.
//!
//! The target is a [`TransformMapping`](crate::geometry::TransformMapping): four corners
//! and their bounding box. The output image covers the bounding box and every output
//! pixel is looked up in the source through one of two rasterizers:
//!
//! - **Projective**: a homography, lines stay straight
//! - **Bilinear**: the inverse of the bilinear corner blend, edges are split evenly
//!
//! # Examples
//!
//! Mapping an image onto a trapezoid with the dominant-color sampler:
//!
//! ```no_run
//! use pixelpunch_image::{Rgba8, RgbaImage};
//! use pixelpunch_imgproc::geometry::{Point, TransformMapping};
//! use pixelpunch_imgproc::sampling::SamplingMethod;
//! use pixelpunch_imgproc::warp::{transform, TransformMethod};
//!
//! let source = RgbaImage::from_size_val([32, 32].into(), Rgba8::BLACK, false)?;
//! let sampler = SamplingMethod::FirstBilinear.sampler(&source, None);
//! let target = TransformMapping::from_points([
//!     Point::new(8.0, 0.0),
//!     Point::new(24.0, 0.0),
//!     Point::new(32.0, 32.0),
//!     Point::new(0.0, 32.0),
//! ])?;
//!
//! let warped = transform(&sampler, &target, TransformMethod::Bilinear)?;
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

mod bilinear;
mod projective;
mod transform;

pub use bilinear::{inverse_bilinear, warp_bilinear, BILINEAR_EPSILON};
pub use projective::{target_to_source, warp_projective};
pub use transform::{transform, transform_with, TransformMethod};
