#![deny(missing_docs)]
#![doc = env!("CARGO_PKG_DESCRIPTION")]

/// error types for the transforms.
pub mod error;

/// points, rectangles and quad mappings.
pub mod geometry;

/// homography solver and 3x3 matrix helpers.
pub mod homography;

/// module containing parallization utilities.
pub mod parallel;

/// resampling kernels.
pub mod sampling;

/// quad to rectangle transformations module.
pub mod warp;
