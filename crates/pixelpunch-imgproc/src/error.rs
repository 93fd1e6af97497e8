use pixelpunch_image::ImageError;
use thiserror::Error;

use crate::parallel::ParallelError;

/// Errors raised when a quad cannot be turned into a usable mapping.
#[derive(Error, Debug, Clone, Copy, PartialEq)]
pub enum GeometryError {
    /// The perspective determinant of the quad is zero: three corners are collinear
    /// or the quad intersects itself.
    #[error("degenerate quad: perspective determinant is {0}")]
    DegenerateQuad(f64),

    /// The quad collapses to a line or a point and its mapping cannot be inverted.
    #[error("singular transformation matrix")]
    SingularMatrix,

    /// A corner of the quad is not a finite number.
    #[error("quad corner ({0}, {1}) is not finite")]
    NonFinitePoint(f64, f64),
}

/// Errors that can occur while transforming an image.
#[derive(Error, Debug, PartialEq)]
pub enum TransformError {
    /// Invalid geometry for the requested transform.
    #[error(transparent)]
    Geometry(#[from] GeometryError),

    /// Failed to allocate or access an image.
    #[error(transparent)]
    Image(#[from] ImageError),

    /// Failed to schedule the pixel loop.
    #[error(transparent)]
    Parallel(#[from] ParallelError),
}
