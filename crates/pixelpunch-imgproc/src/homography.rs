//! Homographies mapping the unit square onto a quad.
//!
//! Matrices are stored row-major as `[f64; 9]` and act on column vectors `(x, y, 1)`.

use crate::{
    error::GeometryError,
    geometry::{Point, Quad},
};

/// The 3x3 identity matrix.
pub const IDENTITY: [f64; 9] = [1.0, 0.0, 0.0, 0.0, 1.0, 0.0, 0.0, 0.0, 1.0];

#[rustfmt::skip]
fn determinant3x3(m: &[f64; 9]) -> f64 {
    m[0] * (m[4] * m[8] - m[5] * m[7]) -
    m[1] * (m[3] * m[8] - m[5] * m[6]) +
    m[2] * (m[3] * m[7] - m[4] * m[6])
}

#[rustfmt::skip]
fn adjugate3x3(m: &[f64; 9]) -> [f64; 9] {
    [
        m[4] * m[8] - m[5] * m[7],  // [0, 0]
        m[2] * m[7] - m[1] * m[8],  // [0, 1]
        m[1] * m[5] - m[2] * m[4],  // [0, 2]
        m[5] * m[6] - m[3] * m[8],  // [1, 0]
        m[0] * m[8] - m[2] * m[6],  // [1, 1]
        m[2] * m[3] - m[0] * m[5],  // [1, 2]
        m[3] * m[7] - m[4] * m[6],  // [2, 0]
        m[1] * m[6] - m[0] * m[7],  // [2, 1]
        m[0] * m[4] - m[1] * m[3],  // [2, 2]
    ]
}

/// Invert a 3x3 matrix.
///
/// # Errors
///
/// Returns [`GeometryError::SingularMatrix`] when the determinant is zero or not finite.
pub fn inverse3x3(m: &[f64; 9]) -> Result<[f64; 9], GeometryError> {
    let det = determinant3x3(m);

    if det == 0.0 || !det.is_finite() {
        return Err(GeometryError::SingularMatrix);
    }

    let inv_det = 1.0 / det;
    Ok(adjugate3x3(m).map(|v| v * inv_det))
}

/// Multiply two 3x3 matrices, `a * b`.
pub fn mul3x3(a: &[f64; 9], b: &[f64; 9]) -> [f64; 9] {
    let mut out = [0.0; 9];
    for r in 0..3 {
        for c in 0..3 {
            out[r * 3 + c] = a[r * 3] * b[c] + a[r * 3 + 1] * b[3 + c] + a[r * 3 + 2] * b[6 + c];
        }
    }
    out
}

/// Map a point through a homography and divide by the homogeneous coordinate.
///
/// A zero homogeneous coordinate yields non-finite coordinates.
pub fn transform_point(x: f64, y: f64, m: &[f64; 9]) -> (f64, f64) {
    let w = m[6] * x + m[7] * y + m[8];
    let xt = (m[0] * x + m[1] * y + m[2]) / w;
    let yt = (m[3] * x + m[4] * y + m[5]) / w;
    (xt, yt)
}

/// Compute the homography mapping the unit square onto a quad.
///
/// The corners `(0, 0)`, `(1, 0)`, `(1, 1)` and `(0, 1)` land on `quad[0]` to `quad[3]`.
/// Parallelograms get a purely affine matrix whose last row is `(0, 0, 1)`.
///
/// # Errors
///
/// Returns [`GeometryError::DegenerateQuad`] when the quad is not a parallelogram and its
/// perspective determinant is zero, e.g. three collinear corners.
///
/// # Example
///
/// ```
/// use pixelpunch_imgproc::geometry::Point;
/// use pixelpunch_imgproc::homography::{transform_point, unit_square_to_quad};
///
/// let quad = [
///     Point::new(0.0, 0.0),
///     Point::new(4.0, 0.0),
///     Point::new(4.0, 2.0),
///     Point::new(0.0, 2.0),
/// ];
/// let m = unit_square_to_quad(&quad).unwrap();
///
/// assert_eq!(transform_point(1.0, 1.0, &m), (4.0, 2.0));
/// ```
pub fn unit_square_to_quad(quad: &Quad) -> Result<[f64; 9], GeometryError> {
    let [q0, q1, q2, q3] = *quad;
    let p = q0 - q1 + q2 - q3;

    if p == Point::new(0.0, 0.0) {
        let d01 = q1 - q0;
        let d12 = q2 - q1;
        #[rustfmt::skip]
        let m = [
            d01.x, d12.x, q0.x,
            d01.y, d12.y, q0.y,
            0.0,   0.0,   1.0,
        ];
        return Ok(m);
    }

    let d1 = q1 - q2;
    let d2 = q3 - q2;
    let del = d1.cross(d2);
    if del == 0.0 || !del.is_finite() {
        return Err(GeometryError::DegenerateQuad(del));
    }

    let g = p.cross(d2) / del;
    let h = d1.cross(p) / del;

    #[rustfmt::skip]
    let m = [
        q1.x - q0.x + g * q1.x, q3.x - q0.x + h * q3.x, q0.x,
        q1.y - q0.y + g * q1.y, q3.y - q0.y + h * q3.y, q0.y,
        g,                      h,                      1.0,
    ];
    Ok(m)
}
