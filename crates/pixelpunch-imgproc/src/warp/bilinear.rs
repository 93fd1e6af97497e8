use pixelpunch_image::{Rgba8, RgbaImage};

use crate::{
    error::TransformError,
    geometry::{Point, Quad},
    homography::transform_point,
    parallel::{par_fill_pixels, ExecutionStrategy},
    sampling::Sampler,
};

/// Below this magnitude the quadratic in `u` is solved as a linear equation.
pub const BILINEAR_EPSILON: f64 = 4.37114e-5;

/// Find the normalized `(u, v)` whose bilinear blend of the quad corners equals `p`.
///
/// The blend is `(1-u)(1-v) q0 + u(1-v) q1 + uv q2 + (1-u)v q3`. Points outside the
/// quad yield coordinates outside `[0, 1]`. Returns `None` when no real solution exists.
///
/// # Example
///
/// ```
/// use pixelpunch_imgproc::geometry::Point;
/// use pixelpunch_imgproc::warp::inverse_bilinear;
///
/// let quad = [
///     Point::new(0.0, 0.0),
///     Point::new(4.0, 0.0),
///     Point::new(4.0, 2.0),
///     Point::new(0.0, 2.0),
/// ];
///
/// assert_eq!(inverse_bilinear(Point::new(1.0, 1.0), &quad), Some(Point::new(0.25, 0.5)));
/// ```
pub fn inverse_bilinear(p: Point, quad: &Quad) -> Option<Point> {
    let [q0, q1, q2, q3] = *quad;
    let d03 = q0 - q3;
    let d12 = q1 - q2;

    // A (1-u)^2 + 2B u(1-u) + C u^2 = 0
    let a = (q0 - p).cross(d03);
    let b = 0.5 * ((q0 - p).cross(d12) + (q1 - p).cross(d03));
    let c = (q1 - p).cross(d12);

    let div = a - 2.0 * b + c;
    let u = if div.abs() < BILINEAR_EPSILON {
        if a != c {
            a / (a - c)
        } else {
            0.0
        }
    } else {
        let disc = b * b - a * c;
        if disc < 0.0 {
            return None;
        }
        let sqrt_disc = disc.sqrt();
        let u = ((a - b) + sqrt_disc) / div;
        if (0.0..=1.0).contains(&u) {
            u
        } else {
            ((a - b) - sqrt_disc) / div
        }
    };

    let v_div = (1.0 - u) * d03 + u * d12;
    let v = if v_div.x.abs() > v_div.y.abs() {
        ((1.0 - u) * (q0.x - p.x) + u * (q1.x - p.x)) / v_div.x
    } else if v_div.y != 0.0 {
        ((1.0 - u) * (q0.y - p.y) + u * (q1.y - p.y)) / v_div.y
    } else {
        0.0
    };

    Some(Point::new(u, v))
}

/// Fill `dst` by inverting the bilinear blend of `dst_quad` at every pixel.
///
/// The recovered `(u, v)` is mapped through `uv_to_source` into the sampler's source.
/// Pixels without a solution or landing outside the source are set to
/// [`Rgba8::TRANSPARENT`].
///
/// * `sampler` - The kernel reading the source image.
/// * `uv_to_source` - The unit square -> source quad homography.
/// * `dst_quad` - The target quad, relative to `dst`.
/// * `dst` - The output image.
/// * `strategy` - How the pixel loop is scheduled.
pub fn warp_bilinear<'img, S: Sampler<'img> + ?Sized>(
    sampler: &S,
    uv_to_source: &[f64; 9],
    dst_quad: &Quad,
    dst: &mut RgbaImage,
    strategy: ExecutionStrategy,
) -> Result<(), TransformError> {
    let source = sampler.source();
    let (src_cols, src_rows) = (source.cols() as f64, source.rows() as f64);

    par_fill_pixels(dst, strategy, |x, y| {
        let Some(uv) = inverse_bilinear(Point::new(x as f64, y as f64), dst_quad) else {
            return Rgba8::TRANSPARENT;
        };
        let (sx, sy) = transform_point(uv.x, uv.y, uv_to_source);
        if sx >= 0.0 && sy >= 0.0 && sx < src_cols && sy < src_rows {
            sampler.sample(sx as f32, sy as f32)
        } else {
            Rgba8::TRANSPARENT
        }
    })?;

    Ok(())
}
