use pixelpunch_image::{Rgba8, RgbaImage};

use super::{neighborhood4x4, Sampler};

/// Catmull-Rom interpolation between `p[1]` and `p[2]` at `x` in `[0, 1]`.
///
/// # Example
///
/// ```
/// use pixelpunch_imgproc::sampling::cubic_interpolate;
///
/// assert_eq!(cubic_interpolate(&[0.0, 0.0, 255.0, 255.0], 0.5), 127.5);
/// ```
pub fn cubic_interpolate(p: &[f64; 4], x: f64) -> f64 {
    p[1] + 0.5
        * x
        * (p[2] - p[0]
            + x * (2.0 * p[0] - 5.0 * p[1] + 4.0 * p[2] - p[3]
                + x * (3.0 * (p[1] - p[2]) + p[3] - p[0])))
}

/// Interpolate a 4x4 grid indexed `[column][row]`, clamped to `[0, 1]`.
///
/// Each column is interpolated along `y`, then the four results along `x`.
pub fn bicubic_interpolate(p: &[[f64; 4]; 4], x: f64, y: f64) -> f64 {
    let arr = [
        cubic_interpolate(&p[0], y),
        cubic_interpolate(&p[1], y),
        cubic_interpolate(&p[2], y),
        cubic_interpolate(&p[3], y),
    ];
    cubic_interpolate(&arr, x).clamp(0.0, 1.0)
}

/// Split a 4x4 neighbourhood into normalized red, green and blue planes.
pub(crate) fn rgb_planes(p: &[[Rgba8; 4]; 4]) -> [[[f64; 4]; 4]; 3] {
    let mut planes = [[[0.0; 4]; 4]; 3];
    for (ox, column) in p.iter().enumerate() {
        for (oy, pixel) in column.iter().enumerate() {
            let [r, g, b] = pixel.rgb_f64();
            planes[0][ox][oy] = r;
            planes[1][ox][oy] = g;
            planes[2][ox][oy] = b;
        }
    }
    planes
}

/// The bicubic estimate of each color channel, normalized to `[0, 1]`.
pub(crate) fn bicubic_rgb(planes: &[[[f64; 4]; 4]; 3], frac_x: f64, frac_y: f64) -> [f64; 3] {
    planes.map(|plane| bicubic_interpolate(&plane, frac_x, frac_y))
}

/// Scale a `[0, 1]` channel to a byte, rounding to nearest rather than truncating.
pub(crate) fn u8_from_unit(v: f64) -> u8 {
    (255.0 * v).round().clamp(0.0, 255.0) as u8
}

/// Bicubic sampler.
///
/// Only the color channels are interpolated; the output is always opaque.
#[derive(Clone, Copy, Debug)]
pub struct BicubicSampler<'a> {
    source: &'a RgbaImage,
}

impl<'a> BicubicSampler<'a> {
    /// Create a sampler reading from `source`.
    pub fn new(source: &'a RgbaImage) -> Self {
        Self { source }
    }
}

impl<'a> Sampler<'a> for BicubicSampler<'a> {
    fn source(&self) -> &'a RgbaImage {
        self.source
    }

    fn sample(&self, x: f32, y: f32) -> Rgba8 {
        let (p, frac_x, frac_y) = neighborhood4x4(self.source, x, y);
        let [r, g, b] = bicubic_rgb(&rgb_planes(&p), frac_x, frac_y);
        Rgba8::opaque(u8_from_unit(r), u8_from_unit(g), u8_from_unit(b))
    }
}
