//! Resampling kernels evaluated at continuous source coordinates.
//!
//! Every sampler borrows the image it reads from and maps a point in source pixel
//! space to a color. Kernels differ only in how they reconstruct that color:
//!
//! - **Nearest**: the closest pixel, no interpolation
//! - **Bilinear**: smooth blend of the 4 enclosing pixels
//! - **Bicubic**: Catmull-Rom over the 4x4 neighbourhood, color channels only
//! - **Bilinear dominance**: the n-th most weighted distinct color among the 4 enclosing
//!   pixels, keeping hard pixel-art edges
//! - **Weight**: the weight of that n-th color, encoded in the red channel
//! - **Bicubic best fit**: the bicubic estimate snapped to a palette or to the local colors
//!
//! Reads outside the image are clamped to the nearest edge pixel.

mod best_fit;
mod bicubic;
mod bilinear;
mod dominance;
mod method;
mod nearest;

pub use best_fit::{BestFitMode, BicubicBestFitSampler};
pub use bicubic::{bicubic_interpolate, cubic_interpolate, BicubicSampler};
pub use bilinear::BilinearSampler;
pub use dominance::{BilinearDominanceSampler, WeightSampler};
pub use method::{AnySampler, SamplingMethod};
pub use nearest::NearestSampler;

use pixelpunch_image::{Rgba8, RgbaImage};

/// A reconstruction kernel reading from a source image borrowed for `'img`.
///
/// Implementations must be `Sync` so the pixel loop can evaluate them from several
/// threads at once.
pub trait Sampler<'img>: Sync {
    /// The image the sampler reads from.
    ///
    /// The borrow is tied to the image, not to the sampler, so results aliasing the
    /// source may outlive the sampler value.
    fn source(&self) -> &'img RgbaImage;

    /// Evaluate the kernel at `(x, y)` in source pixel space.
    ///
    /// The caller guarantees `0 <= x < width` and `0 <= y < height`.
    fn sample(&self, x: f32, y: f32) -> Rgba8;
}

impl<'img, S: Sampler<'img> + ?Sized> Sampler<'img> for &S {
    fn source(&self) -> &'img RgbaImage {
        (**self).source()
    }

    fn sample(&self, x: f32, y: f32) -> Rgba8 {
        (**self).sample(x, y)
    }
}

/// The 4 pixels enclosing `(x, y)` and their bilinear weights.
///
/// Order is top-left, top-right, bottom-left, bottom-right.
pub(crate) fn bilinear_corners(source: &RgbaImage, x: f32, y: f32) -> ([Rgba8; 4], [f32; 4]) {
    let (x1, y1) = (x.floor(), y.floor());
    let (x2, y2) = (x.ceil(), y.ceil());

    let frac_x = x - x1;
    let frac_y = y - y1;
    let frac_xx = 1.0 - frac_x;
    let frac_yy = 1.0 - frac_y;

    let (x1, y1, x2, y2) = (x1 as i64, y1 as i64, x2 as i64, y2 as i64);
    let colors = [
        source.get_clamped(x1, y1),
        source.get_clamped(x2, y1),
        source.get_clamped(x1, y2),
        source.get_clamped(x2, y2),
    ];
    let weights = [
        frac_xx * frac_yy,
        frac_x * frac_yy,
        frac_xx * frac_y,
        frac_x * frac_y,
    ];

    (colors, weights)
}

/// The 4x4 pixels around `(x, y)` indexed `[column][row]`, plus the fractional offsets.
pub(crate) fn neighborhood4x4(source: &RgbaImage, x: f32, y: f32) -> ([[Rgba8; 4]; 4], f64, f64) {
    let x0 = x.floor() as i64 - 1;
    let y0 = y.floor() as i64 - 1;

    let mut p = [[Rgba8::TRANSPARENT; 4]; 4];
    for (ox, column) in p.iter_mut().enumerate() {
        for (oy, pixel) in column.iter_mut().enumerate() {
            *pixel = source.get_clamped(x0 + ox as i64, y0 + oy as i64);
        }
    }

    let frac_x = (x - x.floor()) as f64;
    let frac_y = (y - y.floor()) as f64;
    (p, frac_x, frac_y)
}
