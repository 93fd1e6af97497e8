use pixelpunch_image::{color::u8_from_f32, Rgba8, RgbaImage};

use super::{bilinear_corners, Sampler};

/// Bilinear sampler.
///
/// Blends the 4 enclosing pixels, alpha included.
#[derive(Clone, Copy, Debug)]
pub struct BilinearSampler<'a> {
    source: &'a RgbaImage,
}

impl<'a> BilinearSampler<'a> {
    /// Create a sampler reading from `source`.
    pub fn new(source: &'a RgbaImage) -> Self {
        Self { source }
    }
}

impl<'a> Sampler<'a> for BilinearSampler<'a> {
    fn source(&self) -> &'a RgbaImage {
        self.source
    }

    fn sample(&self, x: f32, y: f32) -> Rgba8 {
        let (colors, weights) = bilinear_corners(self.source, x, y);

        let mut pixel = [0.0f32; 4];
        for (c, w) in colors.iter().zip(weights.iter()) {
            let c: [u8; 4] = (*c).into();
            for (p, v) in pixel.iter_mut().zip(c) {
                *p += v as f32 * w;
            }
        }

        Rgba8::from(pixel.map(u8_from_f32))
    }
}

#[cfg(test)]
mod tests {
    use super::BilinearSampler;
    use crate::sampling::Sampler;
    use pixelpunch_image::{ImageError, Rgba8, RgbaImage};

    #[test]
    fn bilinear_blends_corners() -> Result<(), ImageError> {
        let px = [
            Rgba8::new(0, 0, 0, 0),
            Rgba8::new(100, 0, 0, 255),
            Rgba8::new(0, 200, 0, 255),
            Rgba8::new(100, 200, 40, 255),
        ];
        let image = RgbaImage::from_pixels([2, 2].into(), &px, true)?;
        let sampler = BilinearSampler::new(&image);

        assert_eq!(sampler.sample(0.0, 0.0), px[0]);
        assert_eq!(sampler.sample(1.0, 1.0), px[3]);
        assert_eq!(sampler.sample(0.5, 0.5), Rgba8::new(50, 100, 10, 191));
        assert_eq!(sampler.sample(0.25, 0.0), Rgba8::new(25, 0, 0, 64));

        Ok(())
    }
}
