use pixelpunch_image::{Rgba8, RgbaImage};

use super::Sampler;

/// Nearest neighbour sampler.
///
/// Rounds the coordinates to the closest pixel center.
#[derive(Clone, Copy, Debug)]
pub struct NearestSampler<'a> {
    source: &'a RgbaImage,
}

impl<'a> NearestSampler<'a> {
    /// Create a sampler reading from `source`.
    pub fn new(source: &'a RgbaImage) -> Self {
        Self { source }
    }
}

impl<'a> Sampler<'a> for NearestSampler<'a> {
    fn source(&self) -> &'a RgbaImage {
        self.source
    }

    fn sample(&self, x: f32, y: f32) -> Rgba8 {
        let iu = (x + 0.5).floor() as i64;
        let iv = (y + 0.5).floor() as i64;
        self.source.get_clamped(iu, iv)
    }
}
