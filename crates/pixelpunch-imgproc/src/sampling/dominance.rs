use pixelpunch_image::{color::u8_from_f32, Rgba8, RgbaImage};

use super::{bilinear_corners, Sampler};

/// The distinct colors among the 4 bilinear corners with their accumulated weights.
#[derive(Debug)]
struct RankedCorners {
    colors: [Rgba8; 4],
    weights: [f32; 4],
    len: usize,
}

impl RankedCorners {
    /// Merge the corners enclosing `(x, y)` whose color channels match exactly.
    fn collect(source: &RgbaImage, x: f32, y: f32) -> Self {
        let (corners, corner_weights) = bilinear_corners(source, x, y);

        let mut ranked = Self {
            colors: [Rgba8::TRANSPARENT; 4],
            weights: [0.0; 4],
            len: 0,
        };
        for (c, w) in corners.into_iter().zip(corner_weights) {
            match ranked.colors[..ranked.len]
                .iter()
                .position(|k| k.rgb_eq(&c))
            {
                Some(k) => ranked.weights[k] += w,
                None => {
                    ranked.colors[ranked.len] = c;
                    ranked.weights[ranked.len] = w;
                    ranked.len += 1;
                }
            }
        }
        ranked
    }

    /// The color and weight at `order`, 0 being the heaviest.
    ///
    /// Partial selection sort; equal weights keep their first-seen order.
    fn select(mut self, order: usize) -> Option<(Rgba8, f32)> {
        if order >= self.len {
            return None;
        }

        for a in 0..=order {
            let mut max = a;
            for k in a + 1..self.len {
                if self.weights[k] > self.weights[max] {
                    max = k;
                }
            }
            self.colors[a..=max].rotate_right(1);
            self.weights[a..=max].rotate_right(1);
        }

        Some((self.colors[order], self.weights[order]))
    }
}

/// Picks the `order`-th most weighted distinct color among the 4 enclosing pixels.
///
/// Unlike [`super::BilinearSampler`] it never invents a color, so hard pixel-art edges
/// survive the transform. Order 0 is the dominant color; an order past the number of
/// distinct colors returns the least weighted one.
#[derive(Clone, Copy, Debug)]
pub struct BilinearDominanceSampler<'a> {
    source: &'a RgbaImage,
    order: usize,
}

impl<'a> BilinearDominanceSampler<'a> {
    /// Create a sampler reading from `source` returning the color at rank `order`.
    pub fn new(source: &'a RgbaImage, order: usize) -> Self {
        Self { source, order }
    }

    /// The rank this sampler returns.
    pub fn order(&self) -> usize {
        self.order
    }
}

impl<'a> Sampler<'a> for BilinearDominanceSampler<'a> {
    fn source(&self) -> &'a RgbaImage {
        self.source
    }

    fn sample(&self, x: f32, y: f32) -> Rgba8 {
        let ranked = RankedCorners::collect(self.source, x, y);
        let order = self.order.min(ranked.len - 1);
        ranked
            .select(order)
            .map_or(Rgba8::TRANSPARENT, |(color, _)| color)
    }
}

/// Encodes the weight of the `order`-th most weighted distinct color as a pseudo color.
///
/// The red channel holds `round(weight * 255)`, green and blue are zero. Opaque black
/// marks a rank with no color behind it.
#[derive(Clone, Copy, Debug)]
pub struct WeightSampler<'a> {
    source: &'a RgbaImage,
    order: usize,
}

impl<'a> WeightSampler<'a> {
    /// Create a sampler reading from `source` returning the weight at rank `order`.
    pub fn new(source: &'a RgbaImage, order: usize) -> Self {
        Self { source, order }
    }

    /// The rank this sampler returns.
    pub fn order(&self) -> usize {
        self.order
    }
}

impl<'a> Sampler<'a> for WeightSampler<'a> {
    fn source(&self) -> &'a RgbaImage {
        self.source
    }

    fn sample(&self, x: f32, y: f32) -> Rgba8 {
        match RankedCorners::collect(self.source, x, y).select(self.order) {
            Some((_, weight)) => Rgba8::opaque(u8_from_f32(weight * 255.0), 0, 0),
            None => Rgba8::BLACK,
        }
    }
}
