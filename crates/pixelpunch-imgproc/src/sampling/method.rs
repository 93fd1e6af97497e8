use std::borrow::Cow;

use pixelpunch_image::{Palette, Rgba8, RgbaImage};

use super::{
    BestFitMode, BicubicBestFitSampler, BicubicSampler, BilinearDominanceSampler,
    BilinearSampler, NearestSampler, Sampler, WeightSampler,
};

/// The resampling kernels selectable at runtime.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum SamplingMethod {
    /// Nearest neighbour
    #[default]
    Nearest,
    /// Smooth bilinear
    Bilinear,
    /// Smooth bicubic
    Bicubic,
    /// Most weighted color among the bilinear corners
    FirstBilinear,
    /// Second most weighted color among the bilinear corners
    SecondBilinear,
    /// Bicubic snapped to the 2x2 center pixels
    BestFitNarrow,
    /// Bicubic snapped to the 4x4 neighbourhood
    BestFitWide,
    /// Bicubic snapped to a palette
    BestFitAny,
    /// Weight of the most weighted bilinear color
    FirstWeight,
    /// Weight of the second most weighted bilinear color
    SecondWeight,
}

impl SamplingMethod {
    /// All methods, in the order a picker lists them.
    pub const ALL: [SamplingMethod; 10] = [
        SamplingMethod::Nearest,
        SamplingMethod::Bilinear,
        SamplingMethod::Bicubic,
        SamplingMethod::FirstBilinear,
        SamplingMethod::SecondBilinear,
        SamplingMethod::BestFitNarrow,
        SamplingMethod::BestFitWide,
        SamplingMethod::BestFitAny,
        SamplingMethod::FirstWeight,
        SamplingMethod::SecondWeight,
    ];

    /// Human readable name of the method.
    pub fn name(&self) -> &'static str {
        match self {
            SamplingMethod::Nearest => "Nearest",
            SamplingMethod::Bilinear => "Smooth Bilinear",
            SamplingMethod::Bicubic => "Smooth Bicubic",
            SamplingMethod::FirstBilinear => "Major Bilinear",
            SamplingMethod::SecondBilinear => "Second Bilinear",
            SamplingMethod::BestFitNarrow => "Best Fit Narrow",
            SamplingMethod::BestFitWide => "Best Fit Wide",
            SamplingMethod::BestFitAny => "Best Fit Any",
            SamplingMethod::FirstWeight => "Major Weight",
            SamplingMethod::SecondWeight => "Second Weight",
        }
    }

    /// Build the sampler for this method reading from `source`.
    ///
    /// `palette` is only used by [`SamplingMethod::BestFitAny`]; when it is `None` the
    /// distinct colors of `source` are used instead.
    ///
    /// # Example
    ///
    /// ```
    /// use pixelpunch_image::{Rgba8, RgbaImage};
    /// use pixelpunch_imgproc::sampling::{Sampler, SamplingMethod};
    ///
    /// let image = RgbaImage::from_size_val([2, 2].into(), Rgba8::opaque(9, 9, 9), false).unwrap();
    /// let sampler = SamplingMethod::FirstBilinear.sampler(&image, None);
    ///
    /// assert_eq!(sampler.sample(0.5, 0.5), Rgba8::opaque(9, 9, 9));
    /// ```
    pub fn sampler<'a>(self, source: &'a RgbaImage, palette: Option<&'a Palette>) -> AnySampler<'a> {
        match self {
            SamplingMethod::Nearest => AnySampler::Nearest(NearestSampler::new(source)),
            SamplingMethod::Bilinear => AnySampler::Bilinear(BilinearSampler::new(source)),
            SamplingMethod::Bicubic => AnySampler::Bicubic(BicubicSampler::new(source)),
            SamplingMethod::FirstBilinear => {
                AnySampler::Dominance(BilinearDominanceSampler::new(source, 0))
            }
            SamplingMethod::SecondBilinear => {
                AnySampler::Dominance(BilinearDominanceSampler::new(source, 1))
            }
            SamplingMethod::BestFitNarrow => {
                AnySampler::BestFit(BicubicBestFitSampler::new(source, false))
            }
            SamplingMethod::BestFitWide => {
                AnySampler::BestFit(BicubicBestFitSampler::new(source, true))
            }
            SamplingMethod::BestFitAny => {
                let palette = match palette {
                    Some(palette) => Cow::Borrowed(palette),
                    None => Cow::Owned(Palette::from_image(source)),
                };
                AnySampler::BestFit(BicubicBestFitSampler::with_mode(
                    source,
                    BestFitMode::Palette(palette),
                ))
            }
            SamplingMethod::FirstWeight => AnySampler::Weight(WeightSampler::new(source, 0)),
            SamplingMethod::SecondWeight => AnySampler::Weight(WeightSampler::new(source, 1)),
        }
    }
}

impl std::fmt::Display for SamplingMethod {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// A sampler chosen at runtime.
#[derive(Clone, Debug)]
pub enum AnySampler<'a> {
    /// Nearest neighbour
    Nearest(NearestSampler<'a>),
    /// Smooth bilinear
    Bilinear(BilinearSampler<'a>),
    /// Smooth bicubic
    Bicubic(BicubicSampler<'a>),
    /// Bilinear dominance
    Dominance(BilinearDominanceSampler<'a>),
    /// Bicubic best fit
    BestFit(BicubicBestFitSampler<'a>),
    /// Bilinear weight
    Weight(WeightSampler<'a>),
}

impl<'a> Sampler<'a> for AnySampler<'a> {
    fn source(&self) -> &'a RgbaImage {
        match self {
            AnySampler::Nearest(s) => s.source(),
            AnySampler::Bilinear(s) => s.source(),
            AnySampler::Bicubic(s) => s.source(),
            AnySampler::Dominance(s) => s.source(),
            AnySampler::BestFit(s) => s.source(),
            AnySampler::Weight(s) => s.source(),
        }
    }

    fn sample(&self, x: f32, y: f32) -> Rgba8 {
        match self {
            AnySampler::Nearest(s) => s.sample(x, y),
            AnySampler::Bilinear(s) => s.sample(x, y),
            AnySampler::Bicubic(s) => s.sample(x, y),
            AnySampler::Dominance(s) => s.sample(x, y),
            AnySampler::BestFit(s) => s.sample(x, y),
            AnySampler::Weight(s) => s.sample(x, y),
        }
    }
}
