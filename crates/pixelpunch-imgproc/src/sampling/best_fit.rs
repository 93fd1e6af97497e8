use std::borrow::Cow;

use pixelpunch_image::{Palette, Rgba8, RgbaImage};

use super::{
    bicubic::{bicubic_rgb, rgb_planes, u8_from_unit},
    neighborhood4x4, Sampler,
};

/// Where [`BicubicBestFitSampler`] looks for candidate colors.
#[derive(Clone, Debug, PartialEq)]
pub enum BestFitMode<'a> {
    /// Any color of a fixed palette, scanned in order.
    Palette(Cow<'a, Palette>),
    /// The 16 pixels of the 4x4 neighbourhood.
    Local4x4,
    /// The 4 pixels enclosing the sample point.
    Local2x2,
}

/// Snaps the bicubic estimate to the closest candidate color.
///
/// Distance is the squared euclidean distance between the color channels. The first
/// candidate wins among equally close ones, so the output never contains a color that
/// is not in the palette or the local neighbourhood.
#[derive(Clone, Debug)]
pub struct BicubicBestFitSampler<'a> {
    source: &'a RgbaImage,
    mode: BestFitMode<'a>,
}

impl<'a> BicubicBestFitSampler<'a> {
    /// Create a sampler choosing among the local pixels, the 4x4 neighbourhood when
    /// `allow_outer_pixels` is set and the 2x2 center otherwise.
    pub fn new(source: &'a RgbaImage, allow_outer_pixels: bool) -> Self {
        let mode = if allow_outer_pixels {
            BestFitMode::Local4x4
        } else {
            BestFitMode::Local2x2
        };
        Self { source, mode }
    }

    /// Create a sampler choosing among the colors of `palette`.
    pub fn with_palette(source: &'a RgbaImage, palette: &'a Palette) -> Self {
        Self::with_mode(source, BestFitMode::Palette(Cow::Borrowed(palette)))
    }

    /// Create a sampler with an explicit candidate source.
    pub fn with_mode(source: &'a RgbaImage, mode: BestFitMode<'a>) -> Self {
        Self { source, mode }
    }

    /// The candidate source of this sampler.
    pub fn mode(&self) -> &BestFitMode<'a> {
        &self.mode
    }
}

fn closest_in_palette(palette: &Palette, target: Rgba8) -> Option<Rgba8> {
    let mut best: Option<(u32, Rgba8)> = None;
    for candidate in palette {
        let error = candidate.rgb_distance2(&target);
        if best.map_or(true, |(e, _)| error < e) {
            best = Some((error, *candidate));
        }
        if error == 0 {
            break;
        }
    }
    best.map(|(_, c)| c)
}

fn closest_in_neighborhood(
    p: &[[Rgba8; 4]; 4],
    planes: &[[[f64; 4]; 4]; 3],
    rgb: [f64; 3],
    range: std::ops::RangeInclusive<usize>,
) -> Rgba8 {
    let mut best = f64::MAX;
    let mut result = p[1][1];
    for i in range.clone() {
        for j in range.clone() {
            let error = (0..3)
                .map(|c| {
                    let d = planes[c][i][j] - rgb[c];
                    d * d
                })
                .sum::<f64>();
            if error < best {
                best = error;
                result = p[i][j];
            }
        }
    }
    result
}

impl<'a> Sampler<'a> for BicubicBestFitSampler<'a> {
    fn source(&self) -> &'a RgbaImage {
        self.source
    }

    fn sample(&self, x: f32, y: f32) -> Rgba8 {
        let (p, frac_x, frac_y) = neighborhood4x4(self.source, x, y);
        let planes = rgb_planes(&p);
        let rgb = bicubic_rgb(&planes, frac_x, frac_y);

        match &self.mode {
            BestFitMode::Palette(palette) => {
                // rounded like the bicubic sampler
                let estimate = Rgba8::opaque(
                    u8_from_unit(rgb[0]),
                    u8_from_unit(rgb[1]),
                    u8_from_unit(rgb[2]),
                );
                closest_in_palette(palette, estimate).unwrap_or(estimate)
            }
            BestFitMode::Local4x4 => closest_in_neighborhood(&p, &planes, rgb, 0..=3),
            BestFitMode::Local2x2 => closest_in_neighborhood(&p, &planes, rgb, 1..=2),
        }
    }
}
