use std::collections::HashSet;

use crate::{color::Rgba8, rgba::RgbaImage};

/// An ordered list of candidate colors.
///
/// Order matters to consumers that scan for the closest match: the first
/// entry wins among equally distant candidates.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Palette(Vec<Rgba8>);

impl Palette {
    /// Create a palette from a list of colors, keeping their order.
    pub fn new(colors: Vec<Rgba8>) -> Self {
        Self(colors)
    }

    /// Collect the distinct colors of an image in row-major first-seen order.
    ///
    /// # Examples
    ///
    /// ```
    /// use pixelpunch_image::{Palette, Rgba8, RgbaImage};
    ///
    /// let a = Rgba8::opaque(255, 0, 0);
    /// let b = Rgba8::opaque(0, 0, 255);
    /// let image = RgbaImage::from_pixels([3, 1].into(), &[a, b, a], false).unwrap();
    ///
    /// assert_eq!(Palette::from_image(&image).as_slice(), &[a, b]);
    /// ```
    pub fn from_image(image: &RgbaImage) -> Self {
        let mut seen = HashSet::new();
        let colors = image.pixels().filter(|c| seen.insert(*c)).collect();
        Self(colors)
    }

    /// Number of colors in the palette.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Whether the palette has no colors.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Iterate the colors in order.
    pub fn iter(&self) -> std::slice::Iter<'_, Rgba8> {
        self.0.iter()
    }

    /// The colors as a slice.
    pub fn as_slice(&self) -> &[Rgba8] {
        &self.0
    }
}

impl From<Vec<Rgba8>> for Palette {
    fn from(colors: Vec<Rgba8>) -> Self {
        Self(colors)
    }
}

impl FromIterator<Rgba8> for Palette {
    fn from_iter<I: IntoIterator<Item = Rgba8>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}

impl<'a> IntoIterator for &'a Palette {
    type Item = &'a Rgba8;
    type IntoIter = std::slice::Iter<'a, Rgba8>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}
