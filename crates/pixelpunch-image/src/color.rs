/// An 8-bit per channel RGBA color.
///
/// # Examples
///
/// ```
/// use pixelpunch_image::Rgba8;
///
/// let red = Rgba8::opaque(255, 0, 0);
/// assert_eq!(red.a, 255);
/// assert_eq!(<[u8; 4]>::from(red), [255, 0, 0, 255]);
/// ```
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[repr(C)]
pub struct Rgba8 {
    /// Red channel
    pub r: u8,
    /// Green channel
    pub g: u8,
    /// Blue channel
    pub b: u8,
    /// Alpha channel, 255 is fully opaque
    pub a: u8,
}

impl Rgba8 {
    /// Fully transparent black, written wherever a transform has no source pixel.
    pub const TRANSPARENT: Rgba8 = Rgba8::new(0, 0, 0, 0);

    /// Opaque black.
    pub const BLACK: Rgba8 = Rgba8::new(0, 0, 0, 255);

    /// Create a color from its four channels.
    pub const fn new(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self { r, g, b, a }
    }

    /// Create a fully opaque color.
    pub const fn opaque(r: u8, g: u8, b: u8) -> Self {
        Self::new(r, g, b, 255)
    }

    /// Whether the color channels match, ignoring alpha.
    pub fn rgb_eq(&self, other: &Rgba8) -> bool {
        self.r == other.r && self.g == other.g && self.b == other.b
    }

    /// Squared euclidean distance between the color channels, ignoring alpha.
    pub fn rgb_distance2(&self, other: &Rgba8) -> u32 {
        let dr = self.r.abs_diff(other.r) as u32;
        let dg = self.g.abs_diff(other.g) as u32;
        let db = self.b.abs_diff(other.b) as u32;
        dr * dr + dg * dg + db * db
    }

    /// The color channels normalized to `[0, 1]`.
    pub fn rgb_f64(&self) -> [f64; 3] {
        [
            self.r as f64 / 255.0,
            self.g as f64 / 255.0,
            self.b as f64 / 255.0,
        ]
    }
}

impl From<[u8; 4]> for Rgba8 {
    fn from(c: [u8; 4]) -> Self {
        Self::new(c[0], c[1], c[2], c[3])
    }
}

impl From<Rgba8> for [u8; 4] {
    fn from(c: Rgba8) -> Self {
        [c.r, c.g, c.b, c.a]
    }
}

/// Convert a floating point channel in `[0, 255]` to a byte.
pub fn u8_from_f32(x: f32) -> u8 {
    x.round().clamp(0.0, 255.0) as u8
}

#[cfg(test)]
mod tests {
    use super::Rgba8;

    #[test]
    fn transparent_has_zero_alpha() {
        assert_eq!(Rgba8::TRANSPARENT.a, 0);
        assert_eq!(Rgba8::default(), Rgba8::TRANSPARENT);
        assert_eq!(Rgba8::BLACK, Rgba8::opaque(0, 0, 0));
    }

    #[test]
    fn rgb_compare_ignores_alpha() {
        let a = Rgba8::new(10, 20, 30, 0);
        let b = Rgba8::new(10, 20, 30, 255);
        assert!(a.rgb_eq(&b));
        assert_eq!(a.rgb_distance2(&b), 0);
        assert_eq!(a.rgb_distance2(&Rgba8::new(13, 24, 30, 0)), 25);
    }

    #[test]
    fn u8_from_f32_rounds_and_clamps() {
        assert_eq!(super::u8_from_f32(127.5), 128);
        assert_eq!(super::u8_from_f32(-3.0), 0);
        assert_eq!(super::u8_from_f32(300.0), 255);
    }

    #[cfg(feature = "serde")]
    #[test]
    fn serde_roundtrip() -> Result<(), serde_json::Error> {
        let c = Rgba8::new(1, 2, 3, 4);
        let json = serde_json::to_string(&c)?;
        assert_eq!(serde_json::from_str::<Rgba8>(&json)?, c);
        Ok(())
    }
}
