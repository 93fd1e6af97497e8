use std::ops::{Deref, DerefMut};

use crate::{
    color::Rgba8,
    error::ImageError,
    image::{Image, ImageSize},
};

/// An 8-bit RGBA image that remembers whether its alpha channel is meaningful.
///
/// Pixels are always stored as four channels; `has_alpha` is carried along so that
/// transforms can hand the flag over to their outputs.
///
/// # Examples
///
/// ```
/// use pixelpunch_image::{ImageSize, Rgba8, RgbaImage};
///
/// let image = RgbaImage::from_size_val(
///     ImageSize { width: 2, height: 1 },
///     Rgba8::opaque(1, 2, 3),
///     false,
/// ).unwrap();
///
/// assert_eq!(image.get(1, 0), Rgba8::opaque(1, 2, 3));
/// assert!(!image.has_alpha());
/// ```
#[derive(Clone, Debug, PartialEq)]
pub struct RgbaImage {
    image: Image<u8, 4>,
    has_alpha: bool,
}

impl RgbaImage {
    /// Create an image from raw interleaved RGBA bytes.
    pub fn new(size: ImageSize, data: Vec<u8>, has_alpha: bool) -> Result<Self, ImageError> {
        Ok(Self {
            image: Image::new(size, data)?,
            has_alpha,
        })
    }

    /// Create an image filled with a single color.
    ///
    /// Fails with [`ImageError::ImageSizeOverflow`] before allocating if the size is too
    /// large to address.
    pub fn from_size_val(size: ImageSize, val: Rgba8, has_alpha: bool) -> Result<Self, ImageError> {
        let mut image = Image::<u8, 4>::from_size_val(size, 0)?;
        let val = <[u8; 4]>::from(val);
        for pixel in image.as_slice_mut().chunks_exact_mut(4) {
            pixel.copy_from_slice(&val);
        }
        Ok(Self { image, has_alpha })
    }

    /// Create an image from row-major pixels.
    pub fn from_pixels(
        size: ImageSize,
        pixels: &[Rgba8],
        has_alpha: bool,
    ) -> Result<Self, ImageError> {
        let data = pixels
            .iter()
            .flat_map(|&c| <[u8; 4]>::from(c))
            .collect::<Vec<u8>>();
        Self::new(size, data, has_alpha)
    }

    /// Whether the alpha channel carries information.
    pub fn has_alpha(&self) -> bool {
        self.has_alpha
    }

    /// Read the pixel at `(x, y)`.
    ///
    /// Callers clip coordinates beforehand; out of range coordinates panic.
    pub fn get(&self, x: usize, y: usize) -> Rgba8 {
        let p = self.image.pixel(x, y);
        Rgba8::new(p[0], p[1], p[2], p[3])
    }

    /// Read a pixel, clamping the coordinates to the nearest edge pixel.
    ///
    /// The image must not be empty.
    pub fn get_clamped(&self, x: i64, y: i64) -> Rgba8 {
        let x = x.clamp(0, self.width() as i64 - 1) as usize;
        let y = y.clamp(0, self.height() as i64 - 1) as usize;
        self.get(x, y)
    }

    /// Write the pixel at `(x, y)`.
    pub fn set(&mut self, x: usize, y: usize, val: Rgba8) -> Result<(), ImageError> {
        self.image.set_pixel(x, y, val.into())
    }

    /// Iterate the pixels in row-major order.
    pub fn pixels(&self) -> impl Iterator<Item = Rgba8> + '_ {
        self.image
            .as_slice()
            .chunks_exact(4)
            .map(|p| Rgba8::new(p[0], p[1], p[2], p[3]))
    }
}

impl Deref for RgbaImage {
    type Target = Image<u8, 4>;
    fn deref(&self) -> &Self::Target {
        &self.image
    }
}

impl DerefMut for RgbaImage {
    fn deref_mut(&mut self) -> &mut Self::Target {
        &mut self.image
    }
}

#[cfg(test)]
mod tests {
    use super::RgbaImage;
    use crate::{ImageError, ImageSize, Rgba8};

    #[test]
    fn rgba_image_get_set() -> Result<(), ImageError> {
        let mut image = RgbaImage::from_size_val(
            ImageSize {
                width: 3,
                height: 2,
            },
            Rgba8::TRANSPARENT,
            true,
        )?;
        image.set(2, 1, Rgba8::new(9, 8, 7, 6))?;
        assert_eq!(image.get(2, 1), Rgba8::new(9, 8, 7, 6));
        assert_eq!(image.get(0, 0), Rgba8::TRANSPARENT);
        assert!(image.has_alpha());
        assert!(image.set(3, 0, Rgba8::BLACK).is_err());

        Ok(())
    }

    #[test]
    fn rgba_image_clamped_reads() -> Result<(), ImageError> {
        let pixels = [
            Rgba8::opaque(1, 0, 0),
            Rgba8::opaque(2, 0, 0),
            Rgba8::opaque(3, 0, 0),
            Rgba8::opaque(4, 0, 0),
        ];
        let image = RgbaImage::from_pixels([2, 2].into(), &pixels, false)?;
        assert_eq!(image.get_clamped(-1, -5), pixels[0]);
        assert_eq!(image.get_clamped(2, 0), pixels[1]);
        assert_eq!(image.get_clamped(7, 7), pixels[3]);
        assert_eq!(image.pixels().collect::<Vec<_>>(), pixels);

        Ok(())
    }

    #[test]
    fn rgba_image_too_large() {
        let size = ImageSize {
            width: usize::MAX / 4,
            height: 2,
        };
        let res = RgbaImage::from_size_val(size, Rgba8::TRANSPARENT, true);
        assert_eq!(res, Err(ImageError::ImageSizeOverflow(usize::MAX / 4, 2)));
    }
}
