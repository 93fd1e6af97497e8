use pixelpunch_image::{Rgba8, RgbaImage};

use crate::{
    error::{GeometryError, TransformError},
    geometry::TransformMapping,
    homography::{inverse3x3, mul3x3, transform_point, unit_square_to_quad},
    parallel::{par_fill_pixels, ExecutionStrategy},
    sampling::Sampler,
};

/// Compute the matrix mapping target pixels to source pixels.
///
/// Both mappings are taken in their local frame: the target quad relative to its bounds
/// and the source quad relative to the source image.
///
/// # Errors
///
/// Returns a [`GeometryError`] if either quad is degenerate or the target quad cannot
/// be inverted.
pub fn target_to_source(
    src_mapping: &TransformMapping,
    dst_mapping: &TransformMapping,
) -> Result<[f64; 9], GeometryError> {
    let uv_to_target = unit_square_to_quad(dst_mapping.local_quad())?;
    let target_to_uv = inverse3x3(&uv_to_target)?;
    let uv_to_source = unit_square_to_quad(src_mapping.local_quad())?;
    Ok(mul3x3(&uv_to_source, &target_to_uv))
}

/// Fill `dst` by mapping every pixel through `m` into the sampler's source.
///
/// Pixels landing outside the source are set to [`Rgba8::TRANSPARENT`].
///
/// * `sampler` - The kernel reading the source image.
/// * `m` - The 3x3 matrix target -> source, see [`target_to_source`].
/// * `dst` - The output image.
/// * `strategy` - How the pixel loop is scheduled.
pub fn warp_projective<'img, S: Sampler<'img> + ?Sized>(
    sampler: &S,
    m: &[f64; 9],
    dst: &mut RgbaImage,
    strategy: ExecutionStrategy,
) -> Result<(), TransformError> {
    let source = sampler.source();
    let (src_cols, src_rows) = (source.cols() as f64, source.rows() as f64);

    par_fill_pixels(dst, strategy, |x, y| {
        let (u, v) = transform_point(x as f64, y as f64, m);
        if u >= 0.0 && v >= 0.0 && u < src_cols && v < src_rows {
            sampler.sample(u as f32, v as f32)
        } else {
            Rgba8::TRANSPARENT
        }
    })?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        geometry::{Point, Rect},
        sampling::{BilinearSampler, NearestSampler},
    };
    use pixelpunch_image::ImageSize;

    fn gradient(width: usize, height: usize) -> Result<RgbaImage, TransformError> {
        let px = (0..width * height)
            .map(|i| Rgba8::opaque((i % width) as u8 * 10, (i / width) as u8 * 10, 0))
            .collect::<Vec<_>>();
        Ok(RgbaImage::from_pixels(
            ImageSize { width, height },
            &px,
            false,
        )?)
    }

    #[test]
    fn same_rectangle_is_identity() -> Result<(), TransformError> {
        let src = gradient(5, 3)?;
        let mapping = TransformMapping::from_rect(Rect::from_size(src.size()));
        let m = target_to_source(&mapping, &mapping)?;

        let mut dst = RgbaImage::from_size_val(src.size(), Rgba8::TRANSPARENT, false)?;
        warp_projective(
            &NearestSampler::new(&src),
            &m,
            &mut dst,
            ExecutionStrategy::Serial,
        )?;

        assert_eq!(dst.as_slice(), src.as_slice());
        Ok(())
    }

    #[test]
    fn translated_rectangle_keeps_pixels() -> Result<(), TransformError> {
        // bounds are dropped, only the local quad matters
        let src = gradient(4, 4)?;
        let src_mapping = TransformMapping::from_rect(Rect::from_size(src.size()));
        let dst_mapping = TransformMapping::from_rect(Rect::new(10.0, 20.0, 14.0, 24.0));
        let m = target_to_source(&src_mapping, &dst_mapping)?;

        let mut dst = RgbaImage::from_size_val(src.size(), Rgba8::TRANSPARENT, false)?;
        warp_projective(
            &BilinearSampler::new(&src),
            &m,
            &mut dst,
            ExecutionStrategy::ParallelRows,
        )?;

        assert_eq!(dst.as_slice(), src.as_slice());
        Ok(())
    }

    #[test]
    fn downscale_by_half() -> Result<(), TransformError> {
        let src = gradient(4, 4)?;
        let src_mapping = TransformMapping::from_rect(Rect::from_size(src.size()));
        let dst_mapping = TransformMapping::from_rect(Rect::new(0.0, 0.0, 2.0, 2.0));
        let m = target_to_source(&src_mapping, &dst_mapping)?;

        let mut dst = RgbaImage::from_size_val([2, 2].into(), Rgba8::TRANSPARENT, false)?;
        warp_projective(
            &NearestSampler::new(&src),
            &m,
            &mut dst,
            ExecutionStrategy::Serial,
        )?;

        assert_eq!(dst.get(0, 0), src.get(0, 0));
        assert_eq!(dst.get(1, 0), src.get(2, 0));
        assert_eq!(dst.get(0, 1), src.get(0, 2));
        assert_eq!(dst.get(1, 1), src.get(2, 2));
        Ok(())
    }

    #[test]
    fn outside_the_source_is_transparent() -> Result<(), TransformError> {
        let src = gradient(2, 2)?;
        // the source covers only the left half of the target
        let m = [1.0, 0.0, 0.0, 0.0, 1.0, 0.0, 0.0, 0.0, 1.0];

        let mut dst = RgbaImage::from_size_val([4, 2].into(), Rgba8::BLACK, false)?;
        warp_projective(
            &NearestSampler::new(&src),
            &m,
            &mut dst,
            ExecutionStrategy::Serial,
        )?;

        assert_eq!(dst.get(1, 1), src.get(1, 1));
        assert_eq!(dst.get(2, 0), Rgba8::TRANSPARENT);
        assert_eq!(dst.get(3, 1), Rgba8::TRANSPARENT);
        Ok(())
    }

    #[test]
    fn degenerate_target_is_rejected() -> Result<(), GeometryError> {
        let src_mapping = TransformMapping::from_rect(Rect::new(0.0, 0.0, 4.0, 4.0));
        let collapsed = TransformMapping::from_rect(Rect::new(0.0, 0.0, 4.0, 0.0));
        assert_eq!(
            target_to_source(&src_mapping, &collapsed),
            Err(GeometryError::SingularMatrix)
        );

        let collinear = TransformMapping::from_points([
            Point::new(0.0, 0.0),
            Point::new(4.0, 0.0),
            Point::new(4.0, 2.0),
            Point::new(4.0, 4.0),
        ])?;
        assert!(matches!(
            target_to_source(&src_mapping, &collinear),
            Err(GeometryError::DegenerateQuad(_))
        ));
        Ok(())
    }
}
