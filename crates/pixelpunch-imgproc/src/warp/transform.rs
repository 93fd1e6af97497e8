use std::borrow::Cow;

use pixelpunch_image::{Rgba8, RgbaImage};

use super::{bilinear::warp_bilinear, projective::target_to_source, projective::warp_projective};
use crate::{
    error::TransformError,
    geometry::{Rect, TransformMapping},
    homography::unit_square_to_quad,
    parallel::ExecutionStrategy,
    sampling::Sampler,
};

/// How the target quad is filled from the source image.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum TransformMethod {
    /// Leave the source untouched.
    #[default]
    Identity,
    /// Perspective mapping, straight lines stay straight.
    Projective,
    /// Bilinear blend of the quad corners, edges are subdivided evenly.
    Bilinear,
}

impl TransformMethod {
    /// All methods, in the order a picker lists them.
    pub const ALL: [TransformMethod; 3] = [
        TransformMethod::Identity,
        TransformMethod::Projective,
        TransformMethod::Bilinear,
    ];

    /// Human readable name of the method.
    pub fn name(&self) -> &'static str {
        match self {
            TransformMethod::Identity => "None",
            TransformMethod::Projective => "Projective",
            TransformMethod::Bilinear => "Bilinear",
        }
    }
}

impl std::fmt::Display for TransformMethod {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// Render the sampler's source into the quad of `target`.
///
/// Equivalent to [`transform_with`] using [`ExecutionStrategy::default`].
///
/// # Errors
///
/// See [`transform_with`].
pub fn transform<'img, S: Sampler<'img> + ?Sized>(
    sampler: &S,
    target: &TransformMapping,
    method: TransformMethod,
) -> Result<Cow<'img, RgbaImage>, TransformError> {
    transform_with(sampler, target, method, ExecutionStrategy::default())
}

/// Render the sampler's source into the quad of `target`.
///
/// With [`TransformMethod::Identity`] the source is returned borrowed, without a copy;
/// the borrow is on the source image, so it may outlive the sampler.
/// Otherwise a new image the size of the target bounds is rendered; it carries the
/// alpha flag of the source. Pixels outside the quad are transparent.
///
/// # Arguments
///
/// * `sampler` - The kernel reading the source image.
/// * `target` - The quad to render into, with its bounds.
/// * `method` - The rasterizer to use.
/// * `strategy` - How the pixel loop is scheduled.
///
/// # Errors
///
/// Returns [`TransformError::Geometry`] if the target or source quad is degenerate, and
/// [`TransformError::Image`] if the target bounds are too large to allocate. The geometry
/// is validated before the output is allocated.
///
/// # Example
///
/// ```
/// use pixelpunch_image::{Rgba8, RgbaImage};
/// use pixelpunch_imgproc::geometry::{Point, TransformMapping};
/// use pixelpunch_imgproc::parallel::ExecutionStrategy;
/// use pixelpunch_imgproc::sampling::NearestSampler;
/// use pixelpunch_imgproc::warp::{transform_with, TransformMethod};
///
/// let source = RgbaImage::from_size_val([8, 8].into(), Rgba8::opaque(255, 0, 0), false).unwrap();
/// let sampler = NearestSampler::new(&source);
///
/// let target = TransformMapping::from_points([
///     Point::new(2.0, 0.0),
///     Point::new(14.0, 2.0),
///     Point::new(12.0, 10.0),
///     Point::new(0.0, 8.0),
/// ]).unwrap();
///
/// let out = transform_with(&sampler, &target, TransformMethod::Projective, ExecutionStrategy::Serial).unwrap();
///
/// assert_eq!(out.width(), 14);
/// assert_eq!(out.height(), 10);
/// assert_eq!(out.get(7, 5), Rgba8::opaque(255, 0, 0));
/// ```
pub fn transform_with<'img, S: Sampler<'img> + ?Sized>(
    sampler: &S,
    target: &TransformMapping,
    method: TransformMethod,
    strategy: ExecutionStrategy,
) -> Result<Cow<'img, RgbaImage>, TransformError> {
    let source = sampler.source();
    let src_mapping = TransformMapping::from_rect(Rect::from_size(source.size()));

    match method {
        TransformMethod::Identity => {
            log::debug!("identity transform of {} image", source.size());
            Ok(Cow::Borrowed(source))
        }
        TransformMethod::Projective => {
            let m = target_to_source(&src_mapping, target)
                .inspect_err(|e| log::warn!("rejected target quad: {e}"))?;
            let mut dst = allocate_target(source, target, method, strategy)?;
            warp_projective(sampler, &m, &mut dst, strategy)?;
            Ok(Cow::Owned(dst))
        }
        TransformMethod::Bilinear => {
            let uv_to_source = unit_square_to_quad(src_mapping.local_quad())
                .inspect_err(|e| log::warn!("rejected source quad: {e}"))?;
            let mut dst = allocate_target(source, target, method, strategy)?;
            warp_bilinear(
                sampler,
                &uv_to_source,
                target.local_quad(),
                &mut dst,
                strategy,
            )?;
            Ok(Cow::Owned(dst))
        }
    }
}

/// A transparent image covering the bounds of `target`, with the alpha flag of `source`.
fn allocate_target(
    source: &RgbaImage,
    target: &TransformMapping,
    method: TransformMethod,
    strategy: ExecutionStrategy,
) -> Result<RgbaImage, TransformError> {
    let size = target.bounds().size();
    log::debug!(
        "{method} transform {} -> {size} ({strategy:?})",
        source.size()
    );

    let dst = RgbaImage::from_size_val(size, Rgba8::TRANSPARENT, source.has_alpha())
        .inspect_err(|e| log::warn!("rejected target bounds: {e}"))?;
    Ok(dst)
}
