use std::borrow::Cow;
use std::collections::HashSet;

use pixelpunch_image::{Palette, Rgba8, RgbaImage};
use pixelpunch_imgproc::{
    error::{GeometryError, TransformError},
    geometry::{Point, Rect, TransformMapping},
    homography::unit_square_to_quad,
    sampling::{NearestSampler, Sampler, SamplingMethod},
    warp::{transform, TransformMethod},
};

fn distinct(width: usize, height: usize) -> Result<RgbaImage, TransformError> {
    let px = (0..width * height)
        .map(|i| Rgba8::opaque((i * 16) as u8, 255 - (i * 16) as u8, (i % 3) as u8 * 100))
        .collect::<Vec<_>>();
    Ok(RgbaImage::from_pixels([width, height].into(), &px, false)?)
}

fn kite() -> Result<TransformMapping, GeometryError> {
    TransformMapping::from_points([
        Point::new(3.0, 0.0),
        Point::new(13.0, 2.0),
        Point::new(11.0, 12.0),
        Point::new(0.0, 9.0),
    ])
}

#[test]
fn test_identity_returns_the_source() -> Result<(), TransformError> {
    let src = distinct(3, 5)?;
    for method in SamplingMethod::ALL {
        let sampler = method.sampler(&src, None);
        let out = transform(&sampler, &kite()?, TransformMethod::Identity)?;
        assert!(matches!(out, Cow::Borrowed(_)));
        assert_eq!(out.as_slice(), src.as_slice());
    }
    Ok(())
}

#[test]
fn test_two_by_two_projective_nearest() -> Result<(), TransformError> {
    let src = RgbaImage::from_pixels(
        [2, 2].into(),
        &[
            Rgba8::new(255, 0, 0, 255),
            Rgba8::new(0, 255, 0, 128),
            Rgba8::new(0, 0, 255, 64),
            Rgba8::new(255, 255, 255, 0),
        ],
        true,
    )?;
    let target = TransformMapping::from_rect(Rect::new(0.0, 0.0, 2.0, 2.0));

    let out = transform(&NearestSampler::new(&src), &target, TransformMethod::Projective)?;
    assert_eq!(out.into_owned(), src);
    Ok(())
}

#[test]
fn test_rectangle_mapping_is_affine() -> Result<(), GeometryError> {
    let m = unit_square_to_quad(&Rect::new(3.0, 1.0, 10.0, 5.0).corners())?;
    assert_eq!(&m[6..], &[0.0, 0.0, 1.0]);
    Ok(())
}

#[test]
fn test_upscale_keeps_pixel_blocks() -> Result<(), TransformError> {
    let src = distinct(4, 4)?;
    let target = TransformMapping::from_rect(Rect::new(0.0, 0.0, 8.0, 8.0));
    let sampler = SamplingMethod::FirstBilinear.sampler(&src, None);

    for method in [TransformMethod::Projective, TransformMethod::Bilinear] {
        let out = transform(&sampler, &target, method)?;
        for y in 0..8 {
            for x in 0..8 {
                assert_eq!(out.get(x, y), src.get(x / 2, y / 2), "{method} ({x}, {y})");
            }
        }
    }
    Ok(())
}

#[test]
fn test_dominance_never_invents_colors() -> Result<(), TransformError> {
    let src = distinct(4, 4)?;
    let mut allowed = src.pixels().collect::<HashSet<_>>();
    allowed.insert(Rgba8::TRANSPARENT);

    for method in [TransformMethod::Projective, TransformMethod::Bilinear] {
        for sampling in [
            SamplingMethod::Nearest,
            SamplingMethod::FirstBilinear,
            SamplingMethod::SecondBilinear,
            SamplingMethod::BestFitNarrow,
            SamplingMethod::BestFitWide,
        ] {
            let sampler = sampling.sampler(&src, None);
            let out = transform(&sampler, &kite()?, method)?;
            assert!(
                out.pixels().all(|c| allowed.contains(&c)),
                "{method} {sampling}"
            );
        }
    }
    Ok(())
}

#[test]
fn test_best_fit_any_stays_in_palette() -> Result<(), TransformError> {
    let src = distinct(4, 4)?;
    let palette = Palette::new(vec![
        Rgba8::opaque(0, 0, 0),
        Rgba8::opaque(128, 128, 128),
        Rgba8::opaque(255, 255, 255),
    ]);
    let sampler = SamplingMethod::BestFitAny.sampler(&src, Some(&palette));

    let out = transform(&sampler, &kite()?, TransformMethod::Bilinear)?;
    let mut inside = 0;
    for c in out.pixels() {
        if c != Rgba8::TRANSPARENT {
            assert!(palette.iter().any(|p| *p == c), "{c:?}");
            inside += 1;
        }
    }
    assert!(inside > 0);
    Ok(())
}

#[test]
fn test_weight_output_is_a_pseudo_color() -> Result<(), TransformError> {
    let src = distinct(4, 4)?;
    for sampling in [SamplingMethod::FirstWeight, SamplingMethod::SecondWeight] {
        let sampler = sampling.sampler(&src, None);
        let out = transform(&sampler, &kite()?, TransformMethod::Projective)?;
        for c in out.pixels() {
            assert_eq!((c.g, c.b), (0, 0));
            assert!(c.a == 255 || c == Rgba8::TRANSPARENT);
        }
    }
    Ok(())
}

#[test]
fn test_bicubic_output_is_opaque_inside() -> Result<(), TransformError> {
    let src = RgbaImage::from_size_val([4, 4].into(), Rgba8::new(10, 20, 30, 0), true)?;
    let sampler = SamplingMethod::Bicubic.sampler(&src, None);
    let out = transform(&sampler, &kite()?, TransformMethod::Projective)?;

    assert!(out.has_alpha());
    assert_eq!(out.get(6, 6), Rgba8::opaque(10, 20, 30));
    assert_eq!(out.get(0, 0), Rgba8::TRANSPARENT);
    Ok(())
}

#[test]
fn test_degenerate_quads_are_rejected() -> Result<(), TransformError> {
    let src = distinct(4, 4)?;
    let sampler = NearestSampler::new(&src);

    let collinear = TransformMapping::from_points([
        Point::new(0.0, 0.0),
        Point::new(8.0, 0.0),
        Point::new(8.0, 4.0),
        Point::new(8.0, 8.0),
    ])?;
    let res = transform(&sampler, &collinear, TransformMethod::Projective);
    assert!(matches!(
        res,
        Err(TransformError::Geometry(GeometryError::DegenerateQuad(_)))
    ));

    let nan = TransformMapping::from_points([
        Point::new(0.0, 0.0),
        Point::new(f64::NAN, 0.0),
        Point::new(4.0, 4.0),
        Point::new(0.0, 4.0),
    ]);
    assert!(matches!(nan, Err(GeometryError::NonFinitePoint(_, _))));

    Ok(())
}

#[test]
fn test_bilinear_of_a_collinear_quad_has_no_nan_pixels() -> Result<(), TransformError> {
    let src = distinct(4, 4)?;
    let sampler = NearestSampler::new(&src);
    let collinear = TransformMapping::from_points([
        Point::new(0.0, 0.0),
        Point::new(8.0, 0.0),
        Point::new(8.0, 4.0),
        Point::new(8.0, 8.0),
    ])?;

    // no homography of the target is needed, every pixel is either sampled or transparent
    let out = transform(&sampler, &collinear, TransformMethod::Bilinear)?;
    assert_eq!((out.width(), out.height()), (8, 8));
    let allowed = src.pixels().chain([Rgba8::TRANSPARENT]).collect::<HashSet<_>>();
    assert!(out.pixels().all(|c| allowed.contains(&c)));
    Ok(())
}

#[test]
fn test_samplers_share_the_source() -> Result<(), TransformError> {
    let src = distinct(2, 2)?;
    for method in SamplingMethod::ALL {
        assert!(std::ptr::eq(method.sampler(&src, None).source(), &src));
    }
    Ok(())
}
