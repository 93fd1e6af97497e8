use std::hint::black_box;

use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion};

use pixelpunch_image::{Rgba8, RgbaImage};
use pixelpunch_imgproc::{
    geometry::{Point, TransformMapping},
    parallel::ExecutionStrategy,
    sampling::SamplingMethod,
    warp::{transform_with, TransformMethod},
};

fn checkerboard(width: usize, height: usize) -> RgbaImage {
    let px = (0..width * height)
        .map(|i| {
            if (i % width / 4 + i / width / 4) % 2 == 0 {
                Rgba8::opaque(230, 200, 40)
            } else {
                Rgba8::opaque(20, 40, 90)
            }
        })
        .collect::<Vec<_>>();
    RgbaImage::from_pixels([width, height].into(), &px, false).unwrap()
}

// a trapezoid twice the size of the source
fn target(width: usize, height: usize) -> TransformMapping {
    let (w, h) = (2.0 * width as f64, 2.0 * height as f64);
    TransformMapping::from_points([
        Point::new(0.2 * w, 0.0),
        Point::new(0.8 * w, 0.1 * h),
        Point::new(w, h),
        Point::new(0.0, 0.9 * h),
    ])
    .unwrap()
}

fn bench_warp(c: &mut Criterion, name: &str, method: TransformMethod) {
    let mut group = c.benchmark_group(name);

    for (width, height) in [(64, 56), (128, 112), (256, 224)].iter() {
        group.throughput(criterion::Throughput::Elements((4 * width * height) as u64));

        let parameter_string = format!("{}x{}", width, height);

        let image = checkerboard(*width, *height);
        let mapping = target(*width, *height);

        for sampling in [
            SamplingMethod::Nearest,
            SamplingMethod::Bilinear,
            SamplingMethod::Bicubic,
            SamplingMethod::FirstBilinear,
            SamplingMethod::BestFitWide,
        ] {
            let sampler = sampling.sampler(&image, None);
            group.bench_with_input(
                BenchmarkId::new(format!("{sampling:?}"), &parameter_string),
                &mapping,
                |b, mapping| {
                    b.iter(|| {
                        transform_with(
                            black_box(&sampler),
                            black_box(mapping),
                            method,
                            ExecutionStrategy::ParallelRows,
                        )
                    })
                },
            );
        }

        let sampler = SamplingMethod::Nearest.sampler(&image, None);
        group.bench_with_input(
            BenchmarkId::new("Nearest_serial", &parameter_string),
            &mapping,
            |b, mapping| {
                b.iter(|| {
                    transform_with(
                        black_box(&sampler),
                        black_box(mapping),
                        method,
                        ExecutionStrategy::Serial,
                    )
                })
            },
        );
    }
    group.finish();
}

fn bench_warp_projective(c: &mut Criterion) {
    bench_warp(c, "WarpProjective", TransformMethod::Projective);
}

fn bench_warp_bilinear(c: &mut Criterion) {
    bench_warp(c, "WarpBilinear", TransformMethod::Bilinear);
}

criterion_group!(benches, bench_warp_projective, bench_warp_bilinear);
criterion_main!(benches);
