use argh::FromArgs;

use pixelpunch_image::{Rgba8, RgbaImage};
use pixelpunch_imgproc::{
    geometry::{Point, Quad, TransformMapping},
    sampling::SamplingMethod,
    warp::{transform, TransformMethod},
};

/// Warps a small sprite onto a quad and prints the result as text
#[derive(Debug, FromArgs)]
struct Args {
    /// transform method: none, projective or bilinear
    #[argh(
        option,
        short = 't',
        default = "TransformMethod::Projective",
        from_str_fn(to_transform_method)
    )]
    transform: TransformMethod,

    /// sampling method, e.g. nearest, bicubic, first_bilinear, best_fit_any
    #[argh(
        option,
        short = 's',
        default = "SamplingMethod::FirstBilinear",
        from_str_fn(to_sampling_method)
    )]
    sampling: SamplingMethod,

    /// target corners as x0,y0,x1,y1,x2,y2,x3,y3 clockwise from the top-left
    #[argh(
        option,
        short = 'q',
        default = "default_quad()",
        from_str_fn(to_quad)
    )]
    quad: Quad,
}

fn to_transform_method(value: &str) -> Result<TransformMethod, String> {
    match value {
        "none" => Ok(TransformMethod::Identity),
        "projective" => Ok(TransformMethod::Projective),
        "bilinear" => Ok(TransformMethod::Bilinear),
        _ => Err("Unsupported TransformMethod".to_string()),
    }
}

fn to_sampling_method(value: &str) -> Result<SamplingMethod, String> {
    match value {
        "nearest" => Ok(SamplingMethod::Nearest),
        "bilinear" => Ok(SamplingMethod::Bilinear),
        "bicubic" => Ok(SamplingMethod::Bicubic),
        "first_bilinear" => Ok(SamplingMethod::FirstBilinear),
        "second_bilinear" => Ok(SamplingMethod::SecondBilinear),
        "best_fit_narrow" => Ok(SamplingMethod::BestFitNarrow),
        "best_fit_wide" => Ok(SamplingMethod::BestFitWide),
        "best_fit_any" => Ok(SamplingMethod::BestFitAny),
        "first_weight" => Ok(SamplingMethod::FirstWeight),
        "second_weight" => Ok(SamplingMethod::SecondWeight),
        _ => Err("Unsupported SamplingMethod".to_string()),
    }
}

fn to_quad(value: &str) -> Result<Quad, String> {
    let v = value
        .split(',')
        .map(|s| s.trim().parse::<f64>().map_err(|e| e.to_string()))
        .collect::<Result<Vec<_>, _>>()?;
    if v.len() != 8 {
        return Err(format!("expected 8 coordinates, got {}", v.len()));
    }
    Ok([
        Point::new(v[0], v[1]),
        Point::new(v[2], v[3]),
        Point::new(v[4], v[5]),
        Point::new(v[6], v[7]),
    ])
}

fn default_quad() -> Quad {
    [
        Point::new(12.0, 0.0),
        Point::new(36.0, 2.0),
        Point::new(44.0, 20.0),
        Point::new(0.0, 18.0),
    ]
}

const SPRITE: [&str; 8] = [
    "..####..", //
    ".#oooo#.", //
    "#oo##oo#", //
    "#o#..#o#", //
    "#o#..#o#", //
    "#oo##oo#", //
    ".#oooo#.", //
    "..####..", //
];

fn color_of(c: char) -> Rgba8 {
    match c {
        '#' => Rgba8::opaque(20, 20, 60),
        'o' => Rgba8::opaque(240, 190, 30),
        _ => Rgba8::new(255, 255, 255, 0),
    }
}

fn char_of(c: Rgba8) -> char {
    match (c.r, c.g, c.b, c.a) {
        (_, _, _, 0) => ' ',
        (20, 20, 60, _) => '#',
        (240, 190, 30, _) => 'o',
        (255, 255, 255, _) => '.',
        _ => '+',
    }
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::init();
    let args: Args = argh::from_env();

    let pixels = SPRITE
        .iter()
        .flat_map(|row| row.chars().map(color_of))
        .collect::<Vec<_>>();
    let sprite = RgbaImage::from_pixels([8, 8].into(), &pixels, true)?;

    let sampler = args.sampling.sampler(&sprite, None);
    let target = TransformMapping::from_points(args.quad)?;
    let warped = transform(&sampler, &target, args.transform)?;

    println!(
        "{} / {}: {}x{}",
        args.transform,
        args.sampling,
        warped.width(),
        warped.height()
    );
    for y in 0..warped.height() {
        let line = (0..warped.width())
            .map(|x| char_of(warped.get(x, y)))
            .collect::<String>();
        println!("{line}");
    }

    Ok(())
}
