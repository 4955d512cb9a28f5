use criterion::{black_box, criterion_group, criterion_main, Criterion};
use image::{Rgba, RgbaImage};
use palette::Srgb;
use pick_colors::{ColorConverter, ContrastAnalyzer, Coordinate, PaletteExtractor, Session};

fn benchmark_conversion(c: &mut Criterion) {
    let converter = ColorConverter::new();
    c.bench_function("rgb_to_color_data", |b| {
        b.iter(|| converter.rgb_to_color_data(black_box(99), black_box(102), black_box(241)))
    });
    c.bench_function("hsl_to_rgb", |b| {
        b.iter(|| converter.hsl_to_rgb(black_box(239.0), black_box(84.0), black_box(67.0)))
    });

    let analyzer = ContrastAnalyzer::new();
    c.bench_function("contrast_analyze", |b| {
        b.iter(|| analyzer.analyze(black_box(Srgb::new(99, 102, 241))))
    });
}

fn benchmark_sampling(c: &mut Criterion) {
    let image = RgbaImage::from_fn(4000, 3000, |x, y| {
        Rgba([(x % 256) as u8, (y % 256) as u8, 90, 255])
    });
    let extractor = PaletteExtractor::new();
    c.bench_function("extract_palette_12mp", |b| {
        b.iter(|| extractor.extract(black_box(&image)))
    });

    let session = Session::new()
        .load_image(image)
        .expect("benchmark image is non-empty");
    c.bench_function("session_pick", |b| {
        b.iter(|| session.pick(black_box(Coordinate::new(1234.5, 987.0))))
    });
}

criterion_group!(benches, benchmark_conversion, benchmark_sampling);
criterion_main!(benches);
