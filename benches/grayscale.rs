use criterion::{BenchmarkId, Criterion, black_box, criterion_group, criterion_main};
use qr_studio::utils::grayscale::{
    rgb_to_grayscale, rgb_to_grayscale_parallel, rgba_to_grayscale, rgba_to_grayscale_parallel,
    to_luma,
};

const SIZES: [(usize, usize); 3] = [(100, 100), (640, 480), (1920, 1080)];

fn bench_rgb(c: &mut Criterion) {
    let mut group = c.benchmark_group("rgb_to_grayscale");
    for (w, h) in SIZES {
        let image = vec![128u8; w * h * 3];
        let id = format!("{}x{}", w, h);
        group.bench_with_input(BenchmarkId::new("sequential", &id), &image, |b, image| {
            b.iter(|| rgb_to_grayscale(black_box(image), w, h))
        });
        group.bench_with_input(BenchmarkId::new("parallel", &id), &image, |b, image| {
            b.iter(|| rgb_to_grayscale_parallel(black_box(image), w, h))
        });
    }
    group.finish();
}

fn bench_rgba(c: &mut Criterion) {
    let image = vec![128u8; 640 * 480 * 4];
    c.bench_function("rgba_to_grayscale_640x480", |b| {
        b.iter(|| rgba_to_grayscale(black_box(&image), 640, 480))
    });
    c.bench_function("rgba_to_grayscale_parallel_640x480", |b| {
        b.iter(|| rgba_to_grayscale_parallel(black_box(&image), 640, 480))
    });
}

fn bench_to_luma(c: &mut Criterion) {
    // A 720p camera frame, the size frames usually arrive at
    let image = vec![200u8; 1280 * 720 * 4];
    c.bench_function("to_luma_rgba_1280x720", |b| {
        b.iter(|| to_luma(black_box(&image), 4, 1280, 720))
    });
}

criterion_group!(benches, bench_rgb, bench_rgba, bench_to_luma);
criterion_main!(benches);
