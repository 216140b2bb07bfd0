use binarize_core::{Algorithm, GrayImage, Parameters, TrSingh};
use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};

fn synthetic_page(width: usize, height: usize) -> GrayImage {
    let data = (0..width * height)
        .map(|i| {
            let (x, y) = (i % width, i / width);
            let shade = 160 + ((x + y) * 80 / (width + height)) as u8;
            if (x / 9) % 4 == 0 && (y / 13) % 3 != 0 {
                shade / 6
            } else {
                shade
            }
        })
        .collect();
    GrayImage {
        width,
        height,
        data,
    }
}

fn bench_trsingh(c: &mut Criterion) {
    let page = synthetic_page(512, 512);
    let mut alg = TrSingh::new();
    alg.initialize(page.view());
    let mut out = GrayImage::new(page.width, page.height);

    let mut group = c.benchmark_group("trsingh_512");
    for window in [15usize, 75, 201] {
        let params = Parameters::new().with("window", window);
        group.bench_with_input(BenchmarkId::from_parameter(window), &params, |b, params| {
            b.iter(|| alg.to_binary(black_box(&mut out), params))
        });
    }
    group.finish();

    c.bench_function("integral_512", |b| {
        b.iter(|| {
            let mut alg = TrSingh::new();
            alg.initialize(black_box(page.view()));
            alg
        })
    });
}

criterion_group!(benches, bench_trsingh);
criterion_main!(benches);
