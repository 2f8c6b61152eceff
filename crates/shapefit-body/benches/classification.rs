//! Benchmarks for measurement extraction and shape classification.

use criterion::{black_box, criterion_group, criterion_main, Criterion};

use shapefit_body::{classify, extract_measurements, BodyAnalyzer};
use shapefit_core::{Keypoint, Landmark, LandmarkSet};

fn create_test_pose() -> LandmarkSet {
    Keypoint::ALL
        .iter()
        .enumerate()
        .map(|(i, k)| {
            let side = if k.name().starts_with("left") { 1.0 } else { -1.0 };
            Landmark::at(*k, 300.0 + side * 45.0, 40.0 * i as f64, 0.9)
        })
        .collect()
}

fn benchmark_extraction(c: &mut Criterion) {
    let pose = create_test_pose();

    c.bench_function("extract_measurements", |b| {
        b.iter(|| extract_measurements(black_box(&pose)))
    });
}

fn benchmark_classification(c: &mut Criterion) {
    let measurements = extract_measurements(&create_test_pose());

    c.bench_function("classify", |b| b.iter(|| classify(black_box(&measurements))));
}

fn benchmark_full_analysis(c: &mut Criterion) {
    let pose = create_test_pose();
    let analyzer = BodyAnalyzer::default();

    c.bench_function("analyze", |b| b.iter(|| analyzer.analyze(black_box(&pose))));
}

criterion_group!(
    benches,
    benchmark_extraction,
    benchmark_classification,
    benchmark_full_analysis
);
criterion_main!(benches);
