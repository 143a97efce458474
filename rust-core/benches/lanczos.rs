use criterion::{black_box, criterion_group, criterion_main, Criterion};
use mooring_filter::filters::low_pass_weights;
use mooring_filter::LanczosFilter;
use std::f64::consts::PI;

fn bench_weights(c: &mut Criterion) {
    c.bench_function("low_pass_weights 242", |b| {
        b.iter(|| low_pass_weights(black_box(242), black_box(1.0 / 35.0)))
    });
}

fn bench_year_of_hourly_data(c: &mut Criterion) {
    let filter = LanczosFilter::standard().unwrap();
    let series: Vec<f64> = (0..8760)
        .map(|i| {
            let t = i as f64;
            (2.0 * PI * t / 12.42).sin() + 0.3 * (2.0 * PI * t / 240.0).cos()
        })
        .collect();

    c.bench_function("lanczos 8760 h", |b| {
        b.iter(|| filter.apply(black_box(&series), 1.0 / 24.0))
    });
}

criterion_group!(benches, bench_weights, bench_year_of_hourly_data);
criterion_main!(benches);
