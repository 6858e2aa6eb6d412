use chrono::{Duration, TimeZone, Utc};
use criterion::{criterion_group, criterion_main, black_box, Criterion};
use socialsync_chart::{render, ChartOptions, TimeSeriesPoint};

fn build_series(n: usize) -> Vec<TimeSeriesPoint> {
    let t0 = Utc.with_ymd_and_hms(2020, 1, 1, 0, 0, 0).unwrap();
    (0..n)
        .map(|i| {
            // slow growth with weekly wobble
            let v = 10_000.0 + i as f64 * 12.0 + (i as f64 * 0.9).sin() * 300.0;
            TimeSeriesPoint::new(t0 + Duration::hours(i as i64), v)
        })
        .collect()
}

fn bench_render(c: &mut Criterion) {
    let mut group = c.benchmark_group("render_line_chart");
    for &n in &[100usize, 10_000usize] {
        let pts = build_series(n);
        let opts = ChartOptions::default();
        group.bench_function(format!("model_{n}"), |b| {
            b.iter(|| black_box(render(&pts, &opts)));
        });
        group.bench_function(format!("svg_{n}"), |b| {
            let model = render(&pts, &opts);
            b.iter(|| black_box(model.to_svg()));
        });
    }
    group.finish();
}

criterion_group!(benches, bench_render);
criterion_main!(benches);
