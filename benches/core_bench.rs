use bezier_curve_editor::{BezierCurve, ControlPointStore, CoordinateMapper, DEFAULT_SAMPLE_COUNT};
use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion};
use glam::DVec2;
use std::hint::black_box;

fn build_control_points(count: usize) -> Vec<DVec2> {
    (0..count)
        .map(|i| {
            let x = (i as f64) * 0.75 - 10.0;
            let y = ((i * 7) % 13) as f64 - 6.0;
            DVec2::new(x, y)
        })
        .collect()
}

fn bench_curve_sampling(c: &mut Criterion) {
    let mut group = c.benchmark_group("curve_sampling");

    for &point_count in &[2usize, 4, 10, 25] {
        let curve = BezierCurve::new(&build_control_points(point_count))
            .expect("mindestens zwei Kontrollpunkte");

        group.bench_with_input(
            BenchmarkId::new("sample_default", point_count),
            &curve,
            |b, curve| {
                b.iter(|| {
                    let samples = curve.sample(black_box(DEFAULT_SAMPLE_COUNT));
                    black_box(samples.len())
                })
            },
        );
    }

    group.finish();
}

fn bench_hit_test(c: &mut Criterion) {
    let mut group = c.benchmark_group("hit_test");
    let mapper = CoordinateMapper::new(600.0, 600.0, 20.0);

    for &point_count in &[10usize, 1_000] {
        let mut store = ControlPointStore::new();
        for point in build_control_points(point_count) {
            store.add(point);
        }
        // Letzter Punkt: ungünstigster Fall für die lineare Suche
        let target = mapper.to_pixel_truncated(build_control_points(point_count)[point_count - 1]);

        group.bench_with_input(
            BenchmarkId::new("last_point", point_count),
            &store,
            |b, store| b.iter(|| black_box(store.hit_test(black_box(target), &mapper, 10.0))),
        );
    }

    group.finish();
}

criterion_group!(core_benches, bench_curve_sampling, bench_hit_test);
criterion_main!(core_benches);
