use criterion::{Criterion, black_box, criterion_group, criterion_main};
use kundli_core::{ALL_BODIES, Body, Ephemeris, MeanElementEngine, ObservationContext};
use kundli_time::UtcTime;

fn mean_element_bench(c: &mut Criterion) {
    let t = UtcTime::from_calendar(2024, 3, 20, 12, 0, 0).expect("valid time");
    let ctx = ObservationContext::from_coordinates(t, 12.97, 77.59).expect("valid location");
    let eng = MeanElementEngine::new();

    let mut group = c.benchmark_group("mean_element");
    group.bench_function("sun", |b| {
        b.iter(|| eng.apparent_position(Body::Sun, black_box(&ctx)))
    });
    group.bench_function("saturn", |b| {
        b.iter(|| eng.apparent_position(Body::Saturn, black_box(&ctx)))
    });
    group.bench_function("all_bodies", |b| {
        b.iter(|| {
            for body in ALL_BODIES {
                let _ = eng.apparent_position(body, black_box(&ctx));
            }
        })
    });
    group.finish();
}

criterion_group!(benches, mean_element_bench);
criterion_main!(benches);
