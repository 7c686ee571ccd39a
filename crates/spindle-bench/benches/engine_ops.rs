//! Criterion benchmarks for frame execution and rendering.

use criterion::{black_box, criterion_group, criterion_main, Criterion};
use spindle_bench::{reference_profile, stress_profile};
use spindle_engine::Engine;
use spindle_render::Renderer;

/// Benchmark: one 4096-step frame on the reference 64×64 lattice.
fn bench_run_frame_reference(c: &mut Criterion) {
    let mut engine = Engine::new(reference_profile(42)).unwrap();

    c.bench_function("run_frame_64x64_4096", |b| {
        b.iter(|| {
            let report = engine.run_frame(4096);
            black_box(report.metrics.accepted);
        });
    });
}

/// Benchmark: one 10 000-step frame on the stress 256×256 lattice.
fn bench_run_frame_stress(c: &mut Criterion) {
    let mut engine = Engine::new(stress_profile(42)).unwrap();

    c.bench_function("run_frame_256x256_10000", |b| {
        b.iter(|| {
            let report = engine.run_frame(10_000);
            black_box(report.metrics.accepted);
        });
    });
}

/// Benchmark: full raster rebuild of the stress lattice at 2px/cell.
fn bench_draw_all_stress(c: &mut Criterion) {
    let engine = Engine::new(stress_profile(42)).unwrap();
    let mut renderer = Renderer::new(512, engine.size()).unwrap();

    c.bench_function("draw_all_256x256_512px", |b| {
        b.iter(|| {
            renderer.draw_all(engine.lattice());
            black_box(renderer.as_rgba().len());
        });
    });
}

criterion_group!(
    benches,
    bench_run_frame_reference,
    bench_run_frame_stress,
    bench_draw_all_stress
);
criterion_main!(benches);
