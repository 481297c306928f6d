use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion};
use cyclotron_sim::*;
use std::hint::black_box;

const DT: f64 = 1.0 / 60.0;

fn bench_tick(c: &mut Criterion) {
    let mut group = c.benchmark_group("integrator_tick");
    for &ticks in &[100usize, 1000] {
        group.bench_with_input(BenchmarkId::new("proton", ticks), &ticks, |b, &ticks| {
            b.iter(|| {
                let mut integrator =
                    StepIntegrator::new(SimulationParameters::default()).unwrap();
                integrator.start();
                for _ in 0..ticks {
                    let _ = black_box(integrator.tick(black_box(DT)));
                }
                black_box(integrator.half_turns())
            })
        });
    }
    group.finish();
}

fn bench_derive(c: &mut Criterion) {
    c.bench_function("derive", |b| {
        b.iter(|| {
            for species in ParticleSpecies::ALL {
                let _ = black_box(derive(species, black_box(1.0), black_box(0.5)));
            }
        })
    });
}

fn bench_sweep(c: &mut Criterion) {
    let mut group = c.benchmark_group("sweep");
    let cases: Vec<SweepCase> = (1..=20)
        .map(|i| {
            SweepCase::new(SimulationParameters::new(
                ParticleSpecies::Proton,
                i as f64 * 0.1,
            ))
        })
        .collect();
    group.bench_function("twenty_fields", |b| {
        b.iter(|| black_box(run_sweep(&cases, 20_000)))
    });
    group.finish();
}

criterion_group!(benches, bench_tick, bench_derive, bench_sweep);
criterion_main!(benches);
