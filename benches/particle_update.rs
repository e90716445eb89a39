// Sprite Dust update throughput
//
// Measures one `update` over registries of different sizes, rebuilding the
// batches for every sample so particles never fade out mid-measurement.

use criterion::{black_box, criterion_group, criterion_main, BatchSize, BenchmarkId, Criterion};

use sprite_dust::{EmitConfig, HeadlessEngine, HeadlessSprite, ParticleSystem};

const BATCH_COUNTS: &[usize] = &[10, 100, 1000];
const PARTICLES_PER_BATCH: usize = 20;

fn populated_system(batches: usize) -> ParticleSystem<HeadlessEngine> {
    let mut dust = ParticleSystem::with_seed(HeadlessEngine::new(), 1);
    let burst = EmitConfig::default()
        .with_count(PARTICLES_PER_BATCH)
        .with_gravity(0.1);

    for _ in 0..batches {
        dust.create(&burst, || Ok(HeadlessSprite::new()), None)
            .expect("headless engine builds containers");
    }
    dust
}

fn bench_update(c: &mut Criterion) {
    let mut group = c.benchmark_group("particle_update");

    for &batches in BATCH_COUNTS {
        group.bench_with_input(BenchmarkId::from_parameter(batches), &batches, |b, &batches| {
            b.iter_batched(
                || populated_system(batches),
                |mut dust| black_box(dust.update()),
                BatchSize::SmallInput,
            );
        });
    }

    group.finish();
}

fn bench_create(c: &mut Criterion) {
    let burst = EmitConfig::default().with_count(PARTICLES_PER_BATCH);

    c.bench_function("particle_create", |b| {
        b.iter_batched(
            || ParticleSystem::with_seed(HeadlessEngine::new(), 2),
            |mut dust| {
                black_box(dust.create(&burst, || Ok(HeadlessSprite::new()), None).is_ok())
            },
            BatchSize::SmallInput,
        );
    });
}

criterion_group!(benches, bench_update, bench_create);
criterion_main!(benches);
