use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use knapga::{
    evolution::{EvolutionLauncher, EvolutionOptions, Reporter},
    instance::Instance,
};

struct SilentReporter;

impl Reporter for SilentReporter {
    fn generation(&self, _generation: usize, _best_fitness: u64) {}

    fn finished(&self, _best_fitness: u64) {}
}

fn instance(size: usize) -> Instance {
    let items: Vec<(u64, u64)> = (0..size as u64)
        .map(|i| (1 + (i * 37) % 97, 1 + (i * 53) % 41))
        .collect();
    let capacity = items.iter().map(|(_, weight)| weight).sum::<u64>() / 3;
    Instance::new(items, capacity)
}

fn bench_thread_counts(c: &mut Criterion) {
    let launcher = EvolutionLauncher::new(SilentReporter);

    let mut group = c.benchmark_group("evolve");
    for size in [100, 1000] {
        let instance = instance(size);
        for threads in [1, 2, 4, 8] {
            let options = EvolutionOptions::new(20, threads);
            group.bench_with_input(
                BenchmarkId::new(format!("population_{}", size), threads),
                &options,
                |b, options| {
                    b.iter(|| {
                        let result = launcher.evolve(black_box(&instance), black_box(options));
                        assert!(result.is_ok());
                    })
                },
            );
        }
    }
    group.finish();
}

criterion_group!(benches, bench_thread_counts);
criterion_main!(benches);
