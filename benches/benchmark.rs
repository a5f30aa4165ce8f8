use criterion::{
    criterion_group, criterion_main, AxisScale, BenchmarkId, Criterion, PlotConfiguration,
};
use rand::{thread_rng, Rng};

use glam::DVec2;
use orbits::prelude::*;

fn random_bodies(i: usize) -> Registry {
    let mut rng = thread_rng();
    let mut gen = |range| rng.gen_range(range);

    (0..i)
        .map(|_| {
            let position = DVec2::new(gen(-1e11..1e11), gen(-1e11..1e11));
            let velocity = DVec2::new(gen(-3e4..3e4), gen(-3e4..3e4));

            Body::new(position, velocity, gen(1e20..1e27)).expect("masses are positive")
        })
        .collect()
}

fn criterion_benchmark(c: &mut Criterion) {
    let mut group = c.benchmark_group("Orbits");
    group
        .plot_config(PlotConfiguration::default().summary_scale(AxisScale::Logarithmic))
        .warm_up_time(std::time::Duration::from_secs(1))
        .sample_size(50);

    let interaction = Acceleration::default();

    for i in (1..=10).map(|i| 2_usize.pow(i)) {
        let registry = random_bodies(i);

        #[cfg(feature = "parallel")]
        {
            let mut cm = parallel::BruteForce;
            group.bench_with_input(
                BenchmarkId::new("parallel::BruteForce", i),
                &registry,
                |b, input| b.iter(|| cm.compute(input.bodies(), interaction)),
            );
        }

        {
            let mut cm = sequential::BruteForce;
            group.bench_with_input(
                BenchmarkId::new("sequential::BruteForce", i),
                &registry,
                |b, input| b.iter(|| cm.compute(input.bodies(), interaction)),
            );

            let mut cm = sequential::BruteForcePairs;
            group.bench_with_input(
                BenchmarkId::new("sequential::BruteForcePairs", i),
                &registry,
                |b, input| b.iter(|| cm.compute(input.bodies(), interaction)),
            );
        }

        {
            let mut engine = Engine::new(Config::new());
            group.bench_with_input(BenchmarkId::new("Engine::step", i), &registry, |b, input| {
                b.iter_batched_ref(
                    || input.clone(),
                    |registry| engine.step(registry, units::SECONDS_PER_MONTH),
                    criterion::BatchSize::SmallInput,
                )
            });
        }
    }

    group.finish();
}

criterion_group!(benches, criterion_benchmark);
criterion_main!(benches);
