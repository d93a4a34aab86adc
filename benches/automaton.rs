//! Benchmarks for the automaton generation pass.

use criterion::{BenchmarkId, Criterion, black_box, criterion_group, criterion_main};

use rps_automaton::{
    compute::Automaton,
    schema::{AutomatonConfig, NeighborMode, Pattern, RuleConfig, RuleVariant, Seed},
};

fn seed() -> Seed {
    Seed {
        pattern: Pattern::Random {
            density: 0.6,
            seed: 42,
        },
    }
}

fn bench_tick(c: &mut Criterion) {
    let mut group = c.benchmark_group("tick");

    for size in [64, 128, 256, 512] {
        let config = AutomatonConfig {
            width: size,
            height: size,
            random_seed: Some(1),
            ..Default::default()
        };

        let mut automaton = Automaton::from_seed(config, &seed()).unwrap();

        group.bench_with_input(
            BenchmarkId::from_parameter(format!("{}x{}", size, size)),
            &size,
            |b, _| {
                b.iter(|| {
                    black_box(&mut automaton).tick();
                });
            },
        );
    }

    group.finish();
}

fn bench_modes(c: &mut Criterion) {
    let mut group = c.benchmark_group("modes");

    for mode in [
        NeighborMode::Uniform,
        NeighborMode::FixedCycle,
        NeighborMode::PrecomputedCycle,
    ] {
        for variant in [RuleVariant::Classic, RuleVariant::Waves] {
            let config = AutomatonConfig {
                width: 256,
                height: 256,
                neighbor_mode: mode,
                rule: RuleConfig {
                    variant,
                    initial_level: 30,
                    edible_level: 10,
                    young_banquet: false,
                },
                random_seed: Some(1),
                ..Default::default()
            };

            let mut automaton = Automaton::from_seed(config, &seed()).unwrap();

            group.bench_with_input(
                BenchmarkId::from_parameter(format!("{}_{}", mode, variant)),
                &(mode, variant),
                |b, _| {
                    b.iter(|| {
                        black_box(&mut automaton).tick();
                    });
                },
            );
        }
    }

    group.finish();
}

criterion_group!(benches, bench_tick, bench_modes);
criterion_main!(benches);
