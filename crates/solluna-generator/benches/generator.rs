//! Benchmarks for level generation.
//!
//! This benchmark suite measures the two halves of level generation:
//! solution filling alone, and the full seed-to-level pipeline including
//! carving at every difficulty.
//!
//! # Benchmarks
//!
//! - **`generate_solution`**: Fills a complete board by randomized
//!   backtracking. Measures the solution stage in isolation.
//! - **`generate_level/<difficulty>`**: Runs `LevelGenerator` end to end,
//!   so the carving gates (uniqueness screens plus full deductive replay)
//!   dominate. One group per difficulty.
//!
//! # Test Data
//!
//! Uses three fixed seeds to ensure reproducibility while testing multiple
//! cases:
//!
//! - **`seed_0`**: `4f1e2d3c4b5a69788796a5b4c3d2e1f04f1e2d3c4b5a69788796a5b4c3d2e1f0`
//! - **`seed_1`**: `00112233445566778899aabbccddeeff00112233445566778899aabbccddeeff`
//! - **`seed_2`**: `deadbeefcafef00ddeadbeefcafef00ddeadbeefcafef00ddeadbeefcafef00d`
//!
//! Each seed produces a different level, allowing measurement across
//! various cases while maintaining reproducibility.
//!
//! # Running
//!
//! ```sh
//! cargo bench --bench generator
//! ```

use std::{hint, str::FromStr as _, time::Duration};

use criterion::{
    BatchSize, BenchmarkId, Criterion, PlottingBackend, criterion_group, criterion_main,
};
use rand::SeedableRng as _;
use rand_pcg::Pcg64;
use solluna_core::Difficulty;
use solluna_generator::{LevelGenerator, PuzzleSeed, SolutionGenerator};
use solluna_solver::DeductionSolver;

const SEEDS: [&str; 3] = [
    "4f1e2d3c4b5a69788796a5b4c3d2e1f04f1e2d3c4b5a69788796a5b4c3d2e1f0",
    "00112233445566778899aabbccddeeff00112233445566778899aabbccddeeff",
    "deadbeefcafef00ddeadbeefcafef00ddeadbeefcafef00ddeadbeefcafef00d",
];

fn bench_generate_solution(c: &mut Criterion) {
    let generator = SolutionGenerator::new();

    for (i, seed) in SEEDS.into_iter().enumerate() {
        let seed = PuzzleSeed::from_str(seed).unwrap();
        c.bench_with_input(
            BenchmarkId::new("generate_solution", format!("seed_{i}")),
            &seed,
            |b, seed| {
                b.iter_batched(
                    || Pcg64::from_seed(*hint::black_box(seed).as_bytes()),
                    |mut rng| generator.generate(&mut rng),
                    BatchSize::SmallInput,
                );
            },
        );
    }
}

fn bench_generate_level(c: &mut Criterion) {
    let solver = DeductionSolver::with_all_techniques();
    let generator = LevelGenerator::new(&solver);

    for difficulty in Difficulty::ALL {
        for (i, seed) in SEEDS.into_iter().enumerate() {
            let seed = PuzzleSeed::from_str(seed).unwrap();
            c.bench_with_input(
                BenchmarkId::new(format!("generate_level/{difficulty}"), format!("seed_{i}")),
                &seed,
                |b, seed| {
                    b.iter_batched(
                        || hint::black_box(*seed),
                        |seed| generator.generate_with_seed(seed, difficulty),
                        BatchSize::SmallInput,
                    );
                },
            );
        }
    }
}

criterion_group!(
    name = benches;
    config =
        Criterion::default()
            .plotting_backend(PlottingBackend::Plotters)
            .measurement_time(Duration::from_secs(12));
    targets =
        bench_generate_solution,
        bench_generate_level
);
criterion_main!(benches);
