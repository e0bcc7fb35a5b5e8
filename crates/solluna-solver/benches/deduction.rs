//! Benchmarks for deduction solving, hint lookup, and completion search.

use std::{hint, time::Duration};

use criterion::{
    BatchSize, BenchmarkId, Criterion, PlottingBackend, criterion_group, criterion_main,
};
use solluna_core::SymbolGrid;
use solluna_solver::{DeductionSolver, find_hint, search};

const PUZZLES: &[(&str, &str)] = &[
    (
        "final-cell-chain",
        "SSMSM. MMSMS. SSMSM. MMSMS. SSMSM. MMSMS.",
    ),
    (
        "quota-chain",
        "SSMS.. MMSM.. SSMS.. MMSM.. SSMS.. MMSM..",
    ),
    (
        "window-heavy",
        "S.S... ...... M.M... ...... S.S... ......",
    ),
];

fn parse(board: &str) -> SymbolGrid {
    board.parse().unwrap()
}

fn bench_solve(c: &mut Criterion) {
    let solver = DeductionSolver::with_all_techniques();
    let mut group = c.benchmark_group("solve");
    for &(name, board) in PUZZLES {
        let puzzle = parse(board);
        group.bench_with_input(BenchmarkId::from_parameter(name), &puzzle, |b, puzzle| {
            b.iter_batched(
                || puzzle.clone(),
                |mut grid| {
                    let result = solver.solve(&mut grid);
                    hint::black_box((grid, result))
                },
                BatchSize::SmallInput,
            );
        });
    }
    group.finish();
}

fn bench_find_hint(c: &mut Criterion) {
    let mut group = c.benchmark_group("find_hint");
    for &(name, board) in PUZZLES {
        let puzzle = parse(board);
        group.bench_with_input(BenchmarkId::from_parameter(name), &puzzle, |b, puzzle| {
            b.iter(|| find_hint(hint::black_box(puzzle)));
        });
    }
    group.finish();
}

fn bench_count_completions(c: &mut Criterion) {
    let mut group = c.benchmark_group("count_completions");
    for &(name, board) in PUZZLES {
        let puzzle = parse(board);
        group.bench_with_input(BenchmarkId::from_parameter(name), &puzzle, |b, puzzle| {
            b.iter(|| search::count_completions(hint::black_box(puzzle), 2));
        });
    }
    group.finish();
}

criterion_group! {
    name = benches;
    config = Criterion::default()
        .plotting_backend(PlottingBackend::Plotters)
        .measurement_time(Duration::from_secs(10));
    targets = bench_solve, bench_find_hint, bench_count_completions
}
criterion_main!(benches);
