//! Example demonstrating level generation.
//!
//! This example shows how to:
//! - Create a `LevelGenerator` with a `DeductionSolver`
//! - Generate a random or seeded level
//! - Display the puzzle, solution, seed, and solver stats
//! - Filter levels by technique usage counts
//!
//! # Usage
//!
//! ```sh
//! cargo run --example generate_level
//! ```
//!
//! Carve for a specific difficulty:
//!
//! ```sh
//! cargo run --example generate_level -- --difficulty very-hard
//! ```
//!
//! Reproduce a level from its seed:
//!
//! ```sh
//! cargo run --example generate_level -- --seed <64 hex digits>
//! ```
//!
//! Filter for levels by selecting the one that maximizes the total count of
//! the specified techniques within the sampling budget:
//!
//! ```sh
//! cargo run --example generate_level -- --technique "triple break"
//! ```
//!
//! Control the sampling budget (default: 1000):
//!
//! ```sh
//! cargo run --example generate_level -- --technique "triple break" --max-tries 5000
//! ```
//!
//! Multiple techniques can be required (case-insensitive):
//!
//! ```sh
//! cargo run --example generate_level -- --technique "triple break" --technique "symbol quota"
//! ```

use std::process;

use clap::Parser;
use rayon::prelude::*;
use solluna_core::{Difficulty, GRID_SIZE, SymbolGrid};
use solluna_generator::{GeneratedLevel, LevelGenerator, PuzzleSeed};
use solluna_solver::{DeductionSolver, DeductionSolverStats};

#[derive(Debug, Parser)]
#[command(author, version, about)]
struct Args {
    /// Difficulty to carve for.
    #[arg(long, value_name = "DIFFICULTY", default_value = "medium")]
    difficulty: Difficulty,

    /// Seed to reproduce (64 hex digits). A random seed is drawn if omitted.
    #[arg(long, value_name = "SEED")]
    seed: Option<PuzzleSeed>,

    /// Technique name to require in stats (case-insensitive). Repeatable.
    #[arg(short, long = "technique", value_name = "TECHNIQUE", num_args = 1..)]
    techniques: Vec<String>,

    /// Maximum levels to sample when filtering.
    #[arg(long, value_name = "COUNT", default_value_t = 1_000)]
    max_tries: usize,
}

fn main() {
    env_logger::init();

    let args = Args::parse();
    let solver = DeductionSolver::with_all_techniques();
    let generator = LevelGenerator::new(&solver);
    let available = solver
        .techniques()
        .iter()
        .map(|technique| technique.name())
        .collect::<Vec<_>>();

    if !args.techniques.is_empty() {
        let unknown = args
            .techniques
            .iter()
            .filter(|name| !technique_name_matches(name, &available))
            .cloned()
            .collect::<Vec<_>>();
        if !unknown.is_empty() {
            eprintln!("Unknown technique(s): {}", unknown.join(", "));
            eprintln!("Available techniques:");
            for name in &available {
                eprintln!("  {name}");
            }
            process::exit(2);
        }
    }

    if args.techniques.is_empty() {
        let level = match args.seed {
            Some(seed) => generator.generate_with_seed(seed, args.difficulty),
            None => generator.generate(args.difficulty),
        };
        let stats = solve_stats(&solver, &level);
        print_level(&level, &solver, &stats, None, &[]);
        return;
    }

    if args.seed.is_some() {
        eprintln!("--seed cannot be combined with --technique sampling.");
        process::exit(1);
    }

    let max_tries = args.max_tries;
    if max_tries == 0 {
        eprintln!("--max-tries must be at least 1.");
        process::exit(1);
    }

    let best = (0..max_tries)
        .into_par_iter()
        .map(|_| {
            let level = generator.generate(args.difficulty);
            let stats = solve_stats(&solver, &level);
            let score = techniques_score(&solver, &stats, &args.techniques);
            (level, stats, score)
        })
        .max_by(|a, b| a.2.cmp(&b.2));

    if let Some((level, stats, score)) = best {
        print_level(
            &level,
            &solver,
            &stats,
            Some((max_tries, score)),
            &args.techniques,
        );
        return;
    }

    eprintln!("No level matched the requested techniques.");
    process::exit(1);
}

fn technique_name_matches(name: &str, available: &[&'static str]) -> bool {
    available
        .iter()
        .any(|available| available.eq_ignore_ascii_case(name))
}

fn solve_stats(solver: &DeductionSolver, level: &GeneratedLevel) -> DeductionSolverStats {
    let mut grid = level.puzzle.clone();
    let (is_solved, stats) = solver.solve(&mut grid).unwrap();
    assert!(is_solved);
    stats
}

fn techniques_score(
    solver: &DeductionSolver,
    stats: &DeductionSolverStats,
    techniques: &[String],
) -> usize {
    techniques
        .iter()
        .map(|name| technique_count(solver, stats, name))
        .sum()
}

fn technique_count(solver: &DeductionSolver, stats: &DeductionSolverStats, name: &str) -> usize {
    let Some(i) = solver
        .techniques()
        .iter()
        .position(|technique| technique.name().eq_ignore_ascii_case(name))
    else {
        return 0;
    };
    stats.applications()[i]
}

fn print_level(
    level: &GeneratedLevel,
    solver: &DeductionSolver,
    stats: &DeductionSolverStats,
    selection: Option<(usize, usize)>,
    techniques: &[String],
) {
    println!("Seed:");
    println!("  {}", level.seed);
    println!();
    println!("Difficulty:");
    println!("  {} (generated by {})", level.difficulty, level.method);
    println!();

    if let Some((max_tries, best_score)) = selection {
        println!("Selection:");
        println!("  Techniques: {}", techniques.join(", "));
        println!("  Max tries: {max_tries}");
        println!("  Best score: {best_score}");
        println!();
    }

    println!("Puzzle ({} clues removed):", level.puzzle.empty_count());
    print_grid(&level.puzzle);
    println!();
    println!("Solution:");
    print_grid(&level.solution);
    println!();

    println!("Stats:");
    for (i, count) in stats.applications().iter().enumerate() {
        let name = solver.techniques()[i].name();
        println!("  {name}: {count}");
    }
    println!("  total: {}", stats.total_steps());
}

fn print_grid(grid: &SymbolGrid) {
    let text = grid.to_string();
    for row in 0..GRID_SIZE {
        println!("  {}", &text[row * GRID_SIZE..(row + 1) * GRID_SIZE]);
    }
}
