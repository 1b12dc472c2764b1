//! Example demonstrating puzzle generation.
//!
//! Generates one puzzle and prints its seed, the carved board, and the
//! solution it was carved from.
//!
//! # Usage
//!
//! ```sh
//! cargo run --example generate
//! ```
//!
//! Pick a board size and difficulty tier:
//!
//! ```sh
//! cargo run --example generate -- --size 5 --difficulty hard
//! ```
//!
//! Reproduce a specific puzzle from its seed:
//!
//! ```sh
//! cargo run --example generate -- --seed 424242
//! ```

use std::process;

use clap::{Parser, ValueEnum};
use varioku_core::{BoardSize, Difficulty};
use varioku_generator::PuzzleGenerator;

#[derive(Debug, Clone, Copy, ValueEnum)]
enum DifficultyArg {
    Easy,
    Medium,
    Hard,
}

impl From<DifficultyArg> for Difficulty {
    fn from(arg: DifficultyArg) -> Self {
        match arg {
            DifficultyArg::Easy => Difficulty::Easy,
            DifficultyArg::Medium => Difficulty::Medium,
            DifficultyArg::Hard => Difficulty::Hard,
        }
    }
}

#[derive(Debug, Parser)]
#[command(author, version, about)]
struct Args {
    /// Board edge length (5, 7, or 9).
    #[arg(long, value_name = "SIZE", default_value_t = 9)]
    size: u8,

    /// Difficulty tier.
    #[arg(long, value_name = "TIER", default_value = "medium")]
    difficulty: DifficultyArg,

    /// Seed to reproduce a specific puzzle; random if omitted.
    #[arg(long, value_name = "SEED")]
    seed: Option<u64>,
}

fn main() {
    env_logger::init();
    let args = Args::parse();

    let size = match BoardSize::try_from(args.size) {
        Ok(size) => size,
        Err(err) => {
            eprintln!("{err}");
            process::exit(2);
        }
    };
    let difficulty = Difficulty::from(args.difficulty);

    let generator = PuzzleGenerator::new();
    let puzzle = match args.seed {
        Some(seed) => generator.generate_with_seed(size, difficulty, seed),
        None => generator.generate(size, difficulty),
    };

    println!("Seed:");
    println!("  {}", puzzle.seed);
    println!();
    println!("Board ({size}, {difficulty}, {} givens):", puzzle.board.fixed_count());
    println!("{}", indent(&puzzle.board.to_string()));
    println!();
    println!("Solution:");
    println!("{}", indent(&puzzle.solution.to_string()));
}

fn indent(grid: &str) -> String {
    grid.lines()
        .map(|line| format!("  {line}"))
        .collect::<Vec<_>>()
        .join("\n")
}
