//! Example solving one puzzle with a chosen search strategy.
//!
//! Prints the start and goal grids, the outcome, the elapsed time, the final
//! open-list and closed-set sizes, the run statistics and, on request, the
//! path found.
//!
//! # Usage
//!
//! ```sh
//! cargo run --release --example solve -- --strategy misplaced --solvable --show-path
//! ```
//!
//! Solve a specific grid (digits, `_` for the blank):
//!
//! ```sh
//! cargo run --release --example solve -- --start "283 164 7_5" --strategy breadth-first
//! ```
//!
//! Depth-first search is unbounded; cap it with an expansion budget:
//!
//! ```sh
//! cargo run --release --example solve -- --strategy depth-first --max-expansions 50000
//! ```
//!
//! Set `RUST_LOG=octile_solver=debug` to see progress while a search runs.

use std::{process, time::Instant};

use clap::{Parser, ValueEnum};
use octile_core::Grid;
use octile_generator::{PuzzleGenerator, PuzzleSeed};
use octile_solver::{
    BoxedSearchStrategy, Search, SearchOutcome, SearchReport, SearchRun, SolverError,
    heuristic::{MisplacedTiles, RowColumnDelta},
    strategy::{BreadthFirst, DepthFirst, HeuristicOrdered},
};

#[derive(Debug, Clone, Copy, ValueEnum)]
enum StrategyKind {
    BreadthFirst,
    DepthFirst,
    Misplaced,
    RowColumnDelta,
}

impl StrategyKind {
    fn build(self) -> BoxedSearchStrategy {
        match self {
            Self::BreadthFirst => Box::new(BreadthFirst::new()),
            Self::DepthFirst => Box::new(DepthFirst::new()),
            Self::Misplaced => Box::new(HeuristicOrdered::new(MisplacedTiles::new())),
            Self::RowColumnDelta => Box::new(HeuristicOrdered::new(RowColumnDelta::new())),
        }
    }
}

#[derive(Debug, Parser)]
#[command(author, version, about)]
struct Args {
    /// Search strategy to run.
    #[arg(long, value_name = "STRATEGY", default_value = "misplaced")]
    strategy: StrategyKind,

    /// Start grid in compact form, e.g. "283 164 7_5". Generated if omitted.
    #[arg(long, value_name = "GRID", conflicts_with_all = ["seed", "scramble", "solvable"])]
    start: Option<String>,

    /// Goal grid in compact form.
    #[arg(long, value_name = "GRID", default_value = "123 8_4 765")]
    goal: String,

    /// Seed for the generated start grid (64 hex digits).
    #[arg(long, value_name = "HEX")]
    seed: Option<PuzzleSeed>,

    /// Walk this many random slides away from the goal instead of shuffling.
    #[arg(long, value_name = "MOVES", conflicts_with = "solvable")]
    scramble: Option<usize>,

    /// Re-shuffle until the start grid can reach the goal.
    #[arg(long)]
    solvable: bool,

    /// Stop after this many expansions.
    #[arg(long, value_name = "N")]
    max_expansions: Option<usize>,

    /// Print every grid on the path found.
    #[arg(long)]
    show_path: bool,
}

fn main() {
    better_panic::install();
    env_logger::init();

    let args = Args::parse();
    if let Err(err) = run(&args) {
        eprintln!("error: {err}");
        process::exit(1);
    }
}

fn run(args: &Args) -> Result<(), SolverError> {
    let goal: Grid = args.goal.parse()?;
    let initial = start_grid(args, goal)?;

    println!("Start:");
    print!("{initial}");
    println!("Goal:");
    print!("{goal}");
    if !initial.is_solvable_to(&goal) {
        println!("(the goal is unreachable from this start grid)");
    }
    println!();

    let search = Search::new(args.strategy.build());
    println!("Strategy: {}", search.strategy().name());

    let started = Instant::now();
    let mut run = search.start(initial, goal);
    let limit = args.max_expansions.unwrap_or(usize::MAX);
    let outcome = loop {
        if let Some(outcome) = run.step()? {
            break Some(outcome);
        }
        if run.stats().expansions() >= limit {
            break None;
        }
    };
    let elapsed = started.elapsed();

    let Some(outcome) = outcome else {
        println!("Outcome: expansion limit reached");
        println!("Elapsed: {elapsed:.2?}");
        print_sizes(&run);
        return Ok(());
    };

    let report = run.finish()?;
    match outcome {
        SearchOutcome::Found(_) => println!(
            "Outcome: found in {} moves",
            report.moves().map_or(0, |moves| moves.len())
        ),
        SearchOutcome::NotFound => println!("Outcome: not found"),
    }
    println!("Elapsed: {elapsed:.2?}");
    println!("Open: {}", report.open_len());
    println!("Closed: {}", report.closed_len());
    println!("Stats: {}", report.stats());

    if args.show_path {
        print_path(&report);
    }
    Ok(())
}

fn start_grid(args: &Args, goal: Grid) -> Result<Grid, SolverError> {
    if let Some(start) = &args.start {
        return Ok(start.parse()?);
    }

    let generator = PuzzleGenerator::new(goal);
    let seed = args.seed.unwrap_or_else(PuzzleSeed::random);
    let puzzle = match args.scramble {
        Some(moves) => generator.scramble_with_seed(seed, moves),
        None if args.solvable => generator.generate_solvable_with_seed(seed),
        None => generator.generate_with_seed(seed),
    };
    println!("Seed: {}", puzzle.seed);
    Ok(puzzle.initial)
}

fn print_sizes(run: &SearchRun<'_>) {
    println!("Open: {}", run.open_len());
    println!("Closed: {}", run.closed_len());
    println!("Stats: {}", run.stats());
}

fn print_path(report: &SearchReport) {
    let Some(path) = report.path() else {
        return;
    };
    println!();
    println!("Path ({} steps):", path.len() - 1);
    for (step, node) in path.iter().enumerate() {
        match node.direction() {
            Some(direction) => println!("{step}: {direction}"),
            None => println!("{step}: start"),
        }
        print!("{}", node.grid());
    }
}
