//! Benchmarks for complete search runs.
//!
//! Each strategy solves start grids scrambled from the goal by a fixed
//! number of random slides. Depth-first search is excluded: its run time
//! depends on where the first branch happens to lead rather than on the
//! scramble depth.
//!
//! # Test Data
//!
//! Start grids come from three fixed seeds, each scrambled by 12 and by 20
//! slides, so every run is reproducible.
//!
//! # Running
//!
//! ```sh
//! cargo bench --bench strategies
//! ```

use std::{hint, str::FromStr as _, time::Duration};

use criterion::{BatchSize, BenchmarkId, Criterion, criterion_group, criterion_main};
use octile_core::Grid;
use octile_generator::{PuzzleGenerator, PuzzleSeed};
use octile_solver::{
    BoxedSearchStrategy, Search,
    heuristic::{MisplacedTiles, RowColumnDelta},
    strategy::{BreadthFirst, HeuristicOrdered},
};

const SEEDS: [&str; 3] = [
    "c1d44bd6afaf8af64f126546884e19298acbdc33c3924a28136715de946ef3f1",
    "a2b3c4d5e6f7a8b9c0d1e2f3a4b5c6d7e8f9a0b1c2d3e4f5a6b7c8d9e0f1a2b3",
    "1234567890abcdef1234567890abcdef1234567890abcdef1234567890abcdef",
];

const SCRAMBLE_MOVES: [usize; 2] = [12, 20];

fn start_grids() -> Vec<(String, Grid)> {
    let generator = PuzzleGenerator::new(Grid::GOAL);
    let mut grids = vec![];
    for moves in SCRAMBLE_MOVES {
        for (i, seed) in SEEDS.into_iter().enumerate() {
            let seed = PuzzleSeed::from_str(seed).unwrap();
            let puzzle = generator.scramble_with_seed(seed, moves);
            grids.push((format!("moves_{moves}/seed_{i}"), puzzle.initial));
        }
    }
    grids
}

fn bench_strategy(c: &mut Criterion, name: &str, strategy: BoxedSearchStrategy) {
    let search = Search::new(strategy);
    for (param, start) in start_grids() {
        c.bench_with_input(BenchmarkId::new(name, param), &start, |b, start| {
            b.iter_batched(
                || hint::black_box(*start),
                |start| search.run(start, Grid::GOAL).unwrap(),
                BatchSize::SmallInput,
            );
        });
    }
}

fn bench_breadth_first(c: &mut Criterion) {
    bench_strategy(c, "breadth_first", Box::new(BreadthFirst::new()));
}

fn bench_misplaced(c: &mut Criterion) {
    bench_strategy(
        c,
        "misplaced_tiles",
        Box::new(HeuristicOrdered::new(MisplacedTiles::new())),
    );
}

fn bench_row_column_delta(c: &mut Criterion) {
    bench_strategy(
        c,
        "row_column_delta",
        Box::new(HeuristicOrdered::new(RowColumnDelta::new())),
    );
}

criterion_group!(
    name = benches;
    config =
        Criterion::default()
            .sample_size(20)
            .measurement_time(Duration::from_secs(10));
    targets =
        bench_breadth_first,
        bench_misplaced,
        bench_row_column_delta
);
criterion_main!(benches);
