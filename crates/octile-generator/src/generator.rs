use octile_core::{Cell, Direction, Grid};
use rand::{
    SeedableRng as _,
    seq::{IndexedRandom as _, SliceRandom as _},
};
use rand_pcg::Pcg64;

use crate::PuzzleSeed;

/// A generated start grid together with the seed that produced it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GeneratedPuzzle {
    /// The start grid.
    pub initial: Grid,
    /// The seed that reproduces `initial`.
    pub seed: PuzzleSeed,
}

/// Builds random start grids for a fixed goal.
///
/// Every `*_with_seed` method is deterministic: the same seed always yields
/// the same grid.
///
/// # Examples
///
/// ```
/// use octile_core::Grid;
/// use octile_generator::{PuzzleGenerator, PuzzleSeed};
///
/// let generator = PuzzleGenerator::new(Grid::GOAL);
/// let seed = PuzzleSeed::random();
///
/// let a = generator.generate_with_seed(seed);
/// let b = generator.generate_with_seed(seed);
/// assert_eq!(a, b);
///
/// let solvable = generator.generate_solvable_with_seed(seed);
/// assert!(solvable.initial.is_solvable_to(generator.goal()));
/// ```
#[derive(Debug, Clone, Copy, Default)]
pub struct PuzzleGenerator {
    goal: Grid,
}

impl PuzzleGenerator {
    /// Creates a generator for `goal`.
    #[must_use]
    pub fn new(goal: Grid) -> Self {
        Self { goal }
    }

    /// Returns the goal grid.
    #[must_use]
    pub fn goal(&self) -> &Grid {
        &self.goal
    }

    /// Shuffles the goal's cells with a fresh random seed.
    ///
    /// Half of all shuffles cannot reach the goal.
    #[must_use]
    pub fn generate(&self) -> GeneratedPuzzle {
        self.generate_with_seed(PuzzleSeed::random())
    }

    /// Shuffles the goal's cells uniformly using `seed`.
    ///
    /// The result is not necessarily solvable; check it with
    /// [`Grid::is_solvable_to`].
    #[must_use]
    pub fn generate_with_seed(&self, seed: PuzzleSeed) -> GeneratedPuzzle {
        log::debug!("generating puzzle with seed {seed}");
        let mut rng = Pcg64::from_seed(*seed.as_bytes());
        let initial = self.shuffle(&mut rng);
        GeneratedPuzzle { initial, seed }
    }

    /// Shuffles the goal's cells using `seed`, drawing again until the
    /// result can reach the goal.
    #[must_use]
    pub fn generate_solvable_with_seed(&self, seed: PuzzleSeed) -> GeneratedPuzzle {
        log::debug!("generating solvable puzzle with seed {seed}");
        let mut rng = Pcg64::from_seed(*seed.as_bytes());
        loop {
            let initial = self.shuffle(&mut rng);
            if initial.is_solvable_to(&self.goal) {
                return GeneratedPuzzle { initial, seed };
            }
        }
    }

    /// Walks `moves` random slides away from the goal using `seed`.
    ///
    /// The result is always solvable in at most `moves` slides. Walks never
    /// immediately undo the previous slide, but may revisit earlier grids.
    ///
    /// # Examples
    ///
    /// ```
    /// use octile_core::Grid;
    /// use octile_generator::{PuzzleGenerator, PuzzleSeed};
    ///
    /// let generator = PuzzleGenerator::default();
    /// let puzzle = generator.scramble_with_seed(PuzzleSeed::random(), 0);
    /// assert_eq!(puzzle.initial, Grid::GOAL);
    /// ```
    #[must_use]
    pub fn scramble_with_seed(&self, seed: PuzzleSeed, moves: usize) -> GeneratedPuzzle {
        log::debug!("scrambling {moves} moves with seed {seed}");
        let mut rng = Pcg64::from_seed(*seed.as_bytes());
        let mut grid = self.goal;
        let mut previous: Option<Direction> = None;
        for _ in 0..moves {
            let Some(blank) = grid.blank_position() else {
                break;
            };
            let candidates = Direction::ALL
                .into_iter()
                .filter(|&direction| previous != Some(direction.reverse()))
                .filter_map(|direction| Some((direction, grid.slide(blank, direction)?)))
                .collect::<Vec<_>>();
            let Some(&(direction, next)) = candidates.choose(&mut rng) else {
                break;
            };
            grid = next;
            previous = Some(direction);
        }
        GeneratedPuzzle {
            initial: grid,
            seed,
        }
    }

    fn shuffle(&self, rng: &mut Pcg64) -> Grid {
        let mut cells: [Cell; 9] = *self.goal.cells();
        cells.shuffle(rng);
        Grid::from_cells(cells).expect("a permutation of a valid grid's cells is a valid grid")
    }
}
