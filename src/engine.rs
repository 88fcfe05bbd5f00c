//! The placement engine: a randomized constrained search that fits words
//! into the grid without corrupting each other, then floods the leftover
//! cells with noise.
//!
//! # How placement works
//!
//! For each word the engine shuffles the four directions, then gives every
//! direction an independent budget of random trials: pick a uniformly random
//! start cell, project the end cell, and accept the position only if the
//! whole path stays in bounds and every cell along it is either empty or
//! already holds the matching letter. The first fully valid trial wins and
//! its letters are written (equal cells are idempotent writes, so crossings
//! never change an existing letter).
//!
//! The search is probabilistic, not complete: a dense grid or a long word can
//! fail to place even though a valid position exists. That is an accepted
//! tradeoff against exhaustive search, which keeps cost bounded at
//! `O(4 × max_attempts × length)` per word. A word that exhausts all four
//! budgets simply lands in the skipped set; it is never an error.
//!
//! # Determinism
//!
//! The engine owns its random source. [`Engine::with_seed`] makes an entire
//! generation run reproducible, which is what every randomized test in this
//! crate relies on; [`Engine::new`] seeds from OS entropy. Nothing is shared
//! between engines, so independent generations can run in parallel as long
//! as each has its own `Engine`.
//!
//! # Example
//!
//! ```
//! use gridseek::difficulty::Difficulty;
//! use gridseek::engine::Engine;
//!
//! let words = vec!["SUN".to_string(), "MOON".to_string()];
//! let mut engine = Engine::with_seed(10, 1000, 42)?;
//! let (placed, skipped) = engine.generate(&words, Difficulty::Easy);
//!
//! assert_eq!(placed.len() + skipped.len(), 2);
//! assert!(engine.grid().is_full());
//! # Ok::<(), gridseek::errors::PuzzleError>(())
//! ```

use crate::difficulty::Difficulty;
use crate::direction::Direction;
use crate::errors::PuzzleError;
use crate::grid::Grid;
use log::{debug, info};
use rand::rngs::StdRng;
use rand::seq::{IndexedRandom, SliceRandom};
use rand::{Rng, SeedableRng};
use std::cmp::Reverse;

/// Number of letters noise cells are drawn from (A-Z).
const ALPHABET_SIZE: u8 = 26;

/// Owns a grid and places words into it.
///
/// Construct once per puzzle; the grid is mutated word by word and finalized
/// by [`Engine::fill_random_chars`], after which it should be treated as
/// read-only.
#[derive(Debug)]
pub struct Engine {
    grid: Grid,
    max_attempts: usize,
    /// Words successfully written into the grid, in placement order.
    solutions: Vec<String>,
    rng: StdRng,
    /// Running count of placement trials, kept only so tests can pin the
    /// attempt budget exactly.
    #[cfg(test)]
    trials: usize,
}

impl Engine {
    /// Creates an engine with an OS-entropy-seeded random source.
    ///
    /// # Errors
    /// Returns `InvalidGridSize` or `InvalidMaxAttempts` if either parameter
    /// is zero.
    pub fn new(size: usize, max_attempts: usize) -> Result<Self, PuzzleError> {
        Self::from_rng(size, max_attempts, StdRng::from_os_rng())
    }

    /// Creates an engine whose entire run is reproducible from `seed`.
    ///
    /// # Errors
    /// Returns `InvalidGridSize` or `InvalidMaxAttempts` if either parameter
    /// is zero.
    pub fn with_seed(size: usize, max_attempts: usize, seed: u64) -> Result<Self, PuzzleError> {
        Self::from_rng(size, max_attempts, StdRng::seed_from_u64(seed))
    }

    fn from_rng(size: usize, max_attempts: usize, rng: StdRng) -> Result<Self, PuzzleError> {
        if size == 0 {
            return Err(PuzzleError::InvalidGridSize { size });
        }
        if max_attempts == 0 {
            return Err(PuzzleError::InvalidMaxAttempts);
        }
        Ok(Engine {
            grid: Grid::new(size),
            max_attempts,
            solutions: Vec::new(),
            rng,
            #[cfg(test)]
            trials: 0,
        })
    }

    /// The grid in its current state.
    #[must_use]
    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    /// Words written into the grid so far, in placement order.
    #[must_use]
    pub fn solutions(&self) -> &[String] {
        &self.solutions
    }

    /// Tries to place `word` (uppercased internally) somewhere in the grid.
    ///
    /// Directions are shuffled, then each gets up to `max_attempts` random
    /// trials. A trial whose end cell projects out of bounds still consumes
    /// budget, so a word longer than the grid side burns through exactly
    /// `4 × max_attempts` trials and returns `false`.
    ///
    /// Returns `true` and records the word in [`Engine::solutions`] on
    /// success; `false` once every direction's budget is exhausted.
    pub fn place_word(&mut self, word: &str) -> bool {
        let word = word.to_uppercase();
        let letters: Vec<char> = word.chars().collect();
        let span = letters.len() as isize - 1;
        let size = self.grid.size();

        let mut directions = Direction::ALL;
        directions.shuffle(&mut self.rng);

        for dir in directions {
            let (dx, dy) = dir.delta();

            for _ in 0..self.max_attempts {
                #[cfg(test)]
                {
                    self.trials += 1;
                }

                // Sampled as usize (the grid's native index type), widened to
                // isize only for the signed projection math below.
                let start_x = self.rng.random_range(0..size) as isize;
                let start_y = self.rng.random_range(0..size) as isize;

                // A start cell whose projected end falls outside the grid is
                // a failed trial, not a re-roll; it counts against the budget.
                if !self
                    .grid
                    .in_bounds(start_x + span * dx, start_y + span * dy)
                {
                    continue;
                }

                let fits = letters.iter().enumerate().all(|(i, &letter)| {
                    let x = (start_x + i as isize * dx) as usize;
                    let y = (start_y + i as isize * dy) as usize;
                    match self.grid.get(x, y) {
                        None => true,
                        Some(existing) => existing == letter,
                    }
                });

                if fits {
                    for (i, &letter) in letters.iter().enumerate() {
                        let x = (start_x + i as isize * dx) as usize;
                        let y = (start_y + i as isize * dy) as usize;
                        self.grid.set(x, y, letter);
                    }
                    debug!("placed '{word}' at ({start_x},{start_y}) going {dir:?}");
                    self.solutions.push(word);
                    return true;
                }
            }
        }

        debug!("no valid position for '{word}' within the attempt budget");
        false
    }

    /// Assigns a uniformly random uppercase letter to every still-empty cell.
    ///
    /// Must run only after all placement attempts are done: placement relies
    /// on empty cells to signal free space, so filling earlier would corrupt
    /// the search. Cells already holding a letter are untouched.
    pub fn fill_random_chars(&mut self) {
        let size = self.grid.size();
        for y in 0..size {
            for x in 0..size {
                if self.grid.get(x, y).is_none() {
                    let letter = char::from(b'A' + self.rng.random_range(0..ALPHABET_SIZE));
                    self.grid.set(x, y, letter);
                }
            }
        }
    }

    /// Runs a full generation pass: select, sort, place, noise-fill.
    ///
    /// The target word count comes from `difficulty` scaled to the grid
    /// size. If `words` exceeds the target, a uniform random sample of that
    /// size is drawn without replacement; otherwise the whole list is used.
    /// The selection is sorted longest-first before placement, since long
    /// words have the fewest valid positions and stand the best chance while
    /// the grid is still empty.
    ///
    /// Returns the placed words in placement order and the skipped words in
    /// the sorted (longest-first) order they were attempted in. The noise
    /// fill runs exactly once, whatever the placement outcomes, so the grid
    /// is always fully populated afterward. An empty `words` list is valid
    /// and yields an all-noise grid.
    pub fn generate(&mut self, words: &[String], difficulty: Difficulty) -> (Vec<String>, Vec<String>) {
        let target = difficulty.word_count(self.grid.size());
        info!("target word count for {difficulty}: {target}");

        let mut selection: Vec<String> = if words.len() > target {
            words
                .choose_multiple(&mut self.rng, target)
                .cloned()
                .collect()
        } else {
            words.to_vec()
        };

        // Longest first: this ordering materially changes placement success,
        // it is not cosmetic.
        selection.sort_by_key(|w| Reverse(w.chars().count()));

        let mut placed = Vec::new();
        let mut skipped = Vec::new();

        for word in &selection {
            if self.place_word(word) {
                placed.push(word.to_uppercase());
            } else {
                skipped.push(word.to_uppercase());
            }
        }

        self.fill_random_chars();

        info!(
            "placed {}/{} words on a {size}x{size} grid",
            placed.len(),
            selection.len(),
            size = self.grid.size()
        );
        (placed, skipped)
    }
}
