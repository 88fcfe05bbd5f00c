//! `grid` — the square letter matrix a puzzle is built on.
//!
//! The grid starts fully empty, is mutated cell-by-cell while the placement
//! engine works, and is read-only once generation finishes. Cells are
//! `Option<char>`: `None` until either a placed word or the noise-fill pass
//! writes an uppercase letter into them.
//!
//! Storage is a flat row-major `Vec`, indexed by `(x, y)` with `x` growing
//! rightward and `y` growing downward. The grid is single-owner for its whole
//! lifetime, so there are no aliasing concerns around the in-place writes.

use std::fmt;

/// An N×N matrix of optionally-filled letter cells.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Grid {
    size: usize,
    cells: Vec<Option<char>>,
}

impl Grid {
    /// Creates an empty grid with `size` rows and columns.
    #[must_use]
    pub fn new(size: usize) -> Self {
        Grid {
            size,
            cells: vec![None; size * size],
        }
    }

    /// Side length of the grid.
    #[must_use]
    pub fn size(&self) -> usize {
        self.size
    }

    /// Returns the letter at `(x, y)`, or `None` if the cell is still empty.
    ///
    /// # Panics
    /// Panics if `(x, y)` is out of bounds; callers are expected to have
    /// bounds-checked with [`Grid::in_bounds`] (the engine checks the full
    /// word span before touching any cell).
    #[must_use]
    pub fn get(&self, x: usize, y: usize) -> Option<char> {
        self.cells[y * self.size + x]
    }

    /// Writes `letter` into `(x, y)`.
    ///
    /// Restricted to the crate: only the placement engine and the noise-fill
    /// pass are allowed to mutate cells.
    pub(crate) fn set(&mut self, x: usize, y: usize, letter: char) {
        self.cells[y * self.size + x] = Some(letter);
    }

    /// Whether signed coordinates land inside the grid. Signed because
    /// projecting a word's end cell along a direction with a negative step
    /// can go below zero.
    #[must_use]
    pub fn in_bounds(&self, x: isize, y: isize) -> bool {
        let size = self.size as isize;
        (0..size).contains(&x) && (0..size).contains(&y)
    }

    /// True once every cell holds a letter (i.e. after the noise-fill pass).
    #[must_use]
    pub fn is_full(&self) -> bool {
        self.cells.iter().all(Option::is_some)
    }

    /// Iterates over the grid's rows, top to bottom.
    pub fn rows(&self) -> impl Iterator<Item = &[Option<char>]> {
        self.cells.chunks(self.size)
    }
}

/// Renders the grid as one line per row, letters separated by single spaces.
/// Empty cells (only possible before the noise-fill pass) show as `.`,
/// which keeps partially-built grids readable in debug logs.
impl fmt::Display for Grid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (y, row) in self.rows().enumerate() {
            if y > 0 {
                writeln!(f)?;
            }
            for (x, cell) in row.iter().enumerate() {
                if x > 0 {
                    write!(f, " ")?;
                }
                write!(f, "{}", cell.unwrap_or('.'))?;
            }
        }
        Ok(())
    }
}
