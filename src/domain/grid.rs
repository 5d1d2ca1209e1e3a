use super::{BoardConfig, Cell};
use rand::Rng;
use rayon::prelude::*;

/// Offsets of the plus-shaped toggle pattern: the selected cell
/// and its four orthogonal neighbors.
const TOGGLE_OFFSETS: [(isize, isize); 5] = [(0, 0), (-1, 0), (1, 0), (0, -1), (0, 1)];

/// Grid manages the 2D Lights Out board.
/// Uses functional, immutable updates for predictable state transitions.
#[derive(Clone, PartialEq, Eq, Debug)]
pub struct Grid {
    rows: usize,
    cols: usize,
    cells: Vec<Cell>,
}

impl Grid {
    /// Create a new grid with all cells initially unlit
    pub fn new(rows: usize, cols: usize) -> Self {
        Self {
            rows,
            cols,
            cells: vec![Cell::Unlit; rows * cols],
        }
    }

    /// Create a randomized grid from the given configuration.
    /// Each cell independently starts lit with `start_probability`.
    pub fn random(config: &BoardConfig) -> Self {
        Self::random_with(config, &mut rand::rng())
    }

    /// Create a randomized grid using the supplied generator.
    /// Lets callers pass a seeded RNG for reproducible boards.
    pub fn random_with<R: Rng + ?Sized>(config: &BoardConfig, rng: &mut R) -> Self {
        let cells = (0..config.rows * config.cols)
            .map(|_| {
                if rng.random::<f64>() < config.start_probability {
                    Cell::Lit
                } else {
                    Cell::Unlit
                }
            })
            .collect();

        Self {
            rows: config.rows,
            cols: config.cols,
            cells,
        }
    }

    /// Get grid dimensions
    pub const fn dimensions(&self) -> (usize, usize) {
        (self.rows, self.cols)
    }

    /// Convert 2D coordinates to 1D index
    const fn get_index(&self, row: usize, col: usize) -> usize {
        row * self.cols + col
    }

    /// Get cell at position (with bounds checking)
    pub fn get(&self, row: usize, col: usize) -> Option<Cell> {
        (row < self.rows && col < self.cols)
            .then(|| self.cells[self.get_index(row, col)])
    }

    /// Set cell at position (ignored if out of bounds)
    pub fn set(&mut self, row: usize, col: usize, cell: Cell) {
        if row < self.rows && col < self.cols {
            let idx = self.get_index(row, col);
            self.cells[idx] = cell;
        }
    }

    /// Invert the cell at position; out-of-range positions are skipped
    fn flip(&mut self, row: usize, col: usize) {
        if row < self.rows && col < self.cols {
            let idx = self.get_index(row, col);
            self.cells[idx] = self.cells[idx].toggled();
        }
    }

    /// Pure functional toggle - returns a new grid in which the target
    /// cell and its in-range orthogonal neighbors are inverted.
    ///
    /// Candidate positions that fall off the board are skipped, so a
    /// corner or edge cell affects fewer than five cells. The input
    /// grid is left untouched and remains usable as a prior snapshot.
    pub fn apply_toggle(&self, row: usize, col: usize) -> Self {
        let mut next = self.clone();

        for (d_row, d_col) in TOGGLE_OFFSETS {
            let Some(r) = row.checked_add_signed(d_row) else {
                continue;
            };
            let Some(c) = col.checked_add_signed(d_col) else {
                continue;
            };
            next.flip(r, c);
        }

        next
    }

    /// Check whether the puzzle is solved: every cell unlit.
    /// Vacuously true for a degenerate empty grid.
    pub fn is_solved(&self) -> bool {
        self.cells.iter().all(|cell| !cell.is_lit())
    }

    /// Parallel solved check using rayon for large grids
    pub fn is_solved_parallel(&self) -> bool {
        self.cells.par_iter().all(|cell| !cell.is_lit())
    }

    /// Count currently lit cells
    pub fn lit_count(&self) -> usize {
        self.cells.iter().filter(|cell| cell.is_lit()).count()
    }

    /// Iterate over all cells with their positions
    pub fn iter_cells(&self) -> impl Iterator<Item = (usize, usize, Cell)> + '_ {
        (0..self.rows)
            .flat_map(move |row| (0..self.cols).map(move |col| (row, col)))
            .map(|(row, col)| (row, col, self.get(row, col).unwrap()))
    }
}
