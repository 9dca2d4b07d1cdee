use rand::Rng;

use super::{Cell, Pattern, PlacementError};

/// Grid holds the live/dead matrix of one generation.
/// Dimensions are fixed at construction; evolution always produces a fresh grid,
/// so a grid kept as the "previous" generation is never touched by later steps.
#[derive(Clone, PartialEq, Eq, Debug)]
pub struct Grid {
    rows: usize,
    cols: usize,
    cells: Vec<Cell>,
}

impl Grid {
    /// Create a new grid with all cells initially dead
    pub fn new(rows: usize, cols: usize) -> Self {
        Self {
            rows,
            cols,
            cells: vec![Cell::Dead; rows * cols],
        }
    }

    /// Create a grid where every cell is alive with probability 1/2
    pub fn random<R: Rng + ?Sized>(rows: usize, cols: usize, rng: &mut R) -> Self {
        let cells = (0..rows * cols)
            .map(|_| if rng.random_bool(0.5) { Cell::Alive } else { Cell::Dead })
            .collect();

        Self { rows, cols, cells }
    }

    /// Build a grid from row-major binary rows (0 = dead, anything else alive)
    pub fn from_rows<const N: usize>(rows: &[[u8; N]]) -> Self {
        let mut grid = Self::new(rows.len(), N);
        for (row, bits) in rows.iter().enumerate() {
            for (col, &bit) in bits.iter().enumerate() {
                grid.set(row, col, Cell::from_bit(bit));
            }
        }
        grid
    }

    /// Get grid dimensions as (rows, cols)
    pub const fn dimensions(&self) -> (usize, usize) {
        (self.rows, self.cols)
    }

    pub const fn rows(&self) -> usize {
        self.rows
    }

    pub const fn cols(&self) -> usize {
        self.cols
    }

    /// Convert 2D coordinates to 1D index
    const fn get_index(&self, row: usize, col: usize) -> usize {
        row * self.cols + col
    }

    /// Get cell at position (with bounds checking)
    pub fn get(&self, row: usize, col: usize) -> Option<Cell> {
        (row < self.rows && col < self.cols).then(|| self.cells[self.get_index(row, col)])
    }

    /// Shorthand for `get(..) == Some(Cell::Alive)`
    pub fn is_alive(&self, row: usize, col: usize) -> bool {
        self.get(row, col).is_some_and(Cell::is_alive)
    }

    /// Set cell at position. Writes outside the grid are ignored.
    pub fn set(&mut self, row: usize, col: usize, cell: Cell) {
        if row < self.rows && col < self.cols {
            let idx = self.get_index(row, col);
            self.cells[idx] = cell;
        }
    }

    /// Overwrite the block starting at (row, col) with `pattern`.
    /// The whole block is validated first; on error the grid is untouched.
    pub fn stamp(&mut self, pattern: &Pattern, row: usize, col: usize) -> Result<(), PlacementError> {
        let fits_rows = row.checked_add(pattern.height).is_some_and(|end| end <= self.rows);
        let fits_cols = col.checked_add(pattern.width).is_some_and(|end| end <= self.cols);
        if !(fits_rows && fits_cols) {
            return Err(PlacementError::OutOfBounds {
                row,
                col,
                height: pattern.height,
                width: pattern.width,
                rows: self.rows,
                cols: self.cols,
            });
        }

        pattern
            .iter_cells()
            .for_each(|(dr, dc, cell)| self.set(row + dr, col + dc, cell));
        Ok(())
    }

    /// Stamp the canonical glider with its top-left corner at (row, col)
    pub fn stamp_glider(&mut self, row: usize, col: usize) -> Result<(), PlacementError> {
        self.stamp(&super::presets::glider(), row, col)
    }

    /// Number of live cells
    pub fn count_alive(&self) -> usize {
        self.cells.iter().filter(|cell| cell.is_alive()).count()
    }

    /// Iterate over all cells with their positions, row-major
    pub fn iter_cells(&self) -> impl Iterator<Item = (usize, usize, Cell)> + '_ {
        self.cells
            .iter()
            .enumerate()
            .map(|(idx, &cell)| (idx / self.cols, idx % self.cols, cell))
    }

    /// Positions whose state differs from `previous` and are alive now.
    /// Both grids must share dimensions.
    pub fn births_since<'a>(&'a self, previous: &'a Grid) -> impl Iterator<Item = (usize, usize)> + 'a {
        debug_assert_eq!(self.dimensions(), previous.dimensions());
        self.iter_cells()
            .zip(previous.cells.iter())
            .filter(|((_, _, now), before)| now.is_alive() && *now != **before)
            .map(|((row, col, _), _)| (row, col))
    }
}
