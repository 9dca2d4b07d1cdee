//! Conway's Game of Life (B3/S23) on a bounded grid.
//!
//! Edges are hard walls: positions outside the grid are not neighbors at all,
//! so corner cells see 3 neighbors, edge cells 5 and interior cells 8.

use super::Grid;

/// Moore-neighborhood positions of (row, col) that lie inside the grid
pub fn neighbor_positions(grid: &Grid, row: usize, col: usize) -> impl Iterator<Item = (usize, usize)> {
    let (rows, cols) = grid.dimensions();

    (-1isize..=1)
        .flat_map(|dr| (-1isize..=1).map(move |dc| (dr, dc)))
        .filter(|&(dr, dc)| dr != 0 || dc != 0)
        .filter_map(move |(dr, dc)| {
            let r = row.checked_add_signed(dr)?;
            let c = col.checked_add_signed(dc)?;
            (r < rows && c < cols).then_some((r, c))
        })
}

/// Count live neighbors, ignoring anything beyond the grid edges
pub fn count_live_neighbors(grid: &Grid, row: usize, col: usize) -> u8 {
    neighbor_positions(grid, row, col)
        .filter(|&(r, c)| grid.is_alive(r, c))
        .count() as u8
}

/// Pure functional evolution - returns a freshly allocated grid and leaves
/// `grid` untouched
pub fn next_generation(grid: &Grid) -> Grid {
    let (rows, cols) = grid.dimensions();
    let mut next = Grid::new(rows, cols);

    grid.iter_cells()
        .map(|(row, col, cell)| (row, col, cell.evolve(count_live_neighbors(grid, row, col))))
        .filter(|(_, _, cell)| cell.is_alive())
        .for_each(|(row, col, cell)| next.set(row, col, cell));

    next
}

impl Grid {
    /// Next generation of this grid, see [`next_generation`]
    pub fn evolve(&self) -> Self {
        next_generation(self)
    }
}
