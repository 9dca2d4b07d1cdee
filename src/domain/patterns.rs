use super::Cell;

/// A dense rectangular block of cells that can be stamped onto a grid.
/// Stamping writes every cell of the block, dead ones included.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Pattern {
    pub name: &'static str,
    pub description: &'static str,
    pub width: usize,
    pub height: usize,
    cells: Vec<Cell>, // row-major, height * width
}

impl Pattern {
    /// Create a pattern from row-major binary rows
    pub fn new<const W: usize>(name: &'static str, description: &'static str, rows: &[[u8; W]]) -> Self {
        let cells = rows
            .iter()
            .flat_map(|row| row.iter().map(|&bit| Cell::from_bit(bit)))
            .collect();

        Self {
            name,
            description,
            width: W,
            height: rows.len(),
            cells,
        }
    }

    /// Iterate over every cell of the block as (row offset, col offset, cell)
    pub fn iter_cells(&self) -> impl Iterator<Item = (usize, usize, Cell)> + '_ {
        self.cells
            .iter()
            .enumerate()
            .map(|(idx, &cell)| (idx / self.width, idx % self.width, cell))
    }

    /// Number of live cells in the pattern
    pub fn population(&self) -> usize {
        self.cells.iter().filter(|cell| cell.is_alive()).count()
    }
}

/// Patterns the application can inject
pub mod presets {
    use super::*;

    /// Glider - smallest spaceship, moves one cell diagonally every 4 generations
    pub fn glider() -> Pattern {
        Pattern::new(
            "Glider",
            "Moves diagonally (period 4)",
            &[
                [0, 0, 1],
                [1, 0, 1],
                [0, 1, 1],
            ],
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_glider_shape() {
        let glider = presets::glider();
        assert_eq!((glider.height, glider.width), (3, 3));
        assert_eq!(glider.population(), 5);

        let alive: Vec<_> = glider
            .iter_cells()
            .filter(|(_, _, cell)| cell.is_alive())
            .map(|(r, c, _)| (r, c))
            .collect();
        assert_eq!(alive, vec![(0, 2), (1, 0), (1, 2), (2, 1), (2, 2)]);
    }

    #[test]
    fn test_iter_cells_covers_whole_block() {
        assert_eq!(presets::glider().iter_cells().count(), 9);
    }
}
