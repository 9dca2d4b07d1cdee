use thiserror::Error;

/// Raised when a pattern would be written outside the grid.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PlacementError {
    #[error(
        "{height}x{width} pattern at ({row}, {col}) does not fit a {rows}x{cols} grid"
    )]
    OutOfBounds {
        row: usize,
        col: usize,
        height: usize,
        width: usize,
        rows: usize,
        cols: usize,
    },
}
