mod cell;
mod error;
mod grid;
mod patterns;
pub mod rules;

pub use cell::Cell;
pub use error::PlacementError;
pub use grid::Grid;
pub use patterns::{Pattern, presets};
pub use rules::{count_live_neighbors, neighbor_positions, next_generation};
