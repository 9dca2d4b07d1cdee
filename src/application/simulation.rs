use log::{debug, warn};
use rand::Rng;

use super::ScaleOscillator;
use crate::domain::{Grid, PlacementError, next_generation, presets};
use crate::input::InputEvent;

/// SimulationState is everything one frame needs: the generation on screen,
/// the generation before it (for differential drawing) and the glyph scale.
///
/// All transitions consume the state and return the new one, so nothing is
/// shared or mutated behind the frame loop's back.
#[derive(Clone, Debug)]
pub struct SimulationState {
    pub current: Grid,
    /// Always exactly one generation behind `current`
    pub previous: Grid,
    pub scale: ScaleOscillator,
    pub generation: u64,
}

impl SimulationState {
    /// Start from `grid`, with an all-dead previous generation
    pub fn new(grid: Grid) -> Self {
        let (rows, cols) = grid.dimensions();
        Self {
            current: grid,
            previous: Grid::new(rows, cols),
            scale: ScaleOscillator::default(),
            generation: 0,
        }
    }

    /// Start from a random grid
    pub fn random<R: Rng + ?Sized>(rows: usize, cols: usize, rng: &mut R) -> Self {
        Self::new(Grid::random(rows, cols, rng))
    }

    /// Replace the current grid with fresh random noise
    pub fn regenerate<R: Rng + ?Sized>(mut self, rng: &mut R) -> Self {
        let (rows, cols) = self.current.dimensions();
        self.current = Grid::random(rows, cols, rng);
        self.generation = 0;
        debug!("regenerated {}x{} grid, {} alive", rows, cols, self.current.count_alive());
        self
    }

    /// Stamp a glider with its top-left corner at (row, col).
    /// On error the grid is left as it was.
    pub fn inject_glider_at(&mut self, row: usize, col: usize) -> Result<(), PlacementError> {
        self.current.stamp_glider(row, col)?;
        debug!("glider injected at ({}, {})", row, col);
        Ok(())
    }

    /// Stamp a glider at a random origin where it fits entirely.
    /// A grid too small for a glider is left unchanged.
    pub fn inject_glider<R: Rng + ?Sized>(mut self, rng: &mut R) -> Self {
        let (rows, cols) = self.current.dimensions();
        let glider = presets::glider();
        let row = rng.random_range(0..=rows.saturating_sub(glider.height));
        let col = rng.random_range(0..=cols.saturating_sub(glider.width));

        if let Err(err) = self.inject_glider_at(row, col) {
            warn!("glider rejected: {}", err);
        }
        self
    }

    /// Apply one input event. Quit is handled by the frame loop.
    pub fn handle<R: Rng + ?Sized>(self, event: InputEvent, rng: &mut R) -> Self {
        match event {
            InputEvent::Regenerate => self.regenerate(rng),
            InputEvent::InjectGlider => self.inject_glider(rng),
            InputEvent::Quit => self,
        }
    }

    /// Move one generation forward; the old current becomes previous
    pub fn advance(mut self) -> Self {
        let next = next_generation(&self.current);
        self.previous = std::mem::replace(&mut self.current, next);
        self.generation += 1;
        self
    }

    /// Step the glyph scale oscillator
    pub fn pulse(mut self) -> Self {
        self.scale = self.scale.advance();
        self
    }
}
