use crate::config;

/// Which way the scale is currently moving
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum Direction {
    Growing,
    Shrinking,
}

impl Direction {
    pub const fn sign(self) -> f32 {
        match self {
            Direction::Growing => 1.0,
            Direction::Shrinking => -1.0,
        }
    }

    pub const fn flip(self) -> Self {
        match self {
            Direction::Growing => Direction::Shrinking,
            Direction::Shrinking => Direction::Growing,
        }
    }
}

/// Triangle-wave size multiplier for the live-cell glyphs.
/// The value always stays within `[0, max]`.
#[derive(Clone, Copy, PartialEq, Debug)]
pub struct ScaleOscillator {
    scale: f32,
    direction: Direction,
    step: f32,
    max: f32,
}

impl ScaleOscillator {
    /// Start at zero, growing
    pub fn new(step: f32, max: f32) -> Self {
        Self {
            scale: 0.0,
            direction: Direction::Growing,
            step,
            max,
        }
    }

    pub const fn scale(&self) -> f32 {
        self.scale
    }

    pub const fn direction(&self) -> Direction {
        self.direction
    }

    pub const fn max(&self) -> f32 {
        self.max
    }

    /// Move one step; landing on or past a bound clamps to it and turns around
    pub fn advance(mut self) -> Self {
        let next = self.scale + self.step * self.direction.sign();

        if next >= self.max {
            self.scale = self.max;
            self.direction = self.direction.flip();
        } else if next <= 0.0 {
            self.scale = 0.0;
            self.direction = self.direction.flip();
        } else {
            self.scale = next;
        }
        self
    }
}

impl Default for ScaleOscillator {
    fn default() -> Self {
        Self::new(config::SCALE_STEP, config::MAX_SCALE)
    }
}
