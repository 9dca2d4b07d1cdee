// Domain layer - Core simulation logic
pub mod domain;

// Application layer - Frame state and pacing
pub mod application;

// Infrastructure layer - rendering, input
pub mod config;
pub mod rendering;
pub mod input;

// Re-exports for convenience
pub use domain::{Cell, Grid, Pattern, PlacementError, presets};
pub use application::{FrameLimiter, ScaleOscillator, SimulationState};
pub use input::InputEvent;
