mod frame_limiter;
mod scale;
mod simulation;

pub use frame_limiter::FrameLimiter;
pub use scale::{Direction, ScaleOscillator};
pub use simulation::SimulationState;
