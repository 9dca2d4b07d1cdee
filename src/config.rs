//! Process parameters. Everything here is fixed at compile time.

use crate::rendering::Rgb;

pub const WINDOW_TITLE: &str = "Cube Life";

/// Canvas size in pixels
pub const WIDTH: usize = 512;
pub const HEIGHT: usize = 400;

/// Edge length of one cell in pixels
pub const CELL_SIZE: usize = 5;

pub const ROWS: usize = HEIGHT / CELL_SIZE;
pub const COLS: usize = WIDTH / CELL_SIZE;

/// Frame cap
pub const FPS: u32 = 120;

/// Upper bound of the pulsating glyph scale
pub const MAX_SCALE: f32 = 0.25;
/// Scale change per frame
pub const SCALE_STEP: f32 = 0.025;

pub const BACKGROUND_TOP: Rgb = Rgb::new(24, 18, 37);
pub const BACKGROUND_BOTTOM: Rgb = Rgb::new(33, 71, 97);

/// Reference colours for live cells, blended by row
pub const LIVE_TOP: Rgb = Rgb::new(60, 173, 100);
pub const LIVE_BOTTOM: Rgb = Rgb::new(52, 152, 219);

/// Outline thickness of the cube faces
pub const FACE_THICKNESS: f32 = 2.0;
