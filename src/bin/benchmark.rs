//! Headless timings for the rule engine and the differential renderer

use std::time::Instant;

use cube_life::{
    Grid, SimulationState,
    config::{COLS, ROWS},
    domain::next_generation,
    rendering::{CountingSurface, Renderer},
};
use rand::{SeedableRng, rngs::StdRng};

fn benchmark_next_generation(size: usize, iterations: u32, rng: &mut StdRng) -> f64 {
    let mut grid = Grid::random(size, size, rng);

    let start = Instant::now();
    for _ in 0..iterations {
        grid = next_generation(&grid);
    }
    start.elapsed().as_secs_f64() * 1000.0 / iterations as f64
}

/// Average (ms per frame, glyphs per frame) on the configured canvas
fn benchmark_frames(frames: u32, rng: &mut StdRng) -> (f64, f64) {
    let renderer = Renderer::default();
    let mut surface = CountingSurface::default();
    let mut state = SimulationState::random(ROWS, COLS, rng);
    let mut glyphs = 0;

    let start = Instant::now();
    for _ in 0..frames {
        state = state.advance();
        glyphs += renderer.draw_frame(&mut surface, &state.current, &state.previous, state.scale.scale());
        state = state.pulse();
    }
    let ms = start.elapsed().as_secs_f64() * 1000.0 / frames as f64;
    (ms, glyphs as f64 / frames as f64)
}

fn main() {
    println!("=== Cube Life Benchmark ===\n");

    let mut rng = StdRng::seed_from_u64(0x5eed);
    let sizes = [ROWS, 100, 250, 500, 1000];
    let iterations = 20;

    println!("{:>12} {:>14} {:>16}", "Size", "ms/gen", "Mcells/sec");
    println!("{:-<44}", "");

    for size in sizes {
        let ms = benchmark_next_generation(size, iterations, &mut rng);
        let cells = (size * size) as f64;
        println!(
            "{:>12} {:>14.3} {:>16.1}",
            format!("{}x{}", size, size),
            ms,
            cells / (ms / 1000.0) / 1_000_000.0
        );
    }

    println!("\n=== Frames on {}x{} grid ===\n", ROWS, COLS);

    let frames = 500;
    let (ms, glyphs) = benchmark_frames(frames, &mut rng);
    println!("{:.3} ms/frame, {:.1} births drawn per frame", ms, glyphs);
}
