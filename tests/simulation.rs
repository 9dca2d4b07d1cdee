use cube_life::{
    Cell, Grid, InputEvent, SimulationState,
    config::{COLS, MAX_SCALE, ROWS},
    rendering::{CountingSurface, Renderer},
};
use rand::{SeedableRng, rngs::StdRng};

fn live_cells(grid: &Grid) -> Vec<(usize, usize)> {
    grid.iter_cells()
        .filter(|(_, _, cell)| cell.is_alive())
        .map(|(r, c, _)| (r, c))
        .collect()
}

#[test]
fn still_life_draws_background_only() {
    let mut grid = Grid::new(ROWS, COLS);
    for (r, c) in [(10, 10), (10, 11), (11, 10), (11, 11)] {
        grid.set(r, c, Cell::Alive);
    }
    let renderer = Renderer::default();

    // After one generation both grids hold the same block
    let state = SimulationState::new(grid.clone()).advance();
    let mut surface = CountingSurface::default();
    let glyphs = renderer.draw_frame(&mut surface, &state.current, &state.previous, state.scale.scale());
    assert_eq!(glyphs, 0);
    assert_eq!(surface.rects + surface.polygons, 0);

    // Against the dead start grid every block cell is a birth
    let fresh = SimulationState::new(grid);
    let mut surface = CountingSurface::default();
    let glyphs = renderer.draw_frame(&mut surface, &fresh.current, &fresh.previous, 0.0);
    assert_eq!(glyphs, 4);
    assert_eq!(surface.lines, renderer.height);
    assert_eq!(surface.rects, 4);
    assert_eq!(surface.polygons, 20);
}

#[test]
fn glider_crosses_canvas_grid() {
    let mut state = SimulationState::new(Grid::new(ROWS, COLS));
    state.inject_glider_at(5, 5).unwrap();
    let start = live_cells(&state.current);

    let state = (0..40).fold(state, |s, _| s.advance().pulse());

    let expected: Vec<_> = start.iter().map(|&(r, c)| (r + 10, c + 10)).collect();
    assert_eq!(live_cells(&state.current), expected);
    assert_eq!(state.generation, 40);
}

#[test]
fn frame_sequence_keeps_invariants() {
    let mut rng = StdRng::seed_from_u64(99);
    let renderer = Renderer::default();
    let mut state = SimulationState::random(ROWS, COLS, &mut rng);

    for frame in 0..200 {
        let events = match frame % 50 {
            0 => vec![InputEvent::InjectGlider],
            25 => vec![InputEvent::Regenerate, InputEvent::InjectGlider],
            _ => vec![],
        };
        state = events.into_iter().fold(state, |s, e| s.handle(e, &mut rng));

        let before = state.current.clone();
        state = state.advance();
        assert_eq!(state.previous, before);
        assert_eq!(state.current.dimensions(), (ROWS, COLS));

        let mut surface = CountingSurface::default();
        let glyphs = renderer.draw_frame(&mut surface, &state.current, &state.previous, state.scale.scale());
        assert_eq!(glyphs, state.current.births_since(&state.previous).count());
        assert_eq!(surface.polygons, glyphs * 5);

        state = state.pulse();
        assert!((0.0..=MAX_SCALE).contains(&state.scale.scale()));
    }
}
