use log::{info, trace};
use macroquad::prelude::*;
use cube_life::{
    FrameLimiter, InputEvent, SimulationState,
    config::{self, COLS, ROWS},
    input,
    rendering::{MacroquadSurface, Renderer},
};

fn window_conf() -> Conf {
    Conf {
        window_title: config::WINDOW_TITLE.to_owned(),
        window_width: config::WIDTH as i32,
        window_height: config::HEIGHT as i32,
        window_resizable: false,
        ..Default::default()
    }
}

#[macroquad::main(window_conf)]
async fn main() {
    env_logger::init();
    // Route window close through poll_events instead of exiting immediately
    prevent_quit();

    let mut rng = ::rand::rng();
    let renderer = Renderer::default();
    let mut surface = MacroquadSurface;
    let mut limiter = FrameLimiter::new(config::FPS);
    let mut state = SimulationState::random(ROWS, COLS, &mut rng);

    info!(
        "canvas {}x{} px, grid {}x{} cells, capped at {} fps",
        config::WIDTH, config::HEIGHT, ROWS, COLS, config::FPS
    );

    loop {
        let events = input::poll_events();
        if events.contains(&InputEvent::Quit) {
            break;
        }
        state = events
            .into_iter()
            .fold(state, |s, event| s.handle(event, &mut rng));

        state = state.advance();
        let glyphs = renderer.draw_frame(
            &mut surface,
            &state.current,
            &state.previous,
            state.scale.scale(),
        );
        trace!("generation {}: {} births drawn", state.generation, glyphs);
        state = state.pulse();

        next_frame().await;
        limiter.wait();
    }

    info!("quit after {} generations", state.generation);
}
