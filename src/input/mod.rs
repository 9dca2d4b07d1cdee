use macroquad::prelude::*;

/// Discrete requests coming from the keyboard or the window
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum InputEvent {
    Quit,
    Regenerate,
    InjectGlider,
}

/// Key bindings, checked in this order every frame
pub const KEY_BINDINGS: [(KeyCode, InputEvent); 3] = [
    (KeyCode::Escape, InputEvent::Quit),
    (KeyCode::Space, InputEvent::Regenerate),
    (KeyCode::G, InputEvent::InjectGlider),
];

/// Event bound to `key`, if any
pub fn event_for_key(key: KeyCode) -> Option<InputEvent> {
    KEY_BINDINGS
        .iter()
        .find(|(bound, _)| *bound == key)
        .map(|(_, event)| *event)
}

/// Turn this frame's raw signals into an ordered event list.
/// A window close request comes first and counts as Quit.
pub fn collect_events(close_requested: bool, is_pressed: impl Fn(KeyCode) -> bool) -> Vec<InputEvent> {
    close_requested
        .then_some(InputEvent::Quit)
        .into_iter()
        .chain(
            KEY_BINDINGS
                .iter()
                .filter(|(key, _)| is_pressed(*key))
                .map(|(_, event)| *event),
        )
        .collect()
}

/// Poll everything that happened since the last frame.
/// Requires `prevent_quit()` at start-up so closing the window is reported here.
pub fn poll_events() -> Vec<InputEvent> {
    collect_events(is_quit_requested(), is_key_pressed)
}
