// Arrow keys nudge the anchor.
// Visual: each press moves the circle (and its sweeping line) by one step.

use minifb::Key;

use crate::types::Point;

/// Unit direction for an arrow key; None for every other key.
/// Screen space: +x is right, +y is down.
pub fn arrow_direction(key: Key) -> Option<(f32, f32)> {
    match key {
        Key::Left => Some((-1.0, 0.0)),
        Key::Right => Some((1.0, 0.0)),
        Key::Up => Some((0.0, -1.0)),
        Key::Down => Some((0.0, 1.0)),
        _ => None,
    }
}

/// Moves the anchor for recognised keys and remembers that a redraw is due.
/// It never draws anything itself; the main loop presents on its next pass.
pub struct InputHandler {
    step: f32,
    redraw_requested: bool,
}

impl InputHandler {
    pub fn new(step: f32) -> Self {
        Self { step, redraw_requested: false }
    }

    /// Apply one key press. Returns true if the key was an arrow.
    pub fn handle_key(&mut self, anchor: &mut Point, key: Key) -> bool {
        let Some((ux, uy)) = arrow_direction(key) else {
            return false;
        };
        anchor.translate(ux * self.step, uy * self.step);
        self.redraw_requested = true;
        log::debug!("{key:?}: anchor now ({}, {})", anchor.x, anchor.y);
        true
    }

    /// Read and clear the redraw flag.
    pub fn take_redraw_request(&mut self) -> bool {
        std::mem::take(&mut self.redraw_requested)
    }
}
