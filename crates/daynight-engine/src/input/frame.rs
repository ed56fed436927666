use std::collections::HashSet;

use super::types::{InputEvent, Key, MouseButton};

/// Per-frame input deltas.
///
/// `InputState` holds what is currently down and where the pointer is;
/// `InputFrame` holds what changed since the previous frame.
#[derive(Debug, Default)]
pub struct InputFrame {
    /// Raw events in arrival order.
    pub events: Vec<InputEvent>,

    /// Keys pressed this frame (auto-repeats excluded).
    pub keys_pressed: HashSet<Key>,

    /// Mouse buttons pressed this frame.
    pub buttons_pressed: HashSet<MouseButton>,

    /// Mouse buttons released this frame.
    pub buttons_released: HashSet<MouseButton>,

    /// Pointer position at the most recent release of each button.
    pub release_positions: Vec<(MouseButton, (f32, f32))>,
}

impl InputFrame {
    pub fn clear(&mut self) {
        self.events.clear();
        self.keys_pressed.clear();
        self.buttons_pressed.clear();
        self.buttons_released.clear();
        self.release_positions.clear();
    }

    /// Position of the last `button` release this frame, if any.
    pub fn released_at(&self, button: MouseButton) -> Option<(f32, f32)> {
        self.release_positions
            .iter()
            .rev()
            .find(|(b, _)| *b == button)
            .map(|(_, pos)| *pos)
    }
}
