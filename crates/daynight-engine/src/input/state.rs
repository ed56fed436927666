use std::collections::HashSet;

use super::frame::InputFrame;
use super::types::{InputEvent, Key, KeyState, MouseButton, MouseButtonState, PointerButtonEvent};

/// Current input state for the window.
#[derive(Debug, Default)]
pub struct InputState {
    /// Whether the window is focused.
    pub focused: bool,

    /// Pointer position in logical pixels.
    pub pointer_pos: Option<(f32, f32)>,

    /// Currently held keys.
    pub keys_down: HashSet<Key>,

    /// Currently held mouse buttons.
    pub buttons_down: HashSet<MouseButton>,
}

impl InputState {
    /// Applies an event to the current state and records the deltas in `frame`.
    pub fn apply_event(&mut self, frame: &mut InputFrame, ev: InputEvent) {
        match &ev {
            InputEvent::Focused(f) => {
                self.focused = *f;
                if !*f {
                    // Avoid stuck keys/buttons when focus changes mid-press.
                    self.keys_down.clear();
                    self.buttons_down.clear();
                }
            }

            InputEvent::PointerMoved { x, y } => {
                self.pointer_pos = Some((*x, *y));
            }

            InputEvent::PointerCancelled { button } => {
                self.buttons_down.remove(button);
                self.pointer_pos = None;
            }

            InputEvent::PointerLeft => {
                self.pointer_pos = None;
            }

            InputEvent::Key { key, state, repeat } => match state {
                KeyState::Pressed => {
                    if self.keys_down.insert(*key) && !*repeat {
                        frame.keys_pressed.insert(*key);
                    }
                }
                KeyState::Released => {
                    self.keys_down.remove(key);
                }
            },

            InputEvent::PointerButton(PointerButtonEvent { button, state, x, y }) => {
                self.pointer_pos = Some((*x, *y));

                match state {
                    MouseButtonState::Pressed => {
                        if self.buttons_down.insert(*button) {
                            frame.buttons_pressed.insert(*button);
                        }
                    }
                    MouseButtonState::Released => {
                        if self.buttons_down.remove(button) {
                            frame.buttons_released.insert(*button);
                            frame.release_positions.push((*button, (*x, *y)));
                        }
                    }
                }
            }
        }

        frame.events.push(ev);
    }

}

#[cfg(test)]
mod tests {
    use super::*;

    fn button(state: MouseButtonState, x: f32, y: f32) -> InputEvent {
        InputEvent::PointerButton(PointerButtonEvent { button: MouseButton::Left, state, x, y })
    }

    #[test]
    fn press_release_records_click_position() {
        let mut state = InputState::default();
        let mut frame = InputFrame::default();

        state.apply_event(&mut frame, button(MouseButtonState::Pressed, 10.0, 20.0));
        state.apply_event(&mut frame, button(MouseButtonState::Released, 12.0, 22.0));

        assert!(frame.buttons_pressed.contains(&MouseButton::Left));
        assert!(frame.buttons_released.contains(&MouseButton::Left));
        assert_eq!(frame.released_at(MouseButton::Left), Some((12.0, 22.0)));
        assert!(!state.buttons_down.contains(&MouseButton::Left));
        assert_eq!(state.pointer_pos, Some((12.0, 22.0)));
    }

    #[test]
    fn release_without_press_is_not_a_click() {
        let mut state = InputState::default();
        let mut frame = InputFrame::default();

        state.apply_event(&mut frame, button(MouseButtonState::Released, 1.0, 1.0));

        assert!(frame.buttons_released.is_empty());
        assert_eq!(frame.released_at(MouseButton::Left), None);
    }

    #[test]
    fn key_repeat_is_not_a_fresh_press() {
        let mut state = InputState::default();
        let mut frame = InputFrame::default();

        state.apply_event(&mut frame, InputEvent::Key { key: Key::Space, state: KeyState::Pressed, repeat: false });
        frame.clear();
        state.apply_event(&mut frame, InputEvent::Key { key: Key::Space, state: KeyState::Pressed, repeat: true });

        assert!(state.keys_down.contains(&Key::Space));
        assert!(frame.keys_pressed.is_empty());
    }

    #[test]
    fn focus_loss_clears_held_inputs() {
        let mut state = InputState::default();
        let mut frame = InputFrame::default();

        state.apply_event(&mut frame, button(MouseButtonState::Pressed, 0.0, 0.0));
        state.apply_event(&mut frame, InputEvent::Focused(false));

        assert!(!state.buttons_down.contains(&MouseButton::Left));
    }
}
