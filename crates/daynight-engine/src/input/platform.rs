use winit::dpi::PhysicalPosition;
use winit::event::{ElementState, MouseButton as WinitMouseButton, TouchPhase, WindowEvent};
use winit::keyboard::{KeyCode, PhysicalKey};
use winit::window::Window;

use super::{InputEvent, InputState, Key, KeyState, MouseButton, MouseButtonState, PointerButtonEvent};

/// Translates a winit `WindowEvent` into an engine `InputEvent`.
///
/// Returns `None` for events the input subsystem does not represent.
pub(crate) fn translate_window_event(
    window: &Window,
    state: &InputState,
    event: &WindowEvent,
) -> Option<InputEvent> {
    match event {
        WindowEvent::Focused(f) => Some(InputEvent::Focused(*f)),

        WindowEvent::CursorLeft { .. } => Some(InputEvent::PointerLeft),

        WindowEvent::CursorMoved { position, .. } => {
            let (x, y) = to_logical_f32(window, *position);
            Some(InputEvent::PointerMoved { x, y })
        }

        WindowEvent::MouseInput { state: st, button, .. } => {
            // winit 0.30 has no cursor query; use the tracked pointer position.
            let (x, y) = state.pointer_pos?;
            Some(InputEvent::PointerButton(PointerButtonEvent {
                button: map_mouse_button(*button),
                state: map_element_state(*st),
                x,
                y,
            }))
        }

        WindowEvent::Touch(touch) => {
            let (x, y) = to_logical_f32(window, touch.location);
            Some(touch_event(touch.phase, x, y))
        }

        WindowEvent::KeyboardInput { event, .. } => {
            let st = match event.state {
                ElementState::Pressed => KeyState::Pressed,
                ElementState::Released => KeyState::Released,
            };
            Some(InputEvent::Key {
                key: map_key(event.physical_key),
                state: st,
                repeat: event.repeat,
            })
        }

        _ => None,
    }
}

/// Folds a touch contact into the primary pointer.
fn touch_event(phase: TouchPhase, x: f32, y: f32) -> InputEvent {
    let state = match phase {
        TouchPhase::Started => MouseButtonState::Pressed,
        TouchPhase::Ended => MouseButtonState::Released,
        TouchPhase::Moved => return InputEvent::PointerMoved { x, y },
        TouchPhase::Cancelled => return InputEvent::PointerCancelled { button: MouseButton::Left },
    };
    InputEvent::PointerButton(PointerButtonEvent {
        button: MouseButton::Left,
        state,
        x,
        y,
    })
}

fn to_logical_f32(window: &Window, pos: PhysicalPosition<f64>) -> (f32, f32) {
    let logical = pos.to_logical::<f64>(window.scale_factor());
    (logical.x as f32, logical.y as f32)
}

fn map_element_state(st: ElementState) -> MouseButtonState {
    match st {
        ElementState::Pressed => MouseButtonState::Pressed,
        ElementState::Released => MouseButtonState::Released,
    }
}

fn map_mouse_button(b: WinitMouseButton) -> MouseButton {
    match b {
        WinitMouseButton::Left => MouseButton::Left,
        WinitMouseButton::Right => MouseButton::Right,
        WinitMouseButton::Middle => MouseButton::Middle,
        WinitMouseButton::Back => MouseButton::Other(3),
        WinitMouseButton::Forward => MouseButton::Other(4),
        WinitMouseButton::Other(v) => MouseButton::Other(v),
    }
}

fn map_key(pk: PhysicalKey) -> Key {
    match pk {
        PhysicalKey::Code(KeyCode::Escape) => Key::Escape,
        PhysicalKey::Code(KeyCode::Enter | KeyCode::NumpadEnter) => Key::Enter,
        PhysicalKey::Code(KeyCode::Space) => Key::Space,
        PhysicalKey::Code(KeyCode::Tab) => Key::Tab,
        _ => Key::Unknown,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::input::InputFrame;

    fn apply_touches(phases: &[TouchPhase]) -> (InputState, InputFrame) {
        let mut state = InputState::default();
        let mut frame = InputFrame::default();
        for &phase in phases {
            state.apply_event(&mut frame, touch_event(phase, 40.0, 50.0));
        }
        (state, frame)
    }

    #[test]
    fn touch_start_and_end_is_a_click() {
        let (state, frame) = apply_touches(&[TouchPhase::Started, TouchPhase::Ended]);
        assert_eq!(frame.released_at(MouseButton::Left), Some((40.0, 50.0)));
        assert!(state.buttons_down.is_empty());
    }

    #[test]
    fn cancelled_touch_releases_without_click() {
        let (state, frame) = apply_touches(&[TouchPhase::Started, TouchPhase::Cancelled]);
        assert_eq!(frame.released_at(MouseButton::Left), None);
        assert!(frame.buttons_released.is_empty());
        assert!(state.buttons_down.is_empty());
        assert_eq!(state.pointer_pos, None);
    }

    #[test]
    fn touch_move_moves_the_pointer() {
        assert_eq!(
            touch_event(TouchPhase::Moved, 1.0, 2.0),
            InputEvent::PointerMoved { x: 1.0, y: 2.0 }
        );
    }
}
