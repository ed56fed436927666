//! Host capabilities injected into the toggle.
//!
//! Each has a no-op default so the controller can run without a host.

use crate::theme::Theme;

/// Short audible cue fired when a toggle gesture starts.
pub trait FeedbackSound {
    fn play(&mut self);
}

/// Plays nothing.
#[derive(Debug, Copy, Clone, Default)]
pub struct Silent;

impl FeedbackSound for Silent {
    fn play(&mut self) {}
}

impl<F: FnMut()> FeedbackSound for F {
    fn play(&mut self) {
        self()
    }
}

/// Reads the platform's light/dark preference.
pub trait SystemTheme {
    fn preferred(&self) -> Option<Theme>;
}

/// No platform preference available.
#[derive(Debug, Copy, Clone, Default)]
pub struct NoSystemTheme;

impl SystemTheme for NoSystemTheme {
    fn preferred(&self) -> Option<Theme> {
        None
    }
}

impl SystemTheme for Option<Theme> {
    fn preferred(&self) -> Option<Theme> {
        *self
    }
}

/// Invoked once per completed toggle with the new "is dark" value.
pub type ToggleCallback = Box<dyn FnMut(bool)>;
