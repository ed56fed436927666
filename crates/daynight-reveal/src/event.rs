use daynight_engine::coords::Vec2;

/// Input routed to the toggle.
#[derive(Debug, Clone, PartialEq)]
pub enum UiEvent {
    /// Primary button (or touch) released at `pos`.
    Click { pos: Vec2 },
    /// Keyboard activation; acts as a click at the button center.
    Activate,
}

/// Result returned by [`ThemeToggle::on_event`](crate::toggle::ThemeToggle::on_event).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EventResult {
    Consumed,
    Ignored,
}

impl EventResult {
    #[inline]
    pub fn is_consumed(self) -> bool {
        self == EventResult::Consumed
    }
}
