//! Circular-reveal light/dark theme toggle on top of `daynight-engine`.
//!
//! Tapping the toggle grows a circle of the opposite background color out of
//! the button until it covers the window, then commits the new theme. Going
//! back to light commits first and shrinks the dark circle into the button.
//!
//! The state machine lives in [`controller::RevealController`] and is driven
//! purely by frame deltas, so it can be stepped in tests without a window.
//!
//! # Quick start
//!
//! ```rust,ignore
//! use daynight_reveal::prelude::*;
//!
//! ThemeToggleApp::new()
//!     .title("daynight")
//!     .on_theme_toggle(|dark| println!("dark mode: {dark}"))
//!     .run()?;
//! ```

pub mod app;
pub mod controller;
pub mod easing;
pub mod event;
pub mod geometry;
pub mod hooks;
pub mod palette;
pub mod theme;
pub mod toggle;
pub mod tween;

pub use app::ThemeToggleApp;

pub mod prelude {
    pub use crate::app::ThemeToggleApp;
    pub use crate::controller::{RevealController, RevealPhase, RevealState, RevealTiming};
    pub use crate::easing::Easing;
    pub use crate::event::{EventResult, UiEvent};
    pub use crate::geometry::distance_to_farthest_corner;
    pub use crate::hooks::{FeedbackSound, NoSystemTheme, Silent, SystemTheme, ToggleCallback};
    pub use crate::palette::{Monochrome, Palette};
    pub use crate::theme::{InitialTheme, Theme};
    pub use crate::toggle::{ThemeToggle, ToggleLayout};
    pub use crate::tween::Tween;

    pub use daynight_engine::coords::{Rect, Vec2, Viewport};
    pub use daynight_engine::paint::Color;
}
