//! Reveal state machine.
//!
//! The controller owns the theme flag and the reveal radius and is the only
//! thing that mutates either. It never looks at a clock: the host calls
//! [`RevealController::advance`] once per rendered frame with that frame's
//! delta time, before handling input and painting.
//!
//! Light to dark expands a circle of the dark background from the tap origin
//! until it covers the viewport, then commits the dark theme. Dark to light
//! commits the light theme first, holds the fully-covering dark circle for
//! `settle_frames` rendered frames, then contracts it back into the origin.

use std::time::Duration;

use daynight_engine::coords::{Vec2, Viewport};

use crate::easing::Easing;
use crate::geometry::distance_to_farthest_corner;
use crate::hooks::{FeedbackSound, Silent, ToggleCallback};
use crate::theme::Theme;
use crate::tween::Tween;

/// Durations for each reveal direction.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct RevealTiming {
    /// Light to dark.
    pub expand: Duration,
    /// Dark to light.
    pub contract: Duration,
    /// Frames the mask stays at full radius after the flip, before contracting.
    pub settle_frames: u32,
}

impl Default for RevealTiming {
    fn default() -> Self {
        Self {
            expand: Duration::from_millis(1000),
            contract: Duration::from_millis(2000),
            settle_frames: 1,
        }
    }
}

#[derive(Debug, Copy, Clone, PartialEq, Eq, Default)]
pub enum RevealPhase {
    #[default]
    Idle,
    Expanding,
    Contracting,
}

/// Snapshot of everything a painter needs.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct RevealState {
    pub theme: Theme,
    pub phase: RevealPhase,
    pub origin: Vec2,
    pub radius: f32,
    pub mask_visible: bool,
}

#[derive(Debug, Clone)]
enum Step {
    Idle,
    Settling { frames_left: u32 },
    Animating(Tween),
}

pub struct RevealController {
    theme: Theme,
    phase: RevealPhase,
    step: Step,
    origin: Vec2,
    radius: f32,
    max_radius: f32,
    mask_visible: bool,
    timing: RevealTiming,
    sound: Box<dyn FeedbackSound>,
    on_toggle: Option<ToggleCallback>,
}

impl RevealController {
    pub fn new(theme: Theme, timing: RevealTiming) -> Self {
        Self {
            theme,
            phase: RevealPhase::Idle,
            step: Step::Idle,
            origin: Vec2::zero(),
            radius: 0.0,
            max_radius: 0.0,
            mask_visible: false,
            timing,
            sound: Box::new(Silent),
            on_toggle: None,
        }
    }

    pub fn with_sound(mut self, sound: impl FeedbackSound + 'static) -> Self {
        self.sound = Box::new(sound);
        self
    }

    pub fn with_boxed_sound(mut self, sound: Box<dyn FeedbackSound>) -> Self {
        self.sound = sound;
        self
    }

    /// Called with the new "is dark" value after each completed toggle.
    pub fn on_toggle(mut self, f: impl FnMut(bool) + 'static) -> Self {
        self.on_toggle = Some(Box::new(f));
        self
    }

    pub fn with_callback(mut self, callback: Option<ToggleCallback>) -> Self {
        self.on_toggle = callback;
        self
    }

    // ── queries ───────────────────────────────────────────────────────────

    pub fn theme(&self) -> Theme {
        self.theme
    }

    pub fn is_dark(&self) -> bool {
        self.theme.is_dark()
    }

    pub fn phase(&self) -> RevealPhase {
        self.phase
    }

    pub fn is_idle(&self) -> bool {
        self.phase == RevealPhase::Idle
    }

    pub fn radius(&self) -> f32 {
        self.radius
    }

    pub fn max_radius(&self) -> f32 {
        self.max_radius
    }

    pub fn origin(&self) -> Vec2 {
        self.origin
    }

    pub fn mask_visible(&self) -> bool {
        self.mask_visible
    }

    pub fn timing(&self) -> RevealTiming {
        self.timing
    }

    pub fn state(&self) -> RevealState {
        RevealState {
            theme: self.theme,
            phase: self.phase,
            origin: self.origin,
            radius: self.radius,
            mask_visible: self.mask_visible,
        }
    }

    // ── gestures ──────────────────────────────────────────────────────────

    /// Starts a toggle from `origin`. Returns `false` if one is already running.
    pub fn tap(&mut self, origin: Vec2, viewport: Viewport) -> bool {
        if !self.is_idle() {
            log::trace!("reveal: tap ignored while {:?}", self.phase);
            return false;
        }

        self.origin = origin;
        self.max_radius = distance_to_farthest_corner(viewport, origin);
        self.sound.play();

        if self.max_radius <= 0.0 {
            log::debug!("reveal: nothing to cover, toggling without animation");
            self.commit(self.theme.toggled());
            self.finish();
            return true;
        }

        self.mask_visible = true;
        match self.theme {
            Theme::Light => {
                self.phase = RevealPhase::Expanding;
                self.radius = 0.0;
                self.step = Step::Animating(self.expand_tween());
            }
            Theme::Dark => {
                self.phase = RevealPhase::Contracting;
                self.commit(Theme::Light);
                self.radius = self.max_radius;
                self.step = match self.timing.settle_frames {
                    0 => Step::Animating(self.contract_tween()),
                    n => Step::Settling { frames_left: n },
                };
            }
        }

        log::debug!(
            "reveal: {:?} from ({:.1}, {:.1}) to radius {:.1}",
            self.phase,
            origin.x,
            origin.y,
            self.max_radius
        );
        true
    }

    /// Steps the running reveal by `dt` seconds.
    ///
    /// A finished tween is completed on the following call, so the frame that
    /// reaches the end value is still rendered with the mask.
    pub fn advance(&mut self, dt: f32) {
        match &mut self.step {
            Step::Idle => {}
            Step::Settling { frames_left } => {
                *frames_left = frames_left.saturating_sub(1);
                if *frames_left == 0 {
                    let mut tween = self.contract_tween();
                    self.radius = tween.advance(dt);
                    self.step = Step::Animating(tween);
                }
            }
            Step::Animating(tween) => {
                if tween.is_finished() {
                    self.complete();
                } else {
                    self.radius = tween.advance(dt);
                }
            }
        }
    }

    fn expand_tween(&self) -> Tween {
        Tween::new(0.0, self.max_radius, self.timing.expand, Easing::FAST_OUT_SLOW_IN)
    }

    fn contract_tween(&self) -> Tween {
        Tween::new(self.max_radius, 0.0, self.timing.contract, Easing::FAST_OUT_LINEAR_IN)
    }

    fn complete(&mut self) {
        if self.phase == RevealPhase::Expanding {
            self.commit(Theme::Dark);
        }
        self.finish();
    }

    fn commit(&mut self, theme: Theme) {
        self.theme = theme;
        log::info!("theme set to {}", theme.label());
    }

    fn finish(&mut self) {
        self.phase = RevealPhase::Idle;
        self.step = Step::Idle;
        self.radius = 0.0;
        self.mask_visible = false;
        if let Some(cb) = self.on_toggle.as_mut() {
            cb(self.theme.is_dark());
        }
    }
}

#[cfg(test)]
mod tests {
    use std::cell::{Cell, RefCell};
    use std::rc::Rc;

    use super::*;

    const DT: f32 = 1.0 / 60.0;

    fn phone() -> (Viewport, Vec2) {
        (Viewport::new(1080.0, 2400.0), Vec2::new(540.0, 2352.0))
    }

    /// Advances until idle, returning the radius seen after each frame.
    fn run_to_idle(c: &mut RevealController) -> Vec<f32> {
        let mut radii = Vec::new();
        for _ in 0..10_000 {
            if c.is_idle() {
                return radii;
            }
            c.advance(DT);
            radii.push(c.radius());
            assert!(c.radius() >= 0.0 && c.radius() <= c.max_radius());
            assert_eq!(c.mask_visible(), !c.is_idle());
        }
        panic!("reveal never finished");
    }

    // ── expanding ─────────────────────────────────────────────────────────

    #[test]
    fn light_tap_expands_then_commits_dark() {
        let (viewport, origin) = phone();
        let mut c = RevealController::new(Theme::Light, RevealTiming::default());

        assert!(c.tap(origin, viewport));
        assert_eq!(c.phase(), RevealPhase::Expanding);
        assert!(c.mask_visible());
        assert_eq!(c.radius(), 0.0);
        assert_eq!(c.theme(), Theme::Light);
        assert_eq!(c.max_radius(), 540.0f32.hypot(2352.0));

        let mut prev = 0.0;
        while !c.is_idle() {
            c.advance(DT);
            if c.phase() == RevealPhase::Expanding {
                assert!(c.radius() >= prev);
                assert_eq!(c.theme(), Theme::Light);
                prev = c.radius();
            }
        }

        assert_eq!(prev, c.max_radius());
        assert_eq!(c.theme(), Theme::Dark);
        assert_eq!(c.radius(), 0.0);
        assert!(!c.mask_visible());
    }

    #[test]
    fn expansion_takes_configured_duration() {
        let (viewport, origin) = phone();
        let mut c = RevealController::new(Theme::Light, RevealTiming::default());
        c.tap(origin, viewport);

        c.advance(0.5);
        assert_eq!(c.phase(), RevealPhase::Expanding);
        assert!(c.radius() > c.max_radius() * 0.5);

        c.advance(0.5);
        assert_eq!(c.radius(), c.max_radius());
        assert_eq!(c.phase(), RevealPhase::Expanding);

        c.advance(DT);
        assert!(c.is_idle());
        assert!(c.is_dark());
    }

    // ── contracting ───────────────────────────────────────────────────────

    #[test]
    fn dark_tap_flips_first_then_contracts() {
        let (viewport, origin) = phone();
        let mut c = RevealController::new(Theme::Dark, RevealTiming::default());

        assert!(c.tap(origin, viewport));
        assert_eq!(c.phase(), RevealPhase::Contracting);
        assert_eq!(c.theme(), Theme::Light);
        assert!(c.mask_visible());
        assert_eq!(c.radius(), c.max_radius());

        let radii = run_to_idle(&mut c);
        assert!(radii.windows(2).all(|w| w[1] <= w[0]));
        assert!(radii[0] < c.max_radius());
        assert_eq!(c.theme(), Theme::Light);
        assert_eq!(c.radius(), 0.0);
        assert!(!c.mask_visible());
    }

    #[test]
    fn contraction_holds_full_radius_for_settle_frames() {
        let (viewport, origin) = phone();
        let timing = RevealTiming { settle_frames: 3, ..RevealTiming::default() };
        let mut c = RevealController::new(Theme::Dark, timing);
        c.tap(origin, viewport);
        let max = c.max_radius();

        // The tap frame plus two more render at full radius.
        c.advance(DT);
        assert_eq!(c.radius(), max);
        c.advance(DT);
        assert_eq!(c.radius(), max);
        c.advance(DT);
        assert!(c.radius() < max);
    }

    #[test]
    fn zero_settle_frames_contracts_on_next_advance() {
        let (viewport, origin) = phone();
        let timing = RevealTiming { settle_frames: 0, ..RevealTiming::default() };
        let mut c = RevealController::new(Theme::Dark, timing);
        c.tap(origin, viewport);
        assert_eq!(c.radius(), c.max_radius());
        c.advance(DT);
        assert!(c.radius() < c.max_radius());
    }

    // ── re-entrancy ───────────────────────────────────────────────────────

    #[test]
    fn taps_while_running_are_ignored() {
        let (viewport, origin) = phone();
        let mut c = RevealController::new(Theme::Light, RevealTiming::default());
        c.tap(origin, viewport);
        c.advance(0.25);
        let before = c.state();

        assert!(!c.tap(Vec2::new(1.0, 1.0), Viewport::new(10.0, 10.0)));
        assert_eq!(c.state(), before);
        assert_eq!(c.max_radius(), 540.0f32.hypot(2352.0));
    }

    #[test]
    fn tap_during_settle_frame_is_ignored() {
        let (viewport, origin) = phone();
        let mut c = RevealController::new(Theme::Dark, RevealTiming::default());
        c.tap(origin, viewport);
        let before = c.state();

        assert!(!c.tap(origin, viewport));
        assert_eq!(c.state(), before);
        assert_eq!(c.theme(), Theme::Light);

        // The ignored tap must not restart or extend the settle.
        c.advance(DT);
        assert!(c.radius() < c.max_radius());
    }

    #[test]
    fn tap_while_contracting_is_ignored() {
        let (viewport, origin) = phone();
        let mut c = RevealController::new(Theme::Dark, RevealTiming::default());
        c.tap(origin, viewport);
        c.advance(DT);
        c.advance(0.7);
        assert_eq!(c.phase(), RevealPhase::Contracting);
        let before = c.state();

        assert!(!c.tap(Vec2::new(1.0, 1.0), Viewport::new(10.0, 10.0)));
        assert_eq!(c.state(), before);

        run_to_idle(&mut c);
        assert_eq!(c.theme(), Theme::Light);
    }

    #[test]
    fn two_full_cycles_restore_theme() {
        let (viewport, origin) = phone();
        let mut c = RevealController::new(Theme::Light, RevealTiming::default());

        for _ in 0..2 {
            assert!(c.tap(origin, viewport));
            run_to_idle(&mut c);
            assert!(c.tap(origin, viewport));
            run_to_idle(&mut c);
        }

        assert_eq!(c.theme(), Theme::Light);
        assert!(c.is_idle());
        assert_eq!(c.radius(), 0.0);
        assert!(!c.mask_visible());
    }

    #[test]
    fn advance_while_idle_is_a_no_op() {
        let mut c = RevealController::new(Theme::Dark, RevealTiming::default());
        c.advance(1.0);
        assert!(c.is_idle());
        assert_eq!(c.theme(), Theme::Dark);
        assert_eq!(c.radius(), 0.0);
    }

    // ── hooks ─────────────────────────────────────────────────────────────

    #[test]
    fn sound_plays_once_per_accepted_tap() {
        let (viewport, origin) = phone();
        let plays = Rc::new(Cell::new(0u32));
        let counter = plays.clone();
        let mut c = RevealController::new(Theme::Light, RevealTiming::default())
            .with_sound(move || counter.set(counter.get() + 1));

        c.tap(origin, viewport);
        c.tap(origin, viewport);
        assert_eq!(plays.get(), 1);

        run_to_idle(&mut c);
        c.tap(origin, viewport);
        assert_eq!(plays.get(), 2);
    }

    #[test]
    fn callback_reports_new_theme_after_each_toggle() {
        let (viewport, origin) = phone();
        let seen = Rc::new(RefCell::new(Vec::new()));
        let sink = seen.clone();
        let mut c = RevealController::new(Theme::Light, RevealTiming::default())
            .on_toggle(move |dark| sink.borrow_mut().push(dark));

        c.tap(origin, viewport);
        c.advance(DT);
        assert!(seen.borrow().is_empty());
        run_to_idle(&mut c);

        c.tap(origin, viewport);
        run_to_idle(&mut c);

        assert_eq!(*seen.borrow(), vec![true, false]);
    }

    // ── degenerate viewport ───────────────────────────────────────────────

    #[test]
    fn huge_viewport_keeps_radius_finite_and_in_range() {
        for theme in [Theme::Light, Theme::Dark] {
            let mut c = RevealController::new(theme, RevealTiming::default());
            assert!(c.tap(Vec2::zero(), Viewport::new(f32::MAX, f32::MAX)));
            assert!(c.max_radius().is_finite());

            for dt in [0.5, 0.5, 0.5, 1.0, 1.0] {
                c.advance(dt);
                assert!(c.radius().is_finite(), "{theme:?}");
                assert!(c.radius() >= 0.0 && c.radius() <= c.max_radius(), "{theme:?}");
            }
        }
    }

    #[test]
    fn zero_viewport_toggles_instantly_without_mask() {
        let calls = Rc::new(Cell::new(0u32));
        let counter = calls.clone();
        let mut c = RevealController::new(Theme::Light, RevealTiming::default())
            .on_toggle(move |_| counter.set(counter.get() + 1));

        assert!(c.tap(Vec2::zero(), Viewport::new(0.0, 0.0)));
        assert!(c.is_idle());
        assert!(c.is_dark());
        assert!(!c.mask_visible());
        assert_eq!(c.radius(), 0.0);
        assert_eq!(calls.get(), 1);
    }
}
