use daynight_engine::coords::{Rect, Vec2, Viewport};
use daynight_engine::paint::Color;
use daynight_engine::scene::{DrawList, ZIndex};

use crate::controller::{RevealController, RevealState};
use crate::event::{EventResult, UiEvent};
use crate::palette::{Monochrome, Palette};
use crate::theme::Theme;

const Z_REVEAL: ZIndex = ZIndex::new(0);
const Z_BUTTON: ZIndex = ZIndex::new(1);
const Z_GLYPH: ZIndex = ZIndex::new(2);
const Z_GLYPH_CUT: ZIndex = ZIndex::new(3);

/// Where the round toggle button sits in the window.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct ToggleLayout {
    pub diameter: f32,
    /// Distance from the top of the window to the top of the button.
    pub top: f32,
}

impl Default for ToggleLayout {
    fn default() -> Self {
        Self { diameter: 64.0, top: 104.0 }
    }
}

impl ToggleLayout {
    /// Button rect, horizontally centered in `viewport`.
    pub fn button_rect(&self, viewport: Viewport) -> Rect {
        let viewport = viewport.sanitized();
        let d = self.diameter.max(0.0);
        let center = Vec2::new(viewport.width * 0.5, self.top + d * 0.5);
        Rect::from_center(center, Vec2::new(d, d))
    }
}

/// Round button that flips the theme behind a circular reveal.
///
/// Owns the [`RevealController`]; the host feeds it the viewport each frame,
/// routes clicks to it, and paints it into a [`DrawList`].
pub struct ThemeToggle {
    controller: RevealController,
    layout: ToggleLayout,
    palette: Box<dyn Palette>,
    viewport: Viewport,
}

impl ThemeToggle {
    pub fn new(controller: RevealController) -> Self {
        Self {
            controller,
            layout: ToggleLayout::default(),
            palette: Box::new(Monochrome),
            viewport: Viewport::default(),
        }
    }

    pub fn layout(mut self, layout: ToggleLayout) -> Self {
        self.layout = layout;
        self
    }

    pub fn palette(mut self, palette: Box<dyn Palette>) -> Self {
        self.palette = palette;
        self
    }

    pub fn set_viewport(&mut self, viewport: Viewport) {
        self.viewport = viewport;
    }

    pub fn viewport(&self) -> Viewport {
        self.viewport
    }

    pub fn controller(&self) -> &RevealController {
        &self.controller
    }

    pub fn button_rect(&self) -> Rect {
        self.layout.button_rect(self.viewport)
    }

    /// Reveal origin: the button center.
    pub fn origin(&self) -> Vec2 {
        self.button_rect().center()
    }

    pub fn hit(&self, pos: Vec2) -> bool {
        let rect = self.button_rect();
        pos.distance(rect.center()) <= rect.size.x * 0.5
    }

    pub fn theme(&self) -> Theme {
        self.controller.theme()
    }

    pub fn label(&self) -> &'static str {
        self.theme().label()
    }

    pub fn state(&self) -> RevealState {
        self.controller.state()
    }

    /// Window clear color for this frame.
    pub fn background(&self) -> Color {
        self.palette.base(self.theme())
    }

    pub fn advance(&mut self, dt: f32) {
        self.controller.advance(dt);
    }

    /// Starts a toggle from the button center.
    pub fn activate(&mut self) -> bool {
        let origin = self.origin();
        self.controller.tap(origin, self.viewport)
    }

    pub fn on_event(&mut self, event: &UiEvent) -> EventResult {
        match event {
            UiEvent::Click { pos } if self.hit(*pos) => {
                self.activate();
                EventResult::Consumed
            }
            UiEvent::Click { .. } => EventResult::Ignored,
            UiEvent::Activate => {
                self.activate();
                EventResult::Consumed
            }
        }
    }

    pub fn paint(&self, list: &mut DrawList) {
        let theme = self.theme();
        let state = self.controller.state();

        if state.mask_visible {
            list.push_disc(Z_REVEAL, state.origin, state.radius, self.palette.overlay(theme));
        }

        let rect = self.button_rect();
        let center = rect.center();
        let button = self.palette.button(theme);
        list.push_disc(Z_BUTTON, center, rect.size.x * 0.5, button);

        let glyph = self.palette.glyph(theme);
        match theme {
            Theme::Light => paint_moon(list, center, glyph, button),
            Theme::Dark => paint_sun(list, center, glyph),
        }
    }
}

/// Crescent: a full disc with an offset disc of the button color bitten out.
fn paint_moon(list: &mut DrawList, center: Vec2, glyph: Color, button: Color) {
    list.push_disc(Z_GLYPH, center, 12.0, glyph);
    list.push_disc(Z_GLYPH_CUT, center + Vec2::new(6.0, -5.0), 10.0, button);
}

fn paint_sun(list: &mut DrawList, center: Vec2, glyph: Color) {
    const RAYS: usize = 8;
    list.push_disc(Z_GLYPH, center, 8.0, glyph);
    for i in 0..RAYS {
        let angle = i as f32 * std::f32::consts::TAU / RAYS as f32;
        let offset = Vec2::new(angle.cos(), angle.sin()) * 14.0;
        list.push_disc(Z_GLYPH, center + offset, 2.5, glyph);
    }
}
