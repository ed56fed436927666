use anyhow::Result;
use winit::dpi::LogicalSize;

use daynight_engine::coords::Vec2;
use daynight_engine::core::{App as EngineApp, AppControl, FrameCtx};
use daynight_engine::device::GpuInit;
use daynight_engine::input::{Key, MouseButton};
use daynight_engine::render::DiscRenderer;
use daynight_engine::scene::DrawList;
use daynight_engine::window::{CursorIcon, Runtime, RuntimeConfig};

use crate::controller::{RevealController, RevealTiming};
use crate::event::UiEvent;
use crate::hooks::{FeedbackSound, Silent, ToggleCallback};
use crate::palette::{Monochrome, Palette};
use crate::theme::{InitialTheme, Theme};
use crate::toggle::{ThemeToggle, ToggleLayout};

/// Window hosting a single [`ThemeToggle`].
///
/// ```rust,ignore
/// ThemeToggleApp::new()
///     .title("daynight")
///     .initial_theme(InitialTheme::System)
///     .on_theme_toggle(|dark| log::info!("dark: {dark}"))
///     .run()?;
/// ```
pub struct ThemeToggleApp {
    title:         String,
    width:         f64,
    height:        f64,
    initial_theme: InitialTheme,
    timing:        RevealTiming,
    layout:        ToggleLayout,
    gpu:           GpuInit,
    palette:       Box<dyn Palette>,
    sound:         Box<dyn FeedbackSound>,
    on_toggle:     Option<ToggleCallback>,
}

impl ThemeToggleApp {
    pub fn new() -> Self {
        let runtime = RuntimeConfig::default();
        Self {
            title:         runtime.title,
            width:         runtime.initial_size.width,
            height:        runtime.initial_size.height,
            initial_theme: InitialTheme::default(),
            timing:        RevealTiming::default(),
            layout:        ToggleLayout::default(),
            gpu:           GpuInit::default(),
            palette:       Box::new(Monochrome),
            sound:         Box::new(Silent),
            on_toggle:     None,
        }
    }

    /// Window title prefix; the current mode label is appended.
    pub fn title(mut self, t: impl Into<String>) -> Self {
        self.title = t.into();
        self
    }

    /// Initial window size in logical pixels.
    pub fn size(mut self, width: f64, height: f64) -> Self {
        self.width = width;
        self.height = height;
        self
    }

    pub fn initial_theme(mut self, theme: impl Into<InitialTheme>) -> Self {
        self.initial_theme = theme.into();
        self
    }

    pub fn timing(mut self, timing: RevealTiming) -> Self {
        self.timing = timing;
        self
    }

    pub fn layout(mut self, layout: ToggleLayout) -> Self {
        self.layout = layout;
        self
    }

    pub fn gpu(mut self, gpu: GpuInit) -> Self {
        self.gpu = gpu;
        self
    }

    pub fn palette(mut self, palette: impl Palette + 'static) -> Self {
        self.palette = Box::new(palette);
        self
    }

    /// Played when a toggle gesture starts.
    pub fn sound(mut self, sound: impl FeedbackSound + 'static) -> Self {
        self.sound = Box::new(sound);
        self
    }

    /// Called with the new "is dark" value after every completed toggle.
    pub fn on_theme_toggle(mut self, f: impl FnMut(bool) + 'static) -> Self {
        self.on_toggle = Some(Box::new(f));
        self
    }

    /// Opens the window and runs until it is closed or Escape is pressed.
    pub fn run(self) -> Result<()> {
        let config = RuntimeConfig {
            title:        self.title.clone(),
            initial_size: LogicalSize::new(self.width, self.height),
        };
        let gpu = self.gpu.clone();
        Runtime::run(config, gpu, ToggleAppState::new(self))
    }
}

impl Default for ThemeToggleApp {
    fn default() -> Self {
        Self::new()
    }
}

// ── ToggleAppState ────────────────────────────────────────────────────────

/// Pieces held until the first frame, when the window's theme is readable.
struct PendingToggle {
    initial_theme: InitialTheme,
    timing:        RevealTiming,
    layout:        ToggleLayout,
    palette:       Box<dyn Palette>,
    sound:         Box<dyn FeedbackSound>,
    on_toggle:     Option<ToggleCallback>,
}

impl PendingToggle {
    fn build(self, system: Option<Theme>) -> ThemeToggle {
        let theme = self.initial_theme.resolve(&system);
        log::info!("starting in {} ({:?})", theme.label(), self.initial_theme);

        let controller = RevealController::new(theme, self.timing)
            .with_boxed_sound(self.sound)
            .with_callback(self.on_toggle);
        ThemeToggle::new(controller)
            .layout(self.layout)
            .palette(self.palette)
    }
}

/// Internal state that implements `daynight_engine::core::App`.
struct ToggleAppState {
    title:         String,
    pending:       Option<PendingToggle>,
    toggle:        Option<ThemeToggle>,
    disc_renderer: DiscRenderer,
    draw_list:     DrawList,
    shown_label:   Option<&'static str>,
    hovered:       bool,
}

impl ToggleAppState {
    fn new(app: ThemeToggleApp) -> Self {
        Self {
            title:         app.title,
            pending:       Some(PendingToggle {
                initial_theme: app.initial_theme,
                timing:        app.timing,
                layout:        app.layout,
                palette:       app.palette,
                sound:         app.sound,
                on_toggle:     app.on_toggle,
            }),
            toggle:        None,
            disc_renderer: DiscRenderer::new(),
            draw_list:     DrawList::new(),
            shown_label:   None,
            hovered:       false,
        }
    }
}

impl EngineApp for ToggleAppState {
    fn on_frame(&mut self, ctx: &mut FrameCtx<'_, '_>) -> AppControl {
        if let Some(pending) = self.pending.take() {
            let system = ctx.window.prefers_dark().map(Theme::from_is_dark);
            self.toggle = Some(pending.build(system));
        }
        let Some(toggle) = self.toggle.as_mut() else {
            return AppControl::Continue;
        };

        // ── Layout + animation ────────────────────────────────────────────
        toggle.set_viewport(ctx.window.viewport());
        toggle.advance(ctx.time.dt);

        // ── Input ─────────────────────────────────────────────────────────
        let keys = &ctx.input_frame.keys_pressed;
        if keys.contains(&Key::Escape) {
            log::info!("escape pressed, exiting");
            return AppControl::Exit;
        }
        if let Some((x, y)) = ctx.input_frame.released_at(MouseButton::Left) {
            toggle.on_event(&UiEvent::Click { pos: Vec2::new(x, y) });
        }
        if keys.contains(&Key::Space) || keys.contains(&Key::Enter) {
            toggle.on_event(&UiEvent::Activate);
        }

        let hovered = ctx
            .input
            .pointer_pos
            .is_some_and(|(x, y)| toggle.hit(Vec2::new(x, y)));
        if hovered != self.hovered {
            self.hovered = hovered;
            ctx.window.set_cursor(if hovered { CursorIcon::Pointer } else { CursorIcon::Default });
        }

        let label = toggle.label();
        if self.shown_label != Some(label) {
            ctx.window.set_title(&format!("{} - {}", self.title, label));
            self.shown_label = Some(label);
        }

        // ── Paint + render ────────────────────────────────────────────────
        self.draw_list.clear();
        toggle.paint(&mut self.draw_list);
        let clear = toggle.background();

        let list = &mut self.draw_list;
        let discs = &mut self.disc_renderer;
        ctx.render(clear, |rctx, target| discs.render(rctx, target, list))
    }
}
