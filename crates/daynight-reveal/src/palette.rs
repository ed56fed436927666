use daynight_engine::paint::Color;

use crate::theme::Theme;

/// Colors for each theme. Supplied by the host.
pub trait Palette {
    /// Full-window background while `theme` is committed.
    fn background(&self, theme: Theme) -> Color;
    /// Toggle button fill.
    fn button(&self, theme: Theme) -> Color;
    /// Moon/sun glyph fill.
    fn glyph(&self, theme: Theme) -> Color;

    /// Color painted under the reveal circle.
    fn base(&self, theme: Theme) -> Color {
        self.background(theme)
    }

    /// Color of the reveal circle: the background of the opposite theme.
    fn overlay(&self, theme: Theme) -> Color {
        self.background(theme.toggled())
    }
}

/// White/black palette with gray buttons.
#[derive(Debug, Copy, Clone, Default)]
pub struct Monochrome;

impl Palette for Monochrome {
    fn background(&self, theme: Theme) -> Color {
        match theme {
            Theme::Light => Color::white(),
            Theme::Dark => Color::black(),
        }
    }

    fn button(&self, theme: Theme) -> Color {
        match theme {
            Theme::Light => Color::from_rgb_hex(0x444444),
            Theme::Dark => Color::from_rgb_hex(0x888888),
        }
    }

    fn glyph(&self, theme: Theme) -> Color {
        match theme {
            Theme::Light => Color::white(),
            Theme::Dark => Color::from_rgb_hex(0xFFC83D),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn overlay_is_opposite_background() {
        let p = Monochrome;
        assert_eq!(p.overlay(Theme::Light), Color::black());
        assert_eq!(p.overlay(Theme::Dark), Color::white());
        assert_eq!(p.base(Theme::Light), Color::white());
    }

    #[test]
    fn monochrome_colors_are_opaque() {
        let p = Monochrome;
        for t in [Theme::Light, Theme::Dark] {
            assert!(p.background(t).is_opaque());
            assert!(p.button(t).is_opaque());
            assert!(p.glyph(t).is_opaque());
        }
    }
}
