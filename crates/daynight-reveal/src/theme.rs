use crate::hooks::SystemTheme;

/// The two-valued color scheme.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Default)]
pub enum Theme {
    #[default]
    Light,
    Dark,
}

impl Theme {
    pub fn from_is_dark(is_dark: bool) -> Self {
        if is_dark { Theme::Dark } else { Theme::Light }
    }

    pub fn is_dark(self) -> bool {
        matches!(self, Theme::Dark)
    }

    pub fn toggled(self) -> Self {
        match self {
            Theme::Light => Theme::Dark,
            Theme::Dark => Theme::Light,
        }
    }

    /// Human-readable mode label.
    pub fn label(self) -> &'static str {
        match self {
            Theme::Light => "Light Mode",
            Theme::Dark => "Dark Mode",
        }
    }
}

/// Where the starting theme comes from.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Default)]
pub enum InitialTheme {
    Light,
    Dark,
    /// Follow the platform preference, falling back to light.
    #[default]
    System,
}

impl InitialTheme {
    pub fn resolve(self, system: &dyn SystemTheme) -> Theme {
        match self {
            InitialTheme::Light => Theme::Light,
            InitialTheme::Dark => Theme::Dark,
            InitialTheme::System => system.preferred().unwrap_or_default(),
        }
    }
}

impl From<Theme> for InitialTheme {
    fn from(theme: Theme) -> Self {
        match theme {
            Theme::Light => InitialTheme::Light,
            Theme::Dark => InitialTheme::Dark,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::hooks::NoSystemTheme;

    #[test]
    fn toggling_twice_is_identity() {
        for t in [Theme::Light, Theme::Dark] {
            assert_eq!(t.toggled().toggled(), t);
            assert_ne!(t.toggled(), t);
        }
    }

    #[test]
    fn labels_name_the_mode() {
        assert_eq!(Theme::Light.label(), "Light Mode");
        assert_eq!(Theme::Dark.label(), "Dark Mode");
    }

    #[test]
    fn explicit_initial_theme_ignores_system() {
        let system = Some(Theme::Dark);
        assert_eq!(InitialTheme::Light.resolve(&system), Theme::Light);
        assert_eq!(InitialTheme::Dark.resolve(&NoSystemTheme), Theme::Dark);
    }

    #[test]
    fn system_initial_theme_follows_preference_or_falls_back_to_light() {
        assert_eq!(InitialTheme::System.resolve(&Some(Theme::Dark)), Theme::Dark);
        assert_eq!(InitialTheme::System.resolve(&NoSystemTheme), Theme::Light);
        assert_eq!(InitialTheme::System.resolve(&None::<Theme>), Theme::Light);
    }
}
