use std::io::Write;

use anyhow::Result;

use daynight_engine::logging::{init_logging, LoggingConfig};
use daynight_reveal::prelude::*;

/// Rings the terminal bell on stderr; the closest thing to a click sound
/// without pulling in an audio stack.
struct TerminalBell;

impl FeedbackSound for TerminalBell {
    fn play(&mut self) {
        let mut err = std::io::stderr().lock();
        if let Err(e) = err.write_all(b"\x07").and_then(|_| err.flush()) {
            log::debug!("terminal bell failed: {e}");
        }
    }
}

fn main() -> Result<()> {
    init_logging(LoggingConfig::default());

    let app = ThemeToggleApp::new()
        .title("daynight")
        .size(412.0, 915.0)
        .initial_theme(InitialTheme::System)
        .on_theme_toggle(|dark| log::info!("dark mode is now: {dark}"));

    let app = if std::env::var_os("DAYNIGHT_MUTE").is_some() {
        app.sound(Silent)
    } else {
        app.sound(TerminalBell)
    };

    app.run()
}
