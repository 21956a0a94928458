use std::io;
use std::time::Duration;

use anyhow::{Context, Result};
use crossterm::{
    event::{self, Event, KeyEventKind},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use estimator::configs::EstimatorConfig;
use log::info;
use ratatui::{backend::CrosstermBackend, Terminal};

use crate::ui::screens::{menu, Action, Screen};

struct TerminalGuard;

impl TerminalGuard {
    fn enter() -> Result<Self> {
        enable_raw_mode()?;
        execute!(io::stdout(), EnterAlternateScreen)?;
        Ok(Self)
    }
}

impl Drop for TerminalGuard {
    fn drop(&mut self) {
        let _ = disable_raw_mode();
        let _ = execute!(io::stdout(), LeaveAlternateScreen);
    }
}

/// Trains the session and runs the TUI application.
///
/// # Arguments
/// * `config_path` - An optional JSON config, the defaults are used without one.
///
/// # Errors
/// Returns an error if the config is invalid, training fails, or terminal setup or
/// rendering fails.
pub fn run(config_path: Option<String>) -> Result<()> {
    let config = match config_path {
        Some(path) => EstimatorConfig::load(&path)
            .with_context(|| format!("loading {path}"))?,
        None => EstimatorConfig::default(),
    };
    info!("unknown regions are handled with {:?}", config.unknown_category);

    let session = estimator::start(config).context("starting the estimator session")?;

    let _guard = TerminalGuard::enter()?;

    let backend = CrosstermBackend::new(io::stdout());
    let mut terminal = Terminal::new(backend)?;
    terminal.clear()?;

    let mut screen = Screen::Menu(menu::MenuState::new());

    loop {
        terminal.draw(|f| screen.draw(f, &session))?;

        if event::poll(Duration::from_millis(120))? {
            if let Event::Key(k) = event::read()? {
                if k.kind != KeyEventKind::Press {
                    continue;
                }
                match screen.handle_key(k.code, &session) {
                    Action::Quit => break,
                    Action::Transition(next) => screen = next,
                    Action::None => {}
                }
            }
        }
    }

    terminal.show_cursor()?;
    Ok(())
}
