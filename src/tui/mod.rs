mod app;
mod event_handler;
mod ui_renderer;

pub use app::App;

use crate::fs::FsAccess;
use anyhow::Result;
use crossterm::{
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::prelude::{CrosstermBackend, Terminal};
use std::io::{self, Stdout};

/// Runs the interactive session until the user quits. Returns the final
/// app state when the user confirmed the copy, `None` on cancel.
pub fn run(mut app: App, fs: &dyn FsAccess) -> Result<Option<App>> {
    let mut terminal = init_terminal()?;

    while !app.quit() {
        terminal.draw(|frame| ui_renderer::ui_frame(frame, &app))?;
        event_handler::handle_events(&mut app, fs)?;
    }

    restore_terminal(terminal)?;

    if app.confirmed() { Ok(Some(app)) } else { Ok(None) }
}

fn init_terminal() -> Result<Terminal<CrosstermBackend<Stdout>>> {
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    Terminal::new(backend).map_err(Into::into)
}

fn restore_terminal(mut terminal: Terminal<CrosstermBackend<Stdout>>) -> Result<()> {
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor().map_err(Into::into)
}
