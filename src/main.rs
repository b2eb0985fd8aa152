mod app;
mod config;
mod error;
mod form;
mod task;
mod todo_list;
mod ui;

use crate::app::{App, Control};
use crate::config::Config;
use crate::error::{Result, TodoError};
use crossterm::{
    event::{self, Event},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{
    backend::{Backend, CrosstermBackend},
    Terminal,
};
use std::io;

fn main() -> Result<()> {
    let config = match Config::from_env() {
        // --help, --version and usage errors print and exit the clap way
        Err(TodoError::Args(err)) => err.exit(),
        other => other?,
    };
    config::init_logging(&config)?;
    log::info!("starting with {:?}", config);

    // Terminal setup
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let mut app = App::new(&config);
    let result = run_app(&mut terminal, &mut app);

    // Restore terminal
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    if let Err(err) = &result {
        log::error!("event loop failed: {}", err);
    }
    result?;

    if config.print_on_exit {
        println!("{}", app.list.export_json()?);
    }
    Ok(())
}

fn run_app<B: Backend>(terminal: &mut Terminal<B>, app: &mut App) -> io::Result<()> {
    loop {
        terminal.draw(|f| ui::draw(f, app))?;

        if let Event::Key(key) = event::read()? {
            if app.handle_key(key) == Control::Quit {
                return Ok(());
            }
        }
    }
}
