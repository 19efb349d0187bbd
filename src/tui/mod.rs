//! Full-screen terminal front end.

mod app;
mod ui;

use std::io::{self, Stdout};
use std::time::Duration;

use anyhow::Result;
use crossterm::{
    event::{self, Event, KeyEventKind},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{Terminal, backend::CrosstermBackend};
use tracing::{error, info, instrument};

pub use app::{App, MenuItem, RenderState, SETUP_FIELDS, Screen, SetupForm};

use crate::db::RecordSink;

/// Runs the terminal UI until the user quits.
///
/// Logging must not go to the terminal while this runs; `main` routes it
/// to a file before calling in.
pub fn run_tui(sink: Box<dyn RecordSink>) -> Result<()> {
    info!("Starting terminal UI");

    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let res = run_app(&mut terminal, App::new(sink));

    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    if let Err(err) = &res {
        error!(error = ?err, "Terminal UI failed");
    }
    info!("Terminal UI closed");
    res
}

/// Event loop: redraw when something changed, then wait briefly for a key.
#[instrument(skip_all)]
fn run_app(terminal: &mut Terminal<CrosstermBackend<Stdout>>, mut app: App) -> Result<()> {
    loop {
        if app.take_dirty() {
            terminal.draw(|f| ui::draw(f, &app))?;
        }

        if event::poll(Duration::from_millis(100))? {
            match event::read()? {
                Event::Key(key) if key.kind != KeyEventKind::Release => app.handle_key(key.code),
                Event::Resize(_, _) => app.mark_dirty(),
                _ => {}
            }
        }

        if app.should_quit() {
            return Ok(());
        }
    }
}
