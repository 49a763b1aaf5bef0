//! TPRJ - Terminal Projects Client
//!
//! A terminal client for a project-hosting service. Shows the caller's
//! projects, opens a create-project dialog (automatically when there are
//! none yet), and navigates to a project's dashboard once it exists.

use std::io;
use crossterm::{
    event::{self, DisableMouseCapture, EnableMouseCapture, Event, KeyCode, KeyEventKind},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{
    backend::{Backend, CrosstermBackend},
    Terminal,
};

mod domain;
mod application;
mod infrastructure;
mod presentation;

use application::{App, AppMode, ToastKind, LOAD_PROJECTS_TOAST};
use infrastructure::{Config, HttpProjectsGateway, ProjectsGateway};
use presentation::{render_ui, InputHandler};

/// Entry point for the tprj terminal client.
///
/// Loads configuration, fetches the caller's projects, sets up the
/// terminal interface, and runs the main event loop until the user
/// quits.
///
/// # Errors
///
/// Returns an error if the configuration file is invalid or if terminal
/// setup fails.
fn main() -> Result<(), Box<dyn std::error::Error>> {
    let config = Config::load()?;
    let gateway = HttpProjectsGateway::new(&config);

    // A failed fetch is not fatal: start on an empty list with an error
    // toast, and skip the automatic create dialog so the dismiss guard
    // cannot trap the user without a reachable service.
    let mut app = match gateway.list_projects() {
        Ok(projects) => App::new(projects),
        Err(error) => {
            let mut app = App::default();
            app.toasts.show(
                LOAD_PROJECTS_TOAST,
                ToastKind::Error,
                format!("Could not load projects: {}", error),
            );
            app
        }
    };

    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let res = run_app(&mut terminal, &mut app, &gateway);

    disable_raw_mode()?;
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture
    )?;
    terminal.show_cursor()?;

    if let Err(err) = res {
        println!("{err:?}");
    }

    Ok(())
}

/// Main application event loop.
///
/// Handles terminal rendering and keyboard input processing.
/// Continues running until the user presses 'q' outside the dialog.
///
/// # Errors
///
/// Returns an IO error if terminal operations fail.
fn run_app<B: Backend>(
    terminal: &mut Terminal<B>,
    app: &mut App,
    gateway: &dyn ProjectsGateway,
) -> io::Result<()> {
    loop {
        terminal.draw(|f| render_ui(f, app))?;

        if let Event::Key(key) = event::read()? {
            if key.kind == KeyEventKind::Press {
                match key.code {
                    KeyCode::Char('q') if matches!(app.mode, AppMode::List) => return Ok(()),
                    _ => InputHandler::handle_key_event(app, gateway, key.code, key.modifiers),
                }
            }
        }
    }
}
