//! storydeck - terminal reader for short language-learning stories.
//!
//! Shows a filterable, sortable list of stories from a remote catalogue and
//! a detail view with the story text and its vocabulary.

use std::io;
use std::sync::Arc;
use std::time::Duration;

use clap::Parser;
use crossbeam_channel::Receiver;
use crossterm::{
    event::{self, DisableMouseCapture, EnableMouseCapture, Event, KeyEventKind},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{
    Terminal,
    backend::{Backend, CrosstermBackend},
};
use tracing::{error, info};

use storydeck::application::{App, Route};
use storydeck::infrastructure::{Config, FetchOutcome, HttpStoryApi, Loader, init_logging};
use storydeck::presentation::{Action, InputHandler, render_ui};

/// How long the event loop waits for a key before checking for fetch results.
const TICK: Duration = Duration::from_millis(100);

/// Entry point for the storydeck terminal client.
///
/// Parses configuration, sets up logging and the terminal, opens the
/// requested route and runs the event loop until the user quits.
///
/// # Errors
///
/// Returns an error if the log file cannot be created or terminal setup
/// fails.
fn main() -> Result<(), Box<dyn std::error::Error>> {
    let config = Config::parse();
    init_logging(&config.log_file)?;

    let api = HttpStoryApi::new(config.base_url.clone());
    info!(base_url = api.base_url(), route = %config.route, "starting");
    let (loader, outcomes) = Loader::new(Arc::new(api));

    let mut app = App::default();
    if let Some(request) = app.navigate(Route::parse(&config.route)) {
        loader.dispatch(request);
    }

    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let res = run_app(&mut terminal, &mut app, &loader, &outcomes);

    disable_raw_mode()?;
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture
    )?;
    terminal.show_cursor()?;

    if let Err(err) = res {
        error!(%err, "event loop failed");
        println!("{err:?}");
    }

    Ok(())
}

/// Main application event loop.
///
/// Applies finished fetches, redraws, and handles at most one key press per
/// tick. Returns when the user quits.
fn run_app<B: Backend>(
    terminal: &mut Terminal<B>,
    app: &mut App,
    loader: &Loader,
    outcomes: &Receiver<FetchOutcome>,
) -> io::Result<()> {
    loop {
        while let Ok(outcome) = outcomes.try_recv() {
            app.apply_outcome(outcome);
        }

        terminal.draw(|f| render_ui(f, app))?;

        if !event::poll(TICK)? {
            continue;
        }

        if let Event::Key(key) = event::read()? {
            if key.kind == KeyEventKind::Press {
                match InputHandler::handle_key_event(app, key.code, key.modifiers) {
                    Action::Quit => return Ok(()),
                    Action::Fetch(request) => loader.dispatch(request),
                    Action::None => {}
                }
            }
        }
    }
}
