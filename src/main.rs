use chrono::Utc;
use clap::Parser;
use claimdesk::{
    app::{update, AppState},
    cli::Cli,
    error::ClaimdeskError,
    event::AppEvent,
    logging,
    model::Dataset,
    paths::Paths,
    view::render,
};
use color_eyre::eyre::Result;
use crossterm::{
    event::{self, Event, KeyEventKind},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};
use std::time::{Duration, Instant};

fn main() -> Result<()> {
    // Install color-eyre panic handler for better error messages
    color_eyre::install()?;

    let cli = Cli::parse();
    let paths = Paths::resolve();

    // Startup problems are shown in the header instead of aborting
    let mut startup_events = Vec::new();

    if let Err(e) = logging::init(&paths.log_file, &cli.log_level) {
        startup_events.push(AppEvent::Error {
            source: "logging".to_string(),
            error: e,
        });
    }
    log::info!("claimdesk starting as {:?}", cli.role);

    let mut state = AppState::new().with_role(cli.role);

    if let Some(path) = cli.data.as_deref() {
        match Dataset::load_or_mock(Some(path)) {
            Ok(dataset) => startup_events.push(AppEvent::DatasetLoaded(dataset)),
            Err(e) => startup_events.push(AppEvent::Error {
                source: path.display().to_string(),
                error: ClaimdeskError::from(e),
            }),
        }
    }

    for event in startup_events {
        state = update(state, event);
    }

    // Terminal initialization
    enable_raw_mode()?;
    let mut stdout = std::io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let result = run_event_loop(&mut terminal, state, cli.tick_rate());

    // Terminal cleanup (always execute even if event loop errored)
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    log::info!("claimdesk exiting");
    result
}

/// Main event loop following Elm Architecture.
fn run_event_loop(
    terminal: &mut Terminal<CrosstermBackend<std::io::Stdout>>,
    mut state: AppState,
    tick_rate: Duration,
) -> Result<()> {
    let mut last_tick = Instant::now();

    loop {
        terminal.draw(|frame| render(&state, frame))?;

        let timeout = tick_rate
            .checked_sub(last_tick.elapsed())
            .unwrap_or(Duration::ZERO);

        if event::poll(timeout)? {
            if let Event::Key(key) = event::read()? {
                if key.kind == KeyEventKind::Press {
                    state = update(state, AppEvent::Key(key));
                }
            }
        }

        if last_tick.elapsed() >= tick_rate {
            state = update(state, AppEvent::Tick(Utc::now()));
            last_tick = Instant::now();
        }

        if state.should_quit {
            break;
        }
    }

    Ok(())
}
