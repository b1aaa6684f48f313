//! pick-tui - Interactive emoji picker for the terminal
//!
//! Draws on stderr and prints the picked emojis to stdout once the
//! terminal is restored, so it composes with other tools:
//!
//! ```text
//! pick-tui | wl-copy
//! ```

use libemojipick::logging;
use libemojipick::Config;
use pick_tui::{
    app::{event::EventHandler, map_event, AppState},
    error::Result,
    services::ServiceHandle,
    terminal::{install_panic_hook, restore_terminal, setup_terminal, Tui},
    ui,
};

fn main() {
    // The screen owns stderr, so logs only go to a file
    if let Ok(path) = std::env::var("EMOJIPICK_LOG_FILE") {
        logging::default_config().with_file(path.into()).init();
    }

    install_panic_hook();

    match run() {
        Ok(state) => {
            if !state.selections.is_empty() {
                println!("{}", state.selections.concat());
            }
            std::process::exit(state.exit_code());
        }
        Err(e) => {
            eprintln!("Error: {}", e);
            std::process::exit(e.exit_code());
        }
    }
}

fn run() -> Result<AppState> {
    let config = Config::load()?;
    let mut services = ServiceHandle::new(&config)?;

    let mut terminal = setup_terminal()?;
    let result = run_app(&mut terminal, &mut services);
    restore_terminal(terminal)?;

    result
}

fn run_app(terminal: &mut Tui, services: &mut ServiceHandle) -> Result<AppState> {
    let mut state = services.sync(AppState::new());
    let event_handler = EventHandler::new(state.config.tick_rate_ms);

    loop {
        terminal.draw(|frame| {
            ui::render(frame, &state, services.picker());
        })?;

        let event = event_handler.next()?;
        if let Some(action) = map_event(&event, &state) {
            tracing::trace!(?action, "Dispatching");
            state = services.dispatch(state, action);
        }

        if state.should_quit {
            break;
        }
    }

    tracing::debug!(picked = state.selections.len(), canceled = state.canceled, "Picker closed");
    Ok(state)
}
