pub mod app;
pub mod event;
pub mod theme;
pub mod ui;

pub use app::App;
pub use theme::{resolve_theme, Theme, ThemeColors};

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use event::{Event, EventHandler};

pub fn run_tui(mut app: App) -> anyhow::Result<()> {
    // Buffer log output while TUI is active to prevent it corrupting the display
    crate::logging::activate();

    // Init terminal (sets up panic hooks automatically)
    let mut terminal = ratatui::init();
    let events = EventHandler::new(250);

    let result = run_loop(&mut terminal, &mut app, &events);

    // Restore terminal
    ratatui::restore();

    // Flush buffered log lines now that the terminal is restored
    for line in crate::logging::drain() {
        eprintln!("{}", line);
    }

    result
}

fn run_loop(
    terminal: &mut ratatui::DefaultTerminal,
    app: &mut App,
    events: &EventHandler,
) -> anyhow::Result<()> {
    loop {
        terminal.draw(|frame| ui::draw(frame, app))?;

        match events.next()? {
            Event::Key(key) => handle_key_event(app, key),
            Event::Tick => app.update_flash(),
        }

        if app.should_quit {
            return Ok(());
        }
    }
}

fn handle_key_event(app: &mut App, key: KeyEvent) {
    match app.input_mode {
        app::InputMode::Normal => {
            match key.code {
                // Quit
                KeyCode::Char('q') => app.should_quit = true,
                KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                    app.should_quit = true
                }

                // Navigation
                KeyCode::Char('j') | KeyCode::Down => app.next_row(),
                KeyCode::Char('k') | KeyCode::Up => app.previous_row(),

                // Minimum score
                KeyCode::Char('+') | KeyCode::Char('=') => app.raise_min_score(),
                KeyCode::Char('-') => app.lower_min_score(),

                // Location search
                KeyCode::Char('/') => app.start_location_input(),
                KeyCode::Esc => app.clear_location(),

                // Open LinkedIn profile in browser
                KeyCode::Enter | KeyCode::Char('o') => app.open_selected(),

                // Export
                KeyCode::Char('e') => app.export_visible(),

                // Help
                KeyCode::Char('?') => app.show_help(),

                _ => {}
            }
        }
        app::InputMode::LocationInput => {
            match key.code {
                KeyCode::Enter => app.confirm_location_input(),
                KeyCode::Esc => app.cancel_location_input(),
                KeyCode::Backspace => {
                    app.location_input.pop();
                }
                // Printable input; ignore everything else (don't propagate to Normal mode)
                KeyCode::Char(c) if !key.modifiers.contains(KeyModifiers::CONTROL) => {
                    app.location_input.push(c);
                }
                _ => {}
            }
        }
        app::InputMode::Help => {
            // Any key exits help
            app.dismiss_help();
        }
    }
}
