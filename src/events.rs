use std::time::Duration;

use anyhow::Result;
use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyModifiers};

use crate::app::App;

/// Poll for events with a timeout
pub fn poll_event(timeout: Duration) -> Result<Option<Event>> {
    if event::poll(timeout)? {
        Ok(Some(event::read()?))
    } else {
        Ok(None)
    }
}

/// Handle a key event
pub fn handle_key_event(app: &mut App, key: KeyEvent) {
    // If help is shown, any key closes it
    if app.show_help {
        app.show_help = false;
        return;
    }

    if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
        app.quit();
        return;
    }

    match key.code {
        // Quit
        KeyCode::Char('q') => app.quit(),

        // Submit the current time value
        KeyCode::Enter => app.submit(),

        // Cycle through the quick-time presets (sets the field, no submit)
        KeyCode::Tab => app.form.cycle_preset(),

        // Time field editing
        KeyCode::Backspace => app.form.backspace(),
        KeyCode::Esc => app.form.clear(),

        // Table navigation
        KeyCode::Up | KeyCode::Char('k') => app.select_prev(),
        KeyCode::Down | KeyCode::Char('j') => app.select_next(),

        // Re-run the last query
        KeyCode::Char('r') => app.retry(),

        // Help
        KeyCode::Char('?') => app.toggle_help(),

        KeyCode::Char(c) if c.is_ascii_digit() => app.form.push_digit(c),

        _ => {}
    }
}
