use std::time::Instant;

use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

use crate::app::{QueryState, ResultsState};
use crate::ui::Theme;

/// Render the title header
pub fn render_header(frame: &mut Frame, theme: &Theme, area: Rect) {
    let lines = vec![
        Line::from(Span::styled("Doctor Availability Dashboard", theme.header)),
        Line::from(Span::styled(
            "Find available doctors for your preferred time",
            theme.dim,
        )),
    ];
    let paragraph = Paragraph::new(lines).centered();
    frame.render_widget(paragraph, area);
}

/// Render the status bar at the bottom
pub fn render_status_bar(
    frame: &mut Frame,
    theme: &Theme,
    query: &QueryState,
    completed_at: Option<Instant>,
    area: Rect,
) {
    let status = match query.results_state() {
        ResultsState::Loading => " Loading... | q:quit".to_string(),
        ResultsState::Error(_) => " Query failed | r:retry q:quit ?:help".to_string(),
        ResultsState::Empty => {
            " Pick a time and press Enter | Tab:presets q:quit ?:help".to_string()
        }
        ResultsState::Populated(records) => {
            let elapsed = completed_at.map_or(0.0, |at| at.elapsed().as_secs_f64());
            format!(
                " {} doctors | Updated {:.0}s ago | Enter:search r:refresh q:quit ?:help",
                records.len(),
                elapsed
            )
        }
    };

    let paragraph = Paragraph::new(status).style(theme.dim);
    frame.render_widget(paragraph, area);
}

/// Render the help overlay
pub fn render_help(frame: &mut Frame, theme: &Theme, area: Rect) {
    let help_text = vec![
        Line::from(vec![Span::styled("Keyboard Shortcuts", theme.header)]),
        Line::from(""),
        Line::from("  0-9       Type a time (HH:MM)"),
        Line::from("  Backspace Delete last digit"),
        Line::from("  Esc       Clear the time field"),
        Line::from("  Tab       Cycle quick-time presets"),
        Line::from("  Enter     Find available doctors"),
        Line::from("  r         Re-run the last query"),
        Line::from("  Up/k      Select previous row"),
        Line::from("  Down/j    Select next row"),
        Line::from("  ?         Toggle this help"),
        Line::from("  q         Quit"),
        Line::from(""),
        Line::from(vec![Span::styled(
            "Press any key to close",
            Style::default().add_modifier(Modifier::DIM),
        )]),
    ];

    let block = Block::default()
        .title(" Help ")
        .borders(Borders::ALL)
        .border_style(Style::default().fg(theme.highlight));

    let paragraph = Paragraph::new(help_text).block(block);

    // Center the help overlay
    let help_width = 42;
    let help_height = 17;
    let x = area.x + (area.width.saturating_sub(help_width)) / 2;
    let y = area.y + (area.height.saturating_sub(help_height)) / 2;
    let help_area = Rect::new(
        x,
        y,
        help_width.min(area.width),
        help_height.min(area.height),
    );

    // Clear the area behind the help
    frame.render_widget(ratatui::widgets::Clear, help_area);
    frame.render_widget(paragraph, help_area);
}
