use ratatui::{
    layout::{Constraint, Rect},
    style::Style,
    text::{Line, Span},
    widgets::{Block, Borders, Cell, Paragraph, Row, Table, TableState},
    Frame,
};

use crate::app::{QueryState, ResultsState};
use crate::data::{match_percent, DoctorRecord, ScoreTier};
use crate::ui::Theme;

/// Width of the score bar track, in cells
const BAR_WIDTH: usize = 10;

/// Render the results panel. A pure function of the query state: the
/// same `(records, busy, error)` always paints the same thing.
pub fn render(frame: &mut Frame, theme: &Theme, query: &QueryState, selected: usize, area: Rect) {
    match query.results_state() {
        ResultsState::Loading => render_notice(
            frame,
            theme,
            area,
            Span::styled("Loading doctors...", theme.accent),
            None,
        ),
        ResultsState::Error(message) => render_notice(
            frame,
            theme,
            area,
            Span::styled(format!("\u{2717} {}", message), theme.error),
            None,
        ),
        ResultsState::Empty => render_notice(
            frame,
            theme,
            area,
            Span::raw("No doctors available at this time"),
            Some(Span::styled("Try selecting a different time", theme.dim)),
        ),
        ResultsState::Populated(records) => render_table(frame, theme, records, selected, area),
    }
}

fn render_notice(
    frame: &mut Frame,
    theme: &Theme,
    area: Rect,
    message: Span,
    hint: Option<Span>,
) {
    let mut lines = Vec::new();
    let used = if hint.is_some() { 2 } else { 1 };
    for _ in 0..area.height.saturating_sub(used) / 2 {
        lines.push(Line::from(""));
    }
    lines.push(Line::from(message));
    if let Some(hint) = hint {
        lines.push(Line::from(hint));
    }

    let block = Block::default()
        .title(" Available Doctors ")
        .borders(Borders::ALL)
        .border_style(Style::default().fg(theme.border));

    frame.render_widget(Paragraph::new(lines).centered().block(block), area);
}

fn render_table(
    frame: &mut Frame,
    theme: &Theme,
    records: &[DoctorRecord],
    selected: usize,
    area: Rect,
) {
    let header = Row::new(vec![
        Cell::from("Doctor ID").style(theme.header),
        Cell::from("Login").style(theme.header),
        Cell::from("Logout").style(theme.header),
        Cell::from("Session (min)").style(theme.header),
        Cell::from("Surveys").style(theme.header),
        Cell::from("Match Score").style(theme.header),
    ])
    .height(1);

    let rows: Vec<Row> = records
        .iter()
        .map(|record| {
            Row::new(vec![
                Cell::from(record.id.clone()),
                Cell::from(format!("{}:00", record.login_hour)),
                Cell::from(format!("{}:00", record.logout_hour)),
                Cell::from(format!("{}", record.session_duration_minutes.round() as i64)),
                Cell::from(record.survey_attempt_count.to_string()),
                Cell::from(score_cell(theme, record)),
            ])
        })
        .collect();

    let widths = [
        Constraint::Min(12),
        Constraint::Length(6),
        Constraint::Length(6),
        Constraint::Length(13),
        Constraint::Length(7),
        Constraint::Min(18),
    ];

    let table = Table::new(rows, widths)
        .header(header)
        .block(
            Block::default()
                .title(format!(" Available Doctors ({}) ", records.len()))
                .borders(Borders::ALL)
                .border_style(Style::default().fg(theme.border)),
        )
        .row_highlight_style(theme.selected)
        .highlight_symbol("> ");

    let mut state = TableState::default();
    state.select(Some(selected.min(records.len().saturating_sub(1))));

    frame.render_stateful_widget(table, area, &mut state);
}

/// Score bar plus percentage, colored by tier
fn score_cell(theme: &Theme, record: &DoctorRecord) -> Line<'static> {
    let percent = match_percent(record.match_probability);
    let tier = ScoreTier::from_percent(percent);
    let filled = ((percent / 100.0) * BAR_WIDTH as f64).round() as usize;
    let filled = filled.min(BAR_WIDTH);

    Line::from(vec![
        Span::styled("\u{2588}".repeat(filled), theme.tier_style(tier)),
        Span::styled("\u{2591}".repeat(BAR_WIDTH - filled), theme.dim),
        Span::raw(format!(" {:.1}%", percent)),
    ])
}
