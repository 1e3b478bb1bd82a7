use ratatui::{
    layout::Rect,
    style::Style,
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

use crate::form::{TimeForm, QUICK_TIMES};
use crate::ui::Theme;

/// Render the query form panel: time input, validation notice, submit
/// hint, and the quick-time presets.
pub fn render(frame: &mut Frame, theme: &Theme, form: &TimeForm, busy: bool, area: Rect) {
    let mut input = vec![Span::styled(form.value().to_string(), theme.accent)];
    if !form.is_complete() {
        // Ghost of the remaining mask, with a cursor block
        let mask = "HH:MM";
        input.push(Span::styled("\u{2588}", theme.accent));
        if form.value().len() + 1 < mask.len() {
            input.push(Span::styled(
                mask[form.value().len() + 1..].to_string(),
                theme.dim,
            ));
        }
    }

    let notice = if form.is_missing() {
        Line::from(Span::styled("Please select a time", theme.error))
    } else {
        Line::from("")
    };

    let submit = if busy {
        Line::from(Span::styled("Processing...", theme.dim))
    } else {
        Line::from(vec![
            Span::styled("Enter", theme.header),
            Span::raw("  Find available doctors"),
        ])
    };

    let mut presets = Vec::new();
    for (i, preset) in QUICK_TIMES.iter().enumerate() {
        if i > 0 {
            presets.push(Span::raw("  "));
        }
        let style = if form.value() == *preset {
            Style::default().fg(theme.highlight)
        } else {
            Style::default()
        };
        presets.push(Span::styled(*preset, style));
    }

    let lines = vec![
        Line::from(""),
        Line::from(Span::raw("Time of day (24h)")),
        Line::from(input),
        notice,
        Line::from(""),
        submit,
        Line::from(""),
        Line::from(Span::styled("Quick times (Tab cycles)", theme.dim)),
        Line::from(presets),
    ];

    let block = Block::default()
        .title(" Select Time ")
        .borders(Borders::ALL)
        .border_style(Style::default().fg(theme.border));

    frame.render_widget(Paragraph::new(lines).block(block), area);
}

#[cfg(test)]
mod tests {
    use super::*;
    use ratatui::{backend::TestBackend, Terminal};

    fn draw(form: &TimeForm, busy: bool) -> ratatui::buffer::Buffer {
        let theme = Theme::dark();
        let mut terminal = Terminal::new(TestBackend::new(40, 12)).unwrap();
        terminal
            .draw(|frame| render(frame, &theme, form, busy, frame.area()))
            .unwrap();
        terminal.backend().buffer().clone()
    }

    fn buffer_text(buffer: &ratatui::buffer::Buffer) -> String {
        let width = buffer.area.width as usize;
        let mut text = String::new();
        for (i, cell) in buffer.content().iter().enumerate() {
            if i > 0 && i % width == 0 {
                text.push('\n');
            }
            text.push_str(cell.symbol());
        }
        text
    }

    #[test]
    fn test_missing_value_notice_is_shown() {
        let mut form = TimeForm::new();
        let _ = form.submit_value();
        let text = buffer_text(&draw(&form, false));
        assert!(text.contains("Please select a time"));
    }

    #[test]
    fn test_busy_disables_submit_hint() {
        let form = TimeForm::new();
        let text = buffer_text(&draw(&form, true));
        assert!(text.contains("Processing..."));
        assert!(!text.contains("Find available doctors"));
    }

    #[test]
    fn test_presets_are_listed() {
        let form = TimeForm::new();
        let text = buffer_text(&draw(&form, false));
        for preset in QUICK_TIMES {
            assert!(text.contains(preset));
        }
    }
}
