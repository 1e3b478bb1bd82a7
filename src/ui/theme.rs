use ratatui::style::{Color, Modifier, Style};

use crate::data::ScoreTier;

/// Color scheme for the dashboard, adapted to terminal background
#[derive(Debug, Clone, Copy)]
pub struct Theme {
    pub header: Style,
    pub accent: Style,
    pub border: Color,
    pub highlight: Color,
    pub selected: Style,
    pub dim: Style,
    pub error: Style,
    pub backdrop: Color,
    tier_high: Color,
    tier_medium: Color,
    tier_low: Color,
}

impl Theme {
    pub fn dark() -> Self {
        Self {
            header: Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD),
            accent: Style::default().fg(Color::LightBlue),
            border: Color::DarkGray,
            highlight: Color::Cyan,
            selected: Style::default().add_modifier(Modifier::REVERSED),
            dim: Style::default().add_modifier(Modifier::DIM),
            error: Style::default().fg(Color::Red),
            backdrop: Color::DarkGray,
            tier_high: Color::Green,
            tier_medium: Color::Yellow,
            tier_low: Color::Red,
        }
    }

    pub fn light() -> Self {
        Self {
            header: Style::default().fg(Color::Blue).add_modifier(Modifier::BOLD),
            accent: Style::default().fg(Color::Blue),
            border: Color::Gray,
            highlight: Color::Blue,
            selected: Style::default().add_modifier(Modifier::REVERSED),
            dim: Style::default().add_modifier(Modifier::DIM),
            error: Style::default().fg(Color::Red),
            backdrop: Color::Gray,
            tier_high: Color::Green,
            tier_medium: Color::Yellow,
            tier_low: Color::Red,
        }
    }

    /// Pick a scheme from the terminal's background luminosity
    pub fn auto_detect() -> Self {
        match terminal_light::luma() {
            Ok(luma) if luma > 0.6 => Self::light(),
            _ => Self::dark(),
        }
    }

    pub fn tier_color(&self, tier: ScoreTier) -> Color {
        match tier {
            ScoreTier::High => self.tier_high,
            ScoreTier::Medium => self.tier_medium,
            ScoreTier::Low => self.tier_low,
        }
    }

    pub fn tier_style(&self, tier: ScoreTier) -> Style {
        Style::default().fg(self.tier_color(tier))
    }
}
