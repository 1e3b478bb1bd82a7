use ratatui::{
    layout::Rect,
    symbols::Marker,
    widgets::canvas::{Canvas, Line, Points},
    Frame,
};

use crate::backdrop::Backdrop;
use crate::ui::Theme;

/// Paint the particle field across the whole area. Drawn first each
/// frame, so the dashboard panels layer cleanly on top of it.
pub fn render(frame: &mut Frame, theme: &Theme, backdrop: &Backdrop, area: Rect) {
    let canvas = Canvas::default()
        .marker(Marker::Dot)
        .x_bounds([0.0, backdrop.width()])
        .y_bounds([0.0, backdrop.height()])
        .paint(|ctx| {
            for (a, b) in backdrop.links() {
                ctx.draw(&Line {
                    x1: a.x,
                    y1: a.y,
                    x2: b.x,
                    y2: b.y,
                    color: theme.backdrop,
                });
            }
            let coords: Vec<(f64, f64)> = backdrop
                .particles()
                .iter()
                .filter(|p| p.size > 1.0)
                .map(|p| (p.x, p.y))
                .collect();
            ctx.draw(&Points {
                coords: &coords,
                color: theme.backdrop,
            });
        });

    frame.render_widget(canvas, area);
}
