//! Validation error indicators

use crate::state::ValidationError;
use ratatui::{
    layout::Rect,
    style::{Color, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

/// Draw one indicator line per validation failure
pub fn draw_errors(frame: &mut Frame, area: Rect, errors: &[ValidationError]) {
    let lines: Vec<Line> = errors
        .iter()
        .map(|error| {
            Line::from(vec![
                Span::styled("✗ ", Style::default().fg(Color::Red)),
                Span::styled(error.message(), Style::default().fg(Color::Red)),
            ])
        })
        .collect();

    frame.render_widget(Paragraph::new(lines), area);
}
