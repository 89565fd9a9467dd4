//! Submitted snapshot rendering

use crate::state::Submission;
use ratatui::{
    layout::Rect,
    style::{Color, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Wrap},
    Frame,
};

/// Draw the panel shown once a submission has been accepted.
///
/// The message line exists only when the snapshot carries a message.
pub fn draw(frame: &mut Frame, area: Rect, submission: &Submission) {
    let label_style = Style::default().fg(Color::DarkGray);

    let mut lines = vec![
        Line::from(vec![
            Span::styled("firstName: ", label_style),
            Span::raw(submission.first_name.as_str()),
        ]),
        Line::from(vec![
            Span::styled("lastName: ", label_style),
            Span::raw(submission.last_name.as_str()),
        ]),
        Line::from(vec![
            Span::styled("email: ", label_style),
            Span::raw(submission.email.as_str()),
        ]),
    ];
    if let Some(message) = &submission.message {
        lines.push(Line::from(vec![
            Span::styled("message: ", label_style),
            Span::raw(message.as_str()),
        ]));
    }

    let block = Block::default()
        .title(format!(
            " Submitted {} ",
            submission.submitted_at.format("%H:%M:%S")
        ))
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Green));

    frame.render_widget(
        Paragraph::new(lines).wrap(Wrap { trim: false }).block(block),
        area,
    );
}
