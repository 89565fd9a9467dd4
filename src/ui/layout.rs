//! Layout components (header, status bar)

use crate::app::App;
use crate::state::FormPhase;
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

/// Rows given to the result panel when a submission is shown
const RESULT_PANEL_HEIGHT: u16 = 7;

/// Screen regions for one draw pass
pub struct Areas {
    pub header: Rect,
    pub form: Rect,
    pub errors: Rect,
    /// Present only in the submitted phase
    pub result: Option<Rect>,
}

/// Create the main vertical layout
pub fn create_layout(area: Rect, app: &App) -> Areas {
    let error_rows = app.state.error_count() as u16;
    let show_result = matches!(app.state.phase, FormPhase::Submitted);

    let mut constraints = vec![
        Constraint::Length(2),          // Header
        Constraint::Min(17),            // Form (4 fields + submit button)
        Constraint::Length(error_rows), // Error indicators
    ];
    if show_result {
        constraints.push(Constraint::Length(RESULT_PANEL_HEIGHT));
    }
    constraints.push(Constraint::Length(1)); // Status bar

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints(constraints)
        .split(area);

    Areas {
        header: chunks[0],
        form: chunks[1],
        errors: chunks[2],
        result: show_result.then(|| chunks[3]),
    }
}

/// Draw the header
pub fn draw_header(frame: &mut Frame, area: Rect) {
    let header = Paragraph::new(Line::from(Span::styled(
        "Contact Form",
        Style::default()
            .fg(Color::Cyan)
            .add_modifier(Modifier::BOLD),
    )));
    frame.render_widget(header, area);
}

/// Draw the status bar
pub fn draw_status_bar(frame: &mut Frame, app: &App) {
    let area = frame.area();
    let status_area = Rect {
        x: 0,
        y: area.height.saturating_sub(1),
        width: area.width,
        height: 1,
    };

    // Build status bar content
    let mut spans = vec![];

    if app.show_help {
        spans.push(Span::styled(
            " Tab:next  Enter/^S:submit  Esc:quit",
            Style::default().fg(Color::Gray),
        ));
    }

    let sent = app.recorder.recorded_count();
    if sent > 0 {
        spans.push(Span::raw(" | "));
        spans.push(Span::styled(
            format!("{sent} sent"),
            Style::default().fg(Color::Green),
        ));
    }

    if let Some(msg) = &app.state.status_message {
        spans.push(Span::raw(" | "));
        spans.push(Span::styled(msg, Style::default().fg(Color::Green)));
    }

    let status = Paragraph::new(Line::from(spans)).style(Style::default().bg(Color::DarkGray));
    frame.render_widget(status, status_area);
}
