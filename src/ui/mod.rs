//! UI module for rendering the TUI

mod components;
mod errors;
mod field_renderer;
mod form_view;
mod layout;
mod result_view;

use crate::app::App;
use ratatui::Frame;

/// Main draw function
pub fn draw(frame: &mut Frame, app: &App) {
    let areas = layout::create_layout(frame.area(), app);

    layout::draw_header(frame, areas.header);
    form_view::draw(frame, areas.form, app);
    errors::draw_errors(frame, areas.errors, &app.state.errors);

    // Result panel exists only in the submitted phase
    if let Some(result_area) = areas.result {
        if let Some(submission) = &app.state.submission {
            result_view::draw(frame, result_area, submission);
        }
    }

    layout::draw_status_bar(frame, app);
}
