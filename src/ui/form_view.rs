//! Contact form rendering (fields and submit button)

use super::components::{render_button, BUTTON_HEIGHT};
use super::field_renderer::draw_field;
use crate::app::App;
use crate::state::FieldId;
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    Frame,
};

/// Width of the submit button box
const SUBMIT_BUTTON_WIDTH: u16 = 12;

/// Draw the form fields and the submit button
pub fn draw(frame: &mut Frame, area: Rect, app: &App) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),             // First name
            Constraint::Length(3),             // Last name
            Constraint::Length(3),             // Email
            Constraint::Min(5),                // Message
            Constraint::Length(BUTTON_HEIGHT), // Submit
        ])
        .split(area);

    let state = &app.state;
    let form = &state.form;
    let fields = [
        (FieldId::FirstName, &form.first_name),
        (FieldId::LastName, &form.last_name),
        (FieldId::Email, &form.email),
        (FieldId::Message, &form.message),
    ];
    for (index, (id, field)) in fields.into_iter().enumerate() {
        draw_field(
            frame,
            chunks[index],
            field,
            form.active_field_index == index,
            state.error_for(id).is_some(),
        );
    }

    let button_area = Rect {
        width: chunks[4].width.min(SUBMIT_BUTTON_WIDTH),
        ..chunks[4]
    };
    render_button(frame, button_area, "Submit", form.is_button_row_active());
}
