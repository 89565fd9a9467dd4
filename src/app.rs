//! Application state and core logic

use crate::recorder::SubmissionRecorder;
use crate::state::{AppState, FieldId, FormPhase, Submission};
use anyhow::Result;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

/// Main application struct
pub struct App {
    /// Current application state
    pub state: AppState,
    /// Recorder receiving accepted submissions
    pub recorder: Box<dyn SubmissionRecorder>,
    /// Whether to render key hints in the status bar
    pub show_help: bool,
    /// Whether the app should quit
    quit: bool,
}

impl App {
    /// Create a new App instance
    pub fn new(recorder: Box<dyn SubmissionRecorder>) -> Self {
        Self {
            state: AppState::default(),
            recorder,
            show_help: true,
            quit: false,
        }
    }

    /// Check if app should quit
    pub fn should_quit(&self) -> bool {
        self.quit
    }

    /// Handle a key event
    pub async fn handle_key(&mut self, key: KeyEvent) -> Result<()> {
        let on_button_row = self.state.form.is_button_row_active();

        match key.code {
            KeyCode::Tab => self.state.form.next_field(),
            KeyCode::BackTab => self.state.form.prev_field(),
            KeyCode::Esc => self.quit = true,
            // Submit shortcut, works from any field
            KeyCode::Char('s') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                self.submit().await;
            }
            KeyCode::Enter if on_button_row => {
                self.submit().await;
            }
            KeyCode::Enter => {
                // Enter in the message field inserts a newline; in the
                // single-line fields it submits, like a browser form
                if self.state.form.active_field_id() == Some(FieldId::Message) {
                    self.input_char('\n');
                } else {
                    self.submit().await;
                }
            }
            KeyCode::Char(c) if !on_button_row => self.input_char(c),
            KeyCode::Backspace if !on_button_row => {
                if let Some(id) = self.state.form.active_field_id() {
                    self.state.form.field_mut(id).pop_char();
                    self.state.revalidate_field(id);
                }
            }
            _ => {}
        }
        Ok(())
    }

    /// Insert a character into the active field and revalidate that field
    fn input_char(&mut self, c: char) {
        let Some(id) = self.state.form.active_field_id() else {
            return;
        };
        self.state.form.field_mut(id).push_char(c);
        self.state.revalidate_field(id);
        tracing::trace!(field = self.state.form.field(id).name, "field edited");
    }

    /// Run full validation; capture and record a snapshot when clean
    async fn submit(&mut self) {
        if !self.state.revalidate_all() {
            tracing::debug!(errors = self.state.error_count(), "submission rejected");
            return;
        }

        let submission = Submission::capture(&self.state.form);
        match self.recorder.record(submission.clone()).await {
            Ok(()) => {
                tracing::info!(
                    id = %submission.id,
                    has_message = submission.has_message(),
                    "submission recorded"
                );
                self.state.submission = Some(submission);
                self.state.phase = FormPhase::Submitted;
                self.state.status_message = Some("Submitted!".to_string());
            }
            Err(err) => {
                tracing::warn!(error = %err, "recorder rejected submission");
                self.state.status_message = Some(format!("Failed to record submission: {err}"));
            }
        }
    }
}
