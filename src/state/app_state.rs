//! Application state: form phase, error set, submission snapshot

use chrono::{DateTime, Utc};
use uuid::Uuid;

use super::form::{ContactForm, FieldId};
use super::validation::{validate, ValidationError};

/// Submission state machine phase
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FormPhase {
    #[default]
    Editing,
    Submitted,
}

/// Immutable snapshot of the form, captured only when validation passed
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Submission {
    pub id: Uuid,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    /// Present only when the message field was non-empty at capture time
    pub message: Option<String>,
    pub submitted_at: DateTime<Utc>,
}

impl Submission {
    /// Capture the current field values
    pub fn capture(form: &ContactForm) -> Self {
        let message = if form.message.is_empty() {
            None
        } else {
            Some(form.message.value.clone())
        };
        Self {
            id: Uuid::new_v4(),
            first_name: form.first_name.value.clone(),
            last_name: form.last_name.value.clone(),
            email: form.email.value.clone(),
            message,
            submitted_at: Utc::now(),
        }
    }

    pub fn has_message(&self) -> bool {
        self.message.is_some()
    }
}

/// Mutable application state, exclusively owned by the App
#[derive(Debug, Clone, Default)]
pub struct AppState {
    pub phase: FormPhase,
    pub form: ContactForm,
    /// Current validation failure set, at most one entry per field
    pub errors: Vec<ValidationError>,
    /// Last accepted submission; present iff phase is Submitted
    pub submission: Option<Submission>,
    /// Transient feedback line for the status bar
    pub status_message: Option<String>,
}

impl AppState {
    /// Re-run validation for a single edited field.
    ///
    /// Entries for other fields are carried over untouched, so a field
    /// the user has not interacted with stays silent until submit.
    pub fn revalidate_field(&mut self, field: FieldId) {
        let fresh = validate(&self.form);
        self.errors = fresh
            .into_iter()
            .filter(|e| e.field() == field || self.errors.contains(e))
            .collect();
    }

    /// Validate everything, replacing the error set. Returns true when clean.
    pub fn revalidate_all(&mut self) -> bool {
        self.errors = validate(&self.form);
        self.errors.is_empty()
    }

    pub fn error_count(&self) -> usize {
        self.errors.len()
    }

    /// The current failure for one field, if any
    pub fn error_for(&self, field: FieldId) -> Option<ValidationError> {
        self.errors.iter().copied().find(|e| e.field() == field)
    }
}
