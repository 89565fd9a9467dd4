//! Pure validation over the contact form

use super::form::{ContactForm, FieldId};

/// Minimum number of characters accepted for the first name
pub const MIN_FIRST_NAME_CHARS: usize = 5;

/// A single field validation failure
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValidationError {
    FirstNameTooShort,
    LastNameRequired,
    EmailRequired,
    EmailInvalid,
}

impl ValidationError {
    /// The field this failure is tied to
    pub fn field(&self) -> FieldId {
        match self {
            Self::FirstNameTooShort => FieldId::FirstName,
            Self::LastNameRequired => FieldId::LastName,
            Self::EmailRequired | Self::EmailInvalid => FieldId::Email,
        }
    }

    /// Human-readable indicator text
    pub fn message(&self) -> &'static str {
        match self {
            Self::FirstNameTooShort => "firstName must have at least 5 characters",
            Self::LastNameRequired => "lastName is a required field",
            Self::EmailRequired => "email is a required field",
            Self::EmailInvalid => "email must be a valid email address",
        }
    }
}

/// Validate the whole form.
///
/// At most one failure per field, in field order. The message field is
/// optional and never fails.
pub fn validate(form: &ContactForm) -> Vec<ValidationError> {
    let mut errors = Vec::new();

    if form.first_name.char_count() < MIN_FIRST_NAME_CHARS {
        errors.push(ValidationError::FirstNameTooShort);
    }

    if form.last_name.is_empty() {
        errors.push(ValidationError::LastNameRequired);
    }

    if form.email.is_empty() {
        errors.push(ValidationError::EmailRequired);
    } else if !is_valid_email(&form.email.value) {
        errors.push(ValidationError::EmailInvalid);
    }

    errors
}

/// Permissive structural check: exactly one `@`, non-empty local part,
/// no whitespace, and a domain of at least two non-empty dot-separated
/// segments (`a@gmail` is rejected, `a@gmail.com` accepted).
fn is_valid_email(value: &str) -> bool {
    if value.chars().any(char::is_whitespace) {
        return false;
    }
    let Some((local, domain)) = value.split_once('@') else {
        return false;
    };
    if local.is_empty() || domain.contains('@') {
        return false;
    }
    let segments: Vec<&str> = domain.split('.').collect();
    segments.len() >= 2 && segments.iter().all(|s| !s.is_empty())
}
