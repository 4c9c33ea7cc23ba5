//! Contact form validation.

use crate::form::{ContactForm, Field};

/// Validation error for a contact form submission.
///
/// Only field emptiness is checked. The blamed field is kept for
/// diagnostics; the user always sees one generic prompt regardless.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValidationError {
    /// A field is empty or contains only whitespace.
    EmptyField(Field),
}

impl ValidationError {
    /// The field this error relates to.
    #[must_use]
    pub const fn field(&self) -> Field {
        match self {
            Self::EmptyField(field) => *field,
        }
    }
}

impl std::fmt::Display for ValidationError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self.field() {
            Field::Name => write!(f, "name is empty"),
            Field::Email => write!(f, "email is empty"),
            Field::Message => write!(f, "message is empty"),
        }
    }
}

impl std::error::Error for ValidationError {}

/// Validates a contact form.
///
/// Every field must be non-empty after trimming surrounding whitespace; the
/// check is a conjunction over all three fields.
///
/// # Errors
///
/// Returns [`ValidationError::EmptyField`] for the first blank field, in
/// declaration order.
pub fn validate(form: &ContactForm) -> Result<(), ValidationError> {
    for (field, value) in [
        (Field::Name, &form.name),
        (Field::Email, &form.email),
        (Field::Message, &form.message),
    ] {
        if value.trim().is_empty() {
            return Err(ValidationError::EmptyField(field));
        }
    }

    Ok(())
}
