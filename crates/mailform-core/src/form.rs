//! Contact form field state.

/// A named field of the contact form.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Field {
    /// Visitor name.
    Name,
    /// Visitor reply-to address.
    Email,
    /// Message body.
    Message,
}

/// Current values of the contact form.
///
/// A plain data holder: no validation happens here. All three fields always
/// exist, possibly empty; [`ContactForm::set`] replaces exactly one of them
/// and leaves the others untouched.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ContactForm {
    /// Visitor name.
    pub name: String,
    /// Visitor reply-to address.
    pub email: String,
    /// Message body.
    pub message: String,
}

impl ContactForm {
    /// Creates an empty form.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Replaces the value of a single field.
    pub fn set(&mut self, field: Field, value: impl Into<String>) {
        let slot = match field {
            Field::Name => &mut self.name,
            Field::Email => &mut self.email,
            Field::Message => &mut self.message,
        };
        *slot = value.into();
    }

    /// Resets every field to the empty string.
    pub fn reset(&mut self) {
        self.name.clear();
        self.email.clear();
        self.message.clear();
    }
}
