//! Contact form state and validation
//!
//! Nothing leaves the machine: a valid submission becomes a [`Sugargram`]
//! that the caller logs and acknowledges.

use thiserror::Error;

/// Maximum characters kept per field
pub const MAX_FIELD_LEN: usize = 500;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ContactField {
    #[default]
    Name,
    Email,
    Message,
}

impl ContactField {
    pub const ALL: [ContactField; 3] = [Self::Name, Self::Email, Self::Message];

    pub fn next(self) -> Self {
        match self {
            Self::Name => Self::Email,
            Self::Email => Self::Message,
            Self::Message => Self::Name,
        }
    }

    pub fn previous(self) -> Self {
        match self {
            Self::Name => Self::Message,
            Self::Email => Self::Name,
            Self::Message => Self::Email,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Self::Name => "Name",
            Self::Email => "Email",
            Self::Message => "Message",
        }
    }

    pub fn placeholder(self) -> &'static str {
        match self {
            Self::Name => "Your sweet alias",
            Self::Email => "you@candyfans.com",
            Self::Message => "Tell us how wild you want your candy storm",
        }
    }

    pub fn is_required(self) -> bool {
        !matches!(self, Self::Message)
    }
}

/// Validation failures, reported for the first offending field
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ContactError {
    #[error("a sweet alias is required")]
    MissingName,
    #[error("an email address is required")]
    MissingEmail,
    #[error("'{0}' doesn't look like an email address")]
    InvalidEmail(String),
}

impl ContactError {
    /// Field the error belongs to
    pub fn field(&self) -> ContactField {
        match self {
            Self::MissingName => ContactField::Name,
            Self::MissingEmail | Self::InvalidEmail(_) => ContactField::Email,
        }
    }
}

/// A validated submission
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Sugargram {
    pub name: String,
    pub email: String,
    pub message: Option<String>,
}

#[derive(Debug, Default, Clone)]
pub struct ContactForm {
    name: String,
    email: String,
    message: String,
    focus: ContactField,
}

impl ContactForm {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn focus(&self) -> ContactField {
        self.focus
    }

    pub fn set_focus(&mut self, field: ContactField) {
        self.focus = field;
    }

    pub fn focus_next(&mut self) {
        self.focus = self.focus.next();
    }

    pub fn focus_previous(&mut self) {
        self.focus = self.focus.previous();
    }

    pub fn value(&self, field: ContactField) -> &str {
        match field {
            ContactField::Name => &self.name,
            ContactField::Email => &self.email,
            ContactField::Message => &self.message,
        }
    }

    fn focused_mut(&mut self) -> &mut String {
        match self.focus {
            ContactField::Name => &mut self.name,
            ContactField::Email => &mut self.email,
            ContactField::Message => &mut self.message,
        }
    }

    /// Append a character to the focused field
    pub fn insert(&mut self, c: char) {
        if c.is_control() {
            return;
        }
        let buffer = self.focused_mut();
        if buffer.chars().count() < MAX_FIELD_LEN {
            buffer.push(c);
        }
    }

    pub fn backspace(&mut self) {
        self.focused_mut().pop();
    }

    pub fn clear_field(&mut self) {
        self.focused_mut().clear();
    }

    pub fn reset(&mut self) {
        *self = Self::default();
    }

    pub fn validate(&self) -> Result<(), ContactError> {
        let name = self.name.trim();
        let email = self.email.trim();

        if name.is_empty() {
            return Err(ContactError::MissingName);
        }
        if email.is_empty() {
            return Err(ContactError::MissingEmail);
        }
        if !looks_like_email(email) {
            return Err(ContactError::InvalidEmail(email.to_string()));
        }
        Ok(())
    }

    /// Validate and hand out the submission, clearing the form on success
    ///
    /// On failure the form is kept and focus moves to the offending field.
    pub fn submit(&mut self) -> Result<Sugargram, ContactError> {
        if let Err(e) = self.validate() {
            self.focus = e.field();
            return Err(e);
        }

        let message = self.message.trim();
        let sugargram = Sugargram {
            name: self.name.trim().to_string(),
            email: self.email.trim().to_string(),
            message: (!message.is_empty()).then(|| message.to_string()),
        };
        self.reset();
        Ok(sugargram)
    }
}

/// `local@domain.tld` with no whitespace
fn looks_like_email(s: &str) -> bool {
    if s.chars().any(char::is_whitespace) {
        return false;
    }
    let Some((local, domain)) = s.split_once('@') else {
        return false;
    };
    if local.is_empty() || domain.contains('@') {
        return false;
    }
    match domain.rsplit_once('.') {
        Some((host, tld)) => !host.is_empty() && !tld.is_empty() && !host.starts_with('.'),
        None => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn type_into(form: &mut ContactForm, field: ContactField, text: &str) {
        form.set_focus(field);
        for c in text.chars() {
            form.insert(c);
        }
    }

    #[test]
    fn test_focus_cycles() {
        let mut form = ContactForm::new();
        assert_eq!(form.focus(), ContactField::Name);
        form.focus_next();
        form.focus_next();
        assert_eq!(form.focus(), ContactField::Message);
        form.focus_next();
        assert_eq!(form.focus(), ContactField::Name);
        form.focus_previous();
        assert_eq!(form.focus(), ContactField::Message);
    }

    #[test]
    fn test_editing() {
        let mut form = ContactForm::new();
        type_into(&mut form, ContactField::Name, "Lila");
        form.backspace();
        assert_eq!(form.value(ContactField::Name), "Lil");

        form.insert('\n');
        assert_eq!(form.value(ContactField::Name), "Lil");

        form.clear_field();
        assert!(form.value(ContactField::Name).is_empty());
    }

    #[test]
    fn test_field_length_is_capped() {
        let mut form = ContactForm::new();
        type_into(&mut form, ContactField::Message, &"a".repeat(MAX_FIELD_LEN + 20));
        assert_eq!(form.value(ContactField::Message).len(), MAX_FIELD_LEN);
    }

    #[test]
    fn test_submit_requires_name_and_email() {
        let mut form = ContactForm::new();
        form.set_focus(ContactField::Message);
        assert_eq!(form.submit(), Err(ContactError::MissingName));
        assert_eq!(form.focus(), ContactField::Name);

        type_into(&mut form, ContactField::Name, "Nova");
        assert_eq!(form.submit(), Err(ContactError::MissingEmail));
        assert_eq!(form.focus(), ContactField::Email);
    }

    #[test]
    fn test_invalid_emails() {
        for bad in [
            "nova",
            "nova@",
            "@candy.com",
            "nova@candy",
            "no va@candy.com",
            "a@b@c.com",
            "a@.com",
        ] {
            let mut form = ContactForm::new();
            type_into(&mut form, ContactField::Name, "Nova");
            type_into(&mut form, ContactField::Email, bad);
            assert!(
                matches!(form.submit(), Err(ContactError::InvalidEmail(_))),
                "{bad} should be rejected"
            );
        }
    }

    #[test]
    fn test_successful_submit_clears_form() {
        let mut form = ContactForm::new();
        type_into(&mut form, ContactField::Name, "  Benny Bounce ");
        type_into(&mut form, ContactField::Email, "benny@candyfans.com");

        let sugargram = form.submit().unwrap();
        assert_eq!(sugargram.name, "Benny Bounce");
        assert_eq!(sugargram.email, "benny@candyfans.com");
        assert_eq!(sugargram.message, None);
        assert!(form.value(ContactField::Name).is_empty());
        assert_eq!(form.focus(), ContactField::Name);
    }

    #[test]
    fn test_required_fields() {
        let required: Vec<_> = ContactField::ALL
            .into_iter()
            .filter(|f| f.is_required())
            .collect();
        assert_eq!(required, vec![ContactField::Name, ContactField::Email]);
    }
}
