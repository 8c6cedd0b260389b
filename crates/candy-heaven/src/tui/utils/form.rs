//! Contact form input
//!
//! Maps key presses onto contact form edits while the form is focused.

use candy_core::ContactForm;
use crossterm::event::{KeyCode, KeyModifiers};

/// Result of handling a key in the form
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormAction {
    /// Key was consumed, keep editing
    Continue,
    /// User wants to send (Enter pressed)
    Submit,
    /// User left the form (Esc pressed)
    Leave,
}

/// Handle a key event while editing
pub fn handle_form_key(
    form: &mut ContactForm,
    code: KeyCode,
    modifiers: KeyModifiers,
) -> FormAction {
    match code {
        KeyCode::Enter => FormAction::Submit,
        KeyCode::Esc => FormAction::Leave,
        KeyCode::Tab | KeyCode::Down => {
            form.focus_next();
            FormAction::Continue
        }
        KeyCode::BackTab | KeyCode::Up => {
            form.focus_previous();
            FormAction::Continue
        }
        KeyCode::Backspace => {
            form.backspace();
            FormAction::Continue
        }
        KeyCode::Char('u') if modifiers.contains(KeyModifiers::CONTROL) => {
            form.clear_field();
            FormAction::Continue
        }
        KeyCode::Char(c) if !modifiers.contains(KeyModifiers::CONTROL) => {
            form.insert(c);
            FormAction::Continue
        }
        _ => FormAction::Continue,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use candy_core::ContactField;

    fn type_text(form: &mut ContactForm, text: &str) {
        for c in text.chars() {
            handle_form_key(form, KeyCode::Char(c), KeyModifiers::empty());
        }
    }

    #[test]
    fn test_handle_key_char() {
        let mut form = ContactForm::new();
        type_text(&mut form, "Hi");
        assert_eq!(form.value(ContactField::Name), "Hi");
    }

    #[test]
    fn test_shift_is_plain_text() {
        let mut form = ContactForm::new();
        handle_form_key(&mut form, KeyCode::Char('N'), KeyModifiers::SHIFT);
        assert_eq!(form.value(ContactField::Name), "N");
    }

    #[test]
    fn test_handle_key_backspace() {
        let mut form = ContactForm::new();
        type_text(&mut form, "Test");
        handle_form_key(&mut form, KeyCode::Backspace, KeyModifiers::empty());
        assert_eq!(form.value(ContactField::Name), "Tes");
    }

    #[test]
    fn test_ctrl_u_clears_field() {
        let mut form = ContactForm::new();
        type_text(&mut form, "Test");
        handle_form_key(&mut form, KeyCode::Char('u'), KeyModifiers::CONTROL);
        assert!(form.value(ContactField::Name).is_empty());
    }

    #[test]
    fn test_tab_moves_between_fields() {
        let mut form = ContactForm::new();
        handle_form_key(&mut form, KeyCode::Tab, KeyModifiers::empty());
        type_text(&mut form, "me@candy.com");
        assert_eq!(form.value(ContactField::Email), "me@candy.com");

        handle_form_key(&mut form, KeyCode::BackTab, KeyModifiers::SHIFT);
        assert_eq!(form.focus(), ContactField::Name);
    }

    #[test]
    fn test_enter_and_esc() {
        let mut form = ContactForm::new();
        assert_eq!(
            handle_form_key(&mut form, KeyCode::Enter, KeyModifiers::empty()),
            FormAction::Submit
        );
        assert_eq!(
            handle_form_key(&mut form, KeyCode::Esc, KeyModifiers::empty()),
            FormAction::Leave
        );
    }
}
