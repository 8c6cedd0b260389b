//! Keyboard handling
//!
//! Global keys first, then the focused section's keys.

use std::time::{Duration, Instant};

use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

use crate::tui::app::{App, Section};
use crate::tui::components::Toast;
use crate::tui::utils::form::{handle_form_key, FormAction};

impl App {
    pub fn handle_key(&mut self, key: KeyEvent) {
        if key.kind != KeyEventKind::Press {
            return;
        }

        if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
            self.should_quit = true;
            return;
        }

        // The form swallows everything while editing
        if self.section == Section::Contact && self.contact_editing {
            self.handle_contact_key(key);
            return;
        }

        match key.code {
            KeyCode::Char('q') => self.should_quit = true,
            KeyCode::Tab | KeyCode::Down | KeyCode::Char('j') => {
                self.section = self.section.next();
            }
            KeyCode::BackTab | KeyCode::Up | KeyCode::Char('k') => {
                self.section = self.section.previous();
            }
            KeyCode::Home => self.section = Section::Hero,
            KeyCode::End => self.section = Section::Contact,
            _ => self.handle_section_key(key.code),
        }
    }

    fn handle_section_key(&mut self, code: KeyCode) {
        match self.section {
            Section::Hero => {
                if matches!(code, KeyCode::Char(' ') | KeyCode::Enter) {
                    self.trigger_confetti();
                }
            }
            Section::Flight => match code {
                KeyCode::Left | KeyCode::Char('h') => self.flight.move_left(),
                KeyCode::Right | KeyCode::Char('l') => self.flight.move_right(),
                KeyCode::Char(' ') | KeyCode::Enter => self.flight.toggle(),
                KeyCode::Esc => self.flight.release(),
                _ => {}
            },
            Section::Testimonials => match code {
                KeyCode::Left | KeyCode::Char('h') => {
                    self.carousel.previous();
                    self.testimonial_shown_at = Instant::now();
                }
                KeyCode::Right | KeyCode::Char('l') => {
                    self.carousel.next();
                    self.testimonial_shown_at = Instant::now();
                }
                KeyCode::Char(c @ '1'..='9') => {
                    self.select_testimonial(c as usize - '1' as usize);
                }
                _ => {}
            },
            Section::Quest => match code {
                KeyCode::Char(c @ '1'..='9') => {
                    self.choose_quest_option(c as usize - '1' as usize);
                }
                KeyCode::Char('r') if self.quest.choice().is_some() => {
                    self.quest.reset();
                    self.show_toast(
                        Toast::info("Quest reset - choose again!")
                            .with_duration(Duration::from_secs(2)),
                    );
                }
                _ => {}
            },
            Section::Contact => {
                if matches!(code, KeyCode::Enter | KeyCode::Char('i')) {
                    self.contact_editing = true;
                }
            }
        }
    }

    fn handle_contact_key(&mut self, key: KeyEvent) {
        match handle_form_key(&mut self.contact, key.code, key.modifiers) {
            FormAction::Continue => {}
            FormAction::Submit => self.submit_contact(),
            FormAction::Leave => {
                self.contact_editing = false;
                self.contact_error = None;
            }
        }
    }
}
