//! Application state and main loop

use std::time::{Duration, Instant};

use anyhow::{Context, Result};
use candy_core::burst::{BurstEvent, BurstGenerator, SeededRandom};
use candy_core::catalog::TESTIMONIALS;
use candy_core::{Carousel, ContactError, ContactForm, LandingConfig, Quest, TastingFlight};
use crossterm::event::{Event, EventStream};
use futures::StreamExt;
use ratatui::DefaultTerminal;
use tokio::sync::mpsc;
use tokio::time::MissedTickBehavior;

use crate::tui::components::Toast;
use crate::tui::themes::Theme;

/// Page sections, top to bottom
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Section {
    #[default]
    Hero,
    Flight,
    Testimonials,
    Quest,
    Contact,
}

impl Section {
    pub const ALL: [Section; 5] = [
        Self::Hero,
        Self::Flight,
        Self::Testimonials,
        Self::Quest,
        Self::Contact,
    ];

    pub fn title(self) -> &'static str {
        match self {
            Self::Hero => "Welcome",
            Self::Flight => "Tasting Flight",
            Self::Testimonials => "Raving Tastebuds",
            Self::Quest => "Candy Quest",
            Self::Contact => "Contact",
        }
    }

    pub fn index(self) -> usize {
        Self::ALL.iter().position(|s| *s == self).unwrap_or(0)
    }

    /// Next section, stopping at the bottom of the page
    pub fn next(self) -> Self {
        Self::ALL[(self.index() + 1).min(Self::ALL.len() - 1)]
    }

    /// Previous section, stopping at the top of the page
    pub fn previous(self) -> Self {
        Self::ALL[self.index().saturating_sub(1)]
    }
}

pub struct App {
    pub section: Section,
    pub theme: Theme,

    // Page state
    pub burst: BurstGenerator,
    pub(crate) burst_events: mpsc::UnboundedReceiver<BurstEvent>,
    pub carousel: Carousel,
    pub quest: Quest,
    pub flight: TastingFlight,
    pub contact: ContactForm,
    pub contact_editing: bool,
    pub contact_error: Option<ContactError>,

    pub toast: Option<Toast>,
    pub should_quit: bool,

    /// When the page opened (drives intro and looping animations)
    pub started: Instant,
    /// When the visible testimonial last changed
    pub testimonial_shown_at: Instant,
    last_tick: Instant,
    frame_interval: Duration,
}

impl App {
    pub fn new(config: &LandingConfig) -> Self {
        let rng = match config.seed {
            Some(seed) => SeededRandom::from_seed(seed),
            None => SeededRandom::from_entropy(),
        };
        let mut burst = BurstGenerator::with_random(rng);
        let burst_events = burst.subscribe();
        let theme = Theme::candy();
        tracing::debug!(theme = %theme.name, "Page state created");

        let now = Instant::now();
        Self {
            section: Section::default(),
            theme,
            burst,
            burst_events,
            carousel: Carousel::new(TESTIMONIALS.len(), config.carousel_interval()),
            quest: Quest::new(),
            flight: TastingFlight::new(),
            contact: ContactForm::new(),
            contact_editing: false,
            contact_error: None,
            toast: None,
            should_quit: false,
            started: now,
            testimonial_shown_at: now,
            last_tick: now,
            frame_interval: config.frame_interval(),
        }
    }

    /// Main loop: draw, then wait for a terminal event or the next frame tick
    pub async fn run(&mut self, mut terminal: DefaultTerminal) -> Result<()> {
        let mut events = EventStream::new();
        let mut ticker = tokio::time::interval(self.frame_interval);
        ticker.set_missed_tick_behavior(MissedTickBehavior::Skip);

        let mut needs_redraw = true;
        while !self.should_quit {
            if needs_redraw {
                terminal
                    .draw(|f| self.ui(f))
                    .context("Failed to draw frame")?;
            }

            tokio::select! {
                maybe_event = events.next() => match maybe_event {
                    Some(Ok(event)) => {
                        self.handle_event(event);
                        needs_redraw = true;
                    }
                    Some(Err(e)) => return Err(e).context("Failed to read terminal event"),
                    None => break,
                },
                _ = ticker.tick() => {
                    needs_redraw = self.tick();
                }
            }
        }

        self.burst.shutdown();
        tracing::info!("Candy Heaven closed");
        Ok(())
    }

    pub fn handle_event(&mut self, event: Event) {
        match event {
            Event::Key(key) => self.handle_key(key),
            Event::Resize(width, height) => {
                tracing::trace!(width, height, "Terminal resized");
            }
            _ => {}
        }
    }

    /// Time since the last tick, advancing the tick clock
    pub(crate) fn take_tick_delta(&mut self) -> Duration {
        let now = Instant::now();
        let dt = now.duration_since(self.last_tick);
        self.last_tick = now;
        dt
    }

    pub fn show_toast(&mut self, toast: Toast) {
        self.toast = Some(toast);
    }

    pub fn trigger_confetti(&mut self) {
        self.burst.trigger();
    }

    pub fn select_testimonial(&mut self, index: usize) {
        match self.carousel.select(index) {
            Ok(()) => self.testimonial_shown_at = Instant::now(),
            Err(e) => tracing::debug!(error = %e, "Ignoring testimonial selection"),
        }
    }

    pub fn choose_quest_option(&mut self, index: usize) {
        if let Err(e) = self.quest.choose_index(index) {
            tracing::debug!(error = %e, "Ignoring quest choice");
        }
    }

    pub fn submit_contact(&mut self) {
        match self.contact.submit() {
            Ok(sugargram) => {
                tracing::info!(
                    name = %sugargram.name,
                    email = %sugargram.email,
                    has_message = sugargram.message.is_some(),
                    "Sugargram sent"
                );
                self.contact_error = None;
                self.contact_editing = false;
                self.show_toast(Toast::success(format!(
                    "Sugargram sent! Talk soon, {}",
                    sugargram.name
                )));
            }
            Err(e) => {
                tracing::debug!(error = %e, "Contact form rejected");
                self.contact_error = Some(e);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_section_navigation_clamps() {
        assert_eq!(Section::Hero.previous(), Section::Hero);
        assert_eq!(Section::Hero.next(), Section::Flight);
        assert_eq!(Section::Contact.next(), Section::Contact);
        assert_eq!(Section::Quest.index(), 3);
    }

    #[test]
    fn test_contact_submit_flow() {
        let mut app = App::new(&LandingConfig::default());
        app.contact_editing = true;
        app.submit_contact();
        assert_eq!(app.contact_error, Some(ContactError::MissingName));
        assert!(app.contact_editing);

        for c in "Lila".chars() {
            app.contact.insert(c);
        }
        app.contact.focus_next();
        for c in "lila@sugar.co".chars() {
            app.contact.insert(c);
        }
        app.submit_contact();
        assert!(app.contact_error.is_none());
        assert!(!app.contact_editing);
        assert!(app.toast.is_some());
    }

    #[test]
    fn test_out_of_range_selections_are_ignored() {
        let mut app = App::new(&LandingConfig::default());
        app.select_testimonial(9);
        app.choose_quest_option(9);
        assert_eq!(app.carousel.index(), 0);
        assert!(app.quest.choice().is_none());
    }
}
