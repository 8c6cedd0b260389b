//! Frame tick handler
//!
//! Polls burst events and advances time-driven page state.

use std::time::{Duration, Instant};

use candy_core::burst::BurstState;

use crate::tui::app::{App, Section};
use crate::tui::polling::poll_burst_events;
use crate::tui::sections::hero::INTRO_DURATION;

impl App {
    /// Advance one frame. Returns true if anything on screen changed.
    pub(crate) fn tick(&mut self) -> bool {
        let dt = self.take_tick_delta();
        self.tick_with(dt)
    }

    pub(crate) fn tick_with(&mut self, dt: Duration) -> bool {
        let burst = poll_burst_events(&mut self.burst_events);

        let rotated = self.carousel.advance(dt);
        if rotated {
            self.testimonial_shown_at = Instant::now();
        }

        let toast_expired = self.toast.as_ref().is_some_and(|t| t.is_expired());
        if toast_expired {
            self.toast = None;
        }

        burst.needs_redraw || rotated || toast_expired || self.is_animating()
    }

    /// Whether the visible section has motion that needs every frame
    fn is_animating(&self) -> bool {
        let looping = match self.section {
            Section::Hero => {
                self.burst.state() == BurstState::Bursting
                    || self.started.elapsed() < INTRO_DURATION
            }
            Section::Flight => self.flight.active().is_some(),
            // Bobbing avatar and slide-in
            Section::Testimonials => true,
            Section::Quest => self.quest.choice().is_some(),
            // Pulsing submit button
            Section::Contact => true,
        };
        looping || self.toast.is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use candy_core::LandingConfig;

    #[test]
    fn test_tick_rotates_carousel() {
        let mut app = App::new(&LandingConfig::default());
        assert!(app.tick_with(Duration::from_millis(4800)));
        assert_eq!(app.carousel.index(), 1);
    }

    #[test]
    fn test_idle_quest_does_not_redraw() {
        let mut app = App::new(&LandingConfig::default());
        app.section = Section::Quest;
        assert!(!app.tick_with(Duration::from_millis(10)));

        app.choose_quest_option(0);
        assert!(app.tick_with(Duration::from_millis(10)));
    }

    #[tokio::test]
    async fn test_burst_event_requests_redraw() {
        let mut app = App::new(&LandingConfig::default());
        app.section = Section::Quest;
        app.trigger_confetti();
        assert!(app.tick_with(Duration::from_millis(10)));
        assert!(!app.tick_with(Duration::from_millis(10)));
    }
}
