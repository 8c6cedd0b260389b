//! UI rendering coordinator
//!
//! Main entry point that dispatches to the section renderers.

use ratatui::{
    layout::{Constraint, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Tabs},
    Frame,
};

use crate::tui::app::{App, Section};
use crate::tui::components::render_toast;
use crate::tui::sections;

impl App {
    /// Main UI rendering dispatcher
    pub fn ui(&self, f: &mut Frame) {
        // Render background
        let bg = Block::default().style(Style::default().bg(self.theme.bg_color));
        f.render_widget(bg, f.area());

        let [tabs, body, help] = Layout::vertical([
            Constraint::Length(3),
            Constraint::Min(0),
            Constraint::Length(1),
        ])
        .areas(f.area());

        self.render_tabs(f, tabs);

        match self.section {
            Section::Hero => sections::hero::render(f, body, self),
            Section::Flight => sections::flight::render(f, body, self),
            Section::Testimonials => sections::testimonials::render(f, body, self),
            Section::Quest => sections::quest::render(f, body, self),
            Section::Contact => sections::contact::render(f, body, self),
        }

        f.render_widget(self.help_line(), help);

        // Render toast on top of everything
        if let Some(toast) = &self.toast {
            render_toast(f.buffer_mut(), body, toast, &self.theme);
        }
    }

    fn render_tabs(&self, f: &mut Frame, area: Rect) {
        let titles = Section::ALL.iter().map(|s| s.title());
        let tabs = Tabs::new(titles)
            .select(self.section.index())
            .style(Style::default().fg(self.theme.dim_color))
            .highlight_style(
                Style::default()
                    .fg(self.theme.accent_color)
                    .add_modifier(Modifier::BOLD),
            )
            .divider(Span::styled(
                " \u{00B7} ",
                Style::default().fg(self.theme.border_color),
            ))
            .block(
                Block::default()
                    .borders(Borders::BOTTOM)
                    .border_style(Style::default().fg(self.theme.border_color))
                    .title(Span::styled(
                        " \u{1F36C} Candy Heaven ",
                        Style::default().fg(self.theme.highlight_color),
                    )),
            );
        f.render_widget(tabs, area);
    }

    /// Key hints for the visible section
    fn help_line(&self) -> Line<'static> {
        let hints = match self.section {
            Section::Hero => "Space confetti",
            Section::Flight => "\u{2190}/\u{2192} jar \u{00B7} Space spill \u{00B7} Esc settle",
            Section::Testimonials => "\u{2190}/\u{2192} browse \u{00B7} 1-3 pick",
            Section::Quest => "1-3 answer \u{00B7} r reset",
            Section::Contact if self.contact_editing => {
                "Tab next field \u{00B7} Enter send \u{00B7} Esc done"
            }
            Section::Contact => "Enter start typing",
        };
        Line::from(vec![
            Span::styled(format!(" {hints}"), Style::default().fg(self.theme.dim_color)),
            Span::styled(
                "  \u{00B7}  Tab/j/k sections \u{00B7} q quit",
                Style::default().fg(self.theme.border_color),
            ),
        ])
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use candy_core::LandingConfig;
    use ratatui::{backend::TestBackend, buffer::Buffer, Terminal};

    use crate::tui::components::Toast;

    fn draw(app: &App) -> Buffer {
        let mut terminal = Terminal::new(TestBackend::new(100, 40)).unwrap();
        terminal.draw(|f| app.ui(f)).unwrap();
        terminal.backend().buffer().clone()
    }

    fn text(buf: &Buffer) -> String {
        let area = buf.area;
        (area.top()..area.bottom())
            .map(|y| {
                (area.left()..area.right())
                    .map(|x| buf[(x, y)].symbol())
                    .collect::<String>()
            })
            .collect::<Vec<_>>()
            .join("\n")
    }

    /// Cells showing full-size confetti; nothing else on the page uses heavy lines
    fn count_confetti(buf: &Buffer) -> usize {
        buf.content
            .iter()
            .filter(|c| matches!(c.symbol(), "━" | "╲" | "┃" | "╱"))
            .count()
    }

    #[test]
    fn test_hero_renders() {
        let app = App::new(&LandingConfig::default());
        let screen = text(&draw(&app));
        assert!(screen.contains("Welcome to Candy Heaven"));
        assert!(screen.contains("Tap for Confetti Candy"));
        assert!(screen.contains("Tasting Flight"));
    }

    #[tokio::test]
    async fn test_confetti_appears_after_trigger() {
        let mut app = App::new(&LandingConfig::default());
        assert_eq!(count_confetti(&draw(&app)), 0);

        app.trigger_confetti();
        assert!(count_confetti(&draw(&app)) > 0);
    }

    #[test]
    fn test_every_section_renders() {
        let mut app = App::new(&LandingConfig::default());

        app.section = Section::Flight;
        app.flight.toggle();
        let screen = text(&draw(&app));
        assert!(screen.contains("Nebula Nibbles"));
        assert!(screen.contains("spilling"));

        app.section = Section::Testimonials;
        assert!(text(&draw(&app)).contains("Lila Sprinkle"));

        app.section = Section::Quest;
        app.choose_quest_option(2);
        let screen = text(&draw(&app));
        assert!(screen.contains("Candy Heaven"));
        assert!(screen.contains("discerning sweet soul"));

        app.section = Section::Contact;
        app.contact_editing = true;
        app.submit_contact();
        let screen = text(&draw(&app));
        assert!(screen.contains("Holler at the Candy Alchemists"));
        assert!(screen.contains("a sweet alias is required"));
        assert!(screen.contains("Send Sugargram"));
    }

    #[test]
    fn test_toast_overlay() {
        let mut app = App::new(&LandingConfig::default());
        app.show_toast(Toast::success("Sugargram sent!"));
        assert!(text(&draw(&app)).contains("Sugargram sent!"));
    }
}
