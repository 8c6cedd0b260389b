//! Hero section: headline, confetti button and the candy reveal

use std::time::Duration;

use candy_core::burst::BurstState;
use candy_core::catalog::{hero_candy_delay, HERO, HERO_CANDY};
use ratatui::{
    layout::{Alignment, Constraint, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Paragraph},
    Frame,
};

use crate::tui::animation::{motion::pop_in, render_confetti};
use crate::tui::app::App;
use crate::tui::themes::rgb;
use crate::tui::utils::text::{centered_rect, display_width, wrap_line};

/// How long one hero candy takes to pop in
const POP_DURATION: Duration = Duration::from_millis(300);

/// Time until the last hero candy has fully popped in
pub const INTRO_DURATION: Duration = Duration::from_millis(400 + 140 * 7 + 300);

const MAX_WIDTH: u16 = 72;

pub fn render(f: &mut Frame, area: Rect, app: &App) {
    let theme = &app.theme;
    let width = area.width.min(MAX_WIDTH);
    let content = Rect {
        x: area.x + (area.width - width) / 2,
        width,
        ..area
    };

    let headline = wrap_line(HERO.headline, width as usize);
    let blurb = wrap_line(HERO.blurb, width as usize);
    let chunks = Layout::vertical([
        Constraint::Length(1), // Spacer
        Constraint::Length(1), // Eyebrow
        Constraint::Length(headline.len() as u16 + 1),
        Constraint::Length(blurb.len() as u16),
        Constraint::Length(1), // Spacer
        Constraint::Length(3), // Button
        Constraint::Length(1), // Badge
        Constraint::Length(1), // Spacer
        Constraint::Length(1), // Candy
        Constraint::Min(0),
    ])
    .split(content);

    f.render_widget(
        Line::styled(HERO.eyebrow, Style::default().fg(theme.accent_alt_color))
            .centered(),
        chunks[1],
    );
    let headline_style = Style::default()
        .fg(theme.text_color)
        .add_modifier(Modifier::BOLD);
    f.render_widget(Paragraph::new(centered_lines(headline, headline_style)), chunks[2]);
    let blurb_style = Style::default().fg(theme.dim_color);
    f.render_widget(Paragraph::new(centered_lines(blurb, blurb_style)), chunks[3]);

    let button = button_rect(chunks[5]);
    let bursting = app.burst.state() == BurstState::Bursting;
    let border = if bursting {
        theme.highlight_color
    } else {
        theme.accent_color
    };
    f.render_widget(
        Paragraph::new(HERO.cta)
            .alignment(Alignment::Center)
            .style(
                Style::default()
                    .fg(theme.text_color)
                    .bg(theme.card_bg_color)
                    .add_modifier(Modifier::BOLD),
            )
            .block(
                Block::bordered()
                    .border_type(BorderType::Rounded)
                    .border_style(Style::default().fg(border)),
            ),
        button,
    );

    f.render_widget(
        Line::styled(HERO.badge, Style::default().fg(theme.highlight_color)).centered(),
        chunks[6],
    );
    f.render_widget(candy_line(app.started.elapsed()).centered(), chunks[8]);

    // Confetti flies over everything in the section
    let origin = (button.x + button.width / 2, button.y + 1);
    render_confetti(f.buffer_mut(), area, origin, &app.burst.snapshot(), theme);
}

fn centered_lines(lines: Vec<String>, style: Style) -> Vec<Line<'static>> {
    lines
        .into_iter()
        .map(|l| Line::styled(l, style).centered())
        .collect()
}

/// The call-to-action button, centered in its row
fn button_rect(row: Rect) -> Rect {
    centered_rect(row, display_width(HERO.cta) + 4, 3)
}

/// Hero candy row; each candy grows from a dot as it pops in
fn candy_line(elapsed: Duration) -> Line<'static> {
    let spans: Vec<Span> = HERO_CANDY
        .iter()
        .enumerate()
        .flat_map(|(i, color)| {
            let p = pop_in(elapsed, hero_candy_delay(i), POP_DURATION);
            let glyph = if p <= 0.0 {
                " "
            } else if p < 0.5 {
                "\u{00B7}" // ·
            } else if p < 1.0 {
                "\u{2022}" // •
            } else {
                "\u{25CF}" // ●
            };
            [
                Span::styled(glyph, Style::default().fg(rgb(*color))),
                Span::raw("  "),
            ]
        })
        .collect();
    Line::from(spans)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_intro_covers_every_candy() {
        let last = hero_candy_delay(HERO_CANDY.len() - 1) + POP_DURATION;
        assert_eq!(INTRO_DURATION, last);
    }

    #[test]
    fn test_candy_line_pops_in_order() {
        let glyphs = |line: Line| -> String {
            line.spans
                .iter()
                .map(|s| s.content.trim())
                .collect::<Vec<_>>()
                .concat()
        };

        assert_eq!(glyphs(candy_line(Duration::ZERO)), "");
        // First candy done, second halfway, third just started
        assert_eq!(glyphs(candy_line(Duration::from_millis(700))), "●•·");
        assert_eq!(glyphs(candy_line(INTRO_DURATION)), "●".repeat(8));
    }

    #[test]
    fn test_button_fits_cta() {
        let row = Rect::new(0, 10, 80, 3);
        let button = button_rect(row);
        assert_eq!(button.width, display_width(HERO.cta) + 4);
        assert_eq!(button.x + button.width / 2, 40);
    }
}
