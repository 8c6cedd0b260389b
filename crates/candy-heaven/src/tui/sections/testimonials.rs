//! Testimonial carousel

use std::time::Duration;

use candy_core::catalog::{Testimonial, TESTIMONIALS};
use ratatui::{
    layout::{Constraint, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Clear, Padding, Paragraph},
    Frame,
};

use super::heading;
use crate::tui::animation::motion::{bob, slide_in};
use crate::tui::app::App;
use crate::tui::themes::{rgb, Theme};
use crate::tui::utils::text::{centered_rect, wrap_line};

const CARD_WIDTH: u16 = 64;
const SLIDE_DURATION: Duration = Duration::from_millis(400);
const SLIDE_DISTANCE: u16 = 8;
const AVATAR_PERIOD: Duration = Duration::from_millis(1600);

pub fn render(f: &mut Frame, area: Rect, app: &App) {
    let theme = &app.theme;
    let [head, body, dots] = Layout::vertical([
        Constraint::Length(3),
        Constraint::Min(0),
        Constraint::Length(1),
    ])
    .areas(area);

    let subtitle = rotation_note(app.carousel.interval());
    f.render_widget(
        Paragraph::new(heading("Raving Tastebuds", &subtitle, theme)),
        head,
    );

    let Some(testimonial) = TESTIMONIALS.get(app.carousel.index()) else {
        return;
    };

    let inner_width = CARD_WIDTH.min(body.width).saturating_sub(4) as usize;
    let lines = card_lines(testimonial, inner_width, app.started.elapsed(), theme);
    let card = centered_rect(body, CARD_WIDTH, lines.len() as u16 + 2);

    // Slide in from the right after every change
    let since_change = app.testimonial_shown_at.elapsed();
    let room = body.right().saturating_sub(card.right());
    let shift = slide_in(since_change, SLIDE_DURATION, SLIDE_DISTANCE).min(room);
    let card = Rect {
        x: card.x + shift,
        ..card
    };

    f.render_widget(Clear, card);
    f.render_widget(
        Paragraph::new(lines).block(
            Block::bordered()
                .border_type(BorderType::Rounded)
                .border_style(Style::default().fg(rgb(testimonial.color)))
                .style(Style::default().bg(theme.card_bg_color))
                .padding(Padding::horizontal(1)),
        ),
        card,
    );

    f.render_widget(dot_indicator(app.carousel.index(), app.carousel.len(), theme), dots);
}

/// Avatar, quote, and attribution for one testimonial
fn card_lines(
    testimonial: &Testimonial,
    width: usize,
    elapsed: Duration,
    theme: &Theme,
) -> Vec<Line<'static>> {
    let avatar = Line::styled(
        "\u{25B2}", // ▲ candy corn
        Style::default().fg(rgb(testimonial.color)),
    )
    .centered();

    // The avatar bobs between the first two rows
    let mut lines = if bob(elapsed, AVATAR_PERIOD, 1.0) > 0 {
        vec![avatar, Line::default()]
    } else {
        vec![Line::default(), avatar]
    };
    lines.push(Line::default());

    let quote_style = Style::default()
        .fg(theme.text_color)
        .add_modifier(Modifier::ITALIC);
    lines.extend(
        wrap_line(&format!("\u{201C}{}\u{201D}", testimonial.quote), width)
            .into_iter()
            .map(|l| Line::styled(l, quote_style)),
    );
    lines.push(Line::default());
    lines.push(Line::from(vec![
        Span::styled(
            testimonial.name,
            Style::default()
                .fg(rgb(testimonial.color))
                .add_modifier(Modifier::BOLD),
        ),
        Span::styled(
            format!(" \u{00B7} {}", testimonial.title),
            Style::default().fg(theme.dim_color),
        ),
    ]));
    lines
}

fn rotation_note(interval: Duration) -> String {
    if interval.is_zero() {
        "Sugar-fueled reviews".to_string()
    } else {
        format!(
            "Sugar-fueled reviews, a new one every {:.1}s",
            interval.as_secs_f64()
        )
    }
}

/// `● ○ ○` style position marker
fn dot_indicator(index: usize, len: usize, theme: &Theme) -> Line<'static> {
    let spans: Vec<Span> = (0..len)
        .map(|i| {
            if i == index {
                Span::styled("\u{25CF} ", Style::default().fg(theme.accent_color))
            } else {
                Span::styled("\u{25CB} ", Style::default().fg(theme.dim_color))
            }
        })
        .collect();
    Line::from(spans).centered()
}
