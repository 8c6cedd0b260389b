//! Contact form section

use std::time::Duration;

use candy_core::catalog::{CONTACT_BLURB, CONTACT_HEADLINE, CONTACT_SUBMIT};
use candy_core::ContactField;
use ratatui::{
    layout::{Alignment, Constraint, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Paragraph, Wrap},
    Frame,
};
use unicode_width::UnicodeWidthChar;

use crate::tui::animation::motion::pulse;
use crate::tui::app::App;
use crate::tui::utils::text::{centered_rect, display_width};

const FORM_WIDTH: u16 = 60;
const PULSE_PERIOD: Duration = Duration::from_millis(1800);
const CURSOR: &str = "\u{258F}"; // ▏

pub fn render(f: &mut Frame, area: Rect, app: &App) {
    let theme = &app.theme;
    let width = area.width.min(FORM_WIDTH);
    let form = Rect {
        x: area.x + (area.width - width) / 2,
        width,
        ..area
    };

    let chunks = Layout::vertical([
        Constraint::Length(1), // Headline
        Constraint::Length(3), // Blurb
        Constraint::Length(3), // Name
        Constraint::Length(3), // Email
        Constraint::Length(3), // Message
        Constraint::Length(1), // Error
        Constraint::Length(3), // Submit
        Constraint::Min(0),
    ])
    .split(form);

    f.render_widget(
        Line::styled(
            CONTACT_HEADLINE,
            Style::default()
                .fg(theme.accent_color)
                .add_modifier(Modifier::BOLD),
        )
        .centered(),
        chunks[0],
    );
    f.render_widget(
        Paragraph::new(CONTACT_BLURB)
            .style(Style::default().fg(theme.dim_color))
            .alignment(Alignment::Center)
            .wrap(Wrap { trim: true }),
        chunks[1],
    );

    for (field, area) in ContactField::ALL.iter().zip(&chunks[2..5]) {
        render_field(f, *area, app, *field);
    }

    if let Some(error) = &app.contact_error {
        f.render_widget(
            Line::styled(
                format!("\u{2717} {error}"),
                Style::default().fg(theme.error_color),
            ),
            chunks[5],
        );
    }

    let border = if pulse(app.started.elapsed(), PULSE_PERIOD) > 0.5 {
        theme.highlight_color
    } else {
        theme.accent_color
    };
    let button = centered_rect(chunks[6], display_width(CONTACT_SUBMIT) + 6, 3);
    f.render_widget(
        Paragraph::new(CONTACT_SUBMIT)
            .alignment(Alignment::Center)
            .style(
                Style::default()
                    .fg(theme.text_color)
                    .add_modifier(Modifier::BOLD),
            )
            .block(
                Block::bordered()
                    .border_type(BorderType::Rounded)
                    .border_style(Style::default().fg(border)),
            ),
        button,
    );
}

fn render_field(f: &mut Frame, area: Rect, app: &App, field: ContactField) {
    let theme = &app.theme;
    let focused = app.contact_editing && app.contact.focus() == field;
    let has_error = app
        .contact_error
        .as_ref()
        .is_some_and(|e| e.field() == field);

    let border = if has_error {
        theme.error_color
    } else if focused {
        theme.accent_color
    } else {
        theme.border_color
    };
    let title = if field.is_required() {
        format!(" {} * ", field.label())
    } else {
        format!(" {} ", field.label())
    };
    let block = Block::bordered()
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(border))
        .title(Span::styled(title, Style::default().fg(theme.text_color)))
        .style(Style::default().bg(theme.input_bg_color));

    let value = app.contact.value(field);
    let room = area.width.saturating_sub(3) as usize;
    let mut spans = if value.is_empty() {
        vec![Span::styled(
            field.placeholder(),
            Style::default().fg(theme.input_placeholder_color),
        )]
    } else {
        vec![Span::styled(
            visible_tail(value, room),
            Style::default().fg(theme.text_color),
        )]
    };
    if focused {
        let cursor = Span::styled(CURSOR, Style::default().fg(theme.accent_color));
        if value.is_empty() {
            spans.insert(0, cursor);
        } else {
            spans.push(cursor);
        }
    }

    f.render_widget(Paragraph::new(Line::from(spans)).block(block), area);
}

/// Longest suffix of `value` that fits in `width` columns
fn visible_tail(value: &str, width: usize) -> &str {
    let mut used = 0;
    for (i, c) in value.char_indices().rev() {
        used += c.width().unwrap_or(0);
        if used > width {
            return &value[i + c.len_utf8()..];
        }
    }
    value
}
