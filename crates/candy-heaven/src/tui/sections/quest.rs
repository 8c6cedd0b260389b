//! Candy quest: pick where your candy comes from, get a verdict

use std::time::Duration;

use candy_core::burst::CONFETTI_PALETTE;
use candy_core::catalog::QuestResponse;
use ratatui::{
    layout::{Constraint, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Padding, Paragraph, Wrap},
    Frame,
};

use super::heading;
use crate::tui::animation::motion::bob;
use crate::tui::app::App;
use crate::tui::themes::{rgb, Theme};

const WIGGLE_PERIOD: Duration = Duration::from_millis(400);

pub fn render(f: &mut Frame, area: Rect, app: &App) {
    let theme = &app.theme;
    let options = app.quest.options();
    let [head, list, response] = Layout::vertical([
        Constraint::Length(3),
        Constraint::Length(options.len() as u16 * 2),
        Constraint::Min(0),
    ])
    .areas(area);

    f.render_widget(
        Paragraph::new(heading(
            "Where do you get your candy fix?",
            "Press 1-3 to answer honestly",
            theme,
        )),
        head,
    );

    let wiggle = bob(app.started.elapsed(), WIGGLE_PERIOD, 1.0);
    let mut lines = Vec::new();
    for (i, option) in options.iter().enumerate() {
        let chosen = app.quest.is_chosen(option.id);
        let indent = if chosen { (2 + wiggle) as usize } else { 2 };
        let (marker, label_style) = if chosen {
            (
                "\u{25C6}", // ◆
                Style::default()
                    .fg(theme.highlight_color)
                    .add_modifier(Modifier::BOLD),
            )
        } else {
            ("\u{25C7}", Style::default().fg(theme.text_color)) // ◇
        };
        lines.push(Line::from(vec![
            Span::raw(" ".repeat(indent)),
            Span::styled(format!("{} ", i + 1), Style::default().fg(theme.accent_color)),
            Span::styled(format!("{marker} {}", option.label), label_style),
            Span::styled(
                format!("  {}", option.description),
                Style::default().fg(theme.dim_color),
            ),
        ]));
        lines.push(Line::default());
    }
    f.render_widget(Paragraph::new(lines), list);

    if let Some(answer) = app.quest.response() {
        render_response(f, response, answer, theme);
    }
}

fn render_response(f: &mut Frame, area: Rect, answer: &QuestResponse, theme: &Theme) {
    let mut lines = vec![
        Line::styled(
            answer.title,
            Style::default()
                .fg(theme.accent_color)
                .add_modifier(Modifier::BOLD),
        ),
        Line::default(),
        Line::styled(answer.body, Style::default().fg(theme.text_color)),
        Line::default(),
    ];
    lines.extend(menu_chips(&answer.menu));
    lines.push(Line::default());
    lines.push(Line::styled(
        "r to choose again",
        Style::default().fg(theme.dim_color),
    ));

    f.render_widget(
        Paragraph::new(lines).wrap(Wrap { trim: true }).block(
            Block::bordered()
                .border_type(BorderType::Rounded)
                .border_style(Style::default().fg(theme.accent_alt_color))
                .style(Style::default().bg(theme.card_bg_color))
                .padding(Padding::horizontal(1)),
        ),
        area,
    );
}

/// Menu items as colored chips, one per line
fn menu_chips(menu: &[&'static str]) -> Vec<Line<'static>> {
    menu.iter()
        .zip(CONFETTI_PALETTE.iter().cycle())
        .map(|(item, color)| {
            Line::from(vec![
                Span::styled("\u{25CF} ", Style::default().fg(rgb(*color))),
                Span::raw(*item),
            ])
        })
        .collect()
}
