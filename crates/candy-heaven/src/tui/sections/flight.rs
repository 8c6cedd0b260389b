//! Tasting flight: three jars side by side, one may be spilling

use std::time::Duration;

use candy_core::catalog::Jar;
use ratatui::{
    layout::{Constraint, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Paragraph, Wrap},
    Frame,
};

use super::heading;
use crate::tui::animation::motion::bob;
use crate::tui::app::App;
use crate::tui::themes::{rgb, Theme};

const BOB_PERIOD: Duration = Duration::from_millis(900);
/// Phase shift between neighbouring sweets
const BOB_STAGGER: Duration = Duration::from_millis(150);

pub fn render(f: &mut Frame, area: Rect, app: &App) {
    let theme = &app.theme;
    let [head, body] =
        Layout::vertical([Constraint::Length(3), Constraint::Min(0)]).areas(area);

    f.render_widget(
        Paragraph::new(heading(
            "Choose Your Tasting Flight",
            "\u{2190}/\u{2192} pick a jar \u{00B7} Space to spill it",
            theme,
        )),
        head,
    );

    let columns = Layout::horizontal([Constraint::Ratio(1, 3); 3]).split(body);
    let elapsed = app.started.elapsed();
    for (i, (jar, column)) in app.flight.jars().iter().zip(columns.iter()).enumerate() {
        let selected = i == app.flight.cursor();
        let spilling = app.flight.is_active(jar.id);
        render_jar(f, *column, jar, selected, spilling, elapsed, theme);
    }
}

fn render_jar(
    f: &mut Frame,
    area: Rect,
    jar: &Jar,
    selected: bool,
    spilling: bool,
    elapsed: Duration,
    theme: &Theme,
) {
    let border = if spilling {
        theme.highlight_color
    } else if selected {
        theme.accent_color
    } else {
        theme.border_color
    };
    let block = Block::bordered()
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(border))
        .title(Span::styled(
            format!(" {} ", jar.name),
            Style::default()
                .fg(theme.text_color)
                .add_modifier(Modifier::BOLD),
        ))
        .style(Style::default().bg(theme.card_bg_color));

    let mut lines = vec![
        Line::styled(jar.flavor, Style::default().fg(theme.accent_alt_color)),
        Line::default(),
        Line::styled(jar.description, Style::default().fg(theme.dim_color)),
        Line::default(),
    ];
    lines.extend(sweet_rows(jar, spilling, elapsed));
    if spilling {
        lines.push(
            Line::styled(
                "\u{2726} spilling \u{2726}", // ✦
                Style::default().fg(theme.highlight_color),
            )
            .centered(),
        );
    }

    f.render_widget(
        Paragraph::new(lines)
            .wrap(Wrap { trim: true })
            .block(block),
        area,
    );
}

/// Two rows of sweets; while spilling each sweet bobs between them
fn sweet_rows(jar: &Jar, spilling: bool, elapsed: Duration) -> [Line<'static>; 2] {
    let mut top = Vec::new();
    let mut bottom = Vec::new();
    for (i, color) in jar.sweets.iter().enumerate() {
        let sweet = Span::styled("\u{25CF} ", Style::default().fg(rgb(*color)));
        let up = spilling && bob(elapsed + BOB_STAGGER * i as u32, BOB_PERIOD, 1.0) > 0;
        if up {
            top.push(sweet);
            bottom.push(Span::raw("  "));
        } else {
            top.push(Span::raw("  "));
            bottom.push(sweet);
        }
    }
    [Line::from(top).centered(), Line::from(bottom).centered()]
}

#[cfg(test)]
mod tests {
    use super::*;
    use candy_core::catalog::JARS;

    fn sweets_in(line: &Line) -> usize {
        line.spans.iter().filter(|s| s.content.contains('●')).count()
    }

    #[test]
    fn test_resting_sweets_sit_on_bottom_row() {
        let [top, bottom] = sweet_rows(&JARS[0], false, Duration::from_millis(225));
        assert_eq!(sweets_in(&top), 0);
        assert_eq!(sweets_in(&bottom), 4);
    }

    #[test]
    fn test_spilling_sweets_bob() {
        // Quarter period: the first sweet is at its peak
        let [top, bottom] = sweet_rows(&JARS[0], true, Duration::from_millis(225));
        assert!(sweets_in(&top) >= 1);
        assert_eq!(sweets_in(&top) + sweets_in(&bottom), 4);
    }
}
