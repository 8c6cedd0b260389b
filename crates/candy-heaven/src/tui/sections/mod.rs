//! Page sections
//!
//! One renderer per section of the landing page. Renderers only read `App`;
//! all motion is derived from timestamps.

pub mod contact;
pub mod flight;
pub mod hero;
pub mod quest;
pub mod testimonials;

use ratatui::{
    style::{Modifier, Style},
    text::Line,
};

use crate::tui::themes::Theme;

/// Centered section title with a dim subtitle and a blank spacer
fn heading<'a>(title: &'a str, subtitle: &'a str, theme: &Theme) -> Vec<Line<'a>> {
    vec![
        Line::styled(
            title,
            Style::default()
                .fg(theme.accent_color)
                .add_modifier(Modifier::BOLD),
        )
        .centered(),
        Line::styled(subtitle, Style::default().fg(theme.dim_color)).centered(),
        Line::default(),
    ]
}
