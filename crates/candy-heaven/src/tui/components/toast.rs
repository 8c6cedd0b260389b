//! Toast notifications
//!
//! A short message in the bottom-right corner that disappears on its own.

use std::time::{Duration, Instant};

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Modifier, Style},
    text::Line,
    widgets::{Block, BorderType, Borders, Clear, Paragraph, Widget},
};
use unicode_width::UnicodeWidthStr;

use crate::tui::themes::Theme;

const DEFAULT_DURATION: Duration = Duration::from_secs(4);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToastKind {
    Success,
    Info,
}

#[derive(Debug, Clone)]
pub struct Toast {
    pub message: String,
    pub kind: ToastKind,
    created: Instant,
    duration: Duration,
}

impl Toast {
    fn new(message: impl Into<String>, kind: ToastKind) -> Self {
        Self {
            message: message.into(),
            kind,
            created: Instant::now(),
            duration: DEFAULT_DURATION,
        }
    }

    pub fn success(message: impl Into<String>) -> Self {
        Self::new(message, ToastKind::Success)
    }

    pub fn info(message: impl Into<String>) -> Self {
        Self::new(message, ToastKind::Info)
    }

    pub fn with_duration(mut self, duration: Duration) -> Self {
        self.duration = duration;
        self
    }

    pub fn is_expired(&self) -> bool {
        self.created.elapsed() >= self.duration
    }
}

/// Draw the toast in the bottom-right corner of `area`
pub fn render_toast(buf: &mut Buffer, area: Rect, toast: &Toast, theme: &Theme) {
    let width = (toast.message.width() as u16 + 4).min(area.width);
    let height = 3.min(area.height);
    if width < 5 || height < 3 {
        return;
    }

    let rect = Rect {
        x: area.x + area.width - width,
        y: area.y + area.height - height,
        width,
        height,
    };

    let color = match toast.kind {
        ToastKind::Success => theme.success_color,
        ToastKind::Info => theme.accent_alt_color,
    };

    Clear.render(rect, buf);
    Paragraph::new(Line::from(toast.message.as_str()))
        .style(
            Style::default()
                .fg(theme.text_color)
                .bg(theme.card_bg_color)
                .add_modifier(Modifier::BOLD),
        )
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded)
                .border_style(Style::default().fg(color)),
        )
        .render(rect, buf);
}
