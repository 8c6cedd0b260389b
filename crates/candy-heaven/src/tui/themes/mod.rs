//! Candy theme
//!
//! One palette for the whole page, plus helpers to turn core colors into
//! terminal colors.

use palette::Srgb;
use ratatui::style::Color;

/// Page colors
#[derive(Debug, Clone)]
pub struct Theme {
    pub name: String,

    // Core colors
    pub bg_color: Color,
    pub card_bg_color: Color,
    pub border_color: Color,
    pub text_color: Color,
    pub dim_color: Color,

    // Brand colors
    pub accent_color: Color,
    pub accent_alt_color: Color,
    pub highlight_color: Color,

    // Status colors
    pub success_color: Color,
    pub error_color: Color,

    // Input & Form Colors
    pub input_bg_color: Color,
    pub input_placeholder_color: Color,
}

impl Theme {
    /// Default candy-shop theme
    pub fn candy() -> Self {
        Self {
            name: "candy".to_string(),
            bg_color: Color::Rgb(28, 10, 36),         // Deep plum
            card_bg_color: Color::Rgb(44, 18, 56),    // Lifted plum
            border_color: Color::Rgb(255, 182, 193),  // Light pink
            text_color: Color::Rgb(255, 240, 245),    // Lavender blush
            dim_color: Color::Rgb(196, 160, 200),     // Muted lilac
            accent_color: Color::Rgb(255, 20, 147),   // Deep pink
            accent_alt_color: Color::Rgb(131, 56, 236), // Violet
            highlight_color: Color::Rgb(255, 190, 11), // Amber
            success_color: Color::Rgb(32, 178, 170),  // Sea green
            error_color: Color::Rgb(255, 99, 71),     // Tomato
            input_bg_color: Color::Rgb(58, 26, 72),
            input_placeholder_color: Color::Rgb(150, 120, 160),
        }
    }

    /// Background as RGB, for fading particles into it
    pub fn bg_rgb(&self) -> (u8, u8, u8) {
        match self.bg_color {
            Color::Rgb(r, g, b) => (r, g, b),
            _ => (0, 0, 0),
        }
    }
}

impl Default for Theme {
    fn default() -> Self {
        Self::candy()
    }
}

/// Terminal color for a core palette entry
pub fn rgb(color: Srgb<u8>) -> Color {
    Color::Rgb(color.red, color.green, color.blue)
}

/// Blend `color` towards `bg`; `opacity` 1.0 keeps the color, 0.0 is `bg`
pub fn fade(color: Srgb<u8>, bg: (u8, u8, u8), opacity: f64) -> Color {
    let t = opacity.clamp(0.0, 1.0);
    let mix = |c: u8, b: u8| (b as f64 + (c as f64 - b as f64) * t).round() as u8;
    Color::Rgb(
        mix(color.red, bg.0),
        mix(color.green, bg.1),
        mix(color.blue, bg.2),
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fade_endpoints() {
        let pink = Srgb::new(255u8, 20, 147);
        let bg = (28, 10, 36);
        assert_eq!(fade(pink, bg, 1.0), Color::Rgb(255, 20, 147));
        assert_eq!(fade(pink, bg, 0.0), Color::Rgb(28, 10, 36));
        assert_eq!(fade(pink, bg, 7.0), Color::Rgb(255, 20, 147));
    }

    #[test]
    fn test_bg_rgb() {
        assert_eq!(Theme::candy().bg_rgb(), (28, 10, 36));
    }
}
