use crate::transcript::Tone;
use ratatui::style::Color;

pub struct Theme {
    pub fg: Color,
    pub primary: Color,   // Blue
    pub secondary: Color, // Orange
    pub comment: Color,   // Grey
    pub success: Color,   // Green
    pub notice: Color,    // Yellow
    pub error: Color,     // Red
    pub rule: Color,      // Cyan
    pub border_focused: Color,
    pub border_normal: Color,
    pub current_line_bg: Color,
    pub selection_bg: Color,
}

pub const DEFAULT_THEME: Theme = Theme {
    fg: Color::Rgb(205, 214, 244),
    primary: Color::Rgb(137, 180, 250),   // Blue
    secondary: Color::Rgb(250, 179, 135), // Orange
    comment: Color::Rgb(108, 112, 134),
    success: Color::Rgb(166, 227, 161),
    notice: Color::Rgb(249, 226, 175),
    error: Color::Rgb(243, 139, 168),
    rule: Color::Rgb(148, 226, 213),
    border_focused: Color::Rgb(249, 226, 175), // Yellow border for focus
    border_normal: Color::Rgb(108, 112, 134),  // Grey border for normal
    current_line_bg: Color::Rgb(50, 50, 70),   // Status bar background
    selection_bg: Color::Rgb(69, 71, 90),      // Highlighted menu entry
};

impl Theme {
    /// Foreground for a transcript line
    pub fn tone(&self, tone: Tone) -> Color {
        match tone {
            Tone::Banner => self.primary,
            Tone::Rule => self.rule,
            Tone::Success => self.success,
            Tone::Notice => self.notice,
            Tone::Error => self.error,
            Tone::Plain => self.fg,
        }
    }
}
