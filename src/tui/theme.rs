// Colors for the table UI
//
// One palette, kept in a struct so components never hard-code colors.

use ratatui::style::{Color, Modifier, Style};
use ratatui::widgets::BorderType;

/// Theme definition with all UI colors
#[derive(Debug, Clone)]
pub struct Theme {
    pub background: Color,
    pub foreground: Color,
    pub border: Color,
    pub border_type: BorderType,
    pub highlight: Color,
    pub header: Color,
    pub cursor_bg: Color,
    pub cursor_fg: Color,
    pub selected: Color,
    pub dragging: Color,
    pub muted: Color,
    pub error: Color,
    pub warn: Color,
    pub info: Color,
}

impl Default for Theme {
    fn default() -> Self {
        Self {
            background: Color::Reset,
            foreground: Color::White,
            border: Color::DarkGray,
            border_type: BorderType::Rounded,
            highlight: Color::Cyan,
            header: Color::Yellow,
            cursor_bg: Color::Blue,
            cursor_fg: Color::White,
            selected: Color::Green,
            dragging: Color::Magenta,
            muted: Color::DarkGray,
            error: Color::Red,
            warn: Color::Yellow,
            info: Color::Gray,
        }
    }
}

impl Theme {
    /// Style for the row under the cursor
    pub fn cursor_style(&self) -> Style {
        Style::default()
            .fg(self.cursor_fg)
            .bg(self.cursor_bg)
            .add_modifier(Modifier::BOLD)
    }

    /// Border style, brighter when the panel has focus
    pub fn border_style(&self, focused: bool) -> Style {
        if focused {
            Style::default().fg(self.highlight)
        } else {
            Style::default().fg(self.border)
        }
    }
}
