// Theme system for the TUI
//
// Two built-in palettes, picked by name from the config. Each theme
// defines colors for every element the front page draws.

use ratatui::style::{Color, Modifier, Style};
use ratatui::widgets::BorderType;

/// Available themes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ThemeKind {
    #[default]
    Dark,
    Light,
}

impl ThemeKind {
    /// Parse a theme name from config, falling back to dark
    pub fn from_name(name: &str) -> Self {
        match name.trim().to_lowercase().as_str() {
            "light" => ThemeKind::Light,
            "dark" => ThemeKind::Dark,
            other => {
                tracing::warn!("Unknown theme {:?}, using dark", other);
                ThemeKind::Dark
            }
        }
    }

    pub fn theme(&self) -> Theme {
        match self {
            ThemeKind::Dark => Theme::dark(),
            ThemeKind::Light => Theme::light(),
        }
    }
}

/// Complete theme definition with all UI colors
#[derive(Debug, Clone)]
pub struct Theme {
    pub background: Color,
    pub foreground: Color,
    pub border: Color,
    pub border_focused: Color,
    pub border_type: BorderType,

    pub title: Color,
    pub heading: Color,
    pub muted: Color,
    pub status_bar: Color,

    // Buttons and tags
    pub button: Color,
    pub button_active_fg: Color,
    pub button_active_bg: Color,
    pub cursor: Color,

    // Cards
    pub card_heading: Color,
    pub success: Color,
    pub failure: Color,
    pub selection: Color,

    pub highlight: Color,

    // Log levels
    pub log_error: Color,
    pub log_warn: Color,
    pub log_info: Color,
    pub log_debug: Color,
}

impl Default for Theme {
    fn default() -> Self {
        Self::dark()
    }
}

impl Theme {
    pub fn dark() -> Self {
        Self {
            background: Color::Reset,
            foreground: Color::White,
            border: Color::Gray,
            border_focused: Color::Cyan,
            border_type: BorderType::Rounded,

            title: Color::Cyan,
            heading: Color::LightBlue,
            muted: Color::DarkGray,
            status_bar: Color::Green,

            button: Color::Gray,
            button_active_fg: Color::Black,
            button_active_bg: Color::Green,
            cursor: Color::Yellow,

            card_heading: Color::LightCyan,
            success: Color::Green,
            failure: Color::Red,
            selection: Color::Yellow,

            highlight: Color::Cyan,

            log_error: Color::Red,
            log_warn: Color::Yellow,
            log_info: Color::Blue,
            log_debug: Color::Gray,
        }
    }

    pub fn light() -> Self {
        Self {
            background: Color::White,
            foreground: Color::Black,
            border: Color::DarkGray,
            border_focused: Color::Blue,
            border_type: BorderType::Plain,

            title: Color::Blue,
            heading: Color::Blue,
            muted: Color::Gray,
            status_bar: Color::DarkGray,

            button: Color::DarkGray,
            button_active_fg: Color::White,
            button_active_bg: Color::Blue,
            cursor: Color::Magenta,

            card_heading: Color::Blue,
            success: Color::Green,
            failure: Color::Red,
            selection: Color::Magenta,

            highlight: Color::Blue,

            log_error: Color::Red,
            log_warn: Color::Rgb(184, 134, 11), // Dark goldenrod
            log_info: Color::Blue,
            log_debug: Color::DarkGray,
        }
    }

    /// Border style for a panel, brighter when focused
    pub fn border_style(&self, focused: bool) -> Style {
        if focused {
            Style::default()
                .fg(self.border_focused)
                .add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(self.border)
        }
    }

    /// Style for a filter button / year tag
    pub fn button_style(&self, active: bool, under_cursor: bool) -> Style {
        let base = if active {
            Style::default()
                .fg(self.button_active_fg)
                .bg(self.button_active_bg)
                .add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(self.button)
        };

        if under_cursor {
            base.add_modifier(Modifier::UNDERLINED).fg(if active {
                self.button_active_fg
            } else {
                self.cursor
            })
        } else {
            base
        }
    }

    /// Color for a True/False value on a card
    pub fn outcome_color(&self, value: bool) -> Color {
        if value {
            self.success
        } else {
            self.failure
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn theme_names_parse() {
        assert_eq!(ThemeKind::from_name("Light"), ThemeKind::Light);
        assert_eq!(ThemeKind::from_name(" dark "), ThemeKind::Dark);
        assert_eq!(ThemeKind::from_name("solarized"), ThemeKind::Dark);
    }
}
