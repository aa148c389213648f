//! Name search input
//!
//! Holds the view-local search string. It never reaches the provider:
//! the front page applies it to whatever records were fetched.

use crate::front_page::{SEARCH_HEADING, SEARCH_PLACEHOLDER};
use crate::tui::traits::{Component, ComponentId, Handled, Interactive, RenderContext};
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use ratatui::{
    layout::{Position, Rect},
    style::Style,
    text::Span,
    widgets::{Block, Borders, Paragraph},
    Frame,
};
use unicode_width::UnicodeWidthStr;

#[derive(Debug, Default)]
pub struct SearchBox {
    query: String,
}

impl SearchBox {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn query(&self) -> &str {
        &self.query
    }

    pub fn render(&self, f: &mut Frame, area: Rect, ctx: &RenderContext) {
        let theme = ctx.theme;
        let focused = ctx.is_focused(self.id());

        let content = if self.query.is_empty() {
            Span::styled(SEARCH_PLACEHOLDER, Style::default().fg(theme.muted))
        } else {
            Span::styled(self.query.as_str(), Style::default().fg(theme.foreground))
        };

        let block = Block::default()
            .borders(Borders::ALL)
            .border_type(theme.border_type)
            .border_style(theme.border_style(focused))
            .title(Span::styled(
                format!(" {} ", SEARCH_HEADING),
                Style::default().fg(theme.heading),
            ));

        f.render_widget(Paragraph::new(content).block(block), area);

        if focused {
            let max_x = area.right().saturating_sub(2);
            let x = (area.x + 1 + self.query.width() as u16).min(max_x);
            f.set_cursor_position(Position::new(x, area.y + 1));
        }
    }
}

impl Component for SearchBox {
    fn id(&self) -> ComponentId {
        ComponentId::Search
    }
}

impl Interactive for SearchBox {
    fn handle_key(&mut self, key: KeyEvent) -> Handled {
        match key.code {
            KeyCode::Char(c)
                if !key
                    .modifiers
                    .intersects(KeyModifiers::CONTROL | KeyModifiers::ALT) =>
            {
                self.query.push(c);
                tracing::debug!(query = %self.query, "Search changed");
                Handled::Yes
            }
            KeyCode::Backspace => {
                if self.query.pop().is_some() {
                    tracing::debug!(query = %self.query, "Search changed");
                }
                Handled::Yes
            }
            _ => Handled::No,
        }
    }

    fn focus_hint(&self) -> Option<&'static str> {
        Some("type:search  Esc:leave")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    #[test]
    fn typing_and_backspace_edit_the_query() {
        let mut search = SearchBox::new();
        for c in "Mission 2x".chars() {
            assert_eq!(search.handle_key(key(KeyCode::Char(c))), Handled::Yes);
        }
        search.handle_key(key(KeyCode::Backspace));
        assert_eq!(search.query(), "Mission 2");
    }

    #[test]
    fn control_chords_and_esc_bubble_up() {
        let mut search = SearchBox::new();
        let ctrl_c = KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL);
        assert_eq!(search.handle_key(ctrl_c), Handled::No);
        assert_eq!(search.handle_key(key(KeyCode::Esc)), Handled::No);
        assert!(search.query().is_empty());
    }

    #[test]
    fn backspace_on_empty_is_harmless() {
        let mut search = SearchBox::new();
        assert_eq!(search.handle_key(key(KeyCode::Backspace)), Handled::Yes);
        assert_eq!(search.query(), "");
    }
}
