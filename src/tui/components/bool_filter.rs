//! True/False button pair for one tri-state filter
//!
//! Used twice: Successful Launch and Successful Landing. Both buttons start
//! inactive; activating one queues a change that sets the filter to it.

use crate::api::{bool_label, FilterChange};
use crate::front_page::BoolToggle;
use crate::tui::traits::{Component, ComponentId, Handled, Interactive, RenderContext};
use crossterm::event::{KeyCode, KeyEvent};
use ratatui::{
    layout::Rect,
    style::Style,
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

#[derive(Debug)]
pub struct BoolFilter {
    id: ComponentId,
    change: fn(bool) -> FilterChange,
    /// Button under the cursor: true = "True"
    cursor: bool,
    pending: Option<FilterChange>,
}

impl BoolFilter {
    pub fn launch() -> Self {
        Self::new(ComponentId::LaunchFilter, FilterChange::LaunchSuccess)
    }

    pub fn landing() -> Self {
        Self::new(ComponentId::LandFilter, FilterChange::LandSuccess)
    }

    fn new(id: ComponentId, change: fn(bool) -> FilterChange) -> Self {
        Self {
            id,
            change,
            cursor: true,
            pending: None,
        }
    }

    /// Change requested by the last key, if any
    pub fn take_change(&mut self) -> Option<FilterChange> {
        self.pending.take()
    }

    fn activate(&mut self, value: bool) {
        self.cursor = value;
        self.pending = Some((self.change)(value));
    }

    pub fn render(&self, f: &mut Frame, area: Rect, toggle: &BoolToggle, ctx: &RenderContext) {
        let theme = ctx.theme;
        let focused = ctx.is_focused(self.id);

        let button = |value: bool| {
            Span::styled(
                format!(" {} ", bool_label(value)),
                theme.button_style(toggle.is_active(value), focused && self.cursor == value),
            )
        };
        let line = Line::from(vec![button(true), Span::raw("  "), button(false)]);

        let block = Block::default()
            .borders(Borders::ALL)
            .border_type(theme.border_type)
            .border_style(theme.border_style(focused))
            .title(Span::styled(
                format!(" {} ", toggle.heading),
                Style::default().fg(theme.heading),
            ));

        f.render_widget(Paragraph::new(line).block(block), area);
    }
}

impl Component for BoolFilter {
    fn id(&self) -> ComponentId {
        self.id
    }
}

impl Interactive for BoolFilter {
    fn handle_key(&mut self, key: KeyEvent) -> Handled {
        match key.code {
            KeyCode::Left | KeyCode::Char('h') => {
                self.cursor = true;
                Handled::Yes
            }
            KeyCode::Right | KeyCode::Char('l') => {
                self.cursor = false;
                Handled::Yes
            }
            KeyCode::Enter | KeyCode::Char(' ') => {
                self.activate(self.cursor);
                Handled::Yes
            }
            KeyCode::Char('t') => {
                self.activate(true);
                Handled::Yes
            }
            KeyCode::Char('f') => {
                self.activate(false);
                Handled::Yes
            }
            _ => Handled::No,
        }
    }

    fn focus_hint(&self) -> Option<&'static str> {
        Some("←→:move  Enter:select  t/f:True/False")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::KeyModifiers;

    fn press(filter: &mut BoolFilter, code: KeyCode) {
        filter.handle_key(KeyEvent::new(code, KeyModifiers::NONE));
    }

    #[test]
    fn enter_activates_button_under_cursor() {
        let mut landing = BoolFilter::landing();
        press(&mut landing, KeyCode::Right);
        press(&mut landing, KeyCode::Enter);
        assert_eq!(landing.take_change(), Some(FilterChange::LandSuccess(false)));
    }

    #[test]
    fn shortcut_keys_pick_directly() {
        let mut launch = BoolFilter::launch();
        press(&mut launch, KeyCode::Char('f'));
        assert_eq!(launch.take_change(), Some(FilterChange::LaunchSuccess(false)));
        assert!(!launch.cursor);

        press(&mut launch, KeyCode::Char('t'));
        assert_eq!(launch.take_change(), Some(FilterChange::LaunchSuccess(true)));
    }

    #[test]
    fn moving_alone_requests_nothing() {
        let mut launch = BoolFilter::launch();
        press(&mut launch, KeyCode::Right);
        press(&mut launch, KeyCode::Left);
        assert!(launch.take_change().is_none());
        assert_eq!(launch.id(), ComponentId::LaunchFilter);
    }
}
