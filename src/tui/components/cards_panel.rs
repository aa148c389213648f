//! Launch cards panel
//!
//! One bordered card per launch that survives the search, in fetch order.
//! Scrolls by whole cards; the selected card is what `y` copies from.

use super::formatters::truncate_to_width;
use super::scrollbar::{render_scrollbar, ScrollbarStyle};
use crate::api::bool_label;
use crate::front_page::{FrontPage, LaunchCard};
use crate::tui::scroll::ScrollState;
use crate::tui::theme::Theme;
use crate::tui::traits::{
    Component, ComponentId, Handled, Interactive, RenderContext, Scrollable, Selectable,
};
use crossterm::event::{KeyCode, KeyEvent};
use ratatui::{
    layout::{Alignment, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

/// Rows per card: border, four detail lines, patch line, border
pub const CARD_HEIGHT: u16 = 7;

pub struct CardsPanel {
    scroll: ScrollState,
    selected: Option<usize>,
    card_count: usize,
}

impl CardsPanel {
    pub fn new() -> Self {
        Self {
            scroll: ScrollState::manual(),
            selected: None,
            card_count: 0,
        }
    }

    /// Sync with the cards about to be drawn (call each frame)
    pub fn sync_cards(&mut self, count: usize, area_height: u16) {
        let viewport = (area_height.saturating_sub(2) / CARD_HEIGHT).max(1) as usize;
        self.card_count = count;
        self.scroll.update_dimensions(count, viewport);

        self.selected = match self.selected {
            _ if count == 0 => None,
            Some(idx) => Some(idx.min(count - 1)),
            None => Some(0),
        };
        if let Some(idx) = self.selected {
            self.scroll.ensure_visible(idx);
        }
    }

    /// A new result set arrived: start from the top again
    pub fn reset(&mut self) {
        self.selected = None;
        self.scroll.scroll_to_top();
    }

    /// Card under the selection, if any
    pub fn selected_card<'a>(&self, page: &'a FrontPage) -> Option<&'a LaunchCard> {
        self.selected.and_then(|idx| page.cards.get(idx))
    }

    pub fn render(&self, f: &mut Frame, area: Rect, page: &FrontPage, ctx: &RenderContext) {
        let theme = ctx.theme;
        let focused = ctx.is_focused(self.id());

        let title = if page.search.is_empty() {
            format!(" Launches ({}) ", page.cards.len())
        } else {
            format!(" Launches ({} of {}) ", page.cards.len(), page.fetched)
        };
        let outer = Block::default()
            .borders(Borders::ALL)
            .border_type(theme.border_type)
            .border_style(theme.border_style(focused))
            .title(title);
        let inner = outer.inner(area);
        f.render_widget(outer, area);

        if page.cards.is_empty() {
            let message = empty_message(page, ctx);
            let empty = Paragraph::new(message)
                .alignment(Alignment::Center)
                .style(Style::default().fg(theme.muted));
            f.render_widget(empty, inner);
            return;
        }

        let (start, end) = self.scroll.visible_range();
        let visible = page.cards.iter().enumerate().skip(start).take(end - start);
        for (slot, (idx, card)) in visible.enumerate() {
            let y = inner.y.saturating_add((slot as u16).saturating_mul(CARD_HEIGHT));
            if y.saturating_add(CARD_HEIGHT) > inner.bottom() {
                break;
            }
            let card_area = Rect::new(inner.x, y, inner.width.saturating_sub(1), CARD_HEIGHT);
            let selected = focused && self.selected == Some(idx);
            render_card(f, card_area, card, selected, theme);
        }

        render_scrollbar(f, area, &self.scroll, ScrollbarStyle::Arrows);
    }
}

impl Default for CardsPanel {
    fn default() -> Self {
        Self::new()
    }
}

fn empty_message(page: &FrontPage, ctx: &RenderContext) -> String {
    if page.loading && page.fetched == 0 {
        format!("{} Loading launches…", ctx.spinner_char())
    } else if page.fetched > 0 {
        format!("No launches match \"{}\"", page.search)
    } else {
        "No launches".to_string()
    }
}

fn render_card(f: &mut Frame, area: Rect, card: &LaunchCard, selected: bool, theme: &Theme) {
    let width = area.width.saturating_sub(2) as usize;

    let border_style = if selected {
        Style::default()
            .fg(theme.selection)
            .add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(theme.border)
    };
    let heading = truncate_to_width(&format!(" {} ", card.heading), width);

    let [mission_ids, launch_year, _, _] = card.lines();
    let outcome = |label: &str, value: bool| {
        Line::from(vec![
            Span::raw(label.to_string()),
            Span::styled(
                bool_label(value),
                Style::default().fg(theme.outcome_color(value)),
            ),
        ])
    };

    let patch = if card.patch.fallback {
        format!("Patch: {} (fallback)", card.patch.src)
    } else {
        format!("Patch: {}", card.patch.src)
    };

    let lines = vec![
        Line::from(truncate_to_width(&mission_ids, width)),
        Line::from(truncate_to_width(&launch_year, width)),
        outcome("Launch Success: ", card.launch_success),
        outcome("Successful Landing : ", card.landing_success),
        Line::styled(
            truncate_to_width(&patch, width),
            Style::default().fg(theme.muted),
        ),
    ];

    let block = Block::default()
        .borders(Borders::ALL)
        .border_type(theme.border_type)
        .border_style(border_style)
        .title(Span::styled(
            heading,
            Style::default()
                .fg(theme.card_heading)
                .add_modifier(Modifier::BOLD),
        ));

    f.render_widget(Paragraph::new(lines).block(block), area);
}

impl Component for CardsPanel {
    fn id(&self) -> ComponentId {
        ComponentId::Cards
    }
}

impl Scrollable for CardsPanel {
    fn scroll_state(&self) -> &ScrollState {
        &self.scroll
    }

    fn scroll_state_mut(&mut self) -> &mut ScrollState {
        &mut self.scroll
    }
}

impl Selectable for CardsPanel {
    fn selected_index(&self) -> Option<usize> {
        self.selected
    }

    fn select(&mut self, index: usize) {
        if self.card_count == 0 {
            self.selected = None;
            return;
        }
        let index = index.min(self.card_count - 1);
        self.selected = Some(index);
        self.scroll.ensure_visible(index);
    }

    fn item_count(&self) -> usize {
        self.card_count
    }
}

impl Interactive for CardsPanel {
    fn handle_key(&mut self, key: KeyEvent) -> Handled {
        let page = self.scroll.viewport().max(1);
        match key.code {
            KeyCode::Up | KeyCode::Char('k') => {
                self.select_previous();
                Handled::Yes
            }
            KeyCode::Down | KeyCode::Char('j') => {
                self.select_next();
                Handled::Yes
            }
            KeyCode::PageUp => {
                self.page_up();
                let target = self.selected.unwrap_or(0).saturating_sub(page);
                self.select(target);
                Handled::Yes
            }
            KeyCode::PageDown => {
                self.page_down();
                let target = self.selected.map_or(0, |idx| idx + page);
                self.select(target);
                Handled::Yes
            }
            KeyCode::Home => {
                self.scroll_to_top();
                self.select_first();
                Handled::Yes
            }
            KeyCode::End => {
                self.scroll_to_bottom();
                self.select_last();
                Handled::Yes
            }
            _ => Handled::No,
        }
    }

    fn focus_hint(&self) -> Option<&'static str> {
        Some("↑↓:select  PgUp/PgDn:page  y:copy patch URL")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::KeyModifiers;

    fn press(panel: &mut CardsPanel, code: KeyCode) {
        panel.handle_key(KeyEvent::new(code, KeyModifiers::NONE));
    }

    #[test]
    fn selection_starts_at_first_card() {
        let mut panel = CardsPanel::new();
        panel.sync_cards(3, 30);
        assert_eq!(panel.selected_index(), Some(0));

        panel.sync_cards(0, 30);
        assert_eq!(panel.selected_index(), None);
    }

    #[test]
    fn navigation_clamps_and_scrolls() {
        let mut panel = CardsPanel::new();
        // 2 + 3 cards * 7 rows
        panel.sync_cards(10, 23);
        assert_eq!(panel.scroll_state().viewport(), 3);

        press(&mut panel, KeyCode::End);
        assert_eq!(panel.selected_index(), Some(9));
        assert_eq!(panel.visible_range(), (7, 10));

        press(&mut panel, KeyCode::Down);
        assert_eq!(panel.selected_index(), Some(9));

        press(&mut panel, KeyCode::Home);
        assert_eq!(panel.selected_index(), Some(0));
        assert_eq!(panel.visible_range(), (0, 3));

        press(&mut panel, KeyCode::PageDown);
        assert_eq!(panel.selected_index(), Some(3));
        assert!(panel.visible_range().0 <= 3 && 3 < panel.visible_range().1);
    }

    #[test]
    fn narrowing_search_clamps_selection() {
        let mut panel = CardsPanel::new();
        panel.sync_cards(10, 23);
        press(&mut panel, KeyCode::End);

        panel.sync_cards(1, 23);
        assert_eq!(panel.selected_index(), Some(0));
        assert_eq!(panel.visible_range(), (0, 1));
    }
}
