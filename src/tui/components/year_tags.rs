//! Launch year tag buttons
//!
//! Fifteen tags, 2006 to 2020, wrapped to the panel width. The cursor
//! moves freely; activating a tag queues a `LaunchYear` change for App.

use crate::api::{FilterChange, LAUNCH_YEARS};
use crate::front_page::{YearTag, YEAR_HEADING};
use crate::tui::layout::{tags_per_row, YEAR_TAG_GAP};
use crate::tui::traits::{Component, ComponentId, Handled, Interactive, RenderContext};
use crossterm::event::{KeyCode, KeyEvent};
use ratatui::{
    layout::Rect,
    style::Style,
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

#[derive(Debug, Default)]
pub struct YearTags {
    cursor: usize,
    pending: Option<FilterChange>,
}

impl YearTags {
    pub fn new() -> Self {
        Self::default()
    }

    /// Change requested by the last key, if any
    pub fn take_change(&mut self) -> Option<FilterChange> {
        self.pending.take()
    }

    fn activate(&mut self) {
        if let Some(year) = LAUNCH_YEARS.get(self.cursor) {
            self.pending = Some(FilterChange::LaunchYear((*year).to_string()));
        }
    }

    pub fn render(&self, f: &mut Frame, area: Rect, tags: &[YearTag], ctx: &RenderContext) {
        let theme = ctx.theme;
        let focused = ctx.is_focused(self.id());
        let per_row = tags_per_row(area.width);
        let gap = " ".repeat(YEAR_TAG_GAP as usize);

        let lines: Vec<Line> = tags
            .chunks(per_row)
            .enumerate()
            .map(|(row, chunk)| {
                let mut spans = Vec::with_capacity(chunk.len() * 2);
                for (col, tag) in chunk.iter().enumerate() {
                    if col > 0 {
                        spans.push(Span::raw(gap.clone()));
                    }
                    let under_cursor = focused && row * per_row + col == self.cursor;
                    spans.push(Span::styled(
                        format!(" {} ", tag.year),
                        theme.button_style(tag.active, under_cursor),
                    ));
                }
                Line::from(spans)
            })
            .collect();

        let block = Block::default()
            .borders(Borders::ALL)
            .border_type(theme.border_type)
            .border_style(theme.border_style(focused))
            .title(Span::styled(
                format!(" {} ", YEAR_HEADING),
                Style::default().fg(theme.heading),
            ));

        f.render_widget(Paragraph::new(lines).block(block), area);
    }
}

impl Component for YearTags {
    fn id(&self) -> ComponentId {
        ComponentId::Years
    }
}

impl Interactive for YearTags {
    fn handle_key(&mut self, key: KeyEvent) -> Handled {
        let last = LAUNCH_YEARS.len() - 1;
        match key.code {
            KeyCode::Left | KeyCode::Char('h') => {
                self.cursor = self.cursor.saturating_sub(1);
                Handled::Yes
            }
            KeyCode::Right | KeyCode::Char('l') => {
                self.cursor = (self.cursor + 1).min(last);
                Handled::Yes
            }
            KeyCode::Home => {
                self.cursor = 0;
                Handled::Yes
            }
            KeyCode::End => {
                self.cursor = last;
                Handled::Yes
            }
            KeyCode::Enter | KeyCode::Char(' ') => {
                self.activate();
                Handled::Yes
            }
            _ => Handled::No,
        }
    }

    fn focus_hint(&self) -> Option<&'static str> {
        Some("←→:move  Enter:select year")
    }
}
