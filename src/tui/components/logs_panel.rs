//! Logs panel component
//!
//! Displays the captured tracing output. Fetch failures only ever surface
//! here, so errors are drawn bold.
//!
//! The panel owns its scroll position and selection; the entries come from
//! the shared `LogBuffer` each frame.

use super::scrollbar::{render_scrollbar, ScrollbarStyle};
use crate::logging::{LogEntry, LogLevel};
use crate::tui::scroll::ScrollState;
use crate::tui::theme::Theme;
use crate::tui::traits::{
    Component, ComponentId, Handled, Interactive, RenderContext, Scrollable, Selectable,
};
use crossterm::event::{KeyCode, KeyEvent};
use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    widgets::{Block, Borders, List, ListItem},
    Frame,
};

pub struct LogsPanel {
    /// Scroll state (position, viewport, auto-follow)
    scroll: ScrollState,

    /// Selected log entry index (None = auto-follow mode)
    pub selected: Option<usize>,

    /// Cached entry count (for bounds checking)
    entry_count: usize,
}

impl LogsPanel {
    /// Create a new logs panel with auto-follow enabled
    pub fn new() -> Self {
        Self {
            scroll: ScrollState::new(),
            selected: None,
            entry_count: 0,
        }
    }

    /// Update with current log entries (call each frame)
    pub fn sync_entries(&mut self, entries: &[LogEntry], viewport_height: usize) {
        self.entry_count = entries.len();
        self.scroll.update_dimensions(entries.len(), viewport_height);

        // Clamp selection to valid range
        if let Some(idx) = self.selected {
            if idx >= entries.len() {
                self.selected = entries.len().checked_sub(1);
            }
        }
    }

    pub fn render(&self, f: &mut Frame, area: Rect, entries: &[LogEntry], ctx: &RenderContext) {
        let theme = ctx.theme;
        let focused = ctx.is_focused(self.id());

        let (start, end) = self.scroll.visible_range();
        let items: Vec<ListItem> = entries
            .iter()
            .enumerate()
            .skip(start)
            .take(end - start)
            .map(|(idx, entry)| {
                let style = if focused && self.selected == Some(idx) {
                    Style::default()
                        .fg(theme.background)
                        .bg(theme.selection)
                        .add_modifier(Modifier::BOLD)
                } else {
                    log_level_style(&entry.level, theme)
                };

                ListItem::new(format_log_entry(entry)).style(style)
            })
            .collect();

        // Show scroll/selection indicator in title
        let title = if self.selected.is_some() && focused {
            " System Logs [select] "
        } else if self.scroll.auto_follow {
            " System Logs "
        } else {
            " System Logs [scroll] "
        };

        let list = List::new(items).block(
            Block::default()
                .borders(Borders::ALL)
                .border_type(theme.border_type)
                .border_style(theme.border_style(focused))
                .title(title),
        );

        f.render_widget(list, area);
        render_scrollbar(f, area, &self.scroll, ScrollbarStyle::Minimal);
    }
}

impl Default for LogsPanel {
    fn default() -> Self {
        Self::new()
    }
}

impl Component for LogsPanel {
    fn id(&self) -> ComponentId {
        ComponentId::Logs
    }
}

impl Scrollable for LogsPanel {
    fn scroll_state(&self) -> &ScrollState {
        &self.scroll
    }

    fn scroll_state_mut(&mut self) -> &mut ScrollState {
        &mut self.scroll
    }
}

impl Selectable for LogsPanel {
    fn selected_index(&self) -> Option<usize> {
        self.selected
    }

    fn select(&mut self, index: usize) {
        self.selected = Some(index.min(self.entry_count.saturating_sub(1)));
    }

    fn item_count(&self) -> usize {
        self.entry_count
    }

    /// Override: selecting starts from last entry (most recent)
    fn select_next(&mut self) {
        match self.selected {
            Some(idx) if idx < self.entry_count.saturating_sub(1) => {
                self.selected = Some(idx + 1);
                self.scroll.ensure_visible(idx + 1);
            }
            None if self.entry_count > 0 => {
                self.selected = Some(self.entry_count - 1);
            }
            _ => {}
        }
    }

    /// Override: selecting starts from last entry (most recent)
    fn select_previous(&mut self) {
        match self.selected {
            Some(idx) if idx > 0 => {
                self.selected = Some(idx - 1);
                self.scroll.auto_follow = false;
                self.scroll.ensure_visible(idx - 1);
            }
            None if self.entry_count > 0 => {
                self.selected = Some(self.entry_count - 1);
            }
            _ => {}
        }
    }
}

impl Interactive for LogsPanel {
    fn handle_key(&mut self, key: KeyEvent) -> Handled {
        match key.code {
            KeyCode::Up | KeyCode::Char('k') => {
                self.select_previous();
                Handled::Yes
            }
            KeyCode::Down | KeyCode::Char('j') => {
                self.select_next();
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
            KeyCode::PageUp => {
                self.page_up();
                Handled::Yes
            }
            KeyCode::PageDown => {
                self.page_down();
                Handled::Yes
            }
            KeyCode::Esc => {
                // Clear selection if any, return to auto-follow
                if self.selected.is_some() {
                    self.selected = None;
                    self.scroll.auto_follow = true;
                    Handled::Yes
                } else {
                    Handled::No
                }
            }
            _ => Handled::No,
        }
    }

    fn focus_hint(&self) -> Option<&'static str> {
        Some("↑↓:select  Esc:follow")
    }
}

/// Format a log entry for display
///
/// Our own events are shown bare; anything RUST_LOG lets through from
/// dependencies (reqwest, hyper) is prefixed with its target.
fn format_log_entry(entry: &LogEntry) -> String {
    let source = if entry.target.starts_with(env!("CARGO_CRATE_NAME")) {
        String::new()
    } else {
        format!("{}: ", entry.target)
    };
    format!(
        "[{}] {:5} {}{}",
        entry.timestamp.format("%H:%M:%S"),
        entry.level.as_str(),
        source,
        entry.message
    )
}

/// Get color style for log level
fn log_level_style(level: &LogLevel, theme: &Theme) -> Style {
    match level {
        LogLevel::Error => Style::default()
            .fg(theme.log_error)
            .add_modifier(Modifier::BOLD),
        LogLevel::Warn => Style::default().fg(theme.log_warn),
        LogLevel::Info => Style::default().fg(theme.log_info),
        LogLevel::Debug | LogLevel::Trace => Style::default().fg(theme.log_debug),
    }
}
