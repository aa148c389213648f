// Responsive layout for the front page
//
// Single source of truth for width thresholds and panel sizes - no magic
// numbers scattered in render code.

use crate::api::LAUNCH_YEARS;
use ratatui::layout::{Constraint, Direction, Layout, Rect};

/// Rendered width of one year tag, padding included
pub const YEAR_TAG_WIDTH: u16 = 6;
/// Gap between year tags on the same row
pub const YEAR_TAG_GAP: u16 = 1;

/// Width of the filters column beside the cards
const FILTERS_COLUMN_WIDTH: u16 = 36;

const TITLE_HEIGHT: u16 = 3;
const STATUS_HEIGHT: u16 = 2;
const SEARCH_HEIGHT: u16 = 3;
const TOGGLE_HEIGHT: u16 = 3;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Breakpoint {
    /// < 60 cols: Split pane, minimal terminal
    Compact,
    /// 60-99 cols: Half-screen
    Normal,
    /// 100-139 cols: Full terminal
    Wide,
    /// 140+ cols: Ultrawide monitor
    UltraWide,
}

impl Breakpoint {
    pub fn from_width(width: u16) -> Self {
        match width {
            0..=59 => Breakpoint::Compact,
            60..=99 => Breakpoint::Normal,
            100..=139 => Breakpoint::Wide,
            _ => Breakpoint::UltraWide,
        }
    }

    /// Check if at least this breakpoint (inclusive)
    pub fn at_least(&self, min: Breakpoint) -> bool {
        self.ordinal() >= min.ordinal()
    }

    fn ordinal(&self) -> u8 {
        match self {
            Breakpoint::Compact => 0,
            Breakpoint::Normal => 1,
            Breakpoint::Wide => 2,
            Breakpoint::UltraWide => 3,
        }
    }
}

/// Screen areas for one frame
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageLayout {
    pub title: Rect,
    /// Outer "Filters" block; the four areas below sit inside it
    pub filters: Rect,
    pub search: Rect,
    pub years: Rect,
    pub launch: Rect,
    pub landing: Rect,
    pub cards: Rect,
    pub logs: Rect,
    pub status: Rect,
}

impl PageLayout {
    /// Split the frame: filters beside the cards on wide terminals,
    /// stacked above them otherwise
    pub fn compute(area: Rect) -> Self {
        let bp = Breakpoint::from_width(area.width);
        let logs_height = if bp.at_least(Breakpoint::Wide) { 8 } else { 6 };

        let rows = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(TITLE_HEIGHT),
                Constraint::Min(8),
                Constraint::Length(logs_height),
                Constraint::Length(STATUS_HEIGHT),
            ])
            .split(area);
        let (title, body, logs, status) = (rows[0], rows[1], rows[2], rows[3]);

        let (filters, cards) = if bp.at_least(Breakpoint::Wide) {
            let cols = Layout::default()
                .direction(Direction::Horizontal)
                .constraints([
                    Constraint::Length(FILTERS_COLUMN_WIDTH),
                    Constraint::Min(20),
                ])
                .split(body);
            (cols[0], cols[1])
        } else {
            // Inner width is the frame minus the Filters block border
            let needed = filters_height(body.width.saturating_sub(2));
            let split = Layout::default()
                .direction(Direction::Vertical)
                .constraints([Constraint::Length(needed), Constraint::Min(3)])
                .split(body);
            (split[0], split[1])
        };

        let inner = Rect {
            x: filters.x + 1,
            y: filters.y + 1,
            width: filters.width.saturating_sub(2),
            height: filters.height.saturating_sub(2),
        };
        let sections = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(SEARCH_HEIGHT),
                Constraint::Length(year_rows(inner.width) + 2),
                Constraint::Length(TOGGLE_HEIGHT),
                Constraint::Length(TOGGLE_HEIGHT),
                Constraint::Min(0),
            ])
            .split(inner);

        Self {
            title,
            filters,
            search: sections[0],
            years: sections[1],
            launch: sections[2],
            landing: sections[3],
            cards,
            logs,
            status,
        }
    }
}

/// How many year tags fit on one row of the given block width
pub fn tags_per_row(block_width: u16) -> usize {
    let inner = block_width.saturating_sub(2);
    (((inner + YEAR_TAG_GAP) / (YEAR_TAG_WIDTH + YEAR_TAG_GAP)) as usize).max(1)
}

/// Rows needed to lay out every year tag
pub fn year_rows(block_width: u16) -> u16 {
    LAUNCH_YEARS.len().div_ceil(tags_per_row(block_width)) as u16
}

/// Height of the whole Filters block, borders included
fn filters_height(inner_width: u16) -> u16 {
    2 + SEARCH_HEIGHT + year_rows(inner_width) + 2 + TOGGLE_HEIGHT * 2
}
