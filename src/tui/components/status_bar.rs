// Status bar component
//
// Bottom line: result counts, uptime, logged errors and the focused
// component's key hints.

use super::formatters::format_uptime;
use crate::front_page::FrontPage;
use crate::tui::layout::Breakpoint;
use crate::tui::traits::{ComponentId, RenderContext};
use ratatui::{
    layout::Rect,
    style::Style,
    widgets::{Block, Borders, Paragraph},
    Frame,
};
use std::time::Duration;

/// What the status bar needs beyond the page itself
pub struct StatusInfo {
    pub uptime: Duration,
    pub error_count: usize,
    pub hint: Option<&'static str>,
}

/// Render the status bar
///
/// Narrow terminals drop the labels and the key hints.
pub fn render(f: &mut Frame, area: Rect, page: &FrontPage, info: &StatusInfo, ctx: &RenderContext) {
    f.render_widget(
        Paragraph::new(status_text(page, info, ctx.focus, area.width))
            .style(Style::default().fg(ctx.theme.status_bar))
            .block(Block::default().borders(Borders::TOP)),
        area,
    );
}

fn status_text(page: &FrontPage, info: &StatusInfo, focus: ComponentId, width: u16) -> String {
    let bp = Breakpoint::from_width(width);
    let shown = page.cards.len();

    let errors = if info.error_count > 0 {
        format!(" │ ✗ {}", info.error_count)
    } else {
        String::new()
    };

    if !bp.at_least(Breakpoint::Wide) {
        return format!(
            " {} │ 🚀 {}/{}{} │ ?:help",
            format_uptime(info.uptime),
            shown,
            page.fetched,
            errors
        );
    }

    let hint = info
        .hint
        .map(|h| format!(" │ {}: {}", focus.label(), h))
        .unwrap_or_default();

    format!(
        " {} │ 🚀 {} of {} launches │ filters: {}{}{} │ Tab:focus  ?:help  q:quit",
        format_uptime(info.uptime),
        shown,
        page.fetched,
        page.filters.summary(),
        errors,
        hint
    )
}
