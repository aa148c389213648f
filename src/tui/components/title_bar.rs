// Title bar component
//
// Renders the page title with a fetch spinner and the active filters.

use crate::front_page::{FrontPage, TITLE};
use crate::tui::traits::RenderContext;
use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::Line,
    widgets::{Block, Borders, Paragraph},
    Frame,
};

/// Render the title bar at the top of the screen
pub fn render(f: &mut Frame, area: Rect, page: &FrontPage, ctx: &RenderContext) {
    let theme = ctx.theme;

    let loading = if page.loading {
        format!(" {} fetching", ctx.spinner_char())
    } else {
        String::new()
    };

    let title_text = if page.filters.is_unset() {
        format!(" 🚀 {}{}", TITLE, loading)
    } else {
        format!(
            " 🚀 {}{} ──── {}",
            TITLE,
            loading,
            page.filters.summary()
        )
    };

    let title = Paragraph::new(title_text)
        .style(Style::default().fg(theme.title).add_modifier(Modifier::BOLD))
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_type(theme.border_type)
                .border_style(Style::default().fg(theme.title))
                .title_top(Line::from(" ? ").right_aligned()),
        );

    f.render_widget(title, area);
}
