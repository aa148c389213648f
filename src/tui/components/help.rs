//! Help overlay
//!
//! Key reference drawn as a centered modal over the page.

use crate::tui::theme::Theme;
use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span, Text},
    widgets::{Block, Borders, Clear, Paragraph},
    Frame,
};

/// Calculate centered rect for the overlay
fn centered_rect(width: u16, height: u16, area: Rect) -> Rect {
    let x = area.x + (area.width.saturating_sub(width)) / 2;
    let y = area.y + (area.height.saturating_sub(height)) / 2;
    Rect::new(x, y, width.min(area.width), height.min(area.height))
}

pub fn render(f: &mut Frame, theme: &Theme) {
    let key_style = Style::default().fg(theme.highlight);
    let desc_style = Style::default().fg(theme.foreground);
    let header_style = Style::default()
        .fg(theme.heading)
        .add_modifier(Modifier::BOLD);

    // "    key         description"
    let kb = |key: &str, desc: &str| -> Line<'static> {
        Line::from(vec![
            Span::raw("    "),
            Span::styled(format!("{:<12}", key), key_style),
            Span::styled(desc.to_string(), desc_style),
        ])
    };

    let content = Text::from(vec![
        Line::raw(""),
        Line::from(Span::styled("  Focus", header_style)),
        kb("Tab", "Next panel"),
        kb("Shift+Tab", "Previous panel"),
        kb("/", "Jump to search"),
        Line::raw(""),
        Line::from(Span::styled("  Filters", header_style)),
        kb("←/→", "Move between buttons"),
        kb("Enter/Space", "Apply filter"),
        kb("t / f", "Pick True / False"),
        Line::raw(""),
        Line::from(Span::styled("  Search", header_style)),
        kb("type", "Filter by mission name"),
        kb("Backspace", "Delete a character"),
        kb("Esc", "Leave search"),
        Line::raw(""),
        Line::from(Span::styled("  Launches / Logs", header_style)),
        kb("↑/↓, j/k", "Select"),
        kb("PgUp/PgDn", "Page"),
        kb("Home/End", "Jump to start/end"),
        kb("y", "Copy mission patch URL"),
        kb("Esc", "Logs: follow newest"),
        Line::raw(""),
        Line::from(Span::styled("  General", header_style)),
        kb("?", "Toggle this help"),
        kb("q", "Quit (outside search)"),
        kb("Ctrl+C", "Quit"),
    ]);

    let width = 46;
    let height = content.lines.len() as u16 + 3;
    let area = centered_rect(width, height, f.area());

    // Clear the area behind the modal
    f.render_widget(Clear, area);

    let paragraph = Paragraph::new(content)
        .style(Style::default().bg(theme.background))
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(theme.highlight))
                .border_type(theme.border_type)
                .title(" Help ")
                .title_bottom(Line::from(" Press ? or Esc to close ").centered()),
        );

    f.render_widget(paragraph, area);
}
