// Views - screen-level rendering
//
// One screen: title, filters, cards, logs, status, with the help overlay
// and toast drawn on top. Panels sync their scroll state against the
// current content before drawing, so this takes `&mut App`.

use super::app::App;
use super::components::{help, status_bar, title_bar};
use super::layout::PageLayout;
use ratatui::style::{Style, Stylize};
use ratatui::text::Span;
use ratatui::widgets::{Block, Borders};
use ratatui::Frame;

/// Main UI render function - called on every frame
pub fn draw(f: &mut Frame, app: &mut App) {
    let bg_block = Block::default().style(Style::default().bg(app.theme.background));
    f.render_widget(bg_block, f.area());

    let layout = PageLayout::compute(f.area());

    // Sync scroll dimensions before taking the shared render context
    app.cards_panel
        .sync_cards(app.page.cards.len(), layout.cards.height);
    let entries = app.log_buffer.get_all();
    app.logs_panel
        .sync_entries(&entries, layout.logs.height.saturating_sub(2) as usize);

    let ctx = app.render_context();
    let page = &app.page;

    title_bar::render(f, layout.title, page, &ctx);

    let filters_block = Block::default()
        .borders(Borders::ALL)
        .border_type(ctx.theme.border_type)
        .border_style(Style::default().fg(ctx.theme.border))
        .title(Span::from(format!(" {} ", crate::front_page::FILTERS_HEADING)).bold());
    f.render_widget(filters_block, layout.filters);

    app.search.render(f, layout.search, &ctx);
    app.years.render(f, layout.years, &page.year_tags, &ctx);
    app.launch_filter
        .render(f, layout.launch, &page.launch_toggle, &ctx);
    app.land_filter
        .render(f, layout.landing, &page.land_toggle, &ctx);

    app.cards_panel.render(f, layout.cards, page, &ctx);
    app.logs_panel.render(f, layout.logs, &entries, &ctx);

    let info = status_bar::StatusInfo {
        uptime: app.uptime(),
        error_count: app.log_buffer.error_count(),
        hint: app.focus_hint(),
    };
    status_bar::render(f, layout.status, page, &info, &ctx);

    if app.show_help {
        help::render(f, ctx.theme);
    }

    if let Some(ref toast) = app.toast {
        toast.render(f, f.area(), ctx.theme);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::fixtures::mock_launches;
    use crate::api::{ApiState, FilterChange, Filters};
    use crate::config::Config;
    use crate::front_page::FrontPage;
    use crate::logging::LogBuffer;
    use crate::tui::traits::Interactive;
    use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
    use ratatui::backend::TestBackend;
    use ratatui::Terminal;

    fn render_to_string(app: &mut App, width: u16, height: u16) -> String {
        let backend = TestBackend::new(width, height);
        let mut terminal = Terminal::new(backend).unwrap();
        terminal.draw(|f| draw(f, app)).unwrap();

        let buffer = terminal.backend().buffer();
        let mut out = String::new();
        for y in 0..buffer.area.height {
            for x in 0..buffer.area.width {
                out.push_str(buffer[(x, y)].symbol());
            }
            out.push('\n');
        }
        out
    }

    fn app_with(state: &ApiState, search: &str) -> App {
        let mut app = App::new(&Config::default(), LogBuffer::new());
        for c in search.chars() {
            app.search
                .handle_key(KeyEvent::new(KeyCode::Char(c), KeyModifiers::NONE));
        }
        let page = FrontPage::build(state, app.search_query(), false, &app.fallback_patch_url);
        app.set_page(page);
        app
    }

    #[test]
    fn renders_headings_and_both_cards() {
        let state = ApiState {
            launch_data: mock_launches(),
            filters: Filters::default(),
        };
        let mut app = app_with(&state, "");
        let screen = render_to_string(&mut app, 120, 45);

        assert!(screen.contains("SpaceX Launch Programs"));
        assert!(screen.contains("Filters"));
        assert!(screen.contains("Name Search"));
        assert!(screen.contains("Launch Year"));
        assert!(screen.contains("Successful Launch"));
        assert!(screen.contains("Successful Landing"));
        for year in ["2006", "2013", "2020"] {
            assert!(screen.contains(year), "missing year tag {}", year);
        }

        assert!(screen.contains("Mission 1 #1"));
        assert!(screen.contains("Mission IDs: ABC123"));
        assert!(screen.contains("Launch Success: True"));
        assert!(screen.contains("Successful Landing : True"));
        assert!(screen.contains("Mission 2 #2"));
        assert!(screen.contains("Launch Success: False"));
        assert!(screen.contains("Successful Landing : False"));
    }

    #[test]
    fn search_hides_non_matching_cards() {
        let state = ApiState {
            launch_data: mock_launches(),
            filters: Filters::default(),
        };
        let mut app = app_with(&state, "Mission 2");
        let screen = render_to_string(&mut app, 120, 45);

        assert!(screen.contains("Mission 2 #2"));
        assert!(!screen.contains("Mission 1 #1"));
        assert!(screen.contains("Launches (1 of 2)"));
    }

    #[test]
    fn empty_state_and_active_filters_in_title() {
        let state = ApiState {
            launch_data: Vec::new(),
            filters: Filters::default().merged(FilterChange::LaunchYear("2019".into())),
        };
        let mut app = app_with(&state, "");
        let screen = render_to_string(&mut app, 120, 45);

        assert!(screen.contains("No launches"));
        assert!(screen.contains("year 2019"));
    }

    #[test]
    fn narrow_terminal_still_renders_cards() {
        let state = ApiState {
            launch_data: mock_launches(),
            filters: Filters::default(),
        };
        let mut app = app_with(&state, "");
        let screen = render_to_string(&mut app, 70, 50);

        assert!(screen.contains("Name Search"));
        assert!(screen.contains("Mission 1 #1"));
    }

    #[test]
    fn tiny_terminals_render_without_panicking() {
        let state = ApiState {
            launch_data: mock_launches(),
            filters: Filters::default(),
        };
        for (width, height) in [(1, 1), (10, 4), (40, 12), (200, 3), (3, 200)] {
            let mut app = app_with(&state, "");
            render_to_string(&mut app, width, height);
        }
    }

    #[test]
    fn help_overlay_draws_on_top() {
        let mut app = app_with(&ApiState::default(), "");
        app.show_help = true;
        let screen = render_to_string(&mut app, 120, 45);
        assert!(screen.contains("Press ? or Esc to close"));
    }
}
