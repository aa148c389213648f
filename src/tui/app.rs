// App state for the TUI
//
// App owns everything that is local to the terminal front end: focus,
// the components, the toast, and the most recent front page. Provider
// state is never stored here; the run loop rebuilds the page from the
// provider every frame and hands it in with `set_page`.
//
// Key handling is pure: it mutates App and returns an `AppAction` for the
// run loop to carry out (filter changes, clipboard).

use super::components::{BoolFilter, CardsPanel, LogsPanel, SearchBox, Toast, YearTags};
use super::theme::{Theme, ThemeKind};
use super::traits::{ComponentId, Handled, Interactive, RenderContext};
use crate::api::{FilterChange, ProviderEvent};
use crate::config::Config;
use crate::front_page::FrontPage;
use crate::logging::LogBuffer;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use std::time::{Duration, Instant};

/// Side effect requested by a key press
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AppAction {
    None,
    Filter(FilterChange),
    Copy(String),
    Quit,
}

pub struct App {
    pub focus: ComponentId,
    pub search: SearchBox,
    pub years: YearTags,
    pub launch_filter: BoolFilter,
    pub land_filter: BoolFilter,
    pub cards_panel: CardsPanel,
    pub logs_panel: LogsPanel,

    pub toast: Option<Toast>,
    pub show_help: bool,
    pub should_quit: bool,

    pub theme: Theme,
    pub log_buffer: LogBuffer,
    pub fallback_patch_url: String,

    /// Last page built from the provider
    pub page: FrontPage,

    start_time: Instant,
    animation_frame: usize,
}

impl App {
    pub fn new(config: &Config, log_buffer: LogBuffer) -> Self {
        let page = FrontPage::build(
            &Default::default(),
            "",
            false,
            &config.fallback_patch_url,
        );

        Self {
            focus: ComponentId::Search,
            search: SearchBox::new(),
            years: YearTags::new(),
            launch_filter: BoolFilter::launch(),
            land_filter: BoolFilter::landing(),
            cards_panel: CardsPanel::new(),
            logs_panel: LogsPanel::new(),
            toast: None,
            show_help: false,
            should_quit: false,
            theme: ThemeKind::from_name(&config.theme).theme(),
            log_buffer,
            fallback_patch_url: config.fallback_patch_url.clone(),
            page,
            start_time: Instant::now(),
            animation_frame: 0,
        }
    }

    /// Current search string
    pub fn search_query(&self) -> &str {
        self.search.query()
    }

    pub fn set_page(&mut self, page: FrontPage) {
        self.page = page;
    }

    pub fn render_context(&self) -> RenderContext<'_> {
        RenderContext::new(&self.theme, self.focus, self.animation_frame)
    }

    pub fn uptime(&self) -> Duration {
        self.start_time.elapsed()
    }

    /// Advance animation frame and drop an expired toast
    pub fn tick(&mut self) {
        self.animation_frame = self.animation_frame.wrapping_add(1);
        self.clear_expired_toast();
    }

    pub fn clear_expired_toast(&mut self) {
        if self.toast.as_ref().is_some_and(Toast::is_expired) {
            self.toast = None;
        }
    }

    pub fn show_toast(&mut self, message: impl Into<String>) {
        self.toast = Some(Toast::new(message));
    }

    /// React to a resolved fetch
    pub fn on_provider_event(&mut self, event: ProviderEvent) {
        match event {
            ProviderEvent::Loaded { .. } => self.cards_panel.reset(),
            ProviderEvent::Failed { .. } => {
                // Details are in the logs panel
                self.show_toast("✗ Fetch failed, see logs");
            }
        }
    }

    /// Key hint for the focused component
    pub fn focus_hint(&self) -> Option<&'static str> {
        match self.focus {
            ComponentId::Search => self.search.focus_hint(),
            ComponentId::Years => self.years.focus_hint(),
            ComponentId::LaunchFilter => self.launch_filter.focus_hint(),
            ComponentId::LandFilter => self.land_filter.focus_hint(),
            ComponentId::Cards => self.cards_panel.focus_hint(),
            ComponentId::Logs => self.logs_panel.focus_hint(),
        }
    }

    /// Layered dispatch: Help → Global → Focused component
    pub fn handle_key(&mut self, key: KeyEvent) -> AppAction {
        if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
            self.should_quit = true;
            return AppAction::Quit;
        }

        // Help captures all input while open
        if self.show_help {
            if matches!(
                key.code,
                KeyCode::Char('?') | KeyCode::Esc | KeyCode::Char('q')
            ) {
                self.show_help = false;
            }
            return AppAction::None;
        }

        match key.code {
            KeyCode::Tab => {
                self.focus = self.focus.next_focus();
                return AppAction::None;
            }
            KeyCode::BackTab => {
                self.focus = self.focus.prev_focus();
                return AppAction::None;
            }
            _ => {}
        }

        // Search owns every printable key while focused
        if self.focus == ComponentId::Search {
            if self.search.handle_key(key).was_handled() {
                return AppAction::None;
            }
            if key.code == KeyCode::Esc {
                self.focus = ComponentId::Cards;
            }
            return AppAction::None;
        }

        match key.code {
            KeyCode::Char('q') => {
                self.should_quit = true;
                return AppAction::Quit;
            }
            KeyCode::Char('?') => {
                self.show_help = true;
                return AppAction::None;
            }
            KeyCode::Char('/') => {
                self.focus = ComponentId::Search;
                return AppAction::None;
            }
            _ => {}
        }

        self.dispatch_to_focused(key)
    }

    fn dispatch_to_focused(&mut self, key: KeyEvent) -> AppAction {
        let (handled, change) = match self.focus {
            ComponentId::Years => (self.years.handle_key(key), self.years.take_change()),
            ComponentId::LaunchFilter => (
                self.launch_filter.handle_key(key),
                self.launch_filter.take_change(),
            ),
            ComponentId::LandFilter => (
                self.land_filter.handle_key(key),
                self.land_filter.take_change(),
            ),
            ComponentId::Cards => {
                if key.code == KeyCode::Char('y') {
                    return self.copy_selected_patch();
                }
                (self.cards_panel.handle_key(key), None)
            }
            ComponentId::Logs => (self.logs_panel.handle_key(key), None),
            ComponentId::Search => (Handled::No, None),
        };

        match change {
            Some(change) => AppAction::Filter(change),
            None => {
                if handled == Handled::No {
                    tracing::trace!(?key, focus = ?self.focus, "Unhandled key");
                }
                AppAction::None
            }
        }
    }

    fn copy_selected_patch(&mut self) -> AppAction {
        match self.cards_panel.selected_card(&self.page) {
            Some(card) => AppAction::Copy(card.patch.src.clone()),
            None => {
                self.show_toast("No launch selected");
                AppAction::None
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::fixtures::{mock_launches, PATCH_URL};
    use crate::api::ApiState;

    fn app() -> App {
        App::new(&Config::default(), LogBuffer::new())
    }

    fn press(app: &mut App, code: KeyCode) -> AppAction {
        app.handle_key(KeyEvent::new(code, KeyModifiers::NONE))
    }

    fn type_text(app: &mut App, text: &str) {
        for c in text.chars() {
            press(app, KeyCode::Char(c));
        }
    }

    fn loaded_page(app: &App) -> FrontPage {
        let state = ApiState {
            launch_data: mock_launches(),
            ..ApiState::default()
        };
        FrontPage::build(&state, app.search_query(), false, &app.fallback_patch_url)
    }

    #[test]
    fn starts_in_search_and_q_is_text() {
        let mut app = app();
        assert_eq!(app.focus, ComponentId::Search);

        type_text(&mut app, "q?/");
        assert_eq!(app.search_query(), "q?/");
        assert!(!app.should_quit);
        assert!(!app.show_help);
    }

    #[test]
    fn esc_leaves_search_then_q_quits() {
        let mut app = app();
        press(&mut app, KeyCode::Esc);
        assert_eq!(app.focus, ComponentId::Cards);
        assert_eq!(press(&mut app, KeyCode::Char('q')), AppAction::Quit);
        assert!(app.should_quit);
    }

    #[test]
    fn ctrl_c_quits_from_search() {
        let mut app = app();
        let action = app.handle_key(KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL));
        assert_eq!(action, AppAction::Quit);
        assert!(app.search_query().is_empty());
    }

    #[test]
    fn tab_cycles_focus_and_slash_returns_to_search() {
        let mut app = app();
        press(&mut app, KeyCode::Tab);
        assert_eq!(app.focus, ComponentId::Years);
        press(&mut app, KeyCode::BackTab);
        press(&mut app, KeyCode::BackTab);
        assert_eq!(app.focus, ComponentId::Logs);

        press(&mut app, KeyCode::Char('/'));
        assert_eq!(app.focus, ComponentId::Search);
    }

    #[test]
    fn year_and_bool_groups_emit_filter_changes() {
        let mut app = app();
        press(&mut app, KeyCode::Tab);
        press(&mut app, KeyCode::End);
        assert_eq!(
            press(&mut app, KeyCode::Enter),
            AppAction::Filter(FilterChange::LaunchYear("2020".into()))
        );

        press(&mut app, KeyCode::Tab);
        assert_eq!(
            press(&mut app, KeyCode::Char('t')),
            AppAction::Filter(FilterChange::LaunchSuccess(true))
        );

        press(&mut app, KeyCode::Tab);
        press(&mut app, KeyCode::Right);
        assert_eq!(
            press(&mut app, KeyCode::Char(' ')),
            AppAction::Filter(FilterChange::LandSuccess(false))
        );
    }

    #[test]
    fn help_swallows_keys_until_closed() {
        let mut app = app();
        app.focus = ComponentId::Cards;
        press(&mut app, KeyCode::Char('?'));
        assert!(app.show_help);

        press(&mut app, KeyCode::Tab);
        assert_eq!(app.focus, ComponentId::Cards);

        assert_eq!(press(&mut app, KeyCode::Char('q')), AppAction::None);
        assert!(!app.show_help);
        assert!(!app.should_quit);
    }

    #[test]
    fn y_copies_selected_patch() {
        let mut app = app();
        app.focus = ComponentId::Cards;

        assert_eq!(press(&mut app, KeyCode::Char('y')), AppAction::None);
        assert!(app.toast.is_some());

        let page = loaded_page(&app);
        app.set_page(page);
        app.cards_panel.sync_cards(app.page.cards.len(), 30);
        assert_eq!(
            press(&mut app, KeyCode::Char('y')),
            AppAction::Copy(PATCH_URL.to_string())
        );
    }

    #[test]
    fn failed_fetch_shows_toast() {
        let mut app = app();
        app.on_provider_event(ProviderEvent::Failed {
            message: "boom".into(),
        });
        assert!(app.toast.is_some());
    }
}
