// Components module - the pieces of the front page
//
// - Title bar: page title, fetch spinner, active filters
// - Filters: search box, year tags, True/False button pairs
// - Cards panel: one card per launch
// - Logs panel: captured log entries (fetch errors land here)
// - Status bar, toast and help overlay

pub mod bool_filter;
pub mod cards_panel;
pub mod formatters;
pub mod help;
pub mod logs_panel;
pub mod scrollbar;
pub mod search_box;
pub mod status_bar;
pub mod title_bar;
pub mod toast;
pub mod year_tags;

pub use bool_filter::BoolFilter;
pub use cards_panel::CardsPanel;
pub use logs_panel::LogsPanel;
pub use search_box::SearchBox;
pub use toast::Toast;
pub use year_tags::YearTags;
