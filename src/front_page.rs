//! Front page view model
//!
//! Everything the launch list displays, computed from the provider's state
//! plus the view-local search string. The TUI and the headless `list`
//! command render from this; neither reads provider state directly.
//!
//! Only the search string is applied here. Year and success filters were
//! already applied by the endpoint through the fetch's query parameters.

use crate::api::{bool_label, use_api, ApiState, ContextError, Filters, Launch, LAUNCH_YEARS};
use reqwest::Url;

pub const TITLE: &str = "SpaceX Launch Programs";
pub const FILTERS_HEADING: &str = "Filters";
pub const SEARCH_HEADING: &str = "Name Search";
pub const SEARCH_PLACEHOLDER: &str = "Search";
pub const YEAR_HEADING: &str = "Launch Year";
pub const LAUNCH_HEADING: &str = "Successful Launch";
pub const LANDING_HEADING: &str = "Successful Landing";

/// Renderable state of the whole page
#[derive(Debug, Clone, PartialEq)]
pub struct FrontPage {
    pub search: String,
    pub filters: Filters,
    pub year_tags: Vec<YearTag>,
    pub launch_toggle: BoolToggle,
    pub land_toggle: BoolToggle,
    pub cards: Vec<LaunchCard>,
    /// Size of the fetched result set before the search is applied
    pub fetched: usize,
    pub loading: bool,
}

/// One launch-year button
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct YearTag {
    pub year: &'static str,
    pub active: bool,
}

/// A True/False button pair bound to one tri-state filter
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BoolToggle {
    pub heading: &'static str,
    pub value: Option<bool>,
}

impl BoolToggle {
    pub fn is_active(&self, button: bool) -> bool {
        self.value == Some(button)
    }
}

/// Mission patch reference for a card
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PatchImage {
    pub src: String,
    pub alt: String,
    /// True when `src` is the fallback image
    pub fallback: bool,
}

/// One launch card
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LaunchCard {
    pub flight_number: u32,
    pub heading: String,
    pub mission_ids: String,
    pub launch_year: String,
    pub launch_success: bool,
    pub landing_success: bool,
    pub patch: PatchImage,
}

impl LaunchCard {
    pub fn from_launch(launch: &Launch, fallback_patch_url: &str) -> Self {
        Self {
            flight_number: launch.flight_number,
            heading: format!("{} #{}", launch.mission_name, launch.flight_number),
            mission_ids: launch.mission_id.to_string(),
            launch_year: launch.launch_year.clone(),
            launch_success: launch.launch_succeeded(),
            landing_success: launch.landed(),
            patch: resolve_patch(launch, fallback_patch_url),
        }
    }

    /// Body lines below the heading, as displayed
    pub fn lines(&self) -> [String; 4] {
        [
            format!("Mission IDs: {}", self.mission_ids),
            format!("Launch Year: {}", self.launch_year),
            format!("Launch Success: {}", bool_label(self.launch_success)),
            format!("Successful Landing : {}", bool_label(self.landing_success)),
        ]
    }

    /// Heading and body as one string
    pub fn text(&self) -> String {
        let mut text = self.heading.clone();
        for line in self.lines() {
            text.push('\n');
            text.push_str(&line);
        }
        text
    }
}

impl FrontPage {
    /// Build from an explicit provider state
    pub fn build(
        state: &ApiState,
        search: &str,
        loading: bool,
        fallback_patch_url: &str,
    ) -> Self {
        let cards = filter_launches(&state.launch_data, search)
            .into_iter()
            .map(|launch| LaunchCard::from_launch(launch, fallback_patch_url))
            .collect();

        let year_tags = LAUNCH_YEARS
            .iter()
            .map(|&year| YearTag {
                year,
                active: state.filters.launch_year == year,
            })
            .collect();

        Self {
            search: search.to_string(),
            filters: state.filters.clone(),
            year_tags,
            launch_toggle: BoolToggle {
                heading: LAUNCH_HEADING,
                value: state.filters.launch_success,
            },
            land_toggle: BoolToggle {
                heading: LANDING_HEADING,
                value: state.filters.land_success,
            },
            cards,
            fetched: state.launch_data.len(),
            loading,
        }
    }

    /// Build from the enclosing provider
    ///
    /// Must run inside `ApiProvider::provide`; anywhere else this fails
    /// with [`ContextError::OutsideProvider`].
    pub fn from_context(search: &str, fallback_patch_url: &str) -> Result<Self, ContextError> {
        let api = use_api()?;
        Ok(Self::build(
            &api.snapshot(),
            search,
            api.is_loading(),
            fallback_patch_url,
        ))
    }
}

/// Case-insensitive substring match on the mission name
///
/// An empty search matches everything.
pub fn matches_search(launch: &Launch, search: &str) -> bool {
    search.is_empty()
        || launch
            .mission_name
            .to_lowercase()
            .contains(&search.to_lowercase())
}

/// Records matching `search`, in fetch order
pub fn filter_launches<'a>(launches: &'a [Launch], search: &str) -> Vec<&'a Launch> {
    launches
        .iter()
        .filter(|launch| matches_search(launch, search))
        .collect()
}

/// Patch URL for a launch, or the fallback when it can't be loaded
///
/// Loading fails when the link is absent, blank, or not an absolute
/// http(s) URL.
fn resolve_patch(launch: &Launch, fallback_patch_url: &str) -> PatchImage {
    let usable = launch
        .links
        .mission_patch_small
        .as_deref()
        .map(str::trim)
        .filter(|src| {
            Url::parse(src)
                .map(|url| matches!(url.scheme(), "http" | "https"))
                .unwrap_or(false)
        });

    let (src, fallback) = match usable {
        Some(src) => (src.to_string(), false),
        None => (fallback_patch_url.to_string(), true),
    };

    PatchImage {
        src,
        alt: launch.mission_name.clone(),
        fallback,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::fixtures::{bare_launch, mock_launches, PATCH_URL};
    use crate::api::{ApiProvider, FilterChange};
    use crate::config::{Config, DEFAULT_FALLBACK_PATCH_URL};

    const FALLBACK: &str = DEFAULT_FALLBACK_PATCH_URL;

    fn state_with(launch_data: Vec<Launch>) -> ApiState {
        ApiState {
            launch_data,
            filters: Filters::default(),
        }
    }

    #[test]
    fn renders_both_fixture_cards() {
        let page = FrontPage::build(&state_with(mock_launches()), "", false, FALLBACK);
        assert_eq!(page.cards.len(), 2);

        let first = &page.cards[0];
        assert_eq!(first.heading, "Mission 1 #1");
        assert_eq!(
            first.lines(),
            [
                "Mission IDs: ABC123".to_string(),
                "Launch Year: 2019".to_string(),
                "Launch Success: True".to_string(),
                "Successful Landing : True".to_string(),
            ]
        );
        assert_eq!(first.patch.src, PATCH_URL);
        assert_eq!(first.patch.alt, "Mission 1");
        assert!(!first.patch.fallback);

        let second = page.cards[1].text();
        assert!(second.contains("Mission 2 #2"));
        assert!(second.contains("Mission IDs: XYZ789"));
        assert!(second.contains("Launch Year: 2020"));
        assert!(second.contains("Launch Success: False"));
        assert!(second.contains("Successful Landing : False"));
    }

    #[test]
    fn search_narrows_cards() {
        let state = state_with(mock_launches());
        assert_eq!(FrontPage::build(&state, "", false, FALLBACK).cards.len(), 2);

        let page = FrontPage::build(&state, "Mission 2", false, FALLBACK);
        assert_eq!(page.cards.len(), 1);
        assert_eq!(page.cards[0].heading, "Mission 2 #2");
        assert_eq!(page.fetched, 2);
    }

    #[test]
    fn search_is_case_insensitive_substring() {
        let launches = vec![
            bare_launch(1, "FalconSat"),
            bare_launch(2, "DemoSat"),
            bare_launch(3, "Trailblazer"),
            bare_launch(4, "RatSat"),
        ];

        for (search, expected) in [
            ("sat", 3),
            ("SAT", 3),
            ("falcon", 1),
            ("ailb", 1),
            ("starlink", 0),
            ("", 4),
        ] {
            let expected_by_rule = launches
                .iter()
                .filter(|l| {
                    search.is_empty() || l.mission_name.to_lowercase().contains(&search.to_lowercase())
                })
                .count();
            let shown = filter_launches(&launches, search).len();
            assert_eq!(shown, expected, "search {:?}", search);
            assert_eq!(shown, expected_by_rule, "search {:?}", search);
        }
    }

    #[test]
    fn missing_landing_renders_false() {
        let page = FrontPage::build(&state_with(vec![bare_launch(7, "NoCore")]), "", false, FALLBACK);
        assert_eq!(page.cards[0].lines()[3], "Successful Landing : False");
    }

    #[test]
    fn unusable_patch_falls_back() {
        let mut launch = bare_launch(1, "Patchless");
        assert!(LaunchCard::from_launch(&launch, FALLBACK).patch.fallback);

        launch.links.mission_patch_small = Some("   ".into());
        assert!(LaunchCard::from_launch(&launch, FALLBACK).patch.fallback);

        launch.links.mission_patch_small = Some("ftp://example.com/patch.png".into());
        let card = LaunchCard::from_launch(&launch, FALLBACK);
        assert!(card.patch.fallback);
        assert_eq!(card.patch.src, FALLBACK);

        launch.links.mission_patch_small = Some("https://example.com/p.png".into());
        let card = LaunchCard::from_launch(&launch, FALLBACK);
        assert!(!card.patch.fallback);
        assert_eq!(card.patch.src, "https://example.com/p.png");
    }

    #[test]
    fn year_tags_start_inactive() {
        let page = FrontPage::build(&ApiState::default(), "", false, FALLBACK);
        assert_eq!(page.year_tags.len(), 15);
        assert!(page.year_tags.iter().all(|tag| !tag.active));
        assert!(!page.launch_toggle.is_active(true));
        assert!(!page.launch_toggle.is_active(false));
    }

    #[test]
    fn active_controls_follow_filters() {
        let state = ApiState {
            launch_data: Vec::new(),
            filters: Filters::default()
                .merged(FilterChange::LaunchYear("2019".into()))
                .merged(FilterChange::LandSuccess(false)),
        };
        let page = FrontPage::build(&state, "", false, FALLBACK);

        let active: Vec<_> = page
            .year_tags
            .iter()
            .filter(|tag| tag.active)
            .map(|tag| tag.year)
            .collect();
        assert_eq!(active, vec!["2019"]);
        assert!(page.land_toggle.is_active(false));
        assert!(!page.land_toggle.is_active(true));
        assert_eq!(page.launch_toggle.value, None);
    }

    #[test]
    fn from_context_requires_provider() {
        let err = FrontPage::from_context("", FALLBACK).unwrap_err();
        assert_eq!(err.to_string(), "useApi must be used within an ApiProvider");
    }

    #[tokio::test]
    async fn from_context_reads_provider_state() {
        let (provider, _events) = ApiProvider::new(&Config::default()).unwrap();
        let page = provider
            .provide(|| FrontPage::from_context("", FALLBACK))
            .unwrap();
        assert!(page.cards.is_empty());
        assert!(page.filters.is_unset());
    }
}
