//! Server-side filter state
//!
//! Filters are applied by the endpoint through query parameters, never
//! locally. The state is replaced as a whole on every change: a change names
//! exactly one field and the rest is carried over untouched.

use std::fmt;

/// Years offered as launch-year tags on the front page
pub const LAUNCH_YEARS: [&str; 15] = [
    "2006", "2007", "2008", "2009", "2010", "2011", "2012", "2013", "2014", "2015", "2016", "2017",
    "2018", "2019", "2020",
];

/// Current query criteria
///
/// `None` / empty string means "unset": the parameter is not sent.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Filters {
    pub launch_success: Option<bool>,
    pub land_success: Option<bool>,
    pub launch_year: String,
}

/// A single filter mutation: which key, and its new value
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FilterChange {
    LaunchSuccess(bool),
    LandSuccess(bool),
    LaunchYear(String),
}

impl FilterChange {
    /// Name of the targeted filter key
    pub fn key(&self) -> &'static str {
        match self {
            FilterChange::LaunchSuccess(_) => "launchSuccess",
            FilterChange::LandSuccess(_) => "landSuccess",
            FilterChange::LaunchYear(_) => "launchYear",
        }
    }
}

impl fmt::Display for FilterChange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FilterChange::LaunchSuccess(v) | FilterChange::LandSuccess(v) => {
                write!(f, "{}={}", self.key(), v)
            }
            FilterChange::LaunchYear(v) => write!(f, "{}={}", self.key(), v),
        }
    }
}

impl Filters {
    /// Shallow merge: a copy of `self` with only the targeted key replaced
    pub fn merged(&self, change: FilterChange) -> Filters {
        let mut next = self.clone();
        match change {
            FilterChange::LaunchSuccess(v) => next.launch_success = Some(v),
            FilterChange::LandSuccess(v) => next.land_success = Some(v),
            FilterChange::LaunchYear(v) => next.launch_year = v,
        }
        next
    }

    /// Query parameters for the set fields, in request order
    pub fn query_params(&self) -> Vec<(&'static str, String)> {
        let mut params = Vec::with_capacity(3);

        if let Some(v) = self.launch_success {
            params.push(("launch_success", v.to_string()));
        }
        if let Some(v) = self.land_success {
            params.push(("land_success", v.to_string()));
        }
        if !self.launch_year.is_empty() {
            params.push(("launch_year", self.launch_year.clone()));
        }

        params
    }

    /// True when no filter is set
    pub fn is_unset(&self) -> bool {
        self.launch_success.is_none() && self.land_success.is_none() && self.launch_year.is_empty()
    }

    /// Compact one-line summary for the status bar and logs
    pub fn summary(&self) -> String {
        if self.is_unset() {
            return "none".to_string();
        }

        let mut parts = Vec::new();
        if !self.launch_year.is_empty() {
            parts.push(format!("year {}", self.launch_year));
        }
        if let Some(v) = self.launch_success {
            parts.push(format!("launch {}", bool_label(v)));
        }
        if let Some(v) = self.land_success {
            parts.push(format!("landing {}", bool_label(v)));
        }
        parts.join(" · ")
    }
}

/// "True" / "False", as shown on cards and filter buttons
pub fn bool_label(value: bool) -> &'static str {
    if value {
        "True"
    } else {
        "False"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn all_changes() -> Vec<FilterChange> {
        vec![
            FilterChange::LaunchSuccess(true),
            FilterChange::LaunchSuccess(false),
            FilterChange::LandSuccess(true),
            FilterChange::LandSuccess(false),
            FilterChange::LaunchYear("2014".into()),
            FilterChange::LaunchYear(String::new()),
        ]
    }

    fn sample_states() -> Vec<Filters> {
        vec![
            Filters::default(),
            Filters {
                launch_success: Some(true),
                land_success: None,
                launch_year: "2019".into(),
            },
            Filters {
                launch_success: Some(false),
                land_success: Some(true),
                launch_year: String::new(),
            },
        ]
    }

    #[test]
    fn merge_replaces_only_targeted_key() {
        for prev in sample_states() {
            for change in all_changes() {
                let next = prev.merged(change.clone());
                match change {
                    FilterChange::LaunchSuccess(v) => {
                        assert_eq!(next.launch_success, Some(v));
                        assert_eq!(next.land_success, prev.land_success);
                        assert_eq!(next.launch_year, prev.launch_year);
                    }
                    FilterChange::LandSuccess(v) => {
                        assert_eq!(next.land_success, Some(v));
                        assert_eq!(next.launch_success, prev.launch_success);
                        assert_eq!(next.launch_year, prev.launch_year);
                    }
                    FilterChange::LaunchYear(v) => {
                        assert_eq!(next.launch_year, v);
                        assert_eq!(next.launch_success, prev.launch_success);
                        assert_eq!(next.land_success, prev.land_success);
                    }
                }
            }
        }
    }

    #[test]
    fn unset_filters_send_no_params() {
        assert!(Filters::default().query_params().is_empty());
        assert!(Filters::default().is_unset());
    }

    #[test]
    fn params_follow_request_order() {
        let filters = Filters {
            launch_success: Some(false),
            land_success: Some(true),
            launch_year: "2015".into(),
        };

        assert_eq!(
            filters.query_params(),
            vec![
                ("launch_success", "false".to_string()),
                ("land_success", "true".to_string()),
                ("launch_year", "2015".to_string()),
            ]
        );
    }

    #[test]
    fn empty_year_is_not_sent() {
        let filters = Filters::default().merged(FilterChange::LandSuccess(false));
        assert_eq!(
            filters.query_params(),
            vec![("land_success", "false".to_string())]
        );
    }

    #[test]
    fn year_tags_cover_2006_to_2020() {
        assert_eq!(LAUNCH_YEARS.len(), 15);
        assert_eq!(LAUNCH_YEARS.first(), Some(&"2006"));
        assert_eq!(LAUNCH_YEARS.last(), Some(&"2020"));
    }

    #[test]
    fn summary_lists_set_fields() {
        let filters = Filters::default()
            .merged(FilterChange::LaunchYear("2019".into()))
            .merged(FilterChange::LandSuccess(true));
        assert_eq!(filters.summary(), "year 2019 · landing True");
        assert_eq!(Filters::default().summary(), "none");
    }
}
