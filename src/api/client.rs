//! HTTP client for the launches endpoint

use super::error::FetchError;
use super::filters::Filters;
use super::models::Launch;
use crate::config::{Config, VERSION};
use reqwest::Url;
use std::time::Duration;

/// Thin wrapper around a shared `reqwest::Client`
///
/// Cloning is cheap (the inner client is reference counted), so every fetch
/// task gets its own copy.
#[derive(Debug, Clone)]
pub struct LaunchClient {
    client: reqwest::Client,
    base_url: String,
    limit: u32,
}

impl LaunchClient {
    pub fn new(config: &Config) -> Result<Self, FetchError> {
        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.request_timeout_secs))
            .user_agent(format!("launchdeck/{}", VERSION))
            .build()
            .map_err(|e| FetchError::Network(format!("Failed to create HTTP client: {}", e)))?;

        Ok(Self {
            client,
            base_url: config.api_url.clone(),
            limit: config.limit,
        })
    }

    /// Full request URL for the given filters
    ///
    /// `limit` always comes first, then whichever filters are set.
    pub fn launches_url(&self, filters: &Filters) -> Result<Url, FetchError> {
        let base = format!("{}/launches", self.base_url.trim_end_matches('/'));
        let mut url = Url::parse(&base)
            .map_err(|e| FetchError::Network(format!("Invalid API URL {:?}: {}", base, e)))?;

        {
            let mut query = url.query_pairs_mut();
            query.append_pair("limit", &self.limit.to_string());
            for (key, value) in filters.query_params() {
                query.append_pair(key, &value);
            }
        }

        Ok(url)
    }

    /// GET the launches matching `filters`
    pub async fn fetch_launches(&self, filters: &Filters) -> Result<Vec<Launch>, FetchError> {
        let url = self.launches_url(filters)?;
        tracing::debug!("GET {}", url);

        let response = self
            .client
            .get(url)
            .send()
            .await
            .map_err(|e| FetchError::Network(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(FetchError::Status {
                status: status.as_u16(),
                body,
            });
        }

        response
            .json::<Vec<Launch>>()
            .await
            .map_err(|e| FetchError::Decode(e.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::filters::FilterChange;

    fn client(base: &str) -> LaunchClient {
        let config = Config {
            api_url: base.to_string(),
            ..Config::default()
        };
        LaunchClient::new(&config).unwrap()
    }

    #[test]
    fn url_without_filters_only_has_limit() {
        let url = client("https://api.spacexdata.com/v3")
            .launches_url(&Filters::default())
            .unwrap();
        assert_eq!(
            url.as_str(),
            "https://api.spacexdata.com/v3/launches?limit=100"
        );
    }

    #[test]
    fn url_appends_set_filters_in_order() {
        let filters = Filters::default()
            .merged(FilterChange::LaunchYear("2019".into()))
            .merged(FilterChange::LandSuccess(true))
            .merged(FilterChange::LaunchSuccess(false));

        let url = client("https://api.spacexdata.com/v3/")
            .launches_url(&filters)
            .unwrap();
        assert_eq!(
            url.as_str(),
            "https://api.spacexdata.com/v3/launches?limit=100&launch_success=false&land_success=true&launch_year=2019"
        );
    }

    #[test]
    fn invalid_base_url_is_an_error() {
        let err = client("not a url").launches_url(&Filters::default());
        assert!(matches!(err, Err(FetchError::Network(_))));
    }
}
