// API module - launch records, filters, and the shared data provider
//
// - models: launch record types decoded from the endpoint
// - filters: server-side filter state and its query parameters
// - client: reqwest wrapper for GET /launches
// - provider: shared state store, fetch lifecycle, use_api() accessor

pub mod client;
pub mod error;
pub mod filters;
pub mod models;
pub mod provider;

#[cfg(test)]
pub(crate) mod fixtures;

pub use error::ContextError;
pub use filters::{bool_label, FilterChange, Filters, LAUNCH_YEARS};
pub use models::Launch;
pub use provider::{use_api, ApiProvider, ApiState, ProviderEvent};
