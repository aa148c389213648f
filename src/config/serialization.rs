//! Config serialization to TOML
//!
//! Single source of truth for config file format.

use super::Config;

impl Config {
    /// Render the config as a commented TOML file
    pub fn to_toml(&self) -> String {
        format!(
            r#"# launchdeck configuration

# Base URL of the launches API (requests go to <api_url>/launches)
api_url = "{api_url}"

# Maximum number of launches requested per fetch
limit = {limit}

# Per-request timeout in seconds
request_timeout_secs = {timeout}

# Patch image shown when a launch has no usable mission patch
fallback_patch_url = "{fallback}"

# Theme: dark, light
theme = "{theme}"

# Logging configuration (RUST_LOG env var overrides)
[logging]
level = "{log_level}"
# File logging (in addition to TUI buffer or stderr)
file_enabled = {log_file_enabled}
file_dir = "{log_file_dir}"
file_rotation = "{log_file_rotation}"  # hourly, daily, never
file_prefix = "{log_file_prefix}"
"#,
            api_url = self.api_url,
            limit = self.limit,
            timeout = self.request_timeout_secs,
            fallback = self.fallback_patch_url,
            theme = self.theme,
            log_level = self.logging.level,
            log_file_enabled = self.logging.file_enabled,
            log_file_dir = self.logging.file_dir.display().to_string().replace('\\', "/"),
            log_file_rotation = self.logging.file_rotation.as_str(),
            log_file_prefix = self.logging.file_prefix,
        )
    }
}
