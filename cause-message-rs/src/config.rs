// cause-message-rs/src/config.rs
// Environment-driven configuration for the build completed message.

use std::env;

use tracing::warn;

use crate::error::{CauseMessageError, Result};
use crate::host::RootUrlProvider;
use crate::selection::DownstreamSearch;

pub const ENV_GERRIT_TRIGGER_ENABLED: &str = "BFA_GERRIT_TRIGGER_ENABLED";
pub const ENV_ROOT_URL: &str = "BFA_ROOT_URL";
pub const ENV_DOWNSTREAM_SEARCH: &str = "BFA_DOWNSTREAM_SEARCH";

/// Configuration flags for the Gerrit message extension.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CauseMessageConfig {
    /// Gate checked before any message is built.
    pub gerrit_trigger_enabled: bool,
    /// Absolute base URL of the build host.
    pub root_url: Option<String>,
    pub downstream_search: DownstreamSearch,
}

impl CauseMessageConfig {
    /// Construct configuration from environment variables.
    ///
    /// Never panics; unparseable values are logged and replaced by defaults:
    /// - BFA_GERRIT_TRIGGER_ENABLED: "1", "true", "yes", "on" (case-insensitive) => enabled
    /// - BFA_ROOT_URL: trimmed, empty => unresolved
    /// - BFA_DOWNSTREAM_SEARCH: "first-child" (default) or "all-children"
    pub fn from_env() -> Self {
        let gerrit_trigger_enabled = match env::var(ENV_GERRIT_TRIGGER_ENABLED) {
            Ok(val) => parse_bool(&val).unwrap_or_else(|| {
                warn!(var = ENV_GERRIT_TRIGGER_ENABLED, value = %val, "Invalid boolean, using false");
                false
            }),
            Err(_) => false,
        };

        let downstream_search = match env::var(ENV_DOWNSTREAM_SEARCH) {
            Ok(val) => val.parse::<DownstreamSearch>().unwrap_or_else(|err| {
                warn!(var = ENV_DOWNSTREAM_SEARCH, error = %err, "Using default downstream search");
                DownstreamSearch::default()
            }),
            Err(_) => DownstreamSearch::default(),
        };

        Self {
            gerrit_trigger_enabled,
            root_url: root_url_from_env(),
            downstream_search,
        }
    }

    /// Like [`CauseMessageConfig::from_env`], but rejects unparseable values.
    pub fn try_from_env() -> Result<Self> {
        let gerrit_trigger_enabled = match env::var(ENV_GERRIT_TRIGGER_ENABLED) {
            Ok(val) => parse_bool(&val).ok_or_else(|| {
                CauseMessageError::InvalidConfig(format!("{ENV_GERRIT_TRIGGER_ENABLED}={val}"))
            })?,
            Err(_) => false,
        };

        let downstream_search = match env::var(ENV_DOWNSTREAM_SEARCH) {
            Ok(val) => val
                .parse::<DownstreamSearch>()
                .map_err(CauseMessageError::InvalidConfig)?,
            Err(_) => DownstreamSearch::default(),
        };

        Ok(Self {
            gerrit_trigger_enabled,
            root_url: root_url_from_env(),
            downstream_search,
        })
    }
}

impl RootUrlProvider for CauseMessageConfig {
    fn root_url(&self) -> Option<String> {
        self.root_url.clone()
    }
}

fn root_url_from_env() -> Option<String> {
    env::var(ENV_ROOT_URL)
        .ok()
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}

fn parse_bool(raw: &str) -> Option<bool> {
    match raw.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Some(true),
        "0" | "false" | "no" | "off" | "" => Some(false),
        _ => None,
    }
}
