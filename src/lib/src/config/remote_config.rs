use serde::{Deserialize, Serialize};
use std::env;

use crate::constants::{
    DEFAULT_API_URL, DEFAULT_DIFF_URL, DEFAULT_LOCAL_DIFF_URL, DEFAULT_PAGE_SIZE,
};

/// Endpoints and page size for one viewing session. Constructed once and
/// passed explicitly to the clients; there is no ambient shared HTTP state.
#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct RemoteConfig {
    /// Base URL of the hosted repository API.
    pub api_url: String,
    /// Token service issuing bearer tokens for the repository API. `None`
    /// means the session runs anonymously from the start.
    pub token_url: Option<String>,
    /// Diff computation endpoint, selectable between the remote deployment
    /// and a local one.
    pub diff_url: String,
    pub page_size: usize,
}

impl Default for RemoteConfig {
    fn default() -> RemoteConfig {
        RemoteConfig {
            api_url: DEFAULT_API_URL.to_string(),
            token_url: None,
            diff_url: DEFAULT_DIFF_URL.to_string(),
            page_size: DEFAULT_PAGE_SIZE,
        }
    }
}

impl RemoteConfig {
    /// Defaults overridden from the environment:
    /// `MUNITIME_API_URL`, `MUNITIME_TOKEN_URL`, `MUNIDIFF_URL`, and
    /// `MUNIDIFF_LOCAL=1` to target the local diff deployment.
    pub fn from_env() -> RemoteConfig {
        let mut config = RemoteConfig::default();
        if let Ok(api_url) = env::var("MUNITIME_API_URL") {
            config.api_url = api_url;
        }
        if let Ok(token_url) = env::var("MUNITIME_TOKEN_URL") {
            config.token_url = Some(token_url);
        }
        if let Ok(diff_url) = env::var("MUNIDIFF_URL") {
            config.diff_url = diff_url;
        } else if env::var("MUNIDIFF_LOCAL").is_ok_and(|v| v == "1") {
            config.diff_url = DEFAULT_LOCAL_DIFF_URL.to_string();
        }
        config
    }

    pub fn with_local_diff(mut self) -> RemoteConfig {
        self.diff_url = DEFAULT_LOCAL_DIFF_URL.to_string();
        self
    }
}
