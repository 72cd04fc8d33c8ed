//! Runtime configuration for the round, prediction and monitor pages.
//!
//! Every field has a default, so a partial (or absent) source still yields a
//! usable configuration. Sources:
//! - web: JSON in the `data-config` attribute of the `#main` mount element,
//!   written by the page template;
//! - desktop: `config.json` in the per-user configuration directory.
//!
//! Relative URLs are resolved against `base_url`, or the current page on the
//! web when `base_url` is unset.

use dioxus::logger::tracing::{info, warn};
use reqwest::Url;
use serde::{Deserialize, Serialize};
use time::Duration;

use super::{error::UiError, platform};

/// Two minutes, the decision window of one round.
pub const DEFAULT_ROUND_INTERVAL_MS: u64 = 2 * 60 * 1000;

/// Collective-risk action set (EMUs contributed to the public account).
pub const DEFAULT_VALID_ACTIONS: [i64; 3] = [0, 2, 4];

const DEFAULT_BASE_URL: &str = "http://127.0.0.1:8000/experiments/";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub base_url: Option<String>,
    pub data_url: String,
    pub round_action_url: String,
    pub prediction_action_url: String,
    pub round_interval_ms: u64,
    pub valid_actions: Vec<i64>,
    pub csrf_token: Option<String>,
    pub game_end_notice: Option<String>,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            base_url: None,
            data_url: "monitor/ajax/".to_string(),
            round_action_url: "round/".to_string(),
            prediction_action_url: "prediction/".to_string(),
            round_interval_ms: DEFAULT_ROUND_INTERVAL_MS,
            valid_actions: DEFAULT_VALID_ACTIONS.to_vec(),
            csrf_token: None,
            game_end_notice: None,
        }
    }
}

impl AppConfig {
    pub fn from_json(raw: &str) -> Result<Self, UiError> {
        serde_json::from_str(raw).map_err(|err| UiError::Config(err.to_string()))
    }

    /// Load from the platform source, falling back to defaults on any problem.
    pub fn load() -> Self {
        let platform = platform::Platform::current().as_str();
        match platform::read_config_source().and_then(|raw| raw.map(|r| Self::from_json(&r)).transpose()) {
            Ok(Some(config)) => {
                info!(platform, "configuration loaded");
                config
            }
            Ok(None) => {
                info!(platform, "no configuration source; using defaults");
                Self::default()
            }
            Err(err) => {
                warn!(platform, %err, "configuration rejected; using defaults");
                Self::default()
            }
        }
    }

    pub fn round_interval(&self) -> Duration {
        Duration::milliseconds(self.round_interval_ms.min(i64::MAX as u64) as i64)
    }

    /// Absolute URL for `path`, resolved against the configured base.
    pub fn resolve(&self, path: &str) -> Result<String, UiError> {
        let base = self
            .base_url
            .clone()
            .or_else(platform::page_href)
            .unwrap_or_else(|| DEFAULT_BASE_URL.to_string());
        resolve_against(&base, path)
    }
}

fn resolve_against(base: &str, path: &str) -> Result<String, UiError> {
    let base = Url::parse(base).map_err(|err| UiError::Config(format!("base url {base}: {err}")))?;
    base.join(path)
        .map(String::from)
        .map_err(|err| UiError::Config(format!("url {path}: {err}")))
}
