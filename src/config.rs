//! Panel configuration parsed from key/value sources.
//!
//! SYSTEM CONTEXT
//! ==============
//! The browser build reads `<meta name="KEY" content="...">` tags emitted by
//! whatever serves the page; native builds and tests read the environment or
//! an explicit lookup. Missing or malformed values fall back to defaults.

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

pub const DEFAULT_API_BASE: &str = "/api";
pub const DEFAULT_TOAST_DURATION_MS: u32 = 3500;

pub const API_BASE_KEY: &str = "CONTRACT_PANEL_API_BASE";
pub const TOAST_DURATION_KEY: &str = "CONTRACT_PANEL_TOAST_MS";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PanelConfig {
    /// Prefix for REST endpoints, without a trailing slash.
    pub api_base: String,
    /// How long a toast stays on screen before auto-dismissal.
    pub toast_duration_ms: u32,
}

impl Default for PanelConfig {
    fn default() -> Self {
        Self { api_base: DEFAULT_API_BASE.to_owned(), toast_duration_ms: DEFAULT_TOAST_DURATION_MS }
    }
}

impl PanelConfig {
    /// Build config from an arbitrary key lookup.
    ///
    /// Optional:
    /// - `CONTRACT_PANEL_API_BASE`: default `/api`; `/` serves endpoints from the origin root
    /// - `CONTRACT_PANEL_TOAST_MS`: default 3500
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let api_base = parse_api_base(lookup(API_BASE_KEY).as_deref());
        let toast_duration_ms = parse_duration_ms(lookup(TOAST_DURATION_KEY).as_deref(), DEFAULT_TOAST_DURATION_MS);
        Self { api_base, toast_duration_ms }
    }

    /// Build config from process environment variables.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build config from `<meta>` tags in the current document head.
    #[cfg(feature = "hydrate")]
    pub fn from_document() -> Self {
        Self::from_lookup(meta_content)
    }
}

#[cfg(feature = "hydrate")]
fn meta_content(key: &str) -> Option<String> {
    let document = web_sys::window()?.document()?;
    let selector = format!("meta[name=\"{key}\"]");
    document.query_selector(&selector).ok().flatten()?.get_attribute("content")
}

fn parse_api_base(raw: Option<&str>) -> String {
    match raw.map(str::trim) {
        Some(value) if !value.is_empty() => value.trim_end_matches('/').to_owned(),
        _ => DEFAULT_API_BASE.to_owned(),
    }
}

fn parse_duration_ms(raw: Option<&str>, default: u32) -> u32 {
    let Some(value) = raw else {
        return default;
    };
    match value.trim().parse::<u32>() {
        Ok(ms) if ms > 0 => ms,
        _ => {
            log::warn!("ignoring invalid {TOAST_DURATION_KEY} value {value:?}; using {default}");
            default
        }
    }
}
