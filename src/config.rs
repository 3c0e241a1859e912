//! Widget Configuration
//!
//! Read once at startup from `<meta name=... content=...>` tags in the host
//! page. Missing or unrecognised values fall back to defaults.

use log::LevelFilter;

use crate::logger;

pub const API_ENDPOINT_META: &str = "todo-api-endpoint";
pub const BACKEND_META: &str = "todo-backend";
pub const LOG_LEVEL_META: &str = "todo-log-level";

pub const DEFAULT_API_ENDPOINT: &str = "api";

/// Delay between clicking update and the button coming back
pub const UPDATE_REENABLE_DELAY_MS: u32 = 500;

/// Where API calls go
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum BackendKind {
    /// POST to the configured endpoint
    #[default]
    Http,
    /// In-process backend, nothing leaves the page
    Memory,
}

impl BackendKind {
    pub fn parse(s: &str) -> Option<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "http" => Some(BackendKind::Http),
            "memory" | "mock" => Some(BackendKind::Memory),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct WidgetConfig {
    pub api_endpoint: String,
    pub backend: BackendKind,
    pub log_level: LevelFilter,
}

impl Default for WidgetConfig {
    fn default() -> Self {
        Self {
            api_endpoint: DEFAULT_API_ENDPOINT.to_string(),
            backend: BackendKind::default(),
            log_level: logger::default_level(),
        }
    }
}

impl WidgetConfig {
    /// Read configuration from the current document's meta tags
    pub fn from_document() -> Self {
        let document = web_sys::window().and_then(|w| w.document());
        Self::from_lookup(|name| {
            let document = document.as_ref()?;
            let selector = format!("meta[name=\"{}\"]", name);
            document
                .query_selector(&selector)
                .ok()
                .flatten()
                .and_then(|meta| meta.get_attribute("content"))
        })
    }

    /// Build from any name -> value lookup
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let defaults = Self::default();

        let api_endpoint = lookup(API_ENDPOINT_META)
            .map(|v| v.trim().to_string())
            .filter(|v| !v.is_empty())
            .unwrap_or(defaults.api_endpoint);
        let backend = lookup(BACKEND_META)
            .and_then(|v| BackendKind::parse(&v))
            .unwrap_or(defaults.backend);
        let log_level = lookup(LOG_LEVEL_META)
            .and_then(|v| v.trim().parse::<LevelFilter>().ok())
            .unwrap_or(defaults.log_level);

        Self { api_endpoint, backend, log_level }
    }
}
